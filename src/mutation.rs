//! Mutation engine: applies rules and rule chains to a single word.
//!
//! Deduplication happens once per rule and once per chain stage, always
//! keeping the first occurrence, so the iteration order of the returned sets
//! is reproducible and defines which variant the driver tries first.
use indexmap::IndexSet;

use crate::chain::RuleChain;
use crate::config::MutationConfig;
use crate::rule::Rule;

/// Ordered, duplicate-free collection of variants.
pub type Variants = IndexSet<String>;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mutator {
    config: MutationConfig,
}

impl Mutator {
    pub fn new(config: MutationConfig) -> Self {
        Self { config }
    }

    /// Run every operation of `rule` over `word`. The working list is only
    /// deduplicated at the end, matching the rule boundary.
    pub fn apply_rule(&self, word: &str, rule: &Rule) -> Variants {
        let mut working = vec![word.to_string()];
        for op in rule.operations() {
            let mut next = Vec::with_capacity(working.len());
            for w in &working {
                op.apply_into(w, self.config.replace_mode, &mut next);
            }
            working = next
                .into_iter()
                .filter_map(|w| self.config.fit(w))
                .collect();
        }
        working.into_iter().collect()
    }

    /// Feed `word` through each rule of the chain. Only the last stage is
    /// returned; intermediate variants are discarded.
    pub fn apply_chain(&self, word: &str, chain: &RuleChain) -> Variants {
        let mut current = Variants::new();
        current.insert(word.to_string());
        for rule in chain.rules() {
            let mut next = Variants::with_capacity(current.len());
            for w in &current {
                next.extend(self.apply_rule(w, rule));
            }
            current = next;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RULE_CHAINS;
    use crate::charset::DIGITS;
    use crate::config::{LengthPolicy, ReplaceMode};
    use crate::operation::Operation;
    use crate::rule::{
        APPEND_DIGIT, CAPITALIZE_FIRST, DELETE_LAST, IDENTITY, INSERT_DIGIT, LEET_A, LEET_S,
        LOWERCASE_ALL, NCAPITALIZE,
    };
    use std::collections::HashSet;

    fn as_vec(v: &Variants) -> Vec<&str> {
        v.iter().map(String::as_str).collect()
    }

    fn assert_distinct(v: &Variants) {
        let set: HashSet<&String> = v.iter().collect();
        assert_eq!(set.len(), v.len());
    }

    #[test]
    fn identity_rule_is_singleton() {
        let m = Mutator::default();
        for w in ["", "admin", "P@ss w0rd"] {
            assert_eq!(as_vec(&m.apply_rule(w, &IDENTITY)), vec![w]);
        }
    }

    #[test]
    fn empty_rule_returns_word() {
        const EMPTY: Rule = Rule::new("EMPTY", &[]);
        let m = Mutator::default();
        assert_eq!(as_vec(&m.apply_rule("abc", &EMPTY)), vec!["abc"]);
    }

    #[test]
    fn multi_operation_rule_dedups_at_the_end() {
        const LOWER_INSERT_TRIM: Rule = Rule::new(
            "LOWER_INSERT_TRIM",
            &[
                Operation::LowercaseAll,
                Operation::InsertCharset(DIGITS),
                Operation::DeleteLast,
            ],
        );
        let m = Mutator::default();
        let out = m.apply_rule("AB", &LOWER_INSERT_TRIM);
        assert_distinct(&out);
        assert_eq!(out.first().map(String::as_str), Some("0a"));
        assert!(out.contains("ab"));
    }

    #[test]
    fn partial_rule_can_be_empty() {
        let m = Mutator::default();
        assert!(m.apply_rule("", &NCAPITALIZE).is_empty());
        assert!(
            m.apply_chain("", &RuleChain::new(&[DELETE_LAST, APPEND_DIGIT]))
                .is_empty()
        );
    }

    #[test]
    fn chain_returns_only_final_stage() {
        let m = Mutator::default();
        let out = m.apply_chain("admin", &RuleChain::new(&[CAPITALIZE_FIRST, APPEND_DIGIT]));
        assert_eq!(out.len(), 10);
        assert_eq!(out.get_index(1).map(String::as_str), Some("Admin1"));
        assert!(!out.contains("Admin"));
        assert!(!out.contains("admin"));
    }

    #[test]
    fn chain_dedups_between_stages() {
        let m = Mutator::default();
        // "aa" has two occurrences; LEET_A then LEET_A again rejoins identical strings
        let out = m.apply_chain("aa", &RuleChain::new(&[LEET_A, LEET_A]));
        assert_eq!(as_vec(&out), vec!["aa", "@a", "a@", "@@"]);
        assert_distinct(&out);
    }

    #[test]
    fn leet_and_lowercase_commute_on_symbols() {
        let m = Mutator::default();
        let leet_first = m.apply_chain("Sass", &RuleChain::new(&[LEET_S, LOWERCASE_ALL]));
        let lower_first = m.apply_chain("Sass", &RuleChain::new(&[LOWERCASE_ALL, LEET_S]));
        assert_eq!(as_vec(&leet_first), vec!["sass", "$ass", "sa$s", "sas$"]);
        assert_eq!(as_vec(&lower_first), vec!["sass", "$ass", "sa$s", "sas$"]);
        let m = Mutator::new(MutationConfig {
            replace_mode: ReplaceMode::Global,
            ..Default::default()
        });
        let out = m.apply_chain("Sass", &RuleChain::new(&[LEET_S, LOWERCASE_ALL]));
        assert_eq!(as_vec(&out), vec!["sass", "$a$$"]);
    }

    #[test]
    fn insert_rule_collapses_duplicates() {
        let m = Mutator::default();
        let out = m.apply_rule("11", &INSERT_DIGIT);
        assert!(out.len() < 3 * DIGITS.len());
        assert_distinct(&out);
        assert_eq!(out.first().map(String::as_str), Some("011"));
    }

    #[test]
    fn whole_catalog_never_yields_duplicates() {
        let m = Mutator::default();
        for chain in RULE_CHAINS {
            let out = m.apply_chain("Password", chain);
            assert_distinct(&out);
            assert!(!out.is_empty(), "{chain}");
        }
    }

    #[test]
    fn length_cap_truncates_after_each_operation() {
        let m = Mutator::new(MutationConfig {
            max_length: Some(5),
            length_policy: LengthPolicy::Truncate,
            ..Default::default()
        });
        let out = m.apply_chain("admin", &RuleChain::new(&[APPEND_DIGIT]));
        assert_eq!(as_vec(&out), vec!["admin"]);
    }

    #[test]
    fn length_cap_rejects_over_long_variants() {
        let m = Mutator::new(MutationConfig {
            max_length: Some(6),
            length_policy: LengthPolicy::Reject,
            ..Default::default()
        });
        let out = m.apply_chain("admin", &RuleChain::new(&[APPEND_DIGIT, APPEND_DIGIT]));
        assert!(out.is_empty());
        let out = m.apply_chain("admin", &RuleChain::new(&[APPEND_DIGIT]));
        assert_eq!(out.len(), 10);
    }
}
