//! Rule chains and the built-in chain catalog.
//!
//! The catalog order is significant: the driver tries chains strictly in this
//! order, so when two chains can produce the same matching password the one
//! listed first is reported. Cheap, high-probability chains come first.
use std::fmt;

use crate::rule::{
    APPEND_DIGIT as AD, APPEND_LOWER, APPEND_SPECIAL as AS, APPEND_UPPER, CAPITALIZE_ALL,
    CAPITALIZE_FIRST as CF, DELETE_FIRST, DELETE_LAST, DUPLICATE, IDENTITY, INSERT_DIGIT,
    INSERT_LOWER, INSERT_SPECIAL, INSERT_UPPER, LEET_A, LEET_E, LEET_O, LEET_S,
    LOWERCASE_ALL as LA, NCAPITALIZE, PREPEND_DIGIT as PD, PREPEND_LOWER, PREPEND_SPECIAL,
    PREPEND_UPPER, REFLECT_BACK, REFLECT_FRONT, REVERSE, Rule, TOGGLE_CASE,
};

/// An ordered sequence of rules. Each stage's output set feeds the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleChain {
    rules: &'static [Rule],
}

impl RuleChain {
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

impl fmt::Display for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.rules.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            f.write_str(r.name())?;
        }
        Ok(())
    }
}

/// Built-in chains in priority order.
pub static RULE_CHAINS: &[RuleChain] = &[
    // baseline
    RuleChain::new(&[IDENTITY]),
    // case normalisation
    RuleChain::new(&[LA]),
    RuleChain::new(&[CAPITALIZE_ALL]),
    RuleChain::new(&[CF]),
    RuleChain::new(&[NCAPITALIZE]),
    RuleChain::new(&[TOGGLE_CASE]),
    // single digit suffix / prefix
    RuleChain::new(&[LA, AD]),
    RuleChain::new(&[CF, AD]),
    RuleChain::new(&[LA, PD]),
    // multi digit suffix / prefix (years, repeats)
    RuleChain::new(&[LA, AD, AD]),
    RuleChain::new(&[CF, AD, AD]),
    RuleChain::new(&[LA, PD, PD]),
    RuleChain::new(&[CF, PD, PD]),
    RuleChain::new(&[LA, PD, AD]),
    RuleChain::new(&[CF, PD, AD]),
    RuleChain::new(&[LA, AD, AD, AD]),
    RuleChain::new(&[CF, AD, AD, AD]),
    RuleChain::new(&[LA, PD, PD, PD]),
    RuleChain::new(&[CF, PD, PD, PD]),
    // reversed + digits
    RuleChain::new(&[REVERSE, AD]),
    RuleChain::new(&[REVERSE, AD, AD]),
    // deleted last + digits
    RuleChain::new(&[DELETE_LAST, AD]),
    RuleChain::new(&[DELETE_LAST, AD, AD]),
    // special + digit
    RuleChain::new(&[CF, AS, AD]),
    RuleChain::new(&[LA, AS, AD]),
    RuleChain::new(&[CF, AD, AS]),
    RuleChain::new(&[LA, AD, AS]),
    // symbol suffix / prefix
    RuleChain::new(&[LA, AS]),
    RuleChain::new(&[CF, AS]),
    RuleChain::new(&[LA, PREPEND_SPECIAL]),
    // leetspeak
    RuleChain::new(&[LA, LEET_A]),
    RuleChain::new(&[LA, LEET_E]),
    RuleChain::new(&[LA, LEET_O]),
    RuleChain::new(&[LA, LEET_S]),
    RuleChain::new(&[LEET_A, LA]),
    RuleChain::new(&[LEET_S, LA]),
    RuleChain::new(&[LEET_E, LA]),
    RuleChain::new(&[LEET_O, LA]),
    RuleChain::new(&[LA, LEET_A, LEET_S, LEET_E, LEET_O]),
    RuleChain::new(&[LEET_A, LEET_S, LEET_E, LEET_O, LA]),
    // case + leet + digit
    RuleChain::new(&[CF, LEET_A, AD]),
    RuleChain::new(&[CF, LEET_S, AD]),
    RuleChain::new(&[CF, LEET_E, AD]),
    RuleChain::new(&[CF, LEET_O, AD]),
    // structural
    RuleChain::new(&[DELETE_FIRST]),
    RuleChain::new(&[DELETE_LAST]),
    RuleChain::new(&[REVERSE]),
    // duplication and reflection
    RuleChain::new(&[DUPLICATE]),
    RuleChain::new(&[DUPLICATE, REVERSE]),
    RuleChain::new(&[DUPLICATE, AD]),
    RuleChain::new(&[REFLECT_FRONT]),
    RuleChain::new(&[REFLECT_BACK]),
    RuleChain::new(&[REFLECT_BACK, AD]),
    RuleChain::new(&[REFLECT_FRONT, AD]),
    // low probability, kept last
    RuleChain::new(&[TOGGLE_CASE, AD]),
    RuleChain::new(&[NCAPITALIZE, AS]),
    RuleChain::new(&[LA, APPEND_LOWER]),
    RuleChain::new(&[LA, APPEND_UPPER]),
    RuleChain::new(&[CF, APPEND_LOWER]),
    RuleChain::new(&[CF, APPEND_UPPER]),
    RuleChain::new(&[LA, INSERT_DIGIT]),
    RuleChain::new(&[LA, INSERT_SPECIAL]),
    RuleChain::new(&[CF, INSERT_DIGIT]),
    RuleChain::new(&[CF, INSERT_SPECIAL]),
    RuleChain::new(&[LA, INSERT_LOWER]),
    RuleChain::new(&[LA, INSERT_UPPER]),
    RuleChain::new(&[CF, INSERT_LOWER]),
    RuleChain::new(&[CF, INSERT_UPPER]),
    RuleChain::new(&[LA, PREPEND_LOWER]),
    RuleChain::new(&[LA, PREPEND_UPPER]),
    RuleChain::new(&[CF, PREPEND_LOWER]),
    RuleChain::new(&[CF, PREPEND_UPPER]),
];

/// Index of the first catalog chain whose rendered form equals `rendered`,
/// e.g. `"CAPITALIZE_FIRST + APPEND_DIGIT"`.
#[cfg(test)]
pub(crate) fn position(chains: &[RuleChain], rendered: &str) -> Option<usize> {
    chains.iter().position(|c| c.to_string() == rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_shape() {
        assert_eq!(RULE_CHAINS.len(), 72);
        assert_eq!(RULE_CHAINS[0].rules(), &[IDENTITY]);
        assert!(RULE_CHAINS.iter().all(|c| !c.rules().is_empty()));
    }

    #[test]
    fn catalog_has_no_duplicate_chains() {
        let set: HashSet<&RuleChain> = RULE_CHAINS.iter().collect();
        assert_eq!(set.len(), RULE_CHAINS.len());
    }

    #[test]
    fn capitalized_digit_suffix_follows_lowercase_one() {
        let lower = position(RULE_CHAINS, "LOWERCASE_ALL + APPEND_DIGIT").unwrap();
        let cap = position(RULE_CHAINS, "CAPITALIZE_FIRST + APPEND_DIGIT").unwrap();
        assert_eq!((lower, cap), (6, 7));
    }

    #[test]
    fn exotic_chains_come_last() {
        let last = RULE_CHAINS.last().unwrap();
        assert_eq!(last.to_string(), "CAPITALIZE_FIRST + PREPEND_UPPER");
        let insert = position(RULE_CHAINS, "LOWERCASE_ALL + INSERT_DIGIT").unwrap();
        let reverse = position(RULE_CHAINS, "REVERSE").unwrap();
        assert!(reverse < insert);
    }
}
