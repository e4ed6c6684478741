//! Named rules: short fixed sequences of operations.
//!
//! The built-in rules are plain constants so they can be referenced from the
//! static chain catalog in [`crate::chain`].
use std::fmt;

use crate::charset::{DIGITS, LOWERCASE, SPECIALS, UPPERCASE};
use crate::operation::Operation;

/// An immutable named sequence of operations, applied left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    name: &'static str,
    operations: &'static [Operation],
}

impl Rule {
    pub const fn new(name: &'static str, operations: &'static [Operation]) -> Self {
        Self { name, operations }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn operations(&self) -> &'static [Operation] {
        self.operations
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub const IDENTITY: Rule = Rule::new("IDENTITY", &[Operation::Identity]);

pub const LOWERCASE_ALL: Rule = Rule::new("LOWERCASE_ALL", &[Operation::LowercaseAll]);
pub const CAPITALIZE_FIRST: Rule = Rule::new("CAPITALIZE_FIRST", &[Operation::CapitalizeFirst]);
pub const CAPITALIZE_ALL: Rule = Rule::new("CAPITALIZE_ALL", &[Operation::CapitalizeAll]);
pub const NCAPITALIZE: Rule = Rule::new("NCAPITALIZE", &[Operation::NCapitalize]);
pub const TOGGLE_CASE: Rule = Rule::new("TOGGLE_CASE", &[Operation::ToggleCase]);

pub const REVERSE: Rule = Rule::new("REVERSE", &[Operation::Reverse]);
pub const DUPLICATE: Rule = Rule::new("DUPLICATE", &[Operation::Duplicate]);
pub const REFLECT_FRONT: Rule = Rule::new("REFLECT_FRONT", &[Operation::ReflectFront]);
pub const REFLECT_BACK: Rule = Rule::new("REFLECT_BACK", &[Operation::ReflectBack]);

pub const DELETE_FIRST: Rule = Rule::new("DELETE_FIRST", &[Operation::DeleteFirst]);
pub const DELETE_LAST: Rule = Rule::new("DELETE_LAST", &[Operation::DeleteLast]);

pub const APPEND_LOWER: Rule = Rule::new("APPEND_LOWER", &[Operation::AppendCharset(LOWERCASE)]);
pub const APPEND_UPPER: Rule = Rule::new("APPEND_UPPER", &[Operation::AppendCharset(UPPERCASE)]);
pub const APPEND_SPECIAL: Rule =
    Rule::new("APPEND_SPECIAL", &[Operation::AppendCharset(SPECIALS)]);
pub const APPEND_DIGIT: Rule = Rule::new("APPEND_DIGIT", &[Operation::AppendCharset(DIGITS)]);

pub const PREPEND_LOWER: Rule =
    Rule::new("PREPEND_LOWER", &[Operation::PrependCharset(LOWERCASE)]);
pub const PREPEND_UPPER: Rule =
    Rule::new("PREPEND_UPPER", &[Operation::PrependCharset(UPPERCASE)]);
pub const PREPEND_SPECIAL: Rule =
    Rule::new("PREPEND_SPECIAL", &[Operation::PrependCharset(SPECIALS)]);
pub const PREPEND_DIGIT: Rule = Rule::new("PREPEND_DIGIT", &[Operation::PrependCharset(DIGITS)]);

pub const INSERT_LOWER: Rule = Rule::new("INSERT_LOWER", &[Operation::InsertCharset(LOWERCASE)]);
pub const INSERT_UPPER: Rule = Rule::new("INSERT_UPPER", &[Operation::InsertCharset(UPPERCASE)]);
pub const INSERT_DIGIT: Rule = Rule::new("INSERT_DIGIT", &[Operation::InsertCharset(DIGITS)]);
pub const INSERT_SPECIAL: Rule =
    Rule::new("INSERT_SPECIAL", &[Operation::InsertCharset(SPECIALS)]);

// Leetspeak
pub const LEET_A: Rule = Rule::new("LEET_A", &[Operation::Replace { from: 'a', to: '@' }]);
pub const LEET_O: Rule = Rule::new("LEET_O", &[Operation::Replace { from: 'o', to: '0' }]);
pub const LEET_E: Rule = Rule::new("LEET_E", &[Operation::Replace { from: 'e', to: '3' }]);
pub const LEET_S: Rule = Rule::new("LEET_S", &[Operation::Replace { from: 's', to: '$' }]);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: &[Rule] = &[
        IDENTITY,
        LOWERCASE_ALL,
        CAPITALIZE_FIRST,
        CAPITALIZE_ALL,
        NCAPITALIZE,
        TOGGLE_CASE,
        REVERSE,
        DUPLICATE,
        REFLECT_FRONT,
        REFLECT_BACK,
        DELETE_FIRST,
        DELETE_LAST,
        APPEND_LOWER,
        APPEND_UPPER,
        APPEND_SPECIAL,
        APPEND_DIGIT,
        PREPEND_LOWER,
        PREPEND_UPPER,
        PREPEND_SPECIAL,
        PREPEND_DIGIT,
        INSERT_LOWER,
        INSERT_UPPER,
        INSERT_DIGIT,
        INSERT_SPECIAL,
        LEET_A,
        LEET_O,
        LEET_E,
        LEET_S,
    ];

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(Rule::name).collect();
        assert_eq!(names.len(), ALL.len());
        assert_eq!(ALL.len(), 28);
    }

    #[test]
    fn every_rule_appears_in_the_catalog() {
        let used: HashSet<&str> = crate::chain::RULE_CHAINS
            .iter()
            .flat_map(|c| c.rules())
            .map(Rule::name)
            .collect();
        for r in ALL {
            assert!(used.contains(r.name()), "{r} is never chained");
        }
    }
}
