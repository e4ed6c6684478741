//! Runtime knobs for candidate generation and the search driver.
//!
//! Everything here has a `Default` matching the stock cracker; the CLI
//! only overrides what the user asked for.

/// How `Operation::Replace` expands a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplaceMode {
    /// Original word plus one variant per matching occurrence, each with only
    /// that occurrence replaced.
    #[default]
    PerOccurrence,
    /// Original word plus a single variant with every occurrence replaced.
    Global,
}

/// What happens to a generated variant longer than `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Keep the first `max_length` characters.
    #[default]
    Truncate,
    /// Drop the variant entirely.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationConfig {
    pub replace_mode: ReplaceMode,
    /// Maximum variant length in characters, checked after every operation.
    pub max_length: Option<usize>,
    pub length_policy: LengthPolicy,
}

impl MutationConfig {
    /// Apply the length cap to a single variant. `None` means the variant is
    /// rejected.
    pub fn fit(&self, word: String) -> Option<String> {
        let Some(max) = self.max_length else {
            return Some(word);
        };
        match word.char_indices().nth(max) {
            None => Some(word),
            Some((cut, _)) => match self.length_policy {
                LengthPolicy::Truncate => {
                    let mut word = word;
                    word.truncate(cut);
                    Some(word)
                }
                LengthPolicy::Reject => None,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub mutation: MutationConfig,
    /// Search users, and candidates within a user, on the rayon pool.
    pub parallel: bool,
    /// Append name-derived candidates after the dictionary for each user.
    pub name_variants: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mutation: MutationConfig::default(),
            parallel: false,
            name_variants: true,
        }
    }
}
