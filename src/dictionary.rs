//! Base wordlist and per-user candidate lists.
//!
//! Word order is preserved exactly as read; it is the outermost search
//! priority.
use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;

use crate::io::read_lines;
use crate::user::UserEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Trim every line and drop the blank ones. Returns the dictionary and the
    /// number of blank lines skipped.
    pub fn from_lines<I, S>(lines: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut blank = 0;
        for line in lines {
            let w = line.as_ref().trim();
            if w.is_empty() {
                blank += 1;
            } else {
                words.push(w.to_string());
            }
        }
        (Self { words }, blank)
    }

    pub fn parse(contents: &str) -> Self {
        Self::from_lines(contents.lines()).0
    }

    pub fn load<P: AsRef<Path>>(path: P, mmap_threshold_bytes: u64) -> Result<(Self, usize)> {
        let lines = read_lines(path, mmap_threshold_bytes)?;
        Ok(Self::from_lines(lines))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Candidates for one user: every dictionary word, then (if enabled) the
    /// guesses derived from the user's name.
    pub fn candidates_for<'a>(&'a self, user: &UserEntry, name_variants: bool) -> Vec<Cow<'a, str>> {
        let derived = if name_variants {
            user.name_candidates()
        } else {
            Vec::new()
        };
        let mut out = Vec::with_capacity(self.words.len() + derived.len());
        out.extend(self.words.iter().map(|w| Cow::Borrowed(w.as_str())));
        out.extend(derived.into_iter().map(Cow::Owned));
        out
    }
}
