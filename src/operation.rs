//! Atomic string transformations.
//!
//! An [`Operation`] maps one input word to zero or more output words. Linear
//! operations (case folds, reversal, duplication) always yield exactly one
//! output; charset operations and `Replace` branch. Every operation is a pure
//! function of its parameters and the input, and never fails on an empty
//! string: the partial ones (`NCapitalize`, `DeleteFirst`, `DeleteLast`)
//! simply produce nothing.
use std::iter;

use crate::charset::Charset;
use crate::config::ReplaceMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Identity,

    LowercaseAll,
    CapitalizeAll,
    CapitalizeFirst,
    /// Lowercase the first character, uppercase the rest.
    NCapitalize,
    /// Alternate upper/lower starting with upper. Non-letters are copied and
    /// do not advance the alternation.
    ToggleCase,

    Reverse,
    Duplicate,
    /// `w + reverse(w)`
    ReflectFront,
    /// `reverse(w) + w`
    ReflectBack,

    DeleteFirst,
    DeleteLast,

    AppendCharset(Charset),
    PrependCharset(Charset),
    /// Insert every character of the set at every position `0..=len`.
    InsertCharset(Charset),

    /// Case-insensitive single character substitution.
    Replace { from: char, to: char },
}

impl Operation {
    /// Apply to a single word, collecting the outputs.
    pub fn apply(&self, word: &str, replace_mode: ReplaceMode) -> Vec<String> {
        let mut out = Vec::new();
        self.apply_into(word, replace_mode, &mut out);
        out
    }

    /// Apply to a single word, pushing outputs onto `out` in generation order.
    pub fn apply_into(&self, word: &str, replace_mode: ReplaceMode, out: &mut Vec<String>) {
        match *self {
            Operation::Identity => out.push(word.to_string()),
            Operation::LowercaseAll => out.push(word.to_lowercase()),
            Operation::CapitalizeAll => out.push(word.to_uppercase()),
            Operation::CapitalizeFirst => out.push(capitalize_first(word)),
            Operation::NCapitalize => out.extend(ncapitalize(word)),
            Operation::ToggleCase => out.push(toggle_case(word)),
            Operation::Reverse => out.push(reversed(word)),
            Operation::Duplicate => out.push(word.repeat(2)),
            Operation::ReflectFront => out.push(format!("{word}{}", reversed(word))),
            Operation::ReflectBack => out.push(format!("{}{word}", reversed(word))),
            Operation::DeleteFirst => {
                let mut chars = word.chars();
                if chars.next().is_some() {
                    out.push(chars.as_str().to_string());
                }
            }
            Operation::DeleteLast => {
                let mut chars = word.chars();
                if chars.next_back().is_some() {
                    out.push(chars.as_str().to_string());
                }
            }
            Operation::AppendCharset(set) => {
                out.reserve(set.len());
                for c in set.chars() {
                    let mut w = String::with_capacity(word.len() + c.len_utf8());
                    w.push_str(word);
                    w.push(c);
                    out.push(w);
                }
            }
            Operation::PrependCharset(set) => {
                out.reserve(set.len());
                for c in set.chars() {
                    let mut w = String::with_capacity(word.len() + c.len_utf8());
                    w.push(c);
                    w.push_str(word);
                    out.push(w);
                }
            }
            Operation::InsertCharset(set) => {
                out.reserve((word.chars().count() + 1) * set.len());
                let positions = word
                    .char_indices()
                    .map(|(i, _)| i)
                    .chain(iter::once(word.len()));
                for pos in positions {
                    let (head, tail) = word.split_at(pos);
                    for c in set.chars() {
                        let mut w = String::with_capacity(word.len() + c.len_utf8());
                        w.push_str(head);
                        w.push(c);
                        w.push_str(tail);
                        out.push(w);
                    }
                }
            }
            Operation::Replace { from, to } => replace_variants(word, from, to, replace_mode, out),
        }
    }
}

fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ncapitalize(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    let mut out: String = first.to_lowercase().collect();
    out.push_str(&chars.as_str().to_uppercase());
    Some(out)
}

fn toggle_case(word: &str) -> String {
    let mut upper = true;
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_alphabetic() {
            if upper {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            upper = !upper;
        } else {
            out.push(c);
        }
    }
    out
}

fn replace_variants(word: &str, from: char, to: char, mode: ReplaceMode, out: &mut Vec<String>) {
    let hit = |c: char| c.to_lowercase().eq(from.to_lowercase());
    out.push(word.to_string());
    match mode {
        ReplaceMode::PerOccurrence => {
            for (i, c) in word.char_indices().filter(|&(_, c)| hit(c)) {
                let mut w = String::with_capacity(word.len() + to.len_utf8());
                w.push_str(&word[..i]);
                w.push(to);
                w.push_str(&word[i + c.len_utf8()..]);
                out.push(w);
            }
        }
        ReplaceMode::Global => {
            if word.chars().any(|c| hit(c)) {
                out.push(word.chars().map(|c| if hit(c) { to } else { c }).collect());
            }
        }
    }
}
