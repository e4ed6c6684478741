//! Static character sets used as parameters of the charset operations.

/// An immutable set of characters. Iteration order is the order of the
/// backing string and determines the order of generated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Charset(&'static str);

impl Charset {
    pub const fn new(chars: &'static str) -> Self {
        Self(chars)
    }

    pub fn chars(&self) -> std::str::Chars<'static> {
        self.0.chars()
    }

    /// Number of characters (not bytes) in the set.
    pub(crate) fn len(&self) -> usize {
        self.0.chars().count()
    }
}

pub const DIGITS: Charset = Charset::new("0123456789");
pub const LOWERCASE: Charset = Charset::new("abcdefghijklmnopqrstuvwxyz");
pub const UPPERCASE: Charset = Charset::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ");
pub const SPECIALS: Charset = Charset::new("!@#$%^&*()-_+=~/`[]{}|:;\"'<>,.?\\");
