//! User entries parsed from a password file and the candidates derived from
//! their name field.
//!
//! The salt is always the first two characters of the stored hash; parsing
//! in [`crate::passwd`] guarantees the hash is long enough to carry one.
use indexmap::IndexSet;

/// A single account to crack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserEntry {
    pub username: String,
    pub hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserEntry {
    pub fn new(username: &str, hash: &str) -> Self {
        Self {
            username: username.to_string(),
            hash: hash.to_string(),
            ..Default::default()
        }
    }

    /// Populate name components from a free-form `"First Last"` field.
    /// Extra tokens are ignored; missing ones stay empty.
    pub fn fill_names(&mut self, field: &str) {
        let mut parts = field.split_whitespace();
        self.first_name = parts.next().unwrap_or_default().to_string();
        self.last_name = parts.next().unwrap_or_default().to_string();
    }

    pub fn with_names(mut self, field: &str) -> Self {
        self.fill_names(field);
        self
    }

    /// First two characters of the stored hash, or the whole hash if shorter.
    pub fn salt(&self) -> &str {
        match self.hash.char_indices().nth(2) {
            Some((end, _)) => &self.hash[..end],
            None => &self.hash,
        }
    }

    pub fn has_name(&self) -> bool {
        !self.first_name.is_empty() || !self.last_name.is_empty()
    }

    /// Guesses built from the name field, in fixed order: first, last,
    /// first+last, last+first, then the four initial+name combinations.
    /// Empty results and repeats are dropped. No guesses without a name.
    pub fn name_candidates(&self) -> Vec<String> {
        if !self.has_name() {
            return Vec::new();
        }
        let first = self.first_name.as_str();
        let last = self.last_name.as_str();
        let fi = initial(first);
        let li = initial(last);
        let guesses: IndexSet<String> = [
            first.to_string(),
            last.to_string(),
            format!("{first}{last}"),
            format!("{last}{first}"),
            format!("{fi}{last}"),
            format!("{first}{li}"),
            format!("{li}{first}"),
            format!("{last}{fi}"),
        ]
        .into_iter()
        .filter(|g| !g.is_empty())
        .collect();
        guesses.into_iter().collect()
    }
}

fn initial(name: &str) -> &str {
    match name.char_indices().nth(1) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_first_two_chars() {
        let u = UserEntry::new("alice", "abJnggxhB/yWI");
        assert_eq!(u.salt(), "ab");
        assert_eq!(UserEntry::new("x", "a").salt(), "a");
    }

    #[test]
    fn fill_names_splits_on_whitespace() {
        let u = UserEntry::new("jdoe", "ab").with_names("John  Doe Jr");
        assert_eq!(u.first_name, "John");
        assert_eq!(u.last_name, "Doe");
        let u = UserEntry::new("cher", "ab").with_names("Cher");
        assert_eq!(u.first_name, "Cher");
        assert_eq!(u.last_name, "");
    }

    #[test]
    fn name_candidates_in_fixed_order() {
        let u = UserEntry::new("jdoe", "ab").with_names("John Doe");
        assert_eq!(
            u.name_candidates(),
            vec![
                "John", "Doe", "JohnDoe", "DoeJohn", "JDoe", "JohnD", "DJohn", "DoeJ"
            ]
        );
    }

    #[test]
    fn name_candidates_tolerate_missing_components() {
        let u = UserEntry::new("cher", "ab").with_names("Cher");
        assert_eq!(u.name_candidates(), vec!["Cher", "C"]);
        assert!(UserEntry::new("root", "ab").name_candidates().is_empty());
    }
}
