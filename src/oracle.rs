//! The salted one-way hash the driver compares candidates against.
//!
//! The driver only needs `hash(salt, plaintext)` to reproduce the stored hash
//! format exactly, so it is behind a trait. [`UnixCrypt`] is the traditional
//! DES-based `crypt(3)` with a two-character salt, as found in old
//! `/etc/passwd` files.

#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("crypt failed for salt {salt:?}: {message}")]
    Crypt { salt: String, message: String },
}

pub trait HashOracle: Send + Sync {
    fn hash(&self, salt: &str, plaintext: &str) -> Result<String, OracleError>;

    /// Whether `salt` is something this oracle can hash under. Users whose
    /// salt is rejected here are never searched.
    fn accepts_salt(&self, _salt: &str) -> bool {
        true
    }

    /// Whether `plaintext` hashes to `target` under `salt`.
    fn matches(&self, salt: &str, plaintext: &str, target: &str) -> Result<bool, OracleError> {
        Ok(self.hash(salt, plaintext)? == target)
    }
}

/// Traditional DES `crypt(3)`. Only the first eight characters of the
/// plaintext are significant.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixCrypt;

/// Characters of the crypt(3) base-64 alphabet.
fn is_crypt_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '/'
}

#[allow(deprecated)]
impl HashOracle for UnixCrypt {
    fn accepts_salt(&self, salt: &str) -> bool {
        salt.chars().count() == 2 && salt.chars().all(is_crypt_char)
    }

    fn hash(&self, salt: &str, plaintext: &str) -> Result<String, OracleError> {
        pwhash::unix_crypt::hash_with(salt, plaintext).map_err(|e| OracleError::Crypt {
            salt: salt.to_string(),
            message: e.to_string(),
        })
    }
}
