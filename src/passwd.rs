use crate::user::UserEntry;

/// Zero-based field index of the GECOS (full name) column.
pub const NAME_FIELD: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum PasswdError {
    #[error("malformed line: {0}")]
    MalformedLine(String),
    #[error("hash too short to carry a salt: {0}")]
    MissingSalt(String),
}

pub fn parse_passwd_line(line: &str) -> Result<UserEntry, PasswdError> {
    // Expected: username:hash[:uid:gid:First Last[:...]]
    let fields: Vec<&str> = line.split(':').collect();
    if fields.len() < 2 {
        return Err(PasswdError::MalformedLine(line.to_string()));
    }
    let username = fields[0].trim();
    let hash = fields[1].trim();
    if username.is_empty() {
        return Err(PasswdError::MalformedLine(line.to_string()));
    }
    if hash.chars().count() < 2 {
        return Err(PasswdError::MissingSalt(line.to_string()));
    }

    let mut u = UserEntry::new(username, hash);
    if let Some(name) = fields.get(NAME_FIELD) {
        u.fill_names(name);
    }
    Ok(u)
}

/// Parse password file lines, skipping blank and malformed ones. Returns the
/// users in file order and the number of malformed lines skipped.
pub fn parse_passwd_lines<I, S>(lines: I) -> (Vec<UserEntry>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut users = Vec::new();
    let mut malformed = 0;
    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        match parse_passwd_line(trimmed) {
            Ok(u) => users.push(u),
            Err(e) => {
                log::debug!("skipping password entry: {e}");
                malformed += 1;
            }
        }
    }
    (users, malformed)
}

pub fn parse_passwd_contents(contents: &str) -> (Vec<UserEntry>, usize) {
    parse_passwd_lines(contents.lines())
}
