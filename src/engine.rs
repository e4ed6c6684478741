//! Engine: loads the password file and dictionary, then runs the crack driver
//! for every user and collects the results in password-file order.
//!
//! Typical usage:
//!
//! ```no_run
//! use rulecrack::{config::SearchSettings, engine::Engine, oracle::UnixCrypt};
//! # fn main() -> anyhow::Result<()> {
//! let mut engine = Engine::new();
//! engine.load_from_file_paths("/path/to/passwd.txt", "/path/to/words.txt")?;
//! let report = engine.run(&SearchSettings::default(), &UnixCrypt)?;
//! print!("{}", rulecrack::report::render_results(&report));
//! # Ok(())
//! # }
//! ```
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::info;
use rayon::prelude::*;

use crate::chain::{RULE_CHAINS, RuleChain};
use crate::config::SearchSettings;
use crate::dictionary::Dictionary;
use crate::io::{DEFAULT_MMAP_THRESHOLD_BYTES, read_lines};
use crate::mutation::Mutator;
use crate::oracle::HashOracle;
use crate::passwd::{parse_passwd_contents, parse_passwd_lines};
use crate::search::{Searcher, UserResult};
use crate::user::UserEntry;

/// Lines skipped while loading inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    pub passwd_malformed: usize,
    pub dictionary_blank: usize,
}

/// Results of one run, one entry per user in password-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<UserResult>,
    pub elapsed: Duration,
}

#[derive(Debug, Default)]
pub struct Engine {
    pub users: Vec<UserEntry>,
    pub dictionary: Dictionary,
    pub parse_stats: ParseStats,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load inputs already in memory. Intended for tests and small programmatic
    /// integrations.
    pub fn load_from_strings(&mut self, passwd: &str, dictionary: &str) {
        let (users, passwd_malformed) = parse_passwd_contents(passwd);
        let (dictionary, dictionary_blank) = Dictionary::from_lines(dictionary.lines());
        self.users = users;
        self.dictionary = dictionary;
        self.parse_stats = ParseStats {
            passwd_malformed,
            dictionary_blank,
        };
    }

    /// Load both input files. Either one being unreadable is fatal.
    pub fn load_from_file_paths_with_threshold<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        passwd_path: P,
        dictionary_path: Q,
        mmap_threshold_bytes: u64,
    ) -> Result<()> {
        let passwd_lines = read_lines(&passwd_path, mmap_threshold_bytes)
            .with_context(|| format!("load password file {}", passwd_path.as_ref().display()))?;
        let (dictionary, dictionary_blank) =
            Dictionary::load(&dictionary_path, mmap_threshold_bytes).with_context(|| {
                format!("load dictionary {}", dictionary_path.as_ref().display())
            })?;
        let (users, passwd_malformed) = parse_passwd_lines(passwd_lines);
        info!(
            "loaded {} users and {} dictionary words",
            users.len(),
            dictionary.len()
        );
        self.users = users;
        self.dictionary = dictionary;
        self.parse_stats = ParseStats {
            passwd_malformed,
            dictionary_blank,
        };
        Ok(())
    }

    /// Convenience wrapper that uses the default mmap threshold.
    pub fn load_from_file_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        passwd_path: P,
        dictionary_path: Q,
    ) -> Result<()> {
        self.load_from_file_paths_with_threshold(
            passwd_path,
            dictionary_path,
            DEFAULT_MMAP_THRESHOLD_BYTES,
        )
    }

    /// Crack every loaded user with the built-in chain catalog.
    pub fn run(&self, settings: &SearchSettings, oracle: &dyn HashOracle) -> Result<RunReport> {
        self.run_with(settings, oracle, RULE_CHAINS, |_| {})
    }

    /// Crack every loaded user with `chains`, calling `on_result` as each user
    /// reaches a terminal state. In parallel mode the callback order follows
    /// completion, but the report is always in password-file order.
    pub fn run_with<F>(
        &self,
        settings: &SearchSettings,
        oracle: &dyn HashOracle,
        chains: &[RuleChain],
        on_result: F,
    ) -> Result<RunReport>
    where
        F: Fn(&UserResult) + Sync,
    {
        let searcher =
            Searcher::new(oracle, chains, Mutator::new(settings.mutation)).parallel(settings.parallel);
        let crack = |user: &UserEntry| -> Result<UserResult> {
            let candidates = self
                .dictionary
                .candidates_for(user, settings.name_variants);
            let result = searcher
                .crack_user(user, &candidates)
                .with_context(|| format!("crack user {}", user.username))?;
            on_result(&result);
            Ok(result)
        };

        let start = Instant::now();
        let results = if settings.parallel {
            self.users.par_iter().map(crack).collect::<Result<Vec<_>>>()?
        } else {
            self.users.iter().map(crack).collect::<Result<Vec<_>>>()?
        };
        Ok(RunReport {
            results,
            elapsed: start.elapsed(),
        })
    }
}
