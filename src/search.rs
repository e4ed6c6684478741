//! Per-user crack driver.
//!
//! A user's search walks candidates (outer), catalog chains (middle) and the
//! chain's variants (inner) in that strict order and stops at the first hash
//! equality. The search is `Searching` until it reaches one of the two
//! terminal states, [`Outcome::Found`] or [`Outcome::Exhausted`].
//!
//! The parallel variant splits the candidate list across the rayon pool and
//! uses `find_map_first`, which returns the hit with the lowest candidate
//! index and stops scheduling candidates past it. Chains and variants inside
//! one candidate are always scanned sequentially, so the reported match is
//! the one with the smallest (candidate, chain, variant) tuple either way.
use std::borrow::Cow;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::chain::RuleChain;
use crate::mutation::Mutator;
use crate::oracle::{HashOracle, OracleError};
use crate::user::UserEntry;

/// Where a match was found in the search space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub plaintext: String,
    pub base_candidate: String,
    pub candidate_index: usize,
    pub chain_index: usize,
    pub chain: RuleChain,
    pub variant_index: usize,
}

/// Terminal state of one user's search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Match),
    Exhausted,
}

impl Outcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }

    pub fn plaintext(&self) -> Option<&str> {
        match self {
            Outcome::Found(m) => Some(&m.plaintext),
            Outcome::Exhausted => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResult {
    pub username: String,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

/// Everything a search needs apart from the user and candidates.
#[derive(Clone, Copy)]
pub struct Searcher<'a> {
    pub oracle: &'a dyn HashOracle,
    pub chains: &'a [RuleChain],
    pub mutator: Mutator,
    pub parallel: bool,
}

impl<'a> Searcher<'a> {
    pub fn new(oracle: &'a dyn HashOracle, chains: &'a [RuleChain], mutator: Mutator) -> Self {
        Self {
            oracle,
            chains,
            mutator,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Search one user to a terminal state and time it.
    pub fn crack_user(
        &self,
        user: &UserEntry,
        candidates: &[Cow<'_, str>],
    ) -> Result<UserResult, OracleError> {
        info!(
            "cracking user {} ({} candidates x {} chains)",
            user.username,
            candidates.len(),
            self.chains.len()
        );
        let start = Instant::now();
        let outcome = if !self.oracle.accepts_salt(user.salt()) {
            warn!(
                "{}: hash {:?} carries no usable salt, not searching",
                user.username, user.hash
            );
            Outcome::Exhausted
        } else if self.parallel {
            self.search_parallel(user, candidates)?
        } else {
            self.search_sequential(user, candidates)?
        };
        let elapsed = start.elapsed();
        match &outcome {
            Outcome::Found(m) => debug!(
                "{}: matched candidate #{} {:?} via chain #{} [{}] variant #{}",
                user.username,
                m.candidate_index,
                m.base_candidate,
                m.chain_index,
                m.chain,
                m.variant_index
            ),
            Outcome::Exhausted => debug!("{}: search space exhausted", user.username),
        }
        info!(
            "finished user {} in {:.3}s ({})",
            user.username,
            elapsed.as_secs_f64(),
            if outcome.is_found() { "cracked" } else { "not found" }
        );
        Ok(UserResult {
            username: user.username.clone(),
            outcome,
            elapsed,
        })
    }

    fn search_sequential(
        &self,
        user: &UserEntry,
        candidates: &[Cow<'_, str>],
    ) -> Result<Outcome, OracleError> {
        for (ci, candidate) in candidates.iter().enumerate() {
            if let Some(m) = self.search_candidate(user, ci, candidate)? {
                return Ok(Outcome::Found(m));
            }
        }
        Ok(Outcome::Exhausted)
    }

    fn search_parallel(
        &self,
        user: &UserEntry,
        candidates: &[Cow<'_, str>],
    ) -> Result<Outcome, OracleError> {
        let first = candidates
            .par_iter()
            .enumerate()
            .find_map_first(|(ci, candidate)| {
                self.search_candidate(user, ci, candidate).transpose()
            });
        match first {
            Some(Ok(m)) => Ok(Outcome::Found(m)),
            Some(Err(e)) => Err(e),
            None => Ok(Outcome::Exhausted),
        }
    }

    /// Try every chain on one base candidate, in catalog order.
    fn search_candidate(
        &self,
        user: &UserEntry,
        candidate_index: usize,
        candidate: &str,
    ) -> Result<Option<Match>, OracleError> {
        let salt = user.salt();
        for (chain_index, chain) in self.chains.iter().enumerate() {
            let variants = self.mutator.apply_chain(candidate, chain);
            for (variant_index, variant) in variants.iter().enumerate() {
                if self.oracle.matches(salt, variant, &user.hash)? {
                    return Ok(Some(Match {
                        plaintext: variant.clone(),
                        base_candidate: candidate.to_string(),
                        candidate_index,
                        chain_index,
                        chain: *chain,
                        variant_index,
                    }));
                }
            }
        }
        Ok(None)
    }
}
