//! Summary counts over a finished run.
use std::collections::BTreeMap;
use std::time::Duration;

use crate::engine::RunReport;
use crate::search::Outcome;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct RunStats {
    pub total_users: usize,
    pub cracked_users: usize,
    pub cracked_percentage: String,
    pub total_elapsed: Duration,
    /// Mean per-user search time, zero when there are no users.
    pub mean_user_elapsed: Duration,
}

pub(crate) fn pct(n: usize, d: usize) -> String {
    if d == 0 {
        return "0.00%".to_string();
    }
    format!("{:.2}%", (n as f64) / (d as f64) * 100.0)
}

pub fn calculate_statistics(report: &RunReport) -> RunStats {
    let total = report.results.len();
    let cracked = report
        .results
        .iter()
        .filter(|r| r.outcome.is_found())
        .count();
    let user_time: Duration = report.results.iter().map(|r| r.elapsed).sum();
    let mean = u32::try_from(total)
        .ok()
        .and_then(|n| user_time.checked_div(n))
        .unwrap_or_default();
    RunStats {
        total_users: total,
        cracked_users: cracked,
        cracked_percentage: pct(cracked, total),
        total_elapsed: report.elapsed,
        mean_user_elapsed: mean,
    }
}

/// How many cracked users each chain accounted for, keyed by the chain's
/// rendered form.
pub fn chain_breakdown(report: &RunReport) -> BTreeMap<String, usize> {
    let mut out = BTreeMap::new();
    for r in &report.results {
        if let Outcome::Found(m) = &r.outcome {
            *out.entry(m.chain.to_string()).or_insert(0) += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RULE_CHAINS;
    use crate::search::{Match, UserResult};

    fn found(user: &str, pw: &str, chain_index: usize, secs: u64) -> UserResult {
        UserResult {
            username: user.to_string(),
            outcome: Outcome::Found(Match {
                plaintext: pw.to_string(),
                base_candidate: pw.to_lowercase(),
                candidate_index: 0,
                chain_index,
                chain: RULE_CHAINS[chain_index],
                variant_index: 0,
            }),
            elapsed: Duration::from_secs(secs),
        }
    }

    fn missing(user: &str, secs: u64) -> UserResult {
        UserResult {
            username: user.to_string(),
            outcome: Outcome::Exhausted,
            elapsed: Duration::from_secs(secs),
        }
    }

    #[test]
    fn counts_and_percentage() {
        let report = RunReport {
            results: vec![found("a", "x", 0, 1), missing("b", 2), found("c", "y", 0, 3)],
            elapsed: Duration::from_secs(6),
        };
        let s = calculate_statistics(&report);
        assert_eq!(s.total_users, 3);
        assert_eq!(s.cracked_users, 2);
        assert_eq!(s.cracked_percentage, "66.67%");
        assert_eq!(s.mean_user_elapsed, Duration::from_secs(2));
    }

    #[test]
    fn empty_run_is_zero_percent() {
        let s = calculate_statistics(&RunReport::default());
        assert_eq!(s.cracked_percentage, "0.00%");
        assert_eq!(s.mean_user_elapsed, Duration::ZERO);
    }

    #[test]
    fn breakdown_by_chain() {
        let report = RunReport {
            results: vec![found("a", "x", 0, 1), found("b", "Y", 3, 1), found("c", "z", 0, 1)],
            elapsed: Duration::ZERO,
        };
        let b = chain_breakdown(&report);
        assert_eq!(b.get("IDENTITY"), Some(&2));
        assert_eq!(b.get("CAPITALIZE_FIRST"), Some(&1));
    }
}
