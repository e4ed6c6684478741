//! Rendering for the results file and the terminal.
//!
//! The results file is plain text with one `username:password:seconds` line
//! per user (`<not found>` in place of the password when the search was
//! exhausted) followed by a two-line summary. Console output is colored.
use std::fmt::Write as _;
use std::time::Duration;

use colored::*;

use crate::engine::RunReport;
use crate::search::{Outcome, UserResult};
use crate::stats::{calculate_statistics, chain_breakdown};

/// Placeholder written instead of a password for uncracked users.
pub const NOT_FOUND_MARKER: &str = "<not found>";

fn secs(d: Duration) -> String {
    format!("{:.3}", d.as_secs_f64())
}

/// One results-file line for a user, without the trailing newline.
pub fn result_line(r: &UserResult) -> String {
    let password = r.outcome.plaintext().unwrap_or(NOT_FOUND_MARKER);
    format!("{}:{}:{}", r.username, password, secs(r.elapsed))
}

/// Full results-file contents.
pub fn render_results(report: &RunReport) -> String {
    let stats = calculate_statistics(report);
    let mut out = String::new();
    for r in &report.results {
        out.push_str(&result_line(r));
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Cracked {} out of {} users. ({})",
        stats.cracked_users, stats.total_users, stats.cracked_percentage
    );
    let _ = writeln!(out, "Total time: {}s", secs(stats.total_elapsed));
    out
}

/// Console progress line for a user that reached a terminal state.
pub fn render_user_line(r: &UserResult) -> String {
    match &r.outcome {
        Outcome::Found(m) => format!(
            "Cracked {} in {}s: {}",
            r.username.bold(),
            secs(r.elapsed),
            m.plaintext.green()
        ),
        Outcome::Exhausted => format!(
            "Password not found for user: {} {}",
            r.username.bold(),
            format!("(elapsed {}s)", secs(r.elapsed)).dimmed()
        ),
    }
}

/// Blank line, title, an underline as wide as the title, blank line.
fn section_header(title: &str, paint: fn(&str) -> ColoredString) -> String {
    let rule = "─".repeat(title.chars().count());
    format!("\n{}\n{rule}\n\n", paint(title))
}

/// Terminal summary printed after every user has been processed.
pub fn render_summary(report: &RunReport) -> String {
    let stats = calculate_statistics(report);
    let mut out = String::new();
    out.push_str(&format!("{}\n", "rulecrack: Results".bold().cyan()));

    out.push_str(&section_header("Summary", |t| t.bold().yellow()));
    out.push_str(&format!(
        "Cracked {} out of {} users.\n",
        stats.cracked_users, stats.total_users
    ));
    out.push_str(&format!("Cracked Percentage: {}\n", stats.cracked_percentage));
    out.push_str(&format!("Total time: {}s\n", secs(stats.total_elapsed)));
    out.push_str(&format!(
        "Mean time per user: {}s\n",
        secs(stats.mean_user_elapsed)
    ));

    let mut by_chain: Vec<(String, usize)> = chain_breakdown(report).into_iter().collect();
    // count desc, then chain name asc
    by_chain.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.push_str(&section_header("Matches by Rule Chain", |t| t.bold().cyan()));
    if by_chain.is_empty() {
        out.push_str("(No passwords cracked)\n");
    } else {
        for (chain, count) in by_chain {
            out.push_str(&format!("  {}: {}\n", chain, count));
        }
    }

    let uncracked: Vec<&str> = report
        .results
        .iter()
        .filter(|r| !r.outcome.is_found())
        .map(|r| r.username.as_str())
        .collect();
    out.push_str(&section_header("Not Cracked", |t| t.bold().magenta()));
    if uncracked.is_empty() {
        out.push_str("(None)\n");
    } else {
        for u in uncracked {
            out.push_str(&format!("  {}\n", u.dimmed()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::RULE_CHAINS;
    use crate::search::Match;

    fn report() -> RunReport {
        RunReport {
            results: vec![
                UserResult {
                    username: "alice".into(),
                    outcome: Outcome::Found(Match {
                        plaintext: "Admin1".into(),
                        base_candidate: "admin".into(),
                        candidate_index: 0,
                        chain_index: 7,
                        chain: RULE_CHAINS[7],
                        variant_index: 1,
                    }),
                    elapsed: Duration::from_millis(12),
                },
                UserResult {
                    username: "bob".into(),
                    outcome: Outcome::Exhausted,
                    elapsed: Duration::from_millis(1500),
                },
                UserResult {
                    username: "carol".into(),
                    outcome: Outcome::Exhausted,
                    elapsed: Duration::from_micros(250),
                },
            ],
            elapsed: Duration::from_millis(1513),
        }
    }

    #[test]
    fn snapshot_results_file() {
        insta::assert_snapshot!(render_results(&report()), @r"
        alice:Admin1:0.012
        bob:<not found>:1.500
        carol:<not found>:0.000
        Cracked 1 out of 3 users. (33.33%)
        Total time: 1.513s
        ");
    }

    #[test]
    fn user_lines_name_the_outcome() {
        let r = report();
        let found = render_user_line(&r.results[0]);
        assert!(found.starts_with("Cracked "));
        assert!(found.contains("Admin1"));
        let missing = render_user_line(&r.results[1]);
        assert!(missing.starts_with("Password not found for user: "));
        assert!(missing.contains("1.500s"));
    }

    #[test]
    fn summary_groups_by_chain() {
        let s = render_summary(&report());
        assert!(s.contains("Cracked 1 out of 3 users."));
        assert!(s.contains("CAPITALIZE_FIRST + APPEND_DIGIT: 1"));
        assert!(s.contains("Not Cracked"));
    }

    #[test]
    fn summary_with_no_users() {
        let s = render_summary(&RunReport::default());
        assert!(s.contains("(No passwords cracked)"));
        assert!(s.contains("(None)"));
        assert!(render_results(&RunReport::default()).contains("(0.00%)"));
    }

    #[test]
    fn header_underline_matches_title_width() {
        let h = section_header("Not Cracked", |t| t.bold());
        assert!(h.ends_with(&format!("\n{}\n\n", "─".repeat(11))));
    }
}
