//! Writers for the run results.
//!
//! - `save_results_txt` writes the results file rendered by
//!   [`crate::report::render_results`].
//! - `save_results_csv` writes one row per user with match provenance.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use csv::Writer;
use serde::Serialize;

use crate::engine::RunReport;
use crate::report::render_results;
use crate::search::Outcome;

#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    username: &'a str,
    status: &'static str,
    plaintext: &'a str,
    elapsed_seconds: String,
    base_candidate: &'a str,
    chain: String,
}

pub fn save_results_txt<P: AsRef<Path>>(report: &RunReport, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(render_results(report).as_bytes())?;
    f.flush()?;
    Ok(())
}

pub fn save_results_csv<P: AsRef<Path>>(report: &RunReport, path: P) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;
    for r in &report.results {
        let elapsed_seconds = format!("{:.3}", r.elapsed.as_secs_f64());
        let record = match &r.outcome {
            Outcome::Found(m) => ResultRecord {
                username: &r.username,
                status: "cracked",
                plaintext: &m.plaintext,
                elapsed_seconds,
                base_candidate: &m.base_candidate,
                chain: m.chain.to_string(),
            },
            Outcome::Exhausted => ResultRecord {
                username: &r.username,
                status: "not_found",
                plaintext: "",
                elapsed_seconds,
                base_candidate: "",
                chain: String::new(),
            },
        };
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchSettings;
    use crate::engine::Engine;
    use crate::oracle::{HashOracle, OracleError};
    use tempfile::tempdir;

    struct Concat;

    impl HashOracle for Concat {
        fn hash(&self, salt: &str, plaintext: &str) -> Result<String, OracleError> {
            Ok(format!("{salt}{plaintext}"))
        }
    }

    #[test]
    fn writes_txt_and_csv() {
        let mut e = Engine::new();
        e.load_from_strings(
            "alice:abAdmin1:1:1:Alice Smith\nbob:cdzzz\n",
            "admin\n",
        );
        let report = e.run(&SearchSettings::default(), &Concat).unwrap();
        let dir = tempdir().unwrap();
        let txt_path = dir.path().join("passwd_results.txt");
        let csv_path = dir.path().join("passwd_results.csv");
        save_results_txt(&report, &txt_path).unwrap();
        save_results_csv(&report, &csv_path).unwrap();

        let txt = std::fs::read_to_string(txt_path).unwrap();
        assert!(txt.starts_with("alice:Admin1:"));
        assert!(txt.contains("bob:<not found>:"));
        assert!(txt.contains("Cracked 1 out of 2 users. (50.00%)"));

        let csv = std::fs::read_to_string(csv_path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("username,status,plaintext,elapsed_seconds,base_candidate,chain")
        );
        let alice = lines.next().unwrap();
        assert!(alice.starts_with("alice,cracked,Admin1,"));
        assert!(alice.ends_with(",admin,CAPITALIZE_FIRST + APPEND_DIGIT"));
        assert!(lines.next().unwrap().starts_with("bob,not_found,,"));
    }
}
