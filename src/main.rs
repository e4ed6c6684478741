//! CLI entrypoint for `rulecrack`.
//!
//! Parses command-line arguments, validates the password and dictionary files,
//! cracks every user through the library engine, prints per-user progress and
//! a summary, and writes the results file (plus an optional CSV export) into
//! the output directory.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info, warn};
use rulecrack::{
    config::{LengthPolicy, MutationConfig, ReplaceMode, SearchSettings},
    engine::Engine,
    export::{save_results_csv, save_results_txt},
    io::DEFAULT_MMAP_THRESHOLD_BYTES,
    oracle::UnixCrypt,
    report::{render_summary, render_user_line},
};

#[derive(Parser, Debug)]
#[command(
    name = "rulecrack",
    version,
    about = "Rule-based dictionary cracker for crypt(3) password files"
)]
struct Args {
    /// Password file (`username:hash[:uid:gid:First Last...]` per line)
    passwd_file: PathBuf,

    /// Dictionary file, one base word per line
    dictionary_file: PathBuf,

    /// Directory for the results file
    #[arg(short = 'o', long = "output", default_value = "Results")]
    output: PathBuf,

    /// Also write `<stem>_results.csv` with match details
    #[arg(long = "csv")]
    csv: bool,

    /// Maximum candidate length in characters
    #[arg(long = "max-length")]
    max_length: Option<usize>,

    /// What to do with candidates longer than --max-length
    #[arg(long = "length-policy", value_enum, default_value_t = LengthPolicyArg::Truncate)]
    length_policy: LengthPolicyArg,

    /// How REPLACE rules expand a word
    #[arg(long = "replace-mode", value_enum, default_value_t = ReplaceModeArg::PerOccurrence)]
    replace_mode: ReplaceModeArg,

    /// Crack users and candidates in parallel
    #[arg(long = "parallel")]
    parallel: bool,

    /// Do not derive candidates from the user's name
    #[arg(long = "no-name-variants")]
    no_name_variants: bool,

    /// Override mmap threshold in bytes. If zero, disable mmap.
    #[arg(long = "mmap-threshold", default_value_t = DEFAULT_MMAP_THRESHOLD_BYTES)]
    mmap_threshold: u64,

    /// Log counts of skipped/malformed lines encountered during parsing
    #[arg(long = "log-parse-stats")]
    log_parse_stats: bool,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress per-user lines and the summary (the results file is still written)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LengthPolicyArg {
    Truncate,
    Reject,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReplaceModeArg {
    PerOccurrence,
    Global,
}

impl Args {
    fn settings(&self) -> SearchSettings {
        SearchSettings {
            mutation: MutationConfig {
                replace_mode: match self.replace_mode {
                    ReplaceModeArg::PerOccurrence => ReplaceMode::PerOccurrence,
                    ReplaceModeArg::Global => ReplaceMode::Global,
                },
                max_length: self.max_length,
                length_policy: match self.length_policy {
                    LengthPolicyArg::Truncate => LengthPolicy::Truncate,
                    LengthPolicyArg::Reject => LengthPolicy::Reject,
                },
            },
            parallel: self.parallel,
            name_variants: !self.no_name_variants,
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn verify_inputs(args: &Args) -> Result<()> {
    for (what, p) in [
        ("password file", &args.passwd_file),
        ("dictionary file", &args.dictionary_file),
    ] {
        if !p.is_file() {
            bail!("{} not found: {}", what, p.display());
        }
    }
    if args.max_length == Some(0) {
        bail!("--max-length must be at least 1");
    }
    Ok(())
}

fn output_path(outdir: &Path, passwd_file: &Path, ext: &str) -> PathBuf {
    let stem = passwd_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "passwd".to_string());
    outdir.join(format!("{stem}_results.{ext}"))
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
    if let Err(e) = verify_inputs(&args) {
        error!("{}", e);
        std::process::exit(2);
    }

    let threshold = if args.mmap_threshold == 0 {
        u64::MAX
    } else {
        args.mmap_threshold
    };
    let mut engine = Engine::new();
    if let Err(e) =
        engine.load_from_file_paths_with_threshold(&args.passwd_file, &args.dictionary_file, threshold)
    {
        error!("failed to load inputs: {:#}", e);
        std::process::exit(3);
    }
    if args.log_parse_stats {
        let stats = engine.parse_stats;
        if stats.passwd_malformed > 0 {
            warn!(
                "skipped {} malformed password line(s)",
                stats.passwd_malformed
            );
        }
        info!(
            "parse stats: passwd_malformed={}, dictionary_blank={}",
            stats.passwd_malformed, stats.dictionary_blank
        );
    }

    if let Err(e) = fs::create_dir_all(&args.output) {
        error!(
            "failed to create output directory {}: {}",
            args.output.display(),
            e
        );
        std::process::exit(4);
    }

    let quiet = args.quiet;
    let report = match engine.run_with(
        &args.settings(),
        &UnixCrypt,
        rulecrack::chain::RULE_CHAINS,
        |r| {
            if !quiet {
                println!("{}", render_user_line(r));
            }
        },
    ) {
        Ok(report) => report,
        Err(e) => {
            error!("search failed: {:#}", e);
            std::process::exit(5);
        }
    };

    let txt = output_path(&args.output, &args.passwd_file, "txt");
    if let Err(e) = save_results_txt(&report, &txt) {
        error!("failed to write {}: {}", txt.display(), e);
        std::process::exit(6);
    }
    info!("results written to {}", txt.display());
    if args.csv {
        let csv = output_path(&args.output, &args.passwd_file, "csv");
        if let Err(e) = save_results_csv(&report, &csv) {
            error!("failed to write {}: {}", csv.display(), e);
            std::process::exit(6);
        }
        info!("csv export written to {}", csv.display());
    }

    if !quiet {
        println!("{}", render_summary(&report));
    }
}
