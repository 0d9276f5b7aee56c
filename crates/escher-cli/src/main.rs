//! # escher — hyperbolic word normalization checker
//!
//! Normalizes a generator word for a `{p, q}` tiling with the shipped
//! rule tables and cross-checks the result against the matrix oracle in
//! both realizations.
//!
//! ## Usage
//!
//! ```text
//! escher 4 5 bbbbB
//! escher 7 3                         # random word
//! escher 5 4 --seed 42 --groups 12
//! escher 4 5 bbbbB --rules ./my_rules.json --max-passes 500
//! escher 7 3 --primal-only
//! ```
//!
//! The rule database path defaults to `data/hyperbolic.json`, overridable
//! with the `ESCHER_RULES` environment variable or `--rules`.
//!
//! Exit status: 0 when the normalized word represents the same group
//! element as the input (up to global sign), 1 otherwise and on errors.

use std::path::PathBuf;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use escher_core::{TilingKey, Word};
use escher_geometry::TilingGeometry;
use escher_rewrite::{RewriteError, RuleDatabase};
use escher_verify::{verify, DEFAULT_TOLERANCE};

// ─────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────

struct CheckerConfig {
    key: TilingKey,
    /// Explicit word, or `None` to generate a random one.
    word: Option<Word>,
    rules_path: PathBuf,
    max_passes: Option<usize>,
    seed: Option<u64>,
    /// Number of `a`-separated rotation runs in a generated word.
    groups: usize,
    /// Skip the dual-realization cross-check and its output.
    primal_only: bool,
}

const USAGE: &str = "Usage: escher P Q [WORD] [--rules PATH] [--max-passes N] [--seed N] [--groups N] [--primal-only]";

// ─────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "escher_cli=info,escher_rewrite=info".into()),
        )
        .init();

    let config = parse_args();

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CheckerConfig) -> Result<bool, RewriteError> {
    let key = config.key;

    if !key.is_hyperbolic() {
        tracing::warn!(%key, "tiling is not hyperbolic ((p-2)(q-2) <= 4); matrices degenerate");
    }

    let mut db = RuleDatabase::load(&config.rules_path)?;
    if let Some(max_passes) = config.max_passes {
        let table = db.table(key)?.clone().with_max_passes(max_passes);
        db = RuleDatabase::from_tables([table]);
    }

    let word = match &config.word {
        Some(word) => word.clone(),
        None => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let word = random_word(&mut rng, key.p, config.groups);
            tracing::info!(%word, "generated random word");
            word
        }
    };

    let report = verify(&db, key, &word)?;

    println!("tiling:      {{{}, {}}}", key.p, key.q);
    println!("word:        {}  ({} symbols)", report.word, report.rewrite.input_len);
    println!(
        "normalized:  {}  ({} symbols, {} passes, {} replacements)",
        report.normalized,
        report.rewrite.output_len,
        report.rewrite.passes,
        report.rewrite.replacements
    );
    println!();

    let primal = TilingGeometry::primal(key);
    println!("primal matrix of word:\n{}", primal.matrix_of_word(&word));
    println!("primal matrix of normalized:\n{}", primal.matrix_of_word(&report.normalized));
    if !config.primal_only {
        let dual = TilingGeometry::dual(key);
        println!("dual matrix of word:\n{}", dual.matrix_of_word(&word));
        println!("dual matrix of normalized:\n{}", dual.matrix_of_word(&report.normalized));
    }
    println!();
    println!("matrix error (primal): {:.3e}", report.matrix_error);
    if !config.primal_only {
        println!("matrix error (dual):   {:.3e}", report.dual_matrix_error);
    }
    println!("(matrices of the same group element may differ by a factor of -1)");

    let ok = if config.primal_only {
        report.matrix_error <= DEFAULT_TOLERANCE
    } else {
        report.is_ok(DEFAULT_TOLERANCE)
    };
    if ok {
        println!("result: OK");
    } else {
        println!("result: MISMATCH (tolerance {DEFAULT_TOLERANCE:.1e})");
    }
    Ok(ok)
}

// ─────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────

/// Random walk in the tiling group: runs of `b`/`B` joined by `a`
/// separators, each run between 1 and `p` symbols long.
fn random_word(rng: &mut StdRng, p: u32, groups: usize) -> Word {
    let mut s = String::new();
    for i in 0..groups {
        if i > 0 {
            s.push('a');
        }
        let run = rng.gen_range(1..=p.max(2) as usize);
        for _ in 0..run {
            s.push(if rng.gen_bool(0.5) { 'b' } else { 'B' });
        }
    }
    s.parse().expect("generated word uses only valid symbols")
}

fn default_rules_path() -> PathBuf {
    std::env::var("ESCHER_RULES")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data/hyperbolic.json"))
}

/// Minimal argument parser (no external deps).
fn parse_args() -> CheckerConfig {
    let args: Vec<String> = std::env::args().collect();

    let mut positional: Vec<String> = Vec::new();
    let mut rules_path = default_rules_path();
    let mut max_passes: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut groups: usize = 30;
    let mut primal_only = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" => {
                i += 1;
                rules_path = PathBuf::from(require_value(&args, i, "--rules"));
            }
            "--max-passes" => {
                i += 1;
                max_passes = Some(parse_value(&args, i, "--max-passes"));
            }
            "--seed" => {
                i += 1;
                seed = Some(parse_value(&args, i, "--seed"));
            }
            "--groups" => {
                i += 1;
                groups = parse_value(&args, i, "--groups");
            }
            "--primal-only" => primal_only = true,
            "--help" | "-h" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}\n{USAGE}");
                std::process::exit(1);
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    if positional.len() < 2 || positional.len() > 3 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let p: u32 = positional[0].parse().unwrap_or_else(|_| {
        eprintln!("P must be a positive integer, got '{}'", positional[0]);
        std::process::exit(1);
    });
    let q: u32 = positional[1].parse().unwrap_or_else(|_| {
        eprintln!("Q must be a positive integer, got '{}'", positional[1]);
        std::process::exit(1);
    });
    if p < 3 || q < 3 {
        eprintln!("P and Q must both be at least 3 for a valid tiling");
        std::process::exit(1);
    }

    let word = positional.get(2).map(|s| {
        s.parse::<Word>().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        })
    });

    CheckerConfig {
        key: TilingKey::new(p, q),
        word,
        rules_path,
        max_passes,
        seed,
        groups,
        primal_only,
    }
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    args.get(i).map(String::as_str).unwrap_or_else(|| {
        eprintln!("{flag} requires a value\n{USAGE}");
        std::process::exit(1);
    })
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = require_value(args, i, flag);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("{flag}: invalid value '{raw}'\n{USAGE}");
        std::process::exit(1);
    })
}
