//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Problems are given either inline (`--width` plus comma-separated term
//! lists) or as a JSON truth-table file. Inline terms are decimal integers
//! unless prefixed with `0b`, in which case the remainder is taken as a
//! binary string.

use clap::Parser;
use qmc_logic::{Problem, ProblemBuilder, TermInput, TruthTable};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qmc")]
#[command(about = "Exact Quine-McCluskey logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// JSON truth-table file (alternative to the inline term lists)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Number of Boolean variables (required without FILE)
    #[arg(short = 'w', long)]
    width: Option<usize>,

    /// Required-true terms, comma-separated
    #[arg(short = 'm', long, value_delimiter = ',', value_name = "TERMS")]
    minterms: Vec<String>,

    /// Required-false terms, comma-separated (mutually exclusive with --minterms)
    #[arg(short = 'M', long, value_delimiter = ',', value_name = "TERMS")]
    maxterms: Vec<String>,

    /// Don't-care terms, comma-separated
    #[arg(short = 'd', long, value_delimiter = ',', value_name = "TERMS")]
    dontcares: Vec<String>,

    /// Report every cover found, not only the minimum-cost ones
    #[arg(long)]
    all: bool,

    /// Keep implicants in discovery order instead of sorting each cover
    #[arg(long)]
    unsorted: bool,

    /// Print the prime implicants and covers to stderr while solving
    #[arg(short = 's', long)]
    summary: bool,
}

fn main() {
    let args = Args::parse();

    let mut problem = match build_problem(&args) {
        Ok(problem) => problem,
        Err(message) => {
            eprintln!("qmc: {}", message);
            process::exit(1);
        }
    };

    if args.summary {
        let dash = problem.dash();
        eprintln!("Prime implicants:");
        for (prime, covered) in problem.find_primes() {
            let covered: Vec<&str> = covered.iter().map(String::as_str).collect();
            eprintln!("  {}  covers {}", prime, covered.join(", "));
        }
        eprintln!("Covers:");
        for cover in problem.covers() {
            eprintln!(
                "  {}  (cost {})",
                cover.join(" "),
                qmc_logic::cover_cost(cover, dash)
            );
        }
    }

    for expr in problem.solve() {
        println!("{}", expr);
    }
}

fn build_problem(args: &Args) -> Result<Problem, String> {
    if let Some(path) = &args.input {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        let mut table: TruthTable = serde_json::from_str(&text)
            .map_err(|e| format!("cannot parse '{}': {}", path.display(), e))?;
        if args.all {
            table.minonly = Some(false);
        }
        if args.unsorted {
            table.sortterms = Some(false);
        }
        return table.into_problem().map_err(|e| e.to_string());
    }

    let width = args
        .width
        .ok_or("either FILE or --width is required".to_string())?;
    let builder = ProblemBuilder::new(width)
        .minterms(parse_terms(&args.minterms)?)
        .maxterms(parse_terms(&args.maxterms)?)
        .dontcares(parse_terms(&args.dontcares)?)
        .minonly(!args.all)
        .sortterms(!args.unsorted);
    builder.build().map_err(|e| e.to_string())
}

fn parse_terms(tokens: &[String]) -> Result<Vec<TermInput>, String> {
    tokens
        .iter()
        .map(|token| {
            if let Some(bits) = token.strip_prefix("0b") {
                Ok(TermInput::from(bits))
            } else {
                token
                    .parse::<u64>()
                    .map(TermInput::from)
                    .map_err(|_| format!("invalid term '{}'", token))
            }
        })
        .collect()
}
