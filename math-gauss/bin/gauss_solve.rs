//! Solve a linear system stored as an augmented matrix file
//!
//! Usage:
//!     cargo run --bin gauss-solve --release -- data/matrix.txt
//!     cargo run --bin gauss-solve --release -- data/matrix.txt --parallel --threads 4
//!
//! Set `RUST_LOG=debug` to follow the pivot steps.

use anyhow::Context;
use clap::Parser;
use math_gauss::{EliminationConfig, GaussError, GaussReport, Schedule, load_matrix, solve};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gauss-solve",
    about = "Solve a square linear system with Gaussian elimination and partial pivoting"
)]
struct Cli {
    /// Augmented matrix file: one equation per line, right-hand side last
    #[arg(default_value = "matrix.txt")]
    file: PathBuf,

    /// Eliminate the rows below each pivot concurrently
    #[arg(short, long)]
    parallel: bool,

    /// Number of threads for the concurrent forward pass (0 = use all available cores)
    #[arg(short = 't', long, default_value_t = 0)]
    threads: usize,

    /// Magnitudes below this value are treated as zero
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
}

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if !(args.tolerance > 0.0 && args.tolerance.is_finite()) {
        eprintln!(
            "Error: --tolerance must be a positive number; got {}",
            args.tolerance
        );
        process::exit(2);
    }

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        match err.downcast_ref::<GaussError>() {
            Some(GaussError::InconsistentSystem { .. }) => {
                println!("\nThe system is inconsistent: no solution exists.");
                process::exit(1);
            }
            _ => process::exit(2),
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let matrix = load_matrix(&args.file)
        .with_context(|| format!("loading matrix from {}", args.file.display()))?;

    println!("Original augmented matrix:");
    println!("{matrix}");

    let mut config = EliminationConfig::default().with_tolerance(args.tolerance);
    if args.parallel {
        config = config.with_schedule(Schedule::Concurrent);
        if args.threads > 0 {
            config = config.with_num_threads(args.threads);
        }
    }

    let report = solve(&matrix, &config)?;
    print_report(&report, args.tolerance);
    Ok(())
}

fn print_report(report: &GaussReport<f64>, tolerance: f64) {
    println!("\nSolution:");
    for (i, value) in report.solution.x.iter().enumerate() {
        println!("x{} = {value:.6}", i + 1);
    }

    if !report.solution.is_unique() {
        let names: Vec<String> = report
            .solution
            .free_variables
            .iter()
            .map(|i| format!("x{}", i + 1))
            .collect();
        println!(
            "Note: the system is degenerate; {} set to 0 (one of infinitely many solutions)",
            names.join(", ")
        );
    }

    let verification = &report.verification;
    match &verification.first_failure {
        None => println!(
            "\nSolution verified: every equation holds within {tolerance:e} (max residual {:.3e})",
            verification.max_residual
        ),
        Some(mismatch) => {
            println!(
                "\nSolution is NOT exact: equation {} does not hold (left side {:.6}, right side {:.6})",
                mismatch.row + 1,
                mismatch.actual,
                mismatch.expected
            );
            println!("Max residual: {:.3e}", verification.max_residual);
        }
    }

    if report.schedule == Schedule::Concurrent {
        println!("\nForward elimination time: {:.2?}", report.elimination_time);
    }
}
