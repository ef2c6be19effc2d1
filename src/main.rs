use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use clap::{Args, Parser, Subcommand};
use dpalign::{
    display::{AffineReport, MatrixDisplay},
    parallel::{ParallelAffineAligner, ParallelLocalAligner},
    sequential::{AffineAligner, AffineMatrices, LocalAligner, LocalFill},
    Aligner, ScoringPolicy,
};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "dpalign", about = "Smith-Waterman and affine-gap global alignment scores")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Smith-Waterman local alignment (flat gap penalty)
    Local(RunArgs),
    /// Gotoh global alignment with affine gaps
    Affine(RunArgs),
    /// Affine alignment of AGCAGGGGT against CAGG with the full matrix report
    Demo,
}

#[derive(Args, Debug)]
struct RunArgs {
    x: String,
    y: String,
    #[arg(long, allow_negative_numbers = true)]
    gap_open: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    gap_extend: Option<f64>,
    #[arg(long = "match", allow_negative_numbers = true)]
    match_score: Option<f64>,
    #[arg(long = "mismatch", allow_negative_numbers = true)]
    mismatch_score: Option<f64>,
    /// Fill anti-diagonals on the rayon thread pool
    #[arg(long)]
    parallel: bool,
    /// Print the filled matrices
    #[arg(long)]
    show_matrices: bool,
    /// Write the report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn policy(&self, base: ScoringPolicy) -> ScoringPolicy {
        let mut policy = base;
        if let Some(v) = self.gap_open {
            policy = policy.with_gap_open(v);
        }
        if let Some(v) = self.gap_extend {
            policy = policy.with_gap_extend(v);
        }
        if let Some(v) = self.match_score {
            policy = policy.with_match(v);
        }
        if let Some(v) = self.mismatch_score {
            policy = policy.with_mismatch(v);
        }
        policy
    }

    fn writer(&self) -> std::io::Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(std::io::stdout().lock()),
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    match Cli::parse().command {
        Command::Local(args) => run_local(&args),
        Command::Affine(args) => run_affine(&args),
        Command::Demo => run_demo(),
    }
}

fn run_local(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (x, y) = (args.x.as_bytes(), args.y.as_bytes());
    let policy = args.policy(ScoringPolicy::local_default());
    info!("local alignment, {policy}");

    let start = Instant::now();
    let LocalFill { matrix, best } = if args.parallel {
        ParallelLocalAligner::with(x, y, policy).fill()?
    } else {
        LocalAligner::with(x, y, policy).fill()?
    };
    let elapsed = start.elapsed().as_secs_f64();

    let mut out = args.writer()?;
    if args.show_matrices {
        write!(out, "{}", MatrixDisplay { x, y, matrix: &matrix })?;
    }
    writeln!(out, "Local: {best} Time: {elapsed}")?;
    out.flush()?;
    Ok(())
}

fn run_affine(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (x, y) = (args.x.as_bytes(), args.y.as_bytes());
    let policy = args.policy(ScoringPolicy::affine_default());
    info!("affine alignment, {policy}");

    let start = Instant::now();
    let matrices = if args.parallel {
        ParallelAffineAligner::with(x, y, policy).fill()?
    } else {
        AffineAligner::with(x, y, policy).fill()?
    };
    let elapsed = start.elapsed().as_secs_f64();

    let mut out = args.writer()?;
    if args.show_matrices {
        write_report(&mut out, x, y, &policy, &matrices)?;
    }
    writeln!(out, "Affine: Score: {} Time: {elapsed}", matrices.optimal())?;
    out.flush()?;
    Ok(())
}

fn run_demo() -> Result<(), Box<dyn std::error::Error>> {
    let (x, y) = (b"AGCAGGGGT", b"CAGG");
    // (gap_start, gap, match, mismatch)
    let policy = ScoringPolicy::new(-15.0, -7.0, 30.0, -5.0);
    let matrices = AffineAligner::with(x, y, policy).fill()?;
    write_report(&mut std::io::stdout().lock(), x, y, &policy, &matrices)?;
    Ok(())
}

fn write_report(
    out: &mut dyn Write,
    x: &[u8],
    y: &[u8],
    policy: &ScoringPolicy,
    matrices: &AffineMatrices,
) -> std::io::Result<()> {
    let report = AffineReport {
        x,
        y,
        policy,
        matrices,
    };
    write!(out, "{report}")
}
