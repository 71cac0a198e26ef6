#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
//! CLI for tethered alignment of reference proteins against candidate
//! translations.

mod commands;
mod data;
mod matrix;
mod report;
mod utils;

use clap::Parser;

use commands::Commands;
use ctether::{Options, Penalties};

/// Tethered alignment of reference proteins against candidate translations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Whether to log debug messages.
    #[arg(short('v'), long, default_value_t = false)]
    verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.verbose {
        ftlog::LevelFilter::Debug
    } else {
        ftlog::LevelFilter::Info
    };
    // We need the `_guard` in scope to ensure proper logging.
    let (_guard, log_path) = utils::configure_logger("ctether", level)?;
    eprintln!("Log file: {log_path:?}");
    ftlog::info!("{args:?}");

    match args.command {
        Commands::Align {
            reference,
            candidates,
            out_path,
            gap,
            gap_open,
            start_codons,
            length_tolerance,
            nucleotide,
            matrix,
        } => commands::align::AlignJob {
            reference,
            candidates,
            out_path,
            penalties: Penalties::new(gap, gap_open),
            options: Options::default()
                .with_start_codons(start_codons.as_slice())
                .with_length_tolerance(length_tolerance),
            nucleotide,
            matrix,
        }
        .run()?,
    }

    Ok(())
}
