//! The commands under the `ctether` CLI.

pub mod align;

use std::path::PathBuf;

use clap::Subcommand;

use crate::matrix::Matrix;

/// The subcommands of the CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align every candidate against a reference and write a report.
    Align {
        /// The path to the FASTA file whose first record is the reference.
        #[arg(short('r'), long)]
        reference: PathBuf,

        /// The path to the FASTA file of candidates.
        #[arg(short('c'), long)]
        candidates: PathBuf,

        /// The path to the tab-separated report. Defaults to standard output.
        #[arg(short('o'), long)]
        out_path: Option<PathBuf>,

        /// The cost of every gap position.
        #[arg(long, default_value_t = 1)]
        gap: i32,

        /// The extra cost of opening a gap.
        #[arg(long, default_value_t = 10)]
        gap_open: i32,

        /// The start codons, separated by commas.
        #[arg(long, value_delimiter = ',', default_value = "ATG")]
        start_codons: Vec<String>,

        /// The largest fraction of the reference that may be left unaligned.
        #[arg(long, default_value_t = 0.2)]
        length_tolerance: f64,

        /// Whether the candidates are nucleotide sequences to translate first.
        #[arg(long, default_value_t = false)]
        nucleotide: bool,

        /// The substitution matrix to use.
        #[arg(short('m'), long, default_value = "blosum62")]
        matrix: Matrix,
    },
}
