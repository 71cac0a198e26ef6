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
#![doc = include_str!("../README.md")]

pub mod aligner;
mod alignment;
pub mod codon;
mod error;
mod options;
mod sequence;

pub use aligner::{Aligner, Direction, DpTable, Penalties, SubstitutionMatrix};
pub use alignment::Alignment;
pub use codon::CodonTable;
pub use error::AlignError;
pub use options::{Options, StartResidues};
pub use sequence::Sequence;

/// The gap character used in aligned sequences.
pub const GAP: u8 = b'-';

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
