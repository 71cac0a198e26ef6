//! Errors raised while configuring an `Aligner` or aligning two sequences.

use thiserror::Error;

/// Everything that can go wrong with a constrained alignment.
///
/// None of these are worth retrying with the same inputs: every call is
/// deterministic, so the same inputs reproduce the same failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// The candidate contains no residue from the start-codon set, so there
    /// is nowhere for an alignment to begin.
    #[error("candidate sequence does not contain a start codon")]
    NoStartCodon,

    /// The reference has no residues.
    #[error("reference sequence is empty")]
    EmptyReference,

    /// The table was filled, but no cell passed both the start-codon and the
    /// length-tolerance checks.
    #[error("no alignment endpoint satisfies both the start codon and length tolerance constraints")]
    NoAdmissibleAlignment,

    /// The traceback hit a cell whose direction is unset or points out of the
    /// table.
    #[error("traceback reached an invalid direction at row {row}, column {col}")]
    BrokenTraceback {
        /// The row of the offending cell.
        row: usize,
        /// The column of the offending cell.
        col: usize,
    },

    /// The substitution matrix has no score for a pair of residues.
    #[error("no substitution score defined for residues {a:?} and {b:?}")]
    UndefinedSubstitution {
        /// The residue from the reference.
        a: char,
        /// The residue from the candidate.
        b: char,
    },

    /// A configured start codon is not three unambiguous nucleotides.
    #[error("cannot translate start codon {0:?}")]
    InvalidCodon(String),

    /// The length tolerance is NaN or infinite.
    #[error("length tolerance must be finite, got {0}")]
    InvalidTolerance(f64),

    /// A gap penalty is below zero.
    #[error("gap penalties must be non-negative")]
    NegativePenalty,

    /// Some score in a table of this shape could leave the range of the score
    /// type, given the penalties and the substitution scores involved.
    #[error("scores in a {rows} by {cols} table may overflow the score type")]
    ScoreOverflow {
        /// The number of rows of the table.
        rows: usize,
        /// The number of columns of the table.
        cols: usize,
    },
}

impl AlignError {
    /// Whether the input sequences were rejected before any computation.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::NoStartCodon | Self::EmptyReference)
    }

    /// Whether the substitution matrix lacks a score the alignment needs.
    #[must_use]
    pub const fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::UndefinedSubstitution { .. })
    }
}
