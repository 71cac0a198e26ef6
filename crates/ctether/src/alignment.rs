//! The result of aligning a reference against a candidate.

use distances::{number::IInt, Number};
use serde::Serialize;

/// A reference (the subject) aligned against part of a candidate (the query).
///
/// Both aligned strings read from the start residue of the candidate towards
/// the end of both sequences, with gaps marked by the aligner's gap character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alignment<T: IInt> {
    /// The aligned reference.
    pub(crate) subject: String,
    /// The aligned candidate.
    pub(crate) query: String,
    /// The score of the alignment.
    pub(crate) score: T,
    /// The number of gap columns in either sequence.
    pub(crate) gaps: usize,
    /// The number of columns.
    pub(crate) length: usize,
    /// The number of candidate residues in the alignment.
    pub(crate) sublength: usize,
    /// The number of columns with identical residues.
    pub(crate) identities: usize,
    /// The score of aligning the aligned reference residues with themselves.
    pub(crate) perfect: T,
    /// The index in the reference of its first aligned residue.
    pub(crate) subject_start: usize,
    /// The index in the candidate of its first aligned residue.
    pub(crate) query_start: usize,
}

impl<T: IInt> Alignment<T> {
    /// The aligned reference, with gaps.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The aligned candidate, with gaps.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The score at the chosen endpoint.
    #[must_use]
    pub const fn score(&self) -> T {
        self.score
    }

    /// The number of gap columns.
    #[must_use]
    pub const fn gaps(&self) -> usize {
        self.gaps
    }

    /// The number of columns.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The number of candidate residues covered.
    #[must_use]
    pub const fn sublength(&self) -> usize {
        self.sublength
    }

    /// The number of identical columns.
    #[must_use]
    pub const fn identities(&self) -> usize {
        self.identities
    }

    /// The best score the aligned reference residues could have reached.
    #[must_use]
    pub const fn perfect(&self) -> T {
        self.perfect
    }

    /// Where the alignment starts in the reference.
    #[must_use]
    pub const fn subject_start(&self) -> usize {
        self.subject_start
    }

    /// Where the alignment starts in the candidate, i.e. the index of the
    /// start residue.
    #[must_use]
    pub const fn query_start(&self) -> usize {
        self.query_start
    }

    /// The number of columns with two different residues.
    #[must_use]
    pub const fn mismatches(&self) -> usize {
        self.length - self.identities - self.gaps
    }

    /// The fraction of columns that are identical.
    #[must_use]
    pub fn identity(&self) -> f64 {
        if self.length == 0 {
            0.0
        } else {
            self.identities.as_f64() / self.length.as_f64()
        }
    }

    /// The score as a fraction of the perfect score.
    ///
    /// This is `NaN` when the perfect score is zero.
    #[must_use]
    pub fn score_ratio(&self) -> f64 {
        self.score.as_f64() / self.perfect.as_f64()
    }
}
