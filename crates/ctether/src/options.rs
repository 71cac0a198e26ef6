//! Configuration for the endpoint constraints of an `Aligner`.

use serde::{Deserialize, Serialize};

use crate::{AlignError, CodonTable};

/// The number of distinct byte values.
const NUM_CHARS: usize = 1 + (u8::MAX as usize);

/// Which alignments are admissible.
///
/// The start codons pick the candidate residues at which an alignment may
/// begin, and the length tolerance bounds how far the aligned part of the
/// reference may fall short of the full reference, as a fraction of its
/// length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Nucleotide triplets that may start a translation.
    start_codons: Vec<String>,
    /// The largest admissible `|len(reference) - row| / len(reference)`.
    length_tolerance: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            start_codons: vec!["ATG".to_string()],
            length_tolerance: 0.2,
        }
    }
}

impl Options {
    /// Replace the start codons.
    #[must_use]
    pub fn with_start_codons<S: AsRef<str>>(mut self, codons: &[S]) -> Self {
        self.start_codons = codons.iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Replace the length tolerance.
    #[must_use]
    pub const fn with_length_tolerance(mut self, tolerance: f64) -> Self {
        self.length_tolerance = tolerance;
        self
    }

    /// The start codons.
    #[must_use]
    pub fn start_codons(&self) -> &[String] {
        &self.start_codons
    }

    /// The length tolerance.
    #[must_use]
    pub const fn length_tolerance(&self) -> f64 {
        self.length_tolerance
    }

    /// Translate the start codons into the set of start residues.
    ///
    /// # Errors
    ///
    /// * `InvalidCodon` if any start codon cannot be translated.
    pub fn start_residues(&self, code: &CodonTable) -> Result<StartResidues, AlignError> {
        self.start_codons.iter().try_fold(StartResidues::empty(), |starts, codon| {
            code.translate_codon(codon.as_bytes())
                .map(|residue| starts.with(residue))
                .ok_or_else(|| AlignError::InvalidCodon(codon.clone()))
        })
    }

    /// Check that the tolerance can be compared against.
    ///
    /// A negative tolerance is allowed; it simply admits no endpoint.
    pub(crate) fn validate(&self) -> Result<(), AlignError> {
        if self.length_tolerance.is_finite() {
            Ok(())
        } else {
            Err(AlignError::InvalidTolerance(self.length_tolerance))
        }
    }
}

/// The set of residues that translated start codons produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartResidues([bool; NUM_CHARS]);

impl StartResidues {
    /// A set with no residues.
    #[must_use]
    pub const fn empty() -> Self {
        Self([false; NUM_CHARS])
    }

    /// Add a residue to the set.
    #[must_use]
    pub const fn with(mut self, residue: u8) -> Self {
        self.0[residue as usize] = true;
        self
    }

    /// Whether `residue` is in the set.
    #[must_use]
    pub const fn contains(&self, residue: u8) -> bool {
        self.0[residue as usize]
    }

    /// Whether any residue of `sequence` is in the set.
    #[must_use]
    pub fn any_in(&self, sequence: &[u8]) -> bool {
        sequence.iter().any(|&r| self.contains(r))
    }

    /// The residues in the set, in byte order.
    #[must_use]
    pub fn residues(&self) -> Vec<u8> {
        (0..=u8::MAX).filter(|&r| self.contains(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Options, StartResidues};
    use crate::{AlignError, CodonTable};

    #[test]
    fn defaults() -> Result<(), AlignError> {
        let options = Options::default();
        assert_eq!(options.start_codons(), ["ATG".to_string()]);
        assert!((options.length_tolerance() - 0.2).abs() < f64::EPSILON);

        let starts = options.start_residues(&CodonTable::standard())?;
        assert_eq!(starts.residues(), b"M");
        assert!(starts.any_in(b"AAMKT"));
        assert!(!starts.any_in(b"AAKT"));

        Ok(())
    }

    #[test]
    fn bacterial_starts() -> Result<(), AlignError> {
        let options = Options::default().with_start_codons(&["ATG", "GTG", "TTG"]);
        let starts = options.start_residues(&CodonTable::standard())?;
        assert_eq!(starts.residues(), b"LMV");
        Ok(())
    }

    #[test]
    fn invalid() {
        let options = Options::default().with_start_codons(&["ATG", "NTG"]);
        assert_eq!(
            options.start_residues(&CodonTable::standard()),
            Err(AlignError::InvalidCodon("NTG".to_string()))
        );

        assert!(matches!(
            Options::default().with_length_tolerance(f64::NAN).validate(),
            Err(AlignError::InvalidTolerance(t)) if t.is_nan()
        ));
        assert!(Options::default().with_length_tolerance(-0.5).validate().is_ok());
    }

    #[test]
    fn empty_set() {
        let starts = StartResidues::empty();
        assert!(starts.residues().is_empty());
        assert!(!starts.any_in(b"MKT"));
    }
}
