//! Tethered global alignment of a reference against a start-anchored suffix of
//! a candidate.
//!
//! Both sequences are reversed before the DP table is filled, so that the
//! start residue, which sits near the head of the candidate, ends up near the
//! far corner of the table. The best admissible cell then anchors a traceback
//! that runs back to the ends of both sequences.

use distances::{number::IInt, Number};
use rayon::prelude::*;

mod endpoint;
mod ops;
mod substitution_matrix;
mod table;
mod traceback;

pub use endpoint::Endpoint;
pub use ops::{Direction, Penalties};
pub use substitution_matrix::SubstitutionMatrix;
pub use table::DpTable;

use endpoint::EndpointSelector;

use crate::{AlignError, Alignment, CodonTable, Options, Sequence, StartResidues, GAP};

/// An aligner that tethers the alignment to a start codon in the candidate.
///
/// The aligner borrows its substitution matrix, so one matrix can be shared
/// by many aligners and threads.
#[derive(Clone, Debug)]
pub struct Aligner<'a, T: IInt> {
    /// The substitution scores.
    matrix: &'a SubstitutionMatrix<T>,
    /// The residues translated from the start codons.
    starts: StartResidues,
    /// The largest admissible fraction of the reference left unaligned.
    length_tolerance: f64,
    /// The gap penalties.
    penalties: Penalties<T>,
    /// The gap character.
    gap: u8,
}

impl<'a, T: IInt> Aligner<'a, T> {
    /// Create a new aligner with the default penalties and gap character.
    ///
    /// The start codons are translated with the standard genetic code.
    ///
    /// # Errors
    ///
    /// * `InvalidTolerance` if the length tolerance is not finite.
    /// * `InvalidCodon` if a start codon cannot be translated.
    pub fn new(matrix: &'a SubstitutionMatrix<T>, options: &Options) -> Result<Self, AlignError> {
        Self::with_codon_table(matrix, options, &CodonTable::standard())
    }

    /// Create a new aligner, translating the start codons with `code`.
    ///
    /// # Errors
    ///
    /// See [`Aligner::new`].
    pub fn with_codon_table(
        matrix: &'a SubstitutionMatrix<T>,
        options: &Options,
        code: &CodonTable,
    ) -> Result<Self, AlignError> {
        options.validate()?;
        let starts = options.start_residues(code)?;
        ftlog::debug!(
            "Start residues {:?} with length tolerance {}.",
            String::from_utf8_lossy(&starts.residues()),
            options.length_tolerance()
        );

        Ok(Self {
            matrix,
            starts,
            length_tolerance: options.length_tolerance(),
            penalties: Penalties::default(),
            gap: GAP,
        })
    }

    /// Replace the gap penalties.
    ///
    /// # Errors
    ///
    /// * `NegativePenalty` if either penalty is below zero.
    pub fn with_penalties(mut self, penalties: Penalties<T>) -> Result<Self, AlignError> {
        penalties.validate()?;
        self.penalties = penalties;
        Ok(self)
    }

    /// Replace the gap character used in aligned sequences.
    #[must_use]
    pub const fn with_gap(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    /// The gap character.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// The gap penalties.
    #[must_use]
    pub const fn penalties(&self) -> Penalties<T> {
        self.penalties
    }

    /// The residues at which an alignment may begin.
    #[must_use]
    pub const fn start_residues(&self) -> &StartResidues {
        &self.starts
    }

    /// Check the inputs and reverse them.
    ///
    /// # Errors
    ///
    /// * `EmptyReference` if the reference has no residues.
    /// * `NoStartCodon` if no candidate residue is a start residue.
    /// * `UndefinedSubstitution` if the matrix lacks a pair the DP table or
    ///   the perfect score would need.
    /// * `ScoreOverflow` if the scores could leave the range of `T`.
    fn reversed(&self, reference: &[u8], candidate: &[u8]) -> Result<[Vec<u8>; 2], AlignError> {
        if reference.is_empty() {
            return Err(AlignError::EmptyReference);
        }
        if !self.starts.any_in(candidate) {
            return Err(AlignError::NoStartCodon);
        }
        self.matrix.check_pairs(reference, candidate)?;
        self.check_range(reference, candidate)?;

        Ok([reference, candidate].map(|s| s.iter().rev().copied().collect()))
    }

    /// Make sure that every score of the DP table, and every move weighed
    /// while filling it, fits in `T`.
    ///
    /// A cell is at most `rows + cols` moves from the origin, and no move
    /// changes the score by more than the largest gap cost or the largest
    /// substitution magnitude. The origin adds at most `gap_open`.
    fn check_range(&self, reference: &[u8], candidate: &[u8]) -> Result<(), AlignError> {
        let overflow = AlignError::ScoreOverflow {
            rows: reference.len() + 1,
            cols: candidate.len() + 1,
        };

        let step = match (
            self.penalties.largest_gap_cost(),
            self.matrix.largest_magnitude(reference, candidate),
        ) {
            (Some(gap), Some(sub)) => {
                if gap > sub {
                    gap
                } else {
                    sub
                }
            }
            _ => return Err(overflow),
        };
        if step == T::ZERO {
            return Ok(());
        }

        let moves = reference.len() + candidate.len();
        let room = T::MAX - self.penalties.gap_open;
        if (room / step).as_f64() >= moves.as_f64() {
            Ok(())
        } else {
            ftlog::debug!("Rejecting a {moves}-move table with moves of up to {step}.");
            Err(overflow)
        }
    }

    /// A fresh endpoint selector for a reference of `ref_len` residues.
    const fn selector(&self, ref_len: usize) -> EndpointSelector<'_, T> {
        EndpointSelector::new(&self.starts, ref_len, self.length_tolerance)
    }

    /// Compute the DP table for the reversed sequences.
    ///
    /// The value at `(i, j)` is the best score of the last `i` residues of the
    /// reference against the last `j` residues of the candidate.
    ///
    /// # Errors
    ///
    /// The same input errors as [`Aligner::align`].
    pub fn dp_table<R, C>(&self, reference: &R, candidate: &C) -> Result<DpTable<T>, AlignError>
    where
        R: Sequence + ?Sized,
        C: Sequence + ?Sized,
    {
        let [v, w] = self.reversed(reference.residues(), candidate.residues())?;
        let mut table = DpTable::with_borders(&v, &w, &self.penalties);
        table.fill([v.as_slice(), w.as_slice()], self.matrix, &self.penalties, &mut self.selector(v.len()));
        Ok(table)
    }

    /// Align `reference` against the best start-anchored suffix of
    /// `candidate`.
    ///
    /// # Errors
    ///
    /// * `EmptyReference` if the reference has no residues.
    /// * `NoStartCodon` if the candidate has no start residue.
    /// * `UndefinedSubstitution` if the matrix lacks a needed pair.
    /// * `ScoreOverflow` if the scores could leave the range of `T`.
    /// * `NoAdmissibleAlignment` if no cell meets both endpoint constraints.
    /// * `BrokenTraceback` if the direction table is inconsistent.
    pub fn align<R, C>(&self, reference: &R, candidate: &C) -> Result<Alignment<T>, AlignError>
    where
        R: Sequence + ?Sized,
        C: Sequence + ?Sized,
    {
        let [v, w] = self.reversed(reference.residues(), candidate.residues())?;

        let mut table = DpTable::with_borders(&v, &w, &self.penalties);
        let mut selector = self.selector(v.len());
        table.fill([v.as_slice(), w.as_slice()], self.matrix, &self.penalties, &mut selector);

        self.finish(&table, [v.as_slice(), w.as_slice()], selector.best())
    }

    /// Parallel version of [`Aligner::align`].
    ///
    /// The table is filled one anti-diagonal at a time, and the result is
    /// identical to the sequential one.
    ///
    /// # Errors
    ///
    /// See [`Aligner::align`].
    pub fn par_align<R, C>(&self, reference: &R, candidate: &C) -> Result<Alignment<T>, AlignError>
    where
        R: Sequence + ?Sized,
        C: Sequence + ?Sized,
    {
        let [v, w] = self.reversed(reference.residues(), candidate.residues())?;

        let mut table = DpTable::with_borders(&v, &w, &self.penalties);
        table.par_fill([v.as_slice(), w.as_slice()], self.matrix, &self.penalties);
        let mut selector = self.selector(v.len());
        table.select(&w, &mut selector);

        self.finish(&table, [v.as_slice(), w.as_slice()], selector.best())
    }

    /// Trace back from the chosen endpoint, if there is one.
    fn finish(
        &self,
        table: &DpTable<T>,
        [v, w]: [&[u8]; 2],
        endpoint: Option<Endpoint<T>>,
    ) -> Result<Alignment<T>, AlignError> {
        let endpoint = endpoint.ok_or(AlignError::NoAdmissibleAlignment)?;
        ftlog::debug!(
            "Filled a {:?} table and chose endpoint ({}, {}) with score {}.",
            table.shape(),
            endpoint.row,
            endpoint.col,
            endpoint.score
        );
        traceback::traceback(table, [v, w], self.matrix, self.gap, endpoint)
    }

    /// Align one reference against many candidates, one at a time.
    #[must_use]
    pub fn align_many<R, C>(&self, reference: &R, candidates: &[C]) -> Vec<Result<Alignment<T>, AlignError>>
    where
        R: Sequence + ?Sized,
        C: Sequence,
    {
        candidates.iter().map(|c| self.align(reference, c)).collect()
    }

    /// Parallel version of [`Aligner::align_many`].
    ///
    /// Each candidate is aligned on its own thread with the sequential
    /// algorithm, and the results keep the order of `candidates`.
    #[must_use]
    pub fn par_align_many<R, C>(&self, reference: &R, candidates: &[C]) -> Vec<Result<Alignment<T>, AlignError>>
    where
        R: Sequence + Sync + ?Sized,
        C: Sequence + Sync,
    {
        candidates.par_iter().map(|c| self.align(reference, c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Aligner, Direction as D, SubstitutionMatrix};
    use crate::{AlignError, Options, Penalties};

    #[test]
    fn dp_table() -> Result<(), AlignError> {
        let matrix = SubstitutionMatrix::<i32>::blosum62();
        let aligner = Aligner::new(&matrix, &Options::default())?;

        let table = aligner.dp_table("MK", "MK")?;
        let expected = vec![
            vec![(0, Some(D::Diagonal)), (-11, Some(D::Left)), (-12, Some(D::Left))],
            vec![(-11, Some(D::Up)), (5, Some(D::Diagonal)), (-6, Some(D::Left))],
            vec![(-12, Some(D::Up)), (-6, Some(D::Up)), (10, Some(D::Diagonal))],
        ];
        assert_eq!(table.to_rows(), expected);

        Ok(())
    }

    #[test]
    fn ties() -> Result<(), AlignError> {
        let alphabet = b"MKTA";

        // Every move scores the same, so every interior cell is diagonal.
        let flat = SubstitutionMatrix::<i32>::match_mismatch(alphabet, 0, 0);
        let aligner = Aligner::new(&flat, &Options::default())?.with_penalties(Penalties::new(0, 0))?;
        let table = aligner.dp_table("MKT", "AMKT")?;
        let (rows, cols) = table.shape();
        for r in 1..rows {
            for c in 1..cols {
                assert_eq!(table.direction(r, c), Some(D::Diagonal), "({r}, {c})");
            }
        }

        // Free gaps beat costly substitutions, and a gap in the reference is
        // preferred.
        let costly = SubstitutionMatrix::<i32>::match_mismatch(alphabet, -1, -1);
        let aligner = Aligner::new(&costly, &Options::default())?.with_penalties(Penalties::new(0, 0))?;
        let table = aligner.dp_table("MKT", "AMKT")?;
        let (rows, cols) = table.shape();
        for r in 1..rows {
            for c in 1..cols {
                assert_eq!(table.direction(r, c), Some(D::Left), "({r}, {c})");
            }
        }

        Ok(())
    }

    #[test]
    fn configuration() -> Result<(), AlignError> {
        let matrix = SubstitutionMatrix::<i32>::blosum62();

        let aligner = Aligner::new(&matrix, &Options::default())?.with_gap(b'.');
        assert_eq!(aligner.gap(), b'.');
        assert_eq!(aligner.penalties(), Penalties::new(1, 10));
        assert_eq!(aligner.start_residues().residues(), b"M");

        assert_eq!(
            Aligner::new(&matrix, &Options::default())?
                .with_penalties(Penalties::new(-1, 10))
                .map(|a| a.penalties()),
            Err(AlignError::NegativePenalty)
        );
        assert!(matches!(
            Aligner::new(&matrix, &Options::default().with_length_tolerance(f64::INFINITY)),
            Err(AlignError::InvalidTolerance(_))
        ));
        assert!(matches!(
            Aligner::new(&matrix, &Options::default().with_start_codons(&["AT"])),
            Err(AlignError::InvalidCodon(_))
        ));

        Ok(())
    }
}
