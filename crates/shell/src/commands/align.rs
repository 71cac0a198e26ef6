//! Aligning a batch of candidates against one reference.

use std::path::PathBuf;

use ctether::{Aligner, CodonTable, Options, Penalties};

use crate::{data::fasta, matrix::Matrix, report};

/// Everything the `align` command needs.
#[derive(Debug)]
pub struct AlignJob {
    /// The FASTA file whose first record is the reference.
    pub reference: PathBuf,
    /// The FASTA file of candidates.
    pub candidates: PathBuf,
    /// Where to write the report, or standard output if `None`.
    pub out_path: Option<PathBuf>,
    /// The gap penalties.
    pub penalties: Penalties<i32>,
    /// The start codons and length tolerance.
    pub options: Options,
    /// Whether to translate the candidates before aligning them.
    pub nucleotide: bool,
    /// The substitution matrix.
    pub matrix: Matrix,
}

impl AlignJob {
    /// Aligns every candidate in parallel and writes one report row each.
    ///
    /// # Errors
    ///
    /// * If either FASTA file cannot be read.
    /// * If the options or penalties are invalid.
    /// * If the report cannot be written.
    pub fn run(&self) -> Result<(), String> {
        let code = CodonTable::standard();
        let matrix = self.matrix.substitution_matrix();
        let aligner = Aligner::with_codon_table(&matrix, &self.options, &code)
            .and_then(|a| a.with_penalties(self.penalties))
            .map_err(|e| e.to_string())?;

        let reference = fasta::read(&self.reference)?
            .into_iter()
            .next()
            .ok_or_else(|| format!("No reference in {:?}", self.reference))?;
        ftlog::info!("Reference {} has {} residues.", reference.id(), reference.seq().len());

        let candidates = fasta::read(&self.candidates)?;
        let candidates = if self.nucleotide {
            ftlog::info!("Translating {} candidates.", candidates.len());
            fasta::translate(&candidates, &code)
        } else {
            candidates
        };

        ftlog::info!("Aligning {} candidates against {}.", candidates.len(), reference.id());
        let results = aligner.par_align_many(&reference, &candidates);

        let failed = results.iter().filter(|r| r.is_err()).count();
        ftlog::info!("Aligned {} candidates, {failed} failed.", results.len() - failed);
        for (candidate, result) in candidates.iter().zip(results.iter()) {
            if let Err(e) = result {
                ftlog::debug!("Candidate {}: {e}", candidate.id());
            }
        }

        let rows = candidates
            .iter()
            .zip(results.iter())
            .map(|(c, r)| report::Row::new(c.id(), r))
            .collect::<Vec<_>>();

        match &self.out_path {
            Some(path) => {
                let file = std::fs::File::create(path).map_err(|e| e.to_string())?;
                report::write(file, &rows)?;
                ftlog::info!("Wrote report to {path:?}.");
            }
            None => report::write(std::io::stdout().lock(), &rows)?,
        }

        Ok(())
    }
}
