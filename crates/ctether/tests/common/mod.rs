//! Sequence generation and independent scoring for the integration tests.

use ctether::{Alignment, Penalties, SubstitutionMatrix, GAP};
use rand::prelude::*;

/// The 20 standard amino acids.
pub const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// A random protein of `len` residues drawn from `alphabet`.
pub fn random_protein<R: Rng>(alphabet: &[u8], len: usize, rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| alphabet[rng.gen_range(0..alphabet.len())]).collect()
}

/// A random reference and a random candidate that holds at least one `M`.
pub fn random_pair<R: Rng>(alphabet: &[u8], rng: &mut R) -> (Vec<u8>, Vec<u8>) {
    let reference = random_protein(alphabet, rng.gen_range(1..30), rng);

    let mut candidate = random_protein(alphabet, rng.gen_range(0..40), rng);
    let start = rng.gen_range(0..=candidate.len());
    candidate.insert(start, b'M');

    (reference, candidate)
}

/// Remove the gaps from an aligned sequence.
pub fn ungapped(aligned: &str) -> Vec<u8> {
    aligned.bytes().filter(|&c| c != GAP).collect()
}

/// Score the columns of an alignment from scratch.
///
/// The columns are scored from the C-terminal end, as the aligner does, with
/// the extra gap-open cost for any gap that follows a pair of residues or the
/// start of the walk. Sequences that end in different residues, ignoring case,
/// pay the gap-open cost once more.
pub fn rescore(
    [reference, candidate]: [&[u8]; 2],
    alignment: &Alignment<i32>,
    matrix: &SubstitutionMatrix<i32>,
    penalties: &Penalties<i32>,
) -> i32 {
    let same_end = reference
        .last()
        .zip(candidate.last())
        .is_some_and(|(a, b)| a.eq_ignore_ascii_case(b));
    let origin = if same_end {
        0
    } else {
        -penalties.gap_open
    };

    let columns = alignment
        .subject()
        .bytes()
        .zip(alignment.query().bytes())
        .rev()
        .collect::<Vec<_>>();

    let (score, _) = columns.iter().fold((origin, true), |(score, after_pair), &(a, b)| {
        if a == GAP || b == GAP {
            let cost = if after_pair {
                penalties.gap + penalties.gap_open
            } else {
                penalties.gap
            };
            (score - cost, false)
        } else {
            let sub = matrix.score(a, b).unwrap_or_else(|| unreachable!("Pairs were checked."));
            (score + sub, true)
        }
    });

    score
}
