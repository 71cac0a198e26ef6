//! Substitution scores for pairs of residues.

use distances::number::IInt;

use super::ops::magnitude;
use crate::AlignError;

/// The number of characters.
const NUM_CHARS: usize = 1 + (u8::MAX as usize);

/// A symmetric table of substitution scores.
///
/// Higher scores mean more similar residues. Pairs that were never given a
/// score are undefined, and aligning sequences that would need one fails
/// instead of silently scoring zero.
#[derive(Clone, Debug)]
pub struct SubstitutionMatrix<T: IInt> {
    /// The score of substituting one character for another.
    sub_matrix: Vec<Vec<Option<T>>>,
}

impl<T: IInt> Default for SubstitutionMatrix<T> {
    fn default() -> Self {
        Self::blosum62()
    }
}

impl<T: IInt> SubstitutionMatrix<T> {
    /// Create a matrix with no defined scores.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            sub_matrix: vec![vec![None; NUM_CHARS]; NUM_CHARS],
        }
    }

    /// Create a matrix that scores `matching` for identical residues of
    /// `alphabet` and `mismatching` for any other pair from `alphabet`.
    #[must_use]
    pub fn match_mismatch(alphabet: &[u8], matching: T, mismatching: T) -> Self {
        alphabet.iter().fold(Self::empty(), |matrix, &a| {
            alphabet.iter().fold(matrix, |matrix, &b| {
                matrix.with_sub_score(a, b, if a == b { matching } else { mismatching })
            })
        })
    }

    /// Set the score of substituting `a` for `b`, and `b` for `a`.
    ///
    /// # Arguments
    ///
    /// * `a`: One residue.
    /// * `b`: The other residue.
    /// * `score`: The score of the substitution.
    #[must_use]
    pub fn with_sub_score(mut self, a: u8, b: u8, score: T) -> Self {
        self.sub_matrix[a as usize][b as usize] = Some(score);
        self.sub_matrix[b as usize][a as usize] = Some(score);
        self
    }

    /// Get the score of substituting `a` for `b`, if there is one.
    #[must_use]
    pub fn score(&self, a: u8, b: u8) -> Option<T> {
        self.sub_matrix[a as usize][b as usize]
    }

    /// Get the score of a pair that has already been checked by
    /// `check_pairs`.
    pub(crate) fn checked_score(&self, a: u8, b: u8) -> T {
        self.score(a, b)
            .unwrap_or_else(|| unreachable!("Pair ({}, {}) was checked before alignment.", a as char, b as char))
    }

    /// Make sure that every pair an alignment of `reference` against
    /// `candidate` could look up has a score.
    ///
    /// That is every reference residue against every candidate residue, and
    /// every reference residue against itself for the perfect score.
    pub(crate) fn check_pairs(&self, reference: &[u8], candidate: &[u8]) -> Result<(), AlignError> {
        pairs(reference, candidate)
            .into_iter()
            .find(|&(a, b)| self.score(a, b).is_none())
            .map_or(Ok(()), |(a, b)| {
                Err(AlignError::UndefinedSubstitution {
                    a: a as char,
                    b: b as char,
                })
            })
    }

    /// The largest absolute score among the pairs `check_pairs` covers, or
    /// `None` if one of them is `T::MIN`.
    pub(crate) fn largest_magnitude(&self, reference: &[u8], candidate: &[u8]) -> Option<T> {
        pairs(reference, candidate)
            .into_iter()
            .try_fold(T::ZERO, |largest, (a, b)| {
                let m = magnitude(self.checked_score(a, b))?;
                Some(if m > largest { m } else { largest })
            })
    }

    /// The BLOSUM62 substitution matrix for proteins.
    ///
    /// This covers the 20 standard amino acids, the ambiguity codes `B` and
    /// `Z`, the wildcard `X` and the stop `*`, in upper and lower case. See
    /// [here](https://en.wikipedia.org/wiki/BLOSUM) for more information.
    #[must_use]
    pub fn blosum62() -> Self {
        #[rustfmt::skip]
        let scores = [
            vec![ 4],  // A
            vec![-1,  5],  // R
            vec![-2,  0,  6],  // N
            vec![-2, -2,  1,  6],  // D
            vec![ 0, -3, -3, -3,  9],  // C
            vec![-1,  1,  0,  0, -3,  5],  // Q
            vec![-1,  0,  0,  2, -4,  2,  5],  // E
            vec![ 0, -2,  0, -1, -3, -2, -2,  6],  // G
            vec![-2,  0,  1, -1, -3,  0,  0, -2,  8],  // H
            vec![-1, -3, -3, -3, -1, -3, -3, -4, -3,  4],  // I
            vec![-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4],  // L
            vec![-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5],  // K
            vec![-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5],  // M
            vec![-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6],  // F
            vec![-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7],  // P
            vec![ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4],  // S
            vec![ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5],  // T
            vec![-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11],  // W
            vec![-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7],  // Y
            vec![ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4],  // V
            vec![-2, -1,  3,  4, -3,  0,  1, -1,  0, -3, -4,  0, -3, -3, -2,  0, -1, -4, -3, -3,  4],  // B
            vec![-1,  0,  0,  1, -3,  3,  4, -2,  0, -3, -3,  1, -1, -3, -1,  0, -1, -3, -2, -2,  1,  4],  // Z
            vec![ 0, -1, -1, -1, -2, -1, -1, -1, -1, -1, -1, -1, -1, -1, -2,  0,  0, -2, -1, -1, -1, -1, -1],  // X
            vec![-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4,  1],  // *
        ];

        // The residue codes, in the same order as the rows above.
        let codes = b"ARNDCQEGHILKMFPSTWYVBZX*";

        codes
            .iter()
            .zip(scores.iter())
            .flat_map(|(&a, scores)| codes.iter().zip(scores.iter()).map(move |(&b, &score)| (a, b, score)))
            .flat_map(|(a, b, score)| {
                // Add the scores for the upper and lower case versions of the
                // residues.
                [
                    (a, b, score),
                    (a.to_ascii_lowercase(), b, score),
                    (a, b.to_ascii_lowercase(), score),
                    (a.to_ascii_lowercase(), b.to_ascii_lowercase(), score),
                ]
            })
            .fold(Self::empty(), |matrix, (a, b, score)| {
                matrix.with_sub_score(a, b, T::from(score))
            })
    }
}

/// Every distinct reference residue against itself and against every
/// distinct candidate residue, in byte order.
fn pairs(reference: &[u8], candidate: &[u8]) -> Vec<(u8, u8)> {
    let [ref_chars, cand_chars] = [distinct(reference), distinct(candidate)];
    ref_chars
        .iter()
        .flat_map(|&a| core::iter::once((a, a)).chain(cand_chars.iter().map(move |&b| (a, b))))
        .collect()
}

/// The distinct bytes of a sequence, in byte order.
fn distinct(sequence: &[u8]) -> Vec<u8> {
    let mut seen = [false; NUM_CHARS];
    sequence.iter().for_each(|&c| seen[c as usize] = true);
    (0..=u8::MAX).filter(|&c| seen[c as usize]).collect()
}

#[cfg(test)]
mod tests {
    use super::SubstitutionMatrix;
    use crate::AlignError;

    #[test]
    fn blosum62() {
        let matrix = SubstitutionMatrix::<i32>::blosum62();

        assert_eq!(matrix.score(b'W', b'W'), Some(11));
        assert_eq!(matrix.score(b'C', b'C'), Some(9));
        assert_eq!(matrix.score(b'M', b'M'), Some(5));
        assert_eq!(matrix.score(b'A', b'T'), Some(0));
        assert_eq!(matrix.score(b'H', b'Y'), Some(2));
        assert_eq!(matrix.score(b'W', b'G'), Some(-2));
        assert_eq!(matrix.score(b'X', b'X'), Some(-1));
        assert_eq!(matrix.score(b'*', b'*'), Some(1));
        assert_eq!(matrix.score(b'm', b'K'), Some(-1));
        assert_eq!(matrix.score(b'J', b'A'), None);
        assert_eq!(matrix.score(b'-', b'-'), None);

        let codes = b"ARNDCQEGHILKMFPSTWYVBZX*";
        for &a in codes {
            for &b in codes {
                assert_eq!(matrix.score(a, b), matrix.score(b, a), "{} vs {}", a as char, b as char);
                assert!(matrix.score(a, b).is_some());
            }
        }
    }

    #[test]
    fn match_mismatch() {
        let matrix = SubstitutionMatrix::<i16>::match_mismatch(b"ACGT", 2, -3);
        assert_eq!(matrix.score(b'A', b'A'), Some(2));
        assert_eq!(matrix.score(b'A', b'G'), Some(-3));
        assert_eq!(matrix.score(b'A', b'N'), None);
    }

    #[test]
    fn check_pairs() {
        let matrix = SubstitutionMatrix::<i32>::blosum62();
        assert!(matrix.check_pairs(b"MKT", b"AAMKTX*").is_ok());
        assert_eq!(
            matrix.check_pairs(b"MKT", b"MKJ"),
            Err(AlignError::UndefinedSubstitution { a: 'K', b: 'J' })
        );
        assert_eq!(
            matrix.check_pairs(b"MJT", b"MKT"),
            Err(AlignError::UndefinedSubstitution { a: 'J', b: 'J' })
        );
    }

    #[test]
    fn largest_magnitude() {
        let matrix = SubstitutionMatrix::<i32>::blosum62();
        assert_eq!(matrix.largest_magnitude(b"MKT", b"AMKT"), Some(5));
        assert_eq!(matrix.largest_magnitude(b"WWW", b"MG"), Some(11));

        let extreme = SubstitutionMatrix::<i8>::match_mismatch(b"AC", 1, i8::MIN);
        assert_eq!(extreme.largest_magnitude(b"A", b"A"), Some(1));
        assert_eq!(extreme.largest_magnitude(b"A", b"C"), None);
    }
}
