//! Substitution matrices available in the CLI.

use ctether::SubstitutionMatrix;

/// The residues scored by the identity matrix: the 20 standard amino acids
/// and the wildcard.
const IDENTITY_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWYX";

/// The substitution matrix to use for the alignment.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matrix {
    /// The BLOSUM62 matrix.
    #[clap(name = "blosum62")]
    Blosum62,
    /// +1 for identical residues and -1 otherwise.
    #[clap(name = "identity")]
    Identity,
}

impl Matrix {
    /// Build the substitution matrix.
    pub fn substitution_matrix(self) -> SubstitutionMatrix<i32> {
        match self {
            Self::Blosum62 => SubstitutionMatrix::blosum62(),
            Self::Identity => SubstitutionMatrix::match_mismatch(IDENTITY_ALPHABET, 1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix;

    #[test]
    fn matrices() {
        let blosum = Matrix::Blosum62.substitution_matrix();
        assert_eq!(blosum.score(b'W', b'W'), Some(11));

        let identity = Matrix::Identity.substitution_matrix();
        assert_eq!(identity.score(b'W', b'W'), Some(1));
        assert_eq!(identity.score(b'W', b'X'), Some(-1));
        assert_eq!(identity.score(b'*', b'*'), None);
    }
}
