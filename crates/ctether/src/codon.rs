//! Translation of nucleotide codons into amino-acid residues.

/// The residue used for codons that cannot be translated.
pub const UNKNOWN: u8 = b'X';

/// The residue used for stop codons.
pub const STOP: u8 = b'*';

/// A genetic code, stored as a lookup table over the 64 codons.
///
/// Codons are indexed with `A = 0, C = 1, G = 2, T/U = 3`, so that the index
/// of a codon is `16 * first + 4 * second + third`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonTable {
    /// The residue for each codon index.
    table: [u8; 64],
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CodonTable {
    /// The standard genetic code (NCBI translation table 1).
    #[must_use]
    pub const fn standard() -> Self {
        #[rustfmt::skip]
        let table = [
            b'K', b'N', b'K', b'N',  // AA*
            b'T', b'T', b'T', b'T',  // AC*
            b'R', b'S', b'R', b'S',  // AG*
            b'I', b'I', b'M', b'I',  // AT*
            b'Q', b'H', b'Q', b'H',  // CA*
            b'P', b'P', b'P', b'P',  // CC*
            b'R', b'R', b'R', b'R',  // CG*
            b'L', b'L', b'L', b'L',  // CT*
            b'E', b'D', b'E', b'D',  // GA*
            b'A', b'A', b'A', b'A',  // GC*
            b'G', b'G', b'G', b'G',  // GG*
            b'V', b'V', b'V', b'V',  // GT*
            STOP, b'Y', STOP, b'Y',  // TA*
            b'S', b'S', b'S', b'S',  // TC*
            STOP, b'C', b'W', b'C',  // TG*
            b'L', b'F', b'L', b'F',  // TT*
        ];
        Self { table }
    }

    /// Translate a single codon.
    ///
    /// Returns `None` unless `codon` is exactly three unambiguous nucleotides
    /// (case-insensitive, with `U` read as `T`).
    #[must_use]
    pub fn translate_codon(&self, codon: &[u8]) -> Option<u8> {
        match codon {
            &[a, b, c] => {
                let index = 16 * base_index(a)? + 4 * base_index(b)? + base_index(c)?;
                Some(self.table[index])
            }
            _ => None,
        }
    }

    /// Translate a nucleotide sequence in its first reading frame.
    ///
    /// Codons with ambiguous bases become `X` and a trailing partial codon is
    /// dropped.
    #[must_use]
    pub fn translate(&self, nucleotides: &[u8]) -> Vec<u8> {
        nucleotides
            .chunks_exact(3)
            .map(|codon| self.translate_codon(codon).unwrap_or(UNKNOWN))
            .collect()
    }
}

/// The index of a nucleotide in the codon table.
const fn base_index(base: u8) -> Option<usize> {
    match base {
        b'A' | b'a' => Some(0),
        b'C' | b'c' => Some(1),
        b'G' | b'g' => Some(2),
        b'T' | b't' | b'U' | b'u' => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::CodonTable;

    #[test]
    fn codons() {
        let code = CodonTable::standard();

        assert_eq!(code.translate_codon(b"ATG"), Some(b'M'));
        assert_eq!(code.translate_codon(b"aug"), Some(b'M'));
        assert_eq!(code.translate_codon(b"GTG"), Some(b'V'));
        assert_eq!(code.translate_codon(b"TTG"), Some(b'L'));
        assert_eq!(code.translate_codon(b"TGG"), Some(b'W'));
        assert_eq!(code.translate_codon(b"TAA"), Some(b'*'));
        assert_eq!(code.translate_codon(b"TGA"), Some(b'*'));
        assert_eq!(code.translate_codon(b"GCN"), None);
        assert_eq!(code.translate_codon(b"AT"), None);
        assert_eq!(code.translate_codon(b"ATGC"), None);
    }

    #[test]
    fn sequences() {
        let code = CodonTable::default();

        assert_eq!(code.translate(b"ATGAAAACCTAA"), b"MKT*");
        assert_eq!(code.translate(b"ATGNNNTG"), b"MX");
        assert!(code.translate(b"").is_empty());
    }
}
