//! Anything that can hand over an ordered run of residues.

/// A sequence of residues, as bytes.
///
/// Plain strings and byte vectors work, and so do FASTA records, so callers
/// can pass whatever they read from disk without unpacking it first.
pub trait Sequence {
    /// The residues of the sequence, in order.
    fn residues(&self) -> &[u8];
}

impl Sequence for str {
    fn residues(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Sequence for String {
    fn residues(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Sequence for [u8] {
    fn residues(&self) -> &[u8] {
        self
    }
}

impl Sequence for Vec<u8> {
    fn residues(&self) -> &[u8] {
        self
    }
}

impl Sequence for bio::io::fasta::Record {
    fn residues(&self) -> &[u8] {
        self.seq()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn residues(&self) -> &[u8] {
        (**self).residues()
    }
}
