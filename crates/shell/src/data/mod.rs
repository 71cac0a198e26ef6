//! Reading sequences for the CLI.

use std::path::Path;

pub mod fasta;

/// Sequence file formats supported in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// FASTA format.
    Fasta,
}

impl Format {
    /// Determine the format of a file from its extension.
    ///
    /// # Errors
    ///
    /// - If the path has no extension.
    /// - If the extension is not a known FASTA extension.
    pub fn from_path<P: AsRef<Path>>(path: &P) -> Result<Self, String> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("fasta" | "fa" | "faa" | "fna") => Ok(Self::Fasta),
            Some(ext) => Err(format!("Unknown data format {ext} for path: {}", path.display())),
            None => Err(format!(
                "Could not determine data format without extension for path: {}",
                path.display()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Format;

    #[test]
    fn formats() {
        assert_eq!(Format::from_path(&"refs.fasta"), Ok(Format::Fasta));
        assert_eq!(Format::from_path(&"orfs.fna"), Ok(Format::Fasta));
        assert!(Format::from_path(&"table.npy").is_err());
        assert!(Format::from_path(&"no-extension").is_err());
    }
}
