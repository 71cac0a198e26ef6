//! Utilities for dealing with FASTA files.

use std::path::Path;

use bio::io::fasta::Record;
use ctether::CodonTable;

use super::Format;

/// Reads every record of a FASTA file.
///
/// # Errors
///
/// * If the file does not exist.
/// * If the extension is not a FASTA extension.
/// * If the file cannot be read as a FASTA file.
/// * If any ID or sequence is empty.
/// * If the file holds no records.
pub fn read<P: AsRef<Path>>(path: &P) -> Result<Vec<Record>, String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("Path {path:?} does not exist!"));
    }
    Format::from_path(&path)?;

    ftlog::info!("Reading FASTA file from {path:?}.");

    let reader = bio::io::fasta::Reader::from_file(path).map_err(|e| e.to_string())?;
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.id().is_empty() {
            return Err(format!("Empty ID for record {}.", records.len()));
        }
        if record.seq().is_empty() {
            return Err(format!("Empty sequence for record {}.", record.id()));
        }
        records.push(record);

        if records.len() % 10_000 == 0 {
            ftlog::info!("Read {} sequences...", records.len());
        }
    }

    if records.is_empty() {
        return Err(format!("No sequences found in {path:?}!"));
    }
    ftlog::info!("Read {} sequences.", records.len());

    Ok(records)
}

/// Translates nucleotide records into protein records in their first reading
/// frame, keeping their IDs and descriptions.
pub fn translate(records: &[Record], code: &CodonTable) -> Vec<Record> {
    records
        .iter()
        .map(|r| Record::with_attrs(r.id(), r.desc(), &code.translate(r.seq())))
        .collect()
}
