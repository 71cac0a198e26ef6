//! The tab-separated report of a batch of alignments.

use std::io::Write;

use ctether::{AlignError, Alignment};
use serde::Serialize;

/// One line of the report.
///
/// Failed alignments keep their ID and carry the error message as their
/// status, with the alignment columns left empty.
#[derive(Debug, Serialize)]
pub struct Row<'a> {
    /// The ID of the candidate.
    id: &'a str,
    /// `ok`, or the reason the alignment failed.
    status: String,
    /// The aligned reference.
    subject: Option<&'a str>,
    /// The aligned candidate.
    query: Option<&'a str>,
    /// The alignment score.
    score: Option<i32>,
    /// The best score the aligned reference could reach.
    perfect: Option<i32>,
    /// The score as a fraction of `perfect`.
    score_ratio: Option<f64>,
    /// The number of columns.
    length: Option<usize>,
    /// The number of candidate residues covered.
    sublength: Option<usize>,
    /// The number of identical columns.
    identities: Option<usize>,
    /// The fraction of identical columns.
    identity: Option<f64>,
    /// The number of gap columns.
    gaps: Option<usize>,
    /// Where the alignment starts in the reference.
    subject_start: Option<usize>,
    /// Where the alignment starts in the candidate.
    query_start: Option<usize>,
}

impl<'a> Row<'a> {
    /// Create a row for the result of aligning the candidate `id`.
    pub fn new(id: &'a str, result: &'a Result<Alignment<i32>, AlignError>) -> Self {
        match result {
            Ok(a) => Self {
                id,
                status: "ok".to_string(),
                subject: Some(a.subject()),
                query: Some(a.query()),
                score: Some(a.score()),
                perfect: Some(a.perfect()),
                score_ratio: Some(a.score_ratio()),
                length: Some(a.length()),
                sublength: Some(a.sublength()),
                identities: Some(a.identities()),
                identity: Some(a.identity()),
                gaps: Some(a.gaps()),
                subject_start: Some(a.subject_start()),
                query_start: Some(a.query_start()),
            },
            Err(e) => Self {
                id,
                status: e.to_string(),
                subject: None,
                query: None,
                score: None,
                perfect: None,
                score_ratio: None,
                length: None,
                sublength: None,
                identities: None,
                identity: None,
                gaps: None,
                subject_start: None,
                query_start: None,
            },
        }
    }
}

/// Writes the rows as tab-separated values, with a header.
///
/// # Errors
///
/// * If a row cannot be serialized or written.
pub fn write<W: Write>(writer: W, rows: &[Row]) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    for row in rows {
        writer.serialize(row).map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}
