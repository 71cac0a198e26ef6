//! Reconstructing an alignment from a filled DP table.

use distances::number::IInt;

use super::{endpoint::Endpoint, ops::Direction, DpTable, SubstitutionMatrix};
use crate::{AlignError, Alignment};

/// Walk the direction pointers from `endpoint` back to the origin.
///
/// `v` and `w` are the reversed reference and candidate that `table` was
/// filled from. Walking the reversed sequences back to the origin visits the
/// original residues front to back, so the columns are pushed in their final
/// order.
///
/// # Errors
///
/// * `BrokenTraceback` if a direction is unset, points out of the table, or
///   the walk takes more steps than there are residues.
pub(crate) fn traceback<T: IInt>(
    table: &DpTable<T>,
    [v, w]: [&[u8]; 2],
    matrix: &SubstitutionMatrix<T>,
    gap: u8,
    endpoint: Endpoint<T>,
) -> Result<Alignment<T>, AlignError> {
    let max_steps = v.len() + w.len();

    let mut subject = Vec::with_capacity(max_steps);
    let mut query = Vec::with_capacity(max_steps);
    let (mut sublength, mut identities, mut gaps) = (0, 0, 0);
    let mut perfect = T::ZERO;

    let (mut row, mut col) = (endpoint.row, endpoint.col);
    while row > 0 || col > 0 {
        if subject.len() == max_steps {
            return Err(AlignError::BrokenTraceback { row, col });
        }

        match table.direction(row, col) {
            Some(Direction::Diagonal) if row > 0 && col > 0 => {
                let (a, b) = (v[row - 1], w[col - 1]);
                subject.push(a);
                query.push(b);
                sublength += 1;
                if a.eq_ignore_ascii_case(&b) {
                    identities += 1;
                }
                perfect = perfect + matrix.checked_score(a, a);
                row -= 1;
                col -= 1;
            }
            Some(Direction::Left) if col > 0 => {
                subject.push(gap);
                query.push(w[col - 1]);
                sublength += 1;
                gaps += 1;
                col -= 1;
            }
            Some(Direction::Up) if row > 0 => {
                let a = v[row - 1];
                subject.push(a);
                query.push(gap);
                gaps += 1;
                perfect = perfect + matrix.checked_score(a, a);
                row -= 1;
            }
            _ => return Err(AlignError::BrokenTraceback { row, col }),
        }
    }

    let alignment = Alignment {
        length: subject.len(),
        subject: String::from_utf8_lossy(&subject).into_owned(),
        query: String::from_utf8_lossy(&query).into_owned(),
        score: endpoint.score,
        gaps,
        sublength,
        identities,
        perfect,
        subject_start: v.len() - endpoint.row,
        query_start: w.len() - endpoint.col,
    };
    ftlog::trace!(
        "Traced back from ({}, {}) over {} columns with {} gaps.",
        endpoint.row,
        endpoint.col,
        alignment.length,
        alignment.gaps
    );

    Ok(alignment)
}

#[cfg(test)]
mod tests {
    use super::{traceback, Direction, Endpoint};
    use crate::{aligner::DpTable, AlignError, Penalties, SubstitutionMatrix, GAP};

    #[test]
    fn broken_pointer() {
        let matrix = SubstitutionMatrix::<i32>::blosum62();
        let penalties = Penalties::default();
        let starts = crate::StartResidues::empty().with(b'M');

        let (v, w) = (b"TKM".as_slice(), b"TKMM".as_slice());
        let mut table = DpTable::with_borders(v, w, &penalties);
        let mut selector = super::super::endpoint::EndpointSelector::new(&starts, v.len(), 0.2);
        table.fill([v, w], &matrix, &penalties, &mut selector);

        let endpoint = selector
            .best()
            .unwrap_or_else(|| unreachable!("The reference is a suffix of the candidate."));
        assert_eq!((endpoint.row, endpoint.col), (3, 3));

        let alignment = traceback(&table, [v, w], &matrix, GAP, endpoint);
        assert!(alignment.is_ok());

        table.set_direction(2, 2, None);
        assert_eq!(
            traceback(&table, [v, w], &matrix, GAP, endpoint),
            Err(AlignError::BrokenTraceback { row: 2, col: 2 })
        );
    }

    #[test]
    fn out_of_bounds() {
        let matrix = SubstitutionMatrix::<i32>::blosum62();
        let penalties = Penalties::default();

        // A cell on the first row can only be reached from the left.
        let (v, w) = (b"M".as_slice(), b"M".as_slice());
        let table = DpTable::with_borders(v, w, &penalties);
        let endpoint = Endpoint {
            score: 0,
            row: 0,
            col: 1,
        };
        let alignment = traceback(&table, [v, w], &matrix, GAP, endpoint);
        assert!(alignment.is_ok_and(|a| a.query() == "M" && a.subject() == "-"));

        let mut table = table;
        table.set_direction(0, 1, Some(Direction::Diagonal));
        assert_eq!(
            traceback(&table, [v, w], &matrix, GAP, endpoint),
            Err(AlignError::BrokenTraceback { row: 0, col: 1 })
        );

        table.set_direction(0, 1, Some(Direction::Up));
        assert_eq!(
            traceback(&table, [v, w], &matrix, GAP, endpoint),
            Err(AlignError::BrokenTraceback { row: 0, col: 1 })
        );
    }
}
