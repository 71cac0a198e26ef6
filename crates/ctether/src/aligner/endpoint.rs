//! Choosing the cell where the traceback starts.

use distances::{number::IInt, Number};

use crate::StartResidues;

/// A cell of the DP table at which a traceback may start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint<T> {
    /// The score of the cell.
    pub score: T,
    /// The number of reference residues consumed.
    pub row: usize,
    /// The number of candidate residues consumed.
    pub col: usize,
}

/// Keeps the best admissible endpoint among the cells it is offered.
///
/// A cell is admissible when the last candidate residue it consumed is a start
/// residue and it consumed enough of the reference. Only a strictly greater
/// score replaces the current best, so the first of equal cells in the order
/// they were offered wins.
pub struct EndpointSelector<'a, T> {
    /// The residues at which an alignment may begin.
    starts: &'a StartResidues,
    /// The length of the reference.
    ref_len: usize,
    /// The largest admissible fraction of the reference left unaligned.
    tolerance: f64,
    /// The best admissible endpoint so far.
    best: Option<Endpoint<T>>,
}

impl<'a, T: IInt> EndpointSelector<'a, T> {
    /// Create a selector with no endpoint.
    #[must_use]
    pub const fn new(starts: &'a StartResidues, ref_len: usize, tolerance: f64) -> Self {
        Self {
            starts,
            ref_len,
            tolerance,
            best: None,
        }
    }

    /// Whether an alignment reaching `row` leaves little enough of the
    /// reference out.
    fn within_tolerance(&self, row: usize) -> bool {
        self.ref_len.abs_diff(row).as_f64() / self.ref_len.as_f64() <= self.tolerance
    }

    /// Consider the cell at `(row, col)`, whose last candidate residue is
    /// `residue`.
    pub fn offer(&mut self, score: T, row: usize, col: usize, residue: u8) {
        if !self.starts.contains(residue) || !self.within_tolerance(row) {
            return;
        }
        if self.best.map_or(true, |best| score > best.score) {
            self.best = Some(Endpoint { score, row, col });
        }
    }

    /// The best admissible endpoint, if any cell was admissible.
    #[must_use]
    pub const fn best(&self) -> Option<Endpoint<T>> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, EndpointSelector};
    use crate::StartResidues;

    #[test]
    fn strictly_greater() {
        let starts = StartResidues::empty().with(b'M');
        let mut selector = EndpointSelector::<i32>::new(&starts, 10, 0.2);

        // Not a start residue.
        selector.offer(100, 10, 3, b'K');
        assert_eq!(selector.best(), None);

        // Too little of the reference.
        selector.offer(100, 7, 3, b'M');
        assert_eq!(selector.best(), None);

        selector.offer(5, 8, 3, b'M');
        assert_eq!(selector.best(), Some(Endpoint { score: 5, row: 8, col: 3 }));

        // Ties keep the first endpoint.
        selector.offer(5, 9, 4, b'M');
        assert_eq!(selector.best(), Some(Endpoint { score: 5, row: 8, col: 3 }));

        selector.offer(6, 10, 5, b'M');
        assert_eq!(selector.best(), Some(Endpoint { score: 6, row: 10, col: 5 }));
    }

    #[test]
    fn negative_tolerance() {
        let starts = StartResidues::empty().with(b'M');
        let mut selector = EndpointSelector::<i32>::new(&starts, 3, -0.1);
        selector.offer(15, 3, 3, b'M');
        assert_eq!(selector.best(), None);
    }
}
