//! The dynamic programming table for tethered alignment.

use distances::number::IInt;
use rayon::prelude::*;

use super::{endpoint::EndpointSelector, ops::Direction, Penalties, SubstitutionMatrix};

/// Scores, gap-open flags and directions for every prefix pair of two
/// reversed sequences.
///
/// The three parallel tables are stored as flat row-major vectors with one row
/// per reference prefix and one column per candidate prefix. A direction is
/// `None` only for a cell that has not been filled yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DpTable<T: IInt> {
    /// The number of rows, `len(reference) + 1`.
    rows: usize,
    /// The number of columns, `len(candidate) + 1`.
    cols: usize,
    /// The best score for each cell.
    scores: Vec<T>,
    /// Whether the best path into each cell was a diagonal move.
    gap_open: Vec<bool>,
    /// The best move into each cell.
    directions: Vec<Option<Direction>>,
}

impl<T: IInt> DpTable<T> {
    /// Create a table for two reversed sequences with only the borders filled.
    ///
    /// The origin costs `gap_open` when the sequences start with different
    /// residues, ignoring case. The first row and column then extend gaps away
    /// from the origin, paying `gap_open` again for the first step.
    pub(crate) fn with_borders(v: &[u8], w: &[u8], penalties: &Penalties<T>) -> Self {
        let (rows, cols) = (v.len() + 1, w.len() + 1);
        let mut table = Self {
            rows,
            cols,
            scores: vec![T::ZERO; rows * cols],
            gap_open: vec![false; rows * cols],
            directions: vec![None; rows * cols],
        };

        let origin = match (v.first(), w.first()) {
            (Some(a), Some(b)) if !a.eq_ignore_ascii_case(b) => T::ZERO - penalties.gap_open,
            _ => T::ZERO,
        };
        table.set(0, 0, origin, Direction::Diagonal);

        // The first row consumes candidate residues against an empty
        // reference.
        for c in 1..cols {
            let score = table.score(0, c - 1) - penalties.gap_cost(table.is_gap_open(0, c - 1));
            table.set(0, c, score, Direction::Left);
        }

        // The first column consumes reference residues against an empty
        // candidate.
        for r in 1..rows {
            let score = table.score(r - 1, 0) - penalties.gap_cost(table.is_gap_open(r - 1, 0));
            table.set(r, 0, score, Direction::Up);
        }

        table
    }

    /// Fill the interior one row at a time, offering each cell to `selector`
    /// as soon as it is known.
    pub(crate) fn fill(
        &mut self,
        [v, w]: [&[u8]; 2],
        matrix: &SubstitutionMatrix<T>,
        penalties: &Penalties<T>,
        selector: &mut EndpointSelector<'_, T>,
    ) {
        // On iteration (i, j), we will fill in the cell at (i + 1, j + 1).
        for (i, &vc) in v.iter().enumerate() {
            for (j, &wc) in w.iter().enumerate() {
                let (score, direction) = self.best_move(i + 1, j + 1, matrix.checked_score(vc, wc), penalties);
                self.set(i + 1, j + 1, score, direction);
                selector.offer(score, i + 1, j + 1, wc);
            }
        }
    }

    /// Fill the interior one anti-diagonal at a time, computing the cells of
    /// each anti-diagonal in parallel.
    ///
    /// The cells of an anti-diagonal only depend on the two before it, so the
    /// result is identical to `fill`.
    pub(crate) fn par_fill(&mut self, [v, w]: [&[u8]; 2], matrix: &SubstitutionMatrix<T>, penalties: &Penalties<T>) {
        // Interior cells (r, c) have r + c in [2, rows + cols - 2].
        for d in 2..=(self.rows + self.cols).saturating_sub(2) {
            let r_min = d.saturating_sub(self.cols - 1).max(1);
            let r_max = (d - 1).min(self.rows - 1);
            if r_min > r_max {
                continue;
            }

            let cells = {
                let table = &*self;
                (r_min..=r_max)
                    .into_par_iter()
                    .map(|r| {
                        let c = d - r;
                        let sub = matrix.checked_score(v[r - 1], w[c - 1]);
                        let (score, direction) = table.best_move(r, c, sub, penalties);
                        (r, c, score, direction)
                    })
                    .collect::<Vec<_>>()
            };

            for (r, c, score, direction) in cells {
                self.set(r, c, score, direction);
            }
        }
    }

    /// Offer every interior cell to `selector` in row-major order.
    pub(crate) fn select(&self, w: &[u8], selector: &mut EndpointSelector<'_, T>) {
        for r in 1..self.rows {
            for (c, &wc) in w.iter().enumerate().map(|(j, wc)| (j + 1, wc)) {
                selector.offer(self.score(r, c), r, c, wc);
            }
        }
    }

    /// The best score and move into interior cell `(r, c)`, given the
    /// substitution score of its residue pair.
    fn best_move(&self, r: usize, c: usize, sub: T, penalties: &Penalties<T>) -> (T, Direction) {
        let diag = self.score(r - 1, c - 1) + sub;
        let left = self.score(r, c - 1) - penalties.gap_cost(self.is_gap_open(r, c - 1));
        let up = self.score(r - 1, c) - penalties.gap_cost(self.is_gap_open(r - 1, c));

        // Ties go to the diagonal, then to the gap in the reference.
        if diag >= left && diag >= up {
            (diag, Direction::Diagonal)
        } else if left >= up {
            (left, Direction::Left)
        } else {
            (up, Direction::Up)
        }
    }

    /// Record the best score and move into `(r, c)`.
    fn set(&mut self, r: usize, c: usize, score: T, direction: Direction) {
        let i = self.index(r, c);
        self.scores[i] = score;
        self.gap_open[i] = direction == Direction::Diagonal;
        self.directions[i] = Some(direction);
    }

    /// The flat index of `(r, c)`.
    const fn index(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    /// The number of rows and columns.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The best score of the cell at `(r, c)`.
    #[must_use]
    pub fn score(&self, r: usize, c: usize) -> T {
        self.scores[self.index(r, c)]
    }

    /// Whether the best path into `(r, c)` ended with a diagonal move, so that
    /// a gap leaving it would be a new gap.
    #[must_use]
    pub fn is_gap_open(&self, r: usize, c: usize) -> bool {
        self.gap_open[self.index(r, c)]
    }

    /// The best move into `(r, c)`, or `None` if the cell was never filled.
    #[must_use]
    pub fn direction(&self, r: usize, c: usize) -> Option<Direction> {
        self.directions[self.index(r, c)]
    }

    /// The table as nested rows of `(score, direction)`, for inspection.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<(T, Option<Direction>)>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| (self.score(r, c), self.direction(r, c))).collect())
            .collect()
    }

    /// Overwrite the direction of a cell.
    #[cfg(test)]
    pub(crate) fn set_direction(&mut self, r: usize, c: usize, direction: Option<Direction>) {
        let i = self.index(r, c);
        self.directions[i] = direction;
    }
}
