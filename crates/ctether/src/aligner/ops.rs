//! Moves through the DP table and the penalties that go with them.

use distances::number::IInt;
use serde::{Deserialize, Serialize};

use crate::AlignError;

/// The direction of the best move into a cell of the DP table.
///
/// Rows walk the reference and columns walk the candidate. When two moves
/// score the same, `Diagonal` beats `Left`, which beats `Up`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Direction {
    /// Diagonal (Up and Left) for a match or substitution.
    Diagonal,
    /// Left for a candidate residue opposite a gap in the reference.
    Left,
    /// Up for a reference residue opposite a gap in the candidate.
    Up,
}

/// Affine gap penalties, both given as non-negative costs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalties<T> {
    /// The cost of every gap position.
    pub gap: T,
    /// The extra cost of opening a gap right after a diagonal move. Also
    /// charged once at the origin when the two sequences end in different
    /// residues.
    pub gap_open: T,
}

impl<T: IInt> Default for Penalties<T> {
    fn default() -> Self {
        Self {
            gap: T::ONE,
            gap_open: T::from(10),
        }
    }
}

impl<T: IInt> Penalties<T> {
    /// Create new penalties.
    pub const fn new(gap: T, gap_open: T) -> Self {
        Self { gap, gap_open }
    }

    /// Check that neither penalty is negative.
    pub(crate) fn validate(&self) -> Result<(), AlignError> {
        if self.gap < T::ZERO || self.gap_open < T::ZERO {
            Err(AlignError::NegativePenalty)
        } else {
            Ok(())
        }
    }

    /// The cost of a gap position, given whether the previous move was
    /// diagonal.
    pub(crate) fn gap_cost(&self, after_diagonal: bool) -> T {
        if after_diagonal {
            self.gap + self.gap_open
        } else {
            self.gap
        }
    }

    /// The cost of a gap right after a diagonal move, or `None` if it does not
    /// fit in `T`.
    pub(crate) fn largest_gap_cost(&self) -> Option<T> {
        (self.gap <= T::MAX - self.gap_open).then(|| self.gap + self.gap_open)
    }
}

/// The absolute value of `x`, or `None` for `T::MIN`.
pub(crate) fn magnitude<T: IInt>(x: T) -> Option<T> {
    if x >= T::ZERO {
        Some(x)
    } else if x == T::MIN {
        None
    } else {
        Some(T::ZERO - x)
    }
}
