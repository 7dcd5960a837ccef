//! Packed sets of board locations.
//!
//! A [`Bitboard`] stores one bit per playable space. It does not hold the game
//! state (that lives in the grid of [`crate::Board`]); it backs
//! [`crate::LocationList`] so move sets are small, `Copy`, and ordered.
//!
//! By convention, the MSB is the upper-left of the board, and uses row-major order.

use crate::NUM_SPACES;
use derive_more::{BitAnd, BitOrAssign, BitXorAssign};

/// Holds a single bit per playable location on an Othello board.
/// Wraps [`u64`] for efficient set operations, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    BitAnd,
    BitOrAssign,
    BitXorAssign,
)]
pub struct Bitboard(u64);

impl Bitboard {
    /// A one-hot bitboard for a row-major space index (0 is the upper-left).
    #[inline]
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_SPACES);
        Self(1 << (NUM_SPACES - 1 - index))
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the space at a row-major index is set.
    #[inline]
    pub fn contains_index(self, index: usize) -> bool {
        !(self & Self::from_index(index)).is_empty()
    }

    /// The row-major index of the first set space, if any.
    #[inline]
    pub fn first_index(self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.leading_zeros() as usize)
        }
    }
}
