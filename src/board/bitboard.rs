//! Bitboard implementation for disc occupancy

use super::{Move, MAX_BOARD_SIZE};

/// One bit per square, row-major with a fixed stride of 8.
/// Boards smaller than 8x8 simply leave the high columns and rows unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Mask with every in-bounds square of a `size` x `size` board set
    pub fn full(size: usize) -> Self {
        let mut bits = 0u64;
        for row in 0..size {
            for col in 0..size {
                bits |= 1u64 << (row * MAX_BOARD_SIZE + col);
            }
        }
        Self { bits }
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, mv: Move) {
        self.bits |= 1u64 << mv.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, mv: Move) {
        self.bits &= !(1u64 << mv.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, mv: Move) -> bool {
        (self.bits >> mv.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | rhs.bits)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & rhs.bits)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Bitboard;

    fn not(self) -> Bitboard {
        Bitboard::from_bits(!self.bits)
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Move::from_index(idx))
    }
}
