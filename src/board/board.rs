//! Board structure: an immutable snapshot of disc occupancy

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Color, Move, BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::OthelloError;

/// Othello board.
///
/// A small `Copy` value: search code never mutates a board it was handed,
/// it derives new ones through [`crate::rules::apply_move`]. Equality and
/// hashing are structural, so a `Board` can key the transposition cache
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Dark discs bitboard
    pub dark: Bitboard,
    /// Light discs bitboard
    pub light: Bitboard,
    size: u8,
}

impl Board {
    /// Standard starting position for a board of the given size.
    ///
    /// The centre 2x2 holds Light on its main diagonal and Dark on the
    /// anti-diagonal, so on 8x8 Dark opens with (2,3), (3,2), (4,5) or (5,4).
    pub fn new(size: usize) -> Result<Self, OthelloError> {
        if size < 2 || size % 2 != 0 || size > MAX_BOARD_SIZE {
            return Err(OthelloError::BoardSize(size));
        }
        let mut board = Self::empty(size)?;
        let hi = (size / 2) as u8;
        let lo = hi - 1;
        board.place_disc(Move::new(lo, lo), Color::Light);
        board.place_disc(Move::new(hi, hi), Color::Light);
        board.place_disc(Move::new(lo, hi), Color::Dark);
        board.place_disc(Move::new(hi, lo), Color::Dark);
        Ok(board)
    }

    /// Standard 8x8 starting position
    pub fn standard() -> Self {
        let mut board = Self {
            dark: Bitboard::new(),
            light: Bitboard::new(),
            size: BOARD_SIZE as u8,
        };
        board.place_disc(Move::new(3, 3), Color::Light);
        board.place_disc(Move::new(4, 4), Color::Light);
        board.place_disc(Move::new(3, 4), Color::Dark);
        board.place_disc(Move::new(4, 3), Color::Dark);
        board
    }

    /// Board with no discs at all
    pub fn empty(size: usize) -> Result<Self, OthelloError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(OthelloError::BoardSize(size));
        }
        Ok(Self {
            dark: Bitboard::new(),
            light: Bitboard::new(),
            size: size as u8,
        })
    }

    /// Build a board from rows of wire values (0 empty, 1 dark, 2 light).
    ///
    /// The grid must be square and at most 8x8.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, OthelloError> {
        let size = rows.len();
        let mut board = Self::empty(size)?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(OthelloError::RaggedRow {
                    row: r,
                    expected: size,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if let Some(color) = Cell::try_from(value)?.color() {
                    board.place_disc(Move::new(r as u8, c as u8), color);
                }
            }
        }
        Ok(board)
    }

    /// Parse a text diagram, one row per line.
    ///
    /// `.` is empty, `X`/`B`/`D` dark, `O`/`W`/`L` light. Blank lines and
    /// spaces are ignored.
    pub fn from_ascii(diagram: &str) -> Result<Self, OthelloError> {
        let rows: Vec<Vec<u8>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .map(|chars| {
                chars
                    .into_iter()
                    .map(|ch| match ch.to_ascii_uppercase() {
                        '.' | '-' | '0' => Ok(0u8),
                        'X' | 'B' | 'D' | '1' => Ok(1u8),
                        'O' | 'W' | 'L' | '2' => Ok(2u8),
                        other => Err(OthelloError::InvalidSymbol(other)),
                    })
                    .collect::<Result<Vec<u8>, _>>()
            })
            .collect::<Result<_, _>>()?;
        Self::from_rows(&rows)
    }

    /// Rows of wire values, the inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|r| (0..self.size).map(|c| u8::from(self.get(Move::new(r, c)))).collect())
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Mask of every in-bounds square
    #[inline]
    pub fn cells(&self) -> Bitboard {
        Bitboard::full(self.size())
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        mv.row < self.size && mv.col < self.size
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, mv: Move) -> Cell {
        if self.dark.get(mv) {
            Cell::Dark
        } else if self.light.get(mv) {
            Cell::Light
        } else {
            Cell::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, mv: Move) -> bool {
        !self.dark.get(mv) && !self.light.get(mv)
    }

    /// Place a disc without flipping anything.
    /// Use [`crate::rules::apply_move`] for game moves.
    #[inline]
    pub fn place_disc(&mut self, mv: Move, color: Color) {
        self.remove_disc(mv);
        self.discs_mut(color).set(mv);
    }

    /// Remove a disc
    #[inline]
    pub fn remove_disc(&mut self, mv: Move) {
        self.dark.clear(mv);
        self.light.clear(mv);
    }

    /// Turn an existing disc over to `color`
    #[inline]
    pub fn flip(&mut self, mv: Move, color: Color) {
        self.discs_mut(color.opponent()).clear(mv);
        self.discs_mut(color).set(mv);
    }

    /// Get bitboard for a color
    #[inline]
    pub fn discs(&self, color: Color) -> &Bitboard {
        match color {
            Color::Dark => &self.dark,
            Color::Light => &self.light,
        }
    }

    /// Get mutable bitboard for a color
    #[inline]
    pub fn discs_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::Dark => &mut self.dark,
            Color::Light => &mut self.light,
        }
    }

    /// Disc counts as `(dark, light)`
    #[inline]
    pub fn score(&self) -> (u32, u32) {
        (self.dark.count(), self.light.count())
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.dark.count() + self.light.count()
    }

    /// Empty squares as a mask
    #[inline]
    pub fn empties(&self) -> Bitboard {
        self.cells() & !(self.dark | self.light)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empties().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let symbol = match self.get(Move::new(r, c)) {
                    Cell::Empty => '.',
                    Cell::Dark => 'X',
                    Cell::Light => 'O',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
