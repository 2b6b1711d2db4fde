//! Read-only copies of the game for presenters.

use crate::game_state::{ActivePiece, Phase};
use crate::pieces::PieceCells;
use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Board positions, possibly above row 0.
    pub cells: PieceCells,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `board` already contains the falling piece; `active` only says where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: Phase,
    pub piece_id: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn occupied_count(&self) -> usize {
        self.board.iter().flatten().filter(|&&v| v != 0).count()
    }

    /// Cells of the falling piece that are on the board.
    pub fn active_visible_count(&self) -> usize {
        self.active
            .map(|a| a.cells.iter().filter(|c| c.row >= 0).count())
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_COLUMNS as usize]; BOARD_ROWS as usize],
            active: None,
            next: PieceKind::I,
            phase: Phase::Empty,
            piece_id: 0,
            lines_cleared: 0,
        }
    }
}
