//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the geometry, the
//! engine, the key mapping and the terminal view can all agree on one
//! vocabulary.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn anchor**: row -1, column 3. A fresh piece enters with its first
//!   shape row one row above the visible top.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Gravity tick interval |
//! | `INPUT_POLL_MS` | 50 | How long the input loop waits for a key before re-checking game over |
//! | `GAME_OVER_LINGER_MS` | 1500 | How long the final frame stays up after game over |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GameAction, PieceKind, Position, BOARD_COLUMNS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::from_code(PieceKind::T.code()), Some(PieceKind::T));
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//!
//! let p = Position::new(2, 3).offset(1, -1);
//! assert_eq!(p, Position::new(3, 2));
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLUMNS, 10);
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLUMNS: u8 = 10;

/// Row of the spawn anchor. Negative: the piece starts partly above the top.
pub const SPAWN_ROW: i8 = -1;

/// Column of the spawn anchor.
pub const SPAWN_COL: i8 = 3;

/// Gravity tick interval in milliseconds.
pub const TICK_MS: u32 = 250;

/// Input poll timeout in milliseconds.
pub const INPUT_POLL_MS: u32 = 50;

/// Time the game-over frame stays on screen before the process exits.
pub const GAME_OVER_LINGER_MS: u32 = 1500;


/// A grid coordinate: `row` grows downward, `col` grows to the right.
///
/// Validity depends on context (see the board predicates), so any pair is
/// representable, including rows above the visible top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// This position shifted by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// The seven tetromino kinds
///
/// - **I**: straight bar
/// - **J**: bar with a hook on the right
/// - **L**: bar with a hook on the left
/// - **O**: 2x2 square
/// - **S**: S-shaped
/// - **T**: bar with a centre stem
/// - **Z**: Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// Non-zero code used in `u8` grid exports (1..=7, catalog order).
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]. `0` and unknown codes map to `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }
}

/// Player moves accepted by the engine.
///
/// Quitting is not a game action; the input layer handles it before the engine
/// ever sees a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate the piece 90° clockwise
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down. Never locks the piece by itself.
    SoftDrop,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled; the kind only matters for colouring
pub type Cell = Option<PieceKind>;
