//! Board module - the occupancy grid
//!
//! The board is a 20x10 grid stored as a flat row-major array. A cell is either
//! empty or filled with the kind of the piece that filled it.
//! Coordinates are `Position { row, col }`: row 0 is the top, col 0 the left.
//! Rows above the top are legal positions for a falling piece but are never
//! stored.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, Position, BOARD_COLUMNS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLUMNS as usize);

const ROWS: usize = BOARD_ROWS as usize;
const COLUMNS: usize = BOARD_COLUMNS as usize;

/// Row indices, at most one per board row.
pub type RowList = ArrayVec<usize, ROWS>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLUMNS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(pos: Position) -> Option<usize> {
        if !Self::in_bounds(pos) {
            return None;
        }
        Some((pos.row as usize) * COLUMNS + (pos.col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn columns(&self) -> u8 {
        BOARD_COLUMNS
    }

    /// `0 <= row < rows` and `0 <= col < columns`.
    pub fn in_bounds(pos: Position) -> bool {
        pos.row >= 0
            && pos.row < BOARD_ROWS as i8
            && pos.col >= 0
            && pos.col < BOARD_COLUMNS as i8
    }

    /// Relaxed bounds check: columns enforced, rows only bounded below the
    /// bottom. A piece may sit above the visible top.
    pub fn is_drawable(pos: Position) -> bool {
        pos.row < BOARD_ROWS as i8 && pos.col >= 0 && pos.col < BOARD_COLUMNS as i8
    }

    /// Get cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        Self::index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`. Returns false (and changes nothing) if out of bounds
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match Self::index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and filled. Out-of-bounds positions are never occupied.
    pub fn is_occupied(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLUMNS;
        self.cells[start..start + COLUMNS]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of all completely filled rows, top to bottom.
    pub fn completed_rows(&self) -> RowList {
        (0..ROWS).filter(|&row| self.is_row_full(row)).collect()
    }

    /// Remove `rows` and let everything above fall into the gaps.
    ///
    /// Surviving rows keep their relative order and the vacated rows at the top
    /// come back empty. A single bottom-up compaction pass means each surviving
    /// row moves exactly once, so the order of `rows` (and any duplicates in
    /// it) has no effect on the result. Indices outside the board are ignored.
    pub fn clear_and_collapse(&mut self, rows: &[usize]) {
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if rows.contains(&read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * COLUMNS;
                let dst = write_row * COLUMNS;
                self.cells.copy_within(src..src + COLUMNS, dst);
            }
        }

        for cell in &mut self.cells[..write_row * COLUMNS] {
            *cell = None;
        }
    }

    /// Clear all full rows and return their indices (top to bottom)
    pub fn clear_full_rows(&mut self) -> RowList {
        let rows = self.completed_rows();
        if !rows.is_empty() {
            self.clear_and_collapse(&rows);
        }
        rows
    }

    /// Write `kind` (or clear, with `None`) into every in-bounds cell of
    /// `cells`. Off-board cells are skipped.
    pub fn paint(&mut self, cells: &[Position], cell: Cell) {
        for &pos in cells {
            self.set(pos, cell);
        }
    }

    /// Number of filled cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Export as a `u8` grid: 0 for empty, [`PieceKind::code`] otherwise.
    pub fn write_u8_grid(&self, out: &mut [[u8; COLUMNS]; ROWS]) {
        for (row, line) in out.iter_mut().enumerate() {
            let start = row * COLUMNS;
            for (col, v) in line.iter_mut().enumerate() {
                *v = self.cells[start + col].map(|k| k.code()).unwrap_or(0);
            }
        }
    }

    /// Fill a whole row with `kind`, leaving the listed columns empty.
    pub fn fill_row_except(&mut self, row: usize, holes: &[usize], kind: PieceKind) {
        if row >= ROWS {
            return;
        }
        for col in 0..COLUMNS {
            let cell = if holes.contains(&col) { None } else { Some(kind) };
            self.cells[row * COLUMNS + col] = cell;
        }
    }

    /// Convert to 2D vector for testing/display
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(COLUMNS).map(|r| r.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
