//! GameView: draws a [`GameSnapshot`] in the classic text look.
//!
//! ```text
//!                     <! . . . . . . . . . .!>
//!                     <! . . . .[][] . . . .!>     NEXT
//!                     ...                      . . . . .
//!                     <![][][][] . .[][][][]!>
//!                       \/\/\/\/\/\/\/\/\/\/
//! ```
//!
//! Pure (no I/O), so layouts are unit-tested against the framebuffer text.

use crate::core::{shape, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_COLUMNS, BOARD_ROWS};

/// Columns the board is pushed right by.
pub const DEFAULT_LEFT_OFFSET: u16 = 20;

/// First and last board rows the NEXT panel sits beside.
const PANEL_FIRST_ROW: u16 = 7;
const PANEL_LAST_ROW: u16 = 11;
/// Board row the preview's shape row 0 lands on.
const PREVIEW_TOP_ROW: u16 = 9;
const PREVIEW_COLUMNS: u16 = 5;

const GAME_OVER_TEXT: &str = "game over";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    left: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            left: DEFAULT_LEFT_OFFSET,
        }
    }
}

impl GameView {
    pub fn new(left: u16) -> Self {
        Self { left }
    }

    /// `<!` + two columns per cell + `!>`.
    pub fn board_width() -> u16 {
        2 + 2 * BOARD_COLUMNS as u16 + 2
    }

    /// Smallest viewport that shows everything: board rows, the bottom line,
    /// and the NEXT panel.
    pub fn required_size(&self) -> Viewport {
        Viewport::new(
            self.left + Self::board_width() + 2 + 2 * PREVIEW_COLUMNS,
            BOARD_ROWS as u16 + 1,
        )
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    /// Anything that does not fit is clipped.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        for row in 0..BOARD_ROWS as u16 {
            self.draw_board_row(fb, snap, row);
        }
        self.draw_bottom_line(fb);
        self.draw_next_panel(fb, snap.next);

        if snap.game_over() {
            fb.put_str(0, 0, GAME_OVER_TEXT, CellStyle::PLAIN);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board_row(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, row: u16) {
        let mut x = fb.put_str(self.left, row, "<!", CellStyle::PLAIN);
        for &code in &snap.board[row as usize] {
            x = draw_cell(fb, x, row, PieceKind::from_code(code));
        }
        fb.put_str(x, row, "!>", CellStyle::PLAIN);
    }

    fn draw_bottom_line(&self, fb: &mut FrameBuffer) {
        let y = BOARD_ROWS as u16;
        let mut x = fb.put_str(self.left, y, "  ", CellStyle::PLAIN);
        for _ in 0..BOARD_COLUMNS {
            x = fb.put_str(x, y, "\\/", CellStyle::PLAIN);
        }
        fb.put_str(x, y, "  ", CellStyle::PLAIN);
    }

    fn draw_next_panel(&self, fb: &mut FrameBuffer, next: PieceKind) {
        let panel_x = self.left + Self::board_width() + 2;
        fb.put_str(panel_x + 3, PANEL_FIRST_ROW, "NEXT", CellStyle::PLAIN);

        let cells = shape(next).cells;
        for y in PANEL_FIRST_ROW + 1..=PANEL_LAST_ROW {
            let mut x = panel_x;
            for col in 0..PREVIEW_COLUMNS {
                let filled = cells.iter().any(|c| {
                    c.row as i32 + PREVIEW_TOP_ROW as i32 == y as i32 && c.col as u16 == col
                });
                x = draw_cell(fb, x, y, filled.then_some(next));
            }
        }
    }
}

/// Two columns: ` .` or `[]`. Returns the column after the cell.
fn draw_cell(fb: &mut FrameBuffer, x: u16, y: u16, kind: Option<PieceKind>) -> u16 {
    let (text, style) = match kind {
        Some(kind) => ("[]", CellStyle::fg(piece_color(kind))),
        None => (" .", CellStyle::fg(Rgb::new(120, 120, 120))),
    };
    for (i, ch) in text.chars().enumerate() {
        fb.set(x + i as u16, y, Cell { ch, style });
    }
    x + 2
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}
