//! Pieces module - tetromino catalog and rotation
//!
//! Each shape is four cells relative to a shape-local origin. Rotation turns
//! the cells 90° clockwise about a fixed per-kind pivot: the centre of the
//! shape's 3x3 box (4x4 for I, 2x2 for O), so rotated cells stay inside the
//! box and never take negative local rows. Pivots sit on cell centres or cell
//! corners, so the arithmetic is done on doubled coordinates and stays exact:
//! four rotations always give back the same cell array.

use crate::types::{PieceKind, Position};

/// Cells of a shape, relative to its local origin.
pub type PieceCells = [Position; 4];

/// A shape variant: the kind plus its current (possibly rotated) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    pub cells: PieceCells,
}

const fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// Canonical catalog, in `PieceKind::ALL` order.
///
/// ```text
/// I  [][][][]     J  [][][]     L  [][][]     O  [][]
///                        []        []            [][]
///
/// S    [][]       T  [][][]     Z  [][]
///    [][]              []            [][]
/// ```
const SHAPES: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        cells: [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
    },
    Shape {
        kind: PieceKind::J,
        cells: [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
    },
    Shape {
        kind: PieceKind::L,
        cells: [p(0, 0), p(0, 1), p(0, 2), p(1, 0)],
    },
    Shape {
        kind: PieceKind::O,
        cells: [p(0, 0), p(0, 1), p(1, 0), p(1, 1)],
    },
    Shape {
        kind: PieceKind::S,
        cells: [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    },
    Shape {
        kind: PieceKind::T,
        cells: [p(0, 0), p(0, 1), p(0, 2), p(1, 1)],
    },
    Shape {
        kind: PieceKind::Z,
        cells: [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    },
];

/// The seven canonical shapes.
pub fn shapes() -> &'static [Shape; 7] {
    &SHAPES
}

/// Canonical (spawn) shape for a kind.
pub fn shape(kind: PieceKind) -> Shape {
    SHAPES[catalog_index(kind)]
}

/// Position of `kind` in [`SHAPES`] (and in `PieceKind::ALL`).
const fn catalog_index(kind: PieceKind) -> usize {
    match kind {
        PieceKind::I => 0,
        PieceKind::J => 1,
        PieceKind::L => 2,
        PieceKind::O => 3,
        PieceKind::S => 4,
        PieceKind::T => 5,
        PieceKind::Z => 6,
    }
}

/// Rotation pivot in doubled coordinates `(2 * row, 2 * col)`.
///
/// Both components share a parity, which keeps every rotated cell on an
/// integer position.
fn pivot2(kind: PieceKind) -> (i8, i8) {
    match kind {
        // Centre of the 2x2 block: (0.5, 0.5).
        PieceKind::O => (1, 1),
        // Centre of the 4x4 box: (1.5, 1.5).
        PieceKind::I => (3, 3),
        // Centre cell of the 3x3 box: (1, 1).
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => (2, 2),
    }
}

/// Rotate a shape 90° clockwise: `(r, c) -> (c, -r)` about its kind's pivot.
///
/// The square returns unchanged. The input is never modified.
pub fn rotate(shape: Shape) -> Shape {
    if shape.kind == PieceKind::O {
        return shape;
    }

    let (pr, pc) = pivot2(shape.kind);
    let mut cells = shape.cells;
    for cell in cells.iter_mut() {
        let dr = 2 * cell.row - pr;
        let dc = 2 * cell.col - pc;
        let row2 = dc + pr;
        let col2 = -dr + pc;
        debug_assert!(row2 % 2 == 0 && col2 % 2 == 0);
        *cell = Position::new(row2 / 2, col2 / 2);
    }

    Shape {
        kind: shape.kind,
        cells,
    }
}

/// Shift all four cells by `(d_row, d_col)`.
pub fn translate(cells: &PieceCells, d_row: i8, d_col: i8) -> PieceCells {
    cells.map(|c| c.offset(d_row, d_col))
}
