//! Game state module - the board/piece state machine
//!
//! `GameState` owns the board, the falling piece and the next piece, and runs
//! the spawn -> fall -> lock -> line clear -> spawn cycle.
//!
//! The falling piece is painted into the board while it falls. Every move
//! erases it, validates the candidate against what is left, and paints either
//! the candidate or the original cells back, so the board never shows a
//! half-moved piece once a call returns.

use arrayvec::ArrayVec;

use crate::board::{Board, RowList};
use crate::pieces::{rotate, shape, translate, PieceCells, Shape};
use crate::rng::PiecePicker;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Lifecycle phase.
///
/// `Locking`, `ClearingLines` and `Spawning` only exist inside a single
/// [`GameState::tick`] call; between calls the game is `Empty`, `Falling` or
/// `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Empty,
    Falling,
    Locking,
    ClearingLines,
    Spawning,
    GameOver,
}

/// Which cells a candidate position may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Spawn and downward moves: rows above the top are allowed.
    FallIn,
    /// Lateral moves and rotation: every cell must be on the board.
    OnScreen,
}

impl Placement {
    fn admits(self, pos: Position) -> bool {
        match self {
            Placement::FallIn => Board::is_drawable(pos),
            Placement::OnScreen => Board::in_bounds(pos),
        }
    }
}

/// Active falling piece: a shape variant anchored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub anchor: Position,
}

impl ActivePiece {
    /// Canonical shape at the spawn anchor
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            shape: shape(kind),
            anchor: Position::new(SPAWN_ROW, SPAWN_COL),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    /// Board positions of the four cells
    pub fn cells(&self) -> PieceCells {
        translate(&self.shape.cells, self.anchor.row, self.anchor.col)
    }

    pub fn shifted(&self, d_row: i8, d_col: i8) -> Self {
        Self {
            anchor: self.anchor.offset(d_row, d_col),
            ..*self
        }
    }

    pub fn rotated(&self) -> Self {
        Self {
            shape: rotate(self.shape),
            ..*self
        }
    }
}

/// Result of one gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game had no piece yet and spawned one.
    Spawned,
    /// The piece fell one row.
    Moved,
    /// The piece locked; the next one spawned in the same tick.
    Locked { lines_cleared: u32 },
    /// The game is over (this tick or earlier).
    GameOver,
}

/// What happened when the last piece locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    /// Cleared row indices, as they were numbered before the collapse.
    pub cleared_rows: RowList,
    /// Some of the piece's cells were still above row 0 after the cleared
    /// rows collapsed.
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    picker: PiecePicker,
    phase: Phase,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    lines_cleared: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed. The first piece is chosen
    /// but not spawned until [`GameState::start`].
    pub fn new(seed: u32) -> Self {
        let mut picker = PiecePicker::new(seed);
        let first = picker.draw();
        Self::from_parts(Board::new(), first, picker)
    }

    /// Start from a prepared board, with `first` as the first piece to spawn.
    pub fn with_board(board: Board, first: PieceKind, seed: u32) -> Self {
        Self::from_parts(board, first, PiecePicker::new(seed))
    }

    fn from_parts(board: Board, first: PieceKind, picker: PiecePicker) -> Self {
        Self {
            board,
            active: None,
            next: first,
            picker,
            phase: Phase::Empty,
            piece_id: 0,
            lines_cleared: 0,
            last_event: None,
        }
    }

    /// Spawn the first piece. Returns false if it could not be placed.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Empty => self.spawn_piece(),
            Phase::GameOver => false,
            _ => true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Empty
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn last_event(&self) -> Option<&LockEvent> {
        self.last_event.as_ref()
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Placement predicate: every cell admitted by `placement` and free.
    ///
    /// The active piece is part of the board while it falls, so callers
    /// checking a move must erase it first.
    pub fn fits(&self, cells: &[Position], placement: Placement) -> bool {
        cells
            .iter()
            .all(|&pos| placement.admits(pos) && !self.board.is_occupied(pos))
    }

    /// Promote the next piece to the spawn anchor and draw a new next piece.
    ///
    /// A piece that does not fit ends the game and is not painted.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        self.phase = Phase::Spawning;

        let kind = self.next;
        self.next = self.picker.draw();
        let piece = ActivePiece::spawn(kind);

        if !self.fits(&piece.cells(), Placement::FallIn) {
            log::info!(
                "game over: {} blocked at spawn after {} pieces",
                kind.as_str(),
                self.piece_id
            );
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        self.board.paint(&piece.cells(), Some(kind));
        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        self.phase = Phase::Falling;
        log::debug!(
            "spawned {} (piece {}), next {}",
            kind.as_str(),
            self.piece_id,
            self.next.as_str()
        );
        true
    }

    /// Erase, validate, repaint. Returns whether the candidate was taken.
    fn try_replace(&mut self, candidate: ActivePiece, placement: Placement) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if self.phase != Phase::Falling {
            return false;
        }

        self.board.paint(&active.cells(), None);
        let accepted = self.fits(&candidate.cells(), placement);
        let kept = if accepted { candidate } else { active };
        self.board.paint(&kept.cells(), Some(kept.kind()));
        self.active = Some(kept);
        accepted
    }

    /// Try to move the active piece by `(d_row, d_col)`
    pub(crate) fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let placement = if d_col == 0 && d_row > 0 {
            Placement::FallIn
        } else {
            Placement::OnScreen
        };
        self.try_replace(active.shifted(d_row, d_col), placement)
    }

    /// Try to rotate the active piece clockwise in place (no kicks)
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.try_replace(active.rotated(), Placement::OnScreen)
    }

    /// Apply a player move. Rejected moves change nothing.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let moved = match action {
            GameAction::Rotate => self.try_rotate(),
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::SoftDrop => self.try_move(1, 0),
        };
        log::trace!("{} -> {}", action.as_str(), moved);
        moved
    }

    /// Lock the active piece, clear full rows and spawn the next piece
    pub fn lock_piece(&mut self) -> TickOutcome {
        let Some(active) = self.active.take() else {
            return if self.phase == Phase::Empty && self.spawn_piece() {
                TickOutcome::Spawned
            } else {
                TickOutcome::GameOver
            };
        };
        self.phase = Phase::Locking;
        // Visible cells are already painted; locking means no longer moving
        // them. Cells above the top are carried separately.
        let kind = active.kind();
        let hidden: ArrayVec<Position, 4> =
            active.cells().into_iter().filter(|c| c.row < 0).collect();

        self.phase = Phase::ClearingLines;
        let cleared_rows = self.board.clear_full_rows();
        let lines = cleared_rows.len() as u32;
        self.lines_cleared += lines;

        // Every cleared row lies below the hidden cells, so each one pulls
        // them down a row. The rows they land on were just emptied.
        let surfaced: ArrayVec<Position, 4> = hidden
            .iter()
            .map(|c| c.offset(cleared_rows.len() as i8, 0))
            .collect();
        let topped_out = surfaced.iter().any(|c| c.row < 0);
        if !topped_out {
            self.board.paint(&surfaced, Some(kind));
        }
        log::debug!(
            "locked {} at ({}, {}), cleared {:?}",
            kind.as_str(),
            active.anchor.row,
            active.anchor.col,
            cleared_rows.as_slice()
        );
        self.last_event = Some(LockEvent {
            kind,
            cleared_rows,
            topped_out,
        });

        if topped_out {
            log::info!(
                "game over: {} locked above the top after {} pieces",
                kind.as_str(),
                self.piece_id
            );
            self.phase = Phase::GameOver;
            return TickOutcome::GameOver;
        }

        if self.spawn_piece() {
            TickOutcome::Locked {
                lines_cleared: lines,
            }
        } else {
            TickOutcome::GameOver
        }
    }

    /// Gravity tick: fall one row, or lock and move on to the next piece.
    pub fn tick(&mut self) -> TickOutcome {
        match self.phase {
            Phase::GameOver => TickOutcome::GameOver,
            Phase::Empty => {
                if self.spawn_piece() {
                    TickOutcome::Spawned
                } else {
                    TickOutcome::GameOver
                }
            }
            _ => {
                if self.try_move(1, 0) {
                    TickOutcome::Moved
                } else {
                    self.lock_piece()
                }
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.phase = self.phase;
        out.piece_id = self.piece_id;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
