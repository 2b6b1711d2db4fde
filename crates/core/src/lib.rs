//! Core game logic - pure, deterministic, and testable
//!
//! Game rules and state with no dependency on terminals, threads or I/O:
//!
//! - **Deterministic**: the same seed gives the same piece sequence
//! - **Testable**: every rule is reachable from plain unit tests
//! - **Portable**: the engine crate wraps it in threads, the term crate draws it
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and the exact-pivot rotation
//! - [`board`]: 20x10 grid, bounds/occupancy predicates, line clearing
//! - [`game_state`]: spawn, moves, gravity, lock, line clear, game over
//! - [`rng`]: uniform next-piece selection
//! - [`snapshot`]: copies handed to presenters
//!
//! # Game Rules
//!
//! - **Random next piece**: uniform over the seven kinds, repeats allowed
//! - **Rotation**: clockwise about a fixed pivot, no wall kicks
//! - **Gravity**: one row per tick; a piece that cannot fall locks at once
//! - **Line clear**: full rows vanish in the same tick, the next piece spawns
//! - **Game over**: the next piece does not fit at the spawn anchor, or a
//!   piece locks with cells above the top
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{GameState, TickOutcome};
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! assert_eq!(game.tick(), TickOutcome::Moved);
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//!
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use term_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RowList};
pub use game_state::{ActivePiece, GameState, LockEvent, Phase, Placement, TickOutcome};
pub use pieces::{rotate, shape, shapes, translate, PieceCells, Shape};
pub use rng::{PiecePicker, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
