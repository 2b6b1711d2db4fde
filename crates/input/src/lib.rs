//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`types::GameAction`] and recognises the
//! quit keys. Unknown keys map to nothing; they are not errors.

pub mod map;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
