//! Terminal presentation for the game.
//!
//! A small game-oriented rendering layer: [`GameView`] draws a snapshot into
//! a [`FrameBuffer`], [`TerminalRenderer`] flushes the frame with `crossterm`
//! (changed runs only), and [`TermPresenter`] ties the two together behind
//! the engine's [`engine::Presenter`] seam.

pub mod fb;
pub mod game_view;
pub mod presenter;
pub mod renderer;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, DEFAULT_LEFT_OFFSET};
pub use presenter::TermPresenter;
pub use renderer::{
    encode_diff_into, encode_full_into, for_each_changed_run, TerminalGuard, TerminalRenderer,
};
