//! Game session runtime: one game, two threads.
//!
//! [`Scheduler`] wraps a [`core::GameState`] and a [`Presenter`] behind a
//! single mutex and exposes only whole operations (start, move, tick, redraw).
//! [`Scheduler::spawn_ticker`] runs gravity on its own thread; the caller's
//! thread feeds player moves. Raw board mutation never crosses this boundary.
//!
//! ```
//! use anyhow::Result;
//! use term_tetris_engine::{Presenter, Scheduler};
//! use term_tetris_engine::core::{GameSnapshot, GameState};
//! use term_tetris_engine::types::GameAction;
//!
//! struct Quiet;
//! impl Presenter for Quiet {
//!     fn present(&mut self, _snap: &GameSnapshot) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let scheduler = Scheduler::new(GameState::new(7), Quiet);
//! scheduler.start().unwrap();
//! scheduler.tick().unwrap();
//! scheduler.apply(GameAction::MoveLeft).unwrap();
//! ```

pub mod config;
pub mod scheduler;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use config::RunConfig;
pub use scheduler::{Presenter, Scheduler, Ticker};
