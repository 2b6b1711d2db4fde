//! Terminal Tetris runner.
//!
//! Gravity runs on the scheduler's ticker thread; this thread reads keys and
//! feeds them to the same scheduler. Both draw through one presenter under
//! the session lock.

use std::fs::File;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};

use term_tetris::core::GameState;
use term_tetris::engine::{RunConfig, Scheduler};
use term_tetris::input::{handle_key_event, should_quit};
use term_tetris::term::{TermPresenter, TerminalGuard};
use term_tetris::types::{GAME_OVER_LINGER_MS, INPUT_POLL_MS};

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    init_logging(&config)?;
    log::info!("starting, seed {}", config.seed);

    let guard = TerminalGuard::enter()?;
    let result = run(&config);

    // Always try to restore terminal state.
    let restored = guard.restore();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    result.and(restored)
}

/// Logs go to `TETRIS_LOG_FILE` when set; stderr would land on the game
/// screen, so without a file nothing is logged unless `RUST_LOG` asks.
fn init_logging(config: &RunConfig) -> Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
    }
    Ok(())
}

fn run(config: &RunConfig) -> Result<()> {
    let scheduler = Scheduler::new(GameState::new(config.seed), TermPresenter::default());
    scheduler.start()?;
    let ticker = scheduler.spawn_ticker(config.tick_interval())?;

    let poll = Duration::from_millis(INPUT_POLL_MS as u64);
    loop {
        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        scheduler.apply(action)?;
                    }
                }
                Event::Resize(..) => scheduler.refresh()?,
                _ => {}
            }
        }

        if scheduler.is_game_over()? {
            let snap = scheduler.snapshot()?;
            log::info!(
                "game over after {} pieces, {} lines",
                snap.piece_id,
                snap.lines_cleared
            );
            thread::sleep(Duration::from_millis(GAME_OVER_LINGER_MS as u64));
            break;
        }

        if ticker.is_finished() && !scheduler.is_game_over()? {
            // Ended without game over: the thread hit an error.
            break;
        }
    }

    ticker.join()
}
