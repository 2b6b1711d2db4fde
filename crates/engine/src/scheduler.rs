//! Scheduler: serializes the gravity timer and player input on one game.
//!
//! Two execution contexts drive the same [`GameState`]: a ticker thread that
//! applies gravity on a fixed cadence, and whoever reads keys and calls
//! [`Scheduler::apply`]. Every entry point takes the session lock once and
//! holds it through the presenter call, so each rendered frame is a state that
//! existed between two whole operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};

use crate::core::{GameSnapshot, GameState, TickOutcome};
use crate::types::GameAction;

/// Draws frames. Called with the session lock held.
pub trait Presenter: Send {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()>;

    /// The output surface changed size; the next frame should be a full redraw.
    fn resize(&mut self) {}
}

struct Session<P> {
    game: GameState,
    presenter: P,
    snap: GameSnapshot,
}

impl<P: Presenter> Session<P> {
    fn present(&mut self) -> Result<()> {
        self.game.snapshot_into(&mut self.snap);
        self.presenter.present(&self.snap)
    }
}

/// Shared handle to one game session. Clones share the same session.
pub struct Scheduler<P> {
    session: Arc<Mutex<Session<P>>>,
}

impl<P> Clone for Scheduler<P> {
    fn clone(&self) -> Self {
        Self {
            session: Arc::clone(&self.session),
        }
    }
}

impl<P: Presenter + 'static> Scheduler<P> {
    pub fn new(game: GameState, presenter: P) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session {
                game,
                presenter,
                snap: GameSnapshot::default(),
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Session<P>>> {
        self.session
            .lock()
            .map_err(|_| anyhow!("game session lock poisoned"))
    }

    /// Spawn the first piece and draw the first frame.
    pub fn start(&self) -> Result<bool> {
        let mut session = self.lock()?;
        let ok = session.game.start();
        session.present()?;
        Ok(ok)
    }

    /// Apply a player move; redraws only when the move was accepted.
    pub fn apply(&self, action: GameAction) -> Result<bool> {
        let mut session = self.lock()?;
        let moved = session.game.apply_action(action);
        if moved {
            session.present()?;
        }
        Ok(moved)
    }

    /// One gravity step.
    pub fn tick(&self) -> Result<TickOutcome> {
        let mut session = self.lock()?;
        let was_over = session.game.game_over();
        let outcome = session.game.tick();
        if !was_over {
            session.present()?;
        }
        Ok(outcome)
    }

    /// Redraw the current state from scratch (e.g. after a terminal resize).
    pub fn refresh(&self) -> Result<()> {
        let mut session = self.lock()?;
        session.presenter.resize();
        session.present()
    }

    pub fn snapshot(&self) -> Result<GameSnapshot> {
        Ok(self.lock()?.game.snapshot())
    }

    pub fn is_game_over(&self) -> Result<bool> {
        Ok(self.lock()?.game.game_over())
    }

    /// Run [`Scheduler::tick`] every `interval` on a dedicated thread until the
    /// game ends or the returned [`Ticker`] is stopped.
    ///
    /// Deadlines advance by whole intervals, so a tick that waited on the lock
    /// is followed by the ones that fell due meanwhile rather than skipped.
    pub fn spawn_ticker(&self, interval: Duration) -> Result<Ticker> {
        let stop = Arc::new(AtomicBool::new(false));
        let scheduler = self.clone();
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("gravity".to_string())
            .spawn(move || -> Result<()> {
                log::debug!("ticker started ({} ms)", interval.as_millis());
                let mut deadline = Instant::now() + interval;
                loop {
                    let now = Instant::now();
                    if deadline > now {
                        thread::sleep(deadline - now);
                    }
                    if thread_stop.load(Ordering::Acquire) {
                        log::debug!("ticker stopped");
                        return Ok(());
                    }
                    deadline += interval;

                    if scheduler.tick()? == TickOutcome::GameOver {
                        log::debug!("ticker finished: game over");
                        return Ok(());
                    }
                }
            })
            .context("failed to spawn ticker thread")?;

        Ok(Ticker {
            stop,
            handle: Some(handle),
        })
    }
}

/// Handle to a running ticker thread. Dropping it asks the thread to stop.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<Result<()>>>,
}

impl Ticker {
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// The thread has exited (game over, stop, or error).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop the thread and wait for it, surfacing its error if it had one.
    pub fn join(mut self) -> Result<()> {
        self.stop();
        match self.handle.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| anyhow!("ticker thread panicked"))?,
            None => Ok(()),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
