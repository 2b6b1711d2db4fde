//! [`Presenter`] that draws the classic view to the terminal.

use anyhow::Result;
use crossterm::terminal;

use crate::core::GameSnapshot;
use crate::engine::Presenter;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TermPresenter {
    view: GameView,
    renderer: TerminalRenderer,
    fb: FrameBuffer,
}

impl TermPresenter {
    pub fn new(view: GameView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    fn viewport(&self) -> Viewport {
        match terminal::size() {
            Ok((width, height)) => Viewport::new(width, height),
            Err(err) => {
                log::debug!("terminal size unavailable ({err}), using layout size");
                self.view.required_size()
            }
        }
    }
}

impl Default for TermPresenter {
    fn default() -> Self {
        Self::new(GameView::default())
    }
}

impl Presenter for TermPresenter {
    fn present(&mut self, snap: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(snap, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn resize(&mut self) {
        self.renderer.invalidate();
    }
}
