//! Frame loop driving a [`Session`].
//!
//! The host's frame source (requestAnimationFrame, a vsync'd window loop)
//! calls [`FrameLoop::frame`] once per display frame and only schedules the
//! next one while it returns [`LoopControl::Continue`].

use crate::{Renderer, Session};
use std::cell::Cell;
use std::rc::Rc;
use tracing::debug;

/// Shared stop flag. Clones observe the same cancellation.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Per-frame work: advance the session, then draw it
pub type TickFn<R> = fn(&mut Session, &mut R);

pub fn update_and_draw<R: Renderer>(session: &mut Session, renderer: &mut R) {
    session.update();
    renderer.begin_frame();
    session.draw(renderer);
}

pub struct FrameLoop<R: Renderer> {
    session: Session,
    renderer: R,
    tick: TickFn<R>,
    token: CancelToken,
    frames: u64,
}

impl<R: Renderer> FrameLoop<R> {
    pub fn new(session: Session, renderer: R) -> Self {
        Self::with_tick(session, renderer, update_and_draw::<R>)
    }

    pub fn with_tick(session: Session, renderer: R, tick: TickFn<R>) -> Self {
        let token = CancelToken::new();
        // Nothing runs until start()
        token.cancel();
        Self {
            session,
            renderer,
            tick,
            token,
            frames: 0,
        }
    }

    /// Start a fresh run. Any token handed out earlier is cancelled so a
    /// stale frame callback cannot drive the new run.
    pub fn start(&mut self) -> CancelToken {
        self.token.cancel();
        self.token = CancelToken::new();
        self.frames = 0;
        self.session.start();
        debug!("frame loop started");
        self.token.clone()
    }

    /// Run one frame unless cancelled. Stops once the run is over; the frame
    /// that detected the fatal hit is still drawn.
    pub fn frame(&mut self) -> LoopControl {
        if self.token.is_cancelled() {
            return LoopControl::Stop;
        }

        (self.tick)(&mut self.session, &mut self.renderer);
        self.frames += 1;

        if self.session.is_game_over() {
            self.token.cancel();
            debug!(frames = self.frames, "frame loop stopped on game over");
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Drive frames back to back without an external frame source.
    /// Returns how many frames ran.
    pub fn run_headless(&mut self, max_frames: u64) -> u64 {
        let mut ran = 0;
        while ran < max_frames {
            if self.token.is_cancelled() {
                break;
            }
            ran += 1;
            if self.frame() == LoopControl::Stop {
                break;
            }
        }
        ran
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
