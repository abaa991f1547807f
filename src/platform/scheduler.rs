//! Frame loop driver
//!
//! [`Runner`] owns everything one frame touches. Host event handlers only
//! queue signals; the next [`Runner::frame`] applies them before ticking, so
//! a tick is never re-entered. The browser loop reschedules itself until the
//! [`CancelToken`] fires; tests call `frame()` directly.

use std::cell::Cell;
use std::rc::Rc;

use super::display::Display;
use super::input::Signal;
use crate::consts::FAILURE_MESSAGE;
use crate::sim::{GameEvent, GameWorld, GeometryProvider, Tuning, request_jump, start, tick};

/// Shared stop flag for a self-rescheduling loop
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

/// Game instance holding all per-frame state
pub struct Runner<G, D> {
    world: GameWorld,
    geometry: G,
    display: D,
    pending: Vec<Signal>,
    token: CancelToken,
}

impl<G: GeometryProvider, D: Display> Runner<G, D> {
    pub fn new(geometry: G, display: D, tuning: Tuning) -> Self {
        let world = GameWorld::from_geometry(&geometry, tuning);
        Self {
            world,
            geometry,
            display,
            pending: Vec::new(),
            token: CancelToken::new(),
        }
    }

    /// Queue a signal for the next frame; dropped once cancelled
    pub fn signal(&mut self, signal: Signal) {
        if self.token.is_cancelled() {
            return;
        }
        self.pending.push(signal);
    }

    /// Handle to stop the loop from outside
    pub fn cancel_token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run one frame: apply queued signals, tick, push outputs.
    ///
    /// Returns false (and does nothing) once cancelled, so the caller stops
    /// rescheduling. The events of the frame are available from
    /// [`Runner::frame_events`].
    pub fn frame(&mut self) -> bool {
        self.frame_events().is_some()
    }

    /// Like [`Runner::frame`], returning everything that happened
    pub fn frame_events(&mut self) -> Option<Vec<GameEvent>> {
        if self.token.is_cancelled() {
            return None;
        }

        let mut events = Vec::new();
        for signal in std::mem::take(&mut self.pending) {
            let event = match signal {
                Signal::Start => start(&mut self.world, &mut self.geometry),
                Signal::Jump => request_jump(&mut self.world, &mut self.geometry),
            };
            events.extend(event);
        }
        events.extend(tick(&mut self.world));

        for event in &events {
            match event {
                GameEvent::Started { .. } => self.display.hide_start_message(),
                GameEvent::Collided { .. } => self.display.show_failure_message(FAILURE_MESSAGE),
                GameEvent::Jumped | GameEvent::ObstacleEvicted { .. } => {}
            }
        }
        self.display.set_player_vertical_position(self.world.player.y);
        self.display.set_scroll_offset(self.world.run.scroll_offset);

        Some(events)
    }
}
