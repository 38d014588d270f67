// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Session ownership between input, timer and renderer
//!
//! The [`Controller`] holds at most one [`Session`] and translates the three
//! outside stimuli into session calls:
//!
//! - start/pause buttons: [`Controller::start`], [`Controller::pause`]
//! - canvas clicks: [`Controller::click`]
//! - the fixed-rate timer: [`Controller::physics_tick`]
//!
//! and exposes a read-only [`Frame`] for the per-frame renderer. It owns no
//! timers or threads; the host decides when to call it. Whether the physics
//! loop *should* be running is tracked here, mirroring a host timer that is
//! armed on start/resume and cleared on pause and finish.

use crate::clock::{Clock, SystemClock};
use crate::commands::interact;
use crate::config::{ConfigError, SimulationConfig};
use crate::session::{Session, SessionState, TickOutcome};
use std::time::Duration;

/// A mass as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Centre x
    pub x: f64,
    /// Centre y
    pub y: f64,
    /// Draw radius
    pub radius: f64,
    /// Whether to draw it in the target style
    pub is_target: bool,
}

/// What the renderer should show this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// No session yet
    Idle,
    /// The session is paused
    Paused {
        /// Running time so far
        elapsed: Duration,
    },
    /// The session is over
    Finished {
        /// Final running time
        elapsed: Duration,
    },
    /// Live scene
    Scene {
        /// Masses in system order
        sprites: Vec<Sprite>,
        /// Running time including the interval in progress
        elapsed: Duration,
    },
}

/// Owner of the current session
///
/// # Example
///
/// ```
/// use gravity_toy::{Controller, Frame, SimulationConfig};
///
/// let mut controller = Controller::new(SimulationConfig::default());
/// assert_eq!(controller.frame(), Frame::Idle);
///
/// controller.start();
/// controller.click(310.0, 150.0);
/// controller.physics_tick();
///
/// match controller.frame() {
///     Frame::Scene { sprites, .. } => assert_eq!(sprites.len(), 2),
///     other => panic!("unexpected frame {:?}", other),
/// }
/// ```
#[derive(Debug)]
pub struct Controller<C: Clock + Clone = SystemClock> {
    config: SimulationConfig,
    clock: C,
    session: Option<Session<C>>,
    physics_active: bool,
}

impl Controller<SystemClock> {
    /// Create a controller on the wall clock
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock + Clone> Controller<C> {
    /// Create a controller whose sessions read time from `clock`
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn with_clock(config: SimulationConfig, clock: C) -> Self {
        match Self::try_with_clock(config, clock) {
            Ok(controller) => controller,
            Err(e) => panic!("Invalid simulation config: {}", e),
        }
    }

    /// Create a controller, rejecting a bad config up front
    pub fn try_with_clock(config: SimulationConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Controller {
            config,
            clock,
            session: None,
            physics_active: false,
        })
    }

    /// The current session, if any
    pub fn session(&self) -> Option<&Session<C>> {
        self.session.as_ref()
    }

    /// Cadence at which the host should call [`Controller::physics_tick`]
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Whether the host timer should currently be firing
    pub fn is_ticking(&self) -> bool {
        self.physics_active
    }

    /// Start button
    ///
    /// Creates a session if there is none, replaces a finished one, or
    /// resumes a paused one. Returns false if a session was already running.
    pub fn start(&mut self) -> bool {
        if self.session.as_ref().is_some_and(Session::is_finished) {
            log::debug!("Discarding finished session");
            self.session = None;
        }

        match self.session.as_mut() {
            None => {
                // Config was validated when the controller was built.
                self.session = Some(Session::with_clock(self.config.clone(), self.clock.clone()));
                self.physics_active = true;
                log::debug!("New session created");
                true
            }
            Some(session) if session.is_paused() => {
                session.resume();
                self.physics_active = true;
                true
            }
            Some(_) => false,
        }
    }

    /// Pause button
    ///
    /// Returns false if there is no running session to pause.
    pub fn pause(&mut self) -> bool {
        let paused = self.session.as_mut().is_some_and(Session::pause);
        if paused {
            self.physics_active = false;
        }
        paused
    }

    /// Canvas click at plane coordinates `(x, y)`
    ///
    /// Grows the mass under the cursor or places a new one. Ignored when no
    /// session exists.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        match self.session.as_mut() {
            Some(session) => interact(session, x, y),
            None => false,
        }
    }

    /// Timer callback
    ///
    /// Returns None when the physics loop is not active. After a tick that
    /// finishes the session the loop deactivates itself.
    pub fn physics_tick(&mut self) -> Option<TickOutcome> {
        if !self.physics_active {
            return None;
        }
        let session = self.session.as_mut()?;
        let outcome = session.tick();
        if outcome == TickOutcome::Finished {
            self.physics_active = false;
        }
        Some(outcome)
    }

    /// Snapshot for the renderer
    pub fn frame(&self) -> Frame {
        let Some(session) = self.session.as_ref() else {
            return Frame::Idle;
        };

        let elapsed = session.elapsed();
        match session.state() {
            SessionState::Finished => Frame::Finished { elapsed },
            SessionState::Paused => Frame::Paused { elapsed },
            SessionState::Unstarted | SessionState::Running => {
                let radius_size = session.config().radius_size;
                let sprites = session
                    .system()
                    .iter()
                    .map(|m| Sprite {
                        x: m.x,
                        y: m.y,
                        radius: m.radius(radius_size),
                        is_target: m.is_target(),
                    })
                    .collect();
                Frame::Scene { sprites, elapsed }
            }
        }
    }
}
