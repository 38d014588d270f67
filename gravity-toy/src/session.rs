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
//! Session state machine
//!
//! A [`Session`] wraps the current [`System`] with the bookkeeping needed to
//! run a game: whether play has begun, whether it is paused or over, and how
//! much running time has accumulated.
//!
//! # States
//!
//! ```text
//! Unstarted --first add_mass--> Running <--pause/resume--> Paused
//!                                  |
//!                          target culled on tick
//!                                  v
//!                              Finished (terminal)
//! ```
//!
//! Running time excludes paused intervals. It is folded into
//! [`Session::time_elapsed`] on every pause and once more on finish.

use crate::boundary::{clean_system, Viewport};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, SimulationConfig};
use crate::entity::System;
use crate::integration::gravity::GravityField;
use crate::integration::EulerIntegrator;
use crate::GRAVITATIONAL_CONSTANT;
use std::time::{Duration, Instant};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Only the target is on the field and the clock has not started
    Unstarted,
    /// Physics is live
    Running,
    /// Physics is suspended and running time is not accruing
    Paused,
    /// The target left the field; nothing more will happen
    Finished,
}

/// What a call to [`Session::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The system was culled and integrated one step forward
    Advanced,
    /// The target was culled on this tick and the session is now over
    Finished,
    /// The session is paused or finished, so nothing ran
    Skipped,
}

/// One game: a system plus timing and run state
///
/// The clock is a type parameter so tests can drive time with
/// [`ManualClock`](crate::ManualClock).
#[derive(Debug, Clone)]
pub struct Session<C: Clock = SystemClock> {
    config: SimulationConfig,
    viewport: Viewport,
    integrator: EulerIntegrator,
    clock: C,
    system: System,
    state: SessionState,
    time_elapsed: Duration,
    date_start: Option<Instant>,
    date_entered: Option<Instant>,
}

impl Session<SystemClock> {
    /// Create a fresh session on the wall clock
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn new(config: SimulationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a fresh session on the wall clock, rejecting a bad config
    pub fn try_new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::try_with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    /// Create a fresh session reading time from `clock`
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn with_clock(config: SimulationConfig, clock: C) -> Self {
        match Self::try_with_clock(config, clock) {
            Ok(session) => session,
            Err(e) => panic!("Invalid simulation config: {}", e),
        }
    }

    /// Create a fresh session reading time from `clock`, rejecting a bad config
    pub fn try_with_clock(config: SimulationConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let viewport = config.viewport();
        let field = GravityField::new(GRAVITATIONAL_CONSTANT).with_angle_mode(config.angle_mode);
        let integrator = EulerIntegrator::new(field, config.tick_interval());

        Ok(Session {
            system: System::with_target(&viewport),
            config,
            viewport,
            integrator,
            clock,
            state: SessionState::Unstarted,
            time_elapsed: Duration::ZERO,
            date_start: None,
            date_entered: None,
        })
    }

    /// Current system
    pub fn system(&self) -> &System {
        &self.system
    }

    pub(crate) fn system_mut(&mut self) -> &mut System {
        &mut self.system
    }

    /// Configuration this session was built from
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Culling bounds
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The integrator used on every tick
    pub fn integrator(&self) -> &EulerIntegrator {
        &self.integrator
    }

    /// Time source
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether play is suspended
    pub fn is_paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    /// Whether the session is over
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Whether the first user mass has been placed
    pub fn has_begun(&self) -> bool {
        self.date_start.is_some()
    }

    /// Running time folded in so far, excluding the interval in progress
    pub fn time_elapsed(&self) -> Duration {
        self.time_elapsed
    }

    /// When the first user mass was placed
    pub fn date_start(&self) -> Option<Instant> {
        self.date_start
    }

    /// When the session last started or resumed running
    pub fn date_entered(&self) -> Option<Instant> {
        self.date_entered
    }

    /// Total running time including the interval in progress
    ///
    /// This is what a timer display should show. Once paused or finished it
    /// equals [`Session::time_elapsed`].
    pub fn elapsed(&self) -> Duration {
        match (self.state, self.date_entered) {
            (SessionState::Running, Some(entered)) => {
                self.time_elapsed + self.clock.now().saturating_duration_since(entered)
            }
            _ => self.time_elapsed,
        }
    }

    /// Stamp the start of play, once
    ///
    /// Returns true if this call started the clock. Later calls are no-ops
    /// whatever the system length has become in between.
    pub(crate) fn begin(&mut self) -> bool {
        if self.has_begun() {
            return false;
        }
        let now = self.clock.now();
        self.date_start = Some(now);
        self.date_entered = Some(now);
        if self.state == SessionState::Unstarted {
            self.state = SessionState::Running;
        }
        log::info!("Session started with {} masses", self.system.len());
        true
    }

    /// Suspend a running session
    ///
    /// Returns false, changing nothing, unless the session is running.
    pub fn pause(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        self.fold_running_time();
        self.state = SessionState::Paused;
        log::debug!("Session paused at {:?}", self.time_elapsed);
        true
    }

    /// Resume a paused session
    ///
    /// Returns false, changing nothing, unless the session is paused.
    pub fn resume(&mut self) -> bool {
        if self.state != SessionState::Paused {
            return false;
        }
        self.date_entered = Some(self.clock.now());
        self.state = SessionState::Running;
        log::debug!("Session resumed at {:?}", self.time_elapsed);
        true
    }

    /// Run one physics tick
    ///
    /// Culls the system, then either integrates it one step forward or, if
    /// the target is gone, finishes the session. The new system is stored in
    /// one assignment, so no partial tick is ever visible.
    pub fn tick(&mut self) -> TickOutcome {
        if matches!(self.state, SessionState::Paused | SessionState::Finished) {
            return TickOutcome::Skipped;
        }

        let culled = clean_system(&self.system, &self.viewport);
        if !culled.has_target() {
            self.system = culled;
            self.fold_running_time();
            self.state = SessionState::Finished;
            log::info!(
                "Target lost, session finished after {:?} with {} masses left",
                self.time_elapsed,
                self.system.len()
            );
            return TickOutcome::Finished;
        }

        let dropped = self.system.len() - culled.len();
        if dropped > 0 {
            log::debug!("{} masses left the viewport", dropped);
        }

        self.system = self.integrator.step(&culled);
        log::trace!("Advanced {} masses by {:?}", self.system.len(), self.integrator.timestep());
        TickOutcome::Advanced
    }

    fn fold_running_time(&mut self) {
        if let Some(entered) = self.date_entered {
            self.time_elapsed += self.clock.now().saturating_duration_since(entered);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::entity::Mass;

    fn session() -> (Session<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Session::with_clock(SimulationConfig::default(), clock.clone()), clock)
    }

    #[test]
    fn test_fresh_session() {
        let (session, _) = session();
        assert_eq!(session.state(), SessionState::Unstarted);
        assert_eq!(session.system().len(), 1);
        assert!(session.system().has_target());
        assert!(!session.has_begun());
        assert_eq!(session.date_start(), None);
        assert_eq!(session.date_entered(), None);
        assert_eq!(session.time_elapsed(), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "Invalid simulation config")]
    fn test_invalid_config_panics() {
        Session::new(SimulationConfig::default().with_radius_size(-1.0));
    }

    #[test]
    fn test_try_new_reports_error() {
        let result = Session::try_new(SimulationConfig::default().with_tick_interval_ms(0));
        assert_eq!(result.err(), Some(ConfigError::ZeroTickInterval));
    }

    #[test]
    fn test_begin_is_one_shot() {
        let (mut session, clock) = session();
        assert!(session.begin());
        let start = session.date_start();
        assert_eq!(start, session.date_entered());
        assert_eq!(session.state(), SessionState::Running);

        clock.advance(Duration::from_secs(1));
        assert!(!session.begin());
        assert_eq!(session.date_start(), start);
    }

    #[test]
    fn test_pause_and_resume_accounting() {
        let (mut session, clock) = session();
        session.begin();

        clock.advance(Duration::from_millis(300));
        assert!(session.pause());
        assert!(session.is_paused());
        assert_eq!(session.time_elapsed(), Duration::from_millis(300));

        // Paused time does not count
        clock.advance(Duration::from_secs(10));
        assert_eq!(session.elapsed(), Duration::from_millis(300));

        assert!(session.resume());
        clock.advance(Duration::from_millis(200));
        assert_eq!(session.elapsed(), Duration::from_millis(500));
        assert_eq!(session.time_elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn test_pause_rules() {
        let (mut session, _) = session();
        assert!(!session.pause(), "unstarted session cannot pause");
        assert!(!session.resume());

        session.begin();
        assert!(session.pause());
        assert!(!session.pause(), "double pause must not double count");
        assert!(session.resume());
        assert!(!session.resume());
    }

    #[test]
    fn test_tick_skipped_while_paused() {
        let (mut session, _) = session();
        session.system_mut().push(Mass::new(310.0, 150.0));
        session.begin();
        session.pause();

        let before = session.system().clone();
        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.system(), &before);
    }

    #[test]
    fn test_tick_culls_then_integrates() {
        let (mut session, _) = session();
        session.system_mut().push(Mass::new(1000.0, 150.0));
        session.system_mut().push(Mass::new(280.0, 150.0));
        session.begin();

        assert_eq!(session.tick(), TickOutcome::Advanced);
        assert_eq!(session.system().len(), 2);
        assert!(session.system().masses()[0].vx < 0.0);
        assert!(session.system().masses()[1].vx > 0.0);
    }

    #[test]
    fn test_target_loss_finishes_and_freezes_time() {
        let (mut session, clock) = session();
        session.system_mut().push(Mass::new(310.0, 150.0));
        session.begin();
        clock.advance(Duration::from_millis(750));

        let target = session.system_mut().get_mut(0).unwrap();
        target.x = 700.0;

        assert_eq!(session.tick(), TickOutcome::Finished);
        assert!(session.is_finished());
        assert_eq!(session.time_elapsed(), Duration::from_millis(750));
        assert!(!session.system().has_target());

        clock.advance(Duration::from_secs(5));
        assert_eq!(session.tick(), TickOutcome::Skipped);
        assert_eq!(session.elapsed(), Duration::from_millis(750));
        assert!(!session.pause());
        assert!(!session.resume());
    }

    #[test]
    fn test_unstarted_tick_leaves_lone_target_in_place() {
        let (mut session, _) = session();
        assert_eq!(session.tick(), TickOutcome::Advanced);
        let target = session.system().masses()[0];
        assert_eq!((target.x, target.y), (300.0, 150.0));
        assert_eq!(session.state(), SessionState::Unstarted);
    }
}
