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
//! Force integration for mass systems
//!
//! One step advances every mass by a fixed duration using semi-implicit
//! (symplectic) Euler:
//!
//! ```text
//! a(t)      = F(t) / m
//! v(t + dt) = v(t) + a(t)*dt
//! x(t + dt) = x(t) + v(t + dt)*dt
//! ```
//!
//! The step is pure. Forces are read from the previous system only, and a
//! fresh system of the same length and order is returned. Nothing is
//! clamped: a mass that gets flung away keeps accelerating until the
//! boundary filter removes it.
//!
//! With the `parallel` feature the per-mass update runs on the Rayon pool.
//! Each mass only reads the previous system, so the result is the same as
//! the sequential path, bit for bit.

use crate::entity::{Mass, System};
use std::time::Duration;

pub mod gravity;

use gravity::GravityField;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance `system` by `time_delta` under `field`
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gravity_toy::integration::{update_system, gravity::GravityField};
/// use gravity_toy::{Mass, System, GRAVITATIONAL_CONSTANT};
///
/// let system = System::from(vec![Mass::new(0.0, 0.0), Mass::new(10.0, 0.0)]);
/// let next = update_system(&system, &GravityField::new(GRAVITATIONAL_CONSTANT), Duration::from_millis(50));
///
/// assert_eq!(next.len(), 2);
/// assert!(next.masses()[0].vx > 0.0);
/// assert!(next.masses()[1].vx < 0.0);
/// ```
pub fn update_system(system: &System, field: &GravityField, time_delta: Duration) -> System {
    let dt = time_delta.as_secs_f64();
    let masses = system.masses();

    #[cfg(feature = "parallel")]
    let next: Vec<Mass> = masses
        .par_iter()
        .map(|mass| advance(mass, masses, field, dt))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let next: Vec<Mass> = masses
        .iter()
        .map(|mass| advance(mass, masses, field, dt))
        .collect();

    let invalid = next.iter().filter(|m| !m.is_valid()).count();
    if invalid > 0 {
        log::warn!("{} of {} masses reached a non-finite state", invalid, next.len());
    }

    System::from(next)
}

/// Next state of a single mass, given the whole previous system
fn advance(mass: &Mass, previous: &[Mass], field: &GravityField, dt: f64) -> Mass {
    let force = field.net_force(mass, previous);

    let mut next = *mass;
    next.ax = force.fx / mass.mass();
    next.ay = force.fy / mass.mass();
    next.vx = mass.vx + next.ax * dt;
    next.vy = mass.vy + next.ay * dt;
    next.x = mass.x + next.vx * dt;
    next.y = mass.y + next.vy * dt;
    next
}

/// Fixed-step integrator bound to a gravity field
///
/// Sessions own one of these; it is a thin wrapper that remembers the step
/// length so callers do not pass it on every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerIntegrator {
    field: GravityField,
    timestep: Duration,
}

impl EulerIntegrator {
    /// Create an integrator with the given field and step length
    ///
    /// # Panics
    ///
    /// Panics if timestep is zero
    pub fn new(field: GravityField, timestep: Duration) -> Self {
        assert!(!timestep.is_zero(), "Timestep must be positive");
        EulerIntegrator { field, timestep }
    }

    /// Get the name of this integrator
    pub fn name(&self) -> &str {
        "Semi-implicit Euler"
    }

    /// Step length
    pub fn timestep(&self) -> Duration {
        self.timestep
    }

    /// Gravity field used for force evaluation
    pub fn field(&self) -> &GravityField {
        &self.field
    }

    /// Set the step length
    ///
    /// # Panics
    ///
    /// Panics if timestep is zero
    pub fn set_timestep(&mut self, timestep: Duration) {
        assert!(!timestep.is_zero(), "Timestep must be positive");
        self.timestep = timestep;
    }

    /// Advance `system` by one step
    pub fn step(&self, system: &System) -> System {
        update_system(system, &self.field, self.timestep)
    }
}
