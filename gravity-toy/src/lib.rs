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
//! # Gravity Toy
//!
//! Physics and session core for an interactive 2D gravitational N-body toy.
//! The player drops point masses on a bounded plane; every mass pulls on
//! every other mass, and the game ends once the target mass drifts out of
//! the viewport.
//!
//! ## Features
//!
//! - **Entity Model**: [`Mass`] point particles collected in an ordered [`System`]
//! - **Force Integration**: pure semi-implicit Euler step under inverse-square gravity
//! - **Boundary Culling**: masses leaving the viewport margin drop out of play
//! - **Mutation Commands**: add, grow and remove masses by proximity to a point
//! - **Session State Machine**: running/paused/finished transitions and elapsed time
//! - **Parallelization**: optional Rayon integration for the per-mass update
//!
//! Rendering, raw input capture and the timing loop live outside this crate.
//! A host calls [`Controller::physics_tick`] at [`Controller::tick_interval`]
//! and reads [`Controller::frame`] once per rendered frame.
//!
//! ## Example
//!
//! ```rust
//! use gravity_toy::{Session, SimulationConfig};
//! use gravity_toy::commands::interact;
//!
//! let mut session = Session::new(SimulationConfig::default());
//! assert!(interact(&mut session, 310.0, 150.0)); // places a mass
//! assert!(interact(&mut session, 310.0, 150.0)); // grows it
//! assert_eq!(session.system().len(), 2);
//! assert_eq!(session.system().masses()[1].mass(), 2.0);
//!
//! session.tick();
//! assert!(session.system().masses()[1].vx < 0.0);
//! ```

#![warn(missing_docs)]

/// Point masses and mass systems
pub mod entity;

/// Distance and direction between points on the plane
pub mod geometry;

/// Gravitational force integration
pub mod integration;

/// Viewport culling
pub mod boundary;

/// Player mutation commands
pub mod commands;

/// Time sources for session bookkeeping
pub mod clock;

/// Session state machine
pub mod session;

/// Simulation configuration
pub mod config;

/// Owner of the current session, standing between input, timer and renderer
pub mod controller;

pub use boundary::{clean_system, Viewport};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, SimulationConfig};
pub use controller::{Controller, Frame, Sprite};
pub use entity::{Mass, System};
pub use geometry::AngleMode;
pub use integration::update_system;
pub use session::{Session, SessionState, TickOutcome};

/// Gravitational constant of the toy universe
///
/// Chosen so that unit masses a few dozen units apart visibly attract
/// within a handful of 50 ms ticks.
pub const GRAVITATIONAL_CONSTANT: f64 = 1000.0;

/// Mass of a freshly placed particle; masses only grow from here
pub const DEFAULT_MASS: f64 = 1.0;
