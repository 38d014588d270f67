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
//! Simulation configuration
//!
//! Everything here describes the playing field and the tick cadence. The
//! physical constants themselves ([`GRAVITATIONAL_CONSTANT`] and
//! [`DEFAULT_MASS`]) are fixed and deliberately absent.
//!
//! The struct is serde-enabled with per-field defaults, so a host may load
//! a partial document in any serde format and get the defaults for the rest.
//!
//! [`GRAVITATIONAL_CONSTANT`]: crate::GRAVITATIONAL_CONSTANT
//! [`DEFAULT_MASS`]: crate::DEFAULT_MASS

use crate::boundary::Viewport;
use crate::geometry::AngleMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Default viewport width
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 600.0;

/// Default viewport height
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 300.0;

/// Default distance a mass may stray past the viewport edge
pub const DEFAULT_MARGIN: f64 = 20.0;

/// Default on-screen radius per unit of mass
pub const DEFAULT_RADIUS_SIZE: f64 = 5.0;

/// Default physics tick interval in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Reasons a [`SimulationConfig`] is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Width or height is zero, negative or not finite
    #[error("viewport must have positive finite dimensions, got {width} x {height}")]
    InvalidViewport {
        /// Offending width
        width: f64,
        /// Offending height
        height: f64,
    },
    /// Margin is negative or not finite
    #[error("margin must be non-negative and finite, got {0}")]
    InvalidMargin(f64),
    /// Radius size is zero, negative or not finite
    #[error("radius size must be positive and finite, got {0}")]
    InvalidRadiusSize(f64),
    /// Tick interval is zero
    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,
}

/// Configuration for a simulation session
///
/// # Example
///
/// ```
/// use gravity_toy::{AngleMode, SimulationConfig};
///
/// let config = SimulationConfig::default()
///     .with_viewport(800.0, 600.0)
///     .with_angle_mode(AngleMode::Legacy);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.viewport().center(), (400.0, 300.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width of the visible plane
    pub viewport_width: f64,
    /// Height of the visible plane
    pub viewport_height: f64,
    /// How far past an edge a mass may go before it is culled
    pub margin: f64,
    /// On-screen radius per unit of mass, used for hit-testing
    pub radius_size: f64,
    /// Physics tick interval in milliseconds; also the integration step
    pub tick_interval_ms: u64,
    /// How pair directions are resolved by the force integrator
    pub angle_mode: AngleMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            margin: DEFAULT_MARGIN,
            radius_size: DEFAULT_RADIUS_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            angle_mode: AngleMode::default(),
        }
    }
}

impl SimulationConfig {
    /// Set the viewport dimensions
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set the culling margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the radius per unit of mass
    pub fn with_radius_size(mut self, radius_size: f64) -> Self {
        self.radius_size = radius_size;
        self
    }

    /// Set the physics tick interval
    pub fn with_tick_interval_ms(mut self, tick_interval_ms: u64) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    /// Set the direction mode
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Check every field, returning the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.viewport_width, self.viewport_height);
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        if !(self.margin >= 0.0 && self.margin.is_finite()) {
            return Err(ConfigError::InvalidMargin(self.margin));
        }
        if !(self.radius_size > 0.0 && self.radius_size.is_finite()) {
            return Err(ConfigError::InvalidRadiusSize(self.radius_size));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Culling bounds described by this configuration
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width, self.viewport_height, self.margin)
    }

    /// Tick interval as a duration
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
