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
//! Pairwise gravitational force between point masses
//!
//! Every mass pulls on every other mass with a force proportional to the
//! product of their masses and inversely proportional to the square of
//! their separation:
//!
//! **F = G * (m₁ * m₂) / r²**
//!
//! There is no softening. Coincident masses (r = 0) are skipped entirely,
//! which also covers the self-pair when a mass is compared against the
//! whole system. Masses that come very close receive very large kicks;
//! that is how the toy flings bodies off screen.

use crate::entity::Mass;
use crate::geometry::{angle, distance, AngleMode};

/// A 2D force vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force {
    /// X component
    pub fx: f64,
    /// Y component
    pub fy: f64,
}

impl Force {
    /// Create a new force vector
    pub fn new(fx: f64, fy: f64) -> Self {
        Force { fx, fy }
    }

    /// Create a zero force
    pub fn zero() -> Self {
        Force::new(0.0, 0.0)
    }

    /// Check if the force is valid (all components finite)
    pub fn is_valid(&self) -> bool {
        self.fx.is_finite() && self.fy.is_finite()
    }

    /// Add another force to this one
    pub fn add(&mut self, other: &Force) {
        self.fx += other.fx;
        self.fy += other.fy;
    }

    /// Get the magnitude of the force
    pub fn magnitude(&self) -> f64 {
        (self.fx * self.fx + self.fy * self.fy).sqrt()
    }
}

/// Inverse-square attraction with a fixed gravitational constant
///
/// # Example
///
/// ```
/// use gravity_toy::integration::gravity::GravityField;
/// use gravity_toy::{Mass, GRAVITATIONAL_CONSTANT};
///
/// let field = GravityField::new(GRAVITATIONAL_CONSTANT);
/// let a = Mass::new(0.0, 0.0);
/// let b = Mass::new(10.0, 0.0);
///
/// let f = field.pairwise_force(&a, &b).unwrap();
/// assert_eq!(f.fx, 10.0); // 1000 * 1 * 1 / 10²
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityField {
    g_constant: f64,
    angle_mode: AngleMode,
}

impl GravityField {
    /// Create a field with the given gravitational constant
    ///
    /// # Panics
    ///
    /// Panics if `g_constant` is negative or not finite.
    pub fn new(g_constant: f64) -> Self {
        assert!(
            g_constant >= 0.0 && g_constant.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        GravityField {
            g_constant,
            angle_mode: AngleMode::default(),
        }
    }

    /// Select how pair directions are resolved
    pub fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Gravitational constant
    pub fn g_constant(&self) -> f64 {
        self.g_constant
    }

    /// Direction mode in use
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Force exerted on `on` by `from`
    ///
    /// Returns None for coincident masses, which contribute nothing.
    pub fn pairwise_force(&self, on: &Mass, from: &Mass) -> Option<Force> {
        let radius = distance(on, from);
        if radius == 0.0 {
            return None;
        }

        let theta = angle(on, from, self.angle_mode);
        let magnitude = self.g_constant * on.mass() * from.mass() / (radius * radius);

        let force = match self.angle_mode {
            AngleMode::Quadrant => Force::new(magnitude * theta.cos(), magnitude * theta.sin()),
            // atan(dy) always lands in (-π/2, π/2), so cos is never negative
            // and the horizontal sign has to be restored by hand.
            AngleMode::Legacy => Force::new(
                sign(from.x - on.x) * magnitude * theta.cos(),
                magnitude * theta.sin(),
            ),
        };
        Some(force)
    }

    /// Sum of the forces every mass in `system` exerts on `on`
    pub fn net_force(&self, on: &Mass, system: &[Mass]) -> Force {
        let mut total = Force::zero();
        for other in system {
            if let Some(force) = self.pairwise_force(on, other) {
                total.add(&force);
            }
        }
        total
    }
}

/// Sign that maps zero to zero
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
