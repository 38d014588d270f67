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
//! Point masses and the systems that hold them
//!
//! A [`Mass`] is a plain value: position, velocity, the acceleration from
//! the most recent integration step and a scalar mass. A [`System`] is the
//! ordered set of masses at one instant. Order carries no physical meaning,
//! it only fixes iteration order for hit-testing and pairwise sums.

use crate::boundary::Viewport;
use crate::geometry::Planar;
use crate::DEFAULT_MASS;

/// A simulated point particle
///
/// Position, velocity and acceleration are public so collaborators can read
/// and the integrator can rewrite them freely. The scalar mass and the target
/// flag are guarded: mass only ever grows by whole units through
/// [`Mass::grow`], and the target flag is fixed at construction.
///
/// # Examples
///
/// ```
/// use gravity_toy::Mass;
///
/// let mut m = Mass::new(10.0, 20.0);
/// assert_eq!(m.mass(), 1.0);
/// assert!(!m.is_target());
///
/// m.grow();
/// assert_eq!(m.mass(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Horizontal velocity (units per second)
    pub vx: f64,
    /// Vertical velocity (units per second)
    pub vy: f64,
    /// Horizontal acceleration from the last step
    pub ax: f64,
    /// Vertical acceleration from the last step
    pub ay: f64,
    m: f64,
    is_target: bool,
}

impl Mass {
    /// Create a mass at rest at `(x, y)` with the default mass
    pub fn new(x: f64, y: f64) -> Self {
        Mass {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            ax: 0.0,
            ay: 0.0,
            m: DEFAULT_MASS,
            is_target: false,
        }
    }

    /// Create the target mass at `(x, y)`
    pub fn target(x: f64, y: f64) -> Self {
        Mass {
            is_target: true,
            ..Mass::new(x, y)
        }
    }

    /// Builder-style initial velocity
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Scalar mass
    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Whether this is the mass the player must keep on screen
    pub fn is_target(&self) -> bool {
        self.is_target
    }

    /// Add exactly one unit of mass
    pub fn grow(&mut self) {
        self.m += 1.0;
    }

    /// On-screen radius, used both for hit-testing and drawing
    pub fn radius(&self, radius_size: f64) -> f64 {
        radius_size * self.m
    }

    /// Check if position, velocity and acceleration are all finite
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.vx.is_finite()
            && self.vy.is_finite()
            && self.ax.is_finite()
            && self.ay.is_finite()
    }
}

impl Planar for Mass {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// Ordered collection of masses at one instant
///
/// Integration never edits a `System` in place; it builds the next one.
/// Commands mutate the session's current system directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    masses: Vec<Mass>,
}

impl System {
    /// Create an empty system
    pub fn new() -> Self {
        System { masses: Vec::new() }
    }

    /// The starting system: a lone target at the centre of the viewport
    pub fn with_target(viewport: &Viewport) -> Self {
        let (cx, cy) = viewport.center();
        System {
            masses: vec![Mass::target(cx, cy)],
        }
    }

    /// Number of masses
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Whether the system holds no masses at all
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Masses in insertion order
    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    /// Iterate over masses in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Mass> {
        self.masses.iter()
    }

    /// Whether the target mass is still present
    pub fn has_target(&self) -> bool {
        self.masses.iter().any(Mass::is_target)
    }

    /// Append a mass at the end
    pub fn push(&mut self, mass: Mass) {
        self.masses.push(mass);
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Mass> {
        self.masses.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Mass {
        self.masses.remove(index)
    }
}

impl From<Vec<Mass>> for System {
    fn from(masses: Vec<Mass>) -> Self {
        System { masses }
    }
}

impl FromIterator<Mass> for System {
    fn from_iter<I: IntoIterator<Item = Mass>>(iter: I) -> Self {
        System {
            masses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a System {
    type Item = &'a Mass;
    type IntoIter = std::slice::Iter<'a, Mass>;

    fn into_iter(self) -> Self::IntoIter {
        self.masses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_creation() {
        let m = Mass::new(3.0, 4.0);
        assert_eq!(m.x, 3.0);
        assert_eq!(m.y, 4.0);
        assert_eq!(m.mass(), DEFAULT_MASS);
        assert_eq!((m.vx, m.vy, m.ax, m.ay), (0.0, 0.0, 0.0, 0.0));
        assert!(!m.is_target());
    }

    #[test]
    fn test_target_creation() {
        let t = Mass::target(1.0, 2.0);
        assert!(t.is_target());
        assert_eq!(t.mass(), DEFAULT_MASS);
    }

    #[test]
    fn test_grow_adds_one_unit() {
        let mut m = Mass::new(0.0, 0.0);
        m.grow();
        m.grow();
        assert_eq!(m.mass(), 3.0);
        assert_eq!(m.radius(5.0), 15.0);
    }

    #[test]
    fn test_default_system_centres_target() {
        let system = System::with_target(&Viewport::new(600.0, 300.0, 20.0));
        assert_eq!(system.len(), 1);
        let target = system.masses()[0];
        assert!(target.is_target());
        assert_eq!((target.x, target.y), (300.0, 150.0));
        assert!(system.has_target());
    }

    #[test]
    fn test_system_preserves_insertion_order() {
        let mut system = System::new();
        system.push(Mass::new(1.0, 0.0));
        system.push(Mass::new(2.0, 0.0));
        system.push(Mass::new(3.0, 0.0));
        let xs: Vec<f64> = system.iter().map(|m| m.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert!(!system.has_target());
    }

    #[test]
    fn test_invalid_state_detection() {
        let mut m = Mass::new(0.0, 0.0);
        assert!(m.is_valid());
        m.ax = f64::NAN;
        assert!(!m.is_valid());
    }
}
