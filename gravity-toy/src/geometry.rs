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
//! Distance and direction between points on the plane
//!
//! Anything with an `x` and a `y` can take part: masses and bare click
//! coordinates alike implement [`Planar`].

use serde::{Deserialize, Serialize};

/// Something with a position on the plane
pub trait Planar {
    /// Horizontal coordinate
    fn x(&self) -> f64;
    /// Vertical coordinate
    fn y(&self) -> f64;
}

/// A bare point, typically a translated click position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point at `(x, y)`
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl Planar for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// How the direction from one mass to another is computed
///
/// # Variants
///
/// - `Quadrant`: `atan2(dy, dx)`, the true bearing in all four quadrants.
/// - `Legacy`: `atan(dy)`. The historical game passed both deltas to a
///   one-argument arctangent, which dropped `dx`. The resulting orbits are
///   visibly lopsided; this mode reproduces them exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleMode {
    /// Two-argument arctangent
    #[default]
    Quadrant,
    /// One-argument arctangent of the vertical delta only
    Legacy,
}

/// Euclidean distance between `a` and `b`
///
/// Zero for coincident points; callers dividing by it must check first.
pub fn distance(a: &impl Planar, b: &impl Planar) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Direction from `a` toward `b`, in radians
pub fn angle(a: &impl Planar, b: &impl Planar, mode: AngleMode) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    match mode {
        AngleMode::Quadrant => dy.atan2(dx),
        AngleMode::Legacy => dy.atan(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance(&b, &a), 5.0);
    }

    #[test]
    fn test_distance_coincident_is_zero() {
        let a = Point::new(7.5, -2.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_quadrant_angle_resolves_all_quadrants() {
        let origin = Point::new(0.0, 0.0);
        let eps = 1e-12;
        assert!((angle(&origin, &Point::new(1.0, 0.0), AngleMode::Quadrant)).abs() < eps);
        assert!((angle(&origin, &Point::new(0.0, 1.0), AngleMode::Quadrant) - FRAC_PI_2).abs() < eps);
        assert!((angle(&origin, &Point::new(-1.0, 0.0), AngleMode::Quadrant) - PI).abs() < eps);
        assert!((angle(&origin, &Point::new(-1.0, -1.0), AngleMode::Quadrant) + 3.0 * PI / 4.0).abs() < eps);
    }

    #[test]
    fn test_legacy_angle_ignores_horizontal_delta() {
        let origin = Point::new(0.0, 0.0);
        let right = angle(&origin, &Point::new(10.0, 1.0), AngleMode::Legacy);
        let left = angle(&origin, &Point::new(-10.0, 1.0), AngleMode::Legacy);
        assert_eq!(right, left);
        assert_eq!(right, 1.0_f64.atan());
    }

    #[test]
    fn test_default_mode_is_quadrant() {
        assert_eq!(AngleMode::default(), AngleMode::Quadrant);
    }
}
