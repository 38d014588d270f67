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
//! Viewport culling
//!
//! The only way a mass leaves play is by drifting past the viewport edge by
//! more than the margin. There is no merging or absorption.

use crate::entity::{Mass, System};

/// The visible plane plus the slack allowed around it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
    margin: f64,
}

impl Viewport {
    /// Create a viewport `width` by `height` with `margin` units of slack
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Viewport {
            width,
            height,
            margin,
        }
    }

    /// Viewport width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Allowed overshoot on every side
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Centre of the visible plane
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether `mass` is still in play
    ///
    /// Bounds are exclusive, and a non-finite position is never in play.
    pub fn contains(&self, mass: &Mass) -> bool {
        mass.x + self.margin > 0.0
            && mass.y + self.margin > 0.0
            && mass.x - self.margin < self.width
            && mass.y - self.margin < self.height
    }
}

/// Drop every mass that has left the viewport margin
///
/// Returns a new system; survivors keep their relative order.
pub fn clean_system(system: &System, viewport: &Viewport) -> System {
    system
        .iter()
        .filter(|m| viewport.contains(m))
        .copied()
        .collect()
}
