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
//! Player mutation commands
//!
//! Each command takes plane coordinates already translated by the input
//! layer and reports success as a boolean. Failure is never an error here:
//! clicking empty space or the target is an ordinary thing for a player to
//! do. The target can be neither grown nor destroyed.

use crate::clock::Clock;
use crate::entity::{Mass, System};
use crate::geometry::{distance, Point};
use crate::session::Session;

/// Index of the mass whose hit circle contains `(x, y)`
///
/// A mass is hit when the point lies within `radius_size * m` of its centre.
/// When circles overlap the closest centre wins; on an exact tie the mass
/// found first keeps it.
pub fn find_mass_by_coords(system: &System, x: f64, y: f64, radius_size: f64) -> Option<usize> {
    let point = Point::new(x, y);
    let mut found = None;
    let mut proximity = f64::INFINITY;

    for (index, mass) in system.iter().enumerate() {
        let d = distance(mass, &point);
        if d <= mass.radius(radius_size) && d < proximity {
            found = Some(index);
            proximity = d;
        }
    }
    found
}

/// Place a new default mass at `(x, y)`
///
/// The first mass the player places starts the session clock. Always
/// succeeds.
pub fn add_mass<C: Clock>(session: &mut Session<C>, x: f64, y: f64) -> bool {
    session.system_mut().push(Mass::new(x, y));
    log::debug!("Added mass at ({}, {}), {} in system", x, y, session.system().len());
    session.begin();
    true
}

/// Grow the non-target mass under `(x, y)` by one unit
pub fn enlarge_mass<C: Clock>(session: &mut Session<C>, x: f64, y: f64) -> bool {
    let radius_size = session.config().radius_size;
    let Some(index) = find_mass_by_coords(session.system(), x, y, radius_size) else {
        return false;
    };

    match session.system_mut().get_mut(index) {
        Some(mass) if !mass.is_target() => {
            mass.grow();
            log::debug!("Enlarged mass {} to {}", index, mass.mass());
            true
        }
        _ => false,
    }
}

/// Remove the non-target mass under `(x, y)`
///
/// Refused while the system holds two or fewer masses, so the target is
/// never left without something to interact with.
pub fn destroy_mass<C: Clock>(session: &mut Session<C>, x: f64, y: f64) -> bool {
    if session.system().len() <= 2 {
        return false;
    }

    let radius_size = session.config().radius_size;
    let Some(index) = find_mass_by_coords(session.system(), x, y, radius_size) else {
        return false;
    };
    if session.system().masses()[index].is_target() {
        return false;
    }

    session.system_mut().remove(index);
    log::debug!("Destroyed mass {}, {} left", index, session.system().len());
    true
}

/// Handle a click: grow the mass under the cursor, or place a new one
pub fn interact<C: Clock>(session: &mut Session<C>, x: f64, y: f64) -> bool {
    enlarge_mass(session, x, y) || add_mass(session, x, y)
}
