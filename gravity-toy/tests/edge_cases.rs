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
//! Edge case tests for the physics core
//!
//! Tests boundary conditions, extreme values, and unusual scenarios

use gravity_toy::integration::gravity::GravityField;
use gravity_toy::integration::update_system;
use gravity_toy::{clean_system, Mass, System, Viewport, GRAVITATIONAL_CONSTANT};
use std::time::Duration;

const STEP: Duration = Duration::from_millis(50);

fn field() -> GravityField {
    GravityField::new(GRAVITATIONAL_CONSTANT)
}

fn viewport() -> Viewport {
    Viewport::new(600.0, 300.0, 20.0)
}

#[test]
fn test_empty_system() {
    let system = System::new();
    assert!(update_system(&system, &field(), STEP).is_empty());
    assert!(clean_system(&system, &viewport()).is_empty());
}

#[test]
fn test_single_mass_keeps_zero_acceleration() {
    let system = System::from(vec![Mass::target(300.0, 150.0)]);
    let mut next = system.clone();
    for _ in 0..10 {
        next = update_system(&next, &field(), STEP);
    }
    let m = next.masses()[0];
    assert_eq!((m.ax, m.ay), (0.0, 0.0));
    assert_eq!((m.x, m.y), (300.0, 150.0));
}

#[test]
fn test_coincident_pair_feels_only_third_mass() {
    let system = System::from(vec![
        Mass::new(100.0, 100.0),
        Mass::new(100.0, 100.0),
        Mass::new(110.0, 100.0),
    ]);
    let next = update_system(&system, &field(), STEP);
    let a = next.masses()[0];
    let b = next.masses()[1];
    assert!(a.is_valid() && b.is_valid());
    assert_eq!(a.ax, b.ax);
    assert!((a.ax - 10.0).abs() < 1e-12);
}

#[test]
fn test_near_coincident_masses_are_flung_apart() {
    let system = System::from(vec![Mass::new(300.0, 150.0), Mass::new(300.001, 150.0)]);
    let next = update_system(&system, &field(), STEP);
    // Enormous but finite kick, then both are out of play
    assert!(next.iter().all(Mass::is_valid));
    let after = update_system(&next, &field(), STEP);
    assert!(clean_system(&after, &viewport()).is_empty());
}

#[test]
fn test_no_velocity_clamping() {
    let system = System::from(vec![Mass::new(0.0, 0.0).with_velocity(1e12, -1e12)]);
    let next = update_system(&system, &field(), STEP);
    assert_eq!(next.masses()[0].vx, 1e12);
    assert_eq!(next.masses()[0].vy, -1e12);
}

#[test]
fn test_escaping_mass_is_culled() {
    let mut system = System::from(vec![Mass::new(590.0, 150.0).with_velocity(400.0, 0.0)]);
    for _ in 0..3 {
        system = update_system(&system, &field(), STEP);
    }
    assert!(system.masses()[0].x > 600.0 + 20.0);
    assert!(clean_system(&system, &viewport()).is_empty());
}

#[test]
fn test_clean_preserves_survivor_order_and_state() {
    let system = System::from(vec![
        Mass::new(50.0, 50.0).with_velocity(1.0, 2.0),
        Mass::new(-500.0, 50.0),
        Mass::target(300.0, 150.0),
        Mass::new(50.0, 5000.0),
        Mass::new(550.0, 250.0),
    ]);
    let cleaned = clean_system(&system, &viewport());
    let kept: Vec<(f64, f64)> = cleaned.iter().map(|m| (m.x, m.y)).collect();
    assert_eq!(kept, vec![(50.0, 50.0), (300.0, 150.0), (550.0, 250.0)]);
    assert_eq!(cleaned.masses()[0].vy, 2.0);
    assert!(cleaned.masses()[1].is_target());
}
