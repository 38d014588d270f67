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
//! Headless session demo
//!
//! Plays a short scripted game without a window: a few clicks, a pause,
//! and physics ticks until the target is lost or the tick budget runs out.
//! Time is driven by a manual clock so the run is instant and repeatable.
//!
//! Run with `RUST_LOG=debug cargo run --example headless` to see the
//! session log.

use gravity_toy::{Controller, Frame, ManualClock, SimulationConfig, TickOutcome};

fn print_frame(label: &str, frame: &Frame) {
    match frame {
        Frame::Idle => println!("[{label}] idle"),
        Frame::Paused { elapsed } => println!("[{label}] paused at {:.2}s", elapsed.as_secs_f64()),
        Frame::Finished { elapsed } => {
            println!("[{label}] finished, target held for {:.2}s", elapsed.as_secs_f64())
        }
        Frame::Scene { sprites, elapsed } => {
            println!("[{label}] {:.2}s, {} masses", elapsed.as_secs_f64(), sprites.len());
            for s in sprites {
                let marker = if s.is_target { "*" } else { " " };
                println!("    {marker} ({:8.2}, {:8.2}) r={:.0}", s.x, s.y, s.radius);
            }
        }
    }
}

fn main() {
    env_logger::init();

    println!("Gravity Toy - Headless Session");
    println!("==============================\n");

    let clock = ManualClock::new();
    let mut controller = Controller::with_clock(SimulationConfig::default(), clock.clone());
    print_frame("boot", &controller.frame());

    controller.start();
    print_frame("start", &controller.frame());

    // Two masses either side of the target, one of them grown twice
    for (x, y) in [(240.0, 150.0), (240.0, 150.0), (240.0, 150.0), (380.0, 120.0)] {
        controller.click(x, y);
    }
    print_frame("placed", &controller.frame());

    let interval = controller.tick_interval();
    let mut ticks = 0;
    while ticks < 400 {
        if ticks == 20 {
            controller.pause();
            print_frame("pause", &controller.frame());
            clock.advance(interval * 40);
            controller.start();
        }

        clock.advance(interval);
        ticks += 1;
        if controller.physics_tick() == Some(TickOutcome::Finished) {
            break;
        }
        if ticks % 50 == 0 {
            print_frame(&format!("tick {ticks}"), &controller.frame());
        }
    }

    print_frame("end", &controller.frame());
}
