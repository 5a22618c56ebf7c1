//! A three-state traffic light cycling Green -> Yellow -> Red -> Green.
//!
//! All three states are top-level (no shared superstate), so this is the
//! flat-dispatch end of the spectrum: every tick is handled directly by the
//! active state, with no bubbling and no nested entry/exit choreography
//! beyond the state itself.

use hfsm::{Event, Machine, Outcome, State, Uninitialized};

struct TrafficLight {
    cycles_completed: u32,
}

const TICK: Event = Event::new(3);

fn green(shared: &mut TrafficLight, event: Event) -> Outcome<TrafficLight> {
    match event {
        Event::ENTER => {
            println!("[cycle {}] green: go", shared.cycles_completed);
            Outcome::Handled
        }
        Event::EXIT => Outcome::Handled,
        TICK => Outcome::Transition(State::new(yellow)),
        _ => Outcome::Unhandled(None),
    }
}

fn yellow(shared: &mut TrafficLight, event: Event) -> Outcome<TrafficLight> {
    match event {
        Event::ENTER => {
            println!("[cycle {}] yellow: caution", shared.cycles_completed);
            Outcome::Handled
        }
        Event::EXIT => Outcome::Handled,
        TICK => Outcome::Transition(State::new(red)),
        _ => Outcome::Unhandled(None),
    }
}

fn red(shared: &mut TrafficLight, event: Event) -> Outcome<TrafficLight> {
    match event {
        Event::ENTER => {
            println!("[cycle {}] red: stop", shared.cycles_completed);
            Outcome::Handled
        }
        Event::EXIT => {
            shared.cycles_completed += 1;
            Outcome::Handled
        }
        TICK => Outcome::Transition(State::new(green)),
        _ => Outcome::Unhandled(None),
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut machine: Machine<TrafficLight> =
        Uninitialized::new(TrafficLight { cycles_completed: 0 }).init(State::new(green));

    for _ in 0..10 {
        machine.flat_dispatch(TICK);
    }

    println!("cycles completed: {}", machine.shared().cycles_completed);
}
