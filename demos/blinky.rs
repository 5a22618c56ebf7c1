//! A blinking LED that can be paused and resumed by a button press.
//!
//! `Blinking` is a superstate shared by `LedOn` and `LedOff`: a button press
//! is handled identically regardless of which of the two is currently
//! active, so only `Blinking` needs to know about it. Unhandled events
//! bubble from the active LED state up to `Blinking` exactly the way any
//! other unhandled event would (spec §4.2.1).

use hfsm::{Event, Machine, Outcome, State, Uninitialized};

#[derive(Default)]
struct Blinky;

const TIMER_ELAPSED: Event = Event::new(3);
const BUTTON_PRESSED: Event = Event::new(4);

fn blinking(_blinky: &mut Blinky, event: Event) -> Outcome<Blinky> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        BUTTON_PRESSED => {
            println!("button pressed, pausing");
            Outcome::Transition(State::new(not_blinking))
        }
        _ => Outcome::Unhandled(None),
    }
}

fn led_on(_blinky: &mut Blinky, event: Event) -> Outcome<Blinky> {
    match event {
        Event::ENTER => {
            println!("led: on");
            Outcome::Handled
        }
        Event::EXIT => Outcome::Handled,
        TIMER_ELAPSED => Outcome::Transition(State::new(led_off)),
        _ => Outcome::Unhandled(Some(State::new(blinking))),
    }
}

fn led_off(_blinky: &mut Blinky, event: Event) -> Outcome<Blinky> {
    match event {
        Event::ENTER => {
            println!("led: off");
            Outcome::Handled
        }
        Event::EXIT => Outcome::Handled,
        TIMER_ELAPSED => Outcome::Transition(State::new(led_on)),
        _ => Outcome::Unhandled(Some(State::new(blinking))),
    }
}

fn not_blinking(_blinky: &mut Blinky, event: Event) -> Outcome<Blinky> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        BUTTON_PRESSED => {
            println!("button pressed, resuming");
            Outcome::Transition(State::new(led_on))
        }
        _ => Outcome::Unhandled(None),
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut machine: Machine<Blinky> =
        Uninitialized::new(Blinky::default()).init(State::new(led_on));

    for event in [
        TIMER_ELAPSED,
        TIMER_ELAPSED,
        BUTTON_PRESSED,
        TIMER_ELAPSED,
        BUTTON_PRESSED,
        TIMER_ELAPSED,
    ] {
        machine.dispatch(event);
    }
}
