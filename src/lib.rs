//! A hierarchical finite state machine engine for embedded and systems use.
//!
//! States are opaque function-pointer handles ([`State`]); a state's parent
//! is never declared in a table but discovered at run time by probing the
//! handler itself with the reserved [`Event::NONE`] signal. Handlers report
//! back what happened through [`Outcome`] rather than mutating shared state
//! as a side effect, which is what lets [`Machine::dispatch`] walk the
//! ancestry chain on a bubbled event without any save/restore step.
//!
//! ```
//! use hfsm::{Event, Machine, Outcome, State, Uninitialized};
//!
//! #[derive(Default)]
//! struct Light {
//!     toggles: u32,
//! }
//!
//! const ON: Event = Event::new(3);
//!
//! fn off(shared: &mut Light, event: Event) -> Outcome<Light> {
//!     match event {
//!         ON => {
//!             shared.toggles += 1;
//!             Outcome::Transition(State::new(on))
//!         }
//!         Event::ENTER | Event::EXIT => Outcome::Handled,
//!         _ => Outcome::Unhandled(None),
//!     }
//! }
//!
//! fn on(shared: &mut Light, event: Event) -> Outcome<Light> {
//!     match event {
//!         ON => {
//!             shared.toggles += 1;
//!             Outcome::Transition(State::new(off))
//!         }
//!         Event::ENTER | Event::EXIT => Outcome::Handled,
//!         _ => Outcome::Unhandled(None),
//!     }
//! }
//!
//! let mut machine: Machine<Light> =
//!     Uninitialized::new(Light::default()).init(State::new(off));
//! machine.dispatch(ON);
//! assert_eq!(machine.shared().toggles, 1);
//! ```
#![no_std]
#![warn(missing_docs)]

mod ancestry;
mod event;
mod history;
mod machine;
mod outcome;
mod panic;
mod queue;
mod state;

pub use event::Event;
pub use history::{History, NoopRecorder, Recorder};
pub use machine::{Machine, Uninitialized};
pub use outcome::Outcome;
pub use queue::EventQueue;
pub use state::{HandlerFn, State};
