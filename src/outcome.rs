use core::fmt;

use crate::state::State;

/// What a state handler reports back to the engine.
///
/// This is the redesign called for in spec.md §9: rather than a handler
/// writing a parent or target into a shared `current_state` field as a side
/// effect (the source's `PARENT`/`TRANSITION` macros), the parent or target
/// travels inside the return value itself. This makes I4 (a handler's only
/// effect on the machine is a single `current_state` assignment) a property
/// of the type rather than a convention callers must uphold, and it removes
/// the need for the engine to distinguish an ancestry probe from a real
/// dispatch by any side channel: a probe is simply an invocation the engine
/// expects to answer with `Unhandled`.
pub enum Outcome<M> {
    /// The state consumed the event; no further action.
    Handled,
    /// The state did not consume the event. `None` means this state is the
    /// root (spec I2); `Some(parent)` is the state's parent, discovered
    /// read-only by the ancestry probe (spec §4.2.2) or reported directly by
    /// a dispatched handler falling through to its default arm.
    Unhandled(Option<State<M>>),
    /// The state requests a transition to the given target.
    Transition(State<M>),
}

impl<M> Clone for Outcome<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Outcome<M> {}

impl<M> PartialEq for Outcome<M> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Handled, Self::Handled) => true,
            (Self::Unhandled(a), Self::Unhandled(b)) => a == b,
            (Self::Transition(a), Self::Transition(b)) => a == b,
            _ => false,
        }
    }
}

impl<M> Eq for Outcome<M> {}

impl<M> fmt::Debug for Outcome<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled => f.debug_tuple("Handled").finish(),
            Self::Unhandled(parent) => f.debug_tuple("Unhandled").field(parent).finish(),
            Self::Transition(target) => f.debug_tuple("Transition").field(target).finish(),
        }
    }
}
