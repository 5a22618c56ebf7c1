use core::fmt;

use crate::event::Event;
use crate::outcome::Outcome;
use crate::panic::fatal;

/// A handler function for one state.
///
/// Takes the shared user data and the event being delivered, and returns an
/// [`Outcome`] describing what happened. The engine never interprets the
/// body of a handler; it only ever calls it and reads back the result.
pub type HandlerFn<M> = fn(&mut M, Event) -> Outcome<M>;

/// An opaque handle to a state.
///
/// A thin newtype around a function pointer. The only operation the engine
/// (or a caller) is meant to perform on a `State` besides invoking it is an
/// identity comparison — two handles are equal exactly when they wrap the
/// same handler function. There is no declarative parent table anywhere:
/// the hierarchy is discovered at dispatch time by probing a handler and
/// reading back the parent it reports (spec §4.2.2, §3 "State hierarchy").
pub struct State<M>(
    /// The wrapped handler function.
    pub HandlerFn<M>,
);

impl<M> State<M> {
    /// Wrap a handler function as a state handle.
    pub const fn new(handler: HandlerFn<M>) -> Self {
        State(handler)
    }

    /// Invoke this state's handler with the given event.
    pub fn invoke(self, shared: &mut M, event: Event) -> Outcome<M> {
        (self.0)(shared, event)
    }

    /// Discover this state's parent by issuing a read-only ancestry probe.
    ///
    /// The probe uses the reserved [`Event::NONE`] signal. The discipline
    /// (spec §4.2.2) is that a state must answer the probe with
    /// `Unhandled`, carrying its parent (or `None` if this is the root,
    /// spec invariant I2); anything else is a handler that violates the
    /// probe contract and is a programmer error.
    pub(crate) fn parent(self, shared: &mut M) -> Option<State<M>> {
        match self.invoke(shared, Event::NONE) {
            Outcome::Unhandled(parent) => parent,
            _ => fatal("ancestry probe did not answer with Unhandled"),
        }
    }
}

impl<M> Clone for State<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for State<M> {}

impl<M> PartialEq for State<M> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<M> Eq for State<M> {}

impl<M> fmt::Debug for State<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State({:p})", self.0 as *const ())
    }
}
