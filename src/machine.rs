//! The state machine itself: the uninitialized/initialized split, dispatch,
//! and the transition choreography that ties ancestry discovery, exit/enter
//! ordering, and mid-transition preemption together (spec §4.2).
//!
//! The two-type split ([`Uninitialized`] / [`Machine`]) mirrors the
//! teacher's `UninitializedStateMachine<M>` / `InitializedStateMachine<M>`
//! pair: a machine that has not yet run its initial transition is a
//! different type than one that has, so a caller cannot accidentally
//! dispatch into a machine that was never entered.

use crate::ancestry::{paths, Paths};
use crate::event::Event;
use crate::history::{NoopRecorder, Recorder};
use crate::outcome::Outcome;
use crate::panic::fatal;
use crate::state::State;

/// A machine whose initial state has not yet been entered.
///
/// Produced with [`Uninitialized::new`] (or [`Uninitialized::with_recorder`]
/// for a non-default [`Recorder`]) and consumed by [`Uninitialized::init`].
pub struct Uninitialized<M, R = NoopRecorder, const N: usize = 3> {
    shared: M,
    recorder: R,
}

impl<M, R, const N: usize> Uninitialized<M, R, N>
where
    R: Recorder<M>,
{
    /// Pair `shared` data with an explicit recorder.
    pub fn with_recorder(shared: M, recorder: R) -> Self {
        Uninitialized { shared, recorder }
    }

    /// Run the initial transition (spec §4.2, `init` as a degenerate
    /// transition from no active state into `initial`) and produce a
    /// ready-to-dispatch [`Machine`].
    pub fn init(mut self, initial: State<M>) -> Machine<M, R, N> {
        #[cfg(feature = "log")]
        log::trace!("hfsm: init");
        let current = transition::<M, R, N>(&mut self.shared, &mut self.recorder, None, initial);
        Machine {
            shared: self.shared,
            current,
            recorder: self.recorder,
        }
    }
}

impl<M, const N: usize> Uninitialized<M, NoopRecorder, N> {
    /// Pair `shared` data with a [`NoopRecorder`].
    pub fn new(shared: M) -> Self {
        Uninitialized {
            shared,
            recorder: NoopRecorder,
        }
    }
}

/// An initialized, ready-to-dispatch hierarchical state machine.
///
/// `M` is the shared data every handler receives; `R` is the [`Recorder`]
/// observing handler invocations (spec §4.3); `N` bounds the deepest
/// ancestry chain the engine will ever walk (spec I1, `MAX_NESTED_STATES`).
pub struct Machine<M, R = NoopRecorder, const N: usize = 3> {
    shared: M,
    current: State<M>,
    recorder: R,
}

impl<M, R, const N: usize> Machine<M, R, N>
where
    R: Recorder<M>,
{
    /// The currently active (innermost) state.
    pub fn current(&self) -> State<M> {
        self.current
    }

    /// Shared borrow of the user data every handler operates on.
    pub fn shared(&self) -> &M {
        &self.shared
    }

    /// Mutable borrow of the user data.
    pub fn shared_mut(&mut self) -> &mut M {
        &mut self.shared
    }

    /// Shared borrow of the recorder.
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    /// Mutable borrow of the recorder.
    pub fn recorder_mut(&mut self) -> &mut R {
        &mut self.recorder
    }

    /// Dispatch `event` hierarchically (spec §4.2.1): the current state
    /// handles it first, and an unhandled event bubbles to successive
    /// ancestors until one handles it, one requests a transition, or the
    /// root itself leaves it unhandled.
    ///
    /// `self.current` is never written mid-walk; the ancestor currently
    /// being tried lives in a local, so a bubbled-but-unhandled event
    /// leaves the active state exactly as it was (spec I3) without any
    /// explicit save/restore.
    ///
    /// The walk is bounded by `N` hops, mirroring `Ancestry::push`'s own
    /// bound on a probed chain (spec I1): a handler that bubbles past
    /// `MAX_NESTED_STATES` ancestors, or returns `Unhandled` in a cycle,
    /// halts via [`fatal`](crate::panic::fatal) instead of looping forever
    /// (spec §7, "depth-bound exceeded").
    pub fn dispatch(&mut self, event: Event) {
        let mut probe = self.current;
        let mut hops = 0;
        loop {
            let outcome = probe.invoke(&mut self.shared, event);
            self.recorder.record(probe, event);
            #[cfg(feature = "log")]
            log::trace!("hfsm: dispatch {:?} -> {:?}", event, outcome);
            match outcome {
                Outcome::Handled => return,
                Outcome::Unhandled(Some(parent)) => {
                    hops += 1;
                    if hops >= N {
                        fatal("dispatch bubbled past MAX_NESTED_STATES ancestors");
                    }
                    probe = parent;
                }
                Outcome::Unhandled(None) => return,
                Outcome::Transition(target) => {
                    self.current = transition::<M, R, N>(
                        &mut self.shared,
                        &mut self.recorder,
                        Some(self.current),
                        target,
                    );
                    return;
                }
            }
        }
    }

    /// Dispatch `event` to the current state only, with no bubbling to
    /// ancestors (spec §4.2.1, flat dispatch). An unhandled event is simply
    /// dropped.
    pub fn flat_dispatch(&mut self, event: Event) {
        let outcome = self.current.invoke(&mut self.shared, event);
        self.recorder.record(self.current, event);
        #[cfg(feature = "log")]
        log::trace!("hfsm: flat_dispatch {:?} -> {:?}", event, outcome);
        if let Outcome::Transition(target) = outcome {
            self.current = transition::<M, R, N>(
                &mut self.shared,
                &mut self.recorder,
                Some(self.current),
                target,
            );
        }
    }
}

/// Run the exit/enter choreography from `source` (`None` for `init`) to
/// `target`, returning the state the machine comes to rest in.
///
/// A single pass computes the exit list, enter list, and least common
/// ancestor (spec §4.2.3), walks the exit list leaf-first and the enter
/// list root-first, and restarts the whole computation in place whenever an
/// `Exit` or `Enter` handler itself returns `Transition` (spec §4.2.4): an
/// exit-time preemption resumes exiting from the state after the one that
/// preempted (or from the least common ancestor if none remains), discarding
/// the original target entirely; an enter-time preemption resumes from the
/// state that was just entered. This loop is what lets `init` and ordinary
/// dispatch-triggered transitions share one implementation.
fn transition<M, R, const N: usize>(
    shared: &mut M,
    recorder: &mut R,
    mut source: Option<State<M>>,
    mut target: State<M>,
) -> State<M>
where
    R: Recorder<M>,
{
    loop {
        let Paths { exit, enter, lca } = paths::<M, N>(source, target, shared);

        let mut preempted = None;
        for i in 0..exit.len() {
            let state = exit.get(i);
            let outcome = state.invoke(shared, Event::EXIT);
            recorder.record(state, Event::EXIT);
            #[cfg(feature = "log")]
            log::trace!("hfsm: exit {:?}", state);
            if let Outcome::Transition(new_target) = outcome {
                let new_source = if i + 1 < exit.len() {
                    Some(exit.get(i + 1))
                } else {
                    lca
                };
                preempted = Some((new_source, new_target));
                break;
            }
        }
        if let Some((new_source, new_target)) = preempted {
            source = new_source;
            target = new_target;
            continue;
        }

        let mut preempted = None;
        for i in 0..enter.len() {
            let state = enter.get(i);
            let outcome = state.invoke(shared, Event::ENTER);
            recorder.record(state, Event::ENTER);
            #[cfg(feature = "log")]
            log::trace!("hfsm: enter {:?}", state);
            if let Outcome::Transition(new_target) = outcome {
                preempted = Some((Some(state), new_target));
                break;
            }
        }
        if let Some((new_source, new_target)) = preempted {
            source = new_source;
            target = new_target;
            continue;
        }

        return target;
    }
}
