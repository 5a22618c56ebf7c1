//! Transition choreography scenarios (spec §8), translated from the
//! seven-state `A`/`A0`/`A1`/`B`/`B0`/`B1`/`C` topology and FIFO fixtures in
//! the original source's test suite, plus one topology of our own (`root`/
//! `mid`/`leaf`) exercising a case the original topology never covers: a
//! transition whose source is a strict ancestor of its target.

use hfsm::{Event, History, Machine, Outcome, State, Uninitialized};

struct Ctx;

const TRANSITION_TO_A: Event = Event::new(3);
const TRANSITION_TO_B: Event = Event::new(4);
const TRANSITION_TO_A0: Event = Event::new(5);
const TRANSITION_TO_A1: Event = Event::new(6);
const TRANSITION_TO_B0: Event = Event::new(7);
const TRANSITION_TO_B1: Event = Event::new(8);
const TICK: Event = Event::new(9);
const TRANSITION_TO_LEAF: Event = Event::new(10);

fn a(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT | TICK => Outcome::Handled,
        TRANSITION_TO_B => Outcome::Transition(State::new(b)),
        _ => Outcome::Unhandled(None),
    }
}

fn b(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT | TICK => Outcome::Handled,
        TRANSITION_TO_A0 => Outcome::Transition(State::new(a0)),
        _ => Outcome::Unhandled(None),
    }
}

fn a0(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        TRANSITION_TO_A => Outcome::Transition(State::new(a)),
        TRANSITION_TO_A1 => Outcome::Transition(State::new(a1)),
        TRANSITION_TO_B => Outcome::Transition(State::new(b)),
        TRANSITION_TO_B0 => Outcome::Transition(State::new(b0)),
        TRANSITION_TO_A0 => Outcome::Transition(State::new(a0)),
        TRANSITION_TO_B1 => Outcome::Transition(State::new(b1)),
        _ => Outcome::Unhandled(Some(State::new(a))),
    }
}

fn a1(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        TRANSITION_TO_A0 => Outcome::Transition(State::new(a0)),
        _ => Outcome::Unhandled(Some(State::new(a))),
    }
}

fn b0(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        TRANSITION_TO_A0 => Outcome::Transition(State::new(a0)),
        _ => Outcome::Unhandled(Some(State::new(b))),
    }
}

fn b1(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        // Entering B1 is immediately redirected to A1 — this is the
        // enter-time preemption case (spec §4.2.4, scenario 10).
        Event::ENTER => Outcome::Transition(State::new(a1)),
        Event::EXIT => Outcome::Handled,
        TRANSITION_TO_A0 => Outcome::Transition(State::new(a0)),
        _ => Outcome::Unhandled(Some(State::new(b))),
    }
}

fn c(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | TICK => Outcome::Handled,
        // Exiting C is redirected to A0 — the exit-time preemption case
        // (spec §4.2.4, scenario 11).
        Event::EXIT => Outcome::Transition(State::new(a0)),
        TRANSITION_TO_B => Outcome::Transition(State::new(b)),
        _ => Outcome::Unhandled(None),
    }
}

fn root(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        TRANSITION_TO_LEAF => Outcome::Transition(State::new(leaf)),
        _ => Outcome::Unhandled(None),
    }
}

fn mid(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        _ => Outcome::Unhandled(Some(State::new(root))),
    }
}

fn leaf(_: &mut Ctx, event: Event) -> Outcome<Ctx> {
    match event {
        Event::ENTER | Event::EXIT => Outcome::Handled,
        _ => Outcome::Unhandled(Some(State::new(mid))),
    }
}

type Recorder = History<Ctx, 32>;
type M = Machine<Ctx, Recorder, 3>;

fn entered(initial: State<Ctx>) -> M {
    Uninitialized::with_recorder(Ctx, History::new()).init(initial)
}

fn trace(machine: &M) -> std::vec::Vec<(State<Ctx>, Event)> {
    machine.recorder().iter().collect()
}

#[test]
fn init_enters_full_ancestry_root_first() {
    let machine = entered(State::new(a0));
    assert_eq!(
        trace(&machine),
        std::vec![(State::new(a), Event::ENTER), (State::new(a0), Event::ENTER)]
    );
    assert_eq!(machine.current(), State::new(a0));
}

#[test]
fn single_handled_event_stays_put() {
    let mut machine = entered(State::new(a));
    machine.recorder_mut().clear();

    machine.dispatch(TICK);
    assert_eq!(trace(&machine), std::vec![(State::new(a), TICK)]);
    assert_eq!(machine.current(), State::new(a));
}

#[test]
fn unhandled_event_bubbles_to_parent() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TICK);
    assert_eq!(
        trace(&machine),
        std::vec![(State::new(a0), TICK), (State::new(a), TICK)]
    );
    assert_eq!(machine.current(), State::new(a0));
}

#[test]
fn transition_between_siblings_sharing_a_parent() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_A1);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a0), TRANSITION_TO_A1),
            (State::new(a0), Event::EXIT),
            (State::new(a1), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(a1));
}

#[test]
fn transition_between_top_level_states() {
    let mut machine = entered(State::new(a));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_B);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a), TRANSITION_TO_B),
            (State::new(a), Event::EXIT),
            (State::new(b), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(b));
}

#[test]
fn transition_with_no_shared_ancestor() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_B0);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a0), TRANSITION_TO_B0),
            (State::new(a0), Event::EXIT),
            (State::new(a), Event::EXIT),
            (State::new(b), Event::ENTER),
            (State::new(b0), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(b0));
}

#[test]
fn transition_up_and_across() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_B);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a0), TRANSITION_TO_B),
            (State::new(a0), Event::EXIT),
            (State::new(a), Event::EXIT),
            (State::new(b), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(b));
}

#[test]
fn transition_across_and_down() {
    let mut machine = entered(State::new(b));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_A0);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(b), TRANSITION_TO_A0),
            (State::new(b), Event::EXIT),
            (State::new(a), Event::ENTER),
            (State::new(a0), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(a0));
}

#[test]
fn transition_out_into_an_already_active_ancestor() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_A);
    assert_eq!(
        trace(&machine),
        std::vec![(State::new(a0), TRANSITION_TO_A), (State::new(a0), Event::EXIT)]
    );
    assert_eq!(machine.current(), State::new(a));
}

#[test]
fn transition_into_itself() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_A0);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a0), TRANSITION_TO_A0),
            (State::new(a0), Event::EXIT),
            (State::new(a0), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(a0));
}

#[test]
fn enter_time_preemption_restarts_from_the_entered_state() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_B1);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(a0), TRANSITION_TO_B1),
            (State::new(a0), Event::EXIT),
            (State::new(a), Event::EXIT),
            (State::new(b), Event::ENTER),
            (State::new(b1), Event::ENTER),
            (State::new(b1), Event::EXIT),
            (State::new(b), Event::EXIT),
            (State::new(a), Event::ENTER),
            (State::new(a1), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(a1));
}

#[test]
fn exit_time_preemption_abandons_the_original_target() {
    let mut machine = entered(State::new(c));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_B);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(c), TRANSITION_TO_B),
            (State::new(c), Event::EXIT),
            (State::new(a), Event::ENTER),
            (State::new(a0), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(a0));
}

#[test]
fn transition_whose_source_is_an_ancestor_of_its_target() {
    let mut machine = entered(State::new(root));
    machine.recorder_mut().clear();

    machine.dispatch(TRANSITION_TO_LEAF);
    assert_eq!(
        trace(&machine),
        std::vec![
            (State::new(root), TRANSITION_TO_LEAF),
            (State::new(root), Event::EXIT),
            (State::new(mid), Event::ENTER),
            (State::new(leaf), Event::ENTER),
        ]
    );
    assert_eq!(machine.current(), State::new(leaf));
}

#[test]
fn flat_dispatch_never_bubbles() {
    let mut machine = entered(State::new(a0));
    machine.recorder_mut().clear();

    machine.flat_dispatch(TICK);
    assert_eq!(trace(&machine), std::vec![(State::new(a0), TICK)]);
    assert_eq!(machine.current(), State::new(a0));
}
