//! Fixed-capacity ancestry chains and the least-common-ancestor computation
//! that drives transition choreography (spec §4.2.3).
//!
//! The teacher crate computes an equivalent `(exit_levels, enter_levels)`
//! pair statically, by walking a compile-time-derived `superstate()` chain
//! (`blocking::StateExt::transition_path`). This engine's states carry no
//! static hierarchy at all — the ancestry of a state is only ever known by
//! probing it at runtime (spec §4.2.2) — so the same idea is expressed here
//! as a scratch buffer built by repeated probing and bounded by the
//! `MAX_NESTED_STATES` const generic (spec §9's "depth bound... expressed
//! as a generic/const parameter").

use crate::panic::fatal;
use crate::state::State;

/// The ancestry chain of a state, inclusive, ordered from the state itself
/// up to (and including) the root. Bounded by `N` (spec invariant I1).
pub(crate) struct Ancestry<M, const N: usize> {
    chain: [Option<State<M>>; N],
    len: usize,
}

impl<M, const N: usize> Ancestry<M, N> {
    fn empty() -> Self {
        Ancestry {
            chain: [None; N],
            len: 0,
        }
    }

    fn push(&mut self, state: State<M>) {
        if self.len >= N {
            fatal("ancestry chain exceeds MAX_NESTED_STATES");
        }
        self.chain[self.len] = Some(state);
        self.len += 1;
    }

    /// Probe `origin` and its ancestors until the root, collecting the
    /// chain `[origin, parent(origin), ..., root]`.
    pub(crate) fn of(origin: State<M>, shared: &mut M) -> Self {
        let mut ancestry = Self::empty();
        ancestry.push(origin);
        let mut current = origin;
        while let Some(parent) = current.parent(shared) {
            ancestry.push(parent);
            current = parent;
        }
        ancestry
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn get(&self, index: usize) -> State<M> {
        self.chain[index].expect("ancestry entries below len are always populated")
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = State<M>> + '_ {
        self.chain[..self.len].iter().map(|s| s.expect("populated"))
    }

    /// Index of `needle` in this chain, if present.
    pub(crate) fn position(&self, needle: State<M>) -> Option<usize> {
        self.iter().position(|s| s == needle)
    }
}

/// The exit and enter sequences (in the order handlers must be invoked) for
/// a transition from `source` to `target`, plus the least common ancestor
/// (`None` if the two states share no ancestor at all, i.e. the LCA is the
/// implicit, never-instantiated super-root).
pub(crate) struct Paths<M, const N: usize> {
    pub(crate) exit: Ancestry<M, N>,
    pub(crate) enter: Ancestry<M, N>,
    pub(crate) lca: Option<State<M>>,
}

/// Compute the exit/enter choreography from an optional active `source`
/// (`None` meaning nothing is currently active — used for `init` and for
/// the aftermath of an exit-time preemption that vacated everything, spec
/// §4.2.4 / scenario 11) to `target`. Implements the four cases of spec
/// §4.2.3 literally.
pub(crate) fn paths<M, const N: usize>(
    source: Option<State<M>>,
    target: State<M>,
    shared: &mut M,
) -> Paths<M, N> {
    let Some(source) = source else {
        // Nothing active: the enter path is simply the target's full
        // ancestry, root-first.
        let anc_target = Ancestry::<M, N>::of(target, shared);
        let mut enter = Ancestry::empty();
        for i in (0..anc_target.len()).rev() {
            enter.push(anc_target.get(i));
        }
        return Paths { exit: Ancestry::empty(), enter, lca: None };
    };

    if source == target {
        // Case 1 (spec §4.2.3): self-transition. Exit and re-enter the
        // state itself; its parent (if any) is the LCA but is untouched.
        let mut exit = Ancestry::empty();
        exit.push(source);
        let mut enter = Ancestry::empty();
        enter.push(source);
        let lca = source.parent(shared);
        return Paths { exit, enter, lca };
    }

    let anc_source = Ancestry::<M, N>::of(source, shared);
    let anc_target = Ancestry::<M, N>::of(target, shared);

    if let Some(pos) = anc_source.position(target) {
        // Case 2: target is a (strict) ancestor of source. Exit from
        // source up to, but not including, target; target is already
        // active and is not re-entered.
        let mut exit = Ancestry::empty();
        for i in 0..pos {
            exit.push(anc_source.get(i));
        }
        return Paths { exit, enter: Ancestry::empty(), lca: Some(target) };
    }

    if let Some(pos) = anc_target.position(source) {
        // Case 3: source is a (strict) ancestor of target. Exit source
        // itself, then enter everything from source's child down to
        // target inclusive.
        let mut exit = Ancestry::empty();
        exit.push(source);
        let mut enter = Ancestry::empty();
        for i in (0..pos).rev() {
            enter.push(anc_target.get(i));
        }
        return Paths { exit, enter, lca: Some(source) };
    }

    // Case 4: general case. Scan source's ancestry leaf-first for the
    // first entry that also appears in target's ancestry; that is the
    // deepest shared ancestor. If none is shared at all, both chains are
    // exited/entered in full (the LCA is the implicit super-root).
    for i in 0..anc_source.len() {
        let candidate = anc_source.get(i);
        if let Some(j) = anc_target.position(candidate) {
            let mut exit = Ancestry::empty();
            for k in 0..i {
                exit.push(anc_source.get(k));
            }
            let mut enter = Ancestry::empty();
            for k in (0..j).rev() {
                enter.push(anc_target.get(k));
            }
            return Paths { exit, enter, lca: Some(candidate) };
        }
    }

    let mut exit = Ancestry::empty();
    for state in anc_source.iter() {
        exit.push(state);
    }
    let mut enter = Ancestry::empty();
    for i in (0..anc_target.len()).rev() {
        enter.push(anc_target.get(i));
    }
    Paths { exit, enter, lca: None }
}
