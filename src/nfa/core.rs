// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use tracing::trace;

use crate::automaton::core::{Automaton, NonDeterministic, State, StateSet};
use crate::automaton::symbols::IntoLabels;
use crate::error::Result;

/// The type `NFA` represents a NonDeterministic Finite Automaton with epsilon
/// transitions. A transition leads to a set of states; its label is either an
/// input symbol or `None`, the epsilon marker, which can never be confused
/// with a symbol of the alphabet.
///
/// # Examples
///
/// ```
/// extern crate automata;
///
/// use automata::automaton::symbols::Epsilon;
/// use automata::nfa::core::*;
///
/// fn main() {
///     // a*b, with an epsilon transition in between
///     let nfa = NFA::new(3, "ab", [2])
///         .add_transition(0, [0], 'a')
///         .add_transition(0, [1], Epsilon)
///         .add_transition(1, [2], 'b')
///         .unwrap();
///     assert!(nfa.run("b"));
///     assert!(nfa.run("aaab"));
///     assert!(!nfa.run("aba"));
/// }
/// ```
pub type NFA = Automaton<NonDeterministic>;

/// A `Cursor` is an execution session over an NFA: it owns the set of active
/// states, always closed under epsilon transitions.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    nfa: &'a NFA,
    active: StateSet,
}

impl<'a> Cursor<'a> {
    /// The active states.
    pub fn active(&self) -> &StateSet {
        &self.active
    }

    /// Moves the cursor back to the closure of the initial state.
    pub fn reset(&mut self) {
        self.active = self.nfa.initial();
    }

    /// Reads `input` from the active states and return the new active states.
    ///
    /// A symbol without transition from any active state empties the set; it
    /// stays empty from then on.
    pub fn step(&mut self, input: &str) -> &StateSet {
        for symbol in input.chars() {
            let moves = self.nfa.moves(&self.active, symbol);
            self.active = self.nfa.closure(&moves);
            trace!(%symbol, active = self.active.len(), "nfa step");
        }
        &self.active
    }

    /// Test if an active state is final.
    pub fn is_accepting(&self) -> bool {
        self.nfa.any_final(&self.active)
    }
}

impl Automaton<NonDeterministic> {
    /// Add a transition from `origin` to every state of `destinations` for each
    /// label of `symbols`: a single `char`, a collection of them, `Epsilon`, or
    /// an `Option<char>` where `None` is epsilon.
    ///
    /// Adding a transition for a pair that already has one replaces its
    /// destinations.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::OutOfRange` if `origin` or a destination is not
    /// a state of the automaton.
    ///
    /// Return an `AutomatonError::Alphabet` if a symbol is not in the alphabet.
    /// Nothing is added in that case.
    pub fn add_transition<D, L>(&mut self, origin: State, destinations: D, symbols: L) -> Result<()>
    where
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>,
    {
        let destinations: StateSet = destinations.into_iter().collect();
        for &state in &destinations {
            self.check_state(state)?;
        }
        self.insert_checked(origin, destinations, symbols)
    }

    /// Add each `(origin, destinations, symbols)` transition in order.
    ///
    /// # Errors
    ///
    /// Stops on the first failing transition, see `add_transition`. The
    /// transitions before it stay added.
    pub fn add_transitions<I, D, L>(&mut self, transitions: I) -> Result<()>
    where
        I: IntoIterator<Item = (State, D, L)>,
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>,
    {
        for (origin, destinations, symbols) in transitions {
            self.add_transition(origin, destinations, symbols)?;
        }
        Ok(())
    }

    /// Computes the epsilon-closure of `states`: the states reachable from
    /// them through zero or more epsilon transitions. Epsilon cycles are fine.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::OutOfRange` if a state is not a state of the
    /// automaton.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate automata;
    ///
    /// use automata::automaton::symbols::Epsilon;
    /// use automata::nfa::core::*;
    ///
    /// fn main() {
    ///     let nfa = NFA::new(4, "a", [])
    ///         .add_transition(0, [1], Epsilon)
    ///         .add_transition(1, [0, 2], Epsilon)
    ///         .add_transition(2, [3], 'a')
    ///         .unwrap();
    ///     let closure = nfa.null_closure([0]).unwrap();
    ///     assert_eq!(closure.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// }
    /// ```
    pub fn null_closure<I: IntoIterator<Item = State>>(&self, states: I) -> Result<StateSet> {
        let states: StateSet = states.into_iter().collect();
        for &state in &states {
            self.check_state(state)?;
        }
        Ok(self.closure(&states))
    }

    /// Epsilon-closure of states already known to be in range.
    pub(crate) fn closure(&self, states: &StateSet) -> StateSet {
        let mut reached = StateSet::new();
        for &state in states {
            self.expand(state, &mut reached);
        }
        reached
    }

    // `reached` is shared by the whole recursion: a state is expanded once.
    fn expand(&self, state: State, reached: &mut StateSet) {
        if !reached.insert(state) {
            return;
        }
        if let Some(targets) = self.transition(state, None) {
            for &target in targets {
                self.expand(target, reached);
            }
        }
    }

    /// The union of the destinations of `symbol` from every state of `states`.
    pub(crate) fn moves(&self, states: &StateSet, symbol: char) -> StateSet {
        states
            .iter()
            .filter_map(|&state| self.transition(state, Some(symbol)))
            .flatten()
            .copied()
            .collect()
    }

    pub(crate) fn initial(&self) -> StateSet {
        self.closure(&[0].iter().copied().collect())
    }

    /// Opens an execution session on the closure of the initial state.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor { nfa: self, active: self.initial() }
    }

    /// Test if an input string is a word of the language defined by the NFA.
    pub fn run(&self, input: &str) -> bool {
        let mut cursor = self.cursor();
        cursor.step(input);
        cursor.is_accepting()
    }
}

/// NFABuilding lets the mutations of an `NFA` be chained on the `Result`
/// returned by `NFA::new` instead of unwrapping them at each stage.
///
/// If self contains an `AutomatonError` then each function transfers it.
pub trait NFABuilding {
    /// Add final states to the NFA.
    fn add_final_states<F: IntoIterator<Item = State>>(self, states: F) -> Result<NFA>;

    /// Add a transition to the NFA, see `NFA::add_transition`.
    fn add_transition<D, L>(self, origin: State, destinations: D, symbols: L) -> Result<NFA>
    where
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>;

    /// Add transitions to the NFA, see `NFA::add_transitions`.
    fn add_transitions<I, D, L>(self, transitions: I) -> Result<NFA>
    where
        I: IntoIterator<Item = (State, D, L)>,
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>;
}

impl NFABuilding for Result<NFA> {
    fn add_final_states<F: IntoIterator<Item = State>>(self, states: F) -> Result<NFA> {
        self.and_then(|mut nfa| {
            nfa.add_final_states(states)?;
            Ok(nfa)
        })
    }

    fn add_transition<D, L>(self, origin: State, destinations: D, symbols: L) -> Result<NFA>
    where
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>,
    {
        self.and_then(|mut nfa| {
            nfa.add_transition(origin, destinations, symbols)?;
            Ok(nfa)
        })
    }

    fn add_transitions<I, D, L>(self, transitions: I) -> Result<NFA>
    where
        I: IntoIterator<Item = (State, D, L)>,
        D: IntoIterator<Item = State>,
        L: IntoLabels<Option<char>>,
    {
        self.and_then(|mut nfa| {
            nfa.add_transitions(transitions)?;
            Ok(nfa)
        })
    }
}
