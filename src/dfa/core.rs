// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use tracing::trace;

use crate::automaton::core::{Automaton, Deterministic, State};
use crate::automaton::symbols::IntoLabels;
use crate::error::Result;

/// The type `DFA` represents a Deterministic Finite Automaton. Its transition
/// function may be partial: reading a symbol without transition stops the
/// run.
///
/// # Examples
///
/// ```
/// extern crate automata;
///
/// use automata::dfa::core::*;
///
/// fn main() {
///     // (abc)*
///     let dfa = DFA::new(3, "abc", [0])
///         .add_transition(0, 1, 'a')
///         .add_transition(1, 2, 'b')
///         .add_transition(2, 0, 'c')
///         .unwrap();
///     assert!(dfa.test("abcabc"));
///     assert_eq!(dfa.run("abca"), Outcome::Rejected);
///     assert_eq!(dfa.run("ac"), Outcome::Undefined { state: 1, symbol: 'c' });
/// }
/// ```
pub type DFA = Automaton<Deterministic>;

/// The `Outcome` of a DFA run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The whole input was read and the run ended on a final state.
    Accepted,
    /// The whole input was read and the run ended on a non-final state.
    Rejected,
    /// `symbol` has no transition from `state`, the run stopped there.
    Undefined {
        /// The state the run stopped on.
        state: State,
        /// The symbol without transition.
        symbol: char,
    },
}

impl Outcome {
    /// Test if the input has been accepted.
    pub fn is_accepted(&self) -> bool {
        *self == Outcome::Accepted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    At(State),
    Halted { state: State, symbol: char },
}

/// A `Cursor` is an execution session over a DFA. It owns the current state
/// so that several runs over the same automaton never interfere.
///
/// Once a symbol without transition has been read, the cursor is halted and
/// stays so until `reset`: later calls to `step` do not resume from the state
/// where it halted.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    dfa: &'a DFA,
    position: Position,
}

impl<'a> Cursor<'a> {
    /// The current state, `None` if the cursor is halted.
    pub fn state(&self) -> Option<State> {
        match self.position {
            Position::At(state) => Some(state),
            Position::Halted { .. } => None,
        }
    }

    /// Moves the cursor back to the initial state.
    pub fn reset(&mut self) {
        self.position = Position::At(0);
    }

    /// Reads `input` from the current state, the resumable counterpart of
    /// `DFA::step`.
    ///
    /// Return the state reached, or `None` if some symbol had no transition.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate automata;
    ///
    /// use automata::dfa::core::*;
    ///
    /// fn main() {
    ///     let dfa = DFA::new(2, "ab", [1])
    ///         .add_transitions(vec![(0, 1, "a"), (1, 0, "b")])
    ///         .unwrap();
    ///     let mut cursor = dfa.cursor();
    ///     assert_eq!(cursor.step("a"), Some(1));
    ///     assert_eq!(cursor.step("b"), Some(0));
    ///     assert_eq!(cursor.step("b"), None);
    ///     assert_eq!(cursor.step("a"), None);
    /// }
    /// ```
    pub fn step(&mut self, input: &str) -> Option<State> {
        for symbol in input.chars() {
            let state = match self.position {
                Position::At(state) => state,
                Position::Halted { .. } => break,
            };
            self.position = match self.dfa.next_state(state, symbol) {
                Some(next) => Position::At(next),
                None => {
                    trace!(state, %symbol, "no transition, halting");
                    Position::Halted { state, symbol }
                }
            };
        }
        self.state()
    }

    /// The outcome if the input read so far were the whole input.
    pub fn outcome(&self) -> Outcome {
        match self.position {
            Position::At(state) if self.dfa.is_final(state) => Outcome::Accepted,
            Position::At(_) => Outcome::Rejected,
            Position::Halted { state, symbol } => Outcome::Undefined { state, symbol },
        }
    }
}

impl Automaton<Deterministic> {
    /// Add a transition from `origin` to `destination` for each symbol of
    /// `symbols`, which is either a single `char` or a collection of them (a
    /// `&str` counts as the collection of its characters).
    ///
    /// A second transition for the same (state, symbol) pair replaces the first.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::OutOfRange` if `origin` or `destination` is not
    /// a state of the automaton.
    ///
    /// Return an `AutomatonError::Alphabet` if a symbol is not in the alphabet.
    /// Nothing is added in that case.
    pub fn add_transition<L>(&mut self, origin: State, destination: State, symbols: L) -> Result<()>
    where
        L: IntoLabels<char>,
    {
        self.check_state(destination)?;
        self.insert_checked(origin, destination, symbols)
    }

    /// Add each `(origin, destination, symbols)` transition in order.
    ///
    /// # Errors
    ///
    /// Stops on the first failing transition, see `add_transition`. The
    /// transitions before it stay added.
    pub fn add_transitions<I, L>(&mut self, transitions: I) -> Result<()>
    where
        I: IntoIterator<Item = (State, State, L)>,
        L: IntoLabels<char>,
    {
        for (origin, destination, symbols) in transitions {
            self.add_transition(origin, destination, symbols)?;
        }
        Ok(())
    }

    /// The state reached from `state` by reading `symbol`, if defined.
    pub fn next_state(&self, state: State, symbol: char) -> Option<State> {
        self.transition(state, symbol).copied()
    }

    /// Opens an execution session on the initial state.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor { dfa: self, position: Position::At(0) }
    }

    /// Reads `input` from the initial state.
    ///
    /// Return the state reached, or `None` if some symbol had no transition.
    pub fn step(&self, input: &str) -> Option<State> {
        self.cursor().step(input)
    }

    /// Runs the DFA on `input` from the initial state.
    pub fn run(&self, input: &str) -> Outcome {
        let mut cursor = self.cursor();
        cursor.step(input);
        cursor.outcome()
    }

    /// Test if an input string is a word of the language defined by the DFA.
    pub fn test(&self, input: &str) -> bool {
        self.run(input).is_accepted()
    }

    /// Test if every state has a transition for every symbol.
    pub fn is_complete(&self) -> bool {
        self.num_transitions() == self.num_states() * self.alphabet().len()
    }

    /// Return an equivalent DFA whose transition function is total.
    ///
    /// If some (state, symbol) pair has no transition, a non-final sink state
    /// numbered `num_states` is appended and every missing pair, the sink's
    /// own included, leads to it. A DFA that is already complete is returned
    /// unchanged.
    pub fn complete(&self) -> DFA {
        let mut dfa = self.clone();
        if self.is_complete() {
            return dfa;
        }
        let sink = self.num_states();
        dfa.grow(1);
        for state in 0..dfa.num_states() {
            for &symbol in self.alphabet() {
                if dfa.next_state(state, symbol).is_none() {
                    dfa.insert(state, symbol, sink);
                }
            }
        }
        dfa
    }
}

/// DFABuilding lets the mutations of a `DFA` be chained on the `Result`
/// returned by `DFA::new` instead of unwrapping them at each stage.
///
/// If self contains an `AutomatonError` then each function transfers it.
pub trait DFABuilding {
    /// Add final states to the DFA.
    fn add_final_states<F: IntoIterator<Item = State>>(self, states: F) -> Result<DFA>;

    /// Add a transition to the DFA, see `DFA::add_transition`.
    fn add_transition<L: IntoLabels<char>>(self, origin: State, destination: State, symbols: L) -> Result<DFA>;

    /// Add transitions to the DFA, see `DFA::add_transitions`.
    fn add_transitions<I, L>(self, transitions: I) -> Result<DFA>
    where
        I: IntoIterator<Item = (State, State, L)>,
        L: IntoLabels<char>;
}

impl DFABuilding for Result<DFA> {
    fn add_final_states<F: IntoIterator<Item = State>>(self, states: F) -> Result<DFA> {
        self.and_then(|mut dfa| {
            dfa.add_final_states(states)?;
            Ok(dfa)
        })
    }

    fn add_transition<L: IntoLabels<char>>(self, origin: State, destination: State, symbols: L) -> Result<DFA> {
        self.and_then(|mut dfa| {
            dfa.add_transition(origin, destination, symbols)?;
            Ok(dfa)
        })
    }

    fn add_transitions<I, L>(self, transitions: I) -> Result<DFA>
    where
        I: IntoIterator<Item = (State, State, L)>,
        L: IntoLabels<char>,
    {
        self.and_then(|mut dfa| {
            dfa.add_transitions(transitions)?;
            Ok(dfa)
        })
    }
}
