// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt; // Formatter, Display, Debug, write!
use std::marker::PhantomData;

use itertools::Itertools;

use crate::automaton::symbols::{IntoAlphabet, IntoLabels};
use crate::error::{AutomatonError, Result};

/// A state identifier in `[0, num_states)`.
pub type State = usize;

/// A set of states, ordered so that iteration and comparison are stable.
pub type StateSet = BTreeSet<State>;

/// `Shape` describes what a transition of an automaton looks like: how it is
/// labelled and where it leads.
///
/// There are exactly two shapes, `Deterministic` and `NonDeterministic`.
/// Operations common to both live on `Automaton<S>`, the others on
/// `Automaton<Deterministic>` (the `DFA`) or `Automaton<NonDeterministic>`
/// (the `NFA`).
pub trait Shape {
    /// The label of a transition.
    type Label: Copy + Ord + fmt::Debug;
    /// The destination of a transition.
    type Target: Clone + PartialEq + fmt::Debug;

    /// The input symbol consumed by a transition labelled `label`, `None` if
    /// it consumes nothing.
    fn symbol(label: Self::Label) -> Option<char>;

    /// Writes a label for `Display`.
    fn fmt_label(label: Self::Label, f: &mut fmt::Formatter) -> fmt::Result;

    /// Writes a destination for `Display`.
    fn fmt_target(target: &Self::Target, f: &mut fmt::Formatter) -> fmt::Result;
}

/// One destination per (state, symbol) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deterministic;

/// A set of destinations per (state, symbol) pair, plus epsilon transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonDeterministic;

impl Shape for Deterministic {
    type Label = char;
    type Target = State;

    fn symbol(label: char) -> Option<char> {
        Some(label)
    }

    fn fmt_label(label: char, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", label)
    }

    fn fmt_target(target: &State, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", target)
    }
}

impl Shape for NonDeterministic {
    type Label = Option<char>;
    type Target = StateSet;

    fn symbol(label: Option<char>) -> Option<char> {
        label
    }

    fn fmt_label(label: Option<char>, f: &mut fmt::Formatter) -> fmt::Result {
        match label {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "ε"),
        }
    }

    fn fmt_target(target: &StateSet, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", target.iter().join(", "))
    }
}

/// The type `Automaton` stores the structure shared by every finite automaton:
/// a fixed number of states, an alphabet, a transition relation and a set of
/// final states. The initial state is always `0`.
///
/// Transitions are stored in a two-level map, state then label. A missing
/// entry means there is no transition. Adding a transition for a pair that
/// already has one replaces its destination.
///
/// Execution never mutates an automaton: runs go through a cursor that owns
/// the current position.
#[derive(Debug, Clone, PartialEq)]
pub struct Automaton<S: Shape> {
    num_states: usize,
    alphabet: Vec<char>,
    transitions: BTreeMap<State, BTreeMap<S::Label, S::Target>>,
    final_states: StateSet,
    shape: PhantomData<S>,
}

impl<S: Shape> Automaton<S> {
    /// Creates an automaton with `num_states` states and no transition.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::Configuration` if `num_states` is zero or if
    /// the alphabet contains a token that is not a single symbol.
    ///
    /// Return an `AutomatonError::OutOfRange` if a final state is not a state
    /// of the automaton.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate automata;
    ///
    /// use automata::dfa::core::*;
    /// use automata::error::AutomatonError;
    ///
    /// fn main() {
    ///     let dfa = DFA::new(3, "ab", [2]).unwrap();
    ///     assert_eq!(dfa.num_states(), 3);
    ///     assert_eq!(dfa.alphabet(), &['a', 'b']);
    ///
    ///     match DFA::new(0, "ab", []) {
    ///         Err(AutomatonError::Configuration(_)) => assert!(true),
    ///         _ => assert!(false),
    ///     }
    /// }
    /// ```
    pub fn new<A, F>(num_states: usize, alphabet: A, final_states: F) -> Result<Automaton<S>>
    where
        A: IntoAlphabet,
        F: IntoIterator<Item = State>,
    {
        if num_states < 1 {
            return Err(AutomatonError::Configuration(
                "an automaton needs at least one state".to_owned(),
            ));
        }
        let mut automaton = Automaton::from_parts(num_states, alphabet.into_alphabet()?);
        automaton.add_final_states(final_states)?;
        Ok(automaton)
    }

    /// Builds an automaton whose arguments are already known to be valid.
    pub(crate) fn from_parts(num_states: usize, alphabet: Vec<char>) -> Automaton<S> {
        Automaton {
            num_states,
            alphabet,
            transitions: BTreeMap::new(),
            final_states: StateSet::new(),
            shape: PhantomData,
        }
    }

    /// Number of states.
    pub fn num_states(&self) -> usize {
        self.num_states
    }

    /// The input symbols, in declaration order. The epsilon marker is never
    /// part of it.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The final states.
    pub fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    /// Test if `state` is a final state.
    pub fn is_final(&self, state: State) -> bool {
        self.final_states.contains(&state)
    }

    /// Test if at least one state of `states` is final.
    pub fn any_final(&self, states: &StateSet) -> bool {
        !self.final_states.is_disjoint(states)
    }

    /// The destination of the transition from `state` labelled `label`, if
    /// there is one.
    pub fn transition(&self, state: State, label: S::Label) -> Option<&S::Target> {
        self.transitions.get(&state).and_then(|row| row.get(&label))
    }

    /// Iterates over the transitions as `(origin, label, destination)` in
    /// ascending order of origin then label.
    pub fn transitions(&self) -> impl Iterator<Item = (State, S::Label, &S::Target)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(&origin, row)| row.iter().map(move |(&label, target)| (origin, label, target)))
    }

    /// Number of transition entries.
    pub fn num_transitions(&self) -> usize {
        self.transitions.values().map(|row| row.len()).sum()
    }

    /// Add final states. A state already final stays final.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::OutOfRange` on the first state outside
    /// `[0, num_states)`. The states before it have been added.
    pub fn add_final_states<F: IntoIterator<Item = State>>(&mut self, states: F) -> Result<()> {
        for state in states {
            self.check_state(state)?;
            self.final_states.insert(state);
        }
        Ok(())
    }

    pub(crate) fn check_state(&self, state: State) -> Result<()> {
        if state < self.num_states {
            Ok(())
        } else {
            Err(AutomatonError::OutOfRange { state, num_states: self.num_states })
        }
    }

    pub(crate) fn check_label(&self, label: S::Label) -> Result<()> {
        match S::symbol(label) {
            Some(symbol) if !self.alphabet.contains(&symbol) => Err(AutomatonError::Alphabet {
                symbol,
                alphabet: self.alphabet.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// Validates then inserts one transition entry per label of `symbols`.
    ///
    /// The caller has already checked the states of `target`; every label is
    /// checked before the first entry is inserted.
    pub(crate) fn insert_checked<L>(&mut self, origin: State, target: S::Target, symbols: L) -> Result<()>
    where
        L: IntoLabels<S::Label>,
    {
        self.check_state(origin)?;
        let labels = symbols.into_labels();
        for &label in &labels {
            self.check_label(label)?;
        }
        for label in labels {
            self.insert(origin, label, target.clone());
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, origin: State, label: S::Label, target: S::Target) {
        self.transitions.entry(origin).or_insert_with(BTreeMap::new).insert(label, target);
    }

    pub(crate) fn mark_final(&mut self, state: State) {
        self.final_states.insert(state);
    }

    /// Appends `count` fresh states without transitions.
    pub(crate) fn grow(&mut self, count: usize) {
        self.num_states += count;
    }
}

impl<S: Shape> fmt::Display for Automaton<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "STATES: {}", self.num_states)?;
        writeln!(f, "ALPHABET: {}", self.alphabet.iter().join(" "))?;
        writeln!(f, "FINALS: {}", self.final_states.iter().join(" "))?;
        writeln!(f, "TRANSITIONS:")?;
        for (origin, label, target) in self.transitions() {
            write!(f, "  (")?;
            S::fmt_label(label, f)?;
            write!(f, ",{}) => ", origin)?;
            S::fmt_target(target, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
