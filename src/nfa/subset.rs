// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use indexmap::IndexSet;
use itertools::Itertools;
use tracing::debug;

use crate::automaton::core::{Automaton, NonDeterministic, State, StateSet};
use crate::dfa::core::DFA;

impl Automaton<NonDeterministic> {
    /// Converts the NFA into an equivalent DFA by subset construction.
    ///
    /// Each state of the DFA stands for an epsilon-closed set of NFA states.
    /// State `0` is the closure of the initial state; the other sets are
    /// numbered in the order they are discovered, exploring the sets in that
    /// same order and the symbols in alphabet order. The empty set, when it
    /// shows up, is a non-final sink. The resulting transition function is
    /// total and its alphabet never contains epsilon.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate automata;
    ///
    /// use automata::nfa::core::*;
    ///
    /// fn main() {
    ///     // words over {a,b} whose second to last symbol is an a
    ///     let nfa = NFA::new(3, "ab", [2])
    ///         .add_transition(0, [0, 1], 'a')
    ///         .add_transition(0, [0], 'b')
    ///         .add_transition(1, [2], "ab")
    ///         .unwrap();
    ///     let dfa = nfa.generate_dfa();
    ///     assert_eq!(dfa.num_states(), 4);
    ///     assert!(dfa.test("bab"));
    ///     assert!(!dfa.test("abb"));
    /// }
    /// ```
    pub fn generate_dfa(&self) -> DFA {
        let alphabet = self.alphabet().to_vec();
        let mut subsets: IndexSet<StateSet> = IndexSet::new();
        subsets.insert(self.initial());
        let mut transitions: Vec<(State, char, State)> = Vec::new();

        // `subsets` grows while it is walked.
        let mut current = 0;
        while current < subsets.len() {
            let subset = subsets[current].clone();
            for &symbol in &alphabet {
                let next = self.closure(&self.moves(&subset, symbol));
                let (index, _) = subsets.insert_full(next);
                transitions.push((current, symbol, index));
            }
            current += 1;
        }
        debug!(
            nfa_states = self.num_states(),
            dfa_states = subsets.len(),
            "generated DFA by subset construction"
        );

        let mut dfa = DFA::from_parts(subsets.len(), alphabet);
        for (origin, symbol, destination) in transitions {
            dfa.insert(origin, symbol, destination);
        }
        for state in subsets.iter().positions(|subset| self.any_final(subset)) {
            dfa.mark_final(state);
        }
        dfa
    }
}

#[cfg(test)]
mod tests {
    use crate::automaton::symbols::Epsilon;
    use crate::dfa::core::Outcome;
    use crate::nfa::core::{NFABuilding, NFA};
    use crate::testing::{ends_with_abb, words};

    #[test]
    fn test_generate_dfa_agrees_with_nfa() {
        let nfa = ends_with_abb();
        let dfa = nfa.generate_dfa();
        let samples =
            vec![("abb", true),
                 ("aabb", true),
                 ("ab", false),
                 ("abab", false),
                 ("ababb", true),];

        for (input, expected_result) in samples {
            assert!(nfa.run(input) == expected_result, "input false for: \"{}\"", input);
            assert!(dfa.test(input) == expected_result, "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_generate_dfa_preserves_language() {
        let nfa = ends_with_abb();
        let dfa = nfa.generate_dfa();
        for input in words(nfa.alphabet(), 8) {
            assert!(nfa.run(&input) == dfa.test(&input), "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_generate_dfa_structure() {
        let dfa = ends_with_abb().generate_dfa();
        assert_eq!(dfa.num_states(), 5);
        assert_eq!(dfa.alphabet(), &['a', 'b']);
        assert!(dfa.is_complete());
        assert_eq!(dfa.final_states().iter().copied().collect::<Vec<_>>(), vec![4]);
        let transitions: Vec<_> = dfa.transitions().map(|(o, l, d)| (o, l, *d)).collect();
        assert_eq!(
            transitions,
            vec![
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 1),
                (1, 'b', 3),
                (2, 'a', 1),
                (2, 'b', 2),
                (3, 'a', 1),
                (3, 'b', 4),
                (4, 'a', 1),
                (4, 'b', 2),
            ]
        );
    }

    #[test]
    fn test_generate_dfa_then_minimize() {
        let dfa = ends_with_abb().generate_dfa();
        let min = dfa.minimize().unwrap();
        assert_eq!(min.num_states(), 4);
        for input in words(dfa.alphabet(), 7) {
            assert!(dfa.test(&input) == min.test(&input), "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_generate_dfa_empty_subset_is_a_sink() {
        // only "a" is accepted
        let nfa = NFA::new(2, "ab", [1]).add_transition(0, [1], 'a').unwrap();
        let dfa = nfa.generate_dfa();
        assert_eq!(dfa.num_states(), 3);
        assert_eq!(dfa.next_state(0, 'b'), Some(2));
        assert_eq!(dfa.next_state(2, 'a'), Some(2));
        assert!(!dfa.is_final(2));
        assert_eq!(dfa.run("a"), Outcome::Accepted);
        assert_eq!(dfa.run("ab"), Outcome::Rejected);
    }

    #[test]
    fn test_generate_dfa_accepts_empty_word_through_epsilon() {
        let nfa = NFA::new(3, "a", [2])
            .add_transition(0, [1], Epsilon)
            .add_transition(1, [2], Epsilon)
            .add_transition(2, [0], Epsilon)
            .unwrap();
        let dfa = nfa.generate_dfa();
        assert!(nfa.run(""));
        assert!(dfa.test(""));
        assert!(!dfa.test("a"));
        assert!(dfa.is_final(0));
    }
}
