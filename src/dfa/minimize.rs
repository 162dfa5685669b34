// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use itertools::Itertools;
use tracing::debug;

use crate::automaton::core::{Automaton, Deterministic, State};
use crate::dfa::core::DFA;
use crate::error::{AutomatonError, Result};

/// Symmetric relation over the reachable states, indexed by their position in
/// the reachability order.
struct Distinguishable {
    size: usize,
    marks: Vec<bool>,
}

impl Distinguishable {
    fn new(size: usize) -> Distinguishable {
        Distinguishable { size, marks: vec![false; size * size] }
    }

    fn get(&self, i: usize, j: usize) -> bool {
        self.marks[i * self.size + j]
    }

    fn mark(&mut self, i: usize, j: usize) {
        self.marks[i * self.size + j] = true;
        self.marks[j * self.size + i] = true;
    }
}

impl Automaton<Deterministic> {
    /// The states reachable from the initial state, in depth-first order,
    /// following the symbols in alphabet order.
    pub fn reachable_states(&self) -> Vec<State> {
        let mut visited = vec![false; self.num_states()];
        let mut order = Vec::new();
        let mut stack = vec![0];
        while let Some(state) = stack.pop() {
            if visited[state] {
                continue;
            }
            visited[state] = true;
            order.push(state);
            // Reversed so that the first symbol is explored first.
            for &symbol in self.alphabet().iter().rev() {
                if let Some(next) = self.next_state(state, symbol) {
                    if !visited[next] {
                        stack.push(next);
                    }
                }
            }
        }
        order
    }

    /// Return the DFA with the fewest states recognizing the same language,
    /// over the same alphabet.
    ///
    /// Unreachable states are dropped, then the reachable ones are merged
    /// into classes of indistinguishable states by table filling. Classes are
    /// numbered by their least member, a convention of this crate, so the
    /// class of the initial state is state `0` of the result.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::Incomplete` if a reachable state has no
    /// transition for some symbol. `complete` first to minimize such a DFA.
    ///
    /// # Examples
    ///
    /// ```
    /// extern crate automata;
    ///
    /// use automata::dfa::core::*;
    ///
    /// fn main() {
    ///     // words over {a} of even length, with a redundant state
    ///     let dfa = DFA::new(3, "a", [0, 2])
    ///         .add_transitions(vec![(0, 1, 'a'), (1, 2, 'a'), (2, 1, 'a')])
    ///         .unwrap();
    ///     let min = dfa.minimize().unwrap();
    ///     assert_eq!(min.num_states(), 2);
    ///     assert!(min.test("aa"));
    ///     assert!(!min.test("aaa"));
    /// }
    /// ```
    pub fn minimize(&self) -> Result<DFA> {
        let reachable = self.reachable_states();
        for &state in &reachable {
            for &symbol in self.alphabet() {
                if self.next_state(state, symbol).is_none() {
                    return Err(AutomatonError::Incomplete { state, symbol });
                }
            }
        }

        let mut position = vec![None; self.num_states()];
        for (i, &state) in reachable.iter().enumerate() {
            position[state] = Some(i);
        }
        // Totality on the reachable states keeps every destination reachable.
        let successor = |i: usize, symbol: char| -> usize {
            self.next_state(reachable[i], symbol)
                .and_then(|next| position[next])
                .unwrap_or(i)
        };

        let n = reachable.len();
        let mut table = Distinguishable::new(n);
        for (i, j) in (0..n).tuple_combinations() {
            if self.is_final(reachable[i]) != self.is_final(reachable[j]) {
                table.mark(i, j);
            }
        }

        let mut passes = 0;
        loop {
            passes += 1;
            let mut changed = false;
            for (i, j) in (0..n).tuple_combinations() {
                if table.get(i, j) {
                    continue;
                }
                if self.alphabet().iter().any(|&c| table.get(successor(i, c), successor(j, c))) {
                    table.mark(i, j);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Classes are enumerated by least member; the initial state is the
        // least of all, hence its class comes first.
        let by_state: Vec<usize> = (0..n).sorted_by_key(|&i| reachable[i]).collect();
        let mut class_of: Vec<Option<usize>> = vec![None; n];
        let mut representatives = Vec::new();
        for &i in &by_state {
            if class_of[i].is_some() {
                continue;
            }
            let class = representatives.len();
            representatives.push(i);
            for &j in &by_state {
                if class_of[j].is_none() && !table.get(i, j) {
                    class_of[j] = Some(class);
                }
            }
        }
        let class_of: Vec<usize> = class_of.into_iter().map(|class| class.unwrap_or(0)).collect();
        debug!(
            states = self.num_states(),
            reachable = n,
            classes = representatives.len(),
            passes,
            "minimized DFA"
        );

        let mut min = DFA::from_parts(representatives.len(), self.alphabet().to_vec());
        for (class, &i) in representatives.iter().enumerate() {
            for &symbol in self.alphabet() {
                min.insert(class, symbol, class_of[successor(i, symbol)]);
            }
        }
        for i in (0..n).filter(|&i| self.is_final(reachable[i])) {
            min.mark_final(class_of[i]);
        }
        Ok(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::core::DFABuilding;
    use crate::testing::words;

    // Scenario from the 0/1 example: {2,3,4} and {0,1} collapse.
    fn redundant() -> DFA {
        DFA::new(6, "01", [2, 3, 4])
            .add_transitions(vec![
                (0, 1, "0"),
                (0, 2, "1"),
                (1, 0, "0"),
                (1, 3, "1"),
                (2, 4, "0"),
                (2, 5, "1"),
                (3, 4, "0"),
                (3, 5, "1"),
                (4, 4, "0"),
                (4, 5, "1"),
                (5, 5, "0"),
                (5, 5, "1"),
            ])
            .unwrap()
    }

    #[test]
    fn test_minimize_collapses_classes() {
        let min = redundant().minimize().unwrap();
        assert_eq!(min.num_states(), 3);
        assert_eq!(min.alphabet(), &['0', '1']);
        assert_eq!(min.final_states().iter().copied().collect::<Vec<_>>(), vec![1]);
        let transitions: Vec<_> = min.transitions().map(|(o, l, d)| (o, l, *d)).collect();
        assert_eq!(
            transitions,
            vec![(0, '0', 0), (0, '1', 1), (1, '0', 1), (1, '1', 2), (2, '0', 2), (2, '1', 2)]
        );
    }

    #[test]
    fn test_minimize_preserves_language() {
        let dfa = redundant();
        let min = dfa.minimize().unwrap();
        for input in words(dfa.alphabet(), 7) {
            assert!(dfa.run(&input) == min.run(&input), "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_minimize_is_idempotent() {
        let min = redundant().minimize().unwrap();
        let again = min.minimize().unwrap();
        assert_eq!(again.num_states(), min.num_states());
        assert_eq!(again, min);
    }

    #[test]
    fn test_minimize_drops_unreachable_states() {
        // states 2 and 3 can not be reached from 0
        let dfa = DFA::new(4, "a", [1, 3])
            .add_transitions(vec![(0, 1, 'a'), (1, 0, 'a'), (2, 3, 'a'), (3, 1, 'a')])
            .unwrap();
        assert_eq!(dfa.reachable_states(), vec![0, 1]);
        let min = dfa.minimize().unwrap();
        assert_eq!(min.num_states(), 2);
        assert!(min.num_states() <= dfa.num_states());
        assert!(min.test("a"));
        assert!(!min.test("aa"));
    }

    #[test]
    fn test_minimize_single_class() {
        let dfa = DFA::new(3, "ab", [0, 1, 2])
            .add_transitions(vec![(0, 1, "ab"), (1, 2, "ab"), (2, 0, "ab")])
            .unwrap();
        let min = dfa.minimize().unwrap();
        assert_eq!(min.num_states(), 1);
        assert!(min.is_final(0));
        assert_eq!(min.next_state(0, 'a'), Some(0));
        assert_eq!(min.next_state(0, 'b'), Some(0));
    }

    #[test]
    fn test_minimize_partial_dfa() {
        let dfa = DFA::new(2, "ab", [1])
            .add_transition(0, 1, 'a')
            .add_transition(1, 1, "ab")
            .unwrap();
        match dfa.minimize() {
            Err(AutomatonError::Incomplete { state, symbol }) => assert!((state, symbol) == (0, 'b')),
            _ => assert!(false, "Incomplete expected."),
        }
        let min = dfa.complete().minimize().unwrap();
        assert_eq!(min.num_states(), 3);
        for input in words(dfa.alphabet(), 5) {
            assert!(dfa.test(&input) == min.test(&input), "input false for: \"{}\"", input);
        }
    }

    #[test]
    fn test_partial_on_unreachable_state_only() {
        // state 2 is partial but unreachable
        let dfa = DFA::new(3, "a", [1])
            .add_transitions(vec![(0, 1, 'a'), (1, 1, 'a')])
            .unwrap();
        let min = dfa.minimize().unwrap();
        assert_eq!(min.num_states(), 2);
    }
}
