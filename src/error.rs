// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::result;

use itertools::Itertools;
use thiserror::Error;

use crate::automaton::core::State;

/// The `AutomatonError` type.
///
/// Every construction or mutation failure is reported immediately. A run that
/// reaches an undefined transition is not an error, see `dfa::core::Outcome`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Invalid constructor arguments: no states, or an alphabet token that is
    /// not a single symbol.
    #[error("Invalid configuration: {0}.")]
    Configuration(String),
    /// A state index lies outside `[0, num_states)`.
    #[error("State {} is out of bounds: [0, {}].", .state, .num_states.saturating_sub(1))]
    OutOfRange {
        /// The offending state.
        state: State,
        /// The state count of the automaton.
        num_states: usize,
    },
    /// A transition symbol is not part of the declared alphabet.
    #[error("Symbol '{}' is not in the alphabet {{{}}}.", .symbol, .alphabet.iter().join(", "))]
    Alphabet {
        /// The offending symbol.
        symbol: char,
        /// The declared alphabet.
        alphabet: Vec<char>,
    },
    /// Minimization needs a transition for every reachable state and symbol.
    #[error("Missing transition ('{symbol}',{state}) on a reachable state.")]
    Incomplete {
        /// The reachable state lacking a transition.
        state: State,
        /// The symbol it has no transition for.
        symbol: char,
    },
}

/// Alias for result::Result<T,AutomatonError>.
pub type Result<T> = result::Result<T, AutomatonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AutomatonError::OutOfRange { state: 7, num_states: 3 };
        assert_eq!(err.to_string(), "State 7 is out of bounds: [0, 2].");
        let err = AutomatonError::Alphabet { symbol: 'c', alphabet: vec!['a', 'b'] };
        assert_eq!(err.to_string(), "Symbol 'c' is not in the alphabet {a, b}.");
        let err = AutomatonError::Incomplete { state: 1, symbol: 'a' };
        assert_eq!(err.to_string(), "Missing transition ('a',1) on a reachable state.");
    }
}
