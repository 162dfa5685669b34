// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(warnings, missing_docs)]

//! Finite-state automata: deterministic (DFA) and non-deterministic with
//! epsilon transitions (NFA), their execution, NFA to DFA conversion by
//! subset construction and DFA minimization.

/// automaton api shared by dfa and nfa
pub mod automaton;
/// dfa api
pub mod dfa;
/// errors
pub mod error;
/// nfa api
pub mod nfa;

#[cfg(test)]
mod testing;
