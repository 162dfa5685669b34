// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use itertools::Itertools;

use crate::error::{AutomatonError, Result};

/// Conversion of a constructor argument into the alphabet of an automaton.
///
/// A `&str` contributes each of its characters as a symbol. A collection of
/// `&str` is accepted as long as every token is exactly one character long.
/// Duplicated symbols are collapsed, keeping the order of first occurrence.
pub trait IntoAlphabet {
    /// Normalizes `self` into an ordered list of distinct symbols.
    ///
    /// # Errors
    ///
    /// Return an `AutomatonError::Configuration` if a token is not a single
    /// symbol.
    fn into_alphabet(self) -> Result<Vec<char>>;
}

fn single_symbol(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(AutomatonError::Configuration(format!(
            "alphabet token \"{}\" is not a single symbol",
            token
        ))),
    }
}

fn tokens<'a, I: IntoIterator<Item = &'a str>>(tokens: I) -> Result<Vec<char>> {
    tokens
        .into_iter()
        .map(single_symbol)
        .fold_ok(Vec::new(), |mut acc, symbol| {
            acc.push(symbol);
            acc
        })
        .map(|symbols| symbols.into_iter().unique().collect())
}

impl<'a> IntoAlphabet for &'a str {
    fn into_alphabet(self) -> Result<Vec<char>> {
        Ok(self.chars().unique().collect())
    }
}

impl IntoAlphabet for Vec<char> {
    fn into_alphabet(self) -> Result<Vec<char>> {
        Ok(self.into_iter().unique().collect())
    }
}

impl<'a> IntoAlphabet for &'a [char] {
    fn into_alphabet(self) -> Result<Vec<char>> {
        Ok(self.iter().copied().unique().collect())
    }
}

impl<const N: usize> IntoAlphabet for [char; N] {
    fn into_alphabet(self) -> Result<Vec<char>> {
        Ok(self.into_iter().unique().collect())
    }
}

impl<'a> IntoAlphabet for Vec<&'a str> {
    fn into_alphabet(self) -> Result<Vec<char>> {
        tokens(self)
    }
}

impl<'a, 'b> IntoAlphabet for &'b [&'a str] {
    fn into_alphabet(self) -> Result<Vec<char>> {
        tokens(self.iter().copied())
    }
}

impl<'a, const N: usize> IntoAlphabet for [&'a str; N] {
    fn into_alphabet(self) -> Result<Vec<char>> {
        tokens(self)
    }
}

/// The epsilon marker of a non-deterministic automaton: a transition taken
/// without consuming input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Epsilon;

/// Conversion of the `symbols` argument of `add_transition` into the labels
/// of the transitions to insert, one entry per label.
///
/// `L` is the label type of the automaton: `char` for a DFA, `Option<char>`
/// for an NFA where `None` stands for epsilon.
pub trait IntoLabels<L> {
    /// Fans `self` out into individual labels.
    fn into_labels(self) -> Vec<L>;
}

impl<L: From<char>> IntoLabels<L> for char {
    fn into_labels(self) -> Vec<L> {
        vec![L::from(self)]
    }
}

impl<'a, L: From<char>> IntoLabels<L> for &'a str {
    fn into_labels(self) -> Vec<L> {
        self.chars().map(L::from).collect()
    }
}

impl<L: From<char>> IntoLabels<L> for Vec<char> {
    fn into_labels(self) -> Vec<L> {
        self.into_iter().map(L::from).collect()
    }
}

impl<'a, L: From<char>> IntoLabels<L> for &'a [char] {
    fn into_labels(self) -> Vec<L> {
        self.iter().copied().map(L::from).collect()
    }
}

impl<L: From<char>, const N: usize> IntoLabels<L> for [char; N] {
    fn into_labels(self) -> Vec<L> {
        self.into_iter().map(L::from).collect()
    }
}

impl IntoLabels<Option<char>> for Epsilon {
    fn into_labels(self) -> Vec<Option<char>> {
        vec![None]
    }
}

impl IntoLabels<Option<char>> for Option<char> {
    fn into_labels(self) -> Vec<Option<char>> {
        vec![self]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_from_str() {
        assert_eq!("01".into_alphabet().unwrap(), vec!['0', '1']);
        assert_eq!("abba".into_alphabet().unwrap(), vec!['a', 'b']);
        assert_eq!("".into_alphabet().unwrap(), Vec::<char>::new());
    }

    #[test]
    fn test_alphabet_from_tokens() {
        assert_eq!(vec!["a", "b", "a"].into_alphabet().unwrap(), vec!['a', 'b']);
        assert_eq!(["x", "y"].into_alphabet().unwrap(), vec!['x', 'y']);
        assert_eq!(['c', 'b', 'c'].into_alphabet().unwrap(), vec!['c', 'b']);
    }

    #[test]
    fn test_alphabet_malformed_token() {
        match vec!["a", "bc"].into_alphabet() {
            Err(AutomatonError::Configuration(_)) => assert!(true),
            _ => assert!(false, "Configuration expected."),
        }
        match [""].into_alphabet() {
            Err(AutomatonError::Configuration(_)) => assert!(true),
            _ => assert!(false, "Configuration expected."),
        }
    }

    #[test]
    fn test_labels_fan_out() {
        let labels: Vec<char> = "01".into_labels();
        assert_eq!(labels, vec!['0', '1']);
        let labels: Vec<Option<char>> = 'a'.into_labels();
        assert_eq!(labels, vec![Some('a')]);
        let labels: Vec<Option<char>> = Epsilon.into_labels();
        assert_eq!(labels, vec![None]);
        let labels: Vec<Option<char>> = None::<char>.into_labels();
        assert_eq!(labels, vec![None]);
    }
}
