// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixtures shared by the unit tests.

use itertools::Itertools;

use crate::nfa::core::{NFABuilding, NFA};

/// Every word over `alphabet` of length at most `max_len`, shortest first.
pub fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    (0..=max_len)
        .flat_map(|len| {
            itertools::repeat_n(alphabet.iter().copied(), len)
                .multi_cartesian_product()
                .map(|word| word.into_iter().collect::<String>())
                // `multi_cartesian_product` of nothing yields nothing
                .pad_using(usize::from(len == 0), |_| String::new())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// (a|b)*abb, by Thompson's construction.
pub fn ends_with_abb() -> NFA {
    NFA::new(11, "ab", [10])
        .add_transitions(vec![
            (0, vec![1, 7], None),
            (1, vec![2, 4], None),
            (2, vec![3], Some('a')),
            (3, vec![6], None),
            (4, vec![5], Some('b')),
            (5, vec![6], None),
            (6, vec![1, 7], None),
            (7, vec![8], Some('a')),
            (8, vec![9], Some('b')),
            (9, vec![10], Some('b')),
        ])
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let all = words(&['a', 'b'], 2);
        assert_eq!(all, vec!["", "a", "b", "aa", "ab", "ba", "bb"]);
        assert_eq!(words(&['a', 'b'], 8).len(), 511);
    }
}
