// Copyright 2016 Vincent Vigneron. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at.your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::process;

use automata::dfa::core::*;
use automata::error::Result;
use automata::nfa::core::*;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Finite automata playground
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Minimize a 6 state DFA over {0,1} with redundant states
    Minimize,
    /// Convert the NFA of (a|b)*abb into a DFA and run both on the inputs
    Determinize {
        /// Words to run
        #[clap(default_values = &["abb", "aabb", "ab", "abab", "ababb"])]
        inputs: Vec<String>,
    },
}

fn minimize() -> Result<()> {
    let dfa = DFA::new(6, "01", [2, 3, 4]).add_transitions(vec![
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
        (5, 5, "01"),
    ])?;
    println!("{}", dfa);
    let min = dfa.minimize()?;
    info!(before = dfa.num_states(), after = min.num_states(), "minimized");
    println!("{}", min);
    Ok(())
}

fn determinize(inputs: &[String]) -> Result<()> {
    let nfa = NFA::new(11, "ab", [10]).add_transitions(vec![
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
    ])?;
    println!("{}", nfa);
    let dfa = nfa.generate_dfa();
    info!(nfa = nfa.num_states(), dfa = dfa.num_states(), "determinized");
    println!("{}", dfa);
    for input in inputs {
        println!("{:?}: nfa {} dfa {:?}", input, nfa.run(input), dfa.run(input));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("automata=info")))
        .init();

    let args = Args::parse();
    let result = match args.command {
        Command::Minimize => minimize(),
        Command::Determinize { inputs } => determinize(&inputs),
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
