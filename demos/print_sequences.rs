//! Demonstration driver: prints a handful of composed sequences.
//!
//! Each line drains one finite sequence built from the combinator
//! vocabulary and prints its values separated by spaces.
//!
//! Run with: cargo run --example print_sequences

use std::fmt::Display;

use freshet::{accumulate, alternate, concat, count, cycle, filter, repeat, skip, take, Sequence};

fn print_sequence<T: Clone + Display>(label: &str, sequence: &Sequence<T>) {
    let rendered: Vec<String> = sequence.values().map(|value| value.to_string()).collect();
    println!("{label}: {}", rendered.join(" "));
}

fn main() {
    print_sequence("three zeros   ", &take(3, repeat(0)));
    print_sequence("skip then take", &take(5, skip(3, count(1, 2))));
    print_sequence("running sums  ", &take(5, accumulate(count(1, 2))));
    print_sequence("cycled prefix ", &take(8, cycle(take(3, count(1, 1)))));
    print_sequence("concatenation ", &concat(take(1, repeat(4)), take(1, repeat(2))));

    let mask = alternate(repeat(true), repeat(false));
    print_sequence("odd positions ", &take(5, filter(count(1, 1), mask)));
}
