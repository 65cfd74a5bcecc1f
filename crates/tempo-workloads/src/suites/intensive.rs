use std::hint::black_box;

use tempo_harness::{Harness, Layout, Notes, Section};

use crate::ops;
use crate::Suite;

const SIEVE_LIMIT: usize = 1_000;
const FACTORIAL_OF: u64 = 10;
const MATRIX_SIZE: usize = 50;

/// Charges plus calculatoires : crible, factorielle récursive, matrice.
pub fn intensive() -> Suite {
    let harness = Harness::new(Layout::Narrative)
        .title("=== Tempo Intensive Benchmarks ===")
        .closing("=== Intensive benchmarks completed ===");

    let sections = vec![
        Section::new(format!("Sieve ({SIEVE_LIMIT})"), || {
            let primes = black_box(ops::sieve(SIEVE_LIMIT));
            Notes::new().line(format!("Found {} primes up to {SIEVE_LIMIT}", primes.len()))
        })
        .with_header("1. Prime Number Generation (Sieve of Eratosthenes)"),
        Section::new(format!("Factorial ({FACTORIAL_OF})"), || {
            let fact = black_box(ops::factorial(FACTORIAL_OF));
            Notes::new().field(&format!("Factorial of {FACTORIAL_OF}"), fact)
        })
        .with_header("2. Recursive Factorial Calculation"),
        Section::new(format!("Matrix ({MATRIX_SIZE}x{MATRIX_SIZE})"), || {
            let sum = black_box(ops::matrix_sum(MATRIX_SIZE));
            Notes::new().field(&format!("Matrix sum ({MATRIX_SIZE}x{MATRIX_SIZE})"), sum)
        })
        .with_header("3. Matrix Operations"),
    ];

    Suite::new("intensive", harness, sections)
}
