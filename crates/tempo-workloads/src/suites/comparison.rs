use std::hint::black_box;

use tempo_harness::{Harness, Layout, Notes, Section};

use super::short_count;
use crate::ops;
use crate::Suite;

const ARITHMETIC: u32 = 10_000;
const ARRAY: u32 = 1_000;
const MAP: u32 = 500;
const CALLS: u32 = 5_000;
const STRINGS: u32 = 100;

/// Tour d’horizon rapide : chaque section affiche son résultat, total en secondes.
pub fn comparison() -> Suite {
    let harness = Harness::new(Layout::Narrative)
        .title("=== Tempo Performance Benchmarks ===")
        .closing("=== All benchmarks completed successfully ===");

    let sections = vec![
        Section::new(format!("Arithmetic ({} iterations)", short_count(ARITHMETIC.into())), || {
            let result = black_box(ops::arithmetic(ARITHMETIC, 2.0, 1_000.0));
            Notes::new()
                .field("Arithmetic test completed", format!("{ARITHMETIC} iterations"))
                .field("Result", result)
        })
        .with_header("1. Arithmetic Operations"),
        Section::new(format!("Array ({} elements)", short_count(ARRAY.into())), || {
            let (len, sum) = black_box(ops::array_build_sum(ARRAY, false));
            Notes::new()
                .field("Array creation completed", format!("{len} elements"))
                .field("Array sum", sum)
        })
        .with_header("2. Array Operations"),
        Section::new(format!("Map ({} entries)", short_count(MAP.into())), || {
            let (len, sum) = black_box(ops::map_fill_sum(MAP));
            Notes::new()
                .field("Map creation completed", format!("{len} entries"))
                .field("Map sum", sum)
        })
        .with_header("3. Map Operations"),
        Section::new(format!("Function calls ({})", short_count(CALLS.into())), || {
            let result = black_box(ops::call_chain(CALLS));
            Notes::new().field("Function calls completed", result)
        })
        .with_header("4. Function Call Overhead"),
        Section::new(format!("String ({} concatenations)", short_count(STRINGS.into())), || {
            let len = black_box(ops::string_repeat(STRINGS));
            Notes::new().field("String concatenation completed", format!("length {len}"))
        })
        .with_header("5. String Operations"),
    ];

    Suite::new("comparison", harness, sections)
}
