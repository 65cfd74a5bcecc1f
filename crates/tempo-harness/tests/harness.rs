//! tests/harness.rs : propriétés du harnais vues de l’extérieur du crate.
//!
//! Lance en local avec :
//!   cargo test -p tempo-harness

use std::cell::Cell;
use std::hint::black_box;
use std::io;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tempo_harness::prelude::*;

// -----------------------------------------------------------------------------
// Helpers de test
// -----------------------------------------------------------------------------

fn pure_sections(names: &[String]) -> Vec<Section<'static>> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            let n = n.clone();
            Section::new(n, move || {
                black_box((0..=i as u64).sum::<u64>());
            })
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[test]
fn real_clock_durations_are_non_negative() {
    let names: Vec<String> = (0..5).map(|i| format!("s{i}")).collect();
    let report = Harness::new(Layout::Timings).run(pure_sections(&names), &mut io::sink()).unwrap();

    assert_eq!(report.len(), 5);
    assert!(report.iter().all(|m| m.duration_ms >= 0.0));
    assert_eq!(report.total_ms(), report.iter().map(|m| m.duration_ms).sum::<f64>());
}

#[test]
fn two_runs_agree_on_shape() {
    let names: Vec<String> = ["arith", "array", "map"].map(String::from).to_vec();
    let a = Harness::new(Layout::Timings).run(pure_sections(&names), &mut io::sink()).unwrap();
    let b = Harness::new(Layout::Timings).run(pure_sections(&names), &mut io::sink()).unwrap();

    assert_eq!(a.len(), b.len());
    assert_eq!(a.names().collect::<Vec<_>>(), b.names().collect::<Vec<_>>());
}

#[test]
fn each_body_runs_exactly_once() {
    let hits = Cell::new(0u32);
    let h = &hits;
    let sections = (0..4).map(move |i| Section::new(format!("s{i}"), move || h.set(h.get() + 1)));
    Harness::new(Layout::Timings).run(sections, &mut io::sink()).unwrap();
    assert_eq!(hits.get(), 4);
}

#[test]
fn timings_layout_full_output() {
    let h = Harness::new(Layout::Timings)
        .with_clock(StepClock::from_millis(7))
        .title("=== DEMO ===")
        .closing("=== BENCHMARK COMPLETE ===")
        .footer("Platform: test");
    let sections = vec![
        Section::new("Arithmetic (10k ops)", || {}).with_header("Test 1: Arithmetic operations..."),
        Section::new("Array (2k elements)", || {}).with_header("Test 2: Array operations..."),
    ];

    let mut out = Vec::new();
    let report = h.run(sections, &mut out).unwrap();
    assert_eq!(report.total_ms(), 14.0);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "=== DEMO ===\n\
         \n\
         Test 1: Arithmetic operations...\n\
         Arithmetic (10k ops): 7ms\n\
         \n\
         Test 2: Array operations...\n\
         Array (2k elements): 7ms\n\
         \n\
         === BENCHMARK COMPLETE ===\n\
         Total execution time: 14ms\n\
         Platform: test\n"
    );
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn panicking_body_is_not_caught() {
    let zero = black_box(0u32);
    let _ = Harness::new(Layout::Timings).run(
        vec![Section::new("div", move || {
            black_box(1 / zero);
        })],
        &mut io::sink(),
    );
}

proptest! {
    #[test]
    fn report_mirrors_sections(names in prop::collection::vec("[a-z]{1,8}", 1..16)) {
        let report = Harness::new(Layout::Timings).run(pure_sections(&names), &mut io::sink()).unwrap();

        prop_assert_eq!(report.len(), names.len());
        prop_assert_eq!(report.names().collect::<Vec<_>>(), names.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert_eq!(report.total_ms(), report.iter().map(|m| m.duration_ms).sum::<f64>());
    }

    #[test]
    fn step_clock_total_is_exact(n in 1usize..32, step in 0u64..50) {
        let names: Vec<String> = (0..n).map(|i| format!("s{i}")).collect();
        let h = Harness::new(Layout::Narrative).with_clock(StepClock::from_millis(step));
        let report = h.run(pure_sections(&names), &mut io::sink()).unwrap();

        prop_assert!(report.iter().all(|m| m.duration_ms == step as f64));
        prop_assert_eq!(report.total(), std::time::Duration::from_millis(step * n as u64));
    }
}
