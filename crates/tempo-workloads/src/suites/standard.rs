//! Structure à six tests, paramétrée par une échelle.

use std::hint::black_box;

use tempo_harness::{Harness, Layout, Section};

use crate::ops;
use crate::Suite;

/// Tailles d’une exécution de la suite standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub name: &'static str,
    /// Itérations de la boucle arithmétique.
    pub arithmetic: u32,
    /// Tours de remplissage du tableau (deux éléments par tour).
    pub array: u32,
    /// Tours de remplissage de la map (deux entrées par tour).
    pub map: u32,
    pub strings: u32,
    /// Au-delà de cette longueur, la chaîne repart de `"reset"`.
    pub string_reset: usize,
    pub calls: u32,
    /// Côté du carré parcouru par les boucles imbriquées.
    pub nested_side: u32,
}

impl Scale {
    pub const COMPREHENSIVE: Self = Self {
        name: "comprehensive",
        arithmetic: 50_000,
        array: 5_000,
        map: 2_000,
        strings: 1_000,
        string_reset: 50_000,
        calls: 10_000,
        nested_side: 100,
    };

    pub const STABLE: Self = Self {
        name: "stable",
        arithmetic: 10_000,
        array: 1_000,
        map: 500,
        strings: 200,
        string_reset: 10_000,
        calls: 2_000,
        nested_side: 50,
    };
}

/// `50000 -> "50k"`, `2500 -> "2.5k"`, `1050 -> "1.05k"`, `200 -> "200"`.
///
/// Calcul entier : aucun chiffre significatif n’est perdu.
pub fn short_count(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let (k, rem) = (n / 1_000, n % 1_000);
    if rem == 0 {
        format!("{k}k")
    } else {
        let frac = format!("{rem:03}");
        format!("{k}.{}k", frac.trim_end_matches('0'))
    }
}

/// Suite standard à l’échelle donnée : durée par test, total en ms.
pub fn standard(scale: Scale) -> Suite {
    let harness = Harness::new(Layout::Timings)
        .title(format!("=== TEMPO {} BENCHMARK ===", scale.name.to_uppercase()))
        .closing("=== BENCHMARK COMPLETE ===")
        .footer("Platform: Rust (native)");

    let Scale { arithmetic, array, map, strings, string_reset, calls, nested_side, .. } = scale;
    let sections = vec![
        Section::new(format!("Arithmetic ({} ops)", short_count(arithmetic.into())), move || {
            black_box(ops::arithmetic(arithmetic, 1.1, 10_000.0));
        })
        .with_header("Test 1: Arithmetic operations..."),
        Section::new(format!("Array ({} elements)", short_count(2 * u64::from(array))), move || {
            black_box(ops::array_build_sum(array, true));
        })
        .with_header("Test 2: Array operations..."),
        Section::new(format!("Map ({} entries)", short_count(2 * u64::from(map))), move || {
            black_box(ops::map_fill_count(map));
        })
        .with_header("Test 3: Map operations..."),
        Section::new(format!("String ({} concatenations)", short_count(strings.into())), move || {
            black_box(ops::string_build(strings, string_reset));
        })
        .with_header("Test 4: String operations..."),
        Section::new(format!("Function calls ({})", short_count(calls.into())), move || {
            black_box(ops::call_sum(calls));
        })
        .with_header("Test 5: Function calls..."),
        Section::new(
            format!("Nested loops ({} iterations)", short_count(u64::from(nested_side).pow(2))),
            move || {
                black_box(ops::nested_loops(nested_side));
            },
        )
        .with_header("Test 6: Nested loops..."),
    ];

    Suite::new(scale.name, harness, sections)
}

pub fn comprehensive() -> Suite {
    standard(Scale::COMPREHENSIVE)
}

pub fn stable() -> Suite {
    standard(Scale::STABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_counts() {
        assert_eq!(short_count(200), "200");
        assert_eq!(short_count(1_000), "1k");
        assert_eq!(short_count(2_500), "2.5k");
        assert_eq!(short_count(50_000), "50k");
    }

    #[test]
    fn compact_counts_keep_every_digit() {
        assert_eq!(short_count(1_050), "1.05k");
        assert_eq!(short_count(1_001), "1.001k");
        assert_eq!(short_count(999_950), "999.95k");
        assert_eq!(short_count(12_340), "12.34k");
    }

    #[test]
    fn headers_number_the_six_tests() {
        let suite = stable();
        let headers = suite.sections().iter().filter_map(Section::header).collect::<Vec<_>>();
        assert_eq!(
            headers,
            [
                "Test 1: Arithmetic operations...",
                "Test 2: Array operations...",
                "Test 3: Map operations...",
                "Test 4: String operations...",
                "Test 5: Function calls...",
                "Test 6: Nested loops...",
            ]
        );
        assert_eq!(suite.harness().layout(), Layout::Timings);
    }

    #[test]
    fn section_names_follow_scale() {
        let names = |s: Scale| {
            standard(s).sections().iter().map(|x| x.name().to_owned()).collect::<Vec<_>>()
        };
        assert_eq!(
            names(Scale::COMPREHENSIVE),
            [
                "Arithmetic (50k ops)",
                "Array (10k elements)",
                "Map (4k entries)",
                "String (1k concatenations)",
                "Function calls (10k)",
                "Nested loops (10k iterations)",
            ]
        );
        assert_eq!(
            names(Scale::STABLE),
            [
                "Arithmetic (10k ops)",
                "Array (2k elements)",
                "Map (1k entries)",
                "String (200 concatenations)",
                "Function calls (2k)",
                "Nested loops (2.5k iterations)",
            ]
        );
    }
}
