//! Charges de travail élémentaires.
//!
//! Chaque fonction renvoie son résultat observable (pour les tests et les
//! notes) ; les bornes passent par `black_box` pour que l’optimiseur ne
//! puisse pas précalculer la boucle.

use std::collections::HashMap;
use std::hint::black_box;

/// `acc = ((acc + 2i - 1) / divisor) mod modulus`, en flottants.
///
/// Le modulo est euclidien : le résultat a le signe de `modulus`.
pub fn arithmetic(iterations: u32, divisor: f64, modulus: f64) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..black_box(iterations) {
        acc = acc + f64::from(i) * 2.0 - 1.0;
        acc /= divisor;
        acc = acc.rem_euclid(modulus);
    }
    acc
}

/// Remplit un vecteur (`i`, puis `2i` si `doubled`) et le somme.
/// Renvoie `(longueur, somme)`.
pub fn array_build_sum(n: u32, doubled: bool) -> (usize, i64) {
    let mut arr = Vec::new();
    for i in 0..black_box(n) {
        let i = i64::from(i);
        arr.push(i);
        if doubled {
            arr.push(i * 2);
        }
    }
    let mut sum = 0_i64;
    for v in &arr {
        sum += v;
    }
    (arr.len(), sum)
}

/// `"key_{i}" -> 2i`, puis somme des lectures clé par clé.
/// Renvoie `(entrées, somme)`.
pub fn map_fill_sum(n: u32) -> (usize, i64) {
    let mut map: HashMap<String, i64> = HashMap::new();
    for i in 0..black_box(n) {
        map.insert(format!("key_{i}"), i64::from(i) * 2);
    }
    let mut sum = 0_i64;
    for i in 0..n {
        sum += map[format!("key_{i}").as_str()];
    }
    (map.len(), sum)
}

/// `"key{i}" -> 10i` et `"data{i}" -> 20i`, puis comptage par itération.
pub fn map_fill_count(n: u32) -> usize {
    let mut map: HashMap<String, i64> = HashMap::new();
    for i in 0..black_box(n) {
        map.insert(format!("key{i}"), i64::from(i) * 10);
        map.insert(format!("data{i}"), i64::from(i) * 20);
    }
    let mut count = 0;
    for _ in map.keys() {
        count += 1;
    }
    count
}

/// Concatène `"test"` `n` fois ; renvoie la longueur.
pub fn string_repeat(n: u32) -> usize {
    let mut s = String::new();
    for _ in 0..black_box(n) {
        s += "test";
    }
    s.len()
}

/// Part de `"benchmark"`, ajoute `" test {i}"`, repart de `"reset"` dès que
/// la chaîne dépasse `reset_above` octets. Renvoie la longueur finale.
pub fn string_build(n: u32, reset_above: usize) -> usize {
    let mut text = String::from("benchmark");
    for i in 0..black_box(n) {
        text = text + &format!(" test {i}");
        if text.len() > reset_above {
            text = String::from("reset");
        }
    }
    text.len()
}

#[inline(never)]
fn add(a: i64, b: i64) -> i64 {
    a + b
}

#[inline(never)]
fn calculate(a: i64, b: i64) -> i64 {
    a * b + (a - b)
}

/// `acc = add(i, acc)` sur `n` appels.
pub fn call_chain(n: u32) -> i64 {
    let mut acc = 0;
    for i in 0..black_box(n) {
        acc = add(i64::from(i), acc);
    }
    acc
}

/// `acc += calculate(i, i + 1)` sur `n` appels.
pub fn call_sum(n: u32) -> i64 {
    let mut acc = 0;
    for i in 0..black_box(n) {
        let i = i64::from(i);
        acc += calculate(i, i + 1);
    }
    acc
}

/// Somme de `i * j` sur `side x side`.
pub fn nested_loops(side: u32) -> i64 {
    let side = black_box(side);
    let mut sum = 0_i64;
    for i in 0..side {
        for j in 0..side {
            sum += i64::from(i) * i64::from(j);
        }
    }
    sum
}

/// Crible d’Ératosthène : nombres premiers `<= limit`.
pub fn sieve(limit: usize) -> Vec<usize> {
    let limit = black_box(limit);
    let mut is_prime = vec![true; limit + 1];
    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            for j in (i * i..=limit).step_by(i) {
                is_prime[j] = false;
            }
        }
        i += 1;
    }
    (2..=limit).filter(|&n| is_prime[n]).collect()
}

/// Factorielle récursive.
pub fn factorial(n: u64) -> u64 {
    if n <= 1 {
        return 1;
    }
    n * factorial(n - 1)
}

/// Matrice `size x size` avec `m[i][j] = i + j`, puis somme.
pub fn matrix_sum(size: usize) -> i64 {
    let size = black_box(size);
    let mut matrix: Vec<Vec<i64>> = Vec::with_capacity(size);
    for i in 0..size {
        let mut row = Vec::with_capacity(size);
        for j in 0..size {
            row.push((i + j) as i64);
        }
        matrix.push(row);
    }
    let mut sum = 0;
    for row in &matrix {
        for v in row {
            sum += v;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_stays_in_modulus_range() {
        let r = arithmetic(10_000, 2.0, 1_000.0);
        assert!((0.0..1_000.0).contains(&r), "{r}");
        // 1re itération : (0 - 1) / 2 = -0.5, ramené dans [0, 1000)
        assert_eq!(arithmetic(1, 2.0, 1_000.0), 999.5);
        assert_eq!(arithmetic(0, 1.1, 10_000.0), 0.0);
    }

    #[test]
    fn array_and_map_results() {
        assert_eq!(array_build_sum(1_000, false), (1_000, 499_500));
        assert_eq!(array_build_sum(1_000, true), (2_000, 3 * 499_500));
        assert_eq!(map_fill_sum(500), (500, 249_500));
        assert_eq!(map_fill_count(500), 1_000);
    }

    #[test]
    fn strings() {
        assert_eq!(string_repeat(100), 400);
        assert_eq!(string_build(0, 10), "benchmark".len());
        // "benchmark test 0" = 16 > 10 -> reset
        assert_eq!(string_build(1, 10), "reset".len());
        assert!(string_build(200, 10_000) <= 10_000);
    }

    #[test]
    fn calls_and_loops() {
        assert_eq!(call_chain(5_000), 12_497_500);
        // sum(i^2 + i - 1) pour i < 3 : -1 + 1 + 5
        assert_eq!(call_sum(3), 5);
        assert_eq!(nested_loops(100), 4950 * 4950);
    }

    #[test]
    fn sieve_factorial_matrix() {
        let primes = sieve(1_000);
        assert_eq!(primes.len(), 168);
        assert_eq!(&primes[..5], &[2, 3, 5, 7, 11]);
        assert_eq!(primes.last(), Some(&997));
        assert!(sieve(1).is_empty());
        assert_eq!(factorial(10), 3_628_800);
        assert_eq!(factorial(0), 1);
        assert_eq!(matrix_sum(50), 122_500);
    }
}
