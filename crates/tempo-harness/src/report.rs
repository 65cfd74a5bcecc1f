//! Rapport d’exécution : mesures ordonnées + total.

use std::time::Duration;

/// Durée mesurée d’une section.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub elapsed: Duration,
    /// `elapsed` en millisecondes (toujours >= 0).
    pub duration_ms: f64,
}

impl Measurement {
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
            duration_ms: elapsed.as_nanos() as f64 / 1_000_000.0,
        }
    }
}

/// Mesures dans l’ordre d’exécution. Le total est accumulé à partir des
/// mêmes valeurs `duration_ms`, jamais re-mesuré.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    measurements: Vec<Measurement>,
    total_ms: f64,
}

impl Report {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { measurements: Vec::with_capacity(n), total_ms: 0.0 }
    }

    pub(crate) fn push(&mut self, m: Measurement) {
        self.total_ms += m.duration_ms;
        self.measurements.push(m);
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.measurements.iter().map(|m| m.name.as_str())
    }

    /// Première mesure portant ce nom (les noms ne sont pas forcément uniques).
    pub fn get(&self, name: &str) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.name == name)
    }

    /// Somme des `duration_ms`.
    pub fn total_ms(&self) -> f64 {
        self.total_ms
    }

    pub fn total(&self) -> Duration {
        self.measurements.iter().map(|m| m.elapsed).sum()
    }
}

impl<'r> IntoIterator for &'r Report {
    type Item = &'r Measurement;
    type IntoIter = std::slice::Iter<'r, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
