//! Sources de temps.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Horloge monotone : `now()` ne recule jamais.
pub trait Clock {
    /// Temps écoulé depuis l’origine de l’horloge.
    fn now(&self) -> Duration;
}

/// Horloge réelle, adossée à `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Horloge déterministe : avance de `step` à chaque lecture.
///
/// Deux lectures encadrant un corps donnent donc toujours une durée de
/// `step` exactement, ce qui rend les sorties comparables octet pour octet.
#[derive(Debug, Clone)]
pub struct StepClock {
    current: Cell<Duration>,
    step: Duration,
}

impl StepClock {
    pub fn new(step: Duration) -> Self {
        Self { current: Cell::new(Duration::ZERO), step }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Clock for StepClock {
    fn now(&self) -> Duration {
        let t = self.current.get();
        self.current.set(t + self.step);
        t
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}
