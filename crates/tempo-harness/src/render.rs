//! Rendu texte du rapport, ligne par ligne.
//!
//! Deux mises en page :
//! - [`Layout::Timings`]   : une ligne `"<nom>: <ms>ms"` par section, total en ms.
//! - [`Layout::Narrative`] : en-tête, notes puis `"<nom>: <ms>ms"` par section,
//!   total en secondes.
//!
//! Tout est écrit au fil de l’eau : la sortie est vidée (`flush`) après
//! chaque section.

use std::io::{self, Write};

use crate::report::{Measurement, Report};
use crate::section::Notes;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Durée par section, total `"Total execution time: <ms>ms"`.
    #[default]
    Timings,
    /// Notes puis durée par section, total `"Total time: <s>s"`.
    Narrative,
}

/// `"<name>: <ms>ms"`, arrondi à la milliseconde.
pub fn timing_line(name: &str, duration_ms: f64) -> String {
    format!("{name}: {duration_ms:.0}ms")
}

/// Ligne finale selon la mise en page.
pub fn total_line(layout: Layout, total_ms: f64) -> String {
    match layout {
        Layout::Timings => format!("Total execution time: {total_ms:.0}ms"),
        Layout::Narrative => format!("Total time: {:.3}s", total_ms / 1_000.0),
    }
}

/// Écrit les lignes d’un run sur la sortie.
pub(crate) struct Emitter<'w, W: Write> {
    out: &'w mut W,
    layout: Layout,
    started: usize,
}

impl<'w, W: Write> Emitter<'w, W> {
    pub(crate) fn new(out: &'w mut W, layout: Layout) -> Self {
        Self { out, layout, started: 0 }
    }

    pub(crate) fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{title}")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Avant le corps : séparateur éventuel puis en-tête.
    pub(crate) fn section_start(&mut self, header: Option<&str>) -> io::Result<()> {
        if self.layout == Layout::Timings && self.started > 0 {
            writeln!(self.out)?;
        }
        self.started += 1;
        if let Some(h) = header {
            writeln!(self.out, "{h}")?;
        }
        self.out.flush()
    }

    /// Après le corps : durée et notes. `Timings` met la durée en tête,
    /// `Narrative` la place après les notes puis saute une ligne.
    pub(crate) fn section_end(&mut self, m: &Measurement, notes: &Notes) -> io::Result<()> {
        let timing = timing_line(&m.name, m.duration_ms);
        if self.layout == Layout::Timings {
            writeln!(self.out, "{timing}")?;
        }
        for line in notes.lines() {
            writeln!(self.out, "{line}")?;
        }
        if self.layout == Layout::Narrative {
            writeln!(self.out, "{timing}")?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    pub(crate) fn summary(
        &mut self,
        report: &Report,
        closing: Option<&str>,
        footer: &[String],
    ) -> io::Result<()> {
        if self.layout == Layout::Timings {
            writeln!(self.out)?;
        }
        if let Some(c) = closing {
            writeln!(self.out, "{c}")?;
        }
        writeln!(self.out, "{}", total_line(self.layout, report.total_ms()))?;
        for line in footer {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}
