//! tempo-workloads : charges de travail et suites prêtes à l’emploi
//!
//! ## Modules
//! - `ops`    : boucles élémentaires (arithmétique, tableaux, maps, chaînes,
//!              appels, boucles imbriquées, crible, récursion, matrice).
//! - `suites` : les quatre suites (`comparison`, `comprehensive`, `stable`,
//!              `intensive`), chacune = un [`Harness`] + ses sections.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

use std::io::Write;

use log::debug;
use tempo_harness::{Clock, Harness, Report, Section};

pub mod ops;
pub mod suites;

pub use suites::{comparison, comprehensive, intensive, standard, stable, Scale};

/// Un harnais préconfiguré et ses sections.
#[derive(Debug)]
pub struct Suite {
    name: &'static str,
    harness: Harness,
    sections: Vec<Section<'static>>,
}

impl Suite {
    pub fn new(name: &'static str, harness: Harness, sections: Vec<Section<'static>>) -> Self {
        Self { name, harness, sections }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn harness(&self) -> &Harness {
        &self.harness
    }

    pub fn sections(&self) -> &[Section<'static>] {
        &self.sections
    }

    /// Lance la suite ; les lignes partent sur `out` au fil de l’eau.
    pub fn run<W: Write>(self, out: &mut W) -> tempo_harness::Result<Report> {
        debug!("suite `{}` : {} section(s)", self.name, self.sections.len());
        self.harness.run(self.sections, out)
    }

    /// Même chose avec une autre horloge (sorties déterministes en test).
    pub fn run_with_clock<C: Clock, W: Write>(
        self,
        clock: C,
        out: &mut W,
    ) -> tempo_harness::Result<Report> {
        debug!("suite `{}` : {} section(s)", self.name, self.sections.len());
        self.harness.with_clock(clock).run(self.sections, out)
    }
}
