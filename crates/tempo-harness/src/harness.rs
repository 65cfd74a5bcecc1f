//! Boucle d’exécution : sections dans l’ordre, une mesure chacune.
//!
//! Pas de reprise, pas de timeout : un corps en erreur interrompt le run
//! (aucun rapport), un corps qui panique n’est pas rattrapé.

use std::io::{self, Write};

use log::{debug, info, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::render::{Emitter, Layout};
use crate::report::{Measurement, Report};
use crate::section::Section;
use crate::{Error, Result};

/// Harnais configurable : mise en page, bannières, horloge.
#[derive(Debug, Clone)]
pub struct Harness<C: Clock = MonotonicClock> {
    layout: Layout,
    title: Option<String>,
    closing: Option<String>,
    footer: Vec<String>,
    clock: C,
}

impl Harness {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            title: None,
            closing: None,
            footer: Vec::new(),
            clock: MonotonicClock::new(),
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl<C: Clock> Harness<C> {
    /// Remplace l’horloge (tests : `StepClock`).
    pub fn with_clock<D: Clock>(self, clock: D) -> Harness<D> {
        Harness {
            layout: self.layout,
            title: self.title,
            closing: self.closing,
            footer: self.footer,
            clock,
        }
    }

    /// Bannière écrite avant la première section.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Bannière écrite juste avant la ligne de total.
    #[must_use]
    pub fn closing(mut self, closing: impl Into<String>) -> Self {
        self.closing = Some(closing.into());
        self
    }

    /// Lignes écrites après le total.
    #[must_use]
    pub fn footer(mut self, line: impl Into<String>) -> Self {
        self.footer.push(line.into());
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Exécute `sections` dans l’ordre et écrit le rapport sur `out`.
    ///
    /// Refuse une liste vide ([`Error::NoSections`]) avant toute écriture.
    pub fn run<'a, W, I>(&self, sections: I, out: &mut W) -> Result<Report>
    where
        W: Write,
        I: IntoIterator<Item = Section<'a>>,
    {
        let sections: Vec<Section<'a>> = sections.into_iter().collect();
        if sections.is_empty() {
            return Err(Error::NoSections);
        }
        let count = sections.len();

        let mut emit = Emitter::new(out, self.layout);
        if let Some(title) = &self.title {
            emit.title(title)?;
        }

        let mut report = Report::with_capacity(count);
        for (idx, section) in sections.into_iter().enumerate() {
            let (name, header, body) = section.into_parts();
            emit.section_start(header.as_deref())?;

            debug!("[{}/{count}] `{name}` : départ", idx + 1);
            let start = self.clock.now();
            let outcome = body();
            let end = self.clock.now();

            let notes = match outcome {
                Ok(notes) => notes,
                Err(source) => {
                    warn!("[{}/{count}] `{name}` a échoué, run abandonné : {source}", idx + 1);
                    return Err(Error::Section { name, source });
                }
            };

            let m = Measurement::new(name, end.saturating_sub(start));
            debug!(
                "[{}/{count}] `{}` : {}",
                idx + 1,
                m.name,
                humantime::format_duration(m.elapsed)
            );
            emit.section_end(&m, &notes)?;
            report.push(m);
        }

        emit.summary(&report, self.closing.as_deref(), &self.footer)?;
        info!(
            "{count} section(s) mesurée(s), total {}",
            humantime::format_duration(report.total())
        );
        Ok(report)
    }
}

/// Raccourci : horloge monotone, mise en page `Timings`, sortie standard.
pub fn run<'a, I>(sections: I) -> Result<Report>
where
    I: IntoIterator<Item = Section<'a>>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    Harness::new(Layout::default()).run(sections, &mut out)
}
