//! tempo-harness : harnais de micro-benchmarks
//!
//! Exécute une liste ordonnée de sections nommées, mesure chacune avec une
//! horloge monotone, écrit une ligne par section au fil de l’eau puis un
//! total. Le résultat est un [`Report`] possédé par l’appelant : aucun état
//! global, chaque exécution construit le sien.
//!
//! ## Modules
//! - `clock`   : trait [`Clock`], [`MonotonicClock`] (std `Instant`), [`StepClock`] (tests).
//! - `section` : [`Section`] (nom, en-tête, corps `FnOnce`) et [`Notes`].
//! - `report`  : [`Measurement`] et [`Report`].
//! - `render`  : [`Layout`] et formatage des lignes.
//! - `harness` : [`Harness`] (builder) et [`run`] (raccourci stdout).
//!
//! ```no_run
//! use tempo_harness::{run, Section};
//!
//! let report = run(vec![
//!     Section::new("noop", || {}),
//!     Section::new("sum", || {
//!         std::hint::black_box((0..1_000u64).sum::<u64>());
//!     }),
//! ])?;
//! assert_eq!(report.len(), 2);
//! # Ok::<(), tempo_harness::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, unused_must_use)]

// ---------- Modules publics ----------
pub mod clock;
pub mod harness;
pub mod render;
pub mod report;
pub mod section;

// ---------- Reexports de confort ----------
pub use clock::{Clock, MonotonicClock, StepClock};
pub use harness::{run, Harness};
pub use render::Layout;
pub use report::{Measurement, Report};
pub use section::{BoxError, Notes, Section, SectionOutput};

/// Version du crate (lisible, via Cargo).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------- Erreurs & Résultat ----------
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Liste de sections vide : rien à mesurer.
    #[error("aucune section à mesurer")]
    NoSections,

    /// Le corps d’une section a échoué ; l’exécution est abandonnée.
    #[error("section `{name}`: {source}")]
    Section {
        name: String,
        #[source]
        source: BoxError,
    },

    /// Écriture sur la sortie impossible
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

// ---------- Prelude ----------
pub mod prelude {
    pub use crate::{
        run, BoxError, Clock, Error, Harness, Layout, Measurement, MonotonicClock, Notes,
        Report, Result, Section, StepClock,
    };
}
