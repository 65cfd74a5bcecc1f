//! Les suites : une par script d’origine.
//!
//! - `comparison`    : mise en page narrative, cinq sections.
//! - `intensive`     : mise en page narrative, crible / récursion / matrice.
//! - `comprehensive` et `stable` : même structure à six tests, deux échelles
//!   ([`Scale::COMPREHENSIVE`], [`Scale::STABLE`]) via [`standard`].

mod comparison;
mod intensive;
mod standard;

pub use comparison::comparison;
pub use intensive::intensive;
pub use standard::{comprehensive, short_count, stable, standard, Scale};
