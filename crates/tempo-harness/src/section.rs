//! Sections : unité de travail nommée, mesurée indépendamment.
//!
//! Le corps est un `FnOnce` sans argument : il est consommé par l’exécution,
//! donc exécuté exactement une fois. Il peut renvoyer des [`Notes`]
//! (lignes lisibles affichées après la mesure), `()` ou un `Result`.

use std::fmt;

/// Erreur levée par le corps d’une section.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

type Body<'a> = Box<dyn FnOnce() -> Result<Notes, BoxError> + 'a>;

/// Une section nommée : en-tête optionnel + corps mesuré.
pub struct Section<'a> {
    name: String,
    header: Option<String>,
    body: Body<'a>,
}

impl<'a> Section<'a> {
    pub fn new<F, R>(name: impl Into<String>, body: F) -> Self
    where
        F: FnOnce() -> R + 'a,
        R: SectionOutput,
    {
        Self {
            name: name.into(),
            header: None,
            body: Box::new(move || body().into_outcome()),
        }
    }

    /// Ligne affichée avant l’exécution (ex. `"1. Arithmetic Operations"`).
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, Body<'a>) {
        (self.name, self.header, self.body)
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("name", &self.name)
            .field("header", &self.header)
            .finish_non_exhaustive()
    }
}

/// Lignes de résultat produites par un corps (facultatives).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes {
    lines: Vec<String>,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute `"<description>: <value>"`.
    #[must_use]
    pub fn field(mut self, description: &str, value: impl fmt::Display) -> Self {
        self.lines.push(format!("{description}: {value}"));
        self
    }

    /// Ajoute une ligne libre.
    #[must_use]
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<()> for Notes {
    fn from((): ()) -> Self {
        Self::default()
    }
}

/// Ce qu’un corps de section peut renvoyer.
pub trait SectionOutput {
    fn into_outcome(self) -> Result<Notes, BoxError>;
}

impl SectionOutput for () {
    fn into_outcome(self) -> Result<Notes, BoxError> {
        Ok(Notes::default())
    }
}

impl SectionOutput for Notes {
    fn into_outcome(self) -> Result<Notes, BoxError> {
        Ok(self)
    }
}

impl<T, E> SectionOutput for Result<T, E>
where
    T: Into<Notes>,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Notes, BoxError> {
        self.map(Into::into).map_err(Into::into)
    }
}
