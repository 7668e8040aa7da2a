//! Font family registry.
//!
//! An immutable mapping from logical text roles to font family names,
//! constructed once and passed by reference to whichever writer needs it.
//! There is deliberately no mutable process-wide registration step: a
//! registry value is complete when built and never changes afterward.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Immutable role-to-family font mapping.
///
/// # Examples
///
/// ```rust
/// use deckgen::fonts::FontRegistry;
///
/// let registry = FontRegistry::new()
///     .with_title_family("Montserrat")
///     .with_body_family("Open Sans");
/// assert_eq!(registry.title_family(), "Montserrat");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRegistry {
    /// Family used for slide titles
    title_family: String,
    /// Family used for body text and notes
    body_family: String,
}

static DEFAULT_REGISTRY: Lazy<FontRegistry> = Lazy::new(FontRegistry::new);

impl Default for FontRegistry {
    fn default() -> Self {
        Self {
            title_family: "Calibri".to_string(),
            body_family: "Calibri".to_string(),
        }
    }
}

impl FontRegistry {
    /// Create a registry with the default families.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared process-default registry.
    #[inline]
    pub fn process_default() -> &'static FontRegistry {
        &DEFAULT_REGISTRY
    }

    /// Set the title family.
    #[inline]
    pub fn with_title_family(mut self, family: impl Into<String>) -> Self {
        self.title_family = family.into();
        self
    }

    /// Set the body family.
    #[inline]
    pub fn with_body_family(mut self, family: impl Into<String>) -> Self {
        self.body_family = family.into();
        self
    }

    /// Family used for slide titles.
    #[inline]
    pub fn title_family(&self) -> &str {
        &self.title_family
    }

    /// Family used for body text and notes.
    #[inline]
    pub fn body_family(&self) -> &str {
        &self.body_family
    }
}
