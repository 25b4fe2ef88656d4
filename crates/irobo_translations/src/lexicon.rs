//! Case-insensitive lookup from localized spellings to canonical words.
//!
//! A [`Lexicon`] is built once per parse from a locale's translation table.
//! Matching is case-insensitive on the localized side; the canonical side is
//! returned exactly as the vocabulary spells it.

use std::collections::HashMap;

use irobo_foundation::{Error, Result};

use crate::locale::Locale;
use crate::roles::{WordRole, role_of};
use crate::tables;

/// A canonical vocabulary entry together with its grammatical role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanonicalWord {
    /// The canonical name, e.g. `"forward"`.
    pub name: &'static str,
    /// The role the grammar assigns this word.
    pub role: WordRole,
}

/// Inverted translation table for one locale.
#[derive(Clone, Debug)]
pub struct Lexicon {
    locale: Locale,
    words: HashMap<String, CanonicalWord>,
}

impl Lexicon {
    /// Builds the lexicon for a locale from its bundled table.
    ///
    /// # Errors
    /// Returns a configuration error if the table maps two localized
    /// spellings to the same case-folded form.
    pub fn new(locale: Locale) -> Result<Self> {
        Self::from_table(locale, tables::table(locale))
    }

    /// Builds a lexicon from an explicit `(canonical, localized)` table.
    ///
    /// # Errors
    /// Returns a configuration error if two localized spellings collide
    /// after case folding.
    pub fn from_table(locale: Locale, table: &[(&'static str, &'static str)]) -> Result<Self> {
        let mut words = HashMap::with_capacity(table.len());
        for &(canonical, localized) in table {
            let entry = CanonicalWord {
                name: canonical,
                role: role_of(canonical),
            };
            if words.insert(localized.to_lowercase(), entry).is_some() {
                return Err(Error::config(format!(
                    "duplicate word '{localized}' in table {locale}"
                )));
            }
        }
        Ok(Self { locale, words })
    }

    /// The locale this lexicon was built for.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves a surface word to its canonical entry, ignoring case.
    ///
    /// Returns `None` for plain identifiers (user variables and procedure
    /// names).
    #[must_use]
    pub fn resolve(&self, surface: &str) -> Option<CanonicalWord> {
        self.words.get(&surface.to_lowercase()).copied()
    }
}
