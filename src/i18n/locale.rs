// SPDX-License-Identifier: PMPL-1.0-or-later

//! Supported directory locales.
//!
//! ## Adding a locale
//!
//! 1. Add a variant to [`Locale`]
//! 2. Add arms to `Locale::code()`, `Locale::from_code()`,
//!    `Locale::direction()` and `Locale::native_name()`
//! 3. Extend `Locale::all()`; `Locale::other()` only makes sense for a
//!    two-locale site and must be revisited

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale the directory renders in.
///
/// Used by the CLI `--from`/`--to` flags and by [`crate::routing::alternates`]
/// to enumerate language-switch targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    He,
}

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl Locale {
    /// ISO 639-1 two-letter code, also the first path segment.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    /// Parse a locale code. Case-sensitive, since codes appear verbatim in
    /// paths.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "he" => Some(Locale::He),
            _ => None,
        }
    }

    /// All supported locales, in menu order.
    pub fn all() -> &'static [Locale] {
        &[Locale::He, Locale::En]
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::He => Direction::Rtl,
        }
    }

    /// Name of the language written in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::He => "עברית",
        }
    }

    /// The locale the language toggle switches to.
    pub fn other(&self) -> Locale {
        match self {
            Locale::En => Locale::He,
            Locale::He => Locale::En,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::He
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
