// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookup keys for top-level category translations.
//!
//! The category data stores "Food & Drinks" both with and without internal
//! spaces (`אוכל ושתייה` / `אוכלושתייה`), so labels are collapsed to a
//! whitespace-free key before building `top.<key>.<base>`.
//!
//! Whitespace means every Unicode `White_Space` character plus U+FEFF, the
//! set a `\s` regex class matches. Nothing else is folded: case, punctuation
//! and the `&` in English labels stay as-is.

use std::fmt;

/// Which translation field a top-level key points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBase {
    Title,
    Description,
}

impl KeyBase {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyBase::Title => "title",
            KeyBase::Description => "description",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "title" => Some(KeyBase::Title),
            "description" => Some(KeyBase::Description),
            _ => None,
        }
    }
}

impl fmt::Display for KeyBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_key_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

/// Remove all whitespace from a raw category label.
///
/// # Examples
///
/// ```
/// use bilingual_routes::i18n::normalize_food_key;
/// assert_eq!(normalize_food_key("אוכל ושתייה"), normalize_food_key("אוכלושתייה"));
/// ```
pub fn normalize_food_key(raw: &str) -> String {
    raw.chars().filter(|&ch| !is_key_whitespace(ch)).collect()
}

/// Build the translation key `top.<normalized raw>.<base>`.
pub fn get_top_key(base: KeyBase, raw: &str) -> String {
    format!("top.{}.{}", normalize_food_key(raw), base.as_str())
}
