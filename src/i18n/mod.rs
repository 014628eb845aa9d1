// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation helpers for the directory.
//!
//! ## Supported locales
//!
//! | Code | Language | Native name | Direction |
//! |------|----------|-------------|-----------|
//! | en   | English  | English     | ltr       |
//! | he   | Hebrew   | עברית       | rtl       |
//!
//! Routing and slug translation take locale codes as plain strings and do
//! not validate them; [`Locale`] is for callers that want a typed view of
//! the two locales the directory actually ships.
//!
//! Translation-resource keys for top-level categories are built by
//! [`get_top_key`], which collapses whitespace in the raw category label.

mod keys;
mod locale;

pub use keys::{get_top_key, normalize_food_key, KeyBase};
pub use locale::{Direction, Locale};
