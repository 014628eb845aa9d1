// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bilingual Routes: locale-aware routing for a Hebrew/English business directory.
//!
//! This crate holds the identifier-translation core the directory's
//! navigation layer calls on every language switch. Each operation is a
//! pure function over an immutable slug table and never fails: anything it
//! cannot translate passes through unchanged.
//!
//! PILLARS:
//! 1. **Slugs**: a four-partition English↔Hebrew slug table (categories,
//!    subcategories, businesses, named routes) and its resolver.
//! 2. **Routing**: rewrites a path (with query and fragment) from one
//!    locale to another, translating slugs by route shape.
//! 3. **I18n**: locale metadata and whitespace-insensitive keys for
//!    top-level category translations.

pub mod diagnostics;
pub mod i18n;
pub mod routing;
pub mod slugs;
pub mod types;

pub use i18n::{get_top_key, normalize_food_key, KeyBase, Locale};
pub use routing::{alternates, switch_locale_path};
pub use slugs::{to_target_slug, SlugMap};
