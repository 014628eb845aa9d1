// SPDX-License-Identifier: PMPL-1.0-or-later

//! Slug resolver with identity fallback.
//!
//! Translation toward Hebrew is a forward lookup; translation toward any
//! other locale is a reverse lookup. A slug with no entry is returned as
//! given, so numeric business ids and untranslated slugs travel the same
//! path as translated ones. Locale codes are compared as plain strings and
//! never validated.

use super::SlugMap;
use crate::i18n::Locale;
use crate::types::Partition;
use tracing::trace;

/// Translate `slug` within `partition`, returning `None` when the locales
/// match or the table has no entry for it.
pub fn translate<'a>(
    map: &'a SlugMap,
    partition: Partition,
    slug: &str,
    current_locale: &str,
    target_locale: &str,
) -> Option<&'a str> {
    if current_locale == target_locale {
        return None;
    }
    let table = map.partition(partition);
    let found = if target_locale == Locale::He.code() {
        table.hebrew_for(slug)
    } else {
        table.english_for(slug)
    };
    if found.is_none() {
        trace!(%partition, slug, target_locale, "no slug translation, passing through");
    }
    found
}

/// Translate `slug` between locales within one partition of `map`.
///
/// Total: unknown slugs and identical locales return `slug` unchanged.
pub fn to_target_slug(
    map: &SlugMap,
    partition: Partition,
    slug: &str,
    current_locale: &str,
    target_locale: &str,
) -> String {
    translate(map, partition, slug, current_locale, target_locale)
        .unwrap_or(slug)
        .to_string()
}

/// [`to_target_slug`] against the built-in table.
///
/// # Examples
///
/// ```
/// use bilingual_routes::slugs::to_target_slug_builtin;
/// use bilingual_routes::types::Partition;
///
/// assert_eq!(
///     to_target_slug_builtin(Partition::Routes, "explore", "en", "he"),
///     "עיון"
/// );
/// assert_eq!(
///     to_target_slug_builtin(Partition::Businesses, "abc123", "en", "he"),
///     "abc123"
/// );
/// ```
pub fn to_target_slug_builtin(
    partition: Partition,
    slug: &str,
    current_locale: &str,
    target_locale: &str,
) -> String {
    to_target_slug(
        SlugMap::builtin(),
        partition,
        slug,
        current_locale,
        target_locale,
    )
}
