// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale path switching.
//!
//! Given the current location and a target locale, produce the same page's
//! path in the target locale:
//!
//! 1. Parse the path into segments, query and fragment ([`LocalePath`]).
//! 2. A path whose first segment is not the current locale is locale-less:
//!    the target locale is prefixed to the whole pathname and nothing is
//!    translated.
//! 3. Otherwise the locale segment is replaced and slug segments are
//!    translated according to the [`RouteShape`].
//! 4. Query and fragment are appended verbatim.
//!
//! Every input yields a non-empty path starting with `/`. Untranslated
//! segments keep their URL form (non-ASCII percent-encoded); translated
//! segments are written as the table spells them.

mod path;

pub use path::LocalePath;

use crate::i18n::Locale;
use crate::slugs::{self, SlugMap};
use crate::types::{Partition, RouteShape};
use path::decode_segment;
use std::borrow::Cow;
use tracing::trace;

/// Rewrite `current_path` from `current_locale` to `target_locale`.
///
/// # Examples
///
/// ```
/// use bilingual_routes::routing::switch_locale_path;
/// use bilingual_routes::slugs::SlugMap;
///
/// let map = SlugMap::builtin();
/// assert_eq!(
///     switch_locale_path(map, "/en/category/food-drink/restaurants", "en", "he"),
///     "/he/category/אוכל-ושתייה/מסעדות"
/// );
/// assert_eq!(switch_locale_path(map, "/random/path", "en", "he"), "/he/random/path");
/// ```
pub fn switch_locale_path(
    map: &SlugMap,
    current_path: &str,
    current_locale: &str,
    target_locale: &str,
) -> String {
    let parsed = LocalePath::parse(current_path);

    if parsed.locale() != Some(current_locale) {
        trace!(
            path = current_path,
            current_locale,
            "path has no locale prefix, prefixing target locale"
        );
        let mut out = String::with_capacity(target_locale.len() + current_path.len() + 1);
        out.push('/');
        out.push_str(target_locale);
        out.push_str(parsed.pathname());
        parsed.push_suffix(&mut out);
        return out;
    }

    let mut segments: Vec<Cow<'_, str>> = parsed
        .segments()
        .iter()
        .map(|segment| Cow::Borrowed(segment.as_str()))
        .collect();
    segments[0] = Cow::Borrowed(target_locale);

    let mut translate_at = |index: usize, partition: Partition| {
        let Some(segment) = parsed.segments().get(index) else {
            return;
        };
        let decoded = decode_segment(segment);
        if let Some(translated) =
            slugs::translate(map, partition, &decoded, current_locale, target_locale)
        {
            segments[index] = Cow::Owned(translated.to_string());
        }
    };

    match parsed.shape(map) {
        RouteShape::Category => {
            translate_at(2, Partition::Categories);
            translate_at(3, Partition::Subcategories);
        }
        RouteShape::Business => translate_at(2, Partition::Businesses),
        RouteShape::NamedRoute => translate_at(1, Partition::Routes),
        RouteShape::Unclassified => {}
    }

    let mut out = String::with_capacity(current_path.len() + 16);
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    parsed.push_suffix(&mut out);
    out
}

/// [`switch_locale_path`] against the built-in table.
pub fn switch_locale_path_builtin(
    current_path: &str,
    current_locale: &str,
    target_locale: &str,
) -> String {
    switch_locale_path(SlugMap::builtin(), current_path, current_locale, target_locale)
}

/// The current page's path in every supported locale, in menu order.
///
/// Feeds `hreflang` alternate links and the language menu. The entry for
/// `current_locale` is the path itself, unchanged.
pub fn alternates(map: &SlugMap, current_path: &str, current_locale: Locale) -> Vec<(Locale, String)> {
    Locale::all()
        .iter()
        .map(|&locale| {
            let path = switch_locale_path(map, current_path, current_locale.code(), locale.code());
            (locale, path)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch(path: &str, from: &str, to: &str) -> String {
        switch_locale_path(SlugMap::builtin(), path, from, to)
    }

    #[test]
    fn category_route() {
        assert_eq!(
            switch("/en/category/shops-retail", "en", "he"),
            "/he/category/חנויות-וקמעונאות"
        );
        assert_eq!(
            switch("/he/category/חנויות-וקמעונאות", "he", "en"),
            "/en/category/shops-retail"
        );
    }

    #[test]
    fn subcategory_route() {
        assert_eq!(
            switch("/en/category/food-drink/restaurants", "en", "he"),
            "/he/category/אוכל-ושתייה/מסעדות"
        );
        assert_eq!(
            switch("/he/category/אוכל-ושתייה/מסעדות", "he", "en"),
            "/en/category/food-drink/restaurants"
        );
    }

    #[test]
    fn segments_after_subcategory_are_untouched() {
        assert_eq!(
            switch("/en/category/food-drink/restaurants/cafes", "en", "he"),
            "/he/category/אוכל-ושתייה/מסעדות/cafes"
        );
    }

    #[test]
    fn query_and_fragment_preserved() {
        assert_eq!(
            switch("/en/category/shops-retail?sort=rating#top", "en", "he"),
            "/he/category/חנויות-וקמעונאות?sort=rating#top"
        );
        assert_eq!(
            switch("/en/deals?q=%D7%90&category=food-drink#", "en", "he"),
            "/he/מבצעים?q=%D7%90&category=food-drink#"
        );
    }

    #[test]
    fn business_route() {
        assert_eq!(switch("/en/business/abc123", "en", "he"), "/he/business/abc123");
        assert_eq!(
            switch("/en/business/cafe-hagefen", "en", "he"),
            "/he/business/קפה-הגפן"
        );
    }

    #[test]
    fn named_route() {
        assert_eq!(switch("/en/add-business", "en", "he"), "/he/הוסף-עסק");
        assert_eq!(switch("/en/explore/map", "en", "he"), "/he/עיון/map");
    }

    #[test]
    fn hebrew_named_route_is_not_a_forward_key() {
        // Only English route segments are classified as named routes; the
        // untouched Hebrew segment keeps its percent-encoded URL form.
        assert_eq!(
            switch("/he/עיון", "he", "en"),
            "/en/%D7%A2%D7%99%D7%95%D7%9F"
        );
    }

    #[test]
    fn locale_only_and_short_paths() {
        assert_eq!(switch("/he", "he", "en"), "/en");
        assert_eq!(switch("/en/category", "en", "he"), "/he/category");
        assert_eq!(switch("/en/business/", "en", "he"), "/he/business");
    }

    #[test]
    fn locale_less_paths_get_prefixed() {
        assert_eq!(switch("/random/path", "en", "he"), "/he/random/path");
        assert_eq!(switch("/", "en", "he"), "/he/");
        assert_eq!(switch("", "en", "he"), "/he/");
        assert_eq!(switch("?x=1#y", "en", "he"), "/he/?x=1#y");
        // A path in the other locale is locale-less from this caller's view.
        assert_eq!(switch("/he/explore", "en", "he"), "/he/he/explore");
    }

    #[test]
    fn same_locale_keeps_slugs() {
        assert_eq!(
            switch("/en/category/food-drink", "en", "en"),
            "/en/category/food-drink"
        );
    }

    #[test]
    fn percent_encoded_hebrew_is_resolved() {
        assert_eq!(
            switch("/he/category/%D7%A8%D7%9B%D7%91", "he", "en"),
            "/en/category/automotive"
        );
        assert_eq!(
            switch("/he/business/%D7%90", "he", "en"),
            "/en/business/%D7%90"
        );
    }

    #[test]
    fn absolute_url_keeps_only_path() {
        assert_eq!(
            switch("https://example.co.il/en/help#contact", "en", "he"),
            "/he/עזרה#contact"
        );
    }

    #[test]
    fn dot_segments_resolve_before_translation() {
        assert_eq!(switch("/en/./add-business", "en", "he"), "/he/הוסף-עסק");
        assert_eq!(
            switch("/en/category/../business/cafe-hagefen", "en", "he"),
            "/he/business/קפה-הגפן"
        );
    }

    #[test]
    fn backslash_separated_path() {
        assert_eq!(switch("\\en\\add-business", "en", "he"), "/he/הוסף-עסק");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(switch(" /en/add-business", "en", "he"), "/he/הוסף-עסק");
        assert_eq!(
            switch("\t/en/category/food-drink?page=2\n", "en", "he"),
            "/he/category/אוכל-ושתייה?page=2"
        );
    }

    #[test]
    fn non_ascii_query_and_fragment_survive_verbatim() {
        assert_eq!(
            switch("/en/search?q=קפה הפוך&city=חיפה#תוצאות", "en", "he"),
            "/he/חיפוש?q=קפה הפוך&city=חיפה#תוצאות"
        );
    }

    #[test]
    fn alternates_cover_every_locale() {
        let links = alternates(SlugMap::builtin(), "/en/category/food-drink", Locale::En);
        assert_eq!(
            links,
            vec![
                (Locale::He, "/he/category/אוכל-ושתייה".to_string()),
                (Locale::En, "/en/category/food-drink".to_string()),
            ]
        );
    }
}
