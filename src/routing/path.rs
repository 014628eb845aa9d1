// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parsed view of a localized path.

use crate::slugs::SlugMap;
use crate::types::{Partition, RouteShape, BUSINESS_SEGMENT, CATEGORY_SEGMENT};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use tracing::trace;
use url::Url;

/// Base that relative paths are resolved against. Only its path is kept.
static NEUTRAL_BASE: Lazy<Option<Url>> = Lazy::new(|| Url::parse("http://localhost/").ok());

/// A path resolved with URL rules, plus the raw query and fragment.
///
/// The pathname goes through the URL parser: dot segments are removed,
/// `\` separates segments, and any origin (`scheme://host`) is dropped.
/// The query (after the first `?`) and fragment (after the first `#`) are
/// taken from the input text and never re-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePath<'a> {
    pathname: String,
    segments: Vec<String>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> LocalePath<'a> {
    pub fn parse(raw: &'a str) -> Self {
        // The URL parser ignores leading and trailing C0 controls and spaces.
        let raw = raw.trim_matches(|ch: char| ch <= ' ');
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        let (pathname, segments) = resolve_pathname(path);
        LocalePath {
            pathname,
            segments,
            query,
            fragment,
        }
    }

    /// Non-empty segments in their percent-encoded URL form.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// First segment, where a locale prefix is expected.
    pub fn locale(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Resolved pathname, always starting with `/`.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Classify the route by its second segment.
    pub fn shape(&self, map: &SlugMap) -> RouteShape {
        match self.segments.get(1).map(String::as_str) {
            Some(CATEGORY_SEGMENT) => RouteShape::Category,
            Some(BUSINESS_SEGMENT) => RouteShape::Business,
            Some(segment)
                if map
                    .partition(Partition::Routes)
                    .contains_english(&decode_segment(segment)) =>
            {
                RouteShape::NamedRoute
            }
            _ => RouteShape::Unclassified,
        }
    }

    /// Append `?query` and `#fragment` exactly as they were parsed.
    pub(crate) fn push_suffix(&self, out: &mut String) {
        if let Some(query) = self.query {
            out.push('?');
            out.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            out.push('#');
            out.push_str(fragment);
        }
    }
}

/// Percent-decode a path segment for table lookups. Segments that do not
/// decode to UTF-8 are used as typed.
pub(crate) fn decode_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment))
}

fn resolve_pathname(path: &str) -> (String, Vec<String>) {
    let resolved = NEUTRAL_BASE
        .as_ref()
        .and_then(|base| base.join(path).ok());
    let Some(url) = resolved else {
        // Unparseable input (e.g. `http://` with no host) keeps its text.
        trace!(path, "path is not a valid URL reference, using it as typed");
        return split_pathname(with_leading_slash(path));
    };
    match url.path_segments() {
        Some(segments) => {
            let segments = segments
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect();
            (with_leading_slash(url.path()), segments)
        }
        // Opaque URLs such as `mailto:x` have no segments.
        None => split_pathname(with_leading_slash(url.path())),
    }
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn split_pathname(pathname: String) -> (String, Vec<String>) {
    let segments = pathname
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    (pathname, segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_query_and_fragment() {
        let path = LocalePath::parse("/en/category/shops-retail?sort=rating#top");
        assert_eq!(path.segments(), &["en", "category", "shops-retail"]);
        assert_eq!(path.query(), Some("sort=rating"));
        assert_eq!(path.fragment(), Some("top"));
        assert_eq!(path.locale(), Some("en"));
    }

    #[test]
    fn question_mark_inside_fragment_stays_in_fragment() {
        let path = LocalePath::parse("/en/help#faq?x=1");
        assert_eq!(path.query(), None);
        assert_eq!(path.fragment(), Some("faq?x=1"));
    }

    #[test]
    fn empty_segments_are_dropped() {
        let path = LocalePath::parse("/en///business//");
        assert_eq!(path.segments(), &["en", "business"]);
        assert_eq!(path.pathname(), "/en///business//");
    }

    #[test]
    fn dot_segments_are_resolved() {
        assert_eq!(
            LocalePath::parse("/en/./add-business").segments(),
            &["en", "add-business"]
        );
        assert_eq!(
            LocalePath::parse("/en/category/../business/cafe-hagefen").pathname(),
            "/en/business/cafe-hagefen"
        );
        assert_eq!(LocalePath::parse("/../../en").segments(), &["en"]);
    }

    #[test]
    fn backslashes_separate_segments() {
        let path = LocalePath::parse("\\en\\add-business");
        assert_eq!(path.pathname(), "/en/add-business");
    }

    #[test]
    fn surrounding_whitespace_and_controls_are_ignored() {
        let path = LocalePath::parse(" \t/en/add-business?q=1#top \n");
        assert_eq!(path.segments(), &["en", "add-business"]);
        assert_eq!(path.query(), Some("q=1"));
        assert_eq!(path.fragment(), Some("top"));
    }

    #[test]
    fn relative_path_gains_leading_slash() {
        assert_eq!(LocalePath::parse("random/path").pathname(), "/random/path");
        assert_eq!(LocalePath::parse("").pathname(), "/");
    }

    #[test]
    fn origin_is_dropped_and_hebrew_is_percent_encoded() {
        let path = LocalePath::parse("https://example.co.il/he/עיון?q=1");
        assert_eq!(path.segments(), &["he", "%D7%A2%D7%99%D7%95%D7%9F"]);
        assert_eq!(path.query(), Some("q=1"));
        assert_eq!(LocalePath::parse("http://example.co.il").pathname(), "/");
    }

    #[test]
    fn invalid_url_reference_is_kept_as_typed() {
        let path = LocalePath::parse("http://");
        assert_eq!(path.pathname(), "/http://");
        assert_eq!(path.segments(), &["http:"]);
    }

    #[test]
    fn shape_classification() {
        let map = SlugMap::builtin();
        assert_eq!(
            LocalePath::parse("/en/category/food-drink").shape(map),
            RouteShape::Category
        );
        assert_eq!(
            LocalePath::parse("/en/business").shape(map),
            RouteShape::Business
        );
        assert_eq!(
            LocalePath::parse("/en/explore").shape(map),
            RouteShape::NamedRoute
        );
        assert_eq!(
            LocalePath::parse("/en/unknown").shape(map),
            RouteShape::Unclassified
        );
        assert_eq!(LocalePath::parse("/en").shape(map), RouteShape::Unclassified);
    }

    #[test]
    fn decode_segment_handles_percent_encoding() {
        assert_eq!(decode_segment("%D7%A2%D7%99%D7%95%D7%9F"), "עיון");
        assert_eq!(decode_segment("abc123"), "abc123");
        assert_eq!(decode_segment("%FF"), "%FF");
    }
}
