// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for bilingual-routes
//!
//! Partitions of the slug table, route shapes, and the data-quality issues
//! a hand-maintained table can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independent slug tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Categories,
    Subcategories,
    Businesses,
    Routes,
}

impl Partition {
    pub fn as_str(self) -> &'static str {
        match self {
            Partition::Categories => "categories",
            Partition::Subcategories => "subcategories",
            Partition::Businesses => "businesses",
            Partition::Routes => "routes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "categories" | "category" => Some(Partition::Categories),
            "subcategories" | "subcategory" => Some(Partition::Subcategories),
            "businesses" | "business" => Some(Partition::Businesses),
            "routes" | "route" => Some(Partition::Routes),
            _ => None,
        }
    }

    /// All partitions, in table order.
    pub fn all() -> [Partition; 4] {
        [
            Partition::Categories,
            Partition::Subcategories,
            Partition::Businesses,
            Partition::Routes,
        ]
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Partition::Categories => 0,
            Partition::Subcategories => 1,
            Partition::Businesses => 2,
            Partition::Routes => 3,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a localized path by its second segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteShape {
    /// `/<locale>/category/<slug>[/<subslug>]`
    Category,
    /// `/<locale>/business/<id>`
    Business,
    /// `/<locale>/<named-route>` where the route has a translation
    NamedRoute,
    /// Anything else: only the locale segment changes
    Unclassified,
}

/// Structural segment literal for category routes.
pub const CATEGORY_SEGMENT: &str = "category";
/// Structural segment literal for business routes.
pub const BUSINESS_SEGMENT: &str = "business";

/// How serious a table issue is for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A data bug in a slug table. Lookups never fail because of these; they
/// only make some translations lossy or unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableIssue {
    /// The same English slug appears twice; the first entry wins.
    DuplicateEnglish { partition: Partition, slug: String },
    /// Two English slugs share a Hebrew slug; reverse lookup picks the first.
    DuplicateHebrew {
        partition: Partition,
        slug: String,
        first: String,
        second: String,
    },
    /// An English or Hebrew slug is empty or whitespace-only.
    EmptySlug { partition: Partition, english: String },
    /// A slug contains `/`, `?` or `#` and cannot survive as one path segment.
    ReservedCharacter { partition: Partition, slug: String },
    /// A named route reuses a structural segment and will never be matched.
    RouteShadowsStructural { slug: String },
}

impl TableIssue {
    pub fn severity(&self) -> Severity {
        match self {
            TableIssue::RouteShadowsStructural { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn partition(&self) -> Partition {
        match self {
            TableIssue::DuplicateEnglish { partition, .. }
            | TableIssue::DuplicateHebrew { partition, .. }
            | TableIssue::EmptySlug { partition, .. }
            | TableIssue::ReservedCharacter { partition, .. } => *partition,
            TableIssue::RouteShadowsStructural { .. } => Partition::Routes,
        }
    }
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::DuplicateEnglish { partition, slug } => {
                write!(f, "{}: English slug '{}' appears more than once", partition, slug)
            }
            TableIssue::DuplicateHebrew {
                partition,
                slug,
                first,
                second,
            } => write!(
                f,
                "{}: Hebrew slug '{}' is shared by '{}' and '{}'",
                partition, slug, first, second
            ),
            TableIssue::EmptySlug { partition, english } => {
                write!(f, "{}: empty slug in entry '{}'", partition, english)
            }
            TableIssue::ReservedCharacter { partition, slug } => write!(
                f,
                "{}: slug '{}' contains a reserved URL character",
                partition, slug
            ),
            TableIssue::RouteShadowsStructural { slug } => write!(
                f,
                "routes: '{}' is a structural segment and is never translated",
                slug
            ),
        }
    }
}
