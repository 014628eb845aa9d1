// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading slug tables from YAML or JSON documents.
//!
//! A table document has up to four top-level mappings, one per partition:
//!
//! ```yaml
//! categories:
//!   food-drink: אוכל-ושתייה
//! routes:
//!   explore: עיון
//! ```
//!
//! Missing partitions and partitions set to `null` (`routes:` with no value
//! in YAML) load as empty, in both formats. Entries keep document order, which is
//! the order reverse lookups use to break ties.

use super::{SlugMap, TableFormat};
use crate::types::Partition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to read or parse a slug table document.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read slug table {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML slug table: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON slug table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported slug table format '{0}' (expected yaml, yml or json)")]
    UnsupportedFormat(String),
}

/// On-disk shape of a slug table.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct TableDocument {
    #[serde(default, with = "ordered_pairs")]
    pub categories: Vec<(String, String)>,
    #[serde(default, with = "ordered_pairs")]
    pub subcategories: Vec<(String, String)>,
    #[serde(default, with = "ordered_pairs")]
    pub businesses: Vec<(String, String)>,
    #[serde(default, with = "ordered_pairs")]
    pub routes: Vec<(String, String)>,
}

impl TableDocument {
    pub(super) fn from_map(map: &SlugMap) -> Self {
        let pairs = |partition: Partition| -> Vec<(String, String)> {
            map.partition(partition)
                .iter()
                .map(|(english, hebrew)| (english.to_string(), hebrew.to_string()))
                .collect()
        };
        TableDocument {
            categories: pairs(Partition::Categories),
            subcategories: pairs(Partition::Subcategories),
            businesses: pairs(Partition::Businesses),
            routes: pairs(Partition::Routes),
        }
    }

    fn into_map(self) -> SlugMap {
        SlugMap::new()
            .with_partition(Partition::Categories, self.categories)
            .with_partition(Partition::Subcategories, self.subcategories)
            .with_partition(Partition::Businesses, self.businesses)
            .with_partition(Partition::Routes, self.routes)
    }
}

impl SlugMap {
    pub fn from_yaml_str(source: &str) -> Result<SlugMap, TableError> {
        let document: TableDocument = serde_yaml::from_str(source)?;
        Ok(document.into_map())
    }

    pub fn from_json_str(source: &str) -> Result<SlugMap, TableError> {
        let document: TableDocument = serde_json::from_str(source)?;
        Ok(document.into_map())
    }

    /// Load a table file, choosing the parser from its extension.
    pub fn load(path: &Path) -> Result<SlugMap, TableError> {
        let format = TableFormat::from_path(path).ok_or_else(|| {
            let extension = path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .unwrap_or_default();
            TableError::UnsupportedFormat(extension)
        })?;
        let source = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let map = format.deserialize(&source)?;
        debug!(path = %path.display(), entries = map.len(), "loaded slug table");
        Ok(map)
    }
}

/// Serde adapter: a string→string mapping kept as an ordered pair list.
mod ordered_pairs {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(pairs: &[(String, String)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(pairs.len()))?;
        for (english, hebrew) in pairs {
            map.serialize_entry(english, hebrew)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(PairsVisitor)
    }

    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping of English slugs to Hebrew slugs, or null")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((english, hebrew)) = access.next_entry::<String, String>()? {
                pairs.push((english, hebrew));
            }
            Ok(pairs)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(PairsVisitor)
        }
    }
}
