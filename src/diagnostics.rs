// SPDX-License-Identifier: PMPL-1.0-or-later

//! Slug table health check.
//!
//! Prints one line per partition plus one line per data issue, tagged
//! `[OK]`, `[WARN]` or `[ERR]`. Any `[ERR]` line makes the check fail.

use crate::slugs::SlugMap;
use crate::types::{Partition, Severity};
use anyhow::{anyhow, Result};
use colored::Colorize;

pub fn run_table_check(map: &SlugMap, source: &str) -> Result<()> {
    println!("bilingual-routes slug table check");
    println!("  source: {}", source);

    let checks = table_diagnostics(map);
    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("slug table check reported issues"))
    } else {
        Ok(())
    }
}

/// Diagnostics for `map`, partition summaries first.
pub fn table_diagnostics(map: &SlugMap) -> Vec<Diagnostic> {
    let issues = map.issues();
    let mut checks = Vec::new();

    for partition in Partition::all() {
        let table = map.partition(partition);
        let count = |severity: Severity| {
            issues
                .iter()
                .filter(|issue| issue.partition() == partition && issue.severity() == severity)
                .count()
        };
        let (errors, warnings) = (count(Severity::Error), count(Severity::Warning));
        let detail = format!("{} entries", table.len());
        checks.push(if errors > 0 {
            Diagnostic::error(partition.as_str(), format!("{}, {} issues", detail, errors))
        } else if table.is_empty() {
            Diagnostic::warning(partition.as_str(), "empty (every slug passes through)".to_string())
        } else if warnings > 0 {
            Diagnostic::warning(partition.as_str(), format!("{}, {} warnings", detail, warnings))
        } else {
            Diagnostic::ok(partition.as_str(), detail)
        });
    }

    for issue in &issues {
        let label = match issue.severity() {
            Severity::Error => Diagnostic::error,
            Severity::Warning => Diagnostic::warning,
        };
        checks.push(label("issue", issue.to_string()));
    }
    checks
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:14} {}", self.level.tag(), self.label, self.detail);
    }
}

impl Level {
    fn tag(&self) -> colored::ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red(),
        }
    }
}
