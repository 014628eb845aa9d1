// SPDX-License-Identifier: PMPL-1.0-or-later

//! bilingual-routes: inspect and exercise the directory's locale routing
//!
//! Switches paths between Hebrew and English, translates single slugs,
//! builds category translation keys, and checks or exports the slug table.

use anyhow::{Context, Result};
use bilingual_routes::diagnostics;
use bilingual_routes::i18n::{get_top_key, KeyBase, Locale};
use bilingual_routes::routing::{alternates, switch_locale_path};
use bilingual_routes::slugs::{to_target_slug, SlugMap, TableFormat};
use bilingual_routes::types::Partition;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bilingual-routes")]
#[command(version)]
#[command(about = "Locale-aware routing and Hebrew/English slug translation")]
#[command(long_about = None)]
struct Cli {
    /// Slug table file (YAML or JSON) to use instead of the built-in table
    #[arg(long, global = true, env = "BILINGUAL_ROUTES_TABLE")]
    table: Option<PathBuf>,

    /// Verbose logging (debug level unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a path into another locale
    Switch {
        /// Current path, with optional query and fragment
        #[arg(value_name = "PATH")]
        path: String,

        /// Current locale
        #[arg(short, long, default_value = "en")]
        from: String,

        /// Target locale
        #[arg(short, long, default_value = "he")]
        to: String,
    },

    /// Translate a single slug within one partition
    Slug {
        /// categories, subcategories, businesses or routes
        #[arg(value_name = "PARTITION", value_parser = parse_partition)]
        partition: Partition,

        #[arg(value_name = "SLUG")]
        slug: String,

        #[arg(short, long, default_value = "en")]
        from: String,

        #[arg(short, long, default_value = "he")]
        to: String,
    },

    /// Build the translation key for a top-level category label
    Key {
        /// Raw category label, spaces allowed
        #[arg(value_name = "LABEL")]
        raw: String,

        /// Translation field: title or description
        #[arg(short, long, default_value = "title", value_parser = parse_key_base)]
        base: KeyBase,
    },

    /// Print the path in every supported locale
    Alternates {
        #[arg(value_name = "PATH")]
        path: String,

        /// Locale of the given path
        #[arg(short, long, default_value_t = Locale::default(), value_parser = parse_locale)]
        from: Locale,
    },

    /// Check the slug table for duplicates and malformed slugs
    Check,

    /// Export the active slug table
    Export {
        /// Output format; inferred from the --output extension, else yaml
        #[arg(short = 'F', long, value_enum)]
        format: Option<TableFormat>,

        /// Write to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_partition(value: &str) -> Result<Partition, String> {
    Partition::parse(value).ok_or_else(|| {
        format!(
            "unknown partition '{}' (expected categories, subcategories, businesses or routes)",
            value
        )
    })
}

fn parse_key_base(value: &str) -> Result<KeyBase, String> {
    KeyBase::parse(value)
        .ok_or_else(|| format!("unknown key base '{}' (expected title or description)", value))
}

fn parse_locale(value: &str) -> Result<Locale, String> {
    Locale::from_code(value).ok_or_else(|| format!("unsupported locale '{}' (expected he or en)", value))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded;
    let (map, source) = match &cli.table {
        Some(path) => {
            loaded = SlugMap::load(path)
                .with_context(|| format!("loading slug table {}", path.display()))?;
            (&loaded, path.display().to_string())
        }
        None => (SlugMap::builtin(), "built-in".to_string()),
    };
    debug!(source = %source, entries = map.len(), "slug table ready");

    match cli.command {
        Commands::Switch { path, from, to } => {
            println!("{}", switch_locale_path(map, &path, &from, &to));
        }

        Commands::Slug {
            partition,
            slug,
            from,
            to,
        } => {
            println!("{}", to_target_slug(map, partition, &slug, &from, &to));
        }

        Commands::Key { raw, base } => {
            println!("{}", get_top_key(base, &raw));
        }

        Commands::Alternates { path, from } => {
            for (locale, alternate) in alternates(map, &path, from) {
                println!(
                    "{} ({}, {}): {}",
                    locale,
                    locale.native_name(),
                    locale.direction().as_str(),
                    alternate
                );
            }
        }

        Commands::Check => {
            diagnostics::run_table_check(map, &source)?;
        }

        Commands::Export { format, output } => {
            let format = format
                .or_else(|| output.as_deref().and_then(TableFormat::from_path))
                .unwrap_or(TableFormat::Yaml);
            debug!(format = format.extension(), "exporting slug table");
            let rendered = format.serialize(map)?;
            if let Some(output_path) = output {
                std::fs::write(&output_path, rendered)
                    .with_context(|| format!("writing {}", output_path.display()))?;
                println!(
                    "Slug table ({}) saved to: {}",
                    format.extension(),
                    output_path.display()
                );
            } else {
                print!("{}", rendered);
            }
        }
    }

    Ok(())
}
