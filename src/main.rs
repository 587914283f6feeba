// SPDX-License-Identifier: PMPL-1.0-or-later

//! slang-parse: resolve one language code and print the matching record
//!
//! On success prints one tab-separated line (name, location, LCID, BCP 47
//! tag, Windows ID, ISO 639-1/2/3). On failure prints `Error: 0xNN` with the
//! outcome code and exits with status 1.

use anyhow::{Context, Result};
use clap::Parser;
use slang::report::OutputFormat;
use slang::{export, Catalog, Language, Outcome, Standard};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SLANG_LOG";

#[derive(Parser)]
#[command(name = "slang-parse")]
#[command(version)]
#[command(about = "Resolve a BCP 47 tag, ISO 639 code or Windows language ID")]
#[command(long_about = None)]
struct Cli {
    /// Language code to resolve (e.g. en-US, zh_Hant, eng, CHT)
    #[arg(value_name = "LANG_CODE")]
    code: String,

    /// Output format
    #[arg(short, long, value_enum, env = "SLANG_FORMAT", default_value = "tsv")]
    format: OutputFormat,

    /// Only look the code up in one standard
    #[arg(short, long, value_enum, default_value = "auto")]
    by: StandardArg,

    /// Print every match, best first, instead of only the best one
    #[arg(short, long)]
    all: bool,

    /// Language table to load instead of the built-in one
    #[arg(long, env = "SLANG_DB", value_name = "PATH")]
    db: Option<PathBuf>,

    /// JSON or YAML file of extra languages (repeatable)
    #[arg(short, long, value_name = "FILE")]
    custom: Vec<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

// CLI argument types
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum StandardArg {
    /// Locale tag, then ISO codes, then Windows ID
    Auto,
    Tag,
    /// ISO 639-3, falling back to 639-2, then 639-1
    Iso,
    Iso1,
    Iso2,
    Iso3,
    Legacy,
}

impl StandardArg {
    fn lookup<'a>(self, catalog: &'a Catalog, code: &str) -> (Option<Standard>, Vec<&'a Language>) {
        match self {
            StandardArg::Auto => match catalog.find_all(code) {
                Some((standard, found)) => (Some(standard), found),
                None => (None, Vec::new()),
            },
            StandardArg::Tag => (Some(Standard::LocaleTag), catalog.find_all_by_tag(code)),
            StandardArg::Iso => (Some(Standard::IsoCode), catalog.find_all_by_iso_code(code)),
            StandardArg::Iso1 => (Some(Standard::IsoCode), catalog.find_all_by_iso1(code)),
            StandardArg::Iso2 => (Some(Standard::IsoCode), catalog.find_all_by_iso2(code)),
            StandardArg::Iso3 => (Some(Standard::IsoCode), catalog.find_all_by_iso3(code)),
            StandardArg::Legacy => (
                Some(Standard::LegacyCode),
                catalog.find_all_by_legacy_code(code),
            ),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(outcome) => {
            println!("Error: {}", outcome);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let catalog = match load_catalog(cli) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("{:#}", err);
            return Ok(Outcome::CatalogFailure);
        }
    };

    if cli.by == StandardArg::Auto && cli.format == OutputFormat::Tsv && !cli.all {
        let (outcome, line) = export::parse_with(&catalog, &cli.code);
        if outcome.is_success() {
            println!("{}", line);
        }
        return Ok(outcome);
    }

    let (standard, found) = cli.by.lookup(&catalog, &cli.code);
    let Some(best) = found.first() else {
        return Ok(Outcome::NotFound);
    };

    let text = if cli.all {
        cli.format.render_all(&found, standard)?
    } else {
        cli.format.render(best, standard)?
    };
    println!("{}", text.trim_end());

    Ok(Outcome::Success)
}

fn load_catalog(cli: &Cli) -> Result<Catalog> {
    let mut catalog = match &cli.db {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("loading language table {}", path.display()))?,
        None => Catalog::new().context("loading built-in language table")?,
    };

    for path in &cli.custom {
        catalog
            .load_custom(path)
            .with_context(|| format!("loading custom languages from {}", path.display()))?;
    }

    Ok(catalog)
}
