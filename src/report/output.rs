// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed languages

use crate::report::formatter::LanguageFormatter;
use crate::report::tab_line;
use crate::types::{Language, Standard};
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated fields, one language per line.
    #[default]
    Tsv,
    Json,
    Yaml,
    Pretty,
}

impl OutputFormat {
    /// Renders the single best match.
    pub fn render(&self, language: &Language, standard: Option<Standard>) -> Result<String> {
        match self {
            OutputFormat::Tsv => Ok(tab_line(language)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(language)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(language)?),
            OutputFormat::Pretty => Ok(pretty(language, standard)),
        }
    }

    /// Renders every match, best first.
    pub fn render_all(&self, languages: &[&Language], standard: Option<Standard>) -> Result<String> {
        match self {
            OutputFormat::Tsv => Ok(languages
                .iter()
                .map(|lang| tab_line(lang))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(languages)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(languages)?),
            OutputFormat::Pretty => Ok(languages
                .iter()
                .map(|lang| pretty(lang, standard))
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }
}

fn pretty(language: &Language, standard: Option<Standard>) -> String {
    let formatter = LanguageFormatter::new();
    match standard {
        Some(standard) => formatter.with_standard(standard).format(language),
        None => formatter.format(language),
    }
}
