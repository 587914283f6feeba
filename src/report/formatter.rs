// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable view of a resolved language

use crate::types::{Language, Standard};
use colored::*;

pub struct LanguageFormatter {
    show_standard: Option<Standard>,
}

impl LanguageFormatter {
    pub fn new() -> Self {
        Self {
            show_standard: None,
        }
    }

    /// Also print which standard matched.
    pub fn with_standard(mut self, standard: Standard) -> Self {
        self.show_standard = Some(standard);
        self
    }

    pub fn format(&self, language: &Language) -> String {
        let mut lines = Vec::new();
        let title = if language.location.is_empty() {
            language.name.clone()
        } else {
            format!("{} ({})", language.name, language.location)
        };
        lines.push(format!("{}", title.bold().cyan()));
        lines.push(format!("  Locale tag:  {}", language.locale_tag));
        lines.push(format!("  LCID:        0x{:04X}", language.platform_id));

        let legacy = if language.has_valid_legacy_code() {
            language.legacy_code.normal()
        } else {
            format!("{} (reserved)", language.legacy_code).dimmed()
        };
        lines.push(format!("  Windows ID:  {}", legacy));
        lines.push(format!("  ISO 639-1:   {}", language.iso1));
        lines.push(format!("  ISO 639-2:   {}", language.iso2));
        lines.push(format!("  ISO 639-3:   {}", language.iso3));

        if let Some(standard) = self.show_standard {
            lines.push(format!("  Matched by:  {}", standard.as_str().yellow()));
        }
        lines.join("\n")
    }
}

impl Default for LanguageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
