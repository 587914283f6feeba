// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of resolved languages

pub mod formatter;
pub mod output;

use crate::types::Language;

pub use formatter::LanguageFormatter;
pub use output::OutputFormat;

/// The tab-separated line printed by `slang-parse`.
///
/// Fields: name, location, platform id (`0x%04X`), locale tag, legacy
/// code, ISO 639-1, ISO 639-2, ISO 639-3. This layout is relied on by
/// scripts and must not change.
pub fn tab_line(language: &Language) -> String {
    let platform_id = format!("0x{:04X}", language.platform_id);
    [
        language.name.as_str(),
        language.location.as_str(),
        platform_id.as_str(),
        language.locale_tag.as_str(),
        language.legacy_code.as_str(),
        language.iso1.as_str(),
        language.iso2.as_str(),
        language.iso3.as_str(),
    ]
    .join("\t")
}
