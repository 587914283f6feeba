// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core record types shared by the catalog and the resolver.

use crate::fold::eq_fold;
use serde::{Deserialize, Serialize};

/// Legacy code reserved for "unknown" entries. Never a match target.
pub const RESERVED_LEGACY_CODE: &str = "ZZZ";

/// One entry of the language table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Language {
    /// Display name, e.g. `Chinese (Traditional)`.
    pub name: String,

    /// Region or usage note. Empty for the neutral entry of a language.
    #[serde(default)]
    pub location: String,

    /// Windows LCID. Not unique; `0` is fine for custom entries.
    #[serde(default)]
    pub platform_id: u32,

    /// BCP 47 tag, e.g. `zh-TW`.
    pub locale_tag: String,

    /// Three-letter Windows language name, e.g. `CHT`.
    ///
    /// Any string is accepted here; see [`is_valid_legacy_code`] for what
    /// takes part in lookups.
    pub legacy_code: String,

    /// ISO 639-1 code. Repeats `iso2` when no two-letter code exists.
    pub iso1: String,

    /// ISO 639-2 code.
    pub iso2: String,

    /// ISO 639-3 code. Differs from `iso2` for members of a macrolanguage.
    pub iso3: String,
}

impl Language {
    /// Whether this entry's legacy code can be looked up.
    pub fn has_valid_legacy_code(&self) -> bool {
        is_valid_legacy_code(&self.legacy_code)
    }
}

/// Checks that `code` is three ASCII letters and not the reserved `ZZZ`.
///
/// # Examples
/// ```
/// assert!(slang::is_valid_legacy_code("CHS"));
/// assert!(slang::is_valid_legacy_code("enu"));
/// assert!(!slang::is_valid_legacy_code("zzz"));
/// assert!(!slang::is_valid_legacy_code("EN1"));
/// ```
pub fn is_valid_legacy_code(code: &str) -> bool {
    code.len() == 3
        && code.bytes().all(|b| b.is_ascii_alphabetic())
        && !eq_fold(code, RESERVED_LEGACY_CODE)
}

/// Record field that [`Catalog::select_by_field`](crate::Catalog::select_by_field)
/// compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    LegacyCode,
    Iso1,
    Iso2,
    Iso3,
}

impl Field {
    pub fn value(self, language: &Language) -> &str {
        match self {
            Field::LegacyCode => &language.legacy_code,
            Field::Iso1 => &language.iso1,
            Field::Iso2 => &language.iso2,
            Field::Iso3 => &language.iso3,
        }
    }
}

/// The identifier standard that produced a match in
/// [`Catalog::resolve_detailed`](crate::Catalog::resolve_detailed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standard {
    LocaleTag,
    IsoCode,
    LegacyCode,
}

impl Standard {
    /// Resolution order used by [`Catalog::resolve`](crate::Catalog::resolve).
    pub fn all() -> &'static [Standard] {
        &[Standard::LocaleTag, Standard::IsoCode, Standard::LegacyCode]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Standard::LocaleTag => "locale_tag",
            Standard::IsoCode => "iso_code",
            Standard::LegacyCode => "legacy_code",
        }
    }
}

impl std::fmt::Display for Standard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved record together with the standard that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub language: &'a Language,
    pub standard: Standard,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn klingon() -> Language {
        Language {
            name: "Klingon".to_string(),
            location: "Star Trek Universe".to_string(),
            platform_id: 0,
            locale_tag: "kg-SU".to_string(),
            legacy_code: "KLI".to_string(),
            iso1: "kg".to_string(),
            iso2: "tlh".to_string(),
            iso3: "tlh".to_string(),
        }
    }

    #[test]
    fn valid_legacy_codes_accepted() {
        assert!(is_valid_legacy_code("ENU"));
        assert!(is_valid_legacy_code("chs"));
        assert!(is_valid_legacy_code("ZzA"));
    }

    #[test]
    fn invalid_legacy_codes_rejected() {
        assert!(!is_valid_legacy_code(""));
        assert!(!is_valid_legacy_code("EN"));
        assert!(!is_valid_legacy_code("ENUS"));
        assert!(!is_valid_legacy_code("000"));
        assert!(!is_valid_legacy_code("_+#"));
        assert!(!is_valid_legacy_code("ZZZ"));
        assert!(!is_valid_legacy_code("zZz"));
        // three chars, but not three bytes
        assert!(!is_valid_legacy_code("ÉNU"));
    }

    #[test]
    fn record_validity_follows_its_code() {
        let mut lang = klingon();
        assert!(lang.has_valid_legacy_code());
        lang.legacy_code = "zzz".to_string();
        assert!(!lang.has_valid_legacy_code());
    }

    #[test]
    fn field_selects_matching_column() {
        let lang = klingon();
        assert_eq!(Field::LegacyCode.value(&lang), "KLI");
        assert_eq!(Field::Iso1.value(&lang), "kg");
        assert_eq!(Field::Iso2.value(&lang), "tlh");
        assert_eq!(Field::Iso3.value(&lang), "tlh");
    }

    #[test]
    fn custom_record_defaults_from_json() {
        let json = r#"{
            "name": "Klingon",
            "locale_tag": "kg-SU",
            "legacy_code": "KLI",
            "iso1": "kg",
            "iso2": "tlh",
            "iso3": "tlh"
        }"#;
        let lang: Language = serde_json::from_str(json).expect("should decode");
        assert_eq!(lang.location, "");
        assert_eq!(lang.platform_id, 0);
        assert_eq!(lang.locale_tag, "kg-SU");
    }
}
