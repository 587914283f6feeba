// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lookups over a [`Catalog`].
//!
//! Every lookup is a read-only linear scan and is case-insensitive. A miss
//! is an empty `Vec` or `None`, never an error.
//!
//! `resolve` tries the standards in this order:
//!
//! 1. BCP 47 locale tag (parents and children of the tag included)
//! 2. ISO 639 code, most specific set first (639-3, then 639-2, then 639-1)
//! 3. Three-letter Windows language name
//!
//! The first standard with any match wins; its best match is returned.

use crate::catalog::Catalog;
use crate::fold::{eq_fold, fold, normalize_tag};
use crate::types::{is_valid_legacy_code, Field, Language, Resolution, Standard};
use tracing::trace;

impl Catalog {
    /// All records matching a BCP 47 tag, best match first.
    ///
    /// `_` and `-` are both accepted as separators. The result lists exact
    /// and parent matches from the longest tag down, then every record whose
    /// tag extends the input, in catalog order.
    ///
    /// * `en-US` gives `[en-US, en]`, not `en-GB`.
    /// * `bho-Deva` gives `[bho-Deva, bho, bho-Deva-IN]`.
    /// * `be` gives `[be, be-BY]`, not `bem`.
    /// * `en-Invalid` gives `[en]`.
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Language> {
        let normalized = normalize_tag(tag);
        let segments: Vec<&str> = normalized.split('-').collect();
        let mut results = Vec::new();

        for keep in (1..=segments.len()).rev() {
            let candidate = segments[..keep].join("-");
            results.extend(
                self.records()
                    .iter()
                    .filter(|lang| eq_fold(&lang.locale_tag, &candidate)),
            );
        }

        let child_prefix = format!("{}-", normalized);
        results.extend(
            self.records()
                .iter()
                .filter(|lang| fold(&lang.locale_tag).starts_with(&child_prefix)),
        );

        results
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Language> {
        self.find_all_by_tag(tag).into_iter().next()
    }

    /// Records whose `field` equals `value`, shortest locale tag first.
    ///
    /// Tags of equal length are ordered lexicographically; records with the
    /// same tag stay in catalog order.
    pub fn select_by_field(&self, value: &str, field: Field) -> Vec<&Language> {
        let mut results: Vec<&Language> = self
            .records()
            .iter()
            .filter(|lang| eq_fold(field.value(lang), value))
            .collect();
        sort_by_tag(&mut results);
        results
    }

    /// Records with the given Windows language name.
    ///
    /// Empty for codes rejected by [`is_valid_legacy_code`], including `ZZZ`.
    pub fn find_all_by_legacy_code(&self, code: &str) -> Vec<&Language> {
        if !is_valid_legacy_code(code) {
            return Vec::new();
        }
        self.select_by_field(code, Field::LegacyCode)
    }

    pub fn find_by_legacy_code(&self, code: &str) -> Option<&Language> {
        self.find_all_by_legacy_code(code).into_iter().next()
    }

    pub fn find_all_by_iso1(&self, code: &str) -> Vec<&Language> {
        self.select_by_field(code, Field::Iso1)
    }

    pub fn find_by_iso1(&self, code: &str) -> Option<&Language> {
        self.find_all_by_iso1(code).into_iter().next()
    }

    pub fn find_all_by_iso2(&self, code: &str) -> Vec<&Language> {
        self.select_by_field(code, Field::Iso2)
    }

    pub fn find_by_iso2(&self, code: &str) -> Option<&Language> {
        self.find_all_by_iso2(code).into_iter().next()
    }

    pub fn find_all_by_iso3(&self, code: &str) -> Vec<&Language> {
        self.select_by_field(code, Field::Iso3)
    }

    pub fn find_by_iso3(&self, code: &str) -> Option<&Language> {
        self.find_all_by_iso3(code).into_iter().next()
    }

    /// Records matching an ISO 639 code of any set.
    ///
    /// Tries ISO 639-3, then 639-2, then 639-1, and returns the first
    /// non-empty result. Sets are never merged.
    pub fn find_all_by_iso_code(&self, code: &str) -> Vec<&Language> {
        [Field::Iso3, Field::Iso2, Field::Iso1]
            .into_iter()
            .map(|field| self.select_by_field(code, field))
            .find(|found| !found.is_empty())
            .unwrap_or_default()
    }

    pub fn find_by_iso_code(&self, code: &str) -> Option<&Language> {
        self.find_all_by_iso_code(code).into_iter().next()
    }

    /// All matches from the first standard that has any.
    ///
    /// Returns the standard together with its matches, or `None` when no
    /// standard knows `value`.
    pub fn find_all(&self, value: &str) -> Option<(Standard, Vec<&Language>)> {
        Standard::all().iter().find_map(|&standard| {
            let found = self.find_all_by_standard(value, standard);
            if found.is_empty() {
                None
            } else {
                trace!(value, %standard, matches = found.len(), "resolved");
                Some((standard, found))
            }
        })
    }

    pub fn find_all_by_standard(&self, value: &str, standard: Standard) -> Vec<&Language> {
        match standard {
            Standard::LocaleTag => self.find_all_by_tag(value),
            Standard::IsoCode => self.find_all_by_iso_code(value),
            Standard::LegacyCode => self.find_all_by_legacy_code(value),
        }
    }

    /// Best record for a code in any supported standard.
    pub fn resolve(&self, value: &str) -> Option<&Language> {
        self.resolve_detailed(value).map(|found| found.language)
    }

    /// Like [`Catalog::resolve`], also reporting which standard matched.
    pub fn resolve_detailed(&self, value: &str) -> Option<Resolution<'_>> {
        let (standard, found) = self.find_all(value)?;
        found
            .into_iter()
            .next()
            .map(|language| Resolution { language, standard })
    }
}

fn sort_by_tag(languages: &mut [&Language]) {
    languages.sort_by(|a, b| {
        a.locale_tag
            .len()
            .cmp(&b.locale_tag.len())
            .then_with(|| a.locale_tag.cmp(&b.locale_tag))
    });
}
