// SPDX-License-Identifier: PMPL-1.0-or-later

//! The in-memory language catalog.
//!
//! A catalog is parsed once from a nine-column CSV table and can then be
//! extended with caller-supplied records. Records are only ever appended,
//! never edited or removed, and lookups scan them in order (see
//! [`crate::resolve`]). The table has a few hundred rows, so a plain `Vec`
//! is all the indexing it needs.
//!
//! ## Table layout
//!
//! | # | Column      | Example         |
//! |---|-------------|-----------------|
//! | 0 | id          | `163`           |
//! | 1 | name        | `Chinese`       |
//! | 2 | location    | `Taiwan`        |
//! | 3 | lcid        | `0x0404`        |
//! | 4 | bcp47       | `zh-TW`         |
//! | 5 | win_id      | `CHT`           |
//! | 6 | iso639_1    | `zh`            |
//! | 7 | iso639_2    | `zho`           |
//! | 8 | iso639_3    | `cmn`           |
//!
//! A row whose id column is literally `id` is a header and is skipped.

use crate::error::{CatalogError, ParseErrorKind};
use crate::types::Language;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const EMBEDDED_TABLE: &str = include_str!("../data/langdb.csv");
const FIELD_COUNT: usize = 9;
const HEADER_SENTINEL: &str = "id";
const PLATFORM_ID_PREFIX_LEN: usize = 2;

/// Ordered, append-only collection of [`Language`] records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    data: Vec<Language>,
}

impl Catalog {
    /// Builds a catalog from the table embedded in the crate.
    pub fn new() -> Result<Self, CatalogError> {
        let catalog = Self::from_reader(EMBEDDED_TABLE.as_bytes())?;
        debug!(records = catalog.len(), "loaded embedded language table");
        Ok(catalog)
    }

    /// Builds a catalog from a CSV table on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        debug!(
            records = catalog.len(),
            path = %path.display(),
            "loaded language table"
        );
        Ok(catalog)
    }

    /// Builds a catalog from any CSV source.
    ///
    /// Fails on the first malformed row; no partial catalog is returned.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut data = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|err| CatalogError::Parse {
                line: err.position().map(|p| p.line()).unwrap_or(0),
                kind: ParseErrorKind::Malformed(err.to_string()),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            if row.len() != FIELD_COUNT {
                return Err(CatalogError::Parse {
                    line,
                    kind: ParseErrorKind::FieldCount { found: row.len() },
                });
            }
            if &row[0] == HEADER_SENTINEL {
                continue;
            }

            let platform_id =
                parse_platform_id(&row[3]).ok_or_else(|| CatalogError::Parse {
                    line,
                    kind: ParseErrorKind::PlatformId {
                        value: row[3].to_string(),
                    },
                })?;

            data.push(Language {
                name: row[1].to_string(),
                location: row[2].to_string(),
                platform_id,
                locale_tag: row[4].to_string(),
                legacy_code: row[5].to_string(),
                iso1: row[6].to_string(),
                iso2: row[7].to_string(),
                iso3: row[8].to_string(),
            });
        }

        Ok(Catalog { data })
    }

    /// Appends a caller-supplied record.
    ///
    /// Nothing is validated. Use the reserved legacy code `ZZZ` to keep a
    /// custom record out of legacy-code lookups.
    pub fn add_custom(&mut self, language: Language) -> &mut Self {
        debug!(tag = %language.locale_tag, name = %language.name, "adding custom language");
        self.data.push(language);
        self
    }

    /// Appends every record listed in a JSON or YAML file.
    ///
    /// The file holds a list of [`Language`] objects. Returns the number of
    /// records added; on error nothing is added.
    pub fn load_custom(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let path = path.as_ref();
        let languages: Vec<Language> = read_records(path)?;
        let count = languages.len();
        for language in languages {
            self.add_custom(language);
        }
        debug!(count, path = %path.display(), "loaded custom languages");
        Ok(count)
    }

    /// All records, built-in first, then custom ones in insertion order.
    pub fn records(&self) -> &[Language] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decodes `0x0409`-style ids: a two-character prefix, then hex digits.
fn parse_platform_id(raw: &str) -> Option<u32> {
    let digits = raw.get(PLATFORM_ID_PREFIX_LEN..)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let invalid = |reason: String| CatalogError::CustomRecords {
        path: path.to_path_buf(),
        reason,
    };

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| invalid(e.to_string())),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))
        }
        _ => Err(invalid(
            "unsupported file type (expected .json, .yaml or .yml)".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,name,location,lcid,bcp47,win_id,iso639_1,iso639_2,iso639_3\n";

    fn table(rows: &str) -> String {
        format!("{}{}", HEADER, rows)
    }

    #[test]
    fn embedded_table_loads() {
        let catalog = Catalog::new().expect("embedded table should parse");
        assert!(catalog.len() > 100);
        assert!(catalog.records().iter().any(|l| l.locale_tag == "en-US"));
    }

    #[test]
    fn rows_keep_file_order() {
        let csv = table(
            "1,English,,0x0009,en,ENU,en,eng,eng\n\
             2,English,United States,0x0409,en-US,ENU,en,eng,eng\n",
        );
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        let tags: Vec<&str> = catalog
            .records()
            .iter()
            .map(|l| l.locale_tag.as_str())
            .collect();
        assert_eq!(tags, vec!["en", "en-US"]);
        assert_eq!(catalog.records()[1].platform_id, 0x0409);
        assert_eq!(catalog.records()[1].location, "United States");
    }

    #[test]
    fn quoted_fields_may_contain_commas() {
        let csv = table("1,\"Chinese, Simplified\",,0x0004,zh-Hans,CHS,zh,zho,cmn\n");
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].name, "Chinese, Simplified");
    }

    #[test]
    fn short_row_rejected() {
        let csv = table("1,English,,0x0009,en,ENU,en,eng\n");
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        match err {
            CatalogError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, ParseErrorKind::FieldCount { found: 8 });
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn long_row_rejected() {
        let csv = table("1,English,,0x0009,en,ENU,en,eng,eng,extra\n");
        let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Parse {
                kind: ParseErrorKind::FieldCount { found: 10 },
                ..
            }
        ));
    }

    #[test]
    fn bad_hex_rejected() {
        for bad in ["0xZZ", "0x", "0", "", "0x+1", "0x100000000"] {
            let csv = table(&format!("1,English,,{},en,ENU,en,eng,eng\n", bad));
            let err = Catalog::from_reader(csv.as_bytes()).unwrap_err();
            assert!(
                matches!(
                    err,
                    CatalogError::Parse {
                        kind: ParseErrorKind::PlatformId { .. },
                        ..
                    }
                ),
                "{:?} should be rejected, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn any_two_char_prefix_accepted() {
        let csv = table("1,English,,##FFFFFFFF,en,ENU,en,eng,eng\n");
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.records()[0].platform_id, u32::MAX);
    }

    #[test]
    fn header_only_table_is_empty() {
        let catalog = Catalog::from_reader(HEADER.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn add_custom_chains() {
        let mut catalog = Catalog::default();
        let lang = Language {
            name: "Test".to_string(),
            location: String::new(),
            platform_id: 0,
            locale_tag: "x-test".to_string(),
            legacy_code: "ZZZ".to_string(),
            iso1: "xt".to_string(),
            iso2: "xts".to_string(),
            iso3: "xts".to_string(),
        };
        catalog.add_custom(lang.clone()).add_custom(lang);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn parse_platform_id_handles_prefix() {
        assert_eq!(parse_platform_id("0x0409"), Some(0x0409));
        assert_eq!(parse_platform_id("0X7c04"), Some(0x7C04));
        assert_eq!(parse_platform_id("0x"), None);
        assert_eq!(parse_platform_id("1é"), None);
    }
}
