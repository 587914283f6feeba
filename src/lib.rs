// SPDX-License-Identifier: PMPL-1.0-or-later

//! slang — resolve language codes across standards.
//!
//! A language can be named by a BCP 47 tag (`zh-TW`), an ISO 639 code
//! (`zh`, `zho`, `cmn`) or a three-letter Windows language name (`CHT`).
//! This crate keeps a [`Catalog`] of known languages and finds the most
//! specific record for any of those spellings.
//!
//! ```
//! let catalog = slang::Catalog::new()?;
//! assert_eq!(catalog.resolve("zh_tw").unwrap().legacy_code, "CHT");
//! assert_eq!(catalog.resolve("eng").unwrap().locale_tag, "en");
//! assert!(catalog.resolve("klingon").is_none());
//! # Ok::<(), slang::CatalogError>(())
//! ```
//!
//! PARTS:
//! 1. **catalog**: the language table and custom additions.
//! 2. **resolve**: per-standard lookups and the combined `resolve`.
//! 3. **report** / **export**: output for command-line and foreign callers.

pub mod catalog;
pub mod error;
pub mod export;
pub mod fold;
pub mod report;
pub mod resolve;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, ParseErrorKind};
pub use export::{parse_lang_code, Outcome};
pub use types::{is_valid_legacy_code, Field, Language, Resolution, Standard};
