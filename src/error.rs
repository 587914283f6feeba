// SPDX-License-Identifier: PMPL-1.0-or-later

//! Errors raised while building a [`Catalog`](crate::Catalog).
//!
//! Lookups never fail; only construction and custom-record loading do.

use std::path::PathBuf;
use thiserror::Error;

/// Why a language table could not be turned into a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A table row could not be parsed. The whole table is rejected.
    #[error("language table line {line}: {kind}")]
    Parse { line: u64, kind: ParseErrorKind },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("custom languages in {}: {reason}", path.display())]
    CustomRecords { path: PathBuf, reason: String },
}

impl CatalogError {
    pub fn is_parse(&self) -> bool {
        matches!(self, CatalogError::Parse { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected 9 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid platform id {value:?}")]
    PlatformId { value: String },

    #[error("{0}")]
    Malformed(String),
}
