// SPDX-License-Identifier: PMPL-1.0-or-later

//! One-call entry point for wrappers (command line, foreign callers).
//!
//! A wrapper passes one code string and gets back an [`Outcome`] plus the
//! tab-separated line from [`crate::report::tab_line`]. The line is empty
//! unless the outcome is [`Outcome::Success`].

use crate::catalog::Catalog;
use crate::report::tab_line;
use tracing::warn;

/// Result code handed back to wrappers. The numeric values are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Outcome {
    Success = 0x00,
    CatalogFailure = 0x01,
    NotFound = 0x02,
}

impl Outcome {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:02X}", self.code())
    }
}

/// Resolves `code` against a freshly built default catalog.
pub fn parse_lang_code(code: &str) -> (Outcome, String) {
    match Catalog::new() {
        Ok(catalog) => parse_with(&catalog, code),
        Err(err) => {
            warn!(error = %err, "language table failed to load");
            (Outcome::CatalogFailure, String::new())
        }
    }
}

/// Resolves `code` against an existing catalog.
pub fn parse_with(catalog: &Catalog, code: &str) -> (Outcome, String) {
    match catalog.resolve(code) {
        Some(language) => (Outcome::Success, tab_line(language)),
        None => (Outcome::NotFound, String::new()),
    }
}
