// SPDX-License-Identifier: PMPL-1.0-or-later

//! Case folding shared by every lookup.
//!
//! All comparisons go through these helpers so tag segments, code fields
//! and the reserved legacy code fold the same way. Folding is Unicode
//! lower-casing; for the ASCII data in the language table it is plain
//! ASCII case-insensitivity.

/// Folds one character. Final sigma folds like sigma.
fn fold_char(c: char) -> impl Iterator<Item = char> {
    c.to_lowercase().map(|l| if l == 'ς' { 'σ' } else { l })
}

/// Lower-cases `value` one character at a time.
pub fn fold(value: &str) -> String {
    value.chars().flat_map(fold_char).collect()
}

/// Case-insensitive equality under [`fold`], without allocating.
pub fn eq_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(fold_char)
        .eq(b.chars().flat_map(fold_char))
}

/// Lower-cases a locale tag and turns `_` separators into `-`.
///
/// ```
/// assert_eq!(slang::fold::normalize_tag("BHO_Deva_IN"), "bho-deva-in");
/// ```
pub fn normalize_tag(tag: &str) -> String {
    fold(&tag.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_fold_ignores_case() {
        assert!(eq_fold("en-US", "EN-us"));
        assert!(eq_fold("", ""));
        assert!(!eq_fold("en", "en-"));
        assert!(!eq_fold("eng", "enu"));
    }

    #[test]
    fn eq_fold_agrees_with_fold() {
        for (a, b) in [
            ("Ärger", "äRGER"),
            ("zh-Hant", "ZH-HANT"),
            ("kli", "KLJ"),
            ("ΑΣ", "ας"),
            ("ΑΣ", "ασ"),
            ("ΟΔΟΣ-GR", "οδος-gr"),
        ] {
            assert_eq!(eq_fold(a, b), fold(a) == fold(b), "{} vs {}", a, b);
        }
    }

    #[test]
    fn final_sigma_folds_like_sigma() {
        assert_eq!(fold("ΑΣ"), "ασ");
        assert_eq!(fold("ας"), "ασ");
        assert!(eq_fold("ΑΣ", "ας"));
        assert_eq!(normalize_tag("ΟΔΟΣ_GR"), "οδοσ-gr");
    }

    #[test]
    fn normalize_tag_rewrites_separators() {
        assert_eq!(normalize_tag("Zh_tW"), "zh-tw");
        assert_eq!(normalize_tag("en-US"), "en-us");
        assert_eq!(normalize_tag("en_"), "en-");
    }
}
