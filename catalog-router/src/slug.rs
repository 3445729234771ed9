/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! URL slug normalization.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

const SEPARATOR: char = '-';

/// Turns a display label into a URL-safe slug.
///
/// The label is lower-cased, decomposed so diacritics can be dropped, and every
/// run of non-alphanumeric characters becomes a single `-`. Leading and trailing
/// separators are trimmed. The casing rule does not depend on any locale, so the
/// same input always yields the same slug, and `slugify(slugify(x)) == slugify(x)`.
///
/// ```
/// use catalog_router::slugify;
///
/// assert_eq!(slugify("Café Société"), "cafe-societe");
/// assert_eq!(slugify("  TVs & Home-Theater "), "tvs-home-theater");
/// ```
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_separator = false;

    for ch in label.to_lowercase().nfd().filter(|ch| !is_combining_mark(*ch)) {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn strips_diacritics_and_whitespace() {
        assert_eq!(slugify("Café Société"), "cafe-societe");
        assert_eq!(slugify("Eletrônicos"), "eletronicos");
        assert_eq!(slugify("Niño Pequeño"), "nino-pequeno");
    }

    #[test]
    fn collapses_symbol_runs_and_trims_edges() {
        assert_eq!(slugify("--Bed, Bath & Beyond!!"), "bed-bath-beyond");
        assert_eq!(slugify("a   b\t\nc"), "a-b-c");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for label in [
            "Café Société",
            "ÀÉÎÕÜ ç",
            "Smart-TV 4K / 8K",
            "Ünïcödé__Lâbel",
            "already-a-slug",
            "",
        ] {
            let once = slugify(label);
            assert_eq!(slugify(&once), once, "slug of '{label}' is not stable");
        }
    }

    #[test]
    fn keeps_non_latin_letters_and_digits() {
        assert_eq!(slugify("Размер 42"), "размер-42");
        assert_eq!(slugify("Größe"), "große");
    }
}
