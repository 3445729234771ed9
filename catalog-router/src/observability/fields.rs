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

//! Canonical structured field keys and value-format helpers.

use crate::collaborators::LocaleBinding;

pub const EVENT: &str = "event";
pub const COMPONENT: &str = "component";
pub const ENTITY_ID: &str = "entity_id";
pub const ENTITY_KIND: &str = "entity_kind";
pub const PAGE_TYPE: &str = "page_type";

pub const TENANT: &str = "tenant";
pub const BINDING_ID: &str = "binding_id";
pub const BINDINGS: &str = "bindings";
pub const LOCALE: &str = "locale";
pub const SOURCE_LOCALE: &str = "source_locale";
pub const TARGET_LOCALE: &str = "target_locale";

pub const PATH: &str = "path";
pub const ENCODING: &str = "encoding";
pub const RECORDS: &str = "records";
pub const ATTEMPT: &str = "attempt";
pub const REASON: &str = "reason";
pub const ERR: &str = "err";

pub const NONE: &str = "none";
pub const ENTITY_CATEGORY: &str = "category";
pub const ENTITY_PRODUCT: &str = "product";
pub const ENTITY_BRAND: &str = "brand";
pub const ENTITY_SEARCH: &str = "search";

pub fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or(NONE)
}

/// Compact `binding@locale` list for a binding set.
pub fn format_bindings(bindings: &[LocaleBinding]) -> String {
    if bindings.is_empty() {
        return NONE.to_string();
    }
    bindings
        .iter()
        .map(|binding| format!("{}@{}", binding.binding_id, binding.locale))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::{format_bindings, or_none, NONE};
    use crate::collaborators::LocaleBinding;

    #[test]
    fn format_bindings_lists_binding_and_locale() {
        let bindings = [
            LocaleBinding::new("b-en", "en-US"),
            LocaleBinding::new("b-es", "es-ES"),
        ];

        assert_eq!(format_bindings(&bindings), "b-en@en-US,b-es@es-ES");
        assert_eq!(format_bindings(&[]), NONE);
    }

    #[test]
    fn or_none_falls_back_for_missing_values() {
        assert_eq!(or_none(Some("/home")), "/home");
        assert_eq!(or_none(None), NONE);
    }
}
