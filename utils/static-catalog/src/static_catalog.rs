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

use crate::error::{read_json, StaticCatalogError};
use async_trait::async_trait;
use catalog_router::collaborators::{
    BindingDirectory, CategoryLookup, SpecificationLookup, TenantInfo, TranslationService,
};
use catalog_router::hierarchy::CategoryNode;
use catalog_router::translation::LabeledSegment;
use catalog_router::UpstreamError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CatalogFile {
    tenants: Vec<TenantInfo>,
    categories: Vec<CategoryNode>,
    specification_fields: HashMap<u64, String>,
    /// Target locale to source text to translated text.
    translations: HashMap<String, HashMap<String, String>>,
}

/// Catalog, tenant directory and translation dictionary loaded from one file.
///
/// Translation returns the source text for labels missing from the
/// dictionary, so an empty dictionary behaves as an identity translator.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    tenants: HashMap<String, TenantInfo>,
    categories: HashMap<String, CategoryNode>,
    fields: HashMap<u64, String>,
    translations: HashMap<String, HashMap<String, String>>,
}

impl StaticCatalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StaticCatalogError> {
        let path = path.as_ref();
        let file: CatalogFile = read_json(path)?;
        let catalog = Self::from(file);
        debug!(
            path = %path.display(),
            tenants = catalog.tenants.len(),
            categories = catalog.categories.len(),
            "loaded static catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<CatalogFile>(json).map(Self::from)
    }
}

impl From<CatalogFile> for StaticCatalog {
    fn from(file: CatalogFile) -> Self {
        Self {
            tenants: file
                .tenants
                .into_iter()
                .map(|tenant| (tenant.tenant.clone(), tenant))
                .collect(),
            categories: file
                .categories
                .into_iter()
                .map(|category| (category.id.clone(), category))
                .collect(),
            fields: file.specification_fields,
            translations: file.translations,
        }
    }
}

#[async_trait]
impl CategoryLookup for StaticCatalog {
    async fn category(&self, category_id: &str) -> Result<Option<CategoryNode>, UpstreamError> {
        Ok(self.categories.get(category_id).cloned())
    }
}

#[async_trait]
impl SpecificationLookup for StaticCatalog {
    async fn field_name(&self, field_id: u64) -> Result<Option<String>, UpstreamError> {
        Ok(self.fields.get(&field_id).cloned())
    }
}

#[async_trait]
impl BindingDirectory for StaticCatalog {
    async fn tenant(&self, tenant: &str) -> Result<TenantInfo, UpstreamError> {
        self.tenants
            .get(tenant)
            .cloned()
            .ok_or_else(|| UpstreamError::not_found(format!("unknown tenant '{tenant}'")))
    }
}

#[async_trait]
impl TranslationService for StaticCatalog {
    async fn translate_batch(
        &self,
        _source_locale: &str,
        target_locale: &str,
        segments: &[LabeledSegment],
    ) -> Result<Vec<String>, UpstreamError> {
        let dictionary = self.translations.get(target_locale);
        Ok(segments
            .iter()
            .map(|segment| {
                dictionary
                    .and_then(|entries| entries.get(&segment.text))
                    .cloned()
                    .unwrap_or_else(|| segment.text.clone())
            })
            .collect())
    }
}
