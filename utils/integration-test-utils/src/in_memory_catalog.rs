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

use async_trait::async_trait;
use catalog_router::collaborators::{
    BindingDirectory, CategoryLookup, LocaleBinding, RouteDefinition, SpecificationLookup,
    TemplateStore, TenantInfo,
};
use catalog_router::hierarchy::CategoryNode;
use catalog_router::records::PageType;
use catalog_router::UpstreamError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Route patterns used by the storefront theme in tests.
pub fn default_route_definitions() -> HashMap<String, RouteDefinition> {
    [
        (PageType::Department, "/:department"),
        (PageType::Category, "/:department/:category"),
        (
            PageType::Subcategory,
            "/:department/:category/:subcategory(/:terms)",
        ),
        (PageType::Brand, "/:brand/b"),
        (PageType::Product, "/:slug/p"),
    ]
    .into_iter()
    .map(|(page_type, canonical)| {
        (
            page_type.to_string(),
            RouteDefinition {
                canonical: canonical.to_string(),
                internal: None,
            },
        )
    })
    .collect()
}

/// Categories, specification fields and one tenant, all held in memory.
pub struct InMemoryCatalog {
    categories: HashMap<String, CategoryNode>,
    fields: HashMap<u64, String>,
    tenant: TenantInfo,
    category_lookups: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new(tenant: &str, default_locale: &str) -> Self {
        Self {
            categories: HashMap::new(),
            fields: HashMap::new(),
            tenant: TenantInfo {
                tenant: tenant.to_string(),
                default_locale: default_locale.to_string(),
                bindings: Vec::new(),
            },
            category_lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_category(mut self, id: &str, name: &str, parent_id: Option<&str>) -> Self {
        self.categories
            .insert(id.to_string(), CategoryNode::new(id, name, parent_id));
        self
    }

    pub fn with_binding(mut self, binding_id: &str, locale: &str) -> Self {
        self.tenant
            .bindings
            .push(LocaleBinding::new(binding_id, locale));
        self
    }

    pub fn with_field(mut self, field_id: u64, name: &str) -> Self {
        self.fields.insert(field_id, name.to_string());
        self
    }

    pub fn category_lookups(&self) -> usize {
        self.category_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryLookup for InMemoryCatalog {
    async fn category(&self, category_id: &str) -> Result<Option<CategoryNode>, UpstreamError> {
        self.category_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.get(category_id).cloned())
    }
}

#[async_trait]
impl SpecificationLookup for InMemoryCatalog {
    async fn field_name(&self, field_id: u64) -> Result<Option<String>, UpstreamError> {
        Ok(self.fields.get(&field_id).cloned())
    }
}

#[async_trait]
impl BindingDirectory for InMemoryCatalog {
    async fn tenant(&self, tenant: &str) -> Result<TenantInfo, UpstreamError> {
        if tenant != self.tenant.tenant {
            return Err(UpstreamError::not_found(format!("unknown tenant '{tenant}'")));
        }
        Ok(self.tenant.clone())
    }
}

/// Template store over a fixed page-type map.
pub struct InMemoryTemplates {
    definitions: HashMap<String, RouteDefinition>,
}

impl InMemoryTemplates {
    pub fn new(definitions: HashMap<String, RouteDefinition>) -> Self {
        Self { definitions }
    }

    pub fn without(mut self, page_type: PageType) -> Self {
        self.definitions.remove(page_type.as_str());
        self
    }
}

impl Default for InMemoryTemplates {
    fn default() -> Self {
        Self::new(default_route_definitions())
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplates {
    async fn route_definition(
        &self,
        page_type: &str,
    ) -> Result<Option<RouteDefinition>, UpstreamError> {
        Ok(self.definitions.get(page_type).cloned())
    }
}
