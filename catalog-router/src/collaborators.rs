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

//! Narrow interfaces to the services the engine consumes.
//!
//! Transports, caching and authentication for these services live outside this
//! crate. Implementations are shared as `Arc<dyn ...>` and must tolerate being
//! called concurrently from several in-flight events.

use crate::canonical::CanonicalSearchUrl;
use crate::error::UpstreamError;
use crate::hierarchy::CategoryNode;
use crate::records::InternalRouteRecord;
use crate::translation::LabeledSegment;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Storefront configuration that needs its own localized routes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleBinding {
    pub binding_id: String,
    pub locale: String,
}

impl LocaleBinding {
    pub fn new(binding_id: &str, locale: &str) -> Self {
        Self {
            binding_id: binding_id.to_string(),
            locale: locale.to_string(),
        }
    }
}

/// Tenant-level locale and the bindings routes are produced for.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantInfo {
    pub tenant: String,
    pub default_locale: String,
    #[serde(default)]
    pub bindings: Vec<LocaleBinding>,
}

/// Raw route patterns registered for one page type.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RouteDefinition {
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal: Option<String>,
}

/// Fetches category nodes, used to climb from a child to its parent.
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    async fn category(&self, category_id: &str) -> Result<Option<CategoryNode>, UpstreamError>;
}

/// Page-type to route-pattern storage.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn route_definition(
        &self,
        page_type: &str,
    ) -> Result<Option<RouteDefinition>, UpstreamError>;
}

/// Batch translation of labels between two locales.
///
/// Implementations must return exactly one text per input segment, in input order.
#[async_trait]
pub trait TranslationService: Send + Sync {
    async fn translate_batch(
        &self,
        source_locale: &str,
        target_locale: &str,
        segments: &[LabeledSegment],
    ) -> Result<Vec<String>, UpstreamError>;
}

/// Display names of catalog specification fields.
#[async_trait]
pub trait SpecificationLookup: Send + Sync {
    async fn field_name(&self, field_id: u64) -> Result<Option<String>, UpstreamError>;
}

/// Remote route registry. Upserts are idempotent by `(binding, id, type)`.
#[async_trait]
pub trait RoutingService: Send + Sync {
    async fn upsert(&self, record: InternalRouteRecord) -> Result<(), UpstreamError>;

    async fn upsert_many(&self, records: Vec<InternalRouteRecord>) -> Result<(), UpstreamError>;
}

/// Tenant and store-binding directory.
#[async_trait]
pub trait BindingDirectory: Send + Sync {
    async fn tenant(&self, tenant: &str) -> Result<TenantInfo, UpstreamError>;
}

/// Entity id to tenant path index kept alongside the routing service.
#[async_trait]
pub trait UrlIndex: Send + Sync {
    async fn save(&self, entity_id: &str, path: &str) -> Result<(), UpstreamError>;
}

/// Receives search URLs once their canonical path is known.
#[async_trait]
pub trait CanonicalSink: Send + Sync {
    async fn index(&self, urls: &[CanonicalSearchUrl]) -> Result<(), UpstreamError>;
}
