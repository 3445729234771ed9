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

//! Event-facing facade wiring resolvers, translator and registration.

use crate::canonical::{CanonicalEnrichmentDecoder, CanonicalSearchUrl};
use crate::collaborators::{
    BindingDirectory, CanonicalSink, CategoryLookup, RoutingService, SpecificationLookup,
    TemplateStore, TranslationService, UrlIndex,
};
use crate::config::EngineConfig;
use crate::engine::binding_fanout::BindingFanout;
use crate::engine::{BrandEvent, CategoryEvent, EventOutcome, ProductEvent};
use crate::error::RouteError;
use crate::hierarchy::HierarchyResolver;
use crate::observability::{events, fields};
use crate::records::{InternalRecordBuilder, InternalRouteRecord, PageType};
use crate::slug::slugify;
use crate::template::{RouteParams, TemplateResolver};
use crate::translation::{LabeledSegment, MultiLocaleTranslator};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "route_engine";
const PRODUCT_SLUG_PARAM: &str = "slug";
const BRAND_PARAM: &str = "brand";

/// Services the engine consumes.
///
/// `url_index` and `canonical_sink` are optional; without them the matching
/// side effects are skipped.
#[derive(Clone)]
pub struct EngineCollaborators {
    pub categories: Arc<dyn CategoryLookup>,
    pub templates: Arc<dyn TemplateStore>,
    pub translations: Arc<dyn TranslationService>,
    pub specifications: Arc<dyn SpecificationLookup>,
    pub routing: Arc<dyn RoutingService>,
    pub bindings: Arc<dyn BindingDirectory>,
    pub url_index: Option<Arc<dyn UrlIndex>>,
    pub canonical_sink: Option<Arc<dyn CanonicalSink>>,
}

/// Computes and registers catalog routes for one tenant.
///
/// Every event is processed from scratch; the only state shared between events
/// are the translator's and decoder's permit pools. The `resolve_*` methods return errors to the
/// caller, the `on_*` handlers log them and never fail.
#[derive(Clone)]
pub struct RouteEngine {
    tenant: String,
    binding_concurrency: usize,
    decode_concurrency: usize,
    bindings: Arc<dyn BindingDirectory>,
    routing: Arc<dyn RoutingService>,
    url_index: Option<Arc<dyn UrlIndex>>,
    canonical_sink: Option<Arc<dyn CanonicalSink>>,
    templates: TemplateResolver,
    hierarchy: HierarchyResolver,
    translator: MultiLocaleTranslator,
    decoder: CanonicalEnrichmentDecoder,
    records: InternalRecordBuilder,
}

impl RouteEngine {
    pub fn new(
        tenant: impl Into<String>,
        config: &EngineConfig,
        collaborators: EngineCollaborators,
    ) -> Self {
        let tenant = tenant.into();
        debug!(
            component = COMPONENT,
            tenant = tenant.as_str(),
            declarer = config.declarer.as_str(),
            origin = config.origin.as_str(),
            "route engine created"
        );

        Self {
            tenant,
            binding_concurrency: config.binding_concurrency.max(1),
            decode_concurrency: config.decode_concurrency.max(1),
            bindings: collaborators.bindings,
            routing: collaborators.routing,
            url_index: collaborators.url_index,
            canonical_sink: collaborators.canonical_sink,
            templates: TemplateResolver::new(collaborators.templates),
            hierarchy: HierarchyResolver::new(
                collaborators.categories,
                config.max_hierarchy_depth,
            ),
            translator: MultiLocaleTranslator::new(
                collaborators.translations,
                config.translation.clone(),
            ),
            decoder: CanonicalEnrichmentDecoder::new(
                collaborators.specifications,
                config.decode_concurrency,
            ),
            records: InternalRecordBuilder::new(config.declarer.as_str(), config.origin.as_str()),
        }
    }

    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Registers one record per store binding for a changed category.
    ///
    /// Returns the registered records in binding order. Bindings whose
    /// translation or rendering fails are left out; a tenant without bindings
    /// registers nothing.
    pub async fn resolve_category(
        &self,
        event: &CategoryEvent,
    ) -> Result<Vec<InternalRouteRecord>, RouteError> {
        let tenant = self
            .bindings
            .tenant(&self.tenant)
            .await
            .map_err(|err| RouteError::lookup("binding directory", self.tenant.as_str(), err))?;
        if tenant.bindings.is_empty() {
            info!(
                event = events::BINDING_SET_EMPTY,
                component = COMPONENT,
                tenant = self.tenant.as_str(),
                entity_id = event.id.as_str(),
                "tenant has no store bindings; no category routes produced"
            );
            return Ok(Vec::new());
        }

        let levels = self.hierarchy.resolve(&event.node()).await?;
        let Some(leaf) = levels.last() else {
            return Ok(Vec::new());
        };
        let template = self.templates.resolve(leaf.kind.page_type()).await?;
        let tenant_path = template.render(&leaf.params.to_route_params())?;
        let labels: Vec<LabeledSegment> = levels
            .iter()
            .map(|level| LabeledSegment::new(level.name.as_str(), level.id.as_str()))
            .collect();

        let fanout = BindingFanout {
            translator: &self.translator,
            records: &self.records,
            template: &template,
            leaf,
            labels: &labels,
            tenant_locale: &tenant.default_locale,
            tenant_path: &tenant_path,
            is_active: event.is_active,
        };
        let outcomes = fanout.run(&tenant.bindings, self.binding_concurrency).await;

        let mut records = Vec::with_capacity(outcomes.len());
        let mut skipped = Vec::new();
        for outcome in outcomes {
            match outcome.result {
                Ok(record) => records.push(record),
                Err(_) => skipped.push(outcome.binding),
            }
        }
        if !skipped.is_empty() {
            warn!(
                event = events::BINDING_SET_PARTIAL,
                component = COMPONENT,
                entity_id = event.id.as_str(),
                skipped = fields::format_bindings(&skipped),
                registered = records.len(),
                "some bindings produced no route"
            );
        }
        if records.is_empty() {
            return Ok(records);
        }

        self.register(&event.id, &records, true).await?;
        self.index_url(&event.id, &tenant_path).await;
        Ok(records)
    }

    /// Registers the product route, or its not-found route when inactive.
    pub async fn resolve_product(
        &self,
        event: &ProductEvent,
    ) -> Result<Vec<InternalRouteRecord>, RouteError> {
        let slug = match &event.link_id {
            Some(link_id) => link_id.to_lowercase(),
            None => slugify(&event.name),
        };
        let template = self.templates.resolve(PageType::Product).await?;
        let path = template.render(&RouteParams::from([(PRODUCT_SLUG_PARAM.to_string(), slug)]))?;

        let records = vec![self.records.product(&event.id, event.is_active, path)];
        self.register(&event.id, &records, false).await?;
        Ok(records)
    }

    /// Registers the brand search route, or a search not-found route when inactive.
    pub async fn resolve_brand(
        &self,
        event: &BrandEvent,
    ) -> Result<Vec<InternalRouteRecord>, RouteError> {
        let template = self.templates.resolve(PageType::Brand).await?;
        let path = template.render(&RouteParams::from([(
            BRAND_PARAM.to_string(),
            slugify(&event.name),
        )]))?;

        let records = vec![self.records.brand(&event.id, event.is_active, path.clone())];
        self.register(&event.id, &records, false).await?;
        self.index_url(&event.id, &path).await;
        Ok(records)
    }

    pub async fn on_category_event(&self, event: &CategoryEvent) -> EventOutcome {
        let result = self.resolve_category(event).await;
        self.finish(fields::ENTITY_CATEGORY, &event.id, result)
    }

    pub async fn on_product_event(&self, event: &ProductEvent) -> EventOutcome {
        let result = self.resolve_product(event).await;
        self.finish(fields::ENTITY_PRODUCT, &event.id, result)
    }

    pub async fn on_brand_event(&self, event: &BrandEvent) -> EventOutcome {
        let result = self.resolve_brand(event).await;
        self.finish(fields::ENTITY_BRAND, &event.id, result)
    }

    /// Canonicalizes a batch of search URLs in place.
    ///
    /// At most `decode_concurrency` URLs are decoded at a time. A URL that
    /// fails keeps `canonical_path` unset without affecting the others. URLs
    /// that got a canonical path are handed to the canonical sink.
    pub async fn on_search_urls(&self, urls: &mut [CanonicalSearchUrl]) -> EventOutcome {
        let results: Vec<Result<(), RouteError>> = stream::iter(urls.iter_mut())
            .map(|url| self.decoder.canonicalize(url))
            .buffered(self.decode_concurrency)
            .collect()
            .await;
        let failed = results.iter().filter(|result| result.is_err()).count();

        let canonicalized: Vec<CanonicalSearchUrl> = urls
            .iter()
            .filter(|url| url.canonical_path.is_some())
            .cloned()
            .collect();

        let sink = self
            .canonical_sink
            .as_ref()
            .filter(|_| !canonicalized.is_empty());
        if let Some(sink) = sink {
            if let Err(err) = sink.index(&canonicalized).await {
                error!(
                    event = events::CANONICAL_SINK_FAILED,
                    component = COMPONENT,
                    entity_kind = fields::ENTITY_SEARCH,
                    urls = canonicalized.len(),
                    err = %err,
                    "canonical sink rejected search urls"
                );
                return EventOutcome::Dropped {
                    reason: "canonical_sink_failed",
                };
            }
        }

        info!(
            event = events::EVENT_PROCESSED,
            component = COMPONENT,
            entity_kind = fields::ENTITY_SEARCH,
            canonicalized = canonicalized.len(),
            failed,
            "search urls processed"
        );
        EventOutcome::Canonicalized {
            canonicalized: canonicalized.len(),
            failed,
        }
    }

    /// `batched` sends every record in one `upsert_many` call, even a single one.
    async fn register(
        &self,
        entity_id: &str,
        records: &[InternalRouteRecord],
        batched: bool,
    ) -> Result<(), RouteError> {
        debug!(
            event = events::ROUTES_REGISTER_START,
            component = COMPONENT,
            entity_id,
            records = records.len(),
            "registering routes"
        );

        let result = match records {
            [record] if !batched => self.routing.upsert(record.clone()).await,
            _ => self.routing.upsert_many(records.to_vec()).await,
        };
        match result {
            Ok(()) => {
                debug!(
                    event = events::ROUTES_REGISTER_OK,
                    component = COMPONENT,
                    entity_id,
                    records = records.len(),
                    "routes registered"
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    event = events::ROUTES_REGISTER_FAILED,
                    component = COMPONENT,
                    entity_id,
                    records = records.len(),
                    err = %err,
                    "routing service rejected routes"
                );
                Err(RouteError::Registration(err))
            }
        }
    }

    async fn index_url(&self, entity_id: &str, path: &str) {
        let Some(index) = &self.url_index else {
            return;
        };
        if let Err(err) = index.save(entity_id, path).await {
            warn!(
                event = events::URL_INDEX_SAVE_FAILED,
                component = COMPONENT,
                entity_id,
                path,
                err = %err,
                "url index write failed; registration kept"
            );
        }
    }

    fn finish(
        &self,
        entity_kind: &'static str,
        entity_id: &str,
        result: Result<Vec<InternalRouteRecord>, RouteError>,
    ) -> EventOutcome {
        match result {
            Ok(records) if records.is_empty() => EventOutcome::NothingToRegister,
            Ok(records) => {
                info!(
                    event = events::EVENT_PROCESSED,
                    component = COMPONENT,
                    entity_kind,
                    entity_id,
                    records = records.len(),
                    "catalog event processed"
                );
                EventOutcome::Registered {
                    records: records.len(),
                }
            }
            Err(err) => {
                error!(
                    event = events::EVENT_DROPPED,
                    component = COMPONENT,
                    entity_kind,
                    entity_id,
                    tenant = self.tenant.as_str(),
                    reason = err.reason(),
                    err = %err,
                    "catalog event dropped"
                );
                EventOutcome::Dropped {
                    reason: err.reason(),
                }
            }
        }
    }
}
