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

//! # catalog-router
//!
//! `catalog-router` turns catalog change notifications into canonical,
//! locale-specific storefront routes and registers them with a routing service.
//! It also rewrites faceted search URLs into descriptive canonical paths.
//!
//! Typical usage is centered on [`RouteEngine`]: build it once per tenant with
//! the services it consumes (see [`collaborators`]) and feed it events.
//!
//! ## Slugs
//!
//! Every path segment the engine produces goes through [`slugify`]:
//!
//! ```
//! use catalog_router::slugify;
//!
//! assert_eq!(slugify("Café Société"), "cafe-societe");
//! assert_eq!(slugify(&slugify("  Home & Garden ")), "home-garden");
//! ```
//!
//! ## Category routes
//!
//! A category event is resolved into its ancestor chain, rendered once with the
//! tenant's labels (the route every binding resolves as) and once per store
//! binding with labels translated into the binding's locale.
//!
//! ```
//! use async_trait::async_trait;
//! use catalog_router::collaborators::{
//!     BindingDirectory, CategoryLookup, LocaleBinding, RouteDefinition, RoutingService,
//!     SpecificationLookup, TemplateStore, TenantInfo, TranslationService,
//! };
//! use catalog_router::hierarchy::CategoryNode;
//! use catalog_router::records::InternalRouteRecord;
//! use catalog_router::translation::LabeledSegment;
//! use catalog_router::{
//!     CategoryEvent, EngineCollaborators, EngineConfig, EventOutcome, RouteEngine,
//!     UpstreamError,
//! };
//! use std::sync::Arc;
//!
//! # struct Catalog;
//! #
//! # #[async_trait]
//! # impl CategoryLookup for Catalog {
//! #     async fn category(&self, id: &str) -> Result<Option<CategoryNode>, UpstreamError> {
//! #         Ok((id == "1").then(|| CategoryNode::new("1", "Home", None)))
//! #     }
//! # }
//! #
//! # #[async_trait]
//! # impl TemplateStore for Catalog {
//! #     async fn route_definition(
//! #         &self,
//! #         _page_type: &str,
//! #     ) -> Result<Option<RouteDefinition>, UpstreamError> {
//! #         Ok(Some(RouteDefinition {
//! #             canonical: "/:department/:category".to_string(),
//! #             internal: None,
//! #         }))
//! #     }
//! # }
//! #
//! # #[async_trait]
//! # impl TranslationService for Catalog {
//! #     async fn translate_batch(
//! #         &self,
//! #         _source: &str,
//! #         _target: &str,
//! #         segments: &[LabeledSegment],
//! #     ) -> Result<Vec<String>, UpstreamError> {
//! #         Ok(segments.iter().map(|s| s.text.to_uppercase()).collect())
//! #     }
//! # }
//! #
//! # #[async_trait]
//! # impl SpecificationLookup for Catalog {
//! #     async fn field_name(&self, _field_id: u64) -> Result<Option<String>, UpstreamError> {
//! #         Ok(None)
//! #     }
//! # }
//! #
//! # #[async_trait]
//! # impl RoutingService for Catalog {
//! #     async fn upsert(&self, _record: InternalRouteRecord) -> Result<(), UpstreamError> {
//! #         Ok(())
//! #     }
//! #     async fn upsert_many(
//! #         &self,
//! #         _records: Vec<InternalRouteRecord>,
//! #     ) -> Result<(), UpstreamError> {
//! #         Ok(())
//! #     }
//! # }
//! #
//! # #[async_trait]
//! # impl BindingDirectory for Catalog {
//! #     async fn tenant(&self, tenant: &str) -> Result<TenantInfo, UpstreamError> {
//! #         Ok(TenantInfo {
//! #             tenant: tenant.to_string(),
//! #             default_locale: "en-US".to_string(),
//! #             bindings: vec![
//! #                 LocaleBinding::new("b-en", "en-US"),
//! #                 LocaleBinding::new("b-fr", "fr-FR"),
//! #             ],
//! #         })
//! #     }
//! # }
//! #
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let catalog = Arc::new(Catalog);
//! let engine = RouteEngine::new(
//!     "storetheme",
//!     &EngineConfig::default(),
//!     EngineCollaborators {
//!         categories: catalog.clone(),
//!         templates: catalog.clone(),
//!         translations: catalog.clone(),
//!         specifications: catalog.clone(),
//!         routing: catalog.clone(),
//!         bindings: catalog,
//!         url_index: None,
//!         canonical_sink: None,
//!     },
//! );
//!
//! let records = engine
//!     .resolve_category(&CategoryEvent::new("2", "Kitchen", Some("1")))
//!     .await
//!     .unwrap();
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].path, "/home/kitchen");
//! assert_eq!(records[1].canonical_target.as_deref(), Some("/home/kitchen"));
//!
//! let outcome = engine
//!     .on_category_event(&CategoryEvent::new("2", "Kitchen", Some("1")))
//!     .await;
//! assert_eq!(outcome, EventOutcome::Registered { records: 2 });
//! # });
//! ```
//!
//! ## Failure handling
//!
//! `resolve_*` methods return [`RouteError`]. The `on_*` handlers catch every
//! error, log it as a structured `tracing` event and report an
//! [`EventOutcome`]; no error escapes into the event delivery layer.

pub mod canonical;
pub mod collaborators;
mod config;
pub use config::{EngineConfig, TranslationConfig};

mod engine;
pub use engine::{
    BrandEvent, CategoryEvent, EngineCollaborators, EventOutcome, ProductEvent, RouteEngine,
};

mod error;
pub use error::{
    RouteError, TemplateError, TranslationError, UpstreamError, UpstreamErrorKind,
};

pub mod hierarchy;

#[doc(hidden)]
pub mod observability;
pub mod records;

mod slug;
pub use slug::slugify;

pub mod template;
pub mod translation;
