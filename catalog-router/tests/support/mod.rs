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

#![allow(dead_code)]

use catalog_router::{EngineCollaborators, EngineConfig, RouteEngine};
use integration_test_utils::{
    InMemoryCatalog, InMemoryTemplates, RecordingCanonicalSink, RecordingRoutingService,
    RecordingUrlIndex, ScriptedTranslator,
};
use std::sync::Arc;

pub(crate) const TENANT: &str = "storetheme";

/// Tenant in `pt-BR` with a five-level electronics branch.
pub(crate) fn electronics_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(TENANT, "pt-BR")
        .with_category("1", "Eletrônicos", None)
        .with_category("2", "Celulares", Some("1"))
        .with_category("3", "Smartphones Android", Some("2"))
        .with_category("4", "Tela Grande", Some("3"))
        .with_category("5", "Dual Chip", Some("4"))
        .with_field(55, "Cor")
}

pub(crate) fn english_and_spanish() -> ScriptedTranslator {
    ScriptedTranslator::new()
        .with_entry("en-US", "Eletrônicos", "Electronics")
        .with_entry("en-US", "Celulares", "Cell Phones")
        .with_entry("es-ES", "Eletrônicos", "Electrónicos")
        .with_entry("es-ES", "Celulares", "Móviles")
}

pub(crate) fn test_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.translation.retries = 2;
    config.translation.retry_backoff_ms = 1;
    config.translation.timeout_ms = 200;
    config
}

pub(crate) struct Harness {
    pub(crate) engine: RouteEngine,
    pub(crate) catalog: Arc<InMemoryCatalog>,
    pub(crate) translator: Arc<ScriptedTranslator>,
    pub(crate) routing: Arc<RecordingRoutingService>,
    pub(crate) url_index: Arc<RecordingUrlIndex>,
    pub(crate) sink: Arc<RecordingCanonicalSink>,
}

impl Harness {
    pub(crate) fn new(catalog: InMemoryCatalog, translator: ScriptedTranslator) -> Self {
        Self::build(
            catalog,
            translator,
            InMemoryTemplates::default(),
            RecordingRoutingService::new(),
            RecordingUrlIndex::new(),
        )
    }

    pub(crate) fn build(
        catalog: InMemoryCatalog,
        translator: ScriptedTranslator,
        templates: InMemoryTemplates,
        routing: RecordingRoutingService,
        url_index: RecordingUrlIndex,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let translator = Arc::new(translator);
        let routing = Arc::new(routing);
        let url_index = Arc::new(url_index);
        let sink = Arc::new(RecordingCanonicalSink::new());

        let engine = RouteEngine::new(
            TENANT,
            &test_config(),
            EngineCollaborators {
                categories: catalog.clone(),
                templates: Arc::new(templates),
                translations: translator.clone(),
                specifications: catalog.clone(),
                routing: routing.clone(),
                bindings: catalog.clone(),
                url_index: Some(url_index.clone()),
                canonical_sink: Some(sink.clone()),
            },
        );

        Self {
            engine,
            catalog,
            translator,
            routing,
            url_index,
            sink,
        }
    }
}
