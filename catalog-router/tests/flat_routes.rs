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

mod support;

use catalog_router::records::{PageType, QueryEncoding};
use catalog_router::{BrandEvent, EventOutcome, ProductEvent};
use integration_test_utils::{
    InMemoryTemplates, RecordingRoutingService, RecordingUrlIndex, ScriptedTranslator,
};
use support::{electronics_catalog, Harness};

#[tokio::test(flavor = "multi_thread")]
async fn active_product_uses_lowercased_link_id() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());

    let records = harness
        .engine
        .resolve_product(&ProductEvent::new("7", "Cast Iron Pan", Some("Cast-Iron-Pan")))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "/cast-iron-pan/p");
    assert_eq!(records[0].page_type, PageType::Product);
    assert_eq!(records[0].entity_id, "7");
    assert_eq!(records[0].query, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn inactive_product_registers_one_binding_free_not_found_route() {
    integration_test_utils::init_logging();

    let harness = Harness::new(
        electronics_catalog()
            .with_binding("b-pt", "pt-BR")
            .with_binding("b-en", "en-US")
            .with_binding("b-es", "es-ES"),
        ScriptedTranslator::new(),
    );
    let event = ProductEvent {
        is_active: false,
        ..ProductEvent::new("7", "Cast Iron Pan", Some("cast-iron-pan"))
    };

    let outcome = harness.engine.on_product_event(&event).await;

    assert_eq!(outcome, EventOutcome::Registered { records: 1 });
    let calls = harness.routing.calls().await;
    assert_eq!(calls.len(), 1);
    let record = &calls[0][0];
    assert_eq!(record.page_type, PageType::ProductNotFound);
    assert_eq!(record.binding_id, None);
    assert_eq!(record.canonical_target, None);
    assert_eq!(harness.translator.calls(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn product_without_link_id_slugifies_its_name() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());

    let records = harness
        .engine
        .resolve_product(&ProductEvent::new("8", "Panela Elétrica 5L", None))
        .await
        .unwrap();

    assert_eq!(records[0].path, "/panela-eletrica-5l/p");
}

#[tokio::test(flavor = "multi_thread")]
async fn active_brand_registers_brand_search_and_indexes_its_path() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());

    let records = harness
        .engine
        .resolve_brand(&BrandEvent::new("2000", "Acme Tools"))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].path, "/acme-tools/b");
    assert_eq!(records[0].page_type, PageType::Brand);
    assert_eq!(records[0].query, Some(QueryEncoding::new("b")));
    assert_eq!(
        harness.url_index.path("2000").await.as_deref(),
        Some("/acme-tools/b")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn inactive_brand_resolves_as_search_not_found() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());
    let event = BrandEvent {
        is_active: false,
        ..BrandEvent::new("2000", "Acme Tools")
    };

    let records = harness.engine.resolve_brand(&event).await.unwrap();

    assert_eq!(records[0].page_type, PageType::SearchNotFound);
    assert_eq!(records[0].path, "/acme-tools/b");
    assert_eq!(records[0].query, None);
}

#[tokio::test(flavor = "multi_thread")]
async fn brand_without_template_is_dropped() {
    integration_test_utils::init_logging();

    let harness = Harness::build(
        electronics_catalog(),
        ScriptedTranslator::new(),
        InMemoryTemplates::default().without(PageType::Brand),
        RecordingRoutingService::new(),
        RecordingUrlIndex::new(),
    );

    let outcome = harness
        .engine
        .on_brand_event(&BrandEvent::new("2000", "Acme Tools"))
        .await;

    assert!(outcome.is_dropped());
    assert!(harness.routing.calls().await.is_empty());
    assert_eq!(harness.url_index.path("2000").await, None);
}
