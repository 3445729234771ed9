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

use catalog_router::canonical::CanonicalSearchUrl;
use catalog_router::EventOutcome;
use integration_test_utils::ScriptedTranslator;
use support::{electronics_catalog, Harness};

#[tokio::test(flavor = "multi_thread")]
async fn batch_canonicalizes_independently_and_feeds_the_sink() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());
    let mut urls = vec![
        CanonicalSearchUrl::parse("/eletronicos/roxo?map=c,specificationFilter_55"),
        CanonicalSearchUrl::parse("/tv?map=c,b"),
        CanonicalSearchUrl::parse("/TV/Azul Claro?map=c,specificationFilter_99"),
    ];

    let outcome = harness.engine.on_search_urls(&mut urls).await;

    assert_eq!(
        outcome,
        EventOutcome::Canonicalized {
            canonicalized: 2,
            failed: 1
        }
    );
    assert_eq!(
        urls[0].canonical_path.as_deref(),
        Some("/eletronicos/cor_roxo")
    );
    assert_eq!(urls[1].canonical_path, None);
    assert_eq!(urls[2].canonical_path.as_deref(), Some("/tv/azul-claro"));

    let batches = harness.sink.batches().await;
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0], vec![urls[0].clone(), urls[2].clone()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn batch_without_decodable_urls_skips_the_sink() {
    integration_test_utils::init_logging();

    let harness = Harness::new(electronics_catalog(), ScriptedTranslator::new());
    let mut urls = vec![CanonicalSearchUrl::parse("/tv/sale?map=c")];

    let outcome = harness.engine.on_search_urls(&mut urls).await;

    assert_eq!(
        outcome,
        EventOutcome::Canonicalized {
            canonicalized: 0,
            failed: 1
        }
    );
    assert!(harness.sink.batches().await.is_empty());
}
