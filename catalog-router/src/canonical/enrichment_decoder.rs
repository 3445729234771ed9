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

//! Rewrites faceted search paths into descriptive canonical paths.

use crate::canonical::{CanonicalSearchUrl, MapToken};
use crate::collaborators::SpecificationLookup;
use crate::error::{RouteError, UpstreamError};
use crate::observability::events;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

const COMPONENT: &str = "enrichment_decoder";

/// Decodes `(segment, token)` pairs through a specification-field lookup.
///
/// Clones share one permit pool, so at most `concurrency` field lookups are in
/// flight no matter how many URLs are decoded at once.
#[derive(Clone)]
pub struct CanonicalEnrichmentDecoder {
    lookup: Arc<dyn SpecificationLookup>,
    permits: Arc<Semaphore>,
    concurrency: usize,
}

impl CanonicalEnrichmentDecoder {
    pub fn new(lookup: Arc<dyn SpecificationLookup>, concurrency: usize) -> Self {
        let concurrency = concurrency.max(1);
        Self {
            lookup,
            permits: Arc::new(Semaphore::new(concurrency)),
            concurrency,
        }
    }

    /// Sets `url.canonical_path`. On failure the URL is left untouched.
    pub async fn canonicalize(&self, url: &mut CanonicalSearchUrl) -> Result<(), RouteError> {
        match self.decode(url).await {
            Ok(canonical_path) => {
                debug!(
                    event = events::CANONICAL_DECODE_OK,
                    component = COMPONENT,
                    path = url.raw_path.as_str(),
                    encoding = url.encoding.as_str(),
                    canonical_path = canonical_path.as_str(),
                    "search url canonicalized"
                );
                url.canonical_path = Some(canonical_path);
                Ok(())
            }
            Err(err) => {
                warn!(
                    event = events::CANONICAL_DECODE_FAILED,
                    component = COMPONENT,
                    path = url.raw_path.as_str(),
                    encoding = url.encoding.as_str(),
                    reason = err.reason(),
                    err = %err,
                    "search url left without canonical path"
                );
                Err(err)
            }
        }
    }

    /// Returns the canonical path for `url` without modifying it.
    pub async fn decode(&self, url: &CanonicalSearchUrl) -> Result<String, RouteError> {
        let segments = url.segments();
        let tokens = url.tokens();
        if segments.len() != tokens.len() {
            return Err(RouteError::EncodingMismatch {
                segments: segments.len(),
                tokens: tokens.len(),
            });
        }

        let enriched: Vec<String> = stream::iter(segments.into_iter().zip(tokens))
            .map(|(segment, token)| self.enrich_segment(segment, token))
            .buffered(self.concurrency)
            .collect()
            .await;

        let joined = format!("/{}", enriched.join("/"));
        Ok(joined
            .chars()
            .map(|ch| if ch.is_whitespace() { '-' } else { ch })
            .collect())
    }

    async fn enrich_segment(&self, segment: &str, token: MapToken) -> String {
        let MapToken::SpecificationFilter(field_id) = token else {
            return segment.to_lowercase();
        };

        let lookup = match self.permits.acquire().await {
            Ok(_permit) => self.lookup.field_name(field_id).await,
            Err(_) => Err(UpstreamError::transient("specification permit pool closed")),
        };

        match lookup {
            Ok(Some(field_name)) => format!("{}_{segment}", field_name.to_lowercase()),
            Ok(None) => {
                debug!(
                    event = events::CANONICAL_FIELD_LOOKUP_FAILED,
                    component = COMPONENT,
                    field_id,
                    segment,
                    "unknown specification field; keeping segment"
                );
                segment.to_lowercase()
            }
            Err(err) => {
                warn!(
                    event = events::CANONICAL_FIELD_LOOKUP_FAILED,
                    component = COMPONENT,
                    field_id,
                    segment,
                    err = %err,
                    "specification field lookup failed; keeping segment"
                );
                segment.to_lowercase()
            }
        }
    }
}
