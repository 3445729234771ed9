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
use catalog_router::canonical::CanonicalSearchUrl;
use catalog_router::collaborators::{CanonicalSink, RoutingService, UrlIndex};
use catalog_router::records::{InternalRouteRecord, RouteKey};
use catalog_router::UpstreamError;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
struct RoutingState {
    /// Latest record per identity key, as the real registry keeps them.
    stored: HashMap<RouteKey, InternalRouteRecord>,
    /// Every write call, in call order, with the records it carried.
    calls: Vec<Vec<InternalRouteRecord>>,
}

/// Routing service that keeps upserts in memory.
#[derive(Default)]
pub struct RecordingRoutingService {
    state: Mutex<RoutingState>,
    failure: Option<UpstreamError>,
}

impl RecordingRoutingService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A routing service that rejects every write with `failure`.
    pub fn failing(failure: UpstreamError) -> Self {
        Self {
            state: Mutex::default(),
            failure: Some(failure),
        }
    }

    pub async fn stored(&self) -> HashMap<RouteKey, InternalRouteRecord> {
        self.state.lock().await.stored.clone()
    }

    pub async fn calls(&self) -> Vec<Vec<InternalRouteRecord>> {
        self.state.lock().await.calls.clone()
    }

    async fn write(&self, records: Vec<InternalRouteRecord>) -> Result<(), UpstreamError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        let mut state = self.state.lock().await;
        for record in &records {
            state.stored.insert(record.key(), record.clone());
        }
        state.calls.push(records);
        Ok(())
    }
}

#[async_trait]
impl RoutingService for RecordingRoutingService {
    async fn upsert(&self, record: InternalRouteRecord) -> Result<(), UpstreamError> {
        self.write(vec![record]).await
    }

    async fn upsert_many(&self, records: Vec<InternalRouteRecord>) -> Result<(), UpstreamError> {
        self.write(records).await
    }
}

/// Url index that remembers the last path saved per entity.
#[derive(Default)]
pub struct RecordingUrlIndex {
    paths: Mutex<HashMap<String, String>>,
    failing: bool,
}

impl RecordingUrlIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            paths: Mutex::default(),
            failing: true,
        }
    }

    pub async fn path(&self, entity_id: &str) -> Option<String> {
        self.paths.lock().await.get(entity_id).cloned()
    }
}

#[async_trait]
impl UrlIndex for RecordingUrlIndex {
    async fn save(&self, entity_id: &str, path: &str) -> Result<(), UpstreamError> {
        if self.failing {
            return Err(UpstreamError::transient("url index unavailable"));
        }
        self.paths
            .lock()
            .await
            .insert(entity_id.to_string(), path.to_string());
        Ok(())
    }
}

/// Canonical sink that keeps every indexed batch.
#[derive(Default)]
pub struct RecordingCanonicalSink {
    batches: Mutex<Vec<Vec<CanonicalSearchUrl>>>,
}

impl RecordingCanonicalSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn batches(&self) -> Vec<Vec<CanonicalSearchUrl>> {
        self.batches.lock().await.clone()
    }
}

#[async_trait]
impl CanonicalSink for RecordingCanonicalSink {
    async fn index(&self, urls: &[CanonicalSearchUrl]) -> Result<(), UpstreamError> {
        self.batches.lock().await.push(urls.to_vec());
        Ok(())
    }
}
