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

//! Engine settings. Every field has a default so partial files deserialize.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// Written into every record's `declarer`.
    pub declarer: String,
    /// Written into every record's `origin`.
    pub origin: String,
    /// Ceiling on the number of levels in one ancestor chain.
    pub max_hierarchy_depth: usize,
    /// Bindings processed at once for a single category event.
    pub binding_concurrency: usize,
    /// Search URLs decoded at once, and the engine-wide cap on specification
    /// field lookups in flight.
    pub decode_concurrency: usize,
    pub translation: TranslationConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            declarer: "catalog-router".to_string(),
            origin: "catalog-indexer".to_string(),
            max_hierarchy_depth: 32,
            binding_concurrency: 5,
            decode_concurrency: 4,
            translation: TranslationConfig::default(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct TranslationConfig {
    /// Translation calls in flight across the whole engine.
    pub concurrency: usize,
    /// Attempts per batch, the first one included.
    pub retries: u32,
    pub timeout_ms: u64,
    pub batch_size: usize,
    /// Base delay, doubled after every failed attempt.
    pub retry_backoff_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            concurrency: 5,
            retries: 3,
            timeout_ms: 3000,
            batch_size: 50,
            retry_backoff_ms: 100,
        }
    }
}

impl TranslationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }
}
