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
use catalog_router::collaborators::TranslationService;
use catalog_router::translation::LabeledSegment;
use catalog_router::UpstreamError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Dictionary-backed translation service with scriptable failures.
///
/// Labels without a dictionary entry come back unchanged.
#[derive(Default)]
pub struct ScriptedTranslator {
    dictionary: HashMap<(String, String), String>,
    failures: HashMap<String, UpstreamError>,
    delay: Option<Duration>,
    locale_delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl ScriptedTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, target_locale: &str, text: &str, translated: &str) -> Self {
        self.dictionary.insert(
            (target_locale.to_string(), text.to_string()),
            translated.to_string(),
        );
        self
    }

    /// Every call targeting `target_locale` fails with `failure`.
    pub fn failing_for(mut self, target_locale: &str, failure: UpstreamError) -> Self {
        self.failures.insert(target_locale.to_string(), failure);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Calls targeting `target_locale` sleep for `delay` instead of the shared delay.
    pub fn with_delay_for(mut self, target_locale: &str, delay: Duration) -> Self {
        self.locale_delays.insert(target_locale.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationService for ScriptedTranslator {
    async fn translate_batch(
        &self,
        _source_locale: &str,
        target_locale: &str,
        segments: &[LabeledSegment],
    ) -> Result<Vec<String>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self
            .locale_delays
            .get(target_locale)
            .copied()
            .or(self.delay)
        {
            tokio::time::sleep(delay).await;
        }
        if let Some(failure) = self.failures.get(target_locale) {
            return Err(failure.clone());
        }

        Ok(segments
            .iter()
            .map(|segment| {
                self.dictionary
                    .get(&(target_locale.to_string(), segment.text.clone()))
                    .cloned()
                    .unwrap_or_else(|| segment.text.clone())
            })
            .collect())
    }
}
