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

//! Batched, bounded and retried translation calls.

use crate::collaborators::TranslationService;
use crate::config::TranslationConfig;
use crate::error::TranslationError;
use crate::observability::events;
use crate::translation::LabeledSegment;
use futures::future::try_join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

const COMPONENT: &str = "translator";
const MAX_BACKOFF_EXPONENT: u32 = 5;

/// One failed attempt at a batch.
struct AttemptFailure {
    retryable: bool,
    reason: String,
}

/// Translates ordered label lists between locales.
///
/// Clones share the same permit pool, so the concurrency ceiling holds across
/// every entity and binding translating at the same time.
#[derive(Clone)]
pub struct MultiLocaleTranslator {
    service: Arc<dyn TranslationService>,
    permits: Arc<Semaphore>,
    settings: TranslationConfig,
}

impl MultiLocaleTranslator {
    pub fn new(service: Arc<dyn TranslationService>, settings: TranslationConfig) -> Self {
        Self {
            service,
            permits: Arc::new(Semaphore::new(settings.concurrency.max(1))),
            settings,
        }
    }

    /// Returns one translated text per segment, in segment order.
    ///
    /// Either every batch succeeds or the whole call fails; partial results are
    /// never returned.
    pub async fn translate(
        &self,
        source_locale: &str,
        target_locale: &str,
        segments: &[LabeledSegment],
    ) -> Result<Vec<String>, TranslationError> {
        if segments.is_empty() {
            return Ok(Vec::new());
        }
        if source_locale.eq_ignore_ascii_case(target_locale) {
            debug!(
                event = events::TRANSLATION_SKIPPED_SAME_LOCALE,
                component = COMPONENT,
                locale = source_locale,
                segments = segments.len(),
                "source and target locale match; keeping labels"
            );
            return Ok(segments.iter().map(|segment| segment.text.clone()).collect());
        }

        let batches = segments
            .chunks(self.settings.batch_size.max(1))
            .map(|batch| self.translate_batch(source_locale, target_locale, batch));
        let translated = try_join_all(batches).await?;

        Ok(translated.into_iter().flatten().collect())
    }

    async fn translate_batch(
        &self,
        source_locale: &str,
        target_locale: &str,
        batch: &[LabeledSegment],
    ) -> Result<Vec<String>, TranslationError> {
        let max_attempts = self.settings.retries.max(1);
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            match self.attempt_once(source_locale, target_locale, batch).await {
                Ok(texts) => {
                    debug!(
                        event = events::TRANSLATION_BATCH_OK,
                        component = COMPONENT,
                        source_locale,
                        target_locale,
                        segments = batch.len(),
                        attempt,
                        "translation batch completed"
                    );
                    return Ok(texts);
                }
                Err(failure) if failure.retryable && attempt < max_attempts => {
                    let delay = self.retry_backoff(attempt);
                    warn!(
                        event = events::TRANSLATION_BATCH_RETRY,
                        component = COMPONENT,
                        source_locale,
                        target_locale,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        reason = failure.reason.as_str(),
                        "translation batch failed; retrying"
                    );
                    sleep(delay).await;
                }
                Err(failure) => {
                    warn!(
                        event = events::TRANSLATION_BATCH_FAILED,
                        component = COMPONENT,
                        source_locale,
                        target_locale,
                        attempt,
                        reason = failure.reason.as_str(),
                        "translation batch failed"
                    );
                    return Err(TranslationError {
                        source_locale: source_locale.to_string(),
                        target_locale: target_locale.to_string(),
                        attempts: attempt,
                        reason: failure.reason,
                    });
                }
            }
        }
    }

    async fn attempt_once(
        &self,
        source_locale: &str,
        target_locale: &str,
        batch: &[LabeledSegment],
    ) -> Result<Vec<String>, AttemptFailure> {
        // The permit covers the call only, not the backoff that may follow it.
        let _permit = self.permits.acquire().await.map_err(|_| AttemptFailure {
            retryable: false,
            reason: "translation permit pool closed".to_string(),
        })?;

        let call = self
            .service
            .translate_batch(source_locale, target_locale, batch);
        match timeout(self.settings.timeout(), call).await {
            Err(_) => Err(AttemptFailure {
                retryable: true,
                reason: format!("timed out after {}ms", self.settings.timeout_ms),
            }),
            Ok(Err(err)) => Err(AttemptFailure {
                retryable: err.is_transient(),
                reason: err.to_string(),
            }),
            Ok(Ok(texts)) if texts.len() != batch.len() => Err(AttemptFailure {
                retryable: false,
                reason: format!(
                    "service returned {} text(s) for {} segment(s)",
                    texts.len(),
                    batch.len()
                ),
            }),
            Ok(Ok(texts)) => Ok(texts),
        }
    }

    fn retry_backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(MAX_BACKOFF_EXPONENT);
        self.settings.retry_backoff() * 2u32.pow(exponent)
    }
}
