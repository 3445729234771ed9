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

//! Per-binding path translation and record assembly for one category.

use crate::collaborators::LocaleBinding;
use crate::error::RouteError;
use crate::hierarchy::{HierarchyLevel, HierarchyParams};
use crate::observability::events;
use crate::records::{InternalRecordBuilder, InternalRouteRecord};
use crate::slug::slugify;
use crate::template::RouteTemplate;
use crate::translation::{LabeledSegment, MultiLocaleTranslator};
use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

const COMPONENT: &str = "binding_fanout";

/// Everything shared by the bindings of one category event.
pub(crate) struct BindingFanout<'a> {
    pub(crate) translator: &'a MultiLocaleTranslator,
    pub(crate) records: &'a InternalRecordBuilder,
    pub(crate) template: &'a RouteTemplate,
    pub(crate) leaf: &'a HierarchyLevel,
    /// Level labels, root first.
    pub(crate) labels: &'a [LabeledSegment],
    pub(crate) tenant_locale: &'a str,
    pub(crate) tenant_path: &'a str,
    pub(crate) is_active: bool,
}

/// Result of one binding, reported in binding-set order.
pub(crate) struct BindingOutcome {
    pub(crate) binding: LocaleBinding,
    pub(crate) result: Result<InternalRouteRecord, RouteError>,
}

impl BindingFanout<'_> {
    /// Builds one record per binding, at most `concurrency` at a time.
    ///
    /// A failing binding never aborts the others.
    pub(crate) async fn run(
        &self,
        bindings: &[LocaleBinding],
        concurrency: usize,
    ) -> Vec<BindingOutcome> {
        stream::iter(bindings)
            .map(|binding| async move {
                let result = self.binding_record(binding).await;
                match &result {
                    Ok(record) => debug!(
                        event = events::BINDING_ROUTE_BUILT,
                        component = COMPONENT,
                        entity_id = self.leaf.id.as_str(),
                        binding_id = binding.binding_id.as_str(),
                        locale = binding.locale.as_str(),
                        path = record.path.as_str(),
                        "binding route built"
                    ),
                    Err(err) => warn!(
                        event = events::BINDING_ROUTE_SKIPPED,
                        component = COMPONENT,
                        entity_id = self.leaf.id.as_str(),
                        binding_id = binding.binding_id.as_str(),
                        locale = binding.locale.as_str(),
                        reason = err.reason(),
                        err = %err,
                        "binding skipped; its existing route is left as is"
                    ),
                }
                BindingOutcome {
                    binding: binding.clone(),
                    result,
                }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    async fn binding_record(
        &self,
        binding: &LocaleBinding,
    ) -> Result<InternalRouteRecord, RouteError> {
        let translated = self
            .translator
            .translate(self.tenant_locale, &binding.locale, self.labels)
            .await?;
        let params = HierarchyParams::from_slugs(translated.iter().map(|label| slugify(label)));
        let path = self.template.render(&params.to_route_params())?;

        Ok(self.records.category(
            self.leaf,
            self.is_active,
            path,
            self.tenant_path,
            &binding.binding_id,
        ))
    }
}
