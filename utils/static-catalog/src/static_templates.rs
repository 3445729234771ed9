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

use crate::error::{read_json, StaticCatalogError};
use async_trait::async_trait;
use catalog_router::collaborators::{RouteDefinition, TemplateStore};
use catalog_router::UpstreamError;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Route patterns read once from a JSON file keyed by page type.
#[derive(Clone, Debug, Default)]
pub struct StaticTemplateStore {
    definitions: HashMap<String, RouteDefinition>,
}

impl StaticTemplateStore {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StaticCatalogError> {
        let path = path.as_ref();
        let definitions: HashMap<String, RouteDefinition> = read_json(path)?;
        debug!(
            path = %path.display(),
            page_types = definitions.len(),
            "loaded route definitions"
        );
        Ok(Self { definitions })
    }

    pub fn from_definitions(definitions: HashMap<String, RouteDefinition>) -> Self {
        Self { definitions }
    }
}

#[async_trait]
impl TemplateStore for StaticTemplateStore {
    async fn route_definition(
        &self,
        page_type: &str,
    ) -> Result<Option<RouteDefinition>, UpstreamError> {
        Ok(self.definitions.get(page_type).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::StaticTemplateStore;
    use catalog_router::collaborators::TemplateStore;
    use std::collections::HashMap;

    #[tokio::test]
    async fn unknown_page_type_is_absent() {
        let definitions = serde_json::from_str::<HashMap<_, _>>(
            r#"{"store.search#department": {"canonical": "/:department"}}"#,
        )
        .unwrap();
        let store = StaticTemplateStore::from_definitions(definitions);

        let department = store
            .route_definition("store.search#department")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(department.canonical, "/:department");
        assert_eq!(department.internal, None);
        assert!(store
            .route_definition("store.search#brand")
            .await
            .unwrap()
            .is_none());
    }
}
