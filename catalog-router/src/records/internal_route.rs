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

//! Wire shape of a registrable route.

use crate::records::PageType;
use serde::{Deserialize, Serialize};

/// Search query a route resolves with, e.g. `{"map": "c,c"}`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct QueryEncoding {
    pub map: String,
}

impl QueryEncoding {
    pub fn new(map: impl Into<String>) -> Self {
        Self { map: map.into() }
    }
}

/// A route record as the routing service receives it.
///
/// `query` is always serialized, as `null` when absent. `resolveAs` and
/// `binding` are omitted when unset.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InternalRouteRecord {
    pub declarer: String,
    pub origin: String,
    #[serde(rename = "id")]
    pub entity_id: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    #[serde(rename = "from")]
    pub path: String,
    #[serde(default)]
    pub query: Option<QueryEncoding>,
    #[serde(
        rename = "resolveAs",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub canonical_target: Option<String>,
    #[serde(rename = "binding", default, skip_serializing_if = "Option::is_none")]
    pub binding_id: Option<String>,
}

impl InternalRouteRecord {
    pub fn key(&self) -> RouteKey {
        RouteKey {
            binding_id: self.binding_id.clone(),
            entity_id: self.entity_id.clone(),
            page_type: self.page_type,
        }
    }
}

/// Identity of a record in the routing service.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RouteKey {
    pub binding_id: Option<String>,
    pub entity_id: String,
    pub page_type: PageType,
}
