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

//! File-backed collaborators for running the route engine without remote
//! services.
//!
//! A route file maps page types to their patterns. A catalog file holds the
//! tenants, the category tree, specification field names and a translation
//! dictionary per target locale.

mod error;
mod static_catalog;
mod static_templates;

pub use error::StaticCatalogError;
pub use static_catalog::StaticCatalog;
pub use static_templates::StaticTemplateStore;
