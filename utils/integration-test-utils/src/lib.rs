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

mod in_memory_catalog;
pub use in_memory_catalog::{default_route_definitions, InMemoryCatalog, InMemoryTemplates};

mod recording_services;
pub use recording_services::{RecordingCanonicalSink, RecordingRoutingService, RecordingUrlIndex};

mod scripted_translator;
pub use scripted_translator::ScriptedTranslator;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
