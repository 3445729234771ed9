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

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StaticCatalogError {
    #[error("unable to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, StaticCatalogError> {
    let data = std::fs::read_to_string(path).map_err(|source| StaticCatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| StaticCatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
