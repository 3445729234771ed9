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

use catalog_router::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) tenant: String,
    pub(crate) routes_file: PathBuf,
    pub(crate) catalog_file: PathBuf,
    #[serde(default)]
    pub(crate) engine: EngineConfig,
}

impl Config {
    /// Makes relative file paths relative to the directory holding the config.
    pub(crate) fn anchor_paths(&mut self, config_dir: &Path) {
        for path in [&mut self.routes_file, &mut self.catalog_file] {
            if path.is_relative() {
                *path = config_dir.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::path::Path;

    #[test]
    fn engine_section_is_optional() {
        let mut config: Config = json5::from_str(
            r#"{
                tenant: "storetheme",
                routes_file: "routes.json",
                catalog_file: "/srv/catalog.json",
            }"#,
        )
        .unwrap();
        config.anchor_paths(Path::new("/etc/route-resolver"));

        assert_eq!(config.engine.max_hierarchy_depth, 32);
        assert_eq!(
            config.routes_file,
            Path::new("/etc/route-resolver/routes.json")
        );
        assert_eq!(config.catalog_file, Path::new("/srv/catalog.json"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = json5::from_str::<Config>(
            r#"{ tenant: "t", routes_file: "r", catalog_file: "c", verbose: true }"#,
        );
        assert!(parsed.is_err());
    }
}
