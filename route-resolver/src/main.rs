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

mod config;

use crate::config::Config;
use anyhow::{bail, Context};
use async_trait::async_trait;
use catalog_router::canonical::CanonicalSearchUrl;
use catalog_router::collaborators::RoutingService;
use catalog_router::records::InternalRouteRecord;
use catalog_router::{
    BrandEvent, CategoryEvent, EngineCollaborators, ProductEvent, RouteEngine, UpstreamError,
};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use static_catalog::{StaticCatalog, StaticTemplateStore};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser)]
#[command(about = "Resolves catalog routes against file-backed catalog data")]
struct ResolverArgs {
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the routes of a category event read from FILE.
    Category {
        #[arg(value_name = "FILE")]
        event: PathBuf,
    },
    /// Resolve the route of a product event read from FILE.
    Product {
        #[arg(value_name = "FILE")]
        event: PathBuf,
    },
    /// Resolve the route of a brand event read from FILE.
    Brand {
        #[arg(value_name = "FILE")]
        event: PathBuf,
    },
    /// Canonicalize search URLs given as `path?map=tokens`.
    Search {
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

/// Stands in for the remote registry: accepts every record and logs it.
struct DryRunRoutingService;

#[async_trait]
impl RoutingService for DryRunRoutingService {
    async fn upsert(&self, record: InternalRouteRecord) -> Result<(), UpstreamError> {
        debug!(path = record.path.as_str(), page_type = %record.page_type, "dry-run upsert");
        Ok(())
    }

    async fn upsert_many(&self, records: Vec<InternalRouteRecord>) -> Result<(), UpstreamError> {
        debug!(records = records.len(), "dry-run upsert_many");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt::try_init();

    let args = ResolverArgs::parse();
    let config = load_config(&args.config)?;

    let catalog = Arc::new(StaticCatalog::from_file(&config.catalog_file)?);
    let templates = Arc::new(StaticTemplateStore::from_file(&config.routes_file)?);
    let engine = RouteEngine::new(
        config.tenant.as_str(),
        &config.engine,
        EngineCollaborators {
            categories: catalog.clone(),
            templates,
            translations: catalog.clone(),
            specifications: catalog.clone(),
            routing: Arc::new(DryRunRoutingService),
            bindings: catalog,
            url_index: None,
            canonical_sink: None,
        },
    );
    info!(tenant = engine.tenant(), "route engine ready");

    match args.command {
        Command::Category { event } => {
            let event: CategoryEvent = read_event(&event)?;
            print_json(&engine.resolve_category(&event).await?)
        }
        Command::Product { event } => {
            let event: ProductEvent = read_event(&event)?;
            print_json(&engine.resolve_product(&event).await?)
        }
        Command::Brand { event } => {
            let event: BrandEvent = read_event(&event)?;
            print_json(&engine.resolve_brand(&event).await?)
        }
        Command::Search { urls } => {
            let mut urls: Vec<CanonicalSearchUrl> =
                urls.iter().map(|url| CanonicalSearchUrl::parse(url)).collect();
            let outcome = engine.on_search_urls(&mut urls).await;
            info!(?outcome, "search urls processed");
            if outcome.is_dropped() {
                bail!("search urls were dropped: {outcome:?}");
            }
            print_json(&urls)
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read config file {}", path.display()))?;
    let mut config: Config = json5::from_str(&contents)
        .with_context(|| format!("unable to parse config file {}", path.display()))?;
    if let Some(dir) = path.parent() {
        config.anchor_paths(dir);
    }
    Ok(config)
}

fn read_event<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("unable to read event file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("unable to parse event file {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
