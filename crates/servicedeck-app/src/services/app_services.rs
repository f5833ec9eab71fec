// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration, builds the catalogue client,
// and exposes async-friendly methods for Dioxus components to call.

use std::path::{Path, PathBuf};

use servicedeck_client::CatalogClient;
use servicedeck_core::AppConfig;
use servicedeck_core::error::Result;
use servicedeck_core::types::ServiceCategory;
use tracing::{info, warn};

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// Every field is cheap to clone, so the struct can be moved into closures
/// and spawned tasks freely.
#[derive(Clone)]
pub struct AppServices {
    client: CatalogClient,
    config: AppConfig,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise services from the platform data directory.  Call once at
    /// app startup.
    pub fn init() -> Result<Self> {
        Self::init_in(data_dir::data_dir())
    }

    /// Initialise services from `config.json` inside `dir`.
    ///
    /// Read-only: a missing or unreadable file means defaults, and nothing
    /// is ever written back.
    pub fn init_in(dir: PathBuf) -> Result<Self> {
        info!(path = %dir.display(), "initialising app services");

        let config = match AppConfig::load(&dir) {
            Ok(Some(config)) => config,
            Ok(None) => {
                info!("no config file — using defaults");
                AppConfig::default()
            }
            Err(e) => {
                warn!(error = %e, "config unreadable — using defaults");
                AppConfig::default()
            }
        };

        Self::from_config(config, dir)
    }

    /// Services built from default settings, used when `init` fails.
    pub fn fallback() -> Result<Self> {
        Self::from_config(AppConfig::default(), data_dir::data_dir())
    }

    pub fn from_config(config: AppConfig, data_dir: PathBuf) -> Result<Self> {
        let client = CatalogClient::new(&config)?;
        Ok(Self::with_client(config, client, data_dir))
    }

    pub fn with_client(config: AppConfig, client: CatalogClient, data_dir: PathBuf) -> Self {
        info!(endpoint = %client.endpoint(), "catalogue client ready");
        Self {
            client,
            config,
            data_dir,
        }
    }

    // -- Catalogue -----------------------------------------------------------

    /// Fetch the current category list from the API.
    pub async fn load_categories(&self) -> Result<Vec<ServiceCategory>> {
        self.client.fetch_categories().await
    }

    // -- Accessors -----------------------------------------------------------

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
