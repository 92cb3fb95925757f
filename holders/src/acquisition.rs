//! Sequential live-source chain with static fallback.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use reqwest::Client;
use serde::Serialize;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::config::SourcesConfig;
use crate::constants::ADVISORY_SAMPLE_DATA;
use crate::datasource::HolderSource;
use crate::datasource::default_sources;
use crate::datasource::fallback_holders;
use crate::error::Result;
use crate::err_with_loc;
use crate::model::HolderRecord;
use crate::model::rank_holders;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "source", rename_all = "snake_case")]
pub enum DataOrigin {
    Live(String),
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Static,
    Live,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acquisition {
    pub holders: Vec<HolderRecord>,
    pub origin: DataOrigin,
    pub advisory: Option<String>,
}

impl Acquisition {
    pub fn fallback(advisory: Option<String>) -> Self {
        Self {
            holders: fallback_holders(),
            origin: DataOrigin::Fallback,
            advisory,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.origin, DataOrigin::Live(_))
    }
}

pub struct HolderFetcher {
    client: Client,
    sources: Vec<Box<dyn HolderSource>>,
    config: SourcesConfig,
}

impl HolderFetcher {
    pub fn new(config: SourcesConfig) -> Result<Self> {
        let sources = default_sources(&config);
        Self::with_sources(config, sources)
    }

    pub fn with_sources(
        config: SourcesConfig,
        sources: Vec<Box<dyn HolderSource>>,
    ) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self { client, sources, config })
    }

    /// Try each source in order and keep the first non-empty list.
    /// Never fails: exhaustion yields the sample list plus an advisory.
    pub async fn acquire(&self) -> Acquisition {
        for source in &self.sources {
            match source.fetch_holders(&self.client).await {
                Ok(batch) if !batch.is_empty() => {
                    let total_supply = batch.total_supply_akt.unwrap_or(self.config.default_total_supply);
                    let holders = rank_holders(batch.holders, total_supply, self.config.limit);
                    info!("acquire::{}::{}_holders", source.name(), holders.len());
                    return Acquisition {
                        holders,
                        origin: DataOrigin::Live(source.name().to_string()),
                        advisory: None,
                    };
                },
                Ok(_) => {
                    debug!("acquire::{}::empty::falling_through", source.name());
                },
                Err(e) => {
                    warn!("acquire::{}::failed::{}", source.name(), e);
                },
            }
        }

        warn!("acquire::all_sources_exhausted::using_fallback");
        Acquisition::fallback(Some(ADVISORY_SAMPLE_DATA.to_string()))
    }

    /// Static variant returns the sample list untouched, without advisory
    pub async fn acquire_variant(&self, variant: Variant) -> Acquisition {
        match variant {
            Variant::Static => Acquisition::fallback(None),
            Variant::Live => self.acquire().await,
        }
    }
}

fn build_client(config: &SourcesConfig) -> Result<Client> {
    let builder = Client::builder();

    // wasm32 goes through the browser fetch API, which has no client-level timeout
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(config.request_timeout());
    #[cfg(target_arch = "wasm32")]
    let _ = config;

    builder.build().map_err(|e| err_with_loc!(format!("Failed to build http client: {}", e)))
}

/// Tickets for overlapping refreshes. Only the newest ticket may publish
/// its result; older ones resolve into nothing.
#[derive(Debug, Clone, Default)]
pub struct RefreshGeneration {
    latest: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

impl RefreshGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RefreshTicket {
        RefreshTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RefreshTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Hand `value` back only if `ticket` is still the newest refresh
    pub fn accept<T>(&self, ticket: RefreshTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            debug!("refresh::stale_ticket::{}::discarded", ticket.0);
            None
        }
    }
}
