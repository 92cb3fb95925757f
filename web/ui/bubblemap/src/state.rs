use std::sync::Arc;

use akash_holders::Acquisition;
use akash_holders::DataOrigin;
use akash_holders::HolderFetcher;
use akash_holders::RefreshGeneration;
use akash_holders::RefreshTicket;
use akash_holders::Variant;
use akash_holders::config::Config;
use akash_holders::constants::ADVISORY_SAMPLE_DATA;
use akash_holders::datasource::fallback_holders;
use akash_holders::interaction::InteractionState;
use akash_holders::model::HolderRecord;
use akash_holders::view::BubbleMapView;
use futures_signals::signal::Mutable;
use wasm_bindgen_futures::spawn_local;

pub struct BubbleMapState {
    pub variant: Variant,
    pub config: Config,
    pub holders: Mutable<Vec<HolderRecord>>,
    pub interaction: Mutable<InteractionState>,
    pub advisory: Mutable<Option<String>>,
    pub origin: Mutable<DataOrigin>,
    pub loading: Mutable<bool>,
    generation: RefreshGeneration,
}

impl BubbleMapState {
    pub fn new(variant: Variant, config: Config) -> Arc<Self> {
        Arc::new(Self {
            variant,
            config,
            holders: Mutable::new(fallback_holders()),
            interaction: Mutable::new(InteractionState::new()),
            advisory: Mutable::new(None),
            origin: Mutable::new(DataOrigin::Fallback),
            loading: Mutable::new(false),
            generation: RefreshGeneration::new(),
        })
    }

    pub fn is_live(&self) -> bool {
        self.variant == Variant::Live
    }

    pub fn pointer_enter(&self, address: &str) {
        self.interaction.lock_mut().pointer_enter(address);
    }

    pub fn pointer_leave(&self) {
        self.interaction.lock_mut().pointer_leave();
    }

    pub fn click(&self, address: &str) {
        self.interaction.lock_mut().click(address);
    }

    /// Claim a refresh slot. `None` while a fetch is already in flight or
    /// for the static variant.
    pub fn begin_refresh(&self) -> Option<RefreshTicket> {
        if !self.is_live() || self.loading.get() {
            return None;
        }
        self.loading.set_neq(true);
        Some(self.generation.begin())
    }

    /// Publish an acquisition if `ticket` is still the newest refresh
    pub fn apply(&self, ticket: RefreshTicket, acquisition: Acquisition) -> bool {
        let Some(acquisition) = self.generation.accept(ticket, acquisition) else {
            return false;
        };

        log::info!(
            "bubblemap::apply::{:?}::{}_holders",
            acquisition.origin,
            acquisition.holders.len()
        );

        {
            let mut interaction = self.interaction.lock_mut();
            interaction.retain_known(acquisition.holders.iter().map(|h| h.address.as_str()));
        }
        self.holders.set(acquisition.holders);
        self.advisory.set(acquisition.advisory);
        self.origin.set(acquisition.origin);
        self.loading.set_neq(false);
        true
    }

    /// Re-run acquisition in the background. No-op when a fetch is running.
    pub fn refresh(self: &Arc<Self>) {
        let Some(ticket) = self.begin_refresh() else {
            log::debug!("bubblemap::refresh::skipped");
            return;
        };

        let state = self.clone();
        spawn_local(async move {
            let acquisition = match HolderFetcher::new(state.config.sources.clone()) {
                Ok(fetcher) => fetcher.acquire().await,
                Err(e) => {
                    log::error!("bubblemap::refresh::client::{}", e);
                    Acquisition::fallback(Some(ADVISORY_SAMPLE_DATA.to_string()))
                },
            };
            state.apply(ticket, acquisition);
        });
    }

    pub fn view(&self) -> BubbleMapView {
        BubbleMapView::build(
            &self.holders.lock_ref(),
            &self.interaction.lock_ref(),
            &self.config.layout,
            self.advisory.get_cloned(),
        )
    }
}
