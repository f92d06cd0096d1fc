//! Realtime ticker store with transient up/down flashes.
//!
//! Every update to a key cancels that key's pending expiry timer and
//! schedules a fresh one, so a flash always lasts the full duration after
//! the most recent change.

use crate::config::Config;
use crate::types::{FlashDirection, TickerState};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

pub struct FlashStore {
    tickers: DashMap<String, TickerState>,
    /// Pending expiry per key, tagged with the generation that scheduled it.
    timers: DashMap<String, (u64, AbortHandle)>,
    generation: AtomicU64,
    flash_duration: Duration,
}

impl FlashStore {
    /// Create a new store. Must be called inside a tokio runtime before `update`.
    pub fn new(flash_duration: Duration) -> Arc<Self> {
        Arc::new(Self {
            tickers: DashMap::new(),
            timers: DashMap::new(),
            generation: AtomicU64::new(0),
            flash_duration,
        })
    }

    /// Create a store using the configured flash duration.
    pub fn from_config(config: &Config) -> Arc<Self> {
        Self::new(config.flash_duration)
    }

    /// Record a new price for `key` and return the resulting state.
    pub fn update(self: &Arc<Self>, key: &str, price: f64) -> TickerState {
        let key = key.to_uppercase();

        // The timer slot stays locked until the new expiry is registered, so
        // an expiry task never checks its generation before it is stored.
        let slot = self.timers.entry(key.clone());

        let flash = self
            .tickers
            .get(&key)
            .and_then(|prev| FlashDirection::between(prev.price, price));

        let state = TickerState { price, flash };
        self.tickers.insert(key.clone(), state);

        if flash.is_some() {
            let generation = self.generation.fetch_add(1, Ordering::SeqCst);
            let timer = (generation, self.spawn_clear(key, generation));
            match slot {
                Entry::Occupied(mut entry) => {
                    let (_, previous) = entry.insert(timer);
                    previous.abort();
                }
                Entry::Vacant(entry) => {
                    entry.insert(timer);
                }
            }
        }

        state
    }

    /// Current state of `key`.
    pub fn get(&self, key: &str) -> Option<TickerState> {
        self.tickers.get(&key.to_uppercase()).map(|s| *s)
    }

    /// Number of keys with a pending expiry timer.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    fn spawn_clear(self: &Arc<Self>, key: String, generation: u64) -> AbortHandle {
        let store = Arc::clone(self);
        let duration = self.flash_duration;

        let task = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            // A newer update owns the key once its generation is registered.
            let owned = store
                .timers
                .remove_if(&key, |_, (g, _)| *g == generation)
                .is_some();
            if owned {
                if let Some(mut state) = store.tickers.get_mut(&key) {
                    state.flash = None;
                }
                debug!("Flash cleared for {}", key);
            }
        });

        task.abort_handle()
    }
}
