//! Storefront session
//!
//! One `Storefront` per page session: it owns the filter state, schedules a
//! debounced re-fetch on every mutation, and publishes only the response of
//! the latest issued request. In-flight fetches are not cancelled; a
//! monotonic sequence number decides which response wins.

use crate::debounce::Debouncer;
use crate::{ApiClient, ProductFetcher};
use shopfront_core::{ClientConfig, Color, FilterCategory, FilterState, Result, Size, SortOrder};
use shopfront_index::ScoredMatch;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Duration;

/// State shared with in-flight fetch tasks
struct SessionShared {
    /// Sequence number of the most recently issued request
    issued: AtomicU64,
    /// Latest published result set; `None` until the first fetch lands
    products: RwLock<Option<Vec<ScoredMatch>>>,
    /// Set when the latest fetch failed; cleared on the next success
    failed: AtomicBool,
}

/// The shopper's session: filter state plus the debounced re-fetch loop
pub struct Storefront {
    filter: FilterState,
    debouncer: Debouncer,
    fetcher: Arc<dyn ProductFetcher>,
    shared: Arc<SessionShared>,
}

impl Storefront {
    /// Create a session with the page-load default filter state
    pub fn new(fetcher: Arc<dyn ProductFetcher>, quiet_period: Duration) -> Self {
        Self {
            filter: FilterState::new(),
            debouncer: Debouncer::new(quiet_period),
            fetcher,
            shared: Arc::new(SessionShared {
                issued: AtomicU64::new(0),
                products: RwLock::new(None),
                failed: AtomicBool::new(false),
            }),
        }
    }

    /// Session wired to a live shopfront API from the client configuration
    pub fn connect(config: &ClientConfig) -> Self {
        Self::new(
            Arc::new(ApiClient::new(config)),
            Duration::from_millis(config.debounce_ms),
        )
    }

    /// Current filter selections
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn toggle_color(&mut self, color: Color) {
        self.filter.toggle_color(color);
        self.refresh();
    }

    pub fn toggle_size(&mut self, size: Size) {
        self.filter.toggle_size(size);
        self.refresh();
    }

    /// Toggle by raw token; unknown tokens are rejected and schedule no fetch
    pub fn toggle(&mut self, category: FilterCategory, token: &str) -> Result<()> {
        self.filter.toggle(category, token)?;
        self.refresh();
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.filter.set_sort(sort);
        self.refresh();
    }

    pub fn select_price_preset(&mut self, range: [f64; 2]) {
        self.filter.select_price_preset(range);
        self.refresh();
    }

    pub fn set_custom_price(&mut self, low: f64, high: f64) {
        self.filter.set_custom_price(low, high);
        self.refresh();
    }

    /// Schedule a fetch after the quiet period, superseding any pending one
    pub fn refresh(&mut self) {
        let payload = self.filter.payload();
        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.shared);

        self.debouncer.schedule(async move {
            // Quiet period elapsed. The fetch runs detached so a later
            // rearm aborts only pending quiet periods, never a request
            // already on the wire; the sequence gate below decides which
            // response gets published.
            tokio::spawn(async move {
                let request_id = shared.issued.fetch_add(1, Ordering::SeqCst) + 1;

                match fetcher.fetch_products(&payload).await {
                    Ok(matches) => {
                        // A newer request has been issued meanwhile; this
                        // response is stale and must not be published
                        if shared.issued.load(Ordering::SeqCst) != request_id {
                            tracing::debug!(request_id, "discarding stale response");
                            return;
                        }
                        *shared.products.write().await = Some(matches);
                        shared.failed.store(false, Ordering::SeqCst);
                    }
                    Err(err) => {
                        if shared.issued.load(Ordering::SeqCst) == request_id {
                            tracing::warn!(request_id, error = %err, "product fetch failed");
                            shared.failed.store(true, Ordering::SeqCst);
                        }
                    }
                }
            });
        });
    }

    /// Latest published result set
    pub async fn products(&self) -> Option<Vec<ScoredMatch>> {
        self.shared.products.read().await.clone()
    }

    /// Whether the latest fetch failed (no automatic retry)
    pub fn fetch_failed(&self) -> bool {
        self.shared.failed.load(Ordering::SeqCst)
    }
}
