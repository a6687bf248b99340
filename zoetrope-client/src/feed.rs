//! Feed state machine: loading status, retry, and the offline fallback.
//!
//! Mirrors the carousel page's data lifecycle: one fetch per mount or
//! retry, a request nonce so stale responses are ignored, and a fallback to
//! deterministic placeholder items when the fetch fails while the host is
//! offline. Failures surface through [`FeedStatus`], never as panics or
//! propagated errors; the rail renders its empty/error treatment from
//! status alone.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use zoetrope_model::prelude::CarouselItem;

use crate::error::Result;
use crate::picsum::{PicsumClient, build_offline_items};

/// Where the feed is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Success,
    Error,
}

/// Anything that can produce the item list (the HTTP client in production,
/// stubs in tests).
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(
        &self,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<CarouselItem>>;
}

#[async_trait]
impl ItemSource for PicsumClient {
    async fn fetch_items(
        &self,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<CarouselItem>> {
        self.fetch_images(limit, cancel).await
    }
}

/// Host-reported connectivity (the `navigator.onLine` seam).
pub trait ConnectivityProbe: Send + Sync {
    fn is_online(&self) -> bool;
}

/// Probe for hosts without connectivity reporting; failures are then always
/// treated as online failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOnline;

impl ConnectivityProbe for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}

/// The feed's observable state plus the request nonce guarding staleness.
#[derive(Debug, Clone)]
pub struct ImageFeed {
    status: FeedStatus,
    items: Vec<CarouselItem>,
    error: Option<String>,
    offline_fallback: bool,
    nonce: u64,
}

impl Default for ImageFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFeed {
    /// A feed that will fetch on first run.
    pub fn new() -> Self {
        Self {
            status: FeedStatus::Loading,
            items: Vec::new(),
            error: None,
            offline_fallback: false,
            nonce: 0,
        }
    }

    /// A feed pre-seeded by the host (server-rendered initial state); no
    /// fetch is required until [`ImageFeed::retry`].
    pub fn with_initial_items(items: Vec<CarouselItem>) -> Self {
        Self {
            status: FeedStatus::Success,
            items,
            error: None,
            offline_fallback: false,
            nonce: 0,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the current items are offline placeholders.
    pub fn is_offline_fallback(&self) -> bool {
        self.offline_fallback
    }

    /// Begin a request: flips to Loading, clears the previous outcome, and
    /// returns the nonce the eventual [`ImageFeed::apply`] must present.
    pub fn begin(&mut self) -> u64 {
        self.status = FeedStatus::Loading;
        self.error = None;
        self.offline_fallback = false;
        self.nonce += 1;
        self.nonce
    }

    /// Re-enter Loading for a user-driven retry. Identical to
    /// [`ImageFeed::begin`]; the separate name matches the host surface.
    pub fn retry(&mut self) -> u64 {
        self.begin()
    }

    /// Apply a finished request. Results carrying a stale nonce are dropped
    /// (a newer retry has superseded them), as are cancellations.
    pub fn apply(
        &mut self,
        nonce: u64,
        outcome: Result<Vec<CarouselItem>>,
        probe: &dyn ConnectivityProbe,
        limit: usize,
    ) {
        if nonce != self.nonce {
            log::debug!("dropping stale feed response (nonce {nonce})");
            return;
        }
        match outcome {
            Ok(items) => {
                self.items = items;
                self.status = FeedStatus::Success;
                self.error = None;
                self.offline_fallback = false;
            }
            Err(err) if err.is_cancelled() => {}
            Err(err) => {
                if !probe.is_online() {
                    log::info!(
                        "listing fetch failed offline; serving placeholders: {err}"
                    );
                    self.items = build_offline_items(limit);
                    self.status = FeedStatus::Success;
                    self.error = None;
                    self.offline_fallback = true;
                } else {
                    log::warn!("listing fetch failed: {err}");
                    self.items = Vec::new();
                    self.status = FeedStatus::Error;
                    self.error = Some(err.to_string());
                    self.offline_fallback = false;
                }
            }
        }
    }

    /// Run one fetch cycle against a source: begin, fetch, apply.
    pub async fn run_fetch(
        &mut self,
        source: &dyn ItemSource,
        probe: &dyn ConnectivityProbe,
        limit: usize,
        cancel: &CancellationToken,
    ) {
        let nonce = self.begin();
        let outcome = source.fetch_items(limit, cancel).await;
        self.apply(nonce, outcome, probe, limit);
    }
}
