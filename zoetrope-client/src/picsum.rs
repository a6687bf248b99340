//! Client for the picsum.photos listing API, plus the pure offline
//! placeholder builder used when the network is down.

use reqwest::Client;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use zoetrope_model::prelude::{CarouselItem, SrcSetCandidate};

use crate::error::{FeedError, Result};

/// Listing endpoint page size; the API caps pages at 100 entries.
pub const PICSUM_PAGE_SIZE: usize = 100;

/// Default number of items a rail asks for.
pub const PICSUM_DEFAULT_LIMIT: usize = 1000;

/// Aspect ratio of the offline placeholder art.
pub const OFFLINE_ASPECT_RATIO: f32 = 16.0 / 9.0;

/// Rendition widths offered to the host's responsive image machinery.
const SRC_SET_WIDTHS: [u32; 3] = [400, 800, 1200];

const OFFLINE_PLACEHOLDER: &str = "/offline-placeholder.svg";

/// One entry of the `/v2/list` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct PicsumItem {
    pub id: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
}

/// HTTP client for the image listing, with connection pooling via reqwest.
#[derive(Debug, Clone)]
pub struct PicsumClient {
    client: Client,
    base: Url,
    page_size: usize,
}

impl PicsumClient {
    /// Build a client for the given API base. An empty or blank base is a
    /// deployment error, surfaced before any request is made.
    pub fn new(api_base: &str) -> Result<Self> {
        Self::with_client(Client::new(), api_base)
    }

    /// Build with a preconfigured reqwest client (timeouts, pools).
    pub fn with_client(client: Client, api_base: &str) -> Result<Self> {
        let trimmed = api_base.trim();
        if trimmed.is_empty() {
            return Err(FeedError::MissingApiBase);
        }
        // A trailing slash changes Url::join semantics; normalize it away.
        let base = Url::parse(trimmed.trim_end_matches('/'))?;
        Ok(Self {
            client,
            base,
            page_size: PICSUM_PAGE_SIZE,
        })
    }

    /// Fetch up to `limit` items, fanning out one request per page and
    /// flattening in page order. Cancelling the token abandons the whole
    /// fan-out.
    pub async fn fetch_images(
        &self,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<CarouselItem>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let page_count = limit.div_ceil(self.page_size);
        let fetches = (1..=page_count).map(|page| {
            let page_limit =
                self.page_size.min(limit - (page - 1) * self.page_size);
            self.fetch_page(page, page_limit)
        });

        let pages = tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("listing fetch cancelled (limit={limit})");
                return Err(FeedError::Cancelled);
            }
            pages = futures::future::try_join_all(fetches) => pages?,
        };

        let mut items = map_items(pages.into_iter().flatten());
        items.truncate(limit);
        Ok(items)
    }

    async fn fetch_page(
        &self,
        page: usize,
        limit: usize,
    ) -> Result<Vec<PicsumItem>> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FeedError::MissingApiBase)?
            .extend(["v2", "list"]);

        let response = self
            .client
            .get(url)
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("listing page {page} failed: HTTP {status}");
            return Err(FeedError::Http {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }
}

/// Map listing payload entries to rail items.
pub fn map_items(payload: impl IntoIterator<Item = PicsumItem>) -> Vec<CarouselItem> {
    payload
        .into_iter()
        .map(|item| {
            let aspect_ratio = item.width as f32 / item.height as f32;
            let primary_height = (1200.0 / aspect_ratio).round() as u32;
            CarouselItem {
                src: format!(
                    "https://picsum.photos/id/{}/1200/{primary_height}",
                    item.id
                ),
                src_set: build_src_set(&item.id, aspect_ratio),
                alt: format!("Photo by {}", item.author),
                aspect_ratio,
                id: item.id,
            }
        })
        .collect()
}

fn build_src_set(id: &str, aspect_ratio: f32) -> Vec<SrcSetCandidate> {
    SRC_SET_WIDTHS
        .iter()
        .map(|&w| {
            let h = (w as f32 / aspect_ratio).round() as u32;
            SrcSetCandidate::new(
                format!("https://picsum.photos/id/{id}/{w}/{h}"),
                w,
            )
        })
        .collect()
}

/// Deterministic placeholder items for the offline fallback. Pure; no I/O.
pub fn build_offline_items(limit: usize) -> Vec<CarouselItem> {
    let src_set: Vec<SrcSetCandidate> = SRC_SET_WIDTHS
        .iter()
        .map(|&w| SrcSetCandidate::new(OFFLINE_PLACEHOLDER, w))
        .collect();

    (0..limit)
        .map(|index| CarouselItem {
            id: format!("offline-{index}"),
            src: OFFLINE_PLACEHOLDER.to_string(),
            src_set: src_set.clone(),
            alt: "Offline placeholder image".to_string(),
            aspect_ratio: OFFLINE_ASPECT_RATIO,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_base_is_rejected_up_front() {
        assert!(matches!(
            PicsumClient::new("   "),
            Err(FeedError::MissingApiBase)
        ));
        assert!(matches!(
            PicsumClient::new("not a url"),
            Err(FeedError::InvalidApiBase(_))
        ));
        assert!(PicsumClient::new("https://picsum.photos/").is_ok());
    }

    #[test]
    fn mapping_derives_aspect_ratio_and_renditions() {
        let items = map_items([PicsumItem {
            id: "237".into(),
            author: "André Spieker".into(),
            width: 3500,
            height: 2095,
        }]);
        assert_eq!(items.len(), 1);
        let item = &items[0];

        let ar = 3500.0 / 2095.0;
        assert!((item.aspect_ratio - ar).abs() < 1e-6);
        assert_eq!(item.alt, "Photo by André Spieker");

        let h1200 = (1200.0 / ar).round() as u32;
        assert_eq!(
            item.src,
            format!("https://picsum.photos/id/237/1200/{h1200}")
        );
        assert_eq!(item.src_set.len(), 3);
        assert_eq!(item.src_set[0].width, 400);
        let h400 = (400.0 / ar).round() as u32;
        assert_eq!(
            item.src_set[0].url,
            format!("https://picsum.photos/id/237/400/{h400}")
        );
    }

    #[test]
    fn offline_items_are_deterministic_and_sized_to_limit() {
        let items = build_offline_items(3);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, "offline-0");
        assert_eq!(items[2].id, "offline-2");
        assert!(items.iter().all(|i| i.src == OFFLINE_PLACEHOLDER));
        assert!(
            items
                .iter()
                .all(|i| i.aspect_ratio == OFFLINE_ASPECT_RATIO)
        );
        assert!(build_offline_items(0).is_empty());
    }
}
