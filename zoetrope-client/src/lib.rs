//! Image listing client for the zoetrope rail.
//!
//! Fetches the paginated picsum.photos `/v2/list` listing, maps it into
//! [`zoetrope_model::CarouselItem`]s with responsive renditions, and wraps
//! the lifecycle in [`feed::ImageFeed`]: loading/success/error status, a
//! retry nonce so superseded responses are dropped, cancellation via
//! [`tokio_util::sync::CancellationToken`], and a deterministic offline
//! placeholder set when the host reports no connectivity.
//!
//! The networking seams are traits ([`feed::ItemSource`] and
//! [`feed::ConnectivityProbe`]) so the feed is exercised in tests without a
//! server.

pub mod error;
pub mod feed;
pub mod picsum;

pub use error::{FeedError, Result};
pub use feed::{AlwaysOnline, ConnectivityProbe, FeedStatus, ImageFeed, ItemSource};
pub use picsum::{PICSUM_DEFAULT_LIMIT, PicsumClient, build_offline_items};
