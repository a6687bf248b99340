//! Headless engine for an infinitely-looping horizontal image rail.
//!
//! A finite item list is presented as an endless rail by padding the render
//! sequence with clone slides at both ends and silently re-centering the
//! scroll offset whenever the viewport crosses into clone territory. The
//! engine is pure state: the embedding layer feeds it surface events (with
//! fresh layout snapshots) and applies the commands it returns, so the loop
//! math is fully testable with synthetic geometry.
//!
//! Layering, leaf to root:
//! - [`geometry`] measures stride, segment width, and card width from a
//!   captured [`geometry::RailLayout`];
//! - [`wheel`] normalizes heterogeneous wheel deltas and coalesces them to
//!   one rail mutation per frame;
//! - [`plan`] + [`correction`] own the clone-padded render list and the
//!   boundary-crossing jump;
//! - [`rail`] composes the above per mounted rail;
//! - [`breakpoints`] maps viewport width to the visible card count.

pub mod breakpoints;
pub mod config;
pub mod correction;
pub mod geometry;
pub mod plan;
pub mod rail;
pub mod wheel;

pub use breakpoints::VisibleCountObserver;
pub use config::{Breakpoint, RailConfig};
pub use correction::correction_target;
pub use geometry::{RailGeometry, RailLayout};
pub use plan::{build_render_slides, clone_count};
pub use rail::{RailCommand, RailController, RailEvent, RailKey};
pub use wheel::{WheelDeltaMode, WheelOutcome, WheelRail, WheelSnapshot};

// Model types are part of the public surface.
pub use zoetrope_model::prelude::{
    CarouselItem, RenderSlide, SlideSection, SrcSetCandidate,
};
