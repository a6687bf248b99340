//! Presentation-layer snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in zoetrope-core or embedding hosts.

pub use super::item::{CarouselItem, SrcSetCandidate};
pub use super::slide::{RenderSlide, SlideSection};
