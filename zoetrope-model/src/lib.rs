//! Core data model definitions shared across zoetrope crates.
#![allow(missing_docs)]

pub mod item;
pub mod prelude;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use item::{CarouselItem, SrcSetCandidate};
pub use slide::{RenderSlide, SlideSection};
