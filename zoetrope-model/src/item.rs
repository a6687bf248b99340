//! Items as supplied by the image-listing collaborator.
//!
//! Items are constructed once by the feed layer and treated as read-only by
//! the rail core; nothing here mutates after construction.

/// One responsive source candidate for an item, ordered by intrinsic width.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SrcSetCandidate {
    /// Absolute URL of this rendition.
    pub url: String,
    /// Intrinsic pixel width of this rendition.
    pub width: u32,
}

impl SrcSetCandidate {
    pub fn new(url: impl Into<String>, width: u32) -> Self {
        Self {
            url: url.into(),
            width,
        }
    }

    /// Render as a `"{url} {width}w"` srcset entry.
    pub fn descriptor(&self) -> String {
        format!("{} {}w", self.url, self.width)
    }
}

/// A single image in the rail's item list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    /// Server-issued identifier, unique within one feed response.
    pub id: String,
    /// Primary image URL (largest rendition).
    pub src: String,
    /// Responsive candidates, ascending by width.
    pub src_set: Vec<SrcSetCandidate>,
    /// Accessible description.
    pub alt: String,
    /// Width / height of the source image; always positive.
    pub aspect_ratio: f32,
}

impl CarouselItem {
    /// Join the candidates into a comma-separated srcset attribute value.
    pub fn src_set_attr(&self) -> String {
        self.src_set
            .iter()
            .map(SrcSetCandidate::descriptor)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
