//! Rendered slide positions for the clone-padded rail.

use std::fmt;

/// Which stretch of the render list a slide belongs to.
///
/// Head and tail slides duplicate real items so the rail can wrap without a
/// visible seam; the correction math only ever lands the viewport back on
/// the real stretch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideSection {
    /// Clones of the last items, rendered before the real stretch.
    Head,
    /// The actual item list, in order.
    Real,
    /// Clones of the first items, rendered after the real stretch.
    Tail,
}

impl SlideSection {
    /// Stable lowercase token used in slide keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideSection::Head => "head",
            SlideSection::Real => "real",
            SlideSection::Tail => "tail",
        }
    }
}

impl fmt::Display for SlideSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered position on the rail.
///
/// Clones carry the `item_index` of the real item they duplicate, so hosts
/// render them from the same `CarouselItem`. `key` is unique per rendered
/// position even when clone ranges overlap in content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSlide {
    /// Stable identity for the rendered position.
    pub key: String,
    /// Index announced to assistive tech; always the true item position.
    pub logical_index: usize,
    /// Which item to render at this position.
    pub item_index: usize,
    /// Head clone, real slide, or tail clone.
    pub section: SlideSection,
}

impl RenderSlide {
    pub fn new(
        item_id: &str,
        section: SlideSection,
        logical_index: usize,
        item_index: usize,
        key_index: usize,
    ) -> Self {
        Self {
            key: format!("{item_id}-{section}-{key_index}"),
            logical_index,
            item_index,
            section,
        }
    }

    /// Accessible label for the slide's article element.
    pub fn label(&self, total: usize) -> String {
        format!("Slide {} of {}", self.logical_index + 1, total)
    }

    pub fn is_clone(&self) -> bool {
        self.section != SlideSection::Real
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based_over_total() {
        let slide =
            RenderSlide::new("abc", SlideSection::Real, 4, 4, 4);
        assert_eq!(slide.label(10), "Slide 5 of 10");
    }

    #[test]
    fn keys_embed_section_and_index() {
        let head = RenderSlide::new("abc", SlideSection::Head, 9, 9, 9);
        let tail = RenderSlide::new("abc", SlideSection::Tail, 0, 0, 0);
        assert_eq!(head.key, "abc-head-9");
        assert_eq!(tail.key, "abc-tail-0");
        assert!(head.is_clone());
    }
}
