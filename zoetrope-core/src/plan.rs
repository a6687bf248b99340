//! Render-list construction for the clone-padded rail.
//!
//! The rendered sequence is `clone_count` head clones (the last items, in
//! order), all real items, then `clone_count` tail clones (the first items,
//! in order). Clone counts never exceed the item count, so the two clone
//! ranges are always pixel-identical copies of the adjacent real stretch.

use zoetrope_model::prelude::{CarouselItem, RenderSlide, SlideSection};

/// Clones per side for a rail showing `visible` cards over `total` items.
pub fn clone_count(visible: usize, total: usize) -> usize {
    visible.min(total)
}

/// Build the full render sequence. Empty input produces an empty plan; the
/// controller surfaces that as an explicit empty state and no loop math
/// runs.
pub fn build_render_slides(
    items: &[CarouselItem],
    clone_count: usize,
) -> Vec<RenderSlide> {
    let total = items.len();
    if total == 0 {
        return Vec::new();
    }
    let clone_count = clone_count.min(total);
    let mut slides = Vec::with_capacity(total + 2 * clone_count);

    for (item, logical_index) in
        items[total - clone_count..].iter().zip(total - clone_count..)
    {
        slides.push(RenderSlide::new(
            &item.id,
            SlideSection::Head,
            logical_index,
            logical_index,
            logical_index,
        ));
    }

    for (index, item) in items.iter().enumerate() {
        slides.push(RenderSlide::new(
            &item.id,
            SlideSection::Real,
            index,
            index,
            index,
        ));
    }

    for (clone_index, item) in items[..clone_count].iter().enumerate() {
        slides.push(RenderSlide::new(
            &item.id,
            SlideSection::Tail,
            clone_index,
            clone_index,
            clone_index,
        ));
    }

    slides
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use zoetrope_model::prelude::SrcSetCandidate;

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem {
                id: format!("item-{i}"),
                src: format!("https://img.example/{i}/1200/675"),
                src_set: vec![SrcSetCandidate::new(
                    format!("https://img.example/{i}/400/225"),
                    400,
                )],
                alt: format!("Photo {i}"),
                aspect_ratio: 16.0 / 9.0,
            })
            .collect()
    }

    #[test]
    fn rendered_count_is_total_plus_two_clone_ranges() {
        for (total, visible) in [(10, 5), (10, 3), (3, 5), (1, 2), (2, 2)] {
            let list = items(total);
            let clones = clone_count(visible, total);
            let slides = build_render_slides(&list, clones);
            assert_eq!(slides.len(), total + 2 * clones.min(total));
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(build_render_slides(&[], 5).is_empty());
    }

    #[test]
    fn sections_come_in_head_real_tail_order() {
        let list = items(10);
        let slides = build_render_slides(&list, 5);

        assert!(slides[..5]
            .iter()
            .all(|s| s.section == SlideSection::Head));
        assert!(slides[5..15]
            .iter()
            .all(|s| s.section == SlideSection::Real));
        assert!(slides[15..]
            .iter()
            .all(|s| s.section == SlideSection::Tail));

        // Head clones mirror the last items in order; tail clones the first.
        let head_logical: Vec<_> =
            slides[..5].iter().map(|s| s.logical_index).collect();
        assert_eq!(head_logical, vec![5, 6, 7, 8, 9]);
        let tail_logical: Vec<_> =
            slides[15..].iter().map(|s| s.logical_index).collect();
        assert_eq!(tail_logical, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn labels_follow_logical_indices() {
        let list = items(10);
        let slides = build_render_slides(&list, 5);
        assert_eq!(slides[0].label(10), "Slide 6 of 10");
        assert_eq!(slides[5].label(10), "Slide 1 of 10");
        assert_eq!(slides[19].label(10), "Slide 5 of 10");
    }

    #[test]
    fn keys_are_unique_even_when_clone_ranges_cover_everything() {
        // clone_count == total: every item appears three times.
        let list = items(3);
        let slides = build_render_slides(&list, 5);
        assert_eq!(slides.len(), 9);
        let keys: HashSet<_> = slides.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys.len(), slides.len());
    }
}
