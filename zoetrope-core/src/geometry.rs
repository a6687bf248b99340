//! Pure geometry measurement over a captured layout snapshot.
//!
//! The embedding layer samples the live surface into a [`RailLayout`] on
//! every scroll/resize/frame event; nothing here is cached across events,
//! since responsive relayout can change every measurement between two
//! ticks.

/// Layout measurements of the rendered rail at one instant.
///
/// `slide_offsets[i]` is the start offset of rendered slide `i` relative to
/// the rail's content box; `slide_widths[i]` is its border-box width.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RailLayout {
    pub slide_offsets: Vec<f32>,
    pub slide_widths: Vec<f32>,
    /// Visible width of the rail container.
    pub client_width: f32,
    pub padding_left: f32,
    pub padding_right: f32,
    /// Gap between adjacent slides.
    pub gap: f32,
}

/// How many leading slide pairs to sample when averaging the stride.
const STRIDE_SAMPLE_PAIRS: usize = 6;

/// Average spacing between consecutive slide start offsets.
///
/// Samples up to the first [`STRIDE_SAMPLE_PAIRS`] pairs, discarding zero
/// deltas. Falls back to the first slide's width, then the rail's visible
/// width, then 0 when the rail is unmeasurable.
pub fn measure_slide_stride(layout: &RailLayout) -> f32 {
    let sample = layout.slide_offsets.len().min(STRIDE_SAMPLE_PAIRS);
    let mut deltas: Vec<f32> = Vec::with_capacity(sample.saturating_sub(1));
    for pair in layout.slide_offsets[..sample].windows(2) {
        let stride = (pair[1] - pair[0]).abs();
        if stride > 0.0 {
            deltas.push(stride);
        }
    }

    if !deltas.is_empty() {
        let total: f32 = deltas.iter().sum();
        return total / deltas.len() as f32;
    }

    if let Some(&first_width) = layout.slide_widths.first() {
        if first_width > 0.0 {
            return first_width;
        }
    }
    if layout.client_width > 0.0 {
        return layout.client_width;
    }

    log::debug!("rail stride unmeasurable; degrading to 0");
    0.0
}

/// Width of one full real segment: first real slide to first tail clone.
///
/// Falls back to `stride * total`, then the rail's visible width.
pub fn measure_loop_segment_width(
    layout: &RailLayout,
    clone_count: usize,
    total: usize,
    stride: f32,
) -> f32 {
    let first_real = layout.slide_offsets.get(clone_count);
    let first_tail = layout.slide_offsets.get(clone_count + total);

    if let (Some(&real), Some(&tail)) = (first_real, first_tail) {
        let segment_width = (tail - real).abs();
        if segment_width > 0.0 {
            return segment_width;
        }
    }

    if stride > 0.0 {
        return stride * total as f32;
    }
    layout.client_width
}

/// Width of one card so `visible` cards tile the rail's inner width.
///
/// Clamped at zero; degenerate rails (padding wider than the container)
/// produce zero-width cards rather than negatives.
pub fn card_width(layout: &RailLayout, visible: usize) -> f32 {
    let visible = visible.max(1);
    let inner = (layout.client_width - layout.padding_left - layout.padding_right)
        .max(0.0);
    let width = (inner - layout.gap * (visible - 1) as f32) / visible as f32;
    width.max(0.0)
}

/// Derived geometry for one boundary-correction evaluation.
///
/// Recomputed fresh from a [`RailLayout`] every time correction runs; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RailGeometry {
    /// Average pitch between adjacent slide starts.
    pub stride: f32,
    /// Distance from the first real slide to the first tail clone.
    pub real_segment_width: f32,
    /// Scroll offsets below this are head-clone territory.
    pub left_boundary: f32,
    /// Scroll offsets at or beyond this are tail-clone territory.
    pub right_boundary: f32,
}

impl RailGeometry {
    /// Resolve geometry for correction, or `None` when the loop math cannot
    /// run (no items, no clones, or the boundary slides are not rendered).
    pub fn resolve(
        layout: &RailLayout,
        clone_count: usize,
        total: usize,
    ) -> Option<Self> {
        if total == 0 || clone_count == 0 {
            return None;
        }
        let first_real = *layout.slide_offsets.get(clone_count)?;
        let first_tail = *layout.slide_offsets.get(clone_count + total)?;

        let stride = measure_slide_stride(layout);
        let real_segment_width =
            measure_loop_segment_width(layout, clone_count, total, stride);

        let half_stride = if stride > 0.0 { stride / 2.0 } else { 0.0 };
        Some(Self {
            stride,
            real_segment_width,
            left_boundary: first_real - half_stride,
            right_boundary: first_tail - half_stride,
        })
    }
}
