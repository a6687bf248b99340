//! Viewport-width breakpoints driving the visible card count.
//!
//! Push-based: the host forwards width-change notifications and the
//! observer reports only actual count transitions. The value before any
//! observed width is the configured default on every host, so a
//! server-rendered first frame and the client's hydrated one agree.

use crate::config::{Breakpoint, RailConfig};

/// Card count for a width under the given breakpoints (largest-first).
pub fn count_for_width(
    width: f32,
    breakpoints: &[Breakpoint],
    default_count: usize,
) -> usize {
    breakpoints
        .iter()
        .find(|bp| width >= bp.min_width)
        .map(|bp| bp.card_count)
        .unwrap_or(default_count)
}

/// State machine over the ordered breakpoint list.
#[derive(Debug, Clone)]
pub struct VisibleCountObserver {
    breakpoints: Vec<Breakpoint>,
    default_count: usize,
    current: usize,
}

impl VisibleCountObserver {
    /// Breakpoints are sorted largest-first at construction so lookup is a
    /// single forward scan.
    pub fn new(cfg: &RailConfig) -> Self {
        let mut breakpoints = cfg.breakpoints.clone();
        breakpoints.sort_by(|a, b| {
            b.min_width
                .partial_cmp(&a.min_width)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            breakpoints,
            default_count: cfg.default_card_count.max(1),
            current: cfg.default_card_count.max(1),
        }
    }

    /// The current card count; the deterministic default until the first
    /// width is observed.
    pub fn count(&self) -> usize {
        self.current
    }

    /// Feed a viewport-width change. Returns `Some(new_count)` only when
    /// the count actually transitions.
    pub fn observe(&mut self, width: f32) -> Option<usize> {
        let next =
            count_for_width(width, &self.breakpoints, self.default_count)
                .max(1);
        if next == self.current {
            return None;
        }
        log::debug!(
            "visible card count {} -> {} at width {width}",
            self.current,
            next
        );
        self.current = next;
        Some(next)
    }
}
