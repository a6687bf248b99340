//! Rail controller: one per mounted rail, composing the loop plan, the
//! geometry probe, the wheel state, and the hover timer.
//!
//! The controller is message-driven: the embedding layer translates its
//! surface events into [`RailEvent`]s and applies the returned
//! [`RailCommand`]s. All timers and guards live as explicit fields here,
//! created on mount and cleared by [`RailController::teardown`]; nothing is
//! ambient. Frame cadence is host-owned: the controller never sleeps, it
//! only asks for one frame callback at a time via [`RailCommand::RequestFrame`].

use std::time::Instant;

use zoetrope_model::prelude::{CarouselItem, RenderSlide};

use crate::breakpoints::VisibleCountObserver;
use crate::config::RailConfig;
use crate::correction::correction_target;
use crate::geometry::{RailGeometry, RailLayout, card_width};
use crate::plan::{build_render_slides, clone_count};
use crate::wheel::{WheelDeltaMode, WheelOutcome, WheelRail};

/// Keys the rail cares about. Arrow keys are default-prevented so native
/// scrolling stays the only navigation; everything else falls through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other,
}

impl RailKey {
    fn is_arrow(self) -> bool {
        !matches!(self, RailKey::Other)
    }
}

/// Surface events dispatched into the controller.
///
/// Events that need geometry carry a fresh [`RailLayout`] snapshot taken at
/// dispatch time, so every correction evaluation sees the scroll position
/// the surface actually applied, never a stale cache.
#[derive(Debug, Clone)]
pub enum RailEvent {
    /// The item list was replaced (initial load, retry, refresh).
    ItemsChanged { items: Vec<CarouselItem> },
    /// The viewport was resized; drives breakpoints and card width.
    ViewportResized { layout: RailLayout },
    /// The surface reported a scroll position change.
    ScrollOccurred { layout: RailLayout, scroll_x: f32 },
    /// A raw wheel event arrived.
    WheelReceived {
        delta_x: f32,
        delta_y: f32,
        mode: WheelDeltaMode,
    },
    /// The pointer entered a rendered slide.
    PointerEntered { render_index: usize, now: Instant },
    /// The pointer left the slide it was resting on.
    PointerLeft,
    /// A key went down while the rail held focus.
    KeyPressed { key: RailKey },
    /// The host's frame callback fired.
    FrameTicked {
        now: Instant,
        layout: RailLayout,
        scroll_x: f32,
    },
}

/// Mutations the host must apply to its surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RailCommand {
    /// Set the scroll offset without animation.
    ScrollTo { x: f32 },
    /// Scroll by a signed pixel delta without animation. Hosts without a
    /// scroll-by capability fall back to direct offset mutation.
    ScrollBy { dx: f32 },
    /// Update the per-card width the slide layout derives from.
    SetCardWidth { px: f32 },
    /// Schedule exactly one frame callback that dispatches `FrameTicked`.
    RequestFrame,
    /// Consume the triggering input event (no default handling).
    PreventDefault,
}

/// Pending hover-expansion timer.
#[derive(Debug, Clone, Copy)]
struct HoverTimer {
    render_index: usize,
    deadline: Instant,
}

/// Per-instance rail state. See the module docs for the lifecycle.
#[derive(Debug)]
pub struct RailController {
    config: RailConfig,
    items: Vec<CarouselItem>,
    slides: Vec<RenderSlide>,
    visible: VisibleCountObserver,
    clone_count: usize,
    wheel: WheelRail,

    /// Swallows the scroll event a correction itself triggers. Armed when a
    /// correction command is emitted, cleared on the next frame boundary.
    correction_guard: bool,
    /// A mount-time (or clone-count-change) alignment is due on the next
    /// frame.
    pending_alignment: bool,
    /// Alignment was emitted; the frame after it flips `initialized`.
    awaiting_init_frame: bool,
    /// Once true, later re-alignments no longer hide the rail.
    aligned_once: bool,
    /// Gates visibility: false until the first alignment settles.
    initialized: bool,

    hover: Option<HoverTimer>,
    expanded_render_index: Option<usize>,

    torn_down: bool,
}

impl RailController {
    pub fn new(config: RailConfig) -> Self {
        let visible = VisibleCountObserver::new(&config);
        let wheel = WheelRail::new(&config);
        Self {
            config,
            items: Vec::new(),
            slides: Vec::new(),
            visible,
            clone_count: 0,
            wheel,
            correction_guard: false,
            pending_alignment: false,
            awaiting_init_frame: false,
            aligned_once: false,
            initialized: false,
            hover: None,
            expanded_render_index: None,
            torn_down: false,
        }
    }

    /// Dispatch one event and collect the surface mutations it requires.
    pub fn handle(&mut self, event: RailEvent) -> Vec<RailCommand> {
        if self.torn_down {
            return Vec::new();
        }
        match event {
            RailEvent::ItemsChanged { items } => self.on_items_changed(items),
            RailEvent::ViewportResized { layout } => self.on_resized(&layout),
            RailEvent::ScrollOccurred { layout, scroll_x } => {
                self.on_scroll(&layout, scroll_x)
            }
            RailEvent::WheelReceived {
                delta_x,
                delta_y,
                mode,
            } => self.on_wheel(delta_x, delta_y, mode),
            RailEvent::PointerEntered { render_index, now } => {
                self.on_pointer_entered(render_index, now)
            }
            RailEvent::PointerLeft => self.on_pointer_left(),
            RailEvent::KeyPressed { key } => {
                if key.is_arrow() {
                    vec![RailCommand::PreventDefault]
                } else {
                    Vec::new()
                }
            }
            RailEvent::FrameTicked {
                now,
                layout,
                scroll_x,
            } => self.on_frame(now, &layout, scroll_x),
        }
    }

    /// Cancel every pending timer, frame request, and queued input. Events
    /// dispatched after teardown are inert; no partial mutation escapes.
    pub fn teardown(&mut self) {
        self.wheel.cancel();
        self.hover = None;
        self.pending_alignment = false;
        self.awaiting_init_frame = false;
        self.correction_guard = false;
        self.torn_down = true;
    }

    /// Freeze wheel-driven motion (transient states such as modal focus).
    pub fn set_locked(&mut self, locked: bool) {
        self.wheel.set_locked(locked);
    }

    // Accessors for the rendering host.

    /// The clone-padded render sequence, in paint order.
    pub fn slides(&self) -> &[RenderSlide] {
        &self.slides
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    /// Explicit empty state: no items, no loop math.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visibility gate; hosts keep the rail near-transparent until true.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn expanded_render_index(&self) -> Option<usize> {
        self.expanded_render_index
    }

    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible.count()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    // Event arms.

    fn on_items_changed(&mut self, items: Vec<CarouselItem>) -> Vec<RailCommand> {
        self.items = items;
        self.rebuild_plan()
    }

    fn on_resized(&mut self, layout: &RailLayout) -> Vec<RailCommand> {
        let mut cmds = Vec::new();
        if self.visible.observe(layout.client_width).is_some() {
            cmds.extend(self.rebuild_plan());
        }
        cmds.push(RailCommand::SetCardWidth {
            px: card_width(layout, self.visible.count()),
        });
        cmds
    }

    /// Rebuild the render list after the item list or visible count moved.
    /// Alignment re-runs on the next frame; the rail is only hidden for the
    /// very first alignment.
    fn rebuild_plan(&mut self) -> Vec<RailCommand> {
        let total = self.items.len();
        self.clone_count = clone_count(self.visible.count(), total);
        self.slides = build_render_slides(&self.items, self.clone_count);
        self.expanded_render_index = None;
        self.hover = None;

        if total == 0 || self.clone_count == 0 {
            // Empty state renders immediately; there is nothing to align.
            self.pending_alignment = false;
            self.initialized = true;
            return Vec::new();
        }

        if !self.aligned_once {
            self.initialized = false;
        }
        self.pending_alignment = true;
        log::debug!(
            "rail plan rebuilt: total={total} clone_count={} slides={}",
            self.clone_count,
            self.slides.len()
        );
        vec![RailCommand::RequestFrame]
    }

    fn on_scroll(&mut self, layout: &RailLayout, scroll_x: f32) -> Vec<RailCommand> {
        if self.correction_guard {
            // This is the scroll the correction itself produced.
            return Vec::new();
        }
        match self.evaluate_correction(layout, scroll_x) {
            Some(target) => {
                vec![
                    RailCommand::ScrollTo { x: target },
                    RailCommand::RequestFrame,
                ]
            }
            None => Vec::new(),
        }
    }

    /// Re-measure geometry from the snapshot and arm the guard when a jump
    /// is needed.
    fn evaluate_correction(
        &mut self,
        layout: &RailLayout,
        scroll_x: f32,
    ) -> Option<f32> {
        let geo =
            RailGeometry::resolve(layout, self.clone_count, self.items.len())?;
        let target = correction_target(scroll_x, &geo)?;
        self.correction_guard = true;
        log::debug!(
            "loop correction {scroll_x} -> {target} (segment={})",
            geo.real_segment_width
        );
        Some(target)
    }

    fn on_wheel(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        mode: WheelDeltaMode,
    ) -> Vec<RailCommand> {
        match self.wheel.queue(delta_x, delta_y, mode) {
            WheelOutcome::Ignored => Vec::new(),
            WheelOutcome::Suppressed => vec![RailCommand::PreventDefault],
            WheelOutcome::Queued { schedule_frame } => {
                let mut cmds = vec![RailCommand::PreventDefault];
                if schedule_frame {
                    cmds.push(RailCommand::RequestFrame);
                }
                cmds
            }
        }
    }

    fn on_pointer_entered(
        &mut self,
        render_index: usize,
        now: Instant,
    ) -> Vec<RailCommand> {
        self.hover = Some(HoverTimer {
            render_index,
            deadline: now + self.config.hover_activate_delay(),
        });
        vec![RailCommand::RequestFrame]
    }

    fn on_pointer_left(&mut self) -> Vec<RailCommand> {
        self.hover = None;
        self.expanded_render_index = None;
        Vec::new()
    }

    fn on_frame(
        &mut self,
        now: Instant,
        layout: &RailLayout,
        scroll_x: f32,
    ) -> Vec<RailCommand> {
        let mut cmds = Vec::new();
        let mut want_frame = false;

        // The guard covers exactly the window up to this frame boundary.
        self.correction_guard = false;

        if self.awaiting_init_frame {
            self.awaiting_init_frame = false;
            self.aligned_once = true;
            self.initialized = true;
        }

        if self.pending_alignment {
            self.pending_alignment = false;
            if let Some(&first_real) =
                layout.slide_offsets.get(self.clone_count)
            {
                cmds.push(RailCommand::ScrollTo {
                    x: first_real - layout.padding_left,
                });
            }
            // Visibility is restored on the frame after alignment.
            self.awaiting_init_frame = true;
            want_frame = true;
        }

        if let Some(travel) = self.wheel.flush(layout.client_width) {
            // Correct before the programmatic travel so the jump and the
            // travel cannot compound past the clone range.
            if let Some(target) = self.evaluate_correction(layout, scroll_x) {
                cmds.push(RailCommand::ScrollTo { x: target });
                want_frame = true;
            }
            cmds.push(RailCommand::ScrollBy { dx: travel });
        }

        if let Some(timer) = self.hover {
            if now >= timer.deadline {
                self.expanded_render_index = Some(timer.render_index);
                self.hover = None;
            } else {
                // Timer still running; keep frames coming.
                want_frame = true;
            }
        }

        if want_frame {
            cmds.push(RailCommand::RequestFrame);
        }
        cmds
    }
}
