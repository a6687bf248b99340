//! Wheel input normalization and per-frame coalescing.
//!
//! Raw wheel events are wildly heterogeneous: pixel, line, or page units,
//! two axes, and arrival rates far above the display's refresh cadence.
//! This module reduces each event to a single signed pixel travel and
//! guarantees at most one rail mutation per frame, applying the *latest*
//! snapshot rather than an accumulation so event bursts cannot produce
//! runaway velocity.

use crate::config::RailConfig;

/// Unit of a wheel event's delta values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

/// Dominant-axis delta captured from one wheel event. Consumed at most once
/// per frame, then discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSnapshot {
    pub axis_delta: f32,
    pub mode: WheelDeltaMode,
}

/// What the controller should do with a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Both deltas were zero; let the event fall through untouched.
    Ignored,
    /// Motion is locked; consume the event but queue nothing.
    Suppressed,
    /// Snapshot queued; `schedule_frame` is true when no flush is pending
    /// yet and the host must request one frame callback.
    Queued { schedule_frame: bool },
}

/// Pick the delta of the dominant axis.
///
/// The horizontal delta wins only when it beats the vertical one by the
/// dominance ratio (trackpad side-swipes); otherwise vertical wheel motion
/// drives the rail.
pub fn choose_primary_axis_delta(
    delta_x: f32,
    delta_y: f32,
    axis_dominance: f32,
) -> f32 {
    let horizontal = delta_x.abs();
    let vertical = delta_y.abs();
    if horizontal == 0.0 && vertical == 0.0 {
        return 0.0;
    }
    if horizontal > vertical * axis_dominance {
        delta_x
    } else {
        delta_y
    }
}

/// Convert a raw delta to pixels: lines scale by the configured line
/// height, pages by the rail's visible width.
pub fn wheel_delta_to_pixels(
    delta: f32,
    mode: WheelDeltaMode,
    client_width: f32,
    line_delta_px: f32,
) -> f32 {
    let mode_factor = match mode {
        WheelDeltaMode::Pixel => 1.0,
        WheelDeltaMode::Line => line_delta_px,
        WheelDeltaMode::Page => client_width,
    };
    delta * mode_factor
}

/// Per-rail wheel state: the pending snapshot, the outstanding-frame flag,
/// and the motion lock. Created on mount, cleared on teardown.
#[derive(Debug, Clone)]
pub struct WheelRail {
    gain: f32,
    line_delta_px: f32,
    axis_dominance: f32,
    /// Last-writer-wins snapshot awaiting the next frame flush.
    pending: Option<WheelSnapshot>,
    /// Whether a frame callback is already outstanding.
    frame_scheduled: bool,
    locked: bool,
}

impl WheelRail {
    pub fn new(cfg: &RailConfig) -> Self {
        Self {
            gain: cfg.wheel_gain,
            line_delta_px: cfg.line_delta_px,
            axis_dominance: cfg.axis_dominance,
            pending: None,
            frame_scheduled: false,
            locked: false,
        }
    }

    /// Freeze or unfreeze the rail. While locked, events are suppressed and
    /// nothing accumulates.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Record one wheel event. Supersedes any snapshot still pending from
    /// earlier in the same frame.
    pub fn queue(
        &mut self,
        delta_x: f32,
        delta_y: f32,
        mode: WheelDeltaMode,
    ) -> WheelOutcome {
        if self.locked {
            return WheelOutcome::Suppressed;
        }

        let axis_delta =
            choose_primary_axis_delta(delta_x, delta_y, self.axis_dominance);
        if axis_delta == 0.0 {
            return WheelOutcome::Ignored;
        }

        self.pending = Some(WheelSnapshot { axis_delta, mode });
        let schedule_frame = !self.frame_scheduled;
        self.frame_scheduled = true;
        WheelOutcome::Queued { schedule_frame }
    }

    /// Apply the pending snapshot at a frame boundary, returning the signed
    /// travel in pixels. Zero travel after normalization is reported as
    /// `None` so no scroll call is issued.
    pub fn flush(&mut self, client_width: f32) -> Option<f32> {
        self.frame_scheduled = false;
        let snapshot = self.pending.take()?;

        let px_delta = wheel_delta_to_pixels(
            snapshot.axis_delta,
            snapshot.mode,
            client_width,
            self.line_delta_px,
        );
        let travel = px_delta * self.gain;
        if travel == 0.0 {
            return None;
        }
        Some(travel)
    }

    /// Drop the pending snapshot and outstanding-frame flag (teardown).
    pub fn cancel(&mut self) {
        self.pending = None;
        self.frame_scheduled = false;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
