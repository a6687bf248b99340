//! End-to-end rail lifecycle against synthetic geometry: mount, align,
//! wrap in both directions, wheel travel, and teardown, the way an
//! embedding host would drive the controller.

use std::time::Instant;

use zoetrope_core::{
    CarouselItem, RailCommand, RailConfig, RailController, RailEvent,
    RailLayout, SlideSection, SrcSetCandidate, WheelDeltaMode,
};

fn items(n: usize) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| CarouselItem {
            id: format!("pic-{i}"),
            src: format!("https://picsum.photos/id/{i}/1200/675"),
            src_set: vec![
                SrcSetCandidate::new(
                    format!("https://picsum.photos/id/{i}/400/225"),
                    400,
                ),
                SrcSetCandidate::new(
                    format!("https://picsum.photos/id/{i}/800/450"),
                    800,
                ),
            ],
            alt: format!("Photo by author {i}"),
            aspect_ratio: 16.0 / 9.0,
        })
        .collect()
}

fn desktop_layout(slide_count: usize) -> RailLayout {
    RailLayout {
        slide_offsets: (0..slide_count).map(|i| i as f32 * 400.0).collect(),
        slide_widths: vec![500.0; slide_count],
        client_width: 1000.0,
        padding_left: 8.0,
        padding_right: 8.0,
        gap: 12.0,
    }
}

/// Drive a fresh controller to the settled, aligned state.
fn mount(total: usize) -> (RailController, RailLayout) {
    let mut rail = RailController::new(RailConfig::default());
    rail.handle(RailEvent::ViewportResized {
        layout: RailLayout {
            client_width: 1280.0,
            ..RailLayout::default()
        },
    });
    rail.handle(RailEvent::ItemsChanged { items: items(total) });
    let layout = desktop_layout(rail.slides().len());
    let now = Instant::now();
    rail.handle(RailEvent::FrameTicked {
        now,
        layout: layout.clone(),
        scroll_x: 0.0,
    });
    rail.handle(RailEvent::FrameTicked {
        now,
        layout: layout.clone(),
        scroll_x: 1992.0,
    });
    (rail, layout)
}

#[test]
fn render_list_shape_and_labels_survive_the_full_mount() {
    let (rail, _) = mount(10);
    // N + 2 * min(visible, N) rendered positions.
    assert_eq!(rail.slides().len(), 10 + 2 * 5);
    assert!(rail.is_initialized());

    for (render_index, slide) in rail.slides().iter().enumerate() {
        let expected_logical = match slide.section {
            SlideSection::Head => 5 + render_index,
            SlideSection::Real => render_index - 5,
            SlideSection::Tail => render_index - 15,
        };
        assert_eq!(slide.logical_index, expected_logical);
        assert_eq!(
            slide.label(10),
            format!("Slide {} of 10", expected_logical + 1)
        );
    }
}

#[test]
fn tail_crossing_at_desktop_widths_matches_the_shipped_numbers() {
    let (mut rail, layout) = mount(10);
    // cloneCount=5, stride=400 => firstTail at 6000, boundary at 5800,
    // realSegmentWidth=4000.
    let cmds = rail.handle(RailEvent::ScrollOccurred {
        layout,
        scroll_x: 6100.0,
    });
    assert!(cmds.contains(&RailCommand::ScrollTo { x: 2100.0 }));
}

#[test]
fn head_crossing_shifts_forward_and_round_trips() {
    let (mut rail, layout) = mount(10);
    let cmds = rail.handle(RailEvent::ScrollOccurred {
        layout: layout.clone(),
        scroll_x: 1700.0,
    });
    let target = cmds
        .iter()
        .find_map(|c| match c {
            RailCommand::ScrollTo { x } => Some(*x),
            _ => None,
        })
        .expect("head crossing must correct");
    assert_eq!(target, 5700.0);

    // Let the guard clear, then drift back across the tail by one segment:
    // the offsets round-trip.
    rail.handle(RailEvent::FrameTicked {
        now: Instant::now(),
        layout: layout.clone(),
        scroll_x: target,
    });
    let cmds = rail.handle(RailEvent::ScrollOccurred {
        layout,
        scroll_x: target + 100.0,
    });
    assert!(cmds.contains(&RailCommand::ScrollTo { x: 1800.0 }));
}

#[test]
fn wheel_travel_advances_the_rail_between_corrections() {
    let (mut rail, layout) = mount(10);
    rail.handle(RailEvent::WheelReceived {
        delta_x: 160.0,
        delta_y: 100.0,
        mode: WheelDeltaMode::Pixel,
    });
    let cmds = rail.handle(RailEvent::FrameTicked {
        now: Instant::now(),
        layout,
        scroll_x: 3000.0,
    });
    // Horizontal dominance: 160 > 100 * 1.2; travel = 160 * 0.65.
    let dx = cmds
        .iter()
        .find_map(|c| match c {
            RailCommand::ScrollBy { dx } => Some(*dx),
            _ => None,
        })
        .expect("queued wheel must travel");
    assert!((dx - 104.0).abs() < 1e-4);
}

#[test]
fn single_item_rail_still_loops() {
    let (rail, _) = mount(1);
    // clone_count = min(5, 1) = 1: one head clone, one real, one tail clone.
    assert_eq!(rail.slides().len(), 3);
    assert_eq!(rail.clone_count(), 1);
    assert!(rail.slides()[0].is_clone());
    assert!(!rail.slides()[1].is_clone());
}

#[test]
fn teardown_cancels_pending_work_mid_flight() {
    let (mut rail, layout) = mount(10);
    rail.handle(RailEvent::WheelReceived {
        delta_x: 0.0,
        delta_y: 120.0,
        mode: WheelDeltaMode::Pixel,
    });
    rail.handle(RailEvent::PointerEntered {
        render_index: 6,
        now: Instant::now(),
    });
    rail.teardown();
    let cmds = rail.handle(RailEvent::FrameTicked {
        now: Instant::now(),
        layout,
        scroll_x: 3000.0,
    });
    assert!(cmds.is_empty());
    assert_eq!(rail.expanded_render_index(), None);
}
