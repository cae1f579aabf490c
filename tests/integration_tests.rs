//! End-to-end layout tests
//!
//! Drives the engine through a scene description resembling a real feed:
//! four sections with different span patterns, alternating row heights,
//! per-section alignments, and bands everywhere.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use spangrid::{
    Alignment, ElementKind, ItemPath, LayoutConfig, LayoutEngine, LayoutScene, Rect, SectionScene,
};

/// Four sections, 48 items, spans [1,1,1,1] / [2,2] / [3,1] / [1,2,1].
fn feed_scene() -> LayoutScene {
    let section = |items: u32, spans: &[u32], alignment: Alignment| SectionScene {
        items,
        spans: spans.to_vec(),
        row_heights: vec![100.0, 60.0],
        header: Some(40.0),
        footer: Some(40.0),
        alignment: Some(alignment),
        ..SectionScene::default()
    };

    LayoutScene {
        config: LayoutConfig::with_columns(4),
        width: 408.0,
        sections: vec![
            section(13, &[1, 1, 1, 1], Alignment::Top),
            section(10, &[2, 2], Alignment::Bottom),
            section(9, &[3, 1], Alignment::Center),
            section(16, &[1, 2, 1], Alignment::Top),
        ],
    }
}

fn computed_engine(scene: &LayoutScene) -> LayoutEngine {
    let mut engine = LayoutEngine::new(scene.config).unwrap();
    engine.set_available_width(scene.width);
    engine.compute_layout(&scene.item_counts(), scene).unwrap();
    engine
}

#[test]
fn test_feed_places_every_element() {
    let scene = feed_scene();
    let mut engine = LayoutEngine::new(scene.config).unwrap();
    engine.set_available_width(scene.width);
    let summary = engine.compute_layout(&scene.item_counts(), &scene).unwrap();

    // 48 cells plus a header and footer per section
    assert_eq!(summary.frames, 48 + 8);
    assert!(summary.violations.is_empty());
}

#[test]
fn test_feed_content_height() {
    let scene = feed_scene();
    let engine = computed_engine(&scene);

    // Section heights (bands 40+40, rows alternating 100/60, gaps 16):
    //   13 items in rows of 4 -> 4 rows:  80 + 320 + 48  = 448
    //   10 items in rows of 2 -> 5 rows:  80 + 420 + 64  = 564
    //    9 items in rows of 2 -> 5 rows:  80 + 420 + 64  = 564
    //   16 items in rows of 3 -> 6 rows:  80 + 480 + 80  = 640
    // plus three 32-point section gaps
    assert_eq!(engine.content_size().height, 2_312.0);
    assert_eq!(engine.content_size().width, 408.0);
}

#[test]
fn test_feed_spanning_section_geometry() {
    let scene = feed_scene();
    let engine = computed_engine(&scene);

    // Section 1 starts after section 0 (448) and the section gap (32).
    // Column width is (408 - 3*8) / 4 = 96, so a 2-span item is 200 wide.
    let first = engine
        .frame_for(ElementKind::Cell, ItemPath::new(1, 0))
        .unwrap();
    assert_eq!(first.rect.width, 200.0);
    assert_eq!(first.rect.x, 0.0);
    assert_eq!(
        first.rect.y, 560.0,
        "bottom aligned: 480 + 40 header + (100 - 60) leftover"
    );

    let second = engine
        .frame_for(ElementKind::Cell, ItemPath::new(1, 1))
        .unwrap();
    assert_eq!(second.rect.x, 208.0, "two columns plus the gaps");
}

#[test]
fn test_feed_region_query_matches_band_positions() {
    let scene = feed_scene();
    let engine = computed_engine(&scene);

    // The first 40 points contain exactly the first header
    let top = engine.frames_intersecting(Rect::new(0.0, 0.0, 408.0, 40.0));
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].kind, ElementKind::Header);
    assert_eq!(top[0].path, ItemPath::new(0, 0));

    // A viewport over the second section sees no frames from the first
    let viewport = Rect::new(0.0, 480.0, 408.0, 500.0);
    let visible = engine.frames_intersecting(viewport);
    assert!(!visible.is_empty());
    assert!(visible.iter().all(|frame| frame.path.section == 1));
}

#[test]
fn test_feed_results_are_stable_across_recomputes() {
    let scene = feed_scene();
    let mut engine = LayoutEngine::new(scene.config).unwrap();
    engine.set_available_width(scene.width);

    let first = engine.compute_layout(&scene.item_counts(), &scene).unwrap();
    engine.invalidate();
    let second = engine.compute_layout(&scene.item_counts(), &scene).unwrap();

    assert_eq!(first, second);
}
