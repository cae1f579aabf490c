//! Cell alignment tests
//!
//! Tests for vertical placement of cells shorter than their row: the
//! top/bottom/center policies, per-section overrides, and the configured
//! default.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use test_case::test_case;

use spangrid::{
    Alignment, ElementKind, GeometryProvider, GridIndex, ItemPath, LayoutConfig, LayoutEngine,
};

/// A 100-point row holding 60-point cells, alignment chosen per test.
struct ShortCells {
    alignment: Option<Alignment>,
}

impl GeometryProvider for ShortCells {
    fn item_height(&self, _index: GridIndex, _path: ItemPath) -> Option<f32> {
        Some(60.0)
    }

    fn row_height(&self, _section: u32, _row: u32) -> Option<f32> {
        Some(100.0)
    }

    fn alignment(&self, _section: u32) -> Option<Alignment> {
        self.alignment
    }
}

fn flat_engine(columns: u32, width: f32) -> LayoutEngine {
    let mut config = LayoutConfig::with_columns(columns);
    config.column_spacing = 0.0;
    config.row_spacing = 0.0;
    config.section_spacing = 0.0;
    let mut engine = LayoutEngine::new(config).unwrap();
    engine.set_available_width(width);
    engine
}

#[test_case(Alignment::Top, 0.0 ; "top aligned cell sits at the row top")]
#[test_case(Alignment::Center, 20.0 ; "centered cell splits the leftover space")]
#[test_case(Alignment::Bottom, 40.0 ; "bottom aligned cell sits at the row bottom")]
fn alignment_places_short_cell(alignment: Alignment, expected_y: f32) {
    let mut engine = flat_engine(4, 400.0);
    engine
        .compute_layout(
            &[1],
            &ShortCells {
                alignment: Some(alignment),
            },
        )
        .unwrap();

    let frame = engine
        .frame_for(ElementKind::Cell, ItemPath::new(0, 0))
        .unwrap();
    assert_eq!(frame.rect.y, expected_y);
    assert_eq!(frame.rect.height, 60.0, "alignment never resizes the cell");
    assert_eq!(
        engine.content_size().height,
        100.0,
        "the row keeps its full height"
    );
}

#[test]
fn test_provider_alignment_is_per_section() {
    struct PerSection;

    impl GeometryProvider for PerSection {
        fn item_height(&self, _index: GridIndex, _path: ItemPath) -> Option<f32> {
            Some(60.0)
        }
        fn row_height(&self, _section: u32, _row: u32) -> Option<f32> {
            Some(100.0)
        }
        fn alignment(&self, section: u32) -> Option<Alignment> {
            match section {
                0 => Some(Alignment::Top),
                _ => Some(Alignment::Bottom),
            }
        }
    }

    let mut engine = flat_engine(4, 400.0);
    engine.compute_layout(&[1, 1], &PerSection).unwrap();

    let first = engine
        .frame_for(ElementKind::Cell, ItemPath::new(0, 0))
        .unwrap();
    assert_eq!(first.rect.y, 0.0, "section 0 aligns to the top");

    // Section 1 starts at 100; bottom alignment adds the 40-point leftover
    let second = engine
        .frame_for(ElementKind::Cell, ItemPath::new(1, 0))
        .unwrap();
    assert_eq!(second.rect.y, 140.0, "section 1 aligns to the bottom");
}

#[test]
fn test_configured_default_when_provider_declines() {
    let mut config = LayoutConfig::with_columns(4);
    config.column_spacing = 0.0;
    config.row_spacing = 0.0;
    config.section_spacing = 0.0;
    config.alignment = Alignment::Bottom;
    let mut engine = LayoutEngine::new(config).unwrap();
    engine.set_available_width(400.0);

    engine
        .compute_layout(&[1], &ShortCells { alignment: None })
        .unwrap();

    let frame = engine
        .frame_for(ElementKind::Cell, ItemPath::new(0, 0))
        .unwrap();
    assert_eq!(frame.rect.y, 40.0, "falls back to the configured bottom");
}

#[test]
fn test_full_height_cell_ignores_alignment() {
    struct FullHeight {
        alignment: Alignment,
    }

    impl GeometryProvider for FullHeight {
        fn item_height(&self, _index: GridIndex, _path: ItemPath) -> Option<f32> {
            Some(100.0)
        }
        fn row_height(&self, _section: u32, _row: u32) -> Option<f32> {
            Some(100.0)
        }
        fn alignment(&self, _section: u32) -> Option<Alignment> {
            Some(self.alignment)
        }
    }

    for alignment in [Alignment::Top, Alignment::Center, Alignment::Bottom] {
        let mut engine = flat_engine(4, 400.0);
        engine
            .compute_layout(&[1], &FullHeight { alignment })
            .unwrap();

        let frame = engine
            .frame_for(ElementKind::Cell, ItemPath::new(0, 0))
            .unwrap();
        assert_eq!(
            frame.rect.y, 0.0,
            "no leftover space to distribute for {:?}",
            alignment
        );
    }
}
