//! Declarative layout descriptions.
//!
//! A [`LayoutScene`] captures the inputs of a pass as plain data: the
//! configuration, the available width, and per-section item counts with
//! cyclic span/height patterns. Scenes deserialize from JSON and implement
//! [`GeometryProvider`] directly, so the CLI, benchmarks, and heavier tests
//! can drive the engine without hand-written providers.

use serde::{Deserialize, Serialize};

use crate::config::{Alignment, LayoutConfig};
use crate::geometry::GridIndex;
use crate::provider::{ElementKind, GeometryProvider, ItemPath};

/// A complete, self-contained description of a layout pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutScene {
    /// Engine configuration for the pass.
    #[serde(default)]
    pub config: LayoutConfig,
    /// Available width the layout packs into.
    #[serde(default = "default_width")]
    pub width: f32,
    /// Sections in layout order.
    #[serde(default)]
    pub sections: Vec<SectionScene>,
}

fn default_width() -> f32 {
    800.0
}

/// One section of a scene.
///
/// Pattern vectors cycle: an item's span is `spans[item % spans.len()]`
/// and a row's height is `row_heights[row % row_heights.len()]`. An empty
/// vector defers to the engine's configured fallback.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionScene {
    /// Number of items in the section.
    pub items: u32,
    /// Cyclic per-item column spans.
    pub spans: Vec<u32>,
    /// Cyclic per-row heights.
    pub row_heights: Vec<f32>,
    /// Cyclic per-item heights.
    pub item_heights: Vec<f32>,
    /// Header band height, if the section has one.
    pub header: Option<f32>,
    /// Footer band height, if the section has one.
    pub footer: Option<f32>,
    /// Alignment override for this section.
    pub alignment: Option<Alignment>,
}

impl LayoutScene {
    /// Per-section item counts in the shape `compute_layout` expects.
    pub fn item_counts(&self) -> Vec<u32> {
        self.sections.iter().map(|section| section.items).collect()
    }

    fn section(&self, section: u32) -> Option<&SectionScene> {
        self.sections.get(section as usize)
    }
}

/// Pick the value at `index` from a cyclic pattern, `None` when empty.
fn cycle<T: Copy>(values: &[T], index: u32) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    values.get(index as usize % values.len()).copied()
}

impl GeometryProvider for LayoutScene {
    fn column_span(&self, _index: GridIndex, path: ItemPath) -> Option<u32> {
        self.section(path.section)
            .and_then(|section| cycle(&section.spans, path.item))
    }

    fn item_height(&self, _index: GridIndex, path: ItemPath) -> Option<f32> {
        self.section(path.section)
            .and_then(|section| cycle(&section.item_heights, path.item))
    }

    fn row_height(&self, section: u32, row: u32) -> Option<f32> {
        self.section(section)
            .and_then(|section| cycle(&section.row_heights, row))
    }

    fn band_height(&self, kind: ElementKind, section: u32) -> Option<f32> {
        let section = self.section(section)?;
        match kind {
            ElementKind::Header => section.header,
            ElementKind::Footer => section.footer,
            ElementKind::Cell => None,
        }
    }

    fn alignment(&self, section: u32) -> Option<Alignment> {
        self.section(section).and_then(|section| section.alignment)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_from_json() {
        let scene: LayoutScene = serde_json::from_str(
            r#"{
                "config": { "columns": 4, "column_spacing": 0.0 },
                "width": 400.0,
                "sections": [
                    { "items": 13, "spans": [1, 1, 1, 1], "header": 40.0, "alignment": "top" },
                    { "items": 10, "spans": [2, 2], "footer": 40.0 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(scene.config.columns, 4);
        assert_eq!(scene.config.column_spacing, 0.0);
        // Unspecified config fields keep their defaults
        assert_eq!(scene.config.row_spacing, 16.0);
        assert_eq!(scene.width, 400.0);
        assert_eq!(scene.item_counts(), vec![13, 10]);
        assert_eq!(scene.sections[0].alignment, Some(Alignment::Top));
        assert_eq!(scene.sections[1].alignment, None);
    }

    #[test]
    fn test_minimal_scene_uses_defaults() {
        let scene: LayoutScene = serde_json::from_str(r#"{ "sections": [{ "items": 3 }] }"#).unwrap();
        assert_eq!(scene.width, 800.0);
        assert_eq!(scene.config.columns, 3);
        // No patterns: the provider declines and the engine falls back
        assert_eq!(scene.column_span(GridIndex::new(0, 0), ItemPath::new(0, 0)), None);
        assert_eq!(scene.row_height(0, 0), None);
    }

    #[test]
    fn test_patterns_cycle() {
        let scene = LayoutScene {
            config: LayoutConfig::default(),
            width: 400.0,
            sections: vec![SectionScene {
                items: 6,
                spans: vec![3, 1],
                row_heights: vec![100.0, 60.0],
                ..SectionScene::default()
            }],
        };

        let spans: Vec<Option<u32>> = (0..5)
            .map(|item| scene.column_span(GridIndex::new(0, 0), ItemPath::new(0, item)))
            .collect();
        assert_eq!(spans, vec![Some(3), Some(1), Some(3), Some(1), Some(3)]);

        assert_eq!(scene.row_height(0, 0), Some(100.0));
        assert_eq!(scene.row_height(0, 1), Some(60.0));
        assert_eq!(scene.row_height(0, 2), Some(100.0));
    }

    #[test]
    fn test_band_heights_by_kind() {
        let scene = LayoutScene {
            config: LayoutConfig::default(),
            width: 400.0,
            sections: vec![SectionScene {
                items: 1,
                header: Some(40.0),
                ..SectionScene::default()
            }],
        };

        assert_eq!(scene.band_height(ElementKind::Header, 0), Some(40.0));
        assert_eq!(scene.band_height(ElementKind::Footer, 0), None);
        assert_eq!(scene.band_height(ElementKind::Cell, 0), None);
        // Out-of-range section has no bands
        assert_eq!(scene.band_height(ElementKind::Header, 9), None);
    }
}
