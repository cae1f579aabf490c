//! Frame cache ownership and the query surface of the layout engine.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::{ContractViolation, LayoutError, Result};
use crate::geometry::{GridIndex, Rect, Size};
use crate::provider::{ElementKind, GeometryProvider, ItemPath};

use super::pass::PackingPass;

/// Composite cache key: kind, section, item. A single flat map replaces
/// nested per-kind maps with identical lookup semantics.
pub(super) type FrameKey = (ElementKind, u32, u32);

/// A positioned element produced by a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// What the frame positions.
    pub kind: ElementKind,
    /// Flat identity of the element.
    pub path: ItemPath,
    /// Position and extents in content coordinates.
    pub rect: Rect,
    /// Packed (row, column) position; present only for cells.
    pub index: Option<GridIndex>,
}

/// Outcome of a completed pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSummary {
    /// Total content extent: available width × accumulated height.
    pub content_size: Size,
    /// Number of frames in the cache (cells and bands).
    pub frames: usize,
    /// Provider-contract breaches observed during the pass, in order.
    pub violations: Vec<ContractViolation>,
}

/// Computes and caches a sectioned span-grid layout.
///
/// The engine owns the frame cache exclusively: it is cleared wholesale on
/// [`invalidate`](Self::invalidate) and rebuilt wholesale by the next
/// [`compute_layout`](Self::compute_layout), so the cache is always either
/// empty or fully consistent with the inputs of the last pass. Queries
/// before the first completed pass return empty results.
///
/// One instance is single-owner, single-writer: mutation takes `&mut self`
/// and queries take `&self`, so concurrent use requires external mutual
/// exclusion or independent instances.
pub struct LayoutEngine {
    config: LayoutConfig,
    available_width: f32,
    frames: HashMap<FrameKey, Frame>,
    summary: Option<LayoutSummary>,
}

impl LayoutEngine {
    /// Create an engine with the given configuration.
    ///
    /// # Errors
    /// Returns a configuration error instead of constructing an engine
    /// that could never run a pass.
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            available_width: 0.0,
            frames: HashMap::new(),
            summary: None,
        })
    }

    /// Engine with the default configuration and the given column count.
    ///
    /// # Errors
    /// Returns [`LayoutError::ZeroColumns`] when `columns` is 0.
    pub fn with_columns(columns: u32) -> Result<Self> {
        Self::new(LayoutConfig::with_columns(columns))
    }

    /// The active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replace the configuration and invalidate the cache.
    ///
    /// # Errors
    /// An invalid replacement is rejected and the engine keeps its current
    /// configuration and cache.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.invalidate();
        Ok(())
    }

    /// Width the layout packs into, pushed in by the host.
    pub fn available_width(&self) -> f32 {
        self.available_width
    }

    /// Update the available width. A changed width invalidates the cache;
    /// pushing the same width again keeps it.
    pub fn set_available_width(&mut self, width: f32) {
        if (width - self.available_width).abs() > f32::EPSILON {
            self.available_width = width;
            self.invalidate();
        }
    }

    /// Drop all cached frames and the cached summary. The next
    /// [`compute_layout`](Self::compute_layout) runs a fresh pass.
    ///
    /// Must be called whenever the provider's backing data changes;
    /// configuration and width changes invalidate on their own.
    pub fn invalidate(&mut self) {
        self.frames.clear();
        self.summary = None;
    }

    /// Run the packing pass and populate the frame cache.
    ///
    /// `section_item_counts` holds one item count per section, in section
    /// order. Idempotent: a second call without an intervening
    /// [`invalidate`](Self::invalidate) returns the cached summary without
    /// touching the provider.
    ///
    /// # Errors
    /// Configuration errors (including a missing or non-positive available
    /// width) abort before any frame is produced, leaving the cache empty.
    pub fn compute_layout(
        &mut self,
        section_item_counts: &[u32],
        provider: &dyn GeometryProvider,
    ) -> Result<LayoutSummary> {
        if let Some(summary) = &self.summary {
            return Ok(summary.clone());
        }

        self.config.validate()?;
        if !self.available_width.is_finite() || self.available_width <= 0.0 {
            return Err(LayoutError::InvalidWidth(self.available_width));
        }

        let pass = PackingPass::run(
            &self.config,
            self.available_width,
            section_item_counts,
            provider,
        );
        let summary = LayoutSummary {
            content_size: Size::new(self.available_width, pass.cursor),
            frames: pass.frames.len(),
            violations: pass.violations,
        };
        self.frames = pass.frames;
        self.summary = Some(summary.clone());
        Ok(summary)
    }

    /// Summary of the last completed pass, if any.
    pub fn summary(&self) -> Option<&LayoutSummary> {
        self.summary.as_ref()
    }

    /// All cached frames (any kind) whose rectangle intersects `rect`,
    /// sorted by position for deterministic output.
    ///
    /// A linear scan over the cache; fine at this scale, and callers that
    /// outgrow it can keep the contract while substituting an interval
    /// tree.
    #[must_use]
    pub fn frames_intersecting(&self, rect: Rect) -> Vec<&Frame> {
        let mut hits: Vec<&Frame> = self
            .frames
            .values()
            .filter(|frame| frame.rect.intersects(&rect))
            .collect();
        hits.sort_by(|a, b| {
            a.rect
                .y
                .total_cmp(&b.rect.y)
                .then(a.rect.x.total_cmp(&b.rect.x))
                .then(kind_rank(a.kind).cmp(&kind_rank(b.kind)))
                .then(a.path.section.cmp(&b.path.section))
                .then(a.path.item.cmp(&b.path.item))
        });
        hits
    }

    /// The cached frame for an element, or `None` when it is not cached
    /// (unknown element, or no completed pass).
    pub fn frame_for(&self, kind: ElementKind, path: ItemPath) -> Option<&Frame> {
        self.frames.get(&(kind, path.section, path.item))
    }

    /// Content extent of the last completed pass; zero before it.
    pub fn content_size(&self) -> Size {
        self.summary
            .as_ref()
            .map(|summary| summary.content_size)
            .unwrap_or_default()
    }

    /// True when a bounds change requires invalidation. Only the size is
    /// compared; origin-only changes (scrolling) never invalidate.
    pub fn should_invalidate_on_resize(&self, old_bounds: Rect, new_bounds: Rect) -> bool {
        let old = old_bounds.size();
        let new = new_bounds.size();
        (old.width - new.width).abs() > f32::EPSILON
            || (old.height - new.height).abs() > f32::EPSILON
    }
}

/// Vertical stacking order for frames sharing a position.
fn kind_rank(kind: ElementKind) -> u8 {
    match kind {
        ElementKind::Header => 0,
        ElementKind::Cell => 1,
        ElementKind::Footer => 2,
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

    /// Uniform grid: every item spans one column at a fixed height.
    struct Uniform {
        row_height: f32,
    }

    impl GeometryProvider for Uniform {
        fn row_height(&self, _section: u32, _row: u32) -> Option<f32> {
            Some(self.row_height)
        }
        fn item_height(&self, _index: GridIndex, _path: ItemPath) -> Option<f32> {
            Some(self.row_height)
        }
    }

    fn ready_engine(columns: u32, width: f32) -> LayoutEngine {
        let mut config = LayoutConfig::with_columns(columns);
        config.column_spacing = 0.0;
        config.row_spacing = 0.0;
        config.section_spacing = 0.0;
        let mut engine = LayoutEngine::new(config).unwrap();
        engine.set_available_width(width);
        engine
    }

    #[test]
    fn test_basic_pass() {
        let mut engine = ready_engine(4, 400.0);
        let summary = engine
            .compute_layout(&[8], &Uniform { row_height: 50.0 })
            .unwrap();

        // 8 unit spans over 4 columns = 2 rows of 50
        assert_eq!(summary.content_size, Size::new(400.0, 100.0));
        assert_eq!(summary.frames, 8);
        assert!(summary.violations.is_empty());
    }

    #[test]
    fn test_frame_for_cell() {
        let mut engine = ready_engine(4, 400.0);
        engine
            .compute_layout(&[8], &Uniform { row_height: 50.0 })
            .unwrap();

        let frame = engine
            .frame_for(ElementKind::Cell, ItemPath::new(0, 5))
            .unwrap();
        assert_eq!(frame.index, Some(GridIndex::new(1, 1)));
        assert_eq!(frame.rect, Rect::new(100.0, 50.0, 100.0, 50.0));

        assert!(engine
            .frame_for(ElementKind::Cell, ItemPath::new(0, 8))
            .is_none());
        assert!(engine
            .frame_for(ElementKind::Header, ItemPath::new(0, 0))
            .is_none());
    }

    #[test]
    fn test_queries_before_compute_are_empty() {
        let engine = ready_engine(4, 400.0);
        assert!(engine
            .frames_intersecting(Rect::new(0.0, 0.0, 1_000.0, 1_000.0))
            .is_empty());
        assert!(engine
            .frame_for(ElementKind::Cell, ItemPath::new(0, 0))
            .is_none());
        assert_eq!(engine.content_size(), Size::default());
        assert!(engine.summary().is_none());
    }

    #[test]
    fn test_frames_intersecting_filters_by_region() {
        let mut engine = ready_engine(4, 400.0);
        engine
            .compute_layout(&[8], &Uniform { row_height: 50.0 })
            .unwrap();

        // Only the first row overlaps the top 50 points
        let top = engine.frames_intersecting(Rect::new(0.0, 0.0, 400.0, 50.0));
        assert_eq!(top.len(), 4);
        assert!(top.iter().all(|f| f.rect.y == 0.0));

        let all = engine.frames_intersecting(Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_resize_detection_compares_sizes_only() {
        let engine = ready_engine(4, 400.0);
        let bounds = Rect::new(0.0, 0.0, 400.0, 800.0);
        let scrolled = Rect::new(0.0, 240.0, 400.0, 800.0);
        let widened = Rect::new(0.0, 0.0, 500.0, 800.0);

        assert!(!engine.should_invalidate_on_resize(bounds, scrolled));
        assert!(engine.should_invalidate_on_resize(bounds, widened));
    }
}
