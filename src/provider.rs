//! Geometry capability interface consumed by the layout engine.
//!
//! The host implements [`GeometryProvider`] to describe its content. Every
//! method is optional: the default implementations return `None` and the
//! engine substitutes the documented fallback, so a host only overrides
//! what it actually varies.

use serde::{Deserialize, Serialize};

use crate::config::Alignment;
use crate::geometry::GridIndex;

/// Kind of element a frame belongs to. Partitions the frame cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Supplementary band above a section's rows.
    Header,
    /// Supplementary band below a section's rows.
    Footer,
    /// A packed item.
    Cell,
}

/// Flat identity of an element: section index plus position within the
/// section. For supplementary bands the item component is always 0.
/// Distinct from [`GridIndex`], which is the packed (row, column) position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemPath {
    /// Section the element belongs to.
    pub section: u32,
    /// Flat item index within the section.
    pub item: u32,
}

impl ItemPath {
    /// Create a path from section and item index.
    pub fn new(section: u32, item: u32) -> Self {
        Self { section, item }
    }
}

/// Per-query geometry callbacks.
///
/// Implementations are queried lazily, once per needed value, during a
/// pass, and are assumed to be fast, side-effect-free functions of their
/// arguments. The backing data must not change mid-pass; when it does
/// change between passes, the owner must call `LayoutEngine::invalidate`.
pub trait GeometryProvider {
    /// Number of columns the item occupies.
    ///
    /// Spans exceeding the row's remaining budget are clamped to what is
    /// left, so a row never overflows. Fallback: the configured
    /// `estimated_span`.
    fn column_span(&self, _index: GridIndex, _path: ItemPath) -> Option<u32> {
        None
    }

    /// Height of the item, clamped to its row height on placement.
    /// Fallback: the configured `estimated_height`.
    fn item_height(&self, _index: GridIndex, _path: ItemPath) -> Option<f32> {
        None
    }

    /// Height of one row of a section.
    /// Fallback: the configured `estimated_height`.
    fn row_height(&self, _section: u32, _row: u32) -> Option<f32> {
        None
    }

    /// Height of the section's header or footer band. `None` means the
    /// section has no band of that kind. Never queried with
    /// [`ElementKind::Cell`].
    fn band_height(&self, _kind: ElementKind, _section: u32) -> Option<f32> {
        None
    }

    /// Vertical alignment for cells shorter than their row.
    /// Fallback: the configured default alignment.
    fn alignment(&self, _section: u32) -> Option<Alignment> {
        None
    }
}
