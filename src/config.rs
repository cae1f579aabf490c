//! Layout configuration.
//!
//! A [`LayoutConfig`] is immutable for the duration of one pass. The owner
//! may replace it between passes through `LayoutEngine::set_config`, which
//! validates the replacement and invalidates the frame cache.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Default column count (matches a three-column phone grid).
pub const DEFAULT_COLUMNS: u32 = 3;

/// Default fallback cell height in layout points.
pub const DEFAULT_ESTIMATED_HEIGHT: f32 = 60.0;

/// Vertical placement of a cell shorter than its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Flush with the row top.
    Top,
    /// Flush with the row bottom.
    Bottom,
    /// Centered in the leftover vertical space (default).
    #[default]
    Center,
}

/// Engine configuration: column count, spacing, and fallbacks.
///
/// All spacing values are in layout points and must be finite and
/// non-negative; `columns` must be positive. Invalid configurations are
/// rejected at engine construction rather than silently defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of columns items are packed into.
    pub columns: u32,
    /// Horizontal gap between adjacent columns.
    pub column_spacing: f32,
    /// Vertical gap between rows within a section.
    pub row_spacing: f32,
    /// Vertical gap between consecutive sections.
    pub section_spacing: f32,
    /// Alignment used when the provider declines to pick one for a section.
    pub alignment: Alignment,
    /// Fallback column span when the provider declines to span an item.
    pub estimated_span: u32,
    /// Fallback height for items and rows the provider declines to size.
    pub estimated_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            column_spacing: 8.0,
            row_spacing: 16.0,
            section_spacing: 32.0,
            alignment: Alignment::Center,
            estimated_span: 1,
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
        }
    }
}

impl LayoutConfig {
    /// Default configuration with the given column count.
    pub fn with_columns(columns: u32) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Check the configuration invariants.
    ///
    /// # Errors
    /// Returns the first violated invariant: zero columns, negative or
    /// non-finite spacing, zero estimated span, or a non-positive
    /// estimated height.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        for spacing in [
            self.column_spacing,
            self.row_spacing,
            self.section_spacing,
        ] {
            if !spacing.is_finite() || spacing < 0.0 {
                return Err(LayoutError::InvalidSpacing(spacing));
            }
        }
        if self.estimated_span == 0 {
            return Err(LayoutError::ZeroEstimatedSpan);
        }
        if !self.estimated_height.is_finite() || self.estimated_height <= 0.0 {
            return Err(LayoutError::InvalidEstimatedHeight(self.estimated_height));
        }
        Ok(())
    }
}
