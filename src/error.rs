//! Structured error types for spangrid.
//!
//! Configuration problems abort a pass before any frame is produced and
//! surface as [`LayoutError`]. Provider misbehavior never aborts: the
//! offending value is clamped to a safe default during the pass and the
//! incident is reported as a [`ContractViolation`] in the pass summary.

use serde::Serialize;

use crate::provider::ElementKind;

/// Errors that make a layout pass impossible.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The configuration asks for a zero-column grid.
    #[error("layout requires at least one column")]
    ZeroColumns,

    /// A spacing value is negative or not finite.
    #[error("spacing must be finite and non-negative (got {0})")]
    InvalidSpacing(f32),

    /// The fallback column span is zero.
    #[error("estimated column span must be at least 1")]
    ZeroEstimatedSpan,

    /// The fallback cell height is non-positive or not finite.
    #[error("estimated cell height must be finite and positive (got {0})")]
    InvalidEstimatedHeight(f32),

    /// The available width pushed in by the host is non-positive or not
    /// finite; column widths cannot be derived from it.
    #[error("available width must be finite and positive (got {0})")]
    InvalidWidth(f32),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// A provider response that broke the geometry contract.
///
/// The engine substitutes a safe default and keeps going; a single bad item
/// never aborts the pass. Violations are collected in the order they were
/// observed and reported through the pass summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContractViolation {
    /// Section whose callback misbehaved.
    pub section: u32,
    /// What went wrong, with the value the provider returned.
    pub kind: ViolationKind,
}

/// The specific contract breach, with the substituted behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, thiserror::Error)]
pub enum ViolationKind {
    /// A column span of zero was returned; the item was placed with span 1.
    #[error("item {item} returned a zero column span, treated as 1")]
    ZeroSpan {
        /// Flat item index within the section.
        item: u32,
    },

    /// An item height was non-positive or not finite; the configured
    /// estimated height was used instead.
    #[error("item {item} height {height} is not positive, estimated height used")]
    InvalidItemHeight {
        /// Flat item index within the section.
        item: u32,
        /// The value the provider returned.
        height: f32,
    },

    /// A row height was non-positive or not finite; the configured
    /// estimated height was used instead.
    #[error("row {row} height {height} is not positive, estimated height used")]
    InvalidRowHeight {
        /// Row within the section.
        row: u32,
        /// The value the provider returned.
        height: f32,
    },

    /// A supplementary band height was non-positive or not finite; the
    /// band was skipped.
    #[error("{kind:?} band height {height} is not positive, band skipped")]
    InvalidBandHeight {
        /// Which band the height was queried for.
        kind: ElementKind,
        /// The value the provider returned.
        height: f32,
    },
}
