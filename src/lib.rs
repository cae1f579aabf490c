//! spangrid - sectioned, span-based grid layout engine
//!
//! Computes positioned frames for variably-sized, column-spanning items
//! grouped into sections, each optionally bracketed by header/footer bands:
//! - Deterministic left-to-right, row-by-row packing with span clamping
//! - Wholesale frame caching with explicit invalidation
//! - Region, index, and content-size queries against the cache
//! - Declarative scene descriptions for tooling and tests
//!
//! The engine is pure computation: hosts supply geometry through the
//! [`GeometryProvider`] callbacks and consume frames through the query
//! interface. Presentation, scrolling, and view recycling stay on the host
//! side.
//!
//! # Usage
//!
//! ```
//! use spangrid::{GeometryProvider, LayoutConfig, LayoutEngine};
//!
//! struct Uniform;
//! impl GeometryProvider for Uniform {}
//!
//! # fn main() -> spangrid::Result<()> {
//! let mut engine = LayoutEngine::new(LayoutConfig::with_columns(4))?;
//! engine.set_available_width(400.0);
//!
//! let summary = engine.compute_layout(&[8], &Uniform)?;
//! assert_eq!(summary.frames, 8);
//! assert!(summary.content_size.height > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod provider;
pub mod scene;

pub use config::{Alignment, LayoutConfig};
pub use error::{ContractViolation, LayoutError, Result, ViolationKind};
pub use geometry::{GridIndex, Rect, Size};
pub use layout::{Frame, LayoutEngine, LayoutSummary};
pub use provider::{ElementKind, GeometryProvider, ItemPath};
pub use scene::{LayoutScene, SectionScene};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
