//! Layout engine: packing pass, frame cache, and queries.
//!
//! This module handles:
//! - Packing column-spanning items into rows, section by section
//! - Caching computed frames until the owner invalidates
//! - Region, index, and content-size queries against the cache
//! - Bounds-resize detection

mod engine;
mod pass;

pub use engine::{Frame, LayoutEngine, LayoutSummary};
