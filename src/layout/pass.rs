//! One complete execution of the packing algorithm.
//!
//! A [`PackingPass`] owns all mutable state of a single `compute_layout`
//! invocation: the vertical cursor, the frames built so far, and any
//! contract violations observed. Keeping the cursor here rather than on the
//! engine keeps passes reentrant-safe across independent engine instances.

use std::collections::HashMap;

use crate::config::{Alignment, LayoutConfig};
use crate::error::{ContractViolation, ViolationKind};
use crate::geometry::{GridIndex, Rect};
use crate::provider::{ElementKind, GeometryProvider, ItemPath};

use super::engine::{Frame, FrameKey};

/// Accumulator state for a single layout pass.
pub(super) struct PackingPass<'a> {
    config: &'a LayoutConfig,
    width: f32,
    provider: &'a dyn GeometryProvider,
    /// Running vertical position; becomes the content height when the
    /// last section has been placed.
    pub(super) cursor: f32,
    pub(super) frames: HashMap<FrameKey, Frame>,
    pub(super) violations: Vec<ContractViolation>,
}

impl<'a> PackingPass<'a> {
    /// Pack every section in index order and return the finished state.
    ///
    /// The caller has already validated the configuration and the width.
    pub(super) fn run(
        config: &'a LayoutConfig,
        width: f32,
        section_item_counts: &[u32],
        provider: &'a dyn GeometryProvider,
    ) -> Self {
        let mut pass = Self {
            config,
            width,
            provider,
            cursor: 0.0,
            frames: HashMap::new(),
            violations: Vec::new(),
        };

        let section_count = u32::try_from(section_item_counts.len()).unwrap_or(u32::MAX);
        for section in 0..section_count {
            let items = section_item_counts
                .get(section as usize)
                .copied()
                .unwrap_or(0);

            pass.place_band(ElementKind::Header, section);
            pass.pack_section(section, items);
            pass.place_band(ElementKind::Footer, section);

            if section + 1 < section_count {
                pass.cursor += config.section_spacing;
            }
        }

        pass
    }

    /// Emit a full-width supplementary band if the provider supplies a
    /// height for it, advancing the cursor by that height.
    fn place_band(&mut self, kind: ElementKind, section: u32) {
        let Some(height) = self.provider.band_height(kind, section) else {
            return;
        };
        if !height.is_finite() || height <= 0.0 {
            self.violations.push(ContractViolation {
                section,
                kind: ViolationKind::InvalidBandHeight { kind, height },
            });
            return;
        }

        let path = ItemPath::new(section, 0);
        self.frames.insert(
            (kind, section, 0),
            Frame {
                kind,
                path,
                rect: Rect::new(0.0, self.cursor, self.width, height),
                index: None,
            },
        );
        self.cursor += height;
    }

    /// Pack a section's items in row-major order.
    ///
    /// A row closes when its span budget is exhausted or items run out;
    /// `row_spacing` is added only between rows, never after the last one.
    fn pack_section(&mut self, section: u32, item_count: u32) {
        if item_count == 0 {
            return;
        }

        let columns = self.config.columns;
        let alignment = self
            .provider
            .alignment(section)
            .unwrap_or(self.config.alignment);
        let column_width = (self.width - (columns - 1) as f32 * self.config.column_spacing)
            / columns as f32;

        let mut row: u32 = 0;
        let mut item: u32 = 0;
        while item < item_count {
            let row_height = self.resolve_row_height(section, row);

            let mut available_span = columns;
            let mut column: u32 = 0;
            while item < item_count && available_span > 0 {
                let index = GridIndex::new(row, column);
                let path = ItemPath::new(section, item);

                // An oversized span always fits what is left of the row,
                // never deferred to the next row.
                let span = self.resolve_span(index, path).min(available_span);

                let cell_width =
                    column_width * span as f32 + (span - 1) as f32 * self.config.column_spacing;
                let cell_height = self.resolve_item_height(index, path).min(row_height);
                let x = column as f32 * (column_width + self.config.column_spacing);
                let y = match alignment {
                    Alignment::Top => self.cursor,
                    Alignment::Bottom => self.cursor + (row_height - cell_height),
                    Alignment::Center => self.cursor + (row_height - cell_height) / 2.0,
                };

                self.frames.insert(
                    (ElementKind::Cell, section, item),
                    Frame {
                        kind: ElementKind::Cell,
                        path,
                        rect: Rect::new(x, y, cell_width, cell_height),
                        index: Some(index),
                    },
                );

                column += span;
                available_span -= span;
                item += 1;
            }

            row += 1;
            self.cursor += row_height;
            if item < item_count {
                self.cursor += self.config.row_spacing;
            }
        }
    }

    /// Span for the item, with the zero-span contract breach clamped to 1.
    fn resolve_span(&mut self, index: GridIndex, path: ItemPath) -> u32 {
        match self.provider.column_span(index, path) {
            Some(0) => {
                self.violations.push(ContractViolation {
                    section: path.section,
                    kind: ViolationKind::ZeroSpan { item: path.item },
                });
                1
            }
            Some(span) => span,
            None => self.config.estimated_span,
        }
    }

    /// Height for the item, falling back to the estimated height when the
    /// provider declines or returns a degenerate value.
    fn resolve_item_height(&mut self, index: GridIndex, path: ItemPath) -> f32 {
        match self.provider.item_height(index, path) {
            Some(height) if height.is_finite() && height > 0.0 => height,
            Some(height) => {
                self.violations.push(ContractViolation {
                    section: path.section,
                    kind: ViolationKind::InvalidItemHeight {
                        item: path.item,
                        height,
                    },
                });
                self.config.estimated_height
            }
            None => self.config.estimated_height,
        }
    }

    /// Height for the row, falling back to the estimated height when the
    /// provider declines or returns a degenerate value.
    fn resolve_row_height(&mut self, section: u32, row: u32) -> f32 {
        match self.provider.row_height(section, row) {
            Some(height) if height.is_finite() && height > 0.0 => height,
            Some(height) => {
                self.violations.push(ContractViolation {
                    section,
                    kind: ViolationKind::InvalidRowHeight { row, height },
                });
                self.config.estimated_height
            }
            None => self.config.estimated_height,
        }
    }
}
