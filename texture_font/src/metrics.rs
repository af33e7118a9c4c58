// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! First pass: the cell geometry shared by every glyph of a range.

use log::debug;

use crate::range::CharRange;
use crate::rasterizer::{FaceGuard, GlyphRasterizer, RasterizedGlyph};

/// Layout geometry for one font and character range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Edge length of the square cell every glyph is placed in.
    pub cell_size: u32,
    /// Largest distance from the baseline to a bitmap top.
    pub max_ascent: u32,
    /// Largest glyph metrics height reported by the backend.
    pub line_height: u32,
}

impl Metrics {
    /// Whether no glyph in the range rendered with a visible extent.
    pub fn is_empty(&self) -> bool {
        self.cell_size == 0
    }
}

/// Running maxima over the rendered glyphs of a range.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct MetricsAccumulator {
    max_width: u32,
    max_ascent: u32,
    max_descent: u32,
    line_height: u32,
}

impl MetricsAccumulator {
    pub(crate) fn add(&mut self, glyph: &RasterizedGlyph) {
        let width = i64::from(glyph.left) + i64::from(glyph.width);
        let descent = i64::from(glyph.height) - i64::from(glyph.top);
        self.max_width = self.max_width.max(clamp_to_u32(width));
        self.max_ascent = self.max_ascent.max(clamp_to_u32(i64::from(glyph.top)));
        self.max_descent = self.max_descent.max(clamp_to_u32(descent));
        self.line_height = self.line_height.max(glyph.line_height);
    }

    pub(crate) fn finish(self) -> Metrics {
        Metrics {
            cell_size: self
                .max_width
                .max(self.max_ascent.saturating_add(self.max_descent)),
            max_ascent: self.max_ascent,
            line_height: self.line_height,
        }
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Renders every code of `range` and computes the shared cell geometry.
///
/// Codes the backend cannot render are skipped. If none render, the result is
/// all zeros.
pub fn compute_metrics<R: GlyphRasterizer>(
    face: &mut FaceGuard<'_, R>,
    range: CharRange,
) -> Metrics {
    let mut acc = MetricsAccumulator::default();
    let mut missing = 0_usize;
    for code in range.codes() {
        match face.render_char(code).rendered() {
            Some(glyph) => acc.add(glyph),
            None => missing += 1,
        }
    }
    let metrics = acc.finish();
    debug!(
        "Metrics for {} codes from {:#04x}: cell {}px, ascent {}px, line height {}px ({} missing)",
        range.len(),
        range.first(),
        metrics.cell_size,
        metrics.max_ascent,
        metrics.line_height,
        missing
    );
    metrics
}
