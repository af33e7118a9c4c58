// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Second pass: rendering each glyph into its cell.

use alloc::vec::Vec;

use log::debug;

use super::layout::{AtlasLayout, AtlasOptions};
use super::texture::{ClipRect, FontTexture};
use crate::font::{FontGlyph, TextureFont};
use crate::metrics::Metrics;
use crate::range::CharRange;
use crate::rasterizer::{FaceGuard, GlyphOutcome, GlyphRasterizer, RasterizedGlyph};

/// Places glyph bitmaps into the cells of an atlas.
///
/// Each bitmap is positioned inside its cell so that every glyph shares the
/// same baseline, `max_ascent` pixels below the cell top, and is offset
/// horizontally by its left bearing.
#[derive(Debug)]
pub(crate) struct GlyphPlacer {
    layout: AtlasLayout,
    max_ascent: u32,
    texture: FontTexture,
    glyphs: Vec<FontGlyph>,
}

impl GlyphPlacer {
    pub(crate) fn new(cell_count: usize, metrics: Metrics, options: &AtlasOptions) -> Self {
        let layout = AtlasLayout::new(cell_count, metrics.cell_size, options);
        Self {
            layout,
            max_ascent: metrics.max_ascent,
            texture: FontTexture::new(layout.width(), layout.height()),
            glyphs: Vec::with_capacity(cell_count),
        }
    }

    /// Copies `bitmap` into the next cell and records its glyph.
    pub(crate) fn place(&mut self, bitmap: &RasterizedGlyph) {
        let (x, y) = self.layout.cell_origin(self.glyphs.len());
        let cell_size = self.layout.cell_size();
        if !self.layout.is_empty() {
            let dst_x = i64::from(x) + i64::from(bitmap.left);
            let dst_y = i64::from(y) + i64::from(self.max_ascent) - i64::from(bitmap.top);
            let clip = ClipRect {
                x,
                y,
                width: cell_size,
                height: cell_size,
            };
            self.texture.blit(dst_x, dst_y, bitmap, clip);
        }
        self.glyphs.push(FontGlyph {
            x,
            y,
            width: cell_size,
            height: cell_size,
            advance: bitmap.advance,
        });
    }

    /// Reserves the next cell for a glyph the backend could not render.
    pub(crate) fn skip(&mut self) {
        let (x, y) = self.layout.cell_origin(self.glyphs.len());
        self.glyphs.push(FontGlyph {
            x,
            y,
            width: 0,
            height: 0,
            advance: 0,
        });
    }

    pub(crate) fn finish(self, range: CharRange, metrics: Metrics) -> TextureFont {
        TextureFont::new(self.texture, self.glyphs, range, metrics)
    }
}

/// Renders every code of `range` into a new atlas sized from `metrics`.
///
/// `range` must be the range `metrics` was computed over; it is walked in the
/// same order.
pub fn build_atlas<R: GlyphRasterizer>(
    face: &mut FaceGuard<'_, R>,
    range: CharRange,
    metrics: Metrics,
    options: &AtlasOptions,
) -> TextureFont {
    let mut placer = GlyphPlacer::new(range.len(), metrics, options);
    for code in range.codes() {
        match face.render_char(code) {
            GlyphOutcome::Rendered(bitmap) => placer.place(&bitmap),
            GlyphOutcome::Missing => placer.skip(),
        }
    }
    debug!(
        "Packed {} glyphs into a {}x{} atlas ({}x{} cells of {}px)",
        range.len(),
        placer.layout.width(),
        placer.layout.height(),
        placer.layout.columns(),
        placer.layout.rows(),
        placer.layout.cell_size()
    );
    placer.finish(range, metrics)
}
