// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The finished font: atlas, glyph table and text helpers for the renderer.

use alloc::vec::Vec;

use crate::atlas::FontTexture;
use crate::metrics::Metrics;
use crate::range::CharRange;

/// Location and advance of one character's cell in the atlas.
///
/// A glyph the backend could not render has zero width, height and advance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FontGlyph {
    /// X position of the cell in the atlas (pixels).
    pub x: u32,
    /// Y position of the cell in the atlas (pixels).
    pub y: u32,
    /// Width of the cell (pixels).
    pub width: u32,
    /// Height of the cell (pixels).
    pub height: u32,
    /// Horizontal pen advance (pixels).
    pub advance: u32,
}

impl FontGlyph {
    /// Whether the glyph covers no atlas area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Size of a block of text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    /// Width of the widest line (pixels).
    pub width: u32,
    /// Number of lines times the line height (pixels).
    pub height: u32,
}

/// An axis-aligned rectangle given by two corners.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct QuadRect {
    /// Left edge.
    pub x0: f32,
    /// Top edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
}

/// One textured quad of a text run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlyphQuad {
    /// Screen-space position, y growing downwards.
    pub position: QuadRect,
    /// Normalised atlas coordinates.
    pub tex_coords: QuadRect,
}

/// A rasterized font: the packed atlas plus one [`FontGlyph`] per character
/// of its range.
///
/// Immutable once built. The glyph for code `c` is entry `c - first_char` of
/// the table; codes outside the range have no glyph.
#[derive(Clone, Debug)]
pub struct TextureFont {
    texture: FontTexture,
    glyphs: Vec<FontGlyph>,
    range: CharRange,
    metrics: Metrics,
}

impl TextureFont {
    pub(crate) fn new(
        texture: FontTexture,
        glyphs: Vec<FontGlyph>,
        range: CharRange,
        metrics: Metrics,
    ) -> Self {
        debug_assert_eq!(glyphs.len(), range.len(), "one glyph per code");
        Self {
            texture,
            glyphs,
            range,
            metrics,
        }
    }

    /// The packed atlas.
    pub fn texture(&self) -> &FontTexture {
        &self.texture
    }

    /// The glyph table, in ascending code order.
    pub fn glyphs(&self) -> &[FontGlyph] {
        &self.glyphs
    }

    /// The glyph for `code`, or `None` if `code` is outside the range.
    pub fn glyph(&self, code: u32) -> Option<&FontGlyph> {
        self.glyphs.get(self.range.index_of(code)?)
    }

    /// The glyph for `ch`, or `None` if `ch` is outside the range.
    pub fn glyph_for_char(&self, ch: char) -> Option<&FontGlyph> {
        self.glyph(u32::from(ch))
    }

    /// The first code of the range.
    pub fn first_char(&self) -> u8 {
        self.range.first()
    }

    /// Number of codes in the range.
    pub fn char_count(&self) -> usize {
        self.range.len()
    }

    /// Vertical distance between lines (pixels).
    pub fn line_height(&self) -> u32 {
        self.metrics.line_height
    }

    /// Edge length of every glyph cell (pixels).
    pub fn cell_size(&self) -> u32 {
        self.metrics.cell_size
    }

    /// Distance from a cell's top to the baseline (pixels).
    pub fn ascent(&self) -> u32 {
        self.metrics.max_ascent
    }

    /// Whether no glyph of the range rendered with a visible extent.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// The glyph drawn for `ch`: its own, the space glyph when `ch` is outside
    /// the range, or `None` when neither exists.
    fn resolve(&self, ch: char) -> Option<&FontGlyph> {
        self.glyph_for_char(ch).or_else(|| self.glyph_for_char(' '))
    }

    /// Measures `text`. Each `'\n'` starts a new line.
    pub fn measure(&self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let mut width = 0_u32;
        let mut lines = 0_u32;
        for line in text.split('\n') {
            let line_width = line
                .chars()
                .filter_map(|ch| self.resolve(ch))
                .fold(0_u32, |sum, glyph| sum.saturating_add(glyph.advance));
            width = width.max(line_width);
            lines += 1;
        }
        TextExtent {
            width,
            height: lines.saturating_mul(self.line_height()),
        }
    }

    /// Builds one textured quad per visible glyph of `text`, starting with the
    /// top of the first line at `origin`.
    ///
    /// Every quad covers the glyph's whole cell, so all quads of a line share
    /// a top edge and a baseline. Each `'\n'` returns the pen to `origin.0` and
    /// moves down by the line height.
    #[allow(
        clippy::cast_precision_loss,
        reason = "atlas coordinates are far below f32's exact integer range"
    )]
    pub fn quads(&self, text: &str, origin: (f32, f32)) -> Vec<GlyphQuad> {
        let mut quads = Vec::with_capacity(text.len());
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        let (mut pen_x, mut line_top) = origin;

        for ch in text.chars() {
            if ch == '\n' {
                pen_x = origin.0;
                line_top += self.line_height() as f32;
                continue;
            }
            let Some(glyph) = self.resolve(ch) else {
                continue;
            };
            if !glyph.is_empty() {
                let (w, h) = (glyph.width as f32, glyph.height as f32);
                let (u, v) = (glyph.x as f32, glyph.y as f32);
                quads.push(GlyphQuad {
                    position: QuadRect {
                        x0: pen_x,
                        y0: line_top,
                        x1: pen_x + w,
                        y1: line_top + h,
                    },
                    tex_coords: QuadRect {
                        x0: u / tex_width,
                        y0: v / tex_height,
                        x1: (u + w) / tex_width,
                        y1: (v + h) / tex_height,
                    },
                });
            }
            pen_x += glyph.advance as f32;
        }
        quads
    }
}
