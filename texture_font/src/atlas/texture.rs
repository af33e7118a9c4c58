// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::rasterizer::RasterizedGlyph;

/// Pixel format of a [`FontTexture`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PixelFormat {
    /// One byte of coverage per pixel.
    Alpha8,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Alpha8 => 1,
        }
    }
}

/// The packed glyph atlas: a single-channel 8-bit image.
#[derive(Clone, PartialEq, Eq)]
pub struct FontTexture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl FontTexture {
    /// Creates a transparent texture.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel format, always [`PixelFormat::Alpha8`].
    pub fn format(&self) -> PixelFormat {
        PixelFormat::Alpha8
    }

    /// Whether the texture has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All pixels, row-major, `width` bytes per row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Copies `glyph`'s bitmap with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside `clip` (`x, y, width, height`) or outside the
    /// texture are discarded; source rows are read `pitch` bytes apart and
    /// never past the end of the bitmap.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "destination coordinates are checked against the texture extent first"
    )]
    pub(crate) fn blit(&mut self, x: i64, y: i64, glyph: &RasterizedGlyph, clip: ClipRect) {
        let clip_x0 = i64::from(clip.x);
        let clip_y0 = i64::from(clip.y);
        let clip_x1 = (clip_x0 + i64::from(clip.width)).min(i64::from(self.width));
        let clip_y1 = (clip_y0 + i64::from(clip.height)).min(i64::from(self.height));
        let stride = self.width as usize;

        for row in 0..glyph.height {
            let dst_y = y + i64::from(row);
            if dst_y < clip_y0 || dst_y >= clip_y1 {
                continue;
            }
            let src = glyph.row(row);
            for (col, &value) in src.iter().enumerate() {
                let dst_x = x + col as i64;
                if dst_x < clip_x0 || dst_x >= clip_x1 {
                    continue;
                }
                // Both coordinates are inside the texture here.
                self.pixels[dst_y as usize * stride + dst_x as usize] = value;
            }
        }
    }
}

impl fmt::Debug for FontTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontTexture")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format())
            .finish_non_exhaustive()
    }
}

/// A rectangle writes are confined to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ClipRect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}
