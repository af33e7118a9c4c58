// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outline rasterization with Swash, metrics and character mapping with Skrifa.

use alloc::string::ToString;
use core::fmt;

use fontique::Blob;
use log::{debug, trace};
use skrifa::instance::{LocationRef, Size};
use skrifa::{GlyphId, MetadataProvider};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::CacheKey;

use crate::error::BackendError;
use crate::locator::LocatedFont;
use crate::rasterizer::{GlyphOutcome, GlyphRasterizer, RasterizedGlyph};

/// Options for [`SwashRasterizer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RasterOptions {
    /// Whether outlines are hinted before rasterization.
    ///
    /// The default value is true.
    pub hint: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { hint: true }
    }
}

/// A font opened by [`SwashRasterizer`].
#[derive(Clone)]
pub struct SwashFace {
    data: Blob<u8>,
    index: u32,
    offset: u32,
    key: CacheKey,
    size: f32,
}

impl fmt::Debug for SwashFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwashFace")
            .field("index", &self.index)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Production [`GlyphRasterizer`].
///
/// The Swash [`ScaleContext`] is the backend session: it is created by
/// `initialize`, reused for every glyph of every face, and dropped by
/// `shutdown`.
pub struct SwashRasterizer {
    context: Option<ScaleContext>,
    options: RasterOptions,
}

impl SwashRasterizer {
    /// Creates an uninitialized rasterizer with default options.
    pub fn new() -> Self {
        Self::with_options(RasterOptions::default())
    }

    /// Creates an uninitialized rasterizer.
    pub fn with_options(options: RasterOptions) -> Self {
        Self {
            context: None,
            options,
        }
    }

    /// The options glyphs are rendered with.
    pub fn options(&self) -> RasterOptions {
        self.options
    }
}

impl Default for SwashRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SwashRasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwashRasterizer")
            .field("initialized", &self.context.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl GlyphRasterizer for SwashRasterizer {
    type Face = SwashFace;

    fn initialize(&mut self) -> Result<(), BackendError> {
        if self.context.is_none() {
            debug!("SwashRasterizer: creating scale context");
            self.context = Some(ScaleContext::new());
        }
        Ok(())
    }

    fn open_face(
        &mut self,
        font: &LocatedFont,
        pixel_size: u32,
    ) -> Result<Self::Face, BackendError> {
        if self.context.is_none() {
            return Err(BackendError::new("rasterizer is not initialized"));
        }
        let data = font.data.data();
        skrifa::FontRef::from_index(data, font.index)
            .map_err(|e| BackendError::new(e.to_string()))?;
        let swash_font = swash::FontRef::from_index(data, font.index as usize)
            .ok_or_else(|| BackendError::new("font data is not supported by the scaler"))?;

        #[allow(
            clippy::cast_precision_loss,
            reason = "pixel sizes are far below f32's exact integer range"
        )]
        let size = pixel_size as f32;
        Ok(SwashFace {
            data: font.data.clone(),
            index: font.index,
            offset: swash_font.offset,
            key: swash_font.key,
            size,
        })
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "metrics are rounded and clamped to non-negative pixel counts first"
    )]
    fn render_char(&mut self, face: &Self::Face, code: u8) -> GlyphOutcome {
        let Some(context) = self.context.as_mut() else {
            return GlyphOutcome::Missing;
        };
        let data = face.data.data();
        let Ok(font) = skrifa::FontRef::from_index(data, face.index) else {
            return GlyphOutcome::Missing;
        };

        // Unmapped codes render the font's .notdef glyph.
        let glyph_id = font
            .charmap()
            .map(char::from(code))
            .unwrap_or(GlyphId::NOTDEF);
        let metrics = font.glyph_metrics(Size::new(face.size), LocationRef::default());
        let advance = metrics
            .advance_width(glyph_id)
            .unwrap_or_default()
            .round()
            .max(0.0) as u32;
        let bounds = metrics.bounds(glyph_id);
        let line_height = bounds
            .map(|b| (b.y_max - b.y_min).ceil().max(0.0) as u32)
            .unwrap_or_default();

        let Ok(swash_id) = u16::try_from(glyph_id.to_u32()) else {
            return GlyphOutcome::Missing;
        };
        let swash_font = swash::FontRef {
            data,
            offset: face.offset,
            key: face.key,
        };
        let mut scaler = context
            .builder(swash_font)
            .size(face.size)
            .hint(self.options.hint)
            .build();
        let image = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .render(&mut scaler, swash_id);

        match image {
            Some(image) => {
                let placement = image.placement;
                trace!(
                    "SwashRasterizer: {:#04x} -> {}x{} at ({}, {})",
                    code,
                    placement.width,
                    placement.height,
                    placement.left,
                    placement.top
                );
                GlyphOutcome::Rendered(RasterizedGlyph {
                    left: placement.left,
                    top: placement.top,
                    width: placement.width,
                    height: placement.height,
                    advance,
                    line_height,
                    pitch: placement.width as usize,
                    pixels: image.data,
                })
            }
            // Glyphs without an outline (space, for example) still advance the pen.
            None if bounds.is_none() => GlyphOutcome::Rendered(RasterizedGlyph {
                advance,
                ..RasterizedGlyph::default()
            }),
            None => {
                debug!("SwashRasterizer: failed to render {:#04x}", code);
                GlyphOutcome::Missing
            }
        }
    }

    fn release_face(&mut self, face: Self::Face) {
        trace!("SwashRasterizer: releasing face {}", face.index);
        drop(face);
    }

    fn shutdown(&mut self) {
        if self.context.take().is_some() {
            debug!("SwashRasterizer: scale context released");
        }
    }
}
