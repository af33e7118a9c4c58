// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between atlas construction and the outline rasterization backend.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::{BackendError, Error};
use crate::locator::{FontLocator, LocatedFont};

/// A single character rendered by the backend.
///
/// `left` and `top` are the bearings from the pen position on the baseline to
/// the top-left corner of the bitmap (`top` grows upwards). Rows of `pixels`
/// are `pitch` bytes apart; `pitch` may exceed `width` when the backend pads
/// rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RasterizedGlyph {
    /// Horizontal bearing in pixels.
    pub left: i32,
    /// Vertical bearing (distance from baseline to bitmap top) in pixels.
    pub top: i32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Horizontal pen advance in whole pixels.
    pub advance: u32,
    /// Height of the glyph's metrics box as reported by the backend.
    pub line_height: u32,
    /// Distance between bitmap rows in bytes.
    pub pitch: usize,
    /// 8-bit coverage values, row-major.
    pub pixels: Vec<u8>,
}

impl RasterizedGlyph {
    /// The bitmap row `y`, clipped to the available pixel data.
    pub(crate) fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize).saturating_mul(self.pitch);
        let end = start.saturating_add(self.width as usize).min(self.pixels.len());
        self.pixels.get(start..end).unwrap_or_default()
    }
}

/// Result of asking the backend for one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GlyphOutcome {
    /// The character was rendered.
    Rendered(RasterizedGlyph),
    /// The backend could not render the character.
    ///
    /// This is not an error: the character keeps its slot in the atlas but
    /// gets a zero-size glyph.
    Missing,
}

impl GlyphOutcome {
    /// The rendered glyph, if any.
    pub fn rendered(&self) -> Option<&RasterizedGlyph> {
        match self {
            Self::Rendered(glyph) => Some(glyph),
            Self::Missing => None,
        }
    }
}

/// An outline rasterization backend.
///
/// The backend holds mutable session state (the current face and pixel size),
/// so every call takes `&mut self`: one session is driven from one thread at
/// a time.
pub trait GlyphRasterizer {
    /// An open font at one pixel size.
    type Face;

    /// Acquires the backend session. Called once before any face is opened.
    fn initialize(&mut self) -> Result<(), BackendError>;

    /// Opens located font data and sets its rendering pixel size.
    fn open_face(&mut self, font: &LocatedFont, pixel_size: u32)
        -> Result<Self::Face, BackendError>;

    /// Renders one character. Backend failures yield [`GlyphOutcome::Missing`].
    fn render_char(&mut self, face: &Self::Face, code: u8) -> GlyphOutcome;

    /// Releases a face opened by [`GlyphRasterizer::open_face`].
    fn release_face(&mut self, face: Self::Face);

    /// Releases the backend session. Must be idempotent.
    fn shutdown(&mut self);
}

/// A face scoped to a borrow of its rasterizer.
///
/// The face is released exactly once, when the guard is dropped, on every exit
/// path including early returns and unwinding.
pub struct FaceGuard<'a, R: GlyphRasterizer> {
    rasterizer: &'a mut R,
    face: Option<R::Face>,
}

impl<'a, R: GlyphRasterizer> FaceGuard<'a, R> {
    /// Takes ownership of `face`, releasing it through `rasterizer` on drop.
    pub fn new(rasterizer: &'a mut R, face: R::Face) -> Self {
        Self {
            rasterizer,
            face: Some(face),
        }
    }

    /// Renders one character of the guarded face.
    pub fn render_char(&mut self, code: u8) -> GlyphOutcome {
        match &self.face {
            Some(face) => self.rasterizer.render_char(face, code),
            None => GlyphOutcome::Missing,
        }
    }
}

impl<R: GlyphRasterizer> Drop for FaceGuard<'_, R> {
    fn drop(&mut self) {
        if let Some(face) = self.face.take() {
            trace!("FaceGuard: releasing face");
            self.rasterizer.release_face(face);
        }
    }
}

impl<R: GlyphRasterizer> core::fmt::Debug for FaceGuard<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FaceGuard")
            .field("open", &self.face.is_some())
            .finish_non_exhaustive()
    }
}

/// Resolves `name` through `locator` and opens it at `pixel_size`.
///
/// A name the locator cannot resolve and data the backend rejects both fail
/// with [`ErrorKind::FontLoad`](crate::ErrorKind::FontLoad) naming the font.
pub fn load_face<'a, R, L>(
    rasterizer: &'a mut R,
    locator: &mut L,
    name: &str,
    pixel_size: u32,
) -> Result<FaceGuard<'a, R>, Error>
where
    R: GlyphRasterizer,
    L: FontLocator + ?Sized,
{
    let located = locator
        .find_font(name)
        .map_err(|_| Error::font_not_found(name, pixel_size))?;
    let face = rasterizer
        .open_face(&located, pixel_size)
        .map_err(|e| Error::font_load(name, pixel_size, e))?;
    debug!("Opened face '{}' at {}px", name, pixel_size);
    Ok(FaceGuard::new(rasterizer, face))
}
