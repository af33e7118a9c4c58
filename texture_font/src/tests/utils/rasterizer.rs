// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deterministic rasterizer backend that needs no font files.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use hashbrown::HashSet;

use super::env::CORRUPT_FONT;
use crate::{BackendError, GlyphOutcome, GlyphRasterizer, LocatedFont, RasterizedGlyph};

/// Value of the bytes between `width` and `pitch` in every synthetic row.
///
/// It must never show up in an atlas.
pub(crate) const PITCH_FILL: u8 = 0xAB;

/// What the backend was asked to do.
#[derive(Debug, Default)]
pub(crate) struct Stats {
    pub(crate) initialized: Cell<usize>,
    pub(crate) opened: Cell<usize>,
    pub(crate) released: Cell<usize>,
    pub(crate) shut_down: Cell<usize>,
    pub(crate) rendered: RefCell<Vec<u8>>,
}

impl Stats {
    /// Faces opened and not yet released.
    pub(crate) fn open_faces(&self) -> usize {
        self.opened.get() - self.released.get()
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

#[derive(Debug)]
pub(crate) struct SyntheticFace {
    pixel_size: u32,
}

/// Renders a fixed family of box glyphs.
///
/// Shapes depend only on the code and pixel size; see [`synthetic_glyph`].
#[derive(Debug, Default)]
pub(crate) struct SyntheticRasterizer {
    stats: Rc<Stats>,
    missing: HashSet<u8>,
    missing_all: bool,
    fail_init: bool,
    panic_on: Option<u8>,
}

impl SyntheticRasterizer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A backend that cannot render `codes`.
    pub(crate) fn with_missing(codes: &[u8]) -> Self {
        Self {
            missing: codes.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// A backend that cannot render anything.
    pub(crate) fn rendering_nothing() -> Self {
        Self {
            missing_all: true,
            ..Self::default()
        }
    }

    /// A backend whose initialization fails.
    pub(crate) fn failing_init() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    /// A backend that panics while rendering `code`.
    pub(crate) fn panicking_on(code: u8) -> Self {
        Self {
            panic_on: Some(code),
            ..Self::default()
        }
    }

    /// A handle to the counters, still readable after the backend moved.
    pub(crate) fn stats(&self) -> Rc<Stats> {
        Rc::clone(&self.stats)
    }
}

impl GlyphRasterizer for SyntheticRasterizer {
    type Face = SyntheticFace;

    fn initialize(&mut self) -> Result<(), BackendError> {
        if self.fail_init {
            return Err(BackendError::with_code(1, "cannot open resource"));
        }
        bump(&self.stats.initialized);
        Ok(())
    }

    fn open_face(
        &mut self,
        font: &LocatedFont,
        pixel_size: u32,
    ) -> Result<Self::Face, BackendError> {
        if font.data.data() == CORRUPT_FONT {
            return Err(BackendError::with_code(2, "unknown file format"));
        }
        bump(&self.stats.opened);
        Ok(SyntheticFace { pixel_size })
    }

    fn render_char(&mut self, face: &Self::Face, code: u8) -> GlyphOutcome {
        self.stats.rendered.borrow_mut().push(code);
        if self.panic_on == Some(code) {
            panic!("synthetic backend crashed on {code:#04x}");
        }
        if self.missing_all || self.missing.contains(&code) {
            return GlyphOutcome::Missing;
        }
        GlyphOutcome::Rendered(synthetic_glyph(code, face.pixel_size))
    }

    fn release_face(&mut self, _face: Self::Face) {
        bump(&self.stats.released);
    }

    fn shutdown(&mut self) {
        bump(&self.stats.shut_down);
    }
}

/// The glyph the synthetic backend renders for `code` at `size` pixels.
///
/// - Space has no bitmap and advances by a third of the size.
/// - Every other code is a solid box filled with the code value, about three
///   quarters of the size tall. `g j p q y` descend by a quarter of the size.
/// - Odd codes have a one pixel left bearing.
/// - Rows are padded to `width + code % 3` bytes with [`PITCH_FILL`].
pub(crate) fn synthetic_glyph(code: u8, size: u32) -> RasterizedGlyph {
    if code == b' ' {
        return RasterizedGlyph {
            advance: size / 3,
            line_height: size,
            ..RasterizedGlyph::default()
        };
    }
    let width = 1 + u32::from(code % 4) + size / 8;
    let top = (size * 3 / 4).saturating_sub(u32::from(code % 3));
    let descent = if b"gjpqy".contains(&code) { size / 4 } else { 0 };
    let height = top + descent;
    let pitch = (width + u32::from(code % 3)) as usize;

    let mut pixels = std::vec![PITCH_FILL; pitch * height as usize];
    for row in pixels.chunks_mut(pitch) {
        row[..width as usize].fill(code);
    }
    RasterizedGlyph {
        left: i32::from(code % 2),
        top: i32::try_from(top).unwrap(),
        width,
        height,
        advance: width + 2,
        line_height: size,
        pitch,
        pixels,
    }
}
