// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture Font turns a font's single-byte character range into an alpha
//! texture atlas and a glyph table, ready for a text renderer.
//!
//! Building a font takes two passes over the same [`CharRange`]:
//!
//! 1. [`compute_metrics`] renders every character once to find the cell size
//!    all glyphs fit in and the common baseline.
//! 2. [`build_atlas`] renders them again, copying each bitmap into its cell of
//!    a fixed-stride grid.
//!
//! [`FontFactory`] runs both passes for a [`FontDescriptor`], and
//! [`FontManager`] caches the resulting [`TextureFont`]s.
//!
//! Rasterization goes through the [`GlyphRasterizer`] trait; [`SwashRasterizer`]
//! implements it with Skrifa and Swash. Font names are resolved to font data
//! by a [`FontLocator`].
//!
//! ## Example
//!
//! ```no_run
//! use texture_font::{FontDescriptor, FontFactory, SwashRasterizer, SystemFontLocator};
//!
//! let mut factory = FontFactory::new(SwashRasterizer::new(), SystemFontLocator::new())?;
//! let font = factory.create_font(&FontDescriptor::new("DejaVu Sans", 14))?;
//! let atlas = font.texture();
//! println!("{}x{} atlas", atlas.width(), atlas.height());
//! # Ok::<(), texture_font::Error>(())
//! ```
//!
//! ## Features
//!
//! - `system` (enabled by default): Lets [`SystemFontLocator`] see the fonts
//!   installed on the platform.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod atlas;
pub mod backend;

mod descriptor;
mod error;
mod factory;
mod font;
mod locator;
mod manager;
mod metrics;
mod range;
mod rasterizer;

#[cfg(test)]
mod tests;

pub use atlas::{build_atlas, AtlasLayout, AtlasOptions, FontTexture, PixelFormat};
pub use backend::{RasterOptions, SwashFace, SwashRasterizer};
pub use descriptor::{FontDescriptor, DEFAULT_CHAR_COUNT, DEFAULT_MIN_CHAR};
pub use error::{BackendError, Error, ErrorKind};
pub use factory::{FactoryState, FontFactory};
pub use font::{FontGlyph, GlyphQuad, QuadRect, TextExtent, TextureFont};
pub use locator::{
    FallbackLocator, FontDirectoryLocator, FontLocator, FontNotFound, LocatedFont,
    MemoryFontLocator, SystemFontLocator, FONT_FILE_EXTENSIONS,
};
pub use manager::{FontManager, DEFAULT_FAMILY};
pub use metrics::{compute_metrics, Metrics};
pub use range::{CharRange, Codes};
pub use rasterizer::{load_face, FaceGuard, GlyphOutcome, GlyphRasterizer, RasterizedGlyph};
