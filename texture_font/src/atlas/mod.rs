// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph atlas construction.
//!
//! Every glyph of a range gets a square cell of the same size, laid out on a
//! fixed-stride grid. This spends texture space to make the cell of a
//! character a direct function of its code:
//! - [`AtlasLayout`] computes the grid and cell addresses
//! - [`FontTexture`] is the packed single-channel image
//! - [`build_atlas`] renders each glyph into its cell and produces the
//!   [`TextureFont`](crate::TextureFont)

mod builder;
mod layout;
mod texture;

pub use builder::build_atlas;
pub use layout::{AtlasLayout, AtlasOptions, DEFAULT_PADDING};
pub use texture::{FontTexture, PixelFormat};
