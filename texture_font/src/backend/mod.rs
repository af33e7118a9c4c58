// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterizer backend implementations.

mod swash;

pub use self::swash::{RasterOptions, SwashFace, SwashRasterizer};
