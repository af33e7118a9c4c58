// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod asserts;
mod env;
mod rasterizer;

pub(crate) use asserts::{assert_cells_disjoint, assert_ink_inside_cells};
pub(crate) use env::{arial, test_factory, test_locator, CORRUPT_FONT};
pub(crate) use rasterizer::{synthetic_glyph, SyntheticRasterizer, PITCH_FILL};
