// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural checks on built fonts.

use crate::{FontGlyph, TextureFont};

fn overlaps(a: &FontGlyph, b: &FontGlyph) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

/// Asserts that no two non-empty glyph cells share a pixel and that every
/// cell lies inside the texture.
pub(crate) fn assert_cells_disjoint(font: &TextureFont) {
    let texture = font.texture();
    let glyphs = font.glyphs();
    for (i, a) in glyphs.iter().enumerate() {
        if a.is_empty() {
            continue;
        }
        assert!(
            a.x + a.width <= texture.width() && a.y + a.height <= texture.height(),
            "glyph {i} at ({}, {}) leaves the {}x{} texture",
            a.x,
            a.y,
            texture.width(),
            texture.height()
        );
        for (j, b) in glyphs.iter().enumerate().skip(i + 1) {
            if !b.is_empty() {
                assert!(!overlaps(a, b), "glyphs {i} and {j} overlap");
            }
        }
    }
}

/// Asserts that every non-zero texture pixel belongs to some glyph cell.
pub(crate) fn assert_ink_inside_cells(font: &TextureFont) {
    let texture = font.texture();
    for y in 0..texture.height() {
        for x in 0..texture.width() {
            if texture.pixel(x, y) == Some(0) {
                continue;
            }
            let owned = font.glyphs().iter().any(|g| {
                (g.x..g.x + g.width).contains(&x) && (g.y..g.y + g.height).contains(&y)
            });
            assert!(owned, "pixel ({x}, {y}) is outside every glyph cell");
        }
    }
}
