// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-stride cell grid addressing.

/// Default padding in pixels between cells and around the atlas border.
pub const DEFAULT_PADDING: u32 = 3;

/// Options for atlas construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AtlasOptions {
    /// Empty pixels between adjacent cells and along the atlas border.
    ///
    /// Keeps bilinear sampling of one glyph from picking up its neighbours.
    /// The default value is [`DEFAULT_PADDING`].
    pub padding: u32,

    /// Whether the atlas extent is rounded up to powers of two.
    ///
    /// The default value is true.
    pub power_of_two: bool,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            power_of_two: true,
        }
    }
}

/// A grid of equal square cells, `columns × rows ≥ cell_count`.
///
/// Cell `i` sits at row `i / columns`, column `i % columns`. An empty layout
/// (no cells or zero cell size) has a zero extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AtlasLayout {
    columns: u32,
    rows: u32,
    cell_size: u32,
    padding: u32,
    width: u32,
    height: u32,
}

impl AtlasLayout {
    /// Lays out `cell_count` cells of `cell_size` pixels.
    pub fn new(cell_count: usize, cell_size: u32, options: &AtlasOptions) -> Self {
        let Ok(cell_count) = u32::try_from(cell_count) else {
            return Self::default();
        };
        if cell_count == 0 || cell_size == 0 {
            return Self::default();
        }

        let columns = ceil_sqrt(cell_count);
        let rows = cell_count.div_ceil(columns);
        let stride = cell_size.saturating_add(options.padding);
        let extent = |cells: u32| {
            let extent = options
                .padding
                .saturating_add(cells.saturating_mul(stride));
            if options.power_of_two {
                extent.checked_next_power_of_two().unwrap_or(extent)
            } else {
                extent
            }
        };

        Self {
            columns,
            rows,
            cell_size,
            padding: options.padding,
            width: extent(columns),
            height: extent(rows),
        }
    }

    /// Whether the layout holds no cells.
    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }

    /// Number of cell columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cell rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge length of a cell.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between the origins of adjacent cells.
    pub fn stride(&self) -> u32 {
        self.cell_size.saturating_add(self.padding)
    }

    /// Texture width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left corner of cell `index`; `(0, 0)` for an empty layout.
    ///
    /// Coordinates saturate at `u32::MAX` for paddings too large to address.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        if self.is_empty() {
            return (0, 0);
        }
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        let (row, column) = (index / self.columns, index % self.columns);
        let stride = self.stride();
        let offset = |cells: u32| self.padding.saturating_add(cells.saturating_mul(stride));
        (offset(column), offset(row))
    }
}

fn ceil_sqrt(n: u32) -> u32 {
    let mut root = 1;
    while root * root < n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIGHT: AtlasOptions = AtlasOptions {
        padding: 3,
        power_of_two: false,
    };

    #[test]
    fn printable_ascii_grid() {
        let layout = AtlasLayout::new(95, 14, &TIGHT);
        assert_eq!(layout.columns(), 10);
        assert_eq!(layout.rows(), 10);
        assert_eq!(layout.width(), 3 + 10 * 17);
        assert_eq!(layout.height(), 3 + 10 * 17);
        assert_eq!(layout.cell_origin(0), (3, 3));
        assert_eq!(layout.cell_origin(9), (3 + 9 * 17, 3));
        assert_eq!(layout.cell_origin(10), (3, 3 + 17));
        assert_eq!(layout.cell_origin(94), (3 + 4 * 17, 3 + 9 * 17));
    }

    #[test]
    fn grid_drops_unused_rows() {
        let layout = AtlasLayout::new(5, 8, &TIGHT);
        assert_eq!(layout.columns(), 3);
        assert_eq!(layout.rows(), 2);
        assert!(layout.columns() * layout.rows() >= 5);
    }

    #[test]
    fn power_of_two_rounding() {
        let layout = AtlasLayout::new(95, 14, &AtlasOptions::default());
        assert_eq!(layout.width(), 256);
        assert_eq!(layout.height(), 256);

        let layout = AtlasLayout::new(1, 13, &AtlasOptions::default());
        assert_eq!((layout.width(), layout.height()), (32, 32));
    }

    #[test]
    fn zero_cell_size_or_count_is_empty() {
        for layout in [
            AtlasLayout::new(95, 0, &AtlasOptions::default()),
            AtlasLayout::new(0, 12, &AtlasOptions::default()),
        ] {
            assert!(layout.is_empty());
            assert_eq!((layout.width(), layout.height()), (0, 0));
            assert_eq!(layout.cell_origin(7), (0, 0));
        }
    }

    #[test]
    fn huge_padding_saturates() {
        let options = AtlasOptions {
            padding: u32::MAX - 5,
            power_of_two: false,
        };
        let layout = AtlasLayout::new(4, 10, &options);
        assert_eq!(layout.stride(), u32::MAX);
        assert_eq!(layout.cell_origin(0), (u32::MAX - 5, u32::MAX - 5));
        assert_eq!(layout.cell_origin(3), (u32::MAX, u32::MAX));
        assert_eq!(layout.width(), u32::MAX);
    }

    #[test]
    fn cells_never_overlap() {
        let layout = AtlasLayout::new(20, 9, &TIGHT);
        for a in 0..20 {
            for b in (a + 1)..20 {
                let (ax, ay) = layout.cell_origin(a);
                let (bx, by) = layout.cell_origin(b);
                let apart_x = ax + 9 <= bx || bx + 9 <= ax;
                let apart_y = ay + 9 <= by || by + 9 <= ay;
                assert!(apart_x || apart_y, "cells {a} and {b} overlap");
            }
        }
    }
}
