// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::SyntheticRasterizer;
use crate::{FontDescriptor, FontFactory, MemoryFontLocator, DEFAULT_FAMILY};

/// Data the synthetic backend refuses to open.
pub(crate) const CORRUPT_FONT: &[u8] = b"definitely not a font";

/// A locator knowing "Arial", the default family, and a corrupt "Broken".
pub(crate) fn test_locator() -> MemoryFontLocator {
    let mut locator = MemoryFontLocator::new();
    locator.insert("Arial", b"arial".to_vec());
    locator.insert(DEFAULT_FAMILY, b"dejavu".to_vec());
    locator.insert("Broken", CORRUPT_FONT.to_vec());
    locator
}

pub(crate) fn test_factory(
    rasterizer: SyntheticRasterizer,
) -> FontFactory<SyntheticRasterizer, MemoryFontLocator> {
    FontFactory::new(rasterizer, test_locator()).unwrap()
}

/// Arial at 14px over printable ASCII.
pub(crate) fn arial() -> FontDescriptor {
    FontDescriptor::new("Arial", 14)
}
