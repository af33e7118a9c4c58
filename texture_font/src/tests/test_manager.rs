// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use super::utils::{arial, test_factory, SyntheticRasterizer};
use crate::{ErrorKind, FontDescriptor, FontManager, DEFAULT_FAMILY};

#[test]
fn fonts_are_built_once() {
    let rasterizer = SyntheticRasterizer::new();
    let stats = rasterizer.stats();
    let mut manager = FontManager::new(test_factory(rasterizer));

    let first = manager.font(&arial()).unwrap();
    let second = manager.font(&arial()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(manager.len(), 1);
    assert_eq!(stats.opened.get(), 1);

    // Another size is another font.
    let larger = manager.font(&FontDescriptor::new("Arial", 20)).unwrap();
    assert!(!Arc::ptr_eq(&first, &larger));
    assert_eq!(manager.len(), 2);
}

#[test]
fn unknown_family_falls_back_to_default() {
    let rasterizer = SyntheticRasterizer::new();
    let stats = rasterizer.stats();
    let mut manager = FontManager::new(test_factory(rasterizer));
    assert_eq!(manager.default_family(), DEFAULT_FAMILY);

    let requested = FontDescriptor::with_range("DoesNotExist", 16, b'0', 10);
    let font = manager.font_or_default(&requested).unwrap();
    assert_eq!(font.char_count(), 10);
    assert_eq!(font.first_char(), b'0');

    // Only the fallback is cached; asking again reuses it.
    assert_eq!(manager.len(), 1);
    let again = manager.font_or_default(&requested).unwrap();
    assert!(Arc::ptr_eq(&font, &again));
    assert_eq!(stats.opened.get(), 1);

    let direct = manager.font(&requested.with_name(DEFAULT_FAMILY)).unwrap();
    assert!(Arc::ptr_eq(&font, &direct));
}

#[test]
fn fallback_only_covers_load_failures() {
    let mut manager = FontManager::new(test_factory(SyntheticRasterizer::new()));
    let err = manager
        .font_or_default(&FontDescriptor::new("DoesNotExist", 0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDescriptor);
    assert!(manager.is_empty());
}

#[test]
fn failing_default_reports_the_default() {
    let mut manager =
        FontManager::with_default_family(test_factory(SyntheticRasterizer::new()), "AlsoMissing");
    let err = manager
        .font_or_default(&FontDescriptor::new("DoesNotExist", 12))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::FontLoad);
    assert_eq!(err.font_name(), Some("AlsoMissing"));
}

#[test]
fn clear_keeps_shared_fonts_alive() {
    let rasterizer = SyntheticRasterizer::new();
    let stats = rasterizer.stats();
    let mut manager = FontManager::new(test_factory(rasterizer));

    let font = manager.font(&arial()).unwrap();
    manager.clear();
    assert!(manager.is_empty());
    assert_eq!(font.char_count(), 95);

    let rebuilt = manager.font(&arial()).unwrap();
    assert!(!Arc::ptr_eq(&font, &rebuilt));
    assert_eq!(stats.opened.get(), 2);
}
