// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caching of built fonts.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashMap;
use log::{debug, warn};

use crate::descriptor::FontDescriptor;
use crate::error::{Error, ErrorKind};
use crate::factory::FontFactory;
use crate::font::TextureFont;
use crate::locator::FontLocator;
use crate::rasterizer::GlyphRasterizer;

/// Family used by [`FontManager::font_or_default`] unless configured otherwise.
pub const DEFAULT_FAMILY: &str = "DejaVu Sans";

/// Builds fonts on demand and keeps them for later requests.
///
/// Fonts are keyed by their full descriptor, so the same family at two sizes
/// or with two ranges is cached twice.
pub struct FontManager<R: GlyphRasterizer, L: FontLocator> {
    factory: FontFactory<R, L>,
    cache: HashMap<FontDescriptor, Arc<TextureFont>>,
    default_family: String,
}

impl<R: GlyphRasterizer, L: FontLocator> FontManager<R, L> {
    /// Creates a manager falling back to [`DEFAULT_FAMILY`].
    pub fn new(factory: FontFactory<R, L>) -> Self {
        Self::with_default_family(factory, DEFAULT_FAMILY)
    }

    /// Creates a manager falling back to `family`.
    pub fn with_default_family(factory: FontFactory<R, L>, family: impl Into<String>) -> Self {
        Self {
            factory,
            cache: HashMap::new(),
            default_family: family.into(),
        }
    }

    /// The family [`FontManager::font_or_default`] retries with.
    pub fn default_family(&self) -> &str {
        &self.default_family
    }

    /// The underlying factory.
    pub fn factory(&self) -> &FontFactory<R, L> {
        &self.factory
    }

    /// The underlying factory, e.g. to register fonts with its locator.
    pub fn factory_mut(&mut self) -> &mut FontFactory<R, L> {
        &mut self.factory
    }

    /// Returns the cached font for `descriptor`, building it first if needed.
    ///
    /// Failures are not cached; a later call retries the build.
    pub fn font(&mut self, descriptor: &FontDescriptor) -> Result<Arc<TextureFont>, Error> {
        if let Some(font) = self.cache.get(descriptor) {
            return Ok(Arc::clone(font));
        }
        let font = Arc::new(self.factory.create_font(descriptor)?);
        debug!(
            "FontManager: cached '{}' at {}px ({} fonts)",
            descriptor.name(),
            descriptor.size(),
            self.cache.len() + 1
        );
        self.cache.insert(descriptor.clone(), Arc::clone(&font));
        Ok(font)
    }

    /// Like [`FontManager::font`], but when the font cannot be loaded, retries
    /// once with the default family at the same size and range.
    ///
    /// Other errors, and a failure of the default family itself, are returned
    /// unchanged.
    pub fn font_or_default(
        &mut self,
        descriptor: &FontDescriptor,
    ) -> Result<Arc<TextureFont>, Error> {
        match self.font(descriptor) {
            Err(err)
                if err.kind() == ErrorKind::FontLoad
                    && descriptor.name() != self.default_family =>
            {
                warn!("{err}; falling back to '{}'", self.default_family);
                let fallback = descriptor.with_name(self.default_family.clone());
                self.font(&fallback)
            }
            result => result,
        }
    }

    /// Drops every cached font. Fonts still referenced elsewhere stay alive.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached fonts.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no fonts are cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<R, L> fmt::Debug for FontManager<R, L>
where
    R: GlyphRasterizer,
    L: FontLocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontManager")
            .field("cached", &self.cache.len())
            .field("default_family", &self.default_family)
            .field("state", &self.factory.state())
            .finish_non_exhaustive()
    }
}
