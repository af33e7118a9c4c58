// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building [`TextureFont`]s from font descriptors.

use core::fmt;

use log::{debug, info};

use crate::atlas::{build_atlas, AtlasOptions};
use crate::descriptor::FontDescriptor;
use crate::error::Error;
use crate::font::TextureFont;
use crate::locator::FontLocator;
use crate::metrics::compute_metrics;
use crate::rasterizer::{load_face, GlyphRasterizer};

/// Lifecycle of the rasterizer session owned by a [`FontFactory`].
///
/// Transitions are linear: `Uninitialized → Ready → ShutDown`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FactoryState {
    /// The session has not been acquired yet.
    Uninitialized,
    /// Fonts can be built.
    Ready,
    /// The session was released; the factory cannot build fonts anymore.
    ShutDown,
}

/// Builds texture fonts with one rasterizer session.
///
/// The factory owns the rasterizer and the font locator. It holds no state
/// between [`FontFactory::create_font`] calls besides the session itself, and
/// every face it opens is released before `create_font` returns, whether it
/// succeeds or not.
pub struct FontFactory<R: GlyphRasterizer, L: FontLocator> {
    rasterizer: R,
    locator: L,
    options: AtlasOptions,
    state: FactoryState,
}

impl<R: GlyphRasterizer, L: FontLocator> FontFactory<R, L> {
    /// Acquires the rasterizer session with default atlas options.
    pub fn new(rasterizer: R, locator: L) -> Result<Self, Error> {
        Self::with_options(rasterizer, locator, AtlasOptions::default())
    }

    /// Acquires the rasterizer session.
    ///
    /// Fails with [`ErrorKind::BackendInit`](crate::ErrorKind::BackendInit)
    /// if the backend cannot be initialized.
    pub fn with_options(rasterizer: R, locator: L, options: AtlasOptions) -> Result<Self, Error> {
        let mut factory = Self {
            rasterizer,
            locator,
            options,
            state: FactoryState::Uninitialized,
        };
        factory
            .rasterizer
            .initialize()
            .map_err(Error::backend_init)?;
        factory.state = FactoryState::Ready;
        info!("FontFactory: rasterizer session ready");
        Ok(factory)
    }

    /// The current lifecycle state.
    pub fn state(&self) -> FactoryState {
        self.state
    }

    /// The atlas options fonts are built with.
    pub fn options(&self) -> &AtlasOptions {
        &self.options
    }

    /// The rasterizer backend.
    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// The font locator, e.g. to register additional fonts.
    pub fn locator_mut(&mut self) -> &mut L {
        &mut self.locator
    }

    /// Rasterizes the descriptor's character range into a new texture font.
    ///
    /// Characters the backend fails to render get zero-size glyphs; only
    /// descriptor, lookup and load failures are errors.
    pub fn create_font(&mut self, descriptor: &FontDescriptor) -> Result<TextureFont, Error> {
        let range = descriptor.range()?;
        if self.state != FactoryState::Ready {
            return Err(Error::shut_down(descriptor.name(), descriptor.size()));
        }

        debug!(
            "FontFactory: building '{}' at {}px, {} codes from {:#04x}",
            descriptor.name(),
            descriptor.size(),
            range.len(),
            range.first()
        );
        let mut face = load_face(
            &mut self.rasterizer,
            &mut self.locator,
            descriptor.name(),
            descriptor.size(),
        )?;
        let metrics = compute_metrics(&mut face, range);
        let font = build_atlas(&mut face, range, metrics, &self.options);
        drop(face);

        info!(
            "FontFactory: built '{}' at {}px ({}x{} atlas)",
            descriptor.name(),
            descriptor.size(),
            font.texture().width(),
            font.texture().height()
        );
        Ok(font)
    }

    /// Releases the rasterizer session. Calling it again has no effect.
    pub fn shutdown(&mut self) {
        if self.state == FactoryState::Ready {
            self.rasterizer.shutdown();
            info!("FontFactory: rasterizer session released");
        }
        self.state = FactoryState::ShutDown;
    }
}

impl<R: GlyphRasterizer, L: FontLocator> Drop for FontFactory<R, L> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl<R, L> fmt::Debug for FontFactory<R, L>
where
    R: GlyphRasterizer + fmt::Debug,
    L: FontLocator + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFactory")
            .field("rasterizer", &self.rasterizer)
            .field("locator", &self.locator)
            .field("options", &self.options)
            .field("state", &self.state)
            .finish()
    }
}
