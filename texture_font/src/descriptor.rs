// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font requests.

use alloc::string::String;

use crate::error::Error;
use crate::range::CharRange;

/// First character of the default range (space).
pub const DEFAULT_MIN_CHAR: u8 = 32;

/// Size of the default range: printable ASCII, `' '` through `'~'`.
pub const DEFAULT_CHAR_COUNT: u16 = 95;

/// Identifies exactly one rasterization request: a font name, a pixel size
/// and the single-byte character range to rasterize.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    name: String,
    size: u32,
    min_char: u8,
    char_count: u16,
}

impl FontDescriptor {
    /// Creates a descriptor for the printable ASCII range.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self::with_range(name, size, DEFAULT_MIN_CHAR, DEFAULT_CHAR_COUNT)
    }

    /// Creates a descriptor for `char_count` characters starting at `min_char`.
    ///
    /// The descriptor is not validated here; see [`FontDescriptor::validate`].
    pub fn with_range(name: impl Into<String>, size: u32, min_char: u8, char_count: u16) -> Self {
        Self {
            name: name.into(),
            size,
            min_char,
            char_count,
        }
    }

    /// The font name passed to the font locator.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pixel height glyphs are rendered at.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The first character code of the range.
    pub fn min_char(&self) -> u8 {
        self.min_char
    }

    /// The number of characters in the range.
    pub fn char_count(&self) -> u16 {
        self.char_count
    }

    /// Returns a copy of this descriptor naming a different font.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Checks that the name is non-empty, the size positive and the range
    /// inside the single-byte code space.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::invalid_descriptor(
                &self.name,
                self.size,
                "font name is empty",
            ));
        }
        if self.size == 0 {
            return Err(Error::invalid_descriptor(
                &self.name,
                self.size,
                "pixel size must be positive",
            ));
        }
        if CharRange::new(self.min_char, self.char_count).is_none() {
            return Err(Error::invalid_descriptor(
                &self.name,
                self.size,
                alloc::format!(
                    "character range {}+{} leaves the single-byte code space",
                    self.min_char,
                    self.char_count
                ),
            ));
        }
        Ok(())
    }

    /// The validated character range.
    pub(crate) fn range(&self) -> Result<CharRange, Error> {
        self.validate()?;
        CharRange::new(self.min_char, self.char_count).ok_or_else(|| {
            Error::invalid_descriptor(&self.name, self.size, "invalid character range")
        })
    }
}
