// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving font names to font data.
//!
//! The factory never touches the file system itself; it asks a [`FontLocator`]
//! for the data behind a font name. Three locators are provided:
//!
//! - [`SystemFontLocator`] queries the installed fonts through Fontique.
//! - [`FontDirectoryLocator`] searches directories for `<name>.ttf`, `.otf` or `.ttc`.
//! - [`MemoryFontLocator`] serves font data registered by the application.
//!
//! [`FallbackLocator`] chains two of them.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use std::path::{Path, PathBuf};

use fontique::{Blob, Collection, CollectionOptions, SourceCache, SourceKind};
use hashbrown::HashMap;
use log::{debug, trace, warn};
use smallvec::SmallVec;

/// File extensions recognised by [`FontDirectoryLocator`].
pub const FONT_FILE_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// How deep [`FontDirectoryLocator`] descends below each search directory.
const MAX_SEARCH_DEPTH: usize = 3;

/// Font data found for a font name.
#[derive(Clone)]
pub struct LocatedFont {
    /// The raw font file contents.
    pub data: Blob<u8>,
    /// Index of the font within a collection file (0 for single fonts).
    pub index: u32,
    /// Where the data was read from, if it came from a file.
    pub path: Option<PathBuf>,
}

impl LocatedFont {
    /// Wraps in-memory font data.
    pub fn from_bytes(data: Vec<u8>, index: u32) -> Self {
        Self {
            data: Blob::from(data),
            index,
            path: None,
        }
    }
}

impl fmt::Debug for LocatedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocatedFont")
            .field("len", &self.data.data().len())
            .field("index", &self.index)
            .field("path", &self.path)
            .finish()
    }
}

/// No font matches the requested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontNotFound {
    name: String,
}

impl FontNotFound {
    /// Creates the error for `name`.
    pub fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The name that could not be resolved.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for FontNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no font found for '{}'", self.name)
    }
}

impl core::error::Error for FontNotFound {}

/// Resolves a font name to font data.
pub trait FontLocator {
    /// Finds the font called `name`.
    fn find_font(&mut self, name: &str) -> Result<LocatedFont, FontNotFound>;
}

/// Looks fonts up by family name in the system font collection.
pub struct SystemFontLocator {
    collection: Collection,
    source_cache: SourceCache,
}

impl SystemFontLocator {
    /// Creates a locator over the installed system fonts.
    pub fn new() -> Self {
        Self::with_options(CollectionOptions::default())
    }

    /// Creates a locator with explicit collection options.
    pub fn with_options(options: CollectionOptions) -> Self {
        Self {
            collection: Collection::new(options),
            source_cache: SourceCache::default(),
        }
    }
}

impl Default for SystemFontLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SystemFontLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemFontLocator").finish_non_exhaustive()
    }
}

impl FontLocator for SystemFontLocator {
    fn find_font(&mut self, name: &str) -> Result<LocatedFont, FontNotFound> {
        let family = self
            .collection
            .family_by_name(name)
            .ok_or_else(|| FontNotFound::new(name))?;
        let font = family.default_font().ok_or_else(|| FontNotFound::new(name))?;
        let data = font
            .load(Some(&mut self.source_cache))
            .ok_or_else(|| FontNotFound::new(name))?;
        let path = match &font.source().kind {
            SourceKind::Path(path) => Some(path.to_path_buf()),
            _ => None,
        };
        debug!("SystemFontLocator: '{}' resolved to {:?}", name, path);
        Ok(LocatedFont {
            data,
            index: font.index(),
            path,
        })
    }
}

/// Searches directories for a font file whose stem matches the font name.
///
/// Stems are compared case-insensitively with whitespace ignored, so the
/// family name "DejaVu Sans" finds `DejaVuSans.ttf`. Style suffixes are not
/// stripped: `DejaVuSans-Bold.ttf` only matches "DejaVuSans-Bold". Directories are searched in the
/// order they were added; within a directory, matches are ordered by path.
#[derive(Clone, Debug, Default)]
pub struct FontDirectoryLocator {
    dirs: SmallVec<[PathBuf; 4]>,
}

impl FontDirectoryLocator {
    /// Creates a locator with no search directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator over the platform's conventional font directories.
    pub fn with_platform_dirs() -> Self {
        let mut locator = Self::new();
        if cfg!(target_os = "windows") {
            let root = std::env::var_os("WINDIR").unwrap_or_else(|| "C:\\Windows".into());
            locator.push_dir(Path::new(&root).join("Fonts"));
        } else if cfg!(target_vendor = "apple") {
            locator.push_dir("/System/Library/Fonts");
            locator.push_dir("/Library/Fonts");
            if let Some(home) = std::env::var_os("HOME") {
                locator.push_dir(Path::new(&home).join("Library/Fonts"));
            }
        } else {
            if let Some(home) = std::env::var_os("HOME") {
                locator.push_dir(Path::new(&home).join(".local/share/fonts"));
                locator.push_dir(Path::new(&home).join(".fonts"));
            }
            locator.push_dir("/usr/local/share/fonts");
            locator.push_dir("/usr/share/fonts");
        }
        locator
    }

    /// Appends a search directory.
    pub fn push_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dirs.push(dir.into());
    }

    /// The search directories, in search order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    fn search(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                trace!("FontDirectoryLocator: skipping {}: {}", dir.display(), err);
                return None;
            }
        };
        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        paths.sort();

        if let Some(found) = paths.iter().find(|p| p.is_file() && matches_font_name(p, name)) {
            return Some(found.clone());
        }
        if depth == 0 {
            return None;
        }
        paths
            .iter()
            .filter(|p| p.is_dir())
            .find_map(|p| Self::search(p, name, depth - 1))
    }
}

impl FontLocator for FontDirectoryLocator {
    fn find_font(&mut self, name: &str) -> Result<LocatedFont, FontNotFound> {
        for dir in &self.dirs {
            let Some(path) = Self::search(dir, name, MAX_SEARCH_DEPTH) else {
                continue;
            };
            match std::fs::read(&path) {
                Ok(bytes) => {
                    debug!("FontDirectoryLocator: '{}' -> {}", name, path.display());
                    return Ok(LocatedFont {
                        data: Blob::from(bytes),
                        index: 0,
                        path: Some(path),
                    });
                }
                Err(err) => warn!(
                    "FontDirectoryLocator: cannot read {}: {}",
                    path.display(),
                    err
                ),
            }
        }
        Err(FontNotFound::new(name))
    }
}

/// `s` without whitespace, ASCII-lowercased.
fn squashed(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
}

fn matches_font_name(path: &Path, name: &str) -> bool {
    let stem_matches = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| squashed(s).eq(squashed(name)));
    let ext_matches = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| FONT_FILE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)));
    stem_matches && ext_matches
}

/// Serves font data registered by the application, e.g. fonts bundled with it.
#[derive(Clone, Default)]
pub struct MemoryFontLocator {
    fonts: HashMap<String, LocatedFont>,
}

impl MemoryFontLocator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `data` under `name`, replacing any previous registration.
    pub fn insert(&mut self, name: impl Into<String>, data: Vec<u8>) {
        self.fonts.insert(name.into(), LocatedFont::from_bytes(data, 0));
    }

    /// Registers an already located font under `name`.
    pub fn insert_located(&mut self, name: impl Into<String>, font: LocatedFont) {
        self.fonts.insert(name.into(), font);
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no fonts are registered.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl fmt::Debug for MemoryFontLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFontLocator")
            .field("fonts", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FontLocator for MemoryFontLocator {
    fn find_font(&mut self, name: &str) -> Result<LocatedFont, FontNotFound> {
        self.fonts
            .get(name)
            .cloned()
            .ok_or_else(|| FontNotFound::new(name))
    }
}

/// Tries `primary` first and `secondary` when the primary has no match.
#[derive(Clone, Debug, Default)]
pub struct FallbackLocator<A, B> {
    /// The locator asked first.
    pub primary: A,
    /// The locator asked when the primary fails.
    pub secondary: B,
}

impl<A, B> FallbackLocator<A, B> {
    /// Chains two locators.
    pub fn new(primary: A, secondary: B) -> Self {
        Self { primary, secondary }
    }
}

impl<A: FontLocator, B: FontLocator> FontLocator for FallbackLocator<A, B> {
    fn find_font(&mut self, name: &str) -> Result<LocatedFont, FontNotFound> {
        self.primary
            .find_font(name)
            .or_else(|_| self.secondary.find_font(name))
    }
}
