// Copyright 2025 the Texture Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds the texture atlas for a font and writes it to a PNG.
//!
//! ```text
//! atlas_dump [FAMILY] [SIZE] [OUTPUT]
//! ```
//!
//! The family is looked up among the installed fonts first, then in the
//! platform font directories. Set `RUST_LOG=debug` to follow the build.

use std::path::PathBuf;
use std::process::ExitCode;

use image::GrayImage;
use log::{error, info};
use texture_font::{
    FallbackLocator, FontDescriptor, FontDirectoryLocator, FontFactory, SwashRasterizer,
    SystemFontLocator, TextureFont, DEFAULT_FAMILY,
};

const DEFAULT_SIZE: u32 = 16;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let family = args.next().unwrap_or_else(|| DEFAULT_FAMILY.to_owned());
    let size = match args.next().map(|s| s.parse::<u32>()) {
        None => DEFAULT_SIZE,
        Some(Ok(size)) => size,
        Some(Err(e)) => {
            error!("invalid pixel size: {e}");
            return ExitCode::FAILURE;
        }
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("atlas.png"));

    let locator = FallbackLocator::new(
        SystemFontLocator::new(),
        FontDirectoryLocator::with_platform_dirs(),
    );
    let font = match FontFactory::new(SwashRasterizer::new(), locator)
        .and_then(|mut factory| factory.create_font(&FontDescriptor::new(family, size)))
    {
        Ok(font) => font,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let Some(image) = to_image(&font) else {
        error!("the font rendered no glyphs");
        return ExitCode::FAILURE;
    };
    if let Err(e) = image.save(&output) {
        error!("failed to write {}: {e}", output.display());
        return ExitCode::FAILURE;
    }
    info!(
        "wrote {}x{} atlas ({}px cells, line height {}px) to {}",
        image.width(),
        image.height(),
        font.cell_size(),
        font.line_height(),
        output.display()
    );
    ExitCode::SUCCESS
}

/// Copies the alpha atlas into a grayscale image, or `None` if it is empty.
fn to_image(font: &TextureFont) -> Option<GrayImage> {
    let texture = font.texture();
    if texture.is_empty() {
        return None;
    }
    GrayImage::from_raw(texture.width(), texture.height(), texture.pixels().to_vec())
}
