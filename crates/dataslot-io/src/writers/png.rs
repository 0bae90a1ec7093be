//! Figure-to-PNG writer (enabled with `--features png`).
//!
//! Unlike the JSON writers this one rewinds the buffer, so the caller can
//! forward the image bytes straight away.

use std::io::{Seek, Write};

use dataslot_core::config::PngConfig;
use image::{DynamicImage, ImageFormat};

use crate::error::Result;
use crate::figure::Figure;
use crate::stream::rewind;

/// Render `figure` on the default 640x480 canvas and write it as PNG.
pub fn figure_to_png_buffer<W, F>(buffer: &mut W, figure: &F) -> Result<()>
where
    W: Write + Seek,
    F: Figure + ?Sized,
{
    figure_to_png_buffer_with_config(buffer, figure, &PngConfig::default())
}

pub fn figure_to_png_buffer_with_config<W, F>(
    buffer: &mut W,
    figure: &F,
    config: &PngConfig,
) -> Result<()>
where
    W: Write + Seek,
    F: Figure + ?Sized,
{
    config.validate()?;
    let image = figure.render(config)?;
    DynamicImage::ImageRgba8(image).write_to(buffer, ImageFormat::Png)?;
    tracing::debug!(width = config.width, height = config.height, "wrote png figure");
    rewind(buffer)
}
