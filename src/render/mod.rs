//! SVG to PNG rendering.
//!
//! Renders a single SVG file to a PNG at a requested DPI, compositing
//! onto an opaque white background. Any failure here is fatal to the
//! convert run; no partial PNG is written.

use resvg::{tiny_skia, usvg};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Reference DPI of SVG user units; the render scale is `dpi / 96`.
const BASE_DPI: f32 = 96.0;

/// Errors raised by the render pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read SVG file {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse SVG file {path}: {source}")]
    ParseSvg {
        path: String,
        source: usvg::Error,
    },

    #[error("SVG {path} renders to an empty {width}x{height} canvas at {dpi} DPI")]
    EmptyCanvas {
        path: String,
        width: u32,
        height: u32,
        dpi: f32,
    },

    #[error("failed to write PNG file {path}: {message}")]
    WritePng { path: String, message: String },
}

/// Render `input` (an SVG file) to `output` (a PNG file) at `dpi`,
/// filling transparent regions with white.
pub fn svg_to_png(input: &Path, output: &Path, dpi: f32) -> Result<(), RenderError> {
    let data = std::fs::read(input).map_err(|source| RenderError::ReadInput {
        path: input.display().to_string(),
        source,
    })?;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options).map_err(|source| RenderError::ParseSvg {
        path: input.display().to_string(),
        source,
    })?;

    let scale = dpi / BASE_DPI;
    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or_else(|| RenderError::EmptyCanvas {
            path: input.display().to_string(),
            width,
            height,
            dpi,
        })?;

    pixmap.fill(tiny_skia::Color::WHITE);

    debug!(
        "Rendering {} at {}x{} ({} DPI)",
        input.display(),
        width,
        height,
        dpi
    );

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .save_png(output)
        .map_err(|e| RenderError::WritePng {
            path: output.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(())
}
