//! The screenshot generator: gradient, two centered text runs, PNG on disk

use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::rendering::font::FontSet;
use crate::rendering::layout::layout_labels;
use crate::rendering::paint::build_display_list;
use crate::rendering::raster::{rasterize_into, Canvas};
use crate::rendering::Screenshot;
use crate::{Error, GeneratorConfig, Result, Viewport};

/// Record of one written screenshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub label: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Hex SHA-256 of the PNG bytes
    pub sha256: String,
}

/// Render a screenshot in memory without touching the filesystem.
///
/// The canvas is allocated before any font or layout work, so zero or
/// oversized dimensions fail with [`Error::InvalidDimensions`] up front.
pub fn render(width: u32, height: u32, config: &GeneratorConfig) -> Result<Screenshot> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    let mut canvas = Canvas::new(width, height, config.base_color)?;
    let viewport = Viewport { width, height };

    let fonts = FontSet::load(config);
    let nodes = layout_labels(viewport, config, &fonts)?;
    let commands = build_display_list(config, &nodes);
    debug!(
        "Rendering {}x{} ({} paint commands, built-in font: {})",
        width,
        height,
        commands.len(),
        fonts.title.is_builtin()
    );
    rasterize_into(&mut canvas, &commands, &fonts)?;
    canvas.into_screenshot()
}

/// Generate one screenshot with the default configuration and write it to `output_path`.
///
/// The parent directory of `output_path` must exist; it is never created here.
pub fn generate(width: u32, height: u32, output_path: &Path, label: &str) -> Result<GeneratedFile> {
    generate_with(&GeneratorConfig::default(), width, height, output_path, label)
}

/// Like [`generate`], with an explicit configuration.
pub fn generate_with(
    config: &GeneratorConfig,
    width: u32,
    height: u32,
    output_path: &Path,
    label: &str,
) -> Result<GeneratedFile> {
    let shot = render(width, height, config)?;
    shot.save(output_path)?;
    println!("✓ Created {}: {}", label, output_path.display());

    Ok(GeneratedFile {
        label: label.to_string(),
        path: output_path.to_path_buf(),
        width: shot.width,
        height: shot.height,
        sha256: shot.digest(),
    })
}
