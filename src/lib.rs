//! Flow iQ placeholder screenshots
//!
//! Procedurally generates App Store placeholder screenshots: a vertical
//! gradient background with a centered title and tagline, written as PNG
//! files for the iPhone and iPad display sizes.
//!
//! # Features
//!
//! - **Deterministic output**: the gradient and the built-in fallback font
//!   render identically on every host
//! - **Font fallback**: a preferred bold TrueType face is tried first; if it
//!   cannot be loaded a built-in bitmap font is used and generation continues
//! - **Pipeline**: layout -> paint -> raster, each testable on its own
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! std::fs::create_dir_all("screenshots/iphone")?;
//! let file = storeshots::generate(
//!     1290,
//!     2796,
//!     Path::new("screenshots/iphone/screenshot_1.png"),
//!     "iPhone",
//! )?;
//! println!("sha256: {}", file.sha256);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod device;
pub mod driver;
pub mod generator;
pub mod rendering;

pub use device::DeviceProfile;
pub use driver::{run, run_with, RunReport};
pub use generator::{generate, generate_with, render, GeneratedFile};
pub use rendering::Screenshot;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Configuration for the screenshot generator
///
/// The defaults reproduce the Flow iQ placeholder artwork:
/// - indigo gradient from `(108, 102, 241)` down to `(79, 70, 229)`
/// - white "Flow iQ" title at 120px, 100px above center
/// - white tagline at 60px, 50px below the vertical midpoint
/// - Helvetica from the macOS system fonts, falling back to the built-in font
///
/// # Examples
///
/// ```
/// let cfg = storeshots::GeneratorConfig::default();
/// assert_eq!(cfg.title, "Flow iQ");
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Initial canvas fill, visible only where the gradient does not paint
    pub base_color: Rgb,
    /// Color of the top scan-line
    pub gradient_start: Rgb,
    /// Color the gradient approaches at the bottom
    pub gradient_end: Rgb,
    pub text_color: Rgb,
    pub title: String,
    pub tagline: String,
    /// Title size in pixels
    pub title_size: f32,
    /// Tagline size in pixels
    pub tagline_size: f32,
    /// Preferred font file (TrueType, OpenType or a collection)
    pub font_path: PathBuf,
    /// How far the title ink is lifted above the vertical center
    pub title_lift: i32,
    /// Offset of the tagline ink top below the vertical midpoint
    pub tagline_drop: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_color: Rgb::new(108, 102, 241),
            gradient_start: Rgb::new(108, 102, 241),
            gradient_end: Rgb::new(79, 70, 229),
            text_color: Rgb::WHITE,
            title: "Flow iQ".to_string(),
            tagline: "Intelligent Menstrual Health".to_string(),
            title_size: 120.0,
            tagline_size: 60.0,
            font_path: PathBuf::from("/System/Library/Fonts/Helvetica.ttc"),
            title_lift: 100,
            tagline_drop: 50,
        }
    }
}
