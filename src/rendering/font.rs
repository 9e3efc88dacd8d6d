//! Font loading, measurement and drawing
//!
//! A [`Font`] is either a TrueType face parsed with `ttf-parser` or the
//! built-in bitmap font. Loading the preferred face is a two-step attempt:
//! [`Font::load_or_fallback`] never fails and degrades to the built-in font.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;
use tiny_skia::PathBuilder;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use crate::rendering::builtin_font::BuiltinFont;
use crate::rendering::layout::ElementType;
use crate::rendering::raster::Canvas;
use crate::{Error, GeneratorConfig, Result, Rgb};

/// Reasons the preferred font could not be used
#[derive(Error, Debug)]
pub enum FontError {
    #[error("font file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Ink box of a text run, relative to the pen origin (top of the line box)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A TrueType (or collection member) face at a fixed pixel size
#[derive(Debug, Clone)]
pub struct TrueTypeFont {
    data: Vec<u8>,
    index: u32,
    size: f32,
}

impl TrueTypeFont {
    fn face(&self) -> Result<Face<'_>> {
        Face::parse(&self.data, self.index)
            .map_err(|e| Error::RenderError(format!("font face {} unusable: {}", self.index, e)))
    }

    /// Whether the selected face carries the bold flag
    pub fn is_bold(&self) -> bool {
        self.face().map(|f| f.is_bold()).unwrap_or(false)
    }

    /// Walk the glyphs of `text`, yielding each glyph id with its pen x in pixels.
    fn glyph_positions(face: &Face<'_>, text: &str, scale: f32) -> Vec<(GlyphId, f32)> {
        let mut pen = 0.0f32;
        text.chars()
            .map(|ch| {
                let gid = face.glyph_index(ch).unwrap_or(GlyphId(0));
                let at = pen;
                pen += face.glyph_hor_advance(gid).unwrap_or(0) as f32 * scale;
                (gid, at)
            })
            .collect()
    }

    pub fn measure(&self, text: &str) -> Result<TextBounds> {
        let face = self.face()?;
        let scale = self.size / face.units_per_em() as f32;
        let ascent = face.ascender() as f32 * scale;

        let mut extent: Option<(f32, f32, f32, f32)> = None;
        for (gid, pen) in Self::glyph_positions(&face, text, scale) {
            let Some(bb) = face.glyph_bounding_box(gid) else {
                continue;
            };
            let l = pen + bb.x_min as f32 * scale;
            let r = pen + bb.x_max as f32 * scale;
            let t = ascent - bb.y_max as f32 * scale;
            let b = ascent - bb.y_min as f32 * scale;
            extent = Some(match extent {
                None => (l, t, r, b),
                Some((el, et, er, eb)) => (el.min(l), et.min(t), er.max(r), eb.max(b)),
            });
        }

        Ok(match extent {
            Some((l, t, r, b)) => TextBounds {
                left: l,
                top: t,
                width: r - l,
                height: b - t,
            },
            None => TextBounds::default(),
        })
    }

    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) -> Result<()> {
        let face = self.face()?;
        let scale = self.size / face.units_per_em() as f32;
        let baseline = y as f32 + face.ascender() as f32 * scale;

        let mut pb = PathBuilder::new();
        for (gid, pen) in Self::glyph_positions(&face, text, scale) {
            let mut sink = GlyphSink {
                pb: &mut pb,
                scale,
                x: x as f32 + pen,
                baseline,
            };
            face.outline_glyph(gid, &mut sink);
        }
        // Blank runs produce no path at all
        if let Some(path) = pb.finish() {
            canvas.fill_path(&path, color);
        }
        Ok(())
    }
}

/// Maps font units (y up) onto canvas pixels (y down)
struct GlyphSink<'a> {
    pb: &'a mut PathBuilder,
    scale: f32,
    x: f32,
    baseline: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.pb.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.pb.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.pb.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.pb.close();
    }
}

/// Pick the face to use from font data: the first bold face of a
/// collection, otherwise face 0.
fn select_face(data: &[u8]) -> std::result::Result<u32, String> {
    let count = ttf_parser::fonts_in_collection(data).unwrap_or(1);
    for index in 0..count {
        if let Ok(face) = Face::parse(data, index) {
            if face.is_bold() {
                return Ok(index);
            }
        }
    }
    Face::parse(data, 0).map(|_| 0).map_err(|e| e.to_string())
}

#[derive(Debug, Clone)]
pub enum Font {
    TrueType(TrueTypeFont),
    Builtin(BuiltinFont),
}

impl Font {
    /// Load a TrueType/OpenType file or collection at `size` pixels.
    pub fn load_preferred(path: &Path, size: f32) -> std::result::Result<Font, FontError> {
        let data = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FontError::NotFound(path.to_path_buf()),
            _ => FontError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        let index = select_face(&data).map_err(|reason| FontError::Parse {
            path: path.to_path_buf(),
            reason,
        })?;
        let font = TrueTypeFont { data, index, size };
        debug!(
            "Loaded font {} (face {}, bold: {}) at {}px",
            path.display(),
            index,
            font.is_bold(),
            size
        );
        Ok(Font::TrueType(font))
    }

    pub fn builtin(size: f32) -> Font {
        Font::Builtin(BuiltinFont::new(size))
    }

    /// Try the preferred face, fall back to the built-in font on any failure.
    pub fn load_or_fallback(path: &Path, size: f32) -> Font {
        match Self::load_preferred(path, size) {
            Ok(font) => font,
            Err(e @ FontError::NotFound(_)) => {
                info!("{}; using built-in font", e);
                Self::builtin(size)
            }
            Err(e) => {
                warn!("{}; using built-in font", e);
                Self::builtin(size)
            }
        }
    }

    /// Same face at another pixel size.
    pub fn resized(&self, size: f32) -> Font {
        match self {
            Font::TrueType(t) => Font::TrueType(TrueTypeFont {
                data: t.data.clone(),
                index: t.index,
                size,
            }),
            Font::Builtin(_) => Self::builtin(size),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }

    pub fn measure(&self, text: &str) -> Result<TextBounds> {
        match self {
            Font::TrueType(t) => t.measure(text),
            Font::Builtin(b) => Ok(b.measure(text)),
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) -> Result<()> {
        match self {
            Font::TrueType(t) => t.draw(canvas, text, x, y, color),
            Font::Builtin(b) => {
                b.draw(canvas, text, x, y, color);
                Ok(())
            }
        }
    }
}

/// The two faces a screenshot needs: large for the title, small for the tagline
#[derive(Debug, Clone)]
pub struct FontSet {
    pub title: Font,
    pub tagline: Font,
}

impl FontSet {
    pub fn load(config: &GeneratorConfig) -> Self {
        let title = Font::load_or_fallback(&config.font_path, config.title_size);
        let tagline = title.resized(config.tagline_size);
        Self { title, tagline }
    }

    pub fn for_element(&self, element: ElementType) -> &Font {
        match element {
            ElementType::Title => &self.title,
            ElementType::Tagline => &self.tagline,
        }
    }
}
