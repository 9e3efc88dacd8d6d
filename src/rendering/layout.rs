/// Text placement for the title and tagline
use log::debug;

use crate::rendering::font::FontSet;
use crate::{GeneratorConfig, Result, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Horizontal midpoint in pixels
    pub fn center_x(&self) -> f32 {
        self.x as f32 + self.width as f32 / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Title,
    Tagline,
}

/// A placed text run: where the pen goes and where its ink ends up.
#[derive(Debug, Clone)]
pub struct LayoutNode {
    /// Pen origin handed to `Font::draw`
    pub origin: (i32, i32),
    /// Ink box on the canvas
    pub ink: Rect,
    pub text: String,
    pub elem_type: ElementType,
}

/// Place a run so its ink box is horizontally centered and its ink top sits at `ink_top`.
///
/// The pen origin is rounded once; the ink rect is the pixel span that
/// covers the (possibly fractional) ink at that origin.
fn place(
    viewport: Viewport,
    fonts: &FontSet,
    elem_type: ElementType,
    text: &str,
    ink_top: impl FnOnce(f32) -> f32,
) -> Result<LayoutNode> {
    let bounds = fonts.for_element(elem_type).measure(text)?;
    if bounds.is_empty() {
        debug!("{:?} run {:?} has no ink", elem_type, text);
    }
    let origin = (
        ((viewport.width as f32 - bounds.width) / 2.0 - bounds.left).round() as i32,
        (ink_top(bounds.height) - bounds.top).round() as i32,
    );
    let x0 = origin.0 as f32 + bounds.left;
    let y0 = origin.1 as f32 + bounds.top;
    let x = x0.floor() as i32;
    let y = y0.floor() as i32;
    Ok(LayoutNode {
        origin,
        ink: Rect {
            x,
            y,
            width: ((x0 + bounds.width).ceil() as i32 - x).max(0) as u32,
            height: ((y0 + bounds.height).ceil() as i32 - y).max(0) as u32,
        },
        text: text.to_string(),
        elem_type,
    })
}

/// Compute placements for the title and tagline.
/// - Title ink is centered, lifted `title_lift` px above the vertical center
/// - Tagline ink top sits `tagline_drop` px below the vertical midpoint
pub fn layout_labels(
    viewport: Viewport,
    config: &GeneratorConfig,
    fonts: &FontSet,
) -> Result<Vec<LayoutNode>> {
    let height = viewport.height as f32;
    let title = place(viewport, fonts, ElementType::Title, &config.title, |ink_h| {
        ((height - ink_h) / 2.0).floor() - config.title_lift as f32
    })?;
    let tagline = place(viewport, fonts, ElementType::Tagline, &config.tagline, |_| {
        (height / 2.0).floor() + config.tagline_drop as f32
    })?;
    Ok(vec![title, tagline])
}
