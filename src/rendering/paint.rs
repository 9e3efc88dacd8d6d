/// Paint command set: one gradient background, one command per text run
use crate::rendering::layout::{ElementType, LayoutNode};
use crate::{GeneratorConfig, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Vertical gradient over every row of the canvas
    Gradient {
        start: Rgb,
        end: Rgb,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        element: ElementType,
        color: Rgb,
    },
}

/// Color of scan-line `y`: each channel is `trunc(start + (end - start) * y / height)`.
pub fn gradient_color(start: Rgb, end: Rgb, y: u32, height: u32) -> Rgb {
    let t = y as f64 / height.max(1) as f64;
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;
    Rgb::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

/// Build the display list for one screenshot: the gradient first, then text.
pub fn build_display_list(config: &GeneratorConfig, nodes: &[LayoutNode]) -> Vec<PaintCommand> {
    let mut cmds = vec![PaintCommand::Gradient {
        start: config.gradient_start,
        end: config.gradient_end,
    }];
    cmds.extend(nodes.iter().map(|n| PaintCommand::Text {
        x: n.origin.0,
        y: n.origin.1,
        text: n.text.clone(),
        element: n.elem_type,
        color: config.text_color,
    }));
    cmds
}
