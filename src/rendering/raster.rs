//! Rasterizer: executes a display list on an RGBA canvas and encodes PNG

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, RgbImage};
use tiny_skia::{ColorU8, FillRule, IntSize, Paint, Path, Pixmap, PremultipliedColorU8, Transform};

use crate::rendering::font::FontSet;
use crate::rendering::paint::{gradient_color, PaintCommand};
use crate::rendering::Screenshot;
use crate::{Error, Result, Rgb};

/// Largest RGBA buffer a canvas may allocate (1 GiB)
pub const MAX_CANVAS_BYTES: usize = 1 << 30;

fn premultiplied(color: Rgb) -> PremultipliedColorU8 {
    ColorU8::from_rgba(color.r, color.g, color.b, 255).premultiply()
}

fn invalid_dims(width: u32, height: u32) -> Error {
    Error::InvalidDimensions { width, height }
}

/// In-memory pixel buffer for one generated image
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a canvas filled with `fill`.
    ///
    /// Fails with [`Error::InvalidDimensions`] when either side is zero, the
    /// buffer would exceed [`MAX_CANVAS_BYTES`], or the allocation fails.
    pub fn new(width: u32, height: u32, fill: Rgb) -> Result<Self> {
        let size = IntSize::from_wh(width, height).ok_or_else(|| invalid_dims(width, height))?;
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .filter(|&n| n <= MAX_CANVAS_BYTES)
            .ok_or_else(|| invalid_dims(width, height))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| invalid_dims(width, height))?;
        data.resize(len, 0);
        let mut pixmap = Pixmap::from_vec(data, size).ok_or_else(|| invalid_dims(width, height))?;
        pixmap.pixels_mut().fill(premultiplied(fill));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Paint a whole scan-line. Rows outside the canvas are ignored.
    pub fn fill_row(&mut self, y: u32, color: Rgb) {
        if y >= self.height() {
            return;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        self.pixmap.pixels_mut()[start..start + w].fill(premultiplied(color));
    }

    /// Fill an axis-aligned pixel rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width() as i64);
        let y1 = (y as i64 + height as i64).min(self.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let w = self.width() as usize;
        let px = premultiplied(color);
        let pixels = self.pixmap.pixels_mut();
        for row in y0..y1 {
            let start = row as usize * w;
            pixels[start + x0 as usize..start + x1 as usize].fill(px);
        }
    }

    /// Fill a vector path with anti-aliasing (non-zero winding).
    pub fn fill_path(&mut self, path: &Path, color: Rgb) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = true;
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Read back a pixel, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgb::new(c.red(), c.green(), c.blue())
        })
    }

    /// Encode the canvas as an RGB PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let raw: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue()]
            })
            .collect();
        let img = RgbImage::from_raw(self.width(), self.height(), raw)
            .ok_or_else(|| Error::Encode("pixel buffer size mismatch".into()))?;

        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img).write_to(&mut buf, ImageOutputFormat::Png)?;
        Ok(buf.into_inner())
    }

    pub fn into_screenshot(self) -> Result<Screenshot> {
        let png_data = self.encode_png()?;
        Ok(Screenshot {
            width: self.width(),
            height: self.height(),
            png_data,
        })
    }
}

/// Execute `commands` in order on `canvas`.
pub fn rasterize_into(
    canvas: &mut Canvas,
    commands: &[PaintCommand],
    fonts: &FontSet,
) -> Result<()> {
    for cmd in commands {
        match cmd {
            PaintCommand::Gradient { start, end } => {
                let height = canvas.height();
                for y in 0..height {
                    canvas.fill_row(y, gradient_color(*start, *end, y, height));
                }
            }
            PaintCommand::Text {
                x,
                y,
                text,
                element,
                color,
            } => fonts.for_element(*element).draw(canvas, text, *x, *y, *color)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = Canvas::new(0, 64, Rgb::WHITE).err().expect("should fail");
        assert!(matches!(err, Error::InvalidDimensions { width: 0, height: 64 }));
        assert!(Canvas::new(64, 0, Rgb::WHITE).is_err());
    }

    #[test]
    fn oversized_canvas_is_rejected_without_allocating() {
        assert!(matches!(
            Canvas::new(1, u32::MAX, Rgb::WHITE),
            Err(Error::InvalidDimensions { width: 1, height: u32::MAX })
        ));
        assert!(matches!(
            Canvas::new(u32::MAX, u32::MAX, Rgb::WHITE),
            Err(Error::InvalidDimensions { .. })
        ));
        // 16384 x 16385 x 4 is just over the limit
        assert!(Canvas::new(16384, 16385, Rgb::WHITE).is_err());
    }

    #[test]
    fn gradient_command_fills_every_row() {
        let fonts = FontSet {
            title: crate::rendering::font::Font::builtin(8.0),
            tagline: crate::rendering::font::Font::builtin(8.0),
        };
        let mut c = Canvas::new(3, 4, Rgb::WHITE).unwrap();
        let cmds = [PaintCommand::Gradient {
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(100, 200, 40),
        }];
        rasterize_into(&mut c, &cmds, &fonts).unwrap();
        assert_eq!(c.pixel(2, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(c.pixel(0, 2), Some(Rgb::new(50, 100, 20)));
        assert_eq!(c.pixel(1, 3), Some(Rgb::new(75, 150, 30)));
    }

    #[test]
    fn fill_row_paints_only_that_row() {
        let mut c = Canvas::new(4, 3, Rgb::new(0, 0, 0)).unwrap();
        c.fill_row(1, Rgb::new(10, 20, 30));
        c.fill_row(99, Rgb::WHITE);
        assert_eq!(c.pixel(0, 0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(c.pixel(3, 1), Some(Rgb::new(10, 20, 30)));
        assert_eq!(c.pixel(2, 2), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut c = Canvas::new(4, 4, Rgb::new(0, 0, 0)).unwrap();
        c.fill_rect(-2, -2, 3, 3, Rgb::WHITE);
        assert_eq!(c.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(c.pixel(1, 0), Some(Rgb::new(0, 0, 0)));
        c.fill_rect(3, 3, 10, 10, Rgb::WHITE);
        assert_eq!(c.pixel(3, 3), Some(Rgb::WHITE));
    }

    #[test]
    fn encoded_png_has_signature_and_size() {
        let c = Canvas::new(16, 8, Rgb::new(1, 2, 3)).unwrap();
        let s = c.into_screenshot().unwrap();
        assert_eq!(s.width, 16);
        assert_eq!(s.height, 8);
        assert_eq!(&s.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
