//=========================================================================
// Canvas
//=========================================================================
//
// Software render target. The platform copies the finished canvas into
// the window's frame buffer once per frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Image, Rect, Surface};

//=== Canvas ==============================================================

/// In-memory RGBA8 surface with alpha blending.
#[derive(Debug, Clone)]
pub struct Canvas {
    target: Image,
}

impl Canvas {
    /// Creates an opaque black canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            target: Image::solid(width, height, Color::BLACK),
        }
    }

    /// Raw RGBA8 bytes of the current frame.
    pub fn pixels(&self) -> &[u8] {
        self.target.pixels()
    }

    /// Color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.target.pixel(x, y)
    }

    /// Consumes the canvas, returning the drawn image.
    pub fn into_image(self) -> Image {
        self.target
    }

    //--- Internal Helpers -------------------------------------------------

    /// Intersects `rect` with the canvas bounds.
    ///
    /// Returns `(x0, y0, x1, y1)` in canvas pixels, or `None` when empty.
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.target.size();
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.right() as i64).min(width as i64);
        let y1 = (rect.bottom() as i64).min(height as i64);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

//=== Surface Implementation ==============================================

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.target.size()
    }

    fn fill(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for pixel in self.target.pixels_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&bytes);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                self.target.set_pixel(x, y, color);
            }
        }
    }

    fn blit(&mut self, image: &Image, rect: Rect, alpha: u8) {
        if alpha == 0 {
            return;
        }

        let dest = Rect {
            width: rect.width.min(image.width()),
            height: rect.height.min(image.height()),
            ..rect
        };
        let Some((x0, y0, x1, y1)) = self.clip(dest) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let src_x = (x as i64 - rect.x as i64) as u32;
                let src_y = (y as i64 - rect.y as i64) as u32;
                let (Some(src), Some(dst)) = (image.pixel(src_x, src_y), self.target.pixel(x, y))
                else {
                    continue;
                };
                self.target.set_pixel(x, y, blend(src, dst, alpha));
            }
        }
    }
}

//=== Blending ============================================================

/// Source-over blend of `src` onto `dst`, with `src` alpha scaled by `alpha`.
fn blend(src: Color, dst: Color, alpha: u8) -> Color {
    let a = src.a as u32 * alpha as u32 / 255;
    if a == 255 {
        return Color { a: 255, ..src };
    }
    if a == 0 {
        return dst;
    }

    let inv = 255 - a;
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv) / 255) as u8;
    let out_a = a + dst.a as u32 * inv / 255;

    Color::rgba(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), out_a as u8)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_black() {
        let canvas = Canvas::new(4, 4);
        assert_eq!(canvas.size(), (4, 4));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn fill_covers_everything() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill(Color::FUCHSIA);
        assert!(canvas.pixels().chunks_exact(4).all(|p| p == Color::FUCHSIA.to_bytes()));
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Rect::new(2, 2, 10, 10), Color::WHITE);

        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(2, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn opaque_blit_copies_pixels() {
        let mut canvas = Canvas::new(4, 4);
        let image = Image::solid(2, 2, Color::RED);

        canvas.blit(&image, Rect::new(1, 1, 2, 2), 255);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(3, 3), Some(Color::BLACK));
    }

    #[test]
    fn zero_alpha_blit_is_invisible() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blit(&Image::solid(2, 2, Color::WHITE), Rect::from_size(2, 2), 0);
        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn half_alpha_blit_blends() {
        let mut canvas = Canvas::new(1, 1);
        canvas.blit(&Image::solid(1, 1, Color::WHITE), Rect::from_size(1, 1), 128);

        let pixel = canvas.pixel(0, 0).unwrap();
        assert!(pixel.r > 100 && pixel.r < 156, "Expected mid-grey, got {:?}", pixel);
        assert_eq!(pixel.a, 255);
    }

    #[test]
    fn blit_handles_negative_origin() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blit(&Image::solid(2, 2, Color::RED), Rect::new(-1, -1, 2, 2), 255);

        assert_eq!(canvas.pixel(0, 0), Some(Color::RED));
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
    }
}
