//=========================================================================
// Image
//=========================================================================
//
// Owned RGBA8 pixel buffer, row-major, 4 bytes per pixel.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect};

//=== Image ===============================================================

/// Owned RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    //--- Construction -----------------------------------------------------

    /// Creates a fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::solid(width, height, Color::TRANSPARENT)
    }

    /// Creates an image filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let pixels = color
            .to_bytes()
            .repeat(width as usize * height as usize);

        Self { width, height, pixels }
    }

    /// Wraps an existing RGBA8 buffer.
    ///
    /// Returns `None` if the buffer length does not match `width × height × 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Self { width, height, pixels })
    }

    /// Creates a filled circle of the given diameter on a transparent square.
    pub fn circle(diameter: u32, color: Color) -> Self {
        let mut image = Self::new(diameter, diameter);
        let radius = diameter as f32 / 2.0;

        for y in 0..diameter {
            for x in 0..diameter {
                let dx = x as f32 + 0.5 - radius;
                let dy = y as f32 + 0.5 - radius;
                if dx * dx + dy * dy <= radius * radius {
                    image.set_pixel(x, y, color);
                }
            }
        }

        image
    }

    //--- Accessors --------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Rectangle covering the whole image, anchored at the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Raw RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Color at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let index = self.index(x, y)?;
        let p = &self.pixels[index..index + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Overwrites the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index..index + 4].copy_from_slice(&color.to_bytes());
        }
    }

    //--- Sub-images -------------------------------------------------------

    /// Copies the region `rect` into a new image.
    ///
    /// Returns `None` unless the region lies completely inside the image.
    pub fn sub_image(&self, rect: Rect) -> Option<Image> {
        if rect.x < 0 || rect.y < 0 {
            return None;
        }
        if rect.right() as i64 > self.width as i64 || rect.bottom() as i64 > self.height as i64 {
            return None;
        }

        let row_bytes = rect.width as usize * 4;
        let mut pixels = Vec::with_capacity(row_bytes * rect.height as usize);

        for row in 0..rect.height {
            let start = self.index(rect.x as u32, rect.y as u32 + row)?;
            pixels.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }

        Some(Image {
            width: rect.width,
            height: rect.height,
            pixels,
        })
    }

    //--- Internal Helpers -------------------------------------------------

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_image_has_uniform_pixels() {
        let image = Image::solid(3, 2, Color::RED);
        assert_eq!(image.pixels().len(), 3 * 2 * 4);
        assert_eq!(image.pixel(0, 0), Some(Color::RED));
        assert_eq!(image.pixel(2, 1), Some(Color::RED));
        assert_eq!(image.pixel(3, 0), None);
    }

    #[test]
    fn from_rgba_rejects_wrong_length() {
        assert!(Image::from_rgba(2, 2, vec![0; 15]).is_none());
        assert!(Image::from_rgba(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn sub_image_copies_region() {
        let mut image = Image::solid(4, 4, Color::BLACK);
        image.set_pixel(2, 1, Color::WHITE);

        let sub = image.sub_image(Rect::new(1, 1, 2, 2)).expect("region is in bounds");

        assert_eq!(sub.size(), (2, 2));
        assert_eq!(sub.pixel(1, 0), Some(Color::WHITE));
        assert_eq!(sub.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn sub_image_rejects_out_of_bounds() {
        let image = Image::new(4, 4);
        assert!(image.sub_image(Rect::new(3, 0, 2, 2)).is_none());
        assert!(image.sub_image(Rect::new(-1, 0, 2, 2)).is_none());
    }

    #[test]
    fn circle_is_transparent_in_corners() {
        let image = Image::circle(10, Color::RED);
        assert_eq!(image.pixel(0, 0), Some(Color::TRANSPARENT));
        assert_eq!(image.pixel(5, 5), Some(Color::RED));
    }
}
