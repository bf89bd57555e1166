//=========================================================================
// Render Primitives
//=========================================================================
//
// Minimal 2D drawing vocabulary shared by states, scenes and widgets.
//
// Architecture:
//   Image (RGBA8 pixels) ──blit──> dyn Surface ──present──> Platform
//                                     ├─ Canvas (software target)
//                                     └─ test doubles
//
// Everything above the platform draws through `&mut dyn Surface`, so the
// state machine and scenes never depend on the windowing backend.
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod image;

#[cfg(test)]
pub(crate) mod recording;

//=== Public API ==========================================================

pub use canvas::Canvas;
pub use image::Image;

//=== Color ===============================================================

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const RED: Color = Color::rgb(0xff, 0x00, 0x00);
    pub const PINK: Color = Color::rgb(0xff, 0xc0, 0xcb);
    pub const FUCHSIA: Color = Color::rgb(0xff, 0x00, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Felt green used for the card table.
    pub const TABLE_GREEN: Color = Color::rgb(0x35, 0x65, 0x4d);

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the color as an `[r, g, b, a]` byte quad.
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in screen pixels (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle of the given size anchored at the origin.
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Returns a copy moved so that its top-left corner is at `(x, y)`.
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// Edges are inclusive on every side, so a cursor resting on the
    /// border still counts as hovering.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x as f32 <= x
            && x <= self.right() as f32
            && self.y as f32 <= y
            && y <= self.bottom() as f32
    }
}

//=== Surface Trait =======================================================

/// Render target that states, scenes and widgets draw into.
///
/// Presenting the finished frame is the platform's job and is not part of
/// this trait.
pub trait Surface {
    /// Size of the drawable area as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface with `color`.
    fn fill(&mut self, color: Color);

    /// Fills `rect` (clipped to the surface) with `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws `image` with its top-left corner at `rect`'s origin.
    ///
    /// At most `rect.width × rect.height` pixels are drawn. `alpha` scales
    /// the image's own alpha channel (`0` = invisible, `255` = as stored).
    fn blit(&mut self, image: &Image, rect: Rect, alpha: u8);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
        assert_eq!(Color::TABLE_GREEN.to_bytes(), [0x35, 0x65, 0x4d, 0xff]);
    }

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let rect = Rect::new(10, 10, 20, 20);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(30.0, 30.0));
        assert!(rect.contains(15.5, 22.0));
        assert!(!rect.contains(9.9, 15.0));
        assert!(!rect.contains(15.0, 30.1));
    }

    #[test]
    fn rect_at_keeps_size() {
        let rect = Rect::from_size(5, 6).at(-3, 7);
        assert_eq!(rect, Rect::new(-3, 7, 5, 6));
    }
}
