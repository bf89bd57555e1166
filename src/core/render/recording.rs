//=========================================================================
// Recording Surface (test double)
//=========================================================================

use super::{Color, Image, Rect, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCall {
    Fill(Color),
    FillRect(Rect, Color),
    Blit { size: (u32, u32), rect: Rect, alpha: u8 },
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub size: (u32, u32),
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            calls: Vec::new(),
        }
    }

    /// Alpha values of every blit, in call order.
    pub fn blit_alphas(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit { alpha, .. } => Some(*alpha),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::FillRect(rect, color));
    }

    fn blit(&mut self, image: &Image, rect: Rect, alpha: u8) {
        self.calls.push(DrawCall::Blit {
            size: image.size(),
            rect,
            alpha,
        });
    }
}
