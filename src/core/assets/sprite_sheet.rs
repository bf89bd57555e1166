//=========================================================================
// Sprite Sheet
//=========================================================================
//
// An atlas image plus named sub-rectangles. Entries mirror the usual
// texture-atlas layout (name, x, y, width, height); reading those entries
// from a descriptor file is left to the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::error;

//=== Internal Dependencies ===============================================

use super::AssetError;
use crate::core::render::{Image, Rect};

//=== SpriteSheet =========================================================

/// Atlas image with named sprite regions.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    atlas: Image,
    sprites: BTreeMap<String, Rect>,
}

impl SpriteSheet {
    pub fn new(atlas: Image) -> Self {
        Self {
            atlas,
            sprites: BTreeMap::new(),
        }
    }

    /// Defines (or redefines) a named sprite region.
    pub fn define(&mut self, name: impl Into<String>, rect: Rect) {
        self.sprites.insert(name.into(), rect);
    }

    /// Extracts the named sprite as a standalone image.
    pub fn get(&self, name: &str) -> Result<Image, AssetError> {
        let Some(rect) = self.sprites.get(name) else {
            error!("Failed to find sprite by name ({})", name);
            return Err(AssetError::SpriteNotFound(name.to_owned()));
        };

        self.atlas
            .sub_image(*rect)
            .ok_or_else(|| AssetError::SpriteOutOfBounds(name.to_owned()))
    }

    /// Sprite names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
