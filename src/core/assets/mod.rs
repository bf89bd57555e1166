//=========================================================================
// Asset Registry
//=========================================================================
//
// Name-addressed image storage.
//
// Architecture:
//   SpriteSheet (atlas + named rects) ──load_sprite_sheet()──┐
//   add_texture(name, image) ────────────────────────────────┴─> AssetManager
//                                                                   │
//   states / scenes ◄──────────── get_texture(name) ────────────────┘
//
// Decoding files into images is outside this module: callers hand over
// ready `Image`s, and lookups by unknown name fail fast.
//
//=========================================================================

//=== Module Declarations =================================================

mod sprite_sheet;

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::render::Image;

//=== Public API ==========================================================

pub use sprite_sheet::SpriteSheet;

//=== AssetError ==========================================================

/// Failures when looking up assets by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The sprite sheet has no entry with this name.
    #[error("sprite not found in sheet: {0}")]
    SpriteNotFound(String),

    /// The named entry does not fit inside the atlas image.
    #[error("sprite {0} lies outside its atlas image")]
    SpriteOutOfBounds(String),

    /// No texture was registered under this name.
    #[error("texture not found: {0}")]
    TextureNotFound(String),
}

//=== AssetManager ========================================================

/// Registry of loaded textures, keyed by name.
#[derive(Debug, Default)]
pub struct AssetManager {
    textures: HashMap<String, Image>,
}

impl AssetManager {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Registers `image` under `name`, replacing any previous texture.
    pub fn add_texture(&mut self, name: impl Into<String>, image: Image) {
        let name = name.into();
        if self.textures.insert(name.clone(), image).is_some() {
            warn!("Texture {} was already registered and has been replaced", name);
        }
    }

    /// Copies every sprite of `sheet` into the registry as its own texture.
    ///
    /// # Errors
    ///
    /// Fails on the first sprite whose rectangle lies outside the atlas;
    /// sprites registered before that point are kept.
    pub fn load_sprite_sheet(&mut self, sheet: &SpriteSheet) -> Result<(), AssetError> {
        for name in sheet.names() {
            let image = sheet.get(name)?;
            self.add_texture(name, image);
        }
        debug!("Loaded {} sprites from sheet", sheet.len());
        Ok(())
    }

    /// Looks up a texture by name.
    pub fn get_texture(&self, name: &str) -> Result<&Image, AssetError> {
        self.textures
            .get(name)
            .ok_or_else(|| AssetError::TextureNotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
