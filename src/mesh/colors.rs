//! Color mapping for polygon textures

use std::collections::HashMap;

use crate::config::TextureId;

/// RGBA color type
pub type TerrainColor = [f32; 4];

const OCEAN: TerrainColor = [0.1, 0.3, 0.7, 1.0];
const LOWLAND: TerrainColor = [0.2, 0.6, 0.2, 1.0];
const HIGHLAND: TerrainColor = [0.95, 0.95, 1.0, 1.0];

/// Trait for mapping polygon textures to colors
pub trait ColorMapper<T> {
    /// Map a texture to an RGBA color
    fn map_color(&self, texture: &T) -> TerrainColor;
}

/// Gradient color mapper for the default texture layout
///
/// Ocean is blue; texture ids `0..=max_texture` blend from green to snow.
/// Ids above `max_texture` get the snow color.
#[derive(Debug, Clone, Copy)]
pub struct BasicColorMapper {
    pub max_texture: TextureId,
}

impl Default for BasicColorMapper {
    fn default() -> Self {
        // Default altitude textures 0..=5 plus pole textures 6 and 7
        Self { max_texture: 7 }
    }
}

impl ColorMapper<Option<TextureId>> for BasicColorMapper {
    fn map_color(&self, texture: &Option<TextureId>) -> TerrainColor {
        let Some(texture) = *texture else {
            return OCEAN;
        };
        let t = if self.max_texture > 0 {
            (texture as f32 / self.max_texture as f32).clamp(0.0, 1.0)
        } else {
            1.0
        };

        let mut color = [0.0; 4];
        for (channel, out) in color.iter_mut().enumerate() {
            *out = LOWLAND[channel] + (HIGHLAND[channel] - LOWLAND[channel]) * t;
        }
        color
    }
}

/// Explicit texture-to-color table
#[derive(Debug, Clone)]
pub struct PaletteColorMapper {
    pub ocean: TerrainColor,
    pub colors: HashMap<TextureId, TerrainColor>,
    /// Used for texture ids missing from `colors`
    pub fallback: TerrainColor,
}

impl Default for PaletteColorMapper {
    fn default() -> Self {
        Self {
            ocean: OCEAN,
            colors: HashMap::new(),
            fallback: [1.0, 0.0, 1.0, 1.0],
        }
    }
}

impl PaletteColorMapper {
    /// Assign a color to a texture id
    pub fn with_color(mut self, texture: TextureId, color: TerrainColor) -> Self {
        self.colors.insert(texture, color);
        self
    }
}

impl ColorMapper<Option<TextureId>> for PaletteColorMapper {
    fn map_color(&self, texture: &Option<TextureId>) -> TerrainColor {
        match texture {
            None => self.ocean,
            Some(id) => self.colors.get(id).copied().unwrap_or(self.fallback),
        }
    }
}
