use glam::{Vec2, vec2};

use crate::world::{
    grid::GridMap,
    texture::{Texture, TextureBank, TextureId},
};

/// Screen-facing sprite anchored at a fixed map position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub pos: Vec2,
    pub tex: TextureId,
}

/// Everything the renderer needs that does not change between frames.
#[derive(Clone, Debug)]
pub struct Scene {
    pub map: GridMap,
    pub billboards: Vec<Billboard>,
    pub wall_tex: TextureId,
    /// Authored image the map was classified from, shown by the minimap.
    pub map_image: Option<Texture>,
}

impl Scene {
    /// Build the scene and spawn one billboard per Decoration cell, placed at
    /// the cell centre and sharing `billboard_tex`.
    pub fn new(map: GridMap, wall_tex: TextureId, billboard_tex: TextureId) -> Self {
        let billboards: Vec<Billboard> = map
            .decorations()
            .map(|(x, y)| Billboard {
                pos: vec2(x as f32 + 0.5, y as f32 + 0.5),
                tex: billboard_tex,
            })
            .collect();

        tracing::info!(
            width = map.width(),
            height = map.height(),
            billboards = billboards.len(),
            "scene built"
        );

        Self {
            map,
            billboards,
            wall_tex,
            map_image: None,
        }
    }

    /// Keep the source image so the minimap can show it verbatim.
    pub fn with_map_image(mut self, image: Texture) -> Self {
        self.map_image = Some(image);
        self
    }

    /// Warn once about ids the bank cannot resolve; they render as the
    /// checkerboard.
    pub fn check_textures(&self, bank: &TextureBank) {
        if bank.texture(self.wall_tex).is_err() {
            tracing::warn!(id = self.wall_tex, "wall texture missing, using checker");
        }
        if let Some(b) = self.billboards.iter().find(|b| bank.texture(b.tex).is_err()) {
            tracing::warn!(id = b.tex, "billboard texture missing, using checker");
        }
    }
}
