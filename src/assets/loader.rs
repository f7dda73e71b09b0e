// ──────────────────────────────────────────────────────────────────────────
// assets/loader.rs
//
//  *   PNG files (map, wall, sprite)   ──╮
//                                        │   --->  world::Scene
//  *   TextureBank (mut)                 │          + populated TextureBank
//                                        ╯
// ──────────────────────────────────────────────────────────────────────────

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    renderer::color::rgba,
    world::{GridMap, MapLegend, Scene, Texture, TextureBank, TextureError},
};

/*──────────────────────────── Error type ───────────────────────────*/

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("{0} has no pixels")]
    Empty(PathBuf),
}

/// Paths of the three images a level is made of.
#[derive(Clone, Debug)]
pub struct LevelFiles {
    pub map: PathBuf,
    pub wall: PathBuf,
    pub billboard: PathBuf,
}

/*====================================================================*/
/*                       Public API                                   */
/*====================================================================*/

/// Decode any image the `image` crate understands into an ARGB grid.
pub fn load_texture(path: &Path) -> Result<Texture, LoadError> {
    let img = image::open(path)
        .map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            rgba(r, g, b, a)
        })
        .collect();
    let tex = Texture::new(w as usize, h as usize, pixels)?;
    tracing::info!(path = %path.display(), w, h, "texture loaded");
    Ok(tex)
}

/// Load map + textures, register the textures in `bank` and build the scene.
pub fn load_level(
    files: &LevelFiles,
    legend: &MapLegend,
    bank: &mut TextureBank,
) -> Result<Scene, LoadError> {
    /*----- 1. Textures --------------------------------------------------*/
    let wall_tex = bank.insert(name_of(&files.wall), load_texture(&files.wall)?)?;
    let billboard_tex = bank.insert(name_of(&files.billboard), load_texture(&files.billboard)?)?;

    /*----- 2. Map image → cells + billboards ----------------------------*/
    let image = load_texture(&files.map)?;
    let map = GridMap::from_texture(&image, legend);
    Ok(Scene::new(map, wall_tex, billboard_tex).with_map_image(image))
}

fn name_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_ascii_uppercase())
        .unwrap_or_else(|| path.display().to_string())
}

/*====================================================================*/
/*                               Tests                                */
/*====================================================================*/
