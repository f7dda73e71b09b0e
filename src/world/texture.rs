// Format-agnostic repository of pixel grids decoded by the asset loader.
// The renderer and the scene interact through `TextureId` only.

use std::collections::HashMap;

use crate::renderer::Rgba;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: 32-bit **ARGB** (0xAARRGGBB) in row-major order.
///
/// Used for wall textures, billboard sprites and the source image of the
/// occupancy map alike.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

/// Convenience checkerboard 8×8 (magenta/black), fully opaque.
impl Default for Texture {
    fn default() -> Self {
        const LIGHT: Rgba = 0xFF_FF00FF;
        const DARK: Rgba = 0xFF_000000;
        let mut pix = vec![0; 8 * 8];
        for y in 0..8 {
            for x in 0..8 {
                pix[y * 8 + x] = if (x ^ y) & 1 == 0 { LIGHT } else { DARK };
            }
        }
        Texture {
            w: 8,
            h: 8,
            pixels: pix,
        }
    }
}

impl Texture {
    /// Wrap a row-major pixel vector, checking that it is `w × h` and non-empty.
    pub fn new(w: usize, h: usize, pixels: Vec<Rgba>) -> Result<Self, TextureError> {
        if w == 0 || h == 0 || pixels.len() != w * h {
            return Err(TextureError::BadDimensions {
                w,
                h,
                len: pixels.len(),
            });
        }
        Ok(Self { w, h, pixels })
    }

    /// Single-colour texture, handy for tests and placeholder art.
    ///
    /// Zero dimensions are raised to 1 so the result is always sampleable.
    pub fn solid(w: usize, h: usize, colour: Rgba) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        Self {
            w,
            h,
            pixels: vec![colour; w * h],
        }
    }

    /// Texel at integer (column, row). Caller guarantees bounds.
    #[inline]
    pub fn texel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * self.w + x]
    }

    /// Sample with normalised coordinates in `[0, 1)`.
    ///
    /// Coordinates are scaled by the texture size, floored, and clamped to
    /// the last texel so `1.0` (or slight float overshoot) stays in range.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Rgba {
        let x = ((u * self.w as f32).floor().max(0.0) as usize).min(self.w - 1);
        let y = ((v * self.h as f32).floor().max(0.0) as usize).min(self.h - 1);
        self.texel(x, y)
    }

    /// Height over width – the native aspect ratio billboards preserve.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.h as f32 / self.w as f32
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID is outside `0 .. bank.len()`.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// Pixel vector does not describe a non-empty `w × h` grid.
    #[error("bad texture dimensions {w}x{h} for {len} pixels")]
    BadDimensions { w: usize, h: usize, len: usize },
}

/// A format-agnostic cache of textures.
///
/// * Does **not** know about PNG or windows; that is the loader's job.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the “missing” checkerboard.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl Default for TextureBank {
    fn default() -> Self {
        Self::default_with_checker()
    }
}

impl TextureBank {
    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    /// Number of textures stored (including the “missing” one).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    } // only checker

    /// Obtain the id for a *loaded* texture by name.
    pub fn id(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Fallback-safe borrow: unknown ids resolve to the checkerboard.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.data
            .get(id as usize)
            .unwrap_or(&self.data[NO_TEXTURE as usize])
    }

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
