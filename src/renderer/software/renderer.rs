use crate::{
    config::RenderConfig,
    renderer::{DepthBuffer, Frame, Renderer, Rgba, software::draw_into},
    world::{Pose, Scene, TextureBank},
};

/// Column raycaster that keeps its frame and depth allocations alive
/// between frames.
pub struct Software {
    frame: Frame,
    config: RenderConfig,
}

impl Default for Software {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Software {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            frame: Frame::new(config.screen_width, config.screen_height),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Last rendered frame.
    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Depth buffer of the last frame, for inspection.
    #[inline]
    pub fn depth(&self) -> &DepthBuffer {
        &self.frame.depth
    }
}

/*──────────────────────── Renderer trait impl ────────────────────────*/
impl Renderer for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        // (re)allocate if resolution changed
        if w != self.frame.width || h != self.frame.height {
            tracing::debug!(width = w, height = h, "resizing frame");
            self.frame.resize(w, h);
        }
    }

    fn draw_scene(&mut self, scene: &Scene, pose: &Pose, bank: &TextureBank) {
        draw_into(&mut self.frame, scene, pose, &self.config, bank);
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.frame.pixels, self.frame.width, self.frame.height);
    }
}

/*──────────────────────────────── Tests ───────────────────────────────*/
