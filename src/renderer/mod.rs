//! Rendering abstraction layer.
//!
//! *The rest of the program never touches a pixel buffer directly.*
//! A frame is a pure function of the [`Scene`], the player [`Pose`], the
//! [`RenderConfig`] and the [`TextureBank`]; a type implementing
//! [`Renderer`] turns those into pixels.
//!
//! * Walls are drawn first, one ray per column, filling the depth buffer.
//! * Billboards are drawn second and read that depth buffer.
//!   Swapping the two passes is a bug, not an optimisation.

use crate::{
    config::RenderConfig,
    world::{Pose, Scene, TextureBank},
};

pub mod color;
mod frame;
pub mod software;

pub use frame::{DepthBuffer, Frame};
pub use software::Software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure.
/// Software callers typically forward it to their window-manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Draw walls, floor, ceiling and billboards for one pose.
    fn draw_scene(&mut self, scene: &Scene, pose: &Pose, bank: &TextureBank);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Software caller passes `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(
        &mut self,
        width: usize,
        height: usize,
        scene: &Scene,
        pose: &Pose,
        bank: &TextureBank,
        submit: F,
    ) where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        self.draw_scene(scene, pose, bank);
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

/// Render one frame into a freshly allocated [`Frame`].
///
/// Stateless counterpart of [`Software`]; handy for tests and tools that do
/// not care about reusing allocations.
pub fn render_frame(
    scene: &Scene,
    pose: &Pose,
    config: &RenderConfig,
    bank: &TextureBank,
) -> Frame {
    let mut frame = Frame::new(config.screen_width, config.screen_height);
    software::draw_into(&mut frame, scene, pose, config, bank);
    frame
}
