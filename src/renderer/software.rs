//! ---------------------------------------------------------------------------
//! Classic software (CPU) column renderer
//!
//! * Fills a [`Frame`] in **0xAARRGGBB** format.
//! * One ray per screen column finds the nearest wall; its distance lands in
//!   the per-column depth buffer.
//! * Billboards are drawn afterwards, column-tested against that buffer.
//! ---------------------------------------------------------------------------

use crate::{
    config::RenderConfig,
    renderer::Frame,
    world::{Pose, Scene, TextureBank},
};

pub mod columns;
pub mod overlay;
pub mod projection;
pub mod raycast;
mod renderer;
pub mod sprites;

pub use renderer::Software;

/// Full frame: walls → billboards → minimap.
///
/// The order is load-bearing: billboards read the depth buffer the wall
/// pass writes.
pub fn draw_into(
    frame: &mut Frame,
    scene: &Scene,
    pose: &Pose,
    config: &RenderConfig,
    bank: &TextureBank,
) {
    columns::draw_columns(frame, scene, pose, config, bank);
    sprites::draw_billboards(frame, scene, pose, config, bank);
    if config.minimap {
        overlay::draw_minimap(frame, scene, pose, &config.legend());
    }
}
