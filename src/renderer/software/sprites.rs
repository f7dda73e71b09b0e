use crate::{
    config::RenderConfig,
    renderer::{
        Frame,
        software::projection::{self, Band},
    },
    world::{Billboard, Pose, Scene, Texture, TextureBank},
};

/// Billboards closer than this are culled: their size would blow up.
pub const MIN_BILLBOARD_DISTANCE: f32 = 0.2;

/// Screen-space placement of one visible billboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisSprite {
    pub distance: f32,
    /// Signed angle off the view axis, radians (positive = right).
    pub angle: f32,
    pub band: Band,
    pub width: f32,
    pub height: f32,
    /// Centre column (fractional).
    pub mid: f32,
}

impl VisSprite {
    /// Left edge column (fractional).
    #[inline]
    pub fn left(&self) -> f32 {
        self.mid - self.width * 0.5
    }
}

/// Inside the horizontal frustum and within the usable distance range.
#[inline]
pub fn is_visible(angle: f32, distance: f32, cfg: &RenderConfig) -> bool {
    angle.abs() < cfg.fov * 0.5
        && distance > MIN_BILLBOARD_DISTANCE
        && distance < cfg.draw_distance
}

/// Cull and project one billboard; `None` when it cannot be seen.
pub fn project_billboard(
    b: &Billboard,
    pose: &Pose,
    cfg: &RenderConfig,
    tex: &Texture,
    screen_w: usize,
    screen_h: usize,
) -> Option<VisSprite> {
    let distance = (b.pos - pose.pos).length();
    let angle = pose.bearing_to(b.pos);
    if !is_visible(angle, distance, cfg) {
        return None;
    }

    // same vertical extent a wall at this distance would have
    let band = projection::project(distance, screen_h);
    let height = band.height() as f32;
    let width = height / tex.aspect();
    let mid = (0.5 * (angle / (cfg.fov * 0.5)) + 0.5) * screen_w as f32;

    Some(VisSprite {
        distance,
        angle,
        band,
        width,
        height,
        mid,
    })
}

/// Billboard pass.  Must run after the wall pass filled `frame.depth`.
pub fn draw_billboards(
    frame: &mut Frame,
    scene: &Scene,
    pose: &Pose,
    cfg: &RenderConfig,
    bank: &TextureBank,
) {
    for b in &scene.billboards {
        let tex = bank.texture_or_missing(b.tex);
        if let Some(spr) = project_billboard(b, pose, cfg, tex, frame.width, frame.height) {
            draw_sprite(frame, &spr, tex);
        }
    }
}

/// Alpha-blend `tex` into the rectangle described by `spr`, column by column.
///
/// A column is skipped entirely when the wall already drawn there is nearer
/// than the billboard (coarse per-column occlusion).
pub fn draw_sprite(frame: &mut Frame, spr: &VisSprite, tex: &Texture) {
    let cols = spr.width.ceil() as i32;
    let rows = spr.height.ceil() as i32;
    // only the rows that land on screen
    let by0 = (-spr.band.ceiling).max(0);
    let by1 = rows.min(frame.height as i32 - spr.band.ceiling);
    let left = spr.left();

    for bx in 0..cols {
        let column = (left + bx as f32).floor() as i32;
        if column < 0 || column >= frame.width as i32 {
            continue;
        }
        match frame.depth.get(column as usize) {
            Some(wall) if spr.distance <= wall => {}
            _ => continue,
        }

        let u = bx as f32 / spr.width;
        for by in by0..by1 {
            let v = by as f32 / spr.height;
            frame.blend(column, spr.band.ceiling + by, tex.sample(u, v));
        }
    }
}
