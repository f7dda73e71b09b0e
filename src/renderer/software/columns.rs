//! Wall pass: ceiling, textured wall band and shaded floor per column.

use crate::{
    config::RenderConfig,
    renderer::{
        Frame, Rgba, color,
        software::{
            projection::{self, Band},
            raycast::{self, RayHit},
        },
    },
    world::{Pose, Scene, Texture, TextureBank},
};

/// Cast every column, fill the depth buffer and paint the column.
pub fn draw_columns(
    frame: &mut Frame,
    scene: &Scene,
    pose: &Pose,
    cfg: &RenderConfig,
    bank: &TextureBank,
) {
    let wall = bank.texture_or_missing(scene.wall_tex);
    let columns = frame.width;
    for x in 0..columns {
        let hit = raycast::cast(&scene.map, pose, cfg, x, columns);
        frame.depth.set(x, hit.distance());
        draw_column(frame, x, &hit, cfg, wall);
    }
}

/// Paint one screen column from its ray result.
pub fn draw_column(frame: &mut Frame, x: usize, hit: &RayHit, cfg: &RenderConfig, wall: &Texture) {
    let band = projection::project(hit.distance(), frame.height);
    let ceiling = cfg.ceiling_colour();
    let floor = cfg.floor_colour();
    let half_h = frame.height as f32 * 0.5;

    for y in 0..frame.height as i32 {
        let c = if y < band.ceiling {
            ceiling
        } else if y >= band.floor {
            // darker at the horizon, full colour at the bottom edge
            color::scale(floor, (y as f32 - half_h) / half_h)
        } else {
            wall_texel(hit, &band, y, cfg, wall)
        };
        frame.put(x as i32, y, c);
    }
}

#[inline]
fn wall_texel(hit: &RayHit, band: &Band, y: i32, cfg: &RenderConfig, wall: &Texture) -> Rgba {
    match *hit {
        RayHit::Miss { .. } => cfg.ceiling_colour(),
        RayHit::Wall { distance, u, .. } => {
            let fog = (distance / cfg.draw_distance).clamp(0.0, 1.0);
            color::lerp(wall.sample(u, band.v(y)), cfg.ceiling_colour(), fog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{color::rgb, software::raycast::Face};
    use glam::IVec2;

    const RED: Rgba = 0xFF_FF0000;

    fn frame() -> Frame {
        Frame::new(4, 80)
    }

    #[test]
    fn miss_paints_fog_in_wall_band() {
        let cfg = RenderConfig::default();
        let mut f = frame();
        let hit = RayHit::Miss { distance: 16.0 };
        draw_column(&mut f, 1, &hit, &cfg, &Texture::solid(2, 2, RED));
        let band = projection::project(16.0, 80);
        for y in 0..band.floor as usize {
            assert_eq!(f.get(1, y), Some(cfg.ceiling_colour()), "row {y}");
        }
        assert!(f.column(1).all(|c| c != RED));
    }

    #[test]
    fn near_wall_is_unfogged_texture() {
        let cfg = RenderConfig::default();
        let mut f = frame();
        let hit = RayHit::Wall {
            distance: 0.0,
            u: 0.5,
            face: Face::South,
            cell: IVec2::ZERO,
        };
        draw_column(&mut f, 0, &hit, &cfg, &Texture::solid(2, 2, RED));
        // guarded projection covers the whole column
        assert!(f.column(0).all(|c| c == rgb(255, 0, 0)));
    }

    #[test]
    fn fog_is_linear_in_distance() {
        let cfg = RenderConfig::default();
        let mut f = frame();
        let hit = RayHit::Wall {
            distance: 8.0,
            u: 0.0,
            face: Face::East,
            cell: IVec2::ZERO,
        };
        draw_column(&mut f, 2, &hit, &cfg, &Texture::solid(2, 2, rgb(1, 1, 1)));
        let expected = color::lerp(rgb(1, 1, 1), cfg.ceiling_colour(), 0.5);
        assert_eq!(f.get(2, 40), Some(expected));
    }

    #[test]
    fn floor_brightens_toward_bottom() {
        let cfg = RenderConfig::default();
        let mut f = frame();
        draw_column(&mut f, 0, &RayHit::Miss { distance: 16.0 }, &cfg, &Texture::default());
        assert_eq!(f.get(0, 79), Some(color::scale(cfg.floor_colour(), 39.0 / 40.0)));
        let [r_low, ..] = color::channels(f.get(0, 79).unwrap());
        let [r_high, ..] = color::channels(f.get(0, 46).unwrap());
        assert!(r_low > r_high);
    }
}
