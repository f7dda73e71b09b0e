//! One ray per screen column.
//!
//! Two strategies share one contract (distance + texture U):
//! * [`MarchMode::Stepped`] samples the ray every `step_size` units and stops
//!   at the first sample inside a wall, overshooting by less than one step.
//! * [`MarchMode::Grid`] walks cell boundaries exactly (DDA) and reports the
//!   distance at which the ray enters the wall cell.

use glam::{IVec2, Vec2};

use crate::{
    config::{MarchMode, RenderConfig},
    world::{Cell, GridMap, Pose, direction},
};

/// Side of a wall cell a ray struck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayHit {
    Wall {
        distance: f32,
        u: f32,
        face: Face,
        cell: IVec2,
    },
    /// Nothing within draw distance, or the ray left the map.
    Miss { distance: f32 },
}

impl RayHit {
    #[inline]
    pub fn distance(&self) -> f32 {
        match *self {
            RayHit::Wall { distance, .. } | RayHit::Miss { distance } => distance,
        }
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        matches!(self, RayHit::Miss { .. })
    }
}

/// Columns sweep the field of view linearly; column 0 is the left edge.
#[inline]
pub fn ray_angle(rotation: f32, fov: f32, column: usize, columns: usize) -> f32 {
    rotation - fov * 0.5 + (column as f32 / columns as f32) * fov
}

/// Cast the ray for screen `column` out of `columns`.
pub fn cast(
    map: &GridMap,
    pose: &Pose,
    cfg: &RenderConfig,
    column: usize,
    columns: usize,
) -> RayHit {
    let angle = ray_angle(pose.rotation, cfg.fov, column, columns);
    cast_ray(map, pose.pos, angle, cfg)
}

/// Cast a single ray from `origin` along heading `angle`.
pub fn cast_ray(map: &GridMap, origin: Vec2, angle: f32, cfg: &RenderConfig) -> RayHit {
    let dir = direction(angle);
    match cfg.march {
        MarchMode::Stepped => march(map, origin, dir, cfg.step_size, cfg.draw_distance),
        MarchMode::Grid => traverse(map, origin, dir, cfg.draw_distance),
    }
}

fn march(map: &GridMap, origin: Vec2, dir: Vec2, step: f32, draw_distance: f32) -> RayHit {
    let miss = RayHit::Miss {
        distance: draw_distance,
    };
    if step.is_nan() || step <= 0.0 {
        return miss;
    }
    // i·step rather than a running sum: no drift, bit-identical reruns.
    let max_steps = (draw_distance / step).ceil().min(u32::MAX as f32) as u32;
    for i in 1..=max_steps {
        let distance = i as f32 * step;
        if distance >= draw_distance {
            break;
        }
        let p = origin + dir * distance;
        let cell = p.floor().as_ivec2();
        match map.get(cell.x, cell.y) {
            None => break,
            Some(Cell::Wall) => return wall_hit(p, cell, distance),
            Some(_) => {}
        }
    }
    miss
}

fn traverse(map: &GridMap, origin: Vec2, dir: Vec2, draw_distance: f32) -> RayHit {
    let miss = RayHit::Miss {
        distance: draw_distance,
    };
    let mut cell = origin.floor().as_ivec2();
    match map.get(cell.x, cell.y) {
        None => return miss,
        Some(Cell::Wall) => return wall_hit(origin, cell, 0.0),
        Some(_) => {}
    }

    // ray length between successive x / y grid lines
    let delta = Vec2::new(inv_abs(dir.x), inv_abs(dir.y));
    let step = IVec2::new(
        if dir.x < 0.0 { -1 } else { 1 },
        if dir.y < 0.0 { -1 } else { 1 },
    );
    // ray length to the first x / y grid line
    let mut side = Vec2::new(
        first_crossing(origin.x, cell.x, dir.x, delta.x),
        first_crossing(origin.y, cell.y, dir.y, delta.y),
    );

    loop {
        let distance = if side.x < side.y {
            cell.x += step.x;
            let d = side.x;
            side.x += delta.x;
            d
        } else {
            cell.y += step.y;
            let d = side.y;
            side.y += delta.y;
            d
        };

        if distance >= draw_distance {
            return miss;
        }
        match map.get(cell.x, cell.y) {
            None => return miss,
            Some(Cell::Wall) => return wall_hit(origin + dir * distance, cell, distance),
            Some(_) => {}
        }
    }
}

#[inline]
fn inv_abs(v: f32) -> f32 {
    if v == 0.0 { f32::INFINITY } else { v.abs().recip() }
}

#[inline]
fn first_crossing(o: f32, cell: i32, d: f32, delta: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else if d < 0.0 {
        (o - cell as f32) * delta
    } else {
        (cell as f32 + 1.0 - o) * delta
    }
}

fn wall_hit(p: Vec2, cell: IVec2, distance: f32) -> RayHit {
    let (face, u) = face_and_u(p, cell);
    RayHit::Wall {
        distance,
        u,
        face,
        cell,
    }
}

/// Which side of `cell` the point `p` lies on, and the texture U there.
///
/// The direction from the cell centre to `p` falls in one of four 90°
/// sectors bounded by the cell diagonals (±45°, ±135°).  The sector picks
/// the face and, with it, which coordinate runs *along* that face.
///
/// Sectors are lower-inclusive in angle, so exact diagonals resolve as
/// −45° → East, 45° → South, −135° → North, 135° → West.  Comparing the
/// offset components directly keeps those ties exact, which `atan2` does not.
pub fn face_and_u(p: Vec2, cell: IVec2) -> (Face, f32) {
    let base = cell.as_vec2();
    let o = p - (base + Vec2::splat(0.5));
    let frac = p - base;

    let face = if o.x > 0.0 && -o.x <= o.y && o.y < o.x {
        Face::East
    } else if o.y > 0.0 && -o.y < o.x && o.x <= o.y {
        Face::South
    } else if o.y < 0.0 && o.y <= o.x && o.x < -o.y {
        Face::North
    } else {
        Face::West
    };

    let u = match face {
        Face::East | Face::West => frac.y,
        Face::North | Face::South => frac.x,
    };
    (face, u.clamp(0.0, 1.0))
}
