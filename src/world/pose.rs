use std::f32::consts::{PI, TAU};

use glam::{Vec2, vec2};

/// Player view-point on the map.
///
/// * `pos` is in map-cell units (cell `(x, y)` spans `[x, x+1) × [y, y+1)`).
/// * `rotation` is unconstrained; 0 looks toward decreasing Y and positive
///   values turn toward +X (clockwise on the authored image).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec2,
    pub rotation: f32,
}

impl Pose {
    pub fn new(pos: Vec2, rotation: f32) -> Self {
        Self { pos, rotation }
    }

    /// Unit vector the player looks along.
    #[inline(always)]
    pub fn forward(&self) -> Vec2 {
        direction(self.rotation)
    }

    /// Signed angle from the view direction to `target`, wrapped into
    /// (−π, π].  Positive means right of centre.
    #[inline]
    pub fn bearing_to(&self, target: Vec2) -> f32 {
        wrap_angle(heading(target - self.pos) - self.rotation)
    }
}

/// Unit vector for heading `angle` in the pose convention.
#[inline(always)]
pub fn direction(angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    vec2(s, -c)
}

/// Inverse of [`direction`]: the heading that points along `v`.
#[inline(always)]
pub fn heading(v: Vec2) -> f32 {
    v.x.atan2(-v.y)
}

/// Wrap any angle into (−π, π].
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = (a + PI).rem_euclid(TAU) - PI;
    if w <= -PI { w + TAU } else { w }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
