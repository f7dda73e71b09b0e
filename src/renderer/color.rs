//! Channel maths on packed `0xAARRGGBB` pixels.

use crate::renderer::Rgba;

#[inline(always)]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

#[inline(always)]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    rgba(r, g, b, 255)
}

/// `[r, g, b, a]`
#[inline(always)]
pub const fn channels(c: Rgba) -> [u8; 4] {
    [(c >> 16) as u8, (c >> 8) as u8, c as u8, (c >> 24) as u8]
}

#[inline(always)]
fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + t * (b as f32 - a as f32)).clamp(0.0, 255.0) as u8
}

/// Per-channel linear blend from `a` (t = 0) to `b` (t = 1); result is opaque.
#[inline]
pub fn lerp(a: Rgba, b: Rgba, t: f32) -> Rgba {
    let [ar, ag, ab, _] = channels(a);
    let [br, bg, bb, _] = channels(b);
    rgb(lerp_u8(ar, br, t), lerp_u8(ag, bg, t), lerp_u8(ab, bb, t))
}

/// Multiply RGB by `k` (saturating); result is opaque.
#[inline]
pub fn scale(c: Rgba, k: f32) -> Rgba {
    let [r, g, b, _] = channels(c);
    let mul = |v: u8| (v as f32 * k).clamp(0.0, 255.0) as u8;
    rgb(mul(r), mul(g), mul(b))
}

/// Source-over blend of `src` onto `dst` using the source alpha.
#[inline]
pub fn blend(dst: Rgba, src: Rgba) -> Rgba {
    match src >> 24 {
        0 => dst,
        255 => src,
        a => lerp(dst, src, a as f32 / 255.0),
    }
}
