//! Distance → screen rows.  Shared by walls and billboards so both vanish
//! into the same horizon.

/// Smallest distance fed into the perspective divide.
pub const MIN_DISTANCE: f32 = 0.01;

/// Vertical extent of something `distance` units away.
///
/// Rows `< ceiling` are above it, rows `>= floor` below it.  `ceiling` may be
/// negative and `floor` may exceed the screen height when close up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Band {
    pub ceiling: i32,
    pub floor: i32,
}

impl Band {
    #[inline]
    pub fn height(&self) -> i32 {
        self.floor - self.ceiling
    }

    /// Normalised vertical position of row `y` inside the band.
    #[inline]
    pub fn v(&self, y: i32) -> f32 {
        (y - self.ceiling) as f32 / self.height().max(1) as f32
    }
}

/// `ceiling = H/2 − H/d`, `floor = H − ceiling`, truncated to whole rows.
#[inline]
pub fn project(distance: f32, screen_h: usize) -> Band {
    let h = screen_h as f32;
    let d = distance.max(MIN_DISTANCE);
    let ceiling = (h * 0.5 - h / d) as i32;
    Band {
        ceiling,
        floor: screen_h as i32 - ceiling,
    }
}
