use crate::renderer::{Rgba, color};

/// Nearest wall distance per screen column.
///
/// Written once per column by the wall pass, read by the billboard pass of
/// the same frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepthBuffer(Vec<f32>);

impl DepthBuffer {
    pub fn new(columns: usize) -> Self {
        Self(vec![f32::INFINITY; columns])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn set(&mut self, column: usize, distance: f32) {
        self.0[column] = distance;
    }

    /// Distance for `column`; `None` off-screen.
    #[inline]
    pub fn get(&self, column: usize) -> Option<f32> {
        self.0.get(column).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub(crate) fn resize(&mut self, columns: usize) {
        self.0.resize(columns, f32::INFINITY);
    }
}

/// Finished (or in-progress) picture plus the depth buffer that built it.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgba>,
    pub depth: DepthBuffer,
}

impl Frame {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            depth: DepthBuffer::new(width),
        }
    }

    /// Change resolution; contents are undefined until the next full pass.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, 0);
        self.depth.resize(width);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Bounds-checked write; off-screen coordinates are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, c: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.pixels[y as usize * self.width + x as usize] = c;
        }
    }

    /// Bounds-checked source-over blend.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, c: Rgba) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            let idx = y as usize * self.width + x as usize;
            self.pixels[idx] = color::blend(self.pixels[idx], c);
        }
    }

    /// Pixels of one screen column, top to bottom.
    pub fn column(&self, x: usize) -> impl Iterator<Item = Rgba> + '_ {
        self.pixels.iter().skip(x).step_by(self.width.max(1)).copied()
    }
}
