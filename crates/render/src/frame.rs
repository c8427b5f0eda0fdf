use image::{Rgb, RgbImage};
use std::path::Path;

use crate::RenderError;

/// Side length of a rendered frame in pixels.
pub const FRAME_SIZE: usize = 17;

/// Pixel values used by the maze painter.
pub mod value {
    pub const FLOOR: f32 = 0.0;
    pub const BORDER: f32 = 0.5;
    pub const WALL: f32 = -1.0;
    pub const PRIZE: f32 = 1.0;
    pub const MONSTER: f32 = -2.0;
    pub const AGENT: f32 = 2.0;
}

/// Row-major 2D grid of pixel values.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Frame {
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: f32) -> Self {
        Self { rows, cols, data: vec![fill; rows * cols] }
    }

    /// `(rows, columns)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    pub fn fill_row(&mut self, row: usize, cols: std::ops::Range<usize>, value: f32) {
        for c in cols {
            self.set(row, c, value);
        }
    }

    pub fn fill_col(&mut self, col: usize, rows: std::ops::Range<usize>, value: f32) {
        for r in rows {
            self.set(r, col, value);
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Nested rows, the layout callers expect from an `rgb_array` frame.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.data.chunks(self.cols).map(<[f32]>::to_vec).collect()
    }

    /// One character per pixel, one line per row.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in self.data.chunks(self.cols) {
            out.extend(row.iter().map(|&v| glyph(v)));
            out.push('\n');
        }
        out
    }

    /// Colour image with each pixel blown up to a `scale`×`scale` square.
    #[must_use]
    pub fn to_rgb_image(&self, scale: u32) -> RgbImage {
        let scale = scale.max(1);
        // frames are tiny
        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (self.cols as u32 * scale, self.rows as u32 * scale);
        RgbImage::from_fn(w, h, |x, y| {
            colour(self.get((y / scale) as usize, (x / scale) as usize))
        })
    }

    /// Writes the frame as a PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Image`] if the file cannot be encoded or written.
    pub fn save_png(&self, path: impl AsRef<Path>, scale: u32) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.to_rgb_image(scale).save(path)?;
        tracing::debug!("Wrote {}x{} frame to {:?}", self.rows, self.cols, path);
        Ok(())
    }
}

#[allow(clippy::float_cmp)]
fn glyph(v: f32) -> char {
    if v == value::WALL {
        '#'
    } else if v == value::BORDER {
        '+'
    } else if v == value::PRIZE {
        '$'
    } else if v == value::MONSTER {
        'M'
    } else if v == value::AGENT {
        'R'
    } else {
        '.'
    }
}

#[allow(clippy::float_cmp)]
fn colour(v: f32) -> Rgb<u8> {
    if v == value::WALL {
        Rgb([20, 20, 20])
    } else if v == value::BORDER {
        Rgb([128, 128, 128])
    } else if v == value::PRIZE {
        Rgb([240, 190, 20])
    } else if v == value::MONSTER {
        Rgb([200, 40, 40])
    } else if v == value::AGENT {
        Rgb([40, 90, 220])
    } else {
        Rgb([235, 235, 235])
    }
}
