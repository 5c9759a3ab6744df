//! Rasterizing a fire frame onto a pixel surface

use super::palette::{color_for, Rgba};
use super::simulation::FireFrame;

/// Pixel surface the fire is drawn onto. `None` pixels show the background.
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Option<Rgba>>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width * height],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(None);
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            None
        }
    }

    /// Fill `[x0, x1) x [y0, y1)`, clipped to the surface
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, color: Option<Rgba>) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = y * self.width;
            for px in &mut self.pixels[row + x0.min(x1)..row + x1] {
                *px = color;
            }
        }
    }
}

/// Draw every row except the bottom ignition row. Fully transparent
/// ramp entries are left as background.
pub fn draw_frame(frame: &FireFrame, canvas: &mut PixelCanvas) {
    let g = frame.geometry();
    let cell = g.cell_size_px;

    canvas.clear();
    for column in 0..g.width_cells {
        let x = column * cell;
        let w = (column + 1) * cell - column * cell;
        for row in 0..g.height_cells.saturating_sub(1) {
            let y = row * cell;
            let h = (row + 1) * cell - row * cell;
            let color = color_for(frame.intensity(column, row));
            let fill = if color.is_transparent() { None } else { Some(color) };
            canvas.fill_rect(x, y, x + w, y + h, fill);
        }
    }
}
