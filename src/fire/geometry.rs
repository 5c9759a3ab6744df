//! Grid sizing from surface pixel dimensions

/// Cells packed into the shorter dimension of the surface
pub const DEFAULT_DENSITY: usize = 50;

/// Cell layout derived from a surface size
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub width_px: usize,
    pub height_px: usize,
    pub cell_size_px: usize,
    pub width_cells: usize,
    pub height_cells: usize,
    pub taller_than_wide: bool,
}

impl GridGeometry {
    /// Derive the grid for a surface. Returns `None` for a zero-sized
    /// surface or a zero density so callers skip the frame.
    pub fn compute(width_px: usize, height_px: usize, density: usize) -> Option<Self> {
        if width_px == 0 || height_px == 0 || density == 0 {
            return None;
        }

        let taller_than_wide = width_px < height_px;
        let shortest = if taller_than_wide { width_px } else { height_px };
        let cell_size_px = shortest.div_ceil(density);

        let width_cells = if taller_than_wide { density } else { width_px.div_ceil(cell_size_px) };
        let height_cells = if !taller_than_wide { density } else { height_px.div_ceil(cell_size_px) };

        Some(Self {
            width_px,
            height_px,
            cell_size_px,
            width_cells,
            height_cells,
            taller_than_wide,
        })
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width_cells * self.height_cells
    }

    /// Row-major index, row 0 at the top
    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        column + self.width_cells * row
    }

    /// First index of the bottom (ignition) row
    pub fn bottom_row_start(&self) -> usize {
        (self.height_cells - 1) * self.width_cells
    }

    /// Maximum random decay per propagation step
    pub fn decay_range(&self) -> usize {
        if self.taller_than_wide { 2 } else { 3 }
    }

    /// True when both surfaces map to the same cell grid
    pub fn same_grid(&self, other: &GridGeometry) -> bool {
        self.width_cells == other.width_cells
            && self.height_cells == other.height_cells
            && self.cell_size_px == other.cell_size_px
    }
}
