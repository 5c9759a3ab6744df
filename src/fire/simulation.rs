//! Doom-style fire propagation over a cell grid

use super::geometry::GridGeometry;
use super::palette::MAX_INTENSITY;
use rand::Rng;
use std::sync::Arc;

/// Horizontal drift bias applied while heat rises
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindDirection {
    #[default]
    Right,
    Left,
    None,
}

impl WindDirection {
    /// Parse a user-supplied name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "right" | "r" => Some(Self::Right),
            "left" | "l" => Some(Self::Left),
            "none" | "off" | "calm" => Some(Self::None),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::None => "none",
        }
    }
}

/// Upper bound of the column sweep in `step`.
///
/// `Inclusive` visits one column past the grid edge, which spills into the
/// first cell of the next row. It is the long-standing behavior and the
/// default; `Exclusive` stays within the grid for comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnBound {
    #[default]
    Inclusive,
    Exclusive,
}

/// Lifecycle of the grid since the last allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Allocated,
    Seeded,
    Steady,
}

/// Read-only view of the grid published after each update
#[derive(Clone, Debug)]
pub struct FireFrame {
    geometry: GridGeometry,
    cells: Arc<Vec<u8>>,
}

impl FireFrame {
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn intensity(&self, column: usize, row: usize) -> u8 {
        self.cells[self.geometry.index(column, row)]
    }
}

/// Owner of the intensity grid
pub struct FireSimulation {
    geometry: GridGeometry,
    cells: Arc<Vec<u8>>,
    last_seed: Option<bool>,
    phase: Phase,
}

impl FireSimulation {
    pub fn new(geometry: GridGeometry) -> Self {
        Self {
            geometry,
            cells: Arc::new(vec![0; geometry.len()]),
            last_seed: None,
            phase: Phase::Allocated,
        }
    }

    /// Replace the grid with a cold one sized for `geometry`.
    /// Previous contents are discarded, never resized.
    pub fn allocate(&mut self, geometry: GridGeometry) {
        *self = Self::new(geometry);
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ignite value the bottom row was last seeded with
    pub fn last_seed(&self) -> Option<bool> {
        self.last_seed
    }

    /// Publish the current grid. Later updates copy before writing, so a
    /// held frame never changes underneath its reader.
    pub fn snapshot(&self) -> FireFrame {
        FireFrame {
            geometry: self.geometry,
            cells: Arc::clone(&self.cells),
        }
    }

    /// Set the bottom row hot (`ignite`) or cold. This is the only heat source.
    pub fn seed_bottom_row(&mut self, ignite: bool) {
        let value = if ignite { MAX_INTENSITY } else { 0 };
        let start = self.geometry.bottom_row_start();
        Arc::make_mut(&mut self.cells)[start..].fill(value);
        self.last_seed = Some(ignite);
        self.phase = Phase::Seeded;
    }

    /// Seed only if the bottom row doesn't already reflect `ignite`.
    /// Returns true when the row was rewritten.
    pub fn sync_ignite(&mut self, ignite: bool) -> bool {
        if self.last_seed == Some(ignite) {
            return false;
        }
        self.seed_bottom_row(ignite);
        true
    }

    /// Advance one tick: every visited cell takes the intensity of the cell
    /// below it from the previous tick, minus a random decay, displaced
    /// sideways by the same amount according to `wind`.
    pub fn step<R: Rng + ?Sized>(&mut self, wind: WindDirection, bound: ColumnBound, rng: &mut R) {
        let geometry = self.geometry;
        let len = geometry.len();
        let decay_range = geometry.decay_range() as f64;

        let prev = Arc::clone(&self.cells);
        let next = Arc::make_mut(&mut self.cells);

        for (current, below) in sweep(&geometry, bound) {
            let decay = (rng.gen::<f64>() * decay_range) as usize;
            let intensity = prev[below].saturating_sub(decay as u8);

            let target = match wind {
                WindDirection::Right => current.checked_sub(decay).unwrap_or(current),
                WindDirection::Left => current + decay,
                WindDirection::None => current,
            };
            // Leftward drift off a one-column grid can pass the last cell
            next[if target < len { target } else { current }] = intensity;
        }

        if self.phase == Phase::Seeded {
            self.phase = Phase::Steady;
        }
    }
}

/// Visit order of `step` as `(current, below)` index pairs: column-major,
/// rows `1..=height-2`. The sweep ends for the whole tick at the first
/// pair whose `below` falls outside the grid.
pub fn sweep(geometry: &GridGeometry, bound: ColumnBound) -> impl Iterator<Item = (usize, usize)> {
    let width = geometry.width_cells;
    let len = geometry.len();
    let last_row = geometry.height_cells.saturating_sub(1);
    let columns = match bound {
        ColumnBound::Inclusive => width + 1,
        ColumnBound::Exclusive => width,
    };

    (0..columns)
        .flat_map(move |column| (1..last_row).map(move |row| column + width * row))
        .map(move |current| (current, current + width))
        .take_while(move |&(_, below)| below < len)
}
