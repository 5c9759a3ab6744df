//! Doom-style fire effect
//!
//! Geometry derives a cell grid from the surface size, the simulation
//! seeds and propagates heat through it, and the canvas rasterizes a
//! published frame through the fixed palette.

pub mod canvas;
pub mod geometry;
pub mod palette;
pub mod simulation;

pub use canvas::{draw_frame, PixelCanvas};
pub use geometry::{GridGeometry, DEFAULT_DENSITY};
pub use palette::{color_for, Rgba, MAX_INTENSITY, N_COLORS};
pub use simulation::{ColumnBound, FireFrame, FireSimulation, WindDirection};
