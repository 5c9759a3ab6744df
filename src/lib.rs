//! Terminal doom-style fire that ignites and dies down on a timer

pub mod config;
pub mod fire;
pub mod scene;
pub mod settings;
pub mod terminal;
