use crate::fire::{ColumnBound, WindDirection, DEFAULT_DENSITY};
use crate::settings::FireSettings;
use clap::Args;
use std::time::Duration;

/// Default time between simulation ticks
pub const DEFAULT_TICK_MS: u64 = 100;
/// Default time between ignite/extinguish flips
pub const DEFAULT_TOGGLE_MS: u64 = 5000;

/// Configuration for the fire scene
#[derive(Clone, Debug)]
pub struct FireConfig {
    pub density: usize,         // Cells across the shorter surface dimension
    pub wind: WindDirection,
    pub tick_interval: Duration,
    pub toggle_interval: Duration,
    pub toggle: bool,           // false keeps the fire lit
    pub column_bound: ColumnBound,
    pub seed: Option<u64>,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            wind: WindDirection::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            toggle_interval: Duration::from_millis(DEFAULT_TOGGLE_MS),
            toggle: true,
            column_bound: ColumnBound::default(),
            seed: None,
        }
    }
}

/// Fire options shared by every subcommand
#[derive(Args, Clone, Debug, Default)]
pub struct FireArgs {
    /// Cells across the shorter screen dimension [default: 50]
    #[arg(short, long)]
    pub density: Option<usize>,

    /// Wind direction: right, left, none [default: right]
    #[arg(short, long)]
    pub wind: Option<String>,

    /// Milliseconds between simulation ticks [default: 100]
    #[arg(short, long)]
    pub tick: Option<u64>,

    /// Milliseconds between igniting and extinguishing [default: 5000]
    #[arg(long)]
    pub toggle: Option<u64>,

    /// Keep the fire lit instead of toggling it
    #[arg(long)]
    pub no_toggle: bool,

    /// Keep the propagation sweep inside the grid's last column
    #[arg(long)]
    pub strict_columns: bool,

    /// Random seed for reproducibility
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl FireConfig {
    /// Merge command-line flags over the settings file over defaults
    pub fn resolve(args: &FireArgs, file: &FireSettings) -> Self {
        let defaults = Self::default();

        let wind = match args.wind.as_deref().or(file.wind.as_deref()) {
            Some(name) => WindDirection::parse(name).unwrap_or_else(|| {
                eprintln!("Unknown wind direction: {}. Using {}.", name, defaults.wind.name());
                eprintln!("Available: right, left, none");
                defaults.wind
            }),
            None => defaults.wind,
        };

        let density = args.density.or(file.density).unwrap_or(defaults.density).max(1);
        let tick_ms = args.tick.or(file.tick_ms).unwrap_or(DEFAULT_TICK_MS).max(1);
        let toggle_ms = args.toggle.or(file.toggle_ms).unwrap_or(DEFAULT_TOGGLE_MS).max(1);

        Self {
            density,
            wind,
            tick_interval: Duration::from_millis(tick_ms),
            toggle_interval: Duration::from_millis(toggle_ms),
            toggle: !args.no_toggle,
            column_bound: if args.strict_columns { ColumnBound::Exclusive } else { ColumnBound::Inclusive },
            seed: args.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let config = FireConfig::resolve(&FireArgs::default(), &FireSettings::default());
        assert_eq!(config.density, 50);
        assert_eq!(config.wind, WindDirection::Right);
        assert_eq!(config.tick_interval, Duration::from_millis(100));
        assert_eq!(config.toggle_interval, Duration::from_millis(5000));
        assert!(config.toggle);
        assert_eq!(config.column_bound, ColumnBound::Inclusive);
    }

    #[test]
    fn flags_beat_settings_file() {
        let file = FireSettings {
            density: Some(20),
            wind: Some("left".into()),
            tick_ms: Some(40),
            toggle_ms: None,
        };
        let args = FireArgs {
            density: Some(80),
            no_toggle: true,
            strict_columns: true,
            ..FireArgs::default()
        };
        let config = FireConfig::resolve(&args, &file);
        assert_eq!(config.density, 80);
        assert_eq!(config.wind, WindDirection::Left);
        assert_eq!(config.tick_interval, Duration::from_millis(40));
        assert_eq!(config.toggle_interval, Duration::from_millis(5000));
        assert!(!config.toggle);
        assert_eq!(config.column_bound, ColumnBound::Exclusive);
    }

    #[test]
    fn degenerate_values_are_clamped() {
        let args = FireArgs {
            density: Some(0),
            tick: Some(0),
            wind: Some("sideways".into()),
            ..FireArgs::default()
        };
        let config = FireConfig::resolve(&args, &FireSettings::default());
        assert_eq!(config.density, 1);
        assert_eq!(config.tick_interval, Duration::from_millis(1));
        assert_eq!(config.wind, WindDirection::Right);
    }
}
