use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub fire: FireSettings,
}

/// Optional overrides from the `[fire]` table
#[derive(Debug, Default, Deserialize)]
pub struct FireSettings {
    pub density: Option<usize>,
    pub wind: Option<String>,      // right, left or none
    pub tick_ms: Option<u64>,
    pub toggle_ms: Option<u64>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termfire")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fire_table() {
        let s = Settings::parse(
            "[fire]\ndensity = 30\nwind = \"left\"\ntick_ms = 50\ntoggle_ms = 2000\n",
        )
        .unwrap();
        assert_eq!(s.fire.density, Some(30));
        assert_eq!(s.fire.wind.as_deref(), Some("left"));
        assert_eq!(s.fire.tick_ms, Some(50));
        assert_eq!(s.fire.toggle_ms, Some(2000));
    }

    #[test]
    fn missing_table_is_default() {
        let s = Settings::parse("").unwrap();
        assert!(s.fire.density.is_none());
        assert!(s.fire.wind.is_none());
    }

    #[test]
    fn wrong_types_are_errors() {
        assert!(Settings::parse("[fire]\ndensity = \"lots\"\n").is_err());
    }
}
