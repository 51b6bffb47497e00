use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::grid::Grid;

pub const DEFAULT_CONFIG_PATH: &str = "snake.json";
pub const CONFIG_PATH_VAR: &str = "SNAKE_CONFIG";

/// Runtime settings, read from an optional JSON file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    /// Board width in pixels.
    pub width: i32,
    /// Board height in pixels.
    pub height: i32,
    pub cell_size: i32,
    /// Ticks per second at the start of a session and after a collision.
    pub initial_speed: u32,
    /// Added to the speed for every piece of food eaten.
    pub speed_increment: u32,
    /// Upper bound on ticks per second. Unbounded when absent.
    pub max_speed: Option<u32>,
    pub best_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Snake".to_string(),
            width: 600,
            height: 400,
            cell_size: 20,
            initial_speed: 1,
            speed_increment: 1,
            max_speed: None,
            best_score_path: PathBuf::from("best_score.txt"),
        }
    }
}

impl GameConfig {
    /// Where to look for the config file: `$SNAKE_CONFIG`, else `snake.json`.
    pub fn default_path() -> PathBuf {
        env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Loads and validates the file at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Like `load`, but logs any problem and falls back to the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("using config from {}", path.display());
                config
            }
            Err(e) => {
                error!("error loading config {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            return Err(Error::ZeroCellSize);
        }
        if self.width <= 0
            || self.height <= 0
            || self.width % self.cell_size != 0
            || self.height % self.cell_size != 0
        {
            return Err(Error::MisalignedBoard {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        if self.initial_speed == 0 {
            return Err(Error::ZeroSpeed);
        }
        if let Some(max_speed) = self.max_speed {
            if max_speed < self.initial_speed {
                return Err(Error::MaxSpeedTooLow {
                    max_speed,
                    initial_speed: self.initial_speed,
                });
            }
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_board() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid(), Grid::default());
        assert_eq!(config.initial_speed, 1);
        assert_eq!(config.speed_increment, 1);
        assert_eq!(config.max_speed, None);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 800, "speed_increment": 2 }"#).unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 400);
        assert_eq!(config.speed_increment, 2);
        assert_eq!(config.best_score_path, PathBuf::from("best_score.txt"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = env::temp_dir().join("snake-no-such-config.json");
        assert_eq!(GameConfig::load(&path).unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_misaligned_board() {
        let err = GameConfig::from_json(r#"{ "width": 610 }"#).unwrap_err();
        assert!(matches!(err, Error::MisalignedBoard { width: 610, .. }));
    }

    #[test]
    fn rejects_bad_speeds() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "initial_speed": 0 }"#),
            Err(Error::ZeroSpeed)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "initial_speed": 5, "max_speed": 3 }"#),
            Err(Error::MaxSpeedTooLow { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "cell_size": 0 }"#),
            Err(Error::ZeroCellSize)
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(GameConfig::from_json("{ width: "), Err(Error::Json(_))));
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = env::temp_dir().join(format!("snake-broken-{}.json", std::process::id()));
        fs::write(&path, "not json").unwrap();
        assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
        fs::remove_file(&path).unwrap();
    }
}
