use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{fs, path::Path, sync::LazyLock};

pub mod icons;
pub mod logging;

pub use icons::{IconConfig, IconEntry};
pub use logging::LoggingConfig;

pub static MENU_CONFIG: LazyLock<MenuConfiguration> = LazyLock::new(MenuConfiguration::load);

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Couldn't serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Everything a menu needs to know that is not part of the menu itself.
///
/// The defaults match what players expect from chest menus on a vanilla
/// server, so most plugins never need a `menus.toml` at all.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MenuConfiguration {
    /// Ticks between a "close" or "go back" click and the view being closed.
    pub close_delay: u32,
    /// Ticks between a "go back" click and the parent menu being opened.
    /// Must be larger than `close_delay`, the parent opens after the close.
    pub parent_open_delay: u32,
    /// Sound played by `ItemClickEvent::play_click_feedback`
    pub click_sound: String,
    pub click_volume: f32,
    pub click_pitch: f32,
    pub icons: IconConfig,
    pub logging: LoggingConfig,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            close_delay: 1,
            parent_open_delay: 3,
            click_sound: "minecraft:ui.button.click".to_string(),
            click_volume: 1.0,
            click_pitch: 1.0,
            icons: IconConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

pub trait LoadTomlConfiguration {
    /// Loads the configuration, writing the defaults when no file exists yet.
    /// Falls back to the defaults when the file can't be read or parsed.
    fn load() -> Self
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let path = Self::get_path();

        let config = if path.exists() {
            Self::try_load(path).unwrap_or_else(|err| {
                warn!(
                    "{err} ({:?}). This is probably caused by a config update, just delete the old config and restart. Using defaults",
                    path
                );
                Self::default()
            })
        } else {
            let content = Self::default();

            if let Err(err) = Self::write_default(path, &content) {
                warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
            }

            content
        };

        config.validate();
        config
    }

    fn try_load(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + DeserializeOwned,
    {
        let file_content = fs::read_to_string(path)?;
        Ok(toml::from_str(&file_content)?)
    }

    fn write_default(path: &Path, content: &Self) -> Result<(), ConfigError>
    where
        Self: Sized + Serialize,
    {
        fs::write(path, toml::to_string(content)?)?;
        Ok(())
    }

    fn get_path() -> &'static Path;

    fn validate(&self);
}

impl LoadTomlConfiguration for MenuConfiguration {
    fn get_path() -> &'static Path {
        Path::new("menus.toml")
    }

    fn validate(&self) {
        assert!(
            self.parent_open_delay > self.close_delay,
            "The parent menu must open after the current one has closed (parent_open_delay > close_delay)"
        );
        self.icons.validate();
    }
}
