use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gui::carousel::Easing;
use std::path::{Path, PathBuf};

/// Fixed visual constants, overridable from the config file so different
/// viewport treatments can be tried without a rebuild. Layout units are
/// logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Inset margin on either side of the centered card.
    pub inset: f64,
    /// Poster panel height.
    pub card_height: f64,
    /// Navbar logo render width; height follows the 756:1800 aspect.
    pub logo_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inset: 40.0,
            card_height: 200.0,
            logo_width: 100.0,
        }
    }
}

/// Snap-settle behavior after a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub settle_ms: u64,
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            settle_ms: 250,
            easing: Easing::OutCubic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub scroll: ScrollConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "backlot", "marquee").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path.to_path_buf()).required(false))
        .add_source(config::Environment::with_prefix("MARQUEE"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_deserialization() {
        let cases = vec![
            ("\"out-cubic\"", Easing::OutCubic),
            ("\"OutCubic\"", Easing::OutCubic),
            ("\"OUT-CUBIC\"", Easing::OutCubic),
            ("\"out-quad\"", Easing::OutQuad),
            ("\"linear\"", Easing::Linear),
            ("\"Linear\"", Easing::Linear),
        ];

        for (json, expected) in cases {
            let deserialized: Easing = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }

    #[test]
    fn defaults_match_the_embedded_config() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed, Config::default());
        assert_eq!(parsed.layout.inset, 40.0);
        assert_eq!(parsed.layout.card_height, 200.0);
        assert_eq!(parsed.scroll.settle_ms, 250);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_or_default(Path::new("/nonexistent/marquee/config.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let parsed: Config = config::Config::builder()
            .add_source(config::File::from_str(
                "[layout]\ninset = 24.0\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(parsed.layout.inset, 24.0);
        assert_eq!(parsed.layout.card_height, 200.0);
        assert_eq!(parsed.scroll, ScrollConfig::default());
    }
}
