use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::LevelFilter;
use search_box_core::RendererSettings;
use search_box_engine::EngineConfig;
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "search_box.ron";

/// Optional overrides read from `search_box.ron`. Missing fields keep the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    base_url: Option<String>,
    debounce_ms: Option<u64>,
    request_timeout_ms: Option<u64>,
    copy_feedback_ms: Option<u64>,
    preview_offset: Option<(i32, i32)>,
    log_level: Option<String>,
    log_destination: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl AppConfig {
    /// A base URL given on the command line beats the file.
    pub(crate) fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        self
    }

    pub(crate) fn engine_config(&self) -> EngineConfig {
        let mut config = match &self.base_url {
            Some(base_url) => EngineConfig::with_base_url(base_url.clone()),
            None => EngineConfig::default(),
        };
        if let Some(ms) = self.debounce_ms {
            config.debounce_quiet = Duration::from_millis(ms);
        }
        if let Some(ms) = self.request_timeout_ms {
            config.search.request_timeout = Some(Duration::from_millis(ms));
        }
        config
    }

    pub(crate) fn renderer_settings(&self) -> RendererSettings {
        let mut settings = RendererSettings::default();
        if let Some(ms) = self.copy_feedback_ms {
            settings.copy_feedback = Duration::from_millis(ms);
        }
        if let Some(offset) = self.preview_offset {
            settings.preview_offset = offset;
        }
        settings
    }

    pub(crate) fn log_level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(pipeline_logging::parse_level)
            .unwrap_or_else(pipeline_logging::default_level)
    }

    pub(crate) fn log_destination(&self) -> LogDestination {
        self.log_destination
            .as_deref()
            .and_then(LogDestination::parse)
            .unwrap_or_default()
    }
}

/// Reads the config file. A missing file is `Ok(None)`, not an error.
pub(crate) fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            r#"(
                base_url: Some("http://search.local:8080"),
                debounce_ms: Some(200),
                preview_offset: Some((4, -8)),
            )"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap().expect("config present");
        let engine = config.engine_config();
        let renderer = config.renderer_settings();

        assert_eq!(engine.search.base_url, "http://search.local:8080");
        assert_eq!(engine.debounce_quiet, Duration::from_millis(200));
        assert_eq!(engine.search.request_timeout, None);
        assert_eq!(renderer.preview_offset, (4, -8));
        assert_eq!(renderer.copy_feedback, Duration::from_millis(150));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "(debounce_ms: \"soon\")").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn command_line_base_url_overrides_file() {
        let config = AppConfig {
            base_url: Some("http://from-file".to_string()),
            ..AppConfig::default()
        }
        .with_base_url(Some("http://from-args".to_string()));

        assert_eq!(config.engine_config().search.base_url, "http://from-args");

        let kept = config.clone().with_base_url(None);
        assert_eq!(kept.engine_config().search.base_url, "http://from-args");
    }

    #[test]
    fn defaults_match_pipeline_constants() {
        let config = AppConfig::default();
        assert_eq!(config.engine_config(), EngineConfig::default());
        assert_eq!(config.renderer_settings(), RendererSettings::default());
        assert_eq!(config.log_destination(), LogDestination::File);
    }
}
