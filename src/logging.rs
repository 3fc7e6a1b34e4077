//! Logging setup
//!
//! Events are written to stderr and optionally to a daily rotated file.
//! Stdout is reserved for the completion protocol and never logged to.

use std::path::PathBuf;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer};

/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "HASS_SKILL_LOG_FILE";

/// Environment variable switching stderr logging off with `false`
pub const LOG_STDERR_ENV: &str = "HASS_SKILL_LOG_STDERR";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Log level used when `RUST_LOG` gives no directive
    pub level: Level,

    /// Log to file
    pub file_path: Option<PathBuf>,

    /// Log to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            file_path: None,
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Create config from environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(log_file) = std::env::var(LOG_FILE_ENV) {
            if !log_file.trim().is_empty() {
                config.file_path = Some(PathBuf::from(log_file));
            }
        }

        if let Ok(log_stderr) = std::env::var(LOG_STDERR_ENV) {
            config.stderr = !log_stderr.eq_ignore_ascii_case("false");
        }

        config
    }
}

/// Initialize the global subscriber
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    let stderr_layer = config.stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(true)
            .boxed()
    });

    let file_layer = match config.file_path {
        Some(file_path) => {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }

            let file_appender = tracing_appender::rolling::daily(
                file_path
                    .parent()
                    .filter(|parent| !parent.as_os_str().is_empty())
                    .unwrap_or_else(|| std::path::Path::new(".")),
                file_path
                    .file_name()
                    .unwrap_or_else(|| std::ffi::OsStr::new("hass-lights-skill.log")),
            );

            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_config_defaults_without_env() {
        temp_env::with_vars_unset([LOG_FILE_ENV, LOG_STDERR_ENV], || {
            assert_eq!(LogConfig::from_env(), LogConfig::default());
        });
    }

    #[test]
    #[serial]
    fn test_log_config_from_env() {
        temp_env::with_vars(
            [
                (LOG_FILE_ENV, Some("/var/log/skill/lights.log")),
                (LOG_STDERR_ENV, Some("FALSE")),
            ],
            || {
                let config = LogConfig::from_env();
                assert_eq!(
                    config.file_path,
                    Some(PathBuf::from("/var/log/skill/lights.log"))
                );
                assert!(!config.stderr);
            },
        );
    }
}
