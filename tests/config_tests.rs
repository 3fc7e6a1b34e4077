//! Configuration loading tests
//!
//! Environment-dependent tests run serially with temp-env isolation.

use hass_lights_skill::config::{HASSIO_INTERNAL_HOST, HASSIO_TOKEN_ENV};
use hass_lights_skill::SkillConfig;
use serial_test::serial;
use std::io::Write;
use std::path::Path;
use temp_env::with_var;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ini")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn test_load_from_file_only() {
    let file = write_config(
        "[skill]\n\
         hass_host=http://homeassistant.local:8123\n\
         hass_token=file-token\n\
         confirmation_failure=Das ging schief\n",
    );

    with_var(HASSIO_TOKEN_ENV, None::<&str>, || {
        let config = SkillConfig::load(file.path()).expect("config should load");

        assert_eq!(config.hass_token(), "file-token");
        assert_eq!(config.hass_host.host_str(), Some("homeassistant.local"));
        assert_eq!(config.confirmation_success, "Okay");
        assert_eq!(config.confirmation_failure, "Das ging schief");
        assert!(!config.enable_confirmation);
    });
}

#[test]
#[serial]
fn test_load_falls_back_to_supervisor_environment() {
    let dir = tempfile::tempdir().expect("temp dir");

    with_var(HASSIO_TOKEN_ENV, Some("supervisor-token"), || {
        let config =
            SkillConfig::load(&dir.path().join("config.ini")).expect("config should load");

        assert_eq!(config.hass_token(), "supervisor-token");
        assert_eq!(config.hass_host.as_str(), HASSIO_INTERNAL_HOST);
    });
}

#[test]
#[serial]
fn test_env_token_with_configured_host() {
    let file = write_config(
        "[skill]\n\
         hass_host=https://hub.example.org\n\
         enable_confirmation=True\n",
    );

    with_var(HASSIO_TOKEN_ENV, Some("supervisor-token"), || {
        let config = SkillConfig::load(file.path()).expect("config should load");

        assert_eq!(config.hass_token(), "supervisor-token");
        assert_eq!(config.hass_host.host_str(), Some("hub.example.org"));
        assert!(config.enable_confirmation);
    });
}

#[test]
#[serial]
fn test_load_without_token_fails() {
    let file = write_config("[skill]\nhass_host=http://hub:8123\n");

    with_var(HASSIO_TOKEN_ENV, None::<&str>, || {
        let err = SkillConfig::load(file.path()).expect_err("token is required");
        assert!(err.is_config_error());
    });
}

#[test]
#[serial]
fn test_load_rejects_invalid_timeout() {
    let file = write_config(
        "[skill]\n\
         hass_host=http://hub:8123\n\
         hass_token=abc\n\
         hass_timeout=soon\n",
    );

    with_var(HASSIO_TOKEN_ENV, None::<&str>, || {
        assert!(SkillConfig::load(file.path()).is_err());
    });
}

#[test]
#[serial]
fn test_shipped_example_runs_on_supervisor_token() {
    let example = Path::new(env!("CARGO_MANIFEST_DIR")).join("config.ini.example");

    with_var(HASSIO_TOKEN_ENV, Some("supervisor-token"), || {
        let config = SkillConfig::load(&example).expect("example config should load");

        assert_eq!(config.hass_token(), "supervisor-token");
        assert_eq!(config.hass_host.as_str(), HASSIO_INTERNAL_HOST);
        assert!(!config.enable_confirmation);
    });
}
