//! CLI-owned configuration: TOML profiles merged with flags and env vars,
//! translated into a `herolink_api::CameraConfig`.
//!
//! The library never sees these types -- it receives a pre-built
//! `CameraConfig` and never touches disk.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use herolink_api::{CameraConfig, CameraModel, DEFAULT_HOST, MacAddr};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

/// On-disk configuration. One `[profiles.<name>]` table per camera.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

/// One camera's settings. Every field is optional; CLI flags and
/// `HEROLINK_*` env vars override anything set here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    pub model: Option<CameraModel>,
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub mac: Option<MacAddr>,
    pub timeout_secs: Option<u64>,
    pub device_name: Option<String>,
}

/// Path of the config file: `<config dir>/herolink/config.toml`.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "", "herolink")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("herolink.toml"))
}

/// Load the config file, or defaults when it does not exist.
pub fn load_config() -> Result<Config, CliError> {
    let path = config_path();
    Figment::new()
        .merge(Toml::file(&path))
        .extract()
        .map_err(|source| CliError::ConfigRead {
            path: path.display().to_string(),
            source,
        })
}

/// Resolve the effective camera configuration from profile + overrides.
pub fn resolve(global: &GlobalOpts) -> Result<CameraConfig, CliError> {
    let cfg = load_config()?;

    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone());
    let profile = match &profile_name {
        Some(name) => cfg
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| CliError::Validation {
                field: "profile".into(),
                reason: format!("profile '{name}' not found in {}", config_path().display()),
            })?,
        None => Profile::default(),
    };

    let model = global
        .model
        .or(profile.model)
        .ok_or_else(|| CliError::NoModel {
            path: config_path().display().to_string(),
        })?;

    let mac = match global.mac.as_deref() {
        Some(s) => Some(s.parse::<MacAddr>().map_err(|reason| CliError::Validation {
            field: "mac".into(),
            reason,
        })?),
        None => profile.mac,
    };

    let password = global
        .password
        .clone()
        .or(profile.password)
        .unwrap_or_default();

    let defaults = CameraConfig::default();
    Ok(CameraConfig {
        model,
        ssid: global.ssid.clone().or(profile.ssid).unwrap_or_default(),
        password: SecretString::from(password),
        host: global
            .host
            .clone()
            .or(profile.host)
            .unwrap_or_else(|| DEFAULT_HOST.into()),
        mac,
        request_timeout: Duration::from_secs(
            global.timeout.or(profile.timeout_secs).unwrap_or(10),
        ),
        device_name: profile.device_name.unwrap_or(defaults.device_name),
        ..defaults
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn profile_toml_round_trip() {
        let toml = r#"
            default_profile = "garage"

            [profiles.garage]
            model = "hero5"
            ssid = "GP55555555"
            password = "opensesame"
            mac = "d6:04:12:34:ab:cd"
            timeout_secs = 5
        "#;
        let cfg: Config = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("garage"));

        let profile = &cfg.profiles["garage"];
        assert_eq!(profile.model, Some(CameraModel::Hero5));
        assert_eq!(profile.ssid.as_deref(), Some("GP55555555"));
        assert_eq!(
            profile.mac,
            Some("d6:04:12:34:ab:cd".parse::<MacAddr>().unwrap())
        );
    }

    #[test]
    fn unknown_model_is_rejected() {
        let toml = r#"
            [profiles.bad]
            model = "hero99"
        "#;
        assert!(toml::from_str::<Config>(toml).is_err());
    }
}
