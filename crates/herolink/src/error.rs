//! CLI error types with miette diagnostics.
//!
//! Maps `herolink_api::Error` outcomes into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes, stable for scripting.
#[allow(dead_code)]
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const INVALID_OPTION: i32 = 4;
    pub const CAMERA_OFF: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error("camera model is not configured")]
    #[diagnostic(
        code(herolink::no_model),
        help(
            "Pass --model (e.g. --model hero5), set HEROLINK_MODEL,\n\
             or add `model` to a profile in {path}"
        )
    )]
    NoModel { path: String },

    #[error("invalid value for {field}: {reason}")]
    #[diagnostic(code(herolink::config))]
    Validation { field: String, reason: String },

    #[error("could not read config file {path}")]
    #[diagnostic(code(herolink::config))]
    ConfigRead {
        path: String,
        #[source]
        source: figment::Error,
    },

    // ── Guard rails ──────────────────────────────────────────────────
    #[error("refusing to delete all media without --yes")]
    #[diagnostic(
        code(herolink::needs_confirmation),
        help("Re-run with --yes (-y) to confirm wiping the SD card")
    )]
    DeleteAllNeedsConfirmation,

    // ── Camera outcomes ──────────────────────────────────────────────
    #[error("could not reach the camera at {host}")]
    #[diagnostic(
        code(herolink::connection),
        help(
            "Join the camera's WiFi network first -- the host OS owns the radio.\n\
             Then check --host (most cameras listen on 10.5.5.9)."
        )
    )]
    Connection {
        host: String,
        #[source]
        source: herolink_api::Error,
    },

    #[error("the camera rejected the password")]
    #[diagnostic(
        code(herolink::auth),
        help(
            "HERO3-era cameras send the AP password as the auth token on\n\
             every request. Check --password / HEROLINK_PASSWORD."
        )
    )]
    AuthRejected,

    #[error("camera is powered off")]
    #[diagnostic(code(herolink::camera_off), help("Run `herolink on` first"))]
    CameraOff,

    #[error(transparent)]
    #[diagnostic(code(herolink::invalid_option))]
    InvalidOption(herolink_api::Error),

    #[error(transparent)]
    #[diagnostic(code(herolink::unsupported_model))]
    UnsupportedModel(herolink_api::Error),

    #[error("camera MAC address is not configured")]
    #[diagnostic(
        code(herolink::missing_mac),
        help(
            "HERO4+ cameras wake via wake-on-lan. Pass --mac aa:bb:cc:dd:ee:ff\n\
             or add `mac` to the profile."
        )
    )]
    MissingMac,

    #[error(transparent)]
    #[diagnostic(code(herolink::camera))]
    Camera(herolink_api::Error),
}

impl CliError {
    /// Lift a library outcome into a CLI diagnostic.
    pub fn from_api(err: herolink_api::Error, host: &str) -> Self {
        use herolink_api::Error as Api;
        match err {
            Api::AuthRejected => Self::AuthRejected,
            Api::CameraOff => Self::CameraOff,
            Api::MissingMac => Self::MissingMac,
            Api::InvalidOption { .. } => Self::InvalidOption(err),
            Api::UnsupportedModel { .. } => Self::UnsupportedModel(err),
            Api::NotConnected | Api::ConnectFailed { .. } | Api::Transport(_) => Self::Connection {
                host: host.to_string(),
                source: err,
            },
            _ => Self::Camera(err),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoModel { .. }
            | Self::Validation { .. }
            | Self::ConfigRead { .. }
            | Self::DeleteAllNeedsConfirmation => exit_code::USAGE,
            Self::AuthRejected => exit_code::AUTH,
            Self::InvalidOption(_) | Self::UnsupportedModel(_) => exit_code::INVALID_OPTION,
            Self::CameraOff => exit_code::CAMERA_OFF,
            Self::Connection { .. } | Self::MissingMac => exit_code::CONNECTION,
            Self::Camera(_) => exit_code::GENERAL,
        }
    }
}
