use std::fmt;

use thiserror::Error;

use crate::dialect::CameraModel;
use crate::transport::TransportError;

/// Top-level error type for the `herolink-api` crate.
///
/// Every non-accepted outcome of a camera operation is a variant here and is
/// returned as an ordinary value -- nothing is retried internally and nothing
/// panics. An accepted command is simply `Ok(())`.
#[derive(Debug, Error)]
pub enum Error {
    // ── Session ─────────────────────────────────────────────────────
    /// No session is established, or the link was found dead on the last
    /// dispatch. Call [`begin()`](crate::CameraClient::begin) (again).
    #[error("not connected to the camera")]
    NotConnected,

    /// `begin()` was called while a session is already up.
    #[error("already connected to the camera")]
    AlreadyConnected,

    /// The configured model predates WiFi control; no operation can work.
    #[error("camera model '{model}' speaks no supported command dialect")]
    UnsupportedModel { model: CameraModel },

    /// WiFi association did not end in a connected link.
    #[error("connecting to the camera failed: {reason}")]
    ConnectFailed { reason: String },

    // ── Command validation ──────────────────────────────────────────
    /// The camera is known to be powered off.
    #[error("camera is powered off")]
    CameraOff,

    /// The option is absent from this dialect's table. Reported before any
    /// request is built; an invalid option never reaches the transport.
    #[error("invalid option '{option}' for {operation} on this camera generation")]
    InvalidOption {
        operation: &'static str,
        option: String,
    },

    /// Waking a modern-generation camera needs its MAC address configured.
    #[error("camera MAC address is not configured (required for wake-on-lan)")]
    MissingMac,

    // ── Dispatch ────────────────────────────────────────────────────
    /// The camera rejected the credential (HTTP 403).
    #[error("camera rejected the password (HTTP 403)")]
    AuthRejected,

    /// The camera refused the command (HTTP 410).
    #[error("camera refused the command (HTTP 410)")]
    CommandFailed,

    /// Any status code outside the protocol's known set.
    #[error("unexpected camera response: HTTP {status}")]
    UnknownStatus { status: u16 },

    // ── Transport setup ─────────────────────────────────────────────
    /// Building the HTTP client or sending a wake packet failed. Dispatch-
    /// time transport failures are folded into [`NotConnected`](Self::NotConnected)
    /// instead, matching the lazy link-loss discovery contract.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    pub(crate) fn invalid_option(operation: &'static str, option: impl fmt::Display) -> Self {
        Self::InvalidOption {
            operation,
            option: option.to_string(),
        }
    }

    /// Returns `true` when the error means the session is gone and a new
    /// `begin()` might resolve it.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            Self::NotConnected | Self::ConnectFailed { .. } | Self::Transport(_)
        )
    }

    /// Returns `true` when the caller passed something the camera can never
    /// accept -- retrying with the same input is pointless.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidOption { .. } | Self::UnsupportedModel { .. }
        )
    }
}
