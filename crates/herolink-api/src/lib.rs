//! Async Rust client for the GoPro HERO WiFi command protocol.
//!
//! HERO cameras expose an HTTP command surface on their own access point,
//! in one of two incompatible dialects:
//!
//! - **Legacy** (HERO3/HERO3+): `http://{host}/camera/{CMD}?t={password}&p=%{hh}`
//!   -- two-letter CGI commands, the AP password as auth token, and
//!   two-hex-digit parameter tokens.
//! - **Modern** (HERO4 through HERO7): `http://{host}/gp/gpControl/...`
//!   -- path-segment commands and settings with decimal tokens, no
//!   credential.
//!
//! [`CameraClient`] resolves the dialect once from the [`CameraModel`],
//! validates every option against per-dialect token tables before any I/O,
//! and classifies the camera's HTTP status codes into typed outcomes.
//! The WiFi association and the HTTP transport are capabilities
//! ([`WifiLink`], [`Transport`]) so they can be swapped per platform and
//! stubbed in tests.

pub mod client;
pub mod command;
pub mod dialect;
pub mod error;
pub mod transport;
pub mod wifi;
pub mod wol;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::{CameraClient, CameraConfig, ConnectionState, DEFAULT_HOST};
pub use command::{
    BurstRate, CameraMode, FrameRate, Orientation, PhotoResolution, TimelapseInterval, VideoFov,
    VideoResolution, VideoStandard,
};
pub use dialect::{CameraModel, Generation};
pub use error::Error;
pub use transport::{HttpTransport, Transport, TransportConfig, TransportError};
pub use wifi::{LinkInfo, LinkStatus, PreAssociatedLink, WifiLink};
pub use wol::MacAddr;
