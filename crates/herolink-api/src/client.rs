// Camera session client
//
// Owns the session state machine (Disconnected -> Connecting -> Connected),
// the command encoder front-end, and the dispatcher. Request URLs are plain
// string concatenation on purpose: the wire format predates percent-encoding
// conventions, and legacy parameter tokens embed a literal `%` followed by
// two hex digits that must reach the camera untouched.
//
// Every operation takes `&mut self` and is awaited to completion, so at most
// one request is ever in flight per client.

use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::command::{
    BurstRate, CameraMode, FrameRate, Orientation, PhotoResolution, SettingOption,
    TimelapseInterval, VideoFov, VideoResolution, VideoStandard,
};
use crate::dialect::{CameraModel, Generation};
use crate::error::Error;
use crate::transport::{HttpTransport, Transport, TransportConfig, TransportError};
use crate::wifi::{LinkInfo, LinkStatus, PreAssociatedLink, WifiLink};
use crate::wol::{self, MacAddr};

/// The camera's well-known AP-side address.
pub const DEFAULT_HOST: &str = "10.5.5.9";

// ── ConnectionState ──────────────────────────────────────────────────

/// Session state observable by consumers.
///
/// Transitions happen only through [`begin`](CameraClient::begin) /
/// [`end`](CameraClient::end), plus the reactive drop to `Disconnected`
/// when a dispatch discovers the link is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

// ── Configuration ────────────────────────────────────────────────────

/// Configuration for one camera session.
///
/// Built by the caller (CLI flags, config file) and handed in whole --
/// the client never reads files or environment.
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera model; fixes the command dialect for the session's lifetime.
    pub model: CameraModel,
    /// SSID of the camera's access point.
    pub ssid: String,
    /// AP password. The legacy dialect also sends it as the `t=` auth token
    /// on every request.
    pub password: SecretString,
    /// Host (and optional `:port`) the camera listens on.
    pub host: String,
    /// Camera MAC address; required to wake modern-generation cameras.
    pub mac: Option<MacAddr>,
    /// Upper bound on WiFi association in `begin()`.
    pub connect_timeout: Duration,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Idle time after which `keep_alive()` issues a pairing probe.
    pub keep_alive_interval: Duration,
    /// Name reported in the modern pairing-confirmation request.
    pub device_name: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            model: CameraModel::Hero5,
            ssid: String::new(),
            password: SecretString::from(String::new()),
            host: DEFAULT_HOST.into(),
            mac: None,
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(10),
            keep_alive_interval: Duration::from_secs(5),
            device_name: "herolink".into(),
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Control client for one camera.
///
/// Generic over its [`Transport`] and [`WifiLink`] capabilities so tests can
/// substitute scripted stubs; [`CameraClient::new`] wires up the production
/// pair (`reqwest` transport, OS-managed link).
pub struct CameraClient<T = HttpTransport, W = PreAssociatedLink> {
    config: CameraConfig,
    /// Resolved once at construction; `None` marks an unsupported model.
    generation: Option<Generation>,
    transport: T,
    wifi: W,
    state: ConnectionState,
    /// Best-effort local power tracking. The protocol has no remote power
    /// query, so this is `None` until the first successful turn_on/turn_off
    /// and can drift from reality if the camera is switched by hand.
    power: Option<bool>,
    last_request: Option<Instant>,
}

impl CameraClient {
    /// Create a client with the production transport and an OS-managed link.
    pub fn new(config: CameraConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&TransportConfig {
            timeout: config.request_timeout,
        })?;
        Ok(Self::with_parts(
            config,
            transport,
            PreAssociatedLink::default(),
        ))
    }
}

impl<T: Transport, W: WifiLink> CameraClient<T, W> {
    /// Create a client from explicit capability implementations.
    pub fn with_parts(config: CameraConfig, transport: T, wifi: W) -> Self {
        let generation = config.model.generation();
        Self {
            config,
            generation,
            transport,
            wifi,
            state: ConnectionState::Disconnected,
            power: None,
            last_request: None,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Locally tracked power state; `None` until first set.
    pub fn is_on(&self) -> Option<bool> {
        self.power
    }

    pub fn model(&self) -> CameraModel {
        self.config.model
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Diagnostic link details from the WiFi capability, if available.
    pub fn link_info(&self) -> Option<LinkInfo> {
        self.wifi.info()
    }

    // ── Session lifecycle ────────────────────────────────────────────

    /// Associate with the camera's AP and open the session.
    ///
    /// Bounded by `connect_timeout`; on any failure the state falls back to
    /// `Disconnected`.
    pub async fn begin(&mut self) -> Result<(), Error> {
        if self.state == ConnectionState::Connected {
            return Err(Error::AlreadyConnected);
        }
        let _ = self.generation()?;

        debug!(ssid = %self.config.ssid, "associating with camera AP");
        self.state = ConnectionState::Connecting;

        let associate = self.wifi.associate(&self.config.ssid, &self.config.password);
        let status = match tokio::time::timeout(self.config.connect_timeout, associate).await {
            Ok(status) => status,
            Err(_) => {
                self.state = ConnectionState::Disconnected;
                return Err(Error::ConnectFailed {
                    reason: format!(
                        "association timed out after {:?}",
                        self.config.connect_timeout
                    ),
                });
            }
        };

        match status {
            LinkStatus::Connected => {
                debug!("camera AP associated");
                self.state = ConnectionState::Connected;
                Ok(())
            }
            LinkStatus::Failed | LinkStatus::Idle => {
                self.state = ConnectionState::Disconnected;
                Err(Error::ConnectFailed {
                    reason: format!("association ended in state {status:?}"),
                })
            }
        }
    }

    /// Tear down the session and the WiFi association.
    pub async fn end(&mut self) -> Result<(), Error> {
        if self.state != ConnectionState::Connected {
            return Err(Error::NotConnected);
        }
        debug!("closing camera session");
        self.wifi.disconnect().await;
        self.state = ConnectionState::Disconnected;
        Ok(())
    }

    /// Probe the camera if the session has been idle past the keep-alive
    /// interval. Returns whether a probe was sent.
    pub async fn keep_alive(&mut self) -> Result<bool, Error> {
        if self.state != ConnectionState::Connected {
            return Err(Error::NotConnected);
        }
        let due = self
            .last_request
            .is_none_or(|at| at.elapsed() > self.config.keep_alive_interval);
        if !due {
            return Ok(false);
        }
        debug!("keeping camera session alive");
        self.confirm_pairing().await?;
        Ok(true)
    }

    /// Confirm pairing with the camera.
    ///
    /// Doubles as the keep-alive probe: it is the cheapest authenticated
    /// request both dialects accept.
    pub async fn confirm_pairing(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        let url = match generation {
            Generation::Legacy => self.legacy_bare_url("DL"),
            Generation::Modern => format!(
                "{}command/wireless/pair/complete?success=1&deviceName={}",
                self.base_url(generation),
                self.config.device_name
            ),
        };
        self.dispatch(&url).await
    }

    // ── Power & shutter ──────────────────────────────────────────────

    /// Power the camera on.
    ///
    /// Legacy cameras take it as a regular command; modern cameras sleep
    /// with the radio half-awake and need a wake-on-lan packet (which
    /// requires `mac` in the config).
    pub async fn turn_on(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        match generation {
            Generation::Legacy => {
                let url = self.legacy_param_url("PW", "01");
                self.dispatch(&url).await?;
            }
            Generation::Modern => {
                let mac = self.config.mac.ok_or(Error::MissingMac)?;
                debug!(%mac, "broadcasting wake-on-lan packet");
                wol::wake(mac).await.map_err(|e| {
                    Error::Transport(TransportError::Connect(format!("wake-on-lan: {e}")))
                })?;
            }
        }
        self.power = Some(true);
        Ok(())
    }

    /// Power the camera off (modern cameras go to sleep).
    pub async fn turn_off(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url("PW", "00"),
            Generation::Modern => self.modern_command_url("system/sleep"),
        };
        self.dispatch(&url).await?;
        self.power = Some(false);
        Ok(())
    }

    /// Start recording (video mode) or capture (photo mode).
    pub async fn shoot(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url("SH", "01"),
            Generation::Modern => self.modern_command_url("shutter?p=1"),
        };
        self.dispatch(&url).await
    }

    /// Stop recording.
    pub async fn stop_shoot(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url("SH", "00"),
            Generation::Modern => self.modern_command_url("shutter?p=0"),
        };
        self.dispatch(&url).await
    }

    // ── Settings ─────────────────────────────────────────────────────

    /// Switch capture mode. Mode is a command in the modern dialect, not a
    /// setting, so it does not go through [`apply_setting`](Self::apply_setting).
    pub async fn set_mode(&mut self, mode: CameraMode) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let token = mode
            .token(generation)
            .ok_or_else(|| Error::invalid_option("mode", mode))?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url("CM", token),
            Generation::Modern => self.modern_command_url(&format!("mode?p={token}")),
        };
        self.dispatch(&url).await
    }

    pub async fn set_orientation(&mut self, orientation: Orientation) -> Result<(), Error> {
        self.apply_setting(orientation).await
    }

    // ── Video ────────────────────────────────────────────────────────

    pub async fn set_video_resolution(&mut self, resolution: VideoResolution) -> Result<(), Error> {
        self.apply_setting(resolution).await
    }

    pub async fn set_video_fov(&mut self, fov: VideoFov) -> Result<(), Error> {
        self.apply_setting(fov).await
    }

    pub async fn set_frame_rate(&mut self, rate: FrameRate) -> Result<(), Error> {
        self.apply_setting(rate).await
    }

    pub async fn set_video_standard(&mut self, standard: VideoStandard) -> Result<(), Error> {
        self.apply_setting(standard).await
    }

    // ── Photo ────────────────────────────────────────────────────────

    pub async fn set_photo_resolution(&mut self, resolution: PhotoResolution) -> Result<(), Error> {
        self.apply_setting(resolution).await
    }

    /// Set the timelapse interval in seconds. Only {0.5, 1, 5, 10, 30, 60}
    /// exist on the wire; anything else is an invalid option.
    pub async fn set_time_lapse_interval(&mut self, secs: f32) -> Result<(), Error> {
        self.require_connected()?;
        self.require_powered()?;
        let interval = TimelapseInterval::from_secs(secs)
            .ok_or_else(|| Error::invalid_option(TimelapseInterval::OPERATION, secs))?;
        self.apply_setting(interval).await
    }

    /// Set the continuous shot rate in frames. Only {0, 3, 5, 10} exist on
    /// the wire, and only for the legacy dialect.
    pub async fn set_continuous_shot(&mut self, count: u8) -> Result<(), Error> {
        self.require_connected()?;
        self.require_powered()?;
        let rate = BurstRate::from_count(count)
            .ok_or_else(|| Error::invalid_option(BurstRate::OPERATION, count))?;
        self.apply_setting(rate).await
    }

    // ── Storage & misc ───────────────────────────────────────────────

    /// Start the locate beep/blink.
    pub async fn localization_on(&mut self) -> Result<(), Error> {
        self.set_localization(true).await
    }

    /// Stop the locate beep/blink.
    pub async fn localization_off(&mut self) -> Result<(), Error> {
        self.set_localization(false).await
    }

    async fn set_localization(&mut self, on: bool) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url("LL", if on { "01" } else { "00" }),
            Generation::Modern => {
                self.modern_command_url(&format!("system/locate?p={}", u8::from(on)))
            }
        };
        self.dispatch(&url).await
    }

    /// Delete the most recent file on the SD card.
    pub async fn delete_last(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_bare_url("DL"),
            Generation::Modern => self.modern_command_url("storage/delete/last"),
        };
        self.dispatch(&url).await
    }

    /// Delete every file on the SD card.
    pub async fn delete_all(&mut self) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let url = match generation {
            Generation::Legacy => self.legacy_bare_url("DA"),
            Generation::Modern => self.modern_command_url("storage/delete/all"),
        };
        self.dispatch(&url).await
    }

    // ── Encoder plumbing ─────────────────────────────────────────────

    fn generation(&self) -> Result<Generation, Error> {
        self.generation.ok_or(Error::UnsupportedModel {
            model: self.config.model,
        })
    }

    /// Common preconditions for every dispatched operation: a supported
    /// model (checked first, it can never recover) and an open session.
    fn require_connected(&self) -> Result<Generation, Error> {
        let generation = self.generation()?;
        if self.state != ConnectionState::Connected {
            return Err(Error::NotConnected);
        }
        Ok(generation)
    }

    /// Power gate: only a camera *known* to be off blocks commands.
    /// Unknown power passes -- there is no way to ask the camera.
    fn require_powered(&self) -> Result<(), Error> {
        if self.power == Some(false) {
            return Err(Error::CameraOff);
        }
        Ok(())
    }

    /// Validate, encode, and dispatch one settings change.
    async fn apply_setting<O: SettingOption>(&mut self, option: O) -> Result<(), Error> {
        let generation = self.require_connected()?;
        self.require_powered()?;
        let token = option
            .token(generation)
            .ok_or_else(|| Error::invalid_option(O::OPERATION, option))?;
        let url = match generation {
            Generation::Legacy => self.legacy_param_url(O::LEGACY_CMD, token),
            Generation::Modern => self.modern_setting_url(O::MODERN_SETTING, token),
        };
        self.dispatch(&url).await
    }

    fn base_url(&self, generation: Generation) -> String {
        format!("http://{}{}", self.config.host, generation.url_prefix())
    }

    /// Legacy command with a parameter: `{base}{CMD}?t={password}&p=%{hh}`.
    fn legacy_param_url(&self, cmd: &str, token: &str) -> String {
        format!(
            "{}{cmd}?t={}&p=%{token}",
            self.base_url(Generation::Legacy),
            self.config.password.expose_secret()
        )
    }

    /// Legacy command without a parameter: `{base}{CMD}?t={password}`.
    fn legacy_bare_url(&self, cmd: &str) -> String {
        format!(
            "{}{cmd}?t={}",
            self.base_url(Generation::Legacy),
            self.config.password.expose_secret()
        )
    }

    /// Modern setting: `{base}setting/{id}/{token}`.
    fn modern_setting_url(&self, setting: &str, token: &str) -> String {
        format!("{}setting/{setting}/{token}", self.base_url(Generation::Modern))
    }

    /// Modern command: `{base}command/{path}`.
    fn modern_command_url(&self, path: &str) -> String {
        format!("{}command/{path}", self.base_url(Generation::Modern))
    }

    // ── Dispatcher ───────────────────────────────────────────────────

    /// Send one fully-built request and classify the status code.
    ///
    /// A transport failure means the link died under us: the state drops to
    /// `Disconnected` and the caller gets `NotConnected`. One attempt per
    /// call; retry policy belongs to the caller.
    async fn dispatch(&mut self, url: &str) -> Result<(), Error> {
        // Log the path only -- the legacy query string carries the password.
        let path = url.split('?').next().unwrap_or(url);
        debug!(%path, "GET");

        let status = match self.transport.get(url).await {
            Ok(status) => status,
            Err(e) => {
                warn!(%path, error = %e, "transport failure, dropping session");
                self.state = ConnectionState::Disconnected;
                return Err(Error::NotConnected);
            }
        };

        self.last_request = Some(Instant::now());
        debug!(status, "camera response");

        match status {
            200 => Ok(()),
            403 => Err(Error::AuthRejected),
            410 => Err(Error::CommandFailed),
            status => Err(Error::UnknownStatus { status }),
        }
    }
}
