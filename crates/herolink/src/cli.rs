//! Clap derive structures for the `herolink` CLI.
//!
//! Defines the full command tree and the global flags. Option values parse
//! straight into the `herolink-api` enums, so the CLI can never name an
//! option the protocol tables don't know about.

use clap::{Args, Parser, Subcommand, ValueEnum};

use herolink_api::{
    CameraMode, CameraModel, FrameRate, Orientation, PhotoResolution, VideoFov, VideoResolution,
    VideoStandard,
};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// herolink -- remote control for GoPro HERO cameras over WiFi
#[derive(Debug, Parser)]
#[command(
    name = "herolink",
    version,
    about = "Control GoPro HERO cameras over WiFi",
    long_about = "A command-line remote for GoPro HERO cameras.\n\n\
        Speaks both camera dialects: the HERO3-era CGI scheme and the\n\
        HERO4+ gpControl scheme. Join the camera's WiFi network first;\n\
        the host OS owns the radio.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Camera profile from the config file
    #[arg(long, short = 'p', env = "HEROLINK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Camera model (hero3, hero3-plus, hero4 .. hero7)
    #[arg(long, short = 'm', env = "HEROLINK_MODEL", global = true)]
    pub model: Option<CameraModel>,

    /// SSID of the camera's access point
    #[arg(long, env = "HEROLINK_SSID", global = true)]
    pub ssid: Option<String>,

    /// AP password (doubles as the auth token on HERO3-era cameras)
    #[arg(long, env = "HEROLINK_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Camera host and optional port
    #[arg(long, env = "HEROLINK_HOST", global = true)]
    pub host: Option<String>,

    /// Camera MAC address, required to wake HERO4+ cameras
    #[arg(long, env = "HEROLINK_MAC", global = true)]
    pub mac: Option<String>,

    /// Request timeout in seconds [default: 10]
    #[arg(long, env = "HEROLINK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Skip confirmation for destructive commands
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show session and camera status
    #[command(alias = "st")]
    Status,

    /// Confirm pairing with the camera
    Pair,

    /// Power the camera on (HERO4+ wakes via wake-on-lan, needs --mac)
    On,

    /// Power the camera off (HERO4+ goes to sleep)
    Off,

    /// Press the shutter: start recording or capture a photo
    #[command(alias = "rec")]
    Shoot,

    /// Release the shutter: stop recording
    Stop,

    /// Switch capture mode
    Mode {
        /// video, photo, burst, timelapse, timer, play-hdmi, multishot
        mode: CameraMode,
    },

    /// Set sensor orientation
    Orientation {
        /// up, down, auto
        orientation: Orientation,
    },

    /// Video settings
    #[command(subcommand, alias = "vid")]
    Video(VideoCommand),

    /// Photo settings
    #[command(subcommand)]
    Photo(PhotoCommand),

    /// Locate the camera (beep / LED blink)
    Locate {
        switch: Switch,
    },

    /// Delete media from the SD card
    #[command(alias = "del")]
    Delete {
        target: DeleteTarget,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum VideoCommand {
    /// Set video resolution
    #[command(alias = "res")]
    Resolution {
        /// 4k, 2k, 2k-superview, 1440p, 1080p-superview, 1080p, 960p,
        /// 720p-superview, 720p, wvga
        resolution: VideoResolution,
    },

    /// Set the lens field of view
    Fov {
        /// wide, medium, narrow, linear
        fov: VideoFov,
    },

    /// Set the frame rate
    #[command(alias = "fps")]
    Framerate {
        /// 240, 120, 100, 90, 80, 60, 50, 48, 30, 25, 24, 15, 12.5, 12
        rate: FrameRate,
    },

    /// Set the broadcast video standard
    Standard {
        /// ntsc, pal
        standard: VideoStandard,
    },
}

#[derive(Debug, Subcommand)]
pub enum PhotoCommand {
    /// Set photo resolution
    #[command(alias = "res")]
    Resolution {
        /// 12mp-wide, 12mp-linear, 12mp-medium, 12mp-narrow, 11mp-wide,
        /// 8mp-wide, 7mp-wide, 7mp-medium, 5mp-wide
        resolution: PhotoResolution,
    },

    /// Set the timelapse interval
    Timelapse {
        /// Interval in seconds: 0.5, 1, 5, 10, 30 or 60
        secs: f32,
    },

    /// Set the continuous shot rate (HERO3-era only)
    Burst {
        /// Frames per burst: 0, 3, 5 or 10
        count: u8,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration (password redacted)
    Show,
    /// Print the config file path
    Path,
}

// ── Small argument enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DeleteTarget {
    /// The most recent file
    Last,
    /// Every file on the card
    All,
}
