// Operation families and parameter token tables
//
// One enum per operation family. Every option maps to at most one wire token
// per dialect: two-hex-digit strings for the legacy dialect, decimal strings
// for the modern dialect. The tables are protocol data, not logic -- the
// camera firmware expects these exact byte sequences, so they are written out
// in full rather than computed. An option absent from a dialect's table is
// invalid for that dialect and is rejected before any request is built.

use std::fmt;

use strum::{Display, EnumString};

use crate::dialect::Generation;

/// An option family that maps onto a per-dialect settings location.
///
/// Legacy settings live under a two-letter CGI command; modern settings live
/// under a numeric gpControl setting id. `token` returns `None` when the
/// option does not exist in that dialect's table.
pub(crate) trait SettingOption: Copy + fmt::Display {
    /// Operation name used in `InvalidOption` reports.
    const OPERATION: &'static str;
    /// Two-letter legacy CGI command.
    const LEGACY_CMD: &'static str;
    /// gpControl setting id. Empty for legacy-only families, whose modern
    /// tokens are all `None` and therefore never reach URL construction.
    const MODERN_SETTING: &'static str;

    fn token(self, generation: Generation) -> Option<&'static str>;
}

// ── Capture mode ─────────────────────────────────────────────────────

/// Capture mode. The two dialects expose different mode sets: the legacy
/// dialect has dedicated burst/timelapse/timer/playback modes, the modern
/// dialect folds them into `Multishot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CameraMode {
    Video,
    Photo,
    Burst,
    Timelapse,
    Timer,
    PlayHdmi,
    Multishot,
}

impl CameraMode {
    pub(crate) fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Video => Some("00"),
                Self::Photo => Some("01"),
                Self::Burst => Some("02"),
                Self::Timelapse => Some("03"),
                Self::Timer => Some("04"),
                Self::PlayHdmi => Some("05"),
                Self::Multishot => None,
            },
            Generation::Modern => match self {
                Self::Video => Some("0"),
                Self::Photo => Some("1"),
                Self::Multishot => Some("2"),
                _ => None,
            },
        }
    }
}

// ── Orientation ──────────────────────────────────────────────────────

/// Sensor orientation. `Auto` exists only in the modern dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Orientation {
    Up,
    Down,
    Auto,
}

impl SettingOption for Orientation {
    const OPERATION: &'static str = "orientation";
    const LEGACY_CMD: &'static str = "UP";
    const MODERN_SETTING: &'static str = "52";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Up => Some("00"),
                Self::Down => Some("01"),
                Self::Auto => None,
            },
            Generation::Modern => match self {
                Self::Up => Some("0"),
                Self::Down => Some("1"),
                Self::Auto => Some("2"),
            },
        }
    }
}

// ── Video resolution ─────────────────────────────────────────────────

/// Video resolution. The legacy sensor tops out at 1080p; everything above
/// it (and the SuperView variants) is modern-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum VideoResolution {
    #[strum(serialize = "4k")]
    R4k,
    #[strum(serialize = "2k")]
    R2k,
    #[strum(serialize = "2k-superview")]
    R2kSuperview,
    #[strum(serialize = "1440p")]
    R1440p,
    #[strum(serialize = "1080p-superview")]
    R1080pSuperview,
    #[strum(serialize = "1080p")]
    R1080p,
    #[strum(serialize = "960p")]
    R960p,
    #[strum(serialize = "720p-superview")]
    R720pSuperview,
    #[strum(serialize = "720p")]
    R720p,
    #[strum(serialize = "wvga")]
    Wvga,
}

impl SettingOption for VideoResolution {
    const OPERATION: &'static str = "video resolution";
    const LEGACY_CMD: &'static str = "VR";
    const MODERN_SETTING: &'static str = "2";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::R1080p => Some("06"),
                Self::R960p => Some("05"),
                Self::R720p => Some("03"),
                Self::Wvga => Some("01"),
                _ => None,
            },
            Generation::Modern => match self {
                Self::R4k => Some("1"),
                Self::R2k => Some("4"),
                Self::R2kSuperview => Some("5"),
                Self::R1440p => Some("7"),
                Self::R1080pSuperview => Some("8"),
                Self::R1080p => Some("9"),
                Self::R960p => Some("10"),
                Self::R720pSuperview => Some("11"),
                Self::R720p => Some("12"),
                Self::Wvga => Some("13"),
            },
        }
    }
}

// ── Field of view ────────────────────────────────────────────────────

/// Lens field of view. `Linear` is modern-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum VideoFov {
    Wide,
    Medium,
    Narrow,
    Linear,
}

impl SettingOption for VideoFov {
    const OPERATION: &'static str = "video fov";
    const LEGACY_CMD: &'static str = "FV";
    const MODERN_SETTING: &'static str = "4";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Wide => Some("00"),
                Self::Medium => Some("01"),
                Self::Narrow => Some("02"),
                Self::Linear => None,
            },
            Generation::Modern => match self {
                Self::Wide => Some("0"),
                Self::Medium => Some("1"),
                Self::Narrow => Some("2"),
                Self::Linear => Some("4"),
            },
        }
    }
}

// ── Frame rate ───────────────────────────────────────────────────────

/// Capture frame rate in frames per second. Low rates (24 and below) are
/// legacy-only; 80 and 90 fps exist only on modern sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FrameRate {
    #[strum(serialize = "240")]
    Fps240,
    #[strum(serialize = "120")]
    Fps120,
    #[strum(serialize = "100")]
    Fps100,
    #[strum(serialize = "90")]
    Fps90,
    #[strum(serialize = "80")]
    Fps80,
    #[strum(serialize = "60")]
    Fps60,
    #[strum(serialize = "50")]
    Fps50,
    #[strum(serialize = "48")]
    Fps48,
    #[strum(serialize = "30")]
    Fps30,
    #[strum(serialize = "25")]
    Fps25,
    #[strum(serialize = "24")]
    Fps24,
    #[strum(serialize = "15")]
    Fps15,
    #[strum(serialize = "12.5")]
    Fps12p5,
    #[strum(serialize = "12")]
    Fps12,
}

impl SettingOption for FrameRate {
    const OPERATION: &'static str = "frame rate";
    const LEGACY_CMD: &'static str = "FS";
    const MODERN_SETTING: &'static str = "3";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Fps240 => Some("0a"),
                Self::Fps120 => Some("09"),
                Self::Fps100 => Some("08"),
                Self::Fps60 => Some("07"),
                Self::Fps50 => Some("06"),
                Self::Fps48 => Some("05"),
                Self::Fps30 => Some("04"),
                Self::Fps25 => Some("03"),
                Self::Fps24 => Some("02"),
                Self::Fps15 => Some("01"),
                Self::Fps12p5 => Some("0b"),
                Self::Fps12 => Some("00"),
                Self::Fps90 | Self::Fps80 => None,
            },
            Generation::Modern => match self {
                Self::Fps240 => Some("0"),
                Self::Fps120 => Some("1"),
                Self::Fps100 => Some("2"),
                Self::Fps90 => Some("3"),
                Self::Fps80 => Some("4"),
                Self::Fps60 => Some("5"),
                Self::Fps50 => Some("6"),
                Self::Fps48 => Some("7"),
                Self::Fps30 => Some("8"),
                Self::Fps25 => Some("9"),
                _ => None,
            },
        }
    }
}

// ── Video standard ───────────────────────────────────────────────────

/// Broadcast video standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VideoStandard {
    Ntsc,
    Pal,
}

impl SettingOption for VideoStandard {
    const OPERATION: &'static str = "video standard";
    const LEGACY_CMD: &'static str = "VM";
    const MODERN_SETTING: &'static str = "57";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Ntsc => Some("00"),
                Self::Pal => Some("01"),
            },
            Generation::Modern => match self {
                Self::Ntsc => Some("0"),
                Self::Pal => Some("1"),
            },
        }
    }
}

// ── Photo resolution ─────────────────────────────────────────────────

/// Still photo resolution. The two sensor generations share only the 5MP
/// wide setting; every other option belongs to exactly one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PhotoResolution {
    #[strum(serialize = "12mp-wide")]
    Wide12mp,
    #[strum(serialize = "12mp-linear")]
    Linear12mp,
    #[strum(serialize = "12mp-medium")]
    Medium12mp,
    #[strum(serialize = "12mp-narrow")]
    Narrow12mp,
    #[strum(serialize = "11mp-wide")]
    Wide11mp,
    #[strum(serialize = "8mp-wide")]
    Wide8mp,
    #[strum(serialize = "7mp-wide")]
    Wide7mp,
    #[strum(serialize = "7mp-medium")]
    Medium7mp,
    #[strum(serialize = "5mp-wide")]
    Wide5mp,
}

impl SettingOption for PhotoResolution {
    const OPERATION: &'static str = "photo resolution";
    const LEGACY_CMD: &'static str = "PR";
    const MODERN_SETTING: &'static str = "17";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Wide11mp => Some("00"),
                Self::Wide8mp => Some("01"),
                Self::Wide5mp => Some("02"),
                _ => None,
            },
            Generation::Modern => match self {
                Self::Wide12mp => Some("0"),
                Self::Linear12mp => Some("10"),
                Self::Medium12mp => Some("8"),
                Self::Narrow12mp => Some("9"),
                Self::Wide7mp => Some("1"),
                Self::Medium7mp => Some("2"),
                Self::Wide5mp => Some("3"),
                Self::Wide11mp | Self::Wide8mp => None,
            },
        }
    }
}

// ── Timelapse interval ───────────────────────────────────────────────

/// Timelapse frame interval. Only six discrete intervals exist on the wire;
/// [`from_secs`](Self::from_secs) is the membership test that admits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TimelapseInterval {
    #[strum(serialize = "0.5")]
    HalfSecond,
    #[strum(serialize = "1")]
    OneSecond,
    #[strum(serialize = "5")]
    FiveSeconds,
    #[strum(serialize = "10")]
    TenSeconds,
    #[strum(serialize = "30")]
    ThirtySeconds,
    #[strum(serialize = "60")]
    SixtySeconds,
}

impl TimelapseInterval {
    /// Map a requested interval in seconds onto the discrete wire domain.
    /// Anything outside {0.5, 1, 5, 10, 30, 60} is rejected.
    #[allow(clippy::float_cmp)] // the domain values are exactly representable
    pub fn from_secs(secs: f32) -> Option<Self> {
        match secs {
            s if s == 0.5 => Some(Self::HalfSecond),
            s if s == 1.0 => Some(Self::OneSecond),
            s if s == 5.0 => Some(Self::FiveSeconds),
            s if s == 10.0 => Some(Self::TenSeconds),
            s if s == 30.0 => Some(Self::ThirtySeconds),
            s if s == 60.0 => Some(Self::SixtySeconds),
            _ => None,
        }
    }
}

impl SettingOption for TimelapseInterval {
    const OPERATION: &'static str = "timelapse interval";
    const LEGACY_CMD: &'static str = "TI";
    const MODERN_SETTING: &'static str = "5";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::SixtySeconds => Some("3c"),
                Self::ThirtySeconds => Some("1e"),
                Self::TenSeconds => Some("0a"),
                Self::FiveSeconds => Some("05"),
                Self::OneSecond => Some("01"),
                Self::HalfSecond => Some("00"),
            },
            Generation::Modern => match self {
                Self::SixtySeconds => Some("6"),
                Self::ThirtySeconds => Some("5"),
                Self::TenSeconds => Some("4"),
                Self::FiveSeconds => Some("3"),
                Self::OneSecond => Some("1"),
                Self::HalfSecond => Some("0"),
            },
        }
    }
}

// ── Continuous shot rate ─────────────────────────────────────────────

/// Continuous shot rate in frames per burst. Legacy-only; the modern
/// dialect has no equivalent setting, so its token table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BurstRate {
    #[strum(serialize = "0")]
    Off,
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "5")]
    Five,
    #[strum(serialize = "10")]
    Ten,
}

impl BurstRate {
    /// Map a requested frame count onto the discrete wire domain.
    /// Anything outside {0, 3, 5, 10} is rejected.
    pub fn from_count(count: u8) -> Option<Self> {
        match count {
            0 => Some(Self::Off),
            3 => Some(Self::Three),
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            _ => None,
        }
    }
}

impl SettingOption for BurstRate {
    const OPERATION: &'static str = "continuous shot";
    const LEGACY_CMD: &'static str = "CS";
    // No gpControl setting id exists; with every modern token `None` the
    // id is unreachable.
    const MODERN_SETTING: &'static str = "";

    fn token(self, generation: Generation) -> Option<&'static str> {
        match generation {
            Generation::Legacy => match self {
                Self::Ten => Some("0a"),
                Self::Five => Some("05"),
                Self::Three => Some("03"),
                Self::Off => Some("00"),
            },
            Generation::Modern => None,
        }
    }
}
