// Camera model and dialect resolution
//
// Two incompatible command dialects exist across the HERO line: the
// HERO3-era CGI scheme (`/camera/XX?t=...&p=%hh`) and the HERO4+ gpControl
// scheme (`/gp/gpControl/...`). Which one a camera speaks is fixed by its
// model and resolved exactly once, at client construction.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A GoPro HERO camera model, as printed on the box.
///
/// `Hero` and `Hero2` predate both WiFi command dialects and resolve to no
/// [`Generation`]; every operation against them reports
/// [`Error::UnsupportedModel`](crate::Error::UnsupportedModel).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum CameraModel {
    Hero,
    Hero2,
    Hero3,
    #[strum(serialize = "hero3-plus", serialize = "hero3+")]
    #[serde(alias = "hero3+")]
    Hero3Plus,
    Hero4,
    Hero5,
    Hero6,
    Hero7,
}

impl CameraModel {
    /// The command dialect this model speaks, or `None` for models that
    /// predate WiFi control.
    pub fn generation(self) -> Option<Generation> {
        match self {
            Self::Hero | Self::Hero2 => None,
            Self::Hero3 | Self::Hero3Plus => Some(Generation::Legacy),
            Self::Hero4 | Self::Hero5 | Self::Hero6 | Self::Hero7 => Some(Generation::Modern),
        }
    }
}

/// The command dialect of a camera generation.
///
/// Determines the URL prefix, credential-passing style, and parameter token
/// encoding:
///
/// - [`Legacy`](Self::Legacy): `http://{host}/camera/{CMD}?t={password}&p=%{hh}`
///   with two-hex-digit tokens and the AP password doubling as auth token.
/// - [`Modern`](Self::Modern): `http://{host}/gp/gpControl/command|setting/...`
///   with decimal tokens embedded as path segments and no credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// HERO3 / HERO3+ CGI dialect.
    Legacy,
    /// HERO4 through HERO7 gpControl dialect.
    Modern,
}

impl Generation {
    /// The URL path prefix for this dialect.
    pub fn url_prefix(self) -> &'static str {
        match self {
            Self::Legacy => "/camera/",
            Self::Modern => "/gp/gpControl/",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_resolution() {
        let cases = [
            (CameraModel::Hero, None),
            (CameraModel::Hero2, None),
            (CameraModel::Hero3, Some(Generation::Legacy)),
            (CameraModel::Hero3Plus, Some(Generation::Legacy)),
            (CameraModel::Hero4, Some(Generation::Modern)),
            (CameraModel::Hero5, Some(Generation::Modern)),
            (CameraModel::Hero6, Some(Generation::Modern)),
            (CameraModel::Hero7, Some(Generation::Modern)),
        ];
        for (model, expected) in cases {
            assert_eq!(model.generation(), expected, "model {model}");
        }
    }

    #[test]
    fn url_prefixes() {
        assert_eq!(Generation::Legacy.url_prefix(), "/camera/");
        assert_eq!(Generation::Modern.url_prefix(), "/gp/gpControl/");
    }

    #[test]
    fn model_parses_from_kebab_case() {
        assert_eq!("hero5".parse::<CameraModel>().ok(), Some(CameraModel::Hero5));
        assert_eq!(
            "hero3-plus".parse::<CameraModel>().ok(),
            Some(CameraModel::Hero3Plus)
        );
        assert_eq!(
            "hero3+".parse::<CameraModel>().ok(),
            Some(CameraModel::Hero3Plus)
        );
        assert!("hero9".parse::<CameraModel>().is_err());
    }
}
