//! Media-kind, header-extension and RTCP feedback identifiers.
//!
//! These are the closed vocabularies the capability profiles are built from.
//! Raw strings coming from a remote description are mapped onto them at the
//! boundary; anything unrecognised becomes `Unspecified` and is dropped by the
//! negotiation helpers instead of travelling further.

pub mod header_extension;
pub mod rtcp_feedback;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use header_extension::RtpHeaderExtension;
pub use rtcp_feedback::RTCPFeedback;

pub(crate) const UNSPECIFIED_STR: &str = "Unspecified";

/// Media kind a profile applies to.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RtpCodecKind {
    /// Unspecified or unknown media kind
    #[default]
    Unspecified = 0,

    /// Audio media
    #[serde(rename = "audio")]
    Audio = 1,

    /// Video media
    #[serde(rename = "video")]
    Video = 2,
}

impl From<&str> for RtpCodecKind {
    fn from(raw: &str) -> Self {
        match raw {
            "audio" => RtpCodecKind::Audio,
            "video" => RtpCodecKind::Video,
            _ => RtpCodecKind::Unspecified,
        }
    }
}

impl fmt::Display for RtpCodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            RtpCodecKind::Audio => "audio",
            RtpCodecKind::Video => "video",
            RtpCodecKind::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}
