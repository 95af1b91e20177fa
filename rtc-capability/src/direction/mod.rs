//! Per-direction capability profiles.
//!
//! An SFU terminates two kinds of peer connection for every participant:
//!
//! - **Publisher**: the client sends media, the server receives it. The server
//!   dials this connection, so it can demand strict behaviour from the client
//!   and advertises every extension it may make use of when forwarding.
//! - **Subscriber**: the server sends media, the client receives it. The
//!   client is remote and may not ACK reliably, and the bandwidth estimation
//!   strategy decides which congestion control extension and feedback are
//!   offered.
//!
//! # Examples
//!
//! ```
//! use rtc_capability::congestion_control::CongestionControlStrategy;
//! use rtc_capability::direction::DirectionProfile;
//! use rtc_capability::media::RtpHeaderExtension;
//!
//! let subscriber = DirectionProfile::subscriber(false, CongestionControlStrategy::SendSide);
//! assert!(!subscriber.strict_acks());
//! assert_eq!(
//!     subscriber.video().header_extensions().last(),
//!     Some(&RtpHeaderExtension::TransportCc),
//! );
//! ```

#[cfg(test)]
mod direction_test;

pub(crate) mod policy;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::congestion_control::{CongestionControlStrategy, select_congestion_strategy};
use crate::media::rtcp_feedback::rtcp_feedback_intersection;
use crate::media::{RTCPFeedback, RtpCodecKind, RtpHeaderExtension, UNSPECIFIED_STR};
use policy::*;

/// Transport direction, seen from the server.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Unspecified,

    /// The client publishes media to the server.
    #[serde(rename = "publisher")]
    Publisher,

    /// The server forwards media to the client.
    #[serde(rename = "subscriber")]
    Subscriber,
}

const DIRECTION_PUBLISHER_STR: &str = "publisher";
const DIRECTION_SUBSCRIBER_STR: &str = "subscriber";

impl From<&str> for Direction {
    fn from(raw: &str) -> Self {
        match raw {
            DIRECTION_PUBLISHER_STR => Direction::Publisher,
            DIRECTION_SUBSCRIBER_STR => Direction::Subscriber,
            _ => Direction::Unspecified,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Publisher => DIRECTION_PUBLISHER_STR,
            Direction::Subscriber => DIRECTION_SUBSCRIBER_STR,
            Direction::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

/// Ordered header extensions and RTCP feedback for one media kind.
///
/// Both sequences keep insertion order and contain no duplicates.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MediaKindProfile {
    header_extensions: Vec<RtpHeaderExtension>,
    rtcp_feedback: Vec<RTCPFeedback>,
}

impl MediaKindProfile {
    pub(crate) fn from_tables(
        header_extensions: &[RtpHeaderExtension],
        rtcp_feedback: &[FeedbackRow],
    ) -> Self {
        MediaKindProfile {
            header_extensions: header_extensions.to_vec(),
            rtcp_feedback: rtcp_feedback
                .iter()
                .map(|(typ, parameter)| RTCPFeedback::new(typ, parameter))
                .collect(),
        }
    }

    /// Header extensions in advertisement order.
    pub fn header_extensions(&self) -> &[RtpHeaderExtension] {
        &self.header_extensions
    }

    /// RTCP feedback entries in preference order.
    pub fn rtcp_feedback(&self) -> &[RTCPFeedback] {
        &self.rtcp_feedback
    }

    pub fn has_header_extension(&self, ext: RtpHeaderExtension) -> bool {
        self.header_extensions.contains(&ext)
    }

    pub fn has_rtcp_feedback(&self, typ: &str, parameter: &str) -> bool {
        self.rtcp_feedback
            .iter()
            .any(|fb| fb.typ == typ && fb.parameter == parameter)
    }

    /// Returns a new profile with `ext` and `feedback` appended at the end.
    ///
    /// An entry already present is not appended a second time.
    pub(crate) fn with_appended(mut self, ext: RtpHeaderExtension, feedback: RTCPFeedback) -> Self {
        if !self.header_extensions.contains(&ext) {
            self.header_extensions.push(ext);
        }
        if !self.rtcp_feedback.contains(&feedback) {
            self.rtcp_feedback.push(feedback);
        }
        self
    }

    pub(crate) fn without(mut self, ext: RtpHeaderExtension, feedback: &RTCPFeedback) -> Self {
        self.header_extensions.retain(|e| *e != ext);
        self.rtcp_feedback.retain(|fb| fb != feedback);
        self
    }

    /// Header extensions from this profile that the remote side also offered.
    ///
    /// The result keeps the local order. Remote URIs that do not map to a
    /// known [`RtpHeaderExtension`] are ignored.
    pub fn negotiate_header_extensions<'a, I>(&self, remote_uris: I) -> Vec<RtpHeaderExtension>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let remote: Vec<RtpHeaderExtension> = remote_uris
            .into_iter()
            .map(RtpHeaderExtension::from)
            .filter(|ext| *ext != RtpHeaderExtension::Unspecified)
            .collect();

        self.header_extensions
            .iter()
            .filter(|ext| remote.contains(ext))
            .copied()
            .collect()
    }

    /// RTCP feedback from this profile that the remote side also offered, in local order.
    ///
    /// Remote entries of an unknown feedback type are ignored.
    pub fn negotiate_rtcp_feedback(&self, remote: &[RTCPFeedback]) -> Vec<RTCPFeedback> {
        let remote: Vec<RTCPFeedback> = remote
            .iter()
            .filter(|fb| fb.is_known_type())
            .cloned()
            .collect();

        rtcp_feedback_intersection(&self.rtcp_feedback, &remote)
    }
}

/// Complete capability profile for one transport direction.
///
/// Built from the fixed tables in the `policy` module; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionProfile {
    direction: Direction,
    audio: MediaKindProfile,
    video: MediaKindProfile,
    strict_acks: bool,
}

impl DirectionProfile {
    /// Profile for connections on which the server receives media.
    ///
    /// Not configurable: strict ACKs are always on and every extension the
    /// server may forward is advertised.
    pub fn publisher() -> Self {
        DirectionProfile {
            direction: Direction::Publisher,
            audio: MediaKindProfile::from_tables(
                PUBLISHER_AUDIO_HEADER_EXTENSIONS,
                PUBLISHER_AUDIO_RTCP_FEEDBACK,
            ),
            video: MediaKindProfile::from_tables(
                PUBLISHER_VIDEO_HEADER_EXTENSIONS,
                PUBLISHER_VIDEO_RTCP_FEEDBACK,
            ),
            strict_acks: PUBLISHER_STRICT_ACKS,
        }
    }

    /// Profile for connections on which the server sends media.
    ///
    /// `strict_acks` is taken as given. The video profile is completed by
    /// `strategy`, which appends exactly one congestion control
    /// extension/feedback pair.
    pub fn subscriber(strict_acks: bool, strategy: CongestionControlStrategy) -> Self {
        let video = MediaKindProfile::from_tables(
            SUBSCRIBER_VIDEO_HEADER_EXTENSIONS,
            SUBSCRIBER_VIDEO_RTCP_FEEDBACK,
        );

        DirectionProfile {
            direction: Direction::Subscriber,
            audio: MediaKindProfile::from_tables(
                SUBSCRIBER_AUDIO_HEADER_EXTENSIONS,
                SUBSCRIBER_AUDIO_RTCP_FEEDBACK,
            ),
            video: select_congestion_strategy(video, strategy),
            strict_acks,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn audio(&self) -> &MediaKindProfile {
        &self.audio
    }

    pub fn video(&self) -> &MediaKindProfile {
        &self.video
    }

    /// Profile for `kind`, or `None` for [`RtpCodecKind::Unspecified`].
    pub fn kind(&self, kind: RtpCodecKind) -> Option<&MediaKindProfile> {
        match kind {
            RtpCodecKind::Audio => Some(&self.audio),
            RtpCodecKind::Video => Some(&self.video),
            RtpCodecKind::Unspecified => None,
        }
    }

    /// Whether the remote peer is expected to acknowledge reliably.
    pub fn strict_acks(&self) -> bool {
        self.strict_acks
    }
}
