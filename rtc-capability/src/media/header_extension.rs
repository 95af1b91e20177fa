use std::fmt;

use serde::{Deserialize, Serialize};

use super::UNSPECIFIED_STR;

/// `urn:ietf:params:rtp-hdrext:sdes:mid`
pub const SDES_MID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:mid";
/// `urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id`
pub const SDES_RTP_STREAM_ID_URI: &str = "urn:ietf:params:rtp-hdrext:sdes:rtp-stream-id";
/// `urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id`
pub const SDES_REPAIR_RTP_STREAM_ID_URI: &str =
    "urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id";
/// `urn:ietf:params:rtp-hdrext:ssrc-audio-level`
pub const AUDIO_LEVEL_URI: &str = "urn:ietf:params:rtp-hdrext:ssrc-audio-level";
/// Transport-wide sequence numbers for sender-side bandwidth estimation.
pub const TRANSPORT_CC_URI: &str =
    "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01";
/// `urn:ietf:params:rtp-hdrext:framemarking`
pub const FRAME_MARKING_URI: &str = "urn:ietf:params:rtp-hdrext:framemarking";
/// AV1 dependency descriptor, also used for SVC layer signalling of VP9.
pub const DEPENDENCY_DESCRIPTOR_URI: &str =
    "https://aomediacodec.github.io/av1-rtp-spec/#dependency-descriptor-rtp-header-extension";
/// Absolute send time, paired with REMB for receiver-side bandwidth estimation.
pub const ABS_SEND_TIME_URI: &str = "http://www.webrtc.org/experiments/rtp-hdrext/abs-send-time";
/// Absolute capture time. Known but not enabled in any policy table.
pub const ABS_CAPTURE_TIME_URI: &str =
    "http://www.webrtc.org/experiments/rtp-hdrext/abs-capture-time";

/// RTP header extensions the capability profiles can advertise.
///
/// `Display` yields the extension URI as it appears in an `a=extmap` line,
/// and `From<&str>` maps a URI back, with unknown URIs becoming
/// [`RtpHeaderExtension::Unspecified`].
///
/// ```
/// use rtc_capability::media::RtpHeaderExtension;
///
/// let ext: RtpHeaderExtension = "urn:ietf:params:rtp-hdrext:sdes:mid".into();
/// assert_eq!(ext, RtpHeaderExtension::SdesMid);
/// assert_eq!(ext.to_string(), "urn:ietf:params:rtp-hdrext:sdes:mid");
/// ```
///
/// ## Specifications
///
/// * [RFC 8285](https://datatracker.ietf.org/doc/html/rfc8285)
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RtpHeaderExtension {
    /// Unknown URI
    #[default]
    Unspecified,

    /// Media identification ([RFC 8843](https://datatracker.ietf.org/doc/html/rfc8843))
    SdesMid,

    /// RTP stream id for simulcast layers ([RFC 8852](https://datatracker.ietf.org/doc/html/rfc8852))
    SdesRtpStreamId,

    /// Repaired RTP stream id for RTX of simulcast layers
    SdesRepairedRtpStreamId,

    /// Client-to-mixer audio level ([RFC 6464](https://datatracker.ietf.org/doc/html/rfc6464))
    AudioLevel,

    /// Transport-wide congestion control sequence number
    TransportCc,

    /// Frame marking for selective forwarding
    FrameMarking,

    /// AV1 dependency descriptor
    DependencyDescriptor,

    /// Absolute send time
    AbsSendTime,

    /// Absolute capture time
    AbsCaptureTime,
}

impl RtpHeaderExtension {
    /// The extension URI, or `"Unspecified"`.
    pub fn uri(&self) -> &'static str {
        match *self {
            RtpHeaderExtension::SdesMid => SDES_MID_URI,
            RtpHeaderExtension::SdesRtpStreamId => SDES_RTP_STREAM_ID_URI,
            RtpHeaderExtension::SdesRepairedRtpStreamId => SDES_REPAIR_RTP_STREAM_ID_URI,
            RtpHeaderExtension::AudioLevel => AUDIO_LEVEL_URI,
            RtpHeaderExtension::TransportCc => TRANSPORT_CC_URI,
            RtpHeaderExtension::FrameMarking => FRAME_MARKING_URI,
            RtpHeaderExtension::DependencyDescriptor => DEPENDENCY_DESCRIPTOR_URI,
            RtpHeaderExtension::AbsSendTime => ABS_SEND_TIME_URI,
            RtpHeaderExtension::AbsCaptureTime => ABS_CAPTURE_TIME_URI,
            RtpHeaderExtension::Unspecified => UNSPECIFIED_STR,
        }
    }
}

impl From<&str> for RtpHeaderExtension {
    fn from(raw: &str) -> Self {
        match raw {
            SDES_MID_URI => RtpHeaderExtension::SdesMid,
            SDES_RTP_STREAM_ID_URI => RtpHeaderExtension::SdesRtpStreamId,
            SDES_REPAIR_RTP_STREAM_ID_URI => RtpHeaderExtension::SdesRepairedRtpStreamId,
            AUDIO_LEVEL_URI => RtpHeaderExtension::AudioLevel,
            TRANSPORT_CC_URI => RtpHeaderExtension::TransportCc,
            FRAME_MARKING_URI => RtpHeaderExtension::FrameMarking,
            DEPENDENCY_DESCRIPTOR_URI => RtpHeaderExtension::DependencyDescriptor,
            ABS_SEND_TIME_URI => RtpHeaderExtension::AbsSendTime,
            ABS_CAPTURE_TIME_URI => RtpHeaderExtension::AbsCaptureTime,
            _ => RtpHeaderExtension::Unspecified,
        }
    }
}

impl fmt::Display for RtpHeaderExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}
