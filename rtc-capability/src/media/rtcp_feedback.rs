use std::fmt;

/// Transport-wide congestion control feedback type
pub const TYPE_RTCP_FB_TRANSPORT_CC: &str = "transport-cc";

/// Google REMB (Receiver Estimated Maximum Bitrate) feedback type
pub const TYPE_RTCP_FB_GOOG_REMB: &str = "goog-remb";

/// Acknowledgment feedback type
pub const TYPE_RTCP_FB_ACK: &str = "ack";

/// Codec Control Message feedback type
pub const TYPE_RTCP_FB_CCM: &str = "ccm";

/// Negative Acknowledgment feedback type
pub const TYPE_RTCP_FB_NACK: &str = "nack";

/// RTCP feedback mechanism advertised for a media kind.
///
/// Used to signal support for specific RTCP feedback mechanisms such as NACK, PLI, FIR, etc.
/// Within a profile the entries are kept in preference order.
///
/// ## Specifications
///
/// * [RFC 4585](https://datatracker.ietf.org/doc/html/rfc4585)
/// * [ORTC](https://draft.ortc.org/#dom-rtcrtcpfeedback)
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct RTCPFeedback {
    /// The type of feedback mechanism.
    ///
    /// Valid values: `ack`, `ccm`, `nack`, `goog-remb`, `transport-cc`
    pub typ: String,

    /// Additional parameter specific to the feedback type.
    ///
    /// For example: `type="nack" parameter="pli"` indicates Picture Loss Indicator packets.
    pub parameter: String,
}

impl RTCPFeedback {
    pub fn new(typ: &str, parameter: &str) -> Self {
        RTCPFeedback {
            typ: typ.to_owned(),
            parameter: parameter.to_owned(),
        }
    }

    /// Whether `typ` is one of the feedback types this crate knows about.
    pub fn is_known_type(&self) -> bool {
        matches!(
            self.typ.as_str(),
            TYPE_RTCP_FB_TRANSPORT_CC
                | TYPE_RTCP_FB_GOOG_REMB
                | TYPE_RTCP_FB_ACK
                | TYPE_RTCP_FB_CCM
                | TYPE_RTCP_FB_NACK
        )
    }
}

/// Formats as the value part of an `a=rtcp-fb` attribute, e.g. `nack pli`.
impl fmt::Display for RTCPFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.parameter.is_empty() {
            write!(f, "{}", self.typ)
        } else {
            write!(f, "{} {}", self.typ, self.parameter)
        }
    }
}

/// Order-preserving intersection: entries of `a` that also appear in `b`.
pub(crate) fn rtcp_feedback_intersection(
    a: &[RTCPFeedback],
    b: &[RTCPFeedback],
) -> Vec<RTCPFeedback> {
    let mut out = vec![];
    for a_feedback in a {
        for b_feedback in b {
            if a_feedback.typ == b_feedback.typ && a_feedback.parameter == b_feedback.parameter {
                out.push(a_feedback.clone());
                break;
            }
        }
    }

    out
}
