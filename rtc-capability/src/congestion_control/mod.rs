//! Bandwidth estimation strategy for the subscriber direction.
//!
//! The two strategies are mutually exclusive. Sender-side estimation needs
//! transport-wide sequence numbers and `transport-cc` feedback from the
//! client; receiver-side estimation needs absolute send time stamps so the
//! client can report an estimate back through REMB.


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::MediaKindProfile;
use crate::media::rtcp_feedback::{TYPE_RTCP_FB_GOOG_REMB, TYPE_RTCP_FB_TRANSPORT_CC};
use crate::media::{RTCPFeedback, RtpHeaderExtension};

/// Which side of a subscriber connection estimates the available bandwidth.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CongestionControlStrategy {
    /// The server estimates from transport-wide congestion control feedback.
    #[serde(rename = "send-side")]
    SendSide,

    /// The client estimates and reports with REMB.
    #[default]
    #[serde(rename = "receiver-side")]
    ReceiverSide,
}

const STRATEGY_SEND_SIDE_STR: &str = "send-side";
const STRATEGY_RECEIVER_SIDE_STR: &str = "receiver-side";

impl CongestionControlStrategy {
    pub fn from_send_side_bwe(use_send_side_bwe: bool) -> Self {
        if use_send_side_bwe {
            CongestionControlStrategy::SendSide
        } else {
            CongestionControlStrategy::ReceiverSide
        }
    }

    /// The header extension this strategy adds to the video profile.
    pub fn header_extension(&self) -> RtpHeaderExtension {
        match *self {
            CongestionControlStrategy::SendSide => RtpHeaderExtension::TransportCc,
            CongestionControlStrategy::ReceiverSide => RtpHeaderExtension::AbsSendTime,
        }
    }

    /// The RTCP feedback this strategy adds to the video profile.
    pub fn rtcp_feedback(&self) -> RTCPFeedback {
        match *self {
            CongestionControlStrategy::SendSide => RTCPFeedback::new(TYPE_RTCP_FB_TRANSPORT_CC, ""),
            CongestionControlStrategy::ReceiverSide => RTCPFeedback::new(TYPE_RTCP_FB_GOOG_REMB, ""),
        }
    }
}

impl fmt::Display for CongestionControlStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            CongestionControlStrategy::SendSide => STRATEGY_SEND_SIDE_STR,
            CongestionControlStrategy::ReceiverSide => STRATEGY_RECEIVER_SIDE_STR,
        };
        write!(f, "{s}")
    }
}

/// Appends the extension/feedback pair of `strategy` to `profile`.
///
/// Any pair belonging to the other strategy is removed first, so the result
/// always carries exactly one of them.
pub fn select_congestion_strategy(
    profile: MediaKindProfile,
    strategy: CongestionControlStrategy,
) -> MediaKindProfile {
    let other = match strategy {
        CongestionControlStrategy::SendSide => CongestionControlStrategy::ReceiverSide,
        CongestionControlStrategy::ReceiverSide => CongestionControlStrategy::SendSide,
    };

    profile
        .without(other.header_extension(), &other.rtcp_feedback())
        .with_appended(strategy.header_extension(), strategy.rtcp_feedback())
}
