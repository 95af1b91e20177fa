//! Fixed extension and feedback tables for each direction.
//!
//! Order matters: it is the order the extensions and feedback entries are
//! advertised in, and consumers pick the first entry they support.

use crate::media::RtpHeaderExtension;
use crate::media::rtcp_feedback::{TYPE_RTCP_FB_CCM, TYPE_RTCP_FB_NACK, TYPE_RTCP_FB_TRANSPORT_CC};

/// `(type, parameter)` rows of an RTCP feedback table.
pub(crate) type FeedbackRow = (&'static str, &'static str);

// abs-capture-time is intentionally absent from every table until it is enabled.

pub(crate) const PUBLISHER_AUDIO_HEADER_EXTENSIONS: &[RtpHeaderExtension] = &[
    RtpHeaderExtension::SdesMid,
    RtpHeaderExtension::SdesRtpStreamId,
    RtpHeaderExtension::AudioLevel,
];

pub(crate) const PUBLISHER_VIDEO_HEADER_EXTENSIONS: &[RtpHeaderExtension] = &[
    RtpHeaderExtension::SdesMid,
    RtpHeaderExtension::SdesRtpStreamId,
    RtpHeaderExtension::TransportCc,
    RtpHeaderExtension::FrameMarking,
    RtpHeaderExtension::DependencyDescriptor,
    RtpHeaderExtension::SdesRepairedRtpStreamId,
];

pub(crate) const PUBLISHER_AUDIO_RTCP_FEEDBACK: &[FeedbackRow] = &[(TYPE_RTCP_FB_NACK, "")];

pub(crate) const PUBLISHER_VIDEO_RTCP_FEEDBACK: &[FeedbackRow] = &[
    (TYPE_RTCP_FB_TRANSPORT_CC, ""),
    (TYPE_RTCP_FB_CCM, "fir"),
    (TYPE_RTCP_FB_NACK, ""),
    (TYPE_RTCP_FB_NACK, "pli"),
];

/// Publishers are dialed by the server and always answer with an ACK.
pub(crate) const PUBLISHER_STRICT_ACKS: bool = true;

pub(crate) const SUBSCRIBER_AUDIO_HEADER_EXTENSIONS: &[RtpHeaderExtension] = &[];

/// Base table; the congestion control strategy appends its extension.
pub(crate) const SUBSCRIBER_VIDEO_HEADER_EXTENSIONS: &[RtpHeaderExtension] =
    &[RtpHeaderExtension::DependencyDescriptor];

pub(crate) const SUBSCRIBER_AUDIO_RTCP_FEEDBACK: &[FeedbackRow] = &[(TYPE_RTCP_FB_NACK, "")];

/// Base table; the congestion control strategy appends its feedback.
pub(crate) const SUBSCRIBER_VIDEO_RTCP_FEEDBACK: &[FeedbackRow] = &[
    (TYPE_RTCP_FB_CCM, "fir"),
    (TYPE_RTCP_FB_NACK, ""),
    (TYPE_RTCP_FB_NACK, "pli"),
];
