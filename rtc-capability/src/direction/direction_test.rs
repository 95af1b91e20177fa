use super::*;
use crate::media::rtcp_feedback::{
    TYPE_RTCP_FB_CCM, TYPE_RTCP_FB_GOOG_REMB, TYPE_RTCP_FB_NACK, TYPE_RTCP_FB_TRANSPORT_CC,
};

fn feedback(rows: &[(&str, &str)]) -> Vec<RTCPFeedback> {
    rows.iter()
        .map(|(typ, parameter)| RTCPFeedback::new(typ, parameter))
        .collect()
}

#[test]
fn test_direction_string() {
    let tests = vec![
        ("publisher", Direction::Publisher),
        ("subscriber", Direction::Subscriber),
        ("sendrecv", Direction::Unspecified),
    ];

    for (raw, expected) in tests {
        assert_eq!(Direction::from(raw), expected);
    }
    assert_eq!(Direction::Publisher.to_string(), "publisher");
    assert_eq!(Direction::Subscriber.to_string(), "subscriber");
}

#[test]
fn test_publisher_profile() {
    let publisher = DirectionProfile::publisher();

    assert_eq!(publisher.direction(), Direction::Publisher);
    assert!(publisher.strict_acks());

    assert_eq!(
        publisher.audio().header_extensions(),
        &[
            RtpHeaderExtension::SdesMid,
            RtpHeaderExtension::SdesRtpStreamId,
            RtpHeaderExtension::AudioLevel,
        ]
    );
    assert_eq!(
        publisher.video().header_extensions(),
        &[
            RtpHeaderExtension::SdesMid,
            RtpHeaderExtension::SdesRtpStreamId,
            RtpHeaderExtension::TransportCc,
            RtpHeaderExtension::FrameMarking,
            RtpHeaderExtension::DependencyDescriptor,
            RtpHeaderExtension::SdesRepairedRtpStreamId,
        ]
    );
    assert_eq!(
        publisher.audio().rtcp_feedback(),
        feedback(&[(TYPE_RTCP_FB_NACK, "")]).as_slice()
    );
    assert_eq!(
        publisher.video().rtcp_feedback(),
        feedback(&[
            (TYPE_RTCP_FB_TRANSPORT_CC, ""),
            (TYPE_RTCP_FB_CCM, "fir"),
            (TYPE_RTCP_FB_NACK, ""),
            (TYPE_RTCP_FB_NACK, "pli"),
        ])
        .as_slice()
    );
}

#[test]
fn test_subscriber_profile() {
    let tests = vec![
        (
            true,
            CongestionControlStrategy::SendSide,
            RtpHeaderExtension::TransportCc,
            TYPE_RTCP_FB_TRANSPORT_CC,
        ),
        (
            false,
            CongestionControlStrategy::SendSide,
            RtpHeaderExtension::TransportCc,
            TYPE_RTCP_FB_TRANSPORT_CC,
        ),
        (
            true,
            CongestionControlStrategy::ReceiverSide,
            RtpHeaderExtension::AbsSendTime,
            TYPE_RTCP_FB_GOOG_REMB,
        ),
        (
            false,
            CongestionControlStrategy::ReceiverSide,
            RtpHeaderExtension::AbsSendTime,
            TYPE_RTCP_FB_GOOG_REMB,
        ),
    ];

    for (strict_acks, strategy, expected_ext, expected_fb) in tests {
        let subscriber = DirectionProfile::subscriber(strict_acks, strategy);

        assert_eq!(subscriber.direction(), Direction::Subscriber);
        assert_eq!(subscriber.strict_acks(), strict_acks);
        assert!(subscriber.audio().header_extensions().is_empty());
        assert_eq!(
            subscriber.audio().rtcp_feedback(),
            feedback(&[(TYPE_RTCP_FB_NACK, "")]).as_slice()
        );
        assert_eq!(
            subscriber.video().header_extensions(),
            &[RtpHeaderExtension::DependencyDescriptor, expected_ext],
            "{strategy}"
        );
        assert_eq!(
            subscriber.video().rtcp_feedback(),
            feedback(&[
                (TYPE_RTCP_FB_CCM, "fir"),
                (TYPE_RTCP_FB_NACK, ""),
                (TYPE_RTCP_FB_NACK, "pli"),
                (expected_fb, ""),
            ])
            .as_slice(),
            "{strategy}"
        );
    }
}

#[test]
fn test_subscriber_has_exactly_one_congestion_extension() {
    for strategy in [
        CongestionControlStrategy::SendSide,
        CongestionControlStrategy::ReceiverSide,
    ] {
        let video = DirectionProfile::subscriber(false, strategy).video().clone();
        let count = video
            .header_extensions()
            .iter()
            .filter(|ext| {
                matches!(
                    ext,
                    RtpHeaderExtension::TransportCc | RtpHeaderExtension::AbsSendTime
                )
            })
            .count();
        assert_eq!(count, 1, "{strategy}");
    }
}

#[test]
fn test_abs_capture_time_not_enabled() {
    let profiles = [
        DirectionProfile::publisher(),
        DirectionProfile::subscriber(true, CongestionControlStrategy::SendSide),
        DirectionProfile::subscriber(true, CongestionControlStrategy::ReceiverSide),
    ];

    for profile in &profiles {
        assert!(!profile.audio().has_header_extension(RtpHeaderExtension::AbsCaptureTime));
        assert!(!profile.video().has_header_extension(RtpHeaderExtension::AbsCaptureTime));
    }
}

#[test]
fn test_profile_by_kind() {
    let publisher = DirectionProfile::publisher();

    assert_eq!(publisher.kind(RtpCodecKind::Audio), Some(publisher.audio()));
    assert_eq!(publisher.kind(RtpCodecKind::Video), Some(publisher.video()));
    assert_eq!(publisher.kind(RtpCodecKind::Unspecified), None);
}

#[test]
fn test_negotiate_header_extensions() {
    let publisher = DirectionProfile::publisher();

    // remote order and unknown URIs must not leak into the result
    let remote = vec![
        "urn:ietf:params:rtp-hdrext:sdes:repaired-rtp-stream-id",
        "urn:3gpp:video-orientation",
        "urn:ietf:params:rtp-hdrext:sdes:mid",
        "http://www.ietf.org/id/draft-holmer-rmcat-transport-wide-cc-extensions-01",
    ];

    assert_eq!(
        publisher.video().negotiate_header_extensions(remote),
        vec![
            RtpHeaderExtension::SdesMid,
            RtpHeaderExtension::TransportCc,
            RtpHeaderExtension::SdesRepairedRtpStreamId,
        ]
    );
    assert!(
        publisher
            .audio()
            .negotiate_header_extensions(Vec::<&str>::new())
            .is_empty()
    );
}

#[test]
fn test_negotiate_rtcp_feedback() {
    let subscriber = DirectionProfile::subscriber(true, CongestionControlStrategy::ReceiverSide);
    let remote = feedback(&[
        (TYPE_RTCP_FB_TRANSPORT_CC, ""),
        (TYPE_RTCP_FB_GOOG_REMB, ""),
        (TYPE_RTCP_FB_NACK, "pli"),
    ]);

    assert_eq!(
        subscriber.video().negotiate_rtcp_feedback(&remote),
        feedback(&[(TYPE_RTCP_FB_NACK, "pli"), (TYPE_RTCP_FB_GOOG_REMB, "")])
    );
}

#[test]
fn test_negotiate_rtcp_feedback_ignores_unknown_types() {
    let publisher = DirectionProfile::publisher();
    let remote = feedback(&[
        ("trr-int", "100"),
        (TYPE_RTCP_FB_NACK, ""),
        ("x-vendor-fb", "pli"),
    ]);

    assert_eq!(
        publisher.audio().negotiate_rtcp_feedback(&remote),
        feedback(&[(TYPE_RTCP_FB_NACK, "")])
    );
    assert!(
        publisher
            .video()
            .negotiate_rtcp_feedback(&feedback(&[("trr-int", "100")]))
            .is_empty()
    );
}
