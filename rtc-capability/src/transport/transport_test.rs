use super::*;
use crate::settings::{FilterSettings, PortRange, TransportSettings, TurnServer};

fn turn(protocol: &str, port: u16) -> TurnServer {
    TurnServer {
        host: "turn.example.org".to_owned(),
        port,
        protocol: protocol.to_owned(),
        username: "user".to_owned(),
        credential: "secret".to_owned(),
    }
}

#[test]
fn test_transport_config_defaults() {
    let config = TransportConfig::new(&TransportSettings::default(), false).unwrap();
    let s = config.setting_engine();

    assert_eq!(
        s.timeout().ice_disconnected_timeout,
        Some(Duration::from_secs(10))
    );
    assert_eq!(s.timeout().ice_failed_timeout, Some(Duration::from_secs(5)));
    assert_eq!(
        s.timeout().ice_keepalive_interval,
        Some(Duration::from_secs(2))
    );
    assert!(!s.candidates().ice_lite);
    assert_eq!(s.candidates().multicast_dns_mode, MulticastDnsMode::Disabled);
    assert!(!s.candidates().include_loopback_candidate);
    assert!(s.candidates().nat_1to1_ips.is_empty());
    assert!(s.candidates().interface_filter.is_none());
    assert!(s.candidates().ip_filter.is_none());
    assert_eq!(s.ports().udp_mux_ports, None);
    assert_eq!(s.ports().ephemeral_udp_port_range, None);
    assert_eq!(s.ports().tcp_mux_port, None);
    assert_eq!(
        s.network_types(),
        vec![NetworkType::Udp4, NetworkType::Udp6]
    );
    assert!(config.ice_servers().is_empty());
}

#[test]
fn test_transport_config_candidate_options() {
    let settings = TransportSettings {
        use_ice_lite: true,
        use_mdns: true,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let candidates = config.setting_engine().candidates();
    assert!(candidates.ice_lite);
    assert_eq!(candidates.multicast_dns_mode, MulticastDnsMode::QueryOnly);
    assert!(!candidates.include_loopback_candidate);

    // development mode or the explicit flag allow loopback candidates
    let config = TransportConfig::new(&TransportSettings::default(), true).unwrap();
    assert!(config.setting_engine().candidates().include_loopback_candidate);

    let settings = TransportSettings {
        enable_loopback_candidate: true,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    assert!(config.setting_engine().candidates().include_loopback_candidate);
}

#[test]
fn test_transport_config_node_ip() {
    let settings = TransportSettings {
        node_ip: "203.0.113.7".to_owned(),
        use_external_ip: true,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let candidates = config.setting_engine().candidates();
    assert_eq!(candidates.nat_1to1_ips, vec!["203.0.113.7".to_owned()]);
    assert_eq!(candidates.nat_1to1_ip_candidate_type, NatCandidateType::Host);

    // a node IP alone is not advertised as a NAT mapping
    let settings = TransportSettings {
        node_ip: "203.0.113.7".to_owned(),
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    assert!(config.setting_engine().candidates().nat_1to1_ips.is_empty());
}

#[test]
fn test_transport_config_ports() {
    let tests = vec![
        (PortRange { start: 7882, end: 0 }, Some((7882, 7882))),
        (PortRange { start: 7882, end: 7890 }, Some((7882, 7890))),
        (PortRange { start: 0, end: 0 }, None),
    ];
    for (udp_port, expected) in tests {
        let settings = TransportSettings {
            udp_port,
            ..Default::default()
        };
        let config = TransportConfig::new(&settings, false).unwrap();
        assert_eq!(
            config.setting_engine().ports().udp_mux_ports,
            expected,
            "{udp_port:?}"
        );
    }

    let settings = TransportSettings {
        ice_port_range_start: 50000,
        ice_port_range_end: 60000,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    assert_eq!(
        config.setting_engine().ports().ephemeral_udp_port_range,
        Some((50000, 60000))
    );

    // a mux port takes precedence over the ephemeral range
    let settings = TransportSettings {
        udp_port: PortRange { start: 7882, end: 0 },
        ice_port_range_start: 50000,
        ice_port_range_end: 60000,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    assert_eq!(config.setting_engine().ports().ephemeral_udp_port_range, None);
}

#[test]
fn test_transport_config_tcp() {
    let settings = TransportSettings {
        tcp_port: 7881,
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let s = config.setting_engine();
    assert_eq!(s.ports().tcp_mux_port, Some(7881));
    assert!(s.network_types().contains(&NetworkType::Tcp4));
    assert_eq!(s.network_types().len(), 4);
}

#[test]
fn test_transport_config_filters() {
    let settings = TransportSettings {
        interfaces: FilterSettings {
            includes: vec![],
            excludes: vec!["docker0".to_owned()],
        },
        ips: FilterSettings {
            includes: vec!["10.0.0.0/8".to_owned(), "192.168.1.20".to_owned()],
            excludes: vec!["10.1.0.0/16".to_owned()],
        },
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let candidates = config.setting_engine().candidates();

    let interfaces = candidates.interface_filter.as_ref().unwrap();
    assert!(!interfaces.allows("docker0"));
    assert!(interfaces.allows("eth0"));

    let ips = candidates.ip_filter.as_ref().unwrap();
    assert!(ips.allows(&"10.2.0.1".parse().unwrap()));
    assert!(ips.allows(&"192.168.1.20".parse().unwrap()));
    assert!(!ips.allows(&"192.168.1.21".parse().unwrap()));
    assert!(!ips.allows(&"10.1.0.1".parse().unwrap()));
}

#[test]
fn test_transport_config_ice_servers() {
    let settings = TransportSettings {
        stun_servers: vec![
            "stun.l.google.com:19302".to_owned(),
            "stun:stun1.l.google.com:19302".to_owned(),
        ],
        turn_servers: vec![turn("", 0), turn("tcp", 3479), turn("TLS", 0)],
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let servers = config.ice_servers();
    assert_eq!(servers.len(), 4);

    assert_eq!(
        servers[0].urls,
        vec![
            "stun:stun.l.google.com:19302".to_owned(),
            "stun:stun1.l.google.com:19302".to_owned(),
        ]
    );
    assert!(servers[0].username.is_empty());

    assert_eq!(
        servers[1].urls,
        vec!["turn:turn.example.org:3478?transport=udp".to_owned()]
    );
    assert_eq!(
        servers[2].urls,
        vec!["turn:turn.example.org:3479?transport=tcp".to_owned()]
    );
    assert_eq!(
        servers[3].urls,
        vec!["turns:turn.example.org:5349?transport=tcp".to_owned()]
    );
    assert_eq!(servers[3].username, "user");
    assert_eq!(servers[3].credential, "secret");
}

#[test]
fn test_transport_config_ipv6_ice_servers() {
    let settings = TransportSettings {
        stun_servers: vec!["2001:db8::1".to_owned(), "[2001:db8::2]:3479".to_owned()],
        turn_servers: vec![TurnServer {
            host: "2001:db8::3".to_owned(),
            ..turn("udp", 0)
        }],
        ..Default::default()
    };
    let config = TransportConfig::new(&settings, false).unwrap();
    let servers = config.ice_servers();

    assert_eq!(
        servers[0].urls,
        vec![
            "stun:[2001:db8::1]".to_owned(),
            "stun:[2001:db8::2]:3479".to_owned(),
        ]
    );
    assert_eq!(
        servers[1].urls,
        vec!["turn:[2001:db8::3]:3478?transport=udp".to_owned()]
    );

    let stun = servers[0].validate().unwrap();
    assert_eq!((stun[0].host.as_str(), stun[0].port), ("2001:db8::1", 3478));
    assert_eq!((stun[1].host.as_str(), stun[1].port), ("2001:db8::2", 3479));
    let relay = servers[1].validate().unwrap();
    assert_eq!((relay[0].host.as_str(), relay[0].port), ("2001:db8::3", 3478));
}

#[test]
fn test_transport_config_errors() {
    let tests: Vec<(TransportSettings, Error)> = vec![
        (
            TransportSettings {
                udp_port: PortRange {
                    start: 7890,
                    end: 7882,
                },
                ..Default::default()
            },
            Error::ErrInvalidPortRange {
                start: 7890,
                end: 7882,
            },
        ),
        (
            TransportSettings {
                udp_port: PortRange { start: 0, end: 7882 },
                ..Default::default()
            },
            Error::ErrIncompletePortRange,
        ),
        (
            TransportSettings {
                ice_port_range_start: 50000,
                ..Default::default()
            },
            Error::ErrIncompletePortRange,
        ),
        (
            TransportSettings {
                ice_port_range_start: 60000,
                ice_port_range_end: 50000,
                ..Default::default()
            },
            Error::ErrInvalidPortRange {
                start: 60000,
                end: 50000,
            },
        ),
        (
            TransportSettings {
                node_ip: "not-an-ip".to_owned(),
                ..Default::default()
            },
            Error::ErrInvalidNodeIp("not-an-ip".to_owned()),
        ),
        (
            TransportSettings {
                use_external_ip: true,
                ..Default::default()
            },
            Error::ErrExternalIpWithoutNodeIp,
        ),
        (
            TransportSettings {
                ips: FilterSettings {
                    includes: vec!["10.0.0.0/33".to_owned()],
                    excludes: vec![],
                },
                ..Default::default()
            },
            Error::ErrInvalidIpFilter("10.0.0.0/33".to_owned()),
        ),
        (
            TransportSettings {
                stun_servers: vec!["stun.example.org:notaport".to_owned()],
                ..Default::default()
            },
            Error::ErrInvalidIceServerUrl("stun:stun.example.org:notaport".to_owned()),
        ),
        (
            TransportSettings {
                stun_servers: vec!["stun:2001:db8::1".to_owned()],
                ..Default::default()
            },
            Error::ErrInvalidIceServerUrl("stun:2001:db8::1".to_owned()),
        ),
        (
            TransportSettings {
                turn_servers: vec![TurnServer {
                    host: "turn.example.org:3478".to_owned(),
                    ..turn("udp", 3478)
                }],
                ..Default::default()
            },
            Error::ErrInvalidIceServerUrl(
                "turn:turn.example.org:3478:3478?transport=udp".to_owned(),
            ),
        ),
        (
            TransportSettings {
                turn_servers: vec![TurnServer {
                    host: String::new(),
                    ..turn("udp", 3478)
                }],
                ..Default::default()
            },
            Error::ErrTurnServerMissingHost,
        ),
        (
            TransportSettings {
                turn_servers: vec![turn("sctp", 3478)],
                ..Default::default()
            },
            Error::ErrUnsupportedTurnProtocol("sctp".to_owned()),
        ),
        (
            TransportSettings {
                turn_servers: vec![TurnServer {
                    credential: String::new(),
                    ..turn("udp", 3478)
                }],
                ..Default::default()
            },
            Error::ErrTurnServerMissingCredentials(
                "turn:turn.example.org:3478?transport=udp".to_owned(),
            ),
        ),
    ];

    for (settings, expected) in tests {
        assert_eq!(
            TransportConfig::new(&settings, false).unwrap_err(),
            expected,
            "{settings:?}"
        );
    }
}
