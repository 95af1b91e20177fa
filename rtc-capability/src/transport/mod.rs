//! Base transport-engine configuration.
//!
//! [`TransportConfig::new`] validates the raw network settings and turns them
//! into a [`SettingEngine`] plus the list of ICE servers. It is the only place
//! in this crate that can fail: a bad port range, IP, CIDR or server URL
//! aborts construction and no configuration is returned.

#[cfg(test)]
mod transport_test;

pub mod ice_server;
pub mod network_type;
pub mod setting_engine;

use std::net::{IpAddr, Ipv6Addr};
use std::time::Duration;

use ipnet::IpNet;

use crate::error::{Error, Result};
use crate::settings::{FilterSettings, PortRange, TransportSettings, TurnServer};
use ice_server::{DEFAULT_PORT, DEFAULT_TLS_PORT, RTCIceServer};
use network_type::NetworkType;
use setting_engine::{
    InterfaceFilter, IpFilter, MulticastDnsMode, NatCandidateType, SettingEngine,
};

pub(crate) const ICE_DISCONNECTED_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const ICE_FAILED_TIMEOUT: Duration = Duration::from_secs(5);
pub(crate) const ICE_KEEPALIVE_INTERVAL: Duration = Duration::from_secs(2);

const TURN_PROTOCOL_UDP: &str = "udp";
const TURN_PROTOCOL_TCP: &str = "tcp";
const TURN_PROTOCOL_TLS: &str = "tls";

/// Validated transport-engine configuration shared by all connections.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub(crate) setting_engine: SettingEngine,
    pub(crate) ice_servers: Vec<RTCIceServer>,
}

impl TransportConfig {
    /// Builds the transport configuration from raw settings.
    ///
    /// `development` additionally allows loopback candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if any port range, node IP, IP filter or ICE server
    /// is malformed.
    pub fn new(settings: &TransportSettings, development: bool) -> Result<Self> {
        let mut setting_engine = SettingEngine::default();

        setting_engine.set_ice_timeouts(
            Some(ICE_DISCONNECTED_TIMEOUT),
            Some(ICE_FAILED_TIMEOUT),
            Some(ICE_KEEPALIVE_INTERVAL),
        );
        setting_engine.set_lite(settings.use_ice_lite);
        setting_engine.set_ice_multicast_dns_mode(if settings.use_mdns {
            MulticastDnsMode::QueryOnly
        } else {
            MulticastDnsMode::Disabled
        });
        setting_engine
            .set_include_loopback_candidate(development || settings.enable_loopback_candidate);

        if !settings.node_ip.is_empty() {
            let ip: IpAddr = settings
                .node_ip
                .parse()
                .map_err(|_| Error::ErrInvalidNodeIp(settings.node_ip.clone()))?;
            if settings.use_external_ip {
                setting_engine.set_nat_1to1_ips(vec![ip.to_string()], NatCandidateType::Host);
            }
        } else if settings.use_external_ip {
            return Err(Error::ErrExternalIpWithoutNodeIp);
        }

        if !settings.udp_port.is_unset() {
            let (start, end) = validate_udp_port(settings.udp_port)?;
            setting_engine.set_udp_mux_ports(start, end);
        } else if let Some((start, end)) =
            validate_port_range(settings.ice_port_range_start, settings.ice_port_range_end)?
        {
            setting_engine.set_ephemeral_udp_port_range(start, end);
        }

        let mut network_types = vec![NetworkType::Udp4, NetworkType::Udp6];
        if settings.tcp_port != 0 {
            setting_engine.set_tcp_mux_port(settings.tcp_port);
            network_types.extend([NetworkType::Tcp4, NetworkType::Tcp6]);
        }
        setting_engine.set_network_types(network_types);

        if !settings.interfaces.is_empty() {
            setting_engine.set_interface_filter(InterfaceFilter {
                includes: settings.interfaces.includes.clone(),
                excludes: settings.interfaces.excludes.clone(),
            });
        }
        if !settings.ips.is_empty() {
            setting_engine.set_ip_filter(parse_ip_filter(&settings.ips)?);
        }

        let ice_servers = ice_servers_from_settings(settings)?;

        log::debug!(
            "transport config: lite={} mdns={:?} udp_mux={:?} ephemeral={:?} tcp_mux={:?} ice_servers={}",
            settings.use_ice_lite,
            setting_engine.candidates.multicast_dns_mode,
            setting_engine.ports.udp_mux_ports,
            setting_engine.ports.ephemeral_udp_port_range,
            setting_engine.ports.tcp_mux_port,
            ice_servers.len(),
        );

        Ok(TransportConfig {
            setting_engine,
            ice_servers,
        })
    }

    pub fn setting_engine(&self) -> &SettingEngine {
        &self.setting_engine
    }

    pub fn ice_servers(&self) -> &[RTCIceServer] {
        &self.ice_servers
    }
}

/// A UDP mux range; `end == 0` means the single port `start`.
fn validate_udp_port(range: PortRange) -> Result<(u16, u16)> {
    if range.end == 0 {
        return Ok((range.start, range.start));
    }
    match validate_port_range(range.start, range.end)? {
        Some(r) => Ok(r),
        None => Err(Error::ErrIncompletePortRange),
    }
}

fn validate_port_range(start: u16, end: u16) -> Result<Option<(u16, u16)>> {
    match (start, end) {
        (0, 0) => Ok(None),
        (0, _) | (_, 0) => Err(Error::ErrIncompletePortRange),
        (start, end) if start > end => Err(Error::ErrInvalidPortRange { start, end }),
        (start, end) => Ok(Some((start, end))),
    }
}

/// Accepts CIDR notation or a bare address, which is treated as a host route.
fn parse_ip_net(raw: &str) -> Result<IpNet> {
    if let Ok(net) = raw.parse::<IpNet>() {
        return Ok(net);
    }
    raw.parse::<IpAddr>()
        .map(IpNet::from)
        .map_err(|_| Error::ErrInvalidIpFilter(raw.to_owned()))
}

fn parse_ip_filter(settings: &FilterSettings) -> Result<IpFilter> {
    Ok(IpFilter {
        includes: settings
            .includes
            .iter()
            .map(|raw| parse_ip_net(raw))
            .collect::<Result<Vec<_>>>()?,
        excludes: settings
            .excludes
            .iter()
            .map(|raw| parse_ip_net(raw))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn ice_servers_from_settings(settings: &TransportSettings) -> Result<Vec<RTCIceServer>> {
    let mut ice_servers = vec![];

    if !settings.stun_servers.is_empty() {
        let server = RTCIceServer {
            urls: settings
                .stun_servers
                .iter()
                .map(|s| {
                    if s.starts_with("stun:") || s.starts_with("stuns:") {
                        s.clone()
                    } else {
                        format!("stun:{}", url_host(s))
                    }
                })
                .collect(),
            ..Default::default()
        };
        server.validate()?;
        ice_servers.push(server);
    }

    for turn in &settings.turn_servers {
        let server = turn_ice_server(turn)?;
        server.validate()?;
        ice_servers.push(server);
    }

    Ok(ice_servers)
}

fn turn_ice_server(turn: &TurnServer) -> Result<RTCIceServer> {
    if turn.host.is_empty() {
        return Err(Error::ErrTurnServerMissingHost);
    }

    let (scheme, transport, default_port) = match turn.protocol.to_lowercase().as_str() {
        "" | TURN_PROTOCOL_UDP => ("turn", TURN_PROTOCOL_UDP, DEFAULT_PORT),
        TURN_PROTOCOL_TCP => ("turn", TURN_PROTOCOL_TCP, DEFAULT_PORT),
        TURN_PROTOCOL_TLS => ("turns", TURN_PROTOCOL_TCP, DEFAULT_TLS_PORT),
        _ => return Err(Error::ErrUnsupportedTurnProtocol(turn.protocol.clone())),
    };
    let port = if turn.port == 0 {
        default_port
    } else {
        turn.port
    };

    Ok(RTCIceServer {
        urls: vec![format!(
            "{scheme}:{}:{port}?transport={transport}",
            url_host(&turn.host)
        )],
        username: turn.username.clone(),
        credential: turn.credential.clone(),
    })
}

/// Brackets a bare IPv6 literal for use in a `stun:`/`turn:` URL.
///
/// Anything else is passed through unchanged and left for URL validation.
fn url_host(host: &str) -> String {
    if host.parse::<Ipv6Addr>().is_ok() {
        format!("[{host}]")
    } else {
        host.to_owned()
    }
}
