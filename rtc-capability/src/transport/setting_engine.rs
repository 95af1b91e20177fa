//! Transport-engine settings shared by every connection of a server.
//!
//! The `SettingEngine` collects the knobs that are not part of a standard
//! `RTCConfiguration`: ICE timing, candidate gathering restrictions, port
//! multiplexing, SCTP behaviour and the buffer-acquisition hook. It is built
//! once by [`TransportConfig::new`](super::TransportConfig::new), adjusted
//! with server policy by the capability aggregator, and then only read.
//!
//! # Examples
//!
//! ```
//! use rtc_capability::transport::network_type::NetworkType;
//! use rtc_capability::transport::setting_engine::SettingEngine;
//! use std::time::Duration;
//!
//! let mut setting_engine = SettingEngine::default();
//!
//! // Only gather IPv4 candidates
//! setting_engine.set_network_types(vec![NetworkType::Udp4, NetworkType::Tcp4]);
//!
//! // Give host and srflx candidates a head start over relayed ones
//! setting_engine.set_relay_acceptance_min_wait(Some(Duration::from_millis(500)));
//!
//! assert_eq!(setting_engine.network_types(), vec![NetworkType::Udp4, NetworkType::Tcp4]);
//! ```

use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use ipnet::IpNet;
use serde::{Deserialize, Serialize};

use super::network_type::{NetworkType, supported_network_types};
use crate::buffer::{BufferFactory, BufferPacketType, PacketBuffer};

/// Controls how mDNS candidates are handled.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MulticastDnsMode {
    /// Remote mDNS candidates are discarded, local host candidates use IPs.
    #[default]
    Disabled,

    /// Remote mDNS candidates are accepted, local host candidates use IPs.
    QueryOnly,
}

/// Candidate type used to advertise 1:1 NAT addresses.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NatCandidateType {
    #[default]
    Unspecified,

    /// Replace the private host address with the mapped one.
    #[serde(rename = "host")]
    Host,
}

/// ICE timeout configuration for connection health monitoring.
#[derive(Default, Debug, Clone)]
pub struct Timeout {
    /// Duration without network activity before ICE is considered disconnected.
    pub ice_disconnected_timeout: Option<Duration>,

    /// Duration without network activity before ICE is considered failed after disconnected.
    pub ice_failed_timeout: Option<Duration>,

    /// How often ICE sends keepalive packets when there's no media flow.
    pub ice_keepalive_interval: Option<Duration>,

    /// Minimum wait time before accepting server reflexive candidates.
    pub ice_srflx_acceptance_min_wait: Option<Duration>,

    /// Minimum wait time before accepting peer reflexive candidates.
    pub ice_prflx_acceptance_min_wait: Option<Duration>,

    /// Minimum wait time before accepting relay candidates.
    pub ice_relay_acceptance_min_wait: Option<Duration>,
}

/// Include/exclude filter over network interface names.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct InterfaceFilter {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl InterfaceFilter {
    /// An interface is allowed when it is included (or no includes are set)
    /// and not excluded.
    pub fn allows(&self, name: &str) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|i| i == name) {
            return false;
        }
        !self.excludes.iter().any(|e| e == name)
    }
}

/// Include/exclude filter over IP networks.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct IpFilter {
    pub includes: Vec<IpNet>,
    pub excludes: Vec<IpNet>,
}

impl IpFilter {
    pub fn allows(&self, ip: &IpAddr) -> bool {
        if !self.includes.is_empty() && !self.includes.iter().any(|net| net.contains(ip)) {
            return false;
        }
        !self.excludes.iter().any(|net| net.contains(ip))
    }
}

/// ICE candidate gathering and filtering configuration.
#[derive(Default, Debug, Clone)]
pub struct Candidates {
    /// Only respond to connectivity checks, never initiate them.
    pub ice_lite: bool,

    /// Restrict candidate gathering to specific network types.
    pub ice_network_types: Vec<NetworkType>,

    pub interface_filter: Option<InterfaceFilter>,
    pub ip_filter: Option<IpFilter>,

    /// External IP addresses for 1:1 NAT mappings.
    pub nat_1to1_ips: Vec<String>,

    /// Candidate type to use for NAT 1:1 IPs.
    pub nat_1to1_ip_candidate_type: NatCandidateType,

    pub multicast_dns_mode: MulticastDnsMode,

    /// Allow gathering loopback candidates.
    pub include_loopback_candidate: bool,

    /// Never dial out with TCP active candidates.
    pub disable_active_tcp: bool,
}

/// Port multiplexing configuration.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ports {
    /// Inclusive UDP port range ICE traffic is muxed on; a single port when both ends match.
    pub udp_mux_ports: Option<(u16, u16)>,

    /// Ephemeral UDP port range, used when no mux port is set.
    pub ephemeral_udp_port_range: Option<(u16, u16)>,

    /// TCP port all ICE/TCP traffic is muxed on.
    pub tcp_mux_port: Option<u16>,
}

/// Advanced transport-engine configuration shared by all connections of a server.
#[derive(Default, Clone)]
pub struct SettingEngine {
    pub(crate) timeout: Timeout,
    pub(crate) candidates: Candidates,
    pub(crate) ports: Ports,
    pub(crate) sctp_zero_checksum: bool,
    pub(crate) buffer_factory: Option<Arc<dyn BufferFactory>>,
}

impl fmt::Debug for SettingEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingEngine")
            .field("timeout", &self.timeout)
            .field("candidates", &self.candidates)
            .field("ports", &self.ports)
            .field("sctp_zero_checksum", &self.sctp_zero_checksum)
            .field("buffer_factory", &self.buffer_factory.is_some())
            .finish()
    }
}

impl SettingEngine {
    /// Configures ICE timeout behavior for connection health monitoring.
    ///
    /// # Parameters
    ///
    /// * `disconnected_timeout` - Duration without activity before considered disconnected
    /// * `failed_timeout` - Duration after disconnected before considered failed
    /// * `keep_alive_interval` - How often to send keepalives when idle
    pub fn set_ice_timeouts(
        &mut self,
        disconnected_timeout: Option<Duration>,
        failed_timeout: Option<Duration>,
        keep_alive_interval: Option<Duration>,
    ) {
        self.timeout.ice_disconnected_timeout = disconnected_timeout;
        self.timeout.ice_failed_timeout = failed_timeout;
        self.timeout.ice_keepalive_interval = keep_alive_interval;
    }

    /// Sets minimum wait time before accepting server reflexive candidates.
    ///
    /// Server reflexive candidates are discovered through STUN servers.
    pub fn set_srflx_acceptance_min_wait(&mut self, t: Option<Duration>) {
        self.timeout.ice_srflx_acceptance_min_wait = t;
    }

    /// Sets minimum wait time before accepting peer reflexive candidates.
    ///
    /// Peer reflexive candidates are discovered during connectivity checks.
    pub fn set_prflx_acceptance_min_wait(&mut self, t: Option<Duration>) {
        self.timeout.ice_prflx_acceptance_min_wait = t;
    }

    /// Sets minimum wait time before accepting relay candidates.
    ///
    /// Relay candidates are provided by TURN servers.
    pub fn set_relay_acceptance_min_wait(&mut self, t: Option<Duration>) {
        self.timeout.ice_relay_acceptance_min_wait = t;
    }

    pub fn timeout(&self) -> &Timeout {
        &self.timeout
    }

    /// Configures ICE Lite mode.
    ///
    /// In ICE Lite mode, the agent only responds to connectivity checks
    /// but does not initiate them. This is typically used by servers that
    /// have public IP addresses.
    pub fn set_lite(&mut self, lite: bool) {
        self.candidates.ice_lite = lite;
    }

    /// Restricts candidate gathering to specific network types.
    pub fn set_network_types(&mut self, candidate_types: Vec<NetworkType>) {
        self.candidates.ice_network_types = candidate_types;
    }

    /// Network types candidates are gathered for; all supported types when unrestricted.
    pub fn network_types(&self) -> Vec<NetworkType> {
        if self.candidates.ice_network_types.is_empty() {
            supported_network_types()
        } else {
            self.candidates.ice_network_types.clone()
        }
    }

    pub fn set_interface_filter(&mut self, filter: InterfaceFilter) {
        self.candidates.interface_filter = Some(filter);
    }

    pub fn set_ip_filter(&mut self, filter: IpFilter) {
        self.candidates.ip_filter = Some(filter);
    }

    /// Configures 1:1 NAT IP mapping for cloud deployments.
    ///
    /// With `Host`, the private IP in host candidates is replaced by the
    /// mapped one.
    pub fn set_nat_1to1_ips(&mut self, ips: Vec<String>, candidate_type: NatCandidateType) {
        self.candidates.nat_1to1_ips = ips;
        self.candidates.nat_1to1_ip_candidate_type = candidate_type;
    }

    /// Sets whether remote `.local` candidates are resolved.
    pub fn set_ice_multicast_dns_mode(&mut self, multicast_dns_mode: MulticastDnsMode) {
        self.candidates.multicast_dns_mode = multicast_dns_mode;
    }

    /// Allow gathering loopback candidates. Non-standard per RFC 8445.
    pub fn set_include_loopback_candidate(&mut self, allow_loopback: bool) {
        self.candidates.include_loopback_candidate = allow_loopback;
    }

    /// Disables TCP active candidates, so connections are only ever accepted.
    pub fn disable_active_tcp(&mut self, is_disabled: bool) {
        self.candidates.disable_active_tcp = is_disabled;
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Muxes ICE UDP traffic on the ports `[start, end]`.
    pub fn set_udp_mux_ports(&mut self, start: u16, end: u16) {
        self.ports.udp_mux_ports = Some((start, end));
    }

    /// Limits ephemeral UDP ports used for ICE to `[start, end]`.
    pub fn set_ephemeral_udp_port_range(&mut self, start: u16, end: u16) {
        self.ports.ephemeral_udp_port_range = Some((start, end));
    }

    /// Muxes all ICE TCP traffic on a single port.
    pub fn set_tcp_mux_port(&mut self, port: u16) {
        self.ports.tcp_mux_port = Some(port);
    }

    pub fn ports(&self) -> &Ports {
        &self.ports
    }

    /// Enables the SCTP zero checksum mode for data channels.
    ///
    /// DTLS already authenticates every record, so the CRC32c computation
    /// can be skipped when both ends agree on it.
    ///
    /// # See Also
    ///
    /// - [RFC 9653](https://datatracker.ietf.org/doc/html/rfc9653)
    pub fn enable_sctp_zero_checksum(&mut self, is_enabled: bool) {
        self.sctp_zero_checksum = is_enabled;
    }

    pub fn sctp_zero_checksum(&self) -> bool {
        self.sctp_zero_checksum
    }

    /// Sets the factory connections acquire their packet buffers from.
    pub fn set_buffer_factory(&mut self, factory: Arc<dyn BufferFactory>) {
        self.buffer_factory = Some(factory);
    }

    /// Acquires the buffer for `(packet_type, ssrc)` through the registered
    /// factory, or `None` when no factory is set.
    pub fn acquire_buffer(
        &self,
        packet_type: BufferPacketType,
        ssrc: u32,
    ) -> Option<Arc<dyn PacketBuffer>> {
        self.buffer_factory
            .as_ref()
            .map(|factory| factory.get_or_new(packet_type, ssrc))
    }
}
