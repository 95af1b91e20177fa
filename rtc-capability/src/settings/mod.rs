//! Raw RTC settings as loaded by the server's configuration layer.
//!
//! Every struct here is `#[serde(default)]`, so a partial YAML or JSON
//! document deserializes into a complete value. Zero and empty values mean
//! "unset"; they are resolved when a
//! [`CapabilityConfig`](crate::capability::CapabilityConfig) is built.

use serde::{Deserialize, Serialize};

/// Top-level RTC settings for one server-level transport.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtcSettings {
    /// Settings consumed by the base transport-engine constructor.
    #[serde(flatten)]
    pub transport: TransportSettings,

    /// Packet-buffer size for both kinds; `0` uses the built-in default.
    pub packet_buffer_size: usize,
    /// Overrides `packet_buffer_size` for video when non-zero.
    pub packet_buffer_size_video: usize,
    /// Overrides `packet_buffer_size` for audio when non-zero.
    pub packet_buffer_size_audio: usize,

    /// Whether subscribers are expected to acknowledge reliably.
    pub strict_acks: bool,

    pub congestion_control: CongestionControlSettings,

    /// Relaxes candidate gathering for local development (loopback candidates).
    pub development: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CongestionControlSettings {
    pub enabled: bool,
    pub allow_pause: bool,
    /// Selects transport-wide congestion control over REMB for subscribers.
    pub use_send_side_bwe: bool,
}

impl Default for CongestionControlSettings {
    fn default() -> Self {
        CongestionControlSettings {
            enabled: true,
            allow_pause: false,
            use_send_side_bwe: false,
        }
    }
}

/// Network, ICE and candidate settings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSettings {
    /// Single UDP port (or port range) all ICE traffic is muxed on.
    pub udp_port: PortRange,
    /// TCP port for ICE/TCP; `0` disables it.
    pub tcp_port: u16,
    /// Ephemeral UDP port range, used when `udp_port` is unset.
    #[serde(rename = "port_range_start")]
    pub ice_port_range_start: u16,
    #[serde(rename = "port_range_end")]
    pub ice_port_range_end: u16,

    /// IP the node advertises when `use_external_ip` is set.
    pub node_ip: String,
    pub use_external_ip: bool,

    pub stun_servers: Vec<String>,
    pub turn_servers: Vec<TurnServer>,

    pub use_ice_lite: bool,
    pub use_mdns: bool,
    pub enable_loopback_candidate: bool,

    /// Network interface names to include or exclude when gathering.
    pub interfaces: FilterSettings,
    /// CIDR ranges to include or exclude when gathering.
    pub ips: FilterSettings,
}

/// Inclusive port range; a range with `end == 0` is a single port.
///
/// Deserializes from either `{ "start": .., "end": .. }` or a bare port number.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PortRangeRepr")]
pub struct PortRange {
    pub start: u16,
    pub end: u16,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortRangeRepr {
    Single(u16),
    Range {
        #[serde(default)]
        start: u16,
        #[serde(default)]
        end: u16,
    },
}

impl From<PortRangeRepr> for PortRange {
    fn from(repr: PortRangeRepr) -> Self {
        match repr {
            PortRangeRepr::Single(port) => PortRange {
                start: port,
                end: 0,
            },
            PortRangeRepr::Range { start, end } => PortRange { start, end },
        }
    }
}

impl PortRange {
    pub fn is_unset(&self) -> bool {
        self.start == 0 && self.end == 0
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnServer {
    pub host: String,
    pub port: u16,
    /// `udp`, `tcp` or `tls`.
    pub protocol: String,
    pub username: String,
    pub credential: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl FilterSettings {
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }
}
