use std::fmt;

use serde::{Deserialize, Serialize};

use crate::media::UNSPECIFIED_STR;

/// Network type a candidate may be gathered for.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkType {
    #[default]
    Unspecified,

    /// UDP over IPv4.
    #[serde(rename = "udp4")]
    Udp4,

    /// UDP over IPv6.
    #[serde(rename = "udp6")]
    Udp6,

    /// TCP over IPv4.
    #[serde(rename = "tcp4")]
    Tcp4,

    /// TCP over IPv6.
    #[serde(rename = "tcp6")]
    Tcp6,
}

const NETWORK_TYPE_UDP4_STR: &str = "udp4";
const NETWORK_TYPE_UDP6_STR: &str = "udp6";
const NETWORK_TYPE_TCP4_STR: &str = "tcp4";
const NETWORK_TYPE_TCP6_STR: &str = "tcp6";

impl From<&str> for NetworkType {
    fn from(raw: &str) -> Self {
        match raw {
            NETWORK_TYPE_UDP4_STR => Self::Udp4,
            NETWORK_TYPE_UDP6_STR => Self::Udp6,
            NETWORK_TYPE_TCP4_STR => Self::Tcp4,
            NETWORK_TYPE_TCP6_STR => Self::Tcp6,
            _ => Self::Unspecified,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Self::Udp4 => NETWORK_TYPE_UDP4_STR,
            Self::Udp6 => NETWORK_TYPE_UDP6_STR,
            Self::Tcp4 => NETWORK_TYPE_TCP4_STR,
            Self::Tcp6 => NETWORK_TYPE_TCP6_STR,
            Self::Unspecified => UNSPECIFIED_STR,
        };
        write!(f, "{s}")
    }
}

pub(crate) fn supported_network_types() -> Vec<NetworkType> {
    vec![
        NetworkType::Udp4,
        NetworkType::Udp6,
        NetworkType::Tcp4,
        NetworkType::Tcp6,
    ]
}
