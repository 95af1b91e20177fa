use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

const SCHEME_STUN: &str = "stun";
const SCHEME_STUNS: &str = "stuns";
const SCHEME_TURN: &str = "turn";
const SCHEME_TURNS: &str = "turns";

/// Default port for `stun:` and `turn:` URLs without one.
pub const DEFAULT_PORT: u16 = 3478;
/// Default port for `stuns:` and `turns:` URLs without one.
pub const DEFAULT_TLS_PORT: u16 = 5349;

/// A STUN or TURN server available to ICE.
///
/// ## Specifications
///
/// * [W3C](https://w3c.github.io/webrtc-pc/#rtciceserver-dictionary)
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RTCIceServer {
    pub urls: Vec<String>,
    pub username: String,
    pub credential: String,
}

/// Scheme, host and port of a parsed ICE server URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IceServerUrl {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// `transport=` query value, if present.
    pub transport: Option<String>,
}

impl IceServerUrl {
    pub fn is_turn(&self) -> bool {
        self.scheme == SCHEME_TURN || self.scheme == SCHEME_TURNS
    }

    /// Parses a `stun:`, `stuns:`, `turn:` or `turns:` URL
    /// ([RFC 7064](https://datatracker.ietf.org/doc/html/rfc7064),
    /// [RFC 7065](https://datatracker.ietf.org/doc/html/rfc7065)).
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)?;

        let scheme = url.scheme().to_owned();
        let secure = match scheme.as_str() {
            SCHEME_STUN | SCHEME_TURN => false,
            SCHEME_STUNS | SCHEME_TURNS => true,
            _ => return Err(Error::ErrInvalidIceServerUrl(raw.to_owned())),
        };

        // stun/turn URLs carry no authority, so host:port lands in the path
        let host_port = url.path();
        let split = if host_port.ends_with(']') {
            None
        } else {
            host_port.rsplit_once(':')
        };
        let (host, port) = match split {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| Error::ErrInvalidIceServerUrl(raw.to_owned()))?;
                (host, port)
            }
            None if secure => (host_port, DEFAULT_TLS_PORT),
            None => (host_port, DEFAULT_PORT),
        };
        // IPv6 literals must be bracketed, so any ':' left in the host is malformed
        let host = match host.strip_prefix('[') {
            Some(bracketed) => match bracketed.strip_suffix(']') {
                Some(ip) if ip.parse::<Ipv6Addr>().is_ok() => ip,
                _ => return Err(Error::ErrInvalidIceServerUrl(raw.to_owned())),
            },
            None if host.contains([':', '[', ']']) => {
                return Err(Error::ErrInvalidIceServerUrl(raw.to_owned()));
            }
            None => host,
        };
        if host.is_empty() || port == 0 {
            return Err(Error::ErrInvalidIceServerUrl(raw.to_owned()));
        }

        let transport = url
            .query_pairs()
            .find(|(k, _)| k == "transport")
            .map(|(_, v)| v.into_owned());
        if let Some(transport) = &transport {
            if scheme.starts_with(SCHEME_STUN) || (transport != "udp" && transport != "tcp") {
                return Err(Error::ErrInvalidIceServerUrl(raw.to_owned()));
            }
        }

        Ok(IceServerUrl {
            scheme,
            host: host.to_owned(),
            port,
            transport,
        })
    }
}

impl RTCIceServer {
    /// Parses every URL and checks that TURN servers carry credentials.
    pub fn validate(&self) -> Result<Vec<IceServerUrl>> {
        let mut parsed = Vec::with_capacity(self.urls.len());
        for raw in &self.urls {
            let url = IceServerUrl::parse(raw)?;
            if url.is_turn() && (self.username.is_empty() || self.credential.is_empty()) {
                return Err(Error::ErrTurnServerMissingCredentials(raw.to_owned()));
            }
            parsed.push(url);
        }
        Ok(parsed)
    }
}
