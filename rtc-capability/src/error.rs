use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning raw settings into a transport configuration.
///
/// Capability profile assembly itself never fails; every variant here means
/// the supplied settings were rejected and no configuration was produced.
#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("rtc config: port range start {start} is greater than end {end}")]
    ErrInvalidPortRange { start: u16, end: u16 },
    #[error("rtc config: port range requires both start and end")]
    ErrIncompletePortRange,
    #[error("rtc config: invalid node ip {0:?}")]
    ErrInvalidNodeIp(String),
    #[error("rtc config: use_external_ip requires node_ip")]
    ErrExternalIpWithoutNodeIp,
    #[error("rtc config: invalid ip filter {0:?}")]
    ErrInvalidIpFilter(String),
    #[error("rtc config: invalid ice server url {0:?}")]
    ErrInvalidIceServerUrl(String),
    #[error("rtc config: turn server requires a host")]
    ErrTurnServerMissingHost,
    #[error("rtc config: turn server {0} requires username and credential")]
    ErrTurnServerMissingCredentials(String),
    #[error("rtc config: unsupported turn protocol {0:?}")]
    ErrUnsupportedTurnProtocol(String),

    #[error("url parse: {0}")]
    ParseUrl(#[from] url::ParseError),
}
