//! # RTC Capability - per-direction media-transport profiles for an SFU
//!
//! An SFU terminates two peer connections per participant: a **publisher**
//! connection, on which the server receives media, and a **subscriber**
//! connection, on which the server forwards media. The two directions offer
//! different RTP header extensions and RTCP feedback, and only the subscriber
//! direction lets the operator choose how bandwidth is estimated.
//!
//! This crate turns the server's raw RTC settings into a single immutable
//! [`CapabilityConfig`]:
//!
//! - **Direction profiles**: fixed publisher and subscriber tables of header
//!   extensions and RTCP feedback per media kind, plus the strict-ACK flag.
//! - **Congestion control**: exactly one of send-side (transport-wide CC) or
//!   receiver-side (abs-send-time + REMB) on subscriber video.
//! - **Buffer sizing**: per-kind packet-buffer capacity with a global
//!   fallback and a built-in default of 500 packets.
//! - **Transport**: a [`SettingEngine`](transport::setting_engine::SettingEngine)
//!   and ICE server list built from the network settings, with the server's
//!   candidate and SCTP policy applied on top.
//! - **Buffer factory hook**: a late-bound
//!   [`BufferFactory`](buffer::BufferFactory) through which every
//!   connection acquires its packet buffers.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use rtc_capability::CapabilityConfig;
//! use rtc_capability::settings::RtcSettings;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings: RtcSettings = serde_json::from_str(
//!     r#"{
//!         "udp_port": { "start": 7882 },
//!         "packet_buffer_size_video": 300,
//!         "congestion_control": { "use_send_side_bwe": true }
//!     }"#,
//! )?;
//!
//! let config = CapabilityConfig::new(&settings)?;
//! // attach a buffer factory here, while the config is still exclusively owned
//! let config = Arc::new(config);
//!
//! assert_eq!(config.receiver().packet_buffer_size_audio, 500);
//! assert_eq!(config.receiver().packet_buffer_size_video, 300);
//! assert_eq!(config.setting_engine().ports().udp_mux_ports, Some((7882, 7882)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Only the transport part of the settings can be invalid. A bad port range,
//! node IP, IP filter or ICE server makes [`CapabilityConfig::new`] return an
//! [`Error`] and nothing is built.

#![warn(rust_2018_idioms)]

pub mod buffer;
pub mod buffer_size;
pub mod capability;
pub mod congestion_control;
pub mod direction;
mod error;
pub mod media;
pub mod settings;
pub mod transport;

pub use capability::CapabilityConfig;
pub use error::{Error, Result};
