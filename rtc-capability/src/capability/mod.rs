//! Capability aggregator.
//!
//! A [`CapabilityConfig`] is built once per server-level transport
//! configuration and then shared read-only by every peer connection, usually
//! behind an [`Arc`]. It holds the publisher and subscriber profiles, the
//! resolved packet-buffer sizes, and the base transport configuration with
//! the server's fixed transport policy applied.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use rtc_capability::CapabilityConfig;
//! use rtc_capability::media::RtpHeaderExtension;
//! use rtc_capability::settings::RtcSettings;
//!
//! # fn main() -> rtc_capability::Result<()> {
//! let mut settings = RtcSettings::default();
//! settings.congestion_control.use_send_side_bwe = true;
//!
//! let config = Arc::new(CapabilityConfig::new(&settings)?);
//!
//! assert!(config.publisher().strict_acks());
//! assert_eq!(
//!     config.subscriber().video().header_extensions().last(),
//!     Some(&RtpHeaderExtension::TransportCc),
//! );
//! assert_eq!(config.receiver().packet_buffer_size_video, 500);
//! # Ok(())
//! # }
//! ```


use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::buffer::BufferFactory;
use crate::buffer_size::BufferSizing;
use crate::congestion_control::CongestionControlStrategy;
use crate::direction::DirectionProfile;
use crate::error::Result;
use crate::settings::{CongestionControlSettings, RtcSettings};
use crate::transport::TransportConfig;
use crate::transport::network_type::NetworkType;
use crate::transport::setting_engine::SettingEngine;

/// Relay candidates wait this long so host and srflx pairs can win first.
pub(crate) const RELAY_ACCEPTANCE_MIN_WAIT: Duration = Duration::from_millis(500);

/// Per-direction capability profiles plus the shared transport configuration.
#[derive(Clone)]
pub struct CapabilityConfig {
    publisher: DirectionProfile,
    subscriber: DirectionProfile,
    receiver: BufferSizing,
    transport: TransportConfig,
    congestion_control: CongestionControlSettings,
    buffer_factory: Option<Arc<dyn BufferFactory>>,
}

impl fmt::Debug for CapabilityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityConfig")
            .field("publisher", &self.publisher)
            .field("subscriber", &self.subscriber)
            .field("receiver", &self.receiver)
            .field("transport", &self.transport)
            .field("congestion_control", &self.congestion_control)
            .field("buffer_factory", &self.buffer_factory.is_some())
            .finish()
    }
}

impl CapabilityConfig {
    /// Builds the capability configuration from raw settings.
    ///
    /// # Errors
    ///
    /// Fails only when the base transport configuration cannot be built from
    /// `settings`; profile assembly itself is infallible.
    pub fn new(settings: &RtcSettings) -> Result<Self> {
        let mut transport = TransportConfig::new(&settings.transport, settings.development)?;
        apply_transport_policy(&mut transport.setting_engine);

        let receiver = BufferSizing::resolve(
            settings.packet_buffer_size,
            settings.packet_buffer_size_audio,
            settings.packet_buffer_size_video,
        );
        log::debug!(
            "packet buffer sizes: audio={} video={}",
            receiver.packet_buffer_size_audio,
            receiver.packet_buffer_size_video
        );

        let strategy =
            CongestionControlStrategy::from_send_side_bwe(settings.congestion_control.use_send_side_bwe);
        let publisher = DirectionProfile::publisher();
        let subscriber = DirectionProfile::subscriber(settings.strict_acks, strategy);

        log::info!(
            "capability config built: subscriber strict_acks={} congestion_control={}",
            subscriber.strict_acks(),
            strategy
        );

        Ok(CapabilityConfig {
            publisher,
            subscriber,
            receiver,
            transport,
            congestion_control: settings.congestion_control.clone(),
            buffer_factory: None,
        })
    }

    /// Attaches the buffer-allocation backend.
    ///
    /// The factory is stored here and registered with the setting engine, so
    /// connections created afterwards acquire their buffers from it. Taking
    /// `&mut self` means this can only run before the configuration is
    /// shared. A second call replaces the previous factory.
    pub fn set_buffer_factory(&mut self, factory: Arc<dyn BufferFactory>) {
        if self.buffer_factory.is_some() {
            log::warn!("replacing previously attached buffer factory");
        } else {
            log::debug!("buffer factory attached");
        }
        self.transport.setting_engine.set_buffer_factory(Arc::clone(&factory));
        self.buffer_factory = Some(factory);
    }

    pub fn publisher(&self) -> &DirectionProfile {
        &self.publisher
    }

    pub fn subscriber(&self) -> &DirectionProfile {
        &self.subscriber
    }

    /// Resolved packet-buffer sizes for received media.
    pub fn receiver(&self) -> &BufferSizing {
        &self.receiver
    }

    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    pub fn setting_engine(&self) -> &SettingEngine {
        &self.transport.setting_engine
    }

    pub fn buffer_factory(&self) -> Option<&Arc<dyn BufferFactory>> {
        self.buffer_factory.as_ref()
    }

    pub fn congestion_control(&self) -> &CongestionControlSettings {
        &self.congestion_control
    }
}

fn apply_transport_policy(setting_engine: &mut SettingEngine) {
    setting_engine.disable_active_tcp(true);
    setting_engine.set_relay_acceptance_min_wait(Some(RELAY_ACCEPTANCE_MIN_WAIT));
    setting_engine.set_prflx_acceptance_min_wait(Some(Duration::ZERO));
    setting_engine.set_srflx_acceptance_min_wait(Some(Duration::ZERO));
    setting_engine.set_network_types(vec![NetworkType::Udp4, NetworkType::Tcp4]);
    setting_engine.enable_sctp_zero_checksum(true);

    log::debug!(
        "transport policy applied: network_types={:?} relay_min_wait={:?}",
        setting_engine.network_types(),
        RELAY_ACCEPTANCE_MIN_WAIT
    );
}
