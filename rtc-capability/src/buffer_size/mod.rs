
use serde::{Deserialize, Serialize};

/// Packet-buffer capacity used when neither a per-kind nor a global size is set.
pub const DEFAULT_PACKET_BUFFER_SIZE: usize = 500;

/// Resolved packet-buffer capacity, in packets, per media kind.
///
/// Both fields are always positive once produced by [`BufferSizing::resolve`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSizing {
    pub packet_buffer_size_audio: usize,
    pub packet_buffer_size_video: usize,
}

impl BufferSizing {
    /// Resolves the per-kind sizes from the configured values, where `0` means unset.
    ///
    /// An unset `global` becomes [`DEFAULT_PACKET_BUFFER_SIZE`]. An unset `audio`
    /// or `video` takes the resolved global value, otherwise it is kept as is.
    ///
    /// ```
    /// use rtc_capability::buffer_size::BufferSizing;
    ///
    /// let sizing = BufferSizing::resolve(1000, 0, 300);
    /// assert_eq!(sizing.packet_buffer_size_audio, 1000);
    /// assert_eq!(sizing.packet_buffer_size_video, 300);
    /// ```
    pub fn resolve(global: usize, audio: usize, video: usize) -> Self {
        let global = if global == 0 {
            DEFAULT_PACKET_BUFFER_SIZE
        } else {
            global
        };

        BufferSizing {
            packet_buffer_size_audio: if audio == 0 { global } else { audio },
            packet_buffer_size_video: if video == 0 { global } else { video },
        }
    }
}

impl Default for BufferSizing {
    fn default() -> Self {
        BufferSizing::resolve(0, 0, 0)
    }
}
