//! Error types for the transfer pipeline.

/// Result alias for huematch-core operations.
pub type Result<T> = std::result::Result<T, TransferError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransferError {
    /// Wrong channel count or a buffer whose length does not match its shape.
    #[error("invalid image format: {reason}")]
    InvalidImageFormat { reason: String },

    /// Width or height is zero.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A transfer-space value outside [0, 255], or not finite.
    #[error("channel {channel} value {value} is outside the transfer range [0, 255]")]
    OutOfRangeInput { channel: usize, value: f32 },
}

impl TransferError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidImageFormat {
            reason: reason.into(),
        }
    }
}
