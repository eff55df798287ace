use enough::StopReason;

/// Errors from ICO decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IcoError {
    #[error("malformed ICO container: {0}")]
    MalformedContainer(String),

    #[error("payload {offset}+{size} exceeds buffer of {len} bytes")]
    TruncatedPayload { offset: u32, size: u32, len: usize },

    #[error("unsupported DIB format: {0}")]
    UnsupportedDibFormat(String),

    #[error("invalid DIB header: {0}")]
    InvalidDibHeader(String),

    #[error("unsupported PNG payload: {0}")]
    UnsupportedPngPayload(String),

    #[error("invalid target size: {0}")]
    InvalidTargetSize(u32),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("PNG encode failed: {0}")]
    EncodeFailed(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for IcoError {
    fn from(r: StopReason) -> Self {
        IcoError::Cancelled(r)
    }
}
