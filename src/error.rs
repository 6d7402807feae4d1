//! Error types and result utilities for frame trimming operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`TrimError`].
pub type TrimResult<T> = Result<T, TrimError>;

/// Error types that can occur while building buffers or trimming audio.
#[derive(Error, Debug)]
pub enum TrimError {
    /// The frame rate was zero, negative or not a finite number.
    #[error("Invalid frame rate: {0} (frame rate must be greater than 0)")]
    InvalidFrameRate(f64),

    /// The requested frame window is empty or ends at or before frame 0.
    ///
    /// Raised when `start_frame >= end_frame` or when `end_frame <= 0`.
    #[error(
        "Invalid frame window: start frame {start_frame} must be less than end frame {end_frame}, and end frame must be positive"
    )]
    InvalidWindow {
        /// Requested first frame.
        start_frame: i64,
        /// Requested end frame (exclusive).
        end_frame: i64,
    },

    /// A negative start frame was given while head silence is counted explicitly.
    #[error(
        "Negative start frame {0} is only allowed with the negative-start head silence policy"
    )]
    NegativeStartFrame(i64),

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// Error that occurs when array dimensions don't match expected values.
    ///
    /// Also carries `ndarray` shape errors raised while joining blocks along
    /// the time axis.
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),

    /// No operation is registered under the requested name.
    #[error("Unknown node: {0}")]
    UnknownNode(String),
}
