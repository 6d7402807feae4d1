//! Core trait definitions for audio operations.

use super::types::{FrameWindow, TrimmedAudio};
use crate::{AudioSample, TrimResult};

/// Frame-based trimming operations.
///
/// Implementations never mutate `self`; the result is always a freshly
/// allocated buffer.
pub trait AudioFrameTrim<T: AudioSample> {
    /// Extracts a frame-aligned window, adds head/tail silence and optionally
    /// aligns the output to a `4N + 1` frame count.
    ///
    /// Slice bounds past the end of the audio are clamped, producing a
    /// shorter slice rather than an error.
    ///
    /// # Arguments
    /// * `window` - Frame rate, frame range and silence/alignment options
    ///
    /// # Errors
    /// Returns an error if the frame rate is not positive, if the window is
    /// empty, or if a negative start frame is used with explicit head silence.
    fn trim_frames(&self, window: &FrameWindow) -> TrimResult<TrimmedAudio<T>>;
}
