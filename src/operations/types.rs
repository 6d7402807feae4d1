//! Supporting types for frame trimming.
//!
//! This module contains the request/response types used by the
//! [`AudioFrameTrim`](super::traits::AudioFrameTrim) trait.

use serde::{Deserialize, Serialize};

use crate::utils::audio_math::samples_per_frame;
use crate::{AudioBuffer, AudioSample, TrimError, TrimResult};

/// How silence ahead of the extracted slice is requested.
///
/// The two conventions are mutually exclusive. With [`HeadSilence::Frames`]
/// the start frame must be non-negative and silence is counted separately;
/// with [`HeadSilence::NegativeStart`] a negative start frame itself is the
/// amount of silence to prepend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadSilence {
    /// Prepend this many frames of silence. `start_frame` must be `>= 0`.
    Frames(u32),
    /// A negative `start_frame` of `-n` prepends `n` frames of silence and
    /// extracts from source sample 0.
    NegativeStart,
}

impl Default for HeadSilence {
    fn default() -> Self {
        HeadSilence::Frames(0)
    }
}

/// A frame-rate-relative trimming request.
///
/// Defaults match the host node: 30 fps, frames `0..30`, no silence and
/// 4N+1 alignment enabled.
///
/// # Examples
///
/// ```rust
/// use audio_frame_trim::{FrameWindow, HeadSilence};
///
/// let window = FrameWindow::new(24.0, 0, 48)
///     .with_head_silence(2)
///     .with_tail_silence(3)
///     .with_alignment(false);
///
/// assert_eq!(window.head, HeadSilence::Frames(2));
/// assert_eq!(window.tail_silence_frames, 3);
/// assert!(window.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameWindow {
    /// Frames per second. Must be finite and greater than 0.
    pub frame_rate: f64,
    /// First frame to extract.
    pub start_frame: i64,
    /// Frame at which extraction stops (exclusive).
    pub end_frame: i64,
    /// Head silence convention and amount.
    pub head: HeadSilence,
    /// Frames of silence appended after the extracted slice.
    pub tail_silence_frames: u32,
    /// Round the output to a `4N + 1` frame count.
    pub align_4n_plus_1: bool,
}

impl Default for FrameWindow {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            start_frame: 0,
            end_frame: 30,
            head: HeadSilence::default(),
            tail_silence_frames: 0,
            align_4n_plus_1: true,
        }
    }
}

impl FrameWindow {
    /// Creates a window over `start_frame..end_frame` at `frame_rate`, keeping
    /// the remaining options at their defaults.
    pub fn new(frame_rate: f64, start_frame: i64, end_frame: i64) -> Self {
        Self {
            frame_rate,
            start_frame,
            end_frame,
            ..Self::default()
        }
    }

    /// Prepends `frames` frames of silence (explicit head silence policy).
    pub const fn with_head_silence(mut self, frames: u32) -> Self {
        self.head = HeadSilence::Frames(frames);
        self
    }

    /// Treats a negative start frame as head silence.
    pub const fn with_negative_start(mut self) -> Self {
        self.head = HeadSilence::NegativeStart;
        self
    }

    /// Appends `frames` frames of silence.
    pub const fn with_tail_silence(mut self, frames: u32) -> Self {
        self.tail_silence_frames = frames;
        self
    }

    /// Enables or disables 4N+1 frame alignment.
    pub const fn with_alignment(mut self, enabled: bool) -> Self {
        self.align_4n_plus_1 = enabled;
        self
    }

    /// Checks the window before any samples are touched.
    ///
    /// # Errors
    /// - [`TrimError::InvalidFrameRate`] if `frame_rate` is not finite or `<= 0`.
    /// - [`TrimError::InvalidWindow`] if `start_frame >= end_frame` or `end_frame <= 0`.
    /// - [`TrimError::NegativeStartFrame`] if `start_frame < 0` under [`HeadSilence::Frames`].
    pub fn validate(&self) -> TrimResult<()> {
        if !self.frame_rate.is_finite() || self.frame_rate <= 0.0 {
            return Err(TrimError::InvalidFrameRate(self.frame_rate));
        }
        if self.start_frame >= self.end_frame || self.end_frame <= 0 {
            return Err(TrimError::InvalidWindow {
                start_frame: self.start_frame,
                end_frame: self.end_frame,
            });
        }
        if self.start_frame < 0 && matches!(self.head, HeadSilence::Frames(_)) {
            return Err(TrimError::NegativeStartFrame(self.start_frame));
        }
        Ok(())
    }

    /// Samples per frame for audio at `sample_rate`.
    pub fn samples_per_frame(&self, sample_rate: u32) -> f64 {
        samples_per_frame(sample_rate, self.frame_rate)
    }
}

/// Result of a frame trim: the new buffer and its reported frame count.
///
/// `total_frames` is the 4N+1-aligned count when alignment was requested and
/// the truncated frame count of the output otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TrimmedAudio<T: AudioSample> {
    /// The trimmed, padded and possibly aligned audio.
    pub audio: AudioBuffer<T>,
    /// Frame count reported for `audio`.
    pub total_frames: usize,
}

impl<T: AudioSample> TrimmedAudio<T> {
    /// Splits into the buffer and the frame count.
    pub fn into_parts(self) -> (AudioBuffer<T>, usize) {
        (self.audio, self.total_frames)
    }
}
