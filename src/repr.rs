//! Core audio buffer representation.
//!
//! An [`AudioBuffer<T>`] pairs an N-dimensional `ndarray` waveform with its
//! sample rate. The last axis is always time; every leading axis (batch,
//! channel, ...) is opaque and carried through operations unchanged.
//!
//! # Examples
//!
//! ```rust
//! use audio_frame_trim::AudioBuffer;
//! use ndarray::array;
//!
//! // Mono audio from a 1D array
//! let mono = AudioBuffer::new_mono(array![0.1f32, 0.2, 0.3, 0.4, 0.5], 44100).unwrap();
//! assert_eq!(mono.samples_per_channel(), 5);
//! assert_eq!(mono.leading_shape(), &[] as &[usize]);
//!
//! // Stereo audio (2 channels × 3 samples)
//! let stereo = AudioBuffer::new_multi_channel(
//!     array![[0.1f32, 0.2, 0.3], [0.4f32, 0.5, 0.6]],
//!     48000,
//! )
//! .unwrap();
//! assert_eq!(stereo.leading_shape(), &[2]);
//! assert_eq!(stereo.samples_per_channel(), 3);
//! ```
use ndarray::{Array1, Array2, ArrayD, ArrayViewD, Axis};
use std::num::NonZeroU32;

use crate::{AudioSample, TrimError, TrimResult};

/// N-dimensional waveform with time on the last axis.
pub type Waveform<T> = ArrayD<T>;

/// Audio samples with an associated sample rate.
///
/// Buffers are treated as immutable inputs: operations borrow them and
/// return freshly allocated buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer<T: AudioSample> {
    waveform: Waveform<T>,
    sample_rate: NonZeroU32,
}

impl<T: AudioSample> AudioBuffer<T> {
    /// Creates a buffer from an N-dimensional waveform.
    ///
    /// # Errors
    /// - [`TrimError::InvalidParameter`] if `sample_rate` is zero.
    /// - [`TrimError::DimensionMismatch`] if the waveform has no time axis (rank 0).
    pub fn new(waveform: Waveform<T>, sample_rate: u32) -> TrimResult<Self> {
        let sample_rate = NonZeroU32::new(sample_rate).ok_or_else(|| {
            TrimError::InvalidParameter("Sample rate must be greater than 0".to_string())
        })?;
        Self::with_sample_rate(waveform, sample_rate)
    }

    /// Creates a buffer from a waveform and an already validated sample rate.
    ///
    /// # Errors
    /// [`TrimError::DimensionMismatch`] if the waveform has no time axis (rank 0).
    pub fn with_sample_rate(waveform: Waveform<T>, sample_rate: NonZeroU32) -> TrimResult<Self> {
        if waveform.ndim() == 0 {
            return Err(TrimError::DimensionMismatch(
                "Waveform must have at least one (time) axis".to_string(),
            ));
        }
        Ok(Self {
            waveform,
            sample_rate,
        })
    }

    /// Creates a mono buffer from a 1D array.
    pub fn new_mono(data: Array1<T>, sample_rate: u32) -> TrimResult<Self> {
        Self::new(data.into_dyn(), sample_rate)
    }

    /// Creates a multi-channel buffer from a `(channels, samples)` array.
    pub fn new_multi_channel(data: Array2<T>, sample_rate: u32) -> TrimResult<Self> {
        Self::new(data.into_dyn(), sample_rate)
    }

    /// Returns the sample rate in Hz
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate.get()
    }

    /// Returns the sample rate as a non-zero value.
    pub const fn sample_rate_nonzero(&self) -> NonZeroU32 {
        self.sample_rate
    }

    /// Returns a view of the waveform.
    pub fn waveform(&self) -> ArrayViewD<'_, T> {
        self.waveform.view()
    }

    /// Consumes the buffer and returns the owned waveform.
    pub fn into_waveform(self) -> Waveform<T> {
        self.waveform
    }

    /// Index of the time axis (always the last one).
    pub fn time_axis(&self) -> Axis {
        Axis(self.waveform.ndim() - 1)
    }

    /// Returns the number of samples along the time axis.
    pub fn samples_per_channel(&self) -> usize {
        self.waveform.len_of(self.time_axis())
    }

    /// Shape of every axis except time.
    pub fn leading_shape(&self) -> &[usize] {
        let shape = self.waveform.shape();
        &shape[..shape.len() - 1]
    }

    /// Full shape of the waveform, time axis last.
    pub fn shape(&self) -> &[usize] {
        self.waveform.shape()
    }

    /// Returns the duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples_per_channel() as f64 / self.sample_rate() as f64
    }

    /// Returns true if there are no samples along the time axis.
    pub fn is_empty(&self) -> bool {
        self.samples_per_channel() == 0
    }
}
