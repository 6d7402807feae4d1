//! Frame/sample conversion utilities.
//!
//! A *frame* here is a video-style time unit defined by a frame rate, not a
//! multi-channel sample tuple. All conversions truncate toward zero, and
//! callers are expected to convert each quantity separately rather than
//! deriving one truncated value from another.
//!
//! # Examples
//!
//! ```rust
//! use audio_frame_trim::audio_math::{align_4n_plus_1, frames_to_samples, samples_per_frame};
//!
//! let spf = samples_per_frame(48000, 30.0); // 1600.0
//! assert_eq!(frames_to_samples(30, spf).unwrap(), 48000);
//! assert_eq!(align_4n_plus_1(122), 125);
//! ```

use num_traits::ToPrimitive;

use crate::{TrimError, TrimResult};

// =============================================================================
// TIME/FRAME CONVERSIONS
// =============================================================================

/// Number of audio samples covered by one frame.
///
/// The result is real-valued; `44100 / 30.0` gives `1470.0` while
/// `44100 / 29.97` gives a fractional count.
#[inline]
pub fn samples_per_frame(sample_rate: u32, frame_rate: f64) -> f64 {
    sample_rate as f64 / frame_rate
}

/// Converts a frame count to a sample count, truncating toward zero.
///
/// # Errors
/// [`TrimError::InvalidParameter`] if the product is not finite or does not
/// fit in an `isize`, the largest axis length `ndarray` can allocate.
///
/// # Examples
///
/// ```rust
/// use audio_frame_trim::audio_math::frames_to_samples;
///
/// // 44100 / 29.97 ≈ 1471.47 samples per frame
/// let spf = 44100.0 / 29.97;
/// assert_eq!(frames_to_samples(1, spf).unwrap(), 1471);
/// assert_eq!(frames_to_samples(3, spf).unwrap(), 4414);
/// assert!(frames_to_samples(1, 1e300).is_err());
/// ```
#[inline]
pub fn frames_to_samples(frames: u64, samples_per_frame: f64) -> TrimResult<usize> {
    (frames as f64 * samples_per_frame)
        .to_usize()
        .filter(|&samples| samples <= isize::MAX as usize)
        .ok_or_else(|| {
            TrimError::InvalidParameter(format!(
                "{frames} frames at {samples_per_frame} samples per frame is not a valid sample count"
            ))
        })
}

/// Converts a frame position to a sample offset clamped to `total_samples`.
///
/// Positions past the end of the audio, however large, land on
/// `total_samples`.
#[inline]
pub fn frames_to_sample_offset(
    frames: u64,
    samples_per_frame: f64,
    total_samples: usize,
) -> usize {
    (frames as f64 * samples_per_frame)
        .to_usize()
        .map_or(total_samples, |samples| samples.min(total_samples))
}

/// Converts a sample count to a whole number of frames, truncating toward zero.
#[inline]
pub fn samples_to_frames(samples: usize, samples_per_frame: f64) -> usize {
    (samples as f64 / samples_per_frame) as usize
}

// =============================================================================
// 4N+1 ALIGNMENT
// =============================================================================

/// Rounds a frame count up to the nearest value of the form `4N + 1`.
///
/// The remainder is taken with a non-negative modulus, so a count of `0`
/// rounds up to `1`.
///
/// # Examples
///
/// ```rust
/// use audio_frame_trim::audio_math::align_4n_plus_1;
///
/// assert_eq!(align_4n_plus_1(0), 1);
/// assert_eq!(align_4n_plus_1(121), 121);
/// assert_eq!(align_4n_plus_1(122), 125);
/// ```
#[inline]
pub const fn align_4n_plus_1(frames: usize) -> usize {
    // (frames - 1) mod 4 without going negative
    let remainder = (frames + 3) % 4;
    if remainder == 0 {
        frames
    } else {
        frames + (4 - remainder)
    }
}

/// Returns true if `frames` already has the form `4N + 1`.
#[inline]
pub const fn is_4n_plus_1(frames: usize) -> bool {
    frames % 4 == 1
}
