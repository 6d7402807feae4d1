//! Silence generation.

use ndarray::{ArrayD, IxDyn};

use crate::{AudioSample, TrimError, TrimResult};

/// Generates a block of silence with the given leading shape and length.
///
/// The returned array has shape `leading_shape + [num_samples]`, so it can be
/// concatenated along the time axis of any waveform sharing `leading_shape`.
///
/// # Errors
/// [`TrimError::InvalidParameter`] if the product of the non-zero axis
/// lengths overflows `isize`.
///
/// # Examples
///
/// ```rust
/// use audio_frame_trim::silence;
///
/// let block = silence::<f32>(&[2], 4).unwrap();
/// assert_eq!(block.shape(), &[2, 4]);
/// assert!(block.iter().all(|&s| s == 0.0));
/// ```
pub fn silence<T: AudioSample>(
    leading_shape: &[usize],
    num_samples: usize,
) -> TrimResult<ArrayD<T>> {
    let mut shape = Vec::with_capacity(leading_shape.len() + 1);
    shape.extend_from_slice(leading_shape);
    shape.push(num_samples);

    let fits = shape
        .iter()
        .filter(|&&len| len != 0)
        .try_fold(1usize, |acc, &len| acc.checked_mul(len))
        .is_some_and(|elements| elements <= isize::MAX as usize);
    if !fits {
        return Err(TrimError::InvalidParameter(format!(
            "Silence of shape {shape:?} is too large"
        )));
    }
    Ok(ArrayD::from_elem(IxDyn(&shape), T::silence()))
}
