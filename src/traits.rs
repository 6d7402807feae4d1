use bytemuck::NoUninit;
use num_traits::{Num, NumCast, Zero};
use std::fmt::{Debug, Display};

/// Core trait defining the element types a waveform may hold.
///
/// Samples must be cheaply copyable, shareable across threads and have a
/// zero value that stands in for silence.
///
/// # Common Types
/// - `i16`: 16-bit signed integer samples (most common for audio files)
/// - `i32`: 32-bit signed integer samples (high precision)
/// - `f32`: 32-bit floating-point samples (normalized -1.0 to 1.0)
/// - `f64`: 64-bit floating-point samples (highest precision)
///
/// This trait is implemented automatically for every type satisfying the
/// bounds below. No manual implementation is required.
pub trait AudioSample:
    // Standard library traits
    Copy
    + Sized
    + Default
    + Display
    + Debug
    + Sync
    + Send
    + PartialEq
    + PartialOrd
    + 'static

    // External crate traits
    + NoUninit // bytemuck trait to ensure no uninitialized bytes
    + Num // num-traits trait for numeric operations
    + NumCast
    + Zero
{
    /// The value used for synthesised silence.
    #[inline]
    fn silence() -> Self {
        Self::zero()
    }
}

impl<T> AudioSample for T where
    T: Copy
        + Sized
        + Default
        + Display
        + Debug
        + Sync
        + Send
        + PartialEq
        + PartialOrd
        + 'static
        + NoUninit
        + Num
        + NumCast
        + Zero
{
}
