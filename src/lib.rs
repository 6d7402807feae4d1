// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # AudioFrameTrim
//!
//! Frame-aligned audio trimming for video and animation pipelines.
//!
//! Audio is cut to a window expressed in *frames* of a given frame rate rather
//! than in seconds or samples. Silence can be added before and after the
//! extracted audio, and the result can be rounded to a `4N + 1` frame count
//! for consumers that require that shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_frame_trim::{AudioBuffer, AudioFrameTrim, FrameWindow};
//! use ndarray::Array2;
//!
//! // Two seconds of stereo audio at 48 kHz
//! let stereo = AudioBuffer::new_multi_channel(Array2::from_elem((2, 96000), 0.5f32), 48000)?;
//!
//! // Frames 0..30 at 30 fps, one frame of silence on each side, no alignment
//! let window = FrameWindow::new(30.0, 0, 30)
//!     .with_head_silence(1)
//!     .with_tail_silence(1)
//!     .with_alignment(false);
//!
//! let trimmed = stereo.trim_frames(&window)?;
//! assert_eq!(trimmed.audio.shape(), &[2, 32 * 1600]);
//! assert_eq!(trimmed.total_frames, 32);
//! # Ok::<(), audio_frame_trim::TrimError>(())
//! ```
//!
//! ## Head Silence Conventions
//!
//! [`HeadSilence::Frames`] counts head silence separately and requires a
//! non-negative start frame. [`HeadSilence::NegativeStart`] reads a negative
//! start frame as the amount of silence to prepend:
//!
//! ```rust
//! use audio_frame_trim::{AudioBuffer, AudioFrameTrim, FrameWindow};
//! use ndarray::Array1;
//!
//! let audio = AudioBuffer::new_mono(Array1::from_elem(96000, 1.0f32), 48000)?;
//! let window = FrameWindow::new(30.0, -10, 30)
//!     .with_negative_start()
//!     .with_alignment(false);
//!
//! let trimmed = audio.trim_frames(&window)?;
//! assert_eq!(trimmed.audio.samples_per_channel(), 64000);
//! # Ok::<(), audio_frame_trim::TrimError>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use audio_frame_trim::{AudioBuffer, AudioFrameTrim, FrameWindow, TrimError};
//! use ndarray::Array1;
//!
//! let audio = AudioBuffer::new_mono(Array1::<f32>::zeros(100), 48000).unwrap();
//!
//! match audio.trim_frames(&FrameWindow::new(0.0, 0, 30)) {
//!     Err(TrimError::InvalidFrameRate(rate)) => eprintln!("Bad frame rate: {rate}"),
//!     Err(other_err) => eprintln!("Other error: {other_err}"),
//!     Ok(_) => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - `registry` (default): named-function registry for node-graph hosts
//!
//! ## License
//!
//! MIT License

mod error;
pub mod operations;
#[cfg(feature = "registry")]
pub mod registry;
mod repr;
/// Core traits for audio samples.
pub mod traits;
pub mod utils;

pub use crate::error::{TrimError, TrimResult};
pub use crate::operations::{AudioFrameTrim, FrameWindow, HeadSilence, TrimmedAudio, trim_frames};
pub use crate::repr::{AudioBuffer, Waveform};
pub use crate::traits::AudioSample;
pub use crate::utils::{audio_math, silence};

// Re-export NonZero types used in the API
pub use core::num::NonZeroU32;
