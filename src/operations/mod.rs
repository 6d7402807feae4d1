//! Audio operations.
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`trim`] - Frame-aligned trimming
//! - [`types`] - Supporting types
//!
//! ## Quick Start
//!
//! ```rust
//! use audio_frame_trim::{AudioBuffer, operations::*};
//! use ndarray::Array1;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let audio = AudioBuffer::new_mono(Array1::from_elem(48000, 0.25f32), 48000)?;
//!
//! let window = FrameWindow::new(25.0, 5, 20).with_tail_silence(2);
//! let trimmed = audio.trim_frames(&window)?;
//! assert_eq!(trimmed.total_frames, 17);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod traits;
pub mod trim;
pub mod types;

pub use traits::AudioFrameTrim;
pub use trim::trim_frames;
pub use types::{FrameWindow, HeadSilence, TrimmedAudio};
