//! Utility functions for frame trimming.
//!
//! # Modules
//!
//! - [`audio_math`] - Frame/sample conversions and 4N+1 alignment
//! - [`generation`] - Silence generation

pub mod audio_math;
pub mod generation;

pub use generation::silence;
