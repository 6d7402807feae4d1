//! Frame-aligned trimming for AudioBuffer.
//!
//! This module implements the [`AudioFrameTrim`] trait. A trim runs in a
//! fixed order: head silence, slice extraction, tail silence, frame count,
//! then optional 4N+1 alignment. Every frame to sample conversion truncates
//! on its own, so non-integral samples-per-frame values accumulate exactly
//! as they would step by step.

use ndarray::{ArrayD, Axis, Slice, concatenate};
use tracing::{debug, trace};

use super::traits::AudioFrameTrim;
use super::types::{FrameWindow, HeadSilence, TrimmedAudio};
use crate::utils::audio_math::{
    align_4n_plus_1, frames_to_sample_offset, frames_to_samples, samples_to_frames,
};
use crate::{AudioBuffer, AudioSample, TrimError, TrimResult, silence};

impl<T: AudioSample> AudioFrameTrim<T> for AudioBuffer<T> {
    fn trim_frames(&self, window: &FrameWindow) -> TrimResult<TrimmedAudio<T>> {
        trim_frames(self, window)
    }
}

/// Trims `audio` to the frame window described by `window`.
///
/// See [`AudioFrameTrim::trim_frames`].
///
/// # Examples
///
/// ```rust
/// use audio_frame_trim::{AudioBuffer, FrameWindow, trim_frames};
/// use ndarray::Array1;
///
/// let audio = AudioBuffer::new_mono(Array1::from_elem(96000, 0.5f32), 48000).unwrap();
/// let window = FrameWindow::new(30.0, 0, 30).with_alignment(false);
///
/// let trimmed = trim_frames(&audio, &window).unwrap();
/// assert_eq!(trimmed.audio.samples_per_channel(), 48000);
/// assert_eq!(trimmed.total_frames, 30);
/// ```
pub fn trim_frames<T: AudioSample>(
    audio: &AudioBuffer<T>,
    window: &FrameWindow,
) -> TrimResult<TrimmedAudio<T>> {
    window.validate()?;

    let spf = window.samples_per_frame(audio.sample_rate());
    if !spf.is_finite() {
        return Err(TrimError::InvalidParameter(format!(
            "Frame rate {} gives a non-finite number of samples per frame",
            window.frame_rate
        )));
    }
    let total_samples = audio.samples_per_channel();
    let time_axis = audio.time_axis();
    let leading_shape = audio.leading_shape();

    // start_frame >= 0 is guaranteed by validate() except under NegativeStart
    let (head_samples, start_sample) = match window.head {
        HeadSilence::NegativeStart if window.start_frame < 0 => {
            (frames_to_samples(window.start_frame.unsigned_abs(), spf)?, 0)
        }
        HeadSilence::NegativeStart => (
            0,
            frames_to_sample_offset(window.start_frame as u64, spf, total_samples),
        ),
        HeadSilence::Frames(frames) => (
            frames_to_samples(u64::from(frames), spf)?,
            frames_to_sample_offset(window.start_frame as u64, spf, total_samples),
        ),
    };
    // An end before the start yields an empty slice
    let end_sample =
        frames_to_sample_offset(window.end_frame as u64, spf, total_samples).max(start_sample);
    let tail_samples = frames_to_samples(u64::from(window.tail_silence_frames), spf)?;

    trace!(head_samples, tail_samples, "synthesising silence");

    let waveform = audio.waveform();
    let extracted = waveform.slice_axis(time_axis, Slice::from(start_sample..end_sample));
    let head = silence::<T>(leading_shape, head_samples)?;
    let tail = silence::<T>(leading_shape, tail_samples)?;
    let trimmed = concatenate(time_axis, &[head.view(), extracted, tail.view()])
        .map_err(|e| TrimError::DimensionMismatch(format!("Concatenation failed: {}", e)))?;

    let current_samples = trimmed.len_of(time_axis);
    let total_frames = samples_to_frames(current_samples, spf);

    let (trimmed, reported_frames) = if window.align_4n_plus_1 {
        let aligned_frames = align_4n_plus_1(total_frames);
        let target_samples = frames_to_samples(aligned_frames as u64, spf)?;
        trace!(
            total_frames,
            aligned_frames,
            current_samples,
            target_samples,
            "aligning to 4N+1 frames"
        );
        (
            fit_to_length(trimmed, time_axis, target_samples)?,
            aligned_frames,
        )
    } else {
        (trimmed, total_frames)
    };

    debug!(
        samples_per_frame = spf,
        start_sample,
        end_sample,
        output_samples = trimmed.len_of(time_axis),
        total_frames = reported_frames,
        "trimmed audio to frame window"
    );

    Ok(TrimmedAudio {
        audio: AudioBuffer::with_sample_rate(trimmed, audio.sample_rate_nonzero())?,
        total_frames: reported_frames,
    })
}

/// Pads with trailing silence or drops trailing samples so the time axis is
/// exactly `target_samples` long.
fn fit_to_length<T: AudioSample>(
    mut waveform: ArrayD<T>,
    time_axis: Axis,
    target_samples: usize,
) -> TrimResult<ArrayD<T>> {
    let current_samples = waveform.len_of(time_axis);
    if target_samples > current_samples {
        let leading_shape = &waveform.shape()[..time_axis.index()];
        let padding = silence::<T>(leading_shape, target_samples - current_samples)?;
        concatenate(time_axis, &[waveform.view(), padding.view()])
            .map_err(|e| TrimError::DimensionMismatch(format!("Padding failed: {}", e)))
    } else {
        waveform.slice_axis_inplace(time_axis, Slice::from(..target_samples));
        Ok(waveform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, ArrayD, IxDyn, s};

    /// Mono ramp `1, 2, 3, ...` so extracted positions are easy to check.
    fn ramp(len: usize, sample_rate: u32) -> AudioBuffer<f32> {
        let data = Array1::from_iter((1..=len).map(|i| i as f32));
        AudioBuffer::new_mono(data, sample_rate).unwrap()
    }

    fn mono_samples(audio: &AudioBuffer<f32>) -> Vec<f32> {
        audio.waveform().iter().copied().collect()
    }

    #[test]
    fn test_one_second_window() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, 0, 30).with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.audio.samples_per_channel(), 48000);
        assert_eq!(trimmed.audio.sample_rate(), 48000);
        assert_eq!(trimmed.total_frames, 30);
        let samples = mono_samples(&trimmed.audio);
        assert_eq!(samples[0], 1.0);
        assert_eq!(samples[47999], 48000.0);
    }

    #[test]
    fn test_offset_window_extracts_from_start_sample() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, 10, 20).with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        assert_eq!(samples.len(), 16000);
        // frame 10 starts at sample 16000, which holds the value 16001
        assert_eq!(samples[0], 16001.0);
        assert_eq!(samples[15999], 32000.0);
    }

    #[test]
    fn test_default_alignment_pads_to_4n_plus_1() {
        let audio = ramp(96000, 48000);
        // 30 frames -> 33 frames
        let trimmed = audio.trim_frames(&FrameWindow::default()).unwrap();

        assert_eq!(trimmed.total_frames, 33);
        assert_eq!(trimmed.audio.samples_per_channel(), 33 * 1600);
        let samples = mono_samples(&trimmed.audio);
        assert_eq!(samples[47999], 48000.0);
        assert!(samples[48000..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_tail_silence() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, 0, 30)
            .with_tail_silence(5)
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        assert_eq!(samples.len(), 48000 + 5 * 1600);
        assert_eq!(samples[47999], 48000.0);
        assert!(samples[48000..].iter().all(|&s| s == 0.0));
        assert_eq!(trimmed.total_frames, 35);
    }

    #[test]
    fn test_head_silence() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, 0, 30)
            .with_head_silence(2)
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        assert_eq!(samples.len(), 3200 + 48000);
        assert!(samples[..3200].iter().all(|&s| s == 0.0));
        assert_eq!(samples[3200], 1.0);
        assert_eq!(trimmed.total_frames, 32);
    }

    #[test]
    fn test_alignment_rounds_122_to_125() {
        let audio = ramp(200_000, 48000);
        let window = FrameWindow::new(30.0, 0, 122);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.total_frames, 125);
        assert_eq!(trimmed.audio.samples_per_channel(), 125 * 1600);
        let samples = mono_samples(&trimmed.audio);
        assert_eq!(samples[122 * 1600 - 1], (122 * 1600) as f32);
        assert!(samples[122 * 1600..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_alignment_keeps_121() {
        let audio = ramp(200_000, 48000);
        let window = FrameWindow::new(30.0, 0, 121);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.total_frames, 121);
        assert_eq!(trimmed.audio.samples_per_channel(), 121 * 1600);
    }

    #[test]
    fn test_alignment_truncates_partial_frame() {
        // end frame is clamped to the 193700 available samples: 121 whole frames
        // plus 100 samples, which alignment drops
        let audio = ramp(121 * 1600 + 100, 48000);
        let window = FrameWindow::new(30.0, 0, 200);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.total_frames, 121);
        assert_eq!(trimmed.audio.samples_per_channel(), 121 * 1600);
        let samples = mono_samples(&trimmed.audio);
        assert_eq!(samples[121 * 1600 - 1], (121 * 1600) as f32);
    }

    #[test]
    fn test_negative_start_prepends_silence() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, -10, 30)
            .with_negative_start()
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        assert_eq!(samples.len(), 64000);
        assert!(samples[..16000].iter().all(|&s| s == 0.0));
        assert_eq!(samples[16000], 1.0);
        assert_eq!(samples[63999], 48000.0);
        assert_eq!(trimmed.total_frames, 40);
    }

    #[test]
    fn test_negative_start_policy_with_positive_start() {
        let audio = ramp(96000, 48000);
        let window = FrameWindow::new(30.0, 10, 30)
            .with_negative_start()
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        assert_eq!(samples.len(), 32000);
        assert_eq!(samples[0], 16001.0);
    }

    #[test]
    fn test_non_integral_samples_per_frame_truncates_each_step() {
        // 44100 / 29.97 ≈ 1471.47 samples per frame
        let audio = ramp(44100, 44100);
        let window = FrameWindow::new(29.97, 1, 11)
            .with_head_silence(3)
            .with_tail_silence(2);

        let trimmed = audio.trim_frames(&window).unwrap();
        let samples = mono_samples(&trimmed.audio);

        // head 4414 + slice (1471..16186) 14715 + tail 2942 = 22071 samples,
        // 14 whole frames, aligned to 17 frames = 25015 samples
        assert_eq!(trimmed.total_frames, 17);
        assert_eq!(samples.len(), 25015);
        assert!(samples[..4414].iter().all(|&s| s == 0.0));
        assert_eq!(samples[4414], 1472.0);
        assert_eq!(samples[4414 + 14715 - 1], 16186.0);
        assert!(samples[4414 + 14715..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_window_past_end_is_clamped_to_empty_slice() {
        let audio = ramp(1000, 48000);
        let window = FrameWindow::new(30.0, 10, 20)
            .with_tail_silence(1)
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.audio.samples_per_channel(), 1600);
        assert!(mono_samples(&trimmed.audio).iter().all(|&s| s == 0.0));
        assert_eq!(trimmed.total_frames, 1);
    }

    #[test]
    fn test_empty_output_aligns_to_one_frame() {
        let audio = ramp(1000, 48000);
        let window = FrameWindow::new(30.0, 10, 20);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.total_frames, 1);
        assert_eq!(trimmed.audio.samples_per_channel(), 1600);
    }

    #[test]
    fn test_batched_multichannel_shape_preserved() {
        // (batch, channels, samples) with channel 1 negated
        let mut data = ArrayD::<f64>::zeros(IxDyn(&[1, 2, 48000]));
        for i in 0..48000 {
            data[[0, 0, i]] = i as f64;
            data[[0, 1, i]] = -(i as f64);
        }
        let audio = AudioBuffer::new(data, 48000).unwrap();
        let window = FrameWindow::new(30.0, 5, 15)
            .with_head_silence(1)
            .with_tail_silence(1);

        let trimmed = audio.trim_frames(&window).unwrap();
        let out = trimmed.audio.waveform();

        // 12 frames -> 13 frames
        assert_eq!(trimmed.total_frames, 13);
        assert_eq!(trimmed.audio.leading_shape(), audio.leading_shape());
        assert_eq!(out.shape(), &[1, 2, 13 * 1600]);
        assert_eq!(out[[0, 0, 1600]], 8000.0);
        assert_eq!(out[[0, 1, 1600]], -8000.0);
        assert!(out.slice(s![.., .., ..1600]).iter().all(|&s| s == 0.0));
        assert!(out.slice(s![.., .., 17600..]).iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_negative_start_multichannel_shape_preserved() {
        // (batch, channels, samples) with channel 1 negated
        let mut data = ArrayD::<f32>::zeros(IxDyn(&[2, 2, 9600]));
        for b in 0..2 {
            for i in 0..9600 {
                data[[b, 0, i]] = (i + 1) as f32;
                data[[b, 1, i]] = -((i + 1) as f32);
            }
        }
        let audio = AudioBuffer::new(data, 48000).unwrap();
        let window = FrameWindow::new(30.0, -2, 3)
            .with_negative_start()
            .with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let out = trimmed.audio.waveform();

        // 2 frames of silence, then source samples 0..4800
        assert_eq!(out.shape(), &[2, 2, 3200 + 4800]);
        assert_eq!(trimmed.total_frames, 5);
        assert!(out.slice(s![.., .., ..3200]).iter().all(|&s| s == 0.0));
        for b in 0..2 {
            assert_eq!(out[[b, 0, 3200]], 1.0);
            assert_eq!(out[[b, 1, 3200]], -1.0);
            assert_eq!(out[[b, 0, 7999]], 4800.0);
            assert_eq!(out[[b, 1, 7999]], -4800.0);
        }
    }

    #[test]
    fn test_tiny_frame_rate_returns_error() {
        let audio = AudioBuffer::new_mono(Array1::from_elem(100, 1.0f32), 48000).unwrap();

        // aligning to one frame would need ~4.8e304 samples
        let result = audio.trim_frames(&FrameWindow::new(1e-300, 0, 1));
        assert!(matches!(result, Err(TrimError::InvalidParameter(_))));

        let result = audio.trim_frames(
            &FrameWindow::new(1e-300, 0, 1)
                .with_tail_silence(1)
                .with_alignment(false),
        );
        assert!(matches!(result, Err(TrimError::InvalidParameter(_))));

        // samples per frame overflows to infinity
        let result = audio.trim_frames(&FrameWindow::new(1e-320, 0, 1));
        assert!(matches!(result, Err(TrimError::InvalidParameter(_))));
    }

    #[test]
    fn test_tiny_frame_rate_without_padding_clamps_slice() {
        let audio = AudioBuffer::new_mono(Array1::from_elem(100, 1.0f32), 48000).unwrap();
        let window = FrameWindow::new(1e-300, 0, 1).with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();

        assert_eq!(trimmed.audio.samples_per_channel(), 100);
        assert_eq!(trimmed.total_frames, 0);
    }

    #[test]
    fn test_integer_samples() {
        let data = Array2::from_shape_fn((2, 8000), |(ch, i)| (ch * 100 + i % 100) as i16);
        let audio = AudioBuffer::new_multi_channel(data, 8000).unwrap();
        let window = FrameWindow::new(10.0, 1, 3).with_alignment(false);

        let trimmed = audio.trim_frames(&window).unwrap();
        let out = trimmed.audio.waveform();

        assert_eq!(out.shape(), &[2, 1600]);
        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[1, 0]], 100);
        assert_eq!(trimmed.total_frames, 2);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let audio = ramp(96000, 48000);
        let first = audio
            .trim_frames(
                &FrameWindow::new(30.0, 3, 27)
                    .with_head_silence(2)
                    .with_tail_silence(4),
            )
            .unwrap();

        let output_samples = first.audio.samples_per_channel();
        assert_eq!(output_samples % 1600, 0);
        let covering_end = (output_samples / 1600) as i64;
        let window = FrameWindow::new(30.0, 0, covering_end).with_alignment(false);
        let second = first.audio.trim_frames(&window).unwrap();

        assert_eq!(second.audio, first.audio);
    }

    #[test]
    fn test_invalid_frame_rate() {
        let audio = ramp(1000, 48000);
        for rate in [0.0, -1.0] {
            let result = audio.trim_frames(&FrameWindow::new(rate, 0, 30));
            assert!(matches!(result, Err(TrimError::InvalidFrameRate(_))));
        }
    }

    #[test]
    fn test_invalid_window() {
        let audio = ramp(1000, 48000);
        for (start, end) in [(30, 30), (31, 30)] {
            let result = audio.trim_frames(&FrameWindow::new(30.0, start, end));
            assert!(matches!(result, Err(TrimError::InvalidWindow { .. })));
        }
    }

    #[test]
    fn test_input_is_not_modified() {
        let audio = ramp(4800, 48000);
        let before = audio.clone();
        let window = FrameWindow::new(30.0, 0, 2)
            .with_head_silence(1)
            .with_tail_silence(1);

        let _ = audio.trim_frames(&window).unwrap();

        assert_eq!(audio, before);
    }

    #[test]
    fn test_into_parts() {
        let audio = ramp(4800, 48000);
        let (buffer, frames) = trim_frames(&audio, &FrameWindow::new(30.0, 0, 1))
            .unwrap()
            .into_parts();
        assert_eq!(buffer.samples_per_channel(), 1600);
        assert_eq!(frames, 1);
    }
}
