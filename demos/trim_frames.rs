use audio_frame_trim::{AudioBuffer, AudioFrameTrim, FrameWindow, TrimResult};
use ndarray::Array2;

pub fn main() -> TrimResult<()> {
    let sample_rate_hz = 48_000u32;

    // Base signal: 2 seconds of stereo 440 Hz sine.
    let data = Array2::from_shape_fn((2, 2 * sample_rate_hz as usize), |(_, i)| {
        let t = i as f32 / sample_rate_hz as f32;
        (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.8
    });
    let audio = AudioBuffer::new_multi_channel(data, sample_rate_hz)?;
    println!(
        "Original:  shape={:?}  dur={:.3}s",
        audio.shape(),
        audio.duration_seconds()
    );

    // Plain window, no alignment.
    let window = FrameWindow::new(30.0, 15, 45).with_alignment(false);
    let plain = audio.trim_frames(&window)?;
    println!(
        "Frames 15..45 @ 30fps: frames={}  dur={:.3}s",
        plain.total_frames,
        plain.audio.duration_seconds()
    );

    // Head and tail silence with 4N+1 alignment.
    let window = FrameWindow::new(30.0, 15, 45)
        .with_head_silence(3)
        .with_tail_silence(5);
    let padded = audio.trim_frames(&window)?;
    println!(
        "With silence + 4N+1: frames={}  samples={}",
        padded.total_frames,
        padded.audio.samples_per_channel()
    );

    // Negative start frame as head silence.
    let window = FrameWindow::new(24.0, -12, 24).with_negative_start();
    let lead_in = audio.trim_frames(&window)?;
    println!(
        "Frames -12..24 @ 24fps: frames={}  dur={:.3}s",
        lead_in.total_frames,
        lead_in.audio.duration_seconds()
    );

    Ok(())
}
