use crate::foundation::core::Fps;

pub fn seconds_to_frames(seconds: f64, fps: Fps) -> u64 {
    fps.secs_to_frames_round(seconds)
}

pub fn frames_to_seconds(frames: u64, fps: Fps) -> f64 {
    fps.frames_to_secs(frames)
}

/// `MM:SS:FF`, or `H:MM:SS:FF` once the timeline passes an hour.
pub fn format_timecode(frames: u64, fps: Fps) -> String {
    let total_secs = frames_to_seconds(frames, fps).floor() as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    let per_sec = fps.as_f64().round().max(1.0) as u64;
    let rem = frames % per_sec;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}:{rem:02}")
    } else {
        format!("{minutes:02}:{seconds:02}:{rem:02}")
    }
}

/// Frame span `[start, end)` for a time window in seconds.
pub fn frame_range(start_secs: f64, end_secs: f64, fps: Fps) -> (u64, u64) {
    (
        seconds_to_frames(start_secs, fps),
        seconds_to_frames(end_secs, fps),
    )
}

/// Linear progress of `frame` through `[start, start + duration)`, clamped to `[0, 1]`.
pub fn frame_progress(frame: f64, start: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        return if frame >= start { 1.0 } else { 0.0 };
    }
    ((frame - start) / duration).clamp(0.0, 1.0)
}

pub fn loop_frame(frame: u64, total: u64) -> u64 {
    if total == 0 { 0 } else { frame % total }
}

/// Triangle wave in `[0, 1]` with period `total` frames.
pub fn ping_pong(frame: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let half = total as f64 / 2.0;
    let pos = (frame % total) as f64;
    if pos < half {
        pos / half
    } else {
        1.0 - (pos - half) / half
    }
}
