//! Keyframe tracks
//!
//! A track is the explicit record of one in-flight animation: its keyframes,
//! total duration, and elapsed time. The host clock advances it through
//! `tick`; `value` samples the interpolated state. Completion clamps to the
//! final keyframe exactly, so a finished track never leaves residual
//! interpolation error on the property it feeds.

use crate::easing::Easing;
use crate::spring::SpringResponse;
use crate::values::Interpolate;

/// Per-segment timing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimingCurve {
    Ease(Easing),
    Spring(SpringResponse),
}

impl TimingCurve {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            TimingCurve::Ease(easing) => easing.apply(t),
            TimingCurve::Spring(spring) => spring.eval(t),
        }
    }
}

impl From<Easing> for TimingCurve {
    fn from(easing: Easing) -> Self {
        TimingCurve::Ease(easing)
    }
}

impl From<SpringResponse> for TimingCurve {
    fn from(spring: SpringResponse) -> Self {
        TimingCurve::Spring(spring)
    }
}

/// A keyframe holding a value of type T
///
/// The curve shapes the transition *into* this keyframe from the previous
/// one.
#[derive(Clone, Debug)]
pub struct Keyframe<T: Interpolate> {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Value at this keyframe
    pub value: T,
    /// Timing curve for the segment ending at this keyframe
    pub curve: TimingCurve,
}

impl<T: Interpolate> Keyframe<T> {
    pub fn new(time: f32, value: T, curve: impl Into<TimingCurve>) -> Self {
        Self {
            time,
            value,
            curve: curve.into(),
        }
    }
}

/// A timed keyframe animation over any interpolatable type
#[derive(Clone, Debug)]
pub struct KeyframeTrack<T: Interpolate> {
    /// Duration in milliseconds
    duration_ms: u32,
    /// Keyframes sorted by time
    keyframes: Vec<Keyframe<T>>,
    /// Elapsed time in milliseconds
    elapsed_ms: f32,
    /// Whether the track is advancing
    playing: bool,
}

impl<T: Interpolate> KeyframeTrack<T> {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            keyframes: Vec::new(),
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    /// Two-keyframe track from `from` to `to` under a single curve
    pub fn from_to(duration_ms: u32, from: T, to: T, curve: impl Into<TimingCurve>) -> Self {
        let curve = curve.into();
        Self::new(duration_ms)
            .keyframe(0.0, from, curve)
            .keyframe(1.0, to, curve)
    }

    /// Add a keyframe (builder pattern)
    pub fn keyframe(mut self, time: f32, value: T, curve: impl Into<TimingCurve>) -> Self {
        self.keyframes.push(Keyframe::new(time, value, curve));
        self.keyframes
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
        self
    }

    /// Start playing from the beginning (builder pattern)
    pub fn started(mut self) -> Self {
        self.start();
        self
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Progress through the track (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
        }
    }

    /// Sample the interpolated value at the current progress
    pub fn value(&self) -> Option<T> {
        self.sample_at(self.progress())
    }

    /// Final keyframe value, if any
    pub fn end_value(&self) -> Option<T> {
        self.keyframes.last().map(|kf| kf.value.clone())
    }

    /// Sample at a specific progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> Option<T> {
        if self.keyframes.is_empty() {
            return None;
        }

        let progress = progress.clamp(0.0, 1.0);

        // Find the keyframes surrounding this progress
        let mut prev_kf = &self.keyframes[0];
        let mut next_kf = &self.keyframes[0];

        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return Some(prev_kf.value.clone());
        }

        let local = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let shaped = next_kf.curve.apply(local);

        Some(prev_kf.value.lerp(&next_kf.value, shaped))
    }
}
