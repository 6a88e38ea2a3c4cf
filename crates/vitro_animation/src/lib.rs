//! Vitro Animation System
//!
//! Timed keyframe tracks driven by a host display clock.
//!
//! # Features
//!
//! - **Easing Curves**: cubic ease-in/out timing functions
//! - **Spring Response**: closed-form damped spring timing curve
//! - **Typed Tracks**: keyframe animations for f32, Size, and custom types
//! - **Interruptible**: replacing a track continues from the live value
//! - **Host Clock**: the embedder advances time; no internal threads
//!
//! Every in-flight animation is an explicit record (elapsed time, duration,
//! keyframes, timing curve). Each `advance` computes the interpolated value;
//! removing a record leaves the consuming property at its last interpolated
//! value. That is the whole cancellation model: nothing queues, nothing
//! stacks.

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod track;
pub mod values;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, FloatTrackId, SchedulerHandle, SizeTrackId};
pub use spring::SpringResponse;
pub use track::{Keyframe, KeyframeTrack, TimingCurve};
pub use values::Interpolate;
