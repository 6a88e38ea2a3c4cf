//! Animation scheduler
//!
//! Owns every in-flight track and advances them when the host display clock
//! ticks. The scheduler never spawns threads and never reads a wall clock:
//! the embedder calls `advance` with the frame delta, which keeps animation
//! progress deterministic and lets tests drive a simulated clock. A paused
//! render loop simply stops advancing; tracks resume where they left off.
//!
//! Components hold a [`SchedulerHandle`] (a weak reference) so a dropped
//! scheduler degrades to no-op registration rather than dangling state.

use crate::track::KeyframeTrack;
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tracing::trace;
use vitro_core::Size;

new_key_type! {
    /// Handle to a registered f32 track (opacity, scale)
    pub struct FloatTrackId;
    /// Handle to a registered Size track (stretch)
    pub struct SizeTrackId;
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    floats: SlotMap<FloatTrackId, KeyframeTrack<f32>>,
    sizes: SlotMap<SizeTrackId, KeyframeTrack<Size>>,
}

/// The animation scheduler that ticks all active tracks
///
/// Held by the application's composition root; components register tracks
/// through handles. The host is responsible for calling `advance` once per
/// display frame.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                floats: SlotMap::with_key(),
                sizes: SlotMap::with_key(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all tracks by the host frame delta
    ///
    /// Returns true if any track is still playing (needs another frame).
    pub fn advance(&self, dt: Duration) -> bool {
        let dt_ms = dt.as_secs_f32() * 1000.0;
        let mut inner = self.inner.lock().unwrap();

        for (_, track) in inner.floats.iter_mut() {
            track.tick(dt_ms);
        }
        for (_, track) in inner.sizes.iter_mut() {
            track.tick(dt_ms);
        }

        // Tracks are only removed by their owning component (on completion
        // snap or cancellation), never here: a finished track still reports
        // its exact terminal value until the owner consumes it.
        inner.floats.iter().any(|(_, t)| t.is_playing())
            || inner.sizes.iter().any(|(_, t)| t.is_playing())
    }

    /// Check if any tracks are still playing
    pub fn has_active(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.floats.iter().any(|(_, t)| t.is_playing())
            || inner.sizes.iter().any(|(_, t)| t.is_playing())
    }

    pub fn float_count(&self) -> usize {
        self.inner.lock().unwrap().floats.len()
    }

    pub fn size_count(&self) -> usize {
        self.inner.lock().unwrap().sizes.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that register tracks. It won't keep the scheduler
/// alive; every operation no-ops once the scheduler is dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Float tracks
    // =========================================================================

    /// Register a float track and return its ID
    pub fn register_float(&self, track: KeyframeTrack<f32>) -> Option<FloatTrackId> {
        self.inner.upgrade().map(|inner| {
            let id = inner.lock().unwrap().floats.insert(track);
            trace!(?id, "float track registered");
            id
        })
    }

    /// Current interpolated value of a float track
    pub fn float_value(&self, id: FloatTrackId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().floats.get(id).and_then(|t| t.value()))
    }

    /// Final keyframe value of a float track
    pub fn float_end_value(&self, id: FloatTrackId) -> Option<f32> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .floats
                .get(id)
                .and_then(|t| t.end_value())
        })
    }

    /// Whether a float track is still playing
    ///
    /// A missing track (scheduler dropped, or already removed) reports not
    /// playing.
    pub fn is_float_playing(&self, id: FloatTrackId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .floats
                    .get(id)
                    .map(|t| t.is_playing())
            })
            .unwrap_or(false)
    }

    /// Remove a float track
    ///
    /// The property it fed keeps its last interpolated value; this is how an
    /// in-flight animation is cancelled.
    pub fn remove_float(&self, id: FloatTrackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().floats.remove(id);
        }
    }

    // =========================================================================
    // Size tracks
    // =========================================================================

    /// Register a size track and return its ID
    pub fn register_size(&self, track: KeyframeTrack<Size>) -> Option<SizeTrackId> {
        self.inner.upgrade().map(|inner| {
            let id = inner.lock().unwrap().sizes.insert(track);
            trace!(?id, "size track registered");
            id
        })
    }

    /// Current interpolated value of a size track
    pub fn size_value(&self, id: SizeTrackId) -> Option<Size> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().sizes.get(id).and_then(|t| t.value()))
    }

    /// Final keyframe value of a size track
    pub fn size_end_value(&self, id: SizeTrackId) -> Option<Size> {
        self.inner.upgrade().and_then(|inner| {
            inner
                .lock()
                .unwrap()
                .sizes
                .get(id)
                .and_then(|t| t.end_value())
        })
    }

    /// Whether a size track is still playing
    pub fn is_size_playing(&self, id: SizeTrackId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().sizes.get(id).map(|t| t.is_playing()))
            .unwrap_or(false)
    }

    /// Remove a size track
    pub fn remove_size(&self, id: SizeTrackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().sizes.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
