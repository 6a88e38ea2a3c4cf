//! Spring response timing curve
//!
//! A closed-form damped-spring step response, normalized so that progress 0
//! maps to 0 and progress 1 lands on the target. Scheduler records need a
//! deterministic `eval(t)` rather than a stateful integrator, so the
//! response is solved analytically instead of stepped.

/// Damped spring step response used as a timing curve
///
/// `damping_ratio` below 1.0 overshoots and rings; 1.0 and above is treated
/// as critically damped. `initial_velocity` is the normalized velocity the
/// response starts with, letting an interrupted transform carry its motion
/// into the settle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringResponse {
    pub damping_ratio: f32,
    pub initial_velocity: f32,
    /// Undamped natural frequency, in radians per unit of progress
    pub response_frequency: f32,
}

impl SpringResponse {
    /// Frequency at which a 0.4-damped response settles within a unit of
    /// progress (envelope under 1% at t = 1)
    pub const DEFAULT_FREQUENCY: f32 = 12.0;

    pub fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio: damping_ratio.max(0.05),
            initial_velocity,
            response_frequency: Self::DEFAULT_FREQUENCY,
        }
    }

    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.response_frequency = frequency;
        self
    }

    /// Evaluate the response at normalized progress `t`
    ///
    /// Returns exactly 0.0 at or before the start and exactly 1.0 at or
    /// after the end; the settle is analytic in between.
    pub fn eval(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        let zeta = self.damping_ratio;
        let omega = self.response_frequency;
        let v0 = self.initial_velocity;

        if zeta < 1.0 {
            // Underdamped: x(t) = 1 - e^(-zw t)(cos(wd t) + B sin(wd t))
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            let b = (zeta * omega - v0) / wd;
            1.0 - envelope * ((wd * t).cos() + b * (wd * t).sin())
        } else {
            // Critically damped: x(t) = 1 - e^(-w t)(1 + (w - v0) t)
            let envelope = (-omega * t).exp();
            1.0 - envelope * (1.0 + (omega - v0) * t)
        }
    }
}

impl Default for SpringResponse {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}
