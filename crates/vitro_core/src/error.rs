//! Error taxonomy
//!
//! None of these are fatal. Invalid gradient specs surface as an absent
//! resource, unsupported rendering features degrade to the nearest supported
//! rendering, and out-of-state interaction events are ignored. The enum
//! exists so those conditions can be logged and asserted on uniformly.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VitroError {
    /// A gradient spec with fewer than two color stops
    #[error("invalid gradient spec: {stops} stop(s), at least 2 required")]
    InvalidGradientSpec { stops: usize },

    /// A rendering feature the backend cannot honor
    #[error("unsupported rendering feature: {0}")]
    UnsupportedRenderingFeature(&'static str),

    /// An interaction event that is not valid from the current state
    #[error("interaction event ignored: {event} not valid from {state}")]
    MisuseReentry {
        event: &'static str,
        state: &'static str,
    },
}
