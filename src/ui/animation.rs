//! Animation system for the indicator
//!
//! Value transitions are driven by `iced_anim` and ticked from the host's
//! frame subscription; see [`SweepTransition`] for the single animation this
//! application owns.

mod sweep;

pub use sweep::{SWEEP_DURATION, SweepTransition};
