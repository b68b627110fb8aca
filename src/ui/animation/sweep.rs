//! Sweep angle transition using iced_anim
//!
//! Animates the indicator's sweep angle between two integer degree values.
//! At most one transition is alive per indicator; replacing it mid-flight
//! starts the new transition from the angle currently on screen, while an
//! explicit cancel fast-forwards to the target angle instead of freezing.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Fixed duration of a progress transition (1s)
pub const SWEEP_DURATION: Duration = Duration::from_millis(1_000);

/// An in-flight transition of the sweep angle
#[derive(Debug)]
pub struct SweepTransition {
    anim: Animated<f32>,
    target: i32,
}

impl SweepTransition {
    /// Start a transition from one integer angle to another
    pub fn start(from: i32, to: i32, easing: Easing) -> Self {
        let mut anim = Animated::transition(from as f32, easing.with_duration(SWEEP_DURATION));
        anim.update((to as f32).into());
        Self { anim, target: to }
    }

    /// The angle this transition settles on
    pub fn target(&self) -> i32 {
        self.target
    }

    /// Advance the transition to `now`
    pub fn tick(&mut self, now: Instant) {
        self.anim.tick(now);
    }

    /// Interpolated integer angle at the last tick
    pub fn angle(&self) -> i32 {
        self.anim.value().round() as i32
    }

    /// Whether the transition is still in flight
    pub fn is_animating(&self) -> bool {
        self.anim.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_from_angle() {
        let transition = SweepTransition::start(0, 180, Easing::EASE_IN_OUT);
        assert_eq!(transition.angle(), 0);
        assert_eq!(transition.target(), 180);
    }

    #[test]
    fn completes_after_duration_elapses() {
        let mut transition = SweepTransition::start(0, 180, Easing::EASE_IN_OUT);
        let now = Instant::now();

        transition.tick(now);
        transition.tick(now + Duration::from_secs(2));

        assert!(!transition.is_animating());
        assert_eq!(transition.angle(), 180);
    }

    #[test]
    fn degenerate_transition_settles_immediately() {
        let mut transition = SweepTransition::start(90, 90, Easing::EASE_IN_OUT);
        let now = Instant::now();

        transition.tick(now);
        transition.tick(now + Duration::from_secs(2));

        assert!(!transition.is_animating());
        assert_eq!(transition.angle(), 90);
    }
}
