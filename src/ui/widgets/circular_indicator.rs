//! Circular progress indicator widget
//!
//! Owns the drawing styles, the committed progress values and the sweep
//! angle shown on screen. Progress changes commit immediately; only the
//! sweep angle animates, over a fixed one-second transition ticked by the
//! host's frame subscription.
//!
//! Valid progress sits in `[0, max]`. A current value above the maximum
//! raises the maximum instead of clamping, so callers can stream values
//! past an initially assumed ceiling without pre-declaring a new one.

use std::time::Instant;

use iced::widget::Canvas;
use iced::{Color, Element};
use iced_anim::transition::Easing;
use tracing::{debug, warn};

use crate::ui::animation::SweepTransition;
use crate::ui::primitives::indicator_ring::{ArcStyle, FULL_SWEEP, IndicatorRing, RingStyle};
use crate::ui::theme;
use crate::ui::units::Dp;

/// Default stroke width for all three styles
const DEFAULT_STROKE_WIDTH: Dp = Dp(8.0);

/// Default progress ceiling
const DEFAULT_MAX_PROGRESS: f64 = 100.0;

/// A circular progress indicator
#[derive(Debug)]
pub struct CircularIndicator {
    style: RingStyle,
    progress: f64,
    max_progress: f64,
    /// Angle currently on screen, in `[0, 360]` degrees
    sweep_angle: i32,
    transition: Option<SweepTransition>,
    easing: Easing,
    scale_factor: f32,
}

impl Default for CircularIndicator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[allow(dead_code)]
impl CircularIndicator {
    /// Create an indicator with default styling. The scale factor converts
    /// density-independent sizes to pixels; iced hosts pass 1.0.
    pub fn new(scale_factor: f32) -> Self {
        let stroke_width = DEFAULT_STROKE_WIDTH.to_px(scale_factor);

        Self {
            style: RingStyle {
                progress: ArcStyle {
                    color: theme::INDICATOR_PROGRESS,
                    width: stroke_width,
                },
                background: ArcStyle {
                    color: theme::INDICATOR_TRACK,
                    width: stroke_width,
                },
                dot: ArcStyle {
                    color: theme::INDICATOR_PROGRESS,
                    width: stroke_width,
                },
                draw_dot: false,
            },
            progress: 0.0,
            max_progress: DEFAULT_MAX_PROGRESS,
            sweep_angle: 0,
            transition: None,
            easing: Easing::EASE_IN_OUT,
            scale_factor,
        }
    }

    // ========================================================================
    // Progress
    // ========================================================================

    /// Set the progress ceiling. Degenerate maxima are rejected; a maximum
    /// below the current progress lowers the progress to match.
    pub fn set_max_progress(&mut self, max: f64) {
        if max <= 0.0 {
            warn!("ignoring degenerate progress maximum: {max}");
            return;
        }

        self.max_progress = max;
        if self.progress > max {
            self.set_current_progress(max);
        }
    }

    /// Set the current progress, raising the maximum if the value exceeds it
    pub fn set_current_progress(&mut self, current: f64) {
        if current > self.max_progress {
            self.max_progress = current;
        }

        self.set_progress(current, self.max_progress);
    }

    /// Set progress and maximum together. Values commit immediately; the
    /// sweep angle animates from the angle currently on screen, replacing
    /// any transition still in flight.
    pub fn set_progress(&mut self, current: f64, max: f64) {
        if max <= 0.0 {
            warn!("ignoring degenerate progress range: current = {current}, max = {max}");
            return;
        }

        let current = if current < 0.0 {
            debug!("clamping negative progress {current} to 0");
            0.0
        } else {
            current
        };

        self.max_progress = max;
        self.progress = current.min(max);

        let final_angle = (self.progress / max * f64::from(FULL_SWEEP)).round() as i32;
        self.transition = Some(SweepTransition::start(
            self.sweep_angle,
            final_angle,
            self.easing,
        ));
    }

    // ========================================================================
    // Animation
    // ========================================================================

    /// Advance the sweep transition; called once per animation frame
    pub fn tick(&mut self, now: Instant) {
        if let Some(transition) = &mut self.transition {
            transition.tick(now);
            self.sweep_angle = transition.angle().clamp(0, FULL_SWEEP);

            if !transition.is_animating() {
                // interpolation rounding may not land exactly on the target
                self.sweep_angle = transition.target();
                self.transition = None;
            }
        }
    }

    /// Whether a sweep transition is in flight; gates the host's frame
    /// subscription
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Cancel the in-flight transition, fast-forwarding the sweep angle to
    /// its target rather than freezing mid-flight
    pub fn cancel_animation(&mut self) {
        if let Some(transition) = self.transition.take() {
            self.sweep_angle = transition.target();
        }
    }

    /// Replace the transition's interpolation curve
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    // ========================================================================
    // Style
    // ========================================================================

    pub fn set_progress_color(&mut self, color: Color) {
        self.style.progress.color = color;
    }

    pub fn set_progress_background_color(&mut self, color: Color) {
        self.style.background.color = color;
    }

    pub fn set_dot_color(&mut self, color: Color) {
        self.style.dot.color = color;
    }

    pub fn set_progress_stroke_width_dp(&mut self, width: Dp) {
        self.set_progress_stroke_width_px(width.to_px(self.scale_factor));
    }

    pub fn set_progress_stroke_width_px(&mut self, width: f32) {
        self.style.progress.width = width;
    }

    pub fn set_progress_background_stroke_width_dp(&mut self, width: Dp) {
        self.set_progress_background_stroke_width_px(width.to_px(self.scale_factor));
    }

    pub fn set_progress_background_stroke_width_px(&mut self, width: f32) {
        self.style.background.width = width;
    }

    pub fn set_dot_width_dp(&mut self, width: Dp) {
        self.set_dot_width_px(width.to_px(self.scale_factor));
    }

    pub fn set_dot_width_px(&mut self, width: f32) {
        self.style.dot.width = width;
    }

    /// Enable or disable the dot marking the tip of the progress arc
    pub fn set_should_draw_dot(&mut self, draw_dot: bool) {
        self.style.draw_dot = draw_dot;
    }

    pub fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }

    // ========================================================================
    // Getters
    // ========================================================================

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn max_progress(&self) -> f64 {
        self.max_progress
    }

    pub fn sweep_angle(&self) -> i32 {
        self.sweep_angle
    }

    pub fn progress_color(&self) -> Color {
        self.style.progress.color
    }

    pub fn progress_background_color(&self) -> Color {
        self.style.background.color
    }

    pub fn dot_color(&self) -> Color {
        self.style.dot.color
    }

    pub fn dot_width(&self) -> f32 {
        self.style.dot.width
    }

    pub fn should_draw_dot(&self) -> bool {
        self.style.draw_dot
    }

    // ========================================================================
    // View
    // ========================================================================

    /// Build the canvas element at the given side length
    pub fn view<'a, Message: 'a>(&self, side: f32) -> Element<'a, Message> {
        Canvas::new(IndicatorRing {
            style: self.style,
            sweep_angle: self.sweep_angle,
        })
        .width(side)
        .height(side)
        .into()
    }
}
