//! Application state definitions

use crate::ui::theme;
use crate::ui::units::Dp;
use crate::ui::widgets::CircularIndicator;

/// Main application state
pub struct App {
    /// The circular progress indicator under demonstration
    pub indicator: CircularIndicator,
    /// Raw contents of the progress value field
    pub progress_input: String,
    pub dark_mode: bool,
}

impl Default for App {
    fn default() -> Self {
        let mut indicator = CircularIndicator::default();
        indicator.set_max_progress(100.0);
        indicator.set_current_progress(0.0);
        indicator.set_should_draw_dot(true);
        indicator.set_progress_color(theme::ACCENT_PINK);
        indicator.set_dot_color(theme::ACCENT_ORANGE);
        indicator.set_dot_width_dp(Dp(20.0));

        Self {
            indicator,
            progress_input: String::new(),
            dark_mode: true,
        }
    }
}
