//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Subscription, Task, Theme};

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        (Self::default(), Task::none())
    }

    /// Window title
    pub fn title(&self) -> String {
        "Ringlet".to_string()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Subscriptions; frames are only requested while a sweep transition is
    /// in flight, so an idle indicator costs no redraws
    pub fn subscription(&self) -> Subscription<Message> {
        if self.indicator.is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn theme_follows_dark_mode_flag() {
        let mut app = App::default();

        app.dark_mode = true;
        assert_eq!(app.theme(), Theme::Dark);

        app.dark_mode = false;
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn frames_requested_only_while_animating() {
        let mut app = App::default();

        // startup leaves a transition in flight, so frames are needed
        assert!(app.indicator.is_animating());

        let now = Instant::now();
        app.indicator.tick(now);
        app.indicator.tick(now + Duration::from_secs(2));

        assert!(!app.indicator.is_animating());
    }
}
