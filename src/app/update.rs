//! Message update handlers

use std::time::Instant;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle a message and mutate the application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProgressInputChanged(value) => {
                self.progress_input = value;
            }
            Message::ApplyProgress => match self.progress_input.trim().parse::<f64>() {
                Ok(value) => self.indicator.set_current_progress(value),
                Err(e) => {
                    tracing::warn!(
                        "ignoring unparsable progress value {:?}: {}",
                        self.progress_input,
                        e
                    );
                }
            },
            Message::ToggleDot(enabled) => {
                self.indicator.set_should_draw_dot(enabled);
            }
            Message::ToggleDarkMode(enabled) => {
                self.dark_mode = enabled;
            }
            Message::AnimationTick => {
                self.indicator.tick(Instant::now());
            }
        }

        Task::none()
    }
}
