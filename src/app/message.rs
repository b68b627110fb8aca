//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Progress value field edited
    ProgressInputChanged(String),
    /// Apply the entered progress value to the indicator
    ApplyProgress,
    /// Toggle the indicator's tip dot
    ToggleDot(bool),
    /// Toggle dark mode
    ToggleDarkMode(bool),
    /// Animation frame tick
    AnimationTick,
}
