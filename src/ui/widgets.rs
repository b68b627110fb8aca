//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI
//! patterns. They should not contain any business logic or depend on
//! `crate::app` directly.

pub mod circular_indicator;

pub use circular_indicator::CircularIndicator;
