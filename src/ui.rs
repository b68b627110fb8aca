//! UI module for the indicator demo
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Low-level `canvas::Program` implementations
//! - **Widgets** (`widgets`): Stateful, composable UI patterns without business logic
//! - The host screen itself lives in `crate::app` and wires widgets to messages

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod units;
pub mod widgets;
