//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI pieces that implement iced's
//! `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Pure rendering**: Drawing decisions live in plain functions so they
//!   can be tested without a renderer

pub mod indicator_ring;

pub use indicator_ring::{ArcStyle, IndicatorRing, RingBounds, RingStyle};
