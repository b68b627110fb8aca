//! Circular indicator ring primitive
//!
//! Geometry and rendering for a circular progress indicator: a full track
//! circle, a progress arc swept clockwise from 12 o'clock, and an optional
//! dot marking the tip of the progress arc.
//!
//! # Design
//!
//! Drawing is split into a pure stage and an iced stage. [`render`] turns
//! geometry, styles and the sweep angle into a list of [`DrawOp`]s and is
//! unit-testable without a renderer; [`IndicatorRing`] implements
//! `canvas::Program` and maps those ops onto a `Frame`. Angles follow the
//! canvas convention: 0° at 3 o'clock, increasing clockwise, so the start
//! angle of 270° is the top of the ring.

use iced::widget::canvas::{Frame, Geometry, Path, Program, Stroke, path};
use iced::{Color, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};

/// Angle where the progress arc begins (12 o'clock)
pub const START_ANGLE: i32 = 270;

/// Full circle sweep in degrees
pub const FULL_SWEEP: i32 = 360;

/// Stroke style of one arc (or the dot)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStyle {
    pub color: Color,
    /// Stroke width in pixels; doubles as the dot diameter
    pub width: f32,
}

/// The three styles of the ring plus the dot flag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    pub progress: ArcStyle,
    pub background: ArcStyle,
    pub dot: ArcStyle,
    pub draw_dot: bool,
}

impl RingStyle {
    /// The thickest stroke among active styles; the ring is inset by half of
    /// this so nothing paints outside the allocated bounds. The dot only
    /// participates while it is enabled.
    pub fn stroke_offset(&self) -> f32 {
        let arcs = self.progress.width.max(self.background.width);
        if self.draw_dot {
            self.dot.width.max(arcs)
        } else {
            arcs
        }
    }
}

/// Bounding rectangle of the ring, inset from the allocated size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RingBounds {
    /// Inset the allocated size by half the given stroke offset
    pub fn compute(size: Size, stroke_offset: f32) -> Self {
        let half = stroke_offset / 2.0;
        Self {
            left: half,
            top: half,
            right: size.width - half,
            bottom: size.height - half,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Ring radius; degenerate allocations collapse to zero
    pub fn radius(&self) -> f32 {
        (self.width() / 2.0).max(0.0)
    }
}

/// One drawing operation of a rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    /// Full stroked circle (the track)
    Track {
        center: Point,
        radius: f32,
        width: f32,
        color: Color,
    },
    /// Stroked arc from `start_deg`, sweeping `sweep_deg` clockwise
    Arc {
        center: Point,
        radius: f32,
        start_deg: i32,
        sweep_deg: i32,
        width: f32,
        color: Color,
    },
    /// Filled dot
    Dot {
        center: Point,
        radius: f32,
        color: Color,
    },
}

/// Render the ring into drawing operations, back to front: track first so
/// the progress arc and dot overdraw it.
pub fn render(bounds: RingBounds, style: &RingStyle, sweep_angle: i32) -> Vec<DrawOp> {
    let center = bounds.center();
    let radius = bounds.radius();

    let mut ops = Vec::with_capacity(3);
    if radius <= 0.0 {
        return ops;
    }

    ops.push(DrawOp::Track {
        center,
        radius,
        width: style.background.width,
        color: style.background.color,
    });

    if sweep_angle > 0 {
        ops.push(DrawOp::Arc {
            center,
            radius,
            start_deg: START_ANGLE,
            sweep_deg: sweep_angle,
            width: style.progress.width,
            color: style.progress.color,
        });
    }

    if style.draw_dot {
        ops.push(DrawOp::Dot {
            center: dot_position(center, radius, sweep_angle),
            radius: style.dot.width / 2.0,
            color: style.dot.color,
        });
    }

    ops
}

/// Position of the tip dot on the ring.
///
/// The 180° offset mirrors the arc primitive's angle convention and lands
/// the dot on the trailing edge of the progress arc.
fn dot_position(center: Point, radius: f32, sweep_angle: i32) -> Point {
    let theta = ((START_ANGLE + sweep_angle + 180) as f32).to_radians();
    Point::new(
        center.x - radius * theta.cos(),
        center.y - radius * theta.sin(),
    )
}

/// Canvas program drawing a ring for a given style and sweep angle
#[derive(Debug, Clone, Copy)]
pub struct IndicatorRing {
    pub style: RingStyle,
    pub sweep_angle: i32,
}

impl<Message> Program<Message> for IndicatorRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let ring = RingBounds::compute(bounds.size(), self.style.stroke_offset());

        for op in render(ring, &self.style, self.sweep_angle) {
            match op {
                DrawOp::Track {
                    center,
                    radius,
                    width,
                    color,
                } => {
                    frame.stroke(
                        &Path::circle(center, radius),
                        Stroke::default().with_width(width).with_color(color),
                    );
                }
                DrawOp::Arc {
                    center,
                    radius,
                    start_deg,
                    sweep_deg,
                    width,
                    color,
                } => {
                    let start = Radians((start_deg as f32).to_radians());
                    let end = Radians(((start_deg + sweep_deg) as f32).to_radians());
                    let arc = Path::new(|builder| {
                        builder.arc(path::Arc {
                            center,
                            radius,
                            start_angle: start,
                            end_angle: end,
                        });
                    });
                    frame.stroke(
                        &arc,
                        Stroke::default().with_width(width).with_color(color),
                    );
                }
                DrawOp::Dot {
                    center,
                    radius,
                    color,
                } => {
                    frame.fill(&Path::circle(center, radius), color);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(draw_dot: bool) -> RingStyle {
        RingStyle {
            progress: ArcStyle {
                color: Color::WHITE,
                width: 8.0,
            },
            background: ArcStyle {
                color: Color::BLACK,
                width: 6.0,
            },
            dot: ArcStyle {
                color: Color::WHITE,
                width: 12.0,
            },
            draw_dot,
        }
    }

    mod property_geometry_inset {
        use super::*;

        #[test]
        fn bounds_inset_by_half_max_stroke() {
            let bounds = RingBounds::compute(Size::new(200.0, 200.0), 8.0);
            assert_eq!(bounds.left, 4.0);
            assert_eq!(bounds.top, 4.0);
            assert_eq!(bounds.right, 196.0);
            assert_eq!(bounds.bottom, 196.0);
            assert_eq!(bounds.radius(), 96.0);
        }

        #[test]
        fn non_square_allocation_keeps_rect_inset() {
            let bounds = RingBounds::compute(Size::new(300.0, 200.0), 10.0);
            assert_eq!(bounds.left, 5.0);
            assert_eq!(bounds.right, 295.0);
            assert_eq!(bounds.bottom, 195.0);
        }

        #[test]
        fn degenerate_size_collapses_radius() {
            let bounds = RingBounds::compute(Size::new(0.0, 0.0), 8.0);
            assert_eq!(bounds.radius(), 0.0);
        }

        #[test]
        fn dot_width_only_counts_while_enabled() {
            assert_eq!(style(true).stroke_offset(), 12.0);
            assert_eq!(style(false).stroke_offset(), 8.0);
        }
    }

    mod property_render_ops {
        use super::*;

        #[test]
        fn track_arc_dot_in_order() {
            let bounds = RingBounds::compute(Size::new(200.0, 200.0), 12.0);
            let ops = render(bounds, &style(true), 90);

            assert_eq!(ops.len(), 3);
            assert!(matches!(ops[0], DrawOp::Track { .. }));
            assert!(matches!(ops[1], DrawOp::Arc { .. }));
            assert!(matches!(ops[2], DrawOp::Dot { .. }));
        }

        #[test]
        fn zero_sweep_skips_progress_arc() {
            let bounds = RingBounds::compute(Size::new(200.0, 200.0), 8.0);
            let ops = render(bounds, &style(false), 0);

            assert_eq!(ops.len(), 1);
            assert!(matches!(ops[0], DrawOp::Track { .. }));
        }

        #[test]
        fn degenerate_bounds_render_nothing() {
            let bounds = RingBounds::compute(Size::new(0.0, 0.0), 8.0);
            assert!(render(bounds, &style(true), 90).is_empty());
        }

        #[test]
        fn progress_arc_starts_at_twelve_o_clock() {
            let bounds = RingBounds::compute(Size::new(200.0, 200.0), 8.0);
            let ops = render(bounds, &style(false), 45);

            match ops[1] {
                DrawOp::Arc {
                    start_deg,
                    sweep_deg,
                    ..
                } => {
                    assert_eq!(start_deg, 270);
                    assert_eq!(sweep_deg, 45);
                }
                _ => panic!("expected progress arc"),
            }
        }
    }

    mod property_dot_position {
        use super::*;

        #[test]
        fn quarter_sweep_puts_dot_at_three_o_clock() {
            // start 270 + sweep 90 + 180 = 540 ≡ 180°, cos = -1, sin = 0,
            // so the dot sits at (cx + r, cy)
            let center = Point::new(100.0, 100.0);
            let dot = dot_position(center, 96.0, 90);

            assert!((dot.x - 196.0).abs() < 1e-3);
            assert!((dot.y - 100.0).abs() < 1e-3);
        }

        #[test]
        fn zero_sweep_puts_dot_at_twelve_o_clock() {
            // 270 + 0 + 180 = 450 ≡ 90°, cos = 0, sin = 1: the dot sits at
            // the arc start, straight up from center
            let center = Point::new(100.0, 100.0);
            let dot = dot_position(center, 96.0, 0);

            assert!((dot.x - 100.0).abs() < 1e-3);
            assert!((dot.y - 4.0).abs() < 1e-3);
        }

        #[test]
        fn dot_radius_is_half_its_width() {
            let bounds = RingBounds::compute(Size::new(200.0, 200.0), 12.0);
            let ops = render(bounds, &style(true), 90);

            match ops[2] {
                DrawOp::Dot { radius, .. } => assert_eq!(radius, 6.0),
                _ => panic!("expected dot"),
            }
        }
    }
}
