//! Shape tracing against an abstract 2D drawing context.
//!
//! [`Painter`] mirrors the handful of `CanvasRenderingContext2d` calls the
//! backdrop needs, so shapes can be traced into a real canvas in the browser
//! and into a recorder in host tests.

use crate::config::CROSS_LINE_WIDTH;
use crate::particle::{Particle, Shape};
use std::f64::consts::TAU;

pub trait Painter {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_style(&mut self, css: &str);
    fn set_stroke_style(&mut self, css: &str);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

/// Draw one particle in its own translated and rotated frame.
pub fn draw_particle<P: Painter + ?Sized>(p: &mut P, particle: &Particle) {
    let css = particle.color.css();

    p.save();
    p.translate(particle.x, particle.y);
    p.rotate(particle.angle);
    p.set_global_alpha(particle.opacity);
    p.set_fill_style(css);
    p.set_stroke_style(css);
    p.set_line_width(CROSS_LINE_WIDTH);

    trace_shape(p, particle.shape, particle.size);

    p.restore();
}

/// Trace `shape` of the given `size`, centred on the local origin.
pub fn trace_shape<P: Painter + ?Sized>(p: &mut P, shape: Shape, size: f64) {
    match shape {
        Shape::Circle => circle(p, size),
        Shape::Square => square(p, size),
        Shape::Triangle => triangle(p, size),
        Shape::Cross => cross(p, size),
        Shape::Heart => heart(p, size),
    }
}

fn circle<P: Painter + ?Sized>(p: &mut P, size: f64) {
    p.begin_path();
    p.arc(0.0, 0.0, size / 2.0, 0.0, TAU);
    p.fill();
}

fn square<P: Painter + ?Sized>(p: &mut P, size: f64) {
    let h = size / 2.0;
    p.fill_rect(-h, -h, size, size);
}

// apex up
fn triangle<P: Painter + ?Sized>(p: &mut P, size: f64) {
    let h = size / 2.0;
    p.begin_path();
    p.move_to(0.0, -h);
    p.line_to(h, h);
    p.line_to(-h, h);
    p.close_path();
    p.fill();
}

fn cross<P: Painter + ?Sized>(p: &mut P, size: f64) {
    let h = size / 2.0;
    p.begin_path();
    p.move_to(-h, 0.0);
    p.line_to(h, 0.0);
    p.move_to(0.0, -h);
    p.line_to(0.0, h);
    p.stroke();
}

/// Two mirrored curves: from the top dip down the left lobe to the bottom
/// point, then back up the right lobe.
fn heart<P: Painter + ?Sized>(p: &mut P, size: f64) {
    let s = size / 2.0;
    p.begin_path();
    p.move_to(0.0, -s * 0.2);
    p.bezier_curve_to(-s, -s, -s * 1.2, s * 0.5, 0.0, s);
    p.bezier_curve_to(s * 1.2, s * 0.5, s, -s, 0.0, -s * 0.2);
    p.fill();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::particle::Color;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Save,
        Restore,
        Translate(f64, f64),
        Rotate(f64),
        Alpha(f64),
        Fill(String),
        Stroke(String),
        LineWidth(f64),
        BeginPath,
        ClosePath,
        MoveTo(f64, f64),
        LineTo(f64, f64),
        Arc(f64, f64, f64, f64, f64),
        Bezier([f64; 6]),
        DoFill,
        DoStroke,
        FillRect(f64, f64, f64, f64),
    }

    #[derive(Default)]
    pub(crate) struct Recorder {
        pub ops: Vec<Op>,
    }

    impl Painter for Recorder {
        fn save(&mut self) {
            self.ops.push(Op::Save)
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore)
        }
        fn translate(&mut self, x: f64, y: f64) {
            self.ops.push(Op::Translate(x, y))
        }
        fn rotate(&mut self, a: f64) {
            self.ops.push(Op::Rotate(a))
        }
        fn set_global_alpha(&mut self, a: f64) {
            self.ops.push(Op::Alpha(a))
        }
        fn set_fill_style(&mut self, c: &str) {
            self.ops.push(Op::Fill(c.into()))
        }
        fn set_stroke_style(&mut self, c: &str) {
            self.ops.push(Op::Stroke(c.into()))
        }
        fn set_line_width(&mut self, w: f64) {
            self.ops.push(Op::LineWidth(w))
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath)
        }
        fn close_path(&mut self) {
            self.ops.push(Op::ClosePath)
        }
        fn move_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::MoveTo(x, y))
        }
        fn line_to(&mut self, x: f64, y: f64) {
            self.ops.push(Op::LineTo(x, y))
        }
        fn arc(&mut self, x: f64, y: f64, r: f64, s: f64, e: f64) {
            self.ops.push(Op::Arc(x, y, r, s, e))
        }
        fn bezier_curve_to(&mut self, a: f64, b: f64, c: f64, d: f64, x: f64, y: f64) {
            self.ops.push(Op::Bezier([a, b, c, d, x, y]))
        }
        fn fill(&mut self) {
            self.ops.push(Op::DoFill)
        }
        fn stroke(&mut self) {
            self.ops.push(Op::DoStroke)
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::FillRect(x, y, w, h))
        }
    }

    fn traced(shape: Shape, size: f64) -> Vec<Op> {
        let mut r = Recorder::default();
        trace_shape(&mut r, shape, size);
        r.ops
    }

    #[test]
    fn circle_is_disc_of_diameter_size() {
        assert_eq!(
            traced(Shape::Circle, 40.0),
            vec![Op::BeginPath, Op::Arc(0.0, 0.0, 20.0, 0.0, TAU), Op::DoFill]
        );
    }

    #[test]
    fn square_is_centred() {
        assert_eq!(traced(Shape::Square, 30.0), vec![Op::FillRect(-15.0, -15.0, 30.0, 30.0)]);
    }

    #[test]
    fn triangle_points_up() {
        let ops = traced(Shape::Triangle, 20.0);
        assert_eq!(ops[1], Op::MoveTo(0.0, -10.0));
        assert_eq!(ops[2], Op::LineTo(10.0, 10.0));
        assert_eq!(ops[3], Op::LineTo(-10.0, 10.0));
        assert_eq!(ops.last(), Some(&Op::DoFill));
    }

    #[test]
    fn cross_is_stroked_not_filled() {
        let ops = traced(Shape::Cross, 20.0);
        assert!(ops.contains(&Op::DoStroke));
        assert!(!ops.contains(&Op::DoFill));
        assert_eq!(ops.iter().filter(|op| matches!(op, Op::MoveTo(..))).count(), 2);
    }

    #[test]
    fn heart_has_single_outline() {
        let ops = traced(Shape::Heart, 20.0);
        let moves = ops.iter().filter(|op| matches!(op, Op::MoveTo(..))).count();
        let curves: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Bezier(pts) => Some(*pts),
                _ => None,
            })
            .collect();
        assert_eq!(moves, 1);
        assert_eq!(curves.len(), 2);
        // bottom point, then back to the top dip
        assert_eq!((curves[0][4], curves[0][5]), (0.0, 10.0));
        assert_eq!((curves[1][4], curves[1][5]), (0.0, -2.0));
        // mirrored control points
        assert_eq!(curves[0][0], -curves[1][2]);
        assert_eq!(curves[0][2], -curves[1][0]);
    }

    #[test]
    fn particle_frame_is_balanced() {
        let particle = Particle {
            x: 12.0,
            y: 34.0,
            size: 20.0,
            speed: 1.0,
            angle: 0.5,
            rotation_speed: 0.01,
            color: Color::HotPink,
            shape: Shape::Circle,
            opacity: 0.3,
        };
        let mut r = Recorder::default();
        draw_particle(&mut r, &particle);

        assert_eq!(r.ops.first(), Some(&Op::Save));
        assert_eq!(r.ops.last(), Some(&Op::Restore));
        assert_eq!(r.ops[1], Op::Translate(12.0, 34.0));
        assert_eq!(r.ops[2], Op::Rotate(0.5));
        assert_eq!(r.ops[3], Op::Alpha(0.3));
        assert_eq!(r.ops[4], Op::Fill("#FF69B4".into()));
        assert_eq!(r.ops[6], Op::LineWidth(2.0));
    }
}
