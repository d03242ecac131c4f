//! The drifting particle pool.
//!
//! A fixed array of [`Particle`] records is allocated once. Particles drift
//! from the upper right towards the lower left; once one leaves the surface
//! it is re-rolled in place along the top or right edge.

use crate::config::{
    ANGLE, EXIT_MARGIN, OPACITY, PARTICLE_COUNT, RIGHT_SPAWN_MIN_Y, RIGHT_SPAWN_OFFSET_X,
    ROTATION_SPEED, SIZE, SPEED, TOP_SPAWN_EXTRA_WIDTH, TOP_SPAWN_Y,
};
use crate::paint::{draw_particle, Painter};
use rand::Rng;
use std::f64::consts::TAU;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Square,
    Triangle,
    Cross,
    Heart,
}

impl Shape {
    pub const ALL: [Shape; 5] = [
        Shape::Circle,
        Shape::Square,
        Shape::Triangle,
        Shape::Cross,
        Shape::Heart,
    ];
}

/// Pastel palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    LightPink,
    LavenderBlush,
    HotPink,
    Pink,
    White,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::LightPink,
        Color::LavenderBlush,
        Color::HotPink,
        Color::Pink,
        Color::White,
    ];

    pub fn css(self) -> &'static str {
        match self {
            Color::LightPink => "#FFB6C1",
            Color::LavenderBlush => "#FFF0F5",
            Color::HotPink => "#FF69B4",
            Color::Pink => "#FFC0CB",
            Color::White => "#FFFFFF",
        }
    }
}

/// Current surface dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub angle: f64,
    pub rotation_speed: f64,
    pub color: Color,
    pub shape: Shape,
    pub opacity: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            size: uniform(rng, SIZE),
            speed: uniform(rng, SPEED),
            angle: uniform(rng, ANGLE),
            rotation_speed: uniform(rng, ROTATION_SPEED),
            color: Color::ALL[rng.gen_range(0..Color::ALL.len())],
            shape: Shape::ALL[rng.gen_range(0..Shape::ALL.len())],
            opacity: uniform(rng, OPACITY),
        }
    }

    /// Anywhere on the surface. Used for the first spawn only.
    fn scattered<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let x = rng.gen::<f64>() * bounds.width;
        let y = rng.gen::<f64>() * bounds.height;
        Self::random(rng, x, y)
    }

    /// Just outside the top or the right edge, chosen 50/50.
    fn entering<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> Self {
        let (x, y) = if rng.gen_bool(0.5) {
            let x = rng.gen::<f64>() * (bounds.width + TOP_SPAWN_EXTRA_WIDTH);
            (x, TOP_SPAWN_Y)
        } else {
            let span = bounds.height - RIGHT_SPAWN_MIN_Y;
            let y = rng.gen::<f64>() * span + RIGHT_SPAWN_MIN_Y;
            (bounds.width + RIGHT_SPAWN_OFFSET_X, y)
        };
        Self::random(rng, x, y)
    }

    /// Advance one frame. Returns `false` once the particle has left the
    /// surface past the left or bottom margin.
    fn step(&mut self, bounds: Bounds) -> bool {
        self.x -= self.speed;
        self.y += self.speed;
        self.angle = wrap_angle(self.angle + self.rotation_speed);

        !(self.x < -EXIT_MARGIN || self.y > bounds.height + EXIT_MARGIN)
    }
}

fn wrap_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round a tiny negative up to exactly TAU
    if a >= TAU {
        0.0
    } else {
        a
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    range.start + rng.gen::<f64>() * (range.end - range.start)
}

/// Fixed pool of [`PARTICLE_COUNT`] particles plus the generator that
/// re-rolls them.
pub struct ParticleSet<R> {
    particles: [Particle; PARTICLE_COUNT],
    rng: R,
}

impl<R: Rng> ParticleSet<R> {
    /// Allocate the pool and scatter it uniformly over `bounds`.
    pub fn spawn_initial(mut rng: R, bounds: Bounds) -> Self {
        let particles = std::array::from_fn(|_| Particle::scattered(&mut rng, bounds));
        Self { particles, rng }
    }

    /// Re-roll particle `index` in place along the top or right edge.
    pub fn reset(&mut self, index: usize, bounds: Bounds) {
        self.particles[index] = Particle::entering(&mut self.rng, bounds);
    }

    pub fn tick(&mut self, bounds: Bounds) {
        for i in 0..self.particles.len() {
            if !self.particles[i].step(bounds) {
                self.reset(i, bounds);
            }
        }
    }

    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) {
        for particle in &self.particles {
            draw_particle(painter, particle);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}
