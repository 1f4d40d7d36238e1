//! The particle field behind the page content.
//!
//! Platform-free on purpose: the web frontend owns the canvas and the frame
//! clock, this module owns positions, velocities and the proximity pairing.

use crate::constants::{CONNECT_DISTANCE, PARTICLE_SPEED_CAP};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Fixed-size set of moving points bounded by the current viewport.
pub struct ParticleField {
    pub particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    /// Allocates `count` particles with uniformly random positions inside
    /// `[0, width) x [0, height)` and per-axis velocities in
    /// `[-PARTICLE_SPEED_CAP, PARTICLE_SPEED_CAP)`. Seeded so tests are
    /// deterministic.
    pub fn new(width: f32, height: f32, count: usize, seed: u64) -> Self {
        let bounds = Vec2::new(width.max(1.0), height.max(1.0));
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen_range(0.0..bounds.x), rng.gen_range(0.0..bounds.y)),
                vel: Vec2::new(
                    rng.gen_range(-PARTICLE_SPEED_CAP..PARTICLE_SPEED_CAP),
                    rng.gen_range(-PARTICLE_SPEED_CAP..PARTICLE_SPEED_CAP),
                ),
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Updates the bounds used for reflection. Existing particles are not
    /// repositioned; one left outside the new bounds walks back under its
    /// own motion.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Advances every particle by its velocity, then reflects per axis: a
    /// velocity component flips only when the coordinate is past the bound
    /// AND still heading further out. Positions are never clamped.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > self.bounds.x && p.vel.x > 0.0) {
                p.vel.x = -p.vel.x;
            }
            if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > self.bounds.y && p.vel.y > 0.0) {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Unordered pairs (i, j), i < j, close enough to be drawn connected.
    /// Quadratic over the field by design; fine at the default count.
    pub fn connections(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..]
                .iter()
                .filter_map(move |b| connected(a.pos, b.pos).then_some((a.pos, b.pos)))
        })
    }
}

#[inline]
pub fn connected(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < CONNECT_DISTANCE
}
