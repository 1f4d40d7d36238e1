// Host-side tests for the particle field simulation.

use glam::Vec2;
use site_core::{connected, Particle, ParticleField, CONNECT_DISTANCE, PARTICLE_SPEED_CAP};

fn make_field() -> ParticleField {
    ParticleField::new(800.0, 600.0, 200, 42)
}

#[test]
fn initialization_respects_count_and_bounds() {
    let field = make_field();
    assert_eq!(field.particles.len(), 200);
    for p in &field.particles {
        assert!(p.pos.x >= 0.0 && p.pos.x < 800.0, "x out of range: {}", p.pos.x);
        assert!(p.pos.y >= 0.0 && p.pos.y < 600.0, "y out of range: {}", p.pos.y);
        assert!(
            p.vel.x >= -PARTICLE_SPEED_CAP && p.vel.x < PARTICLE_SPEED_CAP,
            "vx out of range: {}",
            p.vel.x
        );
        assert!(
            p.vel.y >= -PARTICLE_SPEED_CAP && p.vel.y < PARTICLE_SPEED_CAP,
            "vy out of range: {}",
            p.vel.y
        );
    }
}

#[test]
fn initialization_is_deterministic_per_seed() {
    let a = ParticleField::new(800.0, 600.0, 50, 7);
    let b = ParticleField::new(800.0, 600.0, 50, 7);
    assert_eq!(a.particles, b.particles);

    let c = ParticleField::new(800.0, 600.0, 50, 8);
    assert_ne!(a.particles, c.particles, "different seeds should differ");
}

#[test]
fn tick_advances_by_velocity_away_from_walls() {
    let mut field = make_field();
    field.particles = vec![Particle {
        pos: Vec2::new(100.0, 100.0),
        vel: Vec2::new(0.3, -0.2),
    }];
    field.tick();
    let p = field.particles[0];
    assert!((p.pos.x - 100.3).abs() < 1e-5);
    assert!((p.pos.y - 99.8).abs() < 1e-5);
    assert_eq!(p.vel, Vec2::new(0.3, -0.2), "no wall, no reflection");
}

#[test]
fn reflection_flips_velocity_at_the_far_wall() {
    let mut field = make_field();
    field.particles = vec![Particle {
        pos: Vec2::new(799.9, 300.0),
        vel: Vec2::new(0.4, 0.0),
    }];
    field.tick();
    let p = field.particles[0];
    assert!(p.pos.x > 800.0, "overshoots before bouncing, not clamped");
    assert!(p.pos.x < 800.0 + PARTICLE_SPEED_CAP);
    assert_eq!(p.vel.x, -0.4, "velocity reflected inward");

    field.tick();
    let p = field.particles[0];
    assert!(p.pos.x <= 800.0, "back inside after one inward step");
}

#[test]
fn reflection_flips_velocity_below_zero() {
    let mut field = make_field();
    field.particles = vec![Particle {
        pos: Vec2::new(400.0, 0.1),
        vel: Vec2::new(0.0, -0.35),
    }];
    field.tick();
    let p = field.particles[0];
    assert!(p.pos.y < 0.0 && p.pos.y > -PARTICLE_SPEED_CAP);
    assert_eq!(p.vel.y, 0.35);
}

#[test]
fn excursions_stay_bounded_by_the_speed_cap() {
    // Particles may poke past a wall by less than one step, never further,
    // and must head back in as soon as they do.
    let mut field = make_field();
    for _ in 0..10_000 {
        field.tick();
        for p in &field.particles {
            assert!(
                p.pos.x >= -PARTICLE_SPEED_CAP && p.pos.x <= 800.0 + PARTICLE_SPEED_CAP,
                "x drifted: {}",
                p.pos.x
            );
            assert!(
                p.pos.y >= -PARTICLE_SPEED_CAP && p.pos.y <= 600.0 + PARTICLE_SPEED_CAP,
                "y drifted: {}",
                p.pos.y
            );
            if p.pos.x < 0.0 {
                assert!(p.vel.x >= 0.0, "outside left wall but heading out");
            }
            if p.pos.x > 800.0 {
                assert!(p.vel.x <= 0.0, "outside right wall but heading out");
            }
        }
    }
}

#[test]
fn resize_updates_bounds_without_repositioning() {
    let mut field = make_field();
    let before: Vec<_> = field.particles.clone();
    field.resize(400.0, 300.0);
    assert_eq!(field.bounds(), Vec2::new(400.0, 300.0));
    assert_eq!(field.particles, before, "resize must not move particles");
}

#[test]
fn stranded_particle_walks_back_after_a_shrinking_resize() {
    let mut field = make_field();
    field.particles = vec![Particle {
        pos: Vec2::new(700.0, 100.0),
        vel: Vec2::new(0.4, 0.0),
    }];
    field.resize(400.0, 300.0);

    let mut ticks = 0;
    while field.particles[0].pos.x > 400.0 {
        field.tick();
        ticks += 1;
        assert!(ticks < 2_000, "particle never re-entered the new bounds");
    }
    // One flip on the first out-of-bounds tick, then a monotone walk back.
    assert_eq!(field.particles[0].vel.x, -0.4);
}

#[test]
fn connection_threshold_is_strict() {
    assert!(connected(Vec2::ZERO, Vec2::new(179.9, 0.0)));
    assert!(!connected(Vec2::ZERO, Vec2::new(180.1, 0.0)));
    assert!(!connected(Vec2::ZERO, Vec2::new(CONNECT_DISTANCE, 0.0)));
}

#[test]
fn connections_yield_each_close_pair_once() {
    let mut field = make_field();
    field.particles = vec![
        Particle {
            pos: Vec2::new(0.0, 0.0),
            vel: Vec2::ZERO,
        },
        Particle {
            pos: Vec2::new(179.9, 0.0),
            vel: Vec2::ZERO,
        },
        Particle {
            pos: Vec2::new(500.0, 500.0),
            vel: Vec2::ZERO,
        },
    ];
    let pairs: Vec<_> = field.connections().collect();
    assert_eq!(pairs.len(), 1, "only the close pair connects, once");
    assert_eq!(pairs[0], (Vec2::new(0.0, 0.0), Vec2::new(179.9, 0.0)));
}
