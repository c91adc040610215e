// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

#[test]
fn initialize_creates_exactly_count_particles_in_bounds() {
    let mut field = ParticleField::new(40, 7);
    field.initialize(800.0, 600.0);
    assert_eq!(field.particles().len(), 40);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 600.0);
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_RANGE / 2.0);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_RANGE / 2.0);
        assert!(p.radius >= PARTICLE_RADIUS_MIN);
        assert!(p.radius <= PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn initialize_replaces_rather_than_accumulates() {
    let mut field = ParticleField::new(25, 1);
    for _ in 0..3 {
        field.initialize(640.0, 480.0);
        assert_eq!(field.particles().len(), 25);
    }
}

#[test]
fn update_keeps_positions_within_one_step_of_bounds() {
    let mut field = ParticleField::new(64, 99);
    field.initialize(200.0, 150.0);
    let slack = PARTICLE_SPEED_RANGE / 2.0;
    for _ in 0..10_000 {
        field.update();
        for p in field.particles() {
            assert!(p.position.x >= -slack && p.position.x <= 200.0 + slack);
            assert!(p.position.y >= -slack && p.position.y <= 150.0 + slack);
        }
    }
}

#[test]
fn reflection_happens_after_the_position_update() {
    // One tick of out-of-bounds position is tolerated before correction.
    let mut p = Particle {
        position: Vec2::new(99.0, 50.0),
        velocity: Vec2::new(1.0, 0.0),
        radius: 1.0,
    };
    update_particle(&mut p, 100.0, 100.0);
    assert_eq!(p.position.x, 100.0); // on the edge is still in bounds
    assert_eq!(p.velocity.x, 1.0);

    update_particle(&mut p, 100.0, 100.0);
    assert_eq!(p.position.x, 101.0); // overshoot tolerated this tick
    assert_eq!(p.velocity.x, -1.0); // velocity already flipped for the next

    update_particle(&mut p, 100.0, 100.0);
    assert_eq!(p.position.x, 100.0); // pulled back to the edge
    assert_eq!(p.velocity.x, -1.0);
}

#[test]
fn axes_reflect_independently() {
    let mut p = Particle {
        position: Vec2::new(50.0, 99.9),
        velocity: Vec2::new(0.2, 0.2),
        radius: 1.5,
    };
    update_particle(&mut p, 100.0, 100.0);
    assert_eq!(p.velocity.x, 0.2);
    assert_eq!(p.velocity.y, -0.2);
}

#[test]
fn resize_discards_and_resamples_for_new_dimensions() {
    let mut field = ParticleField::new(30, 5);
    field.initialize(1920.0, 1080.0);
    field.resize(100.0, 80.0);
    assert_eq!(field.particles().len(), 30);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x <= 100.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 80.0);
    }
    assert_eq!(field.width(), 100.0);
    assert_eq!(field.height(), 80.0);
}

#[test]
fn zero_area_viewport_holds_no_particles_until_next_resize() {
    let mut field = ParticleField::new(10, 3);
    field.initialize(0.0, 0.0);
    assert!(field.particles().is_empty());
    field.update(); // harmless with an empty field
    field.resize(320.0, 240.0);
    assert_eq!(field.particles().len(), 10);
}

#[test]
fn same_seed_same_field() {
    let mut a = ParticleField::new(16, 1234);
    let mut b = ParticleField::new(16, 1234);
    a.initialize(400.0, 300.0);
    b.initialize(400.0, 300.0);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.velocity, pb.velocity);
        assert_eq!(pa.radius, pb.radius);
    }
}

#[test]
#[should_panic(expected = "positive particle count")]
fn zero_count_fails_fast() {
    let _ = ParticleField::new(0, 0);
}
