use glam::Vec2;
use rand::prelude::*;

// Velocity components are sampled uniformly from ±(PARTICLE_SPEED_RANGE / 2).
pub const PARTICLE_SPEED_RANGE: f32 = 0.5;
// Radius is sampled uniformly from [MIN, MIN + SPAN).
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;

/// One drifting dot of the background field, rendered as a filled disk.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

/// Advance one particle and reflect it off the viewport edges.
///
/// The bounds check runs after the position update, so a particle may sit one
/// velocity step outside the viewport for a single tick before the flipped
/// velocity pulls it back in.
pub fn update_particle(p: &mut Particle, width: f32, height: f32) {
    p.position += p.velocity;
    if p.position.x < 0.0 || p.position.x > width {
        p.velocity.x = -p.velocity.x;
    }
    if p.position.y < 0.0 || p.position.y > height {
        p.velocity.y = -p.velocity.y;
    }
}

/// Fixed-size collection of independent particles drifting inside the
/// current viewport. Particles never interact with each other.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    count: usize,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        assert!(count > 0, "ParticleField requires a positive particle count");
        Self {
            particles: Vec::with_capacity(count),
            width: 0.0,
            height: 0.0,
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the whole collection with freshly sampled particles scoped to
    /// the given viewport. Idempotent in count: repeated calls never
    /// accumulate. A zero-area viewport leaves the field empty until the next
    /// valid resize.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        for _ in 0..self.count {
            let position = Vec2::new(
                self.rng.gen::<f32>() * width,
                self.rng.gen::<f32>() * height,
            );
            let velocity = Vec2::new(
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
                (self.rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_RANGE,
            );
            let radius = PARTICLE_RADIUS_MIN + self.rng.gen::<f32>() * PARTICLE_RADIUS_SPAN;
            self.particles.push(Particle {
                position,
                velocity,
                radius,
            });
        }
    }

    /// Viewport changed: discard all particle state and resample for the new
    /// dimensions. Previous positions are not rescaled.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.initialize(width, height);
    }

    /// One simulation tick over every particle.
    pub fn update(&mut self) {
        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            update_particle(p, width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}
