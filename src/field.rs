// Fixed-size pool of particles plus the bounds they live in.
// The pool is only ever rebuilt wholesale (new / reset).

use crate::config::FieldConfig;
use crate::particle::Particle;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connection {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub opacity: f64,
}

// Line opacity for two particles `distance` apart, None at or past the threshold
pub fn connection_opacity(distance: f64, threshold: f64, max_opacity: f64) -> Option<f64> {
    if distance < threshold {
        Some((1.0 - distance / threshold) * max_opacity)
    } else {
        None
    }
}

pub struct ParticleField {
    width: f64,
    height: f64,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            config,
            particles: Vec::with_capacity(config.particle_count),
        };
        field.reset(rng);
        field
    }

    // Regenerates every particle inside the current bounds
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (width, height, config) = (self.width, self.height, self.config);
        self.particles.clear();
        self.particles
            .extend((0..config.particle_count).map(|_| Particle::random(rng, width, height, &config)));
    }

    // Positions are left alone; the next step clamps them
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // Every unordered pair closer than the connection distance
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.config.connection_distance;
        let max_opacity = self.config.max_line_opacity;
        let particles = &self.particles;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = vec2_len(vec2_sub(a.pos, b.pos));
                connection_opacity(distance, threshold, max_opacity).map(|opacity| Connection {
                    from: a.pos,
                    to: b.pos,
                    opacity,
                })
            })
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
