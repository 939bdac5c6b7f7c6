// Simple particle struct to keep track of individual position, velocity, and size

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniform position inside the bounds, uniform velocity and radius from the config
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let (min_radius, max_radius) = config.radius_range;
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vel_y = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let radius = rng.gen::<f64>() * (max_radius - min_radius) + min_radius;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Moves one step, bouncing off any edge the new position lies beyond,
    // then clamps back inside [0, width] x [0, height]
    pub fn step(&mut self, width: f64, height: f64) {
        let bounds = [width, height];
        for axis in 0..2 {
            self.pos[axis] += self.vel[axis];
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] *= -1.0;
            }
            self.pos[axis] = self.pos[axis].max(0.0).min(bounds[axis].max(0.0));
        }
    }
}
