/*
 * Boid Module
 *
 * This module defines the Boid struct: the position and velocity of one
 * flocking agent. Steering is computed by the rules module and applied by
 * the physics module; a boid itself only carries state.
 */

use glam::Vec3;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Boid {
    // A boid at rest
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }

    pub fn with_velocity(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    // Place a resting boid uniformly inside the box [-bounds, bounds)
    pub fn random_within<R: Rng + ?Sized>(rng: &mut R, bounds: Vec3) -> Self {
        let x = rng.gen_range(-bounds.x..bounds.x);
        let y = rng.gen_range(-bounds.y..bounds.y);
        let z = rng.gen_range(-bounds.z..bounds.z);
        Self::new(Vec3::new(x, y, z))
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_boids_start_at_rest_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Vec3::new(1.0, 2.0, 0.5);

        for _ in 0..500 {
            let boid = Boid::random_within(&mut rng, bounds);
            assert_eq!(boid.velocity, Vec3::ZERO);
            assert!(boid.position.x >= -bounds.x && boid.position.x < bounds.x);
            assert!(boid.position.y >= -bounds.y && boid.position.y < bounds.y);
            assert!(boid.position.z >= -bounds.z && boid.position.z < bounds.z);
        }
    }

    #[test]
    fn speed_is_velocity_magnitude() {
        let boid = Boid::with_velocity(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(boid.speed(), 5.0);
        assert!(boid.is_finite());
        assert!(!Boid::new(Vec3::new(f32::NAN, 0.0, 0.0)).is_finite());
    }
}
