/*
 * Rules Module
 *
 * The steering rules of the flock. Each rule looks at the whole flock from
 * the point of view of one boid and returns a velocity delta:
 * 1. Cohesion: steer toward the average position of neighbors
 * 2. Separation: steer away from boids inside the separation radius
 * 3. Alignment: steer toward the average velocity of neighbors
 * 4. Boundary containment: a fixed nudge back toward the box
 *
 * Cohesion and alignment share the visual range; separation uses its own,
 * tighter radius. A rule with no neighbors returns zero.
 */

use glam::Vec3;

use crate::boid::Boid;
use crate::neighbors::neighbors;
use crate::params::ParameterSet;

// Steer toward the local centroid
pub fn cohesion(boids: &[Boid], index: usize, params: &ParameterSet) -> Vec3 {
    let mut center = Vec3::ZERO;
    let mut count = 0;

    for i in neighbors(boids, index, params.visual_range) {
        center += boids[i].position;
        count += 1;
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    center /= count as f32;
    (center - boids[index].position) * params.cohesion_weight
}

// Push away from every close neighbor. The displacement is deliberately not
// normalized or weighted by distance.
pub fn separation(boids: &[Boid], index: usize, params: &ParameterSet) -> Vec3 {
    let position = boids[index].position;
    let mut push = Vec3::ZERO;

    for i in neighbors(boids, index, params.separation_radius) {
        push += position - boids[i].position;
    }

    push * params.separation_weight
}

// Match the average heading and speed of neighbors
pub fn alignment(boids: &[Boid], index: usize, params: &ParameterSet) -> Vec3 {
    let mut average = Vec3::ZERO;
    let mut count = 0;

    for i in neighbors(boids, index, params.visual_range) {
        average += boids[i].velocity;
        count += 1;
    }

    if count == 0 {
        return Vec3::ZERO;
    }

    average /= count as f32;
    (average - boids[index].velocity) * params.alignment_weight
}

// Per axis: -push above the bound, +push below the negative bound, else 0.
// The nudge does not grow with the overshoot.
pub fn boundary(boid: &Boid, params: &ParameterSet) -> Vec3 {
    let axis = |position: f32, bound: f32| {
        if position > bound {
            -params.boundary_push
        } else if position < -bound {
            params.boundary_push
        } else {
            0.0
        }
    };

    Vec3::new(
        axis(boid.position.x, params.bounds.x),
        axis(boid.position.y, params.bounds.y),
        axis(boid.position.z, params.bounds.z),
    )
}

/// Sum of all four rules for `boids[index]`, read from the state in `boids`.
pub fn steering_delta(boids: &[Boid], index: usize, params: &ParameterSet) -> Vec3 {
    cohesion(boids, index, params)
        + separation(boids, index, params)
        + alignment(boids, index, params)
        + boundary(&boids[index], params)
}
