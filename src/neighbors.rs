/*
 * Neighbor Query Module
 *
 * Brute-force neighbor discovery: every call scans the whole flock, so a
 * full tick is O(n^2). A boid never counts as its own neighbor, and the
 * radius test is strict, so a boid sitting exactly on the radius is out.
 */

use crate::boid::Boid;

// Indices of every other boid strictly closer than `radius` to boids[index]
pub fn neighbors(boids: &[Boid], index: usize, radius: f32) -> impl Iterator<Item = usize> + '_ {
    let origin = boids[index].position;

    boids
        .iter()
        .enumerate()
        .filter(move |&(i, other)| i != index && origin.distance(other.position) < radius)
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn line(xs: &[f32]) -> Vec<Boid> {
        xs.iter().map(|&x| Boid::new(Vec3::new(x, 0.0, 0.0))).collect()
    }

    #[test]
    fn excludes_self_and_distant_boids() {
        let boids = line(&[0.0, 0.3, 0.9, -0.2]);
        let mut found: Vec<usize> = neighbors(&boids, 0, 0.5).collect();
        found.sort_unstable();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn boundary_distance_is_excluded() {
        let boids = line(&[0.0, 0.5]);
        assert_eq!(neighbors(&boids, 0, 0.5).count(), 0);
        assert_eq!(neighbors(&boids, 0, 0.500_001).count(), 1);
    }

    #[test]
    fn distance_is_three_dimensional() {
        let boids = vec![Boid::new(Vec3::ZERO), Boid::new(Vec3::new(0.3, 0.3, 0.3))];
        // |(0.3, 0.3, 0.3)| is about 0.52
        assert_eq!(neighbors(&boids, 0, 0.5).count(), 0);
        assert_eq!(neighbors(&boids, 1, 0.6).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn lone_boid_and_zero_radius_have_no_neighbors() {
        let boids = line(&[1.0]);
        assert_eq!(neighbors(&boids, 0, 10.0).count(), 0);

        let stacked = line(&[0.0, 0.0]);
        assert_eq!(neighbors(&stacked, 0, 0.0).count(), 0);
        assert_eq!(neighbors(&stacked, 0, 0.1).count(), 1);
    }
}
