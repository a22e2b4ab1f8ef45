/*
 * Render Boundary Module
 *
 * The simulation hands its state to a RenderAdapter once per tick. The
 * adapter owns every visual object: one proxy per boid, addressed by index
 * and updated in place, plus an optional boundary box tracked through an
 * explicit handle.
 *
 * ProxyScene is the headless adapter. The nannou viewer draws from it, and
 * tests use it to check what a renderer would have been told.
 */

use glam::Vec3;
use tracing::debug;

use crate::boid::Boid;

/// Consumer of simulation output.
pub trait RenderAdapter {
    /// Called with the whole flock in index order after every tick.
    fn sync_agents(&mut self, boids: &[Boid]);
    /// Show or hide the boundary box for the current half-extents.
    fn sync_bounds(&mut self, show: bool, half_extents: Vec3);
}

/// Identifies one boundary box created by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundsHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsBox {
    pub handle: BoundsHandle,
    pub half_extents: Vec3,
}

// One proxy per boid, created once and updated by index afterwards
#[derive(Debug, Default)]
pub struct ProxyScene {
    proxies: Vec<Vec3>,
    bounds: Option<BoundsBox>,
    next_handle: u64,
    proxies_created: usize,
}

impl ProxyScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn proxies(&self) -> &[Vec3] {
        &self.proxies
    }

    pub fn bounds(&self) -> Option<&BoundsBox> {
        self.bounds.as_ref()
    }

    /// Total number of proxies ever created by this scene.
    pub fn proxies_created(&self) -> usize {
        self.proxies_created
    }
}

impl RenderAdapter for ProxyScene {
    fn sync_agents(&mut self, boids: &[Boid]) {
        // The flock size is fixed for a run, so this only grows on the first sync
        if self.proxies.len() < boids.len() {
            let missing = boids.len() - self.proxies.len();
            self.proxies.extend(std::iter::repeat(Vec3::ZERO).take(missing));
            self.proxies_created += missing;
        }

        for (proxy, boid) in self.proxies.iter_mut().zip(boids) {
            *proxy = boid.position;
        }
    }

    fn sync_bounds(&mut self, show: bool, half_extents: Vec3) {
        if !show {
            if let Some(released) = self.bounds.take() {
                debug!(handle = ?released.handle, "releasing boundary box");
            }
            return;
        }

        if let Some(existing) = self.bounds.as_mut() {
            existing.half_extents = half_extents;
            return;
        }

        let handle = BoundsHandle(self.next_handle);
        self.next_handle += 1;
        debug!(?handle, "creating boundary box");
        self.bounds = Some(BoundsBox { handle, half_extents });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxies_are_created_once_and_updated_by_index() {
        let mut scene = ProxyScene::new();
        let mut boids = vec![
            Boid::new(Vec3::new(1.0, 0.0, 0.0)),
            Boid::new(Vec3::new(0.0, 2.0, 0.0)),
            Boid::new(Vec3::new(0.0, 0.0, 3.0)),
        ];

        scene.sync_agents(&boids);
        assert_eq!(scene.proxies(), &[boids[0].position, boids[1].position, boids[2].position]);
        assert_eq!(scene.proxies_created(), 3);

        boids[1].position = Vec3::new(-5.0, 0.0, 0.0);
        scene.sync_agents(&boids);
        assert_eq!(scene.proxies()[1], Vec3::new(-5.0, 0.0, 0.0));
        assert_eq!(scene.proxies().len(), 3);
        assert_eq!(scene.proxies_created(), 3);
    }

    #[test]
    fn bounds_box_follows_the_flag() {
        let mut scene = ProxyScene::new();
        scene.sync_bounds(false, Vec3::ONE);
        assert!(scene.bounds().is_none());

        scene.sync_bounds(true, Vec3::ONE);
        let first = *scene.bounds().unwrap();
        assert_eq!(first.half_extents, Vec3::ONE);

        // staying visible keeps the same box
        scene.sync_bounds(true, Vec3::splat(2.0));
        let same = *scene.bounds().unwrap();
        assert_eq!(same.handle, first.handle);
        assert_eq!(same.half_extents, Vec3::splat(2.0));

        scene.sync_bounds(false, Vec3::splat(2.0));
        assert!(scene.bounds().is_none());

        scene.sync_bounds(true, Vec3::splat(2.0));
        assert_ne!(scene.bounds().unwrap().handle, first.handle);
    }
}
