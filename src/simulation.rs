/*
 * Simulation Module
 *
 * The Simulation owns the flock and the current parameter set and advances
 * them one tick at a time. A tick is driven from outside (one call, one
 * tick) and always runs to completion.
 *
 * Two update orders are offered and chosen once, at construction:
 * - Sequential: boids are updated in place in index order, so boid k reads
 *   boids 0..k as already moved this tick. This is the reference behaviour.
 * - Synchronized: every delta is computed from the last committed state and
 *   only then are boids written. The read phase may run on the rayon pool;
 *   collecting the deltas is the barrier before the write phase.
 */

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info, trace, warn};

use crate::boid::Boid;
use crate::debug::FlockStats;
use crate::error::ConfigError;
use crate::params::{ParameterSet, ParameterSource, SimulationConfig, UpdateMode};
use crate::physics::integrate;
use crate::render::RenderAdapter;
use crate::rules::steering_delta;

#[derive(Debug, Clone)]
pub struct Simulation {
    boids: Vec<Boid>,
    params: ParameterSet,
    mode: UpdateMode,
    parallel: bool,
    ticks: u64,
    seed: Option<u64>,
}

impl Simulation {
    /// Scatter `config.agent_count` resting boids uniformly inside `params.bounds`.
    pub fn new(config: &SimulationConfig, params: ParameterSet) -> Result<Self, ConfigError> {
        params.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let boids: Vec<Boid> = (0..config.agent_count)
            .map(|_| Boid::random_within(&mut rng, params.bounds))
            .collect();

        info!(
            agents = boids.len(),
            mode = ?config.mode,
            parallel = config.parallel,
            seed,
            "flock created"
        );

        Ok(Self {
            boids,
            params,
            mode: config.mode,
            parallel: config.parallel,
            ticks: 0,
            seed: Some(seed),
        })
    }

    /// Start from an explicit flock instead of a random one.
    pub fn from_boids(
        boids: Vec<Boid>,
        params: ParameterSet,
        mode: UpdateMode,
    ) -> Result<Self, ConfigError> {
        params.validate()?;

        Ok(Self {
            boids,
            params,
            mode,
            parallel: false,
            ticks: 0,
            seed: None,
        })
    }

    // Only affects synchronized ticks; sequential ticks are inherently serial
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn stats(&self) -> FlockStats {
        FlockStats::collect(&self.boids, self.ticks)
    }

    /// Replace the parameter set used by the following ticks.
    ///
    /// An invalid set is rejected and the current one stays in force.
    pub fn apply_params(&mut self, params: ParameterSet) -> Result<(), ConfigError> {
        if let Err(err) = params.validate() {
            warn!(%err, "rejected parameter set");
            return Err(err);
        }

        if params != self.params {
            debug!(?params, "parameters applied");
            self.params = params;
        }

        Ok(())
    }

    /// Sample `source` once, apply it, then run one tick.
    ///
    /// If the sampled set is invalid no tick runs and the error is returned.
    pub fn step<S: ParameterSource + ?Sized>(&mut self, source: &mut S) -> Result<(), ConfigError> {
        self.apply_params(source.sample())?;
        self.tick();
        Ok(())
    }

    // Advance every boid once with the current parameters
    pub fn tick(&mut self) {
        let params = self.params;

        match self.mode {
            UpdateMode::Sequential => self.tick_sequential(&params),
            UpdateMode::Synchronized => self.tick_synchronized(&params),
        }

        self.ticks += 1;
        trace!(tick = self.ticks, "tick complete");
    }

    fn tick_sequential(&mut self, params: &ParameterSet) {
        for i in 0..self.boids.len() {
            // Reads the live flock, including boids already moved this tick
            let delta = steering_delta(&self.boids, i, params);
            integrate(&mut self.boids[i], delta, params.speed_limit);
        }
    }

    fn tick_synchronized(&mut self, params: &ParameterSet) {
        let committed = &self.boids;

        let deltas: Vec<Vec3> = if self.parallel {
            (0..committed.len())
                .into_par_iter()
                .map(|i| steering_delta(committed, i, params))
                .collect()
        } else {
            (0..committed.len())
                .map(|i| steering_delta(committed, i, params))
                .collect()
        };

        for (boid, delta) in self.boids.iter_mut().zip(deltas) {
            integrate(boid, delta, params.speed_limit);
        }
    }

    /// Hand the committed flock and the bounds flag to a renderer.
    pub fn publish<R: RenderAdapter + ?Sized>(&self, adapter: &mut R) {
        adapter.sync_agents(&self.boids);
        adapter.sync_bounds(self.params.show_bounds, self.params.bounds);
    }
}
