/*
 * Simulation Parameters Module
 *
 * This module defines the ParameterSet struct holding every live-tunable
 * scalar of the flocking rules, the construction-time SimulationConfig, and
 * the ParameterSource seam through which an outside panel (or a test) feeds
 * parameters into the simulation. Parameter sets are validated before they
 * are applied; invalid values are rejected, never clamped.
 */

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// Upper limits keep every product in a tick far from f32 overflow: a delta is
// at most a weight times a radius (times the flock size for separation), and
// a boid moves at most speed_limit per tick from a start inside the bounds.
pub const MAX_WEIGHT: f32 = 1.0e3;
pub const MAX_DISTANCE: f32 = 1.0e4;
pub const MAX_EXTENT: f32 = 1.0e6;

// Parameters for the flocking rules, sampled once at the start of every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub cohesion_weight: f32,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    /// Neighbor radius for cohesion and alignment.
    pub visual_range: f32,
    /// Tighter neighbor radius for separation.
    pub separation_radius: f32,
    pub speed_limit: f32,
    /// Half-extents of the containment box centred on the origin.
    pub bounds: Vec3,
    /// Fixed per-axis nudge applied when an agent is outside the box.
    pub boundary_push: f32,
    pub show_bounds: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            cohesion_weight: 0.005,
            separation_weight: 0.05,
            alignment_weight: 0.15,
            visual_range: 0.5,
            separation_radius: 0.1,
            speed_limit: 0.1,
            bounds: Vec3::splat(3.0),
            boundary_push: 0.01,
            show_bounds: false,
        }
    }
}

impl ParameterSet {
    // Check every scalar before the set is allowed anywhere near a tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("cohesion_weight", self.cohesion_weight, MAX_WEIGHT),
            ("separation_weight", self.separation_weight, MAX_WEIGHT),
            ("alignment_weight", self.alignment_weight, MAX_WEIGHT),
            ("visual_range", self.visual_range, MAX_DISTANCE),
            ("separation_radius", self.separation_radius, MAX_DISTANCE),
            ("speed_limit", self.speed_limit, MAX_DISTANCE),
            ("boundary_push", self.boundary_push, MAX_DISTANCE),
        ];

        for (name, value, max) in scalars {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
            if value > max {
                return Err(ConfigError::TooLarge { name, value, max });
            }
        }

        let extents = [
            ("bounds.x", 'x', self.bounds.x),
            ("bounds.y", 'y', self.bounds.y),
            ("bounds.z", 'z', self.bounds.z),
        ];

        for (name, axis, value) in extents {
            // NaN fails the comparison as well
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::NonPositiveBound { axis, value });
            }
            if value > MAX_EXTENT {
                return Err(ConfigError::TooLarge { name, value, max: MAX_EXTENT });
            }
        }

        Ok(())
    }

    // Slider ranges exposed to parameter panels
    pub fn get_cohesion_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.1
    }

    pub fn get_separation_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn get_alignment_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn get_visual_range_range() -> std::ops::RangeInclusive<f32> {
        0.0..=2.0
    }

    pub fn get_separation_radius_range() -> std::ops::RangeInclusive<f32> {
        0.0..=1.0
    }

    pub fn get_speed_limit_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.5
    }

    pub fn get_boundary_push_range() -> std::ops::RangeInclusive<f32> {
        0.0..=0.05
    }

    // Lower end stays above zero so a panel cannot produce an invalid box
    pub fn get_bounds_range() -> std::ops::RangeInclusive<f32> {
        0.25..=10.0
    }
}

/// How a tick orders reads and writes across agents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Agents are updated in place in index order; agent `k` sees agents
    /// `0..k` already moved this tick and the rest at last tick's state.
    #[default]
    Sequential,
    /// Every delta is computed from the last committed state, then all
    /// agents are committed together.
    Synchronized,
}

// Settings fixed for the lifetime of one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub agent_count: usize,
    /// Seed for initial placement; a random seed is drawn and logged when absent.
    pub seed: Option<u64>,
    pub mode: UpdateMode,
    /// Run the read phase of synchronized ticks on the rayon pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            agent_count: 150,
            seed: None,
            mode: UpdateMode::Sequential,
            parallel: true,
        }
    }
}

/// Supplies the parameter set to use for the next tick.
pub trait ParameterSource {
    fn sample(&mut self) -> ParameterSet;
}

// A fixed parameter set is a source that never changes
impl ParameterSource for ParameterSet {
    fn sample(&mut self) -> ParameterSet {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_inside_slider_ranges() {
        let params = ParameterSet::default();
        assert_eq!(params.validate(), Ok(()));
        assert!(ParameterSet::get_cohesion_weight_range().contains(&params.cohesion_weight));
        assert!(ParameterSet::get_separation_weight_range().contains(&params.separation_weight));
        assert!(ParameterSet::get_alignment_weight_range().contains(&params.alignment_weight));
        assert!(ParameterSet::get_visual_range_range().contains(&params.visual_range));
        assert!(ParameterSet::get_separation_radius_range().contains(&params.separation_radius));
        assert!(ParameterSet::get_speed_limit_range().contains(&params.speed_limit));
        assert!(ParameterSet::get_boundary_push_range().contains(&params.boundary_push));
        assert!(ParameterSet::get_bounds_range().contains(&params.bounds.x));
        assert!(*ParameterSet::get_bounds_range().start() > 0.0);
    }

    #[test]
    fn negative_scalars_are_rejected() {
        let params = ParameterSet {
            separation_radius: -0.1,
            ..ParameterSet::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::Negative { name: "separation_radius", value: -0.1 })
        );

        let params = ParameterSet {
            speed_limit: -1.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::Negative { name: "speed_limit", .. })
        ));
    }

    #[test]
    fn zero_scalars_are_accepted() {
        let params = ParameterSet {
            cohesion_weight: 0.0,
            separation_weight: 0.0,
            alignment_weight: 0.0,
            visual_range: 0.0,
            separation_radius: 0.0,
            speed_limit: 0.0,
            boundary_push: 0.0,
            ..ParameterSet::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn non_finite_scalars_are_rejected() {
        let params = ParameterSet {
            alignment_weight: f32::NAN,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite { name: "alignment_weight", .. })
        ));

        let params = ParameterSet {
            visual_range: f32::INFINITY,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonFinite { name: "visual_range", .. })
        ));
    }

    #[test]
    fn bounds_must_be_positive() {
        let params = ParameterSet {
            bounds: Vec3::new(1.0, 0.0, 1.0),
            ..ParameterSet::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::NonPositiveBound { axis: 'y', value: 0.0 })
        );

        let params = ParameterSet {
            bounds: Vec3::new(1.0, 1.0, -2.0),
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveBound { axis: 'z', .. })
        ));

        let params = ParameterSet {
            bounds: Vec3::new(f32::NAN, 1.0, 1.0),
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::NonPositiveBound { axis: 'x', .. })
        ));
    }

    #[test]
    fn oversized_scalars_are_rejected() {
        let params = ParameterSet {
            separation_weight: f32::MAX,
            ..ParameterSet::default()
        };
        assert_eq!(
            params.validate(),
            Err(ConfigError::TooLarge { name: "separation_weight", value: f32::MAX, max: MAX_WEIGHT })
        );

        let params = ParameterSet {
            visual_range: MAX_DISTANCE * 2.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooLarge { name: "visual_range", .. })
        ));

        let params = ParameterSet {
            bounds: Vec3::new(1.0, 1.0, 1.0e30),
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::TooLarge { name: "bounds.z", .. })
        ));
    }

    #[test]
    fn upper_limits_are_inclusive() {
        let params = ParameterSet {
            cohesion_weight: MAX_WEIGHT,
            separation_weight: MAX_WEIGHT,
            alignment_weight: MAX_WEIGHT,
            visual_range: MAX_DISTANCE,
            separation_radius: MAX_DISTANCE,
            speed_limit: MAX_DISTANCE,
            boundary_push: MAX_DISTANCE,
            bounds: Vec3::splat(MAX_EXTENT),
            show_bounds: false,
        };
        assert_eq!(params.validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let params: ParameterSet =
            serde_json::from_str(r#"{ "cohesion_weight": 0.02, "show_bounds": true }"#).unwrap();
        assert_eq!(params.cohesion_weight, 0.02);
        assert!(params.show_bounds);
        assert_eq!(params.speed_limit, ParameterSet::default().speed_limit);
        assert_eq!(params.bounds, ParameterSet::default().bounds);
    }

    #[test]
    fn update_mode_uses_snake_case_names() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "agent_count": 10, "mode": "synchronized" }"#).unwrap();
        assert_eq!(config.agent_count, 10);
        assert_eq!(config.mode, UpdateMode::Synchronized);
        assert_eq!(config.seed, None);
        assert!(config.parallel);
    }

    #[test]
    fn parameter_set_is_a_constant_source() {
        let mut source = ParameterSet {
            visual_range: 1.5,
            ..ParameterSet::default()
        };
        assert_eq!(source.sample().visual_range, 1.5);
        assert_eq!(source.sample().visual_range, 1.5);
    }
}
