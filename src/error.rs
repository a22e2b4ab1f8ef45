/*
 * Error Module
 *
 * Configuration errors for the flocking core. Every error here is raised
 * before a parameter set can influence a tick; nothing inside a tick fails.
 */

use thiserror::Error;

/// Reasons a parameter set or simulation setup is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f32 },
    #[error("{name} must be at most {max} (got {value})")]
    TooLarge { name: &'static str, value: f32, max: f32 },
    #[error("bounds.{axis} must be a positive, finite half-extent (got {value})")]
    NonPositiveBound { axis: char, value: f32 },
}
