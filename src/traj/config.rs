//! Startup parameters for the trajectory demos
//!
//! Coordinates are screen-style: the vertical axis grows toward the floor,
//! so positive gravity and positive vertical velocity both point floorward,
//! and a valid ball starts at a position `<= floor`.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{BALL_RADIUS, FLOOR};

/// Rejected startup configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The ball's release point lies beyond the floor line.
    #[error("ball starts below floor (release {release}, floor {floor})")]
    BelowFloor { release: f64, floor: f64 },
}

/// Parameters for the vertical-drop trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropConfig {
    /// Initial position of the ball's bottom point
    pub release: f64,
    /// Initial velocity (positive = floorward)
    pub velocity: f64,
    /// Acceleration due to gravity (positive = floorward)
    pub gravity: f64,
    /// Coefficient of restitution, `0 <= k <= 1`
    pub restitution: f64,
    /// Floor line
    pub floor: f64,
}

impl Default for DropConfig {
    fn default() -> Self {
        Self {
            release: 100.0,
            velocity: 0.5,
            gravity: 0.01,
            restitution: 0.8,
            floor: FLOOR,
        }
    }
}

impl DropConfig {
    /// Reject configurations that start beyond the floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.release > self.floor {
            return Err(ConfigError::BelowFloor {
                release: self.release,
                floor: self.floor,
            });
        }
        Ok(())
    }
}

/// Parameters for the planar toss trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TossConfig {
    /// Initial position of the ball's bottom point (x, y)
    pub release: DVec2,
    /// Initial velocity (x drift, y floorward)
    pub velocity: DVec2,
    /// Acceleration due to gravity on the vertical axis
    pub gravity: f64,
    /// Coefficient of restitution, `0 <= k <= 1`
    pub restitution: f64,
    /// Floor line (vertical axis)
    pub floor: f64,
}

impl Default for TossConfig {
    fn default() -> Self {
        Self {
            release: DVec2::new(0.0, 2.0 * BALL_RADIUS),
            velocity: DVec2::new(0.1, 0.2),
            gravity: 0.001,
            restitution: 0.8,
            floor: FLOOR,
        }
    }
}

impl TossConfig {
    /// Reject configurations that start beyond the floor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.release.y > self.floor {
            return Err(ConfigError::BelowFloor {
                release: self.release.y,
                floor: self.floor,
            });
        }
        Ok(())
    }
}

/// A pair of demo setups, loadable from a JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub drop: DropConfig,
    pub toss: TossConfig,
}

impl Scenario {
    /// Environment variable naming the scenario file
    const PATH_VAR: &'static str = "BOUNCEFORM_SCENARIO";

    /// Load the scenario named by `BOUNCEFORM_SCENARIO`, falling back to
    /// the built-in demo constants when the variable is unset or the file
    /// is missing or unparseable.
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_VAR) else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(scenario) => {
                    log::info!("Loaded scenario from {path}");
                    scenario
                }
                Err(e) => {
                    log::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read {path}: {e}, using defaults");
                Self::default()
            }
        }
    }
}
