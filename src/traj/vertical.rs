//! Vertical-drop trajectory
//!
//! The 1D variant: a ball released above the floor, bouncing in place.

use super::config::{ConfigError, DropConfig};
use super::profile::ContactProfile;
use super::regime::{Regime, classify};

/// Closed-form vertical bouncing-ball trajectory.
///
/// Construction validates the configuration and derives the contact
/// profile once; [`position`](Self::position) is then a pure function of
/// elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalTrajectory {
    config: DropConfig,
    profile: ContactProfile,
}

impl VerticalTrajectory {
    pub fn new(config: DropConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let profile = ContactProfile::derive(
            config.release,
            config.velocity,
            config.gravity,
            config.restitution,
            config.floor,
        );
        Ok(Self { config, profile })
    }

    /// The startup parameters backing this trajectory.
    pub fn config(&self) -> &DropConfig {
        &self.config
    }

    /// The derived constants backing this trajectory.
    pub fn profile(&self) -> &ContactProfile {
        &self.profile
    }

    /// Position of the ball's bottom point at elapsed time `t >= 0`.
    pub fn position(&self, t: f64) -> f64 {
        let c = &self.config;
        let p = &self.profile;
        match classify(p, t) {
            Regime::Flight => c.release + c.velocity * t + c.gravity * t * t / 2.0,
            Regime::Terminal { since_contact: dt } => {
                c.floor + p.rebound_velocity * dt + c.gravity * dt * dt / 2.0
            }
            Regime::Settled => c.floor,
            Regime::Bounce(rec) => {
                let dt = rec.local_t;
                c.floor + rec.velocity * dt + c.gravity * dt * dt / 2.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traj::series::BounceSeries;

    fn reference() -> VerticalTrajectory {
        VerticalTrajectory::new(DropConfig::default()).unwrap()
    }

    #[test]
    fn test_rejects_release_below_floor() {
        let config = DropConfig {
            release: 601.0,
            ..DropConfig::default()
        };
        assert!(VerticalTrajectory::new(config).is_err());
    }

    #[test]
    fn test_starts_at_release_exactly() {
        assert_eq!(reference().position(0.0), 100.0);
    }

    #[test]
    fn test_flight_follows_quadratic() {
        let traj = reference();
        for t in [1.0, 50.0, 150.0, 270.0] {
            let expected = 100.0 + 0.5 * t + 0.01 * t * t / 2.0;
            assert!((traj.position(t) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lands_on_floor_at_first_contact() {
        let traj = reference();
        let t1 = traj.profile().first_contact;
        assert!((traj.position(t1) - 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_settled_is_floor_exactly() {
        let traj = reference();
        assert_eq!(traj.position(3000.0), 600.0);
        assert_eq!(traj.position(1e9), 600.0);
    }

    #[test]
    fn test_never_beyond_floor() {
        let traj = reference();
        let rest = traj.profile().rest_time;
        let mut t = 0.0;
        while t < rest * 1.2 {
            assert!(
                traj.position(t) <= 600.0 + 1e-6,
                "position({}) = {} beyond floor",
                t,
                traj.position(t)
            );
            t += 0.37;
        }
    }

    #[test]
    fn test_speed_flips_and_decays_at_bounce_boundary() {
        let traj = reference();
        let p = traj.profile();
        let series = BounceSeries::from_profile(p);
        // Boundary between bounce 1 and bounce 2
        let t_b = p.first_contact + series.start(2);
        let h = 1e-3;
        let v_before = (traj.position(t_b - h) - traj.position(t_b - 2.0 * h)) / h;
        let v_after = (traj.position(t_b + 2.0 * h) - traj.position(t_b + h)) / h;
        assert!(v_before > 0.0, "approaching the floor");
        assert!(v_after < 0.0, "leaving the floor");
        assert!(
            (v_after + 0.8 * v_before).abs() < 1e-2,
            "speed should decay by k: before={}, after={}",
            v_before,
            v_after
        );
    }

    #[test]
    fn test_zero_gravity_terminal_law() {
        let config = DropConfig {
            gravity: 0.0,
            ..DropConfig::default()
        };
        let traj = VerticalTrajectory::new(config).unwrap();
        assert_eq!(traj.profile().first_contact, 1000.0);
        // One reflection, then linear retreat forever: u1 = -k*u0 = -0.4
        let expected = 600.0 - 0.4 * 500.0;
        assert!((traj.position(1500.0) - expected).abs() < 1e-9);
        assert!((traj.position(3000.0) - (600.0 - 0.4 * 2000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_bounces_do_not_settle() {
        let config = DropConfig {
            restitution: 1.0,
            ..DropConfig::default()
        };
        let traj = VerticalTrajectory::new(config).unwrap();
        // Far beyond any inelastic settling time the ball is still moving.
        let a = traj.position(1e6);
        let b = traj.position(1e6 + 50.0);
        assert!((a - b).abs() > 1e-6);
        assert!(a <= 600.0 + 1e-6 && b <= 600.0 + 1e-6);
    }
}
