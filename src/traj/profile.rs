//! Derived trajectory constants
//!
//! Computed once from the startup parameters and never mutated. The 1D and
//! 2D variants share this vertical-axis profile verbatim; the 2D variant
//! layers its horizontal constants on top.

use crate::nearly_non_negative;

/// Immutable constants derived from one vertical-axis setup.
///
/// `first_contact` and `rest_time` are `+inf` when the ball never lands or
/// never stops bouncing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactProfile {
    /// Acceleration due to gravity (positive = floorward)
    pub gravity: f64,
    /// Coefficient of restitution `k`
    pub restitution: f64,
    /// Floor line
    pub floor: f64,
    /// Discriminant `u0^2 + 2g(floor - s0)` of the initial flight quadratic
    pub discriminant: f64,
    /// Time of first floor contact (`t1`)
    pub first_contact: f64,
    /// Whether the trajectory re-crosses the floor after first contact,
    /// i.e. genuine future bounces exist rather than a single terminal
    /// parabola
    pub rebounds: bool,
    /// Vertical velocity starting the first bounce (`u1`, negative = away
    /// from the floor)
    pub rebound_velocity: f64,
    /// Time the ball comes to rest on the floor (`T`)
    pub rest_time: f64,
}

impl ContactProfile {
    /// Derive the profile from initial vertical position `s0`, velocity
    /// `u0`, gravity `g`, restitution `k` and the floor line.
    ///
    /// Callers validate `s0 <= floor` first; see
    /// [`DropConfig::validate`](super::config::DropConfig::validate).
    pub fn derive(s0: f64, u0: f64, g: f64, k: f64, floor: f64) -> Self {
        let eps = f64::EPSILON;
        let discriminant = u0 * u0 + 2.0 * g * (floor - s0);

        let (first_contact, rebounds) = if g == 0.0 && u0 > 0.0 {
            // Unaccelerated floorward drift: one contact, one reflection.
            ((floor - s0) / u0, false)
        } else if g == 0.0 || discriminant < 0.0 {
            // Never reaches the floor.
            (f64::INFINITY, false)
        } else {
            let sqrt_d = discriminant.sqrt();
            let r0 = (-u0 - sqrt_d) / g;
            let r1 = (-u0 + sqrt_d) / g;
            let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
            // First contact is the smallest root admissible as a time; the
            // other root sitting before t = 0 means the parabola genuinely
            // re-crosses the floor instead of grazing it.
            let t1 = if nearly_non_negative(lo, eps) {
                lo
            } else if nearly_non_negative(hi, eps) {
                hi
            } else {
                f64::INFINITY
            };
            (t1, t1.is_finite() && lo < eps)
        };

        let rebound_velocity = if first_contact.is_finite() {
            -k * (u0 + g * first_contact)
        } else {
            0.0
        };

        let rest_time = if g == 0.0 || k == 1.0 {
            f64::INFINITY
        } else {
            first_contact - 2.0 * rebound_velocity / (g * (1.0 - k))
        };

        log::debug!(
            "contact profile: discriminant={discriminant} t1={first_contact} \
             rebounds={rebounds} u1={rebound_velocity} rest={rest_time}"
        );

        Self {
            gravity: g,
            restitution: k,
            floor,
            discriminant,
            first_contact,
            rebounds,
            rebound_velocity,
            rest_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference drop: s0=100, u0=0.5, g=0.01, k=0.8, floor=600
    fn reference() -> ContactProfile {
        ContactProfile::derive(100.0, 0.5, 0.01, 0.8, 600.0)
    }

    #[test]
    fn test_reference_drop_constants() {
        let p = reference();
        assert!((p.discriminant - 10.25).abs() < 1e-12);
        assert!((p.first_contact - 270.156).abs() < 1e-3);
        assert!(p.rebounds);
        assert!((p.rebound_velocity - (-2.5613)).abs() < 1e-4);
        assert!((p.rest_time - 2831.4).abs() < 0.1);
    }

    #[test]
    fn test_zero_gravity_floorward_drift() {
        let p = ContactProfile::derive(100.0, 0.5, 0.0, 0.8, 600.0);
        assert_eq!(p.first_contact, 1000.0);
        assert!(!p.rebounds);
        assert_eq!(p.rebound_velocity, -0.4);
        assert_eq!(p.rest_time, f64::INFINITY);
    }

    #[test]
    fn test_zero_gravity_moving_away_never_lands() {
        let p = ContactProfile::derive(100.0, -0.5, 0.0, 0.8, 600.0);
        assert_eq!(p.first_contact, f64::INFINITY);
        assert!(!p.rebounds);

        let p = ContactProfile::derive(100.0, 0.0, 0.0, 0.8, 600.0);
        assert_eq!(p.first_contact, f64::INFINITY);
        assert!(!p.rebounds);
    }

    #[test]
    fn test_negative_discriminant_never_lands() {
        // Gravity away from the floor, launched upward: apex stays short.
        let p = ContactProfile::derive(100.0, -0.5, -0.01, 0.8, 600.0);
        assert!(p.discriminant < 0.0);
        assert_eq!(p.first_contact, f64::INFINITY);
        assert!(!p.rebounds);
    }

    #[test]
    fn test_elastic_ball_never_rests() {
        let p = ContactProfile::derive(100.0, 0.5, 0.01, 1.0, 600.0);
        assert!(p.first_contact.is_finite());
        assert!(p.rebounds);
        assert_eq!(p.rest_time, f64::INFINITY);
    }

    #[test]
    fn test_ball_resting_on_floor() {
        // Tangential contact at t=0: settles immediately.
        let p = ContactProfile::derive(600.0, 0.0, 0.01, 0.8, 600.0);
        assert_eq!(p.discriminant, 0.0);
        assert_eq!(p.first_contact, 0.0);
        assert!(p.rebounds);
        assert_eq!(p.rebound_velocity, 0.0);
        assert_eq!(p.rest_time, 0.0);
    }

    #[test]
    fn test_inelastic_ball_rests_at_first_contact() {
        let p = ContactProfile::derive(100.0, 0.5, 0.01, 0.0, 600.0);
        assert_eq!(p.rebound_velocity, 0.0);
        assert_eq!(p.rest_time, p.first_contact);
    }
}
