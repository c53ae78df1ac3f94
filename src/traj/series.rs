//! Geometric bounce series
//!
//! Restitution scales each bounce's launch speed by `k`, so bounce
//! durations form a geometric sequence. Everything about bounce `n` is a
//! closed-form partial sum of that sequence, and locating `n` itself
//! inverts the series with a base-`k` logarithm. Nothing here loops over
//! bounces.

use super::profile::ContactProfile;

/// Parameters of one bounce, computed on demand for a classified index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceRecord {
    /// Bounce index from the series inversion. 1-based for `k < 1`; the
    /// elastic `k = 1` branch counts from 0, paired with its own
    /// start-time formula.
    pub index: u64,
    /// Velocity decay factor `k^(n-1)`
    pub decay: f64,
    /// Vertical velocity at bounce start (negative = away from the floor)
    pub velocity: f64,
    /// Bounce start time relative to first contact (`t0_n`)
    pub start: f64,
    /// Elapsed time within the bounce (`dt`), `0 <= dt < duration(n)`
    pub local_t: f64,
}

/// Closed-form solver over the bounce series of one contact profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceSeries {
    /// Velocity starting bounce 1 (`u1`)
    pub rebound_velocity: f64,
    /// Acceleration due to gravity
    pub gravity: f64,
    /// Coefficient of restitution `k`
    pub restitution: f64,
}

impl BounceSeries {
    pub fn from_profile(profile: &ContactProfile) -> Self {
        Self {
            rebound_velocity: profile.rebound_velocity,
            gravity: profile.gravity,
            restitution: profile.restitution,
        }
    }

    /// Velocity decay factor `k^(n-1)`.
    #[inline]
    pub fn decay(&self, n: u64) -> f64 {
        self.restitution.powf(n as f64 - 1.0)
    }

    /// Partial-sum factor shared by bounce start times and the planar
    /// variant's cumulative drift: `n` for `k = 1` (arithmetic series),
    /// `(1 - k^(n-1)) / (1 - k)` otherwise.
    #[inline]
    pub fn partial_sum_factor(&self, n: u64) -> f64 {
        if self.restitution == 1.0 {
            n as f64
        } else {
            (1.0 - self.decay(n)) / (1.0 - self.restitution)
        }
    }

    /// Bounce start time relative to first contact (`t0_n`).
    #[inline]
    pub fn start(&self, n: u64) -> f64 {
        (-2.0 * self.rebound_velocity / self.gravity) * self.partial_sum_factor(n)
    }

    /// Duration of bounce `n`.
    #[inline]
    pub fn duration(&self, n: u64) -> f64 {
        -2.0 * self.decay(n) * self.rebound_velocity / self.gravity
    }

    /// Locate the bounce whose time window contains `since_contact`
    /// (`t - t1`): floor division for the constant-duration elastic case,
    /// a base-`k` logarithm for the decaying one.
    ///
    /// Returns `None` when floating error pushes the inversion out of the
    /// series' range, which can only happen within ulps of the settling
    /// time.
    pub fn index_at(&self, since_contact: f64) -> Option<u64> {
        let u1 = self.rebound_velocity;
        let g = self.gravity;
        let k = self.restitution;
        let n = if k == 1.0 {
            (-g * since_contact / (2.0 * u1)).floor()
        } else {
            let arg = 1.0 + g * since_contact * (1.0 - k) / (2.0 * u1);
            if arg <= 0.0 {
                return None;
            }
            1.0 + arg.log(k).floor()
        };
        (n.is_finite() && n >= 0.0).then_some(n as u64)
    }

    /// Full record for bounce `n` at local query time.
    pub fn record(&self, n: u64, since_contact: f64) -> BounceRecord {
        let decay = self.decay(n);
        let velocity = decay * self.rebound_velocity;
        let start = self.start(n);
        BounceRecord {
            index: n,
            decay,
            velocity,
            start,
            local_t: since_contact - start,
        }
    }
}
