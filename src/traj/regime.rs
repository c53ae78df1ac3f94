//! Regime classification
//!
//! Elapsed time falls into exactly one of four mutually exclusive regimes.
//! Classification is total for `t >= 0` and closed form: the bounce index
//! comes from inverting the restitution series, never from stepping bounce
//! by bounce.

use super::profile::ContactProfile;
use super::series::{BounceRecord, BounceSeries};

/// The physical regime containing one elapsed-time query.
///
/// Each variant carries exactly what its position evaluator consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Regime {
    /// Initial flight, `t <= t1`
    Flight,
    /// Single post-contact parabola that never re-crosses the floor
    Terminal {
        /// Time since first contact (`t - t1`)
        since_contact: f64,
    },
    /// Mid-bounce, with the bounce's series-derived parameters
    Bounce(BounceRecord),
    /// At rest on the floor, `t >= T`
    Settled,
}

/// Classify elapsed time `t` against a derived profile.
pub fn classify(profile: &ContactProfile, t: f64) -> Regime {
    if t <= profile.first_contact {
        return Regime::Flight;
    }
    let since_contact = t - profile.first_contact;
    if !profile.rebounds {
        return Regime::Terminal { since_contact };
    }
    if t >= profile.rest_time {
        return Regime::Settled;
    }
    let series = BounceSeries::from_profile(profile);
    match series.index_at(since_contact) {
        Some(n) => Regime::Bounce(series.record(n, since_contact)),
        // Floating error at the settling boundary can push the series
        // inversion out of range; the adjacent regime is rest.
        None => Regime::Settled,
    }
}
