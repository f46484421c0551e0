//! Opportunity scoring (BOS).
//!
//! Computes the Base Opportunity Score for a candidate airport from its
//! demand signal (population, income), the competition already serving it,
//! its distance from HQ, and its country's openness:
//!
//! - economic term: `population^POP_EXP * income^INCOME_EXP`
//! - competition penalty: `(1 + ln(1 + seats / COMP_SCALE))^COMP_EXP`,
//!   monotonically increasing but sub-linear so mega-hubs are dampened,
//!   not annihilated
//! - distance weight: a Gaussian centered on the target stage length,
//!   rescaled into `[DIST_FLOOR, DIST_PEAK]`
//! - openness weight: `0.9 + 0.02 * clamp(openness, 0, 10)`, in [0.9, 1.1]
//!
//! `score = economic / penalty * distance_weight * openness_weight`
//!
//! Airports with zero population or income carry no usable demand signal
//! and are excluded from ranking rather than scored as zero.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Parameter bundle driving the score formula. Immutable; selected once
/// at process start via [`ScoringProfile`].
#[derive(Debug, Clone, Serialize)]
pub struct ScoringParams {
    /// Exponent on population in the economic term.
    pub pop_exp: f64,
    /// Exponent on income level in the economic term.
    pub income_exp: f64,
    /// Seats per unit of competition ratio.
    pub comp_scale: f64,
    /// Exponent on the log-dampened competition penalty.
    pub comp_exp: f64,
    /// Target stage length in km (peak of the distance weight).
    pub dist_mu: f64,
    /// Spread of the distance preference in km.
    pub dist_sigma: f64,
    /// Distance weight far from the target stage length.
    pub dist_floor: f64,
    /// Distance weight at exactly the target stage length.
    pub dist_peak: f64,
}

/// Closed set of tunable scoring profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// General-purpose profile; favors the short-to-medium haul band.
    Balanced,
    /// Favors intercontinental stage lengths with lighter competition
    /// dampening (long-haul markets are thinner).
    LongHaul,
    /// Favors short feeder routes and punishes saturation harder.
    Regional,
}

impl ScoringProfile {
    pub const ALL: [ScoringProfile; 3] = [
        ScoringProfile::Balanced,
        ScoringProfile::LongHaul,
        ScoringProfile::Regional,
    ];

    pub fn params(&self) -> ScoringParams {
        match self {
            ScoringProfile::Balanced => ScoringParams {
                pop_exp: 0.7,
                income_exp: 1.3,
                comp_scale: 10_000.0,
                comp_exp: 1.5,
                dist_mu: 1100.0,
                dist_sigma: 900.0,
                dist_floor: 0.1,
                dist_peak: 1.5,
            },
            ScoringProfile::LongHaul => ScoringParams {
                pop_exp: 0.75,
                income_exp: 1.2,
                comp_scale: 15_000.0,
                comp_exp: 1.3,
                dist_mu: 6000.0,
                dist_sigma: 2500.0,
                dist_floor: 0.2,
                dist_peak: 1.4,
            },
            ScoringProfile::Regional => ScoringParams {
                pop_exp: 0.65,
                income_exp: 1.25,
                comp_scale: 6000.0,
                comp_exp: 1.6,
                dist_mu: 500.0,
                dist_sigma: 400.0,
                dist_floor: 0.05,
                dist_peak: 1.6,
            },
        }
    }

    /// Resolve a profile by name, falling back to [`ScoringProfile::Balanced`]
    /// with a warning when the name is unrecognized. Unknown names are a
    /// configuration concern, not a runtime error.
    pub fn from_name_or_default(name: &str) -> ScoringProfile {
        match name.parse() {
            Ok(profile) => profile,
            Err(_) => {
                tracing::warn!(
                    "Unknown scoring profile '{name}', falling back to '{}'",
                    ScoringProfile::Balanced
                );
                ScoringProfile::Balanced
            }
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        ScoringProfile::Balanced
    }
}

impl fmt::Display for ScoringProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringProfile::Balanced => write!(f, "balanced"),
            ScoringProfile::LongHaul => write!(f, "longhaul"),
            ScoringProfile::Regional => write!(f, "regional"),
        }
    }
}

impl FromStr for ScoringProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(ScoringProfile::Balanced),
            "longhaul" | "long-haul" => Ok(ScoringProfile::LongHaul),
            "regional" => Ok(ScoringProfile::Regional),
            _ => Err(format!("Unknown scoring profile: {s}")),
        }
    }
}

/// Compute the opportunity score for one enriched candidate.
///
/// # Returns
/// `None` when `population` or `income_level` is zero (no usable demand
/// signal; such candidates must be dropped, not ranked at zero).
pub fn opportunity_score(
    population: u64,
    income_level: u32,
    competition_seats: u64,
    distance_km: f64,
    openness: f64,
    params: &ScoringParams,
) -> Option<f64> {
    if population == 0 || income_level == 0 {
        return None;
    }

    let economic =
        (population as f64).powf(params.pop_exp) * (income_level as f64).powf(params.income_exp);

    let competition_ratio = competition_seats as f64 / params.comp_scale;
    let penalty = (1.0 + (1.0 + competition_ratio).ln()).powf(params.comp_exp);

    let distance_weight = params.dist_floor
        + (params.dist_peak - params.dist_floor)
            * (-(distance_km - params.dist_mu).powi(2)
                / (2.0 * params.dist_sigma * params.dist_sigma))
                .exp();

    let openness_weight = 0.9 + 0.02 * openness.clamp(0.0, 10.0);

    Some(economic / penalty * distance_weight * openness_weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScoringParams {
        ScoringProfile::Balanced.params()
    }

    #[test]
    fn test_no_score_without_demand_signal() {
        let p = params();
        assert!(opportunity_score(0, 50, 1000, 800.0, 5.0, &p).is_none());
        assert!(opportunity_score(500_000, 0, 1000, 800.0, 5.0, &p).is_none());
        assert!(opportunity_score(0, 0, 0, 0.0, 0.0, &p).is_none());
    }

    #[test]
    fn test_spot_value_at_target_stage_length() {
        // pop 1000, income 10, no competition, d = mu, openness 5:
        // economic = 1000^0.7 * 10^1.3 = 10^3.4 = 2511.886
        // penalty = 1, distance weight = 1.5, openness weight = 1.0
        // score = 3767.83
        let p = params();
        let s = opportunity_score(1000, 10, 0, p.dist_mu, 5.0, &p).unwrap();
        assert!((s - 3767.83).abs() < 0.1, "got {s}");
    }

    #[test]
    fn test_strictly_decreasing_in_competition() {
        let p = params();
        let mut prev = f64::INFINITY;
        for seats in [0u64, 1000, 10_000, 100_000, 1_000_000] {
            let s = opportunity_score(2_000_000, 40, seats, 1500.0, 7.0, &p).unwrap();
            assert!(s < prev, "score must fall as seats grow: {s} >= {prev}");
            assert!(s > 0.0);
            prev = s;
        }
    }

    #[test]
    fn test_distance_weight_unimodal_at_mu() {
        let p = params();
        let at_mu = opportunity_score(1_000_000, 30, 0, p.dist_mu, 5.0, &p).unwrap();
        for d in [0.0, 300.0, 800.0, 1400.0, 3000.0, 9000.0] {
            if (d - p.dist_mu).abs() < f64::EPSILON {
                continue;
            }
            let s = opportunity_score(1_000_000, 30, 0, d, 5.0, &p).unwrap();
            assert!(s < at_mu, "score at d={d} should be below the peak");
        }
        // Symmetric around mu.
        let left = opportunity_score(1_000_000, 30, 0, p.dist_mu - 400.0, 5.0, &p).unwrap();
        let right = opportunity_score(1_000_000, 30, 0, p.dist_mu + 400.0, 5.0, &p).unwrap();
        assert!((left - right).abs() < 1e-6);
    }

    #[test]
    fn test_openness_weight_clamped() {
        let p = params();
        let base = opportunity_score(500_000, 20, 0, 1000.0, 10.0, &p).unwrap();
        let over = opportunity_score(500_000, 20, 0, 1000.0, 99.0, &p).unwrap();
        assert!((base - over).abs() < 1e-9, "openness must clamp at 10");

        let closed = opportunity_score(500_000, 20, 0, 1000.0, 0.0, &p).unwrap();
        // [0.9, 1.1] band: fully open is 1.1/0.9 of fully closed.
        assert!(((base / closed) - (1.1 / 0.9)).abs() < 1e-9);
    }

    #[test]
    fn test_profile_lookup_and_fallback() {
        assert_eq!(
            ScoringProfile::from_name_or_default("longhaul"),
            ScoringProfile::LongHaul
        );
        assert_eq!(
            ScoringProfile::from_name_or_default("REGIONAL"),
            ScoringProfile::Regional
        );
        assert_eq!(
            ScoringProfile::from_name_or_default("turbo"),
            ScoringProfile::Balanced
        );
    }
}
