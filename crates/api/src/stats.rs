//! Temperature aggregation.

use serde::Serialize;

/// Min/max/mean summary over a set of temperature observations.
///
/// Serializes with the fixed key order `TMIN`, `TMAX`, `TAVG`; min and max
/// stay integers, the mean is a float.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "TMIN")]
    pub tmin: i64,
    #[serde(rename = "TMAX")]
    pub tmax: i64,
    #[serde(rename = "TAVG")]
    pub tavg: f64,
}

impl TemperatureSummary {
    /// Aggregate a set of observations; `None` when the set is empty, which
    /// callers surface as an empty-range error instead of a degenerate value.
    pub fn from_observations(tobs: &[i64]) -> Option<Self> {
        let (&first, rest) = tobs.split_first()?;

        let mut tmin = first;
        let mut tmax = first;
        let mut sum = first;
        for &t in rest {
            tmin = tmin.min(t);
            tmax = tmax.max(t);
            sum += t;
        }

        Some(Self {
            tmin,
            tmax,
            tavg: sum as f64 / tobs.len() as f64,
        })
    }
}
