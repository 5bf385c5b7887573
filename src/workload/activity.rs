//! Recency-weighted official activity ranking.
//!
//! Raw assignment counts overweight officials who worked long ago; an
//! exponential half-life keeps the ranking responsive to recent activity
//! while still rewarding a consistent assignment history.
//!
//! # Algorithm
//!
//! 1. Keep fixtures with a kickoff in `[now - lookback, now]`.
//! 2. Each filled role slot contributes `0.5^(age_days / half_life_days)`
//!    to the entry keyed by the official's canonical identity.
//! 3. Tier entries by the 33rd/66th percentile of accumulated weight.
//! 4. Rank by weight descending, truncate to `top_n`.
//!
//! Percentiles are computed over the full entry population before the
//! `top_n` cut, so a displayed tier reflects rank among all scored
//! officials.
//!
//! # Reference
//! Hyndman & Fan (1996), "Sample Quantiles in Statistical Packages",
//! type 7 (linear interpolation between order statistics)

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{resolve_display_name, Fixture};

/// Activity scoring parameters.
#[derive(Debug, Clone)]
pub struct ScoreParams {
    /// How many days back assignments still count.
    pub lookback_days: i64,
    /// Days for an assignment's contribution to halve.
    /// Non-positive disables decay (every record weighs 1.0).
    pub half_life_days: f64,
    /// Maximum entries returned.
    pub top_n: usize,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            half_life_days: 30.0,
            top_n: 24,
        }
    }
}

impl ScoreParams {
    /// Creates the default parameters (30-day lookback and half-life,
    /// top 24).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback window in days.
    pub fn with_lookback_days(mut self, days: i64) -> Self {
        self.lookback_days = days;
        self
    }

    /// Sets the decay half-life in days.
    pub fn with_half_life_days(mut self, days: f64) -> Self {
        self.half_life_days = days;
        self
    }

    /// Sets the maximum number of entries returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Activity bucket assigned by percentile rank of decayed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityTier {
    /// Accumulated weight at or below the 33rd percentile.
    Low,
    /// Between the 33rd and 66th percentile.
    Medium,
    /// Above the 66th percentile.
    High,
}

/// One official's standing in the activity ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Canonical identity key.
    pub key: String,
    /// Best-known display name (capitalized variant preferred).
    pub name: String,
    /// Profile image from the first record that carried one.
    pub image_url: Option<String>,
    /// Accumulated half-life-decayed score.
    pub weight: f64,
    /// Raw assignment count inside the lookback window.
    pub appearances: u32,
    /// Percentile bucket of `weight`.
    pub tier: ActivityTier,
}

struct Accumulator {
    name: String,
    image_url: Option<String>,
    weight: f64,
    appearances: u32,
}

/// Computes the decayed activity ranking of officials.
///
/// Fixtures without a kickoff, older than the lookback window, or in
/// the future are skipped; the ranking never fails on malformed
/// records. Entries with equal weight order by canonical key so the
/// result is deterministic for a fixed snapshot and `now`.
pub fn score_activity(
    fixtures: &[Fixture],
    now: DateTime<Utc>,
    params: &ScoreParams,
) -> Vec<ActivityEntry> {
    let window_start = now - Duration::days(params.lookback_days);
    let mut entries: HashMap<String, Accumulator> = HashMap::new();

    for fixture in fixtures {
        let Some(kickoff) = fixture.kickoff else {
            continue;
        };
        if kickoff < window_start || kickoff > now {
            continue;
        }

        let age_days = (now - kickoff).num_milliseconds() as f64 / 86_400_000.0;
        let weight = decay_weight(age_days, params.half_life_days);

        for (_, official) in fixture.officials() {
            let entry = entries
                .entry(official.canonical_key())
                .or_insert_with(|| Accumulator {
                    name: official.name.clone(),
                    image_url: None,
                    weight: 0.0,
                    appearances: 0,
                });
            entry.weight += weight;
            entry.appearances += 1;
            resolve_display_name(&mut entry.name, &official.name);
            if entry.image_url.is_none() {
                entry.image_url = official.image_url.clone();
            }
        }
    }

    if entries.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<f64> = entries.values().map(|e| e.weight).collect();
    weights.sort_by(f64::total_cmp);
    let p33 = percentile(&weights, 0.33);
    let p66 = percentile(&weights, 0.66);

    let mut ranked: Vec<ActivityEntry> = entries
        .into_iter()
        .map(|(key, acc)| ActivityEntry {
            tier: tier_for(acc.weight, p33, p66),
            key,
            name: acc.name,
            image_url: acc.image_url,
            weight: acc.weight,
            appearances: acc.appearances,
        })
        .collect();

    ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight).then_with(|| a.key.cmp(&b.key)));
    ranked.truncate(params.top_n);
    ranked
}

fn decay_weight(age_days: f64, half_life_days: f64) -> f64 {
    if half_life_days <= 0.0 {
        return 1.0;
    }
    0.5_f64.powf(age_days / half_life_days)
}

fn tier_for(weight: f64, p33: f64, p66: f64) -> ActivityTier {
    if weight <= p33 {
        ActivityTier::Low
    } else if weight <= p66 {
        ActivityTier::Medium
    } else {
        ActivityTier::High
    }
}

/// Linear-interpolation percentile over sorted samples.
///
/// `index = p * (n - 1)`; the value is interpolated between the
/// surrounding order statistics.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let index = p * (sorted.len() - 1) as f64;
    let lo = index.floor() as usize;
    let hi = index.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }

    let frac = index - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
