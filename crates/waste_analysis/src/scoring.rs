use chrono::{DateTime, Datelike, Utc};
use pantry::{ConsumptionLog, InventoryItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::{RiskClassifier, RiskLevel};
use crate::frequency::ConsumptionFrequencyAnalyzer;
use crate::profiles::CategoryProfileRegistry;
use crate::seasonal::SeasonalAdjuster;

/// Selects the weighting scheme used by [`RiskScorer`].
///
/// Both schemes feed the same classification table; they differ only in how
/// the 0-100 score is put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightProfile {
    /// Full multi-factor model: expiration proximity, category
    /// perishability, seasonal adjustment, consumption frequency and
    /// quantity, with the seasonal multiplier applied to the total.
    Detailed,
    /// Coarse additive screen used for consumption-pattern checks: a few
    /// large flat penalties, no seasonal multiplier.
    Screening,
}

impl Default for WeightProfile {
    fn default() -> Self {
        WeightProfile::Detailed
    }
}

impl WeightProfile {
    pub fn as_str(&self) -> &str {
        match self {
            WeightProfile::Detailed => "detailed",
            WeightProfile::Screening => "screening",
        }
    }

    /// Parse a profile name, defaulting to `Detailed`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "screening" => WeightProfile::Screening,
            _ => WeightProfile::Detailed,
        }
    }
}

/// Named sub-scores behind a risk score, kept for explainability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBreakdown {
    pub expiration: i64,
    pub perishability: i64,
    pub seasonal: i64,
    pub consumption: i64,
    pub quantity_bonus: i64,
    /// Seasonal multiplier applied to the total, two decimal places.
    pub seasonal_multiplier: f64,
}

/// Derived, ephemeral per-item spoilage-risk assessment. Never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub item_id: Uuid,
    pub risk_score: u32,
    pub level: RiskLevel,
    pub breakdown: RiskBreakdown,
    pub days_until_expiration: i64,
    pub is_expired: bool,
    pub consumption_frequency: f64,
    pub recommendations: Vec<String>,
}

/// Whole days until an item expires, rounding partial days up.
/// Negative for items already past their date.
pub fn days_until_expiration(
    expiration_date: DateTime<Utc>,
    reference_time: DateTime<Utc>,
) -> i64 {
    let seconds = (expiration_date - reference_time).num_seconds();
    (seconds as f64 / 86_400.0).ceil() as i64
}

/// Combines expiration proximity, category perishability, seasonal
/// adjustment, consumption frequency and quantity into a 0-100 risk score
/// with a per-factor breakdown.
///
/// Pure with respect to its inputs: the reference time is injected, never
/// read from the wall clock.
pub struct RiskScorer<'a> {
    registry: &'a CategoryProfileRegistry,
    weight_profile: WeightProfile,
}

impl<'a> RiskScorer<'a> {
    pub fn new(registry: &'a CategoryProfileRegistry) -> Self {
        RiskScorer {
            registry,
            weight_profile: WeightProfile::Detailed,
        }
    }

    pub fn with_profile(registry: &'a CategoryProfileRegistry, weight_profile: WeightProfile) -> Self {
        RiskScorer {
            registry,
            weight_profile,
        }
    }

    /// Score one inventory item against the consumption log.
    ///
    /// Returns `None` when the item carries no expiration date: such items
    /// are skipped and flagged by the caller rather than failing the run.
    pub fn score(
        &self,
        item: &InventoryItem,
        logs: &[ConsumptionLog],
        reference_time: DateTime<Utc>,
    ) -> Option<RiskAssessment> {
        let expiration_date = item.expiration_date?;
        let days = days_until_expiration(expiration_date, reference_time);
        let profile = self.registry.profile(item.category);
        let frequency =
            ConsumptionFrequencyAnalyzer::frequency_score(&item.name, item.category, logs, reference_time);

        let (breakdown, raw_total, multiplier) = match self.weight_profile {
            WeightProfile::Detailed => {
                Self::detailed_components(item, profile, days, frequency, reference_time)
            }
            WeightProfile::Screening => Self::screening_components(item, days, frequency),
        };

        let risk_score = (raw_total * multiplier).clamp(0.0, 100.0).round() as u32;
        let level = RiskClassifier::classify(risk_score);
        let recommendations = RiskClassifier::recommendations(item, profile, days, frequency);

        Some(RiskAssessment {
            item_id: item.id,
            risk_score,
            level,
            breakdown,
            days_until_expiration: days,
            is_expired: days < 0,
            consumption_frequency: frequency,
            recommendations,
        })
    }

    /// Detailed model. Component ranges: expiration 0-40, perishability
    /// 0-25, seasonal 0-15, consumption 0-20, quantity bonus 0-10; the
    /// seasonal multiplier then scales the sum.
    fn detailed_components(
        item: &InventoryItem,
        profile: &crate::profiles::CategoryProfile,
        days: i64,
        frequency: f64,
        reference_time: DateTime<Utc>,
    ) -> (RiskBreakdown, f64, f64) {
        let expiration_score = match days {
            d if d < 0 => 40.0,
            0 => 38.0,
            1 => 35.0,
            2..=3 => 30.0,
            4..=7 => 20.0,
            8..=14 => 10.0,
            d => (10.0 - (d - 14) as f64 / 7.0).max(0.0),
        };

        let perishability_score = profile.perishability * 25.0;

        let multiplier = SeasonalAdjuster::multiplier(profile, reference_time.month0());
        let seasonal_score = ((multiplier - 0.85) * 60.0).clamp(0.0, 15.0);

        let consumption_score = 20.0 - frequency * 2.0;

        let quantity_bonus = if item.quantity > 5.0 {
            ((item.quantity - 5.0) * 2.0).min(10.0)
        } else {
            0.0
        };

        let raw_total = expiration_score
            + perishability_score
            + seasonal_score
            + consumption_score
            + quantity_bonus;

        let breakdown = RiskBreakdown {
            expiration: expiration_score.round() as i64,
            perishability: perishability_score.round() as i64,
            seasonal: seasonal_score.round() as i64,
            consumption: consumption_score.round() as i64,
            quantity_bonus: quantity_bonus.round() as i64,
            seasonal_multiplier: (multiplier * 100.0).round() / 100.0,
        };

        (breakdown, raw_total, multiplier)
    }

    /// Screening model: flat additive penalties, no seasonal term.
    ///
    /// Expired 80; expiring within 3 days 30; near expiry and barely
    /// consumed 50; category untouched in the window 20; large quantity
    /// with low consumption 15.
    fn screening_components(
        item: &InventoryItem,
        days: i64,
        frequency: f64,
    ) -> (RiskBreakdown, f64, f64) {
        let expiration_score = if days < 0 {
            80.0
        } else if days <= 3 {
            30.0
        } else {
            0.0
        };

        let mut consumption_score = 0.0;
        if frequency < 2.0 && (0..=7).contains(&days) {
            consumption_score += 50.0;
        }
        if frequency == 0.0 {
            consumption_score += 20.0;
        }

        let quantity_bonus = if item.quantity > 5.0 && frequency < 3.0 {
            15.0
        } else {
            0.0
        };

        let raw_total = expiration_score + consumption_score + quantity_bonus;

        let breakdown = RiskBreakdown {
            expiration: expiration_score as i64,
            perishability: 0,
            seasonal: 0,
            consumption: consumption_score as i64,
            quantity_bonus: quantity_bonus as i64,
            seasonal_multiplier: 1.0,
        };

        (breakdown, raw_total, 1.0)
    }
}
