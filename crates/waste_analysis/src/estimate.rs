use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use pantry::{ConsumptionLog, FoodCategory, InventoryItem, PriceLookup, PriceQuote};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};
use uuid::Uuid;

use crate::frequency::ConsumptionFrequencyAnalyzer;
use crate::profiles::CategoryProfileRegistry;
use crate::scoring::days_until_expiration;

/// Share of an at-risk item's mass and money assumed to actually be wasted.
const REALIZATION_PROBABILITY: f64 = 0.6;

/// Trailing aggregation window for waste estimates.
#[derive(
    Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Week,
    Month,
}

impl Horizon {
    pub fn days(&self) -> i64 {
        match self {
            Horizon::Week => 7,
            Horizon::Month => 30,
        }
    }

    /// Minimum lightweight risk score for an unexpired item to count as
    /// predicted waste over this horizon.
    pub fn prediction_threshold(&self) -> f64 {
        match self {
            Horizon::Week => 65.0,
            Horizon::Month => 60.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Horizon::Week => "week",
            Horizon::Month => "month",
        }
    }
}

/// An item that already expired inside the horizon window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredItem {
    pub item_id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub grams: i64,
    pub money: f64,
    pub days_expired: i64,
    pub likely_cause: String,
}

/// An unexpired item assessed as likely to be wasted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskItem {
    pub item_id: Uuid,
    pub name: String,
    pub category: FoodCategory,
    pub grams: i64,
    pub money: f64,
    pub days_until_expiration: i64,
    pub risk_score: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualWaste {
    pub grams: i64,
    pub money: f64,
    pub items: Vec<ExpiredItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedWaste {
    pub grams: i64,
    pub money: f64,
    pub items: Vec<AtRiskItem>,
}

/// Waste over one horizon, split into what already happened and what is
/// likely to happen. Gram totals are whole grams; money is rounded to
/// cents.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteEstimate {
    pub horizon: Horizon,
    pub grams: i64,
    pub money: f64,
    pub item_count: usize,
    pub actual: ActualWaste,
    pub predicted: PredictedWaste,
}

impl WasteEstimate {
    /// Well-defined zero result for empty inputs.
    pub fn empty(horizon: Horizon) -> Self {
        WasteEstimate {
            horizon,
            grams: 0,
            money: 0.0,
            item_count: 0,
            actual: ActualWaste {
                grams: 0,
                money: 0.0,
                items: Vec::new(),
            },
            predicted: PredictedWaste {
                grams: 0,
                money: 0.0,
                items: Vec::new(),
            },
        }
    }
}

/// Per-category slice of the total estimated waste.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWaste {
    pub category: FoodCategory,
    pub grams: i64,
    pub money: f64,
    pub item_count: usize,
    pub percentage: f64,
}

pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Computes actual and predicted waste for a horizon from an inventory and
/// consumption-log snapshot.
///
/// Prices come from the external [`PriceLookup`]; a missing price falls back
/// to the documented default and is never an error. Items without an
/// expiration date are ignored here (the report layer flags them).
pub struct WasteEstimator<'a> {
    registry: &'a CategoryProfileRegistry,
}

impl<'a> WasteEstimator<'a> {
    pub fn new(registry: &'a CategoryProfileRegistry) -> Self {
        WasteEstimator { registry }
    }

    pub async fn estimate(
        &self,
        horizon: Horizon,
        items: &[InventoryItem],
        logs: &[ConsumptionLog],
        reference_time: DateTime<Utc>,
        prices: &dyn PriceLookup,
    ) -> WasteEstimate {
        let window_start = reference_time - Duration::days(horizon.days());

        let mut actual = ActualWaste {
            grams: 0,
            money: 0.0,
            items: Vec::new(),
        };
        let mut predicted = PredictedWaste {
            grams: 0,
            money: 0.0,
            items: Vec::new(),
        };
        let mut actual_money = 0.0;
        let mut predicted_money = 0.0;

        for item in items {
            let Some(expiration_date) = item.expiration_date else {
                continue;
            };
            let profile = self.registry.profile(item.category);
            let quote = prices
                .price(&item.name)
                .await
                .unwrap_or_else(PriceQuote::default);

            if expiration_date < reference_time {
                // Actual waste: expired within the trailing window
                if expiration_date < window_start {
                    continue;
                }
                let days_expired =
                    (reference_time - expiration_date).num_seconds() as f64 / 86_400.0;
                let grams = item.quantity * profile.average_waste_grams_per_unit;
                let money = item.quantity * quote.amount;

                actual_money += money;
                actual.grams += grams.round() as i64;
                actual.items.push(ExpiredItem {
                    item_id: item.id,
                    name: item.name.clone(),
                    category: item.category,
                    grams: grams.round() as i64,
                    money: round_money(money),
                    days_expired: days_expired.floor() as i64,
                    likely_cause: profile.primary_cause().to_string(),
                });
            } else {
                // Predicted waste: unexpired but assessed as high risk
                let days = days_until_expiration(expiration_date, reference_time);
                let frequency = ConsumptionFrequencyAnalyzer::matching_count(
                    &item.name,
                    item.category,
                    logs,
                    reference_time,
                ) as f64;

                let score = Self::prediction_score(days, profile.perishability, frequency);
                if score < horizon.prediction_threshold() || days <= 0 {
                    continue;
                }

                let grams =
                    item.quantity * profile.average_waste_grams_per_unit * REALIZATION_PROBABILITY;
                let money = item.quantity * quote.amount * REALIZATION_PROBABILITY;

                predicted_money += money;
                predicted.grams += grams.round() as i64;
                predicted.items.push(AtRiskItem {
                    item_id: item.id,
                    name: item.name.clone(),
                    category: item.category,
                    grams: grams.round() as i64,
                    money: round_money(money),
                    days_until_expiration: days,
                    risk_score: score.round() as i64,
                });
            }
        }

        actual.money = round_money(actual_money);
        predicted.money = round_money(predicted_money);

        WasteEstimate {
            horizon,
            grams: actual.grams + predicted.grams,
            money: round_money(actual_money + predicted_money),
            item_count: actual.items.len() + predicted.items.len(),
            actual,
            predicted,
        }
    }

    /// Lightweight waste-likelihood score in [0, 100]:
    /// expiration bucket (40/35/25/15/5) + perishability share (0-30) +
    /// low-consumption share (0-30).
    fn prediction_score(days: i64, perishability: f64, frequency: f64) -> f64 {
        let expiration_points = if days <= 0 {
            40.0
        } else if days <= 3 {
            35.0
        } else if days <= 7 {
            25.0
        } else if days <= 14 {
            15.0
        } else {
            5.0
        };

        let perishability_points = perishability * 100.0 * 0.3;
        let consumption_points = (30.0 - frequency * 3.0).max(0.0);

        expiration_points + perishability_points + consumption_points
    }
}

/// Per-category breakdown of an estimate (actual plus predicted
/// contributions), sorted by grams descending with the category name as a
/// deterministic tie-break. Percentages sum to ~100 when any waste exists
/// and are all zero otherwise.
pub fn category_breakdown(estimate: &WasteEstimate) -> Vec<CategoryWaste> {
    let mut grouped: HashMap<FoodCategory, (i64, f64, usize)> = HashMap::new();

    for item in &estimate.actual.items {
        let entry = grouped.entry(item.category).or_insert((0, 0.0, 0));
        entry.0 += item.grams;
        entry.1 += item.money;
        entry.2 += 1;
    }
    for item in &estimate.predicted.items {
        let entry = grouped.entry(item.category).or_insert((0, 0.0, 0));
        entry.0 += item.grams;
        entry.1 += item.money;
        entry.2 += 1;
    }

    let total_grams: i64 = grouped.values().map(|(grams, _, _)| grams).sum();

    let mut breakdown: Vec<CategoryWaste> = grouped
        .into_iter()
        .map(|(category, (grams, money, item_count))| {
            let percentage = if total_grams > 0 {
                (grams as f64 / total_grams as f64 * 1000.0).round() / 10.0
            } else {
                0.0
            };
            CategoryWaste {
                category,
                grams,
                money: round_money(money),
                item_count,
                percentage,
            }
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.grams
            .cmp(&a.grams)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });

    breakdown
}
