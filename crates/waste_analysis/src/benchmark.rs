use std::collections::HashMap;

use pantry::FoodCategory;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::estimate::{round_money, WasteEstimate};

/// Fixed community reference figures.
///
/// These are static constants for relative comparison, not derived from any
/// live population. Constructed once at process start and never mutated.
#[derive(Debug, Clone)]
pub struct CommunityBenchmarkConstants {
    pub weekly_grams: f64,
    pub weekly_money: f64,
    pub monthly_grams: f64,
    pub monthly_money: f64,
    pub national_average_monthly_grams: f64,
    pub national_average_monthly_money: f64,
    pub weekly_category_grams: HashMap<FoodCategory, f64>,
}

impl CommunityBenchmarkConstants {
    pub fn builtin() -> Self {
        CommunityBenchmarkConstants {
            weekly_grams: 2800.0,
            weekly_money: 18.50,
            monthly_grams: 12000.0,
            monthly_money: 79.00,
            national_average_monthly_grams: 27500.0,
            national_average_monthly_money: 100.00,
            weekly_category_grams: HashMap::from([
                (FoodCategory::Fruit, 420.0),
                (FoodCategory::Vegetable, 560.0),
                (FoodCategory::Dairy, 340.0),
                (FoodCategory::Grain, 280.0),
                (FoodCategory::Protein, 390.0),
                (FoodCategory::Beverage, 180.0),
                (FoodCategory::Snack, 230.0),
                (FoodCategory::Other, 400.0),
            ]),
        }
    }
}

impl Default for CommunityBenchmarkConstants {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether the user wastes less than the community reference.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Better,
    Worse,
}

/// One user-vs-community comparison for a single metric.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricComparison {
    pub user: f64,
    pub community: f64,
    pub difference: f64,
    pub percentage_diff: i64,
    pub performance: Performance,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonComparison {
    pub grams: MetricComparison,
    pub money: MetricComparison,
}

/// Five-tier qualitative rating on the average weekly percentage
/// difference.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    BelowAverage,
    NeedsImprovement,
}

impl PerformanceRating {
    pub fn as_str(&self) -> &str {
        match self {
            PerformanceRating::Excellent => "excellent",
            PerformanceRating::Good => "good",
            PerformanceRating::Average => "average",
            PerformanceRating::BelowAverage => "below-average",
            PerformanceRating::NeedsImprovement => "needs-improvement",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PerformanceRating::Excellent => {
                "Outstanding: you waste far less than the typical household"
            }
            PerformanceRating::Good => "Good: you waste noticeably less than average",
            PerformanceRating::Average => "You are roughly in line with the typical household",
            PerformanceRating::BelowAverage => {
                "You waste somewhat more than the typical household"
            }
            PerformanceRating::NeedsImprovement => {
                "You waste considerably more than the typical household"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub percentile: u8,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalAverage {
    pub monthly_grams: f64,
    pub monthly_money: f64,
}

/// Full comparison of a user's waste against the community constants.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub weekly: HorizonComparison,
    pub monthly: HorizonComparison,
    pub performance_rating: PerformanceRating,
    pub performance_message: String,
    pub ranking: Ranking,
    pub national_average: NationalAverage,
}

/// Compares user waste figures to the fixed community constants.
pub struct CommunityBenchmark<'a> {
    constants: &'a CommunityBenchmarkConstants,
}

impl<'a> CommunityBenchmark<'a> {
    pub fn new(constants: &'a CommunityBenchmarkConstants) -> Self {
        CommunityBenchmark { constants }
    }

    pub fn compare(&self, weekly: &WasteEstimate, monthly: &WasteEstimate) -> ComparisonResult {
        let weekly_grams =
            Self::metric(weekly.grams as f64, self.constants.weekly_grams);
        let weekly_money = Self::metric(weekly.money, self.constants.weekly_money);
        let monthly_grams =
            Self::metric(monthly.grams as f64, self.constants.monthly_grams);
        let monthly_money = Self::metric(monthly.money, self.constants.monthly_money);

        let avg_percent_diff =
            (weekly_grams.percentage_diff as f64 + weekly_money.percentage_diff as f64) / 2.0;

        let rating = Self::rating(avg_percent_diff);
        let ranking = Self::ranking(avg_percent_diff);

        ComparisonResult {
            weekly: HorizonComparison {
                grams: weekly_grams,
                money: weekly_money,
            },
            monthly: HorizonComparison {
                grams: monthly_grams,
                money: monthly_money,
            },
            performance_rating: rating,
            performance_message: rating.message().to_string(),
            ranking,
            national_average: NationalAverage {
                monthly_grams: self.constants.national_average_monthly_grams,
                monthly_money: self.constants.national_average_monthly_money,
            },
        }
    }

    fn metric(user: f64, community: f64) -> MetricComparison {
        let difference = user - community;
        let percentage_diff = if community == 0.0 {
            0
        } else {
            (difference / community * 100.0).round() as i64
        };
        let performance = if user < community {
            Performance::Better
        } else {
            Performance::Worse
        };

        MetricComparison {
            user,
            community,
            difference: round_money(difference),
            percentage_diff,
            performance,
        }
    }

    fn rating(avg_percent_diff: f64) -> PerformanceRating {
        if avg_percent_diff <= -50.0 {
            PerformanceRating::Excellent
        } else if avg_percent_diff <= -20.0 {
            PerformanceRating::Good
        } else if avg_percent_diff <= 10.0 {
            PerformanceRating::Average
        } else if avg_percent_diff <= 30.0 {
            PerformanceRating::BelowAverage
        } else {
            PerformanceRating::NeedsImprovement
        }
    }

    fn ranking(avg_percent_diff: f64) -> Ranking {
        let (percentile, message) = if avg_percent_diff <= -50.0 {
            (95, "You waste less than 95% of households")
        } else if avg_percent_diff <= -30.0 {
            (85, "You waste less than 85% of households")
        } else if avg_percent_diff <= -10.0 {
            (70, "You waste less than 70% of households")
        } else if avg_percent_diff <= 10.0 {
            (50, "You are near the household median")
        } else if avg_percent_diff <= 30.0 {
            (30, "Most households waste less than you")
        } else {
            (10, "You waste more than 90% of households")
        };

        Ranking {
            percentile,
            message: message.to_string(),
        }
    }
}
