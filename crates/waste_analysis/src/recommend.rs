use pantry::FoodCategory;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::benchmark::{ComparisonResult, PerformanceRating};
use crate::estimate::{round_money, CategoryWaste};
use crate::profiles::CategoryProfileRegistry;

/// At most this many recommendations per report.
const MAX_RECOMMENDATIONS: usize = 5;

/// Category-specific suggestions come first, then the benchmark nudge, then
/// the general habits.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

/// One actionable waste-reduction suggestion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteRecommendation {
    pub category: Option<FoodCategory>,
    pub priority: RecommendationPriority,
    pub issue: String,
    pub suggestion: String,
    pub potential_savings: f64,
}

/// Turns the category breakdown and benchmark comparison into a ranked,
/// capped list of suggestions.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Build the recommendation list.
    ///
    /// `breakdown` must already be sorted by grams descending with the
    /// category-name tie-break (as [`crate::estimate::category_breakdown`]
    /// produces); `monthly_money` is the user's total monthly waste in
    /// dollars, used to size the general suggestions.
    pub fn build(
        registry: &CategoryProfileRegistry,
        breakdown: &[CategoryWaste],
        comparison: &ComparisonResult,
        monthly_money: f64,
    ) -> Vec<WasteRecommendation> {
        let mut recommendations = Vec::new();

        for category_waste in breakdown.iter().take(3) {
            if category_waste.grams == 0 {
                continue;
            }
            let profile = registry.profile(category_waste.category);
            let causes = profile.common_causes.join(", ");

            recommendations.push(WasteRecommendation {
                category: Some(category_waste.category),
                priority: RecommendationPriority::High,
                issue: format!(
                    "{} accounts for {}g of your estimated waste ({} item{}); common causes: {}",
                    category_waste.category,
                    category_waste.grams,
                    category_waste.item_count,
                    if category_waste.item_count == 1 { "" } else { "s" },
                    causes
                ),
                suggestion: format!(
                    "Plan meals around your {} items before buying more, starting with whatever expires first",
                    category_waste.category
                ),
                potential_savings: category_waste.money,
            });
        }

        if matches!(
            comparison.performance_rating,
            PerformanceRating::BelowAverage | PerformanceRating::NeedsImprovement
        ) {
            // Weekly overshoot extrapolated to a month
            let potential_savings = round_money(comparison.weekly.money.difference.abs() * 4.0);
            recommendations.push(WasteRecommendation {
                category: None,
                priority: RecommendationPriority::Medium,
                issue: "Your waste is above the community average".to_string(),
                suggestion:
                    "Track what you throw away for two weeks; most above-average waste traces back to a handful of repeat purchases"
                        .to_string(),
                potential_savings,
            });
        }

        recommendations.push(WasteRecommendation {
            category: None,
            priority: RecommendationPriority::Low,
            issue: "Shopping without checking the inventory first".to_string(),
            suggestion: "Do a fridge and pantry check before every shop and buy only what the week's plan needs"
                .to_string(),
            potential_savings: round_money(monthly_money * 0.2),
        });
        recommendations.push(WasteRecommendation {
            category: None,
            priority: RecommendationPriority::Low,
            issue: "Expiring items go unnoticed until too late".to_string(),
            suggestion: "Keep soon-to-expire items on one visible shelf and cook from it first"
                .to_string(),
            potential_savings: round_money(monthly_money * 0.15),
        });

        recommendations.truncate(MAX_RECOMMENDATIONS);
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{CommunityBenchmark, CommunityBenchmarkConstants};
    use crate::estimate::{Horizon, WasteEstimate};

    fn category_waste(
        category: FoodCategory,
        grams: i64,
        money: f64,
        item_count: usize,
    ) -> CategoryWaste {
        CategoryWaste {
            category,
            grams,
            money,
            item_count,
            percentage: 0.0,
        }
    }

    fn comparison(weekly_grams: i64, weekly_money: f64) -> ComparisonResult {
        let constants = CommunityBenchmarkConstants::builtin();
        let mut weekly = WasteEstimate::empty(Horizon::Week);
        weekly.grams = weekly_grams;
        weekly.money = weekly_money;
        let mut monthly = WasteEstimate::empty(Horizon::Month);
        monthly.grams = weekly_grams * 4;
        monthly.money = weekly_money * 4.0;
        CommunityBenchmark::new(&constants).compare(&weekly, &monthly)
    }

    #[test]
    fn test_empty_breakdown_yields_general_recommendations_only() {
        let registry = CategoryProfileRegistry::builtin();
        let recs = RecommendationEngine::build(&registry, &[], &comparison(0, 0.0), 0.0);

        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.category.is_none()));
        assert!(recs.iter().all(|r| r.priority == RecommendationPriority::Low));
        assert_eq!(recs[0].potential_savings, 0.0);
    }

    #[test]
    fn test_top_categories_produce_high_priority_entries() {
        let registry = CategoryProfileRegistry::builtin();
        let breakdown = vec![
            category_waste(FoodCategory::Dairy, 900, 12.0, 3),
            category_waste(FoodCategory::Fruit, 600, 8.0, 2),
        ];

        let recs =
            RecommendationEngine::build(&registry, &breakdown, &comparison(1000, 8.0), 40.0);

        assert_eq!(recs[0].category, Some(FoodCategory::Dairy));
        assert_eq!(recs[0].priority, RecommendationPriority::High);
        assert!(recs[0].issue.contains("passed date unnoticed"));
        assert_eq!(recs[0].potential_savings, 12.0);
        assert_eq!(recs[1].category, Some(FoodCategory::Fruit));
    }

    #[test]
    fn test_zero_gram_categories_skipped() {
        let registry = CategoryProfileRegistry::builtin();
        let breakdown = vec![category_waste(FoodCategory::Snack, 0, 0.0, 0)];

        let recs = RecommendationEngine::build(&registry, &breakdown, &comparison(0, 0.0), 0.0);
        assert!(recs.iter().all(|r| r.category.is_none()));
    }

    #[test]
    fn test_above_average_waste_adds_benchmark_nudge() {
        let registry = CategoryProfileRegistry::builtin();
        // Roughly double the community weekly figures: needs-improvement
        let comparison = comparison(5600, 37.0);
        assert_eq!(
            comparison.performance_rating,
            PerformanceRating::NeedsImprovement
        );

        let recs = RecommendationEngine::build(&registry, &[], &comparison, 150.0);

        let nudge = recs
            .iter()
            .find(|r| r.priority == RecommendationPriority::Medium)
            .expect("benchmark nudge present");
        // |37.00 - 18.50| * 4
        assert_eq!(nudge.potential_savings, 74.0);
    }

    #[test]
    fn test_capped_at_five_with_stable_order() {
        let registry = CategoryProfileRegistry::builtin();
        let breakdown = vec![
            category_waste(FoodCategory::Dairy, 900, 12.0, 3),
            category_waste(FoodCategory::Protein, 800, 11.0, 2),
            category_waste(FoodCategory::Fruit, 700, 9.0, 2),
            category_waste(FoodCategory::Vegetable, 600, 7.0, 2),
        ];
        let comparison = comparison(5600, 37.0);

        let recs = RecommendationEngine::build(&registry, &breakdown, &comparison, 150.0);

        assert_eq!(recs.len(), 5);
        // Only the top three categories are cited, in breakdown order
        assert_eq!(recs[0].category, Some(FoodCategory::Dairy));
        assert_eq!(recs[1].category, Some(FoodCategory::Protein));
        assert_eq!(recs[2].category, Some(FoodCategory::Fruit));
        assert_eq!(recs[3].priority, RecommendationPriority::Medium);
        assert_eq!(recs[4].priority, RecommendationPriority::Low);
    }

    #[test]
    fn test_general_savings_scale_with_monthly_money() {
        let registry = CategoryProfileRegistry::builtin();
        let recs = RecommendationEngine::build(&registry, &[], &comparison(1000, 8.0), 60.0);

        assert_eq!(recs[0].potential_savings, 12.0);
        assert_eq!(recs[1].potential_savings, 9.0);
    }
}
