use chrono::{DateTime, Datelike, Utc};
use pantry::{ConsumptionLog, InventoryItem, PersistenceReader, PriceLookup};
use serde::Serialize;
use uuid::Uuid;

use crate::benchmark::{CommunityBenchmark, CommunityBenchmarkConstants, ComparisonResult};
use crate::error::WasteAnalysisError;
use crate::estimate::{category_breakdown, CategoryWaste, Horizon, WasteEstimate, WasteEstimator};
use crate::profiles::CategoryProfileRegistry;
use crate::recommend::{RecommendationEngine, WasteRecommendation};
use crate::scoring::{RiskAssessment, RiskScorer, WeightProfile};
use crate::seasonal::{seasonal_insight, SeasonalInsight};

/// An inventory item excluded from scoring for data-quality reasons.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedItem {
    pub item_id: Uuid,
    pub name: String,
    pub reason: String,
}

/// Everything the waste engine produces for one household snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteReport {
    pub generated_at: DateTime<Utc>,
    pub risk_assessments: Vec<RiskAssessment>,
    pub skipped: Vec<SkippedItem>,
    pub weekly_waste: WasteEstimate,
    pub monthly_waste: WasteEstimate,
    pub category_breakdown: Vec<CategoryWaste>,
    pub community_comparison: ComparisonResult,
    pub recommendations: Vec<WasteRecommendation>,
    pub seasonal_insight: SeasonalInsight,
}

/// Orchestrates the whole pipeline: per-item risk scoring, weekly and
/// monthly waste estimation, community comparison and recommendations.
///
/// The registry and benchmark constants are injected once at construction
/// and never mutated; all time-dependent behavior flows from the single
/// `reference_time` argument, so two calls over the same snapshot produce
/// identical reports.
pub struct WasteAnalyzer {
    registry: CategoryProfileRegistry,
    benchmarks: CommunityBenchmarkConstants,
    weight_profile: WeightProfile,
}

impl WasteAnalyzer {
    pub fn new() -> Self {
        WasteAnalyzer {
            registry: CategoryProfileRegistry::builtin(),
            benchmarks: CommunityBenchmarkConstants::builtin(),
            weight_profile: WeightProfile::Detailed,
        }
    }

    pub fn with_config(
        registry: CategoryProfileRegistry,
        benchmarks: CommunityBenchmarkConstants,
        weight_profile: WeightProfile,
    ) -> Self {
        WasteAnalyzer {
            registry,
            benchmarks,
            weight_profile,
        }
    }

    pub fn registry(&self) -> &CategoryProfileRegistry {
        &self.registry
    }

    /// Score a single item against a log snapshot. `None` when the item has
    /// no expiration date.
    pub fn assess_item(
        &self,
        item: &InventoryItem,
        logs: &[ConsumptionLog],
        reference_time: DateTime<Utc>,
    ) -> Option<RiskAssessment> {
        RiskScorer::with_profile(&self.registry, self.weight_profile)
            .score(item, logs, reference_time)
    }

    /// Build the full report for one household.
    ///
    /// Reads the inventory and consumption-log snapshots through the
    /// persistence collaborator, then runs the (pure, synchronous) scoring
    /// and aggregation over them. Callers wanting a bound on the snapshot
    /// and price I/O can wrap this future in a timeout; the arithmetic
    /// itself never blocks.
    pub async fn analyze(
        &self,
        owner_id: Uuid,
        store: &dyn PersistenceReader,
        prices: &dyn PriceLookup,
        reference_time: DateTime<Utc>,
    ) -> Result<WasteReport, WasteAnalysisError> {
        let items = store.list_inventory(owner_id).await?;
        let logs = store.list_consumption_logs(owner_id).await?;
        tracing::debug!(
            items = items.len(),
            logs = logs.len(),
            %owner_id,
            "loaded inventory snapshot"
        );

        let scorer = RiskScorer::with_profile(&self.registry, self.weight_profile);
        let mut risk_assessments = Vec::with_capacity(items.len());
        let mut skipped = Vec::new();

        for item in &items {
            match scorer.score(item, &logs, reference_time) {
                Some(assessment) => risk_assessments.push(assessment),
                None => {
                    tracing::debug!(item = %item.name, "skipping item without expiration date");
                    skipped.push(SkippedItem {
                        item_id: item.id,
                        name: item.name.clone(),
                        reason: "missing or malformed expiration date".to_string(),
                    });
                }
            }
        }

        // Presentation sort: risk descending, then closest expiry first
        risk_assessments.sort_by(|a, b| {
            b.risk_score
                .cmp(&a.risk_score)
                .then(a.days_until_expiration.cmp(&b.days_until_expiration))
        });

        let estimator = WasteEstimator::new(&self.registry);
        let weekly_waste = estimator
            .estimate(Horizon::Week, &items, &logs, reference_time, prices)
            .await;
        let monthly_waste = estimator
            .estimate(Horizon::Month, &items, &logs, reference_time, prices)
            .await;

        let breakdown = category_breakdown(&monthly_waste);
        let comparison =
            CommunityBenchmark::new(&self.benchmarks).compare(&weekly_waste, &monthly_waste);
        let recommendations = RecommendationEngine::build(
            &self.registry,
            &breakdown,
            &comparison,
            monthly_waste.money,
        );

        tracing::info!(
            assessed = risk_assessments.len(),
            skipped = skipped.len(),
            weekly_grams = weekly_waste.grams,
            monthly_grams = monthly_waste.grams,
            rating = comparison.performance_rating.as_str(),
            "waste report computed"
        );

        Ok(WasteReport {
            generated_at: reference_time,
            risk_assessments,
            skipped,
            weekly_waste,
            monthly_waste,
            category_breakdown: breakdown,
            community_comparison: comparison,
            recommendations,
            seasonal_insight: seasonal_insight(reference_time.month0()),
        })
    }
}

impl Default for WasteAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
