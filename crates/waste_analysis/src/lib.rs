pub mod benchmark;
pub mod classify;
pub mod error;
pub mod estimate;
pub mod frequency;
pub mod profiles;
pub mod recommend;
pub mod report;
pub mod scoring;
pub mod seasonal;

pub use benchmark::{
    CommunityBenchmark, CommunityBenchmarkConstants, ComparisonResult, Performance,
    PerformanceRating, Ranking,
};
pub use classify::{RiskClassifier, RiskLevel};
pub use error::WasteAnalysisError;
pub use estimate::{category_breakdown, CategoryWaste, Horizon, WasteEstimate, WasteEstimator};
pub use frequency::ConsumptionFrequencyAnalyzer;
pub use profiles::{CategoryProfile, CategoryProfileRegistry};
pub use recommend::{RecommendationEngine, RecommendationPriority, WasteRecommendation};
pub use report::{SkippedItem, WasteAnalyzer, WasteReport};
pub use scoring::{RiskAssessment, RiskBreakdown, RiskScorer, WeightProfile};
pub use seasonal::{seasonal_insight, SeasonalAdjuster, SeasonalInsight};
