use pantry::InventoryItem;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::profiles::CategoryProfile;

/// Perishability at or above this marks a category "highly perishable" for
/// the preserving recommendation.
const PRESERVABLE_PERISHABILITY: f64 = 0.7;

/// Five-tier risk classification.
///
/// One converged threshold table: >= 80 critical, >= 60 high, >= 40 medium,
/// >= 20 low, else minimal. Priority 1 is the most urgent.
#[derive(
    Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Critical,
    High,
    Medium,
    Low,
    Minimal,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Critical => "critical",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Minimal => "minimal",
        }
    }

    /// Numeric urgency, 1 highest.
    pub fn priority(&self) -> u8 {
        match self {
            RiskLevel::Critical => 1,
            RiskLevel::High => 2,
            RiskLevel::Medium => 3,
            RiskLevel::Low => 4,
            RiskLevel::Minimal => 5,
        }
    }

    /// Fixed alert text shown next to items of this tier.
    pub fn alert(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "Act now: this item is expired or about to be wasted",
            RiskLevel::High => "High waste risk: plan to use this item in the next day or two",
            RiskLevel::Medium => "Moderate waste risk: schedule this item into a meal this week",
            RiskLevel::Low => "Low waste risk: keep an eye on it",
            RiskLevel::Minimal => "No action needed",
        }
    }
}

/// Maps a 0-100 risk score to a tier and produces per-item remediation
/// suggestions.
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn classify(risk_score: u32) -> RiskLevel {
        if risk_score >= 80 {
            RiskLevel::Critical
        } else if risk_score >= 60 {
            RiskLevel::High
        } else if risk_score >= 40 {
            RiskLevel::Medium
        } else if risk_score >= 20 {
            RiskLevel::Low
        } else {
            RiskLevel::Minimal
        }
    }

    /// Remediation suggestions for one item.
    ///
    /// The expiry-proximity suggestions are mutually exclusive (the most
    /// urgent one wins); the consumption, preserving and sharing notes are
    /// appended independently.
    pub fn recommendations(
        item: &InventoryItem,
        profile: &CategoryProfile,
        days_until_expiration: i64,
        frequency_score: f64,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if days_until_expiration < 0 {
            recommendations.push(format!(
                "{} has expired; discard it now and adjust your next shop",
                item.name
            ));
        } else if days_until_expiration <= 1 {
            recommendations.push(format!("Consume {} today", item.name));
        } else if days_until_expiration <= 3 {
            recommendations.push(format!("Cook with {} in the next few days", item.name));
        } else if days_until_expiration <= 7 {
            recommendations.push(format!("Plan a meal with {} this week", item.name));
        }

        if frequency_score == 0.0 {
            recommendations.push(format!(
                "{} is rarely consumed in this household; buy less of it next time",
                item.name
            ));
        }

        if profile.perishability >= PRESERVABLE_PERISHABILITY
            && (0..=5).contains(&days_until_expiration)
        {
            recommendations.push(format!(
                "Consider freezing or preserving {} before it turns",
                item.name
            ));
        }

        if item.quantity > 5.0 && (0..=7).contains(&days_until_expiration) {
            recommendations.push(format!(
                "You have a lot of {}; consider sharing some with neighbors or friends",
                item.name
            ));
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::CategoryProfileRegistry;
    use pantry::FoodCategory;
    use uuid::Uuid;

    fn item(name: &str, category: FoodCategory, quantity: f64) -> InventoryItem {
        InventoryItem {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: name.to_string(),
            category,
            quantity,
            purchase_date: None,
            expiration_date: None,
            notes: None,
        }
    }

    #[test]
    fn test_threshold_table() {
        assert_eq!(RiskClassifier::classify(100), RiskLevel::Critical);
        assert_eq!(RiskClassifier::classify(80), RiskLevel::Critical);
        assert_eq!(RiskClassifier::classify(79), RiskLevel::High);
        assert_eq!(RiskClassifier::classify(60), RiskLevel::High);
        assert_eq!(RiskClassifier::classify(59), RiskLevel::Medium);
        assert_eq!(RiskClassifier::classify(40), RiskLevel::Medium);
        assert_eq!(RiskClassifier::classify(39), RiskLevel::Low);
        assert_eq!(RiskClassifier::classify(20), RiskLevel::Low);
        assert_eq!(RiskClassifier::classify(19), RiskLevel::Minimal);
        assert_eq!(RiskClassifier::classify(0), RiskLevel::Minimal);
    }

    #[test]
    fn test_priority_ordering() {
        assert_eq!(RiskLevel::Critical.priority(), 1);
        assert_eq!(RiskLevel::Minimal.priority(), 5);
        assert!(RiskLevel::Critical.priority() < RiskLevel::High.priority());
    }

    #[test]
    fn test_expired_item_says_discard() {
        let registry = CategoryProfileRegistry::builtin();
        let milk = item("milk", FoodCategory::Dairy, 1.0);
        let recs = RiskClassifier::recommendations(
            &milk,
            registry.profile(FoodCategory::Dairy),
            -2,
            3.0,
        );
        assert!(recs[0].contains("discard"));
        // Expired items do not also get the day-bucket suggestions
        assert!(!recs.iter().any(|r| r.contains("Consume")));
    }

    #[test]
    fn test_day_buckets_are_exclusive() {
        let registry = CategoryProfileRegistry::builtin();
        let bread = item("bread", FoodCategory::Grain, 1.0);
        let profile = registry.profile(FoodCategory::Grain);

        let today = RiskClassifier::recommendations(&bread, profile, 1, 3.0);
        assert!(today[0].contains("today"));

        let soon = RiskClassifier::recommendations(&bread, profile, 3, 3.0);
        assert!(soon[0].contains("next few days"));

        let week = RiskClassifier::recommendations(&bread, profile, 6, 3.0);
        assert!(week[0].contains("this week"));

        let far = RiskClassifier::recommendations(&bread, profile, 20, 3.0);
        assert!(far.is_empty());
    }

    #[test]
    fn test_rarely_consumed_note() {
        let registry = CategoryProfileRegistry::builtin();
        let recs = RiskClassifier::recommendations(
            &item("quinoa", FoodCategory::Grain, 1.0),
            registry.profile(FoodCategory::Grain),
            30,
            0.0,
        );
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("rarely consumed"));
    }

    #[test]
    fn test_preserving_for_perishables_only() {
        let registry = CategoryProfileRegistry::builtin();

        let chicken = RiskClassifier::recommendations(
            &item("chicken", FoodCategory::Protein, 1.0),
            registry.profile(FoodCategory::Protein),
            4,
            2.0,
        );
        assert!(chicken.iter().any(|r| r.contains("freezing")));

        let crackers = RiskClassifier::recommendations(
            &item("crackers", FoodCategory::Snack, 1.0),
            registry.profile(FoodCategory::Snack),
            4,
            2.0,
        );
        assert!(!crackers.iter().any(|r| r.contains("freezing")));
    }

    #[test]
    fn test_sharing_for_large_quantities() {
        let registry = CategoryProfileRegistry::builtin();
        let recs = RiskClassifier::recommendations(
            &item("apples", FoodCategory::Fruit, 8.0),
            registry.profile(FoodCategory::Fruit),
            6,
            2.0,
        );
        assert!(recs.iter().any(|r| r.contains("sharing")));
    }
}
