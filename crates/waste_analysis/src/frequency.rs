use chrono::{DateTime, Duration, Utc};
use pantry::{ConsumptionLog, FoodCategory};

/// Derives a "how often is this eaten" signal from the consumption log.
///
/// A log entry matches an item when its name contains the item's name
/// (case-insensitive substring) or its category matches, and it falls within
/// the trailing 30-day window ending at the reference time.
pub struct ConsumptionFrequencyAnalyzer;

impl ConsumptionFrequencyAnalyzer {
    pub const WINDOW_DAYS: i64 = 30;

    /// Count of matching log entries in the trailing window (uncapped).
    pub fn matching_count(
        item_name: &str,
        category: FoodCategory,
        logs: &[ConsumptionLog],
        reference_time: DateTime<Utc>,
    ) -> usize {
        let needle = item_name.trim().to_lowercase();
        let cutoff = reference_time - Duration::days(Self::WINDOW_DAYS);

        logs.iter()
            .filter(|log| log.consumed_at >= cutoff && log.consumed_at <= reference_time)
            .filter(|log| {
                log.item_name.to_lowercase().contains(&needle) || log.category == category
            })
            .count()
    }

    /// Frequency score in [0, 10]: the matching count, capped at 10.
    pub fn frequency_score(
        item_name: &str,
        category: FoodCategory,
        logs: &[ConsumptionLog],
        reference_time: DateTime<Utc>,
    ) -> f64 {
        let count = Self::matching_count(item_name, category, logs, reference_time);
        (count as f64).min(10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn log_entry(item_name: &str, category: FoodCategory, days_ago: i64, now: DateTime<Utc>) -> ConsumptionLog {
        ConsumptionLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            item_name: item_name.to_string(),
            category,
            quantity: 1.0,
            consumed_at: now - Duration::days(days_ago),
            notes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        "2025-06-15T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_empty_log_scores_zero() {
        let score =
            ConsumptionFrequencyAnalyzer::frequency_score("milk", FoodCategory::Dairy, &[], now());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_name_substring_match_is_case_insensitive() {
        let logs = vec![log_entry("Whole Milk 2L", FoodCategory::Other, 3, now())];
        let score = ConsumptionFrequencyAnalyzer::frequency_score(
            "milk",
            FoodCategory::Dairy,
            &logs,
            now(),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_category_match_counts() {
        let logs = vec![
            log_entry("cheddar", FoodCategory::Dairy, 2, now()),
            log_entry("yogurt", FoodCategory::Dairy, 8, now()),
        ];
        let score = ConsumptionFrequencyAnalyzer::frequency_score(
            "milk",
            FoodCategory::Dairy,
            &logs,
            now(),
        );
        assert_eq!(score, 2.0);
    }

    #[test]
    fn test_entries_outside_window_ignored() {
        let logs = vec![
            log_entry("milk", FoodCategory::Dairy, 31, now()),
            log_entry("milk", FoodCategory::Dairy, 5, now()),
        ];
        let score = ConsumptionFrequencyAnalyzer::frequency_score(
            "milk",
            FoodCategory::Dairy,
            &logs,
            now(),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_future_entries_ignored() {
        let logs = vec![log_entry("milk", FoodCategory::Dairy, -1, now())];
        let score = ConsumptionFrequencyAnalyzer::frequency_score(
            "milk",
            FoodCategory::Dairy,
            &logs,
            now(),
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_score_caps_at_ten() {
        let logs: Vec<_> = (0..25)
            .map(|i| log_entry("milk", FoodCategory::Dairy, i % 20, now()))
            .collect();
        let score = ConsumptionFrequencyAnalyzer::frequency_score(
            "milk",
            FoodCategory::Dairy,
            &logs,
            now(),
        );
        assert_eq!(score, 10.0);
        assert!(
            ConsumptionFrequencyAnalyzer::matching_count("milk", FoodCategory::Dairy, &logs, now())
                > 10
        );
    }
}
