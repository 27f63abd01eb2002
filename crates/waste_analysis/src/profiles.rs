use std::collections::HashMap;

use pantry::FoodCategory;

/// Spoilage parameters for one food category.
///
/// `perishability` is a 0-1 coefficient expressing how quickly the category
/// spoils independent of any expiration date. `average_waste_grams_per_unit`
/// converts inventory quantities into discarded mass for waste estimates.
#[derive(Debug, Clone)]
pub struct CategoryProfile {
    pub typical_shelf_life_days: u32,
    pub perishability: f64,
    pub seasonal_sensitive: bool,
    pub average_waste_grams_per_unit: f64,
    pub common_causes: Vec<String>,
}

impl CategoryProfile {
    fn new(
        typical_shelf_life_days: u32,
        perishability: f64,
        seasonal_sensitive: bool,
        average_waste_grams_per_unit: f64,
        common_causes: &[&str],
    ) -> Self {
        CategoryProfile {
            typical_shelf_life_days,
            perishability,
            seasonal_sensitive,
            average_waste_grams_per_unit,
            common_causes: common_causes.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The most common cause of waste for this category, used when labelling
    /// already-expired items.
    pub fn primary_cause(&self) -> &str {
        self.common_causes
            .first()
            .map(String::as_str)
            .unwrap_or("forgotten")
    }
}

/// Immutable lookup table from food category to spoilage parameters.
///
/// Constructed once at process start and shared read-only after that; the
/// lookup is a total function, with the `other` profile standing in for
/// anything unrecognized.
#[derive(Debug, Clone)]
pub struct CategoryProfileRegistry {
    profiles: HashMap<FoodCategory, CategoryProfile>,
    fallback: CategoryProfile,
}

impl CategoryProfileRegistry {
    /// Built-in profile table covering every category.
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();

        profiles.insert(
            FoodCategory::Fruit,
            CategoryProfile::new(
                7,
                0.9,
                true,
                150.0,
                &[
                    "over-purchase",
                    "forgotten in drawer",
                    "ripened too fast",
                ],
            ),
        );
        profiles.insert(
            FoodCategory::Vegetable,
            CategoryProfile::new(
                10,
                0.85,
                true,
                200.0,
                &[
                    "wilted before use",
                    "bought for one recipe",
                    "poor storage",
                ],
            ),
        );
        profiles.insert(
            FoodCategory::Dairy,
            CategoryProfile::new(
                14,
                0.8,
                true,
                250.0,
                &[
                    "passed date unnoticed",
                    "opened and forgotten",
                    "over-purchase",
                ],
            ),
        );
        profiles.insert(
            FoodCategory::Grain,
            CategoryProfile::new(
                180,
                0.2,
                false,
                100.0,
                &["pantry overflow", "stale before use", "bulk buying"],
            ),
        );
        profiles.insert(
            FoodCategory::Protein,
            CategoryProfile::new(
                5,
                1.0,
                true,
                300.0,
                &["missed use-by date", "freezer burn", "plans changed"],
            ),
        );
        profiles.insert(
            FoodCategory::Beverage,
            CategoryProfile::new(
                90,
                0.3,
                false,
                350.0,
                &["flat or stale", "partially consumed", "impulse buy"],
            ),
        );
        profiles.insert(
            FoodCategory::Snack,
            CategoryProfile::new(
                60,
                0.4,
                false,
                80.0,
                &["gone stale", "crushed or damaged", "novelty wore off"],
            ),
        );

        let fallback = CategoryProfile::new(
            30,
            0.5,
            false,
            150.0,
            &["forgotten", "unlabeled leftovers", "unclear expiry"],
        );
        profiles.insert(FoodCategory::Other, fallback.clone());

        CategoryProfileRegistry { profiles, fallback }
    }

    /// Look up the profile for a category. Total: unrecognized categories
    /// resolve to the `other` profile.
    pub fn profile(&self, category: FoodCategory) -> &CategoryProfile {
        self.profiles.get(&category).unwrap_or(&self.fallback)
    }
}

impl Default for CategoryProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
