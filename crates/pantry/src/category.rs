use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, VariantArray};

#[derive(
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    /// Fresh fruit: apples, berries, bananas, citrus
    Fruit,
    /// Fresh vegetables: leafy greens, root vegetables, herbs
    Vegetable,
    /// Dairy and eggs: milk, cheese, yogurt, butter
    Dairy,
    /// Grains and dry goods: rice, pasta, flour, bread
    Grain,
    /// Meat, fish, tofu and other protein sources
    Protein,
    /// Drinks: juice, soda, plant milks
    Beverage,
    /// Packaged snacks: chips, cookies, bars
    Snack,
    /// Anything that does not fit the categories above
    #[serde(other)]
    #[default]
    Other,
}

impl FoodCategory {
    pub fn as_str(&self) -> &str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Grain => "grain",
            FoodCategory::Protein => "protein",
            FoodCategory::Beverage => "beverage",
            FoodCategory::Snack => "snack",
            FoodCategory::Other => "other",
        }
    }

    /// Parse a category string, falling back to `Other` for anything
    /// unrecognized. Unknown categories are a data-quality concern of the
    /// ingestion boundary, never an error here.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fruit" | "fruits" => FoodCategory::Fruit,
            "vegetable" | "vegetables" => FoodCategory::Vegetable,
            "dairy" => FoodCategory::Dairy,
            "grain" | "grains" => FoodCategory::Grain,
            "protein" | "meat" => FoodCategory::Protein,
            "beverage" | "beverages" | "drink" => FoodCategory::Beverage,
            "snack" | "snacks" => FoodCategory::Snack,
            _ => FoodCategory::Other,
        }
    }
}
