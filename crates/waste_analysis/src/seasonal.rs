use serde::Serialize;

use crate::profiles::CategoryProfile;

/// Seasonal spoilage adjustment.
///
/// Warm ambient temperatures accelerate spoilage of perishables, so
/// seasonal-sensitive categories get a month-dependent multiplier applied on
/// top of their base risk. Non-sensitive categories (grains, beverages,
/// snacks) always get 1.0.
pub struct SeasonalAdjuster;

impl SeasonalAdjuster {
    /// Multiplier for a category profile in a given month (0 = January).
    pub fn multiplier(profile: &CategoryProfile, month0: u32) -> f64 {
        if !profile.seasonal_sensitive {
            return 1.0;
        }

        match month0 {
            5..=7 => 1.3,           // peak warm season
            4 | 8 => 1.15,          // shoulder warm season
            9..=11 | 0..=2 => 0.85, // cold season
            _ => 0.95,              // month 3, transition
        }
    }
}

/// Human-readable seasonal context for the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalInsight {
    pub season: String,
    pub message: String,
    pub recommendation: String,
}

/// Seasonal storage guidance for a month (0 = January).
pub fn seasonal_insight(month0: u32) -> SeasonalInsight {
    match month0 {
        5..=7 => SeasonalInsight {
            season: "summer".to_string(),
            message: "Warm weather accelerates spoilage of fresh produce, dairy and protein."
                .to_string(),
            recommendation: "Shop in smaller batches and refrigerate perishables promptly."
                .to_string(),
        },
        4 | 8 => SeasonalInsight {
            season: "shoulder".to_string(),
            message: "Mild temperatures still speed up ripening of fruit and vegetables."
                .to_string(),
            recommendation: "Check ripening produce every couple of days and use it first."
                .to_string(),
        },
        3 => SeasonalInsight {
            season: "spring-transition".to_string(),
            message: "Temperatures are climbing out of the cold season.".to_string(),
            recommendation: "Rotate winter pantry stock before restocking for spring."
                .to_string(),
        },
        _ => SeasonalInsight {
            season: "winter".to_string(),
            message: "Cold weather slows spoilage, but bulk-bought perishables still expire."
                .to_string(),
            recommendation: "Keep rotating stock; long shelf life is not infinite shelf life."
                .to_string(),
        },
    }
}
