use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Unit price for a grocery item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

impl Default for PriceQuote {
    /// The documented fallback for items with no known price: $3.00 per
    /// item, category "other".
    fn default() -> Self {
        PriceQuote {
            amount: 3.00,
            unit: "item".to_string(),
            category: "other".to_string(),
        }
    }
}

/// External price lookup capability.
///
/// A miss is `None`, never an error: callers substitute
/// [`PriceQuote::default`] and move on. Lookups are never retried.
#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn price(&self, item_name: &str) -> Option<PriceQuote>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_quote() {
        let quote = PriceQuote::default();
        assert_eq!(quote.amount, 3.00);
        assert_eq!(quote.unit, "item");
        assert_eq!(quote.category, "other");
    }
}
