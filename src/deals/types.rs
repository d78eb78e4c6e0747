//! Core data types for the deal table
//!
//! - `Deal`: one row of model output for a mortgage deal
//! - `ColumnMapping`: which CSV headers hold the fields of a `Deal`

use serde::{Deserialize, Deserializer, Serialize};

/// Positional identifier of a deal (its 0-based row index)
pub type DealId = usize;

/// A single mortgage deal as produced by the upstream model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Deal {
    /// Row index in the source file
    pub id: DealId,
    /// Predicted property price (millions)
    #[serde(deserialize_with = "nullable_f64")]
    pub price: f64,
    /// Probability of default
    #[serde(deserialize_with = "nullable_f64")]
    pub churn: f64,
    /// Processing priority score, higher goes first
    #[serde(deserialize_with = "nullable_f64")]
    pub priority: f64,
}

/// Read a cell value that JSON may carry as `null`.
///
/// Empty cells load as NaN and `serde_json` writes NaN as `null`, so `null`
/// reads back as NaN.
pub fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl Deal {
    pub fn new(id: DealId, price: f64, churn: f64, priority: f64) -> Self {
        Self {
            id,
            price,
            churn,
            priority,
        }
    }
}

/// Header names of the columns a `Deal` is read from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMapping {
    #[serde(default = "default_price_column")]
    pub price: String,

    #[serde(default = "default_churn_column")]
    pub churn: String,

    #[serde(default = "default_priority_column")]
    pub priority: String,
}

fn default_price_column() -> String {
    "__price_predict".to_string()
}

fn default_churn_column() -> String {
    "__churn_prob".to_string()
}

fn default_priority_column() -> String {
    "__priority".to_string()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            price: default_price_column(),
            churn: default_churn_column(),
            priority: default_priority_column(),
        }
    }
}

impl ColumnMapping {
    /// Column names in (price, churn, priority) order
    pub fn names(&self) -> [&str; 3] {
        [&self.price, &self.churn, &self.priority]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mapping() {
        let mapping = ColumnMapping::default();
        assert_eq!(
            mapping.names(),
            ["__price_predict", "__churn_prob", "__priority"]
        );
    }

    #[test]
    fn test_missing_value_round_trip() {
        let deal = Deal::new(3, f64::NAN, 0.5, 2.0);
        let json = serde_json::to_string(&deal).unwrap();
        assert!(json.contains(r#""price":null"#));

        let back: Deal = serde_json::from_str(&json).unwrap();
        assert!(back.price.is_nan());
        assert_eq!(back.churn, 0.5);
        assert_eq!(back.priority, 2.0);
    }

    #[test]
    fn test_partial_mapping_deserialize() {
        let mapping: ColumnMapping = toml::from_str(r#"price = "price""#).unwrap();
        assert_eq!(mapping.price, "price");
        assert_eq!(mapping.churn, "__churn_prob");
    }
}
