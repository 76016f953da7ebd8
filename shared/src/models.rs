use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand label reported by [`SummaryStats::empty`] when there is nothing to count.
pub const NO_BRAND: &str = "N/A";

/// One normalized laptop listing, built from a single data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Laptop {
    /// 1-based position of the data row after the header (blank lines count).
    pub id: usize,
    pub company: String,
    pub type_name: String,
    pub inches: f64,
    pub screen_resolution: String,
    pub cpu: String,
    /// Gigabytes, parsed out of strings like "8GB".
    pub ram: f64,
    /// Storage description, kept verbatim ("256GB SSD").
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    /// Kilograms, parsed out of strings like "1.37kg".
    pub weight: f64,
    /// Always > 0 for records that survive parsing.
    pub price: f64,
}

/// A `{label, value, count?}` row of an aggregate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedData {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl AggregatedData {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            count: None,
        }
    }

    pub fn with_count(label: impl Into<String>, value: f64, count: usize) -> Self {
        Self {
            label: label.into(),
            value,
            count: Some(count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_laptops: usize,
    /// Mean price, unrounded.
    pub avg_price: f64,
    pub most_popular_brand: String,
    pub most_expensive: Option<Laptop>,
}

impl SummaryStats {
    pub fn empty() -> Self {
        SummaryStats {
            total_laptops: 0,
            avg_price: 0.0,
            most_popular_brand: NO_BRAND.to_string(),
            most_expensive: None,
        }
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::empty()
    }
}

/// The currently loaded listings. Replaced as a whole on reload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Where the text came from (file path or caller supplied label).
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub laptops: Vec<Laptop>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, laptops: Vec<Laptop>) -> Self {
        Dataset {
            source: source.into(),
            loaded_at: Utc::now(),
            laptops,
        }
    }

    pub fn len(&self) -> usize {
        self.laptops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laptops.is_empty()
    }
}
