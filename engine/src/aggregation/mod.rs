// Aggregate tables computed over the loaded laptops.
pub mod average_price;
pub mod category;
pub mod ram_distribution;
pub mod summary;

pub use average_price::AveragePrice;
pub use category::CategoryDistribution;
pub use ram_distribution::RamDistribution;
pub use summary::summary_stats;

use std::collections::HashMap;
use std::hash::Hash;

use serde_json::Value;
use shared::models::{AggregatedData, Laptop};

use crate::error::EngineError;

// Common trait for all table-producing aggregators
pub trait TableAggregator: Send + Sync {
    fn name(&self) -> &str;
    fn parameters(&self) -> Value; // Parameters used for this aggregator instance
    fn aggregate(&self, data: &[Laptop]) -> Vec<AggregatedData>;
}

/// Text column a table can be grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Company,
    TypeName,
    OpSys,
}

impl GroupKey {
    pub fn name(&self) -> &'static str {
        match self {
            GroupKey::Company => "company",
            GroupKey::TypeName => "typeName",
            GroupKey::OpSys => "opSys",
        }
    }

    pub fn value_of<'a>(&self, laptop: &'a Laptop) -> &'a str {
        match self {
            GroupKey::Company => &laptop.company,
            GroupKey::TypeName => &laptop.type_name,
            GroupKey::OpSys => &laptop.op_sys,
        }
    }

    /// Accepts the canonical names case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "company" => Some(GroupKey::Company),
            "typename" | "type" => Some(GroupKey::TypeName),
            "opsys" | "os" => Some(GroupKey::OpSys),
            _ => None,
        }
    }
}

/// Groups `data` by `key_fn`, keeping groups in first-seen order and members in
/// source order.
pub(crate) fn group_in_order<'a, K, F>(data: &'a [Laptop], key_fn: F) -> Vec<(K, Vec<&'a Laptop>)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a Laptop) -> K,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<&'a Laptop>)> = Vec::new();
    for laptop in data {
        let key = key_fn(laptop);
        match slots.get(&key) {
            Some(&slot) => groups[slot].1.push(laptop),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push((key, vec![laptop]));
            }
        }
    }
    groups
}

fn group_key_param(params: &Value, default: GroupKey) -> Result<GroupKey, EngineError> {
    match params.get("group_by").and_then(|v| v.as_str()) {
        None => Ok(default),
        Some(raw) => GroupKey::parse(raw)
            .ok_or_else(|| EngineError::AggregationError(format!("Unknown group_by column: {}", raw))),
    }
}

/// Builds an aggregator by name: `avg_price`, `ram` or `category`.
/// `params` may carry `{"group_by": "company" | "typeName" | "opSys"}`.
pub fn aggregator_for(kind: &str, params: &Value) -> Result<Box<dyn TableAggregator>, EngineError> {
    let aggregator: Box<dyn TableAggregator> = match kind.to_lowercase().as_str() {
        "avg_price" | "average_price" => Box::new(AveragePrice::new(group_key_param(params, GroupKey::Company)?)),
        "ram" | "ram_distribution" => Box::new(RamDistribution::new()),
        "category" | "count" => Box::new(CategoryDistribution::new(group_key_param(params, GroupKey::OpSys)?)),
        _ => {
            tracing::error!(kind = %kind, "Unknown aggregator requested");
            return Err(EngineError::AggregationError(format!("Unknown aggregator type: {}", kind)));
        }
    };
    Ok(aggregator)
}
