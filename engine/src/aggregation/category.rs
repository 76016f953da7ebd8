// Number of laptops per text category (operating system by default), most common first
use super::{group_in_order, GroupKey, TableAggregator};
use serde_json::Value;
use shared::models::{AggregatedData, Laptop};

pub struct CategoryDistribution {
    name: String,
    key: GroupKey,
}

impl CategoryDistribution {
    pub fn new(key: GroupKey) -> Self {
        Self {
            name: format!("Count({})", key.name()),
            key,
        }
    }
}

impl TableAggregator for CategoryDistribution {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "group_by": self.key.name() })
    }

    fn aggregate(&self, data: &[Laptop]) -> Vec<AggregatedData> {
        let mut rows: Vec<AggregatedData> = group_in_order(data, |l| self.key.value_of(l))
            .into_iter()
            .map(|(label, members)| AggregatedData::new(label, members.len() as f64))
            .collect();
        rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        rows
    }
}
