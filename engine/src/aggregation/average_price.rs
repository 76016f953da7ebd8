// Average price per group (company by default), highest average first
use super::{group_in_order, GroupKey, TableAggregator};
use serde_json::Value;
use shared::models::{AggregatedData, Laptop};

pub struct AveragePrice {
    name: String,
    key: GroupKey,
}

impl AveragePrice {
    pub fn new(key: GroupKey) -> Self {
        Self {
            name: format!("AvgPrice({})", key.name()),
            key,
        }
    }

    pub fn by_company() -> Self {
        Self::new(GroupKey::Company)
    }
}

impl TableAggregator for AveragePrice {
    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> Value {
        serde_json::json!({ "group_by": self.key.name() })
    }

    /// Mean is rounded half away from zero; ties in the sorted output keep
    /// first-seen order.
    fn aggregate(&self, data: &[Laptop]) -> Vec<AggregatedData> {
        let mut rows: Vec<AggregatedData> = group_in_order(data, |l| self.key.value_of(l))
            .into_iter()
            .map(|(label, members)| {
                let sum: f64 = members.iter().map(|l| l.price).sum();
                let avg = sum / members.len() as f64;
                AggregatedData::with_count(label, avg.round(), members.len())
            })
            .collect();

        rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        rows
    }
}
