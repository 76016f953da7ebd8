// Number of laptops per exact RAM size, smallest size first
use super::{group_in_order, TableAggregator};
use serde_json::Value;
use shared::models::{AggregatedData, Laptop};

#[derive(Default)]
pub struct RamDistribution;

impl RamDistribution {
    pub fn new() -> Self {
        RamDistribution
    }
}

impl TableAggregator for RamDistribution {
    fn name(&self) -> &str {
        "RamDistribution"
    }

    fn parameters(&self) -> Value {
        serde_json::json!({})
    }

    fn aggregate(&self, data: &[Laptop]) -> Vec<AggregatedData> {
        // f64 is not Hash; group on the bit pattern (parsed values never carry -0.0)
        let mut buckets: Vec<(f64, usize)> = group_in_order(data, |l| l.ram.to_bits())
            .into_iter()
            .map(|(bits, members)| (f64::from_bits(bits), members.len()))
            .collect();
        buckets.sort_by(|a, b| a.0.total_cmp(&b.0));

        buckets
            .into_iter()
            .map(|(ram, count)| AggregatedData::new(format!("{}GB", ram), count as f64))
            .collect()
    }
}
