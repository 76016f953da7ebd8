// Headline numbers for the loaded dataset
use std::collections::HashMap;

use shared::models::{Laptop, SummaryStats};

/// Count, mean price, most common brand and the priciest laptop.
///
/// Brand ties go to the brand seen first; price ties go to the earliest
/// record. Empty input gives [`SummaryStats::empty`].
pub fn summary_stats(data: &[Laptop]) -> SummaryStats {
    if data.is_empty() {
        return SummaryStats::empty();
    }

    let total_laptops = data.len();
    let avg_price = data.iter().map(|l| l.price).sum::<f64>() / total_laptops as f64;

    SummaryStats {
        total_laptops,
        avg_price,
        most_popular_brand: most_popular_brand(data).to_string(),
        most_expensive: most_expensive(data).cloned(),
    }
}

fn most_popular_brand(data: &[Laptop]) -> &str {
    // Explicit first-seen list: HashMap iteration order must not decide ties.
    let mut seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for laptop in data {
        let count = counts.entry(laptop.company.as_str()).or_insert(0);
        if *count == 0 {
            seen.push(laptop.company.as_str());
        }
        *count += 1;
    }

    let mut best = seen[0];
    let mut best_count = counts[best];
    for &brand in &seen[1..] {
        let count = counts[brand];
        if count > best_count {
            best = brand;
            best_count = count;
        }
    }
    best
}

fn most_expensive(data: &[Laptop]) -> Option<&Laptop> {
    let mut best: Option<&Laptop> = None;
    for laptop in data {
        if best.map_or(true, |b| laptop.price > b.price) {
            best = Some(laptop);
        }
    }
    best
}
