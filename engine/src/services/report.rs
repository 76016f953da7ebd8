use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::models::{AggregatedData, SummaryStats};
use shared::utils::currency::{format_currency_with, CurrencyStyle};

/// Everything a dashboard needs, computed from one dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub source: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub summary: SummaryStats,
    pub average_price_by_company: Vec<AggregatedData>,
    pub ram_distribution: Vec<AggregatedData>,
    pub os_distribution: Vec<AggregatedData>,
}

impl Report {
    /// Plain-text rendering; prices go through the currency formatter.
    pub fn render_text(&self, style: &CurrencyStyle) -> String {
        let money = |v: f64| format_currency_with(v, style);
        let mut lines = Vec::new();

        if let Some(source) = &self.source {
            lines.push(format!("Source: {}", source));
        }
        lines.push(format!("Laptops: {}", self.summary.total_laptops));
        lines.push(format!("Average price: {}", money(self.summary.avg_price)));
        lines.push(format!("Most popular brand: {}", self.summary.most_popular_brand));
        match &self.summary.most_expensive {
            Some(top) => lines.push(format!(
                "Most expensive: #{} {} {} at {}",
                top.id,
                top.company,
                top.type_name,
                money(top.price)
            )),
            None => lines.push("Most expensive: -".to_string()),
        }

        lines.push(String::new());
        lines.push("Average price by company".to_string());
        for row in &self.average_price_by_company {
            lines.push(format!(
                "  {:<20} {:>14}  ({})",
                row.label,
                money(row.value),
                row.count.unwrap_or_default()
            ));
        }

        lines.push(String::new());
        lines.push("RAM distribution".to_string());
        for row in &self.ram_distribution {
            lines.push(format!("  {:<20} {:>6}", row.label, row.value));
        }

        lines.push(String::new());
        lines.push("Operating systems".to_string());
        for row in &self.os_distribution {
            lines.push(format!("  {:<20} {:>6}", row.label, row.value));
        }

        lines.join("\n")
    }
}
