use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use shared::models::{AggregatedData, Dataset, Laptop, SummaryStats};

use super::report::Report;
use crate::aggregation::{
    aggregator_for, summary_stats, AveragePrice, CategoryDistribution, GroupKey, RamDistribution, TableAggregator,
};
use crate::config::settings::EngineSettings;
use crate::data::csv_parser::LaptopCsvParser;
use crate::data::listing_store::ListingStore;
use crate::error::EngineError;

pub const AVG_PRICE_EXPORT: &str = "avg_price_by_company.csv";
pub const RAM_EXPORT: &str = "ram_distribution.csv";

/// Outcome of a load; `success == false` means the text could not be used and
/// the previously loaded dataset is still in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadResponse {
    pub success: bool,
    pub message: String,
    pub laptops_loaded: usize,
}

pub struct ListingService {
    settings: EngineSettings,
    parser: LaptopCsvParser,
    store: ListingStore,
}

impl ListingService {
    pub fn new(settings: EngineSettings) -> Self {
        ListingService {
            parser: LaptopCsvParser::from_settings(&settings),
            settings,
            store: ListingStore::new(),
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.store.dataset()
    }

    pub fn laptops(&self) -> &[Laptop] {
        self.store.laptops()
    }

    /// Reads and loads a table file. Only I/O problems are errors; unusable
    /// content is reported through the response.
    pub fn load_csv_data(&mut self, path: impl AsRef<Path>) -> Result<LoadResponse, EngineError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading laptop table");
        let text = fs::read_to_string(path)?;
        Ok(self.load_text(&path.display().to_string(), &text))
    }

    /// Parses `text` and, if it yields any laptops, replaces the loaded dataset.
    pub fn load_text(&mut self, source: &str, text: &str) -> LoadResponse {
        let laptops = match self.parser.try_parse_text(text) {
            Ok(laptops) => laptops,
            Err(e) => {
                tracing::info!(source = %source, error = %e, "Laptop table rejected");
                return LoadResponse {
                    success: false,
                    message: format!("Could not parse {}: {}", source, e),
                    laptops_loaded: 0,
                };
            }
        };

        if laptops.is_empty() {
            tracing::info!(source = %source, "Laptop table produced no usable rows");
            return LoadResponse {
                success: false,
                message: format!("No laptops with a positive price found in {}", source),
                laptops_loaded: 0,
            };
        }

        let laptops_loaded = laptops.len();
        self.store.replace(Dataset::new(source, laptops));
        tracing::info!(source = %source, count = laptops_loaded, "Loaded laptop dataset");

        LoadResponse {
            success: true,
            message: format!("Loaded {} laptops from {}", laptops_loaded, source),
            laptops_loaded,
        }
    }

    pub fn average_price_by_company(&self) -> Vec<AggregatedData> {
        AveragePrice::by_company().aggregate(self.laptops())
    }

    pub fn ram_distribution(&self) -> Vec<AggregatedData> {
        RamDistribution::new().aggregate(self.laptops())
    }

    pub fn summary(&self) -> SummaryStats {
        summary_stats(self.laptops())
    }

    /// Runs a named aggregator, see [`aggregator_for`].
    pub fn aggregate(&self, kind: &str, params: &Value) -> Result<Vec<AggregatedData>, EngineError> {
        let aggregator = aggregator_for(kind, params)?;
        tracing::debug!(aggregator = aggregator.name(), parameters = %aggregator.parameters(), "Running aggregator");
        Ok(aggregator.aggregate(self.laptops()))
    }

    pub fn report(&self) -> Report {
        let dataset = self.store.dataset();
        Report {
            source: dataset.map(|d| d.source.clone()),
            loaded_at: dataset.map(|d| d.loaded_at),
            summary: self.summary(),
            average_price_by_company: self.average_price_by_company(),
            ram_distribution: self.ram_distribution(),
            os_distribution: CategoryDistribution::new(GroupKey::OpSys).aggregate(self.laptops()),
        }
    }

    /// Writes the company-average and RAM tables as CSV files into `dir`
    /// (created if needed) and returns their paths.
    pub fn export_aggregates(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, EngineError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let tables = [
            (AVG_PRICE_EXPORT, self.average_price_by_company()),
            (RAM_EXPORT, self.ram_distribution()),
        ];
        let mut written = Vec::with_capacity(tables.len());
        for (file_name, rows) in tables {
            let path = dir.join(file_name);
            write_table(&path, &rows)?;
            tracing::info!(path = %path.display(), rows = rows.len(), "Exported aggregate table");
            written.push(path);
        }
        Ok(written)
    }
}

impl Default for ListingService {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

fn write_table(path: &Path, rows: &[AggregatedData]) -> Result<(), EngineError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["label", "value", "count"])?;
    for row in rows {
        let value = row.value.to_string();
        let count = row.count.map(|c| c.to_string()).unwrap_or_default();
        wtr.write_record([row.label.as_str(), value.as_str(), count.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}
