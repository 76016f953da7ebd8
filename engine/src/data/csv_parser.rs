use std::fs;
use std::path::Path;

use shared::models::Laptop;

use super::column_map::{CanonicalField, ColumnMap, MANDATORY_FIELDS};
use super::normalizer::parse_number;
use super::tokenizer::{has_unbalanced_quotes, tokenize_row};
use crate::config::settings::EngineSettings;
use crate::error::EngineError;

/// Fallback for empty company/type cells.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Parses laptop listing tables.
///
/// Expected header (any order, matched loosely by substring):
/// `Company,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price`
///
/// Example row:
/// `Apple,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,macOS,1.37kg,"₹71,378.68"`
#[derive(Debug, Clone)]
pub struct LaptopCsvParser {
    delimiter: char,
    unknown_label: String,
}

impl Default for LaptopCsvParser {
    fn default() -> Self {
        LaptopCsvParser {
            delimiter: ',',
            unknown_label: UNKNOWN_LABEL.to_string(),
        }
    }
}

impl LaptopCsvParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        LaptopCsvParser {
            delimiter: settings.delimiter,
            unknown_label: settings.unknown_label.clone(),
        }
    }

    /// Parses the whole table. Never fails: header problems yield an empty
    /// vector plus a log line, and bad rows are skipped.
    pub fn parse_text(&self, text: &str) -> Vec<Laptop> {
        match self.try_parse_text(text) {
            Ok(laptops) => laptops,
            Err(e) => {
                tracing::info!(error = %e, "Could not parse laptop table; returning no records");
                Vec::new()
            }
        }
    }

    /// Same as [`parse_text`](Self::parse_text) but reports a rejected header
    /// as `CsvDataFormatError`, so callers can tell "could not parse" from
    /// "no data rows".
    pub fn try_parse_text(&self, text: &str) -> Result<Vec<Laptop>, EngineError> {
        let lines: Vec<&str> = text.trim().lines().collect();
        if lines.len() < 2 {
            tracing::info!(lines = lines.len(), "Laptop table has no data rows");
            return Ok(Vec::new());
        }

        let headers: Vec<String> = tokenize_row(lines[0], self.delimiter)
            .into_iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        let columns = ColumnMap::from_headers(&headers);

        let missing = columns.missing_mandatory();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(CanonicalField::name).collect();
            return Err(EngineError::CsvDataFormatError(format!(
                "Missing mandatory column(s): {}",
                names.join(", ")
            )));
        }
        tracing::debug!(?columns, "Resolved laptop table columns");

        let mut laptops = Vec::with_capacity(lines.len() - 1);
        for (idx, line) in lines[1..].iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let id = idx + 1;
            match self.build_laptop(id, line, &columns) {
                Ok(laptop) if laptop.price > 0.0 => laptops.push(laptop),
                Ok(_) => {} // non-positive price: dropped without a diagnostic
                Err(e) => tracing::warn!(line = id, error = %e, "Skipping malformed laptop row"),
            }
        }

        tracing::debug!(
            data_lines = lines.len() - 1,
            kept = laptops.len(),
            "Parsed laptop table"
        );
        Ok(laptops)
    }

    /// Reads a file and parses it with [`parse_text`](Self::parse_text).
    pub fn load_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Laptop>, EngineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Read laptop table");
        Ok(self.parse_text(&text))
    }

    fn build_laptop(&self, id: usize, line: &str, columns: &ColumnMap) -> Result<Laptop, EngineError> {
        let cells = tokenize_row(line, self.delimiter);

        // An open quote only matters when it swallowed a mandatory cell;
        // a stray quote after the price (e.g. `13"`) still builds a record.
        if has_unbalanced_quotes(line) {
            let lost = MANDATORY_FIELDS
                .iter()
                .find(|field| columns.index_of(**field).is_some_and(|idx| idx >= cells.len()));
            if let Some(field) = lost {
                return Err(EngineError::RowStructureError {
                    line: id,
                    reason: format!("unterminated quoted field swallowed the '{}' cell", field),
                });
            }
        }
        let text = |field: CanonicalField| columns.cell(&cells, field).to_string();
        let number = |field: CanonicalField| parse_number(columns.cell(&cells, field));

        Ok(Laptop {
            id,
            company: self.or_unknown(columns.cell(&cells, CanonicalField::Company)),
            type_name: self.or_unknown(columns.cell(&cells, CanonicalField::TypeName)),
            inches: number(CanonicalField::Inches),
            screen_resolution: text(CanonicalField::ScreenResolution),
            cpu: text(CanonicalField::Cpu),
            ram: number(CanonicalField::Ram),
            memory: text(CanonicalField::Memory),
            gpu: text(CanonicalField::Gpu),
            op_sys: text(CanonicalField::OpSys),
            weight: number(CanonicalField::Weight),
            price: number(CanonicalField::Price),
        })
    }

    fn or_unknown(&self, value: &str) -> String {
        if value.is_empty() {
            self.unknown_label.clone()
        } else {
            value.to_string()
        }
    }
}

/// Parses with the default comma-delimited settings.
pub fn parse_laptops(text: &str) -> Vec<Laptop> {
    LaptopCsvParser::default().parse_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Company,TypeName,Inches,ScreenResolution,Cpu,Ram,Memory,Gpu,OpSys,Weight,Price";

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_parse_valid_rows() {
        let csv_content = format!(
            "{HEADER}\n\
Apple,Ultrabook,13.3,IPS Panel Retina Display 2560x1600,Intel Core i5 2.3GHz,8GB,128GB SSD,Intel Iris Plus Graphics 640,macOS,1.37kg,\"₹71,378.68\"\n\
HP,Notebook,15.6,Full HD 1920x1080,Intel Core i5 7200U 2.5GHz,8GB,256GB SSD,Intel HD Graphics 620,No OS,1.86kg,30636"
        );
        let laptops = parse_laptops(&csv_content);

        assert_eq!(laptops.len(), 2);
        let mac = &laptops[0];
        assert_eq!(mac.id, 1);
        assert_eq!(mac.company, "Apple");
        assert_eq!(mac.type_name, "Ultrabook");
        assert_eq!(mac.inches, 13.3);
        assert_eq!(mac.screen_resolution, "IPS Panel Retina Display 2560x1600");
        assert_eq!(mac.cpu, "Intel Core i5 2.3GHz");
        assert_eq!(mac.ram, 8.0);
        assert_eq!(mac.memory, "128GB SSD");
        assert_eq!(mac.gpu, "Intel Iris Plus Graphics 640");
        assert_eq!(mac.op_sys, "macOS");
        assert_eq!(mac.weight, 1.37);
        assert_eq!(mac.price, 71378.68);

        assert_eq!(laptops[1].id, 2);
        assert_eq!(laptops[1].company, "HP");
        assert_eq!(laptops[1].op_sys, "No OS");
        assert_eq!(laptops[1].price, 30636.0);
    }

    #[test]
    fn test_parse_crlf_line_endings() {
        let csv_content = "Company,Price\r\nDell,100\r\nAsus,200\r\n";
        let laptops = parse_laptops(csv_content);
        assert_eq!(laptops.len(), 2);
        assert_eq!(laptops[1].company, "Asus");
        assert_eq!(laptops[1].price, 200.0);
    }

    #[test]
    fn test_parse_header_only_or_empty() {
        assert!(parse_laptops("").is_empty());
        assert!(parse_laptops("   \n  ").is_empty());
        assert!(parse_laptops(HEADER).is_empty());
        assert!(LaptopCsvParser::new().try_parse_text(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_parse_missing_mandatory_column_rejects_everything() {
        let no_price = "Company,TypeName\nDell,Notebook\nHP,Notebook";
        assert!(parse_laptops(no_price).is_empty());

        let no_company = "Brand,Price\nDell,100\nHP,200";
        assert!(parse_laptops(no_company).is_empty());

        let err = LaptopCsvParser::new().try_parse_text(no_price).unwrap_err();
        assert!(err.is_format_error());
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_parse_decorated_price_header() {
        let laptops = parse_laptops("Company,Price (INR)\nLenovo,\"₹45,000\"");
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].price, 45000.0);
    }

    #[test]
    fn test_parse_drops_non_positive_prices() {
        let csv_content = "Company,Price\nDell,0\nHP,N/A\nAcer,-5\nAsus,350";
        let laptops = parse_laptops(csv_content);
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].company, "Asus");
        assert_eq!(laptops[0].id, 4);
    }

    #[test]
    fn test_parse_missing_cells_use_defaults() {
        let csv_content = "Company,TypeName,Ram,Weight,Gpu,Price\n,,,,,999\nMSI";
        let laptops = parse_laptops(csv_content);
        assert_eq!(laptops.len(), 1);
        let laptop = &laptops[0];
        assert_eq!(laptop.company, "Unknown");
        assert_eq!(laptop.type_name, "Unknown");
        assert_eq!(laptop.ram, 0.0);
        assert_eq!(laptop.weight, 0.0);
        assert_eq!(laptop.gpu, "");
        assert_eq!(laptop.cpu, "");
        assert_eq!(laptop.price, 999.0);
    }

    #[test]
    fn test_parse_ids_follow_source_position() {
        let csv_content = "Company,Price\nA,10\n\nB,20\nC,0\nD,40";
        let laptops = parse_laptops(csv_content);
        let ids: Vec<usize> = laptops.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_parse_skips_row_with_unterminated_quote() {
        let csv_content = "Company,Price\nDell,100\n\"Broken,200\nHP,300";
        let laptops = parse_laptops(csv_content);
        let companies: Vec<&str> = laptops.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(companies, vec!["Dell", "HP"]);
        assert_eq!(laptops[1].id, 3);
    }

    #[test]
    fn test_parse_keeps_row_with_stray_quote_after_price() {
        let csv_content = "Company,Price,Inches\nApple,500,13\"\nDell,100,15.6";
        let laptops = parse_laptops(csv_content);
        let companies: Vec<&str> = laptops.iter().map(|l| l.company.as_str()).collect();
        assert_eq!(companies, vec!["Apple", "Dell"]);
        assert_eq!(laptops[0].price, 500.0);
        assert_eq!(laptops[0].inches, 13.0);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let csv_content = format!("{HEADER}\nDell,Gaming,15.6,4K,i7,16GB,1TB SSD,RTX,Windows 10,2.5kg,\"₹1,50,000\"");
        assert_eq!(parse_laptops(&csv_content), parse_laptops(&csv_content));
    }

    #[test]
    fn test_parse_never_returns_more_than_data_lines() {
        let csv_content = "Company,Price\nA,1\nB,2\nC,x\nD,4";
        let laptops = parse_laptops(csv_content);
        assert!(laptops.len() <= 4);
        assert_eq!(laptops.len(), 3);
    }

    #[test]
    fn test_parser_respects_settings() {
        let settings = EngineSettings {
            delimiter: ';',
            unknown_label: "n/a".to_string(),
            ..EngineSettings::default()
        };
        let parser = LaptopCsvParser::from_settings(&settings);
        let laptops = parser.parse_text("Company;TypeName;Price\n;Netbook;\"1,200\"");
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].company, "n/a");
        assert_eq!(laptops[0].price, 1200.0);
    }

    #[test]
    fn test_load_from_path() {
        let tmp_file = create_test_csv("Company,Price\nToshiba,\"₹25,000\"");
        let laptops = LaptopCsvParser::new().load_from_path(tmp_file.path()).unwrap();
        assert_eq!(laptops.len(), 1);
        assert_eq!(laptops[0].company, "Toshiba");
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let result = LaptopCsvParser::new().load_from_path("definitely_missing_laptops.csv");
        assert!(matches!(result, Err(EngineError::IoError { .. })));
    }
}
