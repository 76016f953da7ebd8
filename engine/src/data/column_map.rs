// Header detection: which column holds which canonical field.
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Company,
    TypeName,
    Inches,
    ScreenResolution,
    Cpu,
    Ram,
    Memory,
    Gpu,
    OpSys,
    Weight,
    Price,
}

/// Evaluation order and candidate substrings for every field. For each field
/// the first header (left to right) containing any candidate wins.
pub const FIELD_CANDIDATES: [(CanonicalField, &[&str]); 11] = [
    (CanonicalField::Company, &["company"]),
    (CanonicalField::TypeName, &["typename", "type"]),
    (CanonicalField::Inches, &["inches"]),
    (CanonicalField::ScreenResolution, &["screenresolution", "screen"]),
    (CanonicalField::Cpu, &["cpu"]),
    (CanonicalField::Ram, &["ram"]),
    (CanonicalField::Memory, &["memory", "storage"]),
    (CanonicalField::Gpu, &["gpu"]),
    (CanonicalField::OpSys, &["opsys", "os"]),
    (CanonicalField::Weight, &["weight"]),
    (CanonicalField::Price, &["price"]),
];

/// A column whose absence rejects the whole table.
pub const MANDATORY_FIELDS: [CanonicalField; 2] = [CanonicalField::Company, CanonicalField::Price];

impl CanonicalField {
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Company => "company",
            CanonicalField::TypeName => "typeName",
            CanonicalField::Inches => "inches",
            CanonicalField::ScreenResolution => "screenResolution",
            CanonicalField::Cpu => "cpu",
            CanonicalField::Ram => "ram",
            CanonicalField::Memory => "memory",
            CanonicalField::Gpu => "gpu",
            CanonicalField::OpSys => "opSys",
            CanonicalField::Weight => "weight",
            CanonicalField::Price => "price",
        }
    }

    fn slot(&self) -> usize {
        FIELD_CANDIDATES
            .iter()
            .position(|(field, _)| field == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical field -> header column index, built once per parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    indices: [Option<usize>; FIELD_CANDIDATES.len()],
}

impl ColumnMap {
    /// `headers` are expected to be lower-cased and trimmed already.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut indices = [None; FIELD_CANDIDATES.len()];
        for (slot, (_, candidates)) in FIELD_CANDIDATES.iter().enumerate() {
            indices[slot] = headers
                .iter()
                .position(|header| candidates.iter().any(|c| header.contains(c)));
        }
        ColumnMap { indices }
    }

    pub fn index_of(&self, field: CanonicalField) -> Option<usize> {
        self.indices[field.slot()]
    }

    /// Mandatory fields that no header matched, in evaluation order.
    pub fn missing_mandatory(&self) -> Vec<CanonicalField> {
        MANDATORY_FIELDS
            .iter()
            .copied()
            .filter(|field| self.index_of(*field).is_none())
            .collect()
    }

    /// Cell text for `field`, or `""` when the column or the cell is missing.
    pub fn cell<'a>(&self, cells: &'a [String], field: CanonicalField) -> &'a str {
        self.index_of(field)
            .and_then(|idx| cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| h.trim().to_lowercase()).collect()
    }

    #[test]
    fn test_standard_header_maps_every_field() {
        let map = ColumnMap::from_headers(&headers(&[
            "laptop_id", "Company", "TypeName", "Inches", "ScreenResolution", "Cpu", "Ram",
            "Memory", "Gpu", "OpSys", "Weight", "Price",
        ]));
        assert_eq!(map.index_of(CanonicalField::Company), Some(1));
        assert_eq!(map.index_of(CanonicalField::TypeName), Some(2));
        assert_eq!(map.index_of(CanonicalField::Inches), Some(3));
        assert_eq!(map.index_of(CanonicalField::ScreenResolution), Some(4));
        assert_eq!(map.index_of(CanonicalField::Cpu), Some(5));
        assert_eq!(map.index_of(CanonicalField::Ram), Some(6));
        assert_eq!(map.index_of(CanonicalField::Memory), Some(7));
        assert_eq!(map.index_of(CanonicalField::Gpu), Some(8));
        assert_eq!(map.index_of(CanonicalField::OpSys), Some(9));
        assert_eq!(map.index_of(CanonicalField::Weight), Some(10));
        assert_eq!(map.index_of(CanonicalField::Price), Some(11));
        assert!(map.missing_mandatory().is_empty());
    }

    #[test]
    fn test_substring_match_on_decorated_header() {
        let map = ColumnMap::from_headers(&headers(&["Company", "Price (INR)"]));
        assert_eq!(map.index_of(CanonicalField::Price), Some(1));
    }

    #[test]
    fn test_alternative_candidates() {
        let map = ColumnMap::from_headers(&headers(&["company", "type", "screen", "storage", "os", "price"]));
        assert_eq!(map.index_of(CanonicalField::TypeName), Some(1));
        assert_eq!(map.index_of(CanonicalField::ScreenResolution), Some(2));
        assert_eq!(map.index_of(CanonicalField::Memory), Some(3));
        assert_eq!(map.index_of(CanonicalField::OpSys), Some(4));
    }

    #[test]
    fn test_first_matching_header_wins() {
        let map = ColumnMap::from_headers(&headers(&["company", "price_old", "price"]));
        assert_eq!(map.index_of(CanonicalField::Price), Some(1));
    }

    #[test]
    fn test_missing_mandatory_fields_reported_in_order() {
        let map = ColumnMap::from_headers(&headers(&["brand", "cost"]));
        assert_eq!(
            map.missing_mandatory(),
            vec![CanonicalField::Company, CanonicalField::Price]
        );
        // "cost" contains "os": loose matching is intentional
        assert_eq!(map.index_of(CanonicalField::OpSys), Some(1));
    }

    #[test]
    fn test_cell_defaults_to_empty() {
        let map = ColumnMap::from_headers(&headers(&["company", "price", "gpu"]));
        let cells = vec!["Dell".to_string(), "500".to_string()];
        assert_eq!(map.cell(&cells, CanonicalField::Company), "Dell");
        assert_eq!(map.cell(&cells, CanonicalField::Gpu), "");
        assert_eq!(map.cell(&cells, CanonicalField::Cpu), "");
    }
}
