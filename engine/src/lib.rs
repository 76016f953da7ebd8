// Engine library root: parsing, aggregation and the service facade over them.

pub mod aggregation;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use data::csv_parser::{parse_laptops, LaptopCsvParser};
pub use error::EngineError;
