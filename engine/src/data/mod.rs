// Data layer: raw table text in, ordered laptop records out.
//
//   text --tokenizer--> cells --column_map--> fields --normalizer--> Laptop
//                                 (csv_parser drives the steps)
//   listing_store keeps the currently loaded Dataset.

pub mod column_map;
pub mod csv_parser;
pub mod listing_store;
pub mod normalizer;
pub mod tokenizer;
