// Models and helpers shared by the engine and any front end that renders them.
// Everything here is plain data plus pure functions; no I/O.
pub mod models;
pub mod utils;
