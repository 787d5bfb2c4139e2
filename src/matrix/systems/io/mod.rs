// src/matrix/systems/io/mod.rs
pub mod export_csv;

pub use export_csv::handle_csv_export;
