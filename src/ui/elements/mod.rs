// src/ui/elements/mod.rs
pub mod editor;
pub mod main_view;
pub mod matrix_table;
pub mod top_panel;
