// src/matrix/systems/logic/mod.rs
pub mod replace_matrix;
pub mod update_insight;

pub use replace_matrix::handle_replace_matrix;
pub use update_insight::handle_update_insight;
