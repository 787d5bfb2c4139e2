// src/ui/elements/editor/mod.rs
pub mod markup_render;
pub mod state;
pub mod widget;
