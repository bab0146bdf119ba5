//! UI module for the duskswitch terminal widget

pub mod app;
pub mod view;

pub use app::App;
