//! # Duskswitch Core Library
//!
//! This crate holds everything the duskswitch widget needs that does not depend
//! on a particular terminal backend: the two-state theme, the store that owns it
//! and notifies observers, and the pure mapping from a theme to what gets drawn.
//!
//! ## Modules
//!
//! - `theme`: the `Light`/`Dark` value and its toggle
//! - `store`: owned theme state with observer registration
//! - `presentation`: colors and labels derived from a theme
//! - `settings`: runtime configuration (poll rate, logging, mouse)
//! - `error`: errors raised by the configuration layer

pub mod error;
pub mod presentation;
pub mod settings;
pub mod store;
pub mod theme;

pub use error::CoreError;
pub use presentation::{render, Presentation};
pub use store::{Subscription, ThemeStore};
pub use theme::Theme;
