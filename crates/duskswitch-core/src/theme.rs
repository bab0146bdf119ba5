//! Theme value for Duskswitch
//!
//! The whole widget is driven by a single two-state value. Everything that gets
//! drawn is derived from it, see [`crate::presentation`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display mode of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (start value)
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl Theme {
    /// The other variant. Applying it twice gives back `self`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flip in place
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
