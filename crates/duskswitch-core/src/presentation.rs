//! Presentation rules for Duskswitch
//!
//! Maps a [`Theme`] to the colors and labels the view draws. Nothing here knows
//! about terminals beyond handing out ratatui styles, so the mapping can be
//! checked without a backend.

use crate::theme::Theme;
use ratatui::style::{Color, Modifier, Style};
use std::fmt;

/// 24-bit RGB color, displayed as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
    pub const CHARCOAL: Self = Self::new(0x33, 0x33, 0x33);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<HexColor> for Color {
    fn from(color: HexColor) -> Self {
        Color::Rgb(color.r, color.g, color.b)
    }
}

/// UI element types for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// The full-screen background
    Surface,
    /// The mode heading
    Heading,
    /// The toggle button, label and border
    Button,
}

/// Everything the view needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub background: HexColor,
    pub foreground: HexColor,
    pub heading: &'static str,
    pub button_label: &'static str,
}

impl Presentation {
    /// Get a ratatui Style for the specified UI element
    pub fn style(&self, element: Element) -> Style {
        let base = Style::default()
            .fg(self.foreground.into())
            .bg(self.background.into());

        match element {
            Element::Surface => base,
            Element::Heading => base.add_modifier(Modifier::BOLD),
            Element::Button => base.add_modifier(Modifier::BOLD),
        }
    }
}

/// Derive the presentation for `theme`. Pure.
pub fn render(theme: Theme) -> Presentation {
    match theme {
        Theme::Light => Presentation {
            background: HexColor::WHITE,
            foreground: HexColor::BLACK,
            heading: "Light Mode",
            button_label: "Switch to Dark Mode",
        },
        Theme::Dark => Presentation {
            background: HexColor::CHARCOAL,
            foreground: HexColor::WHITE,
            heading: "Dark Mode",
            button_label: "Switch to Light Mode",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_light() {
        let p = render(Theme::Light);
        assert_eq!(p.background.to_string(), "#ffffff");
        assert_eq!(p.foreground.to_string(), "#000000");
        assert_eq!(p.heading, "Light Mode");
        assert_eq!(p.button_label, "Switch to Dark Mode");
    }

    #[test]
    fn test_render_dark() {
        let p = render(Theme::Dark);
        assert_eq!(p.background.to_string(), "#333333");
        assert_eq!(p.foreground.to_string(), "#ffffff");
        assert_eq!(p.heading, "Dark Mode");
        assert_eq!(p.button_label, "Switch to Light Mode");
    }

    #[test]
    fn test_button_names_the_other_mode() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(
                render(theme).button_label,
                format!("Switch to {}", render(theme.toggled()).heading)
            );
        }
    }

    #[test]
    fn test_styles_carry_palette() {
        let p = render(Theme::Dark);
        let style = p.style(Element::Surface);
        assert_eq!(style.bg, Some(Color::Rgb(0x33, 0x33, 0x33)));
        assert_eq!(style.fg, Some(Color::Rgb(0xff, 0xff, 0xff)));
        assert!(p
            .style(Element::Heading)
            .add_modifier
            .contains(Modifier::BOLD));
    }
}
