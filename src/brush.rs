use std::fmt;
use std::str::FromStr;

use egui::Color32;
use serde::Deserialize;

use crate::error::ParseColorError;

/// Radius of a freshly started session, in points.
pub const DEFAULT_RADIUS: u32 = 5;

/// Amount the bracket keys grow or shrink the brush by. Also the smallest
/// radius a decrease may leave behind.
pub const RADIUS_STEP: u32 = 5;

/// One entry of the fixed swatch palette, in display order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
    #[default]
    White,
}

impl BrushColor {
    /// The palette in the order the swatches are laid out.
    pub const ALL: [BrushColor; 8] = [
        BrushColor::Red,
        BrushColor::Orange,
        BrushColor::Yellow,
        BrushColor::Green,
        BrushColor::Blue,
        BrushColor::Purple,
        BrushColor::Black,
        BrushColor::White,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// The CSS named color this palette entry stands for.
    pub fn to_color32(self) -> Color32 {
        match self {
            Self::Red => Color32::from_rgb(255, 0, 0),
            Self::Orange => Color32::from_rgb(255, 165, 0),
            Self::Yellow => Color32::from_rgb(255, 255, 0),
            Self::Green => Color32::from_rgb(0, 128, 0),
            Self::Blue => Color32::from_rgb(0, 0, 255),
            Self::Purple => Color32::from_rgb(128, 0, 128),
            Self::Black => Color32::BLACK,
            Self::White => Color32::WHITE,
        }
    }
}

impl fmt::Display for BrushColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrushColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| ParseColorError(s.to_owned()))
    }
}

/// Color and radius applied to new strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushConfig {
    color: BrushColor,
    radius: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self::new(BrushColor::default(), DEFAULT_RADIUS)
    }
}

impl BrushConfig {
    pub fn new(color: BrushColor, radius: u32) -> Self {
        Self { color, radius }
    }

    pub fn color(&self) -> BrushColor {
        self.color
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Replace the current color.
    ///
    /// Returns the previous color when the value actually changed, and `None`
    /// when `color` was already selected.
    pub fn set_color(&mut self, color: BrushColor) -> Option<BrushColor> {
        if self.color == color {
            return None;
        }
        Some(std::mem::replace(&mut self.color, color))
    }

    pub fn increase_radius(&mut self, step: u32) {
        self.radius = self.radius.saturating_add(step);
    }

    /// Shrink the brush by `step`, keeping it at or above `step`.
    ///
    /// Returns `false` and leaves the radius untouched when the guard fails.
    pub fn decrease_radius(&mut self, step: u32) -> bool {
        match self.radius.checked_sub(step) {
            Some(radius) if radius >= step => {
                self.radius = radius;
                true
            }
            _ => false,
        }
    }
}
