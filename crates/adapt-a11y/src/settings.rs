//! Settings Model
//!
//! Normalized accessibility preferences. Every multi-valued axis is a closed,
//! ordered enum; cycling past the last value wraps back to the default.

use serde::{Deserialize, Serialize};

use crate::A11yError;

/// Closed, ordered set of values with wrapping increment
pub trait Cycle: Copy + PartialEq + 'static {
    /// Every value, default first
    const ALL: &'static [Self];
    /// Number of values on this axis
    const COUNT: usize = Self::ALL.len();

    /// Ordinal of this value
    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next value, wrapping to the first after the last
    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }
}

/// Visual contrast mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ContrastLevel {
    #[default]
    Normal,
    Dark,
    Inverted,
    High,
    Low,
}

impl Cycle for ContrastLevel {
    const ALL: &'static [Self] = &[Self::Normal, Self::Dark, Self::Inverted, Self::High, Self::Low];

    fn index(self) -> usize {
        self as usize
    }
}

/// Three-step magnitude shared by text size, text spacing and line height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Magnitude {
    #[default]
    Normal,
    Increased,
    Maximum,
}

impl Cycle for Magnitude {
    const ALL: &'static [Self] = &[Self::Normal, Self::Increased, Self::Maximum];

    fn index(self) -> usize {
        self as usize
    }
}

/// Levels per axis
pub const CONTRAST_LEVELS: usize = ContrastLevel::COUNT;
pub const TEXT_SIZE_LEVELS: usize = Magnitude::COUNT;
pub const TEXT_SPACING_LEVELS: usize = Magnitude::COUNT;
pub const LINE_HEIGHT_LEVELS: usize = Magnitude::COUNT;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl Cycle for TextAlign {
    const ALL: &'static [Self] = &[Self::Left, Self::Center, Self::Right];

    fn index(self) -> usize {
        self as usize
    }
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl std::str::FromStr for TextAlign {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(A11yError::UnknownAlign(s.to_string())),
        }
    }
}

macro_rules! level_conversions {
    ($ty:ty, $axis:literal) => {
        impl TryFrom<u8> for $ty {
            type Error = A11yError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                <$ty as Cycle>::from_index(value as usize)
                    .ok_or(A11yError::LevelOutOfRange { axis: $axis, value })
            }
        }

        impl From<$ty> for u8 {
            fn from(level: $ty) -> u8 {
                level.index() as u8
            }
        }
    };
}

level_conversions!(ContrastLevel, "contrastLevel");
level_conversions!(Magnitude, "level");

/// One independently variable dimension of the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsAxis {
    Contrast,
    TextSize,
    TextSpacing,
    LineHeight,
    TextAlign,
    SmartContrast,
    HighlightLinks,
    CursorHighlight,
    ScreenReader,
}

impl SettingsAxis {
    pub const ALL: [SettingsAxis; 9] = [
        Self::Contrast, Self::TextSize, Self::TextSpacing, Self::LineHeight, Self::TextAlign,
        Self::SmartContrast, Self::HighlightLinks, Self::CursorHighlight, Self::ScreenReader,
    ];
}

/// Accessibility settings, persisted as a flat JSON object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub contrast_level: ContrastLevel,
    pub text_size_level: Magnitude,
    pub text_spacing_level: Magnitude,
    pub line_height_level: Magnitude,
    pub text_align: TextAlign,
    pub smart_contrast: bool,
    pub highlight_links: bool,
    pub cursor_highlight: bool,
    pub screen_reader: bool,
}

impl AccessibilitySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one axis: enum axes step with wraparound, toggles flip
    pub fn cycle(&mut self, axis: SettingsAxis) {
        match axis {
            SettingsAxis::Contrast => self.contrast_level = self.contrast_level.next(),
            SettingsAxis::TextSize => self.text_size_level = self.text_size_level.next(),
            SettingsAxis::TextSpacing => self.text_spacing_level = self.text_spacing_level.next(),
            SettingsAxis::LineHeight => self.line_height_level = self.line_height_level.next(),
            SettingsAxis::TextAlign => self.text_align = self.text_align.next(),
            SettingsAxis::SmartContrast => self.smart_contrast = !self.smart_contrast,
            SettingsAxis::HighlightLinks => self.highlight_links = !self.highlight_links,
            SettingsAxis::CursorHighlight => self.cursor_highlight = !self.cursor_highlight,
            SettingsAxis::ScreenReader => self.screen_reader = !self.screen_reader,
        }
    }

    /// Restore every axis to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Axes whose value differs from `other`
    pub fn changed_axes(&self, other: &Self) -> Vec<SettingsAxis> {
        SettingsAxis::ALL.into_iter()
            .filter(|&axis| match axis {
                SettingsAxis::Contrast => self.contrast_level != other.contrast_level,
                SettingsAxis::TextSize => self.text_size_level != other.text_size_level,
                SettingsAxis::TextSpacing => self.text_spacing_level != other.text_spacing_level,
                SettingsAxis::LineHeight => self.line_height_level != other.line_height_level,
                SettingsAxis::TextAlign => self.text_align != other.text_align,
                SettingsAxis::SmartContrast => self.smart_contrast != other.smart_contrast,
                SettingsAxis::HighlightLinks => self.highlight_links != other.highlight_links,
                SettingsAxis::CursorHighlight => self.cursor_highlight != other.cursor_highlight,
                SettingsAxis::ScreenReader => self.screen_reader != other.screen_reader,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_counts() {
        assert_eq!(CONTRAST_LEVELS, 5);
        assert_eq!(TEXT_SIZE_LEVELS, 3);
        assert_eq!(TextAlign::COUNT, 3);
    }

    #[test]
    fn test_cycle_wraps() {
        let mut s = AccessibilitySettings::new();
        for _ in 0..CONTRAST_LEVELS {
            s.cycle(SettingsAxis::Contrast);
        }
        assert_eq!(s.contrast_level, ContrastLevel::Normal);

        s.cycle(SettingsAxis::TextSize);
        s.cycle(SettingsAxis::TextSize);
        assert_eq!(s.text_size_level, Magnitude::Maximum);
        s.cycle(SettingsAxis::TextSize);
        assert_eq!(s.text_size_level, Magnitude::Normal);

        s.cycle(SettingsAxis::TextAlign);
        assert_eq!(s.text_align, TextAlign::Center);
    }

    #[test]
    fn test_toggle_axes_flip() {
        let mut s = AccessibilitySettings::new();
        s.cycle(SettingsAxis::ScreenReader);
        assert!(s.screen_reader);
        s.cycle(SettingsAxis::ScreenReader);
        assert!(!s.screen_reader);
    }

    #[test]
    fn test_level_out_of_range() {
        assert!(ContrastLevel::try_from(4u8).is_ok());
        assert!(matches!(
            ContrastLevel::try_from(5u8),
            Err(A11yError::LevelOutOfRange { axis: "contrastLevel", value: 5 })
        ));
        assert!(Magnitude::try_from(3u8).is_err());
    }

    #[test]
    fn test_flat_json_shape() {
        let mut s = AccessibilitySettings::new();
        s.contrast_level = ContrastLevel::High;
        s.text_align = TextAlign::Right;
        s.screen_reader = true;

        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["contrastLevel"], 3);
        assert_eq!(json["textSizeLevel"], 0);
        assert_eq!(json["textAlign"], "right");
        assert_eq!(json["screenReader"], true);

        let back: AccessibilitySettings = serde_json::from_value(json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: AccessibilitySettings = serde_json::from_str(r#"{"lineHeightLevel":2}"#).unwrap();
        assert_eq!(s.line_height_level, Magnitude::Maximum);
        assert_eq!(s.contrast_level, ContrastLevel::Normal);
    }

    #[test]
    fn test_changed_axes() {
        let a = AccessibilitySettings::new();
        let mut b = a;
        b.screen_reader = true;
        b.text_spacing_level = Magnitude::Increased;
        assert_eq!(b.changed_axes(&a), vec![SettingsAxis::TextSpacing, SettingsAxis::ScreenReader]);
        assert!(a.is_default());
        assert!(!b.is_default());
    }

    #[test]
    fn test_text_align_parse() {
        assert_eq!(" Center ".parse::<TextAlign>().unwrap(), TextAlign::Center);
        assert!("justify".parse::<TextAlign>().is_err());
    }
}
