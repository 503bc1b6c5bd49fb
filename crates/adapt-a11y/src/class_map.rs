//! Class Mapper
//!
//! Pure per-axis translation from a settings value to at most one class
//! token. The default value of every axis maps to the empty token.
//!
//! Every token the engine owns starts with [`RESERVED_PREFIX`], except the
//! dark contrast level, which deliberately reuses the site-wide dark theme
//! class [`DARK_ALIAS`].

use crate::settings::{AccessibilitySettings, ContrastLevel, Magnitude, TextAlign};

/// Prefix carried by every engine-owned token
pub const RESERVED_PREFIX: &str = "a11y-";

/// Dark theme class shared with the site theme
pub const DARK_ALIAS: &str = "dark";

pub fn contrast_class(level: ContrastLevel) -> &'static str {
    match level {
        ContrastLevel::Normal => "",
        ContrastLevel::Dark => DARK_ALIAS,
        ContrastLevel::Inverted => "a11y-contrast-inverted",
        ContrastLevel::High => "a11y-contrast-high",
        ContrastLevel::Low => "a11y-contrast-low",
    }
}

pub fn text_size_class(level: Magnitude) -> &'static str {
    match level {
        Magnitude::Normal => "",
        Magnitude::Increased => "a11y-text-size-1",
        Magnitude::Maximum => "a11y-text-size-2",
    }
}

pub fn text_spacing_class(level: Magnitude) -> &'static str {
    match level {
        Magnitude::Normal => "",
        Magnitude::Increased => "a11y-text-spacing-1",
        Magnitude::Maximum => "a11y-text-spacing-2",
    }
}

pub fn line_height_class(level: Magnitude) -> &'static str {
    match level {
        Magnitude::Normal => "",
        Magnitude::Increased => "a11y-line-height-1",
        Magnitude::Maximum => "a11y-line-height-2",
    }
}

pub fn text_align_class(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "",
        TextAlign::Center => "a11y-align-center",
        TextAlign::Right => "a11y-align-right",
    }
}

pub fn smart_contrast_class(on: bool) -> &'static str {
    if on { "a11y-smart-contrast" } else { "" }
}

pub fn highlight_links_class(on: bool) -> &'static str {
    if on { "a11y-highlight-links" } else { "" }
}

pub fn cursor_highlight_class(on: bool) -> &'static str {
    if on { "a11y-cursor-highlight" } else { "" }
}

/// One slot per visual axis, in axis order. Empty slots are defaults.
///
/// The screen reader toggle has no presentation and so no slot.
pub fn axis_tokens(settings: &AccessibilitySettings) -> [&'static str; 8] {
    [
        contrast_class(settings.contrast_level),
        text_size_class(settings.text_size_level),
        text_spacing_class(settings.text_spacing_level),
        line_height_class(settings.line_height_level),
        text_align_class(settings.text_align),
        smart_contrast_class(settings.smart_contrast),
        highlight_links_class(settings.highlight_links),
        cursor_highlight_class(settings.cursor_highlight),
    ]
}

/// Non-empty tokens for the given settings
pub fn class_tokens(settings: &AccessibilitySettings) -> Vec<&'static str> {
    axis_tokens(settings).into_iter().filter(|t| !t.is_empty()).collect()
}

/// Whether `token` could have been produced by this mapper
pub fn is_engine_token(token: &str) -> bool {
    token.starts_with(RESERVED_PREFIX) || token == DARK_ALIAS
}
