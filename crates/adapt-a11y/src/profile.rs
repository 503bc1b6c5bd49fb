//! Accessibility Profiles
//!
//! Named, persisted bundles of settings. A profile may carry only some axes;
//! applying it leaves the others at their live values.

use serde::{Deserialize, Serialize};

use crate::settings::{AccessibilitySettings, ContrastLevel, Magnitude, TextAlign};

/// Server-assigned profile identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

impl std::fmt::Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subset of [`AccessibilitySettings`]; absent axes are left untouched on apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_level: Option<ContrastLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size_level: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_spacing_level: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_level: Option<Magnitude>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_contrast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor_highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_reader: Option<bool>,
}

impl ProfileSettings {
    /// Full snapshot of live settings
    pub fn from_settings(s: &AccessibilitySettings) -> Self {
        Self {
            contrast_level: Some(s.contrast_level),
            text_size_level: Some(s.text_size_level),
            text_spacing_level: Some(s.text_spacing_level),
            line_height_level: Some(s.line_height_level),
            text_align: Some(s.text_align),
            smart_contrast: Some(s.smart_contrast),
            highlight_links: Some(s.highlight_links),
            cursor_highlight: Some(s.cursor_highlight),
            screen_reader: Some(s.screen_reader),
        }
    }

    /// Merge present axes into `settings`
    pub fn apply_to(&self, settings: &mut AccessibilitySettings) {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut settings.contrast_level, self.contrast_level);
        set(&mut settings.text_size_level, self.text_size_level);
        set(&mut settings.text_spacing_level, self.text_spacing_level);
        set(&mut settings.line_height_level, self.line_height_level);
        set(&mut settings.text_align, self.text_align);
        set(&mut settings.smart_contrast, self.smart_contrast);
        set(&mut settings.highlight_links, self.highlight_links);
        set(&mut settings.cursor_highlight, self.cursor_highlight);
        set(&mut settings.screen_reader, self.screen_reader);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Persisted profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityProfile {
    pub profile_id: ProfileId,
    pub profile_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: ProfileSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Create/update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub profile_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: ProfileSettings,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, settings: ProfileSettings) -> Self {
        Self { profile_name: name.into(), description: None, settings }
    }

    /// "Save current settings as a profile"
    pub fn from_settings(name: impl Into<String>, settings: &AccessibilitySettings) -> Self {
        Self::new(name, ProfileSettings::from_settings(settings))
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_apply_preserves_other_axes() {
        let mut live = AccessibilitySettings { contrast_level: ContrastLevel::Dark, ..Default::default() };
        let partial = ProfileSettings { text_size_level: Some(Magnitude::Maximum), ..Default::default() };
        partial.apply_to(&mut live);
        assert_eq!(live.text_size_level, Magnitude::Maximum);
        assert_eq!(live.contrast_level, ContrastLevel::Dark);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{
            "profileId": 7,
            "profileName": "저시력",
            "description": null,
            "settings": {"textSizeLevel": 2, "textAlign": "center"},
            "createdAt": "2026-01-02T03:04:05Z"
        }"#;
        let profile: AccessibilityProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.profile_id, ProfileId(7));
        assert_eq!(profile.settings.text_size_level, Some(Magnitude::Maximum));
        assert_eq!(profile.settings.text_align, Some(TextAlign::Center));
        assert_eq!(profile.settings.contrast_level, None);
        assert!(profile.updated_at.is_none());
    }

    #[test]
    fn test_partial_serializes_only_present_axes() {
        let partial = ProfileSettings { highlight_links: Some(true), ..Default::default() };
        assert_eq!(serde_json::to_string(&partial).unwrap(), r#"{"highlightLinks":true}"#);
        assert!(ProfileSettings::default().is_empty());
    }

    #[test]
    fn test_draft_from_settings_is_full() {
        let draft = ProfileDraft::from_settings("Night", &AccessibilitySettings::default())
            .with_description("evening browsing");
        let mut target = AccessibilitySettings { screen_reader: true, ..Default::default() };
        draft.settings.apply_to(&mut target);
        assert!(target.is_default());
        assert_eq!(draft.description.as_deref(), Some("evening browsing"));
    }

    #[test]
    fn test_out_of_range_level_rejected() {
        let json = r#"{"contrastLevel": 9}"#;
        assert!(serde_json::from_str::<ProfileSettings>(json).is_err());
    }
}
