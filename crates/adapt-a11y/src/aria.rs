//! ARIA Support
//!
//! The subset of ARIA roles and attributes the focus speech path reads.

/// Explicit label attribute
pub const ARIA_LABEL: &str = "aria-label";
/// Label-reference attribute (space separated ids)
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
/// Role attribute
pub const ROLE: &str = "role";

/// ARIA role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaRole {
    // Widget roles
    Button,
    Checkbox,
    Combobox,
    GridCell,
    Link,
    Listbox,
    Menu,
    MenuBar,
    MenuItem,
    MenuItemCheckbox,
    MenuItemRadio,
    Option,
    Radio,
    SearchBox,
    Slider,
    SpinButton,
    Switch,
    Tab,
    TextBox,
    TreeItem,

    // Graphics
    Img,
}

impl AriaRole {
    /// Parse from a `role` attribute value (first token wins)
    pub fn parse(s: &str) -> Option<Self> {
        let token = s.split_whitespace().next()?;
        Some(match token.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "checkbox" => Self::Checkbox,
            "combobox" => Self::Combobox,
            "gridcell" => Self::GridCell,
            "link" => Self::Link,
            "listbox" => Self::Listbox,
            "menu" => Self::Menu,
            "menubar" => Self::MenuBar,
            "menuitem" => Self::MenuItem,
            "menuitemcheckbox" => Self::MenuItemCheckbox,
            "menuitemradio" => Self::MenuItemRadio,
            "option" => Self::Option,
            "radio" => Self::Radio,
            "searchbox" => Self::SearchBox,
            "slider" => Self::Slider,
            "spinbutton" => Self::SpinButton,
            "switch" => Self::Switch,
            "tab" => Self::Tab,
            "textbox" => Self::TextBox,
            "treeitem" => Self::TreeItem,
            "img" | "image" => Self::Img,
            _ => return None,
        })
    }

    /// Check if role is widget (interactive)
    pub fn is_widget(&self) -> bool {
        matches!(self,
            Self::Button | Self::Checkbox | Self::Combobox | Self::GridCell |
            Self::Link | Self::Listbox | Self::Menu | Self::MenuBar |
            Self::MenuItem | Self::MenuItemCheckbox | Self::MenuItemRadio |
            Self::Option | Self::Radio | Self::SearchBox | Self::Slider |
            Self::SpinButton | Self::Switch | Self::Tab | Self::TextBox |
            Self::TreeItem
        )
    }

    /// Roles whose accessible name is their visible content (list options and the like)
    pub fn is_option_like(&self) -> bool {
        matches!(self,
            Self::Option | Self::MenuItem | Self::MenuItemCheckbox |
            Self::MenuItemRadio | Self::Tab | Self::TreeItem
        )
    }
}

/// Native interactive controls (lowercase tag names)
pub fn is_native_control(tag: &str) -> bool {
    matches!(tag, "input" | "button" | "a" | "textarea")
}
