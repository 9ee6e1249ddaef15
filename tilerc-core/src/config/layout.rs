use super::Match;
use crate::models::{WindowInfo, WindowType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// The arrangement algorithms a host offers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Max,
    MonadTall,
    MonadWide,
    Columns,
    Stack,
    Bsp,
    Matrix,
    RatioTile,
    Tile,
    TreeTab,
    VerticalTile,
    Zoomy,
    Floating,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Border and gap settings shared by several layouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LayoutTheme {
    pub margin: u32,
    pub border_on_single: bool,
    pub border_width: u32,
    pub border_normal: String,
    pub border_focus: String,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            margin: 0,
            border_on_single: false,
            border_width: 2,
            border_normal: "#000000".to_owned(),
            border_focus: "#0000ff".to_owned(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub kind: LayoutKind,
    pub theme: LayoutTheme,
}

impl Layout {
    #[must_use]
    pub const fn new(kind: LayoutKind, theme: LayoutTheme) -> Self {
        Self { kind, theme }
    }

    /// Name the host uses for this layout, e.g. `monadtall`.
    #[must_use]
    pub fn name(&self) -> String {
        self.kind.to_string()
    }
}

/// The layout that owns every window excluded from tiling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloatingLayout {
    pub theme: LayoutTheme,
    pub float_rules: Vec<Match>,
}

impl FloatingLayout {
    /// The rules a host floats windows by when no configuration says otherwise:
    /// transient-looking window types, well known dialog classes and windows
    /// that cannot be resized freely.
    #[must_use]
    pub fn default_float_rules() -> Vec<Match> {
        let mut rules: Vec<Match> = [
            WindowType::Utility,
            WindowType::Notification,
            WindowType::Toolbar,
            WindowType::Splash,
            WindowType::Dialog,
        ]
        .into_iter()
        .map(Match::WmType)
        .collect();
        rules.extend(
            [
                "file_progress",
                "confirm",
                "dialog",
                "download",
                "error",
                "notification",
                "splash",
                "toolbar",
            ]
            .into_iter()
            .map(Match::wm_class),
        );
        rules.push(Match::FixedSize);
        rules.push(Match::FixedRatio);
        rules
    }

    /// Default rules followed by `extra`, keeping the first occurrence of each rule.
    #[must_use]
    pub fn with_rules(theme: LayoutTheme, extra: Vec<Match>) -> Self {
        let mut seen = HashSet::new();
        let float_rules = Self::default_float_rules()
            .into_iter()
            .chain(extra)
            .filter(|rule| seen.insert(rule.clone()))
            .collect();
        Self { theme, float_rules }
    }

    #[must_use]
    pub fn floats(&self, window: &WindowInfo) -> bool {
        self.float_rules.iter().any(|rule| rule.matches(window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_names_are_lowercase() {
        let layout = Layout::new(LayoutKind::MonadTall, LayoutTheme::default());
        assert_eq!(layout.name(), "monadtall");
    }

    #[test]
    fn union_drops_rules_already_in_defaults() {
        let floating = FloatingLayout::with_rules(
            LayoutTheme::default(),
            vec![Match::wm_class("confirm"), Match::wm_class("maketag")],
        );
        let defaults = FloatingLayout::default_float_rules();
        assert_eq!(floating.float_rules.len(), defaults.len() + 1);
        assert_eq!(floating.float_rules.last(), Some(&Match::wm_class("maketag")));
    }

    #[test]
    fn dialogs_float_by_default() {
        let floating = FloatingLayout::with_rules(LayoutTheme::default(), vec![]);
        let dialog = WindowInfo {
            wm_type: Some(WindowType::Dialog),
            ..WindowInfo::default()
        };
        assert!(floating.floats(&dialog));
        assert!(!floating.floats(&WindowInfo::with_class("kitty")));
    }
}
