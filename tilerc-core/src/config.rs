//! The configuration descriptor a host reads on startup and on every reload.
mod group;
mod keybind;
mod layout;
mod match_rule;
mod mouse;
mod screen;
mod settings;

use crate::errors::{Result, TileError};
use crate::models::WindowInfo;
pub use group::{Group, SpawnRule};
pub use keybind::{BindingTable, Chord, Key};
pub use layout::{FloatingLayout, Layout, LayoutKind, LayoutTheme};
pub use match_rule::Match;
pub use mouse::MouseBinding;
pub use screen::{Bar, Screen, VolumeCommands, WallpaperMode, Widget, WidgetDefaults};
pub use settings::{BringFrontClick, FloatingOnly, FocusOnWindowActivation, Settings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Programs run by the lifecycle hooks and the wallpaper action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    /// Started detached, once, when the host finished starting up
    pub autostart: PathBuf,
    /// Run to completion when the host shuts down
    pub shutdown: Vec<String>,
    /// Run to completion with `-n` before a reload
    pub theme: PathBuf,
}

/// Everything the host reads from the configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Descriptor {
    #[serde(rename = "mod")]
    pub modkey: String,
    pub terminal: String,
    pub keys: Vec<Key>,
    pub groups: Vec<Group>,
    pub layouts: Vec<Layout>,
    pub floating_layout: FloatingLayout,
    pub screens: Vec<Screen>,
    pub mouse: Vec<MouseBinding>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    #[serde(default)]
    pub settings: Settings,
    pub lifecycle: Lifecycle,
}

impl Descriptor {
    /// Reject descriptors a host could not load.
    ///
    /// # Errors
    ///
    /// Returns the first malformed field found: no layouts, a group name used twice or a
    /// key binding without actions.
    pub fn validate(&self) -> Result<()> {
        if self.layouts.is_empty() {
            return Err(TileError::NoLayouts);
        }
        let mut names = HashSet::new();
        for group in &self.groups {
            if !names.insert(group.name.as_str()) {
                return Err(TileError::DuplicateGroup(group.name.clone()));
            }
        }
        if let Some(key) = self.keys.iter().find(|key| key.actions.is_empty()) {
            return Err(TileError::EmptyKeyActions(key.chord().to_string()));
        }
        Ok(())
    }

    /// The layout active when the host starts.
    #[must_use]
    pub fn default_layout(&self) -> Option<&Layout> {
        self.layouts.first()
    }

    #[must_use]
    pub fn binding_table(&self) -> BindingTable<'_> {
        BindingTable::new(&self.keys)
    }

    /// The group a new window is sent to: the first whose rules match.
    #[must_use]
    pub fn group_for(&self, window: &WindowInfo) -> Option<&Group> {
        self.groups.iter().find(|group| group.accepts(window))
    }

    /// One launch rule per group that has a `spawn` command, in group order.
    #[must_use]
    pub fn spawn_rules(&self) -> Vec<SpawnRule> {
        self.groups
            .iter()
            .filter_map(|group| {
                group.spawn.as_ref().map(|command| SpawnRule {
                    group: group.name.clone(),
                    command: command.clone(),
                    matches: group.matches.clone(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn is_floating(&self, window: &WindowInfo) -> bool {
        self.floating_layout.floats(window)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::{Action, LayoutCommand};

    pub fn minimal_descriptor() -> Descriptor {
        let defaults = WidgetDefaults {
            font: "sans".to_owned(),
            fontsize: 12,
            padding: 3,
            foreground: "#ffffff".to_owned(),
        };
        Descriptor {
            modkey: "mod4".to_owned(),
            terminal: "xterm".to_owned(),
            keys: vec![Key::new(&["mod4"], "h", vec![Action::Layout(LayoutCommand::Left)])],
            groups: vec![
                Group::new("1"),
                Group::new("2")
                    .spawn("firefox")
                    .matches(vec![Match::wm_class("firefox")]),
                Group::new("3").matches(vec![Match::wm_class("firefox")]),
            ],
            layouts: vec![
                Layout::new(LayoutKind::Max, LayoutTheme::default()),
                Layout::new(LayoutKind::MonadTall, LayoutTheme::default()),
            ],
            floating_layout: FloatingLayout::with_rules(LayoutTheme::default(), vec![]),
            screens: vec![],
            mouse: vec![],
            widget_defaults: defaults.clone(),
            extension_defaults: defaults,
            settings: Settings::default(),
            lifecycle: Lifecycle {
                autostart: PathBuf::from("/tmp/autostart.sh"),
                shutdown: vec!["true".to_owned()],
                theme: PathBuf::from("/tmp/theme.sh"),
            },
        }
    }

    #[test]
    fn minimal_descriptor_is_valid() {
        assert!(minimal_descriptor().validate().is_ok());
    }

    #[test]
    fn empty_layouts_are_rejected() {
        let mut descriptor = minimal_descriptor();
        descriptor.layouts.clear();
        assert!(matches!(descriptor.validate(), Err(TileError::NoLayouts)));
        assert!(descriptor.default_layout().is_none());
    }

    #[test]
    fn duplicate_group_names_are_rejected() {
        let mut descriptor = minimal_descriptor();
        descriptor.groups.push(Group::new("2"));
        assert!(matches!(
            descriptor.validate(),
            Err(TileError::DuplicateGroup(name)) if name == "2"
        ));
    }

    #[test]
    fn key_without_actions_is_rejected() {
        let mut descriptor = minimal_descriptor();
        descriptor.keys.push(Key::new(&["mod4"], "x", vec![]));
        assert!(matches!(
            descriptor.validate(),
            Err(TileError::EmptyKeyActions(chord)) if chord == "mod4+x"
        ));
    }

    #[test]
    fn first_matching_group_wins() {
        let descriptor = minimal_descriptor();
        let group = descriptor
            .group_for(&WindowInfo::with_class("firefox"))
            .unwrap();
        assert_eq!(group.name, "2");
        assert!(descriptor
            .group_for(&WindowInfo::with_class("kitty"))
            .is_none());
    }

    #[test]
    fn spawn_rules_follow_groups_with_spawn() {
        let rules = minimal_descriptor().spawn_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].group, "2");
        assert_eq!(rules[0].command, "firefox");
        assert_eq!(rules[0].matches, vec![Match::wm_class("firefox")]);
    }

    #[test]
    fn descriptor_round_trips_through_json() {
        let descriptor = minimal_descriptor();
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"mod\":\"mod4\""));
        let back: Descriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }
}
