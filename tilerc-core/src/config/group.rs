use super::Match;
use crate::models::WindowInfo;
use serde::{Deserialize, Serialize};

/// A virtual workspace.
///
/// When `spawn` is set the host launches it the first time the group is shown while empty;
/// `matches` decide which new windows are sent here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub label: Option<String>,
    pub spawn: Option<String>,
    #[serde(default)]
    pub matches: Vec<Match>,
    pub layout: Option<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            spawn: None,
            matches: vec![],
            layout: None,
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn spawn(mut self, command: impl Into<String>) -> Self {
        self.spawn = Some(command.into());
        self
    }

    #[must_use]
    pub fn matches(mut self, rules: Vec<Match>) -> Self {
        self.matches = rules;
        self
    }

    /// Text shown in the group box, the name when no label is set.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn accepts(&self, window: &WindowInfo) -> bool {
        self.matches.iter().any(|rule| rule.matches(window))
    }
}

/// The launch action registered for a group with a `spawn` command.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpawnRule {
    pub group: String,
    pub command: String,
    pub matches: Vec<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_name() {
        assert_eq!(Group::new("4").display_label(), "4");
        assert_eq!(Group::new("2").label("web").display_label(), "web");
    }

    #[test]
    fn group_without_rules_accepts_nothing() {
        assert!(!Group::new("1").accepts(&WindowInfo::with_class("firefox")));
    }
}
