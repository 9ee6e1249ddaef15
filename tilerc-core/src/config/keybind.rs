use crate::utils::modmask_lookup::{into_modmask, ModMask};
use crate::Action;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One keyboard shortcut: a chord bound to an ordered list of actions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub modifiers: Vec<String>,
    pub key: String,
    pub actions: Vec<Action>,
    pub desc: Option<String>,
}

impl Key {
    pub fn new(modifiers: &[&str], key: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            modifiers: modifiers.iter().map(|m| (*m).to_owned()).collect(),
            key: key.into(),
            actions,
            desc: None,
        }
    }

    #[must_use]
    pub fn desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    #[must_use]
    pub fn chord(&self) -> Chord {
        Chord {
            modifiers: into_modmask(&self.modifiers),
            key: self.key.clone(),
        }
    }
}

/// A modifier set plus one key symbol. Modifier order is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord {
    pub modifiers: ModMask,
    pub key: String,
}

impl Chord {
    pub fn new(modifiers: &[&str], key: impl Into<String>) -> Self {
        let modifiers: Vec<String> = modifiers.iter().map(|m| (*m).to_owned()).collect();
        Self {
            modifiers: into_modmask(&modifiers),
            key: key.into(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// The bindings a host ends up with after reading `keys` in order.
///
/// A chord that appears twice resolves to the later entry; the earlier one is kept
/// around only so it can be reported.
#[derive(Debug)]
pub struct BindingTable<'a> {
    effective: HashMap<Chord, &'a Key>,
    shadowed: Vec<(&'a Key, &'a Key)>,
}

impl<'a> BindingTable<'a> {
    #[must_use]
    pub fn new(keys: &'a [Key]) -> Self {
        let mut effective = HashMap::with_capacity(keys.len());
        let mut shadowed = vec![];
        for key in keys {
            if let Some(previous) = effective.insert(key.chord(), key) {
                tracing::debug!("{} shadows an earlier binding", key.chord());
                shadowed.push((previous, key));
            }
        }
        Self {
            effective,
            shadowed,
        }
    }

    #[must_use]
    pub fn lookup(&self, chord: &Chord) -> Option<&'a Key> {
        self.effective.get(chord).copied()
    }

    /// Pairs of `(shadowed, winner)` in the order the duplicates were found.
    #[must_use]
    pub fn shadowed(&self) -> &[(&'a Key, &'a Key)] {
        &self.shadowed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.effective.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effective.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutCommand;

    #[test]
    fn later_duplicate_wins() {
        let keys = vec![
            Key::new(&["mod4"], "h", vec![Action::Layout(LayoutCommand::Left)]),
            Key::new(&["mod4"], "j", vec![Action::Layout(LayoutCommand::Down)]),
            Key::new(&["mod4"], "h", vec![Action::NextLayout]),
        ];
        let table = BindingTable::new(&keys);
        assert_eq!(table.len(), 2);
        let bound = table.lookup(&Chord::new(&["mod4"], "h")).unwrap();
        assert_eq!(bound.actions, vec![Action::NextLayout]);
        assert_eq!(table.shadowed().len(), 1);
        assert_eq!(table.shadowed()[0].0.actions, vec![Action::Layout(LayoutCommand::Left)]);
    }

    #[test]
    fn modifier_order_is_one_chord() {
        let keys = vec![
            Key::new(&["mod4", "shift"], "h", vec![Action::NextLayout]),
            Key::new(&["shift", "mod4"], "h", vec![Action::SpawnCmd]),
        ];
        let table = BindingTable::new(&keys);
        assert_eq!(table.len(), 1);
        assert_eq!(table.shadowed().len(), 1);
    }

    #[test]
    fn same_key_with_other_modifiers_is_distinct() {
        let keys = vec![
            Key::new(&["mod4"], "Return", vec![Action::spawn("kitty")]),
            Key::new(&["mod4", "shift"], "Return", vec![Action::Layout(LayoutCommand::ToggleSplit)]),
            Key::new(&[], "Return", vec![Action::NextLayout]),
        ];
        let table = BindingTable::new(&keys);
        assert_eq!(table.len(), 3);
        assert!(table.shadowed().is_empty());
    }

    #[test]
    fn chord_display() {
        assert_eq!(Chord::new(&["mod4", "control"], "r").to_string(), "mod4+control+r");
        assert_eq!(Chord::new(&[], "Print").to_string(), "Print");
    }
}
