use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Shift = 1;
        const Lock = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

/// Collapse a list of modifier names into a mask.
///
/// Unknown names contribute nothing; use [`into_mod`] to detect them.
#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    // NumLock state is never part of a chord
    mask.remove(ModMask::NumLock);
    mask
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key.to_ascii_lowercase().as_str() {
        "shift" => ModMask::Shift,
        "lock" => ModMask::Lock,
        "control" | "ctrl" => ModMask::Control,
        "mod1" | "alt" => ModMask::Alt,
        "mod2" => ModMask::NumLock,
        "mod3" => ModMask::Mod3,
        "mod4" | "super" => ModMask::Super,
        "mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

/// Whether `key` names a modifier understood by [`into_mod`].
#[must_use]
pub fn is_modifier(key: &str) -> bool {
    into_mod(key) != ModMask::Zero
}

impl fmt::Display for ModMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (ModMask::Super, "mod4"),
            (ModMask::Alt, "mod1"),
            (ModMask::Mod3, "mod3"),
            (ModMask::Mod5, "mod5"),
            (ModMask::Control, "control"),
            (ModMask::Shift, "shift"),
            (ModMask::Lock, "lock"),
        ]
        .iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}", names.join("+"))
    }
}

/// A pointer button as named in mouse bindings (`Button1` .. `Button5`).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Button {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    /// Scroll wheel up
    Button4,
    /// Scroll wheel down
    Button5,
}

impl FromStr for Button {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Button1" => Ok(Self::Button1),
            "Button2" => Ok(Self::Button2),
            "Button3" => Ok(Self::Button3),
            "Button4" => Ok(Self::Button4),
            "Button5" => Ok(Self::Button5),
            _ => Err(format!("Unknown button `{s}`")),
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
