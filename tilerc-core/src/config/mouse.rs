use crate::utils::modmask_lookup::Button;
use crate::Action;
use serde::{Deserialize, Serialize};

/// A pointer gesture.
///
/// A drag asks the host for `start` when the button goes down and feeds the pointer
/// motion to `action` until release.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum MouseBinding {
    Drag {
        modifiers: Vec<String>,
        button: Button,
        action: Action,
        start: Option<Action>,
    },
    Click {
        modifiers: Vec<String>,
        button: Button,
        action: Action,
    },
}

impl MouseBinding {
    #[must_use]
    pub fn modifiers(&self) -> &[String] {
        match self {
            Self::Drag { modifiers, .. } | Self::Click { modifiers, .. } => modifiers,
        }
    }

    #[must_use]
    pub const fn button(&self) -> Button {
        match self {
            Self::Drag { button, .. } | Self::Click { button, .. } => *button,
        }
    }
}
