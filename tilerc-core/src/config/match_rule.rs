use crate::models::{WindowInfo, WindowType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects windows by one of their properties.
///
/// Used both for assigning windows to groups and for deciding which windows float.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// matches: [WmClass(["mpv", "ffplay"]), Title("pinentry")]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match {
    /// Any of the listed names equals either half of `WM_CLASS`
    WmClass(Vec<String>),
    /// The window title equals the pattern
    Title(String),
    WmType(WindowType),
    /// Minimum and maximum size hints are equal
    FixedSize,
    /// Minimum and maximum aspect hints are equal
    FixedRatio,
}

impl Match {
    pub fn wm_class(class: impl Into<String>) -> Self {
        Self::WmClass(vec![class.into()])
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self::Title(title.into())
    }

    #[must_use]
    pub fn matches(&self, window: &WindowInfo) -> bool {
        match self {
            Self::WmClass(classes) => classes
                .iter()
                .any(|class| window.wm_class.iter().any(|c| c == class)),
            Self::Title(title) => window.title.as_deref() == Some(title.as_str()),
            Self::WmType(wm_type) => window.wm_type == Some(*wm_type),
            Self::FixedSize => window.fixed_size,
            Self::FixedRatio => window.fixed_ratio,
        }
    }

    /// A pattern is well formed when it can select something.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::WmClass(classes) => !classes.is_empty() && classes.iter().all(|c| !c.is_empty()),
            Self::Title(title) => !title.is_empty(),
            Self::WmType(_) | Self::FixedSize | Self::FixedRatio => true,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WmClass(classes) => write!(f, "wm_class={}", classes.join("|")),
            Self::Title(title) => write!(f, "title={title}"),
            Self::WmType(wm_type) => write!(f, "wm_type={wm_type:?}"),
            Self::FixedSize => write!(f, "fixed_size"),
            Self::FixedRatio => write!(f, "fixed_ratio"),
        }
    }
}
