use super::WindowType;
use serde::{Deserialize, Serialize};

/// The properties of a new window that match rules look at.
///
/// The host fills this in; the descriptor never inspects a live window.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowInfo {
    /// Both halves of `WM_CLASS` (instance and class) in X11
    pub wm_class: Vec<String>,
    /// `_NET_WM_NAME`, falling back to `WM_NAME`
    pub title: Option<String>,
    pub wm_type: Option<WindowType>,
    pub fixed_size: bool,
    pub fixed_ratio: bool,
}

impl WindowInfo {
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            wm_class: vec![class.into()],
            ..Self::default()
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
