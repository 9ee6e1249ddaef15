use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` of a window, lowercased the way match rules spell it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Notification,
    Normal,
}
