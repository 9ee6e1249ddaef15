use serde::{Deserialize, Serialize};
use std::fmt;

/// Commands understood by the layout of the current group.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum LayoutCommand {
    Left,
    Right,
    Down,
    Up,
    Next,
    ShuffleLeft,
    ShuffleRight,
    ShuffleDown,
    ShuffleUp,
    GrowLeft,
    GrowRight,
    GrowDown,
    GrowUp,
    Grow,
    Shrink,
    GrowMain,
    ShrinkMain,
    Flip,
    Normalize,
    ToggleSplit,
}

/// Commands applied to the focused window.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub enum WindowCommand {
    Kill,
    ToggleMinimize,
    ToggleFullscreen,
    ToggleFloating,
    BringToFront,
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    ToGroup { group: String, switch_group: bool },
}

/// Functions implemented by the configuration itself rather than the host.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Callback {
    NextWallpaper,
}

/// One entry of a binding's action list.
///
/// Everything but [`Action::Function`] is a host primitive and is forwarded to
/// [`crate::Host::execute`] untouched.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Action {
    Layout(LayoutCommand),
    Window(WindowCommand),
    GroupToScreen(String),
    Spawn { command: String, shell: bool },
    SpawnCmd,
    NextLayout,
    ReloadConfig,
    Shutdown,
    Widget { widget: String, command: String },
    Function(Callback),
}

impl Action {
    /// Spawn `command`, split on whitespace by the host.
    pub fn spawn(command: impl Into<String>) -> Self {
        Self::Spawn {
            command: command.into(),
            shell: false,
        }
    }

    /// Spawn `command` through `sh -c`, for pipelines.
    pub fn spawn_shell(command: impl Into<String>) -> Self {
        Self::Spawn {
            command: command.into(),
            shell: true,
        }
    }

    #[must_use]
    pub const fn is_host_primitive(&self) -> bool {
        !matches!(self, Self::Function(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(cmd) => write!(f, "layout.{cmd:?}"),
            Self::Window(WindowCommand::ToGroup {
                group,
                switch_group,
            }) => write!(f, "window.ToGroup({group}, switch_group={switch_group})"),
            Self::Window(cmd) => write!(f, "window.{cmd:?}"),
            Self::GroupToScreen(group) => write!(f, "group[{group}].ToScreen"),
            Self::Spawn { command, shell } => {
                if *shell {
                    write!(f, "spawn(sh -c {command:?})")
                } else {
                    write!(f, "spawn({command:?})")
                }
            }
            Self::SpawnCmd => write!(f, "spawncmd"),
            Self::NextLayout => write!(f, "next_layout"),
            Self::ReloadConfig => write!(f, "reload_config"),
            Self::Shutdown => write!(f, "shutdown"),
            Self::Widget { widget, command } => write!(f, "widget[{widget}].{command}"),
            Self::Function(callback) => write!(f, "function.{callback:?}"),
        }
    }
}
