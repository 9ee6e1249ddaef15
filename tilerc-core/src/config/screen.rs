use crate::utils::modmask_lookup::Button;
use crate::Action;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Font and color defaults applied to every widget that does not override them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub foreground: String,
}

/// Commands the volume widget shells out to. Fixed templates, nothing is substituted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VolumeCommands {
    pub volume_app: String,
    pub get_volume_command: String,
    pub volume_down_command: String,
    pub volume_up_command: String,
    pub check_mute_command: String,
    pub check_mute_string: String,
    pub mute_command: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Widget {
    Spacer {
        length: Option<u32>,
    },
    CurrentLayoutIcon {
        scale: f32,
    },
    Cpu {
        format: String,
    },
    Memory {
        measure_mem: String,
        format: String,
    },
    Net {
        format: String,
    },
    Prompt,
    GroupBox {
        highlight_method: String,
        this_current_screen_border: String,
        active: String,
        inactive: String,
        urgent_alert_method: String,
        urgent_text: String,
    },
    Volume {
        fmt: String,
        commands: VolumeCommands,
    },
    KeyboardLayout {
        configured_keyboards: Vec<String>,
    },
    Clock {
        format: String,
        mouse_callbacks: BTreeMap<Button, Action>,
    },
    Systray,
}

impl Widget {
    /// Name a key binding uses to address the widget, e.g. `keyboardlayout`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Spacer { .. } => "spacer",
            Self::CurrentLayoutIcon { .. } => "currentlayouticon",
            Self::Cpu { .. } => "cpu",
            Self::Memory { .. } => "memory",
            Self::Net { .. } => "net",
            Self::Prompt => "prompt",
            Self::GroupBox { .. } => "groupbox",
            Self::Volume { .. } => "volume",
            Self::KeyboardLayout { .. } => "keyboardlayout",
            Self::Clock { .. } => "clock",
            Self::Systray => "systray",
        }
    }

    /// Every color the widget refers to.
    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        match self {
            Self::GroupBox {
                this_current_screen_border,
                active,
                inactive,
                urgent_text,
                ..
            } => vec![
                this_current_screen_border.as_str(),
                active.as_str(),
                inactive.as_str(),
                urgent_text.as_str(),
            ],
            _ => vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub widgets: Vec<Widget>,
    pub size: u32,
    pub background: String,
    pub opacity: f32,
    pub margin: u32,
}

impl Bar {
    /// Whether a widget addressed by `name` is on this bar.
    #[must_use]
    pub fn has_widget(&self, name: &str) -> bool {
        self.widgets.iter().any(|w| w.name() == name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    #[default]
    Fill,
    Stretch,
    Center,
}

/// Bars and background of one physical display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub top: Option<Bar>,
    pub bottom: Option<Bar>,
    pub wallpaper: Option<PathBuf>,
    pub wallpaper_mode: WallpaperMode,
}

impl Screen {
    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.top.iter().chain(self.bottom.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(widgets: Vec<Widget>) -> Bar {
        Bar {
            widgets,
            size: 24,
            background: "#000000".to_owned(),
            opacity: 1.0,
            margin: 0,
        }
    }

    #[test]
    fn widgets_are_found_by_name() {
        let bar = bar(vec![
            Widget::Prompt,
            Widget::KeyboardLayout {
                configured_keyboards: vec!["us".to_owned()],
            },
        ]);
        assert!(bar.has_widget("keyboardlayout"));
        assert!(!bar.has_widget("systray"));
    }

    #[test]
    fn screen_iterates_its_bars() {
        let screen = Screen {
            top: Some(bar(vec![])),
            bottom: None,
            wallpaper: None,
            wallpaper_mode: WallpaperMode::Fill,
        };
        assert_eq!(screen.bars().count(), 1);
    }
}
