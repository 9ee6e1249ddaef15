use serde::{Deserialize, Serialize};

/// Whether clicking a window raises it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum BringFrontClick {
    Enabled(bool),
    FloatingOnly(FloatingOnly),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FloatingOnly {
    FloatingOnly,
}

/// What to do when a client asks for focus.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnWindowActivation {
    Focus,
    #[default]
    Smart,
    Urgent,
    Never,
}

/// Scalar toggles the host reads verbatim.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<String>,
    pub follow_mouse_focus: bool,
    pub bring_front_click: BringFrontClick,
    pub floats_kept_above: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnWindowActivation,
    pub reconfigure_screens: bool,
    /// Let clients such as games minimize themselves when they lose focus
    pub auto_minimize: bool,
    pub wl_input_rules: Option<Vec<String>>,
    /// Reported to legacy toolkits as the WM name
    pub wmname: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dgroups_key_binder: None,
            dgroups_app_rules: vec![],
            follow_mouse_focus: true,
            bring_front_click: BringFrontClick::Enabled(false),
            floats_kept_above: true,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnWindowActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wl_input_rules: None,
            // Java toolkits only behave with window managers on their allow list
            wmname: "LG3D".to_owned(),
        }
    }
}
