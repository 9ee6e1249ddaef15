use tilerc_core::config::{Group, Key};
use tilerc_core::{Action, Callback, LayoutCommand, WindowCommand};

fn layout(command: LayoutCommand) -> Action {
    Action::Layout(command)
}

fn window(command: WindowCommand) -> Action {
    Action::Window(command)
}

/// Global keyboard shortcuts, before the per-group ones.
#[must_use]
pub fn keys(modkey: &str, terminal: &str) -> Vec<Key> {
    let m = modkey;
    vec![
        // Switch between windows
        Key::new(&[m], "h", vec![layout(LayoutCommand::Left)]).desc("Move focus to left"),
        Key::new(&[m], "l", vec![layout(LayoutCommand::Right)]).desc("Move focus to right"),
        Key::new(&[m], "j", vec![layout(LayoutCommand::Down)]).desc("Move focus down"),
        Key::new(&[m], "k", vec![layout(LayoutCommand::Up)]).desc("Move focus up"),
        Key::new(&[m], "space", vec![layout(LayoutCommand::Next)])
            .desc("Move window focus to other window"),
        // Move windows between columns or up/down in the current stack
        Key::new(&[m, "shift"], "h", vec![layout(LayoutCommand::ShuffleLeft)])
            .desc("Move window to the left"),
        Key::new(&[m, "shift"], "l", vec![layout(LayoutCommand::ShuffleRight)])
            .desc("Move window to the right"),
        Key::new(&[m, "shift"], "j", vec![layout(LayoutCommand::ShuffleDown)])
            .desc("Move window down"),
        Key::new(&[m, "shift"], "k", vec![layout(LayoutCommand::ShuffleUp)])
            .desc("Move window up"),
        // Each grow binding carries the column command and its monad equivalent
        Key::new(
            &[m, "control"],
            "h",
            vec![
                layout(LayoutCommand::GrowLeft),
                layout(LayoutCommand::ShrinkMain),
            ],
        )
        .desc("Grow window to the left"),
        Key::new(
            &[m, "control"],
            "l",
            vec![
                layout(LayoutCommand::GrowRight),
                layout(LayoutCommand::GrowMain),
            ],
        )
        .desc("Grow window to the right"),
        Key::new(
            &[m, "control"],
            "j",
            vec![layout(LayoutCommand::GrowDown), layout(LayoutCommand::Shrink)],
        )
        .desc("Grow window down"),
        Key::new(
            &[m, "control"],
            "k",
            vec![layout(LayoutCommand::GrowUp), layout(LayoutCommand::Grow)],
        )
        .desc("Grow window up"),
        Key::new(&[m, "control"], "f", vec![layout(LayoutCommand::Flip)]).desc("Flip panels"),
        Key::new(&[m], "n", vec![layout(LayoutCommand::Normalize)])
            .desc("Reset all window sizes"),
        Key::new(&[m], "m", vec![window(WindowCommand::ToggleMinimize)])
            .desc("Toggle minimize"),
        Key::new(&[m, "shift"], "Return", vec![layout(LayoutCommand::ToggleSplit)])
            .desc("Toggle between split and unsplit sides of stack"),
        Key::new(&[m], "Return", vec![Action::spawn(terminal)]).desc("Launch terminal"),
        Key::new(&[m], "Tab", vec![Action::NextLayout]).desc("Toggle between layouts"),
        Key::new(&[m], "w", vec![window(WindowCommand::Kill)]).desc("Kill focused window"),
        Key::new(&[m], "f", vec![window(WindowCommand::ToggleFullscreen)])
            .desc("Toggle fullscreen on the focused window"),
        Key::new(&[m], "t", vec![window(WindowCommand::ToggleFloating)])
            .desc("Toggle floating on the focused window"),
        Key::new(&[m, "control"], "r", vec![Action::ReloadConfig]).desc("Reload the config"),
        Key::new(&[m, "control"], "q", vec![Action::Shutdown]).desc("Shutdown Qtile"),
        Key::new(&[m], "r", vec![Action::SpawnCmd])
            .desc("Spawn a command using a prompt widget"),
        Key::new(
            &["mod1"],
            "Shift_L",
            vec![Action::Widget {
                widget: "keyboardlayout".to_owned(),
                command: "next_keyboard".to_owned(),
            }],
        )
        .desc("Next keyboard layout"),
        // PulseAudio
        Key::new(
            &[],
            "XF86AudioMute",
            vec![Action::spawn("pactl set-sink-mute @DEFAULT_SINK@ toggle")],
        ),
        Key::new(
            &[],
            "XF86AudioLowerVolume",
            vec![Action::spawn("pactl set-sink-volume @DEFAULT_SINK@ -5%")],
        ),
        Key::new(
            &[],
            "XF86AudioRaiseVolume",
            vec![Action::spawn("pactl set-sink-volume @DEFAULT_SINK@ +5%")],
        ),
        Key::new(
            &[m, "control"],
            "n",
            vec![Action::Function(Callback::NextWallpaper)],
        )
        .desc("Sets the next theme"),
        Key::new(
            &[m, "shift"],
            "s",
            vec![Action::spawn_shell(
                "maim -s | xclip -selection clipboard -t image/png",
            )],
        )
        .desc("Screenshot of the screen area"),
        Key::new(
            &[],
            "Print",
            vec![Action::spawn_shell(
                "maim | xclip -selection clipboard -t image/png",
            )],
        )
        .desc("Screenshot"),
    ]
}

/// mod+<group> shows the group, mod+shift+<group> sends the focused window there and follows it.
#[must_use]
pub fn group_keys(modkey: &str, groups: &[Group]) -> Vec<Key> {
    groups
        .iter()
        .flat_map(|group| {
            let name = &group.name;
            [
                Key::new(
                    &[modkey],
                    name.as_str(),
                    vec![Action::GroupToScreen(name.clone())],
                )
                .desc(format!("Switch to group {name}")),
                Key::new(
                    &[modkey, "shift"],
                    name.as_str(),
                    vec![Action::Window(WindowCommand::ToGroup {
                        group: name.clone(),
                        switch_group: true,
                    })],
                )
                .desc(format!("Switch to & move focused window to group {name}")),
            ]
        })
        .collect()
}
