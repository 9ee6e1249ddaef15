use crate::Palette;
use tilerc_core::config::{
    FloatingLayout, Group, Layout, LayoutKind, LayoutTheme, Match, MouseBinding, Settings,
};
use tilerc_core::{Action, Button, Result, WindowCommand};

#[must_use]
pub fn groups() -> Vec<Group> {
    vec![
        Group::new("1").label("\u{e795}"),
        Group::new("2")
            .label("\u{f0239}")
            .spawn("firefox")
            .matches(vec![Match::wm_class("firefox")]),
        Group::new("3")
            .label("\u{f04d3}")
            .spawn("steam")
            .matches(vec![Match::wm_class("steam")]),
        Group::new("4").label("\u{f11b}"),
        Group::new("5")
            .label("\u{f066f}")
            .spawn("discord")
            .matches(vec![Match::wm_class("discord")]),
        Group::new("6")
            .label("\u{e69f}")
            .matches(vec![Match::WmClass(vec!["mpv".to_owned(), "ffplay".to_owned()])]),
    ]
}

/// Borders and gaps shared by the tiling and floating layouts.
///
/// # Errors
///
/// Fails when the palette has no `Inactive` or `Active` color.
pub fn layout_theme(palette: &Palette) -> Result<LayoutTheme> {
    Ok(LayoutTheme {
        margin: 10,
        border_on_single: false,
        border_width: 4,
        border_normal: palette.color("Inactive")?,
        border_focus: palette.color("Active")?,
    })
}

/// Max first, so it is what every group starts with.
#[must_use]
pub fn layouts(theme: &LayoutTheme) -> Vec<Layout> {
    let max = LayoutTheme {
        border_width: 0,
        margin: 10,
        ..theme.clone()
    };
    vec![
        Layout::new(LayoutKind::Max, max),
        Layout::new(LayoutKind::MonadTall, theme.clone()),
    ]
}

#[must_use]
pub fn floating_layout(theme: LayoutTheme) -> FloatingLayout {
    FloatingLayout::with_rules(
        theme,
        vec![
            // gitk
            Match::wm_class("confirmreset"),
            Match::wm_class("makebranch"),
            Match::wm_class("maketag"),
            Match::wm_class("ssh-askpass"),
            Match::title("branchdialog"),
            // GPG key password entry
            Match::title("pinentry"),
        ],
    )
}

/// Move and resize floating windows with the pointer.
#[must_use]
pub fn mouse(modkey: &str) -> Vec<MouseBinding> {
    let modifiers = vec![modkey.to_owned()];
    vec![
        MouseBinding::Drag {
            modifiers: modifiers.clone(),
            button: Button::Button1,
            action: Action::Window(WindowCommand::SetPositionFloating),
            start: Some(Action::Window(WindowCommand::GetPosition)),
        },
        MouseBinding::Drag {
            modifiers: modifiers.clone(),
            button: Button::Button3,
            action: Action::Window(WindowCommand::SetSizeFloating),
            start: Some(Action::Window(WindowCommand::GetSize)),
        },
        MouseBinding::Click {
            modifiers,
            button: Button::Button2,
            action: Action::Window(WindowCommand::BringToFront),
        },
    ]
}

#[must_use]
pub fn settings() -> Settings {
    Settings::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilerc_core::models::WindowInfo;

    #[test]
    fn floating_rules_extend_the_defaults() {
        let floating = floating_layout(LayoutTheme::default());
        let defaults = FloatingLayout::default_float_rules();
        assert_eq!(floating.float_rules.len(), defaults.len() + 6);
        assert_eq!(&floating.float_rules[..defaults.len()], &defaults[..]);
        assert_eq!(floating.float_rules.last(), Some(&Match::title("pinentry")));
        assert!(floating.floats(&WindowInfo::with_title("pinentry")));
    }

    #[test]
    fn max_comes_first_without_borders() {
        let theme = layout_theme(&Palette::default()).unwrap();
        let layouts = layouts(&theme);
        assert_eq!(layouts[0].kind, LayoutKind::Max);
        assert_eq!(layouts[0].theme.border_width, 0);
        assert_eq!(layouts[0].theme.margin, 10);
        assert_eq!(layouts[1].theme, theme);
    }

    #[test]
    fn theme_borders_come_from_the_palette() {
        let theme = layout_theme(&Palette::default()).unwrap();
        assert_eq!(theme.border_normal, "#45475a");
        assert_eq!(theme.border_focus, "#89b4fa");
        assert_eq!(theme.border_width, 4);
    }

    #[test]
    fn only_three_groups_launch_programs() {
        let spawned: Vec<_> = groups()
            .into_iter()
            .filter_map(|group| group.spawn)
            .collect();
        assert_eq!(spawned, vec!["firefox", "steam", "discord"]);
    }

    #[test]
    fn media_players_land_on_group_six() {
        let groups = groups();
        let mpv = WindowInfo::with_class("ffplay");
        let target = groups.iter().find(|group| group.accepts(&mpv)).unwrap();
        assert_eq!(target.name, "6");
    }

    #[test]
    fn drags_ask_for_the_start_state() {
        for binding in mouse("mod4") {
            assert_eq!(binding.modifiers(), ["mod4"]);
            if let MouseBinding::Drag { start, .. } = binding {
                assert!(start.is_some());
            }
        }
    }
}
