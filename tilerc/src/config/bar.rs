use crate::Palette;
use std::collections::BTreeMap;
use tilerc_core::config::{Bar, Screen, VolumeCommands, WallpaperMode, Widget};
use tilerc_core::{Action, Button, Result};

fn volume_commands() -> VolumeCommands {
    VolumeCommands {
        volume_app: "pactl".to_owned(),
        get_volume_command: "pactl get-sink-volume @DEFAULT_SINK@".to_owned(),
        volume_down_command: "pactl set-sink-volume @DEFAULT_SINK@ -1%".to_owned(),
        volume_up_command: "pactl set-sink-volume @DEFAULT_SINK@ +1%".to_owned(),
        check_mute_command: "pactl get-sink-mute @DEFAULT_SINK@".to_owned(),
        check_mute_string: "yes".to_owned(),
        mute_command: "pactl set-sink-mute @DEFAULT_SINK@ 'toggle'".to_owned(),
    }
}

fn widgets(palette: &Palette) -> Result<Vec<Widget>> {
    let mut clock_callbacks = BTreeMap::new();
    clock_callbacks.insert(Button::Button1, Action::spawn("kitty -e calcurse"));

    Ok(vec![
        Widget::Spacer { length: Some(10) },
        Widget::CurrentLayoutIcon { scale: 0.5 },
        Widget::Cpu {
            format: "\u{f4bc}  {freq_current}GHz {load_percent}%".to_owned(),
        },
        Widget::Memory {
            measure_mem: "G".to_owned(),
            format: "\u{f2db}  {MemUsed:.1f} GiB".to_owned(),
        },
        Widget::Net {
            format: "{down:.0f}{down_suffix:<2} \u{2193}\u{2191} {up:.0f}{up_suffix:<2}".to_owned(),
        },
        Widget::Prompt,
        Widget::Spacer { length: None },
        Widget::GroupBox {
            highlight_method: "text".to_owned(),
            this_current_screen_border: palette.color("Foreground")?,
            active: palette.color("Active")?,
            inactive: palette.color("Inactive")?,
            urgent_alert_method: "text".to_owned(),
            urgent_text: palette.color("Magenta")?,
        },
        Widget::Spacer { length: None },
        Widget::Volume {
            fmt: "\u{f057e}  {}".to_owned(),
            commands: volume_commands(),
        },
        Widget::KeyboardLayout {
            configured_keyboards: vec!["us".to_owned(), "ru,us".to_owned()],
        },
        Widget::Clock {
            format: "\u{f017}  %-d %B, %R".to_owned(),
            mouse_callbacks: clock_callbacks,
        },
        Widget::Systray,
        Widget::Spacer { length: Some(15) },
    ])
}

/// A single screen with a translucent top bar over the theme's wallpaper.
///
/// # Errors
///
/// Fails when the palette lacks one of the colors the bar uses.
pub fn screens(palette: &Palette) -> Result<Vec<Screen>> {
    let top = Bar {
        widgets: widgets(palette)?,
        size: 32,
        background: palette.color("Background")?,
        opacity: 0.8,
        margin: 10,
    };
    Ok(vec![Screen {
        top: Some(top),
        bottom: None,
        wallpaper: palette.wallpaper_path(),
        wallpaper_mode: WallpaperMode::Fill,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn one_screen_with_a_top_bar() {
        let screens = screens(&Palette::default()).unwrap();
        assert_eq!(screens.len(), 1);
        let bar = screens[0].top.as_ref().unwrap();
        assert!(screens[0].bottom.is_none());
        assert_eq!(bar.size, 32);
        assert_eq!(bar.background, "#1e1e2e");
        assert!(bar.has_widget("keyboardlayout"));
        assert!(bar.has_widget("prompt"));
        assert_eq!(bar.widgets.first(), Some(&Widget::Spacer { length: Some(10) }));
        assert_eq!(bar.widgets.last(), Some(&Widget::Spacer { length: Some(15) }));
    }

    #[test]
    fn group_box_uses_palette_colors() {
        let screens = screens(&Palette::default()).unwrap();
        let bar = screens[0].top.as_ref().unwrap();
        let group_box = bar.widgets.iter().find(|w| w.name() == "groupbox").unwrap();
        assert_eq!(
            group_box.colors(),
            vec!["#cdd6f4", "#89b4fa", "#45475a", "#f5c2e7"]
        );
    }

    #[test]
    fn wallpaper_follows_the_palette() {
        let palette = Palette {
            wallpaper: Some(PathBuf::from("/srv/walls/forest.png")),
            ..Palette::default()
        };
        let screens = screens(&palette).unwrap();
        assert_eq!(
            screens[0].wallpaper,
            Some(PathBuf::from("/srv/walls/forest.png"))
        );
        assert_eq!(screens[0].wallpaper_mode, WallpaperMode::Fill);
    }

    #[test]
    fn missing_background_fails() {
        let mut palette = Palette::default();
        palette.colors.remove("Background");
        assert!(screens(&palette).is_err());
    }
}
