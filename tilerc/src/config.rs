//! The concrete configuration: which keys, groups, layouts and bar this setup uses.

mod bar;
pub mod checks;
mod default;
mod keybind;

pub use bar::screens;
pub use default::{floating_layout, groups, layout_theme, layouts, mouse, settings};
pub use keybind::{group_keys, keys};

use crate::Palette;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tilerc_core::config::{Lifecycle, WidgetDefaults};
use tilerc_core::{Descriptor, Result};
use xdg::BaseDirectories;

/// Primary modifier: the super key.
pub const MODKEY: &str = "mod4";

/// Terminates the display server when the window manager shuts down.
pub const SHUTDOWN_COMMAND: [&str; 2] = ["killall", "Xorg"];

/// Files the configuration reads or runs, all relative to one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$XDG_CONFIG_HOME/qtile`, usually `~/.config/qtile`.
    ///
    /// # Errors
    ///
    /// Fails when the XDG base directories cannot be determined.
    pub fn discover() -> Result<Self> {
        let base = BaseDirectories::with_prefix("qtile")?;
        Ok(Self::new(base.get_config_home()))
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn autostart(&self) -> PathBuf {
        self.dir.join("autostart.sh")
    }

    #[must_use]
    pub fn theme_script(&self) -> PathBuf {
        self.dir.join("theme.sh")
    }

    /// `colors.ron`, or `colors.toml` when only that one exists.
    #[must_use]
    pub fn palette_file(&self) -> PathBuf {
        let ron = self.dir.join("colors.ron");
        let toml = self.dir.join("colors.toml");
        if !ron.exists() && toml.exists() {
            return toml;
        }
        ron
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle {
            autostart: self.autostart(),
            shutdown: SHUTDOWN_COMMAND.iter().map(|s| (*s).to_owned()).collect(),
            theme: self.theme_script(),
        }
    }
}

/// Values computed once when the configuration is loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: ConfigPaths,
    pub palette: Palette,
    pub modkey: String,
    pub terminal: String,
}

impl Config {
    pub fn new(paths: ConfigPaths, palette: Palette, terminal: impl Into<String>) -> Self {
        Self {
            paths,
            palette,
            modkey: MODKEY.to_owned(),
            terminal: terminal.into(),
        }
    }

    /// Reads the palette from `paths` and picks a terminal from `PATH`.
    #[must_use]
    pub fn load(paths: ConfigPaths) -> Self {
        tracing::debug!("Loading configuration from {}", paths.dir().display());
        let mut palette = Palette::default();
        let palette_file = paths.palette_file();
        if palette_file.exists() {
            palette.load(&palette_file);
        } else {
            tracing::warn!(
                "No palette at {}, using the built-in colors",
                palette_file.display()
            );
        }
        Self::new(paths, palette, guess_terminal())
    }

    /// Assemble the descriptor handed to the host.
    ///
    /// # Errors
    ///
    /// Fails when the palette lacks a color the configuration refers to.
    pub fn build(&self) -> Result<Descriptor> {
        let groups = groups();
        let mut keys = keys(&self.modkey, &self.terminal);
        keys.extend(group_keys(&self.modkey, &groups));
        let theme = layout_theme(&self.palette)?;
        let defaults = widget_defaults(&self.palette)?;

        let descriptor = Descriptor {
            modkey: self.modkey.clone(),
            terminal: self.terminal.clone(),
            keys,
            groups,
            layouts: layouts(&theme),
            floating_layout: floating_layout(theme),
            screens: screens(&self.palette)?,
            mouse: mouse(&self.modkey),
            extension_defaults: defaults.clone(),
            widget_defaults: defaults,
            settings: settings(),
            lifecycle: self.paths.lifecycle(),
        };
        descriptor.validate()?;
        Ok(descriptor)
    }
}

/// # Errors
///
/// Fails when the palette has no `Foreground`.
pub fn widget_defaults(palette: &Palette) -> Result<WidgetDefaults> {
    Ok(WidgetDefaults {
        font: "Noto Nerd Font".to_owned(),
        fontsize: 16,
        padding: 10,
        foreground: palette.color("Foreground")?,
    })
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .is_ok_and(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
}

/// Whether `program` can be run. A name with a `/` is taken as a path, anything else is
/// looked up on `PATH`.
#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if program.contains('/') {
        return is_executable(Path::new(program));
    }
    env::var_os("PATH").is_some_and(|path| {
        env::split_paths(&path).any(|dir| is_executable(&dir.join(program)))
    })
}

/// Returns the terminal launched by mod+Return.
///
/// `$TERMINAL` wins when it is installed, then the first known terminal on `PATH`.
#[must_use]
pub fn guess_terminal() -> String {
    pick_terminal(env::var("TERMINAL").ok().as_deref())
}

fn pick_terminal(preferred: Option<&str>) -> String {
    if let Some(preferred) = preferred.filter(|p| !p.is_empty()) {
        if is_program_in_path(preferred) {
            return preferred.to_owned();
        }
        tracing::debug!("$TERMINAL `{}` is not runnable, guessing", preferred);
    }
    let terms = &[
        "roxterm",
        "sakura",
        "hyper",
        "alacritty",
        "terminator",
        "termite",
        "gnome-terminal",
        "konsole",
        "xfce4-terminal",
        "lxterminal",
        "mate-terminal",
        "kitty",
        "yakuake",
        "tilix",
        "guake",
        "terminology",
        "st",
        "qterminal",
        "urxvt",
        "xterm",
        "x-terminal-emulator",
    ];

    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .map_or_else(
            || {
                tracing::warn!("No known terminal found in PATH, falling back to xterm");
                "xterm".to_owned()
            },
            |terminal| (*terminal).to_owned(),
        )
}
