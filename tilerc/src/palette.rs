use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tilerc_core::{Result, TileError};

/// Named colors and the wallpaper of the active theme.
///
/// The theme script rewrites this file before asking for a reload, so every reload picks
/// up the next theme.
///
/// # Example
///
/// In `colors.ron`
///
/// ```ron
/// (
///     colors: {
///         "Background": "#1e1e2e",
///         "Foreground": "#cdd6f4",
///     },
///     wallpaper: Some("~/.config/wallpapers/current.png"),
/// )
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub colors: BTreeMap<String, String>,
    pub wallpaper: Option<PathBuf>,
}

impl Palette {
    /// Look up a semantic color name such as `Background`.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::MissingColor`] when the theme does not define `name`.
    pub fn color(&self, name: &str) -> Result<String> {
        self.colors
            .get(name)
            .cloned()
            .ok_or_else(|| TileError::MissingColor(name.to_owned()))
    }

    /// Replace `self` with the palette at `path`, keeping the current one when it cannot
    /// be read.
    pub fn load(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match load_palette_file(path) {
            Ok(palette) => *self = palette,
            Err(err) => {
                tracing::warn!("Could not load palette at path {}: {}", path.display(), err);
            }
        }
    }

    /// Wallpaper with `~` and environment variables expanded.
    #[must_use]
    pub fn wallpaper_path(&self) -> Option<PathBuf> {
        let wallpaper = self.wallpaper.as_ref()?;
        let raw = wallpaper.to_string_lossy();
        match shellexpand::full(&raw) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(err) => {
                tracing::warn!("Could not expand wallpaper path {}: {}", raw, err);
                Some(wallpaper.clone())
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            ("Background", "#1e1e2e"),
            ("Foreground", "#cdd6f4"),
            ("Active", "#89b4fa"),
            ("Inactive", "#45475a"),
            ("Black", "#45475a"),
            ("Red", "#f38ba8"),
            ("Green", "#a6e3a1"),
            ("Yellow", "#f9e2af"),
            ("Blue", "#89b4fa"),
            ("Magenta", "#f5c2e7"),
            ("Cyan", "#94e2d5"),
            ("White", "#bac2de"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect();
        Self {
            colors,
            wallpaper: None,
        }
    }
}

/// # Errors
///
/// Errors if the file cannot be read or parsed. RON is assumed unless the extension is `toml`.
pub fn load_palette_file(path: impl AsRef<Path>) -> Result<Palette> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    if path.extension() == Some(OsStr::new("toml")) {
        Ok(toml::from_str(&contents)?)
    } else {
        Ok(ron::from_str(&contents)?)
    }
}
