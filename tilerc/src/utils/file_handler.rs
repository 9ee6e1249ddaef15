use clap::ValueEnum;
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::Path,
};
use tilerc_core::{Descriptor, Result};

const COMMENT_HEADER: &str = r"// Tiling window manager configuration.
// Generated by `tilerc dump`: edit the configuration sources instead and dump again.

";

/// The serialization formats a descriptor can be read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Ron,
    Toml,
    Json,
}

impl Format {
    /// Guess the format from the file extension, defaulting to RON.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

/// # Errors
///
/// Errors if the file cannot be read or does not hold a descriptor in the format its
/// extension names.
pub fn load_descriptor(path: impl AsRef<Path>) -> Result<Descriptor> {
    let path = path.as_ref();
    tracing::debug!("Loading descriptor from {}", path.display());
    let contents = fs::read_to_string(path)?;
    from_str(&contents, Format::from_path(path))
}

/// # Errors
///
/// Errors if `contents` is not a valid descriptor in `format`.
pub fn from_str(contents: &str, format: Format) -> Result<Descriptor> {
    match format {
        Format::Ron => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(contents)?)
        }
        Format::Toml => Ok(toml::from_str(contents)?),
        Format::Json => Ok(serde_json::from_str(contents)?),
    }
}

/// # Errors
///
/// Errors if the descriptor cannot be represented in `format`.
pub fn to_string(descriptor: &Descriptor, format: Format) -> Result<String> {
    match format {
        Format::Ron => {
            let ron_pretty_conf = PrettyConfig::new()
                .depth_limit(4)
                .extensions(Extensions::IMPLICIT_SOME);
            let ron = to_string_pretty(descriptor, ron_pretty_conf)?;
            Ok(String::from(COMMENT_HEADER) + &ron)
        }
        Format::Toml => Ok(toml::to_string_pretty(descriptor)?),
        Format::Json => Ok(serde_json::to_string_pretty(descriptor)?),
    }
}

/// # Errors
///
/// This function errors when:
/// - serialization of the descriptor fails
/// - writing to file fails
pub fn write_to_file(path: &Path, descriptor: &Descriptor, format: Format) -> Result<()> {
    let contents = to_string(descriptor, format)?;
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    tracing::info!("Wrote descriptor to {}", path.display());
    Ok(())
}
