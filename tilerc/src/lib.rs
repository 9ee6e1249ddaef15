#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod command_host;
pub mod config;
pub mod dispatch;
pub mod hooks;
mod palette;
pub mod utils;

pub use command_host::{CommandHost, QTILE_RELOAD};
pub use config::{is_program_in_path, Config, ConfigPaths};
pub use palette::{load_palette_file, Palette};
