//! Descriptor schema for a tiling window manager configuration.
// We warn on clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod command;
pub mod config;
pub mod errors;
pub mod hooks;
mod host;
pub mod models;
pub mod utils;

pub use command::{Action, Callback, LayoutCommand, WindowCommand};
pub use config::Descriptor;
pub use errors::{Result, TileError};
pub use hooks::{Hooks, LifecycleEvent};
pub use host::Host;
pub use utils::child_process;
pub use utils::modmask_lookup::{Button, ModMask};
