//! The side effects of the configuration: autostart, shutdown and theme cycling.
use std::cell::RefCell;
use std::ffi::OsStr;
use std::process::ExitStatus;
use std::rc::Rc;
use tilerc_core::child_process::{self, ChildID, Children};
use tilerc_core::config::Lifecycle;
use tilerc_core::{Host, Hooks, LifecycleEvent, Result};

/// Starts the autostart script without waiting for it.
///
/// # Errors
///
/// Fails when the script is missing or not executable.
pub fn start_once(lifecycle: &Lifecycle, children: &mut Children) -> Result<ChildID> {
    tracing::info!("Running autostart script {}", lifecycle.autostart.display());
    child_process::spawn_detached(&[lifecycle.autostart.as_os_str()], children)
}

/// Takes the display server down with the window manager. Blocks until the command exits.
///
/// # Errors
///
/// Fails when the command cannot be started. A non-zero exit is only logged.
pub fn shutdown(lifecycle: &Lifecycle) -> Result<ExitStatus> {
    tracing::info!("Running shutdown command `{}`", lifecycle.shutdown.join(" "));
    child_process::run_blocking(lifecycle.shutdown.as_slice())
}

/// Asks the theme script for the next theme, then has the host reload the configuration
/// so the new palette and wallpaper are read.
///
/// The script's exit status is not inspected: the reload happens even when it fails.
///
/// # Errors
///
/// When the script cannot be started its error is returned and no reload is requested.
pub fn next_wallpaper<H: Host + ?Sized>(lifecycle: &Lifecycle, host: &mut H) -> Result<()> {
    tracing::debug!("Switching theme with {}", lifecycle.theme.display());
    child_process::run_blocking(&[lifecycle.theme.as_os_str(), OsStr::new("-n")])?;
    host.reload_config()
}

/// Subscribes the autostart and shutdown hooks.
pub fn register(hooks: &mut Hooks, lifecycle: &Lifecycle, children: Rc<RefCell<Children>>) {
    let startup = lifecycle.clone();
    hooks.subscribe(LifecycleEvent::StartupOnce, move || {
        start_once(&startup, &mut children.borrow_mut()).map(|_| ())
    });
    let exit = lifecycle.clone();
    hooks.subscribe(LifecycleEvent::Shutdown, move || shutdown(&exit).map(|_| ()));
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tilerc_core::{Action, TileError};

    /// Records what it is asked to do. `marker` must exist whenever a reload comes in.
    #[derive(Default)]
    pub struct RecordingHost {
        pub executed: Vec<Action>,
        pub reloads: usize,
        pub marker: Option<PathBuf>,
    }

    impl Host for RecordingHost {
        fn execute(&mut self, action: &Action) -> Result<()> {
            self.executed.push(action.clone());
            Ok(())
        }

        fn reload_config(&mut self) -> Result<()> {
            if let Some(marker) = &self.marker {
                assert!(marker.exists(), "reload requested before the theme script ran");
            }
            self.reloads += 1;
            Ok(())
        }
    }

    pub fn script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn lifecycle(dir: &Path) -> Lifecycle {
        Lifecycle {
            autostart: dir.join("autostart.sh"),
            shutdown: vec!["true".to_owned()],
            theme: dir.join("theme.sh"),
        }
    }

    #[test]
    fn failing_theme_script_still_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut lifecycle = lifecycle(dir.path());
        lifecycle.theme = PathBuf::from("false");
        let mut host = RecordingHost::default();
        next_wallpaper(&lifecycle, &mut host).unwrap();
        assert_eq!(host.reloads, 1);
    }

    #[test]
    fn reload_waits_for_the_theme_script() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("next");
        script(
            dir.path(),
            "theme.sh",
            &format!("sleep 0.2\n[ \"$1\" = \"-n\" ] && touch {}", marker.display()),
        );
        let mut host = RecordingHost {
            marker: Some(marker.clone()),
            ..RecordingHost::default()
        };
        next_wallpaper(&lifecycle(dir.path()), &mut host).unwrap();
        assert_eq!(host.reloads, 1);
    }

    #[test]
    fn missing_theme_script_does_not_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut host = RecordingHost::default();
        let result = next_wallpaper(&lifecycle(dir.path()), &mut host);
        assert!(matches!(result, Err(TileError::Spawn { .. })));
        assert_eq!(host.reloads, 0);
    }

    #[test]
    fn missing_autostart_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut children = Children::new();
        assert!(start_once(&lifecycle(dir.path()), &mut children).is_err());
        assert!(children.is_empty());
    }

    #[test]
    fn registered_startup_runs_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let mut lifecycle = lifecycle(dir.path());
        lifecycle.autostart = PathBuf::from("true");
        let children = Rc::new(RefCell::new(Children::new()));
        let mut hooks = Hooks::new();
        register(&mut hooks, &lifecycle, children.clone());
        assert!(hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert!(!hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert_eq!(children.borrow().len(), 1);
        assert!(hooks.fire(LifecycleEvent::Shutdown).unwrap());
    }
}
