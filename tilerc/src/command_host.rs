use tilerc_core::child_process::{self, Children};
use tilerc_core::{Action, Host, Result, TileError};

/// Reload request understood by a running qtile.
pub const QTILE_RELOAD: [&str; 6] = ["qtile", "cmd-obj", "-o", "cmd", "-f", "reload_config"];

/// A host driven from outside the window manager process.
///
/// It can start programs and ask the running window manager to reload; everything else
/// needs the window manager itself.
#[derive(Debug)]
pub struct CommandHost {
    reload: Vec<String>,
    pub children: Children,
}

impl Default for CommandHost {
    fn default() -> Self {
        Self::new(QTILE_RELOAD.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl CommandHost {
    #[must_use]
    pub fn new(reload: Vec<String>) -> Self {
        Self {
            reload,
            children: Children::new(),
        }
    }
}

impl Host for CommandHost {
    fn execute(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Spawn {
                command,
                shell: true,
            } => {
                let argv = ["sh", "-c", command.as_str()];
                child_process::spawn_detached(&argv, &mut self.children).map(|_| ())
            }
            Action::Spawn {
                command,
                shell: false,
            } => {
                let argv: Vec<&str> = command.split_whitespace().collect();
                child_process::spawn_detached(&argv, &mut self.children).map(|_| ())
            }
            Action::ReloadConfig => self.reload_config(),
            other => Err(TileError::Unsupported(other.to_string())),
        }
    }

    fn reload_config(&mut self) -> Result<()> {
        tracing::info!("Requesting a reload with `{}`", self.reload.join(" "));
        child_process::run_blocking(self.reload.as_slice()).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilerc_core::LayoutCommand;

    #[test]
    fn window_commands_need_the_window_manager() {
        let mut host = CommandHost::default();
        let result = host.execute(&Action::Layout(LayoutCommand::Left));
        assert!(matches!(result, Err(TileError::Unsupported(name)) if name == "layout.Left"));
    }

    #[test]
    fn spawn_splits_on_whitespace() {
        let mut host = CommandHost::new(vec!["true".to_owned()]);
        host.execute(&Action::spawn("sleep 0")).unwrap();
        assert_eq!(host.children.len(), 1);
        let missing = host.execute(&Action::spawn("tilerc-no-such-program --flag"));
        assert!(matches!(
            missing,
            Err(TileError::Spawn { program, .. }) if program == "tilerc-no-such-program"
        ));
    }

    #[test]
    fn shell_spawn_is_tracked() {
        let mut host = CommandHost::new(vec!["true".to_owned()]);
        host.execute(&Action::spawn_shell("true | true")).unwrap();
        assert_eq!(host.children.len(), 1);
    }

    #[test]
    fn empty_spawn_is_rejected() {
        let mut host = CommandHost::new(vec!["true".to_owned()]);
        assert!(matches!(
            host.execute(&Action::spawn("   ")),
            Err(TileError::EmptyCommand)
        ));
    }

    #[test]
    fn reload_runs_the_reload_command() {
        let mut host = CommandHost::new(vec!["true".to_owned()]);
        host.execute(&Action::ReloadConfig).unwrap();
        let mut broken = CommandHost::new(vec![]);
        assert!(matches!(broken.reload_config(), Err(TileError::EmptyCommand)));
    }
}
