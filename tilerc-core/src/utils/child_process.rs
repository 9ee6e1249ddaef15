//! Spawns the helper programs a configuration calls out to, either detached or blocking.
use crate::errors::{Result, TileError};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::iter::{Extend, FromIterator};
use std::process::{Child, Command, ExitStatus, Stdio};

pub type ChildID = u32;

/// A struct managing children processes.
#[derive(Debug, Default)]
pub struct Children {
    inner: HashMap<ChildID, Child>,
}

impl Children {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
    /// Insert a `Child` in the `Children`.
    ///
    /// # Returns
    /// - `true` if `child` is a new child-process
    /// - `false` if `child` is already known
    pub fn insert(&mut self, child: Child) -> bool {
        self.inner.insert(child.id(), child).is_none()
    }

    /// Remove all children processes which finished
    pub fn remove_finished_children(&mut self) {
        self.inner
            .retain(|_, child| child.try_wait().map_or(true, |ret| ret.is_none()));
    }
}

impl FromIterator<Child> for Children {
    fn from_iter<T: IntoIterator<Item = Child>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().map(|child| (child.id(), child)).collect(),
        }
    }
}

impl Extend<Child> for Children {
    fn extend<T: IntoIterator<Item = Child>>(&mut self, iter: T) {
        self.inner
            .extend(iter.into_iter().map(|child| (child.id(), child)));
    }
}

fn command_from_argv<S: AsRef<OsStr>>(argv: &[S]) -> Result<(String, Command)> {
    let (program, args) = argv.split_first().ok_or(TileError::EmptyCommand)?;
    let mut command = Command::new(program);
    command.args(args);
    let name = AsRef::<OsStr>::as_ref(program).to_string_lossy().into_owned();
    Ok((name, command))
}

/// Starts `argv` without waiting for it. The child is tracked in `children` so it can be reaped.
///
/// # Errors
///
/// Fails when `argv` is empty or the program cannot be started (missing, not executable).
pub fn spawn_detached<S: AsRef<OsStr>>(argv: &[S], children: &mut Children) -> Result<ChildID> {
    let (program, mut command) = command_from_argv(argv)?;
    let child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| TileError::Spawn {
            program: program.clone(),
            source,
        })?;
    let pid = child.id();
    tracing::debug!("Started `{}` with pid {}", program, pid);
    children.insert(child);
    Ok(pid)
}

/// Runs `argv` and blocks until it exits. A non-zero exit is not an error.
///
/// # Errors
///
/// Fails when `argv` is empty or the program cannot be started.
pub fn run_blocking<S: AsRef<OsStr>>(argv: &[S]) -> Result<ExitStatus> {
    let (program, mut command) = command_from_argv(argv)?;
    let status = command
        .stdin(Stdio::null())
        .status()
        .map_err(|source| TileError::Spawn {
            program: program.clone(),
            source,
        })?;
    if !status.success() {
        tracing::warn!("`{}` exited with {}", program, status);
    }
    Ok(status)
}
