use crate::hooks;
use tilerc_core::config::{Chord, Lifecycle};
use tilerc_core::{Action, Callback, Descriptor, Host, Result};

/// Runs the actions of one binding in order. Host primitives go to the host, callbacks
/// run here.
///
/// # Errors
///
/// Stops at the first action that fails and returns its error.
pub fn invoke<H: Host + ?Sized>(
    actions: &[Action],
    host: &mut H,
    lifecycle: &Lifecycle,
) -> Result<()> {
    for action in actions {
        tracing::trace!("Invoking {}", action);
        match action {
            Action::Function(Callback::NextWallpaper) => hooks::next_wallpaper(lifecycle, host)?,
            primitive => host.execute(primitive)?,
        }
    }
    Ok(())
}

/// Looks up `chord` in the effective binding table and runs what it is bound to.
///
/// Returns `Ok(false)` for an unbound chord.
///
/// # Errors
///
/// Propagates the error of the first failing action.
pub fn press<H: Host + ?Sized>(
    descriptor: &Descriptor,
    chord: &Chord,
    host: &mut H,
) -> Result<bool> {
    let table = descriptor.binding_table();
    let Some(key) = table.lookup(chord) else {
        tracing::debug!("Nothing bound to {}", chord);
        return Ok(false);
    };
    invoke(&key.actions, host, &descriptor.lifecycle)?;
    Ok(true)
}
