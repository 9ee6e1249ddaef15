use crate::errors::Result;
use crate::Action;

/// The window manager process that consumes a descriptor.
///
/// The descriptor never drives windows itself; host primitives found in bindings are
/// handed over here and the host decides what they mean.
pub trait Host {
    /// Carry out a host primitive.
    ///
    /// # Errors
    ///
    /// Implementations report commands they cannot run.
    fn execute(&mut self, action: &Action) -> Result<()>;

    /// Ask the host to throw the current descriptor away and load a fresh one.
    ///
    /// # Errors
    ///
    /// Implementations report a reload request that could not be delivered.
    fn reload_config(&mut self) -> Result<()>;
}
