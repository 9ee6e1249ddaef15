//! Lifecycle hooks: zero-argument callbacks the host fires at fixed moments.
use crate::errors::Result;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// The first completed startup of the host process. Not fired again on reload.
    StartupOnce,
    /// Every completed startup, including the ones that follow a reload.
    Startup,
    Shutdown,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartupOnce => write!(f, "startup_once"),
            Self::Startup => write!(f, "startup"),
            Self::Shutdown => write!(f, "shutdown"),
        }
    }
}

pub type HookFn = Box<dyn FnMut() -> Result<()>>;

/// Callbacks registered per lifecycle event.
#[derive(Default)]
pub struct Hooks {
    subscribers: HashMap<LifecycleEvent, Vec<HookFn>>,
    fired: HashSet<LifecycleEvent>,
}

impl Hooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` under `event`. Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, event: LifecycleEvent, callback: F)
    where
        F: FnMut() -> Result<()> + 'static,
    {
        self.subscribers
            .entry(event)
            .or_default()
            .push(Box::new(callback));
    }

    /// Run the callbacks of `event`.
    ///
    /// Returns `Ok(false)` when nothing ran, either because nobody subscribed or because a
    /// `StartupOnce` event was already fired.
    ///
    /// # Errors
    ///
    /// The first failing callback stops the dispatch and its error is returned as is.
    pub fn fire(&mut self, event: LifecycleEvent) -> Result<bool> {
        let Some(callbacks) = self.subscribers.get_mut(&event).filter(|c| !c.is_empty()) else {
            return Ok(false);
        };
        // Only a run with callbacks counts as fired
        if event == LifecycleEvent::StartupOnce && !self.fired.insert(event) {
            tracing::debug!("Hook {} already fired, skipping", event);
            return Ok(false);
        }
        tracing::debug!("Firing {} hook(s) for {}", callbacks.len(), event);
        for callback in callbacks.iter_mut() {
            callback()?;
        }
        Ok(true)
    }

    #[must_use]
    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.subscribers.get(&event).map_or(0, Vec::len)
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field(
                "subscribers",
                &self
                    .subscribers
                    .iter()
                    .map(|(event, callbacks)| (event, callbacks.len()))
                    .collect::<HashMap<_, _>>(),
            )
            .field("fired", &self.fired)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TileError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn callbacks_run_in_registration_order() {
        let log = Rc::new(RefCell::new(vec![]));
        let mut hooks = Hooks::new();
        for i in 0..3 {
            let log = log.clone();
            hooks.subscribe(LifecycleEvent::Startup, move || {
                log.borrow_mut().push(i);
                Ok(())
            });
        }
        assert!(hooks.fire(LifecycleEvent::Startup).unwrap());
        assert!(hooks.fire(LifecycleEvent::Startup).unwrap());
        assert_eq!(*log.borrow(), vec![0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn startup_once_fires_a_single_time() {
        let count = Rc::new(RefCell::new(0));
        let mut hooks = Hooks::new();
        let counter = count.clone();
        hooks.subscribe(LifecycleEvent::StartupOnce, move || {
            *counter.borrow_mut() += 1;
            Ok(())
        });
        assert!(hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert!(!hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn startup_once_waits_for_a_subscriber() {
        let count = Rc::new(RefCell::new(0));
        let mut hooks = Hooks::new();
        assert!(!hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        let counter = count.clone();
        hooks.subscribe(LifecycleEvent::StartupOnce, move || {
            *counter.borrow_mut() += 1;
            Ok(())
        });
        assert!(hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert!(!hooks.fire(LifecycleEvent::StartupOnce).unwrap());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn errors_propagate_and_stop_dispatch() {
        let ran = Rc::new(RefCell::new(false));
        let mut hooks = Hooks::new();
        hooks.subscribe(LifecycleEvent::Shutdown, || Err(TileError::EmptyCommand));
        let flag = ran.clone();
        hooks.subscribe(LifecycleEvent::Shutdown, move || {
            *flag.borrow_mut() = true;
            Ok(())
        });
        assert!(matches!(
            hooks.fire(LifecycleEvent::Shutdown),
            Err(TileError::EmptyCommand)
        ));
        assert!(!*ran.borrow());
    }

    #[test]
    fn unsubscribed_event_is_a_no_op() {
        let mut hooks = Hooks::new();
        assert!(!hooks.fire(LifecycleEvent::Shutdown).unwrap());
        assert_eq!(hooks.count(LifecycleEvent::Shutdown), 0);
    }
}
