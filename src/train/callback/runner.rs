//! Callback runner for dispatching lifecycle events to multiple callbacks

use super::args::HookArgs;
use super::event::TrainingEvent;
use super::traits::Callback;
use crate::error::Result;

/// Ordered list of callbacks invoked for every lifecycle event
///
/// Callbacks run in registration order. The first handler error stops the
/// dispatch and is returned as-is; callbacks after it are not invoked for
/// that event.
pub struct CallbackRunner<T: ?Sized> {
    callbacks: Vec<Box<dyn Callback<T>>>,
}

impl<T: ?Sized> CallbackRunner<T> {
    /// Create an empty runner
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Create a runner from already boxed callbacks, keeping their order
    pub fn from_callbacks(callbacks: Vec<Box<dyn Callback<T>>>) -> Self {
        Self { callbacks }
    }

    /// Add a callback at the end of the list
    pub fn add<C: Callback<T> + 'static>(&mut self, callback: C) {
        self.push(Box::new(callback));
    }

    /// Add an already boxed callback at the end of the list
    pub fn push(&mut self, callback: Box<dyn Callback<T>>) {
        log::debug!(
            "registered callback {} at position {}",
            callback.name(),
            self.callbacks.len()
        );
        self.callbacks.push(callback);
    }

    /// Builder-style [`add`](Self::add)
    pub fn with<C: Callback<T> + 'static>(mut self, callback: C) -> Self {
        self.add(callback);
        self
    }

    /// Check if no callbacks are registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Get number of callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Callback names in invocation order
    pub fn names(&self) -> Vec<&'static str> {
        self.callbacks.iter().map(|cb| cb.name()).collect()
    }

    /// Fire `event` on every callback, in order
    pub fn dispatch(&mut self, event: TrainingEvent, trainer: &mut T, args: &HookArgs) -> Result<()> {
        log::trace!(
            "dispatching {} to {} callback(s)",
            event.hook_name(),
            self.callbacks.len()
        );
        for cb in &mut self.callbacks {
            cb.handle(event, trainer, args)?;
        }
        Ok(())
    }

    /// Fire `event` with no auxiliary arguments
    pub fn fire(&mut self, event: TrainingEvent, trainer: &mut T) -> Result<()> {
        self.dispatch(event, trainer, &HookArgs::new())
    }
}

impl<T: ?Sized> Default for CallbackRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> std::fmt::Debug for CallbackRunner<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRunner")
            .field("callbacks", &self.names())
            .finish()
    }
}
