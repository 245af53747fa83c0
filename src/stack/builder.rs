// SPDX-License-Identifier: FSL-1.1
use crate::{stack::VecStack, Error, Stack};
use log::debug;

/// Builder type for constructing [`VecStack`] instances
#[derive(Debug)]
pub struct Builder<V> {
    capacity: Option<usize>,
    values: Vec<V>,
}

impl<V> Default for Builder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Builder<V> {
    /// create a new builder
    pub fn new() -> Self {
        Self {
            capacity: None,
            values: Vec::default(),
        }
    }

    /// Pre-allocates room for at least `capacity` values. This is not a limit,
    /// the stack still grows past it.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Seeds the stack with values, pushed in iteration order so the last one
    /// ends up on top
    pub fn with_values(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.values.extend(values);
        self
    }

    /// Tries to build the [`VecStack`] from the builder configuration. No
    /// configuration can fail today, so this always returns `Ok`.
    pub fn try_build(self) -> Result<VecStack<V>, Error> {
        let capacity = self.capacity.unwrap_or(0).max(self.values.len());
        let mut stack = VecStack::with_capacity(capacity);
        stack.extend(self.values);
        debug!("built stack with {} values (capacity {})", stack.len(), capacity);
        Ok(stack)
    }
}
