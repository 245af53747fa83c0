// SPDX-License-Identifier: FSL-1.1
use crate::{error::StackError, Error, Stack};
use log::{debug, trace};
use std::{
    fmt::{self, Display},
    io::Write,
    iter::Rev,
    slice,
};

/// A [`Stack`] backed by a growable vector. The end of the vector is the top
/// of the stack. There is no capacity limit.
///
/// The stack does no internal locking. It is `Send` and `Sync` whenever `V`
/// is, so callers that mutate it from more than one thread wrap the whole
/// stack in their own `Mutex`.
#[derive(Clone, Debug, PartialEq)]
pub struct VecStack<V> {
    values: Vec<V>,
}

impl<V> Default for VecStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> VecStack<V> {
    /// create a new, empty stack
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// create a new, empty stack with room for `capacity` values before it
    /// has to reallocate
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// iterate over the values from the top of the stack down
    pub fn iter(&self) -> Rev<slice::Iter<'_, V>> {
        self.values.iter().rev()
    }

    /// remove every value from the stack
    pub fn clear(&mut self) {
        self.values.clear()
    }

    /// consume the stack, returning the values in the order they were pushed
    pub fn into_vec(self) -> Vec<V> {
        self.values
    }
}

impl<V> Stack for VecStack<V> {
    type Item = V;

    fn push(&mut self, value: V) {
        self.values.push(value);
        trace!("push -> len {}", self.values.len());
    }

    fn pop(&mut self) -> Result<V, Error> {
        match self.values.pop() {
            Some(v) => {
                trace!("pop -> len {}", self.values.len());
                Ok(v)
            }
            None => {
                debug!("pop called on an empty stack");
                Err(StackError::EmptyContainer("pop").into())
            }
        }
    }

    fn peek(&self) -> Result<&V, Error> {
        match self.values.last() {
            Some(v) => Ok(v),
            None => {
                debug!("peek called on an empty stack");
                Err(StackError::EmptyContainer("peek").into())
            }
        }
    }

    fn peek_at(&self, idx: usize) -> Option<&V> {
        self.iter().nth(idx)
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[tracing::instrument(level = "trace", skip_all, fields(len = self.values.len()))]
    fn print_to<W: Write>(&self, w: &mut W) -> Result<(), Error>
    where
        Self::Item: Display,
    {
        for v in self.iter() {
            writeln!(w, "{v}")?;
        }
        Ok(())
    }
}

impl<V: Display> Display for VecStack<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for v in self.iter() {
            writeln!(f, "{v}")?;
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a VecStack<V> {
    type Item = &'a V;
    type IntoIter = Rev<slice::Iter<'a, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> Extend<V> for VecStack<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.values.extend(iter)
    }
}

impl<V> FromIterator<V> for VecStack<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<V> From<Vec<V>> for VecStack<V> {
    fn from(values: Vec<V>) -> Self {
        Self { values }
    }
}
