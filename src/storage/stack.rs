// SPDX-License-Identifier: FSL-1.1
use crate::Error;
use std::{fmt::Display, io::Write};

/// Trait for a last-in-first-out value stack. Only the most recently pushed
/// value is reachable through [`Stack::peek`] and [`Stack::pop`]; everything
/// below it stays hidden until the values above it are popped.
pub trait Stack {
    /// The type of the values held by the stack
    type Item;

    /// push a value onto the stack
    fn push(&mut self, value: Self::Item);

    /// remove the top value from the stack
    fn pop(&mut self) -> Result<Self::Item, Error>;

    /// get a reference to the top value on the stack
    fn peek(&self) -> Result<&Self::Item, Error>;

    /// get a reference to the value `idx` places below the top, 0 is the top
    fn peek_at(&self, idx: usize) -> Option<&Self::Item>;

    /// return the number of values on the stack
    fn len(&self) -> usize;

    /// return if the stack is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// return if the stack is empty
    fn empty(&self) -> bool {
        self.is_empty()
    }

    /// write the values from the top down, one per line, to the writer. The
    /// default walks [`Stack::peek_at`] from the top until it returns `None`.
    fn print_to<W: Write>(&self, w: &mut W) -> Result<(), Error>
    where
        Self::Item: Display,
    {
        let mut idx = 0;
        while let Some(v) = self.peek_at(idx) {
            writeln!(w, "{v}")?;
            idx += 1;
        }
        Ok(())
    }

    /// write the values from the top down, one per line, to stdout
    fn print(&self) -> Result<(), Error>
    where
        Self::Item: Display,
    {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.print_to(&mut lock)?;
        lock.flush()?;
        Ok(())
    }
}
