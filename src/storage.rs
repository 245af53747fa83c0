/// The interface to a last-in-first-out value stack
pub mod stack;

pub use stack::Stack;
