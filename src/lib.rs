// SPDX-License-Identifier: FSL-1.1
#![warn(missing_docs)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

//! LIFO
//!
//! A last-in-first-out value stack. [`VecStack`] holds any value type;
//! [`Value`] is there for stacks that have to mix types or carry an explicit
//! "no value" marker.

/// Errors produced by this library
pub mod error;
pub use error::{Error, StackError};

/// Stack implementations
pub mod stack;
pub use stack::{Builder, VecStack};

/// Storage traits
pub mod storage;
pub use storage::Stack;

/// Heterogeneous stack values
pub mod value;
pub use value::Value;

/// ...and in the darkness bind them
pub mod prelude {
    pub use super::*;
}
