/// stack builder
pub mod builder;

/// vector backed stack
pub mod vec_stack;

pub use builder::Builder;
pub use vec_stack::VecStack;
