//! Todo domain models and list operations
//!
//! This module contains the core todo data structures:
//! - `priority`: the priority catalog
//! - `todo`: a single task record
//! - `todo_store`: the ordered collection with id allocation and mutations
//! - `sample`: built-in sample data
//! - `serde_impl`: serialization of the store and seed format

mod priority;
mod sample;
mod serde_impl;
#[allow(clippy::module_inception)]
mod todo;
mod todo_store;

// Re-export all public types
pub use priority::{Priority, priority_options};
pub use sample::sample_todos;
pub use todo::{Todo, TodoId, local_date_today};
pub use todo_store::{SeedError, TodoStore};
