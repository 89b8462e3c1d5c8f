//! In-memory todo list library
//!
//! This library provides a named, ordered, mutable collection of todo
//! items with index-based and predicate-based access, bulk state
//! mutation, and a plain-text rendering.
//!
//! # Architecture
//!
//! Two entities compose the whole crate:
//! - **[`Todo`]**: a single task with a title and a done flag
//! - **[`TodoList`]**: an insertion-ordered collection of `Todo` items
//!
//! All operations are synchronous and caller-driven. Index-based
//! operations return [`TodoError::OutOfBounds`] for out-of-range
//! indices, checked before any mutation; accessors on an empty list
//! return `None`.
//!
//! # Example
//!
//! ```
//! use todolist::{Todo, TodoList};
//!
//! let mut list = TodoList::new("Today's Todos");
//! list.add(Todo::new("Buy milk"));
//! list.add(Todo::new("Clean room"));
//!
//! list.mark_done_at(0)?;
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room"
//! );
//! # Ok::<(), todolist::TodoError>(())
//! ```

mod error;
mod queries;
mod todo;
mod todo_list;

// Re-export the public types
pub use error::TodoError;
pub use todo::Todo;
pub use todo_list::TodoList;
