use crate::error::TodoError;
use crate::todo::Todo;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered, mutable collection of [`Todo`] items
///
/// Vec is used as the backing storage:
/// 1. Maintains insertion order for predictable iteration and display
/// 2. Duplicates are allowed - there is no uniqueness constraint
/// 3. Simple ownership model - the list owns all items directly
///
/// Index-based operations are bounds checked up front and return
/// [`TodoError::OutOfBounds`] without touching the list when the index
/// is out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Title naming the list
    title: String,
    /// Items in insertion order
    #[serde(default)]
    todos: Vec<Todo>,
}

impl TodoList {
    /// Create a new empty list with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// The list's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a todo to the end of the list
    ///
    /// # Arguments
    /// * `todo` - The todo to add
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Number of items in the list
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Check whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Detached copy of the items in list order
    ///
    /// Mutating the returned vector never affects the list.
    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// The first item, or `None` when the list is empty
    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    /// The last item, or `None` when the list is empty
    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// The item at `index`
    ///
    /// # Arguments
    /// * `index` - Zero-based position in the list
    ///
    /// # Returns
    /// A reference to the item, or [`TodoError::OutOfBounds`] if `index`
    /// is not within `[0, len)`
    pub fn item_at(&self, index: usize) -> Result<&Todo, TodoError> {
        self.todos.get(index).ok_or(TodoError::OutOfBounds {
            index,
            len: self.todos.len(),
        })
    }

    /// Mutable reference to the item at `index`
    fn item_at_mut(&mut self, index: usize) -> Result<&mut Todo, TodoError> {
        let len = self.todos.len();
        self.todos
            .get_mut(index)
            .ok_or(TodoError::OutOfBounds { index, len })
    }

    /// Remove and return the first item, or `None` when the list is empty
    ///
    /// Remaining items keep their relative order.
    pub fn shift(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Remove and return the last item, or `None` when the list is empty
    pub fn pop(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Remove and return the item at `index`, shifting later items left
    ///
    /// # Arguments
    /// * `index` - Zero-based position in the list
    ///
    /// # Returns
    /// The removed item, or [`TodoError::OutOfBounds`] if `index` is not
    /// within `[0, len)`; the list is unchanged on error
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, TodoError> {
        if index >= self.todos.len() {
            return Err(TodoError::OutOfBounds {
                index,
                len: self.todos.len(),
            });
        }
        Ok(self.todos.remove(index))
    }

    /// Check whether every item is done
    ///
    /// Vacuously true for an empty list.
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Mark the item at `index` done
    ///
    /// Bounds are checked before any mutation.
    pub fn mark_done_at(&mut self, index: usize) -> Result<(), TodoError> {
        self.item_at_mut(index)?.mark_done();
        Ok(())
    }

    /// Mark the item at `index` not done
    ///
    /// Bounds are checked before any mutation.
    pub fn mark_undone_at(&mut self, index: usize) -> Result<(), TodoError> {
        self.item_at_mut(index)?.mark_undone();
        Ok(())
    }

    /// Mark every item done. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        for todo in &mut self.todos {
            todo.mark_done();
        }
    }

    /// Mark every item not done. No-op on an empty list.
    pub fn mark_all_undone(&mut self) {
        for todo in &mut self.todos {
            todo.mark_undone();
        }
    }

    pub(crate) fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub(crate) fn todos_mut(&mut self) -> &mut Vec<Todo> {
        &mut self.todos
    }

    pub(crate) fn into_todos(self) -> Vec<Todo> {
        self.todos
    }
}

impl fmt::Display for TodoList {
    /// Renders a `---- <title> ----` header followed by one line per
    /// item, newline-joined, with no trailing newline
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            write!(f, "\n{}", todo)?;
        }
        Ok(())
    }
}
