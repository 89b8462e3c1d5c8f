//! Query and iteration methods for TodoList
//!
//! This module contains predicate filtering and iterator plumbing for
//! [`TodoList`]. These are separated from the main todo_list.rs to keep
//! the container file focused on structural operations.

use crate::todo::Todo;
use crate::todo_list::TodoList;

impl TodoList {
    /// Iterate over the items in list order
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos().iter()
    }

    /// Iterate mutably over the items in list order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Todo> {
        self.todos_mut().iter_mut()
    }

    /// Build a new list holding copies of the items matching `predicate`
    ///
    /// The new list carries the same title, and matching items appear in
    /// their original relative order. The source list is untouched; the
    /// copies snapshot item state at call time.
    ///
    /// # Arguments
    /// * `predicate` - Selection function, called once per item in order
    pub fn filter<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut filtered = TodoList::new(self.title());
        for todo in self.iter() {
            if predicate(todo) {
                filtered.add(todo.clone());
            }
        }
        filtered
    }

    /// New list holding copies of the completed items
    pub fn all_done(&self) -> TodoList {
        self.filter(Todo::is_done)
    }

    /// New list holding copies of the items still to do
    pub fn all_not_done(&self) -> TodoList {
        self.filter(|todo| !todo.is_done())
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut TodoList {
    type Item = &'a mut Todo;
    type IntoIter = std::slice::IterMut<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    /// Consume the list, yielding its items in order
    fn into_iter(self) -> Self::IntoIter {
        self.into_todos().into_iter()
    }
}
