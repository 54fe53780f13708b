//! The todo item contract and its concrete implementation.
//!
//! Items are shared between the caller and any list holding them, so the
//! completion flag lives behind interior mutability: marking an item done
//! through the list is visible to every other holder of the same `Rc`.

use crate::error::{Result, TodoListError};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Capability contract for anything a [`TodoList`](crate::TodoList) can hold.
///
/// `Display` must render `[X] <title>` when done and `[ ] <title>` otherwise.
pub trait Item: fmt::Display {
    /// Title of the item; not required to be unique
    fn title(&self) -> &str;

    /// Whether the item is marked done
    fn is_done(&self) -> bool;

    /// Sets the done flag
    fn mark_done(&self);

    /// Clears the done flag
    fn mark_undone(&self);
}

/// A single task with a title and a completion flag.
///
/// # Example
///
/// ```
/// use todolist_core::{Item, Todo};
///
/// let todo = Todo::new("Buy milk");
/// assert_eq!(todo.to_string(), "[ ] Buy milk");
///
/// todo.mark_done();
/// assert_eq!(todo.to_string(), "[X] Buy milk");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Todo {
    title: String,
    #[serde(default)]
    done: Cell<bool>,
}

impl Todo {
    /// Creates a new todo that is not done
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: Cell::new(false),
        }
    }

    /// Creates a new todo ready to be shared with a list
    #[must_use]
    pub fn shared(title: impl Into<String>) -> Rc<Self> {
        Rc::new(Self::new(title))
    }

    /// Builds a todo from an untyped JSON value.
    ///
    /// Accepts `{"title": "...", "done": bool}` with `done` optional.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidItem`] if the value is not such an
    /// object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|error| {
            tracing::warn!(%error, "Rejected value that is not a todo");
            TodoListError::InvalidItem(error.to_string())
        })
    }
}

impl Item for Todo {
    fn title(&self) -> &str {
        &self.title
    }

    fn is_done(&self) -> bool {
        self.done.get()
    }

    fn mark_done(&self) {
        self.done.set(true);
    }

    fn mark_undone(&self) {
        self.done.set(false);
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_done() { 'X' } else { ' ' };
        write!(f, "[{mark}] {}", self.title)
    }
}
