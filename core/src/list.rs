//! The ordered todo list container.
//!
//! A [`TodoList`] owns the ordering of its items but not the items
//! themselves: each entry is an `Rc` that callers may also hold. Structural
//! changes (add, remove, shift, pop) only touch the list; completion changes
//! go through the shared item and are visible everywhere.

use crate::error::{Result, TodoListError};
use crate::index::ListIndex;
use crate::item::{Item, Todo};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// Title given to lists constructed without one.
pub const DEFAULT_TITLE: &str = "Today's Todos";

/// First line of every rendered list.
pub const HEADER: &str = "---- Today's Todos ----";

/// An ordered, mutable collection of shared todo items with a title.
///
/// # Example
///
/// ```
/// use todolist_core::{Item, Todo, TodoList};
///
/// let mut list = TodoList::new("Chores");
/// list.add(Todo::shared("Buy milk"));
/// list.add(Todo::shared("Clean room"));
///
/// list.mark_done_at(1)?;
/// assert_eq!(
///     list.to_string(),
///     "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room"
/// );
/// assert_eq!(list.all_not_done().size(), 1);
/// # Ok::<(), todolist_core::TodoListError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoList<T = Todo> {
    title: String,
    todos: Vec<Rc<T>>,
}

impl<T> Default for TodoList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl<T> TodoList<T> {
    /// Creates an empty list with the given title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            todos: Vec::new(),
        }
    }

    /// Returns the list title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of items in the list
    #[must_use]
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Alias for [`size`](Self::size)
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` if the list holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Appends an item to the end of the list
    pub fn add(&mut self, todo: Rc<T>) {
        self.todos.push(todo);
        tracing::debug!(size = self.todos.len(), "Added todo");
    }

    /// First item, if any
    #[must_use]
    pub fn first(&self) -> Option<&Rc<T>> {
        self.todos.first()
    }

    /// Last item, if any
    #[must_use]
    pub fn last(&self) -> Option<&Rc<T>> {
        self.todos.last()
    }

    /// Item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidIndex`] unless `index` is an integer
    /// in `[0, size())`.
    pub fn item_at<I: ListIndex>(&self, index: I) -> Result<&Rc<T>> {
        index
            .position()
            .and_then(|position| self.todos.get(position))
            .ok_or_else(|| TodoListError::invalid_index(index.label()))
    }

    /// Removes and returns the item at `index`, shifting later items left.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidIndex`] unless `index` is an integer
    /// in `[0, size())`. The list is left unchanged on error.
    pub fn remove_at<I: ListIndex>(&mut self, index: I) -> Result<Rc<T>> {
        let position = self.position_of(index)?;
        let removed = self.todos.remove(position);
        tracing::debug!(position, size = self.todos.len(), "Removed todo");
        Ok(removed)
    }

    /// Removes and returns the first item
    pub fn shift(&mut self) -> Option<Rc<T>> {
        if self.todos.is_empty() {
            return None;
        }
        let removed = self.todos.remove(0);
        tracing::debug!(size = self.todos.len(), "Shifted todo");
        Some(removed)
    }

    /// Removes and returns the last item
    pub fn pop(&mut self) -> Option<Rc<T>> {
        let removed = self.todos.pop();
        if removed.is_some() {
            tracing::debug!(size = self.todos.len(), "Popped todo");
        }
        removed
    }

    /// Calls `f(item, index, items)` for every item in order.
    ///
    /// The list is borrowed for the whole walk, so `f` cannot add or remove
    /// items; it may still mark the shared items done or undone.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Rc<T>, usize, &[Rc<T>]),
    {
        for (index, todo) in self.todos.iter().enumerate() {
            f(todo, index, &self.todos);
        }
    }

    /// Like [`for_each`](Self::for_each), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_for_each<E, F>(&self, mut f: F) -> std::result::Result<(), E>
    where
        F: FnMut(&Rc<T>, usize, &[Rc<T>]) -> std::result::Result<(), E>,
    {
        for (index, todo) in self.todos.iter().enumerate() {
            f(todo, index, &self.todos)?;
        }
        Ok(())
    }

    /// Returns a new list with the same title holding the items for which
    /// `predicate(item, index, items)` is true, in their original order.
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Rc<T>, usize, &[Rc<T>]) -> bool,
    {
        let todos = self
            .todos
            .iter()
            .enumerate()
            .filter(|(index, todo)| predicate(todo, *index, &self.todos))
            .map(|(_, todo)| Rc::clone(todo))
            .collect();
        Self {
            title: self.title.clone(),
            todos,
        }
    }

    /// Like [`filter`](Self::filter), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `predicate`.
    pub fn try_filter<E, F>(&self, mut predicate: F) -> std::result::Result<Self, E>
    where
        F: FnMut(&Rc<T>, usize, &[Rc<T>]) -> std::result::Result<bool, E>,
    {
        let mut filtered = Self::new(self.title.clone());
        for (index, todo) in self.todos.iter().enumerate() {
            if predicate(todo, index, &self.todos)? {
                filtered.todos.push(Rc::clone(todo));
            }
        }
        Ok(filtered)
    }

    /// Shallow copy of the items: the returned `Vec` is independent, the
    /// items are shared.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Rc<T>> {
        self.todos.clone()
    }

    /// Iterates over the items in order
    pub fn iter(&self) -> std::slice::Iter<'_, Rc<T>> {
        self.todos.iter()
    }

    fn position_of<I: ListIndex>(&self, index: I) -> Result<usize> {
        index
            .position()
            .filter(|&position| position < self.todos.len())
            .ok_or_else(|| TodoListError::invalid_index(index.label()))
    }
}

impl<T: Item> TodoList<T> {
    /// Marks the item at `index` done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidIndex`] unless `index` is an integer
    /// in `[0, size())`.
    pub fn mark_done_at<I: ListIndex>(&self, index: I) -> Result<()> {
        self.item_at(index)?.mark_done();
        Ok(())
    }

    /// Marks the item at `index` not done.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidIndex`] unless `index` is an integer
    /// in `[0, size())`.
    pub fn mark_undone_at<I: ListIndex>(&self, index: I) -> Result<()> {
        self.item_at(index)?.mark_undone();
        Ok(())
    }

    /// `true` if every item is done; vacuously `true` when empty
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.todos.iter().all(|todo| todo.is_done())
    }

    /// First item whose title equals `title` exactly
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&Rc<T>> {
        self.todos.iter().find(|todo| todo.title() == title)
    }

    /// Items that are done, as a new list
    #[must_use]
    pub fn all_done(&self) -> Self {
        self.filter(|todo, _, _| todo.is_done())
    }

    /// Items that are not done, as a new list
    #[must_use]
    pub fn all_not_done(&self) -> Self {
        self.filter(|todo, _, _| !todo.is_done())
    }

    /// Marks the first item titled `title` done. Returns whether one was
    /// found; an unknown title is not an error.
    pub fn mark_done(&self, title: &str) -> bool {
        match self.find_by_title(title) {
            Some(todo) => {
                todo.mark_done();
                true
            }
            None => {
                tracing::debug!(title, "No todo with that title");
                false
            }
        }
    }

    /// Marks every item done
    pub fn mark_all_done(&self) {
        self.for_each(|todo, _, _| todo.mark_done());
        tracing::debug!(size = self.todos.len(), "Marked all todos done");
    }

    /// Marks every item not done
    pub fn mark_all_undone(&self) {
        self.for_each(|todo, _, _| todo.mark_undone());
        tracing::debug!(size = self.todos.len(), "Marked all todos undone");
    }

    /// Number of items that are done
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.is_done()).count()
    }

    /// Number of items that are not done
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.todos.len() - self.done_count()
    }
}

/// Shape of a serialized list before its entries are validated.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawList {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    todos: Vec<serde_json::Value>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl TodoList<Todo> {
    /// Validates `value` as a todo and appends it, returning the shared
    /// handle that was inserted.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::InvalidItem`] if `value` is not a todo
    /// object. The list is left unchanged on error.
    pub fn add_value(&mut self, value: serde_json::Value) -> Result<Rc<Todo>> {
        let todo = Rc::new(Todo::from_value(value)?);
        self.add(Rc::clone(&todo));
        Ok(todo)
    }

    /// Parses a list from JSON of the form `{"title": ..., "todos": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::Serialization`] for malformed JSON or a
    /// document of the wrong shape, and [`TodoListError::InvalidItem`]
    /// naming the first entry that is not a todo.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Builds a list from an untyped JSON value; see [`from_json`](Self::from_json).
    ///
    /// # Errors
    ///
    /// Same as [`from_json`](Self::from_json).
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawList = serde_json::from_value(value)?;
        let todos = raw
            .todos
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                Todo::from_value(entry)
                    .map(Rc::new)
                    .map_err(|error| match error {
                        TodoListError::InvalidItem(reason) => {
                            TodoListError::InvalidItem(format!("entry {position}: {reason}"))
                        }
                        other => other,
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            title: raw.title,
            todos,
        })
    }
}

impl<T: Serialize> Serialize for TodoList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Snapshot<'a, T> {
            title: &'a str,
            todos: Vec<&'a T>,
        }

        Snapshot {
            title: &self.title,
            todos: self.todos.iter().map(Rc::as_ref).collect(),
        }
        .serialize(serializer)
    }
}

impl<T: Item> fmt::Display for TodoList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HEADER)?;
        for todo in &self.todos {
            write!(f, "\n{todo}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<Rc<T>> for TodoList<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            todos: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<Rc<T>> for TodoList<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        self.todos.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a TodoList<T> {
    type Item = &'a Rc<T>;
    type IntoIter = std::slice::Iter<'a, Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

impl<T> IntoIterator for TodoList<T> {
    type Item = Rc<T>;
    type IntoIter = std::vec::IntoIter<Rc<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}
