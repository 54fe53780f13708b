//! # Todolist Core
//!
//! An in-memory todo list: an ordered collection of shared todo items with
//! a title, completion tracking, filtering and plain-text rendering.
//!
//! ## Core Concepts
//!
//! - **Item**: the capability contract (title, done flag, rendering)
//! - **Todo**: the concrete item type
//! - **`TodoList`**: ordered container of `Rc`-shared items
//! - **`ListIndex`**: validation of positional arguments
//!
//! Items are shared, not copied. A caller that keeps an `Rc<Todo>` after
//! adding it to a list sees every completion change the list makes, and the
//! list sees changes made through the caller's handle. The list itself is
//! single-threaded (`Rc`-based, `!Send`).
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use todolist_core::{Item, Todo, TodoList};
//!
//! let milk = Todo::shared("Buy milk");
//! let mut list = TodoList::default();
//! list.add(Rc::clone(&milk));
//! list.add(Todo::shared("Clean room"));
//! list.add(Todo::shared("Go to the gym"));
//!
//! list.mark_done("Buy milk");
//! assert!(milk.is_done());
//!
//! let gym = list.pop();
//! assert_eq!(gym.map(|todo| todo.title().to_string()).as_deref(), Some("Go to the gym"));
//! assert_eq!(
//!     list.to_string(),
//!     "---- Today's Todos ----\n[X] Buy milk\n[ ] Clean room"
//! );
//! ```

pub mod error;
pub mod index;
pub mod item;
pub mod list;

// Re-export commonly used types
pub use error::{ErrorKind, Result, TodoListError};
pub use index::ListIndex;
pub use item::{Item, Todo};
pub use list::{DEFAULT_TITLE, HEADER, TodoList};
