//! # Todolist Testing
//!
//! Testing utilities for `todolist-core`.
//!
//! This crate provides:
//! - Fixtures for the canonical three-item list
//! - `ListTest`, a Given-When-Then harness for list operations
//! - proptest strategies for titles, todos, lists and bad indices
//! - A tracing subscriber suitable for tests
//!
//! ## Example
//!
//! ```
//! use todolist_core::{ErrorKind, TodoList};
//! use todolist_testing::{ListTest, fixtures};
//!
//! ListTest::new()
//!     .given_list(fixtures::todays_todos().list)
//!     .when(|list: &mut TodoList| list.remove_at(-1).map(|_| ()))
//!     .then_error(ErrorKind::Index)
//!     .then_list(|list| assert_eq!(list.size(), 3))
//!     .run();
//! ```


pub use list_test::{ListTest, assertions};

/// Canonical lists used across the test suites.
pub mod fixtures {
    use std::rc::Rc;
    use todolist_core::{Todo, TodoList};

    /// Title of the first canonical todo
    pub const BUY_MILK: &str = "Buy milk";
    /// Title of the second canonical todo
    pub const CLEAN_ROOM: &str = "Clean room";
    /// Title of the third canonical todo
    pub const GO_TO_THE_GYM: &str = "Go to the gym";

    /// A default-titled list plus caller-side handles to its three todos.
    #[derive(Debug)]
    pub struct TodaysTodos {
        /// The list holding all three todos, none done
        pub list: TodoList,
        /// "Buy milk"
        pub buy_milk: Rc<Todo>,
        /// "Clean room"
        pub clean_room: Rc<Todo>,
        /// "Go to the gym"
        pub go_to_the_gym: Rc<Todo>,
    }

    impl TodaysTodos {
        /// Handles in insertion order
        #[must_use]
        pub fn handles(&self) -> [Rc<Todo>; 3] {
            [
                Rc::clone(&self.buy_milk),
                Rc::clone(&self.clean_room),
                Rc::clone(&self.go_to_the_gym),
            ]
        }
    }

    /// Builds "Buy milk", "Clean room", "Go to the gym", none done.
    #[must_use]
    pub fn todays_todos() -> TodaysTodos {
        let buy_milk = Todo::shared(BUY_MILK);
        let clean_room = Todo::shared(CLEAN_ROOM);
        let go_to_the_gym = Todo::shared(GO_TO_THE_GYM);

        let mut list = TodoList::default();
        list.add(Rc::clone(&buy_milk));
        list.add(Rc::clone(&clean_room));
        list.add(Rc::clone(&go_to_the_gym));

        TodaysTodos {
            list,
            buy_milk,
            clean_room,
            go_to_the_gym,
        }
    }

    /// A default-titled list of fresh todos with the given titles.
    #[must_use]
    pub fn list_of(titles: &[&str]) -> TodoList {
        titles.iter().copied().map(Todo::shared).collect()
    }
}

/// Property-based testing utilities using proptest.
pub mod strategies {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::rc::Rc;
    use todolist_core::{Item, Todo, TodoList};

    /// Short printable titles, duplicates allowed
    pub fn title() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,23}"
    }

    /// A todo with a random title and done flag
    pub fn todo() -> impl Strategy<Value = Todo> {
        (title(), any::<bool>()).prop_map(|(title, done)| {
            let todo = Todo::new(title);
            if done {
                todo.mark_done();
            }
            todo
        })
    }

    /// A default-titled list of up to `max_len` random todos
    pub fn todo_list(max_len: usize) -> impl Strategy<Value = TodoList> {
        vec(todo(), 0..=max_len)
            .prop_map(|todos| todos.into_iter().map(Rc::new).collect::<TodoList>())
    }

    /// Floats that can never address a list position
    pub fn never_valid_index() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(f64::NAN),
            -1.0e9_f64..-0.5,
            (0.0_f64..1.0e6).prop_map(|value| value.trunc() + 0.5),
        ]
    }
}

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`, defaulting to `warn`. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
