//! Behavioural tests for `TodoList`

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use proptest::prelude::*;
use serde_json::json;
use std::rc::Rc;
use todolist_core::{ErrorKind, Item, Todo, TodoList};
use todolist_testing::fixtures::{self, BUY_MILK, CLEAN_ROOM, GO_TO_THE_GYM};
use todolist_testing::{ListTest, assertions, init_tracing, strategies};

#[test]
fn test_render_canonical_list() {
    let todos = fixtures::todays_todos();
    assert_eq!(
        todos.list.to_string(),
        "---- Today's Todos ----\n[ ] Buy milk\n[ ] Clean room\n[ ] Go to the gym"
    );

    todos.list.mark_all_done();
    assert_eq!(
        todos.list.to_string(),
        "---- Today's Todos ----\n[X] Buy milk\n[X] Clean room\n[X] Go to the gym"
    );
}

#[test]
fn test_shift_returns_head() {
    ListTest::new()
        .given_list(fixtures::todays_todos().list)
        .when(|list: &mut TodoList| Ok(list.shift()))
        .then_ok(|shifted| assert_eq!(shifted.as_ref().unwrap().title(), BUY_MILK))
        .then_list(|list| assertions::assert_titles(list, &[CLEAN_ROOM, GO_TO_THE_GYM]))
        .run();
}

#[test]
fn test_pop_returns_tail() {
    ListTest::new()
        .given_list(fixtures::todays_todos().list)
        .when(|list: &mut TodoList| Ok(list.pop()))
        .then_ok(|popped| assert_eq!(popped.as_ref().unwrap().title(), GO_TO_THE_GYM))
        .then_list(|list| assertions::assert_titles(list, &[BUY_MILK, CLEAN_ROOM]))
        .run();
}

#[test]
fn test_remove_at_middle() {
    let todos = fixtures::todays_todos();
    let clean_room = Rc::clone(&todos.clean_room);
    ListTest::new()
        .given_list(todos.list)
        .when(|list: &mut TodoList| list.remove_at(1))
        .then_ok(move |removed| assert!(Rc::ptr_eq(removed, &clean_room)))
        .then_list(|list| assertions::assert_titles(list, &[BUY_MILK, GO_TO_THE_GYM]))
        .run();
}

#[test]
fn test_indexed_operations_reject_examples_of_bad_indices() {
    for index in [-3.5, std::f64::consts::PI, f64::NEG_INFINITY, 3.0] {
        ListTest::new()
            .given_list(fixtures::todays_todos().list)
            .when(move |list: &mut TodoList| list.remove_at(index).map(|_| ()))
            .then_error(ErrorKind::Index)
            .then_list(|list| assert_eq!(list.size(), 3))
            .run();
    }
}

#[test]
fn test_invalid_index_message_names_index() {
    let list = fixtures::todays_todos().list;
    assert_eq!(
        list.item_at(-3.5).unwrap_err().to_string(),
        "invalid index: -3.5"
    );
}

#[test]
fn test_add_value_rejects_non_todo() {
    init_tracing();
    ListTest::new()
        .given_list(fixtures::todays_todos().list)
        .when(|list: &mut TodoList| list.add_value(json!("boo")).map(|_| ()))
        .then_error(ErrorKind::Type)
        .then_list(|list| assert_eq!(list.size(), 3))
        .run();
}

#[test]
fn test_to_vec_shares_caller_handles_in_order() {
    let todos = fixtures::todays_todos();
    let stored = todos.list.to_vec();
    let handles = todos.handles();
    assert_eq!(stored.len(), handles.len());
    for (stored, handle) in stored.iter().zip(&handles) {
        assert!(Rc::ptr_eq(stored, handle));
    }
}

#[test]
fn test_shift_then_to_vec_keeps_remaining_handles() {
    let todos = fixtures::todays_todos();
    let [buy_milk, clean_room, go_to_the_gym] = todos.handles();
    let mut list = todos.list;

    assert!(Rc::ptr_eq(&list.shift().unwrap(), &buy_milk));
    let remaining = list.to_vec();
    assert_eq!(remaining.len(), 2);
    assert!(Rc::ptr_eq(&remaining[0], &clean_room));
    assert!(Rc::ptr_eq(&remaining[1], &go_to_the_gym));
}

#[test]
fn test_add_appends_to_end() {
    let mut list = fixtures::todays_todos().list;
    let taxes = Todo::shared("do taxes");
    list.add(Rc::clone(&taxes));
    assert!(Rc::ptr_eq(list.last().unwrap(), &taxes));
}

#[test]
fn test_mark_done_unknown_title_is_a_no_op() {
    let todos = fixtures::todays_todos();
    assert!(!todos.list.mark_done("Walk the dog"));
    assertions::assert_none_done(&todos.list);
}

#[test]
fn test_external_mutation_visible_through_list() {
    let todos = fixtures::todays_todos();
    todos.clean_room.mark_done();
    assert!(todos.list.item_at(1).unwrap().is_done());
    assert_eq!(
        todos.list.to_string(),
        "---- Today's Todos ----\n[ ] Buy milk\n[X] Clean room\n[ ] Go to the gym"
    );
}

#[test]
fn test_filter_chains() {
    let todos = fixtures::todays_todos();
    todos.go_to_the_gym.mark_done();
    let chained = todos
        .list
        .filter(|todo, _, _| todo.title().to_lowercase().contains('e'))
        .all_not_done();
    assertions::assert_titles(&chained, &[CLEAN_ROOM]);
    assert_eq!(chained.title(), todos.list.title());
}

#[test]
fn test_for_each_collects_titles() {
    let list = fixtures::todays_todos().list;
    let mut titles = Vec::new();
    list.for_each(|todo, _, _| titles.push(todo.title().to_string()));
    assert_eq!(titles, [BUY_MILK, CLEAN_ROOM, GO_TO_THE_GYM]);
}

#[test]
fn test_json_boundary_round_trip() {
    let todos = fixtures::todays_todos();
    todos.buy_milk.mark_done();
    let value = serde_json::to_value(&todos.list).unwrap();
    assert_eq!(value["todos"][0], json!({ "title": BUY_MILK, "done": true }));

    let parsed = TodoList::from_value(value).unwrap();
    assert_eq!(parsed.to_string(), todos.list.to_string());
    // parsed items are new allocations, not the caller's handles
    assert!(!Rc::ptr_eq(parsed.first().unwrap(), &todos.buy_milk));
}

proptest! {
    #[test]
    fn prop_size_counts_adds(titles in prop::collection::vec(strategies::title(), 0..20)) {
        let mut list: TodoList = TodoList::default();
        let handles: Vec<_> = titles.iter().map(Todo::shared).collect();
        for handle in &handles {
            list.add(Rc::clone(handle));
        }
        prop_assert_eq!(list.size(), titles.len());
        let copy = list.to_vec();
        prop_assert_eq!(copy.len(), handles.len());
        for (stored, handle) in copy.iter().zip(&handles) {
            prop_assert!(Rc::ptr_eq(stored, handle));
        }
    }

    #[test]
    fn prop_bad_indices_always_fail(list in strategies::todo_list(8), index in strategies::never_valid_index()) {
        let mut list = list;
        let size = list.size();
        prop_assert_eq!(list.item_at(index).unwrap_err().kind(), ErrorKind::Index);
        prop_assert_eq!(list.mark_done_at(index).unwrap_err().kind(), ErrorKind::Index);
        prop_assert_eq!(list.mark_undone_at(index).unwrap_err().kind(), ErrorKind::Index);
        prop_assert_eq!(list.remove_at(index).unwrap_err().kind(), ErrorKind::Index);
        prop_assert_eq!(list.size(), size);
    }

    #[test]
    fn prop_out_of_range_integers_fail(list in strategies::todo_list(8), offset in 0_usize..100) {
        let index = list.size() + offset;
        prop_assert_eq!(list.item_at(index).unwrap_err().kind(), ErrorKind::Index);
        prop_assert_eq!(list.mark_done_at(index).unwrap_err().kind(), ErrorKind::Index);
    }

    #[test]
    fn prop_is_done_iff_every_item_done(list in strategies::todo_list(8)) {
        let expected = list.iter().all(|todo| todo.is_done());
        prop_assert_eq!(list.is_done(), expected);
        prop_assert_eq!(list.done_count() + list.pending_count(), list.size());
    }

    #[test]
    fn prop_all_done_matches_filter(list in strategies::todo_list(12)) {
        let done = list.all_done();
        let by_filter = list.filter(|todo, _, _| todo.is_done());
        prop_assert_eq!(done.size(), by_filter.size());
        for (a, b) in done.iter().zip(&by_filter) {
            prop_assert!(Rc::ptr_eq(a, b));
        }

        let pending = list.all_not_done();
        prop_assert_eq!(pending.size() + done.size(), list.size());
        prop_assert!(pending.iter().all(|todo| !todo.is_done()));
    }

    #[test]
    fn prop_filter_preserves_relative_order(list in strategies::todo_list(12), keep_every in 1_usize..4) {
        let filtered = list.filter(|_, index, _| index % keep_every == 0);
        let expected: Vec<_> = list.iter().step_by(keep_every).cloned().collect();
        prop_assert_eq!(filtered.size(), expected.len());
        for (a, b) in filtered.iter().zip(&expected) {
            prop_assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn prop_to_vec_is_structurally_independent(list in strategies::todo_list(8)) {
        let size = list.size();
        let mut copy = list.to_vec();
        copy.clear();
        prop_assert_eq!(list.size(), size);
    }

    #[test]
    fn prop_mark_done_unknown_title_changes_nothing(list in strategies::todo_list(8)) {
        let before: Vec<bool> = list.iter().map(|todo| todo.is_done()).collect();
        // titles never contain digits
        prop_assert!(!list.mark_done("0"));
        let after: Vec<bool> = list.iter().map(|todo| todo.is_done()).collect();
        prop_assert_eq!(before, after);
    }
}
