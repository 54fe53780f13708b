//! Simple CLI demo for the todo list.
//!
//! Usage: `todo-demo [TITLE]`. Log output is controlled with `RUST_LOG`
//! (default `info`; `debug` shows every structural change).

use serde_json::json;
use std::rc::Rc;
use todolist_core::{DEFAULT_TITLE, Item, Todo, TodoList};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let title = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    tracing::info!(%title, "Starting todo demo");

    println!("=== Todo List Example ===\n");

    let milk = Todo::shared("Buy milk");
    let mut list = TodoList::new(title);
    list.add(Rc::clone(&milk));
    list.add(Todo::shared("Clean room"));
    list.add(Todo::shared("Go to the gym"));
    list.add_value(json!({ "title": "Do taxes" }))?;

    println!("{list}\n");

    // Values from outside the type system go through the same boundary
    if let Err(error) = list.add_value(json!("boo")) {
        tracing::warn!(%error, "Ignoring bad input");
    }

    println!("Completing 'Buy milk' through the caller's handle...");
    milk.mark_done();
    println!("Completing item 2 through the list...");
    list.mark_done_at(2)?;
    println!("{list}\n");

    println!("Still to do:");
    println!("{}\n", list.all_not_done());

    if let Err(error) = list.remove_at(-1) {
        println!("Rejected removal: {error}");
    }
    let removed = list.remove_at(1)?;
    println!("Removed '{}'", removed.title());

    println!(
        "\nCompleted: {}/{} ({})",
        list.done_count(),
        list.size(),
        list.title()
    );
    println!("\nSerialized:\n{}", serde_json::to_string_pretty(&list)?);

    list.mark_all_done();
    println!("\n{list}");
    println!("\n=== Demo Complete ===");
    Ok(())
}
