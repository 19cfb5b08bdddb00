//! Undoable Counter
//!
//! This example wraps a tiny counter reducer with undo/redo history.
//!
//! Key concepts:
//! - The host reducer never sees history, only its own state
//! - Control actions move through history without calling the reducer
//! - A limit bounds how many versions are kept
//! - Debug output goes through `tracing`
//!
//! Run with: RUST_LOG=debug cargo run --example counter

use tracing_subscriber::EnvFilter;
use undoable::actions::{ActionCreators, BasicAction};
use undoable::{Undoable, UndoableState};

fn counter(state: Option<&i64>, action: &BasicAction) -> i64 {
    let state = state.copied().unwrap_or_default();
    match action.action_type.as_str() {
        "INCREMENT" => state + 1,
        "DOUBLE" => state * 2,
        _ => state,
    }
}

fn show(label: &str, state: &UndoableState<i64>) {
    let past: Vec<i64> = state.past().iter().map(|s| **s).collect();
    let future: Vec<i64> = state.future().iter().map(|s| **s).collect();
    println!(
        "{label:<16} past={past:?} present={:?} future={future:?}",
        state.present()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Undoable Counter Example ===\n");

    let undoable = Undoable::builder()
        .initial_state(1)
        .limit(4)
        .debug(true)
        .build(counter)?;

    let mut state = undoable.initial_state();
    show("initial", &state);

    let actions = [
        ("increment", BasicAction::new("INCREMENT")),
        ("double", BasicAction::new("DOUBLE")),
        ("double", BasicAction::new("DOUBLE")),
        ("increment", BasicAction::new("INCREMENT")),
        ("undo", ActionCreators::undo()),
        ("undo", ActionCreators::undo()),
        ("redo", ActionCreators::redo()),
        ("jump to past 0", ActionCreators::jump_to_past(0)),
        ("double", BasicAction::new("DOUBLE")),
    ];

    for (label, action) in &actions {
        state = undoable.reduce(state, action)?;
        show(label, &state);
    }

    match undoable.reduce(state, &ActionCreators::jump_to_future(7)) {
        Ok(_) => println!("\nunexpected jump"),
        Err(err) => println!("\nrejected jump: {err}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
