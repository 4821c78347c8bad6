//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with history.
//!
//! Key concepts:
//! - Cyclic event-driven transitions
//! - Rejected events leave the machine untouched
//! - Undo/redo through the visited states
//!
//! Run with: RUST_LOG=fsm_engine=debug cargo run --example traffic_light

use fsm_engine::{fsm_config, FsmError, StateMachine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: "red",
        "red" => { "next" => "green" },
        "green" => { "next" => "yellow", "emergency" => "red" },
        "yellow" => { "next" => "red" },
    };

    let mut light = StateMachine::new(config);
    println!("Initial state: {}", light.state());

    println!("\nCycling:");
    for _ in 0..4 {
        light.trigger("next")?;
        println!("  -> {}", light.state());
    }

    println!("\nEmergency from {}:", light.state());
    match light.trigger("emergency") {
        Ok(()) => println!("  -> {}", light.state()),
        Err(err) => println!("  rejected: {err}"),
    }

    println!("\nStates reacting to 'emergency': {:?}", light.states(Some("emergency")));

    println!("\nUndoing:");
    while light.undo() {
        println!("  <- {}", light.state());
    }

    println!("\nRedoing twice:");
    for _ in 0..2 {
        if light.redo() {
            println!("  -> {}", light.state());
        }
    }

    light.reset();
    println!("\nAfter reset: {}", light.state());

    println!("\n=== Example Complete ===");
    Ok(())
}
