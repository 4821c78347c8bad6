//! End-to-end scenarios through the public API.

use fsm_engine::{
    fsm_config, Configuration, ConfigurationBuilder, ConfigurationError, FsmError, StateMachine,
};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

fn idle_running() -> Configuration {
    fsm_config! {
        initial: "idle",
        "idle" => { "start" => "running" },
        "running" => { "stop" => "idle" },
    }
}

fn as_set<'a>(states: Vec<&'a str>) -> BTreeSet<&'a str> {
    states.into_iter().collect()
}

#[test]
fn start_stop_walk_with_undo_and_redo() {
    let mut machine = StateMachine::new(idle_running());
    assert_eq!(machine.state(), "idle");

    machine.trigger("start").unwrap();
    assert_eq!(machine.state(), "running");

    machine.trigger("stop").unwrap();
    assert_eq!(machine.state(), "idle");

    assert!(machine.undo());
    assert_eq!(machine.state(), "running");

    assert!(machine.undo());
    assert_eq!(machine.state(), "idle");

    assert!(!machine.undo());
    assert_eq!(machine.state(), "idle");

    assert!(machine.redo());
    assert_eq!(machine.state(), "running");
}

#[test]
fn states_query_with_and_without_event() {
    let machine = StateMachine::new(idle_running());

    assert_eq!(machine.states(Some("start")), vec!["idle"]);
    assert_eq!(
        as_set(machine.states(None)),
        BTreeSet::from(["idle", "running"])
    );
    assert!(machine.states(Some("jump")).is_empty());
}

#[test]
fn configuration_loaded_from_json() {
    let config: Configuration = serde_json::from_value(serde_json::json!({
        "initial": "idle",
        "states": {
            "idle": {"transitions": {"start": "running"}},
            "running": {"transitions": {"stop": "idle"}}
        }
    }))
    .unwrap();

    assert_eq!(config, idle_running());

    let mut machine = StateMachine::new(config);
    machine.trigger("start").unwrap();
    assert_eq!(machine.state(), "running");
}

#[test]
fn missing_configuration_is_rejected() {
    let result = StateMachine::try_new(None::<Configuration>);

    let err = result.unwrap_err();
    assert_eq!(err, FsmError::Configuration(ConfigurationError::Missing));
    assert_eq!(err.code(), "CONFIGURATION_ERROR");
}

#[test]
fn invalid_requests_leave_machine_untouched() {
    let mut machine = StateMachine::new(idle_running());
    machine.trigger("start").unwrap();
    machine.undo();

    let err = machine.trigger("stop").unwrap_err();
    assert_eq!(err.code(), "INVALID_TRANSITION");
    let err = machine.change_state("paused").unwrap_err();
    assert_eq!(err.code(), "INVALID_STATE");

    assert_eq!(machine.state(), "idle");
    assert!(machine.history().undo_stack().is_empty());
    assert_eq!(machine.history().redo_stack(), ["running"]);
}

#[test]
fn reset_keeps_redo_while_jumps_discard_it() {
    let mut machine = StateMachine::new(idle_running());
    machine.trigger("start").unwrap();
    machine.undo();

    machine.reset();
    assert!(machine.can_redo());

    machine.change_state("idle").unwrap();
    assert!(!machine.can_redo());
}

#[test]
fn unvalidated_initial_state_surfaces_on_trigger() {
    let config = ConfigurationBuilder::new()
        .initial("booting")
        .state("ready", |s| s.on("go", "done"))
        .build()
        .unwrap();
    let mut machine = StateMachine::new(config);

    assert_eq!(machine.state(), "booting");
    let err = machine.trigger("go").unwrap_err();
    assert_eq!(
        err,
        FsmError::StateNotFound {
            state: "booting".to_string()
        }
    );

    machine.change_state("ready").unwrap();
    machine.trigger("go").unwrap();
    assert_eq!(machine.state(), "done");
}

#[test]
fn machine_shared_across_threads_behind_mutex() {
    let machine = Arc::new(Mutex::new(StateMachine::new(idle_running())));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let machine = Arc::clone(&machine);
            std::thread::spawn(move || {
                let mut machine = machine.lock().unwrap();
                let event = if machine.state() == "idle" { "start" } else { "stop" };
                machine.trigger(event).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut machine = machine.lock().unwrap();
    assert_eq!(machine.state(), "idle");
    assert_eq!(machine.history().undo_stack().len(), 4);

    machine.clear_history();
    assert!(!machine.undo());
    assert_eq!(machine.state(), "idle");
}
