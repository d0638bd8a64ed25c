//! Tests for the conversation engine.

use super::*;
use crate::models::ConversationState;
use crate::store::{MemoryStore, SessionStore};

const KEY: i64 = 1234;

fn create_test_engine() -> Engine {
    Engine::new(MemoryStore::new())
}

/// Feeds a sequence of text inputs after /start and returns the last reply.
fn drive(engine: &Engine, inputs: &[&str]) -> Reply {
    let mut reply = engine.handle(KEY, Event::Start).expect("start failed");
    for input in inputs {
        reply = engine
            .handle(KEY, Event::Text((*input).to_string()))
            .unwrap_or_else(|e| panic!("input {input:?} failed: {e}"));
    }
    reply
}

/// The inputs that take a fresh session through one complete stage.
const ONE_STAGE: &[&str] = &[
    "Q1 Plan",
    "Kickoff",
    "01.01.2025",
    "15.01.2025",
    "Align team",
    "Kickoff meeting, doc review",
];

#[test]
fn test_full_flow_exports_document() {
    let engine = create_test_engine();
    let mut inputs = ONE_STAGE.to_vec();
    inputs.push(BUTTON_FINISH);

    let reply = drive(&engine, &inputs);
    assert_eq!(reply.text, "Your plan is ready!");
    assert_eq!(reply.keyboard, Keyboard::Remove);

    let document = reply.document.expect("no document in export reply");
    assert_eq!(document.filename, "plan_1234.md");

    let text = String::from_utf8(document.bytes).unwrap();
    assert!(text.contains("# Q1 Plan"));
    assert!(text.contains("## Stage 1: Kickoff"));
    assert!(text.contains("Period: from 01.01.2025 to 15.01.2025"));
    assert!(text.contains("Goal: Align team"));
    assert!(text.contains("Activities: Kickoff meeting, doc review"));
}

#[test]
fn test_export_terminates_session() {
    let engine = create_test_engine();
    let mut inputs = ONE_STAGE.to_vec();
    inputs.push(BUTTON_FINISH);
    drive(&engine, &inputs);

    // The conversation is over; further text lands in the idle hint.
    let reply = engine
        .handle(KEY, Event::Text("hello".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send /start to begin a new plan.");
}

#[test]
fn test_add_more_appends_stages_in_order() {
    let engine = create_test_engine();
    let mut inputs: Vec<&str> = ONE_STAGE.to_vec();
    for stage in [
        &["Build", "16.01.2025", "28.02.2025", "Ship features", "Coding"][..],
        &["Launch", "01.03.2025", "15.03.2025", "Go live", "Release, announce"][..],
    ] {
        inputs.push(BUTTON_ADD_STAGE);
        inputs.extend_from_slice(stage);
    }
    inputs.push(BUTTON_FINISH);

    let reply = drive(&engine, &inputs);
    let text = String::from_utf8(reply.document.expect("no document").bytes).unwrap();

    assert!(text.contains("## Stage 1: Kickoff"));
    assert!(text.contains("## Stage 2: Build"));
    assert!(text.contains("## Stage 3: Launch"));
    assert!(!text.contains("## Stage 4:"));
}

#[test]
fn test_invalid_start_date_reprompts_without_advancing() {
    let engine = create_test_engine();
    let reply = drive(&engine, &["Q1 Plan", "Kickoff", "31.02.2024"]);
    assert_eq!(reply.text, "Invalid date format. Try again (DD.MM.YYYY):");

    // Still in AwaitingStartDate: a valid date now moves to the end-date
    // prompt.
    let reply = engine
        .handle(KEY, Event::Text("01.01.2025".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send the stage end date (DD.MM.YYYY):");
}

#[test]
fn test_invalid_end_date_reprompts_without_advancing() {
    let engine = create_test_engine();
    let reply = drive(
        &engine,
        &["Q1 Plan", "Kickoff", "01.01.2025", "2025-01-15"],
    );
    assert_eq!(reply.text, "Invalid date format. Try again (DD.MM.YYYY):");

    let reply = engine
        .handle(KEY, Event::Text("15.01.2025".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send the stage goal:");
}

#[test]
fn test_unrecognized_next_action_reprompts_with_keyboard() {
    let engine = create_test_engine();
    let reply = drive(&engine, ONE_STAGE);
    assert_eq!(reply.keyboard, Keyboard::NextAction);

    let reply = engine
        .handle(KEY, Event::Text("something else".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Please choose one of the options below.");
    assert_eq!(reply.keyboard, Keyboard::NextAction);
    assert!(reply.document.is_none());

    // The choice is exact-match; close variants do not count.
    let reply = engine
        .handle(KEY, Event::Text("finish and export".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Please choose one of the options below.");

    // The real button still works afterwards.
    let reply = engine
        .handle(KEY, Event::Text(BUTTON_FINISH.to_string()))
        .unwrap();
    assert!(reply.document.is_some());
}

#[test]
fn test_finish_with_no_stages_skips_renderer() {
    // Place a session directly at the next-action state with no stages;
    // the normal flow cannot reach this combination.
    let store = MemoryStore::new();
    let mut session = crate::models::Session::new(KEY);
    session.title = "Empty".to_string();
    session.state = ConversationState::AwaitingNextAction;
    store.put(&session).unwrap();

    let engine = Engine::new(store);
    let reply = engine
        .handle(KEY, Event::Text(BUTTON_FINISH.to_string()))
        .unwrap();
    assert_eq!(reply.text, "Nothing to export yet.");
    assert!(reply.document.is_none());

    // The conversation still terminated.
    let reply = engine
        .handle(KEY, Event::Text("more".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send /start to begin a new plan.");
}

#[test]
fn test_restart_discards_previous_session() {
    let engine = create_test_engine();
    drive(&engine, ONE_STAGE);

    // /start mid-conversation throws the old plan away entirely.
    let reply = engine.handle(KEY, Event::Start).unwrap();
    assert!(reply.text.contains("send the plan title"));

    let mut inputs: Vec<&str> = vec![
        "Fresh Plan",
        "Only Stage",
        "01.06.2025",
        "30.06.2025",
        "New goal",
        "New activities",
        BUTTON_FINISH,
    ];
    let mut reply = Reply::text("");
    for input in inputs.drain(..) {
        reply = engine.handle(KEY, Event::Text(input.to_string())).unwrap();
    }

    let text = String::from_utf8(reply.document.expect("no document").bytes).unwrap();
    assert!(text.contains("# Fresh Plan"));
    assert!(text.contains("## Stage 1: Only Stage"));
    assert!(!text.contains("Q1 Plan"));
    assert!(!text.contains("Kickoff"));
}

#[test]
fn test_cancel_clears_session_at_any_state() {
    let engine = create_test_engine();
    drive(&engine, &["Q1 Plan", "Kickoff", "01.01.2025"]);

    let reply = engine.handle(KEY, Event::Cancel).unwrap();
    assert_eq!(reply.text, "Plan creation cancelled.");
    assert_eq!(reply.keyboard, Keyboard::Remove);

    // Subsequent start begins from a fully empty session.
    let mut inputs = ONE_STAGE.to_vec();
    inputs.push(BUTTON_FINISH);
    let reply = drive(&engine, &inputs);
    let text = String::from_utf8(reply.document.expect("no document").bytes).unwrap();
    assert!(text.contains("## Stage 1: Kickoff"));
    assert!(!text.contains("## Stage 2:"));
}

#[test]
fn test_text_without_session_prompts_start() {
    let engine = create_test_engine();
    let reply = engine
        .handle(KEY, Event::Text("hello".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send /start to begin a new plan.");
    assert_eq!(reply.keyboard, Keyboard::None);
}

#[test]
fn test_inputs_are_trimmed() {
    let engine = create_test_engine();
    let mut inputs = vec![
        "  Q1 Plan  ",
        " Kickoff ",
        " 01.01.2025 ",
        "15.01.2025",
        "  Align team",
        "Kickoff meeting  ",
    ];
    inputs.push(BUTTON_FINISH);

    let reply = drive(&engine, &inputs);
    let text = String::from_utf8(reply.document.expect("no document").bytes).unwrap();
    assert!(text.contains("# Q1 Plan\n"));
    assert!(text.contains("## Stage 1: Kickoff\n"));
    assert!(text.contains("Period: from 01.01.2025"));
    assert!(text.contains("Goal: Align team\n"));
    assert!(text.contains("Activities: Kickoff meeting\n"));
}

#[test]
fn test_sessions_are_isolated_per_key() {
    let engine = create_test_engine();
    drive(&engine, &["Plan A", "Stage A"]);

    // A second user starts and finishes a plan; the first user's state is
    // untouched.
    let other = 5678;
    engine.handle(other, Event::Start).unwrap();
    for input in ["Plan B", "Stage B", "01.02.2025", "28.02.2025", "Goal B", "Work B"] {
        engine.handle(other, Event::Text(input.to_string())).unwrap();
    }
    let reply = engine
        .handle(other, Event::Text(BUTTON_FINISH.to_string()))
        .unwrap();
    let document = reply.document.expect("no document");
    assert_eq!(document.filename, "plan_5678.md");
    let text = String::from_utf8(document.bytes).unwrap();
    assert!(!text.contains("Plan A"));

    // First user is still mid-stage, waiting for a start date.
    let reply = engine
        .handle(KEY, Event::Text("01.01.2025".to_string()))
        .unwrap();
    assert_eq!(reply.text, "Send the stage end date (DD.MM.YYYY):");
}

#[test]
fn test_start_end_ordering_not_enforced() {
    let engine = create_test_engine();
    let reply = drive(
        &engine,
        &[
            "Backwards",
            "Odd stage",
            "15.01.2025",
            "01.01.2025",
            "Goal",
            "Work",
            BUTTON_FINISH,
        ],
    );

    let text = String::from_utf8(reply.document.expect("no document").bytes).unwrap();
    assert!(text.contains("Period: from 15.01.2025 to 01.01.2025"));
}
