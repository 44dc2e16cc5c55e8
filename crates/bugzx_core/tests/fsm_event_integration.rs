//! Integration tests for events + FSM
//!
//! These tests verify that:
//! - Host events can drive a state machine through user handlers
//! - Ignored events leave the machine where it is
//! - Lifecycle handlers stay isolated from pointer handlers

use bugzx_core::events::{event_types, Event, EventHandlers};
use bugzx_core::fsm::StateMachine;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Button {
    Idle,
    Hovered,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Input {
    Enter,
    Leave,
    Down,
    Up,
}

fn button_machine() -> StateMachine<Button, Input> {
    StateMachine::builder(Button::Idle)
        .on(Button::Idle, Input::Enter, Button::Hovered)
        .on(Button::Hovered, Input::Leave, Button::Idle)
        .on(Button::Hovered, Input::Down, Button::Pressed)
        .on(Button::Pressed, Input::Up, Button::Hovered)
        .on(Button::Pressed, Input::Leave, Button::Idle)
        .build()
}

fn input_for(event: &Event) -> Option<Input> {
    match event.event_type {
        event_types::POINTER_ENTER => Some(Input::Enter),
        event_types::POINTER_LEAVE => Some(Input::Leave),
        event_types::POINTER_DOWN => Some(Input::Down),
        event_types::POINTER_UP => Some(Input::Up),
        _ => None,
    }
}

/// Handlers registered per event type feed one shared machine
#[test]
fn test_handlers_drive_machine() {
    let machine = Arc::new(Mutex::new(button_machine()));
    let mut handlers = EventHandlers::new();

    for event_type in [
        event_types::POINTER_ENTER,
        event_types::POINTER_LEAVE,
        event_types::POINTER_DOWN,
        event_types::POINTER_UP,
    ] {
        let machine = Arc::clone(&machine);
        handlers.on(event_type, move |event| {
            if let Some(input) = input_for(event) {
                machine.lock().unwrap().send(input);
            }
        });
    }

    handlers.dispatch(&Event::pointer(event_types::POINTER_ENTER, 1.0, 1.0));
    handlers.dispatch(&Event::pointer(event_types::POINTER_DOWN, 1.0, 1.0));
    assert_eq!(machine.lock().unwrap().current_state(), Button::Pressed);

    handlers.dispatch(&Event::pointer(event_types::POINTER_LEAVE, 9.0, 9.0));
    assert_eq!(machine.lock().unwrap().current_state(), Button::Idle);

    // Up has no transition from Idle
    handlers.dispatch(&Event::pointer(event_types::POINTER_UP, 9.0, 9.0));
    assert!(machine.lock().unwrap().is_in(Button::Idle));
}

/// Events with no transition from the current state are dropped
#[test]
fn test_unhandled_inputs_ignored() {
    let mut machine = button_machine();

    assert!(!machine.can_send(Input::Up));
    assert_eq!(machine.send(Input::Up), Button::Idle);
    assert_eq!(machine.send(Input::Leave), Button::Idle);
    assert!(machine.is_in(Button::Idle));
}

/// Handlers that do not feed the machine leave it untouched
#[test]
fn test_unrelated_events_skip_machine() {
    let machine = Arc::new(Mutex::new(button_machine()));
    let sent = Arc::new(AtomicUsize::new(0));

    let target = Arc::clone(&machine);
    let count = Arc::clone(&sent);
    let handlers = EventHandlers::new().with(event_types::FOCUS, move |event| {
        if let Some(input) = input_for(event) {
            target.lock().unwrap().send(input);
            count.fetch_add(1, Ordering::SeqCst);
        }
    });

    assert_eq!(handlers.dispatch(&Event::new(event_types::FOCUS)), 1);
    assert_eq!(sent.load(Ordering::SeqCst), 0);
    assert_eq!(machine.lock().unwrap().current_state(), Button::Idle);
}

/// Lifecycle events reach their own handlers only
#[test]
fn test_lifecycle_handlers_isolated() {
    let mounts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&mounts);
    let handlers = EventHandlers::new().with(event_types::MOUNT, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(handlers.dispatch(&Event::new(event_types::UNMOUNT)), 0);
    assert_eq!(handlers.dispatch(&Event::new(event_types::MOUNT).with_target(3)), 1);
    assert_eq!(mounts.load(Ordering::SeqCst), 1);
}
