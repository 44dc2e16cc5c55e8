//! Hover/tap tracking
//!
//! Each motion element owns one [`GestureTracker`]. Only hover and tap are
//! modelled; drag, pan, focus and in-view props are accepted elsewhere but
//! never evaluated.
//!
//! | event         | effect                    |
//! |---------------|---------------------------|
//! | pointer enter | hover on                  |
//! | pointer leave | hover off, tap off        |
//! | pointer down  | tap on                    |
//! | pointer up    | tap off                   |

use bugzx_core::events::{event_types, EventType};

/// Interaction flags for one element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GestureState {
    pub hover: bool,
    pub tap: bool,
}

/// Per-instance gesture state driven by pointer events
#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flags
    pub fn state(&self) -> GestureState {
        self.state
    }

    fn update(&mut self, next: GestureState) -> bool {
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Pointer entered the element. Returns true if the state changed.
    pub fn pointer_enter(&mut self) -> bool {
        self.update(GestureState {
            hover: true,
            ..self.state
        })
    }

    /// Pointer left the element; a press cannot outlive the hover
    pub fn pointer_leave(&mut self) -> bool {
        self.update(GestureState::default())
    }

    /// Pointer pressed on the element
    pub fn pointer_down(&mut self) -> bool {
        self.update(GestureState {
            tap: true,
            ..self.state
        })
    }

    /// Pointer released
    pub fn pointer_up(&mut self) -> bool {
        self.update(GestureState {
            tap: false,
            ..self.state
        })
    }

    /// Route an event type to the matching handler
    ///
    /// Returns true if the state changed. Unrelated events are ignored.
    pub fn handle(&mut self, event_type: EventType) -> bool {
        match event_type {
            event_types::POINTER_ENTER => self.pointer_enter(),
            event_types::POINTER_LEAVE => self.pointer_leave(),
            event_types::POINTER_DOWN => self.pointer_down(),
            event_types::POINTER_UP => self.pointer_up(),
            _ => false,
        }
    }
}
