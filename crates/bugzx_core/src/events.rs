//! Event types
//!
//! Pointer and lifecycle events delivered to motion elements by the host.

use std::fmt;

use rustc_hash::FxHashMap;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    /// Drag event (pointer down + move). Accepted, never evaluated by motion.
    pub const DRAG: EventType = 6;
    /// Drag ended
    pub const DRAG_END: EventType = 7;
    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;

    // Element lifecycle events
    pub const MOUNT: EventType = 60;
    pub const UNMOUNT: EventType = 61;

    /// The platform finished playing an animation or transition on the element
    pub const ANIMATION_END: EventType = 90;
}

/// A UI event with associated data
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub event_type: EventType,
    /// Host node the event was dispatched to
    pub target: u64,
    pub data: EventData,
    pub timestamp: u64,
}

/// Event-specific data
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventData {
    Pointer {
        x: f32,
        y: f32,
        button: u8,
    },
    #[default]
    None,
}

impl Event {
    /// Create an event without payload
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            target: 0,
            data: EventData::None,
            timestamp: 0,
        }
    }

    /// Create a pointer event at the given position
    pub fn pointer(event_type: EventType, x: f32, y: f32) -> Self {
        Self {
            data: EventData::Pointer { x, y, button: 0 },
            ..Self::new(event_type)
        }
    }

    /// Builder: set the dispatch target
    pub fn with_target(mut self, target: u64) -> Self {
        self.target = target;
        self
    }

    /// Builder: set the timestamp (milliseconds, host clock)
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Whether this is one of the pointer events motion elements track
    pub fn is_pointer(&self) -> bool {
        use event_types::*;
        matches!(
            self.event_type,
            POINTER_DOWN | POINTER_UP | POINTER_MOVE | POINTER_ENTER | POINTER_LEAVE
        )
    }
}

/// Event handler function type
pub type EventHandler = Box<dyn Fn(&Event) + Send + Sync>;

/// User handlers attached to one element, by event type
#[derive(Default)]
pub struct EventHandlers {
    handlers: FxHashMap<EventType, Vec<EventHandler>>,
}

impl EventHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for an event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(Box::new(handler));
    }

    /// Builder form of [`on`](Self::on)
    pub fn with<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.on(event_type, handler);
        self
    }

    /// Whether any handler listens for `event_type`
    pub fn has(&self, event_type: EventType) -> bool {
        self.handlers
            .get(&event_type)
            .is_some_and(|handlers| !handlers.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(Vec::is_empty)
    }

    /// Call every handler registered for the event's type, in registration
    /// order. Returns the number of handlers called.
    pub fn dispatch(&self, event: &Event) -> usize {
        let Some(handlers) = self.handlers.get(&event.event_type) else {
            return 0;
        };
        for handler in handlers {
            handler(event);
        }
        handlers.len()
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut types: Vec<_> = self.handlers.keys().copied().collect();
        types.sort_unstable();
        f.debug_struct("EventHandlers").field("types", &types).finish()
    }
}
