//! State Machine Runtime
//!
//! Flat state machines with typed states and events. A machine holds a list
//! of `(from, event, to)` transitions; events with no matching transition
//! from the current state are ignored.
//!
//! Used by the presence coordinator to drive each keyed child through
//! `Mounted -> Exiting -> Removed`.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for state types
pub trait FsmState: Copy + Eq + Hash + Debug + 'static {}

impl<T: Copy + Eq + Hash + Debug + 'static> FsmState for T {}

/// Bound for event types
pub trait FsmEvent: Copy + Eq + Debug + 'static {}

impl<T: Copy + Eq + Debug + 'static> FsmEvent for T {}

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S: FsmState, E: FsmEvent> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }

    fn matches(&self, state: S, event: E) -> bool {
        self.from_state == state && self.event == event
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S: FsmState, E: FsmEvent> StateMachineBuilder<S, E> {
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
        }
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine::new(self.initial_state, self.transitions)
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
}

impl<S: FsmState, E: FsmEvent> StateMachine<S, E> {
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        let current = self.current_state;
        self.transitions.iter().any(|t| t.matches(current, event))
    }

    /// Send an event to the state machine, potentially triggering a transition
    ///
    /// Returns the state after handling the event. Events with no matching
    /// transition leave the machine where it is.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(transition) = self.transitions.iter().find(|t| t.matches(current, event)) else {
            tracing::trace!(?current, ?event, "fsm: event ignored");
            return current;
        };

        self.current_state = transition.to_state;
        self.current_state
    }
}

impl<S: Debug, E> Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateMachine")
            .field("current_state", &self.current_state)
            .field("transitions", &self.transitions.len())
            .finish()
    }
}
