//! Presence coordination
//!
//! Keeps keyed children rendered while they play their exit animation.
//! Each key runs its own state machine:
//!
//! ```text
//!            Exit                 ExitComplete
//! Mounted ─────────► Exiting ─────────────────► Removed
//!    ▲                  │
//!    └──────────────────┘
//!          ReEnter
//! ```
//!
//! The host calls [`sync`](PresenceCoordinator::sync) with the children it
//! wants on every render, [`tick`](PresenceCoordinator::tick) from its frame
//! or timer loop, and may short-circuit a timer with
//! [`complete_exit`](PresenceCoordinator::complete_exit) when the platform
//! reports the exit animation finished. Forwarding the host's
//! `ANIMATION_END` event through [`dispatch`](PresenceCoordinator::dispatch)
//! does the same.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use bugzx_animation::Transition;
use bugzx_core::events::{event_types, Event};
use bugzx_core::fsm::StateMachine;
use indexmap::IndexMap;

/// Exit duration used when a child does not specify one
pub const DEFAULT_EXIT_DURATION: Duration = Duration::from_millis(300);

/// Lifecycle state of one keyed child
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresenceState {
    /// Present in the latest children
    Mounted,
    /// Gone from the children, still rendered until its exit finishes
    Exiting,
    /// Exit finished; dropped from the coordinator
    Removed,
}

/// Events driving [`PresenceState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceEvent {
    Exit,
    ReEnter,
    ExitComplete,
}

fn presence_machine() -> StateMachine<PresenceState, PresenceEvent> {
    use PresenceEvent::*;
    use PresenceState::*;

    StateMachine::builder(Mounted)
        .on(Mounted, Exit, Exiting)
        .on(Exiting, ReEnter, Mounted)
        .on(Exiting, ExitComplete, Removed)
        .build()
}

/// A child offered to the coordinator
#[derive(Clone, Debug)]
pub struct PresenceChild<K, T> {
    pub key: K,
    pub child: T,
    /// How long the child needs to leave
    pub exit_duration: Duration,
}

impl<K, T> PresenceChild<K, T> {
    pub fn new(key: K, child: T) -> Self {
        Self {
            key,
            child,
            exit_duration: DEFAULT_EXIT_DURATION,
        }
    }

    /// Builder: set the exit duration
    pub fn with_exit_duration(mut self, exit_duration: Duration) -> Self {
        self.exit_duration = exit_duration;
        self
    }

    /// Child whose exit lasts as long as `transition` (duration plus delay)
    pub fn from_transition(key: K, child: T, transition: &Transition) -> Self {
        Self::new(key, child).with_exit_duration(transition.exit_duration())
    }
}

struct Entry<T> {
    child: T,
    machine: StateMachine<PresenceState, PresenceEvent>,
    exit_duration: Duration,
    deadline: Option<Instant>,
}

impl<T> Entry<T> {
    fn state(&self) -> PresenceState {
        self.machine.current_state()
    }
}

/// Keyed children with deferred removal
pub struct PresenceCoordinator<K, T> {
    entries: IndexMap<K, Entry<T>>,
}

impl<K, T> Default for PresenceCoordinator<K, T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<K, T> PresenceCoordinator<K, T>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the children that should be present now
    ///
    /// New keys render immediately. Keys missing from `children` start
    /// exiting with a deadline of `now + exit_duration`. Exiting keys that
    /// come back are mounted again and keep their position.
    pub fn sync<I>(&mut self, children: I, now: Instant)
    where
        I: IntoIterator<Item = PresenceChild<K, T>>,
    {
        let mut present = Vec::new();

        for PresenceChild {
            key,
            child,
            exit_duration,
        } in children
        {
            match self.entries.get_mut(&key) {
                Some(entry) => {
                    entry.child = child;
                    entry.exit_duration = exit_duration;
                    if entry.machine.is_in(PresenceState::Exiting) {
                        entry.machine.send(PresenceEvent::ReEnter);
                        entry.deadline = None;
                        tracing::debug!(key = ?key, "presence child re-entered");
                    }
                }
                None => {
                    tracing::trace!(key = ?key, "presence child mounted");
                    self.entries.insert(
                        key.clone(),
                        Entry {
                            child,
                            machine: presence_machine(),
                            exit_duration,
                            deadline: None,
                        },
                    );
                }
            }
            present.push(key);
        }

        for (key, entry) in self.entries.iter_mut() {
            if entry.machine.is_in(PresenceState::Mounted) && !present.contains(key) {
                entry.machine.send(PresenceEvent::Exit);
                entry.deadline = Some(now + entry.exit_duration);
                tracing::debug!(key = ?key, exit = ?entry.exit_duration, "presence child exiting");
            }
        }
    }

    /// Remove children whose exit deadline has passed
    ///
    /// Returns the removed keys in render order.
    pub fn tick(&mut self, now: Instant) -> Vec<K> {
        let expired: Vec<K> = self
            .entries
            .iter()
            .filter(|(_, entry)| {
                entry.machine.is_in(PresenceState::Exiting)
                    && entry.deadline.is_some_and(|deadline| deadline <= now)
            })
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            self.finish(key);
        }
        expired
    }

    /// Signal that `key` finished its exit animation
    ///
    /// Returns false if `key` is not exiting.
    pub fn complete_exit(&mut self, key: &K) -> bool {
        let exiting = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.machine.can_send(PresenceEvent::ExitComplete));
        if !exiting {
            return false;
        }
        self.finish(key);
        true
    }

    /// Route a host event for `key`
    ///
    /// `ANIMATION_END` completes an exit; other events are ignored. Returns
    /// true if the child was removed.
    pub fn dispatch(&mut self, key: &K, event: &Event) -> bool {
        match event.event_type {
            event_types::ANIMATION_END => self.complete_exit(key),
            _ => false,
        }
    }

    fn finish(&mut self, key: &K) {
        if let Some(mut entry) = self.entries.shift_remove(key) {
            let state = entry.machine.send(PresenceEvent::ExitComplete);
            debug_assert_eq!(state, PresenceState::Removed);
            tracing::debug!(key = ?key, "presence child removed");
        }
    }

    /// Current state of `key`, or None once removed or never seen
    pub fn state(&self, key: &K) -> Option<PresenceState> {
        self.entries.get(key).map(Entry::state)
    }

    /// Children to render, mounted and exiting, in render order
    pub fn rendered(&self) -> impl Iterator<Item = (&K, &T, PresenceState)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key, &entry.child, entry.state()))
    }

    /// Mutable view of the rendered children, for flipping exiting ones into
    /// their exit target
    pub fn rendered_mut(&mut self) -> impl Iterator<Item = (&K, &mut T, PresenceState)> {
        self.entries
            .iter_mut()
            .map(|(key, entry)| (key, &mut entry.child, entry.machine.current_state()))
    }

    /// Earliest pending exit deadline, for scheduling the next tick
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.values().filter_map(|entry| entry.deadline).min()
    }

    /// Number of rendered children
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Debug, T> Debug for PresenceCoordinator<K, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(key, entry)| (key, entry.machine.current_state())),
            )
            .finish()
    }
}
