//! bugzx Core
//!
//! Foundational primitives shared by the motion crates:
//!
//! - **Events**: pointer and lifecycle event types delivered by the host
//! - **State Machines**: typed flat state machines driven by events
//!
//! # Example
//!
//! ```rust
//! use bugzx_core::fsm::{StateMachine, Transition};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Phase { Idle, Active }
//!
//! let mut fsm = StateMachine::new(Phase::Idle, vec![Transition::new(Phase::Idle, 1u32, Phase::Active)]);
//! assert_eq!(fsm.send(1), Phase::Active);
//! ```

pub mod events;
pub mod fsm;

pub use events::{event_types, Event, EventData, EventHandler, EventHandlers, EventType};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
