//! bugzx Animation Primitives
//!
//! Transitions, easing, and keyframe blocks for the motion engine.
//!
//! # Features
//!
//! - **Transitions**: duration/delay/ease/repeat metadata rendered as CSS
//!   `transition` or `animation` shorthands
//! - **Easing**: named and cubic-bezier timing functions
//! - **Keyframe Blocks**: percentage-indexed rules rendered as `@keyframes`
//! - **Registry**: one process-wide, append-only home for compiled blocks,
//!   seeded with the built-in `spin` and `pulse` presets
//!
//! Interpolation itself is left to the platform compositor. Spring
//! parameters are accepted and forwarded, never integrated.

pub mod css;
pub mod easing;
pub mod keyframe;
pub mod presets;
pub mod registry;
pub mod transition;

pub use easing::Easing;
pub use keyframe::{step_percent, Declaration, KeyframeBlock, KeyframeRule};
pub use registry::{KeyframeRegistry, Registration};
pub use transition::{
    Repeat, RepeatType, SpringParams, Transition, TransitionKind, DEFAULT_KEYFRAME_DURATION,
    DEFAULT_TRANSITION_DURATION,
};
