//! bugzx Motion
//!
//! Declarative motion for host elements: describe what an element should look
//! like and when, and get back the final style, including CSS transitions and
//! generated `@keyframes` animations.
//!
//! # Features
//!
//! - **Targets and Variants**: ordered property maps, named and composable
//! - **Resolution**: `initial`/`animate`/`exit` layered with `whileHover` and
//!   `whileTap` according to mount phase and gesture state
//! - **Style Synthesis**: transform composition, SVG path drawing, CSS
//!   `transition` shorthand
//! - **Keyframe Compilation**: sequence values become registered
//!   `@keyframes` blocks; infinite rotation reuses a built-in spin
//! - **Components**: one memoized motion wrapper per host tag
//! - **Presence**: keyed children kept alive through their exit animation
//!
//! # Example
//!
//! ```rust
//! use bugzx_motion::{motion, target, MotionConfig, MotionElementProps, MotionProps};
//!
//! let props = MotionElementProps::new(
//!     MotionProps::new()
//!         .initial(target! { opacity: 0, y: 20 })
//!         .animate(target! { opacity: 1, y: 0 }),
//! );
//!
//! let mut card = motion("div").instantiate();
//! let config = MotionConfig::default();
//!
//! let entering = card.render_with(&props, &config);
//! assert_eq!(entering.style_value("transform"), Some("translateY(20px)"));
//!
//! card.mount();
//! let settled = card.render_with(&props, &config);
//! assert_eq!(settled.style_value("opacity"), Some("1"));
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod gesture;
pub mod keyframes;
pub mod presence;
pub mod presets;
pub mod props;
pub mod resolver;
pub mod style;
pub mod target;
pub mod transform;

pub use component::{
    motion, ElementHandle, MotionComponent, MotionElementProps, MotionFactory, MotionInstance,
    RenderedElement,
};
pub use config::MotionConfig;
pub use error::{MotionError, Result};
pub use gesture::{GestureState, GestureTracker};
pub use keyframes::{compile_keyframes, plan_animation, AnimationPlan, CompiledKeyframes};
pub use presence::{PresenceChild, PresenceCoordinator, PresenceEvent, PresenceState};
pub use props::{split_motion_props, Attributes, MotionProps, MOTION_PROPS};
pub use resolver::{resolve_target, resolve_variant, MountPhase};
pub use style::{animated_style, synthesize_style, StyleMap};
pub use target::{Scalar, Target, TargetSpec, TargetValue, Variants};
pub use transform::compose_transform;

pub use bugzx_animation::{Easing, KeyframeRegistry, Repeat, RepeatType, Transition};

/// Build a [`Target`] from `key: value` pairs
///
/// Keys are written as identifiers (`opacity`, `rotateX`, `backgroundColor`);
/// values are anything convertible into a [`TargetValue`], including arrays
/// for keyframe sequences.
///
/// ```rust
/// use bugzx_motion::target;
///
/// let pulse = target! { scale: [1.0, 1.2, 1.0], opacity: 1 };
/// assert_eq!(pulse.keyframed_keys(), vec!["scale"]);
/// ```
#[macro_export]
macro_rules! target {
    () => {
        $crate::target::Target::new()
    };
    ($($key:ident : $value:expr),+ $(,)?) => {{
        let mut __target = $crate::target::Target::new();
        $(
            __target.insert(stringify!($key), $value);
        )+
        __target
    }};
}

/// Common imports
pub mod prelude {
    pub use crate::component::{motion, ElementHandle, MotionElementProps, RenderedElement};
    pub use crate::config::MotionConfig;
    pub use crate::presence::{PresenceChild, PresenceCoordinator, PresenceState};
    pub use crate::presets::page_transition;
    pub use crate::props::MotionProps;
    pub use crate::target::{Target, TargetSpec, Variants};
    pub use bugzx_animation::{Easing, RepeatType, Transition};
    pub use bugzx_core::events::{event_types, Event, EventHandlers};
}
