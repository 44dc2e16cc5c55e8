//! Ready-made motion props

use bugzx_animation::Transition;

use crate::props::MotionProps;
use crate::target::Target;

/// Duration of the page transition, in seconds
pub const PAGE_TRANSITION_DURATION: f64 = 0.3;

/// Slide-and-fade for route changes
///
/// Enters from the right, leaves to the left. Pair with a
/// [`PresenceCoordinator`](crate::presence::PresenceCoordinator) keyed by
/// route path so the old page can finish leaving.
pub fn page_transition() -> MotionProps {
    MotionProps::new()
        .initial(Target::new().with("opacity", 0).with("x", 20))
        .animate(Target::new().with("opacity", 1).with("x", 0))
        .exit(Target::new().with("opacity", 0).with("x", -20))
        .transition(Transition::new(PAGE_TRANSITION_DURATION))
}
