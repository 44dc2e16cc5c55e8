//! Target resolution
//!
//! Merges `initial`/`animate`/`exit`, `whileHover` and `whileTap` with the
//! element's mount phase and gesture state into the single [`Target`] the
//! element should show right now. Resolution is a pure function of its
//! inputs; no previous target is consulted and nothing is interpolated.
//!
//! Layering, lowest to highest priority:
//!
//! 1. base: `initial` before mount (when given), `animate` after mount,
//!    `exit` while exiting
//! 2. `whileHover` while hovered
//! 3. `whileTap` while pressed

use crate::gesture::GestureState;
use crate::props::MotionProps;
use crate::target::{Target, TargetSpec, Variants};

/// Where an element is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MountPhase {
    /// Rendered, post-mount effect not yet run
    #[default]
    Initial,
    /// Post-mount effect has run
    Mounted,
    /// Presence is removing the element
    Exiting,
}

impl MountPhase {
    /// Whether sequences should collapse to their first step
    pub fn is_initial(&self) -> bool {
        matches!(self, MountPhase::Initial)
    }
}

/// Resolve a spec to a concrete target
///
/// Unknown variant names resolve to an empty target, as do flags and an
/// absent spec. Lists merge left to right, later entries winning.
pub fn resolve_variant(spec: Option<&TargetSpec>, variants: Option<&Variants>) -> Target {
    let Some(spec) = spec else {
        return Target::new();
    };

    match spec {
        TargetSpec::Target(target) => target.clone(),
        TargetSpec::Variant(name) => match variants.and_then(|v| v.get(name)) {
            Some(target) => target.clone(),
            None => {
                tracing::trace!(variant = %name, "unknown variant, resolving to empty target");
                Target::new()
            }
        },
        TargetSpec::List(specs) => specs.iter().fold(Target::new(), |acc, spec| {
            acc.merged(&resolve_variant(Some(spec), variants))
        }),
        TargetSpec::Flag(_) => Target::new(),
    }
}

/// Pick the spec that forms the base layer for `phase`
fn base_spec(props: &MotionProps, phase: MountPhase) -> Option<&TargetSpec> {
    match phase {
        MountPhase::Initial => props
            .initial
            .as_ref()
            .filter(|spec| !spec.is_flag())
            .or(props.animate.as_ref()),
        MountPhase::Mounted => props.animate.as_ref(),
        MountPhase::Exiting => props.exit.as_ref().or(props.animate.as_ref()),
    }
}

/// Resolve the target an element shows for the given phase and gestures
pub fn resolve_target(props: &MotionProps, phase: MountPhase, gesture: GestureState) -> Target {
    let variants = props.variants.as_ref();
    let mut target = resolve_variant(base_spec(props, phase), variants);

    // A leaving element no longer reacts to the pointer
    if phase == MountPhase::Exiting {
        return target;
    }

    if gesture.hover {
        if let Some(hover) = props.while_hover.as_ref() {
            target.merge(&resolve_variant(Some(hover), variants));
        }
    }

    if gesture.tap {
        if let Some(tap) = props.while_tap.as_ref() {
            target.merge(&resolve_variant(Some(tap), variants));
        }
    }

    target
}
