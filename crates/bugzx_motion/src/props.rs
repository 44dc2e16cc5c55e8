//! Motion props and prop splitting
//!
//! A motion element receives one prop bag. Motion props drive animation and
//! are never forwarded; everything else is passed to the underlying element.

use bugzx_animation::Transition;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{MotionError, Result};
use crate::target::{TargetSpec, Variants};

/// Every prop name the motion layer claims
///
/// Only `initial`, `animate`, `exit`, `transition`, `variants`,
/// `whileHover` and `whileTap` are evaluated; the rest are accepted so they
/// are not leaked onto the element.
pub const MOTION_PROPS: &[&str] = &[
    "initial",
    "animate",
    "exit",
    "transition",
    "variants",
    "whileHover",
    "whileTap",
    "whileDrag",
    "whileFocus",
    "whileInView",
    "layout",
    "layoutId",
    "drag",
    "dragControls",
    "dragListener",
    "dragConstraints",
    "dragElastic",
    "dragMomentum",
    "dragPropagation",
    "onDragStart",
    "onDragEnd",
    "onDrag",
    "onDirectionLock",
    "onDragTransitionEnd",
    "onAnimationStart",
    "onAnimationComplete",
    "onUpdate",
    "onPan",
    "onPanStart",
    "onPanEnd",
    "onTap",
    "onTapStart",
    "onTapCancel",
    "onHoverStart",
    "onHoverEnd",
    "viewport",
    "custom",
    "inherit",
];

/// Motion props that are evaluated
const EVALUATED_PROPS: &[&str] = &[
    "initial",
    "animate",
    "exit",
    "transition",
    "variants",
    "whileHover",
    "whileTap",
];

/// Whether `name` is claimed by the motion layer
pub fn is_motion_prop(name: &str) -> bool {
    MOTION_PROPS.contains(&name)
}

/// Non-motion props forwarded to the element, in original order
pub type Attributes = IndexMap<String, Value>;

/// Declarative motion props for one element
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionProps {
    pub initial: Option<TargetSpec>,
    pub animate: Option<TargetSpec>,
    pub exit: Option<TargetSpec>,
    pub variants: Option<Variants>,
    pub transition: Option<Transition>,
    pub while_hover: Option<TargetSpec>,
    pub while_tap: Option<TargetSpec>,
    /// Recognized motion props that are carried but never evaluated
    #[serde(skip)]
    pub inert: IndexMap<String, Value>,
}

impl MotionProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set `initial`
    pub fn initial(mut self, spec: impl Into<TargetSpec>) -> Self {
        self.initial = Some(spec.into());
        self
    }

    /// Builder: set `animate`
    pub fn animate(mut self, spec: impl Into<TargetSpec>) -> Self {
        self.animate = Some(spec.into());
        self
    }

    /// Builder: set `exit`
    pub fn exit(mut self, spec: impl Into<TargetSpec>) -> Self {
        self.exit = Some(spec.into());
        self
    }

    /// Builder: set `variants`
    pub fn variants(mut self, variants: Variants) -> Self {
        self.variants = Some(variants);
        self
    }

    /// Builder: set `transition`
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// Builder: set `whileHover`
    pub fn while_hover(mut self, spec: impl Into<TargetSpec>) -> Self {
        self.while_hover = Some(spec.into());
        self
    }

    /// Builder: set `whileTap`
    pub fn while_tap(mut self, spec: impl Into<TargetSpec>) -> Self {
        self.while_tap = Some(spec.into());
        self
    }
}

/// Split a prop bag into motion props and forwarded attributes
///
/// `null` motion props count as absent. A motion prop whose value has the
/// wrong shape fails with [`MotionError::InvalidProp`].
pub fn split_motion_props(props: Map<String, Value>) -> Result<(MotionProps, Attributes)> {
    let mut evaluated = Map::new();
    let mut inert = IndexMap::new();
    let mut attributes = Attributes::new();

    for (name, value) in props {
        if EVALUATED_PROPS.contains(&name.as_str()) {
            if !value.is_null() {
                evaluated.insert(name, value);
            }
        } else if is_motion_prop(&name) {
            tracing::debug!(prop = %name, "motion prop accepted but not evaluated");
            inert.insert(name, value);
        } else {
            attributes.insert(name, value);
        }
    }

    // Deserialize field by field so errors name the offending prop
    let mut motion = MotionProps::default();
    for (name, value) in evaluated {
        match name.as_str() {
            "initial" => motion.initial = Some(parse_prop(&name, value)?),
            "animate" => motion.animate = Some(parse_prop(&name, value)?),
            "exit" => motion.exit = Some(parse_prop(&name, value)?),
            "variants" => motion.variants = Some(parse_prop(&name, value)?),
            "transition" => motion.transition = Some(parse_prop(&name, value)?),
            "whileHover" => motion.while_hover = Some(parse_prop(&name, value)?),
            "whileTap" => motion.while_tap = Some(parse_prop(&name, value)?),
            _ => {}
        }
    }
    motion.inert = inert;

    Ok((motion, attributes))
}

fn parse_prop<T: serde::de::DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| MotionError::InvalidProp {
        name: name.to_string(),
        reason: err.to_string(),
    })
}

impl MotionProps {
    /// Parse motion props from a JSON object, ignoring non-motion keys
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        split_motion_props(map).map(|(motion, _)| motion)
    }
}
