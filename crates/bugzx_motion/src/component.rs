//! Motion components
//!
//! `motion("div")` returns the motion-enabled wrapper for a host tag. Each
//! tag is materialized once and memoized for the process lifetime, so every
//! lookup of the same tag yields the same [`Arc<MotionComponent>`].
//!
//! A component is a description; per-element state lives in the
//! [`MotionInstance`] it instantiates:
//!
//! ```rust
//! use bugzx_motion::{motion, MotionConfig, MotionElementProps};
//!
//! # fn main() -> bugzx_motion::Result<()> {
//! let button = motion("button");
//! let mut instance = button.instantiate();
//! let config = MotionConfig::default();
//!
//! let props = MotionElementProps::from_json(serde_json::json!({
//!     "initial": { "opacity": 0 },
//!     "animate": { "opacity": 1 },
//!     "whileTap": { "scale": 0.95 },
//!     "type": "submit",
//! }))?;
//!
//! let first = instance.render_with(&props, &config);
//! assert_eq!(first.style_value("opacity"), Some("0"));
//! assert_eq!(first.attributes["type"], "submit");
//!
//! instance.mount();
//! let settled = instance.render_with(&props, &config);
//! assert_eq!(settled.style_value("opacity"), Some("1"));
//! assert!(settled.style_value("transition").is_some());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use bugzx_core::events::{event_types, Event, EventHandlers};
use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use crate::config::MotionConfig;
use crate::error::{MotionError, Result};
use crate::gesture::{GestureState, GestureTracker};
use crate::props::{split_motion_props, Attributes, MotionProps};
use crate::resolver::{resolve_target, MountPhase};
use crate::style::{animated_style, css_property_name, css_value, inline_style, StyleMap};
use crate::target::Scalar;

/// Global component factory
static MOTION_FACTORY: OnceLock<MotionFactory> = OnceLock::new();

/// Instance id counter, unique across all components
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

// =========================================================================
// Element handle
// =========================================================================

/// Shared slot the host fills with the rendered node's id
///
/// Cloning shares the slot, so a handle passed in props can be read back by
/// its owner after the host attaches the node.
#[derive(Clone, Debug, Default)]
pub struct ElementHandle {
    node: Arc<Mutex<Option<u64>>>,
}

impl ElementHandle {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<u64>> {
        self.node.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach the host node
    pub fn attach(&self, node_id: u64) {
        *self.slot() = Some(node_id);
    }

    /// Clear the slot when the node goes away
    pub fn detach(&self) {
        *self.slot() = None;
    }

    /// The attached node, if any
    pub fn get(&self) -> Option<u64> {
        *self.slot()
    }

    /// Whether two handles share one slot
    pub fn ptr_eq(&self, other: &ElementHandle) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

// =========================================================================
// Element props
// =========================================================================

/// Everything passed to one motion element
#[derive(Debug, Default)]
pub struct MotionElementProps {
    pub motion: MotionProps,
    /// Forwarded to the host element untouched
    pub attributes: Attributes,
    /// The user's own style; animated properties override it
    pub style: StyleMap,
    pub handle: Option<ElementHandle>,
    pub handlers: EventHandlers,
}

impl MotionElementProps {
    pub fn new(motion: MotionProps) -> Self {
        Self {
            motion,
            ..Default::default()
        }
    }

    /// Build from a JSON prop bag
    ///
    /// Motion props are split off, a `style` object becomes the user style
    /// and the rest is forwarded as attributes.
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(MotionError::InvalidProp {
                name: "props".to_string(),
                reason: "expected an object".to_string(),
            });
        };

        let (motion, mut attributes) = split_motion_props(map)?;
        let style = match attributes.shift_remove("style") {
            Some(Value::Object(style)) => user_style(style)?,
            Some(Value::Null) | None => StyleMap::new(),
            Some(_) => {
                return Err(MotionError::InvalidProp {
                    name: "style".to_string(),
                    reason: "expected an object".to_string(),
                })
            }
        };

        Ok(Self {
            motion,
            attributes,
            style,
            handle: None,
            handlers: EventHandlers::new(),
        })
    }

    /// Builder: set a user style property (CSS name and final value)
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Builder: forward an attribute
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder: attach an element handle
    pub fn handle(mut self, handle: ElementHandle) -> Self {
        self.handle = Some(handle);
        self
    }

    /// Builder: set event handlers
    pub fn handlers(mut self, handlers: EventHandlers) -> Self {
        self.handlers = handlers;
        self
    }
}

fn user_style(style: Map<String, Value>) -> Result<StyleMap> {
    let mut out = StyleMap::new();
    for (key, value) in style {
        let scalar: Scalar = match value {
            Value::Null => continue,
            Value::Number(n) => Scalar::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Scalar::Text(s),
            other => {
                return Err(MotionError::InvalidProp {
                    name: format!("style.{key}"),
                    reason: format!("expected a string or number, got {other}"),
                })
            }
        };
        let property = css_property_name(&key);
        let value = css_value(&property, &scalar);
        out.insert(property, value);
    }
    Ok(out)
}

// =========================================================================
// Rendered output
// =========================================================================

/// What the host should draw for one motion element
#[derive(Clone, Debug)]
pub struct RenderedElement {
    pub tag: String,
    pub attributes: Attributes,
    pub style: StyleMap,
    pub handle: Option<ElementHandle>,
}

impl RenderedElement {
    /// Style as an inline `style` attribute value
    pub fn style_string(&self) -> String {
        inline_style(&self.style)
    }

    /// Look up one style property
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }
}

// =========================================================================
// Component and instance
// =========================================================================

/// The motion wrapper for one host tag
#[derive(Debug)]
pub struct MotionComponent {
    tag: String,
    display_name: String,
}

impl MotionComponent {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            display_name: format!("Motion.{tag}"),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Debug name, `Motion.<tag>`
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Create a new element of this component
    pub fn instantiate(&self) -> MotionInstance {
        let id = NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(tag = %self.tag, id, "motion instance created");
        MotionInstance {
            id,
            tag: self.tag.clone(),
            gesture: GestureTracker::new(),
            phase: MountPhase::Initial,
        }
    }
}

/// Per-element motion state
#[derive(Debug)]
pub struct MotionInstance {
    id: u64,
    tag: String,
    gesture: GestureTracker,
    phase: MountPhase,
}

impl MotionInstance {
    /// Process-unique instance id
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn phase(&self) -> MountPhase {
        self.phase
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture.state()
    }

    /// Name of this instance's compiled keyframe block
    pub fn animation_name(&self, config: &MotionConfig) -> String {
        format!("{}-{}", config.keyframe_prefix, self.id)
    }

    /// Run the post-mount effect. Returns false if already mounted or exiting.
    pub fn mount(&mut self) -> bool {
        if self.phase != MountPhase::Initial {
            return false;
        }
        self.phase = MountPhase::Mounted;
        true
    }

    /// Switch to the exit target. Returns false if already exiting.
    pub fn begin_exit(&mut self) -> bool {
        if self.phase == MountPhase::Exiting {
            return false;
        }
        self.phase = MountPhase::Exiting;
        true
    }

    /// Feed a host event to the element
    ///
    /// Gesture state and mount phase are updated first, then the user's
    /// handlers for the event run. Returns true if the element needs to
    /// re-render.
    pub fn dispatch(&mut self, event: &Event, handlers: &EventHandlers) -> bool {
        let changed = match event.event_type {
            event_types::MOUNT => self.mount(),
            event_types::UNMOUNT => self.begin_exit(),
            event_type => self.gesture.handle(event_type),
        };
        handlers.dispatch(event);
        changed
    }

    /// Render with the process-wide config
    pub fn render(&self, props: &MotionElementProps) -> RenderedElement {
        self.render_with(props, MotionConfig::current())
    }

    /// Render with an explicit config
    pub fn render_with(&self, props: &MotionElementProps, config: &MotionConfig) -> RenderedElement {
        let target = resolve_target(&props.motion, self.phase, self.gesture.state());
        let animated = animated_style(
            &target,
            props.motion.transition.as_ref(),
            self.phase,
            &self.animation_name(config),
            config,
        );

        let mut style = props.style.clone();
        for (property, value) in animated {
            style.insert(property, value);
        }

        RenderedElement {
            tag: self.tag.clone(),
            attributes: props.attributes.clone(),
            style,
            handle: props.handle.clone(),
        }
    }
}

// =========================================================================
// Factory
// =========================================================================

/// Memoizing component factory keyed by tag
pub struct MotionFactory {
    components: Mutex<FxHashMap<String, Arc<MotionComponent>>>,
}

impl MotionFactory {
    fn new() -> Self {
        Self {
            components: Mutex::new(FxHashMap::default()),
        }
    }

    /// Get the global factory, creating it on first use
    pub fn global() -> &'static MotionFactory {
        MOTION_FACTORY.get_or_init(MotionFactory::new)
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<String, Arc<MotionComponent>>> {
        self.components.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The component for `tag`, materialized on first request
    pub fn component(&self, tag: &str) -> Arc<MotionComponent> {
        let mut components = self.lock();
        if let Some(component) = components.get(tag) {
            return Arc::clone(component);
        }
        tracing::debug!(tag, "materializing motion component");
        let component = Arc::new(MotionComponent::new(tag));
        components.insert(tag.to_string(), Arc::clone(&component));
        component
    }

    /// Whether `tag` has been materialized
    pub fn contains(&self, tag: &str) -> bool {
        self.lock().contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl fmt::Debug for MotionFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionFactory")
            .field("components", &self.len())
            .finish()
    }
}

/// The motion component for `tag` from the global factory
pub fn motion(tag: &str) -> Arc<MotionComponent> {
    MotionFactory::global().component(tag)
}
