//! Motion targets and variants
//!
//! A [`Target`] describes what an element should look like: an ordered map
//! from property name to a scalar or a sequence of keyframe steps.
//!
//! ```rust
//! use bugzx_motion::{target, TargetSpec, Variants};
//!
//! let variants = Variants::new()
//!     .with("hidden", target! { opacity: 0, y: 20 })
//!     .with("visible", target! { opacity: 1, y: 0 });
//! assert_eq!(variants.get("visible"), Some(&target! { opacity: 1, y: 0 }));
//!
//! let animate = TargetSpec::from("visible");
//! assert_eq!(animate, TargetSpec::Variant("visible".to_string()));
//!
//! let pulse = target! { scale: [1.0, 1.2, 1.0] };
//! assert_eq!(pulse.keyframed_keys(), vec!["scale"]);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

// =========================================================================
// Values
// =========================================================================

/// A single property value
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }

    /// Render as CSS; numbers get `unit` appended, text passes through
    pub fn to_css(&self, unit: &str) -> String {
        match self {
            Scalar::Number(n) => format!("{}{unit}", bugzx_animation::css::number(*n)),
            Scalar::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(""))
    }
}

macro_rules! scalar_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::Number(f64::from(value))
                }
            }

            impl From<$ty> for TargetValue {
                fn from(value: $ty) -> Self {
                    TargetValue::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_from_number!(f64, f32, i32, u32, i16, u16, i8, u8);

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// A property value: one scalar, or keyframe steps
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetValue {
    Scalar(Scalar),
    Sequence(Vec<Scalar>),
}

impl TargetValue {
    /// Steps, if this is a sequence
    pub fn as_sequence(&self) -> Option<&[Scalar]> {
        match self {
            TargetValue::Sequence(steps) => Some(steps),
            TargetValue::Scalar(_) => None,
        }
    }

    /// Whether this value can drive a keyframe animation (two or more steps)
    pub fn is_keyframed(&self) -> bool {
        self.as_sequence().is_some_and(|steps| steps.len() >= 2)
    }

    /// The scalar that stands in for this value in a static style
    ///
    /// Sequences yield their first step during the initial phase and their
    /// last step afterwards. Empty sequences yield nothing.
    pub fn representative(&self, initial_phase: bool) -> Option<&Scalar> {
        match self {
            TargetValue::Scalar(scalar) => Some(scalar),
            TargetValue::Sequence(steps) if initial_phase => steps.first(),
            TargetValue::Sequence(steps) => steps.last(),
        }
    }

    /// Value at keyframe step `index`; scalars hold at every step
    pub fn step(&self, index: usize) -> Option<&Scalar> {
        match self {
            TargetValue::Scalar(scalar) => Some(scalar),
            TargetValue::Sequence(steps) => steps.get(index),
        }
    }
}

impl From<Scalar> for TargetValue {
    fn from(value: Scalar) -> Self {
        TargetValue::Scalar(value)
    }
}

impl From<&str> for TargetValue {
    fn from(value: &str) -> Self {
        TargetValue::Scalar(value.into())
    }
}

impl From<String> for TargetValue {
    fn from(value: String) -> Self {
        TargetValue::Scalar(value.into())
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for TargetValue {
    fn from(values: Vec<T>) -> Self {
        TargetValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for TargetValue {
    fn from(values: [T; N]) -> Self {
        TargetValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

// =========================================================================
// Target
// =========================================================================

/// Ordered property map describing a visual state
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Target(IndexMap<String, TargetValue>);

impl Target {
    /// Create an empty target
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a property
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TargetValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a property. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TargetValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&TargetValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<TargetValue> {
        self.0.shift_remove(key)
    }

    /// Shallow merge: keys from `other` override keys in `self`
    pub fn merge(&mut self, other: &Target) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Builder form of [`merge`](Self::merge)
    pub fn merged(mut self, other: &Target) -> Self {
        self.merge(other);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys whose values hold two or more keyframe steps, in target order
    pub fn keyframed_keys(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, value)| value.is_keyframed())
            .map(|(key, _)| key)
            .collect()
    }
}

impl<K: Into<String>, V: Into<TargetValue>> FromIterator<(K, V)> for Target {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Target(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =========================================================================
// Variants and target specs
// =========================================================================

/// Named, reusable targets
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Variants(IndexMap<String, Target>);

impl Variants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a variant
    pub fn with(mut self, name: impl Into<String>, target: Target) -> Self {
        self.insert(name, target);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, target: Target) {
        self.0.insert(name.into(), target);
    }

    pub fn get(&self, name: &str) -> Option<&Target> {
        self.0.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Where a target comes from in motion props
///
/// `initial`, `animate`, `exit`, `whileHover` and `whileTap` each accept a
/// literal target, a variant name, or a list of either merged left to
/// right. A boolean flag (`initial: false`) resolves to nothing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetSpec {
    Flag(bool),
    Variant(String),
    Target(Target),
    List(Vec<TargetSpec>),
}

impl TargetSpec {
    /// Build a list spec
    pub fn list<I, S>(specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TargetSpec>,
    {
        TargetSpec::List(specs.into_iter().map(Into::into).collect())
    }

    /// Whether this is a boolean flag rather than a target source
    pub fn is_flag(&self) -> bool {
        matches!(self, TargetSpec::Flag(_))
    }
}

impl From<Target> for TargetSpec {
    fn from(target: Target) -> Self {
        TargetSpec::Target(target)
    }
}

impl From<&str> for TargetSpec {
    fn from(name: &str) -> Self {
        TargetSpec::Variant(name.to_string())
    }
}

impl From<String> for TargetSpec {
    fn from(name: String) -> Self {
        TargetSpec::Variant(name)
    }
}

impl From<bool> for TargetSpec {
    fn from(flag: bool) -> Self {
        TargetSpec::Flag(flag)
    }
}
