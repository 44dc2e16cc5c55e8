//! Keyframe compilation
//!
//! Sequence-valued properties (`scale: [1, 1.2, 1]`) cannot be expressed as
//! a transition. They are compiled into a percentage-indexed
//! [`KeyframeBlock`] named after the owning instance and registered in the
//! process-wide [`KeyframeRegistry`](bugzx_animation::KeyframeRegistry).
//!
//! Infinitely repeating rotations without sequences reuse the built-in spin
//! block. Every other target without sequences animates through a transition.

use bugzx_animation::{presets, step_percent, KeyframeBlock, KeyframeRule, Transition};

use crate::style::{is_index_key, property_declarations};
use crate::target::{Scalar, Target};
use crate::transform::{compose_transform, is_transform_key};

/// A compiled block plus the keys it drives
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledKeyframes {
    pub block: KeyframeBlock,
    /// Target keys animated by the block, left out of the static style
    pub animated: Vec<String>,
    /// Number of rules in the block
    pub steps: usize,
}

/// How a resolved target should be animated
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationPlan {
    /// Plain CSS transition between static styles
    Transition,
    /// A per-instance compiled keyframe block
    Compiled(CompiledKeyframes),
    /// One of the built-in blocks, by name
    Builtin(&'static str),
}

/// Decide between a transition, a compiled block and a built-in block
pub fn plan_animation(
    target: &Target,
    transition: &Transition,
    name: &str,
    perspective_px: f64,
) -> AnimationPlan {
    if let Some(compiled) = compile_keyframes(target, name, perspective_px) {
        return AnimationPlan::Compiled(compiled);
    }

    if transition.is_infinite() && target.contains_key("rotate") {
        return AnimationPlan::Builtin(presets::SPIN);
    }

    AnimationPlan::Transition
}

/// Compile every sequence of two or more steps into one block
///
/// Returns `None` when the target has nothing to compile. Sequences of
/// different lengths are cut to the shortest. When any transform key is
/// animated, the static transform keys join every step so the composed
/// `transform` keeps them.
pub fn compile_keyframes(target: &Target, name: &str, perspective_px: f64) -> Option<CompiledKeyframes> {
    let keyed: Vec<&str> = target
        .keyframed_keys()
        .into_iter()
        .filter(|key| !is_index_key(key))
        .collect();
    if keyed.is_empty() {
        return None;
    }

    let lengths: Vec<usize> = keyed
        .iter()
        .filter_map(|key| target.get(key).and_then(|v| v.as_sequence()).map(<[Scalar]>::len))
        .collect();
    let steps = lengths.iter().copied().min().unwrap_or(0);
    if steps < 2 {
        return None;
    }
    if lengths.iter().any(|len| *len != steps) {
        tracing::warn!(
            name,
            steps,
            ?lengths,
            "keyframe sequences differ in length, clamping to the shortest"
        );
    }

    let mut animated: Vec<&str> = keyed;
    if animated.iter().any(|key| is_transform_key(key)) {
        for key in target.keys() {
            if is_transform_key(key) && !animated.contains(&key) {
                animated.push(key);
            }
        }
    }

    let mut block = KeyframeBlock::new(name);
    for index in 0..steps {
        block.push_rule(step_rule(target, &animated, index, steps, perspective_px));
    }

    tracing::trace!(name, steps, keys = animated.len(), "compiled keyframes");

    Some(CompiledKeyframes {
        block,
        animated: animated.into_iter().map(String::from).collect(),
        steps,
    })
}

fn step_rule(
    target: &Target,
    keys: &[&str],
    index: usize,
    steps: usize,
    perspective_px: f64,
) -> KeyframeRule {
    let mut rule = KeyframeRule::new(step_percent(index, steps));
    let mut transform_parts: Vec<(&str, &Scalar)> = Vec::new();

    for key in keys {
        // Keys joined only for the transform hold their static value
        let Some(value) = target.get(key).and_then(|v| {
            if v.is_keyframed() {
                v.step(index)
            } else {
                v.representative(false)
            }
        }) else {
            continue;
        };
        if is_transform_key(key) {
            transform_parts.push((*key, value));
        } else if let Some((property, value)) = property_declarations(key, value) {
            rule = rule.with(property, value);
        }
    }

    if let Some(transform) = compose_transform(&transform_parts, perspective_px) {
        rule = rule.with("transform", transform);
    }

    rule
}
