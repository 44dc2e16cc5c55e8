//! Style synthesis
//!
//! Turns a resolved [`Target`] into flat CSS declarations:
//!
//! - transform pseudo-properties compose into one `transform`
//! - `pathLength`/`pathOffset` map to SVG stroke dash properties
//! - everything else passes through with a hyphenated name
//! - sequences collapse to one representative step
//!
//! [`animated_style`] runs the whole per-render pipeline and decides between
//! a CSS transition and a keyframe animation.

use bugzx_animation::{css, KeyframeRegistry, Transition};
use indexmap::IndexMap;

use crate::config::MotionConfig;
use crate::keyframes::{plan_animation, AnimationPlan};
use crate::resolver::MountPhase;
use crate::target::{Scalar, Target};
use crate::transform::{compose_transform, is_transform_key};

/// Final CSS declarations, property name to value, in insertion order
pub type StyleMap = IndexMap<String, String>;

/// Properties whose numeric values carry no unit
const UNITLESS: &[&str] = &[
    "opacity",
    "z-index",
    "font-weight",
    "line-height",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
    "zoom",
    "fill-opacity",
    "stroke-opacity",
    "stroke-width",
    "stroke-dashoffset",
    "stroke-miterlimit",
    "aspect-ratio",
    "column-count",
    "tab-size",
    "orphans",
    "widows",
    "grid-row",
    "grid-column",
    "animation-iteration-count",
];

/// Convert a camelCase property name to its CSS form (`boxShadow` ->
/// `box-shadow`). Vendor prefixes gain a leading dash (`WebkitMask` ->
/// `-webkit-mask`); already hyphenated names are unchanged.
pub fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render a pass-through value for `property` (a CSS name)
pub fn css_value(property: &str, value: &Scalar) -> String {
    if UNITLESS.contains(&property) {
        value.to_css("")
    } else {
        value.to_css("px")
    }
}

/// Declarations for one non-transform property at one scalar value
pub(crate) fn property_declarations(key: &str, value: &Scalar) -> Option<(String, String)> {
    match key {
        // SVG stroke drawing, normalized to a path length of 1
        "pathLength" => Some(("stroke-dasharray".to_string(), format!("{} 1", value.to_css("")))),
        "pathOffset" => {
            let offset = match value {
                Scalar::Number(n) => css::number(-n),
                Scalar::Text(text) => match text.trim().strip_prefix('-') {
                    Some(positive) => positive.to_string(),
                    None => format!("-{}", text.trim()),
                },
            };
            Some(("stroke-dashoffset".to_string(), offset))
        }
        _ if is_transform_key(key) => None,
        _ => {
            let property = css_property_name(key);
            let value = css_value(&property, value);
            Some((property, value))
        }
    }
}

/// Keys made only of digits are stray indices, never real properties
pub(crate) fn is_index_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a target into static styles
///
/// `skip` lists keys animated by a keyframe block in this pass; they are
/// left out entirely. Remaining sequences collapse to their first step in
/// the initial phase and to their last step otherwise.
pub fn synthesize_style(
    target: &Target,
    initial_phase: bool,
    skip: &[&str],
    perspective_px: f64,
) -> StyleMap {
    let mut style = StyleMap::new();
    let mut transform_parts: Vec<(&str, &Scalar)> = Vec::new();

    for (key, value) in target.iter() {
        if skip.contains(&key) || is_index_key(key) {
            continue;
        }
        let Some(scalar) = value.representative(initial_phase) else {
            continue;
        };

        if is_transform_key(key) {
            transform_parts.push((key, scalar));
        } else if let Some((property, value)) = property_declarations(key, scalar) {
            style.insert(property, value);
        }
    }

    if let Some(transform) = compose_transform(&transform_parts, perspective_px) {
        style.insert("transform".to_string(), transform);
    }

    style.retain(|property, _| !is_index_key(property));
    style
}

/// Full per-render style for a resolved target
///
/// Chooses between a keyframe animation (sequences with two or more steps,
/// or an infinitely repeating rotation) and a plain transition.
/// Compiled blocks are registered in the global [`KeyframeRegistry`] under
/// `animation_name`. A keyframe pass never also emits `transition`.
pub fn animated_style(
    target: &Target,
    transition: Option<&Transition>,
    phase: MountPhase,
    animation_name: &str,
    config: &MotionConfig,
) -> StyleMap {
    let default_transition = Transition::default();
    let transition = transition.unwrap_or(&default_transition);
    let initial_phase = phase.is_initial();

    if config.reduced_motion {
        let mut style = synthesize_style(target, initial_phase, &[], config.perspective_px);
        style.insert("transition".to_string(), "none".to_string());
        return style;
    }

    match plan_animation(target, transition, animation_name, config.perspective_px) {
        AnimationPlan::Compiled(compiled) => {
            let skip: Vec<&str> = compiled.animated.iter().map(String::as_str).collect();
            let mut style = synthesize_style(target, initial_phase, &skip, config.perspective_px);
            KeyframeRegistry::ensure().register(compiled.block);
            style.insert("animation".to_string(), transition.animation_css(animation_name));
            style
        }
        AnimationPlan::Builtin(name) => {
            KeyframeRegistry::ensure();
            let mut style = synthesize_style(target, initial_phase, &[], config.perspective_px);
            style.insert("animation".to_string(), transition.animation_css(name));
            style
        }
        AnimationPlan::Transition => {
            let mut style = synthesize_style(target, initial_phase, &[], config.perspective_px);
            style.insert("transition".to_string(), transition.transition_css());
            style
        }
    }
}

/// Render a style map as an inline `style` attribute value
pub fn inline_style(style: &StyleMap) -> String {
    style
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target;
    use crate::transform::DEFAULT_PERSPECTIVE;
    use pretty_assertions::assert_eq;

    fn synth(target: &Target, initial: bool) -> StyleMap {
        synthesize_style(target, initial, &[], DEFAULT_PERSPECTIVE)
    }

    #[test]
    fn test_css_property_name() {
        assert_eq!(css_property_name("boxShadow"), "box-shadow");
        assert_eq!(css_property_name("backgroundColor"), "background-color");
        assert_eq!(css_property_name("WebkitMaskImage"), "-webkit-mask-image");
        assert_eq!(css_property_name("border-radius"), "border-radius");
    }

    #[test]
    fn test_translate_composition() {
        let style = synth(&target! { x: 10, y: 20 }, false);
        assert_eq!(style.get("transform").map(String::as_str), Some("translateX(10px) translateY(20px)"));
        assert!(!style.contains_key("x"));
        assert!(!style.contains_key("y"));
    }

    #[test]
    fn test_rotate_x_adds_perspective() {
        let style = synth(&target! { rotateX: 2, opacity: 1 }, false);
        assert!(style["transform"].starts_with("perspective("));
    }

    #[test]
    fn test_pass_through_units() {
        let style = synth(
            &target! { opacity: 0.5, zIndex: 3, borderRadius: 8, color: "red" },
            false,
        );
        assert_eq!(style["opacity"], "0.5");
        assert_eq!(style["z-index"], "3");
        assert_eq!(style["border-radius"], "8px");
        assert_eq!(style["color"], "red");
    }

    #[test]
    fn test_path_mapping() {
        let style = synth(&target! { pathLength: 0.4, pathOffset: 0.2 }, false);
        assert_eq!(style["stroke-dasharray"], "0.4 1");
        assert_eq!(style["stroke-dashoffset"], "-0.2");
    }

    #[test]
    fn test_text_path_offset_negation() {
        let style = synth(&target! { pathOffset: "-5" }, false);
        assert_eq!(style["stroke-dashoffset"], "5");

        let style = synth(&target! { pathOffset: "0.25" }, false);
        assert_eq!(style["stroke-dashoffset"], "-0.25");
    }

    #[test]
    fn test_looping_opacity_uses_transition() {
        let style = animated_style(
            &target! { opacity: 0.2 },
            Some(&Transition::new(1.0).repeat_infinite()),
            MountPhase::Mounted,
            "bzx-kf-test-opacity-loop",
            &MotionConfig::default(),
        );
        assert_eq!(style["opacity"], "0.2");
        assert!(style["transition"].starts_with("all 1s"));
        assert!(!style.contains_key("animation"));
    }

    #[test]
    fn test_sequence_representative_by_phase() {
        let target = target! { opacity: [0.0, 0.5, 1.0] };
        assert_eq!(synth(&target, true)["opacity"], "0");
        assert_eq!(synth(&target, false)["opacity"], "1");
    }

    #[test]
    fn test_numeric_keys_dropped() {
        let target = Target::new().with("0", 1).with("opacity", 1);
        let style = synth(&target, false);
        assert_eq!(style.keys().collect::<Vec<_>>(), vec!["opacity"]);
    }

    #[test]
    fn test_skip_keys() {
        let target = target! { scale: [1.0, 2.0], opacity: 1 };
        let style = synthesize_style(&target, false, &["scale"], DEFAULT_PERSPECTIVE);
        assert!(!style.contains_key("transform"));
        assert_eq!(style["opacity"], "1");
    }

    #[test]
    fn test_transition_when_static() {
        let style = animated_style(
            &target! { opacity: 1 },
            None,
            MountPhase::Mounted,
            "bzx-kf-test-static",
            &MotionConfig::default(),
        );
        assert_eq!(style["transition"], "all 0.3s ease-in-out 0s");
        assert!(!style.contains_key("animation"));
    }

    #[test]
    fn test_reduced_motion_skips_keyframes() {
        let config = MotionConfig {
            reduced_motion: true,
            ..Default::default()
        };
        let style = animated_style(
            &target! { scale: [1.0, 1.2, 1.0] },
            Some(&Transition::new(1.0).repeat_infinite()),
            MountPhase::Mounted,
            "bzx-kf-test-reduced",
            &config,
        );
        assert_eq!(style["transform"], "scale(1)");
        assert_eq!(style["transition"], "none");
        assert!(!style.contains_key("animation"));
        assert!(!KeyframeRegistry::ensure().contains("bzx-kf-test-reduced"));
    }

    #[test]
    fn test_inline_style() {
        let style = synth(&target! { opacity: 1, x: 4 }, false);
        assert_eq!(inline_style(&style), "opacity: 1; transform: translateX(4px);");
    }
}
