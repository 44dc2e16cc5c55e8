//! End-to-end tests for the motion pipeline
//!
//! These tests verify that:
//! - JSON prop bags flow through resolution and synthesis into final styles
//! - Keyframe animations are compiled, registered and referenced by name
//! - The built-in spin block is reused for infinite rotation only
//! - Gesture events change the rendered output

use bugzx_core::events::{event_types, Event, EventHandlers};
use bugzx_motion::{motion, target, KeyframeRegistry, MotionConfig, MotionElementProps};
use pretty_assertions::assert_eq;
use serde_json::json;

fn config() -> MotionConfig {
    MotionConfig::default()
}

#[test]
fn test_variants_from_json() {
    let props = MotionElementProps::from_json(json!({
        "variants": {
            "hidden": { "opacity": 0, "y": 20 },
            "visible": { "opacity": 1, "y": 0 },
        },
        "initial": "hidden",
        "animate": "visible",
        "transition": { "duration": 0.5, "delay": 0.1, "ease": "easeOut" },
        "className": "card",
    }))
    .unwrap();

    let mut card = motion("div").instantiate();
    let before = card.render_with(&props, &config());
    assert_eq!(before.style_value("opacity"), Some("0"));
    assert_eq!(before.style_value("transform"), Some("translateY(20px)"));

    card.mount();
    let after = card.render_with(&props, &config());
    assert_eq!(after.style_value("opacity"), Some("1"));
    assert_eq!(after.style_value("transform"), Some("translateY(0px)"));
    assert_eq!(after.style_value("transition"), Some("all 0.5s ease-out 0.1s"));
    assert_eq!(after.attributes.get("className"), Some(&json!("card")));
}

#[test]
fn test_missing_variant_renders_nothing_animated() {
    let props = MotionElementProps::from_json(json!({ "animate": "nope" })).unwrap();
    let mut el = motion("div").instantiate();
    el.mount();

    let rendered = el.render_with(&props, &config());
    assert_eq!(rendered.style.keys().collect::<Vec<_>>(), vec!["transition"]);
}

#[test]
fn test_infinite_sequence_compiles_keyframes() {
    let props = MotionElementProps::from_json(json!({
        "animate": { "scale": [1, 1.2, 1] },
        "transition": { "duration": 1, "repeat": "Infinity" },
    }))
    .unwrap();
    let mut el = motion("div").instantiate();
    el.mount();

    let rendered = el.render_with(&props, &config());
    let name = el.animation_name(&config());

    assert_eq!(
        rendered.style_value("animation").map(str::to_string),
        Some(format!("{name} 1s linear infinite"))
    );
    assert_eq!(rendered.style_value("transition"), None);

    let registry = KeyframeRegistry::ensure();
    let block = registry.get(&name).unwrap();
    assert_eq!(block.percents(), vec![0, 50, 100]);
    assert_eq!(block.rules[0].get("transform"), Some("scale(1)"));
    assert_eq!(block.rules[1].get("transform"), Some("scale(1.2)"));
    assert!(registry.to_css().contains(&format!("@keyframes {name} {{")));
}

#[test]
fn test_rerender_overwrites_block_in_place() {
    let mut el = motion("div").instantiate();
    el.mount();
    let name = el.animation_name(&config());
    let registry = KeyframeRegistry::ensure();

    let first = MotionElementProps::from_json(json!({ "animate": { "opacity": [0, 1] } })).unwrap();
    el.render_with(&first, &config());
    let count = registry.names().iter().filter(|n| **n == name).count();
    assert_eq!(count, 1);

    let second =
        MotionElementProps::from_json(json!({ "animate": { "opacity": [1, 0.5, 0] } })).unwrap();
    el.render_with(&second, &config());

    assert_eq!(registry.names().iter().filter(|n| **n == name).count(), 1);
    assert_eq!(registry.get(&name).unwrap().percents(), vec![0, 50, 100]);
}

#[test]
fn test_repeat_count_and_mirror() {
    let props = MotionElementProps::from_json(json!({
        "animate": { "x": [0, 10] },
        "transition": { "duration": 0.4, "repeat": 2, "repeatType": "mirror", "delay": 0.2 },
    }))
    .unwrap();
    let mut el = motion("div").instantiate();
    el.mount();

    let rendered = el.render_with(&props, &config());
    let name = el.animation_name(&config());
    assert_eq!(
        rendered.style_value("animation").map(str::to_string),
        Some(format!("{name} 0.4s linear 0.2s 3 alternate forwards"))
    );
}

#[test]
fn test_builtin_spin_only_for_rotation() {
    let spin = MotionElementProps::from_json(json!({
        "animate": { "rotate": 360 },
        "transition": { "duration": 2, "repeat": "Infinity", "ease": "linear" },
    }))
    .unwrap();
    let looping_opacity = MotionElementProps::from_json(json!({
        "animate": { "opacity": 0.5 },
        "transition": { "duration": 1.5, "repeat": "Infinity" },
    }))
    .unwrap();

    let mut el = motion("svg").instantiate();
    el.mount();

    let rendered = el.render_with(&spin, &config());
    assert_eq!(rendered.style_value("animation"), Some("bzx-spin 2s linear infinite"));
    assert_eq!(rendered.style_value("transform"), Some("rotate(360deg)"));

    let rendered = el.render_with(&looping_opacity, &config());
    assert_eq!(rendered.style_value("animation"), None);
    assert_eq!(rendered.style_value("opacity"), Some("0.5"));
    assert_eq!(rendered.style_value("transition"), Some("all 1.5s ease-in-out 0s"));

    let registry = KeyframeRegistry::ensure();
    assert!(registry.contains("bzx-spin"));
    assert!(registry.contains("bzx-pulse"));
    assert!(!registry.contains(&el.animation_name(&config())));
}

#[test]
fn test_hover_and_tap_layering() {
    let props = MotionElementProps::from_json(json!({
        "animate": { "scale": 1, "opacity": 1 },
        "whileHover": { "scale": 1.05 },
        "whileTap": { "scale": 0.95 },
    }))
    .unwrap();
    let handlers = EventHandlers::new();
    let mut el = motion("button").instantiate();
    el.dispatch(&Event::new(event_types::MOUNT), &handlers);

    let transform = |el: &bugzx_motion::MotionInstance| {
        el.render_with(&props, &config())
            .style_value("transform")
            .map(str::to_string)
    };

    assert_eq!(transform(&el).as_deref(), Some("scale(1)"));

    el.dispatch(&Event::pointer(event_types::POINTER_ENTER, 0.0, 0.0), &handlers);
    assert_eq!(transform(&el).as_deref(), Some("scale(1.05)"));

    el.dispatch(&Event::pointer(event_types::POINTER_DOWN, 0.0, 0.0), &handlers);
    assert_eq!(transform(&el).as_deref(), Some("scale(0.95)"));

    el.dispatch(&Event::pointer(event_types::POINTER_UP, 0.0, 0.0), &handlers);
    assert_eq!(transform(&el).as_deref(), Some("scale(1.05)"));

    el.dispatch(&Event::pointer(event_types::POINTER_LEAVE, 0.0, 0.0), &handlers);
    assert_eq!(transform(&el).as_deref(), Some("scale(1)"));
}

#[test]
fn test_exit_target_on_unmount() {
    let props = MotionElementProps::new(bugzx_motion::presets::page_transition());
    let handlers = EventHandlers::new();
    let mut page = motion("main").instantiate();

    assert_eq!(
        page.render_with(&props, &config()).style_value("transform"),
        Some("translateX(20px)")
    );
    page.dispatch(&Event::new(event_types::MOUNT), &handlers);
    page.dispatch(&Event::new(event_types::UNMOUNT), &handlers);

    let leaving = page.render_with(&props, &config());
    assert_eq!(leaving.style_value("opacity"), Some("0"));
    assert_eq!(leaving.style_value("transform"), Some("translateX(-20px)"));
    assert_eq!(leaving.style_value("transition"), Some("all 0.3s ease-in-out 0s"));
}

#[test]
fn test_svg_path_drawing() {
    let props = MotionElementProps::new(
        bugzx_motion::MotionProps::new()
            .initial(target! { pathLength: 0 })
            .animate(target! { pathLength: 1, pathOffset: 0 }),
    );
    let mut path = motion("path").instantiate();
    assert_eq!(
        path.render_with(&props, &config()).style_value("stroke-dasharray"),
        Some("0 1")
    );

    path.mount();
    let drawn = path.render_with(&props, &config());
    assert_eq!(drawn.style_value("stroke-dasharray"), Some("1 1"));
    assert_eq!(drawn.style_value("stroke-dashoffset"), Some("0"));
}
