//! Property tests: synthesized styles never carry sequence values

use bugzx_motion::style::{animated_style, synthesize_style};
use bugzx_motion::{MotionConfig, MountPhase, Scalar, Target, TargetValue, Transition};
use proptest::prelude::*;

const KEYS: &[&str] = &[
    "x",
    "y",
    "scale",
    "rotate",
    "rotateX",
    "skewY",
    "opacity",
    "pathLength",
    "pathOffset",
    "backgroundColor",
    "borderRadius",
    "0",
];

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        (-1000.0f64..1000.0).prop_map(Scalar::Number),
        "[a-z]{1,8}".prop_map(Scalar::Text),
    ]
}

fn value() -> impl Strategy<Value = TargetValue> {
    prop_oneof![
        scalar().prop_map(TargetValue::Scalar),
        prop::collection::vec(scalar(), 0..6).prop_map(TargetValue::Sequence),
    ]
}

fn target() -> impl Strategy<Value = Target> {
    prop::collection::vec((prop::sample::select(KEYS), value()), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<Target>())
}

fn looks_like_sequence(value: &str) -> bool {
    value.contains('[') || value.contains(']') || value.contains(',')
}

proptest! {
    #[test]
    fn static_styles_have_no_sequences(target in target(), initial in any::<bool>()) {
        let style = synthesize_style(&target, initial, &[], 1000.0);
        for (property, value) in &style {
            prop_assert!(!looks_like_sequence(value), "{property}: {value}");
            prop_assert!(!property.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn animated_styles_have_no_sequences(target in target(), infinite in any::<bool>()) {
        let transition = if infinite {
            Transition::new(1.0).repeat_infinite()
        } else {
            Transition::new(0.3)
        };
        let style = animated_style(
            &target,
            Some(&transition),
            MountPhase::Mounted,
            "bzx-kf-proptest",
            &MotionConfig::default(),
        );
        for (property, value) in &style {
            prop_assert!(!looks_like_sequence(value), "{property}: {value}");
        }
        prop_assert!(!(style.contains_key("animation") && style.contains_key("transition")));
    }
}
