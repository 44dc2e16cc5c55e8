//! Transform composition
//!
//! Motion targets address transforms as individual pseudo-properties
//! (`x`, `scale`, `rotateX`, ...). They are folded into one CSS `transform`
//! in a fixed order, regardless of the order they appear in the target.

use bugzx_animation::css;

use crate::target::Scalar;

/// Transform pseudo-properties, in composition order
pub const TRANSFORM_KEYS: [&str; 9] = [
    "x", "y", "scale", "rotate", "rotateX", "rotateY", "rotateZ", "skewX", "skewY",
];

/// Perspective distance applied for 3D rotations, in pixels
pub const DEFAULT_PERSPECTIVE: f64 = 1000.0;

/// Whether `key` is composed into `transform` instead of copied
pub fn is_transform_key(key: &str) -> bool {
    TRANSFORM_KEYS.contains(&key)
}

/// CSS function name and numeric unit for a transform key
fn transform_function(key: &str) -> Option<(&'static str, &'static str)> {
    Some(match key {
        "x" => ("translateX", "px"),
        "y" => ("translateY", "px"),
        "scale" => ("scale", ""),
        "rotate" => ("rotate", "deg"),
        "rotateX" => ("rotateX", "deg"),
        "rotateY" => ("rotateY", "deg"),
        "rotateZ" => ("rotateZ", "deg"),
        "skewX" => ("skewX", "deg"),
        "skewY" => ("skewY", "deg"),
        _ => return None,
    })
}

/// Compose transform parts into one `transform` value
///
/// `parts` may arrive in any order and may contain non-transform keys,
/// which are ignored. Returns `None` when no transform key is present.
/// `rotateX`/`rotateY` prefix the result with `perspective(<px>)`.
pub fn compose_transform(parts: &[(&str, &Scalar)], perspective_px: f64) -> Option<String> {
    let lookup = |key: &str| parts.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

    let mut functions = Vec::new();

    if lookup("rotateX").is_some() || lookup("rotateY").is_some() {
        functions.push(format!("perspective({}px)", css::number(perspective_px)));
    }

    for key in TRANSFORM_KEYS {
        let Some(value) = lookup(key) else {
            continue;
        };
        if let Some((function, unit)) = transform_function(key) {
            functions.push(format!("{function}({})", value.to_css(unit)));
        }
    }

    if functions.is_empty() {
        None
    } else {
        Some(functions.join(" "))
    }
}
