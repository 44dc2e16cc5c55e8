//! CSS value formatting shared by transitions and keyframe blocks

/// Format a number the way it should appear inside a CSS value.
///
/// Integral values print without a fractional part (`10`, not `10.0`),
/// negative zero prints as `0`.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Format a duration in seconds (`0.3s`)
pub fn seconds(value: f64) -> String {
    format!("{}s", number(value))
}
