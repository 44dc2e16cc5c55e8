//! Easing functions for transitions and keyframe animations
//!
//! The engine never samples an easing curve itself; easings are rendered as
//! CSS timing functions and handed to the platform.

use std::fmt;

use serde::Deserialize;

/// Easing function type
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "EasingRepr")]
pub enum Easing {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
    /// Any other timing function, passed through verbatim (`steps(4, end)`)
    Custom(String),
}

/// Accepted prop shapes: a name or a `[x1, y1, x2, y2]` bezier
#[derive(Deserialize)]
#[serde(untagged)]
enum EasingRepr {
    Name(String),
    Bezier([f32; 4]),
}

impl From<EasingRepr> for Easing {
    fn from(repr: EasingRepr) -> Self {
        match repr {
            EasingRepr::Name(name) => Easing::from_name(&name),
            EasingRepr::Bezier([x1, y1, x2, y2]) => Easing::CubicBezier(x1, y1, x2, y2),
        }
    }
}

impl Easing {
    /// Parse an easing name. Accepts CSS names (`ease-in-out`) and the
    /// camelCase names used in motion props (`easeInOut`).
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "linear" => Easing::Linear,
            "ease" => Easing::Ease,
            "easeIn" | "ease-in" => Easing::EaseIn,
            "easeOut" | "ease-out" => Easing::EaseOut,
            "easeInOut" | "ease-in-out" => Easing::EaseInOut,
            other => Easing::Custom(other.to_string()),
        }
    }

    /// Render as a CSS timing function
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            Easing::Custom(raw) => raw.clone(),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::from_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_easings() {
        assert_eq!(Easing::from_name("easeInOut"), Easing::EaseInOut);
        assert_eq!(Easing::from_name("ease-out"), Easing::EaseOut);
        assert_eq!(Easing::EaseIn.to_css(), "ease-in");
        assert_eq!(
            Easing::from_name("steps(4, end)"),
            Easing::Custom("steps(4, end)".into())
        );
    }

    #[test]
    fn test_cubic_bezier_css() {
        let easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
        assert_eq!(easing.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn test_deserialize_name_or_array() {
        let named: Easing = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(named, Easing::Linear);

        let bezier: Easing = serde_json::from_str("[0.25, 0.1, 0.25, 1]").unwrap();
        assert_eq!(bezier, Easing::CubicBezier(0.25, 0.1, 0.25, 1.0));
    }
}
