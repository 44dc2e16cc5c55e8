//! Transition metadata
//!
//! A [`Transition`] describes *how* a motion element moves toward its
//! resolved target. It is rendered either as a CSS `transition` declaration
//! or as the timing part of an `animation` shorthand; the platform performs
//! the actual interpolation.
//!
//! Spring parameters (`stiffness`, `damping`, `mass`) are carried through
//! untouched. Nothing in the engine integrates them.

use std::time::Duration;

use serde::Deserialize;

use crate::css;
use crate::easing::Easing;

/// Transition duration when none is given (seconds)
pub const DEFAULT_TRANSITION_DURATION: f64 = 0.3;

/// Keyframe animation duration when none is given (seconds)
pub const DEFAULT_KEYFRAME_DURATION: f64 = 1.0;

/// Transition type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionKind {
    #[default]
    Tween,
    Spring,
}

/// How often an animation repeats after its first pass
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RepeatRepr")]
pub enum Repeat {
    /// Repeat this many additional times
    Count(u32),
    /// Loop forever
    Infinite,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepeatRepr {
    Number(f64),
    Word(String),
}

impl TryFrom<RepeatRepr> for Repeat {
    type Error = String;

    fn try_from(repr: RepeatRepr) -> Result<Self, Self::Error> {
        match repr {
            RepeatRepr::Number(n) if n.is_infinite() && n > 0.0 => Ok(Repeat::Infinite),
            RepeatRepr::Number(n) if n >= 0.0 && n <= u32::MAX as f64 => {
                Ok(Repeat::Count(n.floor() as u32))
            }
            RepeatRepr::Number(n) => Err(format!("invalid repeat count {n}")),
            RepeatRepr::Word(word) => match word.as_str() {
                "Infinity" | "infinity" | "infinite" => Ok(Repeat::Infinite),
                other => Err(format!("invalid repeat value `{other}`")),
            },
        }
    }
}

/// Behaviour between repeated passes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    Loop,
    Reverse,
    Mirror,
}

/// Spring parameters, forwarded as metadata only
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringParams {
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
    pub mass: Option<f64>,
}

/// Transition configuration from motion props
///
/// Every field is optional; accessors apply the documented defaults.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transition {
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Delay in seconds
    pub delay: Option<f64>,
    pub ease: Option<Easing>,
    #[serde(rename = "type")]
    pub kind: Option<TransitionKind>,
    pub repeat: Option<Repeat>,
    pub repeat_type: Option<RepeatType>,
    pub stiffness: Option<f64>,
    pub damping: Option<f64>,
    pub mass: Option<f64>,
}

impl Transition {
    /// Create a transition with the given duration in seconds
    pub fn new(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Default::default()
        }
    }

    /// Builder: set delay in seconds
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Builder: set easing
    pub fn ease(mut self, ease: impl Into<Easing>) -> Self {
        self.ease = Some(ease.into());
        self
    }

    /// Builder: loop forever
    pub fn repeat_infinite(mut self) -> Self {
        self.repeat = Some(Repeat::Infinite);
        self
    }

    /// Builder: repeat `count` additional times
    pub fn repeat_count(mut self, count: u32) -> Self {
        self.repeat = Some(Repeat::Count(count));
        self
    }

    /// Builder: set repeat type
    pub fn repeat_type(mut self, repeat_type: RepeatType) -> Self {
        self.repeat_type = Some(repeat_type);
        self
    }

    /// Builder: spring transition with the given parameters
    pub fn spring(stiffness: f64, damping: f64) -> Self {
        Self {
            kind: Some(TransitionKind::Spring),
            stiffness: Some(stiffness),
            damping: Some(damping),
            ..Default::default()
        }
    }

    /// Whether the transition loops forever
    pub fn is_infinite(&self) -> bool {
        matches!(self.repeat, Some(Repeat::Infinite))
    }

    /// Spring metadata (never consumed by synthesis)
    pub fn spring_params(&self) -> SpringParams {
        SpringParams {
            stiffness: self.stiffness,
            damping: self.damping,
            mass: self.mass,
        }
    }

    /// Time an exit using this transition needs before the element can go
    pub fn exit_duration(&self) -> Duration {
        let secs = self.duration.unwrap_or(DEFAULT_TRANSITION_DURATION) + self.delay.unwrap_or(0.0);
        // Whole milliseconds, so 0.3s is exactly 300ms
        Duration::from_millis((secs.max(0.0) * 1000.0).round() as u64)
    }

    /// Render as a uniform all-properties `transition` value
    ///
    /// Defaults: 0.3s, ease-in-out, no delay.
    pub fn transition_css(&self) -> String {
        let ease = self.ease.clone().unwrap_or(Easing::EaseInOut);
        format!(
            "all {} {} {}",
            css::seconds(self.duration.unwrap_or(DEFAULT_TRANSITION_DURATION)),
            ease,
            css::seconds(self.delay.unwrap_or(0.0)),
        )
    }

    /// Render as an `animation` shorthand referencing `name`
    ///
    /// Defaults: 1s, linear. Infinite repeats loop forever; otherwise the
    /// animation plays `repeat + 1` passes and holds its last frame.
    pub fn animation_css(&self, name: &str) -> String {
        let mut parts = vec![
            name.to_string(),
            css::seconds(self.duration.unwrap_or(DEFAULT_KEYFRAME_DURATION)),
            self.ease.clone().unwrap_or(Easing::Linear).to_css(),
        ];

        if let Some(delay) = self.delay.filter(|d| *d != 0.0) {
            parts.push(css::seconds(delay));
        }

        let repeats = match self.repeat {
            Some(Repeat::Infinite) => {
                parts.push("infinite".to_string());
                true
            }
            Some(Repeat::Count(n)) if n > 0 => {
                parts.push((u64::from(n) + 1).to_string());
                true
            }
            _ => false,
        };

        if repeats
            && matches!(
                self.repeat_type,
                Some(RepeatType::Reverse) | Some(RepeatType::Mirror)
            )
        {
            parts.push("alternate".to_string());
        }

        if !self.is_infinite() {
            parts.push("forwards".to_string());
        }

        parts.join(" ")
    }
}
