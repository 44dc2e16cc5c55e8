//! Keyframe blocks
//!
//! A [`KeyframeBlock`] is the compiled, platform-facing form of a
//! multi-step animation: a name plus percentage-indexed rules, each holding
//! plain CSS declarations. Blocks are produced by the motion compiler and
//! stored in the [`KeyframeRegistry`](crate::registry::KeyframeRegistry).

use std::fmt::Write as _;

/// A single `property: value` pair inside a keyframe rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One stop of a keyframe animation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframeRule {
    /// Position in the animation, 0 to 100
    pub percent: u32,
    pub declarations: Vec<Declaration>,
}

impl KeyframeRule {
    pub fn new(percent: u32) -> Self {
        Self {
            percent,
            declarations: Vec::new(),
        }
    }

    /// Builder: add a declaration
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Look up a declaration value by property name
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

/// A named `@keyframes` block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframeBlock {
    pub name: String,
    /// Rules in ascending percent order
    pub rules: Vec<KeyframeRule>,
}

impl KeyframeBlock {
    /// Create an empty block
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Builder: append a rule, keeping rules sorted by percent
    pub fn rule(mut self, rule: KeyframeRule) -> Self {
        self.push_rule(rule);
        self
    }

    /// Append a rule, keeping rules sorted by percent
    pub fn push_rule(&mut self, rule: KeyframeRule) {
        self.rules.push(rule);
        self.rules.sort_by_key(|r| r.percent);
    }

    /// Percent positions of all rules
    pub fn percents(&self) -> Vec<u32> {
        self.rules.iter().map(|r| r.percent).collect()
    }

    /// Render as CSS text
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "@keyframes {} {{", self.name);
        for rule in &self.rules {
            let _ = write!(out, "  {}% {{", rule.percent);
            for decl in &rule.declarations {
                let _ = write!(out, " {}: {};", decl.property, decl.value);
            }
            out.push_str(" }\n");
        }
        out.push('}');
        out
    }
}

/// Percent position of step `index` out of `steps` evenly spaced stops
///
/// `steps` must be at least 2; the first stop is 0 and the last is 100.
pub fn step_percent(index: usize, steps: usize) -> u32 {
    debug_assert!(steps >= 2);
    let last = steps.saturating_sub(1).max(1);
    ((index as f64 / last as f64) * 100.0).round() as u32
}
