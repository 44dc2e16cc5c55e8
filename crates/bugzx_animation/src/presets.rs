//! Built-in keyframe blocks
//!
//! Constant animations registered once, when the keyframe registry is
//! created. Motion elements that loop a scalar rotation or opacity reference
//! these instead of compiling their own block.

use crate::keyframe::{KeyframeBlock, KeyframeRule};

/// Name of the built-in continuous rotation
pub const SPIN: &str = "bzx-spin";

/// Name of the built-in opacity pulse
pub const PULSE: &str = "bzx-pulse";

/// Full 360 degree rotation
pub fn spin() -> KeyframeBlock {
    KeyframeBlock::new(SPIN)
        .rule(KeyframeRule::new(0).with("transform", "rotate(0deg)"))
        .rule(KeyframeRule::new(100).with("transform", "rotate(360deg)"))
}

/// Opacity dip to half and back
pub fn pulse() -> KeyframeBlock {
    KeyframeBlock::new(PULSE)
        .rule(KeyframeRule::new(0).with("opacity", "1"))
        .rule(KeyframeRule::new(50).with("opacity", "0.5"))
        .rule(KeyframeRule::new(100).with("opacity", "1"))
}

/// All built-in blocks, in registration order
pub fn builtin_blocks() -> [KeyframeBlock; 2] {
    [spin(), pulse()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_covers_full_turn() {
        let block = spin();
        assert_eq!(block.percents(), vec![0, 100]);
        assert_eq!(block.rules[1].get("transform"), Some("rotate(360deg)"));
    }

    #[test]
    fn test_pulse_returns_to_opaque() {
        let block = pulse();
        assert_eq!(block.percents(), vec![0, 50, 100]);
        assert_eq!(block.rules[0].get("opacity"), block.rules[2].get("opacity"));
    }
}
