//! Process-wide motion configuration
//!
//! The host installs one [`MotionConfig`] at startup, typically read from a
//! TOML file:
//!
//! ```toml
//! reduced_motion = false
//! perspective_px = 1200
//! keyframe_prefix = "app-kf"
//! ```
//!
//! Elements rendered without an explicit config read [`MotionConfig::current`],
//! which falls back to the defaults when nothing was installed.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Result;
use crate::transform::DEFAULT_PERSPECTIVE;

/// Default prefix for generated keyframe names
pub const DEFAULT_KEYFRAME_PREFIX: &str = "bzx-kf";

/// Installed configuration
static MOTION_CONFIG: OnceLock<MotionConfig> = OnceLock::new();

/// Used by `current()` until a config is installed
static DEFAULT_CONFIG: OnceLock<MotionConfig> = OnceLock::new();

/// Global motion settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Skip keyframes and transitions, show end states directly
    pub reduced_motion: bool,
    /// Perspective distance for `rotateX`/`rotateY`, in pixels
    pub perspective_px: f64,
    /// Prefix of generated keyframe names (`<prefix>-<instance id>`)
    pub keyframe_prefix: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            perspective_px: DEFAULT_PERSPECTIVE,
            keyframe_prefix: DEFAULT_KEYFRAME_PREFIX.to_string(),
        }
    }
}

impl MotionConfig {
    /// Parse a config from TOML; missing keys take their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Install as the process-wide config
    ///
    /// Only the first call takes effect. Returns false if a config was
    /// already installed.
    pub fn install(config: MotionConfig) -> bool {
        let installed = MOTION_CONFIG.set(config).is_ok();
        if installed {
            tracing::debug!("motion config installed");
        } else {
            tracing::warn!("motion config already installed, ignoring");
        }
        installed
    }

    /// The installed config, or the defaults
    pub fn current() -> &'static MotionConfig {
        MOTION_CONFIG
            .get()
            .unwrap_or_else(|| DEFAULT_CONFIG.get_or_init(MotionConfig::default))
    }

    /// Try to get the installed config (returns None if not installed)
    pub fn try_get() -> Option<&'static MotionConfig> {
        MOTION_CONFIG.get()
    }

    /// Check if a config has been installed
    pub fn is_installed() -> bool {
        MOTION_CONFIG.get().is_some()
    }

    /// Builder: enable or disable reduced motion
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }
}
