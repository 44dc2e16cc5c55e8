//! Process-wide keyframe registry
//!
//! Compiled keyframe blocks are collected in a single stylesheet-like
//! container that lives for the whole process:
//!
//! ```rust
//! use bugzx_animation::{KeyframeBlock, KeyframeRegistry, KeyframeRule, Registration};
//!
//! let block = KeyframeBlock::new("docs-fade")
//!     .rule(KeyframeRule::new(0).with("opacity", "0"))
//!     .rule(KeyframeRule::new(100).with("opacity", "1"));
//!
//! let registry = KeyframeRegistry::ensure();
//! assert_eq!(registry.register(block.clone()), Registration::Inserted);
//! assert_eq!(registry.register(block), Registration::Unchanged);
//! assert!(registry.to_css().contains("@keyframes docs-fade {"));
//! ```
//!
//! # Lifecycle
//!
//! The registry is created lazily by the first [`KeyframeRegistry::ensure`]
//! call, at which point the built-in presets are registered. It is never
//! torn down and blocks are never pruned. Registering a block under an
//! existing name replaces that block in place, so one name always maps to
//! exactly one rule.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use indexmap::IndexMap;

use crate::keyframe::KeyframeBlock;
use crate::presets;

/// Global registry instance
static KEYFRAME_REGISTRY: OnceLock<KeyframeRegistry> = OnceLock::new();

/// Outcome of a [`KeyframeRegistry::register`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    /// First block under this name
    Inserted,
    /// An existing block with different content was overwritten
    Replaced,
    /// An identical block was already registered
    Unchanged,
}

/// Append-only container for compiled keyframe blocks
pub struct KeyframeRegistry {
    blocks: Mutex<IndexMap<String, KeyframeBlock>>,
}

impl KeyframeRegistry {
    fn with_builtins() -> Self {
        let registry = KeyframeRegistry {
            blocks: Mutex::new(IndexMap::new()),
        };
        for block in presets::builtin_blocks() {
            registry.register(block);
        }
        registry
    }

    /// Get the global registry, creating it on first use
    pub fn ensure() -> &'static KeyframeRegistry {
        KEYFRAME_REGISTRY.get_or_init(|| {
            tracing::debug!("keyframe registry created");
            KeyframeRegistry::with_builtins()
        })
    }

    /// Try to get the global registry (returns None if nothing has needed it yet)
    pub fn try_get() -> Option<&'static KeyframeRegistry> {
        KEYFRAME_REGISTRY.get()
    }

    /// Check if the global registry has been created
    pub fn is_initialized() -> bool {
        KEYFRAME_REGISTRY.get().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, IndexMap<String, KeyframeBlock>> {
        // Blocks are only ever inserted whole, a poisoned lock still holds
        // a consistent map.
        self.blocks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a block under its name
    pub fn register(&self, block: KeyframeBlock) -> Registration {
        let mut blocks = self.lock();
        match blocks.get_mut(&block.name) {
            Some(existing) if *existing == block => Registration::Unchanged,
            Some(existing) => {
                tracing::trace!(name = %block.name, "keyframe block replaced");
                *existing = block;
                Registration::Replaced
            }
            None => {
                tracing::debug!(name = %block.name, rules = block.rules.len(), "keyframe block registered");
                blocks.insert(block.name.clone(), block);
                Registration::Inserted
            }
        }
    }

    /// Get a copy of the block registered under `name`
    pub fn get(&self, name: &str) -> Option<KeyframeBlock> {
        self.lock().get(name).cloned()
    }

    /// Check whether a block is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Number of registered blocks (built-ins included)
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the registry holds no blocks
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Render every registered block as one stylesheet
    pub fn to_css(&self) -> String {
        self.lock()
            .values()
            .map(KeyframeBlock::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
