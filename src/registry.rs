//! Named-function registry for node-graph hosts.
//!
//! Hosts look operations up by a string identifier and show a display name
//! and category in their menus. The trimming core does not depend on this
//! module.
//!
//! ```rust
//! use audio_frame_trim::registry::NodeRegistry;
//! use audio_frame_trim::{AudioBuffer, FrameWindow};
//! use ndarray::Array1;
//!
//! let registry = NodeRegistry::with_builtin();
//! let audio = AudioBuffer::new_mono(Array1::from_elem(48000, 0.1f32), 48000).unwrap();
//!
//! let out = registry.run("PainterAudioCut", &audio, &FrameWindow::default()).unwrap();
//! assert_eq!(out.total_frames, 33);
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::{AudioBuffer, FrameWindow, TrimError, TrimResult, TrimmedAudio, trim_frames};

/// Identifier of the built-in frame trimming node.
pub const FRAME_TRIM_NODE: &str = "PainterAudioCut";

/// Signature shared by every registered node.
pub type NodeFn = fn(&AudioBuffer<f32>, &FrameWindow) -> TrimResult<TrimmedAudio<f32>>;

/// A registered node.
#[derive(Debug, Clone, Copy)]
pub struct NodeEntry {
    /// Name shown to users.
    pub display_name: &'static str,
    /// Menu category, `/`-separated.
    pub category: &'static str,
    /// The operation itself.
    pub run: NodeFn,
}

/// Maps node identifiers to [`NodeEntry`] values.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: BTreeMap<String, NodeEntry>,
}

impl NodeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in frame trimming node.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            FRAME_TRIM_NODE,
            NodeEntry {
                display_name: "Painter Audio Cut",
                category: "audio/processing",
                run: trim_frames::<f32>,
            },
        );
        registry
    }

    /// Registers `entry` under `name`, returning the entry it replaced.
    pub fn register(&mut self, name: impl Into<String>, entry: NodeEntry) -> Option<NodeEntry> {
        self.nodes.insert(name.into(), entry)
    }

    /// Looks up a node by identifier.
    pub fn get(&self, name: &str) -> Option<&NodeEntry> {
        self.nodes.get(name)
    }

    /// Registered identifiers in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Runs the node registered under `name`.
    ///
    /// # Errors
    /// [`TrimError::UnknownNode`] if nothing is registered under `name`, or
    /// whatever the node itself returns.
    pub fn run(
        &self,
        name: &str,
        audio: &AudioBuffer<f32>,
        window: &FrameWindow,
    ) -> TrimResult<TrimmedAudio<f32>> {
        let entry = self
            .get(name)
            .ok_or_else(|| TrimError::UnknownNode(name.to_string()))?;
        debug!(node = name, "running node");
        (entry.run)(audio, window)
    }
}
