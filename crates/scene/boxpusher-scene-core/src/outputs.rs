//! Output contracts from the scene driver.
//!
//! A `RenderFrame` is the full evaluated state of every attached primitive
//! at one clock time. Hosts draw it; the recorder collects a bounded list
//! of them.

use serde::{Deserialize, Serialize};

use boxpusher_grid_core::{Vec2, Vec3};

use crate::color::Color;
use crate::ids::NodeId;

/// One primitive's visible state this frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedNode {
    pub id: NodeId,
    pub position: Vec3,
    pub color: Color,
    pub opacity: f32,
    /// Quad size; present for box primitives only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec2>,
    /// Current text content; present for text/label primitives only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Evaluated scene state at one clock time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub time: f32,
    #[serde(default)]
    pub nodes: Vec<RenderedNode>,
}

impl RenderFrame {
    #[inline]
    pub fn clear(&mut self) {
        self.time = 0.0;
        self.nodes.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node's state in this frame, if it is attached.
    pub fn node(&self, id: NodeId) -> Option<&RenderedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
