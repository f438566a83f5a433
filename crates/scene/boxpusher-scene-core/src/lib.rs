//! Boxpusher Scene Core (renderer-agnostic)
//!
//! The reusable layer of the box-animation corpus: animatable primitives
//! (boxes, text, labels) with append-only transition timelines, a single
//! global clock, and a scene driver that evaluates every primitive's visible
//! state as a pure function of the clock. A host renderer consumes the
//! per-frame snapshots; this crate draws nothing itself.

pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod easing;
pub mod ids;
pub mod inputs;
pub mod node;
pub mod outputs;
pub mod scene;
pub mod stored_scene;
pub mod transition;
pub mod value;

// Re-exports for consumers (choreography code and hosts)
pub use camera::{Camera, CameraConfig};
pub use clock::Clock;
pub use color::Color;
pub use config::Config;
pub use easing::Easing;
pub use ids::NodeId;
pub use inputs::{ClockCommand, Inputs};
pub use node::{CloneCfg, Node, NodeKind};
pub use outputs::{RenderFrame, RenderedNode};
pub use scene::{Scene, SceneError};
pub use stored_scene::{parse_stored_scene_json, StoredScene, StoredSceneError};
pub use transition::{Attr, Transition};
pub use value::TweenValue;
