//! Scene driver: node ownership, the global clock, and frame evaluation.
//!
//! Methods:
//! - new, add_box/add_text/add_label, clone_node, update (commands -> clock
//!   -> evaluate), sample_at (pure), record (bounded export)

use log::debug;
use thiserror::Error;

use boxpusher_grid_core::{Vec2, Vec3};

use crate::camera::Camera;
use crate::clock::Clock;
use crate::color::Color;
use crate::config::Config;
use crate::ids::{IdAllocator, NodeId};
use crate::inputs::{ClockCommand, Inputs};
use crate::node::{CloneCfg, Node, NodeKind};
use crate::outputs::RenderFrame;
use crate::transition::Attr;

/// Errors from scene mutations. Evaluation itself never fails; a malformed
/// schedule yields a visually odd but well-defined frame.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown node id {0:?}")]
    UnknownNode(NodeId),
    #[error("clone replay requested but node {0:?} has pruned history")]
    MissingHistory(NodeId),
}

/// Scene driver. Owns every drawable resource; choreography code holds
/// `NodeId` handles and mutates through them.
#[derive(Debug)]
pub struct Scene {
    cfg: Config,
    ids: IdAllocator,
    nodes: Vec<Node>,
    clock: Clock,
    camera: Camera,

    // Per-tick output
    frame: RenderFrame,
}

impl Scene {
    /// Create a new scene with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            camera: Camera::new(&cfg.camera),
            nodes: Vec::with_capacity(cfg.node_capacity),
            cfg,
            ids: IdAllocator::new(),
            clock: Clock::new(),
            frame: RenderFrame::default(),
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Current global clock time.
    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    // -- construction -------------------------------------------------------

    fn spawn(
        &mut self,
        kind: NodeKind,
        position: Vec3,
        color: Color,
        opacity: f32,
        attached: bool,
    ) -> NodeId {
        let id = self.ids.alloc_node();
        self.nodes
            .push(Node::new(id, kind, position, color, opacity, attached));
        id
    }

    pub fn add_box(
        &mut self,
        position: Vec3,
        size: Vec2,
        color: Color,
        opacity: f32,
        attached: bool,
    ) -> NodeId {
        self.spawn(NodeKind::Box { size }, position, color, opacity, attached)
    }

    pub fn add_text(
        &mut self,
        position: Vec3,
        content: &str,
        size: f32,
        color: Color,
        opacity: f32,
        attached: bool,
    ) -> NodeId {
        self.spawn(
            NodeKind::Text {
                content: content.to_string(),
                size,
            },
            position,
            color,
            opacity,
            attached,
        )
    }

    pub fn add_label(
        &mut self,
        position: Vec3,
        content: &str,
        size: f32,
        color: Color,
        opacity: f32,
        attached: bool,
    ) -> NodeId {
        self.spawn(
            NodeKind::Label {
                content: content.to_string(),
                size,
            },
            position,
            color,
            opacity,
            attached,
        )
    }

    // -- cloning ------------------------------------------------------------

    /// Duplicate a node at the current clock time.
    ///
    /// The clone takes the source's sampled geometry/color/opacity. With
    /// `hide` it starts detached at opacity 0; with a `reveal_time` it is
    /// scheduled to attach then, its opacity snaps to the source's clone-time
    /// opacity, and the source's transition log is replayed onto it so it
    /// continues the same trajectory and can diverge afterwards.
    pub fn clone_node(&mut self, src: NodeId, cfg: CloneCfg) -> Result<NodeId, SceneError> {
        let now = self.clock.time();
        let source = self
            .nodes
            .iter()
            .find(|n| n.id == src)
            .ok_or(SceneError::UnknownNode(src))?;
        if cfg.reveal_time.is_some() && source.is_pruned() {
            return Err(SceneError::MissingHistory(src));
        }

        let snap = source.sample(now);
        let kind = match source.kind() {
            NodeKind::Box { size } => NodeKind::Box {
                size: snap.size.unwrap_or(*size),
            },
            NodeKind::Text { content, size } => NodeKind::Text {
                content: snap.text.clone().unwrap_or_else(|| content.clone()),
                size: *size,
            },
            NodeKind::Label { content, size } => NodeKind::Label {
                content: snap.text.clone().unwrap_or_else(|| content.clone()),
                size: *size,
            },
        };
        let history: Vec<crate::transition::Transition> = source.history().to_vec();
        let attached = if cfg.hide {
            false
        } else {
            source.attached_at(now)
        };
        let opacity = if cfg.hide { 0.0 } else { snap.opacity };

        let id = self.ids.alloc_node();
        let mut node = Node::new(id, kind, snap.position, snap.color, opacity, attached);
        if cfg.hide {
            if let Some(reveal) = cfg.reveal_time {
                // Snap to the source's clone-time opacity at reveal, then let
                // the replayed log take over from there.
                node.to_opacity(snap.opacity, reveal, 0.0);
                for record in &history {
                    // Opacity records from before the reveal are superseded by
                    // the snap; replaying them would surface the source's
                    // opacity on a clone that must stay at 0 until reveal.
                    if record.attr == Attr::Opacity && record.start < reveal {
                        continue;
                    }
                    node.tween(
                        record.attr,
                        record.target.clone(),
                        record.start,
                        record.duration,
                        record.easing,
                    );
                }
                node.attach_at(reveal);
            }
        }
        self.nodes.push(node);
        Ok(id)
    }

    // -- stepping -----------------------------------------------------------

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                ClockCommand::Play => self.clock.play(),
                ClockCommand::Pause => self.clock.pause(),
                ClockCommand::Rewind => self.clock.rewind(),
                ClockCommand::Seek { time } => self.clock.seek(time),
                ClockCommand::SetSpeed { speed } => self.clock.set_speed(speed),
            }
        }
    }

    /// Step by dt with given inputs, producing the frame at the new time.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &RenderFrame {
        self.apply_inputs(inputs);
        self.clock.advance(dt);
        let t = self.clock.time();
        if self.cfg.prune_completed {
            for node in &mut self.nodes {
                node.prune_before(t);
            }
        }
        self.frame.clear();
        self.frame.time = t;
        for node in &self.nodes {
            if node.attached_at(t) {
                self.frame.nodes.push(node.sample(t));
            }
        }
        &self.frame
    }

    /// Evaluate the scene at an arbitrary time without touching the clock.
    /// Identical to what playback would produce at that time.
    pub fn sample_at(&self, t: f32) -> RenderFrame {
        let mut frame = RenderFrame {
            time: t,
            nodes: Vec::new(),
        };
        for node in &self.nodes {
            if node.attached_at(t) {
                frame.nodes.push(node.sample(t));
            }
        }
        frame
    }

    /// Bounded export: evaluate frames over `[0, duration]` at `fps`.
    /// The live clock is not disturbed; the last frame lands exactly on
    /// `duration`.
    pub fn record(&self, duration: f32, fps: f32) -> Vec<RenderFrame> {
        let duration = duration.max(0.0);
        let fps = if fps > 0.0 { fps } else { 60.0 };
        let count = (duration * fps).ceil() as usize + 1;
        debug!("recording {count} frames over {duration}s at {fps}fps");
        let mut frames = Vec::with_capacity(count);
        for i in 0..count {
            let t = (i as f32 / fps).min(duration);
            frames.push(self.sample_at(t));
        }
        frames
    }
}
