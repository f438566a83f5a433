//! StoredScene JSON loader.
//!
//! Parse a declarative choreography (node declarations plus a flat
//! transition list referencing nodes by name) into a ready-to-play `Scene`.
//!
//! Notes:
//! - Duration is in seconds and bounds recording, not evaluation.
//! - Targets are shorthand JSON: a number for opacity, `[x, y]` for size,
//!   `[x, y, z]` for position/color, a string for text.
//! - Easing is a preset name or `[x1, y1, x2, y2]` control points.
//! - Validation fails fast on unknown nodes, target/attribute mismatches,
//!   and non-positive durations.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

use boxpusher_grid_core::{v2, v3, Vec3};

use crate::color::{rgb, Color};
use crate::config::Config;
use crate::easing::Easing;
use crate::ids::NodeId;
use crate::node::NodeKind;
use crate::scene::Scene;
use crate::transition::{Attr, Transition};
use crate::value::TweenValue;

/// Errors produced while loading stored scene JSON.
#[derive(Debug, Error)]
pub enum StoredSceneError {
    #[error("stored scene parse error: {0}")]
    Parse(String),
    #[error("stored scene duration must be > 0 (got {0})")]
    BadDuration(f32),
    #[error("duplicate node name '{0}'")]
    DuplicateNode(String),
    #[error("transition references unknown node '{0}'")]
    UnknownNode(String),
    #[error("attribute {attr:?} cannot take target {got} on node '{node}'")]
    BadTarget {
        node: String,
        attr: Attr,
        got: String,
    },
    #[error("unknown easing '{0}'")]
    UnknownEasing(String),
}

/// A validated, declarative scene description.
#[derive(Clone, Debug)]
pub struct StoredScene {
    pub name: String,
    /// Total choreography length in seconds; bounds recording.
    pub duration: f32,
    nodes: Vec<StoredNode>,
    transitions: Vec<(usize, Transition)>,
}

#[derive(Clone, Debug)]
struct StoredNode {
    name: String,
    kind: NodeKind,
    position: Vec3,
    color: Color,
    opacity: f32,
    attached: bool,
}

/// Parse StoredScene JSON and validate it.
pub fn parse_stored_scene_json(s: &str) -> Result<StoredScene, StoredSceneError> {
    let raw: RawScene =
        serde_json::from_str(s).map_err(|e| StoredSceneError::Parse(e.to_string()))?;

    if !(raw.duration > 0.0) {
        return Err(StoredSceneError::BadDuration(raw.duration));
    }

    let mut nodes: Vec<StoredNode> = Vec::with_capacity(raw.nodes.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(raw.nodes.len());
    for rn in raw.nodes {
        if index.contains_key(&rn.name) {
            return Err(StoredSceneError::DuplicateNode(rn.name));
        }
        let kind = rn.kind.into_kind();
        index.insert(rn.name.clone(), nodes.len());
        nodes.push(StoredNode {
            name: rn.name,
            kind,
            position: v3(rn.position[0], rn.position[1], rn.position[2]),
            color: rgb(rn.color[0], rn.color[1], rn.color[2]),
            opacity: rn.opacity,
            attached: rn.attached,
        });
    }

    let mut transitions = Vec::with_capacity(raw.transitions.len());
    for rt in raw.transitions {
        let &slot = index
            .get(&rt.node)
            .ok_or_else(|| StoredSceneError::UnknownNode(rt.node.clone()))?;
        let target = rt.to.into_value(&rt.node, rt.attr)?;
        let easing = match rt.easing {
            None => Easing::default(),
            Some(RawEasing::Name(name)) => match name.as_str() {
                "linear" => Easing::Linear,
                "cubic-in" => Easing::CubicIn,
                "cubic-out" => Easing::CubicOut,
                "cubic-in-out" => Easing::CubicInOut,
                other => return Err(StoredSceneError::UnknownEasing(other.to_string())),
            },
            Some(RawEasing::Ctrl(ctrl)) => Easing::Bezier(ctrl),
        };
        transitions.push((
            slot,
            Transition {
                attr: rt.attr,
                target,
                start: rt.start,
                duration: rt.duration,
                easing,
            },
        ));
    }

    Ok(StoredScene {
        name: raw.name,
        duration: raw.duration,
        nodes,
        transitions,
    })
}

impl StoredScene {
    /// Instantiate a scene plus a name -> id map for the declared nodes.
    /// All referential validation happened at parse time.
    pub fn build(&self, cfg: Config) -> (Scene, HashMap<String, NodeId>) {
        let mut scene = Scene::new(cfg);
        let mut ids: Vec<NodeId> = Vec::with_capacity(self.nodes.len());
        let mut names: HashMap<String, NodeId> = HashMap::with_capacity(self.nodes.len());
        for sn in &self.nodes {
            let id = match &sn.kind {
                NodeKind::Box { size } => {
                    scene.add_box(sn.position, *size, sn.color, sn.opacity, sn.attached)
                }
                NodeKind::Text { content, size } => {
                    scene.add_text(sn.position, content, *size, sn.color, sn.opacity, sn.attached)
                }
                NodeKind::Label { content, size } => scene.add_label(
                    sn.position,
                    content,
                    *size,
                    sn.color,
                    sn.opacity,
                    sn.attached,
                ),
            };
            ids.push(id);
            names.insert(sn.name.clone(), id);
        }
        for (slot, record) in &self.transitions {
            if let Some(node) = scene.node_mut(ids[*slot]) {
                node.tween(
                    record.attr,
                    record.target.clone(),
                    record.start,
                    record.duration,
                    record.easing,
                );
            }
        }
        (scene, names)
    }
}

// ----- JSON schema (serde) -----

#[derive(Debug, Deserialize)]
struct RawScene {
    pub name: String,
    /// Seconds.
    pub duration: f32,
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub transitions: Vec<RawTransition>,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_attached() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawNode {
    pub name: String,
    #[serde(flatten)]
    pub kind: RawKind,
    pub position: [f32; 3],
    pub color: [f32; 3],
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_attached")]
    pub attached: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RawKind {
    Box { size: [f32; 2] },
    Text { content: String, size: f32 },
    Label { content: String, size: f32 },
}

impl RawKind {
    fn into_kind(self) -> NodeKind {
        match self {
            RawKind::Box { size } => NodeKind::Box {
                size: v2(size[0], size[1]),
            },
            RawKind::Text { content, size } => NodeKind::Text { content, size },
            RawKind::Label { content, size } => NodeKind::Label { content, size },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawTransition {
    pub node: String,
    pub attr: Attr,
    pub to: RawTarget,
    pub start: f32,
    #[serde(default)]
    pub duration: f32,
    #[serde(default)]
    pub easing: Option<RawEasing>,
}

/// Shorthand target values; coerced by the attribute they drive.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTarget {
    Scalar(f32),
    Pair([f32; 2]),
    Triple([f32; 3]),
    Text(String),
}

impl RawTarget {
    fn describe(&self) -> String {
        match self {
            RawTarget::Scalar(v) => format!("scalar {v}"),
            RawTarget::Pair(v) => format!("pair {v:?}"),
            RawTarget::Triple(v) => format!("triple {v:?}"),
            RawTarget::Text(s) => format!("text {s:?}"),
        }
    }

    fn into_value(self, node: &str, attr: Attr) -> Result<TweenValue, StoredSceneError> {
        let got = self.describe();
        let value = match (attr, self) {
            (Attr::Position, RawTarget::Triple(p)) => {
                Some(TweenValue::Vec3(v3(p[0], p[1], p[2])))
            }
            (Attr::Color, RawTarget::Triple(c)) => Some(TweenValue::Color(rgb(c[0], c[1], c[2]))),
            (Attr::Size, RawTarget::Pair(s)) => Some(TweenValue::Vec2(v2(s[0], s[1]))),
            (Attr::Opacity, RawTarget::Scalar(o)) => Some(TweenValue::Scalar(o)),
            (Attr::Text, RawTarget::Text(s)) => Some(TweenValue::Text(s)),
            _ => None,
        };
        value.ok_or(StoredSceneError::BadTarget {
            node: node.to_string(),
            attr,
            got,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawEasing {
    Ctrl([f32; 4]),
    Name(String),
}
