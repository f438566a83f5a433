//! Animatable primitives: boxes, text meshes, and overlay labels.
//!
//! A node is an explicit mutable struct (no property interception): initial
//! position/color/opacity, an append-only transition log, and a schedule of
//! scene-membership changes. Its visible state at any time is derived from
//! the log alone, so sampling is deterministic under seek and the log can be
//! replayed onto a clone.

use serde::{Deserialize, Serialize};

use boxpusher_grid_core::{Vec2, Vec3};

use crate::color::Color;
use crate::easing::Easing;
use crate::ids::NodeId;
use crate::outputs::RenderedNode;
use crate::transition::{value_at, Attr, Transition};
use crate::value::TweenValue;

/// What kind of drawable a node is. Geometry/content carried here is the
/// initial value; `Size` and `Text` transitions animate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    /// Flat quad, sized in world units.
    Box { size: Vec2 },
    /// Font-shape text mesh.
    Text { content: String, size: f32 },
    /// Screen-space overlay label.
    Label { content: String, size: f32 },
}

/// Options for cloning a node. Defaults match the corpus convention:
/// clones start hidden and are revealed explicitly.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct CloneCfg {
    /// Start the clone detached with opacity 0.
    pub hide: bool,
    /// Attach the clone at this time and replay the source's transition log
    /// onto it so it continues the source's trajectory.
    pub reveal_time: Option<f32>,
}

impl Default for CloneCfg {
    fn default() -> Self {
        Self {
            hide: true,
            reveal_time: None,
        }
    }
}

/// One animatable primitive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    kind: NodeKind,
    initial_position: Vec3,
    initial_color: Color,
    initial_opacity: f32,
    /// Append-only; existing records are never edited, only superseded by
    /// later ones. Kept whole for seek-back unless pruning is enabled.
    transitions: Vec<Transition>,
    /// Scheduled (time, attached) membership changes.
    membership: Vec<(f32, bool)>,
    attached_at_start: bool,
    /// Set once completed records have been folded away; replay is refused
    /// afterwards because the early history is gone.
    pruned: bool,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        kind: NodeKind,
        position: Vec3,
        color: Color,
        opacity: f32,
        attached: bool,
    ) -> Self {
        Self {
            id,
            kind,
            initial_position: position,
            initial_color: color,
            initial_opacity: opacity,
            transitions: Vec::new(),
            membership: Vec::new(),
            attached_at_start: attached,
            pruned: false,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The full transition log, in scheduling order.
    pub fn history(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn is_pruned(&self) -> bool {
        self.pruned
    }

    // -- scheduling ---------------------------------------------------------

    /// Append a transition record. Returns the node for chaining.
    pub fn tween(
        &mut self,
        attr: Attr,
        target: TweenValue,
        start: f32,
        duration: f32,
        easing: Easing,
    ) -> &mut Self {
        self.transitions.push(Transition {
            attr,
            target,
            start,
            duration,
            easing,
        });
        self
    }

    pub fn to_position(&mut self, target: Vec3, start: f32, duration: f32) -> &mut Self {
        self.tween(
            Attr::Position,
            TweenValue::Vec3(target),
            start,
            duration,
            Easing::default(),
        )
    }

    pub fn to_color(&mut self, target: Color, start: f32, duration: f32) -> &mut Self {
        self.tween(
            Attr::Color,
            TweenValue::Color(target),
            start,
            duration,
            Easing::default(),
        )
    }

    pub fn to_opacity(&mut self, target: f32, start: f32, duration: f32) -> &mut Self {
        self.tween(
            Attr::Opacity,
            TweenValue::Scalar(target),
            start,
            duration,
            Easing::default(),
        )
    }

    pub fn to_size(&mut self, target: Vec2, start: f32, duration: f32) -> &mut Self {
        self.tween(
            Attr::Size,
            TweenValue::Vec2(target),
            start,
            duration,
            Easing::default(),
        )
    }

    /// Step the text content at `start` (text never interpolates).
    pub fn to_text(&mut self, content: &str, start: f32) -> &mut Self {
        self.tween(
            Attr::Text,
            TweenValue::Text(content.to_string()),
            start,
            0.0,
            Easing::default(),
        )
    }

    pub fn to_hide(&mut self, start: f32, duration: f32) -> &mut Self {
        self.to_opacity(0.0, start, duration)
    }

    pub fn to_visible(&mut self, start: f32, duration: f32) -> &mut Self {
        self.to_opacity(1.0, start, duration)
    }

    // -- scene membership ---------------------------------------------------
    // Membership changes only through these explicit calls (or the attach
    // flag at construction); no other mutator touches it.

    pub fn attach_at(&mut self, time: f32) -> &mut Self {
        self.membership.push((time, true));
        self
    }

    pub fn detach_at(&mut self, time: f32) -> &mut Self {
        self.membership.push((time, false));
        self
    }

    /// Whether the node is in the scene at time `t`.
    pub fn attached_at(&self, t: f32) -> bool {
        let mut entries: Vec<&(f32, bool)> = self.membership.iter().collect();
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let mut attached = self.attached_at_start;
        for (time, on) in entries {
            if *time > t {
                break;
            }
            attached = *on;
        }
        attached
    }

    // -- evaluation ---------------------------------------------------------

    /// Records for one attribute, sorted by start time; scheduling order
    /// breaks ties so the last-scheduled record wins.
    fn attr_records(&self, attr: Attr) -> Vec<&Transition> {
        let mut records: Vec<&Transition> =
            self.transitions.iter().filter(|r| r.attr == attr).collect();
        records.sort_by(|a, b| {
            a.start
                .partial_cmp(&b.start)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records
    }

    fn eval(&self, attr: Attr, initial: TweenValue, t: f32) -> TweenValue {
        value_at(&initial, &self.attr_records(attr), t)
    }

    /// Evaluate the node's full visible state at time `t`.
    pub fn sample(&self, t: f32) -> RenderedNode {
        let position = match self.eval(Attr::Position, TweenValue::Vec3(self.initial_position), t)
        {
            TweenValue::Vec3(v) => v,
            _ => self.initial_position,
        };
        let color = match self.eval(Attr::Color, TweenValue::Color(self.initial_color), t) {
            TweenValue::Color(c) => c,
            _ => self.initial_color,
        };
        let opacity = match self.eval(Attr::Opacity, TweenValue::Scalar(self.initial_opacity), t) {
            TweenValue::Scalar(s) => s,
            _ => self.initial_opacity,
        };
        let size = match &self.kind {
            NodeKind::Box { size } => match self.eval(Attr::Size, TweenValue::Vec2(*size), t) {
                TweenValue::Vec2(s) => Some(s),
                _ => Some(*size),
            },
            _ => None,
        };
        let text = match &self.kind {
            NodeKind::Text { content, .. } | NodeKind::Label { content, .. } => {
                match self.eval(Attr::Text, TweenValue::Text(content.clone()), t) {
                    TweenValue::Text(s) => Some(s),
                    _ => Some(content.clone()),
                }
            }
            NodeKind::Box { .. } => None,
        };
        RenderedNode {
            id: self.id,
            position,
            color,
            opacity,
            size,
            text,
        }
    }

    // -- pruning ------------------------------------------------------------

    /// Fold records that completed before `t` into the initial state and drop
    /// them. Seek-back and clone replay are undefined afterwards; callers
    /// opt in through `Config::prune_completed`.
    ///
    /// Per attribute, folding stops at the start of the earliest record that
    /// is still live, so a live record keeps interpolating from the same
    /// state it would have seen unpruned.
    pub(crate) fn prune_before(&mut self, t: f32) {
        if !self.transitions.iter().any(|r| r.end() <= t) {
            return;
        }
        let mut folded_any = false;
        for attr in [Attr::Position, Attr::Size, Attr::Color, Attr::Opacity, Attr::Text] {
            // Do not fold past the earliest still-live record of this attribute.
            let limit = self
                .transitions
                .iter()
                .filter(|r| r.attr == attr && r.end() > t)
                .map(|r| r.start)
                .fold(t, f32::min);
            let completed: Vec<&Transition> = {
                let mut v: Vec<&Transition> = self
                    .transitions
                    .iter()
                    .filter(|r| r.attr == attr && r.end() <= limit)
                    .collect();
                v.sort_by(|a, b| {
                    a.start
                        .partial_cmp(&b.start)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                v
            };
            if completed.is_empty() {
                continue;
            }
            let folded = match attr {
                Attr::Position => {
                    value_at(&TweenValue::Vec3(self.initial_position), &completed, limit)
                }
                Attr::Size => match &self.kind {
                    NodeKind::Box { size } => value_at(&TweenValue::Vec2(*size), &completed, limit),
                    _ => continue,
                },
                Attr::Color => value_at(&TweenValue::Color(self.initial_color), &completed, limit),
                Attr::Opacity => {
                    value_at(&TweenValue::Scalar(self.initial_opacity), &completed, limit)
                }
                Attr::Text => match &self.kind {
                    NodeKind::Text { content, .. } | NodeKind::Label { content, .. } => {
                        value_at(&TweenValue::Text(content.clone()), &completed, limit)
                    }
                    NodeKind::Box { .. } => continue,
                },
            };
            match (attr, folded) {
                (Attr::Position, TweenValue::Vec3(v)) => self.initial_position = v,
                (Attr::Color, TweenValue::Color(c)) => self.initial_color = c,
                (Attr::Opacity, TweenValue::Scalar(s)) => self.initial_opacity = s,
                (Attr::Size, TweenValue::Vec2(s)) => {
                    if let NodeKind::Box { size } = &mut self.kind {
                        *size = s;
                    }
                }
                (Attr::Text, TweenValue::Text(s)) => match &mut self.kind {
                    NodeKind::Text { content, .. } | NodeKind::Label { content, .. } => {
                        *content = s;
                    }
                    NodeKind::Box { .. } => {}
                },
                _ => {}
            }
            let keep_after = limit;
            self.transitions
                .retain(|r| !(r.attr == attr && r.end() <= keep_after));
            folded_any = true;
        }
        if !folded_any {
            return;
        }
        // Fold settled membership changes as well.
        let mut entries: Vec<(f32, bool)> = self.membership.clone();
        entries.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        for (time, on) in &entries {
            if *time <= t {
                self.attached_at_start = *on;
            }
        }
        self.membership.retain(|(time, _)| *time > t);
        self.pruned = true;
    }
}
