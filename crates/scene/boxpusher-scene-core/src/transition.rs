//! Scheduled transitions and their evaluation against the global clock.
//!
//! A transition is a plain data record: attribute, target value, absolute
//! start time, duration, easing. Per-primitive schedules are append-only
//! lists of these records, which makes them serializable and replayable onto
//! a clone without capturing any call-site state.
//!
//! Evaluation is a pure function of (initial value, records, time): seeking
//! the clock anywhere re-derives the same state as native playback.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::value::{lerp_value, TweenValue};

/// Animatable attribute of a primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attr {
    Position,
    Size,
    Color,
    Opacity,
    Text,
}

/// One scheduled change of an attribute toward a target value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub attr: Attr,
    pub target: TweenValue,
    /// Absolute start time on the global clock, seconds.
    pub start: f32,
    /// Seconds; zero (or negative) means an instantaneous change at `start`.
    #[serde(default)]
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
}

impl Transition {
    /// End time of the active window.
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration.max(0.0)
    }

    /// Sample this record at time `t`, interpolating from `from`.
    fn sample(&self, from: &TweenValue, t: f32) -> TweenValue {
        // Text steps at the start time regardless of duration.
        if let TweenValue::Text(_) = self.target {
            return if t >= self.start {
                self.target.clone()
            } else {
                from.clone()
            };
        }
        if t < self.start {
            return from.clone();
        }
        // Return the target itself at/after the end so the final value is
        // exact, not a rounded lerp.
        if t >= self.end() || self.duration <= 0.0 {
            return self.target.clone();
        }
        let u = ((t - self.start) / self.duration).clamp(0.0, 1.0);
        lerp_value(from, &self.target, self.easing.apply(u))
    }
}

/// Evaluate one attribute's record sequence at time `t`.
///
/// `records` must be sorted by `start` (stable with respect to scheduling
/// order, so later-scheduled records win ties). Each record interpolates
/// from the state the earlier records produce at its own start time.
pub fn value_at(initial: &TweenValue, records: &[&Transition], t: f32) -> TweenValue {
    let mut from = initial.clone();
    let mut active: Option<&Transition> = None;
    for r in records {
        if r.start > t {
            break;
        }
        if let Some(prev) = active {
            from = prev.sample(&from, r.start);
        }
        active = Some(r);
    }
    match active {
        Some(r) => r.sample(&from, t),
        None => from,
    }
}
