//! Typed transition targets.

use serde::{Deserialize, Serialize};

use boxpusher_grid_core::{Vec2, Vec3};

use crate::color::Color;

/// The payload of a scheduled transition: what an attribute is driven toward.
/// `Text` is step-only; everything else interpolates component-wise.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum TweenValue {
    Vec3(Vec3),
    Vec2(Vec2),
    Color(Color),
    Scalar(f32),
    Text(String),
}

/// Linear interpolation across value kinds. Mismatched kinds fall back to
/// the left value (fail-soft, same policy as a malformed schedule); `Text`
/// steps to the right value only at `t >= 1`.
pub fn lerp_value(a: &TweenValue, b: &TweenValue, t: f32) -> TweenValue {
    match (a, b) {
        (TweenValue::Vec3(va), TweenValue::Vec3(vb)) => TweenValue::Vec3(va.lerp(*vb, t)),
        (TweenValue::Vec2(va), TweenValue::Vec2(vb)) => TweenValue::Vec2(va.lerp(*vb, t)),
        (TweenValue::Color(ca), TweenValue::Color(cb)) => TweenValue::Color(ca.lerp(*cb, t)),
        (TweenValue::Scalar(sa), TweenValue::Scalar(sb)) => {
            TweenValue::Scalar(sa + (sb - sa) * t)
        }
        (TweenValue::Text(_), TweenValue::Text(_)) => {
            if t >= 1.0 {
                b.clone()
            } else {
                a.clone()
            }
        }
        _ => a.clone(),
    }
}
