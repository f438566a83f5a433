//! Purely functional vector math.
//!
//! Every operation returns a new value; nothing mutates in place. `modulo`
//! carries the always-non-negative contract choreography code relies on for
//! ring-shift index arithmetic.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// 3-component vector (positions, deltas, grid strides).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 2-component vector (box sizes, projected points).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

pub const fn v3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3 { x, y, z }
}

pub const fn v2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl Vec3 {
    pub const ZERO: Vec3 = v3(0.0, 0.0, 0.0);

    /// Component-wise multiply.
    pub fn mul(self, other: Vec3) -> Vec3 {
        v3(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Component-wise divide.
    pub fn div(self, other: Vec3) -> Vec3 {
        v3(self.x / other.x, self.y / other.y, self.z / other.z)
    }

    /// Scalar multiply.
    pub fn scale(self, s: f32) -> Vec3 {
        v3(s * self.x, s * self.y, s * self.z)
    }

    /// Linear interpolation toward `other`.
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self).scale(t)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        v3(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        v3(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        v3(-self.x, -self.y, -self.z)
    }
}

impl Vec2 {
    pub const ZERO: Vec2 = v2(0.0, 0.0);

    pub fn mul(self, other: Vec2) -> Vec2 {
        v2(self.x * other.x, self.y * other.y)
    }

    pub fn scale(self, s: f32) -> Vec2 {
        v2(s * self.x, s * self.y)
    }

    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        self + (other - self).scale(t)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        v2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        v2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        v2(-self.x, -self.y)
    }
}

/// N-ary addition over a slice of vectors.
pub fn add(vs: &[Vec3]) -> Vec3 {
    vs.iter().copied().fold(Vec3::ZERO, |acc, v| acc + v)
}

/// Euclidean modulo: the result is in `[0, m)` for every `n` and positive `m`.
/// `modulo(-1, 8) == 7`.
pub fn modulo(n: i64, m: i64) -> i64 {
    ((n % m) + m) % m
}
