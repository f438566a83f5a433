//! Orthographic camera.
//!
//! The animations all use a fixed orthographic frustum sized in world units
//! and centered on the camera position, looking down -z. Hosts use the
//! projection to place drawables; the scene driver itself only carries the
//! camera so a frame can be interpreted without extra context.

use serde::{Deserialize, Serialize};

use boxpusher_grid_core::{v2, v3, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Vertical extent of the frustum in world units.
    pub frustum_size: f32,
    /// Width / height of the viewport.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            frustum_size: 16.0,
            aspect: 16.0 / 9.0,
            near: 0.01,
            far: 10.0,
            position: v3(0.0, 0.0, 1.0),
        }
    }
}

/// Resolved orthographic frustum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Camera {
    pub fn new(cfg: &CameraConfig) -> Self {
        let half_h = cfg.frustum_size / 2.0;
        let half_w = cfg.frustum_size * cfg.aspect / 2.0;
        Self {
            left: -half_w,
            right: half_w,
            top: half_h,
            bottom: -half_h,
            near: cfg.near,
            far: cfg.far,
            position: cfg.position,
        }
    }

    /// Project a world point to normalized device coordinates in [-1, 1].
    pub fn project(&self, p: Vec3) -> Vec2 {
        let x = (p.x - self.position.x) / (self.right - self.left) * 2.0;
        let y = (p.y - self.position.y) / (self.top - self.bottom) * 2.0;
        v2(x, y)
    }

    /// Whether a world point falls inside the frustum.
    pub fn contains(&self, p: Vec3) -> bool {
        let ndc = self.project(p);
        let depth = self.position.z - p.z;
        ndc.x >= -1.0
            && ndc.x <= 1.0
            && ndc.y >= -1.0
            && ndc.y <= 1.0
            && depth >= self.near
            && depth <= self.far
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_projects_to_origin() {
        let cam = Camera::default();
        let ndc = cam.project(v3(0.0, 0.0, 0.0));
        assert_eq!(ndc, v2(0.0, 0.0));
        assert!(cam.contains(v3(0.0, 0.0, 0.0)));
        assert!(!cam.contains(v3(0.0, 100.0, 0.0)));
    }
}
