//! Perspective camera: pick-ray construction and screen projection.

use super::math::Vec3;
use derive_new::new;
use tracing::instrument;

/// Viewport dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, new)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Width-over-height ratio.
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}

/// A ray in world space. `dir` is unit length by construction.
#[derive(Debug, Clone, Copy, new)]
pub struct Ray {
    /// Ray origin (the camera position for pick rays).
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

/// Perspective camera defined by pose and vertical field of view.
///
/// `ray_through` and `project_to_screen` are exact inverses of each other,
/// which is what keeps piece placement and click resolution consistent.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    target: Vec3,
    fov_y_degrees: f32,
    aspect: f32,
}

impl Camera {
    /// Creates a camera at `position` looking at `target`.
    #[instrument]
    pub fn new(position: Vec3, target: Vec3, fov_y_degrees: f32, aspect: f32) -> Self {
        Self {
            position,
            target,
            fov_y_degrees,
            aspect,
        }
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current aspect ratio.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Updates the aspect ratio after a viewport resize.
    ///
    /// Resize affects only the camera; it never touches game state.
    #[instrument(skip(self))]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Orthonormal camera basis: (right, up, forward).
    fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position)
            .normalized()
            .unwrap_or(Vec3::new(0.0, 0.0, -1.0));
        // Looking straight up or down leaves the world up axis degenerate;
        // fall back to +X so the basis stays orthonormal.
        let right = forward
            .cross(Vec3::UP)
            .normalized()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Half extents of the image plane at unit depth.
    fn half_extents(&self) -> (f32, f32) {
        let half_h = (self.fov_y_degrees.to_radians() * 0.5).tan();
        (half_h * self.aspect, half_h)
    }

    /// Builds the pick ray through a normalized-device-coordinate point.
    pub fn ray_through(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let (right, up, forward) = self.basis();
        let (half_w, half_h) = self.half_extents();
        let dir = forward + right * (ndc_x * half_w) + up * (ndc_y * half_h);
        Ray::new(self.position, dir.normalized().unwrap_or(forward))
    }

    /// Projects a world point to screen pixels.
    ///
    /// Returns `None` for points at or behind the camera.
    pub fn project_to_screen(&self, point: Vec3, viewport: Viewport) -> Option<(f32, f32)> {
        let (right, up, forward) = self.basis();
        let v = point - self.position;
        let depth = v.dot(forward);
        if depth <= f32::EPSILON {
            return None;
        }
        let (half_w, half_h) = self.half_extents();
        let ndc_x = v.dot(right) / (depth * half_w);
        let ndc_y = v.dot(up) / (depth * half_h);
        Some((
            (ndc_x + 1.0) * 0.5 * viewport.width,
            (1.0 - ndc_y) * 0.5 * viewport.height,
        ))
    }
}
