//! Camera and viewport state shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! feeds them canvas sizes and pointer positions; the picking code and the
//! renderer both derive their matrices from the same [`Camera`].

use crate::config::CameraConfig;
use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::pick::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            eye: config.position,
            target: config.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Project a world-space point to normalized device coordinates.
    ///
    /// Returns `None` for points behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let view = self.view_matrix().transform_point3(world);
        if view.z >= 0.0 {
            return None;
        }
        let ndc = self.view_projection().project_point3(world);
        Some(Vec2::new(ndc.x, ndc.y))
    }

    /// World-space ray from the eye through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.eye, p - self.eye)
    }
}

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// This viewport, or the default size when it is degenerate.
    pub fn or_default(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::default()
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Map viewport pixels to the symmetric [-1, 1] range, vertical axis inverted.
    ///
    /// Returns `None` when the viewport is degenerate, the point is not
    /// finite, or it falls outside the viewport.
    pub fn to_ndc(&self, px: Vec2) -> Option<Vec2> {
        if !self.is_valid() || !px.is_finite() {
            return None;
        }
        if px.x < 0.0 || px.y < 0.0 || px.x > self.width || px.y > self.height {
            return None;
        }
        Some(Vec2::new(
            (px.x / self.width) * 2.0 - 1.0,
            -(px.y / self.height) * 2.0 + 1.0,
        ))
    }

    pub fn from_ndc(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_and_inverted_y() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(vp.to_ndc(Vec2::new(200.0, 100.0)), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(vp.to_ndc(Vec2::new(100.0, 50.0)), Some(Vec2::ZERO));
        assert_eq!(vp.from_ndc(Vec2::new(-1.0, 1.0)), Vec2::ZERO);
    }

    #[test]
    fn ndc_rejects_outside_and_malformed() {
        let vp = Viewport::new(200.0, 100.0);
        assert!(vp.to_ndc(Vec2::new(-1.0, 10.0)).is_none());
        assert!(vp.to_ndc(Vec2::new(10.0, 101.0)).is_none());
        assert!(vp.to_ndc(Vec2::new(f32::NAN, 10.0)).is_none());
        assert!(Viewport::new(0.0, 100.0).to_ndc(Vec2::ZERO).is_none());
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera::from_config(&CameraConfig::default(), 16.0 / 9.0);
        let ray = cam.ray_through_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!((ray.dir - expected).length() < 1e-4);
    }
}
