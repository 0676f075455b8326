//! Damped orbit controls around a fixed target.
//!
//! Pointer drags and wheel notches accumulate pending motion; [`OrbitControls::update`]
//! applies it to the camera once per frame. With damping enabled only a
//! fraction of the pending rotation is applied per update and the remainder
//! decays, which gives the camera its inertia.

use crate::config::OrbitConfig;
use crate::constants::{ORBIT_POLAR_EPSILON, ORBIT_ZOOM_STEP};
use crate::state::Camera;
use glam::Vec3;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Spherical {
    radius: f32,
    theta: f32, // azimuth around +Y, measured from +Z
    phi: f32,   // polar angle from +Y
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.phi.cos() * self.radius, s * self.theta.cos())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub config: OrbitConfig,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3, config: OrbitConfig) -> Self {
        Self {
            target,
            config,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` CSS pixels.
    ///
    /// A drag across the full viewport height turns the camera a full circle.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if !dx.is_finite() || !dy.is_finite() || viewport_height <= 0.0 {
            return;
        }
        self.delta_theta -= 2.0 * PI * dx / viewport_height;
        self.delta_phi -= 2.0 * PI * dy / viewport_height;
    }

    /// Queue a dolly from a wheel event; negative `delta_y` moves closer.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.scale /= ORBIT_ZOOM_STEP;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.delta_theta.abs() < 1e-6 && self.delta_phi.abs() < 1e-6 && self.scale == 1.0
    }

    /// Apply pending motion to `camera`. Returns true if the eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let mut s = Spherical::from_offset(camera.eye - self.target);

        if self.config.enable_damping {
            s.theta += self.delta_theta * self.config.damping_factor;
            s.phi += self.delta_phi * self.config.damping_factor;
        } else {
            s.theta += self.delta_theta;
            s.phi += self.delta_phi;
        }
        s.phi = s.phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        s.radius = (s.radius * self.scale).clamp(self.config.min_distance, self.config.max_distance);

        camera.eye = self.target + s.to_offset();
        camera.target = self.target;

        if self.config.enable_damping {
            self.delta_theta *= 1.0 - self.config.damping_factor;
            self.delta_phi *= 1.0 - self.config.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;

        camera.eye.distance_squared(before) > 1e-10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spherical_round_trip() {
        let v = Vec3::new(5.0, 2.0, 0.0);
        let back = Spherical::from_offset(v).to_offset();
        assert!((back - v).length() < 1e-4);
    }
}
