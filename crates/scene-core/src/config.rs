//! Startup parameters supplied by the render host.
//!
//! Every value is a fixed constant from [`crate::constants`]; the structs only
//! group them so the host and the tests can pass them around as one value.

use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::from_array(CAMERA_POSITION),
            target: Vec3::from_array(CAMERA_TARGET),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomConfig {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub path: &'static str,
    pub transform: ModelTransform,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: MODEL_PATH,
            transform: ModelTransform::default(),
        }
    }
}

/// Placement applied to the loaded model's root node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(MODEL_POSITION),
            scale: MODEL_SCALE,
        }
    }
}

impl ModelTransform {
    pub fn matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            glam::Quat::IDENTITY,
            self.position,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    pub directional_intensity: f32,
    pub directional_direction: Vec3,
    pub background: [f32; 3],
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_intensity: AMBIENT_INTENSITY,
            directional_intensity: DIRECTIONAL_INTENSITY,
            directional_direction: Vec3::from_array(DIRECTIONAL_DIRECTION).normalize(),
            background: BACKGROUND_COLOR,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub bloom: BloomConfig,
    pub orbit: OrbitConfig,
    pub model: ModelConfig,
    pub lighting: LightingConfig,
}
