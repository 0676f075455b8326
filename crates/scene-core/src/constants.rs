// Fixed startup parameters for the portfolio scene.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0; // vertical field of view
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: [f32; 3] = [5.0, 2.0, 0.0]; // far enough back to frame the model
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Fallback viewport used while the canvas reports no usable size
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

// Post-processing
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.25; // fraction of pending motion applied per update
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly scale per wheel notch
pub const ORBIT_POLAR_EPSILON: f32 = 1e-4; // keeps the camera off the poles

// Model asset
pub const MODEL_PATH: &str = "/background.glb";
pub const MODEL_POSITION: [f32; 3] = [0.0, -1.0, 0.0];
pub const MODEL_SCALE: f32 = 0.5;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_DIRECTION: [f32; 3] = [1.0, 1.0, 1.0]; // normalized at use
pub const BACKGROUND_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
