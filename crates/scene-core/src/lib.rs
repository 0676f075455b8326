pub mod config;
pub mod constants;
pub mod dispatch;
pub mod markers;
pub mod mesh;
pub mod model;
pub mod orbit;
pub mod pick;
pub mod scene;
pub mod state;

pub use config::*;
pub use dispatch::*;
pub use markers::*;
pub use mesh::*;
pub use model::*;
pub use orbit::*;
pub use pick::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
