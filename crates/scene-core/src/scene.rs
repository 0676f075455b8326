//! Scene graph owned by the render host.
//!
//! The host creates one [`SceneContext`] at startup, adds the markers, and
//! later attaches the model once its asset has loaded. The pick dispatcher
//! borrows the context for the duration of a single click.

use crate::config::SceneConfig;
use crate::markers::{MarkerHandler, MarkerSpec};
use crate::mesh::MeshData;
use crate::model::SceneRoot;
use crate::state::{Camera, Viewport};
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

#[derive(Clone, Debug)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Mesh {
        mesh: MeshData,
        bounds_center: Vec3,
        bounds_radius: f32,
    },
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub shape: Shape,
}

pub struct SceneContext {
    pub camera: Camera,
    pub viewport: Viewport,
    objects: Vec<SceneObject>,
    handlers: FnvHashMap<ObjectId, MarkerHandler>,
    keys: FnvHashMap<&'static str, ObjectId>,
    model: Option<ObjectId>,
    next_id: u32,
}

impl SceneContext {
    /// A degenerate `viewport` falls back to the default size.
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        let viewport = viewport.or_default();
        Self {
            camera: Camera::from_config(&config.camera, viewport.aspect()),
            viewport,
            objects: Vec::new(),
            handlers: FnvHashMap::default(),
            keys: FnvHashMap::default(),
            model: None,
            next_id: 0,
        }
    }

    /// Context populated with the given markers, in order.
    pub fn with_markers(config: &SceneConfig, viewport: Viewport, markers: &[MarkerSpec]) -> Self {
        let mut ctx = Self::new(config, viewport);
        for spec in markers {
            ctx.add_marker(spec);
        }
        ctx
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn add_marker(&mut self, spec: &MarkerSpec) -> ObjectId {
        let id = self.allocate_id();
        self.objects.push(SceneObject {
            id,
            shape: Shape::Sphere {
                center: spec.center(),
                radius: spec.effective_radius(),
            },
        });
        self.handlers.insert(id, MarkerHandler::new(spec));
        self.keys.insert(spec.key, id);
        id
    }

    /// Attach the loaded model. A second call replaces the previous model.
    pub fn attach_model(&mut self, root: &SceneRoot) -> ObjectId {
        if let Some(old) = self.model.take() {
            self.objects.retain(|o| o.id != old);
        }
        let id = self.allocate_id();
        let (bounds_center, bounds_radius) = root.mesh.bounding_sphere();
        self.objects.push(SceneObject {
            id,
            shape: Shape::Mesh {
                mesh: root.mesh.clone(),
                bounds_center,
                bounds_radius,
            },
        });
        self.model = Some(id);
        id
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Apply a new viewport size and keep the camera aspect in step.
    pub fn resize(&mut self, viewport: Viewport) {
        if !viewport.is_valid() {
            return;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn handler(&self, id: ObjectId) -> Option<&MarkerHandler> {
        self.handlers.get(&id)
    }

    pub fn handler_mut(&mut self, id: ObjectId) -> Option<&mut MarkerHandler> {
        self.handlers.get_mut(&id)
    }

    pub fn marker_id(&self, key: &str) -> Option<ObjectId> {
        self.keys.get(key).copied()
    }

    pub fn marker(&self, key: &str) -> Option<&MarkerHandler> {
        self.marker_id(key).and_then(|id| self.handlers.get(&id))
    }

    /// World-space center of a marker sphere.
    pub fn marker_center(&self, key: &str) -> Option<Vec3> {
        let id = self.marker_id(key)?;
        match self.object(id)?.shape {
            Shape::Sphere { center, .. } => Some(center),
            Shape::Mesh { .. } => None,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.handlers.values().filter(|h| h.revealed).count()
    }
}
