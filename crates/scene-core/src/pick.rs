use crate::scene::{ObjectId, SceneObject, Shape};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Nearest non-negative hit distance, including rays that start inside the sphere.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    if t0 >= 0.0 {
        return Some(t0);
    }
    let t1 = -b + sq;
    (t1 >= 0.0).then_some(t1)
}

/// Möller–Trumbore, double sided.
#[inline]
pub fn ray_triangle(ray_origin: Vec3, ray_dir: Vec3, tri: [Vec3; 3]) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = tri[1] - tri[0];
    let e2 = tri[2] - tri[0];
    let p = ray_dir.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray_origin - tri[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray_dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}

fn intersect_object(ray: &Ray, object: &SceneObject) -> Option<f32> {
    match &object.shape {
        Shape::Sphere { center, radius } => ray_sphere(ray.origin, ray.dir, *center, *radius),
        Shape::Mesh {
            mesh,
            bounds_center,
            bounds_radius,
        } => {
            ray_sphere(ray.origin, ray.dir, *bounds_center, *bounds_radius)?;
            mesh.triangles()
                .filter_map(|tri| ray_triangle(ray.origin, ray.dir, tri))
                .reduce(f32::min)
        }
    }
}

/// All hits sorted by distance; equal distances keep traversal order.
pub fn intersect_objects(ray: &Ray, objects: &[SceneObject]) -> Vec<Intersection> {
    if !ray.dir.is_finite() || ray.dir == Vec3::ZERO {
        return Vec::new();
    }
    let mut hits: Vec<Intersection> = objects
        .iter()
        .filter_map(|o| {
            intersect_object(ray, o).map(|t| Intersection {
                object: o.id,
                distance: t,
                point: ray.at(t),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Closest hit, or `None` when the ray misses everything.
pub fn closest_hit(ray: &Ray, objects: &[SceneObject]) -> Option<Intersection> {
    intersect_objects(ray, objects).into_iter().next()
}
