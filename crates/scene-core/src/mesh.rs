use crate::markers::MarkerSpec;
use glam::Vec3;
use std::f32::consts::PI;

/// Vertex layout shared by the CPU mesh data and the GPU scene pipeline.
///
/// `color.w` selects shading: 1.0 is lit by the scene lights, 0.0 draws the
/// flat color (used for the markers).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(move |tri| {
            let a = self.vertices.get(tri[0] as usize)?;
            let b = self.vertices.get(tri[1] as usize)?;
            let c = self.vertices.get(tri[2] as usize)?;
            Some([
                Vec3::from_array(a.position),
                Vec3::from_array(b.position),
                Vec3::from_array(c.position),
            ])
        })
    }

    /// Append another mesh, rebasing its indices.
    pub fn append(&mut self, other: MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }

    /// Loose bounding sphere around the vertex positions (AABB center).
    pub fn bounding_sphere(&self) -> (Vec3, f32) {
        if self.vertices.is_empty() {
            return (Vec3::ZERO, 0.0);
        }
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for v in &self.vertices {
            let p = Vec3::from_array(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        let center = (min + max) * 0.5;
        let radius = self
            .vertices
            .iter()
            .map(|v| Vec3::from_array(v.position).distance(center))
            .fold(0.0_f32, f32::max);
        (center, radius)
    }
}

/// UV sphere tessellation, world-space, flat-colored.
pub fn uv_sphere(
    center: Vec3,
    radius: f32,
    width_segments: u32,
    height_segments: u32,
    color: [f32; 4],
) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * 2.0 * PI;
            let normal = Vec3::new(
                -phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            );
            vertices.push(MeshVertex {
                position: (center + normal * radius).to_array(),
                normal: normal.to_array(),
                color,
            });
        }
    }
    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { vertices, indices }
}

pub fn marker_mesh(spec: &MarkerSpec) -> MeshData {
    let [r, g, b] = spec.color;
    uv_sphere(
        spec.center(),
        spec.effective_radius(),
        spec.width_segments,
        spec.height_segments,
        [r, g, b, 0.0],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let c = Vec3::new(1.0, 2.0, 3.0);
        let mesh = uv_sphere(c, 0.5, 8, 6, [1.0; 4]);
        assert_eq!(mesh.vertices.len(), 9 * 7);
        for v in &mesh.vertices {
            let d = Vec3::from_array(v.position).distance(c);
            assert!((d - 0.5).abs() < 1e-5);
        }
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn append_rebases_indices() {
        let mut a = uv_sphere(Vec3::ZERO, 1.0, 3, 2, [1.0; 4]);
        let count = a.vertices.len() as u32;
        let b = uv_sphere(Vec3::X, 1.0, 3, 2, [1.0; 4]);
        let b_first = b.indices[0];
        a.append(b);
        assert!(a.indices.contains(&(b_first + count)));
    }
}
