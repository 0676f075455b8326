//! Model asset loading.
//!
//! The binary glTF container is parsed by the `gltf` crate; this module only
//! walks the node hierarchy and bakes every triangle primitive into one
//! world-space mesh that both the renderer and the picker consume.

use crate::config::ModelTransform;
use crate::mesh::{MeshData, MeshVertex};
use glam::{Mat3, Mat4, Vec3};
use std::borrow::Cow;
use thiserror::Error;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_JSON_CHUNK: &[u8; 4] = b"JSON";
const GLB_HEADER_LEN: usize = 12;
const GLB_CHUNK_HEADER_LEN: usize = 8;
const REQUIRED_KEY: &[u8] = b"\"extensionsRequired\"";
const OPTIONAL_KEY: &[u8] = b"\"extensionsOptional\"";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("model asset {path} unavailable: {reason}")]
    Unavailable { path: String, reason: String },
    #[error("invalid glTF data: {0}")]
    Parse(#[from] gltf::Error),
    #[error("buffer {0} is not embedded in the binary chunk")]
    ExternalBuffer(usize),
    #[error("model contains no triangle geometry")]
    Empty,
}

/// The loaded model, flattened into world space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneRoot {
    pub mesh: MeshData,
    pub primitive_count: usize,
}

impl SceneRoot {
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// Demote `extensionsRequired` in a GLB's JSON chunk so that assets needing
/// material extensions still load. Only geometry and the base color factor are
/// read, and neither depends on those extensions.
fn relax_required_extensions(bytes: &[u8]) -> Cow<'_, [u8]> {
    let json_start = GLB_HEADER_LEN + GLB_CHUNK_HEADER_LEN;
    if bytes.len() < json_start || &bytes[..4] != GLB_MAGIC || &bytes[16..20] != GLB_JSON_CHUNK {
        return Cow::Borrowed(bytes);
    }
    let mut len = [0u8; 4];
    len.copy_from_slice(&bytes[12..16]);
    let json_end = json_start.saturating_add(u32::from_le_bytes(len) as usize);
    let Some(json) = bytes.get(json_start..json_end) else {
        return Cow::Borrowed(bytes);
    };
    let Some(pos) = json
        .windows(REQUIRED_KEY.len())
        .position(|w| w == REQUIRED_KEY)
    else {
        return Cow::Borrowed(bytes);
    };
    let at = json_start + pos;
    let mut owned = bytes.to_vec();
    owned[at..at + OPTIONAL_KEY.len()].copy_from_slice(OPTIONAL_KEY);
    log::warn!("[model] required glTF extensions demoted to optional");
    Cow::Owned(owned)
}

pub fn load_scene_root(bytes: &[u8], transform: ModelTransform) -> Result<SceneRoot, LoadError> {
    let bytes = relax_required_extensions(bytes);
    let gltf = gltf::Gltf::from_slice(&bytes)?;
    for buffer in gltf.buffers() {
        if let gltf::buffer::Source::Uri(_) = buffer.source() {
            return Err(LoadError::ExternalBuffer(buffer.index()));
        }
    }
    let blob = gltf.blob.as_deref();

    let mut root = SceneRoot::default();
    let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
    if let Some(scene) = scene {
        for node in scene.nodes() {
            visit_node(&node, transform.matrix(), blob, &mut root);
        }
    }
    if root.mesh.is_empty() {
        return Err(LoadError::Empty);
    }
    log::info!(
        "[model] {} triangles from {} primitives",
        root.triangle_count(),
        root.primitive_count
    );
    Ok(root)
}

fn visit_node(node: &gltf::Node, parent: Mat4, blob: Option<&[u8]>, out: &mut SceneRoot) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            if let Some(data) = read_primitive(&primitive, world, blob) {
                out.mesh.append(data);
                out.primitive_count += 1;
            }
        }
    }
    for child in node.children() {
        visit_node(&child, world, blob, out);
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    world: Mat4,
    blob: Option<&[u8]>,
) -> Option<MeshData> {
    let reader = primitive.reader(|buffer| match buffer.source() {
        gltf::buffer::Source::Bin => blob,
        gltf::buffer::Source::Uri(_) => None,
    });
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    let normals: Vec<[f32; 3]> = reader
        .read_normals()
        .map(|n| n.collect())
        .unwrap_or_default();
    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let [r, g, b, _] = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_factor();
    let normal_matrix = Mat3::from_mat4(world).inverse().transpose();

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
            MeshVertex {
                position: world.transform_point3(Vec3::from_array(*p)).to_array(),
                normal: (normal_matrix * Vec3::from_array(n))
                    .normalize_or_zero()
                    .to_array(),
                color: [r, g, b, 1.0],
            }
        })
        .collect::<Vec<_>>();
    let count = vertices.len() as u32;
    let indices = indices
        .chunks_exact(3)
        .filter(|tri| tri.iter().all(|&i| i < count))
        .flatten()
        .copied()
        .collect();
    Some(MeshData { vertices, indices })
}
