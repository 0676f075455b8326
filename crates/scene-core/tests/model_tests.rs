// Host-side tests for model loading, using a GLB assembled in memory.

use glam::Vec3;
use scene_core::{load_scene_root, LoadError, ModelTransform};

const TRIANGLE: [[f32; 3]; 3] = [[-1.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 2.0, 0.0]];

fn pad4(bytes: &mut Vec<u8>, fill: u8) {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
}

fn triangle_glb(node_extra: &str, embedded: bool) -> Vec<u8> {
    triangle_glb_with("", node_extra, embedded)
}

/// Single-triangle GLB: `root_extra` merged into the top-level object,
/// `node_extra` into the only node, u16 indices.
fn triangle_glb_with(root_extra: &str, node_extra: &str, embedded: bool) -> Vec<u8> {
    let mut bin = Vec::new();
    for p in TRIANGLE {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    let byte_length = bin.len();
    pad4(&mut bin, 0);

    let buffer = if embedded {
        format!(r#"{{"byteLength":{byte_length}}}"#)
    } else {
        format!(r#"{{"byteLength":{byte_length},"uri":"triangle.bin"}}"#)
    };
    let json = format!(
        r#"{{"asset":{{"version":"2.0"}}{root_extra},"scene":0,"scenes":[{{"nodes":[0]}}],
"nodes":[{{"mesh":0{node_extra}}}],
"meshes":[{{"primitives":[{{"attributes":{{"POSITION":0}},"indices":1,"material":0}}]}}],
"materials":[{{"pbrMetallicRoughness":{{"baseColorFactor":[0.25,0.5,0.75,1.0]}}}}],
"buffers":[{buffer}],
"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}},{{"buffer":0,"byteOffset":36,"byteLength":6}}],
"accessors":[
{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[-1.0,0.0,0.0],"max":[1.0,2.0,0.0]}},
{{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}}]}}"#
    );
    let mut json = json.into_bytes();
    pad4(&mut json, b' ');

    let mut glb = Vec::new();
    let total = 12 + 8 + json.len() + if embedded { 8 + bin.len() } else { 0 };
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F_534Au32.to_le_bytes()); // JSON
    glb.extend_from_slice(&json);
    if embedded {
        glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
        glb.extend_from_slice(&0x004E_4942u32.to_le_bytes()); // BIN
        glb.extend_from_slice(&bin);
    }
    glb
}

fn identity() -> ModelTransform {
    ModelTransform {
        position: Vec3::ZERO,
        scale: 1.0,
    }
}

fn positions(root: &scene_core::SceneRoot) -> Vec<Vec3> {
    root.mesh
        .vertices
        .iter()
        .map(|v| Vec3::from_array(v.position))
        .collect()
}

#[test]
fn loads_single_triangle() {
    let root = load_scene_root(&triangle_glb("", true), identity()).unwrap();
    assert_eq!(root.triangle_count(), 1);
    assert_eq!(root.primitive_count, 1);
    assert_eq!(positions(&root), TRIANGLE.map(Vec3::from_array).to_vec());
    let v = root.mesh.vertices[0];
    assert_eq!(v.color, [0.25, 0.5, 0.75, 1.0]);
    // no normals in the asset: +Y fallback
    assert_eq!(v.normal, [0.0, 1.0, 0.0]);
}

#[test]
fn default_transform_is_baked() {
    let root = load_scene_root(&triangle_glb("", true), ModelTransform::default()).unwrap();
    let got = positions(&root);
    let want = [
        Vec3::new(-0.5, -1.0, 0.0),
        Vec3::new(0.5, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
    ];
    for (g, w) in got.iter().zip(want) {
        assert!((*g - w).length() < 1e-6, "{g:?} != {w:?}");
    }
}

#[test]
fn node_transform_composes_with_model_transform() {
    let glb = triangle_glb(r#","translation":[0.0,0.0,4.0]"#, true);
    let root = load_scene_root(&glb, ModelTransform::default()).unwrap();
    for p in positions(&root) {
        assert!((p.z - 2.0).abs() < 1e-6);
    }
}

#[test]
fn required_material_extensions_do_not_block_loading() {
    let glb = triangle_glb_with(
        r#","extensionsUsed":["KHR_materials_emissive_strength"],"extensionsRequired":["KHR_materials_emissive_strength"]"#,
        "",
        true,
    );
    let root = load_scene_root(&glb, identity()).unwrap();
    assert_eq!(root.triangle_count(), 1);
    assert_eq!(positions(&root), TRIANGLE.map(Vec3::from_array).to_vec());
}

#[test]
fn garbage_bytes_are_a_parse_error() {
    let err = load_scene_root(b"definitely not a model", identity()).unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)), "{err}");
}

#[test]
fn external_buffers_are_rejected() {
    let err = load_scene_root(&triangle_glb("", false), identity()).unwrap_err();
    assert!(matches!(err, LoadError::ExternalBuffer(0)), "{err}");
}

#[test]
fn load_error_messages_name_the_problem() {
    let err = LoadError::Unavailable {
        path: "/background.glb".into(),
        reason: "404".into(),
    };
    assert_eq!(err.to_string(), "model asset /background.glb unavailable: 404");
    assert_eq!(
        LoadError::Empty.to_string(),
        "model contains no triangle geometry"
    );
}
