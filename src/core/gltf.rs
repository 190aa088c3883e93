// Minimal glTF 2.0 document decoding: just enough of the JSON schema to pull
// triangle meshes, the node hierarchy, materials' base color, and the first
// animation clip out of a GLB file. Sparse accessors and external buffers
// are not supported; the viewer only ever loads a self-contained GLB.

use fnv::FnvHashMap;
use glam::{Mat4, Quat, Vec3};
use serde::Deserialize;
use thiserror::Error;

use super::anim::{Channel, ChannelValues, Clip, Interpolation, NodeTransform};
use super::glb::{parse_glb, GlbError};

// glTF componentType constants.
const COMP_U8: u32 = 5121;
const COMP_U16: u32 = 5123;
const COMP_U32: u32 = 5125;
const COMP_F32: u32 = 5126;

const DEFAULT_BASE_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Glb(#[from] GlbError),
    #[error("invalid glTF JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("accessor {0} references data outside the BIN chunk")]
    AccessorRange(usize),
    #[error("unsupported accessor layout: {0}")]
    Unsupported(&'static str),
}

// ---------------- JSON schema subset ----------------

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    accessors: Vec<Accessor>,
    #[serde(default)]
    buffer_views: Vec<BufferView>,
    #[serde(default)]
    meshes: Vec<Mesh>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    animations: Vec<Animation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Accessor {
    buffer_view: Option<usize>,
    #[serde(default)]
    byte_offset: usize,
    component_type: u32,
    count: usize,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BufferView {
    #[serde(default)]
    byte_offset: usize,
    byte_length: usize,
    byte_stride: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct Mesh {
    primitives: Vec<Primitive>,
}

#[derive(Debug, Deserialize)]
struct Primitive {
    attributes: FnvHashMap<String, usize>,
    indices: Option<usize>,
    material: Option<usize>,
    mode: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct Node {
    mesh: Option<usize>,
    #[serde(default)]
    children: Vec<usize>,
    translation: Option<[f32; 3]>,
    rotation: Option<[f32; 4]>,
    scale: Option<[f32; 3]>,
    matrix: Option<[f32; 16]>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Material {
    pbr_metallic_roughness: Option<Pbr>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Pbr {
    base_color_factor: Option<[f32; 4]>,
}

#[derive(Debug, Deserialize)]
struct Animation {
    channels: Vec<AnimChannel>,
    samplers: Vec<AnimSampler>,
}

#[derive(Debug, Deserialize)]
struct AnimChannel {
    sampler: usize,
    target: AnimTarget,
}

#[derive(Debug, Deserialize)]
struct AnimTarget {
    node: Option<usize>,
    path: String,
}

#[derive(Debug, Deserialize)]
struct AnimSampler {
    input: usize,
    output: usize,
    interpolation: Option<String>,
}

// ---------------- Decoded model ----------------

/// One triangle primitive, already flattened against its owning node.
pub struct MeshPrimitive {
    pub node: usize,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub base_color: [f32; 4],
}

/// Everything the renderer and frame loop need from the asset file.
pub struct ModelData {
    pub meshes: Vec<MeshPrimitive>,
    pub nodes: Vec<NodeTransform>,
    pub clip: Option<Clip>,
}

/// Decode a GLB byte buffer fetched from the asset path.
pub fn decode_glb(bytes: &[u8]) -> Result<ModelData, ModelError> {
    let chunks = parse_glb(bytes)?;
    let doc: Document = serde_json::from_slice(chunks.json)?;
    let bin = chunks.bin.unwrap_or(&[]);

    let mut nodes: Vec<NodeTransform> = doc.nodes.iter().map(node_transform).collect();
    for (parent, node) in doc.nodes.iter().enumerate() {
        for &child in &node.children {
            if let Some(n) = nodes.get_mut(child) {
                n.parent = Some(parent);
            }
        }
    }

    let mut meshes = Vec::new();
    for (node_index, node) in doc.nodes.iter().enumerate() {
        let Some(mesh_index) = node.mesh else {
            continue;
        };
        let Some(mesh) = doc.meshes.get(mesh_index) else {
            continue;
        };
        for prim in &mesh.primitives {
            // Non-triangle primitives (points/lines) are skipped.
            if prim.mode.unwrap_or(4) != 4 {
                continue;
            }
            let Some(&pos_acc) = prim.attributes.get("POSITION") else {
                continue;
            };
            let positions = read_vec3(&doc, bin, pos_acc)?;
            let indices = match prim.indices {
                Some(acc) => read_indices(&doc, bin, acc)?,
                None => (0..positions.len() as u32).collect(),
            };
            let normals = match prim.attributes.get("NORMAL") {
                Some(&acc) => read_vec3(&doc, bin, acc)?,
                None => averaged_normals(&positions, &indices),
            };
            let base_color = prim
                .material
                .and_then(|m| doc.materials.get(m))
                .and_then(|m| m.pbr_metallic_roughness.as_ref())
                .and_then(|p| p.base_color_factor)
                .unwrap_or(DEFAULT_BASE_COLOR);
            meshes.push(MeshPrimitive {
                node: node_index,
                positions,
                normals,
                indices,
                base_color,
            });
        }
    }

    let clip = doc
        .animations
        .first()
        .map(|a| decode_clip(&doc, bin, a))
        .transpose()?;

    Ok(ModelData {
        meshes,
        nodes,
        clip,
    })
}

fn node_transform(node: &Node) -> NodeTransform {
    if let Some(m) = node.matrix {
        let (scale, rotation, translation) =
            Mat4::from_cols_array(&m).to_scale_rotation_translation();
        return NodeTransform {
            parent: None,
            translation,
            rotation,
            scale,
        };
    }
    NodeTransform {
        parent: None,
        translation: node.translation.map(Vec3::from).unwrap_or(Vec3::ZERO),
        rotation: node
            .rotation
            .map(Quat::from_array)
            .unwrap_or(Quat::IDENTITY),
        scale: node.scale.map(Vec3::from).unwrap_or(Vec3::ONE),
    }
}

// ---------------- Accessor decoding ----------------

fn component_size(component_type: u32) -> Result<usize, ModelError> {
    match component_type {
        COMP_U8 => Ok(1),
        COMP_U16 => Ok(2),
        COMP_U32 | COMP_F32 => Ok(4),
        _ => Err(ModelError::Unsupported("component type")),
    }
}

fn component_count(kind: &str) -> Result<usize, ModelError> {
    match kind {
        "SCALAR" => Ok(1),
        "VEC2" => Ok(2),
        "VEC3" => Ok(3),
        "VEC4" => Ok(4),
        _ => Err(ModelError::Unsupported("accessor type")),
    }
}

/// Iterate an accessor's elements as raw little-endian bytes, honoring the
/// view's byte stride, and hand each element to `emit`.
fn for_each_element(
    doc: &Document,
    bin: &[u8],
    accessor_index: usize,
    mut emit: impl FnMut(&[u8]),
) -> Result<(), ModelError> {
    let acc = doc
        .accessors
        .get(accessor_index)
        .ok_or(ModelError::AccessorRange(accessor_index))?;
    let view_index = acc
        .buffer_view
        .ok_or(ModelError::Unsupported("sparse accessor"))?;
    let view = doc
        .buffer_views
        .get(view_index)
        .ok_or(ModelError::AccessorRange(accessor_index))?;
    let elem_size = component_size(acc.component_type)? * component_count(&acc.kind)?;
    let stride = view.byte_stride.unwrap_or(elem_size);
    let view_bytes = bin
        .get(view.byte_offset..view.byte_offset + view.byte_length)
        .ok_or(ModelError::AccessorRange(accessor_index))?;
    for i in 0..acc.count {
        let start = acc.byte_offset + i * stride;
        let elem = view_bytes
            .get(start..start + elem_size)
            .ok_or(ModelError::AccessorRange(accessor_index))?;
        emit(elem);
    }
    Ok(())
}

fn f32_at(bytes: &[u8], i: usize) -> f32 {
    f32::from_le_bytes([
        bytes[i * 4],
        bytes[i * 4 + 1],
        bytes[i * 4 + 2],
        bytes[i * 4 + 3],
    ])
}

fn expect_f32(doc: &Document, accessor_index: usize) -> Result<(), ModelError> {
    match doc.accessors.get(accessor_index) {
        Some(a) if a.component_type == COMP_F32 => Ok(()),
        Some(_) => Err(ModelError::Unsupported("non-float vertex data")),
        None => Err(ModelError::AccessorRange(accessor_index)),
    }
}

fn read_vec3(doc: &Document, bin: &[u8], acc: usize) -> Result<Vec<[f32; 3]>, ModelError> {
    expect_f32(doc, acc)?;
    let mut out = Vec::new();
    for_each_element(doc, bin, acc, |e| {
        out.push([f32_at(e, 0), f32_at(e, 1), f32_at(e, 2)]);
    })?;
    Ok(out)
}

fn read_vec4(doc: &Document, bin: &[u8], acc: usize) -> Result<Vec<[f32; 4]>, ModelError> {
    expect_f32(doc, acc)?;
    let mut out = Vec::new();
    for_each_element(doc, bin, acc, |e| {
        out.push([f32_at(e, 0), f32_at(e, 1), f32_at(e, 2), f32_at(e, 3)]);
    })?;
    Ok(out)
}

fn read_scalars(doc: &Document, bin: &[u8], acc: usize) -> Result<Vec<f32>, ModelError> {
    expect_f32(doc, acc)?;
    let mut out = Vec::new();
    for_each_element(doc, bin, acc, |e| out.push(f32_at(e, 0)))?;
    Ok(out)
}

fn read_indices(doc: &Document, bin: &[u8], acc: usize) -> Result<Vec<u32>, ModelError> {
    let component_type = doc
        .accessors
        .get(acc)
        .ok_or(ModelError::AccessorRange(acc))?
        .component_type;
    let mut out = Vec::new();
    match component_type {
        COMP_U8 => for_each_element(doc, bin, acc, |e| out.push(e[0] as u32))?,
        COMP_U16 => for_each_element(doc, bin, acc, |e| {
            out.push(u16::from_le_bytes([e[0], e[1]]) as u32)
        })?,
        COMP_U32 => for_each_element(doc, bin, acc, |e| {
            out.push(u32::from_le_bytes([e[0], e[1], e[2], e[3]]))
        })?,
        _ => return Err(ModelError::Unsupported("index component type")),
    }
    Ok(out)
}

/// Area-weighted vertex normals for primitives that ship without them.
fn averaged_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let n = (Vec3::from(positions[b]) - pa).cross(Vec3::from(positions[c]) - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.normalize_or_zero().to_array())
        .collect()
}

// ---------------- Animation decoding ----------------

fn decode_clip(doc: &Document, bin: &[u8], anim: &Animation) -> Result<Clip, ModelError> {
    let mut channels = Vec::new();
    let mut duration = 0.0_f32;
    for ch in &anim.channels {
        let Some(node) = ch.target.node else {
            continue;
        };
        let Some(sampler) = anim.samplers.get(ch.sampler) else {
            continue;
        };
        let times = read_scalars(doc, bin, sampler.input)?;
        if times.is_empty() {
            continue;
        }
        let cubic = sampler.interpolation.as_deref() == Some("CUBICSPLINE");
        let interpolation = match sampler.interpolation.as_deref() {
            Some("STEP") => Interpolation::Step,
            // CUBICSPLINE degrades to linear over its value keyframes.
            _ => Interpolation::Linear,
        };
        let values = match ch.target.path.as_str() {
            "translation" => {
                ChannelValues::Translation(vec3_keys(read_vec3(doc, bin, sampler.output)?, cubic))
            }
            "rotation" => {
                let raw = read_vec4(doc, bin, sampler.output)?;
                let quats: Vec<Quat> = raw.into_iter().map(Quat::from_array).collect();
                ChannelValues::Rotation(if cubic { middle_keys(quats) } else { quats })
            }
            "scale" => {
                ChannelValues::Scale(vec3_keys(read_vec3(doc, bin, sampler.output)?, cubic))
            }
            // Morph-target weights are not rendered.
            _ => continue,
        };
        if channel_len(&values) < times.len() {
            return Err(ModelError::Unsupported("short sampler output"));
        }
        duration = duration.max(*times.last().unwrap_or(&0.0));
        channels.push(Channel {
            node,
            times,
            values,
            interpolation,
        });
    }
    Ok(Clip { channels, duration })
}

fn vec3_keys(raw: Vec<[f32; 3]>, cubic: bool) -> Vec<Vec3> {
    let vecs: Vec<Vec3> = raw.into_iter().map(Vec3::from).collect();
    if cubic {
        middle_keys(vecs)
    } else {
        vecs
    }
}

/// Cubic-spline sampler output is (in-tangent, value, out-tangent) triples;
/// keep just the values.
fn middle_keys<T: Copy>(raw: Vec<T>) -> Vec<T> {
    raw.chunks_exact(3).map(|c| c[1]).collect()
}

fn channel_len(values: &ChannelValues) -> usize {
    match values {
        ChannelValues::Translation(v) => v.len(),
        ChannelValues::Rotation(v) => v.len(),
        ChannelValues::Scale(v) => v.len(),
    }
}
