// Keyframe animation sampling over the model's node hierarchy.
//
// Only what the viewer needs: the first clip of the document, linear and
// step interpolation, TRS targets. Cubic-spline samplers are degraded to
// linear over their keyframe values.

use glam::{Mat4, Quat, Vec3};

/// Local transform of one glTF node plus its parent link.
#[derive(Clone, Copy, Debug)]
pub struct NodeTransform {
    pub parent: Option<usize>,
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl NodeTransform {
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self {
            parent: None,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolation {
    Linear,
    Step,
}

/// Per-property keyframe values of one channel.
#[derive(Clone, Debug)]
pub enum ChannelValues {
    Translation(Vec<Vec3>),
    Rotation(Vec<Quat>),
    Scale(Vec<Vec3>),
}

#[derive(Clone, Debug)]
pub struct Channel {
    pub node: usize,
    pub times: Vec<f32>,
    pub values: ChannelValues,
    pub interpolation: Interpolation,
}

/// One animation clip; the viewer plays the document's first clip on a loop.
#[derive(Clone, Debug, Default)]
pub struct Clip {
    pub channels: Vec<Channel>,
    pub duration: f32,
}

/// Locate the keyframe segment containing `t` and the normalized position
/// within it.
fn segment(times: &[f32], t: f32) -> (usize, usize, f32) {
    if times.len() < 2 || t <= times[0] {
        return (0, 0, 0.0);
    }
    let last = times.len() - 1;
    if t >= times[last] {
        return (last, last, 0.0);
    }
    let hi = times.partition_point(|&k| k <= t);
    let lo = hi - 1;
    let span = times[hi] - times[lo];
    let alpha = if span > 0.0 { (t - times[lo]) / span } else { 0.0 };
    (lo, hi, alpha)
}

impl Clip {
    /// Apply the clip at time `t` (seconds, caller wraps by `duration`) to the
    /// node transforms. Nodes without channels keep their rest pose.
    pub fn sample(&self, t: f32, nodes: &mut [NodeTransform]) {
        for ch in &self.channels {
            let Some(node) = nodes.get_mut(ch.node) else {
                continue;
            };
            let (lo, hi, alpha) = segment(&ch.times, t);
            let alpha = match ch.interpolation {
                Interpolation::Linear => alpha,
                Interpolation::Step => 0.0,
            };
            match &ch.values {
                ChannelValues::Translation(v) => {
                    node.translation = v[lo].lerp(v[hi], alpha);
                }
                ChannelValues::Rotation(v) => {
                    node.rotation = v[lo].slerp(v[hi], alpha).normalize();
                }
                ChannelValues::Scale(v) => {
                    node.scale = v[lo].lerp(v[hi], alpha);
                }
            }
        }
    }
}

/// World matrices for every node, resolved through the parent chain.
pub fn global_transforms(nodes: &[NodeTransform]) -> Vec<Mat4> {
    let mut out = vec![Mat4::IDENTITY; nodes.len()];
    let mut done = vec![false; nodes.len()];
    for i in 0..nodes.len() {
        resolve(nodes, i, &mut out, &mut done);
    }
    out
}

fn resolve(nodes: &[NodeTransform], i: usize, out: &mut [Mat4], done: &mut [bool]) {
    if done[i] {
        return;
    }
    // Mark first; a malformed parent cycle then degrades to local transforms
    // instead of recursing forever.
    done[i] = true;
    let local = nodes[i].local_matrix();
    out[i] = match nodes[i].parent {
        Some(p) if p < nodes.len() && p != i => {
            resolve(nodes, p, out, done);
            out[p] * local
        }
        _ => local,
    };
}
