//! Mesh geometry attached to prefab nodes.

use glam::{Mat4, Vec3};
use kf_math::Aabb;

use crate::scene::{NodeId, Prefab};

/// Vertex positions in the owning node's local space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>) -> Self {
        Self { vertices }
    }

    /// Axis-aligned unit cube centered on the origin, scaled by `size`.
    pub fn cube(size: f32) -> Self {
        let h = size * 0.5;
        Self::new(Aabb::new(Vec3::splat(-h), Vec3::splat(h)).corners().to_vec())
    }

    /// Local bounds recomputed from the vertex positions.
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

/// Up to four bone influences for one vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoneWeight {
    pub bones: [usize; 4],
    pub weights: [f32; 4],
}

impl BoneWeight {
    /// Vertex bound fully to a single bone.
    pub fn single(bone: usize) -> Self {
        Self {
            bones: [bone, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Mesh deformed by a set of bone nodes.
///
/// `bind_poses[i]` maps mesh space into the rest space of `bones[i]`. Vertices
/// without weights, or whose weights reference no valid bone, are left in
/// mesh space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkinnedMesh {
    pub mesh: Mesh,
    pub bones: Vec<NodeId>,
    pub bind_poses: Vec<Mat4>,
    pub weights: Vec<BoneWeight>,
}

impl SkinnedMesh {
    /// Skinned mesh with no bones; bakes to its rest pose.
    pub fn rigid(mesh: Mesh) -> Self {
        Self {
            mesh,
            ..Self::default()
        }
    }

    /// Snapshot of the deformed vertices in the unscaled frame of `node`
    /// (its world position and rotation).
    pub fn bake(&self, prefab: &Prefab, node: NodeId) -> Vec<Vec3> {
        if self.bones.is_empty() {
            return self.mesh.vertices.clone();
        }

        let skin: Vec<Option<Mat4>> = self
            .bones
            .iter()
            .zip(self.bind_poses.iter())
            .map(|(&bone, bind)| {
                (bone.index() < prefab.len()).then(|| prefab.local_to_world(bone) * *bind)
            })
            .collect();
        let to_frame = unscaled_frame(prefab, node).inverse();

        self.mesh
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let Some(w) = self.weights.get(i) else {
                    return v;
                };
                let mut acc = Vec3::ZERO;
                let mut total = 0.0;
                for (&bone, &weight) in w.bones.iter().zip(w.weights.iter()) {
                    if weight <= 0.0 {
                        continue;
                    }
                    if let Some(Some(m)) = skin.get(bone) {
                        acc += m.transform_point3(v) * weight;
                        total += weight;
                    }
                }
                if total > 0.0 {
                    to_frame.transform_point3(acc / total)
                } else {
                    v
                }
            })
            .collect()
    }
}

/// Geometry component of a prefab node.
#[derive(Clone, Debug, PartialEq)]
pub enum Renderer {
    Static(Mesh),
    Skinned(SkinnedMesh),
}

impl Renderer {
    pub fn is_skinned(&self) -> bool {
        matches!(self, Self::Skinned(_))
    }

    /// World-space bounds of this renderer when attached to `node`.
    ///
    /// Static meshes use the node's full local-to-world matrix. Skinned meshes
    /// are baked first and placed with the node's position and rotation only.
    /// Returns `None` for a mesh without vertices.
    pub fn world_bounds(&self, prefab: &Prefab, node: NodeId) -> Option<Aabb> {
        match self {
            Self::Static(mesh) => Some(mesh.bounds()?.transformed(&prefab.local_to_world(node))),
            Self::Skinned(skinned) => {
                let baked = Aabb::from_points(skinned.bake(prefab, node))?;
                Some(baked.transformed(&unscaled_frame(prefab, node)))
            }
        }
    }
}

fn unscaled_frame(prefab: &Prefab, node: NodeId) -> Mat4 {
    Mat4::from_rotation_translation(prefab.world_rotation(node), prefab.world_position(node))
}
