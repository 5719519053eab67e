//! Arena-backed transform hierarchy for icon prefabs.
//!
//! Nodes are never removed, so a [`NodeId`] stays valid for the lifetime of
//! its [`Prefab`]. Node 0 is always the root.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::mesh::Renderer;

/// Index of a node inside a [`Prefab`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Local translation, rotation and scale relative to the parent node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Parent-from-local matrix (scale, then rotation, then translation).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Euler angles in degrees, applied about Z, then X, then Y.
pub fn euler_degrees(angles: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        angles.y.to_radians(),
        angles.x.to_radians(),
        angles.z.to_radians(),
    )
}

/// A node in the hierarchy.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    /// Free-form tag; [`crate::ICON_HIDDEN_TAG`] marks geometry removed after measuring.
    pub tag: String,
    pub local: Transform,
    pub renderer: Option<Renderer>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: String::new(),
            local: Transform::IDENTITY,
            renderer: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, local: Transform) -> Self {
        self.local = local;
        self
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Transform hierarchy rendered to produce a part's catalog icon.
#[derive(Clone, Debug)]
pub struct Prefab {
    nodes: Vec<SceneNode>,
}

impl Prefab {
    /// Creates a prefab containing only a root node.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![SceneNode::new(root_name)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Attach `node` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this prefab.
    pub fn add_child(&mut self, parent: NodeId, mut node: SceneNode) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "parent {parent:?} out of range");
        let id = NodeId(self.nodes.len());
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The `index`-th direct child of `id`.
    pub fn child(&self, id: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[id.0].children.get(index).copied()
    }

    /// Direct child of `id` named `name`.
    pub fn find_child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .find(|c| self.nodes[c.0].name == name)
    }

    /// Depth-first search for `name` starting with `id` itself.
    pub fn search(&self, id: NodeId, name: &str) -> Option<NodeId> {
        if self.nodes[id.0].name == name {
            return Some(id);
        }
        self.find_descendant(id, name)
    }

    /// Depth-first search for `name` among the descendants of `id` (excluding `id`).
    pub fn find_descendant(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .find_map(|&c| self.search(c, name))
    }

    /// `id` and all of its descendants in depth-first pre-order.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.nodes[n.0].children.iter().rev().copied());
        }
        out
    }

    /// World-from-local matrix of `id`.
    pub fn local_to_world(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let local = node.local.matrix();
        match node.parent {
            Some(p) => self.local_to_world(p) * local,
            None => local,
        }
    }

    pub fn world_position(&self, id: NodeId) -> Vec3 {
        self.local_to_world(id).transform_point3(Vec3::ZERO)
    }

    /// Accumulated rotation of `id` and its ancestors, ignoring scale.
    pub fn world_rotation(&self, id: NodeId) -> Quat {
        let node = &self.nodes[id.0];
        match node.parent {
            Some(p) => self.world_rotation(p) * node.local.rotation,
            None => node.local.rotation,
        }
    }

    /// Move `id` so its world position becomes `position`.
    pub fn set_world_position(&mut self, id: NodeId, position: Vec3) {
        let local = match self.nodes[id.0].parent {
            Some(p) => self.local_to_world(p).inverse().transform_point3(position),
            None => position,
        };
        self.nodes[id.0].local.position = local;
    }

    /// Rotate `id` in its own local frame by Euler angles in degrees.
    pub fn rotate_local(&mut self, id: NodeId, euler_deg: Vec3) {
        let node = &mut self.nodes[id.0];
        node.local.rotation = (node.local.rotation * euler_degrees(euler_deg)).normalize();
    }
}
