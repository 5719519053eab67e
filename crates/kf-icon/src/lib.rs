//! Part icon normalization.
//!
//! Icon prefabs are small transform hierarchies whose nodes may carry a static
//! or a skinned mesh. [`normalize_icon`] measures the whole prefab, rescales
//! its primary child so the largest extent matches the icon frame, applies an
//! optional rotation and recenters it. [`fix_catalog`] runs that pass over
//! every part that asks for it through a `KFIconOverride` node.

pub mod catalog;
pub mod mesh;
pub mod normalizer;
pub mod overrides;
pub mod scene;

pub use catalog::{AvailablePart, KF_PART_PREFIX, fix_catalog, fix_part_icon, parts_to_fix};
pub use mesh::{BoneWeight, Mesh, Renderer, SkinnedMesh};
pub use normalizer::{ICON_HIDDEN_TAG, IconFix, calculate_bounds, normalize_icon};
pub use overrides::{OVERRIDE_NODE, PartIconOverride};
pub use scene::{NodeId, Prefab, SceneNode, Transform};
