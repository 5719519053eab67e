//! Icon scale, rotation and centering.

use glam::Vec3;
use kf_math::Aabb;

use crate::overrides::PartIconOverride;
use crate::scene::{NodeId, Prefab};

/// Tag on skinned geometry that is measured but removed from the icon.
pub const ICON_HIDDEN_TAG: &str = "Icon_Hidden";

const MODEL_NODE: &str = "model";

/// Result of a successful [`normalize_icon`] pass.
#[derive(Clone, Debug, PartialEq)]
pub struct IconFix {
    /// Combined world bounds of the prefab before any change.
    pub bounds: Aabb,
    /// Largest dimension of `bounds`.
    pub max_dimension: f32,
    /// Factor applied to the primary child's local scale.
    pub scale_factor: f32,
    /// Whether a centering target was found and applied.
    pub recentered: bool,
}

/// Combined world bounds of every renderer in the prefab.
///
/// Skinned renderers on nodes tagged [`ICON_HIDDEN_TAG`] contribute to the
/// bounds and are then removed from their node. Returns `None`, leaving the
/// prefab untouched, when no node carries a renderer with vertices.
pub fn calculate_bounds(prefab: &mut Prefab) -> Option<Aabb> {
    let mut combined: Option<Aabb> = None;
    let mut hidden: Vec<NodeId> = Vec::new();

    for id in prefab.subtree(prefab.root()) {
        let node = prefab.node(id);
        let Some(renderer) = &node.renderer else {
            continue;
        };
        let Some(bounds) = renderer.world_bounds(prefab, id) else {
            log::debug!("Renderer on {} has no vertices", node.name);
            continue;
        };
        if renderer.is_skinned() && node.tag == ICON_HIDDEN_TAG {
            hidden.push(id);
        }
        match combined.as_mut() {
            Some(c) => c.encapsulate(&bounds),
            None => combined = Some(bounds),
        }
    }

    let combined = combined?;
    for id in hidden {
        log::debug!("Hiding {} from icon", prefab.node(id).name);
        prefab.node_mut(id).renderer = None;
    }
    Some(combined)
}

/// Rescale, rotate and recenter the prefab's primary child (child 0 of the root).
///
/// The primary child is scaled so the largest bounds dimension becomes
/// `multiplier`. With no pivot, the primary child is shifted by the offset to
/// the first unnamed descendant of its `model` node. With a pivot, the primary
/// child's local position is reset when the pivot node exists under `model`.
///
/// Returns `None` without changes when there is no primary child or no
/// measurable geometry, or when the bounds have zero size.
pub fn normalize_icon(prefab: &mut Prefab, ovr: &PartIconOverride) -> Option<IconFix> {
    let Some(primary) = prefab.child(prefab.root(), 0) else {
        log::warn!("Icon prefab {} has no model to fix", prefab.node(prefab.root()).name);
        return None;
    };

    let bounds = calculate_bounds(prefab)?;
    let max_dimension = bounds.max_dimension();
    if max_dimension <= 0.0 || !max_dimension.is_finite() {
        log::warn!("Icon bounds are degenerate ({max_dimension}), skipping");
        return None;
    }

    let scale_factor = ovr.multiplier / max_dimension;
    prefab.node_mut(primary).local.scale *= scale_factor;

    if ovr.rotation != Vec3::ZERO {
        prefab.rotate_local(primary, ovr.rotation);
    }

    let model = prefab.find_child(primary, MODEL_NODE).unwrap_or(primary);
    let recentered = match ovr.pivot.as_deref() {
        None => match prefab.find_descendant(model, "") {
            Some(target) => {
                let offset = prefab.world_position(primary) - prefab.world_position(target);
                prefab.set_world_position(primary, offset);
                true
            }
            None => false,
        },
        Some(pivot) => match prefab.find_descendant(model, pivot) {
            Some(_) => {
                prefab.node_mut(primary).local.position = Vec3::ZERO;
                true
            }
            None => {
                log::warn!("Icon pivot {pivot} not found");
                false
            }
        },
    };

    Some(IconFix {
        bounds,
        max_dimension,
        scale_factor,
        recentered,
    })
}
