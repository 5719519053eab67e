//! Per-part `KFIconOverride` settings read from a part config.

use glam::Vec3;
use kf_config::ConfigNode;

/// Name of the child node in a part config that opts the part into icon fixing.
pub const OVERRIDE_NODE: &str = "KFIconOverride";

/// Per-part icon adjustments.
///
/// ```text
/// KFIconOverride
/// {
///     Multiplier = 1.2
///     Pivot = wheelPivot
///     Rotation = 0, 90, 0
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PartIconOverride {
    /// Target size of the largest dimension, relative to the icon frame.
    pub multiplier: f32,
    /// Node to center on; `None` centers on the model.
    pub pivot: Option<String>,
    /// Euler angles in degrees, applied in the model's local frame.
    pub rotation: Vec3,
}

impl Default for PartIconOverride {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            pivot: None,
            rotation: Vec3::ZERO,
        }
    }
}

impl PartIconOverride {
    /// Read an override node. Missing values keep their defaults; malformed
    /// ones are logged and also keep their defaults.
    pub fn from_node(node: &ConfigNode) -> Self {
        let defaults = Self::default();

        let multiplier = node.get_float("Multiplier", defaults.multiplier);
        if multiplier.defaulted && node.has_value("Multiplier") {
            log::warn!("Invalid icon Multiplier, using {}", defaults.multiplier);
        }

        let rotation = node.get_vector3("Rotation", defaults.rotation);
        if rotation.defaulted && node.has_value("Rotation") {
            log::warn!("Invalid icon Rotation, expected \"x,y,z\"");
        }

        let pivot = node.get_string("Pivot", "");

        Self {
            multiplier: multiplier.value,
            pivot: (!pivot.defaulted).then_some(pivot.value),
            rotation: rotation.value,
        }
    }

    /// The override declared by a part config, if any.
    pub fn from_part_config(part_config: &ConfigNode) -> Option<Self> {
        part_config.node(OVERRIDE_NODE).map(Self::from_node)
    }
}
