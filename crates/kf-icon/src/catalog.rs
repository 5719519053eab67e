//! Start-up pass over the part catalog.

use kf_config::ConfigNode;

use crate::normalizer::{IconFix, normalize_icon};
use crate::overrides::PartIconOverride;
use crate::scene::Prefab;

/// Prefix of part names published by Kerbal Foundries.
pub const KF_PART_PREFIX: &str = "KF.";

/// A catalog entry: the part's config, its icon prefab and icon scale.
#[derive(Clone, Debug)]
pub struct AvailablePart {
    pub name: String,
    pub part_config: ConfigNode,
    pub icon_prefab: Prefab,
    pub icon_scale: f32,
}

impl AvailablePart {
    pub fn new(name: impl Into<String>, part_config: ConfigNode, icon_prefab: Prefab) -> Self {
        Self {
            name: name.into(),
            part_config,
            icon_prefab,
            icon_scale: 1.0,
        }
    }

    pub fn is_kf_part(&self) -> bool {
        self.name.starts_with(KF_PART_PREFIX)
    }

    pub fn icon_override(&self) -> Option<PartIconOverride> {
        PartIconOverride::from_part_config(&self.part_config)
    }
}

/// Indices of Kerbal Foundries parts that declare an icon override.
pub fn parts_to_fix(parts: &[AvailablePart]) -> Vec<usize> {
    parts
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_kf_part() && p.icon_override().is_some())
        .map(|(i, _)| i)
        .collect()
}

/// Normalize one part's icon and record the measured size as its icon scale.
pub fn fix_part_icon(part: &mut AvailablePart, ovr: &PartIconOverride) -> Option<IconFix> {
    let fix = normalize_icon(&mut part.icon_prefab, ovr)?;
    part.icon_scale = fix.max_dimension;
    log::debug!(
        "Fixed icon for {}: size {:.3}, scale x{:.3}",
        part.name,
        fix.max_dimension,
        fix.scale_factor
    );
    Some(fix)
}

/// Fix every eligible icon in the catalog. Returns the number of parts fixed.
pub fn fix_catalog(parts: &mut [AvailablePart]) -> usize {
    let targets = parts_to_fix(parts);
    let mut fixed = 0;
    for i in targets {
        let part = &mut parts[i];
        let Some(ovr) = part.icon_override() else {
            continue;
        };
        if fix_part_icon(part, &ovr).is_some() {
            fixed += 1;
        } else {
            log::warn!("Icon for {} left unchanged", part.name);
        }
    }
    log::info!("Fixed {fixed} part icon(s)");
    fixed
}
