//! Dust color table: celestial body → biome → color, with a constant fallback.
//!
//! ```text
//! DustColorDefinitions
//! {
//!     Kerbin
//!     {
//!         Shores
//!         {
//!             Color = 0.53,0.46,0.36,0.02
//!         }
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use kf_config::ConfigNode;

use crate::color::{DEFAULT_DUST_COLOR, Rgba, parse_color};

/// Name of the root section in the dust color document.
pub const ROOT_NODE: &str = "DustColorDefinitions";

/// Two-level lookup of dust colors.
///
/// A body may be present with no biomes. Lookups for unknown bodies or biomes
/// return [`DEFAULT_DUST_COLOR`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DustColorTable {
    bodies: HashMap<String, HashMap<String, Rgba>>,
}

impl DustColorTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from `path`.
    ///
    /// A missing or damaged file, or one without a populated
    /// `DustColorDefinitions` section, yields an empty table and a warning.
    pub fn load(path: &Path) -> Self {
        match ConfigNode::load(path) {
            Ok(root) => Self::from_document(&root),
            Err(e) => {
                log::warn!("Dust colors file is missing or damaged: {e}");
                Self::new()
            }
        }
    }

    /// Build the table from a parsed document root.
    pub fn from_document(root: &ConfigNode) -> Self {
        let Some(defs) = root.node(ROOT_NODE) else {
            log::warn!("Dust colors file has no {ROOT_NODE} section");
            return Self::new();
        };
        if defs.count_nodes() == 0 {
            log::warn!("Dust color definitions not found or damaged");
            return Self::new();
        }

        let mut table = Self::new();
        for body in defs.nodes() {
            let biomes = table.bodies.entry(body.name().to_string()).or_default();
            for biome in body.nodes() {
                let parsed = match biome.value("Color") {
                    Some(raw) => parse_color(raw),
                    None => parse_color(""),
                };
                if parsed.defaulted {
                    log::warn!(
                        "Dust color for {}/{} is incomplete, missing components set to 0",
                        body.name(),
                        biome.name()
                    );
                }
                if biomes
                    .insert(biome.name().to_string(), parsed.value)
                    .is_some()
                {
                    log::warn!(
                        "Duplicate dust color for {}/{}, keeping the last one",
                        body.name(),
                        biome.name()
                    );
                }
            }

            if biomes.is_empty() {
                log::error!("No biome colors found for {}!", body.name());
            } else {
                log::info!(
                    "Found {} biome color definitions for {}.",
                    biomes.len(),
                    body.name()
                );
            }
        }

        table
    }

    /// Color for `biome` on `body`, or [`DEFAULT_DUST_COLOR`] if either is unknown.
    pub fn lookup(&self, body: &str, biome: &str) -> Rgba {
        self.get(body, biome).unwrap_or(DEFAULT_DUST_COLOR)
    }

    /// Color for `biome` on `body`, if defined.
    pub fn get(&self, body: &str, biome: &str) -> Option<Rgba> {
        self.bodies.get(body)?.get(biome).copied()
    }

    /// Biome colors defined for `body`.
    pub fn body(&self, body: &str) -> Option<&HashMap<String, Rgba>> {
        self.bodies.get(body)
    }

    /// Names of all bodies in the table, in no particular order.
    pub fn bodies(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    /// Number of bodies (including bodies with no biomes).
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
DustColorDefinitions
{
    Kerbin
    {
        Shores
        {
            Color = 0.53,0.46,0.36,0.02
        }
        Grasslands
        {
            Color = 0.3,0.4,0.2,0.015
        }
    }
    Mun
    {
        Midlands
        {
            Color = 0.6,0.6,0.6,0.03
        }
    }
    Jool
    {
    }
}
";

    fn sample() -> DustColorTable {
        DustColorTable::from_document(&ConfigNode::parse(SAMPLE).unwrap())
    }

    #[test]
    fn test_lookup_defined() {
        let table = sample();
        assert_eq!(table.lookup("Kerbin", "Shores"), Rgba::new(0.53, 0.46, 0.36, 0.02));
        assert_eq!(table.lookup("Mun", "Midlands"), Rgba::new(0.6, 0.6, 0.6, 0.03));
    }

    #[test]
    fn test_lookup_unknown_body() {
        let table = sample();
        assert_eq!(table.lookup("UnknownBody", "anyBiome"), DEFAULT_DUST_COLOR);
        assert_eq!(
            table.lookup("UnknownBody", "anyBiome").to_array(),
            [0.75, 0.75, 0.75, 0.007]
        );
    }

    #[test]
    fn test_lookup_unknown_biome() {
        let table = sample();
        assert_eq!(table.lookup("Kerbin", "Tundra"), DEFAULT_DUST_COLOR);
        assert!(table.get("Kerbin", "Tundra").is_none());
    }

    #[test]
    fn test_body_without_biomes_is_kept() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert!(table.body("Jool").unwrap().is_empty());
        assert_eq!(table.lookup("Jool", "Anything"), DEFAULT_DUST_COLOR);
    }

    #[test]
    fn test_missing_root_section() {
        let root = ConfigNode::parse("Other\n{\n\tKerbin\n\t{\n\t}\n}\n").unwrap();
        assert!(DustColorTable::from_document(&root).is_empty());
    }

    #[test]
    fn test_empty_root_section() {
        let root = ConfigNode::parse("DustColorDefinitions\n{\n}\n").unwrap();
        assert!(DustColorTable::from_document(&root).is_empty());
    }

    #[test]
    fn test_bad_component_defaults_to_zero() {
        let doc = "DustColorDefinitions\n{\n Eve\n {\n  Poles\n  {\n   Color = abc,0.5,0.25,0.1\n  }\n  Shore\n  {\n  }\n }\n}\n";
        let table = DustColorTable::from_document(&ConfigNode::parse(doc).unwrap());
        assert_eq!(table.lookup("Eve", "Poles"), Rgba::new(0.0, 0.5, 0.25, 0.1));
        assert_eq!(table.lookup("Eve", "Shore"), Rgba::default());
    }

    #[test]
    fn test_duplicate_body_merges() {
        let doc = "DustColorDefinitions\n{\n Duna\n {\n  A { Color = 1,0,0,1 }\n }\n Duna\n {\n  B { Color = 0,1,0,1 }\n  A { Color = 0,0,1,1 }\n }\n}\n";
        let table = DustColorTable::from_document(&ConfigNode::parse(doc).unwrap());
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("Duna", "A"), Rgba::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(table.lookup("Duna", "B"), Rgba::new(0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_byte_order_mark_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DustColors.cfg");
        std::fs::write(&path, format!("\u{feff}{SAMPLE}")).unwrap();
        assert_eq!(DustColorTable::load(&path), sample());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let table = DustColorTable::load(&dir.path().join("DustColors.cfg"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("DustColors.cfg");
        std::fs::write(&path, SAMPLE).unwrap();
        let table = DustColorTable::load(&path);
        assert_eq!(table, sample());
        let mut bodies: Vec<&str> = table.bodies().collect();
        bodies.sort_unstable();
        assert_eq!(bodies, ["Jool", "Kerbin", "Mun"]);
    }
}
