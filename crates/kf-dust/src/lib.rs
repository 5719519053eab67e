//! Per-biome dust colors: a body → biome → RGBA table loaded from `DustColors.cfg`.

mod color;
mod table;

pub use color::{DEFAULT_DUST_COLOR, Rgba, parse_color};
pub use table::{DustColorTable, ROOT_NODE};
