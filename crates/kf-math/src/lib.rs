//! f32 bounding volumes, step rounding and vector parsing shared by the Kerbal Foundries crates.

mod aabb;
mod rounding;
mod vector;

pub use aabb::Aabb;
pub use rounding::round_to_nearest_value;
pub use vector::parse_vector3;
