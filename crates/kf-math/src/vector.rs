use glam::Vec3;

/// Parse an `"x,y,z"` triple. Whitespace around components is ignored.
///
/// Returns `None` unless there are exactly three components and each parses
/// as a float.
pub fn parse_vector3(s: &str) -> Option<Vec3> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<f32>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}
