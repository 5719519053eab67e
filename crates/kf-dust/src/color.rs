use kf_config::Parsed;

/// Linear RGBA color. Components are nominally in [0, 1] but not clamped.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Rgba {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Color used when no biome color is defined.
pub const DEFAULT_DUST_COLOR: Rgba = Rgba::new(0.75, 0.75, 0.75, 0.007);

/// Parse an `"r,g,b,a"` string.
///
/// Each component is parsed on its own; a component that is missing or not a
/// float becomes `0` and marks the result as defaulted. Extra components are
/// ignored.
pub fn parse_color(s: &str) -> Parsed<Rgba> {
    let mut parts = s.split(',');
    let mut out = [0.0f32; 4];
    let mut defaulted = false;
    for slot in &mut out {
        match parts.next().and_then(|p| p.trim().parse::<f32>().ok()) {
            Some(v) => *slot = v,
            None => defaulted = true,
        }
    }
    Parsed {
        value: Rgba::from(out),
        defaulted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let p = parse_color("1.0,0.5,0.25,0.1");
        assert_eq!(p.value, Rgba::new(1.0, 0.5, 0.25, 0.1));
        assert!(!p.defaulted);
    }

    #[test]
    fn test_parse_bad_component_is_zero() {
        let p = parse_color("abc,0.5,0.25,0.1");
        assert_eq!(p.value, Rgba::new(0.0, 0.5, 0.25, 0.1));
        assert!(p.defaulted);
    }

    #[test]
    fn test_parse_with_spaces() {
        let p = parse_color(" 0.2 , 0.3,0.4 , 1 ");
        assert_eq!(p.value, Rgba::new(0.2, 0.3, 0.4, 1.0));
        assert!(!p.defaulted);
    }

    #[test]
    fn test_parse_short_string() {
        let p = parse_color("0.2,0.3");
        assert_eq!(p.value, Rgba::new(0.2, 0.3, 0.0, 0.0));
        assert!(p.defaulted);
    }

    #[test]
    fn test_parse_unclamped() {
        let p = parse_color("1.5,-0.5,2,0");
        assert_eq!(p.value, Rgba::new(1.5, -0.5, 2.0, 0.0));
    }

    #[test]
    fn test_default_color() {
        assert_eq!(DEFAULT_DUST_COLOR.to_array(), [0.75, 0.75, 0.75, 0.007]);
    }
}
