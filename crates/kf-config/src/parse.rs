//! Typed value getters with observable fallback.
//!
//! Every getter returns a [`Parsed`] carrying the resolved value and whether
//! the supplied default had to be substituted (value missing or unparsable).

use glam::Vec3;

use crate::node::ConfigNode;

/// A resolved value plus a flag recording whether the default was used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Parsed<T> {
    /// Value read successfully from the document.
    pub fn found(value: T) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }

    /// Compiled-in default substituted for a missing or malformed value.
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            defaulted: true,
        }
    }
}

fn parse_or<T>(raw: Option<&str>, default: T, parse: impl FnOnce(&str) -> Option<T>) -> Parsed<T> {
    match raw.and_then(parse) {
        Some(v) => Parsed::found(v),
        None => Parsed::fallback(default),
    }
}

/// Case-insensitive `true`/`false`, surrounding whitespace ignored.
fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Surrounding whitespace ignored.
fn parse_float(s: &str) -> Option<f32> {
    s.trim().parse().ok()
}

impl ConfigNode {
    pub fn get_bool(&self, key: &str, default: bool) -> Parsed<bool> {
        parse_or(self.value(key), default, parse_bool)
    }

    pub fn get_int(&self, key: &str, default: i32) -> Parsed<i32> {
        parse_or(self.value(key), default, |s| s.trim().parse().ok())
    }

    pub fn get_float(&self, key: &str, default: f32) -> Parsed<f32> {
        parse_or(self.value(key), default, parse_float)
    }

    /// Missing or blank values resolve to `default`.
    pub fn get_string(&self, key: &str, default: &str) -> Parsed<String> {
        match self.value(key) {
            Some(v) if !v.is_empty() => Parsed::found(v.to_string()),
            _ => Parsed::fallback(default.to_string()),
        }
    }

    /// `"x,y,z"` triple.
    pub fn get_vector3(&self, key: &str, default: Vec3) -> Parsed<Vec3> {
        parse_or(self.value(key), default, kf_math::parse_vector3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ConfigNode {
        let mut n = ConfigNode::new("T");
        n.set_value("flag", "True");
        n.set_value("lower", "false");
        n.set_value("padded", "  TRUE ");
        n.set_value("bad", "yes");
        n.set_value("count", "42");
        n.set_value("neg", "-7");
        n.set_value("ratio", "0.25");
        n.set_value("word", "KF.log");
        n.set_value("blank", "");
        n.set_value("rot", "0, 90, 0");
        n
    }

    #[test]
    fn test_bool_found() {
        let n = node();
        assert_eq!(n.get_bool("flag", false), Parsed::found(true));
        assert_eq!(n.get_bool("lower", true), Parsed::found(false));
        assert_eq!(n.get_bool("padded", false), Parsed::found(true));
    }

    #[test]
    fn test_bool_fallback() {
        let n = node();
        assert_eq!(n.get_bool("bad", true), Parsed::fallback(true));
        assert_eq!(n.get_bool("missing", false), Parsed::fallback(false));
    }

    #[test]
    fn test_int() {
        let n = node();
        assert_eq!(n.get_int("count", 6), Parsed::found(42));
        assert_eq!(n.get_int("neg", 6), Parsed::found(-7));
        assert_eq!(n.get_int("ratio", 6), Parsed::fallback(6));
        assert_eq!(n.get_int("missing", 10), Parsed::fallback(10));
    }

    #[test]
    fn test_float() {
        let n = node();
        assert_eq!(n.get_float("ratio", 1.0), Parsed::found(0.25));
        assert_eq!(n.get_float("count", 1.0), Parsed::found(42.0));
        assert_eq!(n.get_float("word", 1.0), Parsed::fallback(1.0));
    }

    #[test]
    fn test_string_blank_is_default() {
        let n = node();
        assert_eq!(n.get_string("word", "x").value, "KF.log");
        assert!(!n.get_string("word", "x").defaulted);
        let blank = n.get_string("blank", "KF.log");
        assert_eq!(blank.value, "KF.log");
        assert!(blank.defaulted);
        assert!(n.get_string("missing", "KF.log").defaulted);
    }

    #[test]
    fn test_vector3() {
        let n = node();
        assert_eq!(
            n.get_vector3("rot", Vec3::ZERO),
            Parsed::found(Vec3::new(0.0, 90.0, 0.0))
        );
        assert_eq!(n.get_vector3("word", Vec3::ONE), Parsed::fallback(Vec3::ONE));
    }
}
