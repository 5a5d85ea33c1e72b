//! Named display colors for particle groups.
//!
//! Colors are RGB triples in `[0, 1]`, matching what renderers expect for
//! vertex colors. Use the constants for the classic six-group setup or
//! [`distinct`] to generate an evenly spaced palette for any group count.

use glam::Vec3;

pub const RED: Vec3 = Vec3::new(0.96, 0.25, 0.25);
pub const GREEN: Vec3 = Vec3::new(0.3, 0.9, 0.35);
pub const BLUE: Vec3 = Vec3::new(0.3, 0.5, 0.95);
pub const YELLOW: Vec3 = Vec3::new(0.95, 0.85, 0.3);
pub const WHITE: Vec3 = Vec3::new(0.95, 0.95, 0.95);
pub const TEAL: Vec3 = Vec3::new(0.25, 0.85, 0.8);

/// Generate `count` visually distinct colors by spacing hues evenly.
pub fn distinct(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| hsv_to_rgb(i as f32 / count.max(1) as f32, 0.8, 0.9))
        .collect()
}

/// Convert HSV to RGB.
///
/// * `h` - 0.0 to 1.0 (wraps: red, yellow, green, cyan, blue, magenta)
/// * `s` - 0.0 (gray) to 1.0 (vivid)
/// * `v` - 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_to_rgb_red() {
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((red.x - 1.0).abs() < 0.001);
        assert!(red.y < 0.001);
        assert!(red.z < 0.001);
    }

    #[test]
    fn test_distinct_count_and_range() {
        let colors = distinct(6);
        assert_eq!(colors.len(), 6);
        for c in colors {
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }
}
