//! Colour helpers for procedural meshes

use crate::GeometryError;

/// Hue/saturation/lightness to RGB.
///
/// `hue` is in `[0, 1)`. Chroma is `saturation * lightness` and the result
/// is lifted by `lightness - chroma`, so full saturation at lightness 1
/// gives the pure hue.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let c = saturation * lightness;
    let x = c * (1.0 - ((hue * 6.0) % 2.0 - 1.0).abs());
    let m = lightness - c;

    let (r, g, b) = match (hue * 6.0) as i32 {
        i32::MIN..=0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

/// Parse `#rrggbb` into RGB components in `[0, 1]`
pub fn hex_to_rgb(hex: &str) -> Result<[f32; 3], GeometryError> {
    let digits = hex
        .strip_prefix('#')
        .filter(|d| d.len() == 6 && d.is_ascii())
        .ok_or_else(|| GeometryError::InvalidColor(hex.to_string()))?;

    let mut rgb = [0.0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| GeometryError::InvalidColor(hex.to_string()))?;
        *channel = byte as f32 / 255.0;
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn rgb_approx_eq(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[test]
    fn test_primary_hues() {
        assert!(rgb_approx_eq(hsl_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]));
        assert!(rgb_approx_eq(hsl_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]));
        assert!(rgb_approx_eq(hsl_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let rgb = hsl_to_rgb(0.8, 0.0, 0.4);
        assert!(rgb_approx_eq(rgb, [0.4, 0.4, 0.4]));
    }

    #[test]
    fn test_terrain_purple() {
        // hue 0.8 lands in the magenta sextant: blue is the dominant channel
        let [r, g, b] = hsl_to_rgb(0.8, 0.6, 1.0);
        assert!(b > r && r > g);
        assert!((b - 1.0).abs() < EPSILON);
        assert!((g - 0.4).abs() < EPSILON);
        assert!((r - 0.88).abs() < EPSILON);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#ffffff").unwrap(), [1.0, 1.0, 1.0]);
        assert_eq!(hex_to_rgb("#000000").unwrap(), [0.0, 0.0, 0.0]);
        let orange = hex_to_rgb("#ff8000").unwrap();
        assert!(rgb_approx_eq(orange, [1.0, 128.0 / 255.0, 0.0]));
    }

    #[test]
    fn test_hex_to_rgb_rejects_garbage() {
        for bad in ["ffffff", "#fff", "#gggggg", "#ffffff00", ""] {
            assert!(hex_to_rgb(bad).is_err(), "{:?} should be rejected", bad);
        }
    }
}
