//! Color utilities
//!
//! Hex encoding/decoding of RGB triplets and the per-channel arithmetic
//! shared by every transform.

use crate::error::BladeError;

/// Remove a single leading `#`, if present
pub fn strip_hash(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}

/// Decode a hex color string to an RGB triplet
///
/// Accepts formats: "#RRGGBB" or "RRGGBB" (case-insensitive)
pub fn decode_hex(hex: &str) -> Result<[u8; 3], BladeError> {
    let digits = strip_hash(hex);

    // `from_str_radix` tolerates a leading sign, so check the digits first.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(BladeError::InvalidColorFormat(hex.to_string()));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| BladeError::InvalidColorFormat(hex.to_string()))?;
    }

    Ok(rgb)
}

/// Encode an RGB triplet as 6 lowercase hex digits, without `#`
pub fn encode_hex(rgb: [u8; 3]) -> String {
    format!("{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Bound check a rounded channel value into 0..=255
///
/// NaN fails both comparisons and saturates to 0 in the final cast.
pub fn bounds_check(value: f64) -> u8 {
    if value > 255.0 {
        255
    } else if value < 1.0 {
        0
    } else {
        value as u8
    }
}

/// Move one channel towards `tone` by `percent`
///
/// result = base + percent * (tone - base), rounded half to even
pub fn mix_channel(base: u8, tone: u8, percent: f64) -> u8 {
    let base = f64::from(base);
    let tone = f64::from(tone);
    bounds_check((base + percent * (tone - base)).round_ties_even())
}

/// Move every channel of `base` towards `tone` by `percent`
pub fn mix(base: [u8; 3], tone: [u8; 3], percent: f64) -> [u8; 3] {
    [
        mix_channel(base[0], tone[0], percent),
        mix_channel(base[1], tone[1], percent),
        mix_channel(base[2], tone[2], percent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_hash() {
        assert_eq!(strip_hash("#ff0000"), "ff0000");
        assert_eq!(strip_hash("ff0000"), "ff0000");
        assert_eq!(strip_hash("##ff0000"), "#ff0000");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("#FF0000"), Ok([255, 0, 0]));
        assert_eq!(decode_hex("00ff00"), Ok([0, 255, 0]));
        assert_eq!(decode_hex("#0000Ff"), Ok([0, 0, 255]));
        assert_eq!(decode_hex("1e293b"), Ok([30, 41, 59]));
    }

    #[test]
    fn test_decode_hex_invalid() {
        for bad in ["zzzzzz", "fff", "#fff", "", "#", "ff00000", "ff00", "+f0000", "ff 000", "ffé000", "##ff0000"] {
            assert_eq!(
                decode_hex(bad),
                Err(BladeError::InvalidColorFormat(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex([255, 0, 128]), "ff0080");
        assert_eq!(encode_hex([5, 10, 0]), "050a00");
        assert_eq!(encode_hex([0, 0, 0]), "000000");
    }

    #[test]
    fn test_decode_encode_every_channel_value() {
        for v in 0..=255u8 {
            for rgb in [[v, 0, 0], [0, v, 0], [0, 0, v], [v, 255 - v, v / 2]] {
                assert_eq!(decode_hex(&encode_hex(rgb)), Ok(rgb));
            }
        }
    }

    #[test]
    fn test_bounds_check() {
        assert_eq!(bounds_check(256.0), 255);
        assert_eq!(bounds_check(255.0), 255);
        assert_eq!(bounds_check(1.0), 1);
        assert_eq!(bounds_check(0.0), 0);
        assert_eq!(bounds_check(-128.0), 0);
        assert_eq!(bounds_check(f64::NAN), 0);
    }

    #[test]
    fn test_mix_channel_rounds_half_to_even() {
        // 127.5 -> 128, 2.5 -> 2
        assert_eq!(mix_channel(0, 255, 0.5), 128);
        assert_eq!(mix_channel(255, 0, 0.5), 128);
        assert_eq!(mix_channel(5, 0, 0.5), 2);
        assert_eq!(mix_channel(16, 255, 0.25), 76);
    }

    #[test]
    fn test_mix_channel_clamps() {
        assert_eq!(mix_channel(51, 255, 2.0), 255);
        assert_eq!(mix_channel(0, 255, -0.5), 0);
        assert_eq!(mix_channel(153, 0, -1.0), 255);
    }

    #[test]
    fn test_mix() {
        assert_eq!(mix([255, 0, 0], [0, 0, 255], 0.5), [128, 0, 128]);
        assert_eq!(mix([10, 20, 30], [200, 100, 0], 0.0), [10, 20, 30]);
        assert_eq!(mix([10, 20, 30], [200, 100, 0], 1.0), [200, 100, 0]);
    }
}
