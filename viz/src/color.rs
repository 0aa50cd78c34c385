//! Color parsing and conversion helpers

use crate::{Result, VizError};

/// Night-sky background, `#000814`
pub const BACKGROUND_COLOR: [u8; 3] = [0x00, 0x08, 0x14];

/// Parse a `#rrggbb` (or `rrggbb`) hex string
pub fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(VizError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| VizError::InvalidColor(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Convert a unit-range channel to 8 bits, clamping out-of-range input
pub fn unit_to_u8(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}
