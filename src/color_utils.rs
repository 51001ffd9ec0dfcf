//! Color utility functions shared across the application.
//!
//! Class colors are stored as free-form strings; these helpers turn the
//! common `#RRGGBB` / `#RGB` forms into RGB triples for rendering.

/// Parse a hex color string into RGB.
///
/// Accepts `#RRGGBB`, `#RGB`, and the same without the leading `#`.
/// Returns `None` for anything else.
pub fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some([r, g, b])
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        _ => None,
    }
}

/// Format an RGB triple as `#RRGGBB`.
pub fn to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
