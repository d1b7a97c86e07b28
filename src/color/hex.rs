//! Hex color parsing with a fixed fallback.

use super::rgba::Rgba;

/// Alpha applied to every parsed hex color
pub const HEX_ALPHA: u8 = 200;

/// Substituted whenever a color string cannot be parsed
pub const FALLBACK_COLOR: Rgba = Rgba::new(0, 122, 204, HEX_ALPHA);

/// Parse `#rgb` or `#rrggbb` into an RGBA color.
///
/// Never fails: missing or malformed input yields [`FALLBACK_COLOR`].
/// Surrounding whitespace is ignored and digits are case-insensitive.
pub fn parse_hex_color(value: Option<&str>) -> Rgba {
    value.and_then(try_parse_hex).unwrap_or(FALLBACK_COLOR)
}

fn try_parse_hex(value: &str) -> Option<Rgba> {
    let digits = value.trim().strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |start: usize| u8::from_str_radix(&expanded[start..start + 2], 16).ok();
    Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, HEX_ALPHA))
}
