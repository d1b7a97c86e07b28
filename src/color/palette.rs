//! Distinct color generation.

use rand::Rng;

use super::rgba::Rgba;

/// Saturation used by the hue sweep
pub const SWEEP_SATURATION: f64 = 0.65;

/// Lightness used by the hue sweep
pub const SWEEP_LIGHTNESS: f64 = 0.50;

/// Alpha applied to swept colors on the map
pub const DEFAULT_ALPHA: u8 = 220;

/// Largest `n` for which [`generate_palette`] is pairwise distinct.
///
/// Channels are truncated to 8 bits, so from 997 colors on some adjacent
/// hues collapse onto the same RGB triple.
pub const DISTINCT_PALETTE_LIMIT: usize = 996;

/// Generate `n` colors with hues evenly spaced around the color wheel.
///
/// Hue `i` is `i / max(n, 1)`, so consecutive hues are `360 / n` degrees
/// apart. Saturation and lightness are fixed. The output is deterministic,
/// and pairwise distinct up to [`DISTINCT_PALETTE_LIMIT`] colors.
pub fn generate_palette(n: usize, alpha: u8) -> Vec<Rgba> {
    let divisor = n.max(1) as f64;

    (0..n)
        .map(|i| {
            let hue = (i as f64 / divisor) % 1.0;
            let [r, g, b] = hsl_to_rgb(hue, SWEEP_SATURATION, SWEEP_LIGHTNESS);
            Rgba::new(r, g, b, alpha)
        })
        .collect()
}

/// Convert HSL (all components in `[0, 1]`) to 8-bit RGB.
///
/// Channels are truncated, not rounded.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    if s == 0.0 {
        let v = to_channel(l);
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    ]
}

/// Piecewise linear interpolation through the six 60 degree sectors
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// A uniformly random `#rrggbb` string
pub fn random_hex_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.random_range(0..=0xFF_FFFFu32))
}
