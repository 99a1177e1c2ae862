// File: crates/chart-data/src/color.rs
// Summary: Hex color string to RGBA channel conversion.

use crate::error::{DataError, Result};

/// Parse a hex color string into `(r, g, b, a)` channel bytes.
///
/// Accepts `RRGGBBAA` or `RRGGBB` (alpha defaults to 0xFF), with or without
/// one leading `#`.
pub fn hex_to_rgba(hex: &str) -> Result<(u8, u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || DataError::InvalidColor(hex.to_string());

    if digits.len() != 6 && digits.len() != 8 {
        return Err(invalid());
    }

    let channel = |i: usize| -> Result<u8> {
        let pair = digits.get(i..i + 2).ok_or_else(invalid)?;
        u8::from_str_radix(pair, 16).map_err(|_| invalid())
    };

    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if digits.len() == 8 { channel(6)? } else { 0xFF };
    Ok((r, g, b, a))
}
