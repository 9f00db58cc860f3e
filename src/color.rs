// Palette strings ("#fff", "#a0b1c2") -> framebuffer colours.
// Visual: this decides what colour each square is painted in.

use image::Rgb;

use crate::error::{Error, Result};

/// Colour of a pixel whose key is missing from the palette.
pub const FALLBACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Parse `#rgb` or `#rrggbb` (any case).
pub fn parse_hex(s: &str) -> Result<Rgb<u8>> {
    let bad = || Error::InvalidConfig(format!("colour {s:?} is not #rgb or #rrggbb"));
    let digits = s.strip_prefix('#').ok_or_else(bad)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    match digits.len() {
        3 => {
            // Each nibble is doubled: "#abc" == "#aabbcc".
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16).ok_or_else(bad)? as u8;
                out[i] = v * 17;
            }
            Ok(Rgb(out))
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| bad())?;
            }
            Ok(Rgb(out))
        }
        _ => Err(bad()),
    }
}

/// Pack as 0x00RRGGBB for minifb.
#[inline]
pub fn pack(c: Rgb<u8>) -> u32 {
    let [r, g, b] = c.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Inverse of [`pack`]; the top byte is ignored.
#[inline]
pub fn unpack(px: u32) -> Rgb<u8> {
    Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
}
