//! 256-entry dark red -> red -> yellow -> white gradient

pub const PALETTE_SIZE: usize = 256;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed gradient, built once at startup and never modified
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Start at (24, 16, 0) and ramp red, then green, then blue by 3 per
    /// entry over successive 64-entry bands; the last band is flat.
    pub fn generate() -> Self {
        let mut colors = [Rgb::new(0, 0, 0); PALETTE_SIZE];
        let (mut r, mut g, mut b) = (24u8, 16u8, 0u8);

        for (i, color) in colors.iter_mut().enumerate() {
            *color = Rgb::new(r, g, b);

            // Each channel tops out at offset + 64 * 3 <= 255
            if i < 64 {
                r += 3;
            } else if i < 128 {
                g += 3;
            } else if i < 192 {
                b += 3;
            }
        }

        Self { colors }
    }

    /// Look up an entry; out-of-range indices clamp to the last one
    #[inline]
    pub fn get(&self, index: usize) -> Rgb {
        self.colors[index.min(PALETTE_SIZE - 1)]
    }
}
