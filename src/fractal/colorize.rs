use super::escape::EscapeResult;
use super::palette::{Palette, Rgb, PALETTE_SIZE};

/// Color for points that never escaped
pub const INTERIOR_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Map an escape count onto the palette.
///
/// `max_iterations` must be the cap the result was computed with; counts in
/// `[0, max_iterations)` spread linearly over all 256 entries.
#[inline]
pub fn colorize(result: EscapeResult, max_iterations: u32, palette: &Palette) -> Rgb {
    if !result.escaped || result.iterations >= max_iterations {
        return INTERIOR_COLOR;
    }
    if max_iterations < 2 {
        return palette.get(0);
    }

    let t = f64::from(result.iterations) / f64::from(max_iterations - 1);
    let index = (t * (PALETTE_SIZE - 1) as f64).floor() as usize;
    palette.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32) -> EscapeResult {
        EscapeResult {
            iterations,
            escaped: true,
        }
    }

    #[test]
    fn test_interior_is_black() {
        let palette = Palette::generate();
        let result = EscapeResult {
            iterations: 250,
            escaped: false,
        };
        assert_eq!(colorize(result, 250, &palette), INTERIOR_COLOR);
        assert_eq!(INTERIOR_COLOR, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_zero_count_uses_first_entry() {
        let palette = Palette::generate();
        assert_eq!(colorize(escaped(0), 250, &palette), palette.get(0));
    }

    #[test]
    fn test_last_escaping_count_uses_last_entry() {
        let palette = Palette::generate();
        assert_eq!(colorize(escaped(249), 250, &palette), palette.get(255));
    }

    #[test]
    fn test_index_follows_floor_formula() {
        let palette = Palette::generate();
        // floor(1 / 249 * 255) = 1, floor(100 / 249 * 255) = 102
        assert_eq!(colorize(escaped(1), 250, &palette), palette.get(1));
        assert_eq!(colorize(escaped(100), 250, &palette), palette.get(102));
        // floor(5 / 9 * 255) = 141
        assert_eq!(colorize(escaped(5), 10, &palette), palette.get(141));
    }

    #[test]
    fn test_tiny_caps() {
        let palette = Palette::generate();
        // With a cap of 1 nothing can escape; a forged result still maps safely
        assert_eq!(colorize(escaped(0), 1, &palette), palette.get(0));
        assert_eq!(colorize(escaped(1), 2, &palette), palette.get(255));
    }
}
