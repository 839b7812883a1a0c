use crate::color::{ColorPolicy, Pixel};
use crate::error::RasterError;

/// A square grid of pixels, one per material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Width and height of the grid.
    pub side: usize,
    /// Pixel values in row-major order, row 0 at the top.
    pub pixels: Vec<Pixel>,
}

impl PixelGrid {
    /// Get the pixel at position (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.side + x]
    }

    /// Pixels of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[Pixel] {
        &self.pixels[y * self.side..(y + 1) * self.side]
    }

    /// Convert to RGBA pixel data (4 bytes per pixel).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }
}

/// Side length of the grid built from `count` colors.
pub fn side_for(count: usize) -> usize {
    count.isqrt()
}

/// Index into the color list that feeds output cell `(x, row)`.
///
/// `row` is 0-based from the top. The last `side` colors fill the top row and
/// the first colors of the used range fill the bottom row, each row left to
/// right.
pub fn source_index(count: usize, side: usize, x: usize, row: usize) -> Option<usize> {
    (count + x).checked_sub((row + 1) * side)
}

/// Rasterize colors with lenient decoding.
pub fn rasterize<S: AsRef<str>>(colors: &[S]) -> Result<PixelGrid, RasterError> {
    rasterize_with(colors, ColorPolicy::Lenient)
}

/// Lay `colors` out into a `side x side` grid, `side = floor(sqrt(len))`.
///
/// When the length is not a perfect square only the last `side * side`
/// colors are used.
pub fn rasterize_with<S: AsRef<str>>(
    colors: &[S],
    policy: ColorPolicy,
) -> Result<PixelGrid, RasterError> {
    let count = colors.len();
    if count == 0 {
        return Err(RasterError::Empty);
    }

    let side = side_for(count);
    let mut pixels = Vec::with_capacity(side * side);

    for row in 0..side {
        for x in 0..side {
            let index = source_index(count, side, x, row)
                .filter(|&i| i < count)
                .ok_or_else(|| RasterError::IndexOutOfRange {
                    index: (count + x).wrapping_sub((row + 1) * side),
                    len: count,
                })?;
            pixels.push(policy.decode(colors[index].as_ref())?);
        }
    }

    Ok(PixelGrid { side, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::decode;
    use crate::error::ColorError;

    fn gray_codes(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{i:02X}{i:02X}{i:02X}")).collect()
    }

    #[test]
    fn four_colors_flip_vertically() {
        let colors = ["FF0000", "00FF00", "0000FF", "FFFFFF"];
        let grid = rasterize(&colors).unwrap();

        assert_eq!(grid.side, 2);
        assert_eq!(grid.row(0), &[decode("0000FF"), decode("FFFFFF")]);
        assert_eq!(grid.row(1), &[decode("FF0000"), decode("00FF00")]);
    }

    #[test]
    fn nine_colors_follow_index_formula() {
        let colors = gray_codes(9);
        let grid = rasterize(&colors).unwrap();
        assert_eq!(grid.side, 3);

        for y in 1..=3usize {
            for x in 0..3usize {
                let source = 9 - y * 3 + x;
                assert_eq!(
                    grid.pixel(x, y - 1),
                    decode(&colors[source]),
                    "cell ({x}, {})",
                    y - 1
                );
            }
        }
        // top-left is the first color of the last row of the list
        assert_eq!(grid.pixel(0, 0), Pixel::rgb(6, 6, 6));
        assert_eq!(grid.pixel(2, 2), Pixel::rgb(2, 2, 2));
    }

    #[test]
    fn perfect_squares_fill_every_cell() {
        for k in 1..=8 {
            let colors = gray_codes(k * k);
            let grid = rasterize(&colors).unwrap();
            assert_eq!(grid.side, k);
            assert_eq!(grid.pixels.len(), k * k);

            let mut seen: Vec<u8> = grid.pixels.iter().map(|p| p.r).collect();
            seen.sort_unstable();
            let expected: Vec<u8> = (0..(k * k) as u8).collect();
            assert_eq!(seen, expected, "k = {k}");
        }
    }

    #[test]
    fn single_color() {
        let grid = rasterize(&["#123456".trim_start_matches('#')]).unwrap();
        assert_eq!(grid.side, 1);
        assert_eq!(grid.pixel(0, 0), Pixel::rgb(0x12, 0x34, 0x56));
    }

    #[test]
    fn rasterize_is_idempotent() {
        let colors = gray_codes(16);
        assert_eq!(rasterize(&colors).unwrap(), rasterize(&colors).unwrap());
    }

    #[test]
    fn empty_list_is_an_error() {
        let colors: [&str; 0] = [];
        assert_eq!(rasterize(&colors), Err(RasterError::Empty));
    }

    #[test]
    fn non_square_uses_last_entries() {
        let colors = gray_codes(5);
        let grid = rasterize(&colors).unwrap();
        assert_eq!(grid.side, 2);
        assert_eq!(grid.row(0), &[Pixel::rgb(3, 3, 3), Pixel::rgb(4, 4, 4)]);
        assert_eq!(grid.row(1), &[Pixel::rgb(1, 1, 1), Pixel::rgb(2, 2, 2)]);
    }

    #[test]
    fn source_index_stays_in_range() {
        for count in 1..200 {
            let side = side_for(count);
            for row in 0..side {
                for x in 0..side {
                    let i = source_index(count, side, x, row).unwrap();
                    assert!(i < count && i >= count - side * side);
                }
            }
        }
    }

    #[test]
    fn strict_policy_reports_bad_color() {
        let colors = ["FF0000", "nope!!", "0000FF", "FFFFFF"];
        assert_eq!(
            rasterize_with(&colors, ColorPolicy::Strict),
            Err(RasterError::Color(ColorError::Malformed("nope!!".into())))
        );
        assert!(rasterize_with(&colors, ColorPolicy::Lenient).is_ok());
    }

    #[test]
    fn to_rgba_layout() {
        let grid = rasterize(&["0A0B0C"]).unwrap();
        assert_eq!(grid.to_rgba(), vec![0x0a, 0x0b, 0x0c, 255]);
    }
}
