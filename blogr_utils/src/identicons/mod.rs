//! GitHub-style identicons rendered as SVG.
//!
//! The pattern is taken from the bits of a hexadecimal hash. Only the left
//! half of the grid (plus the centre column) is drawn, and every cell is
//! mirrored across the vertical axis, so the image is always symmetric.
use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

mod colors;
mod svg;

pub use colors::{hls_to_rgb, Color};
pub use svg::{Rectangle, RenderedImage, SVG_MEDIA_TYPE};

pub const HASH_LENGTH_MIN: usize = 15;

// Low bits of the hash are used for the hue
const HUE_HEX_DIGITS: usize = 6;
const HUE_MAX: u32 = 0xffffff;
const SKIPPED_BITS: usize = HUE_HEX_DIGITS * 4;

#[derive(Clone, Debug, Error, PartialEq)]
#[error("{0}")]
pub struct InvalidInputError(&'static str);

fn default_background() -> [u8; 4] { [240, 240, 240, 255] }

const fn default_margin() -> f64 { 0.08 }

const fn default_size() -> u32 { 64 }

const fn default_grid_size() -> u32 { 5 }

const fn default_saturation() -> f64 { 0.7 }

const fn default_brightness() -> f64 { 0.5 }

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IdenticonOptions {
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    /// Fraction of the image size
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Image width and height in pixels
    #[serde(default = "default_size")]
    pub size: u32,
    /// Number of cells per side
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default = "default_brightness", alias = "lightness")]
    pub brightness: f64,
    /// Overrides the color derived from the hash
    #[serde(default)]
    pub foreground: Option<[u8; 3]>,
}

impl Default for IdenticonOptions {
    fn default() -> Self {
        Self {
            background: default_background(),
            margin: default_margin(),
            size: default_size(),
            grid_size: default_grid_size(),
            saturation: default_saturation(),
            brightness: default_brightness(),
            foreground: None,
        }
    }
}

impl IdenticonOptions {
    pub fn with_size(self, size: u32) -> Self {
        Self { size, ..self }
    }

    pub fn validate(&self) -> Result<(), InvalidInputError> {
        if self.size == 0 {
            return Err(InvalidInputError("size must be greater than zero"));
        };
        if self.grid_size == 0 {
            return Err(InvalidInputError("grid size must be greater than zero"));
        };
        if !self.margin.is_finite() || !(0.0..0.5).contains(&self.margin) {
            return Err(InvalidInputError("margin must be in [0, 0.5) range"));
        };
        for value in [self.saturation, self.brightness] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(InvalidInputError("saturation and brightness must be in [0, 1] range"));
            };
        };
        Ok(())
    }
}

fn parse_hash(hash: &str) -> Result<Vec<u8>, InvalidInputError> {
    if hash.chars().count() < HASH_LENGTH_MIN {
        return Err(InvalidInputError("A hash of at least 15 characters is required."));
    };
    hash.chars()
        .map(|digit| {
            digit.to_digit(16)
                .map(|value| value as u8)
                .ok_or(InvalidInputError("hash must contain only hexadecimal digits"))
        })
        .collect()
}

/// Returns bit of the hash interpreted as a single big-endian number.
/// Index 0 is the least significant bit of the last hex digit.
fn hash_bit(digits: &[u8], index: usize) -> bool {
    let position = index / 4;
    if position >= digits.len() {
        return false;
    };
    let nibble = digits[digits.len() - 1 - position];
    (nibble >> (index % 4)) & 1 == 1
}

/// Square matrix of cells, indexed by (column, row).
/// Only filled cells are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelGrid {
    size: u32,
    filled: BTreeSet<(u32, u32)>,
}

impl PixelGrid {
    fn new(size: u32) -> Self {
        Self { size, filled: BTreeSet::new() }
    }

    fn fill(&mut self, column: u32, row: u32) -> () {
        assert!(column < self.size && row < self.size, "cell out of bounds");
        self.filled.insert((column, row));
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_filled(&self, column: u32, row: u32) -> bool {
        self.filled.contains(&(column, row))
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.filled.len()
    }

    pub fn is_symmetric(&self) -> bool {
        self.filled.iter().all(|(column, row)| {
            self.is_filled(self.size - 1 - column, *row)
        })
    }
}

pub struct Identicon {
    digits: Vec<u8>,
    options: IdenticonOptions,
    cell_size: u32,
    margin: u32,
    foreground: Color,
    background: Color,
}

impl Identicon {
    pub fn new(
        hash: &str,
        options: IdenticonOptions,
    ) -> Result<Self, InvalidInputError> {
        let digits = parse_hash(hash)?;
        options.validate()?;
        let size = options.size;
        let grid_size = options.grid_size;
        let base_margin = (f64::from(size) * options.margin).floor() as u32;
        let cell_size = (size - base_margin * 2) / grid_size;
        let margin = (size - cell_size * grid_size) / 2;
        let foreground = match options.foreground {
            Some(color) => Color::from(color),
            None => {
                let hue = hash_hue(&digits);
                // Saturation option is passed as lightness
                Color::from_hls(hue, options.saturation, options.brightness)
            },
        };
        let background = Color::from(options.background);
        let identicon = Self {
            digits,
            options,
            cell_size,
            margin,
            foreground,
            background,
        };
        Ok(identicon)
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn hue(&self) -> f64 {
        hash_hue(&self.digits)
    }

    /// Returns cells of the left half in drawing order
    fn drawn_cells(&self) -> Vec<(u32, u32)> {
        let grid_size = self.options.grid_size;
        let step_count =
            u64::from(grid_size) * (u64::from(grid_size) + 1) / 2;
        let mut cells = vec![];
        let (mut column, mut row) = (0, 0);
        let bit_count = self.digits.len() * 4;
        let mut index = SKIPPED_BITS;
        for _ in 0..step_count {
            if index >= bit_count {
                // Remaining bits are zero
                break;
            };
            if hash_bit(&self.digits, index) {
                cells.push((column, row));
            };
            row += 1;
            if row == grid_size {
                row = 0;
                column += 1;
            };
            index += 1;
        };
        cells
    }

    fn mirror(&self, column: u32) -> u32 {
        self.options.grid_size - 1 - column
    }

    pub fn pixel_grid(&self) -> PixelGrid {
        let mut grid = PixelGrid::new(self.options.grid_size);
        for (column, row) in self.drawn_cells() {
            grid.fill(column, row);
            grid.fill(self.mirror(column), row);
        };
        grid
    }

    pub fn render(&self) -> RenderedImage {
        let mut image = RenderedImage::new(
            self.options.size,
            self.foreground,
            self.background,
        );
        for (column, row) in self.drawn_cells() {
            let y = self.margin + row * self.cell_size;
            for column in [column, self.mirror(column)] {
                let x = self.margin + column * self.cell_size;
                image.add_rectangle(x, y, self.cell_size, self.foreground);
            };
        };
        image
    }

    pub fn to_svg(&self) -> String {
        self.render().to_svg()
    }

    pub fn to_base64(&self) -> String {
        self.render().to_base64()
    }

    pub fn to_data_uri(&self) -> String {
        self.render().to_data_uri()
    }
}

fn hash_hue(digits: &[u8]) -> f64 {
    let value = digits[digits.len() - HUE_HEX_DIGITS..].iter()
        .fold(0_u32, |value, digit| (value << 4) | u32::from(*digit));
    f64::from(value) / f64::from(HUE_MAX)
}

pub fn generate_identicon_svg(
    hash: &str,
    options: IdenticonOptions,
) -> Result<String, InvalidInputError> {
    let identicon = Identicon::new(hash, options)?;
    Ok(identicon.to_svg())
}

pub fn generate_identicon_base64(
    hash: &str,
    options: IdenticonOptions,
) -> Result<String, InvalidInputError> {
    let identicon = Identicon::new(hash, options)?;
    Ok(identicon.to_base64())
}

#[cfg(test)]
mod tests {
    use crate::base64;
    use super::*;

    const HASH: &str = "123456789abcdef0";
    // md5("stewartlord")
    const STEWARTLORD_HASH: &str = "7c5a761361ebc3d9c385a8ef1dc43090";

    fn large_options() -> IdenticonOptions {
        IdenticonOptions {
            size: 420,
            grid_size: 9,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_hash() {
        let expected_error =
            InvalidInputError("A hash of at least 15 characters is required.");
        for hash in ["", "abc", "1234567890abcd"] {
            let result = Identicon::new(hash, IdenticonOptions::default());
            assert_eq!(result.err(), Some(expected_error.clone()));
        };
    }

    #[test]
    fn test_hash_with_non_hex_characters() {
        let result = Identicon::new("123456789abcdefg", IdenticonOptions::default());
        assert_eq!(result.is_err(), true);
    }

    #[test]
    fn test_valid_hash() {
        let result = Identicon::new("123456789abcdef", IdenticonOptions::default());
        assert_eq!(result.is_ok(), true);
        let result = Identicon::new(HASH, IdenticonOptions::default());
        assert_eq!(result.is_ok(), true);
    }

    #[test]
    fn test_invalid_options() {
        let options = IdenticonOptions { size: 0, ..Default::default() };
        assert_eq!(Identicon::new(HASH, options).is_err(), true);
        let options = IdenticonOptions { grid_size: 0, ..Default::default() };
        assert_eq!(Identicon::new(HASH, options).is_err(), true);
        let options = IdenticonOptions { margin: 0.5, ..Default::default() };
        assert_eq!(Identicon::new(HASH, options).is_err(), true);
        let options = IdenticonOptions { saturation: f64::NAN, ..Default::default() };
        assert_eq!(Identicon::new(HASH, options).is_err(), true);
    }

    #[test]
    fn test_geometry() {
        let identicon = Identicon::new(HASH, IdenticonOptions::default()).unwrap();
        assert_eq!(identicon.cell_size(), 10);
        assert_eq!(identicon.margin(), 7);
        let identicon = Identicon::new(HASH, large_options()).unwrap();
        assert_eq!(identicon.cell_size(), 39);
        assert_eq!(identicon.margin(), 34);
    }

    #[test]
    fn test_hash_bit() {
        let digits = parse_hash("00000000000000a").unwrap();
        assert_eq!(hash_bit(&digits, 0), false);
        assert_eq!(hash_bit(&digits, 1), true);
        assert_eq!(hash_bit(&digits, 2), false);
        assert_eq!(hash_bit(&digits, 3), true);
        assert_eq!(hash_bit(&digits, 4), false);
        // Beyond the most significant digit
        assert_eq!(hash_bit(&digits, 60), false);
    }

    #[test]
    fn test_hue() {
        let identicon = Identicon::new(HASH, IdenticonOptions::default()).unwrap();
        assert_eq!(identicon.hue(), f64::from(0xbcdef0_u32) / 16777215.0);
        assert_eq!(identicon.foreground(), Color::rgb(172, 140, 216));
    }

    #[test]
    fn test_foreground_override() {
        let options = IdenticonOptions {
            foreground: Some([10, 20, 30]),
            ..Default::default()
        };
        let identicon = Identicon::new(HASH, options).unwrap();
        assert_eq!(identicon.foreground(), Color::rgb(10, 20, 30));
    }

    #[test]
    fn test_pixel_grid() {
        let identicon = Identicon::new(HASH, IdenticonOptions::default()).unwrap();
        let grid = identicon.pixel_grid();
        let rows: Vec<String> = (0..5)
            .map(|row| {
                (0..5)
                    .map(|column| if grid.is_filled(column, row) { '#' } else { '.' })
                    .collect()
            })
            .collect();
        assert_eq!(rows, vec![
            ".....",
            "#.#.#",
            ".###.",
            "#.#.#",
            "#.#.#",
        ]);
    }

    #[test]
    fn test_pixel_grid_is_symmetric() {
        let hashes = [
            HASH,
            STEWARTLORD_HASH,
            "ffffffffffffffffffffffffffffffff",
            "000000000000000",
            "d41d8cd98f00b204e9800998ecf8427e",
        ];
        for hash in hashes {
            for grid_size in 1..=12 {
                let options = IdenticonOptions { grid_size, ..Default::default() };
                let identicon = Identicon::new(hash, options).unwrap();
                let grid = identicon.pixel_grid();
                assert_eq!(grid.size(), grid_size);
                assert_eq!(grid.is_symmetric(), true);
            };
        };
    }

    #[test]
    fn test_huge_grid_size() {
        let options = IdenticonOptions {
            grid_size: 200_000,
            ..Default::default()
        };
        let identicon = Identicon::new(STEWARTLORD_HASH, options).unwrap();
        // 128 bits, 24 of them used for the hue
        let max_cells = 2 * (128 - 24);
        let grid = identicon.pixel_grid();
        assert_eq!(grid.size(), 200_000);
        assert!(grid.filled_count() > 0);
        assert!(grid.filled_count() <= max_cells);
        assert_eq!(grid.is_symmetric(), true);
        assert_eq!(grid.is_filled(199_999, 199_999), false);
        let image = identicon.render();
        assert!(image.rectangles.len() <= max_cells);
        assert_eq!(identicon.cell_size(), 0);
        let svg = identicon.to_svg();
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn test_rectangles_are_inside_image() {
        for size in [1, 7, 16, 64, 100, 333, 420] {
            for grid_size in [1, 4, 5, 9, 16] {
                let options = IdenticonOptions {
                    size,
                    grid_size,
                    margin: 0.2,
                    ..Default::default()
                };
                let image = Identicon::new(STEWARTLORD_HASH, options).unwrap().render();
                for rect in image.rectangles {
                    assert!(rect.x + rect.width <= size);
                    assert!(rect.y + rect.height <= size);
                };
            };
        };
    }

    #[test]
    fn test_render_is_deterministic() {
        let svg_1 = generate_identicon_svg(STEWARTLORD_HASH, large_options()).unwrap();
        let svg_2 = generate_identicon_svg(STEWARTLORD_HASH, large_options()).unwrap();
        assert_eq!(svg_1, svg_2);
    }

    #[test]
    fn test_to_base64() {
        let identicon = Identicon::new(HASH, IdenticonOptions::default()).unwrap();
        let encoded = identicon.to_base64();
        let decoded = base64::decode(encoded).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), identicon.to_svg());
    }

    #[test]
    fn test_generate_identicon_svg() {
        let svg = generate_identicon_svg(HASH, IdenticonOptions::default()).unwrap();
        let expected_svg = concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='64' height='64' style='background-color:rgba(240, 240, 240, 1.0);'>",
            "<g style='fill:rgba(172, 140, 216, 1); stroke:rgba(172, 140, 216, 1); stroke-width:0.32;'>",
            "<rect x='7' y='17' width='10' height='10'/>",
            "<rect x='47' y='17' width='10' height='10'/>",
            "<rect x='7' y='37' width='10' height='10'/>",
            "<rect x='47' y='37' width='10' height='10'/>",
            "<rect x='7' y='47' width='10' height='10'/>",
            "<rect x='47' y='47' width='10' height='10'/>",
            "<rect x='17' y='27' width='10' height='10'/>",
            "<rect x='37' y='27' width='10' height='10'/>",
            "<rect x='27' y='17' width='10' height='10'/>",
            "<rect x='27' y='17' width='10' height='10'/>",
            "<rect x='27' y='27' width='10' height='10'/>",
            "<rect x='27' y='27' width='10' height='10'/>",
            "<rect x='27' y='37' width='10' height='10'/>",
            "<rect x='27' y='37' width='10' height='10'/>",
            "<rect x='27' y='47' width='10' height='10'/>",
            "<rect x='27' y='47' width='10' height='10'/>",
            "</g></svg>",
        );
        assert_eq!(svg, expected_svg);
    }

    #[test]
    fn test_generate_identicon_svg_stewartlord() {
        let svg = generate_identicon_svg(STEWARTLORD_HASH, large_options()).unwrap();
        let expected_svg = concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='420' height='420' style='background-color:rgba(240, 240, 240, 1.0);'>",
            "<g style='fill:rgba(186, 140, 216, 1); stroke:rgba(186, 140, 216, 1); stroke-width:2.1;'>",
            "<rect x='34' y='34' width='39' height='39'/>",
            "<rect x='346' y='34' width='39' height='39'/>",
            "<rect x='34' y='112' width='39' height='39'/>",
            "<rect x='346' y='112' width='39' height='39'/>",
            "<rect x='34' y='151' width='39' height='39'/>",
            "<rect x='346' y='151' width='39' height='39'/>",
            "<rect x='34' y='190' width='39' height='39'/>",
            "<rect x='346' y='190' width='39' height='39'/>",
            "<rect x='34' y='346' width='39' height='39'/>",
            "<rect x='346' y='346' width='39' height='39'/>",
            "<rect x='73' y='34' width='39' height='39'/>",
            "<rect x='307' y='34' width='39' height='39'/>",
            "<rect x='73' y='73' width='39' height='39'/>",
            "<rect x='307' y='73' width='39' height='39'/>",
            "<rect x='73' y='112' width='39' height='39'/>",
            "<rect x='307' y='112' width='39' height='39'/>",
            "<rect x='73' y='190' width='39' height='39'/>",
            "<rect x='307' y='190' width='39' height='39'/>",
            "<rect x='73' y='229' width='39' height='39'/>",
            "<rect x='307' y='229' width='39' height='39'/>",
            "<rect x='73' y='268' width='39' height='39'/>",
            "<rect x='307' y='268' width='39' height='39'/>",
            "<rect x='112' y='73' width='39' height='39'/>",
            "<rect x='268' y='73' width='39' height='39'/>",
            "<rect x='112' y='151' width='39' height='39'/>",
            "<rect x='268' y='151' width='39' height='39'/>",
            "<rect x='112' y='229' width='39' height='39'/>",
            "<rect x='268' y='229' width='39' height='39'/>",
            "<rect x='112' y='268' width='39' height='39'/>",
            "<rect x='268' y='268' width='39' height='39'/>",
            "<rect x='112' y='346' width='39' height='39'/>",
            "<rect x='268' y='346' width='39' height='39'/>",
            "<rect x='151' y='190' width='39' height='39'/>",
            "<rect x='229' y='190' width='39' height='39'/>",
            "<rect x='151' y='229' width='39' height='39'/>",
            "<rect x='229' y='229' width='39' height='39'/>",
            "<rect x='151' y='268' width='39' height='39'/>",
            "<rect x='229' y='268' width='39' height='39'/>",
            "<rect x='190' y='112' width='39' height='39'/>",
            "<rect x='190' y='112' width='39' height='39'/>",
            "<rect x='190' y='151' width='39' height='39'/>",
            "<rect x='190' y='151' width='39' height='39'/>",
            "<rect x='190' y='190' width='39' height='39'/>",
            "<rect x='190' y='190' width='39' height='39'/>",
            "<rect x='190' y='307' width='39' height='39'/>",
            "<rect x='190' y='307' width='39' height='39'/>",
            "<rect x='190' y='346' width='39' height='39'/>",
            "<rect x='190' y='346' width='39' height='39'/>",
            "</g></svg>",
        );
        assert_eq!(svg, expected_svg);
    }

    #[test]
    fn test_generate_identicon_svg_large() {
        let hash = "6e7ed63d1964c59e2e3545d9e0234a76";
        let svg = generate_identicon_svg(hash, large_options()).unwrap();
        let expected_svg = concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='420' height='420' style='background-color:rgba(240, 240, 240, 1.0);'>",
            "<g style='fill:rgba(216, 203, 140, 1); stroke:rgba(216, 203, 140, 1); stroke-width:2.1;'>",
            "<rect x='34' y='229' width='39' height='39'/>",
            "<rect x='346' y='229' width='39' height='39'/>",
            "<rect x='34' y='268' width='39' height='39'/>",
            "<rect x='346' y='268' width='39' height='39'/>",
            "<rect x='34' y='307' width='39' height='39'/>",
            "<rect x='346' y='307' width='39' height='39'/>",
            "<rect x='34' y='346' width='39' height='39'/>",
            "<rect x='346' y='346' width='39' height='39'/>",
            "<rect x='73' y='112' width='39' height='39'/>",
            "<rect x='307' y='112' width='39' height='39'/>",
            "<rect x='73' y='151' width='39' height='39'/>",
            "<rect x='307' y='151' width='39' height='39'/>",
            "<rect x='73' y='229' width='39' height='39'/>",
            "<rect x='307' y='229' width='39' height='39'/>",
            "<rect x='73' y='268' width='39' height='39'/>",
            "<rect x='307' y='268' width='39' height='39'/>",
            "<rect x='73' y='307' width='39' height='39'/>",
            "<rect x='307' y='307' width='39' height='39'/>",
            "<rect x='112' y='34' width='39' height='39'/>",
            "<rect x='268' y='34' width='39' height='39'/>",
            "<rect x='112' y='190' width='39' height='39'/>",
            "<rect x='268' y='190' width='39' height='39'/>",
            "<rect x='112' y='268' width='39' height='39'/>",
            "<rect x='268' y='268' width='39' height='39'/>",
            "<rect x='112' y='346' width='39' height='39'/>",
            "<rect x='268' y='346' width='39' height='39'/>",
            "<rect x='151' y='73' width='39' height='39'/>",
            "<rect x='229' y='73' width='39' height='39'/>",
            "<rect x='151' y='112' width='39' height='39'/>",
            "<rect x='229' y='112' width='39' height='39'/>",
            "<rect x='151' y='268' width='39' height='39'/>",
            "<rect x='229' y='268' width='39' height='39'/>",
            "<rect x='151' y='307' width='39' height='39'/>",
            "<rect x='229' y='307' width='39' height='39'/>",
            "<rect x='151' y='346' width='39' height='39'/>",
            "<rect x='229' y='346' width='39' height='39'/>",
            "<rect x='190' y='73' width='39' height='39'/>",
            "<rect x='190' y='73' width='39' height='39'/>",
            "<rect x='190' y='229' width='39' height='39'/>",
            "<rect x='190' y='229' width='39' height='39'/>",
            "<rect x='190' y='268' width='39' height='39'/>",
            "<rect x='190' y='268' width='39' height='39'/>",
            "<rect x='190' y='307' width='39' height='39'/>",
            "<rect x='190' y='307' width='39' height='39'/>",
            "<rect x='190' y='346' width='39' height='39'/>",
            "<rect x='190' y='346' width='39' height='39'/>",
            "</g></svg>",
        );
        assert_eq!(svg, expected_svg);
    }

    #[test]
    fn test_generate_identicon_svg_even_grid() {
        let options = IdenticonOptions {
            size: 100,
            grid_size: 4,
            foreground: Some([10, 20, 30]),
            background: [255, 255, 255, 128],
            ..Default::default()
        };
        let svg = generate_identicon_svg(STEWARTLORD_HASH, options).unwrap();
        let expected_svg = concat!(
            "<svg xmlns='http://www.w3.org/2000/svg' width='100' height='100' style='background-color:rgba(255, 255, 255, 0.5019607843137255);'>",
            "<g style='fill:rgba(10, 20, 30, 1); stroke:rgba(10, 20, 30, 1); stroke-width:0.5;'>",
            "<rect x='8' y='8' width='21' height='21'/>",
            "<rect x='71' y='8' width='21' height='21'/>",
            "<rect x='8' y='50' width='21' height='21'/>",
            "<rect x='71' y='50' width='21' height='21'/>",
            "<rect x='8' y='71' width='21' height='21'/>",
            "<rect x='71' y='71' width='21' height='21'/>",
            "<rect x='29' y='8' width='21' height='21'/>",
            "<rect x='50' y='8' width='21' height='21'/>",
            "<rect x='50' y='8' width='21' height='21'/>",
            "<rect x='29' y='8' width='21' height='21'/>",
            "<rect x='50' y='29' width='21' height='21'/>",
            "<rect x='29' y='29' width='21' height='21'/>",
            "</g></svg>",
        );
        assert_eq!(svg, expected_svg);
    }

    #[test]
    fn test_generate_identicon_base64() {
        let hash = "6e7ed63d1964c59e2e3545d9e0234a76";
        let encoded = generate_identicon_base64(hash, large_options()).unwrap();
        assert!(encoded.starts_with("PHN2ZyB4bWxucz0naHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmcnIHdpZHRoPSc0MjAn"));
        let decoded = base64::decode(encoded).unwrap();
        let svg = generate_identicon_svg(hash, large_options()).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), svg);
    }
}
