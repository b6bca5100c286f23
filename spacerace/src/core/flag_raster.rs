use crate::core::color_codec::{
    pack, rgb_to_stored, stored_from_i64, stored_to_rgb, unpack, StoredRgb,
};
use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use nbt::{Compound, Tag};
use serde::Deserialize;

/// Size of a flag that was never painted (size used by old game versions).
pub const DEFAULT_FLAG_WIDTH: usize = 20;
pub const DEFAULT_FLAG_HEIGHT: usize = 14;

/// Size of a flag painted in the game (and of imported flags).
pub const IMPORT_FLAG_WIDTH: u32 = 48;
pub const IMPORT_FLAG_HEIGHT: u32 = 32;

/// Upper limit for decoded flag dimensions, larger values are clamped.
pub const MAX_FLAG_DIMENSION: usize = 1024;

// keys of the compact format
const KEY_COMPACT_WIDTH: &str = "FWidth";
const KEY_COMPACT_HEIGHT: &str = "FHeight";

// keys of the legacy format
const KEY_LEGACY_WIDTH: &str = "FlagWidth";
const KEY_LEGACY_HEIGHT: &str = "FlagHeight";
const KEY_LEGACY_CHANNEL_PREFIX: &str = "Color";

/// ScaleMode determines how an image that does not have the flag size is fitted to it.
///
/// * `Stretch` - resample to exactly the flag size, ignoring the aspect ratio
/// * `Pad` - scale preserving the aspect ratio and center it on a black background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    #[default]
    Stretch,
    Pad,
}

/// FlagFormat is the on-disk layout of a flag found in a race entry.
///
/// * `Compact` - `FWidth`, `FHeight` and one packed int array `FRow{y}` per row
/// * `Legacy` - `FlagWidth`, `FlagHeight` and one integer per channel and pixel
/// `ColorR-X{x}-Y{y}`, `ColorG-...`, `ColorB-...`
/// * `Absent` - no flag stored at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagFormat {
    Compact,
    Legacy,
    Absent,
}

impl FlagFormat {
    /// detect determines the format by its marker keys. The compact format has strict priority,
    /// legacy keys are never looked at if the compact width is present.
    pub fn detect(node: &Compound) -> FlagFormat {
        if node.contains_key(KEY_COMPACT_WIDTH) {
            FlagFormat::Compact
        } else if node.contains_key(KEY_LEGACY_WIDTH) {
            FlagFormat::Legacy
        } else {
            FlagFormat::Absent
        }
    }
}

/// FlagRaster contains the pixels of a team flag in the stored (signed byte) domain. The pixels
/// are kept in a flat row-major buffer with three channels per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagRaster {
    width: usize,
    height: usize,
    pixels: Vec<i8>,
}

impl Default for FlagRaster {
    fn default() -> Self {
        FlagRaster::new(DEFAULT_FLAG_WIDTH, DEFAULT_FLAG_HEIGHT)
    }
}

impl FlagRaster {
    /// new creates a raster of the given size with all channels set to zero.
    pub fn new(width: usize, height: usize) -> FlagRaster {
        FlagRaster {
            width,
            height,
            pixels: vec![0; width * height * 3],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// pixel returns the stored color at (x, y) or None if the coordinates are outside the flag.
    pub fn pixel(&self, x: usize, y: usize) -> Option<StoredRgb> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.stored_at(x, y))
    }

    /// set_pixel overwrites the stored color at (x, y). Panics if the coordinates are outside the
    /// flag.
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: StoredRgb) {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({}, {}) is outside of the {}x{} flag!",
            x,
            y,
            self.width,
            self.height
        );

        let offset = self.offset(x, y);
        self.pixels[offset..offset + 3].copy_from_slice(&rgb);
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * 3
    }

    fn stored_at(&self, x: usize, y: usize) -> StoredRgb {
        let offset = self.offset(x, y);
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    // ---------------------------------------------------------------------------------------------
    // TREE CODEC ----------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// decode reads the flag from a race entry in whichever format is present. Missing rows,
    /// short rows and missing channel fields are tolerated and leave the respective channels at
    /// zero.
    pub fn decode(node: &Compound) -> FlagRaster {
        let format = FlagFormat::detect(node);
        log::debug!("Detected flag format {:?}", format);

        match format {
            FlagFormat::Compact => FlagRaster::decode_compact(node),
            FlagFormat::Legacy => FlagRaster::decode_legacy(node),
            FlagFormat::Absent => FlagRaster::default(),
        }
    }

    fn decode_compact(node: &Compound) -> FlagRaster {
        let width = read_dimension(node, KEY_COMPACT_WIDTH);
        let height = read_dimension(node, KEY_COMPACT_HEIGHT);
        let mut flag = FlagRaster::new(width, height);

        for y in 0..height {
            let row = match node.get(&compact_row_key(y)).and_then(row_values) {
                Some(row) => row,
                None => continue,
            };

            for (x, color) in row.into_iter().take(width).enumerate() {
                if let Some(color) = color {
                    flag.set_pixel(x, y, rgb_to_stored(unpack(color as i32)));
                }
            }
        }

        flag
    }

    fn decode_legacy(node: &Compound) -> FlagRaster {
        let width = read_dimension(node, KEY_LEGACY_WIDTH);
        let height = read_dimension(node, KEY_LEGACY_HEIGHT);
        let mut flag = FlagRaster::new(width, height);

        // only the channel fields present are visited, absent ones stay zero
        for (key, tag) in node.iter() {
            let (channel, x, y) = match parse_legacy_channel_key(key) {
                Some(coords) => coords,
                None => continue,
            };

            if x >= width || y >= height {
                continue;
            }

            if let Some(raw) = tag.as_i64() {
                let offset = flag.offset(x, y) + channel;
                flag.pixels[offset] = stored_from_i64(raw);
            }
        }

        flag
    }

    /// encode writes the flag in the compact format, independent of the format it was read from.
    pub fn encode(&self, node: &mut Compound) {
        node.insert(KEY_COMPACT_WIDTH, Tag::Int(self.width as i32));
        node.insert(KEY_COMPACT_HEIGHT, Tag::Int(self.height as i32));

        for y in 0..self.height {
            let row: Vec<i32> = (0..self.width)
                .map(|x| pack(stored_to_rgb(self.stored_at(x, y))))
                .collect();
            node.insert(compact_row_key(y), Tag::IntArray(row));
        }
    }

    // ---------------------------------------------------------------------------------------------
    // IMAGE CONVERSION ----------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// to_image converts the flag into an opaque RGB image of the same size.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Rgb(stored_to_rgb(self.stored_at(x as usize, y as usize)))
        })
    }

    /// from_image creates a flag of exactly target_width x target_height from an image. Images
    /// with an alpha channel or another pixel format are converted to RGB first, the alpha
    /// channel is dropped.
    pub fn from_image(
        img: &DynamicImage,
        target_width: u32,
        target_height: u32,
        mode: ScaleMode,
    ) -> FlagRaster {
        let img = img.to_rgb8();

        let sample = match mode {
            ScaleMode::Stretch => stretch_to(&img, target_width, target_height),
            ScaleMode::Pad => pad_to(&img, target_width, target_height),
        };

        let mut flag = FlagRaster::new(target_width as usize, target_height as usize);

        for (x, y, pixel) in sample.enumerate_pixels() {
            flag.set_pixel(x as usize, y as usize, rgb_to_stored(pixel.0));
        }

        flag
    }
}

/// read_dimension reads a flag width or height. Missing, non-integer and negative values yield
/// zero.
fn read_dimension(node: &Compound, key: &str) -> usize {
    let val = node.get(key).and_then(Tag::as_i64).unwrap_or(0).max(0) as u64;

    if val > MAX_FLAG_DIMENSION as u64 {
        log::warn!(
            "Flag dimension {} = {} exceeds {}, clamping it",
            key,
            val,
            MAX_FLAG_DIMENSION
        );
        return MAX_FLAG_DIMENSION;
    }

    val as usize
}

/// row_values returns the packed colors of a compact row by column. Besides int arrays, long
/// arrays and lists of integers are accepted. Non-integer list items keep their column as None.
fn row_values(tag: &Tag) -> Option<Vec<Option<i64>>> {
    if let Some(vals) = tag.as_int_array() {
        return Some(vals.iter().map(|&x| Some(x as i64)).collect());
    }

    match tag {
        Tag::LongArray(vals) => Some(vals.iter().map(|&x| Some(x)).collect()),
        Tag::List(list) => Some(list.iter().map(Tag::as_i64).collect()),
        _ => None,
    }
}

fn compact_row_key(y: usize) -> String {
    format!("FRow{}", y)
}

/// parse_legacy_channel_key splits a key of the form `ColorR-X{x}-Y{y}` into (channel, x, y).
fn parse_legacy_channel_key(key: &str) -> Option<(usize, usize, usize)> {
    let rest = key.strip_prefix(KEY_LEGACY_CHANNEL_PREFIX)?;

    let channel = match rest.as_bytes().first()? {
        b'R' => 0,
        b'G' => 1,
        b'B' => 2,
        _ => return None,
    };

    let (x, y) = rest[1..].strip_prefix("-X")?.split_once("-Y")?;
    Some((channel, x.parse().ok()?, y.parse().ok()?))
}

fn stretch_to(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    if img.dimensions() == (width, height) {
        return img.to_owned();
    }

    if img.width() == 0 || img.height() == 0 {
        return RgbImage::new(width, height);
    }

    imageops::resize(img, width, height, FilterType::Lanczos3)
}

fn pad_to(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));

    if img.width() == 0 || img.height() == 0 || width == 0 || height == 0 {
        return canvas;
    }

    let (fit_width, fit_height) = fit_dimensions(img.width(), img.height(), width, height);
    let scaled = stretch_to(img, fit_width, fit_height);

    let offset_x = (width - fit_width) / 2;
    let offset_y = (height - fit_height) / 2;
    imageops::replace(&mut canvas, &scaled, offset_x as i64, offset_y as i64);

    canvas
}

/// fit_dimensions returns the largest size with the aspect ratio of the source that fits into the
/// target size (rounded to the nearest pixel, at least one pixel per side).
pub fn fit_dimensions(src_width: u32, src_height: u32, width: u32, height: u32) -> (u32, u32) {
    let (sw, sh, tw, th) = (
        src_width as u64,
        src_height as u64,
        width as u64,
        height as u64,
    );

    if sw * th >= sh * tw {
        // limited by the width
        let fit_height = ((2 * sh * tw + sw) / (2 * sw)).clamp(1, th);
        (width, fit_height as u32)
    } else {
        // limited by the height
        let fit_width = ((2 * sw * th + sh) / (2 * sh)).clamp(1, tw);
        (fit_width as u32, height)
    }
}
