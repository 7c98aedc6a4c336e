//! Image representation for the transfer pipeline.
//!
//! Pixels are stored row-major as `[T; 3]`, so the channel count is fixed
//! by the type. Width and height cannot change after construction.

use bytemuck::Pod;

use crate::error::{Result, TransferError};

/// Number of channels in every image.
pub const CHANNELS: usize = 3;

/// A three-channel image of `width × height` pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: u32,
    height: u32,
    pixels: Vec<[T; 3]>,
}

/// 8-bit sRGB pixels, as loaded from and written to disk.
pub type DisplayImage = Image<u8>;

/// Scaled L\*a\*b\* pixels used for the arithmetic stages.
pub type TransferImage = Image<f32>;

impl<T: Copy> Image<T> {
    /// Build an image from a pixel vector.
    ///
    /// Fails with `InvalidImageFormat` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[T; 3]>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(TransferError::invalid_format(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self::from_parts(width, height, pixels))
    }

    /// An image where every pixel is `value`.
    pub fn filled(width: u32, height: u32, value: [T; 3]) -> Self {
        let count = width as usize * height as usize;
        Self::from_parts(width, height, vec![value; count])
    }

    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<[T; 3]>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when width or height is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[[T; 3]] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<[T; 3]> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[T; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Apply `f` to every pixel, producing a new image of the same size.
    pub fn map<U, F>(&self, f: F) -> Image<U>
    where
        U: Copy,
        F: FnMut([T; 3]) -> [U; 3],
    {
        Image::from_parts(
            self.width,
            self.height,
            self.pixels.iter().copied().map(f).collect(),
        )
    }

    /// Like [`Image::map`], stopping at the first error.
    pub fn try_map<U, F>(&self, f: F) -> Result<Image<U>>
    where
        U: Copy,
        F: FnMut([T; 3]) -> Result<[U; 3]>,
    {
        let pixels = self
            .pixels
            .iter()
            .copied()
            .map(f)
            .collect::<Result<Vec<_>>>()?;
        Ok(Image::from_parts(self.width, self.height, pixels))
    }
}

impl<T: Pod> Image<T> {
    /// Build an image from an interleaved buffer with `channels` values per pixel.
    ///
    /// Only three-channel buffers are accepted; anything else, or a buffer
    /// whose length does not match `width * height * channels`, fails with
    /// `InvalidImageFormat`.
    pub fn from_raw(width: u32, height: u32, channels: usize, data: Vec<T>) -> Result<Self> {
        if channels != CHANNELS {
            return Err(TransferError::invalid_format(format!(
                "expected {CHANNELS} channels, got {channels}"
            )));
        }
        let expected = pixel_count(width, height)?
            .checked_mul(CHANNELS)
            .ok_or_else(|| TransferError::invalid_format("image dimensions overflow"))?;
        if data.len() != expected {
            return Err(TransferError::invalid_format(format!(
                "{width}x{height}x{CHANNELS} buffer needs {expected} values, got {}",
                data.len()
            )));
        }
        let pixels = bytemuck::cast_slice::<T, [T; 3]>(&data).to_vec();
        Ok(Self::from_parts(width, height, pixels))
    }

    /// Interleaved view of the pixel data.
    pub fn as_raw(&self) -> &[T] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl DisplayImage {
    /// Copy into an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            let idx = y as usize * self.width as usize + x as usize;
            image::Rgb(self.pixels[idx])
        })
    }
}

impl From<&image::RgbImage> for DisplayImage {
    fn from(img: &image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Self::from_parts(width, height, pixels)
    }
}

impl TryFrom<&image::DynamicImage> for DisplayImage {
    type Error = TransferError;

    /// Accepts any three-channel color type; bit depth is reduced to 8 bits.
    fn try_from(img: &image::DynamicImage) -> Result<Self> {
        let color = img.color();
        if usize::from(color.channel_count()) != CHANNELS {
            return Err(TransferError::invalid_format(format!(
                "expected {CHANNELS} channels, got {} ({color:?})",
                color.channel_count()
            )));
        }
        Ok(Self::from(&img.to_rgb8()))
    }
}

fn pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| TransferError::invalid_format("image dimensions overflow"))
}
