//! Whole-image conversion between display space and transfer space.

use crate::color_management::lab::{self, Lab, TRANSFER_MAX};
use crate::error::{Result, TransferError};
use crate::image::{DisplayImage, TransferImage};

/// Convert 8-bit sRGB pixels to scaled L\*a\*b\*.
///
/// The output is not quantized; in-gamut colors land in `[0, 255]` on
/// every channel.
pub fn to_transfer_space(image: &DisplayImage) -> TransferImage {
    image.map(|rgb| lab::srgb_to_lab(rgb).encode())
}

/// Convert scaled L\*a\*b\* pixels back to 8-bit sRGB.
///
/// Values must already be inside `[0, 255]`; this function does not clip
/// or wrap. Any value outside that range, or not finite, fails with
/// `OutOfRangeInput`. Colors that decode outside the sRGB gamut are
/// clipped in linear light and every channel is rounded to nearest.
pub fn to_display_space(image: &TransferImage) -> Result<DisplayImage> {
    image.try_map(|px| {
        check_range(px)?;
        Ok(lab::lab_to_srgb(Lab::decode(px)))
    })
}

fn check_range(px: [f32; 3]) -> Result<()> {
    let max = TRANSFER_MAX as f32;
    match px
        .iter()
        .position(|v| !v.is_finite() || !(0.0..=max).contains(v))
    {
        Some(channel) => Err(TransferError::OutOfRangeInput {
            channel,
            value: px[channel],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> DisplayImage {
        let pixels = (0..width * height)
            .map(|i| {
                let v = (i * 37 % 256) as u8;
                [v, 255 - v, (i * 11 % 256) as u8]
            })
            .collect();
        DisplayImage::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_round_trip_is_exact_for_gradient() {
        let img = gradient(16, 9);
        let back = to_display_space(&to_transfer_space(&img)).unwrap();
        assert_eq!(back, img);
    }

    #[test]
    fn test_conversion_preserves_dimensions() {
        let img = gradient(7, 3);
        let lab = to_transfer_space(&img);
        assert_eq!(lab.dimensions(), (7, 3));
    }

    #[test]
    fn test_empty_image_converts_to_empty() {
        let img = DisplayImage::from_pixels(0, 4, Vec::new()).unwrap();
        assert!(to_transfer_space(&img).is_empty());
    }

    #[test]
    fn test_negative_value_is_rejected() {
        let lab = TransferImage::filled(2, 2, [50.0, -0.5, 128.0]);
        let err = to_display_space(&lab).unwrap_err();
        assert_eq!(
            err,
            TransferError::OutOfRangeInput {
                channel: 1,
                value: -0.5
            }
        );
    }

    #[test]
    fn test_value_above_255_is_rejected() {
        let lab = TransferImage::filled(1, 1, [255.5, 128.0, 128.0]);
        assert!(matches!(
            to_display_space(&lab),
            Err(TransferError::OutOfRangeInput { channel: 0, .. })
        ));
    }

    #[test]
    fn test_nan_is_rejected() {
        let lab = TransferImage::filled(1, 1, [100.0, 128.0, f32::NAN]);
        assert!(matches!(
            to_display_space(&lab),
            Err(TransferError::OutOfRangeInput { channel: 2, .. })
        ));
    }

    #[test]
    fn test_range_bounds_are_accepted() {
        let lab = TransferImage::filled(1, 1, [0.0, 255.0, 0.0]);
        assert!(to_display_space(&lab).is_ok());
    }
}
