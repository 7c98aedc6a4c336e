//! sRGB transfer function and the D65 RGB/XYZ matrices.
//!
//! Constants are the published IEC 61966-2-1 values. The matrices are the
//! Lindbloom D65 sRGB pair, pinned rather than derived from the primaries.

use glam::{DMat3, DVec3};

/// Linear sRGB → CIE XYZ (D65), stored by columns.
///
/// ```text
/// | 0.4124564  0.3575761  0.1804375 |
/// | 0.2126729  0.7151522  0.0721750 |
/// | 0.0193339  0.1191920  0.9503041 |
/// ```
pub const RGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124564, 0.2126729, 0.0193339),
    DVec3::new(0.3575761, 0.7151522, 0.1191920),
    DVec3::new(0.1804375, 0.0721750, 0.9503041),
);

/// CIE XYZ (D65) → linear sRGB, stored by columns.
///
/// ```text
/// |  3.2404542  -1.5371385  -0.4985314 |
/// | -0.9692660   1.8760108   0.0415560 |
/// |  0.0556434  -0.2040259   1.0572252 |
/// ```
pub const XYZ_TO_RGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2404542, -0.9692660, 0.0556434),
    DVec3::new(-1.5371385, 1.8760108, -0.2040259),
    DVec3::new(-0.4985314, 0.0415560, 1.0572252),
);

/// sRGB EOTF: encoded `[0, 1]` → linear light.
///
/// ```text
/// V <= 0.04045 → V / 12.92
/// V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
/// ```
pub fn to_linear(encoded: f64) -> f64 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse EOTF: linear light → encoded `[0, 1]`.
///
/// ```text
/// L <= 0.0031308 → L × 12.92
/// L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
pub fn to_encoded(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// 8-bit sRGB → CIE XYZ.
pub fn srgb8_to_xyz(rgb: [u8; 3]) -> DVec3 {
    let linear = DVec3::from_array(rgb.map(|v| to_linear(f64::from(v) / 255.0)));
    RGB_TO_XYZ * linear
}

/// CIE XYZ → 8-bit sRGB.
///
/// Colors outside the sRGB gamut are clipped in linear light before
/// encoding; channels are rounded to the nearest integer.
pub fn xyz_to_srgb8(xyz: DVec3) -> [u8; 3] {
    let linear = (XYZ_TO_RGB * xyz).clamp(DVec3::ZERO, DVec3::ONE);
    linear
        .to_array()
        .map(|v| (to_encoded(v) * 255.0).round().clamp(0.0, 255.0) as u8)
}
