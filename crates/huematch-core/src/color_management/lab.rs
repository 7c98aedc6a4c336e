//! CIE L\*a\*b\* (D65) and the scaled encoding used as the transfer space.
//!
//! The transfer space uses the 8-bit Lab convention
//! `L = L* · 255/100`, `A = a* + 128`, `B = b* + 128`, kept as floats.
//! Every in-gamut sRGB color lands inside `[0, 255]` on all three axes,
//! which is what lets the remapper clip all channels to that range.

use glam::DVec3;

use super::srgb;

/// D65 reference white: the XYZ of sRGB white under the pinned matrix,
/// `(0.95047, 1.0, 1.08883)` to seven decimals.
///
/// Using the matrix's own white keeps `[255, 255, 255]` at exactly
/// `L* = 100, a* = b* = 0`.
pub fn d65_white() -> DVec3 {
    srgb::RGB_TO_XYZ * DVec3::ONE
}

/// Upper bound of every transfer-space channel.
pub const TRANSFER_MAX: f64 = 255.0;

/// Upper bound of `L*`.
pub const LIGHTNESS_MAX: f64 = 100.0;

/// Offset applied to `a*` and `b*` in the transfer encoding.
pub const CHROMA_OFFSET: f64 = 128.0;

const DELTA: f64 = 6.0 / 29.0;

/// A color in CIE L\*a\*b\* relative to D65.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, `[0, 100]`.
    pub l: f64,
    /// Green (−) to red (+).
    pub a: f64,
    /// Blue (−) to yellow (+).
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Scaled transfer-space triple.
    pub fn encode(self) -> [f32; 3] {
        [
            (self.l * TRANSFER_MAX / LIGHTNESS_MAX) as f32,
            (self.a + CHROMA_OFFSET) as f32,
            (self.b + CHROMA_OFFSET) as f32,
        ]
    }

    /// Inverse of [`Lab::encode`].
    pub fn decode(v: [f32; 3]) -> Self {
        Self {
            l: f64::from(v[0]) * LIGHTNESS_MAX / TRANSFER_MAX,
            a: f64::from(v[1]) - CHROMA_OFFSET,
            b: f64::from(v[2]) - CHROMA_OFFSET,
        }
    }
}

fn f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// CIE XYZ → L\*a\*b\* against [`d65_white`].
pub fn xyz_to_lab(xyz: DVec3) -> Lab {
    let n = xyz / d65_white();
    let (fx, fy, fz) = (f(n.x), f(n.y), f(n.z));
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// L\*a\*b\* → CIE XYZ against [`d65_white`].
pub fn lab_to_xyz(lab: Lab) -> DVec3 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    DVec3::new(f_inv(fx), f_inv(fy), f_inv(fz)) * d65_white()
}

/// 8-bit sRGB → L\*a\*b\*.
pub fn srgb_to_lab(rgb: [u8; 3]) -> Lab {
    xyz_to_lab(srgb::srgb8_to_xyz(rgb))
}

/// L\*a\*b\* → 8-bit sRGB, gamut-clipped and rounded.
pub fn lab_to_srgb(lab: Lab) -> [u8; 3] {
    srgb::xyz_to_srgb8(lab_to_xyz(lab))
}
