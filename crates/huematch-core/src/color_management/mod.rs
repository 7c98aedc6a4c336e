//! Color management — sRGB companding, CIE L*a*b*, and whole-image conversion
//! between display space and transfer space.

pub mod convert;
pub mod lab;
pub mod srgb;

pub use convert::{to_display_space, to_transfer_space};
pub use lab::{Lab, lab_to_srgb, srgb_to_lab};
