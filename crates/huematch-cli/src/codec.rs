//! Image file decoding and encoding via the `image` crate.

use std::fs;
use std::path::Path;

use huematch_core::DisplayImage;

use crate::error::CliError;

/// Decode an image file into 8-bit RGB.
///
/// Inputs that are not three-channel (grayscale, or anything with alpha)
/// are flattened to RGB and alpha is dropped, with a warning.
pub fn load_image(path: &Path) -> Result<DisplayImage, CliError> {
    let img = image::open(path).map_err(|source| CliError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = DisplayImage::try_from(&img).unwrap_or_else(|e| {
        tracing::warn!("{}: {e}; flattening to 8-bit RGB", path.display());
        DisplayImage::from(&img.to_rgb8())
    });
    tracing::info!(
        "loaded {} ({}x{})",
        path.display(),
        decoded.width(),
        decoded.height()
    );
    Ok(decoded)
}

/// Encode `image` to `path`, creating missing parent directories.
///
/// The format is chosen from the file extension.
pub fn save_image(path: &Path, image: &DisplayImage) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    image
        .to_rgb_image()
        .save(path)
        .map_err(|source| CliError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.png");
        let pixels = (0..12u8).map(|i| [i * 20, 255 - i, i]).collect();
        let img = DisplayImage::from_pixels(4, 3, pixels).unwrap();

        save_image(&path, &img).unwrap();
        assert_eq!(load_image(&path).unwrap(), img);
    }

    #[test]
    fn test_rgba_input_is_flattened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        let rgba = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 128]));
        rgba.save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.pixel(0, 0), Some([10, 20, 30]));
    }

    #[test]
    fn test_grayscale_input_is_expanded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        image::GrayImage::from_pixel(2, 2, image::Luma([90])).save(&path).unwrap();

        let img = load_image(&path).unwrap();
        assert_eq!(img.pixel(1, 1), Some([90, 90, 90]));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, CliError::Decode { .. }));
    }

    #[test]
    fn test_unknown_extension_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.notaformat");
        let img = DisplayImage::filled(1, 1, [0, 0, 0]);
        assert!(matches!(
            save_image(&path, &img),
            Err(CliError::Encode { .. })
        ));
    }
}
