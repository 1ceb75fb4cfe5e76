use std::path::Path;

use image::metadata::Orientation;
use image::{DynamicImage, ImageDecoder, ImageReader, RgbImage};
use ndarray::Array4;

use crate::core::error::NodeError;

/// Batched pixel tensor in the host's exchange layout: (1, height, width, 3),
/// f32 channels in [0, 1].
pub type ImageTensor = Array4<f32>;

/// Decode an image, applying the EXIF orientation advertised by the decoder.
pub fn open_oriented(path: &Path) -> Result<DynamicImage, NodeError> {
    let mut decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let orientation = decoder.orientation().unwrap_or(Orientation::NoTransforms);
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);
    Ok(img)
}

/// Decode, normalize to 3-channel RGB, scale to [0, 1], add the batch
/// dimension.
pub fn load_image_tensor(path: &Path) -> Result<ImageTensor, NodeError> {
    let rgb = open_oriented(path)?.to_rgb8();
    tensor_from_rgb(rgb)
}

fn tensor_from_rgb(rgb: RgbImage) -> Result<ImageTensor, NodeError> {
    let (width, height) = rgb.dimensions();
    let data: Vec<f32> = rgb
        .into_raw()
        .into_iter()
        .map(|v| v as f32 / 255.0)
        .collect();
    let tensor = Array4::from_shape_vec((1, height as usize, width as usize, 3), data)?;
    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn tensor_is_batched_and_normalized() {
        let rgb = RgbImage::from_pixel(4, 2, Rgb([255, 0, 51]));
        let tensor = tensor_from_rgb(rgb).unwrap();
        assert_eq!(tensor.shape(), &[1, 2, 4, 3]);
        assert_eq!(tensor[[0, 0, 0, 0]], 1.0);
        assert_eq!(tensor[[0, 0, 0, 1]], 0.0);
        assert!((tensor[[0, 1, 3, 2]] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn decodes_png_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flat.png");
        RgbImage::from_pixel(3, 3, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();
        let tensor = load_image_tensor(&path).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 3, 3]);
        assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn non_image_bytes_fail_to_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(load_image_tensor(&path).is_err());
    }
}
