//! Image transform pipeline

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use ndarray::Array3;

/// Channel layout produced by the transform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// Single-channel output (X-ray films)
    Grayscale,
    /// Three-channel RGB output
    Rgb,
}

/// Decode-side transform pipeline
///
/// Default pipeline: resize so the shortest side is 320 pixels (aspect
/// preserved), then convert to a channels-first `[C, H, W]` tensor with
/// values scaled to `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    /// Target length of the shortest side (None = keep original size)
    pub resize_shortest: Option<u32>,
    /// Channel layout of the output tensor
    pub color: ColorMode,
}

impl Default for Transform {
    fn default() -> Self {
        Self { resize_shortest: Some(320), color: ColorMode::Grayscale }
    }
}

impl Transform {
    /// Set the shortest-side resize target
    #[must_use]
    pub fn resize_shortest(mut self, target: u32) -> Self {
        self.resize_shortest = Some(target);
        self
    }

    /// Keep the original image size
    #[must_use]
    pub fn no_resize(mut self) -> Self {
        self.resize_shortest = None;
        self
    }

    /// Produce three-channel RGB tensors
    #[must_use]
    pub fn rgb(mut self) -> Self {
        self.color = ColorMode::Rgb;
        self
    }

    /// Apply the pipeline to a decoded image
    #[must_use]
    pub fn apply(&self, image: &DynamicImage) -> Array3<f32> {
        let resized = match self.resize_shortest {
            Some(target) => {
                let (w, h) = (image.width(), image.height());
                let (nw, nh) = shortest_side_dims(w, h, target);
                if (nw, nh) == (w, h) {
                    image.clone()
                } else {
                    image.resize_exact(nw, nh, FilterType::Triangle)
                }
            }
            None => image.clone(),
        };

        match self.color {
            ColorMode::Grayscale => {
                let gray = resized.to_luma8();
                let (w, h) = gray.dimensions();
                Array3::from_shape_fn((1, h as usize, w as usize), |(_, y, x)| {
                    f32::from(gray.get_pixel(x as u32, y as u32).0[0]) / 255.0
                })
            }
            ColorMode::Rgb => {
                let rgb = resized.to_rgb8();
                let (w, h) = rgb.dimensions();
                Array3::from_shape_fn((3, h as usize, w as usize), |(c, y, x)| {
                    f32::from(rgb.get_pixel(x as u32, y as u32).0[c]) / 255.0
                })
            }
        }
    }
}

/// Scale (w, h) so the shortest side equals `target`, preserving aspect
fn shortest_side_dims(w: u32, h: u32, target: u32) -> (u32, u32) {
    if w == 0 || h == 0 {
        return (w, h);
    }
    if w <= h {
        let nh = ((f64::from(h) * f64::from(target)) / f64::from(w)).round() as u32;
        (target, nh.max(1))
    } else {
        let nw = ((f64::from(w) * f64::from(target)) / f64::from(h)).round() as u32;
        (nw.max(1), target)
    }
}
