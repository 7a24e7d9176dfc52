//! Anti-aliased resampling of a spectrogram onto a fixed image grid.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma};

use super::spectrogram::Spectrogram;
use crate::error::{Result, VisualizeError};

/// A fixed-shape image, `rows` x `cols`, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrogramImage {
    pub rows: usize,
    pub cols: usize,
    pub pixels: Vec<f32>,
}

impl SpectrogramImage {
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.pixels[row * self.cols + col]
    }

    /// `(min, max)` over all pixels.
    pub fn value_range(&self) -> (f32, f32) {
        self.pixels
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

pub fn check_shape(shape: (usize, usize)) -> Result<()> {
    let (rows, cols) = shape;
    if rows == 0 || cols == 0 {
        return Err(VisualizeError::InvalidImageShape { rows, cols });
    }
    Ok(())
}

/// Resize `spec` to `shape` (`rows`, `cols`).
///
/// Uses a triangle filter whose support scales with the reduction factor, so
/// downsampling averages neighbouring bins instead of skipping them.
/// Float samples are clamped to `0..=1` by the resampler, so the matrix is
/// divided by its peak beforehand and scaled back afterwards.
pub fn resize_spectrogram(spec: &Spectrogram, shape: (usize, usize)) -> Result<SpectrogramImage> {
    check_shape(shape)?;
    let (rows, cols) = shape;

    let peak = spec.peak();
    let norm = if peak > 0.0 { peak } else { 1.0 };
    let src: Vec<f32> = spec.data.iter().map(|&v| (v / norm) as f32).collect();

    let buf: ImageBuffer<Luma<f32>, Vec<f32>> =
        ImageBuffer::from_raw(spec.cols as u32, spec.rows as u32, src).ok_or_else(|| {
            VisualizeError::InvalidImageShape {
                rows: spec.rows,
                cols: spec.cols,
            }
        })?;

    let resized = imageops::resize(&buf, cols as u32, rows as u32, FilterType::Triangle);
    let pixels = resized
        .into_raw()
        .into_iter()
        .map(|v| (v as f64 * norm) as f32)
        .collect();

    Ok(SpectrogramImage { rows, cols, pixels })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(rows: usize, cols: usize, value: f64) -> Spectrogram {
        Spectrogram {
            rows,
            cols,
            data: vec![value; rows * cols],
            freqs: vec![0.0; rows],
            times: vec![0.0; cols],
        }
    }

    #[test]
    fn flat_input_stays_flat_and_keeps_scale() {
        let img = resize_spectrogram(&flat(256, 385, 4.0), (100, 100)).unwrap();
        assert_eq!(img.shape(), (100, 100));
        let (lo, hi) = img.value_range();
        assert!((lo - 4.0).abs() < 1e-3, "lo={lo}");
        assert!((hi - 4.0).abs() < 1e-3, "hi={hi}");
    }

    #[test]
    fn zero_input_resizes_to_zero() {
        let img = resize_spectrogram(&flat(8, 8, 0.0), (3, 5)).unwrap();
        assert_eq!(img.pixels.len(), 15);
        assert!(img.pixels.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = resize_spectrogram(&flat(8, 8, 1.0), (0, 5)).unwrap_err();
        assert!(matches!(err, VisualizeError::InvalidImageShape { rows: 0, cols: 5 }));
    }
}
