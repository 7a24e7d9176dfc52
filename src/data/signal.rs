//! Input points: coordinates, labels and the raw IQ signal behind each point.

pub use rustfft::num_complex::Complex;

use crate::error::{Result, VisualizeError};

/// One complex baseband sample (I + jQ).
pub type IqSample = Complex<f64>;

/// Convert pair-valued samples (`[i, q]`) into complex samples.
pub fn iq_from_pairs(pairs: &[[f64; 2]]) -> Vec<IqSample> {
    pairs.iter().map(|p| Complex::new(p[0], p[1])).collect()
}

/// Convert a real-valued signal into complex samples with zero quadrature.
pub fn iq_from_real(samples: &[f64]) -> Vec<IqSample> {
    samples.iter().map(|&s| Complex::new(s, 0.0)).collect()
}

/// Positionally aligned points of the latent space.
///
/// Index `i` of every collection belongs to the same point.
#[derive(Clone, Debug)]
pub struct LatentPoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub labels: Vec<String>,
    pub signals: Vec<Vec<IqSample>>,
}

impl LatentPoints {
    /// Build the point set, rejecting empty or misaligned input.
    pub fn new(
        x: Vec<f64>,
        y: Vec<f64>,
        signals: Vec<Vec<IqSample>>,
        labels: Vec<String>,
    ) -> Result<Self> {
        let n = x.len();
        if n != y.len() || n != signals.len() || n != labels.len() {
            return Err(VisualizeError::LengthMismatch {
                x: x.len(),
                y: y.len(),
                signals: signals.len(),
                labels: labels.len(),
            });
        }
        if n == 0 {
            return Err(VisualizeError::Empty);
        }
        Ok(Self {
            x,
            y,
            labels,
            signals,
        })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Plot coordinate of point `i`.
    pub fn position(&self, i: usize) -> [f64; 2] {
        [self.x[i], self.y[i]]
    }

    /// `(min, max)` of the x coordinates.
    pub fn x_range(&self) -> (f64, f64) {
        min_max(&self.x)
    }

    /// `(min, max)` of the y coordinates.
    pub fn y_range(&self) -> (f64, f64) {
        min_max(&self.y)
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
