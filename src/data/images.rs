//! The per-point image cache built before the window opens.

use std::time::Instant;

use super::resize::{check_shape, resize_spectrogram, SpectrogramImage};
use super::signal::IqSample;
use super::spectrogram::{Spectrogram, SpectrogramParams};
use crate::error::{Result, VisualizeError};

/// One spectrogram image per point, indexed like the input points.
#[derive(Clone, Debug)]
pub struct ImageStack {
    shape: (usize, usize),
    images: Vec<SpectrogramImage>,
}

impl ImageStack {
    /// Compute and resize the spectrogram of every signal.
    ///
    /// The first failing signal aborts the whole pass.
    pub fn precompute(
        signals: &[Vec<IqSample>],
        shape: (usize, usize),
        params: &SpectrogramParams,
    ) -> Result<Self> {
        check_shape(shape)?;
        params.validate()?;
        let started = Instant::now();

        let mut images = Vec::with_capacity(signals.len());
        for (index, signal) in signals.iter().enumerate() {
            let spec = Spectrogram::compute(signal, params).map_err(|e| match e {
                VisualizeError::SignalTooShort { len, nfft, .. } => {
                    VisualizeError::SignalTooShort { index, len, nfft }
                }
                other => other,
            })?;
            log::debug!(
                "signal {index}: {} samples -> {}x{} spectrogram ({} window)",
                signal.len(),
                spec.rows,
                spec.cols,
                params.window.label()
            );
            images.push(resize_spectrogram(&spec, shape)?);
        }

        log::info!(
            "precomputed {} spectrogram images of {}x{} in {:.1?}",
            images.len(),
            shape.0,
            shape.1,
            started.elapsed()
        );
        Ok(Self { shape, images })
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SpectrogramImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SpectrogramImage> {
        self.images.iter()
    }
}
