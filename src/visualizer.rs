//! The public entry point: collect points, precompute images, open the window.

use crate::app::{run_visualizer, LatentSpaceApp};
use crate::colormap::Colormap;
use crate::config::VisualizeConfig;
use crate::data::images::ImageStack;
use crate::data::labels::LabelEncoding;
use crate::data::signal::{IqSample, LatentPoints};
use crate::data::spectrogram::SpectrogramParams;
use crate::error::Result;

/// A set of latent-space points with the signals they were embedded from.
#[derive(Clone, Debug)]
pub struct Visualizer {
    points: LatentPoints,
    params: SpectrogramParams,
}

impl Visualizer {
    /// `x`, `y`, `iq_data` and `text_labels` must be non-empty and of equal
    /// length; element `i` of each belongs to point `i`.
    pub fn new<S: Into<String>>(
        x: Vec<f64>,
        y: Vec<f64>,
        iq_data: Vec<Vec<IqSample>>,
        text_labels: Vec<S>,
    ) -> Result<Self> {
        let labels = text_labels.into_iter().map(Into::into).collect();
        Ok(Self {
            points: LatentPoints::new(x, y, iq_data, labels)?,
            params: SpectrogramParams::default(),
        })
    }

    /// Override the short-time transform settings (segment length, overlap,
    /// sample rate, window, sides).
    pub fn with_spectrogram_params(mut self, params: SpectrogramParams) -> Self {
        self.params = params;
        self
    }

    pub fn points(&self) -> &LatentPoints {
        &self.points
    }

    pub fn spectrogram_params(&self) -> &SpectrogramParams {
        &self.params
    }

    /// Do all the work that happens before the window opens: the image
    /// stack and the label codes.
    pub fn prepare(&self, cfg: &VisualizeConfig) -> Result<LatentSpaceApp> {
        let images = ImageStack::precompute(&self.points.signals, cfg.img_shape, &self.params)?;
        let encoding = LabelEncoding::encode(&self.points.labels);
        log::debug!(
            "{} label classes: {:?}",
            encoding.class_count(),
            encoding.classes
        );
        Ok(LatentSpaceApp::new(
            self.points.clone(),
            images,
            encoding,
            cfg.cmap,
            cfg.title.clone(),
        ))
    }

    /// Plot the points with hoverable spectrograms. Blocks until the window
    /// is closed.
    pub fn visualize(&self, cfg: VisualizeConfig) -> Result<()> {
        let app = self.prepare(&cfg)?;
        run_visualizer(app, cfg)
    }

    /// [`Self::visualize`] with the three settings passed directly.
    pub fn visualize_with(
        &self,
        img_shape: (usize, usize),
        cmap: Colormap,
        title: &str,
    ) -> Result<()> {
        self.visualize(VisualizeConfig::new(img_shape, cmap, title))
    }
}
