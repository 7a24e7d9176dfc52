// Window functions applied to each short-time transform segment.

/// Supported window functions for the short-time transform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FftWindow {
    /// Rectangular (no windowing)
    Rect,
    /// Hann window
    #[default]
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
}

impl FftWindow {
    pub const ALL: &'static [FftWindow] = &[
        FftWindow::Rect,
        FftWindow::Hann,
        FftWindow::Hamming,
        FftWindow::Blackman,
    ];

    /// Human-readable label for each window type
    pub fn label(&self) -> &'static str {
        match self {
            FftWindow::Rect => "Rect",
            FftWindow::Hann => "Hann",
            FftWindow::Hamming => "Hamming",
            FftWindow::Blackman => "Blackman",
        }
    }

    /// Symmetric window weight for sample `n` of a `len`-sample segment.
    pub fn weight(&self, n: usize, len: usize) -> f64 {
        if len < 2 {
            return 1.0;
        }
        let phase = 2.0 * std::f64::consts::PI * n as f64 / (len as f64 - 1.0);
        match self {
            FftWindow::Rect => 1.0,
            // w[n] = 0.5 - 0.5*cos(2*pi*n/(N-1))
            FftWindow::Hann => 0.5 - 0.5 * phase.cos(),
            // w[n] = 0.54 - 0.46*cos(2*pi*n/(N-1))
            FftWindow::Hamming => 0.54 - 0.46 * phase.cos(),
            // w[n] = 0.42 - 0.5*cos(2*pi*n/(N-1)) + 0.08*cos(4*pi*n/(N-1))
            FftWindow::Blackman => 0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos(),
        }
    }

    /// All weights for a segment of `len` samples.
    pub fn weights(&self, len: usize) -> Vec<f64> {
        (0..len).map(|n| self.weight(n, len)).collect()
    }
}
