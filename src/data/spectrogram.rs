//! Power spectrogram of a single IQ signal via a short-time FFT.
//!
//! The output is a power spectral density matrix with one row per frequency
//! bin and one column per segment. For two-sided output the rows run from
//! `-fs/2` up to just below `+fs/2`, so zero frequency sits in the middle.

use rustfft::{num_complex::Complex, FftPlanner};

use super::signal::IqSample;
use super::window::FftWindow;
use crate::error::{Result, VisualizeError};

/// Which half (or both) of the spectrum to keep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Sides {
    /// Full spectrum, centred on zero frequency. Used for complex signals.
    #[default]
    TwoSided,
    /// Non-negative frequencies only, with the mirrored power folded in.
    OneSided,
}

/// Short-time transform settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SpectrogramParams {
    /// Samples per segment (and FFT length).
    pub nfft: usize,
    /// Samples shared by consecutive segments.
    pub noverlap: usize,
    /// Sample rate used to scale the frequency axis and the density.
    pub fs: f64,
    pub window: FftWindow,
    pub sides: Sides,
}

impl Default for SpectrogramParams {
    fn default() -> Self {
        Self {
            nfft: 256,
            noverlap: 254,
            fs: 1.0,
            window: FftWindow::Hann,
            sides: Sides::TwoSided,
        }
    }
}

impl SpectrogramParams {
    /// Hop between consecutive segments.
    pub fn step(&self) -> usize {
        self.nfft - self.noverlap
    }

    pub fn validate(&self) -> Result<()> {
        if self.nfft == 0 {
            return Err(VisualizeError::InvalidSpectrogramParams(
                "nfft must be positive".to_string(),
            ));
        }
        if self.noverlap >= self.nfft {
            return Err(VisualizeError::InvalidSpectrogramParams(format!(
                "noverlap ({}) must be smaller than nfft ({})",
                self.noverlap, self.nfft
            )));
        }
        if !(self.fs > 0.0) {
            return Err(VisualizeError::InvalidSpectrogramParams(format!(
                "sample rate must be positive, got {}",
                self.fs
            )));
        }
        Ok(())
    }

    /// Number of segments a signal of `len` samples yields (0 if too short).
    pub fn segment_count(&self, len: usize) -> usize {
        if len < self.nfft {
            return 0;
        }
        (len - self.noverlap) / self.step()
    }

    /// Number of frequency rows in the output.
    pub fn bin_count(&self) -> usize {
        match self.sides {
            Sides::TwoSided => self.nfft,
            Sides::OneSided => self.nfft / 2 + 1,
        }
    }
}

/// Power spectral density, `rows` frequency bins by `cols` segments, row-major.
#[derive(Clone, Debug)]
pub struct Spectrogram {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
    /// Frequency of each row.
    pub freqs: Vec<f64>,
    /// Centre time of each column.
    pub times: Vec<f64>,
}

impl Spectrogram {
    /// Compute the spectrogram of `signal`.
    ///
    /// Fails with [`VisualizeError::SignalTooShort`] (index 0) when the signal
    /// is shorter than one segment; callers that know the signal's position
    /// rewrite the index.
    pub fn compute(signal: &[IqSample], params: &SpectrogramParams) -> Result<Self> {
        params.validate()?;
        let nfft = params.nfft;
        if signal.len() < nfft {
            return Err(VisualizeError::SignalTooShort {
                index: 0,
                len: signal.len(),
                nfft,
            });
        }

        let step = params.step();
        let cols = params.segment_count(signal.len());
        let rows = params.bin_count();

        let window = params.window.weights(nfft);
        let win_power: f64 = window.iter().map(|w| w * w).sum();
        let scale = 1.0 / (params.fs * win_power);

        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(nfft);
        let mut buf: Vec<Complex<f64>> = vec![Complex::new(0.0, 0.0); nfft];
        let mut data = vec![0.0f64; rows * cols];

        for col in 0..cols {
            let start = col * step;
            for (dst, (s, w)) in buf
                .iter_mut()
                .zip(signal[start..start + nfft].iter().zip(window.iter()))
            {
                *dst = *s * *w;
            }
            fft.process(&mut buf);

            for row in 0..rows {
                let bin = source_bin(row, nfft, params.sides);
                let mut p = buf[bin].norm_sqr() * scale;
                if params.sides == Sides::OneSided && is_folded_bin(bin, nfft) {
                    p *= 2.0;
                }
                data[row * cols + col] = p;
            }
        }

        let freqs = (0..rows)
            .map(|row| bin_frequency(source_bin(row, nfft, params.sides), nfft, params.fs, params.sides))
            .collect();
        let times = (0..cols)
            .map(|col| (col * step) as f64 / params.fs + nfft as f64 / (2.0 * params.fs))
            .collect();

        Ok(Self {
            rows,
            cols,
            data,
            freqs,
            times,
        })
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Largest value in the matrix (0 for an all-zero spectrogram).
    pub fn peak(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }
}

/// FFT bin shown in output row `row`.
fn source_bin(row: usize, nfft: usize, sides: Sides) -> usize {
    match sides {
        // same reordering as an fftshift
        Sides::TwoSided => (row + nfft - nfft / 2) % nfft,
        Sides::OneSided => row,
    }
}

/// Whether a one-sided bin carries power from its negative-frequency mirror.
fn is_folded_bin(bin: usize, nfft: usize) -> bool {
    bin != 0 && !(nfft % 2 == 0 && bin == nfft / 2)
}

fn bin_frequency(bin: usize, nfft: usize, fs: f64, sides: Sides) -> f64 {
    let k = match sides {
        Sides::OneSided => bin as f64,
        Sides::TwoSided if bin <= (nfft - 1) / 2 => bin as f64,
        Sides::TwoSided => bin as f64 - nfft as f64,
    };
    k * fs / nfft as f64
}
