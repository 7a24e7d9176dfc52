use std::f64::consts::PI;

use latent_spectrograms::{
    iq_from_real, Complex, FftWindow, IqSample, Sides, Spectrogram, SpectrogramParams,
    VisualizeError,
};

fn tone(freq: f64, len: usize) -> Vec<IqSample> {
    (0..len)
        .map(|n| Complex::from_polar(1.0, 2.0 * PI * freq * n as f64))
        .collect()
}

fn argmax_row(s: &Spectrogram, col: usize) -> usize {
    (0..s.rows)
        .max_by(|&a, &b| s.get(a, col).total_cmp(&s.get(b, col)))
        .unwrap()
}

#[test]
fn default_params_give_expected_shape() {
    let p = SpectrogramParams::default();
    let s = Spectrogram::compute(&tone(0.1, 1024), &p).unwrap();
    assert_eq!(s.rows, 256);
    // (1024 - 254) / 2
    assert_eq!(s.cols, 385);
    assert_eq!(s.data.len(), 256 * 385);
    assert_eq!(s.times.len(), 385);
    assert!((s.times[0] - 128.0).abs() < 1e-12);
}

#[test]
fn complex_tone_peaks_at_its_bin() {
    let p = SpectrogramParams {
        nfft: 64,
        noverlap: 32,
        ..Default::default()
    };
    // 8 cycles per 64 samples
    let s = Spectrogram::compute(&tone(0.125, 512), &p).unwrap();
    let row = argmax_row(&s, 3);
    assert!((s.freqs[row] - 0.125).abs() < 1e-12, "peak at {}", s.freqs[row]);

    let neg = Spectrogram::compute(&tone(-0.25, 512), &p).unwrap();
    let row = argmax_row(&neg, 0);
    assert!((neg.freqs[row] + 0.25).abs() < 1e-12, "peak at {}", neg.freqs[row]);
}

#[test]
fn psd_of_rect_windowed_dc_matches_scaling() {
    // |X_0|^2 = N^2, sum(w^2) = N, so the DC density is N / fs.
    let p = SpectrogramParams {
        nfft: 16,
        noverlap: 0,
        fs: 2.0,
        window: FftWindow::Rect,
        sides: Sides::TwoSided,
    };
    let s = Spectrogram::compute(&vec![Complex::new(1.0, 0.0); 32], &p).unwrap();
    assert_eq!(s.cols, 2);
    let dc_row = s.freqs.iter().position(|&f| f == 0.0).unwrap();
    assert!((s.get(dc_row, 0) - 8.0).abs() < 1e-9);
    assert!((s.get(dc_row, 1) - 8.0).abs() < 1e-9);
}

#[test]
fn one_sided_folds_mirrored_power() {
    let p = SpectrogramParams {
        nfft: 32,
        noverlap: 0,
        window: FftWindow::Rect,
        sides: Sides::OneSided,
        ..Default::default()
    };
    let real: Vec<f64> = (0..32).map(|n| (2.0 * PI * 4.0 * n as f64 / 32.0).cos()).collect();
    let one = Spectrogram::compute(&iq_from_real(&real), &p).unwrap();
    assert_eq!(one.rows, 17);

    let two = Spectrogram::compute(
        &iq_from_real(&real),
        &SpectrogramParams {
            sides: Sides::TwoSided,
            ..p.clone()
        },
    )
    .unwrap();
    let pos_row = two.freqs.iter().position(|&f| (f - 0.125).abs() < 1e-12).unwrap();
    assert!((one.get(4, 0) - 2.0 * two.get(pos_row, 0)).abs() < 1e-9);
}

#[test]
fn short_signal_is_an_error() {
    let err = Spectrogram::compute(&tone(0.1, 100), &SpectrogramParams::default()).unwrap_err();
    assert!(matches!(
        err,
        VisualizeError::SignalTooShort { len: 100, nfft: 256, .. }
    ));
}

#[test]
fn signal_of_exactly_one_segment_has_one_column() {
    let s = Spectrogram::compute(&tone(0.1, 256), &SpectrogramParams::default()).unwrap();
    assert_eq!(s.cols, 1);
}

#[test]
fn bad_params_are_rejected() {
    let overlap = SpectrogramParams {
        nfft: 16,
        noverlap: 16,
        ..Default::default()
    };
    assert!(matches!(
        Spectrogram::compute(&tone(0.1, 64), &overlap),
        Err(VisualizeError::InvalidSpectrogramParams(_))
    ));
    let fs = SpectrogramParams {
        fs: 0.0,
        ..Default::default()
    };
    assert!(fs.validate().is_err());
}
