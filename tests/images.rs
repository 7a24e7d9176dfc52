use latent_spectrograms::{
    Complex, ImageStack, IqSample, SpectrogramParams, VisualizeConfig, VisualizeError, Visualizer,
};

fn chirp(len: usize, seed: f64) -> Vec<IqSample> {
    (0..len)
        .map(|n| {
            let t = n as f64;
            Complex::from_polar(1.0, seed * t + 1e-4 * t * t)
        })
        .collect()
}

#[test]
fn one_image_per_point_with_configured_shape() {
    let signals: Vec<Vec<IqSample>> = (0..4).map(|i| chirp(1024, 0.3 * i as f64)).collect();
    let stack = ImageStack::precompute(&signals, (40, 60), &SpectrogramParams::default()).unwrap();
    assert_eq!(stack.len(), 4);
    assert_eq!(stack.shape(), (40, 60));
    for img in stack.iter() {
        assert_eq!(img.shape(), (40, 60));
        assert_eq!(img.pixels.len(), 40 * 60);
        assert!(img.pixels.iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}

#[test]
fn too_short_signal_reports_its_index() {
    let signals = vec![chirp(1024, 0.1), chirp(1024, 0.2), chirp(200, 0.3)];
    let err = ImageStack::precompute(&signals, (10, 10), &SpectrogramParams::default()).unwrap_err();
    match err {
        VisualizeError::SignalTooShort { index, len, nfft } => {
            assert_eq!((index, len, nfft), (2, 200, 256));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_sized_shape_is_rejected() {
    let err = ImageStack::precompute(&[chirp(512, 0.1)], (0, 10), &SpectrogramParams::default())
        .unwrap_err();
    assert!(matches!(err, VisualizeError::InvalidImageShape { rows: 0, cols: 10 }));
}

#[test]
fn visualizer_rejects_misaligned_input() {
    let err = Visualizer::new(
        vec![0.0, 1.0],
        vec![0.0],
        vec![chirp(512, 0.1), chirp(512, 0.2)],
        vec!["a", "b"],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        VisualizeError::LengthMismatch { x: 2, y: 1, signals: 2, labels: 2 }
    ));
}

#[test]
fn visualizer_rejects_empty_input() {
    let err = Visualizer::new(Vec::new(), Vec::new(), Vec::new(), Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, VisualizeError::Empty));
}

#[test]
fn prepare_builds_images_and_codes_without_a_window() {
    let vis = Visualizer::new(
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 2.0],
        vec![chirp(600, 0.1), chirp(600, 0.2), chirp(600, 0.3)],
        vec!["A", "B", "A"],
    )
    .unwrap();
    let cfg = VisualizeConfig {
        img_shape: (16, 24),
        ..Default::default()
    };
    let app = vis.prepare(&cfg).unwrap();
    assert!(!app.overlays().image.visible);
    assert!(!app.overlays().text.visible);
}
