//! Example: latent space of synthetic modulated bursts
//!
//! What it demonstrates
//! - Building a `Visualizer` from x/y coordinates, labels and IQ signals.
//! - Hovering a point to see the spectrogram of its burst.
//! - Optionally loading the session settings from a JSON or YAML file.
//!
//! How to run
//! ```bash
//! RUST_LOG=info cargo run --example latent_space
//! RUST_LOG=debug cargo run --example latent_space -- settings.yaml
//! ```
//! Three blob-shaped clusters are drawn, one per modulation class (BASK,
//! 4PAM, 16QAM). Each burst is 1024 samples at a random centre frequency.

use std::f64::consts::PI;
use std::path::Path;

use latent_spectrograms::{Complex, IqSample, VisualizeConfig, Visualizer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const N_SAMPLES: usize = 25;
const BURST_LEN: usize = 1024;
const CLASSES: [&str; 3] = ["BASK", "4PAM", "16QAM"];

/// Random symbol of the given class, roughly unit average energy.
fn symbol(class: usize, rng: &mut StdRng) -> Complex<f64> {
    match class {
        // on-off keying
        0 => Complex::new(rng.gen_range(0..2) as f64 * 2f64.sqrt(), 0.0),
        1 => {
            let level = [-3.0, -1.0, 1.0, 3.0][rng.gen_range(0..4)];
            Complex::new(level / 5f64.sqrt(), 0.0)
        }
        _ => {
            let levels = [-3.0, -1.0, 1.0, 3.0];
            Complex::new(levels[rng.gen_range(0..4)], levels[rng.gen_range(0..4)]) / 10f64.sqrt()
        }
    }
}

/// Rectangular-pulse burst shifted to `cent_freq` (cycles/sample) with a
/// little white noise.
fn burst(
    class: usize,
    cent_freq: f64,
    bandwidth: f64,
    noise: &Normal<f64>,
    rng: &mut StdRng,
) -> Vec<IqSample> {
    let sps = (1.0 / bandwidth).round().max(1.0) as usize;
    let mut out = Vec::with_capacity(BURST_LEN);
    let mut current = symbol(class, rng);
    for n in 0..BURST_LEN {
        if n > 0 && n % sps == 0 {
            current = symbol(class, rng);
        }
        let mix = Complex::from_polar(1.0, 2.0 * PI * cent_freq * n as f64);
        let n_iq = Complex::new(noise.sample(rng), noise.sample(rng)) * 0.05;
        out.push(current * mix + n_iq);
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => VisualizeConfig::load_from_path(Path::new(&path))?,
        None => VisualizeConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let normal = Normal::new(0.0, 1.0)?;
    let centers: Vec<[f64; 2]> = (0..CLASSES.len())
        .map(|_| [rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)])
        .collect();

    let mut x = Vec::with_capacity(N_SAMPLES);
    let mut y = Vec::with_capacity(N_SAMPLES);
    let mut labels = Vec::with_capacity(N_SAMPLES);
    let mut signals = Vec::with_capacity(N_SAMPLES);
    for _ in 0..N_SAMPLES {
        let class = rng.gen_range(0..CLASSES.len());
        x.push(centers[class][0] + normal.sample(&mut rng));
        y.push(centers[class][1] + normal.sample(&mut rng));
        labels.push(CLASSES[class]);
        let cent_freq = rng.gen_range(-0.3..0.3);
        let bandwidth = rng.gen_range(0.2..0.3);
        signals.push(burst(class, cent_freq, bandwidth, &normal, &mut rng));
    }

    let vis = Visualizer::new(x, y, signals, labels)?;
    vis.visualize(cfg)?;
    Ok(())
}
