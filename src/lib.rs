//! Latent-space scatter plots with hoverable spectrograms, built on egui/eframe.
//!
//! Each plotted point stands for an IQ signal. Before the window opens every
//! signal is turned into a small power-spectrogram image; while it is open,
//! hovering a point shows that image and the point's label next to it.
//!
//! Modules:
//! - `data`: input points, spectrogram computation, image cache, label codes
//! - `colormap`: named colour maps
//! - `hover`: hit-testing and the overlay state machine
//! - `app`: the eframe application
//! - `config`: session settings
//! - `visualizer`: the `Visualizer` entry point

pub mod app;
pub mod colormap;
pub mod config;
pub mod data;
pub mod error;
pub mod hover;
pub mod visualizer;

// Public re-exports for a compact external API
pub use app::LatentSpaceApp;
pub use colormap::Colormap;
pub use config::VisualizeConfig;
pub use data::images::ImageStack;
pub use data::labels::{encode_labels, LabelEncoding};
pub use data::resize::SpectrogramImage;
pub use data::signal::{iq_from_pairs, iq_from_real, Complex, IqSample, LatentPoints};
pub use data::spectrogram::{Sides, Spectrogram, SpectrogramParams};
pub use data::window::FftWindow;
pub use error::VisualizeError;
pub use hover::{HoverOverlays, HoverState};
pub use visualizer::Visualizer;
