//! Error type shared by the data preparation and the window entry point.

use std::fmt;

/// Everything that can go wrong between constructing a [`crate::Visualizer`]
/// and closing its window.
#[derive(Debug)]
pub enum VisualizeError {
    /// No points were supplied.
    Empty,
    /// The positional input collections do not have the same length.
    LengthMismatch {
        x: usize,
        y: usize,
        signals: usize,
        labels: usize,
    },
    /// Signal `index` has fewer samples than one transform segment.
    SignalTooShort { index: usize, len: usize, nfft: usize },
    /// Segment length, overlap or sample rate are unusable.
    InvalidSpectrogramParams(String),
    /// The requested image shape has a zero dimension.
    InvalidImageShape { rows: usize, cols: usize },
    /// A colour map name that is not one of the built-in palettes.
    UnknownColormap(String),
    /// Reading or parsing a configuration file failed.
    Config(String),
    /// The native window could not be created or crashed.
    Gui(eframe::Error),
}

impl fmt::Display for VisualizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisualizeError::Empty => write!(f, "no points to visualize"),
            VisualizeError::LengthMismatch {
                x,
                y,
                signals,
                labels,
            } => write!(
                f,
                "input lengths differ: x={x}, y={y}, signals={signals}, labels={labels}"
            ),
            VisualizeError::SignalTooShort { index, len, nfft } => write!(
                f,
                "signal {index} has {len} samples, fewer than the segment length {nfft}"
            ),
            VisualizeError::InvalidSpectrogramParams(msg) => {
                write!(f, "invalid spectrogram parameters: {msg}")
            }
            VisualizeError::InvalidImageShape { rows, cols } => {
                write!(f, "invalid image shape {rows}x{cols}")
            }
            VisualizeError::UnknownColormap(name) => write!(f, "unknown colour map '{name}'"),
            VisualizeError::Config(msg) => write!(f, "configuration error: {msg}"),
            VisualizeError::Gui(e) => write!(f, "window error: {e}"),
        }
    }
}

impl std::error::Error for VisualizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisualizeError::Gui(e) => Some(e),
            _ => None,
        }
    }
}

impl From<eframe::Error> for VisualizeError {
    fn from(e: eframe::Error) -> Self {
        VisualizeError::Gui(e)
    }
}

pub type Result<T> = std::result::Result<T, VisualizeError>;
