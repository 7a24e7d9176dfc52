//! Data preparation: input points, spectrogram images and label codes.
//!
//! Everything here runs once, synchronously, before the window opens.

pub mod images;
pub mod labels;
pub mod resize;
pub mod signal;
pub mod spectrogram;
pub mod window;
