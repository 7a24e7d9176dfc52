//! Named colour maps for scatter points and spectrogram images.
//!
//! Each palette is stored as nine evenly spaced stops sampled from the
//! published tables and linearly interpolated in between.

use std::fmt;
use std::str::FromStr;

use egui::{Color32, ColorImage};
use serde::{Deserialize, Serialize};

use crate::data::resize::SpectrogramImage;
use crate::error::VisualizeError;

/// Built-in colour maps, addressed by their usual lowercase names.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    #[default]
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    /// Black to white.
    Gray,
    /// White to black.
    Greys,
}

const VIRIDIS: [u32; 9] = [
    0x440154, 0x472d7b, 0x3b528b, 0x2c728e, 0x21908c, 0x27ad81, 0x5dc863, 0xaadc32, 0xfde725,
];
const PLASMA: [u32; 9] = [
    0x0d0887, 0x4c02a1, 0x7e03a8, 0xa92395, 0xcc4678, 0xe56b5d, 0xf89441, 0xfdc328, 0xf0f921,
];
const INFERNO: [u32; 9] = [
    0x000004, 0x1b0c41, 0x4a0c6b, 0x781c6d, 0xa52c60, 0xcf4446, 0xed6925, 0xfb9b06, 0xfcffa4,
];
const MAGMA: [u32; 9] = [
    0x000004, 0x1d1147, 0x51127c, 0x822681, 0xb63679, 0xe65164, 0xfb8861, 0xfec287, 0xfcfdbf,
];
const CIVIDIS: [u32; 9] = [
    0x00224e, 0x233e6c, 0x434e6c, 0x5e626e, 0x7c7b78, 0x9b9477, 0xbcaf6f, 0xdeca59, 0xfee838,
];
const GRAY: [u32; 2] = [0x000000, 0xffffff];
const GREYS: [u32; 2] = [0xffffff, 0x000000];

impl Colormap {
    pub fn all() -> &'static [Colormap] {
        &[
            Colormap::Viridis,
            Colormap::Plasma,
            Colormap::Inferno,
            Colormap::Magma,
            Colormap::Cividis,
            Colormap::Gray,
            Colormap::Greys,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
            Colormap::Inferno => "inferno",
            Colormap::Magma => "magma",
            Colormap::Cividis => "cividis",
            Colormap::Gray => "gray",
            Colormap::Greys => "greys",
        }
    }

    fn stops(&self) -> &'static [u32] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Inferno => &INFERNO,
            Colormap::Magma => &MAGMA,
            Colormap::Cividis => &CIVIDIS,
            Colormap::Gray => &GRAY,
            Colormap::Greys => &GREYS,
        }
    }

    /// Colour at position `t` (clamped to `0.0..=1.0`; NaN maps to the start).
    pub fn color_at(&self, t: f32) -> Color32 {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f32;
        let lo = (scaled as usize).min(stops.len() - 2);
        let frac = scaled - lo as f32;
        let [r0, g0, b0] = rgb(stops[lo]);
        let [r1, g1, b1] = rgb(stops[lo + 1]);
        Color32::from_rgb(
            lerp_u8(r0, r1, frac),
            lerp_u8(g0, g1, frac),
            lerp_u8(b0, b1, frac),
        )
    }

    /// Colour an image, stretching its value range linearly over the map.
    ///
    /// A constant image takes the colour at the start of the map.
    pub fn colorize(&self, image: &SpectrogramImage) -> ColorImage {
        let (lo, hi) = image.value_range();
        let span = hi - lo;
        let mut rgba = Vec::with_capacity(image.pixels.len() * 4);
        for &v in &image.pixels {
            let t = if span > 0.0 { (v - lo) / span } else { 0.0 };
            let c = self.color_at(t);
            rgba.extend_from_slice(&[c.r(), c.g(), c.b(), 255]);
        }
        ColorImage::from_rgba_unmultiplied([image.cols, image.rows], &rgba)
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Colormap {
    type Err = VisualizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "plasma" => Ok(Colormap::Plasma),
            "inferno" => Ok(Colormap::Inferno),
            "magma" => Ok(Colormap::Magma),
            "cividis" => Ok(Colormap::Cividis),
            "gray" | "grey" => Ok(Colormap::Gray),
            "greys" => Ok(Colormap::Greys),
            _ => Err(VisualizeError::UnknownColormap(s.to_string())),
        }
    }
}

fn rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

fn lerp_u8(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}
