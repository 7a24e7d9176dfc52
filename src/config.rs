//! Configuration for [`crate::Visualizer::visualize`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colormap::Colormap;
use crate::error::{Result, VisualizeError};

/// Settings for one visualization session.
///
/// | Field            | Default          |
/// |------------------|------------------|
/// | `img_shape`      | `(100, 100)`     |
/// | `cmap`           | `viridis`        |
/// | `title`          | `"Latent space"` |
///
/// `native_options` is never (de)serialised.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizeConfig {
    /// Shape `(rows, cols)` of the hover spectrogram images.
    pub img_shape: (usize, usize),
    /// Colour map for the scatter points and the spectrogram images.
    pub cmap: Colormap,
    /// Plot title; also used as the window title.
    pub title: String,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            img_shape: (100, 100),
            cmap: Colormap::Viridis,
            title: "Latent space".to_string(),
            native_options: None,
        }
    }
}

impl std::fmt::Debug for VisualizeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisualizeConfig")
            .field("img_shape", &self.img_shape)
            .field("cmap", &self.cmap)
            .field("title", &self.title)
            .field("native_options", &self.native_options.is_some())
            .finish()
    }
}

impl VisualizeConfig {
    pub fn new(img_shape: (usize, usize), cmap: Colormap, title: impl Into<String>) -> Self {
        Self {
            img_shape,
            cmap,
            title: title.into(),
            native_options: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| VisualizeError::Config(e.to_string()))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| VisualizeError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| VisualizeError::Config(e.to_string()))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .map_err(|e| VisualizeError::Config(format!("{}: {e}", path.display())))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&txt),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&txt),
            _ => Err(VisualizeError::Config(format!(
                "{}: expected a .json, .yaml or .yml file",
                path.display()
            ))),
        }
    }
}
