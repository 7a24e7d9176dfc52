//! eframe application showing the latent-space scatter plot.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`plot`]   | Scatter rendering, pointer-motion handling and overlay painting |
//! | [`run`]    | Native window setup and the blocking event loop |

mod plot;
mod run;

pub use run::run_visualizer;

use eframe::egui;

use crate::colormap::Colormap;
use crate::data::images::ImageStack;
use crate::data::labels::LabelEncoding;
use crate::data::signal::LatentPoints;
use crate::hover::HoverOverlays;

/// Marker radius of the scatter points in screen pixels.
pub const MARKER_RADIUS: f32 = 4.0;

/// Application state for one visualization session.
///
/// Everything is built before the window opens; only the overlays and the
/// hover texture change while it is shown.
pub struct LatentSpaceApp {
    pub(crate) points: LatentPoints,
    pub(crate) images: ImageStack,
    pub(crate) encoding: LabelEncoding,
    pub(crate) cmap: Colormap,
    pub(crate) title: String,

    /// Shared state of the image and text overlays.
    pub(crate) overlays: HoverOverlays,
    /// Texture holding the image of the point currently shown.
    pub(crate) hover_texture: Option<egui::TextureHandle>,
    /// Pick radius in screen pixels.
    pub(crate) pick_radius: f32,
    /// Fit the view to the data extent on the next frame.
    pub(crate) bounds_pending: bool,
}

impl LatentSpaceApp {
    pub fn new(
        points: LatentPoints,
        images: ImageStack,
        encoding: LabelEncoding,
        cmap: Colormap,
        title: impl Into<String>,
    ) -> Self {
        Self {
            points,
            images,
            encoding,
            cmap,
            title: title.into(),
            overlays: HoverOverlays::new(),
            hover_texture: None,
            pick_radius: MARKER_RADIUS + crate::hover::PICK_TOLERANCE,
            bounds_pending: true,
        }
    }

    /// Current overlay state (read-only view for embedding code).
    pub fn overlays(&self) -> &HoverOverlays {
        &self.overlays
    }
}

impl eframe::App for LatentSpaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("latent_status").show(ctx, |ui| {
            self.status_line(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.title);
            });
            let plot_response = self.plot_scatter(ui);
            self.handle_pointer_motion(ctx, &plot_response);
            self.paint_overlays(ctx, &plot_response);
        });
    }
}
