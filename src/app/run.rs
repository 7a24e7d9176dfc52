//! Native window entry point.
//!
//! [`run_visualizer`] opens an eframe window around a prepared
//! [`LatentSpaceApp`] and blocks until the window is closed.

use eframe::egui;

use super::LatentSpaceApp;
use crate::config::VisualizeConfig;
use crate::error::Result;

/// Show `app` in a native window.
///
/// Window title and options come from `cfg`; when no size is given the
/// window opens at 900 x 700.
pub fn run_visualizer(app: LatentSpaceApp, mut cfg: VisualizeConfig) -> Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    if opts.viewport.icon.is_none() {
        match load_app_icon_svg() {
            Some(icon) => {
                opts.viewport = opts.viewport.clone().with_icon(icon);
            }
            None => log::warn!("window icon could not be loaded"),
        }
    }

    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 700.0));
    }

    log::info!("opening '{title}' with {} points", app.points.len());
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
fn load_app_icon_svg() -> Option<egui::IconData> {
    let data = include_bytes!("../../icon.svg");

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size.width(),
        height: size.height(),
    })
}
