//! Scatter rendering and hover interaction for `LatentSpaceApp`.
//!
//! - drawing one point series per label class (so the legend lists classes)
//! - turning pointer-motion events into overlay state changes
//! - painting the image and text overlays on top of the plot

use egui::{
    pos2, vec2, Color32, Event, FontId, Id, LayerId, Order, Pos2, Rect, Stroke, StrokeKind,
    TextureOptions,
};
use egui_plot::{Legend, Plot, PlotPoint, PlotResponse, Points};

use super::{LatentSpaceApp, MARKER_RADIUS};
use crate::hover::{hit_test, image_rect, text_position, HoverState};

const LABEL_FONT_SIZE: f32 = 14.0;

impl LatentSpaceApp {
    /// Draw the scatter plot. The view is fitted to the data extent on the
    /// first frame and left to the user afterwards.
    pub(super) fn plot_scatter(&mut self, ui: &mut egui::Ui) -> PlotResponse<()> {
        let (xmin, xmax) = padded_range(self.points.x_range());
        let (ymin, ymax) = padded_range(self.points.y_range());

        // the hover overlays replace egui_plot's coordinate readout
        let plot = Plot::new("latent_scatter")
            .legend(Legend::default())
            .allow_boxed_zoom(true)
            .show_x(false)
            .show_y(false);

        plot.show(ui, |plot_ui| {
            if self.bounds_pending {
                plot_ui.set_plot_bounds_x(xmin..=xmax);
                plot_ui.set_plot_bounds_y(ymin..=ymax);
                self.bounds_pending = false;
            }

            for (code, class) in self.encoding.classes.iter().enumerate() {
                let pts: Vec<[f64; 2]> = self
                    .encoding
                    .members(code)
                    .map(|i| self.points.position(i))
                    .collect();
                let color = self.cmap.color_at(self.encoding.color_fraction(code));
                plot_ui.points(
                    Points::new(class.as_str(), pts)
                        .radius(MARKER_RADIUS)
                        .filled(true)
                        .color(color),
                );
            }
        })
    }

    /// Run the hover handler once for every pointer-motion event of this
    /// frame.
    pub(super) fn handle_pointer_motion(
        &mut self,
        ctx: &egui::Context,
        plot_response: &PlotResponse<()>,
    ) {
        let motions: Vec<Option<Pos2>> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    Event::PointerMoved(pos) => Some(Some(*pos)),
                    Event::PointerGone => Some(None),
                    _ => None,
                })
                .collect()
        });
        if motions.is_empty() {
            return;
        }

        let transform = &plot_response.transform;
        let plot_rect = *transform.frame();
        let screen: Vec<Pos2> = (0..self.points.len())
            .map(|i| {
                let [x, y] = self.points.position(i);
                transform.position_from_point(&PlotPoint::new(x, y))
            })
            .collect();

        for pointer in motions {
            let hit = pointer
                .filter(|p| plot_rect.contains(*p))
                .and_then(|p| hit_test(p, screen.iter().copied(), self.pick_radius));
            let outcome = self.overlays.on_pointer_motion(hit, &self.points, ctx);
            if outcome.content_changed {
                if let HoverState::Showing(i) = outcome.state {
                    self.load_hover_image(ctx, i);
                }
            }
        }
    }

    /// Upload the colourised image of point `index` into the hover texture.
    fn load_hover_image(&mut self, ctx: &egui::Context, index: usize) {
        let Some(image) = self.images.get(index) else {
            log::warn!("no cached image for point {index}");
            return;
        };
        let colored = self.cmap.colorize(image);
        match &mut self.hover_texture {
            Some(tex) => tex.set(colored, TextureOptions::NEAREST),
            None => {
                self.hover_texture =
                    Some(ctx.load_texture("hover_spectrogram", colored, TextureOptions::NEAREST));
            }
        }
    }

    /// Paint whichever overlays are visible, anchored at their plot
    /// coordinates.
    pub(super) fn paint_overlays(&self, ctx: &egui::Context, plot_response: &PlotResponse<()>) {
        let transform = &plot_response.transform;
        let painter = ctx.layer_painter(LayerId::new(
            Order::Foreground,
            Id::new("latent_hover_overlays"),
        ));
        let shape = self.images.shape();
        let visuals = ctx.style().visuals.clone();
        let frame_stroke = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);

        let image = &self.overlays.image;
        if image.visible {
            if let Some(tex) = &self.hover_texture {
                let [x, y] = image.anchor;
                let anchor = transform.position_from_point(&PlotPoint::new(x, y));
                let rect = image_rect(anchor, shape);
                let framed = rect.expand(3.0);
                painter.rect_filled(framed, 2.0, visuals.window_fill);
                painter.rect_stroke(framed, 2.0, frame_stroke, StrokeKind::Outside);
                painter.image(
                    tex.id(),
                    rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        }

        let text = &self.overlays.text;
        if text.visible {
            let [x, y] = text.anchor;
            let anchor = transform.position_from_point(&PlotPoint::new(x, y));
            let galley = painter.layout_no_wrap(
                text.text.clone(),
                FontId::proportional(LABEL_FONT_SIZE),
                visuals.text_color(),
            );
            let top = text_position(anchor, shape);
            let boxed = Rect::from_min_size(
                pos2(top.x - galley.size().x / 2.0, top.y + 4.0),
                galley.size(),
            )
            .expand(4.0);
            painter.rect_filled(boxed, 2.0, visuals.window_fill);
            painter.rect_stroke(boxed, 2.0, frame_stroke, StrokeKind::Outside);
            painter.galley(boxed.min + vec2(4.0, 4.0), galley, visuals.text_color());
        }
    }

    pub(super) fn status_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| match self.overlays.state() {
            HoverState::Showing(i) => {
                let [x, y] = self.points.position(i);
                ui.label(format!(
                    "{} {}  (x = {:.3}, y = {:.3})",
                    egui_phosphor::regular::WAVEFORM,
                    self.points.labels[i],
                    x,
                    y
                ));
            }
            HoverState::Hidden => {
                ui.label(format!(
                    "{} {} points in {} classes, hover a point to see its spectrogram",
                    egui_phosphor::regular::CURSOR,
                    self.points.len(),
                    self.encoding.class_count()
                ));
            }
        });
    }
}

/// Data extent as plot bounds; a zero-width extent is widened to one unit.
fn padded_range((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use egui::{pos2, vec2, CentralPanel, Context, Event, Pos2, RawInput, Rect};
    use egui_plot::PlotPoint;

    use crate::app::LatentSpaceApp;
    use crate::colormap::Colormap;
    use crate::config::VisualizeConfig;
    use crate::data::signal::iq_from_real;
    use crate::hover::HoverState;
    use crate::visualizer::Visualizer;

    /// Headless egui session around a three-point app: (0,0) "A", (1,1) "B",
    /// (2,2) "A".
    struct Session {
        ctx: Context,
        app: LatentSpaceApp,
        /// Screen positions of the points as of the last frame.
        screen: Vec<Pos2>,
        /// Plot frame as of the last frame.
        frame: Rect,
    }

    impl Session {
        fn new() -> Self {
            let tone: Vec<f64> = (0..600).map(|n| (0.3 * n as f64).sin()).collect();
            let vis = Visualizer::new(
                vec![0.0, 1.0, 2.0],
                vec![0.0, 1.0, 2.0],
                vec![iq_from_real(&tone); 3],
                vec!["A", "B", "A"],
            )
            .unwrap();
            let app = vis
                .prepare(&VisualizeConfig::new((8, 8), Colormap::Viridis, "test"))
                .unwrap();
            let mut session = Self {
                ctx: Context::default(),
                app,
                screen: Vec::new(),
                frame: Rect::NOTHING,
            };
            // first frame fits the bounds, second one settles the layout
            session.frame_with(Vec::new());
            session.frame_with(Vec::new());
            session
        }

        fn frame_with(&mut self, events: Vec<Event>) {
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
                events,
                ..Default::default()
            };
            let Self {
                ctx,
                app,
                screen,
                frame,
            } = self;
            let _ = ctx.run(input, |ctx| {
                CentralPanel::default().show(ctx, |ui| {
                    let response = app.plot_scatter(ui);
                    app.handle_pointer_motion(ctx, &response);
                    *frame = *response.transform.frame();
                    *screen = (0..app.points.len())
                        .map(|i| {
                            let [x, y] = app.points.position(i);
                            response
                                .transform
                                .position_from_point(&PlotPoint::new(x, y))
                        })
                        .collect();
                });
            });
        }

        fn move_to(&mut self, pos: Pos2) {
            self.frame_with(vec![Event::PointerMoved(pos)]);
        }

        fn state(&self) -> HoverState {
            self.app.overlays.state()
        }
    }

    #[test]
    fn points_project_inside_the_plot_frame() {
        let s = Session::new();
        assert_eq!(s.screen.len(), 3);
        for p in &s.screen {
            assert!(s.frame.contains(*p), "{p:?} outside {:?}", s.frame);
        }
        // y grows upwards in the plot and downwards on screen
        assert!(s.screen[0].x < s.screen[1].x && s.screen[1].x < s.screen[2].x);
        assert!(s.screen[0].y > s.screen[1].y && s.screen[1].y > s.screen[2].y);
    }

    #[test]
    fn pointer_on_a_point_shows_its_overlays() {
        let mut s = Session::new();
        s.move_to(s.screen[1]);
        assert_eq!(s.state(), HoverState::Showing(1));
        assert_eq!(s.app.overlays.text.text, "B");
        assert!(s.app.overlays.text.visible);
        assert_eq!(s.app.overlays.image.anchor, [1.0, 1.0]);
        assert!(s.app.hover_texture.is_some());

        s.move_to(s.screen[2]);
        assert_eq!(s.state(), HoverState::Showing(2));
        assert_eq!(s.app.overlays.text.text, "A");
    }

    #[test]
    fn moving_away_hides_the_overlays() {
        let mut s = Session::new();
        s.move_to(s.screen[1]);
        assert_eq!(s.state(), HoverState::Showing(1));

        s.move_to(s.screen[1] + vec2(40.0, 0.0));
        assert_eq!(s.state(), HoverState::Hidden);
        assert!(!s.app.overlays.image.visible);
        assert!(!s.app.overlays.text.visible);
    }

    #[test]
    fn pointer_gone_hides_the_overlays() {
        let mut s = Session::new();
        s.move_to(s.screen[0]);
        assert_eq!(s.state(), HoverState::Showing(0));

        s.frame_with(vec![Event::PointerGone]);
        assert_eq!(s.state(), HoverState::Hidden);
    }

    #[test]
    fn pointer_outside_the_plot_frame_is_a_miss() {
        let mut s = Session::new();
        s.move_to(s.screen[2]);
        assert_eq!(s.state(), HoverState::Showing(2));

        let outside = pos2(1.0, 1.0);
        assert!(!s.frame.contains(outside));
        s.move_to(outside);
        assert_eq!(s.state(), HoverState::Hidden);
    }

    #[test]
    fn last_motion_of_a_frame_wins() {
        let mut s = Session::new();
        let events = vec![
            Event::PointerMoved(s.screen[0]),
            Event::PointerMoved(s.screen[1]),
        ];
        s.frame_with(events);
        assert_eq!(s.state(), HoverState::Showing(1));
        assert_eq!(s.app.overlays.text.text, "B");
    }
}
