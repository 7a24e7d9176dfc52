//! Hover annotations: hit-testing the pointer against plotted points and the
//! shared HIDDEN/SHOWING state of the image and text overlays.
//!
//! Nothing in here paints. The app feeds screen positions in
//! and paints whatever the overlays say afterwards, which keeps the whole
//! interaction testable without a window.

use egui::{Pos2, Rect, Vec2};

use crate::data::signal::LatentPoints;

/// Extra pixels around a marker that still count as a hit.
pub const PICK_TOLERANCE: f32 = 2.0;

/// Screen pixels between the bottom of the image and the top of the label.
pub const LABEL_GAP: f32 = 8.0;

/// Anything that can be asked to redraw the plot.
pub trait Repaint {
    fn request_repaint(&self);
}

impl Repaint for egui::Context {
    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

/// Combined state of both overlays; they always transition together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverState {
    Hidden,
    /// Showing the annotation of the point with this index.
    Showing(usize),
}

/// Spectrogram image drawn over the plot.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOverlay {
    pub visible: bool,
    /// Plot coordinate the image is centred on.
    pub anchor: [f64; 2],
    /// Index into the image stack of the image being shown.
    pub image: Option<usize>,
}

/// Label drawn under the image.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub visible: bool,
    pub anchor: [f64; 2],
    pub text: String,
}

/// What a pointer-motion event did to the overlays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MotionOutcome {
    pub state: HoverState,
    /// The displayed point differs from the one shown before the event, so
    /// the image texture needs to be refreshed.
    pub content_changed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverOverlays {
    pub image: ImageOverlay,
    pub text: TextOverlay,
}

impl Default for HoverOverlays {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverOverlays {
    /// Both overlays hidden and anchored at the origin.
    pub fn new() -> Self {
        Self {
            image: ImageOverlay {
                visible: false,
                anchor: [0.0, 0.0],
                image: None,
            },
            text: TextOverlay {
                visible: false,
                anchor: [0.0, 0.0],
                text: String::new(),
            },
        }
    }

    pub fn state(&self) -> HoverState {
        match (self.image.visible, self.image.image) {
            (true, Some(i)) => HoverState::Showing(i),
            _ => HoverState::Hidden,
        }
    }

    /// Handle one pointer-motion event.
    ///
    /// `hit` is the index of the point under the pointer, if any. On a hit
    /// both overlays move to that point and take its image and label; on a
    /// miss both are hidden. A redraw is requested in either case.
    pub fn on_pointer_motion<R: Repaint + ?Sized>(
        &mut self,
        hit: Option<usize>,
        points: &LatentPoints,
        repaint: &R,
    ) -> MotionOutcome {
        let before = self.state();
        match hit {
            Some(i) => {
                let anchor = points.position(i);
                self.image.anchor = anchor;
                self.image.image = Some(i);
                self.image.visible = true;

                self.text.anchor = anchor;
                if self.text.text != points.labels[i] {
                    self.text.text.clone_from(&points.labels[i]);
                }
                self.text.visible = true;
            }
            None => {
                self.image.visible = false;
                self.text.visible = false;
            }
        }
        repaint.request_repaint();

        let state = self.state();
        let content_changed = match (before, state) {
            (HoverState::Showing(a), HoverState::Showing(b)) => a != b,
            (_, HoverState::Showing(_)) => true,
            _ => false,
        };
        if content_changed {
            log::trace!("hover -> {:?}", state);
        }
        MotionOutcome {
            state,
            content_changed,
        }
    }
}

/// Index of the first point (in plotting order) whose pick disc contains
/// `pointer`.
pub fn hit_test<I>(pointer: Pos2, screen_points: I, pick_radius: f32) -> Option<usize>
where
    I: IntoIterator<Item = Pos2>,
{
    let r2 = pick_radius * pick_radius;
    screen_points
        .into_iter()
        .position(|p| p.distance_sq(pointer) <= r2)
}

/// Screen rectangle of an image overlay of `shape` (`rows`, `cols`) centred on
/// `anchor`.
pub fn image_rect(anchor: Pos2, shape: (usize, usize)) -> Rect {
    Rect::from_center_size(anchor, Vec2::new(shape.1 as f32, shape.0 as f32))
}

/// Top centre of the label box: just below the bottom edge of the image
/// overlay, clear of its frame.
pub fn text_position(anchor: Pos2, shape: (usize, usize)) -> Pos2 {
    anchor + Vec2::new(0.0, shape.0 as f32 / 2.0 + LABEL_GAP)
}
