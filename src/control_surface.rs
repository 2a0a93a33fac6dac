//! The three draggable controls: saturation/value plane, hue strip, alpha strip.
//!
//! The plane and hue strip are rasterized to RGBA8 images and cached by size
//! (and hue, for the plane). The alpha strip is a gradient over a checkerboard.
//! Knob positions come from the controller; pointer input is reported back in
//! view-local pixels.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Shape, Stroke};
use floem::peniko::{self, Blob, Color, Gradient};

use floem::reactive::{RwSignal, SignalGet, create_effect};
use floem::views::Decorators;
use floem::{
    View, ViewId,
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
};
use floem_renderer::Renderer;

use crate::checkerboard;
use crate::constants;
use crate::controller::Snapshot;
use crate::geometry::ControlKind;
use crate::math;
use crate::position::ControlPositions;

/// Pointer activity on a control, in view-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SurfacePointer {
    Down { x: f64, y: f64, primary: bool },
    Move { x: f64, y: f64 },
    Up,
}

/// Saturation along x, value down y, at full alpha.
fn rasterize_plane(width: u32, height: u32, hue: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let wx = (width - 1).max(1) as f64;
    let hy = (height - 1).max(1) as f64;
    for py in 0..height {
        let v = 1.0 - py as f64 / hy;
        let row_offset = (py * width * 4) as usize;
        for px in 0..width {
            let (r, g, b) = math::hsv_to_rgb(hue, px as f64 / wx, v);
            let offset = row_offset + (px * 4) as usize;
            buf[offset] = (r * 255.0 + 0.5) as u8;
            buf[offset + 1] = (g * 255.0 + 0.5) as u8;
            buf[offset + 2] = (b * 255.0 + 0.5) as u8;
            buf[offset + 3] = 255;
        }
    }
    buf
}

/// Full hue sweep from top (0°) to bottom (360°).
fn rasterize_hue(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    let hy = (height - 1).max(1) as f64;
    for py in 0..height {
        let (r, g, b) = math::hsv_to_rgb(py as f64 / hy, 1.0, 1.0);
        let rgba = [
            (r * 255.0 + 0.5) as u8,
            (g * 255.0 + 0.5) as u8,
            (b * 255.0 + 0.5) as u8,
            255,
        ];
        for px in 0..width {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&rgba);
        }
    }
    buf
}

struct SurfaceUpdate {
    positions: ControlPositions,
    length: f64,
}

pub(crate) struct ControlSurface {
    id: ViewId,
    kind: ControlKind,
    held: bool,
    positions: ControlPositions,
    length: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_pointer: Box<dyn Fn(SurfacePointer)>,
    img: Option<peniko::Image>,
    img_hash: Vec<u8>,
    /// (width, height, quantized hue) the cached image was drawn for.
    cached_key: (u32, u32, u16),
}

/// Creates one control, sized from the snapshot's offset length.
pub(crate) fn control_surface(
    kind: ControlKind,
    snapshot: RwSignal<Snapshot>,
    on_pointer: impl Fn(SurfacePointer) + 'static,
) -> ControlSurface {
    let id = ViewId::new();

    create_effect(move |_| {
        let snap = snapshot.get();
        id.update_state(SurfaceUpdate {
            positions: snap.positions,
            length: snap.offset_length,
        });
    });

    let initial = snapshot.get_untracked();
    ControlSurface {
        id,
        kind,
        held: false,
        positions: initial.positions,
        length: initial.offset_length,
        size: Default::default(),
        on_pointer: Box::new(on_pointer),
        img: None,
        img_hash: Vec::new(),
        cached_key: (0, 0, u16::MAX),
    }
    .style(move |s| {
        let length = snapshot.get().offset_length as f32;
        let width = match kind {
            ControlKind::Plane => length,
            ControlKind::Hue | ControlKind::Alpha => constants::STRIP_WIDTH as f32,
        };
        s.width(width)
            .height(length)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ControlSurface {
    fn hue(&self) -> f64 {
        if self.length > 0.0 {
            self.positions.c2y / self.length
        } else {
            0.0
        }
    }

    fn ensure_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }
        let hue_key = match self.kind {
            ControlKind::Plane => (self.hue() * 3600.0).round() as u16,
            _ => 0,
        };
        let key = (pw, ph, hue_key);
        if self.img.is_some() && self.cached_key == key {
            return;
        }

        let pixels = match self.kind {
            ControlKind::Plane => rasterize_plane(pw, ph, self.hue()),
            ControlKind::Hue => rasterize_hue(pw, ph),
            ControlKind::Alpha => return,
        };
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);
        self.img_hash = blob.id().to_le_bytes().to_vec();
        self.img = Some(img);
        self.cached_key = key;
    }

    fn paint_knob(&self, cx: &mut PaintCx, w: f64) {
        let dark = Color::rgba8(0, 0, 0, 80);
        match self.kind {
            ControlKind::Plane => {
                let center = (self.positions.c1x, self.positions.c1y);
                let radius = constants::KNOB_RADIUS;
                cx.stroke(&Circle::new(center, radius), dark, &Stroke::new(1.0));
                cx.stroke(&Circle::new(center, radius - 1.5), Color::WHITE, &Stroke::new(2.0));
                cx.stroke(&Circle::new(center, radius - 3.0), dark, &Stroke::new(1.0));
            }
            ControlKind::Hue | ControlKind::Alpha => {
                let y = if self.kind == ControlKind::Hue {
                    self.positions.c2y
                } else {
                    self.positions.c3y
                };
                let half = constants::BAR_HEIGHT / 2.0;
                let bar = Rect::new(-1.0, y - half, w + 1.0, y + half).to_rounded_rect(half);
                cx.stroke(&bar, dark, &Stroke::new(1.0));
                let inner = Rect::new(0.0, y - half + 1.0, w, y + half - 1.0).to_rounded_rect(half - 1.0);
                cx.stroke(&inner, Color::WHITE, &Stroke::new(2.0));
            }
        }
    }
}

impl View for ControlSurface {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<SurfaceUpdate>() {
            self.positions = update.positions;
            self.length = update.length;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                (self.on_pointer)(SurfacePointer::Down {
                    x: e.pos.x,
                    y: e.pos.y,
                    primary: e.button.is_primary(),
                });
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    (self.on_pointer)(SurfacePointer::Move { x: e.pos.x, y: e.pos.y });
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) => {
                if self.held {
                    self.held = false;
                    (self.on_pointer)(SurfacePointer::Up);
                }
                EventPropagation::Continue
            }
            Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        if self.kind == ControlKind::Alpha {
            checkerboard::paint_checkerboard(cx, rect);
            let (r, g, b) = math::hsv_to_rgb(self.hue(), 1.0, 1.0);
            let solid = Color::rgba(r, g, b, 1.0);
            let clear = Color::rgba(r, g, b, 0.0);
            // Opaque (top) → transparent (bottom)
            let gradient = Gradient::new_linear((w / 2.0, 0.0), (w / 2.0, h)).with_stops([solid, clear]);
            // The vello Rect fast-path only supports solid colors.
            let path = rect.to_path(0.1);
            cx.fill(&path, &gradient, 0.0);
        } else {
            let scale = cx.scale();
            self.ensure_image(scale);
            if let Some(ref img) = self.img {
                cx.draw_img(
                    floem_renderer::Img {
                        img: img.clone(),
                        hash: &self.img_hash,
                    },
                    rect,
                );
            }
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));
        self.paint_knob(cx, w);
    }
}
