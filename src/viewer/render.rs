use carousel::{ObjectFit, ProgressBar, Rgba, Size, View};
use raylib::prelude::*;
use std::collections::HashMap;

pub const WINDOW_WIDTH: i32 = 960;           // Initial window width
pub const WINDOW_HEIGHT: i32 = 540;          // Initial window height
pub const FPS: u32 = 60;                     // Target frames per second

const MARGIN: f32 = 24.0;                    // Space around the track when it fills the window
const BUTTON_WIDTH: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 32.0;
const BUTTON_GAP: f32 = 12.0;
const PROGRESS_HEIGHT: f32 = 4.0;
const ALT_FONT_SIZE: i32 = 16;

/// On-screen controls, used as control binding handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Prev,
    Next,
    State,
}

pub struct Layout {
    pub track: Rectangle,
    pub buttons: [(Handle, Rectangle); 3],
}

impl Layout {
    /// Centers a fixed-size track, or fills the window when no size is set.
    pub fn fit(screen_width: f32, screen_height: f32, size: Option<Size>) -> Self {
        let controls_height = BUTTON_HEIGHT + BUTTON_GAP;
        let (width, height) = match size {
            Some(size) => (size.width, size.height),
            None => (
                (screen_width - 2.0 * MARGIN).max(1.0),
                (screen_height - 2.0 * MARGIN - controls_height).max(1.0),
            ),
        };
        let x = ((screen_width - width) * 0.5).floor();
        let y = ((screen_height - height - controls_height) * 0.5).floor();
        let track = Rectangle::new(x, y, width, height);

        let row_width = 3.0 * BUTTON_WIDTH + 2.0 * BUTTON_GAP;
        let row_x = x + (width - row_width) * 0.5;
        let row_y = y + height + BUTTON_GAP;
        let button = |i: f32| Rectangle::new(row_x + i * (BUTTON_WIDTH + BUTTON_GAP), row_y, BUTTON_WIDTH, BUTTON_HEIGHT);

        Self {
            track,
            buttons: [
                (Handle::Prev, button(0.0)),
                (Handle::State, button(1.0)),
                (Handle::Next, button(2.0)),
            ],
        }
    }

    pub fn button_at(&self, point: Vector2) -> Option<Handle> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.check_collision_point_rec(point))
            .map(|(handle, _)| *handle)
    }

    pub fn in_track(&self, point: Vector2) -> bool {
        self.track.check_collision_point_rec(point)
    }
}

/// Source and destination rectangles placing a `tex_w` x `tex_h` texture in `slot`.
pub fn fit_rects(fit: ObjectFit, tex_w: f32, tex_h: f32, slot: Rectangle) -> (Rectangle, Rectangle) {
    let full_source = Rectangle::new(0.0, 0.0, tex_w, tex_h);
    let contain = (slot.width / tex_w).min(slot.height / tex_h);
    let scale = match fit {
        ObjectFit::Fill => return (full_source, slot),
        ObjectFit::Contain => contain,
        ObjectFit::Cover => (slot.width / tex_w).max(slot.height / tex_h),
        ObjectFit::None => 1.0,
        ObjectFit::ScaleDown => contain.min(1.0),
    };

    // Crop whatever overflows the slot, keeping the image centered
    let src_w = tex_w.min(slot.width / scale);
    let src_h = tex_h.min(slot.height / scale);
    let source = Rectangle::new((tex_w - src_w) * 0.5, (tex_h - src_h) * 0.5, src_w, src_h);

    let dst_w = src_w * scale;
    let dst_h = src_h * scale;
    let dest = Rectangle::new(
        slot.x + (slot.width - dst_w) * 0.5,
        slot.y + (slot.height - dst_h) * 0.5,
        dst_w,
        dst_h,
    );
    (source, dest)
}

fn color(rgba: Rgba) -> Color {
    Color::new(rgba.r, rgba.g, rgba.b, rgba.a)
}

pub fn draw_carousel(
    d: &mut RaylibDrawHandle,
    layout: &Layout,
    view: &View<'_>,
    offset_px: f32,
    playing: bool,
    textures: &HashMap<String, Texture2D>,
) {
    let track = layout.track;
    {
        let mut s = d.begin_scissor_mode(track.x as i32, track.y as i32, track.width as i32, track.height as i32);
        s.draw_rectangle_rec(track, Color::DARKGRAY);

        for (i, slide) in view.slides.iter().enumerate() {
            let slot = Rectangle::new(track.x + i as f32 * track.width + offset_px, track.y, track.width, track.height);
            if let Some(background) = slide.item.background_color {
                s.draw_rectangle_rec(slot, color(background));
            }

            match textures.get(&slide.item.image) {
                Some(texture) => {
                    let fit = slide.item.object_fit.unwrap_or_default();
                    let (source, dest) = fit_rects(fit, texture.width() as f32, texture.height() as f32, slot);
                    s.draw_texture_pro(texture, source, dest, Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
                }
                None => {
                    let label = slide.item.alt.as_deref().unwrap_or(&slide.item.image);
                    s.draw_text(label, slot.x as i32 + 12, slot.y as i32 + 12, ALT_FONT_SIZE, Color::LIGHTGRAY);
                }
            }

            if slide.clickable && slide.item.link.is_some() {
                s.draw_rectangle_lines_ex(slot, 2.0, Color::SKYBLUE);
            }
        }

        if let Some(bar) = view.progress {
            draw_progress(&mut s, track, bar);
        }
    }

    for (handle, rect) in &layout.buttons {
        let label = match handle {
            Handle::Prev => "prev",
            Handle::Next => "next",
            Handle::State if playing => "pause",
            Handle::State => "play",
        };
        d.draw_rectangle_rec(*rect, Color::GRAY);
        d.draw_rectangle_lines_ex(*rect, 1.0, Color::LIGHTGRAY);
        d.draw_text(label, rect.x as i32 + 12, rect.y as i32 + 8, ALT_FONT_SIZE, Color::WHITE);
    }
}

fn draw_progress(d: &mut impl RaylibDraw, track: Rectangle, bar: ProgressBar) {
    let rect = Rectangle::new(
        track.x + bar.left * track.width,
        track.y,
        bar.width * track.width,
        PROGRESS_HEIGHT,
    );
    d.draw_rectangle_rec(rect, Color::new(255, 255, 255, 180));
}
