use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;

use carousel::{Carousel, ControlBindings, NavButtons, PointerEvent, Release};

mod viewer;

use crate::viewer::animator::TrackAnimator;
use crate::viewer::cli::Args;
use crate::viewer::render::{FPS, Handle, Layout, WINDOW_HEIGHT, WINDOW_WIDTH, draw_carousel};
use crate::viewer::texture_loader::load_texture_with_exif_rotation;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = viewer::load_config(&args)?;
    if config.items.is_empty() {
        bail!("no carousel items in {:?}", args.source);
    }
    let size = config.size;
    log::info!("showing {} items from {:?}", config.items.len(), args.source);

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Textures ---
    let mut textures = HashMap::new();
    for item in &config.items {
        if textures.contains_key(&item.image) {
            continue;
        }
        match load_texture_with_exif_rotation(&mut rl, &thread, Path::new(&item.image)) {
            Ok(texture) => {
                textures.insert(item.image.clone(), texture);
            }
            Err(e) => log::warn!("skipping texture for item {}: {e}", item.order),
        }
    }

    let clock = |rl: &RaylibHandle| Duration::from_secs_f64(rl.get_time());

    let mut carousel = Carousel::new(config, clock(&rl))
        .on_change_item(|item| log::info!("item changed to {} ({})", item.order, item.image))
        .on_change_state(|state| log::info!("autoplay {}", state.as_str()))
        .on_click(|event, item| log::info!("clicked item {} at ({}, {})", item.order, event.x, event.y));

    let bindings = ControlBindings::new(
        Some(NavButtons {
            prev: Handle::Prev,
            next: Handle::Next,
        }),
        Some(Handle::State),
    );
    let mut animator = TrackAnimator::new();
    let mut dragging = false;

    carousel.mount(clock(&rl));

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = clock(&rl);
        let layout = Layout::fit(rl.get_screen_width() as f32, rl.get_screen_height() as f32, size);
        carousel.set_container_width(layout.track.width);

        // 1. Input: buttons and keys first, then the mouse as a touch pointer
        let mouse = rl.get_mouse_position();
        let pressed = [
            (KeyboardKey::KEY_LEFT, Handle::Prev),
            (KeyboardKey::KEY_RIGHT, Handle::Next),
            (KeyboardKey::KEY_SPACE, Handle::State),
        ]
        .into_iter()
        .filter(|(key, _)| rl.is_key_pressed(*key))
        .map(|(_, handle)| handle)
        .chain(
            rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT)
                .then(|| layout.button_at(mouse))
                .flatten(),
        )
        .collect::<Vec<_>>();
        for handle in pressed {
            bindings.dispatch(&handle, &mut carousel, now);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && layout.in_track(mouse) {
            dragging = carousel.touch_start(mouse.x, now);
        } else if dragging && rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
            carousel.touch_move(mouse.x);
        } else if dragging && rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            dragging = false;
            if carousel.touch_end(now) == Release::Tap {
                let event = PointerEvent {
                    x: mouse.x - layout.track.x,
                    y: mouse.y - layout.track.y,
                };
                if let Some(link) = carousel.activate(event) {
                    let target = if link.new_tab { "new tab" } else { "same tab" };
                    log::info!("follow {} in {target}", link.href);
                }
            }
        }

        // 2. Time sources: autoplay wakes, frame work, slide transition
        carousel.update(now);
        if let Some(id) = animator.update(carousel.style(), now) {
            carousel.complete_transition(id);
        }

        // 3. Render
        let view = carousel.view();
        let offset = view
            .gesture_transform
            .unwrap_or_else(|| animator.transform())
            .to_pixels(layout.track.width);
        let playing = carousel.is_playing();

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        draw_carousel(&mut d, &layout, &view, offset, playing, &textures);
    }

    carousel.dispose();
    Ok(())
}
