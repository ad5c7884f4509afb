use std::path::Path;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rand::Rng;
use raylib::prelude::*;

mod args;

use crate::args::Args;
use portfolio_fx::carousel::slide::{Slide, SlideContent, SlideDeck};
use portfolio_fx::constants::*;
use portfolio_fx::page::Page;
use portfolio_fx::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const PLACEHOLDER_COUNT: usize = 5;

fn load_image_slides(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> Result<Vec<Slide>> {
    let mut slides = Vec::new();
    for path in load_sorted_image_paths(dir)? {
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => slides.push(Slide::new(SlideContent::Image(texture))),
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    Ok(slides)
}

fn placeholder_slides() -> Vec<Slide> {
    let mut rng = rand::rng();
    (0..PLACEHOLDER_COUNT)
        .map(|i| {
            let hue = rng.random_range(0.0..360.0);
            Slide::new(SlideContent::Placeholder {
                title: format!("Certificate {}", i + 1),
                color: Color::color_from_hsv(hue, 0.45, 0.55),
            })
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Portfolio")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = match args.image_directory.as_deref() {
        Some(dir) => match load_image_slides(&mut rl, &thread, dir) {
            Ok(slides) => slides,
            Err(e) => {
                warn!("{:#}", e);
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    if slides.is_empty() {
        info!("Using {} placeholder certificates", PLACEHOLDER_COUNT);
        slides = placeholder_slides();
    } else {
        info!("Loaded {} certificates", slides.len());
    }

    let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
    let mut page = Page::new(SlideDeck::new(slides), args.interval, args.touch, width, height);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        page.update(&mut rl, dt);

        let mut d = rl.begin_drawing(&thread);
        page.draw(&mut d);
    }

    info!("Window closed");
    Ok(())
}
