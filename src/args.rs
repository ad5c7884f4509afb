use std::path::PathBuf;

use clap::Parser;

use portfolio_fx::constants::{AUTOPLAY_INTERVAL, FPS, MIN_AUTOPLAY_INTERVAL};

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "One-page portfolio with an auto-playing certificate carousel")]
pub struct Args {
    /// Directory holding the certificate images (png, jpg, jpeg, bmp, gif)
    pub image_directory: Option<PathBuf>,

    /// Seconds between automatic carousel advances
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL, value_parser = parse_interval)]
    pub interval: f32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Behave like a touch device from the start (no cursor glow). Without it
    /// the glow is hidden once the first touch is seen.
    #[arg(long)]
    pub touch: bool,
}

fn parse_interval(value: &str) -> Result<f32, String> {
    let interval: f32 = value.parse().map_err(|e| format!("{}", e))?;
    if interval.is_finite() && interval >= MIN_AUTOPLAY_INTERVAL {
        Ok(interval)
    } else {
        Err(format!("interval must be at least {} seconds", MIN_AUTOPLAY_INTERVAL))
    }
}
