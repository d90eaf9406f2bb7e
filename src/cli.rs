use std::path::PathBuf;

use clap::Parser;

use crate::constants::{FPS, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Parser)]
#[command(name = "hero-slider", version, about = "Rotating hero image slider")]
pub struct Cli {
    /// Image directory or TOML slide manifest
    pub source: PathBuf,

    #[arg(long, default_value_t = WINDOW_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,
}
