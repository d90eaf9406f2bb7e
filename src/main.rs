use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hero_slider::cli::Cli;
use hero_slider::engine::HeroEngine;
use hero_slider::source::discover;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    // --- Discover Slides ---
    let entries = discover(&cli.source)
        .with_context(|| format!("failed to load slides from {}", cli.source.display()))?;
    if entries.is_empty() {
        info!(source = %cli.source.display(), "no slides found, nothing to show");
        return Ok(());
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Hero Slider")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(cli.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = HeroEngine::initialize(&mut rl, &thread, entries);
    if engine.slide_count() == 0 {
        info!("no slide could be loaded, nothing to show");
        return Ok(());
    }

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or(Duration::ZERO);
        engine.update(&rl, dt);
        engine.render_frame(&mut rl, &thread);
    }

    Ok(())
}
